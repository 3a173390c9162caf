//! Array containers crossing the export boundary
//!
//! Three shapes of the same data, one per ownership stage:
//!
//! - [`TypedArray`] — host-owned elements plus a recorded `i32` length,
//!   produced by the array marshaler and embedded in descriptors.
//! - [`BoundaryArray`] — a borrowed `#[repr(C)]` pointer+length view of a
//!   `TypedArray`, the form the native exporter actually reads.
//! - [`NativeArray`] — a raw handle over memory the *exporter* allocated,
//!   which the host may copy out of exactly once and must release exactly
//!   once.
//!
//! Layout is a wire contract: every `#[repr(C)]` type here has an explicit
//! field order (pointer first, then `i32` length) that must match the native
//! side's `DataTypes` headers.

use std::ffi::c_void;
use std::marker::PhantomData;

use crate::foundation::math::{Color, Vec2, Vec3, Vec4};

/// Host-owned array with its boundary-visible length
///
/// Invariant: `length` always equals `elements.len()`. The only constructors
/// are the array marshaler (`marshal::to_boundary_layout`,
/// `marshal::from_boundary_layout`) and [`TypedArray::empty`], so a
/// mismatched length cannot be hand-built.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedArray<T> {
    elements: Vec<T>,
    length: i32,
}

/// Array of `i32` elements
pub type IntArray = TypedArray<i32>;
/// Array of `f32` elements
pub type FloatArray = TypedArray<f32>;
/// Array of 2D vectors
pub type Vec2Array = TypedArray<Vec2>;
/// Array of 3D vectors
pub type Vec3Array = TypedArray<Vec3>;
/// Array of 4D vectors
pub type Vec4Array = TypedArray<Vec4>;
/// Array of linear float colors
pub type ColorArray = TypedArray<Color>;
/// Array of raw bytes
pub type ByteArray = TypedArray<u8>;

impl<T> TypedArray<T> {
    /// Construct from an owned vector, recording its length
    ///
    /// Crate-internal: callers outside the marshaler go through
    /// `marshal::to_boundary_layout`.
    pub(crate) fn from_vec(elements: Vec<T>) -> Self {
        let length = i32::try_from(elements.len())
            .expect("array length exceeds the boundary's i32 range");
        Self { elements, length }
    }

    /// An array with no elements (an absent mesh attribute, for example)
    pub fn empty() -> Self {
        Self {
            elements: Vec::new(),
            length: 0,
        }
    }

    /// Recorded element count, as the boundary sees it
    pub fn len(&self) -> i32 {
        self.length
    }

    /// True when the array holds no elements
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Borrow the elements
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consume the array, yielding the host-owned elements
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Borrowed boundary-layout view of this array
    ///
    /// The view is valid for as long as `self` is; the exporter must not
    /// retain the pointer past the call it was passed to.
    pub fn as_boundary(&self) -> BoundaryArray<'_, T> {
        BoundaryArray {
            data: self.elements.as_ptr(),
            length: self.length,
            _owner: PhantomData,
        }
    }
}

impl<T> Default for TypedArray<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Borrowed pointer+length view handed to the native exporter
///
/// Layout: `{ data: *const T, length: i32 }`, matching the native side's
/// array structs field for field.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct BoundaryArray<'a, T> {
    data: *const T,
    length: i32,
    _owner: PhantomData<&'a [T]>,
}

impl<T> BoundaryArray<'_, T> {
    /// Pointer to the first element (dangling-but-aligned when empty)
    pub fn data(&self) -> *const T {
        self.data
    }

    /// Element count
    pub fn len(&self) -> i32 {
        self.length
    }

    /// True when the view holds no elements
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Raw handle over an array the native exporter allocated
///
/// Layout: `{ ptr: *mut T, length: i32 }`, matching the native side's
/// `Native*Array` structs. The allocation stays owned by the exporter until
/// the host releases it through `memory::release_array`; the host's only
/// read path is `marshal::from_boundary_layout`, which consumes the handle
/// so the copy can happen at most once.
#[repr(C)]
#[derive(Debug)]
pub struct NativeArray<T> {
    ptr: *mut T,
    length: i32,
}

impl<T> NativeArray<T> {
    /// Rebuild a handle from parts returned by the native exporter
    ///
    /// # Safety
    ///
    /// `ptr` must point to `length` contiguous, initialized elements of `T`
    /// allocated by the boundary allocator, and the allocation must stay
    /// valid until this handle is released.
    pub unsafe fn from_raw_parts(ptr: *mut T, length: i32) -> Self {
        Self { ptr, length }
    }

    /// Element count claimed by the exporter
    pub fn len(&self) -> i32 {
        self.length
    }

    /// True when the handle claims no elements
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Base address of the allocation
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    /// Give up on reading and keep only the release obligation
    pub fn into_spent(self) -> SpentArray {
        SpentArray {
            addr: self.ptr.cast::<c_void>(),
        }
    }
}

/// Release token for a boundary-allocated array
///
/// Produced when a [`NativeArray`] has been copied out (or abandoned) and
/// consumed by `memory::release_array`. Holding the token is holding the
/// obligation to release exactly once.
#[must_use = "the boundary allocation leaks unless passed to memory::release_array"]
#[derive(Debug)]
pub struct SpentArray {
    addr: *mut c_void,
}

impl SpentArray {
    /// Address to hand back to the boundary allocator
    pub(crate) fn addr(&self) -> *mut c_void {
        self.addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_array_records_length() {
        let a = TypedArray::from_vec(vec![10_i32, 20, 30]);
        assert_eq!(a.len(), 3);
        assert_eq!(a.as_slice(), &[10, 20, 30]);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_empty_array_has_zero_length() {
        let a: Vec3Array = TypedArray::empty();
        assert_eq!(a.len(), 0);
        assert!(a.is_empty());
    }

    #[test]
    fn test_boundary_view_aliases_host_storage() {
        let a = TypedArray::from_vec(vec![1.0_f32, 2.0, 3.0]);
        let view = a.as_boundary();
        assert_eq!(view.data(), a.as_slice().as_ptr());
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_spent_array_keeps_the_address() {
        let mut backing = [7_i32, 8, 9];
        let handle = unsafe { NativeArray::from_raw_parts(backing.as_mut_ptr(), 3) };
        let addr = handle.as_ptr() as usize;
        let spent = handle.into_spent();
        assert_eq!(spent.addr() as usize, addr);
    }
}
