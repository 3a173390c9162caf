//! Bidirectional array conversion at the export boundary
//!
//! Two one-way paths with very different costs:
//!
//! - [`to_boundary_layout`] reshapes a host-owned vector into a
//!   [`TypedArray`]. No copy beyond the move; element order is preserved.
//! - [`from_boundary_layout`] copies a boundary-allocated array into host
//!   ownership, element by element, from a raw pointer the exporter handed
//!   back. The copy never takes ownership of the allocation: the caller
//!   receives a [`SpentArray`] token and must release it through
//!   `memory::release_array` exactly once.
//!
//! Address arithmetic runs in `usize`, so 64-bit pointers are never
//! truncated.

use std::mem;
use std::ptr;

use bytemuck::Pod;

use crate::descriptor::arrays::{NativeArray, SpentArray, TypedArray};

/// Reshape a host-owned vector into boundary layout
///
/// This is the only public way to build a [`TypedArray`], which keeps the
/// recorded length and the element count from ever disagreeing.
pub fn to_boundary_layout<T>(elements: Vec<T>) -> TypedArray<T> {
    TypedArray::from_vec(elements)
}

/// Copy a boundary-allocated array into host ownership
///
/// Reads `handle.len()` consecutive `size_of::<T>()`-byte records starting
/// at the handle's address. Consumes the handle, so the same allocation can
/// never be read twice; the returned [`SpentArray`] carries the obligation
/// to release the allocation.
///
/// # Panics
///
/// Panics on a negative claimed length, or a null address with a nonzero
/// length — both mean the boundary side broke its contract, and a partial
/// read would be worse than stopping.
pub fn from_boundary_layout<T: Pod>(handle: NativeArray<T>) -> (TypedArray<T>, SpentArray) {
    let claimed = handle.len();
    assert!(
        claimed >= 0,
        "boundary array claims negative length {claimed}"
    );
    let len = claimed as usize;
    assert!(
        !handle.as_ptr().is_null() || len == 0,
        "boundary array of length {len} has a null address"
    );

    let base = handle.as_ptr() as usize;
    let stride = mem::size_of::<T>();
    let mut elements = Vec::with_capacity(len);
    for index in 0..len {
        let address = base + index * stride;
        // SAFETY: the handle contract (NativeArray::from_raw_parts)
        // guarantees `len` contiguous initialized records of T starting at
        // `base`, valid until release. T: Pod makes any byte pattern a valid
        // value, and the unaligned read tolerates allocators that pack
        // records without padding.
        let element = unsafe { ptr::read_unaligned(address as *const T) };
        elements.push(element);
    }

    (TypedArray::from_vec(elements), handle.into_spent())
}
