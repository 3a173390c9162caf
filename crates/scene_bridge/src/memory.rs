//! Release path for boundary-allocated memory
//!
//! The native exporter allocates arrays on the host's behalf and exposes a
//! single release primitive: a pointer plus a flag selecting the array or
//! single-object destructor path. Releasing an address the exporter does not
//! own, or releasing the same address twice, is undefined behavior on the
//! native side, so the release path here is the only place addresses are
//! handed back — and debug builds keep a guard set of already-released
//! addresses that refuses to forward a repeat.

use std::ffi::c_void;

use crate::descriptor::arrays::SpentArray;

/// The boundary side's allocator, behind a trait so tests can substitute an
/// instrumented fake for the native exporter
pub trait BoundaryAllocator {
    /// Free memory the boundary side allocated
    ///
    /// `is_array` selects the array destructor path. The address must have
    /// been returned by this allocator and not yet released.
    fn delete_native_object(&self, address: *mut c_void, is_array: bool);
}

/// Release memory the boundary side allocated on behalf of the host
///
/// Preconditions: `address` came from the boundary allocator and has not
/// been released before. In debug builds a guard set catches a repeat
/// release, logs it, and suppresses the forward instead of invoking
/// undefined behavior; release builds trust caller discipline, as the
/// production allocator does not check.
///
/// Guard limitation: the set is process-global and never forgets an
/// address. If the boundary allocator reuses a freed address for a later
/// allocation, the debug guard mistakes that allocation's release for a
/// repeat, suppresses it, and the allocation leaks (with the error log
/// above as the only symptom). Release builds forward every call and are
/// unaffected. Debug-build leak-checking against a reusing allocator
/// should instrument the allocator itself, as the test fake does.
pub fn release_boundary_memory<A: BoundaryAllocator + ?Sized>(
    allocator: &A,
    address: *mut c_void,
    is_array: bool,
) {
    #[cfg(debug_assertions)]
    {
        if !guard::mark_released(address as usize) {
            log::error!(
                "boundary address {:#x} released twice; second release suppressed",
                address as usize
            );
            return;
        }
    }

    log::trace!(
        "releasing boundary address {:#x} (is_array: {is_array})",
        address as usize
    );
    allocator.delete_native_object(address, is_array);
}

/// Release a boundary-allocated array, consuming its release token
///
/// The token exists only after the array was copied out (or explicitly
/// abandoned), so the allocate -> read -> release ordering is enforced by
/// construction, and consuming the token makes a second release of the same
/// handle unrepresentable.
pub fn release_array<A: BoundaryAllocator + ?Sized>(allocator: &A, spent: SpentArray) {
    release_boundary_memory(allocator, spent.addr(), true);
}

/// Release a single boundary-allocated object
pub fn release_object<A: BoundaryAllocator + ?Sized>(allocator: &A, address: *mut c_void) {
    release_boundary_memory(allocator, address, false);
}

#[cfg(debug_assertions)]
mod guard {
    use std::collections::HashSet;
    use std::sync::{Mutex, OnceLock};

    fn released() -> &'static Mutex<HashSet<usize>> {
        static RELEASED: OnceLock<Mutex<HashSet<usize>>> = OnceLock::new();
        RELEASED.get_or_init(|| Mutex::new(HashSet::new()))
    }

    /// Record a release; false when the address was already released
    pub(super) fn mark_released(address: usize) -> bool {
        released()
            .lock()
            .expect("release guard poisoned")
            .insert(address)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Instrumented stand-in for the native exporter's allocator

    use std::collections::HashSet;
    use std::ffi::c_void;
    use std::sync::Mutex;

    use bytemuck::Pod;

    use super::BoundaryAllocator;
    use crate::descriptor::arrays::NativeArray;

    #[derive(Default)]
    struct FakeState {
        live: HashSet<usize>,
        freed: HashSet<usize>,
        double_frees: Vec<usize>,
        foreign_frees: Vec<usize>,
    }

    /// Fake boundary allocator that tracks every allocation and flags
    /// double-frees and frees of addresses it never handed out
    ///
    /// Backing memory is intentionally leaked rather than returned to the
    /// heap, so an address is never reused within the test process and the
    /// debug release guard cannot misfire across tests.
    #[derive(Default)]
    pub(crate) struct FakeAllocator {
        state: Mutex<FakeState>,
    }

    impl FakeAllocator {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Allocate an array "on the boundary side" holding a copy of `items`
        pub(crate) fn alloc_array<T: Pod>(&self, items: &[T]) -> NativeArray<T> {
            // At least one backing byte so even empty arrays get a unique,
            // trackable address.
            let mut buffer = bytemuck::cast_slice::<T, u8>(items).to_vec();
            if buffer.is_empty() {
                buffer.push(0);
            }
            let bytes: &'static mut [u8] = Box::leak(buffer.into_boxed_slice());
            let ptr = bytes.as_mut_ptr();
            self.state
                .lock()
                .expect("fake allocator poisoned")
                .live
                .insert(ptr as usize);
            let length = i32::try_from(items.len()).expect("test array too long");
            // SAFETY: the leaked buffer holds `length` contiguous records of
            // T and stays valid for the whole test process.
            unsafe { NativeArray::from_raw_parts(ptr.cast::<T>(), length) }
        }

        pub(crate) fn live_count(&self) -> usize {
            self.state.lock().expect("fake allocator poisoned").live.len()
        }

        pub(crate) fn double_free_count(&self) -> usize {
            self.state
                .lock()
                .expect("fake allocator poisoned")
                .double_frees
                .len()
        }

        pub(crate) fn foreign_free_count(&self) -> usize {
            self.state
                .lock()
                .expect("fake allocator poisoned")
                .foreign_frees
                .len()
        }
    }

    impl BoundaryAllocator for FakeAllocator {
        fn delete_native_object(&self, address: *mut c_void, _is_array: bool) {
            let addr = address as usize;
            let mut state = self.state.lock().expect("fake allocator poisoned");
            if state.live.remove(&addr) {
                state.freed.insert(addr);
            } else if state.freed.contains(&addr) {
                state.double_frees.push(addr);
            } else {
                state.foreign_frees.push(addr);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeAllocator;
    use super::*;

    #[test]
    fn test_release_forwards_to_the_allocator_once() {
        let allocator = FakeAllocator::new();
        let handle = allocator.alloc_array(&[1_i32, 2, 3]);
        assert_eq!(allocator.live_count(), 1);

        release_array(&allocator, handle.into_spent());
        assert_eq!(allocator.live_count(), 0);
        assert_eq!(allocator.double_free_count(), 0);
    }

    #[test]
    fn test_fake_allocator_flags_a_double_free() {
        let allocator = FakeAllocator::new();
        let handle = allocator.alloc_array(&[9_i32]);
        let address = handle.as_ptr() as *mut std::ffi::c_void;
        drop(handle);

        // Bypass the guarded release path: the instrumentation itself must
        // detect the repeat, as the production allocator cannot.
        allocator.delete_native_object(address, true);
        allocator.delete_native_object(address, true);
        assert_eq!(allocator.double_free_count(), 1);
    }

    #[test]
    fn test_debug_guard_suppresses_a_second_release() {
        let allocator = FakeAllocator::new();
        let handle = allocator.alloc_array(&[7_i32, 7]);
        let address = handle.as_ptr() as *mut std::ffi::c_void;
        drop(handle);

        release_boundary_memory(&allocator, address, true);
        release_boundary_memory(&allocator, address, true);

        // The guard swallowed the second call, so the allocator never saw a
        // double free.
        assert_eq!(allocator.double_free_count(), 0);
        assert_eq!(allocator.live_count(), 0);
    }

    #[test]
    fn test_release_object_uses_the_single_object_path() {
        let allocator = FakeAllocator::new();
        let handle = allocator.alloc_array(&[1_u8]);
        let address = handle.as_ptr() as *mut std::ffi::c_void;
        drop(handle);

        release_object(&allocator, address);
        assert_eq!(allocator.live_count(), 0);
        assert_eq!(allocator.foreign_free_count(), 0);
    }

    #[test]
    fn test_fake_allocator_flags_a_foreign_address() {
        let allocator = FakeAllocator::new();
        let mut not_boundary_memory = 0_i32;
        let address = (&mut not_boundary_memory as *mut i32).cast::<std::ffi::c_void>();
        allocator.delete_native_object(address, false);
        assert_eq!(allocator.foreign_free_count(), 1);
    }
}
