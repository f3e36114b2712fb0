//! Re-targets (possibly fat) pointers at a buffer address.
//!
//! A `StaticPtr<dyn Trait>` keeps the metadata (vtable or length) of the object
//! it holds and glues it onto the buffer address on every access.

#[cfg(feature = "nightly")]
mod implementation {
    pub fn with_metadata_of<U: ?Sized>(addr: *const u8, meta: *const U) -> *const U {
        addr.with_metadata_of(meta)
    }

    pub fn with_metadata_of_mut<U: ?Sized>(addr: *mut u8, meta: *const U) -> *mut U {
        addr.with_metadata_of(meta)
    }
}

#[cfg(not(feature = "nightly"))]
#[allow(clippy::as_conversions)]
mod implementation {
    use core::ptr::addr_of_mut;

    pub fn with_metadata_of<U: ?Sized>(addr: *const u8, meta: *const U) -> *const U {
        with_metadata_of_mut(addr.cast_mut(), meta)
    }

    // Layout of fat pointers is probed by `build.rs`: the data address comes first.
    pub fn with_metadata_of_mut<U: ?Sized>(addr: *mut u8, mut meta: *const U) -> *mut U {
        let meta_ptr = addr_of_mut!(meta).cast::<usize>();
        unsafe { meta_ptr.write(addr as usize) }
        meta.cast_mut()
    }
}

pub use implementation::*;
