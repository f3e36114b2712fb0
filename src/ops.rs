//! Per-type operation records.
//!
//! A `StaticPtr<dyn Trait>` only sees its object through `dyn Trait`, which
//! exposes neither how to move the object nor, once the metadata is gone, how
//! to drop it. [`Ops`] is the hand-built dispatch table that fills that gap: one
//! immutable record per concrete type, shared by every container that ever
//! holds a value of that type.

use core::any::TypeId;
use core::fmt;
use core::marker::PhantomData;
use core::ptr;

/// Type-erased operations of one concrete type.
///
/// All addresses must point at properly aligned storage for the described
/// type. A Rust move is a destructive bitwise relocation, so after
/// `move_construct` or `move_assign` the source holds no live object and must
/// not be destructed.
pub(crate) struct Ops {
    /// Relocates the live object at `src` into the uninitialized `dst`.
    pub(crate) move_construct: unsafe fn(dst: *mut u8, src: *mut u8),
    /// Moves the live object at `src` over the live object at `dst`, dropping
    /// the previous value of `dst` in place.
    pub(crate) move_assign: unsafe fn(dst: *mut u8, src: *mut u8),
    /// Drops the live object at `dst` in place.
    pub(crate) destruct: unsafe fn(dst: *mut u8),
    pub(crate) type_id: fn() -> TypeId,
}

impl Ops {
    /// Returns the record of `T`.
    pub(crate) fn of<T: 'static>() -> &'static Ops {
        &OpsOf::<T>::OPS
    }

    /// Returns true if both records describe the same concrete type.
    ///
    /// Promoted constants are not guaranteed to be unique across codegen units,
    /// so the address is only a fast path.
    pub(crate) fn same_type(&self, other: &Ops) -> bool {
        ptr::eq(self, other) || (self.type_id)() == (other.type_id)()
    }
}

impl fmt::Debug for Ops {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Ops")
            .field("type_id", &(self.type_id)())
            .finish_non_exhaustive()
    }
}

struct OpsOf<T>(PhantomData<T>);

impl<T: 'static> OpsOf<T> {
    const OPS: Ops = Ops {
        move_construct: move_construct::<T>,
        move_assign: move_assign::<T>,
        destruct: destruct::<T>,
        type_id: TypeId::of::<T>,
    };
}

unsafe fn move_construct<T>(dst: *mut u8, src: *mut u8) {
    ptr::copy_nonoverlapping(src.cast::<T>(), dst.cast::<T>(), 1);
}

unsafe fn move_assign<T>(dst: *mut u8, src: *mut u8) {
    *dst.cast::<T>() = src.cast::<T>().read();
}

unsafe fn destruct<T>(dst: *mut u8) {
    ptr::drop_in_place(dst.cast::<T>());
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::MaybeUninit;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counted(Rc<Cell<usize>>, u32);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_record_is_shared() {
        assert!(Ops::of::<u32>().same_type(Ops::of::<u32>()));
        assert!(!Ops::of::<u32>().same_type(Ops::of::<i32>()));
        assert!(!Ops::of::<u32>().same_type(Ops::of::<Counted>()));
    }

    #[test]
    fn test_move_construct_relocates() {
        let drops = Rc::new(Cell::new(0));
        let mut src = MaybeUninit::new(Counted(drops.clone(), 7));
        let mut dst = MaybeUninit::<Counted>::uninit();

        let ops = Ops::of::<Counted>();
        unsafe { (ops.move_construct)(dst.as_mut_ptr().cast(), src.as_mut_ptr().cast()) };
        assert_eq!(drops.get(), 0);

        let moved = unsafe { dst.assume_init() };
        assert_eq!(moved.1, 7);
        drop(moved);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_move_assign_drops_previous() {
        let old = Rc::new(Cell::new(0));
        let new = Rc::new(Cell::new(0));
        let mut src = MaybeUninit::new(Counted(new.clone(), 2));
        let mut dst = MaybeUninit::new(Counted(old.clone(), 1));

        let ops = Ops::of::<Counted>();
        unsafe { (ops.move_assign)(dst.as_mut_ptr().cast(), src.as_mut_ptr().cast()) };
        assert_eq!(old.get(), 1);
        assert_eq!(new.get(), 0);

        let moved = unsafe { dst.assume_init() };
        assert_eq!(moved.1, 2);
        drop(moved);
        assert_eq!(new.get(), 1);
    }

    #[test]
    fn test_destruct() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = MaybeUninit::new(Counted(drops.clone(), 0));
        unsafe { (Ops::of::<Counted>().destruct)(slot.as_mut_ptr().cast()) };
        assert_eq!(drops.get(), 1);
    }
}
