use core::cmp::Ordering;
use core::fmt;
use core::hash::{self, Hash};
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ops::{Deref, DerefMut};
use core::ptr;

#[cfg(feature = "coerce")]
use core::marker::Unsize;

use crate::ops::Ops;
use crate::space::{Buffer, BufferSize, Fits, FitsSource};
use crate::sptr;
use crate::transfer::transfer;

/// Build a `StaticPtr` holding the value of an expression.
///
/// The value must be coercible to the base type of the resulting `StaticPtr`
/// and must fit into its buffer, both checked at compile time.
///
/// # Example
///
/// ```
/// use static_ptr::{buffer_size, static_ptr, StaticPtr};
///
/// trait Engine {
///     fn power(&self) -> u32;
/// }
///
/// struct Steam(u32);
///
/// impl Engine for Steam {
///     fn power(&self) -> u32 {
///         self.0
///     }
/// }
///
/// buffer_size!(dyn Engine);
///
/// let engine: StaticPtr<dyn Engine> = static_ptr!(Steam(120));
/// assert_eq!(engine.power(), 120);
/// ```
#[macro_export]
macro_rules! static_ptr {
    ($val:expr) => {{
        let val = $val;
        #[allow(unsafe_code)]
        unsafe {
            $crate::StaticPtr::new_unchecked(&val, val)
        }
    }};
}

/// Rebuild the content of a `StaticPtr` in place.
///
/// The object currently held is dropped *before* the expression is evaluated.
/// Evaluates to a mutable reference to the new object.
///
/// # Example
///
/// ```
/// use static_ptr::{emplace, StaticPtr};
/// use std::any::Any;
///
/// let mut ptr: StaticPtr<dyn Any> = StaticPtr::empty();
/// let value = emplace!(ptr, 41u32);
/// *value += 1;
///
/// assert_eq!(ptr.downcast_ref::<u32>(), Some(&42));
/// ```
#[macro_export]
macro_rules! emplace {
    ($ptr:expr, $val:expr) => {{
        let ptr: &mut $crate::StaticPtr<_> = &mut $ptr;
        ptr.reset();
        let val = $val;
        #[allow(unsafe_code)]
        unsafe {
            ptr.emplace_unchecked(&val, val)
        }
    }};
}

/// Move the content of one `StaticPtr` into another one with a wider base.
///
/// The source is left empty. The source base must coerce to the destination
/// base, and anything the source can hold must fit into the destination
/// buffer: a sized source base is measured by its own size, an unsized one by
/// its whole buffer.
///
/// # Example
///
/// ```
/// use static_ptr::{static_ptr, transfer, StaticPtr};
/// use std::fmt::Debug;
///
/// let mut src: StaticPtr<u32> = StaticPtr::new(7);
/// let mut dst: StaticPtr<dyn Debug> = static_ptr!("old");
///
/// transfer!(dst, src);
///
/// assert!(src.is_empty());
/// assert_eq!(format!("{:?}", dst), "7");
/// ```
#[macro_export]
macro_rules! transfer {
    ($dst:expr, $src:expr) => {{
        let dst: &mut $crate::StaticPtr<_> = &mut $dst;
        let src: &mut $crate::StaticPtr<_> = &mut $src;
        match src.as_ptr() {
            #[allow(unsafe_code)]
            Some(meta) => unsafe { dst.transfer_from_unchecked(src, Some(meta)) },
            #[allow(unsafe_code)]
            None => unsafe { dst.transfer_from_unchecked(src, None) },
        }
    }};
}

/// Convert a `StaticPtr` into one with a wider base.
///
/// # Example
///
/// ```
/// use static_ptr::{static_ptr_cast, StaticPtr};
/// use std::any::Any;
///
/// let narrow: StaticPtr<[u8; 4]> = StaticPtr::new([1, 2, 3, 4]);
/// let wide: StaticPtr<dyn Any> = static_ptr_cast!(narrow);
///
/// assert_eq!(wide.downcast_ref::<[u8; 4]>(), Some(&[1, 2, 3, 4]));
/// ```
#[macro_export]
macro_rules! static_ptr_cast {
    ($src:expr) => {{
        let mut src = $src;
        match $crate::StaticPtr::as_ptr(&src) {
            #[allow(unsafe_code)]
            Some(meta) => unsafe { $crate::StaticPtr::from_unchecked(&mut src, Some(meta)) },
            None => $crate::StaticPtr::empty(),
        }
    }};
}

/// An owning pointer to a value stored inline in a fixed-size buffer.
///
/// `StaticPtr<B>` holds at most one object of a concrete type `T` that
/// coerces to the base `B`: a type implementing the trait of `dyn Trait`, an
/// array for a slice base, or `B` itself. The object lives inside the
/// `StaticPtr`; its capacity is given by `B`'s [`BufferSize`].
///
/// Moving a `StaticPtr` moves the object with it. `StaticPtr` is never
/// `Clone`.
///
/// # Compile-time rejections
///
/// A type that does not coerce to the base is rejected:
///
/// ```compile_fail
/// use static_ptr::{buffer_size, static_ptr, StaticPtr};
///
/// trait Engine {}
/// buffer_size!(dyn Engine);
///
/// struct Rock;
///
/// let _ptr: StaticPtr<dyn Engine> = static_ptr!(Rock);
/// ```
///
/// So is a value that does not fit the buffer:
///
/// ```compile_fail
/// use static_ptr::{buffer_size, static_ptr, StaticPtr};
///
/// trait Engine {}
/// buffer_size!(dyn Engine);
///
/// struct Jet([u64; 8]);
/// impl Engine for Jet {}
///
/// let _ptr: StaticPtr<dyn Engine> = static_ptr!(Jet([0; 8]));
/// ```
///
/// A primitive is not an engine either:
///
/// ```compile_fail
/// use static_ptr::{buffer_size, static_ptr, StaticPtr};
///
/// trait Engine {}
/// buffer_size!(dyn Engine);
///
/// let _ptr: StaticPtr<dyn Engine> = static_ptr!(1.5f64);
/// ```
///
/// Nor is a `StaticPtr` of engines:
///
/// ```compile_fail
/// use static_ptr::{buffer_size, static_ptr, StaticPtr};
///
/// trait Engine {}
/// buffer_size!(dyn Engine);
///
/// let _ptr: StaticPtr<dyn Engine> = static_ptr!(StaticPtr::<dyn Engine>::empty());
/// ```
///
/// Transfers check what the source may hold:
///
/// ```compile_fail
/// use static_ptr::{buffer_size, transfer, StaticPtr};
///
/// trait Engine {}
/// buffer_size!(dyn Engine);
///
/// struct Jet([u64; 8]);
/// impl Engine for Jet {}
/// buffer_size!(Jet);
///
/// let mut src = StaticPtr::new(Jet([0; 8]));
/// let mut dst: StaticPtr<dyn Engine> = StaticPtr::empty();
/// transfer!(dst, src);
/// ```
///
/// And there is no copy:
///
/// ```compile_fail
/// use static_ptr::StaticPtr;
///
/// let ptr = StaticPtr::new(1u32);
/// let _copy = StaticPtr::clone(&ptr);
/// ```
///
/// # Stored types are `'static`
///
/// Moving and dropping go through a record shared per concrete type, and two
/// records are compared by `TypeId`. Values that borrow from the stack can
/// therefore not be stored:
///
/// ```compile_fail
/// use static_ptr::{buffer_size, static_ptr, StaticPtr};
///
/// trait Measure {
///     fn measure(&self) -> usize;
/// }
///
/// struct Borrowed<'a>(&'a str);
///
/// impl<'a> Measure for Borrowed<'a> {
///     fn measure(&self) -> usize {
///         self.0.len()
///     }
/// }
///
/// buffer_size!(dyn Measure);
///
/// fn measure_local() -> usize {
///     let text = String::from("local");
///     let ptr: StaticPtr<dyn Measure> = static_ptr!(Borrowed(&text));
///     ptr.measure()
/// }
/// ```
pub struct StaticPtr<B: ?Sized + BufferSize> {
    // `None` iff `buf` holds no live object.
    ops: Option<&'static Ops>,
    // Metadata of the held object viewed as `B`; initialized iff `ops` is `Some`.
    meta: MaybeUninit<*const B>,
    buf: Buffer<B::Space>,
    _phantom: PhantomData<B>,
}

impl<B: ?Sized + BufferSize> StaticPtr<B> {
    /// Create an empty `StaticPtr`.
    pub const fn empty() -> StaticPtr<B> {
        StaticPtr {
            ops: None,
            meta: MaybeUninit::uninit(),
            buf: Buffer::uninit(),
            _phantom: PhantomData,
        }
    }

    /// Capacity of the buffer in bytes.
    pub const fn capacity() -> usize {
        Buffer::<B::Space>::CAPACITY
    }

    /// Store a value of the base type itself.
    ///
    /// # Example
    ///
    /// ```
    /// use static_ptr::StaticPtr;
    ///
    /// let ptr = StaticPtr::new([1u16, 2, 3]);
    /// assert_eq!(*ptr, [1, 2, 3]);
    /// ```
    pub fn new(val: B) -> StaticPtr<B>
    where
        B: Sized + 'static,
    {
        static_ptr!(val)
    }

    /// Store a value of any type that coerces to the base.
    #[cfg(feature = "coerce")]
    pub fn new_unsize<T>(val: T) -> StaticPtr<B>
    where
        T: Unsize<B> + 'static,
    {
        let meta: *const B = &val;
        unsafe { Self::new_unchecked(meta, val) }
    }

    #[doc(hidden)]
    pub unsafe fn new_unchecked<T: 'static>(meta: *const B, val: T) -> StaticPtr<B> {
        let mut result = Self::empty();
        result.emplace_unchecked(meta, val);
        result
    }

    /// Replace the held object by a value of the base type itself.
    ///
    /// The previous object is dropped before `val` is moved in, even if both
    /// have the same type.
    pub fn emplace(&mut self, val: B) -> &mut B
    where
        B: Sized + 'static,
    {
        self.reset();
        let meta: *const B = &val;
        unsafe { self.emplace_unchecked(meta, val) }
    }

    /// Replace the held object by a value of any type that coerces to the base.
    #[cfg(feature = "coerce")]
    pub fn emplace_unsize<T>(&mut self, val: T) -> &mut T
    where
        T: Unsize<B> + 'static,
    {
        self.reset();
        let meta: *const B = &val;
        unsafe { self.emplace_unchecked(meta, val) }
    }

    /// # Safety
    ///
    /// `meta` must have been obtained by coercing a `*const T` to `*const B`.
    #[doc(hidden)]
    pub unsafe fn emplace_unchecked<T: 'static>(&mut self, meta: *const B, val: T) -> &mut T {
        #[allow(clippy::let_unit_value)]
        let () = Fits::<T, B::Space>::OK;

        self.reset();
        let slot = self.buf.as_mut_ptr().cast::<T>();
        slot.write(val);
        self.meta = MaybeUninit::new(meta);
        self.ops = Some(Ops::of::<T>());
        &mut *slot
    }

    /// Move the object held by `src` into `self`, leaving `src` empty.
    ///
    /// If both hold the same concrete type the object is move-assigned into
    /// the existing storage; otherwise the object of `self` is dropped first.
    /// An empty `src` just clears `self`.
    pub fn transfer_from(&mut self, src: &mut StaticPtr<B>) {
        let meta = src.as_ptr();
        unsafe { self.transfer_from_unchecked(src, meta) }
    }

    /// # Safety
    ///
    /// `meta` must be `src.as_ptr()` coerced to `*const B`.
    #[doc(hidden)]
    pub unsafe fn transfer_from_unchecked<U>(&mut self, src: &mut StaticPtr<U>, meta: Option<*const B>)
    where
        U: ?Sized + BufferSize,
    {
        #[allow(clippy::let_unit_value)]
        let () = FitsSource::<U, B::Space>::OK;

        if let Some(meta) = meta {
            self.meta = MaybeUninit::new(meta);
        }
        transfer(self.buf.as_mut_ptr(), &mut self.ops, src.buf.as_mut_ptr(), &mut src.ops);
    }

    /// # Safety
    ///
    /// `meta` must be `src.as_ptr()` coerced to `*const B`.
    #[doc(hidden)]
    pub unsafe fn from_unchecked<U>(src: &mut StaticPtr<U>, meta: Option<*const B>) -> StaticPtr<B>
    where
        U: ?Sized + BufferSize,
    {
        let mut result = Self::empty();
        result.transfer_from_unchecked(src, meta);
        result
    }

    /// Move `src` into `self`. Equivalent to [`transfer_from`](Self::transfer_from).
    pub fn assign(&mut self, mut src: StaticPtr<B>) {
        self.transfer_from(&mut src);
    }

    /// Take the held object out, leaving `self` empty.
    pub fn take(&mut self) -> StaticPtr<B> {
        let mut result = Self::empty();
        result.transfer_from(self);
        result
    }

    /// Convert into a `StaticPtr` with a wider base.
    #[cfg(feature = "coerce")]
    pub fn upcast<U>(mut self) -> StaticPtr<U>
    where
        U: ?Sized + BufferSize,
        B: Unsize<U>,
    {
        let meta = match self.as_ptr() {
            Some(meta) => {
                let meta: *const U = meta;
                Some(meta)
            }
            None => None,
        };
        unsafe { StaticPtr::from_unchecked(&mut self, meta) }
    }

    /// Drop the held object, if any.
    pub fn reset(&mut self) {
        if let Some(ops) = self.ops.take() {
            unsafe { (ops.destruct)(self.buf.as_mut_ptr()) }
        }
    }

    /// Returns true if an object is held.
    pub fn is_some(&self) -> bool {
        self.ops.is_some()
    }

    /// Returns true if no object is held.
    pub fn is_empty(&self) -> bool {
        self.ops.is_none()
    }

    /// Pointer to the held object, viewed as the base.
    pub fn as_ptr(&self) -> Option<*const B> {
        self.ops
            .map(|_| sptr::with_metadata_of(self.buf.as_ptr(), unsafe { self.meta.assume_init() }))
    }

    /// Mutable pointer to the held object, viewed as the base.
    pub fn as_mut_ptr(&mut self) -> Option<*mut B> {
        match self.ops {
            Some(_) => Some(sptr::with_metadata_of_mut(self.buf.as_mut_ptr(), unsafe {
                self.meta.assume_init()
            })),
            None => None,
        }
    }

    /// Reference to the held object, viewed as the base.
    pub fn get(&self) -> Option<&B> {
        self.as_ptr().map(|ptr| unsafe { &*ptr })
    }

    /// Mutable reference to the held object, viewed as the base.
    pub fn get_mut(&mut self) -> Option<&mut B> {
        self.as_mut_ptr().map(|ptr| unsafe { &mut *ptr })
    }

    /// # Safety
    ///
    /// `self` must not be empty.
    pub unsafe fn get_unchecked(&self) -> &B {
        &*sptr::with_metadata_of(self.buf.as_ptr(), self.meta.assume_init())
    }

    /// # Safety
    ///
    /// `self` must not be empty.
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut B {
        &mut *sptr::with_metadata_of_mut(self.buf.as_mut_ptr(), self.meta.assume_init())
    }

    /// Returns true if the held object is a `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.ops.is_some_and(|ops| ops.same_type(Ops::of::<T>()))
    }

    /// Reference to the held object if it is a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        if self.is::<T>() {
            Some(unsafe { &*self.buf.as_ptr().cast::<T>() })
        } else {
            None
        }
    }

    /// Mutable reference to the held object if it is a `T`.
    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        if self.is::<T>() {
            Some(unsafe { &mut *self.buf.as_mut_ptr().cast::<T>() })
        } else {
            None
        }
    }

    /// Move the held object out if it is a `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use static_ptr::{static_ptr, StaticPtr};
    /// use std::fmt::Debug;
    ///
    /// let ptr: StaticPtr<dyn Debug> = static_ptr!(5i64);
    /// let ptr = ptr.downcast::<u8>().unwrap_err();
    /// assert_eq!(ptr.downcast::<i64>().ok(), Some(5));
    /// ```
    pub fn downcast<T: 'static>(mut self) -> Result<T, StaticPtr<B>> {
        if self.is::<T>() {
            self.ops = None;
            Ok(unsafe { self.buf.as_ptr().cast::<T>().read() })
        } else {
            Err(self)
        }
    }
}

impl<B: ?Sized + BufferSize> Default for StaticPtr<B> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cold]
#[track_caller]
fn deref_empty() -> ! {
    panic!("dereferenced an empty StaticPtr")
}

impl<B: ?Sized + BufferSize> Deref for StaticPtr<B> {
    type Target = B;

    #[track_caller]
    fn deref(&self) -> &B {
        match self.get() {
            Some(val) => val,
            None => deref_empty(),
        }
    }
}

impl<B: ?Sized + BufferSize> DerefMut for StaticPtr<B> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut B {
        match self.get_mut() {
            Some(val) => val,
            None => deref_empty(),
        }
    }
}

impl<B: ?Sized + BufferSize> Drop for StaticPtr<B> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<B: ?Sized + BufferSize + fmt::Debug> fmt::Debug for StaticPtr<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(val) => fmt::Debug::fmt(val, f),
            None => f.write_str("<empty>"),
        }
    }
}

impl<B: ?Sized + BufferSize + fmt::Display> fmt::Display for StaticPtr<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(val) => fmt::Display::fmt(val, f),
            None => f.write_str("<empty>"),
        }
    }
}

impl<B: ?Sized + BufferSize> fmt::Pointer for StaticPtr<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ptr = match self.ops {
            Some(_) => self.buf.as_ptr(),
            None => ptr::null(),
        };
        fmt::Pointer::fmt(&ptr, f)
    }
}

impl<B: ?Sized + BufferSize + PartialEq> PartialEq for StaticPtr<B> {
    #[inline]
    fn eq(&self, other: &StaticPtr<B>) -> bool {
        self.get() == other.get()
    }
}

impl<B: ?Sized + BufferSize + Eq> Eq for StaticPtr<B> {}

impl<B: ?Sized + BufferSize + PartialOrd> PartialOrd for StaticPtr<B> {
    #[inline]
    fn partial_cmp(&self, other: &StaticPtr<B>) -> Option<Ordering> {
        self.get().partial_cmp(&other.get())
    }
}

impl<B: ?Sized + BufferSize + Ord> Ord for StaticPtr<B> {
    #[inline]
    fn cmp(&self, other: &StaticPtr<B>) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl<B: ?Sized + BufferSize + Hash> Hash for StaticPtr<B> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

unsafe impl<B: ?Sized + BufferSize + Send> Send for StaticPtr<B> {}
unsafe impl<B: ?Sized + BufferSize + Sync> Sync for StaticPtr<B> {}

#[cfg(test)]
mod tests {
    use super::StaticPtr;
    use core::any::Any;
    use core::fmt::Debug;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug)]
    struct Counted(Rc<Cell<usize>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    crate::buffer_size!(dyn PartialEq<u32>);
    crate::buffer_size!(dyn Fn(u64) -> u64);

    #[test]
    fn test_basic() {
        let ptr: StaticPtr<dyn PartialEq<u32>> = static_ptr!(1234u32);
        assert!(*ptr == 1234);

        let ptr = StaticPtr::new([0usize, 1]);
        assert_eq!(*ptr, [0, 1]);
    }

    #[test]
    fn test_empty() {
        let ptr: StaticPtr<dyn Any> = StaticPtr::empty();
        assert!(ptr.is_empty());
        assert!(!ptr.is_some());
        assert!(ptr.get().is_none());
        assert!(ptr.as_ptr().is_none());
        assert_eq!(format!("{:?}", StaticPtr::<dyn Debug>::default()), "<empty>");
        assert_eq!(format!("{:p}", ptr), format!("{:p}", core::ptr::null::<u8>()));
    }

    #[test]
    #[should_panic(expected = "dereferenced an empty StaticPtr")]
    fn test_deref_empty() {
        let ptr: StaticPtr<u32> = StaticPtr::empty();
        let _value: u32 = *ptr;
    }

    #[test]
    fn test_drop() {
        let drops = Rc::new(Cell::new(0));
        let ptr: StaticPtr<dyn Debug> = static_ptr!(Counted(drops.clone()));
        assert_eq!(drops.get(), 0);

        drop(ptr);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_reset() {
        let drops = Rc::new(Cell::new(0));
        let mut ptr: StaticPtr<dyn Debug> = static_ptr!(Counted(drops.clone()));

        ptr.reset();
        assert_eq!(drops.get(), 1);
        assert!(ptr.is_empty());

        ptr.reset();
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_assign_empty() {
        let drops = Rc::new(Cell::new(0));
        let mut ptr: StaticPtr<dyn Debug> = static_ptr!(Counted(drops.clone()));

        ptr.assign(StaticPtr::empty());
        assert_eq!(drops.get(), 1);
        assert!(ptr.is_empty());
    }

    #[test]
    fn test_take() {
        let drops = Rc::new(Cell::new(0));
        let mut ptr: StaticPtr<dyn Debug> = static_ptr!(Counted(drops.clone()));

        let taken = ptr.take();
        assert!(ptr.is_empty());
        assert!(taken.is_some());
        assert_eq!(drops.get(), 0);

        drop(ptr);
        assert_eq!(drops.get(), 0);
        drop(taken);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_native_move() {
        let drops = Rc::new(Cell::new(0));
        let ptr: StaticPtr<dyn Debug> = static_ptr!(Counted(drops.clone()));

        let moved = [ptr];
        assert_eq!(drops.get(), 0);
        assert!(format!("{:?}", moved[0]).starts_with("Counted"));

        drop(moved);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_emplace_returns_concrete() {
        let mut ptr: StaticPtr<dyn Any> = StaticPtr::empty();
        let counter = emplace!(ptr, Cell::new(1u8));
        counter.set(2);

        assert!(ptr.is::<Cell<u8>>());
        assert_eq!(ptr.downcast_ref::<Cell<u8>>().map(Cell::get), Some(2));
    }

    #[test]
    fn test_downcast() {
        let mut ptr: StaticPtr<dyn Any> = static_ptr!(0x01u32);
        assert!(ptr.downcast_ref::<u8>().is_none());
        assert!(ptr.downcast_mut::<u64>().is_none());

        *ptr.downcast_mut::<u32>().unwrap() += 1;
        let ptr = ptr.downcast::<i32>().unwrap_err();
        assert_eq!(ptr.downcast::<u32>().ok(), Some(2));
    }

    #[test]
    fn test_downcast_does_not_drop_twice() {
        let drops = Rc::new(Cell::new(0));
        let ptr: StaticPtr<dyn Any> = static_ptr!(Counted(drops.clone()));

        let value = ptr.downcast::<Counted>().unwrap();
        assert_eq!(drops.get(), 0);
        drop(value);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_slice_base() {
        let ptr: StaticPtr<[u8]> = static_ptr!([1u8, 2, 3, 4]);
        assert_eq!(ptr.len(), 4);
        assert_eq!(&*ptr, &[1, 2, 3, 4]);
    }

    #[test]
    fn test_closure() {
        let offset = 3u64;
        let add: StaticPtr<dyn Fn(u64) -> u64> = static_ptr!(move |x: u64| x + offset);
        assert_eq!(add(4), 7);
    }

    #[test]
    fn test_zst() {
        let ptr: StaticPtr<dyn Any> = static_ptr!(());
        assert!(ptr.is::<()>());
    }

    #[test]
    fn test_display() {
        use core::fmt::Display;

        let ptr: StaticPtr<dyn Display> = static_ptr!(42u16);
        assert_eq!(format!("{}", ptr), "42");
        assert_eq!(ptr.to_string(), "42");

        let empty: StaticPtr<dyn Display> = StaticPtr::empty();
        assert_eq!(format!("{}", empty), "<empty>");

        let named = StaticPtr::new('x');
        assert_eq!(format!("{:>3}", named), "  x");
    }

    #[test]
    fn test_cmp_and_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a = StaticPtr::new(1u32);
        let b = StaticPtr::new(2u32);
        let empty = StaticPtr::<u32>::empty();

        assert!(a < b);
        assert!(empty < a);
        assert_eq!(a, StaticPtr::new(1u32));
        assert_ne!(a, empty);

        let hash = |ptr: &StaticPtr<u32>| {
            let mut hasher = DefaultHasher::new();
            ptr.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&a), hash(&StaticPtr::new(1u32)));
    }

    #[test]
    #[allow(clippy::as_conversions)]
    fn test_alignment() {
        #[repr(align(16))]
        struct Aligned(u8);
        crate::buffer_size!(Aligned);

        let ptr = StaticPtr::new(Aligned(3));
        let addr = ptr.as_ptr().unwrap() as *const u8 as usize;
        assert_eq!(addr % 16, 0);
        assert_eq!(ptr.0, 3);
    }
}
