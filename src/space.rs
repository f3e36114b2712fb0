//! Buffer sizing policy.
//!
//! Every base type used with [`StaticPtr`](crate::StaticPtr) maps to a `Space`:
//! a type that is never instantiated, only measured. The capacity of the
//! container is `size_of::<Space>()`.
//!
//! The default rule is `max(16, size_of::<B>())` for sized bases and `16` for
//! unsized ones (`dyn Trait`, slices, `str`). Two overrides exist:
//!
//! - [`buffer_size!`](crate::buffer_size) with `=> N` fixes the capacity of one
//!   exact type. Other types of the same family are unaffected.
//! - [`inherited_buffer_size!`](crate::inherited_buffer_size) fixes the capacity
//!   of a base and binds each listed descendant to it.
//!
//! ```
//! use static_ptr::{buffer_size, inherited_buffer_size, BufferSize};
//!
//! trait Engine {}
//! trait Language {}
//!
//! struct Cxx([u8; 64]);
//! impl Language for Cxx {}
//!
//! buffer_size!(dyn Engine => 1024);
//! inherited_buffer_size!(dyn Language => 1024; Cxx);
//!
//! assert_eq!(<dyn Engine as BufferSize>::BUFFER_SIZE, 1024);
//! assert_eq!(<Cxx as BufferSize>::BUFFER_SIZE, 1024);
//! assert_eq!(<u8 as BufferSize>::BUFFER_SIZE, 16);
//! ```

use core::any::Any;
use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop, MaybeUninit};

/// The smallest capacity produced by the default rule.
pub const MIN_BUFFER_SIZE: usize = 16;

/// Minimum alignment of every buffer, the `max_align_t` of common targets.
pub const MAX_ALIGN: usize = 16;

/// Compile-time capacity of the buffer used for a base type.
///
/// Implement it with [`buffer_size!`](crate::buffer_size) or
/// [`inherited_buffer_size!`](crate::inherited_buffer_size) rather than by hand.
pub trait BufferSize {
    /// Storage the buffer is sized after. Never constructed.
    type Space;

    /// Capacity in bytes.
    const BUFFER_SIZE: usize = mem::size_of::<Self::Space>();

    /// Largest size of an object viewed as `Self`.
    ///
    /// `size_of::<Self>()` for sized types, the whole buffer otherwise. The
    /// sizing macros fill it in.
    const FOOTPRINT: usize = Buffer::<Self::Space>::CAPACITY;

    /// Largest alignment of an object viewed as `Self`.
    const FOOTPRINT_ALIGN: usize = Buffer::<Self::Space>::ALIGN;
}

/// Space of the default rule for a sized type: `max(16, size_of::<T>())` bytes.
///
/// `size_of::<T>()` is a multiple of `align_of::<T>()`, and 16 is a multiple of
/// any smaller alignment, so the union needs no extra padding.
#[allow(dead_code)]
#[repr(C)]
pub union DefaultSpace<T> {
    min: [u8; MIN_BUFFER_SIZE],
    value: ManuallyDrop<T>,
}

/// Space of exactly `N` bytes.
pub type Bytes<const N: usize> = [u8; N];

/// Inline storage of a [`StaticPtr`](crate::StaticPtr).
#[repr(C, align(16))]
pub struct Buffer<S> {
    space: MaybeUninit<S>,
}

impl<S> Buffer<S> {
    /// Capacity in bytes.
    pub const CAPACITY: usize = mem::size_of::<S>();

    /// Alignment guaranteed for the first byte.
    pub const ALIGN: usize = mem::align_of::<Self>();

    pub(crate) const fn uninit() -> Self {
        Buffer {
            space: MaybeUninit::uninit(),
        }
    }

    pub(crate) fn as_ptr(&self) -> *const u8 {
        self.space.as_ptr().cast()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut u8 {
        self.space.as_mut_ptr().cast()
    }
}

impl<S> fmt::Debug for Buffer<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("capacity", &Self::CAPACITY)
            .field("align", &Self::ALIGN)
            .finish()
    }
}

/// Compile-time proof that a `T` can live in a `Buffer<S>`.
pub(crate) struct Fits<T, S>(PhantomData<(T, S)>);

impl<T, S> Fits<T, S> {
    pub(crate) const OK: () = assert!(
        mem::size_of::<T>() <= Buffer::<S>::CAPACITY && mem::align_of::<T>() <= Buffer::<S>::ALIGN,
        "value does not fit into the buffer of this StaticPtr; raise the capacity with `buffer_size!`"
    );
}

/// Compile-time proof that any object held by a `StaticPtr<U>` can live in a
/// `Buffer<S>`.
pub(crate) struct FitsSource<U: ?Sized, S>(PhantomData<(S, *const U)>);

impl<U: ?Sized + BufferSize, S> FitsSource<U, S> {
    pub(crate) const OK: () = assert!(
        U::FOOTPRINT <= Buffer::<S>::CAPACITY && U::FOOTPRINT_ALIGN <= Buffer::<S>::ALIGN,
        "objects of the source StaticPtr may not fit into the destination buffer"
    );
}

/// Declares the buffer size of a base type.
///
/// - `buffer_size!(T)`: default rule, `max(16, size_of::<T>())`.
/// - `buffer_size!(dyn Trait)`: default rule for a trait object, 16 bytes.
/// - `buffer_size!(T => N)`: exact-type override, `N` bytes.
///
/// ```
/// use static_ptr::{buffer_size, BufferSize};
///
/// trait Animal {}
/// struct Big([u8; 40]);
///
/// buffer_size!(dyn Animal);
/// buffer_size!(Big);
///
/// assert_eq!(<dyn Animal as BufferSize>::BUFFER_SIZE, 16);
/// assert_eq!(<Big as BufferSize>::BUFFER_SIZE, 40);
/// ```
#[macro_export]
macro_rules! buffer_size {
    (dyn $($tokens:tt)+) => {
        $crate::buffer_size!(@dyn [] $($tokens)+);
    };
    (@dyn [$($bound:tt)+] => $size:expr) => {
        impl $crate::BufferSize for dyn $($bound)+ {
            type Space = $crate::space::Bytes<{ $size }>;
        }
    };
    (@dyn [$($bound:tt)+]) => {
        impl $crate::BufferSize for dyn $($bound)+ {
            type Space = $crate::space::Bytes<{ $crate::space::MIN_BUFFER_SIZE }>;
        }
    };
    (@dyn [$($bound:tt)*] $next:tt $($rest:tt)*) => {
        $crate::buffer_size!(@dyn [$($bound)* $next] $($rest)*);
    };
    ($t:ty => $size:expr) => {
        impl $crate::BufferSize for $t {
            type Space = $crate::space::Bytes<{ $size }>;
            const FOOTPRINT: usize = ::core::mem::size_of::<$t>();
            const FOOTPRINT_ALIGN: usize = ::core::mem::align_of::<$t>();
        }
    };
    ($t:ty) => {
        impl $crate::BufferSize for $t {
            type Space = $crate::space::DefaultSpace<$t>;
            const FOOTPRINT: usize = ::core::mem::size_of::<$t>();
            const FOOTPRINT_ALIGN: usize = ::core::mem::align_of::<$t>();
        }
    };
}

/// Declares a buffer size shared by a base type and its descendants.
///
/// `inherited_buffer_size!(Base => N; A, B)` gives `Base` a capacity of `N` and
/// binds `A` and `B` to it. Descendants declared elsewhere join with
/// `inherited_buffer_size!(C: Base)`. Descendants are sized types.
///
/// ```
/// use static_ptr::{inherited_buffer_size, BufferSize};
///
/// trait Language {}
/// struct Cxx([u8; 64]);
/// struct Rust;
///
/// inherited_buffer_size!(dyn Language => 512; Cxx);
/// inherited_buffer_size!(Rust: dyn Language);
///
/// assert_eq!(<dyn Language as BufferSize>::BUFFER_SIZE, 512);
/// assert_eq!(<Cxx as BufferSize>::BUFFER_SIZE, 512);
/// assert_eq!(<Rust as BufferSize>::BUFFER_SIZE, 512);
/// ```
#[macro_export]
macro_rules! inherited_buffer_size {
    (@base [$($base:tt)+] => $size:expr $(; $($derived:ty),* $(,)?)?) => {
        $crate::buffer_size!($($base)+ => $size);
        $crate::inherited_buffer_size!(@derive [$($base)+] $($($derived),*)?);
    };
    (@base [$($base:tt)*] $next:tt $($rest:tt)*) => {
        $crate::inherited_buffer_size!(@base [$($base)* $next] $($rest)*);
    };
    (@derive $base:tt $($derived:ty),*) => {
        $(
            $crate::inherited_buffer_size!(@one $base $derived);
        )*
    };
    (@one [$($base:tt)+] $derived:ty) => {
        impl $crate::BufferSize for $derived {
            type Space = <$($base)+ as $crate::BufferSize>::Space;
            const FOOTPRINT: usize = ::core::mem::size_of::<$derived>();
            const FOOTPRINT_ALIGN: usize = ::core::mem::align_of::<$derived>();
        }
    };
    ($derived:ty : $base:ty) => {
        $crate::inherited_buffer_size!(@one [$base] $derived);
    };
    ($($tokens:tt)+) => {
        $crate::inherited_buffer_size!(@base [] $($tokens)+);
    };
}

macro_rules! default_buffer_size {
    ($($t:ty),* $(,)?) => {
        $(
            impl BufferSize for $t {
                type Space = DefaultSpace<$t>;
                const FOOTPRINT: usize = mem::size_of::<$t>();
                const FOOTPRINT_ALIGN: usize = mem::align_of::<$t>();
            }
        )*
    };
}

default_buffer_size!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl<T, const N: usize> BufferSize for [T; N] {
    type Space = DefaultSpace<[T; N]>;
    const FOOTPRINT: usize = mem::size_of::<[T; N]>();
    const FOOTPRINT_ALIGN: usize = mem::align_of::<[T; N]>();
}

impl<T> BufferSize for [T] {
    type Space = Bytes<MIN_BUFFER_SIZE>;
}

impl BufferSize for str {
    type Space = Bytes<MIN_BUFFER_SIZE>;
}

macro_rules! unsized_buffer_size {
    ($($t:ty),* $(,)?) => {
        $(
            impl BufferSize for $t {
                type Space = Bytes<MIN_BUFFER_SIZE>;
            }
        )*
    };
}

unsized_buffer_size!(
    dyn Any,
    dyn Any + Send,
    dyn Any + Send + Sync,
    dyn fmt::Debug,
    dyn fmt::Debug + Send,
    dyn fmt::Display,
    dyn fmt::Display + Send,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    struct Odd([u8; 24]);
    buffer_size!(Odd);

    #[test]
    fn test_default_space() {
        assert_eq!(mem::size_of::<DefaultSpace<u8>>(), 16);
        assert_eq!(mem::size_of::<DefaultSpace<[u64; 2]>>(), 16);
        assert_eq!(mem::size_of::<DefaultSpace<[u64; 3]>>(), 24);
        assert_eq!(mem::size_of::<DefaultSpace<Odd>>(), 24);
        assert_eq!(<Odd as BufferSize>::BUFFER_SIZE, 24);
    }

    #[test]
    fn test_buffer_alignment() {
        assert_eq!(Buffer::<Bytes<1>>::ALIGN, MAX_ALIGN);
        assert_eq!(Buffer::<Bytes<24>>::CAPACITY, 24);
        assert_eq!(mem::size_of::<Buffer<Bytes<24>>>(), 32);

        #[allow(dead_code)]
        #[repr(align(64))]
        struct Wide(u8);
        assert_eq!(Buffer::<DefaultSpace<Wide>>::ALIGN, 64);
        assert_eq!(Buffer::<DefaultSpace<Wide>>::CAPACITY, 64);
    }

    #[test]
    fn test_footprint() {
        assert_eq!(<u8 as BufferSize>::BUFFER_SIZE, 16);
        assert_eq!(<u8 as BufferSize>::FOOTPRINT, 1);
        assert_eq!(<u8 as BufferSize>::FOOTPRINT_ALIGN, 1);
        assert_eq!(<Odd as BufferSize>::FOOTPRINT, 24);
        assert_eq!(<[u16; 3] as BufferSize>::FOOTPRINT, 6);

        // unsized bases may hold anything their buffer can
        assert_eq!(<dyn Any as BufferSize>::FOOTPRINT, MIN_BUFFER_SIZE);
        assert_eq!(<dyn Any as BufferSize>::FOOTPRINT_ALIGN, MAX_ALIGN);
        assert_eq!(<str as BufferSize>::FOOTPRINT, MIN_BUFFER_SIZE);
    }

    #[test]
    fn test_unsized_default() {
        assert_eq!(<dyn Any as BufferSize>::BUFFER_SIZE, MIN_BUFFER_SIZE);
        assert_eq!(<[u64] as BufferSize>::BUFFER_SIZE, MIN_BUFFER_SIZE);
        assert_eq!(<str as BufferSize>::BUFFER_SIZE, MIN_BUFFER_SIZE);
    }
}
