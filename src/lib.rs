//! # StaticPtr: Owning Pointers Backed by Inline Storage
//!
//! [`StaticPtr`] owns exactly one object behind a base type, like
//! `Box<dyn Trait>`, but the object lives in a fixed-size buffer embedded in
//! the `StaticPtr` itself. Nothing is ever allocated.
//!
//! ## Core Concept
//!
//! A `StaticPtr<dyn Trait>` can hold any type implementing `Trait` whose size
//! fits its buffer. The concrete type is erased, yet moving and dropping still
//! go through that type's own operations: each concrete type gets one
//! immutable operation record, shared by every `StaticPtr` that ever holds it.
//!
//! ## Quick Start
//!
//! ```rust
//! use static_ptr::{buffer_size, emplace, static_ptr, StaticPtr};
//!
//! trait Engine {
//!     fn start(&self) -> &'static str;
//! }
//!
//! struct Steam;
//! struct Jet;
//!
//! impl Engine for Steam {
//!     fn start(&self) -> &'static str {
//!         "chuff"
//!     }
//! }
//!
//! impl Engine for Jet {
//!     fn start(&self) -> &'static str {
//!         "whoosh"
//!     }
//! }
//!
//! // `dyn Engine` gets the default buffer of 16 bytes.
//! buffer_size!(dyn Engine);
//!
//! let mut engine: StaticPtr<dyn Engine> = static_ptr!(Steam);
//! assert_eq!(engine.start(), "chuff");
//!
//! emplace!(engine, Jet);
//! assert_eq!(engine.start(), "whoosh");
//! ```
//!
//! ## Configuration
//!
//! ### Buffer Size
//!
//! The capacity of `StaticPtr<B>` is chosen per base type `B` through
//! [`BufferSize`]:
//!
//! - default: `max(16, size_of::<B>())`, or 16 bytes for `dyn Trait` and slices
//! - [`buffer_size!`]`(B => N)`: exactly `N` bytes for `B` only
//! - [`inherited_buffer_size!`]`(B => N; D1, D2)`: `N` bytes for `B` and its
//!   descendants
//!
//! The buffer is aligned to at least 16 bytes.
//!
//! ### Feature Flags
//!
//! - **`std`** (enabled by default)
//!   - Disable for `#![no_std]` environments: `default-features = false`
//!
//! - **`coerce`** (optional, requires nightly)
//!   - Adds `StaticPtr::new_unsize`, `emplace_unsize` and `upcast`, generic
//!     over `Unsize` instead of going through macros
//!
//! - **`nightly`** (optional, requires nightly)
//!   - Uses strict-provenance pointer metadata APIs, implies `coerce`
//!
//! ## Compile-Time Checks
//!
//! Storing a type that does not coerce to the base, or that is larger or more
//! aligned than the buffer, fails to compile. There is no runtime size check.
//!
//! ```rust,compile_fail
//! use static_ptr::{static_ptr, StaticPtr};
//! use std::any::Any;
//!
//! // 64 bytes do not fit the 16-byte buffer of `dyn Any`.
//! let _big: StaticPtr<dyn Any> = static_ptr!([0u64; 8]);
//! ```
//!
//! ## Transfers
//!
//! Moving a `StaticPtr` with `let b = a;` moves the object along with its
//! buffer. Between two existing pointers, [`StaticPtr::transfer_from`],
//! [`transfer!`] and [`static_ptr_cast!`] move the object and leave the source
//! empty: objects of the same type are move-assigned into the existing storage,
//! otherwise the destination object is dropped first.
//!
//! ```rust
//! use static_ptr::{static_ptr, StaticPtr};
//! use std::fmt::Debug;
//!
//! let mut a: StaticPtr<dyn Debug> = static_ptr!(1u8);
//! let mut b: StaticPtr<dyn Debug> = static_ptr!("two");
//!
//! a.transfer_from(&mut b);
//! assert!(b.is_empty());
//! assert_eq!(format!("{:?}", a), "\"two\"");
//! ```

#![cfg_attr(feature = "nightly", feature(set_ptr_value))]
#![cfg_attr(feature = "coerce", feature(unsize))]
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(stable_features)]
#![deny(missing_docs)]
#![deny(clippy::as_conversions)]

mod ops;
pub mod space;
mod sptr;
mod static_ptr;
mod transfer;

pub use crate::space::BufferSize;
pub use crate::static_ptr::StaticPtr;
