//! Type class traits for functional programming abstractions.
//!
//! The hierarchy is `Functor` → `Applicative` → `Monad`:
//!
//! - [`Functor`]: mapping over a value in a context
//! - [`Applicative`]: lifting values and applying wrapped functions
//! - [`Monad`]: sequencing computations where each step depends on the last
//!
//! [`DomainTypeInfo`] describes which of these a data type of this library
//! implements, together with its failure type.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses Generic
//! Associated Types to name "the same constructor applied to another type",
//! which lets the traits above be written once for every data type.
//!
//! # Examples
//!
//! ```rust
//! use yafl::data::{Maybe, just};
//! use yafl::typeclass::{Applicative, Monad};
//!
//! fn label<M>(value: M) -> M::WithType<String>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     value.bind(|n| M::pure(format!("#{n}")))
//! }
//!
//! assert_eq!(label(just(42)), just("#42".to_string()));
//! assert_eq!(label(Maybe::Nothing), Maybe::Nothing);
//! ```

mod higher;

pub mod applicative;
pub mod domain;
pub mod functor;
pub mod monad;

pub use applicative::Applicative;
pub use domain::DomainTypeInfo;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
