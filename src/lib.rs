//! # yafl
//!
//! Yet Another Functional Library: functional programming abstractions for Rust.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor), [`Applicative`](typeclass::Applicative)
//!   and [`Monad`](typeclass::Monad), plus [`DomainTypeInfo`](typeclass::DomainTypeInfo)
//!   for compile-time introspection of the types that implement them
//! - **Data Types**: [`Maybe`](data::Maybe) (a value or nothing) and
//!   [`Either`](data::Either) (a value or an error)
//! - **Function Traits**: callable signature introspection and tuple prefix utilities
//! - **Higher-Order Functions**: composition, Kleisli composition, partial application,
//!   currying and uncurrying
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `function`: Callable and tuple traits
//! - `data`: `Maybe` and `Either`
//! - `compose`: Higher-order functions and macros
//! - `serde`: Serialization support for `Maybe` and `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use yafl::prelude::*;
//!
//! fn parse(text: &str) -> Maybe<i32> {
//!     text.parse::<i32>().ok().into()
//! }
//!
//! let halve = |number: i32| if number % 2 == 0 { just(number / 2) } else { nothing() };
//!
//! assert_eq!(parse("84").bind(halve), just(42));
//! assert_eq!(parse("43").bind(halve), nothing());
//! assert_eq!(parse("forty").bind(halve), nothing());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use yafl::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "data")]
    pub use crate::data::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "compose")]
pub mod compose;
