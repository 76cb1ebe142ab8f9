//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] records the type a constructor is currently applied to
//! and how to re-apply it to another type, which is all that `Functor`,
//! `Applicative` and `Monad` need.
//!
//! # Example
//!
//! ```rust
//! use yafl::data::{Either, Maybe};
//! use yafl::typeclass::TypeConstructor;
//!
//! fn assert_rebuilds<T: TypeConstructor<WithType<String> = U>, U>() {}
//!
//! assert_rebuilds::<Maybe<i32>, Maybe<String>>();
//! // The error type of an Either stays fixed.
//! assert_rebuilds::<Either<u8, i32>, Either<u8, String>>();
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`. For `Either<E, i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` keeps the result chainable.
    type WithType<B>: TypeConstructor<Inner = B>;
}
