//! Compile-time information about the library's own data types.
//!
//! [`DomainTypeInfo`] tells generic code which type classes a type takes part
//! in and how to move between the type and a plain `Result`. Types outside the
//! library do not implement it, so asking them for that information fails to
//! compile.
//!
//! # Examples
//!
//! ```rust
//! use yafl::data::{Either, Maybe};
//! use yafl::typeclass::DomainTypeInfo;
//!
//! assert!(<Maybe<i32>>::HAS_MONADIC_BASE);
//! assert!(<Either<String, i32>>::HAS_APPLICATIVE_BASE);
//!
//! let missing: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(missing.into_outcome(), Err(()));
//! ```

use super::higher::TypeConstructor;

/// Introspection for the data types of this library.
///
/// `into_outcome` and `handle_error` are the two halves needed to run several
/// domain values through plain `?` and rebuild a failure of another value
/// type afterwards.
pub trait DomainTypeInfo: TypeConstructor + Sized {
    /// Whether the type implements [`Functor`](super::Functor).
    const HAS_FUNCTOR_BASE: bool;

    /// Whether the type implements [`Applicative`](super::Applicative).
    const HAS_APPLICATIVE_BASE: bool;

    /// Whether the type implements [`Monad`](super::Monad).
    const HAS_MONADIC_BASE: bool;

    /// What a failed value carries. `()` when a failure holds nothing.
    type Error;

    /// Converts the value into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the carried failure when the value holds none.
    fn into_outcome(self) -> Result<Self::Inner, Self::Error>;

    /// Rebuilds a failure with a different value type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::{Either, Maybe};
    /// use yafl::typeclass::DomainTypeInfo;
    ///
    /// let rebuilt: Either<&str, String> = <Either<&str, i32>>::handle_error("failed");
    /// assert_eq!(rebuilt, Either::Error("failed"));
    ///
    /// let rebuilt: Maybe<String> = <Maybe<i32>>::handle_error(());
    /// assert_eq!(rebuilt, Maybe::Nothing);
    /// ```
    fn handle_error<B>(error: Self::Error) -> Self::WithType<B>;
}
