//! Either type - a value or an error.
//!
//! `Either<E, T>` holds either an `Ok(value)` or an `Error(error)`. The error
//! type stays fixed through `fmap`, `apply` and `bind`, and an error stops the
//! computation. `apply` reports the error of its argument before that of the
//! wrapped function.
//!
//! `()` takes the place of a missing payload: `Either<E, ()>` is an action
//! that may fail, `Either<(), T>` a value whose failure carries no detail and
//! `Either<(), ()>` a plain success flag.
//!
//! # Examples
//!
//! ```rust
//! use yafl::data::either::{self, Either};
//!
//! fn parse_port(text: &str) -> Either<String, u16> {
//!     text.parse::<u16>().map_err(|error| error.to_string()).into()
//! }
//!
//! fn ensure_unprivileged(port: u16) -> Either<String, u16> {
//!     if port < 1024 {
//!         either::error(format!("port {port} is privileged"))
//!     } else {
//!         either::ok(port)
//!     }
//! }
//!
//! assert_eq!(parse_port("8080").bind(ensure_unprivileged), either::ok(8080));
//! assert_eq!(
//!     parse_port("80").bind(ensure_unprivileged),
//!     either::error("port 80 is privileged".to_string())
//! );
//! assert!(parse_port("http").bind(ensure_unprivileged).is_error());
//! ```

use super::error::AccessError;
use crate::function::{Callable, Sequence};
use crate::typeclass::{Applicative, DomainTypeInfo, Functor, Monad, TypeConstructor};

/// A value of type `T` or an error of type `E`.
///
/// The error comes first in the type parameters so that `Either<E, _>` reads
/// as a single-argument constructor over the value type.
///
/// # Examples
///
/// ```rust
/// use yafl::data::Either;
///
/// let ok: Either<&str, i32> = Either::Ok(3);
/// let failed: Either<&str, i32> = Either::Error("boom");
///
/// assert!(ok.is_ok());
/// assert!(failed.is_error());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<E, T> {
    /// The error case.
    Error(E),
    /// The value case.
    Ok(T),
}

impl<E, T> Either<E, T> {
    /// Returns `true` when a value is held.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` when an error is held.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Takes the held value.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoValue`] when an error is held.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::{AccessError, Either};
    ///
    /// assert_eq!(Either::<&str, i32>::Ok(1).value(), Ok(1));
    /// assert_eq!(Either::<&str, i32>::Error("e").value(), Err(AccessError::NoValue));
    /// ```
    #[inline]
    pub fn value(self) -> Result<T, AccessError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Error(_) => Err(AccessError::NoValue),
        }
    }

    /// Takes the held error.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoError`] when a value is held.
    #[inline]
    pub fn error(self) -> Result<E, AccessError> {
        match self {
            Self::Error(error) => Ok(error),
            Self::Ok(_) => Err(AccessError::NoError),
        }
    }

    /// Borrows the held value.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoValue`] when an error is held.
    #[inline]
    pub const fn value_ref(&self) -> Result<&T, AccessError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Error(_) => Err(AccessError::NoValue),
        }
    }

    /// Borrows the held error.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoError`] when a value is held.
    #[inline]
    pub const fn error_ref(&self) -> Result<&E, AccessError> {
        match self {
            Self::Error(error) => Ok(error),
            Self::Ok(_) => Err(AccessError::NoError),
        }
    }

    /// Takes the held value or returns `default`.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => default,
        }
    }

    /// Takes the held error or returns `default`.
    #[inline]
    pub fn error_or(self, default: E) -> E {
        match self {
            Self::Error(error) => error,
            Self::Ok(_) => default,
        }
    }

    /// Converts `&Either<E, T>` into `Either<&E, &T>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&E, &T> {
        match self {
            Self::Error(error) => Either::Error(error),
            Self::Ok(value) => Either::Ok(value),
        }
    }

    /// Transforms the held value, leaving an error untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Either<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Either::Ok(function(value)),
            Self::Error(error) => Either::Error(error),
        }
    }

    /// Transforms the held error, leaving a value untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::Either;
    ///
    /// let failed: Either<i32, &str> = Either::Error(404);
    /// assert_eq!(failed.map_error(|code| format!("HTTP {code}")), Either::Error("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_error<D, F>(self, function: F) -> Either<D, T>
    where
        F: FnOnce(E) -> D,
    {
        match self {
            Self::Ok(value) => Either::Ok(value),
            Self::Error(error) => Either::Error(function(error)),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// `function` is not called when an error is held.
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Either<E, U>
    where
        F: FnOnce(T) -> Either<E, U>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Error(error) => Either::Error(error),
        }
    }

    /// Alias for [`Either::bind`].
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Either<E, U>
    where
        F: FnOnce(T) -> Either<E, U>,
    {
        self.bind(function)
    }

    /// Collapses both cases into one value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::Either;
    ///
    /// let describe = |outcome: Either<String, u32>| {
    ///     outcome.fold(|error| format!("failed: {error}"), |count| format!("{count} items"))
    /// };
    ///
    /// assert_eq!(describe(Either::Ok(3)), "3 items");
    /// assert_eq!(describe(Either::Error("timeout".into())), "failed: timeout");
    /// ```
    #[inline]
    pub fn fold<R, OnError, OnOk>(self, on_error: OnError, on_ok: OnOk) -> R
    where
        OnError: FnOnce(E) -> R,
        OnOk: FnOnce(T) -> R,
    {
        match self {
            Self::Error(error) => on_error(error),
            Self::Ok(value) => on_ok(value),
        }
    }

    /// Converts into the standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<E, T> Either<E, Either<E, T>> {
    /// Removes one level of nesting. The outer error wins.
    #[inline]
    pub fn flatten(self) -> Either<E, T> {
        self.bind(|inner| inner)
    }
}

impl<E, F> Either<E, F> {
    /// Applies the held function to the value held by `argument`.
    ///
    /// The argument is inspected first: when both sides hold an error, the
    /// error of `argument` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::Either;
    ///
    /// let double: Either<&str, fn(i32) -> i32> = Either::Ok(|n| n * 2);
    /// assert_eq!(double.apply(Either::Ok(4)), Either::Ok(8));
    /// assert_eq!(double.apply(Either::Error("no input")), Either::Error("no input"));
    ///
    /// let broken: Either<&str, fn(i32) -> i32> = Either::Error("no function");
    /// assert_eq!(broken.apply(Either::Ok(4)), Either::Error("no function"));
    /// assert_eq!(broken.apply(Either::Error("no input")), Either::Error("no input"));
    /// ```
    #[inline]
    pub fn apply<A, R>(self, argument: Either<E, A>) -> Either<E, R>
    where
        F: FnOnce(A) -> R,
    {
        match (self, argument) {
            (_, Either::Error(error)) | (Self::Error(error), Either::Ok(_)) => Either::Error(error),
            (Self::Ok(function), Either::Ok(argument)) => Either::Ok(function(argument)),
        }
    }

    /// Applies the held function to a plain argument.
    #[inline]
    pub fn apply_value<A, R>(self, argument: A) -> Either<E, R>
    where
        F: FnOnce(A) -> R,
    {
        self.map(|function| function(argument))
    }

    /// Calls the held zero-argument function.
    #[inline]
    pub fn call<R>(self) -> Either<E, R>
    where
        F: FnOnce() -> R,
    {
        self.map(|function| function())
    }
}

impl<E, T> From<Result<T, E>> for Either<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<E, T> From<Either<E, T>> for Result<T, E> {
    fn from(either: Either<E, T>) -> Self {
        match either {
            Either::Ok(value) => Ok(value),
            Either::Error(error) => Err(error),
        }
    }
}

impl<E, T> TypeConstructor for Either<E, T> {
    type Inner = T;
    type WithType<B> = Either<E, B>;
}

impl<E: Clone, T> Functor for Either<E, T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<E, B>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Ok(value) => Either::Ok(function(value)),
            Self::Error(error) => Either::Error(error.clone()),
        }
    }
}

impl<E: Clone, T> Applicative for Either<E, T> {
    #[inline]
    fn pure<B>(value: B) -> Either<E, B> {
        Either::Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<E, B>, function: F) -> Either<E, C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Ok(a), Either::Ok(b)) => Either::Ok(function(a, b)),
            (Self::Error(error), _) | (Self::Ok(_), Either::Error(error)) => Either::Error(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Either<E, B>, third: Either<E, C>, function: F) -> Either<E, D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Ok(a), Either::Ok(b), Either::Ok(c)) => Either::Ok(function(a, b, c)),
            (Self::Error(error), _, _)
            | (Self::Ok(_), Either::Error(error), _)
            | (Self::Ok(_), Either::Ok(_), Either::Error(error)) => Either::Error(error),
        }
    }

    /// Unlike `map2`, the error of `other` wins when both sides hold one.
    #[inline]
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        match (self, other) {
            (_, Either::Error(error)) | (Self::Error(error), Either::Ok(_)) => Either::Error(error),
            (Self::Ok(function), Either::Ok(argument)) => Either::Ok(function(argument)),
        }
    }
}

impl<E: Clone, T> Monad for Either<E, T> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(T) -> Either<E, B>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Error(error) => Either::Error(error),
        }
    }
}

impl<E, T> DomainTypeInfo for Either<E, T> {
    const HAS_FUNCTOR_BASE: bool = true;
    const HAS_APPLICATIVE_BASE: bool = true;
    const HAS_MONADIC_BASE: bool = true;

    type Error = E;

    #[inline]
    fn into_outcome(self) -> Result<T, E> {
        self.into()
    }

    #[inline]
    fn handle_error<B>(error: E) -> Either<E, B> {
        Either::Error(error)
    }
}

/// Wraps `value` in `Ok`.
#[inline]
pub const fn ok<E, T>(value: T) -> Either<E, T> {
    Either::Ok(value)
}

/// Wraps `error` in `Error`.
#[inline]
pub const fn error<E, T>(error: E) -> Either<E, T> {
    Either::Error(error)
}

/// Lifts a function of `n` plain arguments to a function of a tuple of `n`
/// `Either` arguments sharing one error type.
///
/// The lifted function returns `Ok` of the result when every argument holds
/// a value, and otherwise the error of the leftmost failed argument.
///
/// # Examples
///
/// ```rust
/// use yafl::data::either::{self, Either};
///
/// let divide = either::lift::<_, (Either<&str, f64>, Either<&str, f64>), &str>(|a: f64, b: f64| a / b);
///
/// assert_eq!(divide((either::ok(1.0), either::ok(4.0))), either::ok(0.25));
/// assert_eq!(divide((either::error("no dividend"), either::error("no divisor"))), either::error("no dividend"));
/// ```
pub fn lift<F, Arguments, E>(
    function: F,
) -> impl Fn(Arguments) -> Either<E, <F as Callable<Arguments::Values>>::Output>
where
    Arguments: Sequence<E>,
    F: Callable<Arguments::Values>,
{
    move |arguments: Arguments| match arguments.sequence() {
        Ok(values) => Either::Ok(function.call_with(values)),
        Err(error) => <Either<E, ()>>::handle_error(error),
    }
}
