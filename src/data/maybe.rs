//! Maybe type - a value that may be absent.
//!
//! `Maybe<T>` is either `Just(value)` or `Nothing`. It implements the whole
//! `Functor` → `Applicative` → `Monad` hierarchy, so absence flows through
//! every combinator without explicit checks.
//!
//! `Maybe<()>` stands for a computation that may or may not have happened
//! and carries no result.
//!
//! # Examples
//!
//! ```rust
//! use yafl::data::maybe::{self, Maybe, just, nothing};
//!
//! fn find_user(id: u32) -> Maybe<&'static str> {
//!     match id {
//!         1 => just("alice"),
//!         2 => just("bob"),
//!         _ => nothing(),
//!     }
//! }
//!
//! let greeting = find_user(1).map(|name| format!("hello, {name}"));
//! assert_eq!(greeting, just("hello, alice".to_string()));
//! assert_eq!(find_user(3).value_or("guest"), "guest");
//!
//! let join = maybe::lift::<_, (Maybe<&str>, Maybe<&str>)>(|a: &str, b: &str| format!("{a} & {b}"));
//! assert_eq!(join((find_user(1), find_user(2))), just("alice & bob".to_string()));
//! assert_eq!(join((find_user(1), find_user(9))), nothing());
//! ```

use super::error::AccessError;
use crate::function::{Callable, Sequence};
use crate::typeclass::{Applicative, DomainTypeInfo, Functor, Monad, TypeConstructor};

/// An optional value: `Just(value)` or `Nothing`.
///
/// # Examples
///
/// ```rust
/// use yafl::data::Maybe;
///
/// let present: Maybe<i32> = Maybe::Just(3);
/// let absent: Maybe<i32> = Maybe::Nothing;
///
/// assert!(present.has_value());
/// assert!(absent.is_nothing());
/// assert_eq!(Maybe::<i32>::default(), absent);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    Nothing,
    /// A value.
    Just(T),
}

impl<T> Maybe<T> {
    /// Returns `true` when a value is held.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` when no value is held.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        !self.has_value()
    }

    /// Takes the held value.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Nothing`] when no value is held.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::{AccessError, just, nothing};
    ///
    /// assert_eq!(just(5).value(), Ok(5));
    /// assert_eq!(nothing::<i32>().value(), Err(AccessError::Nothing));
    /// ```
    #[inline]
    pub fn value(self) -> Result<T, AccessError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(AccessError::Nothing),
        }
    }

    /// Borrows the held value.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Nothing`] when no value is held.
    #[inline]
    pub const fn value_ref(&self) -> Result<&T, AccessError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(AccessError::Nothing),
        }
    }

    /// Takes the held value or returns `default`.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Takes the held value or computes one with `default`.
    #[inline]
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default(),
        }
    }

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into the standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Transforms the held value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::{just, nothing};
    ///
    /// assert_eq!(just(2).map(|n| n * 21), just(42));
    /// assert_eq!(nothing::<i32>().map(|n| n * 21), nothing());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a computation that may itself produce nothing.
    ///
    /// `function` is not called when no value is held.
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Alias for [`Maybe::bind`].
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.bind(function)
    }

    /// Keeps the value only when `predicate` accepts it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::{just, nothing};
    ///
    /// assert_eq!(just(4).filter(|n| n % 2 == 0), just(4));
    /// assert_eq!(just(3).filter(|n| n % 2 == 0), nothing());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) => {
                if predicate(&value) {
                    Self::Just(value)
                } else {
                    Self::Nothing
                }
            }
            Self::Nothing => Self::Nothing,
        }
    }

    /// Returns `self` when it holds a value, otherwise `alternative`.
    #[inline]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => alternative,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::{Maybe, just, nothing};
    ///
    /// assert_eq!(just(just(1)).flatten(), just(1));
    /// assert_eq!(just(nothing::<i32>()).flatten(), nothing());
    /// assert_eq!(Maybe::<Maybe<i32>>::Nothing.flatten(), nothing());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

impl<F> Maybe<F> {
    /// Applies the held function to the value held by `argument`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::{just, nothing};
    ///
    /// let negate = just(|n: i32| -n);
    /// assert_eq!(negate.apply(just(3)), just(-3));
    /// assert_eq!(negate.apply(nothing()), nothing());
    /// ```
    #[inline]
    pub fn apply<A, R>(self, argument: Maybe<A>) -> Maybe<R>
    where
        F: FnOnce(A) -> R,
    {
        match (self, argument) {
            (Self::Just(function), Maybe::Just(argument)) => Maybe::Just(function(argument)),
            _ => Maybe::Nothing,
        }
    }

    /// Applies the held function to a plain argument.
    #[inline]
    pub fn apply_value<A, R>(self, argument: A) -> Maybe<R>
    where
        F: FnOnce(A) -> R,
    {
        self.map(|function| function(argument))
    }

    /// Calls the held zero-argument function.
    #[inline]
    pub fn call<R>(self) -> Maybe<R>
    where
        F: FnOnce() -> R,
    {
        self.map(|function| function())
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Just(a), Maybe::Just(b), Maybe::Just(c)) => Maybe::Just(function(a, b, c)),
            _ => Maybe::Nothing,
        }
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> DomainTypeInfo for Maybe<T> {
    const HAS_FUNCTOR_BASE: bool = true;
    const HAS_APPLICATIVE_BASE: bool = true;
    const HAS_MONADIC_BASE: bool = true;

    type Error = ();

    #[inline]
    fn into_outcome(self) -> Result<T, ()> {
        self.value().map_err(|_| ())
    }

    #[inline]
    fn handle_error<B>((): ()) -> Maybe<B> {
        Maybe::Nothing
    }
}

/// Wraps `value` in `Just`.
#[inline]
pub const fn just<T>(value: T) -> Maybe<T> {
    Maybe::Just(value)
}

/// An empty `Maybe`.
#[inline]
pub const fn nothing<T>() -> Maybe<T> {
    Maybe::Nothing
}

/// Lifts a function of `n` plain arguments to a function of a tuple of `n`
/// `Maybe` arguments.
///
/// The lifted function returns `Just` of the result when every argument
/// holds a value and `Nothing` otherwise. Arguments are inspected from left
/// to right and `function` only runs when all of them hold a value.
///
/// # Examples
///
/// ```rust
/// use yafl::data::maybe::{self, Maybe, just, nothing};
///
/// let area = maybe::lift::<_, (Maybe<u32>, Maybe<u32>)>(|w: u32, h: u32| w * h);
/// assert_eq!(area((just(3), just(4))), just(12));
/// assert_eq!(area((just(3), nothing())), nothing());
///
/// let answer = maybe::lift::<_, ()>(|| 42);
/// assert_eq!(answer(()), just(42));
/// ```
pub fn lift<F, Arguments>(
    function: F,
) -> impl Fn(Arguments) -> Maybe<<F as Callable<Arguments::Values>>::Output>
where
    Arguments: Sequence<()>,
    F: Callable<Arguments::Values>,
{
    move |arguments: Arguments| match arguments.sequence() {
        Ok(values) => Maybe::Just(function.call_with(values)),
        Err(error) => <Maybe<()>>::handle_error(error),
    }
}
