//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to the value it holds while its
//! shape is preserved: a `Maybe` stays a `Maybe`, an `Either` keeps its error.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use yafl::data::{Maybe, just, nothing};
//! use yafl::typeclass::Functor;
//!
//! let transformed: Maybe<String> = just(5).fmap(|n: i32| n.to_string());
//! assert_eq!(transformed, just("5".to_string()));
//!
//! let empty: Maybe<i32> = nothing();
//! assert_eq!(empty.fmap(|n| n.to_string()), nothing());
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// A function returning `()` yields a functor over `()`, so there is no
/// separate "void" variant of any functor.
///
/// # Examples
///
/// ```rust
/// use yafl::data::{Either, either};
/// use yafl::typeclass::Functor;
///
/// let value: Either<String, i32> = either::ok(2);
/// assert_eq!(value.fmap(|n| n * 21), either::ok(42));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::just;
    /// use yafl::typeclass::Functor;
    ///
    /// assert_eq!(just(5).fmap(|n| n * 2), just(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor must stay usable afterwards or when the inner
    /// type is not `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::just;
    /// use yafl::typeclass::Functor;
    ///
    /// let greeting = just("hello".to_string());
    /// assert_eq!(greeting.fmap_ref(|s| s.len()), just(5));
    /// assert!(greeting.has_value());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::{Maybe, just, nothing};
    /// use yafl::typeclass::Functor;
    ///
    /// assert_eq!(just(5).replace("replaced"), just("replaced"));
    /// assert_eq!(nothing::<i32>().replace("replaced"), nothing());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::just;
    /// use yafl::typeclass::Functor;
    ///
    /// assert_eq!(just(5).void(), just(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// Maps `function` over `value`.
///
/// The free-function form of [`Functor::fmap`], taking the function first.
///
/// # Examples
///
/// ```rust
/// use yafl::data::just;
/// use yafl::typeclass::functor;
///
/// assert_eq!(functor::fmap(|n: i32| n * 21, just(2)), just(42));
/// ```
#[inline]
pub fn fmap<Fa, B, F>(function: F, value: Fa) -> Fa::WithType<B>
where
    Fa: Functor,
    F: FnOnce(Fa::Inner) -> B,
{
    value.fmap(function)
}

/// Lifts a function `a -> b` to a function `F a -> F b`.
///
/// The functor has to be named because the function alone does not say
/// which constructor to lift into.
///
/// # Examples
///
/// ```rust
/// use yafl::data::{Maybe, just, nothing};
/// use yafl::typeclass::functor;
///
/// let lifted = functor::lift::<Maybe<i32>, _, _>(|n: i32| n.to_string());
/// assert_eq!(lifted(just(42)), just("42".to_string()));
/// assert_eq!(lifted(nothing()), nothing());
/// ```
pub fn lift<Fa, B, F>(function: F) -> impl Fn(Fa) -> Fa::WithType<B>
where
    Fa: Functor,
    F: Fn(Fa::Inner) -> B,
{
    move |value: Fa| value.fmap(&function)
}
