//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `bind`, which lets the result of one
//! step decide the next step. A step that produces no value (or an error)
//! stops the chain: later functions are never called.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.bind(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use yafl::data::{Either, either};
//! use yafl::typeclass::Monad;
//!
//! fn parse(text: &str) -> Either<String, i32> {
//!     text.parse::<i32>().map_err(|_| format!("not a number: {text}")).into()
//! }
//!
//! fn reciprocal(n: i32) -> Either<String, f64> {
//!     if n == 0 { either::error("division by zero".to_string()) } else { either::ok(1.0 / f64::from(n)) }
//! }
//!
//! assert_eq!(parse("4").bind(reciprocal), either::ok(0.25));
//! assert_eq!(parse("0").bind(reciprocal), either::error("division by zero".to_string()));
//! assert_eq!(parse("x").bind(reciprocal), either::error("not a number: x".to_string()));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use yafl::data::{just, nothing};
/// use yafl::typeclass::Monad;
///
/// let halve = |n: i32| if n % 2 == 0 { just(n / 2) } else { nothing() };
///
/// assert_eq!(just(20).bind(halve).bind(halve), just(5));
/// assert_eq!(just(10).bind(halve).bind(halve), nothing());
/// ```
pub trait Monad: Applicative {
    /// Applies a function returning a new monad to the value inside and
    /// flattens the result.
    ///
    /// In Haskell this is `>>=`.
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::bind`], matching `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.bind(function)
    }

    /// Sequences two computations, discarding the value of the first.
    ///
    /// A failed `self` propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::{just, nothing};
    /// use yafl::typeclass::Monad;
    ///
    /// assert_eq!(just(5).then(just("next")), just("next"));
    /// assert_eq!(nothing::<i32>().then(just("next")), nothing());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.bind(|_| next)
    }
}

/// Binds `function` over `value`.
///
/// # Examples
///
/// ```rust
/// use yafl::data::just;
/// use yafl::typeclass::monad;
///
/// assert_eq!(monad::bind(|n: i32| just(n * 2), just(21)), just(42));
/// ```
#[inline]
pub fn bind<M, B, F>(function: F, value: M) -> M::WithType<B>
where
    M: Monad,
    F: FnOnce(M::Inner) -> M::WithType<B>,
{
    value.bind(function)
}

/// Lifts a function `a -> M b` to a function `M a -> M b`.
///
/// # Examples
///
/// ```rust
/// use yafl::data::{Maybe, just, nothing};
/// use yafl::typeclass::monad;
///
/// let checked_double = monad::lift::<Maybe<i32>, _, _>(|n: i32| n.checked_mul(2).into());
/// assert_eq!(checked_double(just(21)), just(42));
/// assert_eq!(checked_double(just(i32::MAX)), nothing());
/// assert_eq!(checked_double(nothing()), nothing());
/// ```
pub fn lift<M, B, F>(function: F) -> impl Fn(M) -> M::WithType<B>
where
    M: Monad,
    F: Fn(M::Inner) -> M::WithType<B>,
{
    move |value: M| value.bind(&function)
}

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;
    use crate::data::{Either, Maybe};
    use rstest::rstest;

    fn safe_divide(dividend: i32) -> impl Fn(i32) -> Maybe<i32> {
        move |divisor| {
            if divisor == 0 {
                Maybe::Nothing
            } else {
                Maybe::Just(dividend / divisor)
            }
        }
    }

    #[rstest]
    #[case(Maybe::Just(4), Maybe::Just(25))]
    #[case(Maybe::Just(0), Maybe::Nothing)]
    #[case(Maybe::Nothing, Maybe::Nothing)]
    fn maybe_bind(#[case] value: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(value.bind(safe_divide(100)), expected);
    }

    #[rstest]
    fn bind_short_circuits_without_calling() {
        let mut calls = 0;
        let value: Either<&str, i32> = Either::Error("stop");
        let result = value.bind(|n| {
            calls += 1;
            Either::<&str, i32>::Ok(n)
        });
        assert_eq!(result, Either::Error("stop"));
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn either_bind_to_unit() {
        let value: Either<String, i32> = Either::Ok(1);
        let result: Either<String, ()> = value.bind(|_| Either::Ok(()));
        assert_eq!(result, Either::Ok(()));
    }

    #[rstest]
    fn then_discards_first_value() {
        let first: Either<&str, i32> = Either::Ok(1);
        assert_eq!(first.then(Either::Ok("second")), Either::Ok("second"));
    }

    #[rstest]
    fn free_bind_and_lift() {
        assert_eq!(bind(safe_divide(10), Maybe::Just(2)), Maybe::Just(5));

        let lifted = lift::<Maybe<i32>, _, _>(safe_divide(10));
        assert_eq!(lifted(Maybe::Just(5)), Maybe::Just(2));
        assert_eq!(lifted(Maybe::Just(0)), Maybe::Nothing);
    }

    /// Left identity: pure(a).bind(f) == f(a)
    #[rstest]
    fn maybe_left_identity_law() {
        let function = safe_divide(42);
        assert_eq!(<Maybe<()>>::pure(6).bind(&function), function(6));
    }

    /// Right identity: m.bind(pure) == m
    #[rstest]
    #[case(Either::Ok(3))]
    #[case(Either::Error("error"))]
    fn either_right_identity_law(#[case] value: Either<&'static str, i32>) {
        assert_eq!(value.bind(<Either<&str, ()>>::pure), value);
    }

    /// Associativity: m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
    #[rstest]
    fn maybe_associativity_law() {
        let first = safe_divide(100);
        let second = |n: i32| if n > 10 { Maybe::Just(n - 10) } else { Maybe::Nothing };

        for value in [Maybe::Just(2), Maybe::Just(20), Maybe::Just(0), Maybe::Nothing] {
            let left = value.bind(&first).bind(second);
            let right = value.bind(|x| first(x).bind(second));
            assert_eq!(left, right);
        }
    }
}
