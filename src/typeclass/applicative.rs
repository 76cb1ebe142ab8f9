//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with the ability to:
//!
//! - Lift pure values into the context (`pure`)
//! - Combine independent values in the context (`map2`, `map3`, `product`)
//! - Apply a function held in the context (`apply`, `apply_value`, `call`)
//!
//! A wrapped function of several arguments is applied one argument at a time
//! by wrapping its curried form; every `apply` removes one argument.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use yafl::curry;
//! use yafl::data::{Maybe, just, nothing};
//! use yafl::typeclass::Applicative;
//!
//! fn describe(count: i32, unit: &str) -> String {
//!     format!("{count} {unit}")
//! }
//!
//! let described = just(curry!(describe, 2)).apply(just(3)).apply_value("apples");
//! assert_eq!(described, just("3 apples".to_string()));
//!
//! let missing: Maybe<String> = just(curry!(describe, 2)).apply(nothing()).apply_value("apples");
//! assert_eq!(missing, nothing());
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// # Examples
///
/// ```rust
/// use yafl::data::{Maybe, just};
/// use yafl::typeclass::Applicative;
///
/// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(lifted, just(42));
///
/// let sum = just(3).map2(just(4), |x, y| x + y);
/// assert_eq!(sum, just(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either value is empty (or an error), so is the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::{Maybe, just, nothing};
    /// use yafl::typeclass::Applicative;
    ///
    /// assert_eq!(just(1).map2(just(2), |x, y| x + y), just(3));
    /// assert_eq!(just(1).map2(nothing::<i32>(), |x, y| x + y), nothing());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::just;
    /// use yafl::typeclass::Applicative;
    ///
    /// assert_eq!(just(1).map3(just(2), just(3), |x, y, z| x + y + z), just(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies the function inside `self` to the value inside `other`.
    ///
    /// When both sides fail, the default keeps the failure of `self`.
    /// `Either` overrides this and keeps the failure of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::just;
    /// use yafl::typeclass::Applicative;
    ///
    /// let multiply_by_42 = just(|n: i32| n * 42);
    /// assert_eq!(multiply_by_42.apply(just(2)), just(84));
    /// ```
    #[inline]
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.map2(other, |function, argument| function(argument))
    }

    /// Applies the function inside `self` to a plain argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::just;
    /// use yafl::typeclass::Applicative;
    ///
    /// assert_eq!(just(|n: i32| n * 42).apply_value(2), just(84));
    /// ```
    #[inline]
    fn apply_value<B, Output>(self, argument: B) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.fmap(|function| function(argument))
    }

    /// Runs the zero-argument function inside `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yafl::data::just;
    /// use yafl::typeclass::Applicative;
    ///
    /// assert_eq!(just(|| 42).call(), just(42));
    /// ```
    #[inline]
    fn call<Output>(self) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce() -> Output,
    {
        self.fmap(|function| function())
    }
}

/// Applies a wrapped function to a wrapped argument.
///
/// # Examples
///
/// ```rust
/// use yafl::data::{just, nothing};
/// use yafl::typeclass::applicative;
///
/// assert_eq!(applicative::apply(just(|n: i32| n * 42), just(2)), just(84));
/// assert_eq!(applicative::apply(just(|n: i32| n * 42), nothing()), nothing());
/// ```
#[inline]
pub fn apply<Fa, B, Output>(function: Fa, argument: Fa::WithType<B>) -> Fa::WithType<Output>
where
    Fa: Applicative,
    Fa::Inner: FnOnce(B) -> Output,
{
    function.apply(argument)
}

/// Applies a wrapped function to a plain argument.
///
/// # Examples
///
/// ```rust
/// use yafl::data::just;
/// use yafl::typeclass::applicative;
///
/// assert_eq!(applicative::apply_value(just(|n: i32| n * 42), 2), just(84));
/// ```
#[inline]
pub fn apply_value<Fa, B, Output>(function: Fa, argument: B) -> Fa::WithType<Output>
where
    Fa: Applicative,
    Fa::Inner: FnOnce(B) -> Output,
{
    function.apply_value(argument)
}

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;
    use crate::data::{Either, Maybe};
    use rstest::rstest;

    #[rstest]
    fn maybe_pure_lifts_value() {
        let lifted: Maybe<&str> = <Maybe<()>>::pure("hello");
        assert_eq!(lifted, Maybe::Just("hello"));
    }

    #[rstest]
    fn either_pure_lifts_value() {
        let lifted: Either<String, i32> = <Either<String, ()>>::pure(42);
        assert_eq!(lifted, Either::Ok(42));
    }

    #[rstest]
    #[case(Maybe::Just(1), Maybe::Just(2), Maybe::Just(3))]
    #[case(Maybe::Nothing, Maybe::Just(2), Maybe::Nothing)]
    #[case(Maybe::Just(1), Maybe::Nothing, Maybe::Nothing)]
    fn maybe_map2(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(left.map2(right, |x, y| x + y), expected);
    }

    #[rstest]
    fn either_map2_keeps_first_error() {
        let left: Either<&str, i32> = Either::Error("first");
        let right: Either<&str, i32> = Either::Error("second");
        assert_eq!(left.map2(right, |x, y| x + y), Either::Error("first"));
    }

    #[rstest]
    fn either_map3_combines_values() {
        let first: Either<String, i32> = Either::Ok(1);
        let result = first.map3(Either::Ok("two"), Either::Ok(3.0), |a, b, c| {
            format!("{a}-{b}-{c}")
        });
        assert_eq!(result, Either::Ok("1-two-3".to_string()));
    }

    #[rstest]
    fn maybe_product_variants() {
        assert_eq!(Maybe::Just(1).product(Maybe::Just("a")), Maybe::Just((1, "a")));
        assert_eq!(Maybe::Just(1).product_left(Maybe::Just("a")), Maybe::Just(1));
        assert_eq!(Maybe::Just(1).product_right(Maybe::Just("a")), Maybe::Just("a"));
        assert_eq!(
            Maybe::Just(1).product_right(Maybe::<&str>::Nothing),
            Maybe::Nothing
        );
    }

    #[rstest]
    fn free_apply_with_nothing_argument() {
        let multiply_by_42 = Maybe::Just(|n: i32| n * 42);
        assert_eq!(apply(multiply_by_42, Maybe::Nothing), Maybe::Nothing);
    }

    #[rstest]
    fn free_apply_value_with_nothing_function() {
        let missing: Maybe<fn(i32) -> i32> = Maybe::Nothing;
        assert_eq!(apply_value(missing, 2), Maybe::Nothing);
    }

    #[rstest]
    fn call_runs_thunk_returning_unit() {
        let mut executed = false;
        let result = Maybe::Just(|| executed = true).call();
        assert_eq!(result, Maybe::Just(()));
        assert!(executed);
    }

    #[rstest]
    fn call_on_nothing_does_not_run() {
        let thunk: Maybe<fn() -> i32> = Maybe::Nothing;
        assert_eq!(thunk.call(), Maybe::Nothing);
    }

    /// Homomorphism: pure(f).apply(pure(x)) == pure(f(x))
    #[rstest]
    fn either_homomorphism_law() {
        let function = |n: i32| 42 * n;
        let applied: Either<String, i32> = Either::Ok(function).apply(Either::Ok(2));
        assert_eq!(applied, Either::Ok(function(2)));
    }

    /// Interchange: u.apply(pure(y)) == pure(|f| f(y)).apply(u)
    #[rstest]
    fn maybe_interchange_law() {
        let function = |n: i32| 42 * n;
        let left = Maybe::Just(function).apply(Maybe::Just(2));
        let right = Maybe::Just(|f: fn(i32) -> i32| f(2)).apply(Maybe::Just(function as fn(i32) -> i32));
        assert_eq!(left, right);
    }
}
