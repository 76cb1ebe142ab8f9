//! Function composition, reading from left to right.
//!
//! `compose(first, second)` runs `first` and feeds its result to `second`.
//! When `first` produces a monadic value and `second` expects the plain inner
//! value, [`kleisli_compose`] does the unwrapping through `bind`.

use crate::typeclass::Monad;

/// Composes two functions: the result runs `first`, then `second`.
///
/// # Examples
///
/// ```
/// use yafl::compose::compose;
///
/// let parse = |text: &str| text.len();
/// let double = |n: usize| n * 2;
///
/// let doubled_length = compose(parse, double);
/// assert_eq!(doubled_length("four"), 8);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Composes a zero-argument function with a unary one.
///
/// # Examples
///
/// ```
/// use yafl::compose::compose_thunk;
///
/// let load = || "42";
/// let parse = |text: &str| text.parse::<i32>().unwrap_or_default();
///
/// let loaded = compose_thunk(load, parse);
/// assert_eq!(loaded(), 42);
/// ```
#[inline]
pub fn compose_thunk<B, C, F, G>(first: F, second: G) -> impl Fn() -> C
where
    F: Fn() -> B,
    G: Fn(B) -> C,
{
    move || second(first())
}

/// Composes two monadic functions.
///
/// The result runs `first` and binds `second` to its outcome, so `second`
/// only runs when `first` produced a value. Otherwise the failure of `first`
/// is returned unchanged.
///
/// # Examples
///
/// ```
/// use yafl::compose::kleisli_compose;
/// use yafl::data::{Maybe, just, nothing};
///
/// let parse = |text: &str| -> Maybe<i32> { text.parse::<i32>().ok().into() };
/// let reciprocal = |n: i32| if n == 0 { nothing() } else { just(1.0 / f64::from(n)) };
///
/// let parse_reciprocal = kleisli_compose(parse, reciprocal);
/// assert_eq!(parse_reciprocal("4"), just(0.25));
/// assert_eq!(parse_reciprocal("0"), nothing());
/// assert_eq!(parse_reciprocal("four"), nothing());
/// ```
#[inline]
pub fn kleisli_compose<A, M, C, F, G>(first: F, second: G) -> impl Fn(A) -> M::WithType<C>
where
    M: Monad,
    F: Fn(A) -> M,
    G: Fn(M::Inner) -> M::WithType<C>,
{
    move |input| first(input).bind(&second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::id;
    use rstest::rstest;

    #[rstest]
    fn compose_runs_left_to_right() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        assert_eq!(compose(add_one, double)(5), 12);
        assert_eq!(compose(double, add_one)(5), 11);
    }

    #[rstest]
    fn compose_with_identity() {
        let negate = |x: i32| -x;
        assert_eq!(compose(id, negate)(4), negate(4));
        assert_eq!(compose(negate, id)(4), negate(4));
    }

    #[rstest]
    fn compose_side_effect_then_value() {
        let log = std::cell::RefCell::new(Vec::new());
        let record = |entry: &'static str| log.borrow_mut().push(entry);
        let report = |(): ()| log.borrow().len();

        let record_and_count = compose(record, report);
        assert_eq!(record_and_count("first"), 1);
        assert_eq!(record_and_count("second"), 2);
    }

    #[rstest]
    fn compose_thunk_evaluates_lazily() {
        let calls = std::cell::Cell::new(0);
        let counted = compose_thunk(
            || {
                calls.set(calls.get() + 1);
                calls.get()
            },
            |n: i32| n * 10,
        );
        assert_eq!(calls.get(), 0);
        assert_eq!(counted(), 10);
        assert_eq!(counted(), 20);
    }

    #[cfg(feature = "data")]
    mod kleisli {
        use super::super::kleisli_compose;
        use crate::data::{Either, either};
        use rstest::rstest;

        fn parse(text: &str) -> Either<String, i32> {
            text.parse::<i32>().map_err(|_| format!("not a number: {text}")).into()
        }

        fn positive(n: i32) -> Either<String, u32> {
            u32::try_from(n).map_err(|_| format!("negative: {n}")).into()
        }

        #[rstest]
        #[case("7", either::ok(7))]
        #[case("-7", either::error("negative: -7".to_string()))]
        #[case("seven", either::error("not a number: seven".to_string()))]
        fn either_pipeline(#[case] input: &str, #[case] expected: Either<String, u32>) {
            let parse_positive = kleisli_compose(parse, positive);
            assert_eq!(parse_positive(input), expected);
        }

        #[rstest]
        fn second_function_not_called_after_failure() {
            let calls = std::cell::Cell::new(0);
            let counted = |n: i32| {
                calls.set(calls.get() + 1);
                either::ok::<String, i32>(n)
            };
            let composed = kleisli_compose(parse, counted);
            assert!(composed("nope").is_error());
            assert_eq!(calls.get(), 0);
        }
    }
}
