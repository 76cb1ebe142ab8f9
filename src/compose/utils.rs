//! Combinators used as building blocks for composition.
//!
//! - [`id`]: returns its argument (I combinator)
//! - [`constf`]: ignores its argument and returns a fixed value (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)

/// Returns the value unchanged.
///
/// `id` is the unit of composition: `compose(id, f)` and `compose(f, id)`
/// both behave like `f`. Binding with `id` flattens a nested monad.
///
/// # Examples
///
/// ```
/// use yafl::compose::id;
/// use yafl::data::just;
///
/// assert_eq!(id(42), 42);
/// assert_eq!(just(just(3)).bind(id), just(3));
/// ```
#[inline]
pub fn id<T>(value: T) -> T {
    value
}

/// Creates a function that always returns a clone of `value`, ignoring its input.
///
/// # Examples
///
/// ```
/// use yafl::compose::constf;
///
/// let always_five = constf::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constf(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constf<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)`, and flipping twice gives back `f`.
///
/// # Examples
///
/// ```
/// use yafl::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let subtract_from = flip(subtract);
/// assert_eq!(subtract_from(3, 10), 7);
/// assert_eq!(flip(subtract_from)(10, 3), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn id_with_unit() {
        assert_eq!(id(()), ());
    }

    #[rstest]
    fn constf_with_reference() {
        let always_hello = constf("hello");
        assert_eq!(always_hello(42), "hello");
    }

    #[rstest]
    fn constf_clones_each_time() {
        let always_list = constf::<_, ()>(vec![1, 2]);
        let mut first = always_list(());
        first.push(3);
        assert_eq!(always_list(()), vec![1, 2]);
    }

    #[rstest]
    #[case(2, 3, 9)]
    #[case(3, 2, 8)]
    fn flip_with_asymmetric_function(#[case] exponent: u32, #[case] base: i32, #[case] expected: i32) {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        assert_eq!(flip(power)(exponent, base), expected);
    }
}
