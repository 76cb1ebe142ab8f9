//! The `all!` and `any!` macros for folding a predicate over arguments.
//!
//! The arguments may have different types as long as the predicate accepts
//! each of them, which a slice-based `Iterator::all` cannot express.

/// Returns `true` when `predicate` holds for every argument.
///
/// Arguments are checked from left to right and checking stops at the first
/// `false`. With no arguments the result is `true`.
///
/// # Examples
///
/// ```
/// use yafl::all;
/// use yafl::data::{just, nothing};
///
/// assert!(all!(|n: i32| n > 0, 1, 2, 3));
/// assert!(!all!(|n: i32| n > 0, 1, -2, 3));
/// assert!(all!(|n: i32| n > 0));
///
/// assert!(!all!(|m: yafl::data::Maybe<i32>| m.has_value(), just(1), nothing()));
/// ```
#[macro_export]
macro_rules! all {
    ($predicate:expr $(, $argument:expr)* $(,)?) => {{
        #[allow(unused_variables)]
        let predicate = $predicate;
        true $(&& predicate($argument))*
    }};
}

/// Returns `true` when `predicate` holds for at least one argument.
///
/// Arguments are checked from left to right and checking stops at the first
/// `true`. With no arguments the result is `false`.
///
/// # Examples
///
/// ```
/// use yafl::any;
///
/// assert!(any!(|n: i32| n % 2 == 0, 1, 3, 4));
/// assert!(!any!(|n: i32| n % 2 == 0, 1, 3, 5));
/// assert!(!any!(|n: i32| n % 2 == 0));
/// ```
#[macro_export]
macro_rules! any {
    ($predicate:expr $(, $argument:expr)* $(,)?) => {{
        #[allow(unused_variables)]
        let predicate = $predicate;
        false $(|| predicate($argument))*
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn all_short_circuits() {
        let checked = Cell::new(0);
        let positive = |n: i32| {
            checked.set(checked.get() + 1);
            n > 0
        };
        assert!(!all!(positive, 1, -1, 2, 3));
        assert_eq!(checked.get(), 2);
    }

    #[rstest]
    fn any_short_circuits() {
        let checked = Cell::new(0);
        let negative = |n: i32| {
            checked.set(checked.get() + 1);
            n < 0
        };
        assert!(any!(negative, 1, -1, 2, 3));
        assert_eq!(checked.get(), 2);
    }

    #[rstest]
    fn all_over_strings() {
        let non_empty = |text: &str| !text.is_empty();
        assert!(all!(non_empty, "a", "b"));
        assert!(!all!(non_empty, "a", ""));
    }
}
