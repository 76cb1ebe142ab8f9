//! The `partial!` macro for positional partial application.
//!
//! `partial!` fixes some arguments of a function and leaves the positions
//! marked with `__` open as parameters of the returned closure. The open
//! positions may appear anywhere, not only at the end.
//!
//! For binding a leading run of arguments as a value that can be extended
//! later, see [`partial`](fn@crate::compose::partial).

/// Partially applies a function, with `__` marking the open positions.
///
/// The returned closure takes one parameter per `__`, in order. Bound values
/// are evaluated once, when the macro runs, and cloned on every call, so
/// the closure implements `Fn` when the function does. With no `__` at all
/// the result is a thunk.
///
/// `__` is matched as a literal token and must not be imported.
///
/// # Examples
///
/// ```
/// use yafl::partial;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let half = partial!(divide, __, 2.0);
/// assert_eq!(half(10.0), 5.0);
///
/// let reciprocal = partial!(divide, 1.0, __);
/// assert_eq!(reciprocal(4.0), 0.25);
///
/// let fixed = partial!(divide, 9.0, 3.0);
/// assert_eq!(fixed(), 3.0);
/// ```
///
/// Open positions can be interleaved with bound ones:
///
/// ```
/// use yafl::partial;
///
/// fn clamp(low: i32, value: i32, high: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let percent = partial!(clamp, 0, __, 100);
/// assert_eq!(percent(150), 100);
/// assert_eq!(percent(-5), 0);
/// assert_eq!(percent(42), 42);
/// ```
#[macro_export]
macro_rules! partial {
    ($function:expr $(,)?) => {
        $crate::__partial_impl!(@munch [$function] [] [] [])
    };
    ($function:expr, $($arguments:tt)+) => {
        $crate::__partial_impl!(@munch [$function] [] [] [] $($arguments)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __partial_impl {
    (@munch [$function:expr] [$($bindings:tt)*] [$($parameters:tt)*] [$($call_arguments:tt)*] $(,)?) => {{
        let function = $function;
        $($bindings)*
        move |$($parameters)*| function($($call_arguments)*)
    }};

    (@munch [$function:expr] [$($bindings:tt)*] [$($parameters:tt)*] [$($call_arguments:tt)*] __ $(, $($rest:tt)*)?) => {
        $crate::__partial_impl!(
            @munch [$function]
            [$($bindings)*]
            [$($parameters)* argument,]
            [$($call_arguments)* argument,]
            $($($rest)*)?
        )
    };

    (@munch [$function:expr] [$($bindings:tt)*] [$($parameters:tt)*] [$($call_arguments:tt)*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::__partial_impl!(
            @munch [$function]
            [$($bindings)* let bound = $value;]
            [$($parameters)*]
            [$($call_arguments)* ::core::clone::Clone::clone(&bound),]
            $($($rest)*)?
        )
    };
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    fn describe(name: &str, age: u32, city: &str, active: bool) -> String {
        format!("{name}/{age}/{city}/{active}")
    }

    #[rstest]
    fn no_arguments_gives_thunk() {
        let answer = partial!(|| 42);
        assert_eq!(answer(), 42);
    }

    #[rstest]
    fn all_placeholders_forward_everything() {
        let same = partial!(add, __, __);
        assert_eq!(same(2, 3), 5);
    }

    #[rstest]
    fn leading_and_trailing_bound() {
        assert_eq!(partial!(add, 5, __)(3), 8);
        assert_eq!(partial!(add, __, 10)(3), 13);
    }

    #[rstest]
    fn interleaved_positions() {
        let summary = partial!(describe, __, 30, __, true);
        assert_eq!(summary("alice", "paris"), "alice/30/paris/true");

        let from_berlin = partial!(describe, "bob", __, "berlin", __);
        assert_eq!(from_berlin(41, false), "bob/41/berlin/false");
    }

    #[rstest]
    fn bound_value_evaluated_once_and_cloned() {
        let evaluations = std::cell::Cell::new(0);
        let make_prefix = || {
            evaluations.set(evaluations.get() + 1);
            String::from("id-")
        };
        let tag = partial!(|prefix: String, n: u32| format!("{prefix}{n}"), make_prefix(), __);

        assert_eq!(tag(1), "id-1");
        assert_eq!(tag(2), "id-2");
        assert_eq!(evaluations.get(), 1);
    }

    #[rstest]
    fn expression_arguments() {
        let base = 10;
        let shifted = partial!(add, base * 2, __);
        assert_eq!(shifted(1), 21);
    }
}
