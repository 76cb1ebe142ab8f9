//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))` and to
/// `compose!(f, g, h)(x)`. Each function runs once, so `FnOnce` is enough.
///
/// # Examples
///
/// ```
/// use yafl::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// let result = pipe!(3, square, double, add_one);
/// assert_eq!(result, 19);
/// ```
///
/// Monadic steps chain through `bind`:
///
/// ```
/// use yafl::pipe;
/// use yafl::data::{Maybe, just, nothing};
///
/// let halve = |n: i32| if n % 2 == 0 { just(n / 2) } else { nothing() };
///
/// let result = pipe!(just(12), |m: Maybe<i32>| m.bind(halve), |m: Maybe<i32>| m.bind(halve));
/// assert_eq!(result, just(3));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
