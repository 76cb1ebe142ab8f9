//! The `compose!` macro for n-ary function composition.

/// Composes functions from left to right.
///
/// `compose!(f, g, h)(x)` is equivalent to `h(g(f(x)))`: the leftmost
/// function runs first, the same order as [`compose`](fn@crate::compose::compose)
/// and [`pipe!`](crate::pipe!).
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(id, f) == f`
/// - **Right Identity**: `compose!(f, id) == f`
///
/// # Syntax
///
/// - `compose!(f)` returns `f` unchanged
/// - `compose!(f, g)` returns `|x| g(f(x))`
/// - `compose!(f, g, h, ...)` composes any number of functions
///
/// # Examples
///
/// ```
/// use yafl::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // square(3) = 9, double(9) = 18, add_one(18) = 19
/// let composed = compose!(square, double, add_one);
/// assert_eq!(composed(3), 19);
/// ```
///
/// Types flow through the chain:
///
/// ```
/// use yafl::compose;
///
/// let composed = compose!(|x: i32| x.to_string(), |s: String| s.len());
/// assert_eq!(composed(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::compose!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}
