//! The `curry!` and `uncurry!` macros.
//!
//! Currying turns a function of several arguments into a chain of unary
//! functions, which is the shape `Applicative::apply` expects when a wrapped
//! function receives its arguments one wrapped value at a time.
//!
//! The curried closures share the function and the arguments received so far
//! through `std::rc::Rc`, so every stage implements `Fn` and can be called
//! more than once. Arguments captured this way must be `Clone`.

/// Converts an `n`-argument function into curried form, for `n` from 1 to 6.
///
/// `curry!(f, 3)(a)(b)(c) == f(a, b, c)`
///
/// # Examples
///
/// ```
/// use yafl::curry;
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// let curried = curry!(volume, 3);
/// let base_two_by_three = curried(2)(3);
/// assert_eq!(base_two_by_three(4), 24);
/// assert_eq!(base_two_by_three(10), 60);
/// ```
///
/// Combined with an applicative, each argument can come from a separate
/// fallible source:
///
/// ```
/// use yafl::curry;
/// use yafl::data::{Either, either};
///
/// fn connect(host: String, port: u16) -> String {
///     format!("{host}:{port}")
/// }
///
/// let host: Either<String, String> = either::ok("localhost".to_string());
/// let port: Either<String, u16> = either::ok(8080);
///
/// let address = either::ok(curry!(connect, 2)).apply(host).apply(port);
/// assert_eq!(address, either::ok("localhost:8080".to_string()));
/// ```
#[macro_export]
macro_rules! curry {
    ($function:expr, 1 $(,)?) => {
        $crate::__curry_impl!(@start $function; [first])
    };
    ($function:expr, 2 $(,)?) => {
        $crate::__curry_impl!(@start $function; [first second])
    };
    ($function:expr, 3 $(,)?) => {
        $crate::__curry_impl!(@start $function; [first second third])
    };
    ($function:expr, 4 $(,)?) => {
        $crate::__curry_impl!(@start $function; [first second third fourth])
    };
    ($function:expr, 5 $(,)?) => {
        $crate::__curry_impl!(@start $function; [first second third fourth fifth])
    };
    ($function:expr, 6 $(,)?) => {
        $crate::__curry_impl!(@start $function; [first second third fourth fifth sixth])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __curry_impl {
    (@start $function:expr; [$($argument:ident)+]) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::__curry_impl!(@level function; []; [$($argument)+])
    }};

    (@level $function:ident; [$($received:ident)*]; [$last:ident]) => {
        move |$last| {
            $function(
                $(::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&$received)),)*
                $last,
            )
        }
    };

    (@level $function:ident; [$($received:ident)*]; [$next:ident $($remaining:ident)+]) => {
        move |$next| {
            let $function = ::std::rc::Rc::clone(&$function);
            $(let $received = ::std::rc::Rc::clone(&$received);)*
            let $next = ::std::rc::Rc::new($next);
            $crate::__curry_impl!(@level $function; [$($received)* $next]; [$($remaining)+])
        }
    };
}

/// Converts a curried function of `n` stages back into an `n`-argument
/// function, for `n` from 1 to 6.
///
/// `uncurry!(g, 3)(a, b, c) == g(a)(b)(c)`
///
/// # Examples
///
/// ```
/// use yafl::{curry, uncurry};
///
/// let add = |a: i32| move |b: i32| a + b;
/// let plain_add = uncurry!(add, 2);
/// assert_eq!(plain_add(2, 3), 5);
///
/// fn concat(a: String, b: String, c: String) -> String {
///     a + &b + &c
/// }
/// let round_trip = uncurry!(curry!(concat, 3), 3);
/// assert_eq!(round_trip("a".into(), "b".into(), "c".into()), "abc");
/// ```
#[macro_export]
macro_rules! uncurry {
    ($function:expr, 1 $(,)?) => {
        $crate::__uncurry_impl!($function; [first])
    };
    ($function:expr, 2 $(,)?) => {
        $crate::__uncurry_impl!($function; [first second])
    };
    ($function:expr, 3 $(,)?) => {
        $crate::__uncurry_impl!($function; [first second third])
    };
    ($function:expr, 4 $(,)?) => {
        $crate::__uncurry_impl!($function; [first second third fourth])
    };
    ($function:expr, 5 $(,)?) => {
        $crate::__uncurry_impl!($function; [first second third fourth fifth])
    };
    ($function:expr, 6 $(,)?) => {
        $crate::__uncurry_impl!($function; [first second third fourth fifth sixth])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __uncurry_impl {
    ($function:expr; [$($argument:ident)+]) => {{
        let function = $function;
        move |$($argument),+| function $(($argument))+
    }};
}
