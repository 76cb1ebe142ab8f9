//! Callable signature introspection.
//!
//! [`Callable`] exposes the argument tuple, return type and arity of any
//! closure, function item or function pointer with up to six arguments, and
//! lets it be invoked with all of its arguments packed in a tuple.
//!
//! # Examples
//!
//! ```rust
//! use yafl::function::{Callable, arity, call_with};
//!
//! fn volume(width: u32, height: u32, depth: u32) -> u32 {
//!     width * height * depth
//! }
//!
//! assert_eq!(arity(&volume), 3);
//! assert_eq!(call_with(&volume, (2, 3, 4)), 24);
//! assert_eq!(<fn(u32, u32, u32) -> u32 as Callable<(u32, u32, u32)>>::ARITY, 3);
//! ```

/// A function that can be called with its arguments packed in the tuple `Args`.
///
/// Implemented for every `Fn` taking zero to six arguments. The argument
/// tuple is a type parameter rather than an associated type because a
/// closure may in principle implement `Fn` for several argument lists.
pub trait Callable<Args> {
    /// The return type.
    type Output;

    /// The number of arguments.
    const ARITY: usize;

    /// Calls the function with the unpacked arguments.
    fn call_with(&self, arguments: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($argument:ident),*) => {
        paste::paste! {
            impl<Function, R, $([<$argument:upper>]),*> Callable<($([<$argument:upper>],)*)> for Function
            where
                Function: Fn($([<$argument:upper>]),*) -> R,
            {
                type Output = R;

                const ARITY: usize = <[&str]>::len(&[$(stringify!($argument)),*]);

                #[inline]
                fn call_with(&self, arguments: ($([<$argument:upper>],)*)) -> R {
                    let ($($argument,)*) = arguments;
                    self($($argument),*)
                }
            }
        }
    };
}

impl_callable!();
impl_callable!(a1);
impl_callable!(a1, a2);
impl_callable!(a1, a2, a3);
impl_callable!(a1, a2, a3, a4);
impl_callable!(a1, a2, a3, a4, a5);
impl_callable!(a1, a2, a3, a4, a5, a6);

/// Returns the number of arguments `function` takes.
///
/// # Examples
///
/// ```rust
/// use yafl::function::arity;
///
/// assert_eq!(arity(&|| 0), 0);
/// assert_eq!(arity(&|x: i32, y: i32| x + y), 2);
/// ```
pub const fn arity<Function, Args>(_function: &Function) -> usize
where
    Function: Callable<Args>,
{
    Function::ARITY
}

/// Calls `function` with the arguments packed in `arguments`.
///
/// # Examples
///
/// ```rust
/// use yafl::function::call_with;
///
/// let greet = |greeting: &str, name: &str| format!("{greeting}, {name}!");
/// assert_eq!(call_with(&greet, ("Hello", "world")), "Hello, world!");
/// ```
#[inline]
pub fn call_with<Function, Args>(function: &Function, arguments: Args) -> Function::Output
where
    Function: Callable<Args>,
{
    function.call_with(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    fn nullary() -> &'static str {
        "nothing to see"
    }

    fn ternary(first: i32, second: &str, third: bool) -> String {
        format!("{first}{second}{third}")
    }

    assert_impl_all!(fn() -> i32: Callable<()>);
    assert_impl_all!(fn(i32) -> i32: Callable<(i32,)>);
    assert_impl_all!(fn(u8, u16, u32, u64, i8, i16) -> (): Callable<(u8, u16, u32, u64, i8, i16)>);

    #[rstest]
    fn arity_of_function_items() {
        assert_eq!(arity(&nullary), 0);
        assert_eq!(arity(&ternary), 3);
    }

    #[rstest]
    fn arity_of_closures() {
        let offset = 10;
        let capturing = move |x: i32| x + offset;
        assert_eq!(arity(&capturing), 1);
        assert_eq!(arity(&|a: u8, b: u8, c: u8, d: u8, e: u8, f: u8| a ^ b ^ c ^ d ^ e ^ f), 6);
    }

    #[rstest]
    fn call_with_unpacks_arguments() {
        assert_eq!(call_with(&nullary, ()), "nothing to see");
        assert_eq!(call_with(&ternary, (1, "-", true)), "1-true");
    }

    #[rstest]
    fn output_type_matches_return_type() {
        fn returns<Function, Args, R>(_function: &Function)
        where
            Function: Callable<Args, Output = R>,
        {
        }

        returns::<_, (i32, &str, bool), String>(&ternary);
        returns::<_, (), &str>(&nullary);
    }

    #[rstest]
    fn unit_returning_function() {
        let seen = std::cell::Cell::new(0);
        let record = |value: i32| seen.set(value);
        call_with(&record, (5,));
        assert_eq!(seen.get(), 5);
    }
}
