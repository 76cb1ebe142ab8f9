//! Partial application of a leading run of arguments.
//!
//! [`partial`] stores a function with a tuple of its first arguments. The
//! bound tuple is checked against the function's signature through
//! [`Concat`] and [`Callable`] when the partial application is called, so a
//! bound argument of the wrong type or position does not compile.

use crate::function::{Callable, Concat};

/// A function with its leading arguments already bound.
///
/// Created by [`partial`].
#[derive(Clone, Debug)]
pub struct Partial<F, Bound> {
    function: F,
    bound: Bound,
}

/// Binds the leading arguments of `function`.
///
/// # Examples
///
/// ```
/// use yafl::compose::partial;
///
/// fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> String {
///     format!("({x1},{y1})-({x2},{y2})")
/// }
///
/// let from_origin = partial(line, (0, 0));
/// assert_eq!(from_origin.call((3, 4)), "(0,0)-(3,4)");
///
/// let complete = from_origin.extend((1, 1));
/// assert_eq!(complete.call(()), "(0,0)-(1,1)");
/// ```
#[inline]
pub const fn partial<F, Bound>(function: F, bound: Bound) -> Partial<F, Bound> {
    Partial { function, bound }
}

impl<F, Bound> Partial<F, Bound> {
    /// Calls the function with the bound arguments followed by `rest`.
    ///
    /// The bound arguments are cloned, so the partial application can be
    /// called any number of times.
    #[inline]
    pub fn call<Rest>(&self, rest: Rest) -> <F as Callable<<Bound as Concat<Rest>>::Output>>::Output
    where
        Bound: Concat<Rest> + Clone,
        F: Callable<<Bound as Concat<Rest>>::Output>,
    {
        self.function.call_with(self.bound.clone().concat(rest))
    }

    /// Binds further arguments after the ones already bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use yafl::compose::partial;
    ///
    /// let sum = |a: u8, b: u8, c: u8| a + b + c;
    /// let with_one = partial(sum, (1,));
    /// let with_three = with_one.extend((2,));
    /// assert_eq!(with_three.call((3,)), 6);
    /// ```
    #[inline]
    pub fn extend<More>(self, more: More) -> Partial<F, <Bound as Concat<More>>::Output>
    where
        Bound: Concat<More>,
    {
        Partial {
            function: self.function,
            bound: self.bound.concat(more),
        }
    }

    /// The bound arguments.
    #[inline]
    pub const fn bound(&self) -> &Bound {
        &self.bound
    }
}
