//! Traits over tuples of up to six elements.
//!
//! - [`Tuple`]: the number of elements
//! - [`Prefix`]: a tuple that matches the leading elements of another
//! - [`Concat`]: joining two tuples, the inverse of [`Prefix::split`]
//! - [`Sequence`]: turning a tuple of `Maybe`/`Either` values into one `Result`
//!
//! # Examples
//!
//! ```rust
//! use yafl::function::{Concat, Prefix, Tuple};
//!
//! assert_eq!(<(u8, char, bool)>::LEN, 3);
//!
//! let (head, rest) = <(u8, char)>::split((1, 'a', true));
//! assert_eq!(head, (1, 'a'));
//! assert_eq!(rest, (true,));
//! assert_eq!(head.concat(rest), (1, 'a', true));
//! ```

use crate::typeclass::DomainTypeInfo;

/// A tuple with a statically known number of elements.
pub trait Tuple {
    /// The number of elements.
    const LEN: usize;
}

/// `Self` is a prefix of `Full`: its elements are the first elements of
/// `Full`, with exactly the same types and in the same order.
///
/// The empty tuple is a prefix of every tuple and every tuple is a prefix of
/// itself.
///
/// ```rust
/// use static_assertions::{assert_impl_all, assert_not_impl_any};
/// use yafl::function::Prefix;
///
/// assert_impl_all!((i32,): Prefix<(i32, String)>);
/// assert_not_impl_any!((String,): Prefix<(i32, String)>);
/// ```
pub trait Prefix<Full>: Sized {
    /// The elements of `Full` that follow the prefix.
    type Rest;

    /// Splits `full` into the prefix and the remaining elements.
    fn split(full: Full) -> (Self, Self::Rest);
}

/// Appends the tuple `Rest` to `Self`.
pub trait Concat<Rest> {
    /// The joined tuple.
    type Output;

    /// Joins `self` and `rest` into one tuple.
    fn concat(self, rest: Rest) -> Self::Output;
}

/// A tuple of domain values sharing the error type `E`.
///
/// # Examples
///
/// ```rust
/// use yafl::data::{Either, either};
/// use yafl::function::Sequence;
///
/// let all: (Either<&str, i32>, Either<&str, char>) = (either::ok(1), either::ok('x'));
/// assert_eq!(all.sequence(), Ok((1, 'x')));
///
/// let failed: (Either<&str, i32>, Either<&str, char>) = (either::error("first"), either::error("second"));
/// assert_eq!(failed.sequence(), Err("first"));
/// ```
pub trait Sequence<E> {
    /// The tuple of the values held by each element.
    type Values;

    /// Collects every held value, stopping at the first failure from the left.
    ///
    /// # Errors
    ///
    /// Returns the failure of the leftmost element that holds no value.
    fn sequence(self) -> Result<Self::Values, E>;
}

macro_rules! impl_tuple {
    ($($element:ident)*) => {
        paste::paste! {
            impl<$($element),*> Tuple for ($($element,)*) {
                const LEN: usize = <[&str]>::len(&[$(stringify!($element)),*]);
            }

            impl<Error, $($element),*> Sequence<Error> for ($($element,)*)
            where
                $($element: DomainTypeInfo<Error = Error>,)*
            {
                type Values = ($($element::Inner,)*);

                #[inline]
                fn sequence(self) -> Result<Self::Values, Error> {
                    let ($([<$element:lower>],)*) = self;
                    Ok(($([<$element:lower>].into_outcome()?,)*))
                }
            }
        }
    };
}

macro_rules! impl_split {
    ([$($head:ident)*] [$($tail:ident)*]) => {
        paste::paste! {
            impl<$($head,)* $($tail,)*> Prefix<($($head,)* $($tail,)*)> for ($($head,)*) {
                type Rest = ($($tail,)*);

                #[inline]
                fn split(full: ($($head,)* $($tail,)*)) -> (Self, Self::Rest) {
                    let ($([<$head:lower>],)* $([<$tail:lower>],)*) = full;
                    (($([<$head:lower>],)*), ($([<$tail:lower>],)*))
                }
            }

            impl<$($head,)* $($tail,)*> Concat<($($tail,)*)> for ($($head,)*) {
                type Output = ($($head,)* $($tail,)*);

                #[inline]
                fn concat(self, rest: ($($tail,)*)) -> Self::Output {
                    let ($([<$head:lower>],)*) = self;
                    let ($([<$tail:lower>],)*) = rest;
                    ($([<$head:lower>],)* $([<$tail:lower>],)*)
                }
            }
        }
    };
}

/// Generates every split of one tuple shape, moving the boundary rightwards.
macro_rules! impl_splits {
    ([$($head:ident)*] []) => {
        impl_split!([$($head)*] []);
    };
    ([$($head:ident)*] [$next:ident $($tail:ident)*]) => {
        impl_split!([$($head)*] [$next $($tail)*]);
        impl_splits!([$($head)* $next] [$($tail)*]);
    };
}

impl_tuple!();
impl_tuple!(T1);
impl_tuple!(T1 T2);
impl_tuple!(T1 T2 T3);
impl_tuple!(T1 T2 T3 T4);
impl_tuple!(T1 T2 T3 T4 T5);
impl_tuple!(T1 T2 T3 T4 T5 T6);

impl_splits!([] []);
impl_splits!([] [T1]);
impl_splits!([] [T1 T2]);
impl_splits!([] [T1 T2 T3]);
impl_splits!([] [T1 T2 T3 T4]);
impl_splits!([] [T1 T2 T3 T4 T5]);
impl_splits!([] [T1 T2 T3 T4 T5 T6]);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::{assert_impl_all, assert_not_impl_any, const_assert_eq};

    const_assert_eq!(<()>::LEN, 0);
    const_assert_eq!(<(u8,)>::LEN, 1);
    const_assert_eq!(<(u8, u8, u8, u8, u8, u8)>::LEN, 6);

    assert_impl_all!((): Prefix<()>, Prefix<(i32,)>, Prefix<(i32, bool, char)>);
    assert_impl_all!((i32, bool): Prefix<(i32, bool)>, Prefix<(i32, bool, char)>);
    assert_not_impl_any!((bool,): Prefix<(i32, bool)>);
    assert_not_impl_any!((i32, bool, char): Prefix<(i32, bool)>);
    assert_not_impl_any!((i64,): Prefix<(i32,)>);

    #[rstest]
    fn split_at_every_position() {
        let full = (1_u8, 'b', "c", 4.0_f64);

        assert_eq!(<()>::split(full), ((), full));
        assert_eq!(<(u8,)>::split(full), ((1,), ('b', "c", 4.0)));
        assert_eq!(<(u8, char, &str)>::split(full), ((1, 'b', "c"), (4.0,)));
        assert_eq!(<(u8, char, &str, f64)>::split(full), (full, ()));
    }

    #[rstest]
    fn concat_is_inverse_of_split() {
        let full = (String::from("a"), 2, vec![3]);
        let (head, rest) = <(String, i32)>::split(full.clone());
        assert_eq!(head.concat(rest), full);
    }

    #[rstest]
    fn concat_with_empty_tuples() {
        assert_eq!(().concat(()), ());
        assert_eq!((1,).concat(()), (1,));
        assert_eq!(().concat((1, 2)), (1, 2));
    }

    #[rstest]
    fn sequence_of_empty_tuple_succeeds() {
        assert_eq!(<() as Sequence<String>>::sequence(()), Ok(()));
    }

    #[cfg(feature = "data")]
    mod sequence {
        use super::super::Sequence;
        use crate::data::{Either, Maybe};
        use rstest::rstest;

        #[rstest]
        fn maybe_tuple_with_all_values() {
            let values = (Maybe::Just(1), Maybe::Just("two"), Maybe::Just(3.0));
            assert_eq!(values.sequence(), Ok((1, "two", 3.0)));
        }

        #[rstest]
        fn maybe_tuple_with_a_gap() {
            let values = (Maybe::Just(1), Maybe::<&str>::Nothing, Maybe::Just(3.0));
            assert_eq!(values.sequence(), Err(()));
        }

        #[rstest]
        #[case((Either::Ok(1), Either::Error("second")), Err("second"))]
        #[case((Either::Error("first"), Either::Error("second")), Err("first"))]
        #[case((Either::Ok(1), Either::Ok(2)), Ok((1, 2)))]
        fn either_tuple_reports_leftmost_error(
            #[case] values: (Either<&'static str, i32>, Either<&'static str, i32>),
            #[case] expected: Result<(i32, i32), &'static str>,
        ) {
            assert_eq!(values.sequence(), expected);
        }

        #[rstest]
        fn six_element_tuples() {
            let full = (
                Maybe::Just(1u8),
                Maybe::Just('b'),
                Maybe::Just("c"),
                Maybe::Just(4i64),
                Maybe::Just(5.0),
                Maybe::Just(true),
            );
            assert_eq!(full.sequence(), Ok((1u8, 'b', "c", 4i64, 5.0, true)));

            let last_missing = (
                Maybe::Just(1u8),
                Maybe::Just('b'),
                Maybe::Just("c"),
                Maybe::Just(4i64),
                Maybe::Just(5.0),
                Maybe::<bool>::Nothing,
            );
            assert_eq!(last_missing.sequence(), Err(()));

            let errors: (
                Either<&str, u8>,
                Either<&str, u8>,
                Either<&str, u8>,
                Either<&str, u8>,
                Either<&str, u8>,
                Either<&str, u8>,
            ) = (Either::Ok(1), Either::Ok(2), Either::Error("third"), Either::Ok(4), Either::Ok(5), Either::Error("sixth"));
            assert_eq!(errors.sequence(), Err("third"));
        }
    }
}
