//! Function and tuple traits.
//!
//! - [`Callable`]: the argument tuple, return type and arity of a function,
//!   and calling it with packed arguments
//! - [`Tuple`], [`Prefix`], [`Concat`]: tuple length, prefix matching and joining
//! - [`Sequence`]: collecting a tuple of `Maybe`/`Either` values into one `Result`
//!
//! These traits are what lets [`partial`](fn@crate::compose::partial) check its
//! bound arguments against a function signature, and lets
//! [`maybe::lift`](crate::data::maybe::lift) work for any arity.

mod info;
mod tuple;

pub use info::{Callable, arity, call_with};
pub use tuple::{Concat, Prefix, Sequence, Tuple};
