//! Higher-order functions: composition, partial application and currying.
//!
//! # Overview
//!
//! - [`compose()`], [`compose_thunk`]: compose two functions, left to right
//! - [`kleisli_compose`]: compose two functions returning a `Monad`
//! - [`compose!`]: compose any number of functions, left to right
//! - [`pipe!`]: push a value through functions, left to right
//! - [`partial()`], [`partial!`]: bind some arguments of a function
//! - [`curry!`], [`uncurry!`]: convert between `f(a, b)` and `f(a)(b)`
//! - [`all!`], [`any!`]: fold a predicate over heterogeneous arguments
//!
//! # Helper Functions
//!
//! - [`id`]: the identity function
//! - [`constf`]: a function that always returns the same value
//! - [`flip`]: swaps the arguments of a binary function
//!
//! # Examples
//!
//! ## Composition
//!
//! ```
//! use yafl::compose::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose(f, g)(x) = g(f(x))
//! let composed = compose(add_one, double);
//! assert_eq!(composed(5), 12);
//! ```
//!
//! ## Kleisli composition
//!
//! ```
//! use yafl::compose::kleisli_compose;
//! use yafl::data::{Either, either};
//!
//! fn parse(text: &str) -> Either<String, i32> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! fn non_zero(n: i32) -> Either<String, i32> {
//!     if n == 0 { either::error("zero".to_string()) } else { either::ok(n) }
//! }
//!
//! let parse_non_zero = kleisli_compose(parse, non_zero);
//! assert_eq!(parse_non_zero("12"), either::ok(12));
//! assert_eq!(parse_non_zero("0"), either::error("zero".to_string()));
//! ```
//!
//! ## Currying with an applicative
//!
//! ```
//! use yafl::curry;
//! use yafl::data::{just, nothing};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! assert_eq!(just(curry!(add, 2)).apply(just(1)).apply(just(2)), just(3));
//! assert_eq!(just(curry!(add, 2)).apply(nothing()).apply(just(2)), nothing());
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Identity**: `compose(id, f) == f == compose(f, id)`
//! - **Double Flip**: `flip(flip(f)) == f`
//! - **Uncurry**: `uncurry!(curry!(f, n), n) == f`

mod composition;
mod compose_macro;
mod curry_macro;
mod partial_application;
mod partial_macro;
mod pipe_macro;
mod predicate_macro;
mod utils;

pub use composition::{compose, compose_thunk, kleisli_compose};
pub use partial_application::{Partial, partial};
pub use utils::{constf, flip, id};

// Macros are exported at the crate root; re-exported here for discoverability.
pub use crate::all;
pub use crate::any;
pub use crate::compose;
pub use crate::curry;
pub use crate::partial;
pub use crate::pipe;
pub use crate::uncurry;
