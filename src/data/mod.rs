//! Data types implementing the type class hierarchy.
//!
//! - [`Maybe`]: a value that may be absent
//! - [`Either`]: a value or an error
//!
//! Both implement [`Functor`](crate::typeclass::Functor),
//! [`Applicative`](crate::typeclass::Applicative),
//! [`Monad`](crate::typeclass::Monad) and
//! [`DomainTypeInfo`](crate::typeclass::DomainTypeInfo). Reading a value that
//! is not there yields an [`AccessError`] instead of panicking.
//!
//! # Examples
//!
//! ```rust
//! use yafl::data::{Either, Maybe, either, just};
//!
//! let config_port: Maybe<u16> = just(8080);
//! let port: Either<&str, u16> = config_port.into_option().ok_or("port not configured").into();
//!
//! assert_eq!(port, either::ok(8080));
//! ```

pub mod either;
mod error;
pub mod maybe;

pub use either::Either;
pub use error::AccessError;
pub use maybe::{Maybe, just, nothing};
