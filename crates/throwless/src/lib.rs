//! Throwless - explicit absence and failure as values
//!
//! This crate provides two closed sum types that let calling code treat
//! "value or nothing" and "success or failure" as ordinary data, plus
//! adapters that turn a panicking producer into an encoded failure.
//!
//! # Overview
//!
//! - [`Optional`]: `Present(value)` or `Absent`, built with [`present`] and [`absent`]
//! - [`Outcome`]: `Success(value)` or `Failure(error)`, built with [`success`] and [`failure`]
//! - [`capture`] / [`try_capture`]: run a producer and fold any panic into
//!   `Failure(Thrown)`
//! - [`capture_async`] / [`try_capture_async`]: the same for futures (feature `async`)
//!
//! ```
//! use throwless::{absent, present, success, Outcome};
//!
//! let port = present("8080")
//!     .map(str::parse::<u16>)
//!     .and_then(|parsed| Outcome::from(parsed).ok())
//!     .unwrap_or(80);
//! assert_eq!(port, 8080);
//!
//! assert_eq!(absent::<u16>().to_outcome("no port"), throwless::failure("no port"));
//! assert_eq!(success::<_, ()>(773).map_or_else(|v| v.to_string(), |_| "1337".into()), "773");
//! ```
//!
//! # Raising
//!
//! Wrong-variant accessors (`unwrap`, `expect`, `unwrap_err`, `expect_err`)
//! panic via [`std::panic::panic_any`], so the raised payload is a real value
//! that [`capture`] can recover. Combinators never catch panics raised by the
//! closures they are given.

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod capture;
pub mod optional;
pub mod outcome;

pub use capture::{capture, try_capture, Thrown};
#[cfg(feature = "async")]
pub use capture::{capture_async, try_capture_async};
pub use optional::{absent, present, Optional};
pub use outcome::{empty_failure, empty_success, failure, success, Outcome};

/// Raised by [`Optional::unwrap`] when there is no value to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("called `Optional::unwrap()` on an `Absent` value")]
pub struct MissingValue;
