//! Outcome type and operations
//!
//! The `Outcome` type represents the result of an operation: a value of type
//! `Outcome<T, E>` is either `Success(T)` or `Failure(E)`. The error type is
//! opaque to the container; it does not have to implement `Error`.
//!
//! Combinators are success-biased: `map`, `and`, `and_then` act on the
//! success value and pass a failure through untouched, while `map_err`,
//! `or`, `or_else` are their duals on the failure side.

use crate::optional::Optional;
use std::fmt;
use std::panic;

/// The Outcome type
///
/// Represents either success (`Success`) or failure (`Failure`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// Contains the success value
    Success(T),
    /// Contains the error value
    Failure(E),
}

/// Wraps `value` in `Outcome::Success`.
#[inline]
pub const fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Wraps `error` in `Outcome::Failure`.
#[inline]
pub const fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

/// A success that carries no value.
#[inline]
pub const fn empty_success<E>() -> Outcome<(), E> {
    Outcome::Success(())
}

/// A failure that carries no error.
#[inline]
pub const fn empty_failure<T>() -> Outcome<T, ()> {
    Outcome::Failure(())
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this is a `Success` value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Converts the success side to `Optional<T>`, discarding any error.
    #[inline]
    pub fn ok(self) -> Optional<T> {
        match self {
            Outcome::Success(value) => Optional::Present(value),
            Outcome::Failure(_) => Optional::Absent,
        }
    }

    /// Converts the failure side to `Optional<E>`, discarding any value.
    #[inline]
    pub fn err(self) -> Optional<E> {
        match self {
            Outcome::Success(_) => Optional::Absent,
            Outcome::Failure(error) => Optional::Present(error),
        }
    }

    /// Maps an `Outcome<T, E>` to `Outcome<U, E>` by applying a function
    /// to a contained `Success` value, leaving a `Failure` untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps an `Outcome<T, E>` to `Outcome<T, F>` by applying a function
    /// to a contained `Failure` value, leaving a `Success` untouched.
    #[inline]
    pub fn map_err<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(op(error)),
        }
    }

    /// Folds to a plain value with whichever function matches the active
    /// variant. The other function is never called.
    #[inline]
    pub fn map_or_else<U, M, D>(self, f_map: M, f_err: D) -> U
    where
        M: FnOnce(T) -> U,
        D: FnOnce(E) -> U,
    {
        match self {
            Outcome::Success(value) => f_map(value),
            Outcome::Failure(error) => f_err(error),
        }
    }

    /// Returns `other` if this is a `Success`, otherwise propagates the
    /// failure.
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success(_) => other,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Monadic bind: applies a function that returns an `Outcome` to the
    /// `Success` value. Failures are passed through unchanged.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns `other` if this is a `Failure`, otherwise keeps the success
    /// value under the new error type.
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(_) => other,
        }
    }

    /// Calls `op` with the error if this is a `Failure`, otherwise keeps
    /// the success value.
    #[inline]
    pub fn or_else<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => op(error),
        }
    }

    /// Returns the contained `Success` value.
    ///
    /// # Panics
    ///
    /// Panics with `error` as the payload if this is a `Failure`. The
    /// contained error is dropped.
    ///
    /// Unless the payload is a `&str` or `String`, the default panic hook
    /// prints only the location. Read it with [`capture`](crate::capture) or
    /// by downcasting the `catch_unwind` payload.
    #[inline]
    #[track_caller]
    pub fn expect<X: Send + 'static>(self, error: X) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => panic::panic_any(error),
        }
    }

    /// Returns the contained `Failure` value.
    ///
    /// # Panics
    ///
    /// Panics with `error` as the payload if this is a `Success`.
    ///
    /// Unless the payload is a `&str` or `String`, the default panic hook
    /// prints only the location. Read it with [`capture`](crate::capture) or
    /// by downcasting the `catch_unwind` payload.
    #[inline]
    #[track_caller]
    pub fn expect_err<X: Send + 'static>(self, error: X) -> E {
        match self {
            Outcome::Success(_) => panic::panic_any(error),
            Outcome::Failure(contained) => contained,
        }
    }

    /// Returns the contained `Success` value, or the default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the contained `Success` value, or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// Maps both sides, applying exactly one of the two functions.
    #[inline]
    pub fn transform<U, F, M, D>(self, f_map: M, f_err: D) -> Outcome<U, F>
    where
        M: FnOnce(T) -> U,
        D: FnOnce(E) -> F,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f_map(value)),
            Outcome::Failure(error) => Outcome::Failure(f_err(error)),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match *self {
            Outcome::Success(ref value) => Outcome::Success(value),
            Outcome::Failure(ref error) => Outcome::Failure(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match *self {
            Outcome::Success(ref mut value) => Outcome::Success(value),
            Outcome::Failure(ref mut error) => Outcome::Failure(error),
        }
    }
}

impl<T, E: Send + 'static> Outcome<T, E> {
    /// Returns the contained `Success` value.
    ///
    /// # Panics
    ///
    /// Panics with the contained error itself as the payload if this is a
    /// `Failure`.
    ///
    /// Unless the payload is a `&str` or `String`, the default panic hook
    /// prints only the location. Read it with [`capture`](crate::capture) or
    /// by downcasting the `catch_unwind` payload.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => panic::panic_any(error),
        }
    }
}

impl<T: Send + 'static, E> Outcome<T, E> {
    /// Returns the contained `Failure` value.
    ///
    /// # Panics
    ///
    /// Panics with the contained success value itself as the payload if
    /// this is a `Success`, mirroring [`unwrap`](Outcome::unwrap).
    ///
    /// Unless the payload is a `&str` or `String`, the default panic hook
    /// prints only the location. Read it with [`capture`](crate::capture) or
    /// by downcasting the `catch_unwind` payload.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Outcome::Success(value) => panic::panic_any(value),
            Outcome::Failure(error) => error,
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success {}", value),
            Outcome::Failure(error) => write!(f, "Failure {}", error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
