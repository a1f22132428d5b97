//! Optional type and operations
//!
//! The `Optional` type represents a value that may be missing. A value of
//! type `Optional<T>` either contains a `T` (`Present(value)`) or nothing
//! (`Absent`).
//!
//! Every combinator consumes `self` and builds a new container; nothing is
//! mutated in place. Fallbacks come in an eager form (`unwrap_or`, `or`, ...)
//! and a lazy `_else` form whose closure only runs on the `Absent` path.

use crate::outcome::Outcome;
use crate::MissingValue;
use std::panic;

/// The Optional type
///
/// Represents an optional value. Either `Absent` or `Present(value)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// No value
    Absent,
    /// Contains a value
    Present(T),
}

/// Wraps `value` in `Optional::Present`.
#[inline]
pub const fn present<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// Builds an empty `Optional`.
#[inline]
pub const fn absent<T>() -> Optional<T> {
    Optional::Absent
}

impl<T> Optional<T> {
    /// Returns `true` if the optional is a `Present` value.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Returns `true` if the optional is an `Absent` value.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Optional::Absent)
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `error` as the payload if the value is `Absent`. Unless
    /// `error` is a `&str` or `String`, the default panic hook prints only the
    /// location; the payload can be recovered with [`capture`](crate::capture).
    #[inline]
    #[track_caller]
    pub fn expect<X: Send + 'static>(self, error: X) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => panic::panic_any(error),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with a [`MissingValue`] payload if the value is `Absent`.
    ///
    /// The payload is not a string, so the default panic hook prints only the
    /// location. Read it with [`capture`](crate::capture) or by downcasting
    /// the `catch_unwind` payload.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => panic::panic_any(MissingValue),
        }
    }

    /// Returns the contained value or a provided default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => default,
        }
    }

    /// Returns the contained value or computes it from a closure.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => f(),
        }
    }

    /// Maps an `Optional<T>` to `Optional<U>` by applying a function to a
    /// contained value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Applies `f` to the contained value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => default,
        }
    }

    /// Applies `f_map` to the contained value, or computes a fallback with
    /// `f_else`.
    ///
    /// Note the argument order: the mapping function comes first.
    #[inline]
    pub fn map_or_else<U, F, G>(self, f_map: F, f_else: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Optional::Present(value) => f_map(value),
            Optional::Absent => f_else(),
        }
    }

    /// Converts to an `Outcome`, using `error` when the value is `Absent`.
    #[inline]
    pub fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Optional::Present(value) => Outcome::Success(value),
            Optional::Absent => Outcome::Failure(error),
        }
    }

    /// Converts to an `Outcome`, computing the error lazily.
    #[inline]
    pub fn to_outcome_else<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Present(value) => Outcome::Success(value),
            Optional::Absent => Outcome::Failure(f()),
        }
    }

    /// Returns `Absent` if this is `Absent`, otherwise returns `other`.
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Optional::Present(_) => other,
            Optional::Absent => Optional::Absent,
        }
    }

    /// Monadic bind: applies a function returning an `Optional` to the
    /// contained value.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Keeps the contained value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Optional::Present(value) = self {
            if predicate(&value) {
                return Optional::Present(value);
            }
        }
        Optional::Absent
    }

    /// Returns `self` if it is `Present`, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Optional::Present(_) => self,
            Optional::Absent => other,
        }
    }

    /// Returns `self` if it is `Present`, otherwise calls `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Optional::Present(_) => self,
            Optional::Absent => f(),
        }
    }

    /// Returns whichever side is `Present` when exactly one of them is,
    /// otherwise `Absent`.
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (one @ Optional::Present(_), Optional::Absent)
            | (Optional::Absent, one @ Optional::Present(_)) => one,
            _ => Optional::Absent,
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match *self {
            Optional::Present(ref value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match *self {
            Optional::Present(ref mut value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }
}

impl<T> Optional<Optional<T>> {
    /// Converts `Optional<Optional<T>>` to `Optional<T>`.
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.and_then(|inner| inner)
    }
}

impl<T> Default for Optional<T> {
    /// Returns `Absent`.
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}
