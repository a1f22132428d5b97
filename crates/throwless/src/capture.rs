//! Panic-to-outcome capture adapters
//!
//! These are the only places in the crate that catch a raise. A producer is
//! run under [`std::panic::catch_unwind`] (or its future counterpart), and
//! whatever it raised is handed back, untranslated, as the payload of a
//! `Failure`.
//!
//! A raised payload is untyped (`Box<dyn Any + Send>`). [`Thrown`] keeps the
//! declared error type when the payload downcasts to it and holds anything
//! else as an opaque foreign payload.
//!
//! ```
//! use throwless::{absent, capture, MissingValue, Thrown};
//!
//! let outcome = capture::<i32, MissingValue, _>(|| absent::<i32>().unwrap());
//! assert!(matches!(outcome.unwrap_err(), Thrown::Error(MissingValue)));
//! ```

use crate::optional::Optional;
use crate::outcome::Outcome;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
#[cfg(feature = "async")]
use std::future::Future;

/// A raise captured at the adapter boundary.
pub enum Thrown<E> {
    /// The payload was (or was returned as) the declared error type.
    Error(E),
    /// The payload was some other type.
    Foreign(Box<dyn Any + Send>),
}

impl<E: 'static> Thrown<E> {
    /// Classifies a raw panic payload.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<E>() {
            Ok(error) => Thrown::Error(*error),
            Err(payload) => Thrown::Foreign(payload),
        }
    }
}

impl<E> Thrown<E> {
    /// Returns `true` if the payload matched the declared error type.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Thrown::Error(_))
    }

    /// Returns `true` if the payload had some other type.
    #[inline]
    pub const fn is_foreign(&self) -> bool {
        matches!(self, Thrown::Foreign(_))
    }

    /// The declared error, if that is what was raised.
    pub fn error(self) -> Optional<E> {
        match self {
            Thrown::Error(error) => Optional::Present(error),
            Thrown::Foreign(_) => Optional::Absent,
        }
    }

    /// Returns the raw payload, boxing the declared error if needed.
    pub fn into_payload(self) -> Box<dyn Any + Send>
    where
        E: Send + 'static,
    {
        match self {
            Thrown::Error(error) => Box::new(error),
            Thrown::Foreign(payload) => payload,
        }
    }

    /// The message of a foreign `panic!("...")` payload.
    pub fn message(&self) -> Option<&str> {
        match self {
            Thrown::Error(_) => None,
            Thrown::Foreign(payload) => payload_message(&**payload),
        }
    }
}

fn payload_message(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        Some(*s)
    } else {
        payload.downcast_ref::<String>().map(String::as_str)
    }
}

impl<E: fmt::Debug> fmt::Debug for Thrown<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thrown::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Thrown::Foreign(_) => match self.message() {
                Some(msg) => f.debug_tuple("Foreign").field(&msg).finish(),
                None => f.write_str("Foreign(..)"),
            },
        }
    }
}

impl<E: fmt::Display> fmt::Display for Thrown<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thrown::Error(error) => write!(f, "{}", error),
            Thrown::Foreign(_) => match self.message() {
                Some(msg) => write!(f, "panicked: {}", msg),
                None => f.write_str("panicked with a foreign payload"),
            },
        }
    }
}

impl<E> std::error::Error for Thrown<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Thrown::Error(error) => Some(error),
            Thrown::Foreign(_) => None,
        }
    }
}

/// Foreign payloads are opaque and never compare equal.
impl<E: PartialEq> PartialEq for Thrown<E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Thrown::Error(a), Thrown::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl<E> From<E> for Thrown<E> {
    fn from(error: E) -> Self {
        Thrown::Error(error)
    }
}

fn captured<T, E: 'static>(payload: Box<dyn Any + Send>) -> Outcome<T, Thrown<E>> {
    let thrown = Thrown::<E>::from_payload(payload);
    tracing::debug!(
        foreign = thrown.is_foreign(),
        payload = thrown.message().unwrap_or_default(),
        "captured panic from producer"
    );
    Outcome::Failure(thrown)
}

fn settled<T, E>(result: Result<T, E>) -> Outcome<T, Thrown<E>> {
    match result {
        Ok(value) => Outcome::Success(value),
        Err(error) => {
            tracing::trace!("producer returned an error");
            Outcome::Failure(Thrown::Error(error))
        }
    }
}

/// Runs `producer`, turning a panic into `Failure`.
///
/// A normal return becomes `Success(value)`. A panic becomes
/// `Failure(Thrown)` holding the raw payload, typed as `E` when it
/// downcasts. The producer is treated as unwind safe; state it touched may
/// be left half-updated after a panic.
///
/// The panic still passes through the process panic hook before it is
/// caught, so the default hook prints it to stderr. Install a quiet hook
/// with [`std::panic::set_hook`] if captured panics should not be reported.
pub fn capture<T, E, F>(producer: F) -> Outcome<T, Thrown<E>>
where
    F: FnOnce() -> T,
    E: 'static,
{
    match panic::catch_unwind(AssertUnwindSafe(producer)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => captured(payload),
    }
}

/// Like [`capture`], for producers that report failure by returning `Err`.
pub fn try_capture<T, E, F>(producer: F) -> Outcome<T, Thrown<E>>
where
    F: FnOnce() -> Result<T, E>,
    E: 'static,
{
    match panic::catch_unwind(AssertUnwindSafe(producer)) {
        Ok(result) => settled(result),
        Err(payload) => captured(payload),
    }
}

/// Awaits the future built by `producer`, turning a panic into `Failure`.
///
/// Panics raised while building the future and while polling it are both
/// captured. No timeout or cancellation is applied; if the future never
/// completes, neither does this one. As with [`capture`], the panic hook
/// still runs for every captured panic.
#[cfg(feature = "async")]
pub async fn capture_async<T, E, F, Fut>(producer: F) -> Outcome<T, Thrown<E>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
    E: 'static,
{
    use futures::FutureExt;

    let future = match panic::catch_unwind(AssertUnwindSafe(producer)) {
        Ok(future) => future,
        Err(payload) => return captured(payload),
    };
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Outcome::Success(value),
        Err(payload) => captured(payload),
    }
}

/// Like [`capture_async`], for futures that resolve to a `Result`.
#[cfg(feature = "async")]
pub async fn try_capture_async<T, E, F, Fut>(producer: F) -> Outcome<T, Thrown<E>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: 'static,
{
    use futures::FutureExt;

    let future = match panic::catch_unwind(AssertUnwindSafe(producer)) {
        Ok(future) => future,
        Err(payload) => return captured(payload),
    };
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(result) => settled(result),
        Err(payload) => captured(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optional::{absent, present};
    use crate::outcome::{failure, success};
    use crate::MissingValue;

    #[derive(Debug, PartialEq)]
    struct ParseFailure(&'static str);

    impl fmt::Display for ParseFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "cannot parse {}", self.0)
        }
    }

    #[test]
    fn test_capture_success() {
        assert_eq!(capture::<_, (), _>(|| 42), success(42));
        assert_eq!(capture::<_, (), _>(|| {}), success(()));
    }

    #[test]
    fn test_capture_typed_raise() {
        let outcome = capture::<i32, ParseFailure, _>(|| panic::panic_any(ParseFailure("x")));
        assert_eq!(outcome, failure(Thrown::Error(ParseFailure("x"))));
    }

    #[test]
    fn test_capture_string_raise() {
        let outcome = capture::<i32, &'static str, _>(|| panic::panic_any(""));
        assert_eq!(outcome.unwrap_err().error(), present(""));
    }

    #[test]
    fn test_capture_foreign_raise() {
        let thrown = capture::<i32, ParseFailure, _>(|| panic!("boom {}", 1)).unwrap_err();
        assert!(thrown.is_foreign());
        assert_eq!(thrown.message(), Some("boom 1"));
        assert_eq!(thrown.to_string(), "panicked: boom 1");
        assert_eq!(thrown.error(), absent());
    }

    #[test]
    fn test_thrown_display() {
        let typed = Thrown::Error(ParseFailure("x"));
        assert_eq!(typed.to_string(), "cannot parse x");

        let opaque = Thrown::<ParseFailure>::Foreign(Box::new(3_u8));
        assert_eq!(opaque.message(), None);
        assert_eq!(opaque.to_string(), "panicked with a foreign payload");
    }

    #[test]
    fn test_capture_missing_value() {
        let thrown = capture::<i32, MissingValue, _>(|| absent::<i32>().unwrap()).unwrap_err();
        assert_eq!(thrown, Thrown::Error(MissingValue));
        assert_eq!(
            thrown.to_string(),
            "called `Optional::unwrap()` on an `Absent` value"
        );
    }

    #[test]
    fn test_capture_expect_placeholder() {
        let outcome = capture::<i32, &'static str, _>(|| absent::<i32>().expect("no config"));
        assert_eq!(outcome, failure(Thrown::Error("no config")));
    }

    #[test]
    fn test_capture_unwrap_raises_contained() {
        let outcome = capture::<i32, u16, _>(|| failure::<i32, u16>(404).unwrap());
        assert_eq!(outcome, failure(Thrown::Error(404)));

        let outcome = capture::<(), i32, _>(|| success::<i32, ()>(773).unwrap_err());
        assert_eq!(outcome, failure(Thrown::Error(773)));
    }

    #[test]
    fn test_try_capture() {
        let parse = |s: &'static str| move || s.parse::<i32>();

        assert_eq!(try_capture(parse("12")), success(12));
        assert!(try_capture(parse("twelve")).unwrap_err().is_error());

        let raised = try_capture::<i32, ParseFailure, _>(|| panic::panic_any(ParseFailure("y")));
        assert_eq!(raised, failure(Thrown::Error(ParseFailure("y"))));
    }

    #[test]
    fn test_foreign_never_equal() {
        let a = Thrown::<i32>::Foreign(Box::new(1_u8));
        let b = Thrown::<i32>::Foreign(Box::new(1_u8));
        assert_ne!(a, b);
        assert_eq!(format!("{:?}", a), "Foreign(..)");
    }

    #[test]
    fn test_into_payload() {
        let payload = Thrown::<u32>::from(5).into_payload();
        assert_eq!(payload.downcast_ref::<u32>(), Some(&5));
    }
}
