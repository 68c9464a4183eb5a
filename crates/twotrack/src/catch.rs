//! Adapters that convert panicking operations into [`Outcome`] values.
//!
//! Every combinator on [`Outcome`] lets a callback panic propagate; the
//! functions in this module are the only place the crate catches. They run
//! a caller-supplied operation under `catch_unwind`, normalize whatever
//! payload the panic carried into a message string, and hand that message
//! to a caller-supplied error constructor.
//!
//! # Payload normalization
//!
//! Applied in order to a caught payload:
//!
//! 1. A `Box<dyn Error + Send + Sync>` payload contributes its `Display`
//!    message.
//! 2. A `String` or `&str` payload is used verbatim. This covers the
//!    common `panic!("...")` forms.
//! 3. A `serde_json::Value` payload is rendered with
//!    `serde_json::to_string_pretty`: indented, with stable key ordering.
//!    If rendering the caught value itself fails, the adapter panics with
//!    the serialization error. That failure signals a bug in the caller's
//!    panic payload and is deliberately not swallowed.
//! 4. Any other payload falls back to the text `"unknown panic payload"`.
//!
//! # Examples
//!
//! ```rust
//! use thiserror::Error;
//! use twotrack::{safe_sync, Outcome};
//!
//! #[derive(Debug, Error, PartialEq)]
//! #[error("{0}")]
//! struct StageError(String);
//!
//! let outcome: Outcome<i32, StageError> = safe_sync(|| panic!("boom"), StageError);
//! assert_eq!(outcome.unwrap_error(), StageError("boom".to_string()));
//! ```

use std::any::Any;
use std::error::Error;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::outcome::Outcome;

/// Runs `operation` eagerly and captures its result as an [`Outcome`].
///
/// A normal return wraps in the `Ok` state. A panic is normalized to a
/// message (see the [module docs](self)), passed to `error_constructor`,
/// and wrapped in the `Error` state; the panic never reaches the caller.
///
/// The operation is consumed and its panic payload reduced to a message,
/// so `AssertUnwindSafe` is applied internally rather than demanding the
/// bound from every caller.
///
/// # Panics
///
/// Only when normalization step 3 cannot render the caught
/// `serde_json::Value`; see the module docs.
///
/// # Examples
///
/// ```rust
/// use thiserror::Error;
/// use twotrack::{safe_sync, Outcome};
///
/// #[derive(Debug, Error, PartialEq)]
/// #[error("{0}")]
/// struct StageError(String);
///
/// let outcome = safe_sync(|| 21 * 2, StageError);
/// assert_eq!(outcome, Outcome::Ok(42));
/// ```
pub fn safe_sync<T, E, F, C>(operation: F, error_constructor: C) -> Outcome<T, E>
where
    F: FnOnce() -> T,
    C: FnOnce(String) -> E,
{
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => caught(payload, error_constructor),
    }
}

/// Awaits the future produced by `operation` and captures its result as an
/// [`Outcome`].
///
/// The resolved value wraps in the `Ok` state. A panic raised before or
/// across an await point is normalized exactly like [`safe_sync`]. The
/// only suspension points are those inside the supplied future; this
/// adapter schedules nothing of its own and holds no cancellation
/// primitive.
///
/// For an operation whose future already resolves to an [`Outcome`], use
/// [`safe_async_flat`] instead of wrapping a second layer.
///
/// # Examples
///
/// ```rust
/// use thiserror::Error;
/// use twotrack::{safe_async, Outcome};
///
/// #[derive(Debug, Error, PartialEq)]
/// #[error("{0}")]
/// struct StageError(String);
///
/// let outcome = tokio_test::block_on(safe_async(|| async { 21 * 2 }, StageError));
/// assert_eq!(outcome, Outcome::Ok(42));
/// ```
pub async fn safe_async<T, E, F, Fut, C>(operation: F, error_constructor: C) -> Outcome<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
    C: FnOnce(String) -> E,
{
    match AssertUnwindSafe(operation()).catch_unwind().await {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => caught(payload, error_constructor),
    }
}

/// Flattening variant of [`safe_async`] for operations that already
/// produce an [`Outcome`].
///
/// The resolved outcome passes through unchanged, whichever state it is
/// in; there is no double wrapping. A panic is normalized and converted
/// exactly like [`safe_async`].
///
/// # Examples
///
/// ```rust
/// use thiserror::Error;
/// use twotrack::{safe_async_flat, Outcome};
///
/// #[derive(Debug, Error, PartialEq)]
/// #[error("{0}")]
/// struct StageError(String);
///
/// let already_wrapped = || async { Outcome::<i32, StageError>::Ok(42) };
/// let outcome = tokio_test::block_on(safe_async_flat(already_wrapped, StageError));
/// assert_eq!(outcome, Outcome::Ok(42));
/// ```
pub async fn safe_async_flat<T, E, F, Fut, C>(operation: F, error_constructor: C) -> Outcome<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Outcome<T, E>>,
    C: FnOnce(String) -> E,
{
    match AssertUnwindSafe(operation()).catch_unwind().await {
        Ok(outcome) => outcome,
        Err(payload) => caught(payload, error_constructor),
    }
}

fn caught<T, E, C>(payload: Box<dyn Any + Send>, error_constructor: C) -> Outcome<T, E>
where
    C: FnOnce(String) -> E,
{
    let message = panic_message(payload);
    tracing::warn!("Caught panic, converting to error outcome: {}", message);
    Outcome::Error(error_constructor(message))
}

/// Reduces a caught panic payload to a message string per the module-level
/// normalization policy.
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(error) = payload.downcast_ref::<Box<dyn Error + Send + Sync>>() {
        return error.to_string();
    }
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        return (*text).to_string();
    }
    if let Some(text) = payload.downcast_ref::<String>() {
        return text.clone();
    }
    if let Some(value) = payload.downcast_ref::<serde_json::Value>() {
        return match serde_json::to_string_pretty(value) {
            Ok(rendered) => rendered,
            Err(error) => panic!("failed to serialize caught panic payload: {error}"),
        };
    }
    "unknown panic payload".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    #[error("{0}")]
    struct StageError(String);

    #[test]
    fn test_panic_message_uses_boxed_error_display() {
        let payload: Box<dyn Error + Send + Sync> = Box::from("disk offline");
        assert_eq!(panic_message(Box::new(payload)), "disk offline");
    }

    #[test]
    fn test_panic_message_uses_str_payload_verbatim() {
        assert_eq!(panic_message(Box::new("boom")), "boom");
    }

    #[test]
    fn test_panic_message_uses_string_payload_verbatim() {
        assert_eq!(panic_message(Box::new("boom".to_string())), "boom");
    }

    #[test]
    fn test_panic_message_renders_json_payload_pretty_and_ordered() {
        // Keys come back sorted: serde_json's default map is BTreeMap-backed.
        let rendered = panic_message(Box::new(json!({"b": 2, "a": 1})));
        assert_eq!(rendered, "{\n  \"a\": 1,\n  \"b\": 2\n}");
    }

    #[test]
    fn test_panic_message_falls_back_for_opaque_payloads() {
        assert_eq!(panic_message(Box::new(42u8)), "unknown panic payload");
    }

    #[test]
    fn test_safe_sync_wraps_normal_return() {
        let outcome = safe_sync(|| "clean", StageError);
        assert_eq!(outcome, Outcome::Ok("clean"));
    }

    #[test]
    fn test_safe_sync_converts_panic_to_error() {
        let outcome: Outcome<i32, StageError> = safe_sync(|| panic!("boom"), StageError);
        assert_eq!(outcome, Outcome::Error(StageError("boom".to_string())));
    }

    #[tokio::test]
    async fn test_safe_async_wraps_resolved_value() {
        let outcome = safe_async(|| async { 21 * 2 }, StageError).await;
        assert_eq!(outcome, Outcome::Ok(42));
    }

    #[tokio::test]
    async fn test_safe_async_converts_panic_after_await_point() {
        let outcome: Outcome<i32, StageError> = safe_async(
            || async {
                tokio::task::yield_now().await;
                panic!("late failure");
            },
            StageError,
        )
        .await;
        assert_eq!(outcome, Outcome::Error(StageError("late failure".to_string())));
    }

    #[tokio::test]
    async fn test_safe_async_flat_passes_ok_through_unchanged() {
        let outcome =
            safe_async_flat(|| async { Outcome::<i32, StageError>::Ok(42) }, StageError).await;
        assert_eq!(outcome, Outcome::Ok(42));
    }

    #[tokio::test]
    async fn test_safe_async_flat_passes_error_through_unchanged() {
        let inner = StageError("already failed".to_string());
        let expected = StageError("already failed".to_string());
        let outcome =
            safe_async_flat(move || async move { Outcome::<i32, StageError>::Error(inner) }, StageError)
                .await;
        assert_eq!(outcome, Outcome::Error(expected));
    }
}
