//! The two-state outcome value and its combinator algebra.
//!
//! [`Outcome`] represents the result of an operation as exactly one of two
//! states: [`Ok`](Outcome::Ok) carrying a usable value, or
//! [`Error`](Outcome::Error) carrying the failure that occurred instead.
//! Failures travel as ordinary data through a chain of combinators, so
//! callers can transform and recover without unwinding the stack.
//!
//! # Key Operations
//!
//! - Discrimination: [`is_ok`](Outcome::is_ok), [`is_error`](Outcome::is_error)
//! - Extraction: [`unwrap`](Outcome::unwrap), [`unwrap_or`](Outcome::unwrap_or),
//!   [`fold`](Outcome::fold), [`ok`](Outcome::ok), [`into_result`](Outcome::into_result)
//! - Transformation: [`map`](Outcome::map), [`and_then`](Outcome::and_then),
//!   [`map_error`](Outcome::map_error), [`filter`](Outcome::filter)
//! - Combination: [`zip`](Outcome::zip), [`zip_with`](Outcome::zip_with)
//! - Recovery: [`recover`](Outcome::recover), [`or_else`](Outcome::or_else)
//! - Diagnostics: [`inspect`](Outcome::inspect), [`inspect_error`](Outcome::inspect_error)
//!
//! # Examples
//!
//! ```rust
//! use twotrack::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     raw.parse::<u16>().map_err(|e| e.to_string()).into()
//! }
//!
//! let description = parse_port("8080")
//!     .filter(|port| *port >= 1024, "reserved port".to_string())
//!     .map(|port| format!("listening on {port}"))
//!     .unwrap_or_else(|err| format!("rejected: {err}"));
//!
//! assert_eq!(description, "listening on 8080");
//! ```

use serde::{Deserialize, Serialize};

/// An immutable value holding exactly one of two mutually exclusive states.
///
/// `Outcome<T, E>` is a proper sum type: an instance is either `Ok(T)` or
/// `Error(E)`, and no other state is representable. Every combinator
/// consumes `self` and produces a new value, so an existing instance is
/// never mutated.
///
/// Expected, recoverable failures belong in the `Error` payload and are
/// never panicked. Panics are reserved for programmer errors, such as
/// extracting a value from the wrong state (see [`unwrap`](Outcome::unwrap)).
///
/// # Examples
///
/// ```rust
/// use twotrack::Outcome;
///
/// let found: Outcome<u32, String> = Outcome::Ok(7);
/// let missing: Outcome<u32, String> = Outcome::Error("not found".to_string());
///
/// assert!(found.is_ok());
/// assert!(missing.is_error());
/// assert_eq!(found.map(|n| n * 6).unwrap(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T, E> {
    /// The operation produced a usable value.
    Ok(T),
    /// The operation produced an error instead of a value.
    Error(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this is the `Ok` state.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if this is the `Error` state.
    pub const fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `"Cannot access value in a non-Ok instance"` when called
    /// on the `Error` state. Reaching for the value without checking the
    /// state first is a logic bug at the call site, not a modeled failure,
    /// so it is surfaced immediately instead of being folded back into the
    /// error channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Ok(5);
    /// assert_eq!(outcome.unwrap(), 5);
    /// ```
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Error(_) => panic!("Cannot access value in a non-Ok instance"),
        }
    }

    /// Returns the contained error.
    ///
    /// # Panics
    ///
    /// Panics with `"Cannot access error in a non-Error instance"` when
    /// called on the `Ok` state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Error("bad input".to_string());
    /// assert_eq!(outcome.unwrap_error(), "bad input");
    /// ```
    pub fn unwrap_error(self) -> E {
        match self {
            Outcome::Ok(_) => panic!("Cannot access error in a non-Error instance"),
            Outcome::Error(error) => error,
        }
    }

    /// Returns the contained value, or `default` in the `Error` state.
    ///
    /// Total; never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Ok(2).unwrap_or(0), 2);
    /// assert_eq!(Outcome::<i32, &str>::Error("boom").unwrap_or(0), 0);
    /// ```
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Error(_) => default,
        }
    }

    /// Returns the contained value, or computes one from the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let outcome: Outcome<usize, String> = Outcome::Error("boom".to_string());
    /// assert_eq!(outcome.unwrap_or_else(|err| err.len()), 4);
    /// ```
    pub fn unwrap_or_else<O>(self, op: O) -> T
    where
        O: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Error(error) => op(error),
        }
    }

    /// Total pattern match: applies exactly one of the two handlers to the
    /// corresponding payload and returns its result.
    ///
    /// Both handlers must produce the same result type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let outcome: Outcome<u32, String> = Outcome::Ok(3);
    /// let rendered = outcome.fold(
    ///     |value| format!("got {value}"),
    ///     |error| format!("failed: {error}"),
    /// );
    /// assert_eq!(rendered, "got 3");
    /// ```
    pub fn fold<R, OkOp, ErrOp>(self, on_ok: OkOp, on_error: ErrOp) -> R
    where
        OkOp: FnOnce(T) -> R,
        ErrOp: FnOnce(E) -> R,
    {
        match self {
            Outcome::Ok(value) => on_ok(value),
            Outcome::Error(error) => on_error(error),
        }
    }

    /// Returns the value as `Some`, discarding any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Ok(4).ok(), Some(4));
    /// assert_eq!(Outcome::<i32, &str>::Error("boom").ok(), None);
    /// ```
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Error(_) => None,
        }
    }

    /// Returns the error as `Some`, discarding any value.
    pub fn error(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Error(error) => Some(error),
        }
    }

    /// Converts into a `std::result::Result`.
    ///
    /// This is the bridge to deferred computation: inside an async fn, a
    /// `Result` resolves with the value or propagates the error through
    /// `?`, surfacing the failure to the awaiting caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Ok(1);
    /// assert_eq!(outcome.into_result(), Ok(1));
    /// ```
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Error(error) => Err(error),
        }
    }

    /// Borrows the payload, producing an `Outcome` of references.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    /// Mutably borrows the payload, producing an `Outcome` of mutable
    /// references.
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    /// Applies `op` to the value, leaving an error untouched.
    ///
    /// In the `Error` state the same payload passes through without being
    /// re-wrapped. A panic raised by `op` propagates to the caller; see the
    /// [`catch`](crate::catch) module for the adapters that convert panics
    /// into outcomes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Ok(2);
    /// assert_eq!(outcome.map(|n| n * 10), Outcome::Ok(20));
    /// ```
    pub fn map<U, O>(self, op: O) -> Outcome<U, E>
    where
        O: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(op(value)),
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    /// Applies an outcome-producing `op` to the value and flattens one
    /// level.
    ///
    /// `op` never runs in the `Error` state; the existing payload passes
    /// through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// fn halve(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::Ok(n / 2)
    ///     } else {
    ///         Outcome::Error(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::<i32, String>::Ok(8).and_then(halve), Outcome::Ok(4));
    /// assert_eq!(
    ///     Outcome::<i32, String>::Ok(3).and_then(halve),
    ///     Outcome::Error("3 is odd".to_string()),
    /// );
    /// ```
    pub fn and_then<U, O>(self, op: O) -> Outcome<U, E>
    where
        O: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(value) => op(value),
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    /// Alias for [`and_then`](Outcome::and_then).
    ///
    /// Reads better at call sites where the continuation performs a lookup
    /// that may come back empty. Not a distinct algorithm.
    pub fn find<U, O>(self, op: O) -> Outcome<U, E>
    where
        O: FnOnce(T) -> Outcome<U, E>,
    {
        self.and_then(op)
    }

    /// Applies `op` to the error, leaving a value untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let outcome: Outcome<i32, i32> = Outcome::Error(404);
    /// assert_eq!(
    ///     outcome.map_error(|code| format!("status {code}")),
    ///     Outcome::Error("status 404".to_string()),
    /// );
    /// ```
    pub fn map_error<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Error(error) => Outcome::Error(op(error)),
        }
    }

    /// Keeps the value only if `predicate` accepts it; otherwise yields
    /// `Error(error_if_fails)`.
    ///
    /// In the `Error` state the predicate is not consulted and the stored
    /// error payload is **replaced** by `error_if_fails`. Callers that need
    /// the original cause must capture it before filtering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(10);
    /// assert_eq!(outcome.filter(|n| *n > 5, "too small"), Outcome::Ok(10));
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert_eq!(outcome.filter(|n| *n > 5, "too small"), Outcome::Error("too small"));
    /// ```
    pub fn filter<P>(self, predicate: P, error_if_fails: E) -> Outcome<T, E>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Outcome::Ok(value) if predicate(&value) => Outcome::Ok(value),
            _ => Outcome::Error(error_if_fails),
        }
    }

    /// Pairs two ok values; any error short-circuits with left precedence.
    ///
    /// When both sides are errors, `self`'s payload wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let left: Outcome<i32, &str> = Outcome::Ok(1);
    /// let right: Outcome<char, &str> = Outcome::Ok('a');
    /// assert_eq!(left.zip(right), Outcome::Ok((1, 'a')));
    ///
    /// let left: Outcome<i32, &str> = Outcome::Error("left failed");
    /// let right: Outcome<char, &str> = Outcome::Error("right failed");
    /// assert_eq!(left.zip(right), Outcome::Error("left failed"));
    /// ```
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        match (self, other) {
            (Outcome::Ok(left), Outcome::Ok(right)) => Outcome::Ok((left, right)),
            (Outcome::Error(error), _) => Outcome::Error(error),
            (_, Outcome::Error(error)) => Outcome::Error(error),
        }
    }

    /// Combines two ok values with `combine`; inherits [`zip`](Outcome::zip)'s
    /// short-circuit order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let width: Outcome<u32, &str> = Outcome::Ok(3);
    /// let height: Outcome<u32, &str> = Outcome::Ok(4);
    /// assert_eq!(width.zip_with(height, |w, h| w * h), Outcome::Ok(12));
    /// ```
    pub fn zip_with<U, R, O>(self, other: Outcome<U, E>, combine: O) -> Outcome<R, E>
    where
        O: FnOnce(T, U) -> R,
    {
        self.zip(other).map(|(left, right)| combine(left, right))
    }

    /// Turns an error into a value, producing an unconditionally ok
    /// outcome.
    ///
    /// The fresh error type parameter `F` is the static guarantee that no
    /// failure state remains: the returned outcome can carry any error
    /// type precisely because it will never hold one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::convert::Infallible;
    /// use twotrack::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Error("offline".to_string());
    /// let recovered: Outcome<i32, Infallible> = outcome.recover(|_| 0);
    /// assert_eq!(recovered, Outcome::Ok(0));
    /// ```
    pub fn recover<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Error(error) => Outcome::Ok(op(error)),
        }
    }

    /// Hands the error to `op`, which may itself succeed or fail; an ok
    /// value passes through unchanged.
    ///
    /// Retry loops compose on top of this: call the operation again from
    /// `op` as many times as policy allows. The crate deliberately ships
    /// no retry policy of its own.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Error("miss".to_string());
    /// let retried = outcome.or_else(|_| Outcome::<i32, String>::Ok(99));
    /// assert_eq!(retried, Outcome::Ok(99));
    /// ```
    pub fn or_else<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Error(error) => op(error),
        }
    }

    /// Runs `op` on a borrowed value for its side effect and returns the
    /// outcome unchanged. No-op in the `Error` state.
    ///
    /// Intended for diagnostics in the middle of a chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(21);
    /// let doubled = outcome
    ///     .inspect(|n| tracing::debug!("halfway value: {}", n))
    ///     .map(|n| n * 2);
    /// assert_eq!(doubled, Outcome::Ok(42));
    /// ```
    pub fn inspect<O>(self, op: O) -> Self
    where
        O: FnOnce(&T),
    {
        if let Outcome::Ok(value) = &self {
            op(value);
        }
        self
    }

    /// Runs `op` on a borrowed error for its side effect and returns the
    /// outcome unchanged. No-op in the `Ok` state.
    pub fn inspect_error<O>(self, op: O) -> Self
    where
        O: FnOnce(&E),
    {
        if let Outcome::Error(error) = &self {
            op(error);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_queries_are_mutually_exclusive() {
        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        assert!(ok.is_ok());
        assert!(!ok.is_error());

        let error: Outcome<i32, &str> = Outcome::Error("boom");
        assert!(!error.is_ok());
        assert!(error.is_error());
    }

    #[test]
    fn test_unwrap_returns_value() {
        let outcome: Outcome<i32, &str> = Outcome::Ok(7);
        assert_eq!(outcome.unwrap(), 7);
    }

    #[test]
    #[should_panic(expected = "Cannot access value in a non-Ok instance")]
    fn test_unwrap_panics_on_error_state() {
        let outcome: Outcome<i32, &str> = Outcome::Error("boom");
        let _ = outcome.unwrap();
    }

    #[test]
    #[should_panic(expected = "Cannot access error in a non-Error instance")]
    fn test_unwrap_error_panics_on_ok_state() {
        let outcome: Outcome<i32, &str> = Outcome::Ok(7);
        let _ = outcome.unwrap_error();
    }

    #[test]
    fn test_fold_invokes_exactly_one_handler() {
        let ok: Outcome<i32, &str> = Outcome::Ok(2);
        assert_eq!(ok.fold(|n| n + 1, |_| -1), 3);

        let error: Outcome<i32, &str> = Outcome::Error("boom");
        assert_eq!(error.fold(|n| n + 1, |_| -1), -1);
    }

    #[test]
    fn test_map_passes_error_through_untouched() {
        let error: Outcome<i32, &str> = Outcome::Error("boom");
        assert_eq!(error.map(|n| n * 2), Outcome::Error("boom"));
    }

    #[test]
    fn test_and_then_never_runs_in_error_state() {
        let error: Outcome<i32, &str> = Outcome::Error("boom");
        let result = error.and_then(|_| -> Outcome<i32, &str> {
            panic!("continuation must not run");
        });
        assert_eq!(result, Outcome::Error("boom"));
    }

    #[test]
    fn test_find_is_an_alias_of_and_then() {
        let outcome: Outcome<i32, &str> = Outcome::Ok(4);
        assert_eq!(
            outcome.find(|n| Outcome::Ok(n * 2)),
            Outcome::<i32, &str>::Ok(4).and_then(|n| Outcome::Ok(n * 2)),
        );
    }

    #[test]
    fn test_filter_keeps_accepted_value() {
        let outcome: Outcome<i32, &str> = Outcome::Ok(10);
        assert_eq!(outcome.filter(|n| *n > 5, "too small"), Outcome::Ok(10));
    }

    #[test]
    fn test_filter_rejects_with_supplied_error() {
        let outcome: Outcome<i32, &str> = Outcome::Ok(1);
        assert_eq!(
            outcome.filter(|n| *n > 5, "too small"),
            Outcome::Error("too small"),
        );
    }

    #[test]
    fn test_filter_on_error_replaces_stored_error() {
        // Contract: an already-failed outcome does not keep its original
        // cause through filter. The predicate is not consulted either.
        let outcome: Outcome<i32, &str> = Outcome::Error("original cause");
        let filtered = outcome.filter(
            |_| panic!("predicate must not run in the error state"),
            "replacement",
        );
        assert_eq!(filtered, Outcome::Error("replacement"));
    }

    #[test]
    fn test_zip_left_error_takes_precedence() {
        let left: Outcome<i32, &str> = Outcome::Error("left");
        let right: Outcome<i32, &str> = Outcome::Error("right");
        assert_eq!(left.zip(right), Outcome::Error("left"));
    }

    #[test]
    fn test_zip_right_error_surfaces_when_left_is_ok() {
        let left: Outcome<i32, &str> = Outcome::Ok(1);
        let right: Outcome<i32, &str> = Outcome::Error("right");
        assert_eq!(left.zip(right), Outcome::Error("right"));
    }

    #[test]
    fn test_zip_with_combines_both_values() {
        let left: Outcome<i32, &str> = Outcome::Ok(20);
        let right: Outcome<i32, &str> = Outcome::Ok(22);
        assert_eq!(left.zip_with(right, |a, b| a + b), Outcome::Ok(42));
    }

    #[test]
    fn test_recover_always_yields_ok() {
        let error: Outcome<i32, &str> = Outcome::Error("boom");
        let recovered: Outcome<i32, std::convert::Infallible> = error.recover(|_| 0);
        assert_eq!(recovered, Outcome::Ok(0));

        let ok: Outcome<i32, &str> = Outcome::Ok(5);
        let kept: Outcome<i32, std::convert::Infallible> = ok.recover(|_| 0);
        assert_eq!(kept, Outcome::Ok(5));
    }

    #[test]
    fn test_or_else_may_fail_again() {
        let error: Outcome<i32, &str> = Outcome::Error("first");
        let still_failed = error.or_else(|_| Outcome::<i32, &str>::Error("second"));
        assert_eq!(still_failed, Outcome::Error("second"));
    }

    #[test]
    fn test_or_else_skips_op_in_ok_state() {
        let ok: Outcome<i32, &str> = Outcome::Ok(3);
        let result = ok.or_else(|_| -> Outcome<i32, &str> {
            panic!("recovery must not run in the ok state");
        });
        assert_eq!(result, Outcome::Ok(3));
    }

    #[test]
    fn test_inspect_fires_only_in_ok_state() {
        let mut seen = Vec::new();
        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        let returned = ok.inspect(|n| seen.push(*n));
        assert_eq!(returned, Outcome::Ok(1));

        let error: Outcome<i32, &str> = Outcome::Error("boom");
        let returned = error.inspect(|n| seen.push(*n));
        assert_eq!(returned, Outcome::Error("boom"));

        assert_eq!(seen, vec![1]);
    }

    #[test]
    fn test_inspect_error_fires_only_in_error_state() {
        let mut seen = Vec::new();
        let error: Outcome<i32, &str> = Outcome::Error("boom");
        let returned = error.inspect_error(|e| seen.push(*e));
        assert_eq!(returned, Outcome::Error("boom"));

        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        let _ = ok.inspect_error(|e| seen.push(*e));

        assert_eq!(seen, vec!["boom"]);
    }

    #[test]
    fn test_as_ref_borrows_payload() {
        let outcome: Outcome<String, String> = Outcome::Ok("value".to_string());
        assert_eq!(outcome.as_ref().map(|s| s.len()), Outcome::Ok(5));
        // The original is still usable after borrowing.
        assert!(outcome.is_ok());
    }

    #[test]
    fn test_serde_round_trip_is_externally_tagged() {
        let ok: Outcome<i32, String> = Outcome::Ok(5);
        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(json, r#"{"ok":5}"#);

        let error: Outcome<i32, String> = Outcome::Error("boom".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"error":"boom"}"#);

        let parsed: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, error);
    }
}
