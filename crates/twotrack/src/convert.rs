//! Constructors that lift plain values into [`Outcome`], and conversions
//! to and from `std::result::Result`.

use crate::error::AbsentValue;
use crate::outcome::Outcome;

/// Builds an [`Outcome`] from an optional value.
///
/// `Some` wraps in the `Ok` state; `None` yields [`AbsentValue`].
/// Presence decides, not truthiness: `Some(0)`, `Some("")`, and
/// `Some(false)` are all ok.
///
/// # Examples
///
/// ```rust
/// use twotrack::{from_option, AbsentValue, Outcome};
///
/// assert_eq!(from_option(Some(0)), Outcome::Ok(0));
/// assert_eq!(from_option::<i32>(None), Outcome::Error(AbsentValue));
/// ```
pub fn from_option<T>(value: Option<T>) -> Outcome<T, AbsentValue> {
    match value {
        Some(value) => Outcome::Ok(value),
        None => Outcome::Error(AbsentValue),
    }
}

/// Builds an [`Outcome`] by testing `value` against `predicate`.
///
/// An accepted value wraps in the `Ok` state; a rejected one yields
/// `error` verbatim, with no message normalization. A panic raised by the
/// predicate propagates to the caller.
///
/// # Examples
///
/// ```rust
/// use twotrack::{from_predicate, Outcome};
///
/// let outcome = from_predicate(16, |n| n % 2 == 0, "odd");
/// assert_eq!(outcome, Outcome::Ok(16));
///
/// let outcome = from_predicate(3, |n| n % 2 == 0, "odd");
/// assert_eq!(outcome, Outcome::Error("odd"));
/// ```
pub fn from_predicate<T, E, P>(value: T, predicate: P, error: E) -> Outcome<T, E>
where
    P: FnOnce(&T) -> bool,
{
    if predicate(&value) {
        Outcome::Ok(value)
    } else {
        Outcome::Error(error)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Error(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_option_treats_falsy_values_as_present() {
        assert_eq!(from_option(Some(0)), Outcome::Ok(0));
        assert_eq!(from_option(Some("")), Outcome::Ok(""));
        assert_eq!(from_option(Some(false)), Outcome::Ok(false));
    }

    #[test]
    fn test_from_option_rejects_absent_value() {
        let outcome = from_option::<u8>(None);
        assert_eq!(outcome, Outcome::Error(AbsentValue));
        assert_eq!(outcome.unwrap_error().to_string(), "value is absent");
    }

    #[test]
    fn test_from_predicate_passes_error_verbatim() {
        #[derive(Debug, PartialEq)]
        struct Rejected {
            code: u16,
        }

        let outcome = from_predicate(9, |n| *n > 10, Rejected { code: 422 });
        assert_eq!(outcome, Outcome::Error(Rejected { code: 422 }));
    }

    #[test]
    fn test_result_round_trip() {
        let outcome: Outcome<i32, String> = Ok(5).into();
        assert_eq!(outcome, Outcome::Ok(5));

        let result: Result<i32, String> = Outcome::Error("boom".to_string()).into();
        assert_eq!(result, Err("boom".to_string()));
    }
}
