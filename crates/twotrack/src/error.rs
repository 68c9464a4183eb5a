//! Library error types.

use thiserror::Error;

/// Error produced by [`from_option`](crate::from_option) when the input
/// holds no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value is absent")]
pub struct AbsentValue;
