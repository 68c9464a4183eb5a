//! Shared helpers for the integration suites.

use thiserror::Error;

/// String-backed error used as the error constructor target across suites.
///
/// Being a tuple struct, `StageError` itself is a `fn(String) -> StageError`
/// and can be passed directly where an error constructor is expected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct StageError(pub String);
