#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Success-or-error outcome values for the two-track style of error
//! handling.
//!
//! This crate replaces exception-style control flow with an explicit,
//! inspectable value: an operation returns an [`Outcome`] that is exactly
//! one of two states, `Ok` with a usable value or `Error` with the failure
//! that occurred instead. The value can then be transformed and queried
//! without unwinding a call stack:
//!
//! - **The [`Outcome`] type** with its combinator algebra (`map`,
//!   `and_then`, `fold`, `zip`, `recover`, `inspect`, and friends)
//! - **Panic-catching adapters** ([`safe_sync`], [`safe_async`],
//!   [`safe_async_flat`]) that turn panicking operations into outcomes,
//!   normalizing the panic payload into a structured error message
//! - **Constructors** from host shapes: [`from_option`],
//!   [`from_predicate`], and `From` conversions with `Result`
//! - **Collection combinators**: fail-fast [`sequence`] and [`traverse`],
//!   total [`partition`], and the accumulating [`collect_all_errors`]
//!
//! Outcomes are plain immutable values with no shared state; they are
//! safe to move across threads whenever their payloads are, and nothing
//! in this crate spawns, schedules, or cancels work of its own.
//!
//! # Examples
//!
//! ```rust
//! use twotrack::{sequence, Outcome};
//!
//! fn lookup(id: u32) -> Outcome<&'static str, String> {
//!     match id {
//!         1 => Outcome::Ok("alpha"),
//!         2 => Outcome::Ok("beta"),
//!         _ => Outcome::Error(format!("no record {id}")),
//!     }
//! }
//!
//! let names = sequence(vec![lookup(1), lookup(2)]);
//! assert_eq!(names, Outcome::Ok(vec!["alpha", "beta"]));
//!
//! let names = sequence(vec![lookup(1), lookup(9)]);
//! assert_eq!(names, Outcome::Error("no record 9".to_string()));
//! ```

pub mod catch;
pub mod collect;
pub mod convert;
pub mod error;
pub mod outcome;

pub use catch::{safe_async, safe_async_flat, safe_sync};
#[allow(deprecated)]
pub use collect::validate_all;
pub use collect::{collect_all_errors, partition, sequence, traverse};
pub use convert::{from_option, from_predicate};
pub use error::AbsentValue;
pub use outcome::Outcome;

/// Convenient re-exports of commonly used items.
///
/// Import the whole surface with:
///
/// ```rust
/// use twotrack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catch::{safe_async, safe_async_flat, safe_sync};
    pub use crate::collect::{collect_all_errors, partition, sequence, traverse};
    pub use crate::convert::{from_option, from_predicate};
    pub use crate::error::AbsentValue;
    pub use crate::outcome::Outcome;
}
