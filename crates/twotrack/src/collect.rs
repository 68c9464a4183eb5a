//! Combinators that lift the single-value algebra to collections.
//!
//! Two policies exist for a sequence of outcomes:
//!
//! - **Fail fast**: [`sequence`] and [`traverse`] stop at the first error
//!   and propagate only that payload.
//! - **Accumulate**: [`collect_all_errors`] processes the entire input and
//!   returns every error payload found, in order.
//!
//! [`partition`] is the total building block underneath accumulation: it
//! never fails, it just splits the two states into ordered buckets.

use crate::outcome::Outcome;

impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    /// Collects an iterator of outcomes into an outcome of a collection,
    /// failing fast on the first error.
    ///
    /// Elements past the first error are not consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let items = vec![Outcome::<i32, &str>::Ok(1), Outcome::Ok(2)];
    /// let collected: Outcome<Vec<i32>, &str> = items.into_iter().collect();
    /// assert_eq!(collected, Outcome::Ok(vec![1, 2]));
    /// ```
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<A, E>>,
    {
        let mut first_error = None;
        let values: V = iter
            .into_iter()
            .map_while(|item| match item {
                Outcome::Ok(value) => Some(value),
                Outcome::Error(error) => {
                    first_error = Some(error);
                    None
                }
            })
            .collect();
        match first_error {
            Some(error) => Outcome::Error(error),
            None => Outcome::Ok(values),
        }
    }
}

/// Scans outcomes left to right, failing fast on the first error.
///
/// All-ok input yields the extracted values in input order; the first
/// error returns immediately with that payload alone. Empty input is
/// `Ok` of an empty vector.
///
/// # Examples
///
/// ```rust
/// use twotrack::{sequence, Outcome};
///
/// let all_ok = vec![Outcome::<i32, &str>::Ok(1), Outcome::Ok(2), Outcome::Ok(3)];
/// assert_eq!(sequence(all_ok), Outcome::Ok(vec![1, 2, 3]));
///
/// let mixed = vec![Outcome::Ok(1), Outcome::Error("first"), Outcome::Error("second")];
/// assert_eq!(sequence(mixed), Outcome::Error("first"));
/// ```
pub fn sequence<T, E, I>(items: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    items.into_iter().collect()
}

/// Splits outcomes into their two states, preserving relative order
/// within each bucket. Total; never fails.
///
/// # Examples
///
/// ```rust
/// use twotrack::{partition, Outcome};
///
/// let items = vec![
///     Outcome::Ok(1),
///     Outcome::Error("a"),
///     Outcome::Ok(2),
///     Outcome::Error("b"),
/// ];
/// assert_eq!(partition(items), (vec![1, 2], vec!["a", "b"]));
/// ```
pub fn partition<T, E, I>(items: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for item in items {
        match item {
            Outcome::Ok(value) => values.push(value),
            Outcome::Error(error) => errors.push(error),
        }
    }
    (values, errors)
}

/// Maps `op` over the input and sequences the results, failing fast on
/// the first error.
///
/// `op` is not invoked past the first failing element. A panic raised by
/// `op` propagates to the caller.
///
/// # Examples
///
/// ```rust
/// use twotrack::{traverse, Outcome};
///
/// let parsed = traverse(vec!["1", "2", "3"], |raw: &str| {
///     raw.parse::<i32>().map_err(|e| e.to_string()).into()
/// });
/// assert_eq!(parsed, Outcome::Ok(vec![1, 2, 3]));
/// ```
pub fn traverse<I, T, E, Item, O>(items: I, op: O) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Item>,
    O: FnMut(Item) -> Outcome<T, E>,
{
    items.into_iter().map(op).collect()
}

/// Accumulating counterpart of [`sequence`]: processes the entire input
/// and returns every error payload found.
///
/// Any error yields `Error` wrapping the full ordered list of error
/// payloads; all-ok input yields the ordered values. Unlike [`sequence`],
/// nothing short-circuits.
///
/// # Examples
///
/// ```rust
/// use twotrack::{collect_all_errors, Outcome};
///
/// let items = vec![Outcome::Ok(1), Outcome::Error("a"), Outcome::Error("b")];
/// assert_eq!(collect_all_errors(items), Outcome::Error(vec!["a", "b"]));
/// ```
pub fn collect_all_errors<T, E, I>(items: I) -> Outcome<Vec<T>, Vec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let (values, errors) = partition(items);
    if errors.is_empty() {
        Outcome::Ok(values)
    } else {
        Outcome::Error(errors)
    }
}

/// Legacy name for [`collect_all_errors`].
#[deprecated(note = "renamed to `collect_all_errors`")]
pub fn validate_all<T, E, I>(items: I) -> Outcome<Vec<T>, Vec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    collect_all_errors(items)
}
