//! Validating many raw paths at once.
//!
//! The factories short-circuit on the first problem with a single input.
//! Across inputs the batch functions accumulate instead: every input is
//! validated and every failure is reported, tagged with its position, as a
//! stillwater [`Validation`].

use rayon::prelude::*;
use stillwater::Validation;
use tracing::debug;

use crate::either::attempt;
use crate::error::{BatchError, BatchErrors};
use crate::{BatchResult, PathResult};

/// Runs `factory` over every input in order.
///
/// A panic inside `factory` fails only that input, with
/// [`PathError::CallbackPanicked`](crate::PathError::CallbackPanicked).
///
/// # Example
///
/// ```rust
/// use pathguard::{validate_all, AbsoluteFilePath, Platform};
///
/// let result = validate_all(["/etc/hosts", "relative", "/tmp/../etc/shadow"], |raw| {
///     AbsoluteFilePath::create_for(Platform::Posix, raw)
/// });
///
/// let errors = result.into_result().unwrap_err();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first().code(), "not_rooted");
/// assert!(errors.at_index(2).is_some());
/// ```
pub fn validate_all<I, S, T, F>(inputs: I, factory: F) -> BatchResult<T>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&str) -> PathResult<T>,
{
    let results: Vec<_> = inputs
        .into_iter()
        .enumerate()
        .map(|(index, raw)| validate_one(index, raw.as_ref(), &factory))
        .collect();
    gather(results)
}

/// Like [`validate_all`], with the inputs spread over rayon's pool.
///
/// Results and errors keep input order.
pub fn par_validate_all<S, T, F>(inputs: &[S], factory: F) -> BatchResult<T>
where
    S: AsRef<str> + Sync,
    T: Send,
    F: Fn(&str) -> PathResult<T> + Sync + Send,
{
    let results: Vec<_> = inputs
        .par_iter()
        .enumerate()
        .map(|(index, raw)| validate_one(index, raw.as_ref(), &factory))
        .collect();
    gather(results)
}

fn validate_one<T, F>(index: usize, raw: &str, factory: &F) -> Result<T, BatchError>
where
    F: Fn(&str) -> PathResult<T>,
{
    attempt(|| factory(raw)).map_err(|error| BatchError::new(index, raw, error))
}

fn gather<T>(results: Vec<Result<T, BatchError>>) -> BatchResult<T> {
    let total = results.len();
    let mut values = Vec::with_capacity(total);
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(error) => errors.push(error),
        }
    }
    debug!(total, failed = errors.len(), "batch validated");
    match BatchErrors::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(values),
    }
}
