//! Accumulated errors from batch validation.
//!
//! This module provides [`BatchError`] for a single rejected input and
//! [`BatchErrors`] for collecting every rejected input of a batch.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde_json::Value;
use stillwater::prelude::*;

use super::PathError;

/// A single rejected input from a batch, with its position in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchError {
    /// Index of the input in the batch.
    pub index: usize,
    /// The raw input that failed validation.
    pub input: String,
    /// Why the input was rejected.
    pub error: PathError,
}

impl BatchError {
    /// Creates a new batch error.
    pub fn new(index: usize, input: impl Into<String>, error: PathError) -> Self {
        Self {
            index,
            input: input.into(),
            error,
        }
    }

    /// Returns the error code of the underlying [`PathError`].
    pub fn code(&self) -> &'static str {
        self.error.code()
    }
}

impl Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:?}: {}", self.index, self.input, self.error)
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// A non-empty collection of batch errors.
///
/// `BatchErrors` wraps a `NonEmptyVec<BatchError>` so a failed batch always
/// reports at least one rejected input. It implements `Semigroup`, so the
/// failures of several batches can be merged:
///
/// ```rust
/// use pathguard::{BatchError, BatchErrors, PathError};
/// use stillwater::prelude::*;
///
/// let first = BatchErrors::single(BatchError::new(0, "", PathError::NullOrEmptyInput));
/// let second = BatchErrors::single(BatchError::new(3, "  ", PathError::WhitespaceOnlyInput));
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BatchErrors(NonEmptyVec<BatchError>);

impl BatchErrors {
    /// Creates a `BatchErrors` containing a single error.
    pub fn single(error: BatchError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `BatchErrors` from a `Vec`, or `None` if it is empty.
    pub fn from_vec(errors: Vec<BatchError>) -> Option<Self> {
        errors
            .into_iter()
            .map(Self::single)
            .reduce(Semigroup::combine)
    }

    /// Returns the number of rejected inputs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a `BatchErrors` holds at least one error.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &BatchError> {
        self.0.iter()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &BatchError {
        self.0.head()
    }

    /// Returns the error for the input at `index`, if that input failed.
    pub fn at_index(&self, index: usize) -> Option<&BatchError> {
        self.0.iter().find(|e| e.index == index)
    }

    /// Returns all errors with the specified error code.
    pub fn with_code(&self, code: &str) -> Vec<&BatchError> {
        self.0.iter().filter(|e| e.code() == code).collect()
    }

    /// Groups the errors by raw input, preserving first-seen order.
    pub fn by_input(&self) -> IndexMap<&str, Vec<&PathError>> {
        let mut grouped: IndexMap<&str, Vec<&PathError>> = IndexMap::new();
        for error in self.0.iter() {
            grouped
                .entry(error.input.as_str())
                .or_default()
                .push(&error.error);
        }
        grouped
    }

    /// Converts this collection into a `Vec<BatchError>`.
    pub fn into_vec(self) -> Vec<BatchError> {
        self.0.into_vec()
    }

    /// Renders the collection as a JSON array, one object per rejected input.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.0
                .iter()
                .map(|e| {
                    let mut entry = e.error.to_json();
                    entry["index"] = Value::from(e.index);
                    entry["input"] = Value::from(e.input.as_str());
                    entry
                })
                .collect(),
        )
    }
}

impl Semigroup for BatchErrors {
    fn combine(self, other: Self) -> Self {
        BatchErrors(self.0.combine(other.0))
    }
}

impl Display for BatchErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} input(s) failed validation:", self.len())?;
        for error in self.iter() {
            writeln!(f, "  {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for BatchErrors {}

impl IntoIterator for BatchErrors {
    type Item = BatchError;
    type IntoIter = std::vec::IntoIter<BatchError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<BatchErrors>();
    assert_sync::<BatchErrors>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BatchErrors {
        BatchErrors::single(BatchError::new(0, "", PathError::NullOrEmptyInput))
            .combine(BatchErrors::single(BatchError::new(
                2,
                "../etc",
                PathError::SneakyTraversal {
                    path: "../etc".to_string(),
                },
            )))
            .combine(BatchErrors::single(BatchError::new(
                5,
                "../etc",
                PathError::SneakyTraversal {
                    path: "../etc".to_string(),
                },
            )))
    }

    #[test]
    fn test_from_vec_rejects_empty() {
        assert!(BatchErrors::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_lookup() {
        let errors = sample();
        assert_eq!(errors.len(), 3);
        assert!(!errors.is_empty());
        assert_eq!(errors.first().index, 0);
        assert_eq!(errors.at_index(2).unwrap().input, "../etc");
        assert!(errors.at_index(1).is_none());
        assert_eq!(errors.with_code("sneaky_traversal").len(), 2);
    }

    #[test]
    fn test_by_input_keeps_order() {
        let errors = sample();
        let grouped = errors.by_input();
        let keys: Vec<_> = grouped.keys().copied().collect();
        assert_eq!(keys, vec!["", "../etc"]);
        assert_eq!(grouped["../etc"].len(), 2);
    }

    #[test]
    fn test_display() {
        let display = sample().to_string();
        assert!(display.contains("3 input(s) failed"));
        assert!(display.contains("[2] \"../etc\""));
    }

    #[test]
    fn test_to_json() {
        let json = sample().to_json();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1]["index"], 2);
        assert_eq!(entries[1]["code"], "sneaky_traversal");
        assert_eq!(entries[0]["input"], "");
    }

    #[test]
    fn test_semigroup_associativity() {
        let e1 = BatchErrors::single(BatchError::new(1, "a", PathError::NullOrEmptyInput));
        let e2 = BatchErrors::single(BatchError::new(2, "b", PathError::NullOrEmptyInput));
        let e3 = BatchErrors::single(BatchError::new(3, "c", PathError::NullOrEmptyInput));

        let left = e1.clone().combine(e2.clone()).combine(e3.clone());
        let right = e1.combine(e2.combine(e3));

        let left_idx: Vec<_> = left.iter().map(|e| e.index).collect();
        let right_idx: Vec<_> = right.iter().map(|e| e.index).collect();
        assert_eq!(left_idx, right_idx);
    }
}
