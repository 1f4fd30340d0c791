//! Error types for validation failures.
//!
//! This module provides [`PathError`] for a single broken invariant and
//! [`BatchErrors`] for accumulating the failures of a batch of inputs.

mod batch_error;
mod path_error;

pub use batch_error::{BatchError, BatchErrors};
pub use path_error::PathError;
