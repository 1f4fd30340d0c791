//! Two-way branching values and panic-safe callback execution.
//!
//! Fallible steps in this crate return `Result<T, PathError>`, which already is
//! the short-circuiting "either an error or a value" type. [`Either`] covers the
//! remaining case: a successful value that can take one of two shapes, such as
//! a path that is either relative or absolute. [`attempt`] is the `Try`
//! primitive used wherever a caller-supplied closure runs inside the pipeline.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::error::PathError;

/// A value that is either `Left` or `Right`.
///
/// # Example
///
/// ```rust
/// use pathguard::{Either, NonSneakyPath, Platform};
///
/// let path = NonSneakyPath::create_for(Platform::Posix, "docs/readme.md").unwrap();
/// let classified = path.classify().unwrap();
/// assert!(classified.is_left()); // relative
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns true if this is a `Left` value.
    pub const fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns true if this is a `Right` value.
    pub const fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Returns the `Left` value, if present.
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the `Right` value, if present.
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Maps the `Right` value, leaving a `Left` untouched.
    pub fn map<U, F: FnOnce(R) -> U>(self, f: F) -> Either<L, U> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Maps the `Left` value, leaving a `Right` untouched.
    pub fn map_left<U, F: FnOnce(L) -> U>(self, f: F) -> Either<U, R> {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Chains a computation on the `Right` value.
    pub fn and_then<U, F: FnOnce(R) -> Either<L, U>>(self, f: F) -> Either<L, U> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Folds both variants into a single value.
    pub fn fold<T, FL, FR>(self, left_fn: FL, right_fn: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }

    /// Swaps `Left` and `Right`.
    pub fn flip(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Converts into a `Result`, treating `Left` as the error.
    pub fn into_result(self) -> Result<R, L> {
        self.into()
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

/// Runs `f`, folding a panic into the error channel.
///
/// A panic raised by `f` becomes [`PathError::CallbackPanicked`], converted
/// into the caller's error type. Errors returned by `f` pass through as-is.
///
/// # Example
///
/// ```rust
/// use pathguard::{attempt, PathError};
///
/// let result: Result<(), PathError> = attempt(|| panic!("boom"));
/// assert!(matches!(result, Err(PathError::CallbackPanicked { .. })));
/// ```
pub fn attempt<T, E, F>(f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: From<PathError>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!(%message, "callback panicked");
            Err(PathError::CallbackPanicked { message }.into())
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let left: Either<i32, &str> = Either::Left(1);
        let right: Either<i32, &str> = Either::Right("r");

        assert!(left.is_left());
        assert!(right.is_right());
        assert_eq!(left.left(), Some(1));
        assert_eq!(left.right(), None);
        assert_eq!(right.right(), Some("r"));
    }

    #[test]
    fn test_map_only_touches_right() {
        let left: Either<i32, i32> = Either::Left(1);
        let right: Either<i32, i32> = Either::Right(1);

        assert_eq!(left.map(|x| x + 1), Either::Left(1));
        assert_eq!(right.map(|x| x + 1), Either::Right(2));
        assert_eq!(left.map_left(|x| x * 10), Either::Left(10));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let left: Either<&str, i32> = Either::Left("stop");
        let mut called = false;
        let result = left.and_then(|x| {
            called = true;
            Either::Right(x + 1)
        });
        assert_eq!(result, Either::Left("stop"));
        assert!(!called);
    }

    #[test]
    fn test_fold_and_flip() {
        let right: Either<i32, &str> = Either::Right("abc");
        assert_eq!(right.fold(|n| n as usize, str::len), 3);
        assert_eq!(right.flip(), Either::Left("abc"));
    }

    #[test]
    fn test_result_round_trip() {
        let ok: Result<i32, String> = Ok(5);
        let either: Either<String, i32> = ok.clone().into();
        assert_eq!(either, Either::Right(5));
        assert_eq!(either.into_result(), ok);
    }

    #[test]
    fn test_attempt_passes_results_through() {
        let ok: Result<i32, PathError> = attempt(|| Ok(3));
        assert_eq!(ok, Ok(3));

        let err: Result<i32, PathError> = attempt(|| Err(PathError::NullOrEmptyInput));
        assert_eq!(err, Err(PathError::NullOrEmptyInput));
    }

    #[test]
    fn test_attempt_catches_panics() {
        let result: Result<(), PathError> = attempt(|| panic!("disk on fire"));
        assert_eq!(
            result,
            Err(PathError::CallbackPanicked {
                message: "disk on fire".to_string()
            })
        );

        let result: Result<(), PathError> = attempt(|| panic!("{} items", 3));
        assert_eq!(
            result,
            Err(PathError::CallbackPanicked {
                message: "3 items".to_string()
            })
        );
    }
}
