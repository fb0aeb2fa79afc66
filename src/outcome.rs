// used to print out readable forms of the container
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::OptionalityError;
use crate::optional::Optional;

/// The result of an operation that either succeeded with a value of type `T`
/// or failed with a diagnostic of type `E`.
///
/// Success is represented by [`Outcome::Ok`] and failure by [`Outcome::Err`];
/// exactly one of the two describes any instance. Returning an `Outcome`
/// forces the caller to deal with the failing branch, which keeps error
/// handling exception-free throughout.
///
/// The name avoids colliding with the prelude's `Result`; the variants keep
/// the conventional labels and read best path-qualified, as in
/// `Outcome::Ok(value)`.
///
/// If there is no diagnostic worth attaching to the failing branch, use
/// [`Optional`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// The operation succeeded and produced a value.
    Ok(T),
    /// The operation failed and left a diagnostic.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Determines if this outcome is successful.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Determines if this outcome is a failure.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Return the contained success value, ignoring any failure.
    ///
    /// Callers are expected to check [`is_ok`](Outcome::is_ok) or
    /// [`is_err`](Outcome::is_err) first.
    ///
    /// # Panics
    /// Panics with an invalid-state-access message if called on `Err`.
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => panic!(
                "{}",
                OptionalityError::InvalidStateAccess {
                    operation: "unwrap",
                    variant: "Err",
                }
            ),
        }
    }

    /// Return the contained diagnostic, ignoring any success.
    ///
    /// # Panics
    /// Panics with an invalid-state-access message if called on `Ok`.
    pub fn unwrap_err(self) -> E {
        match self {
            Outcome::Ok(_) => panic!(
                "{}",
                OptionalityError::InvalidStateAccess {
                    operation: "unwrap_err",
                    variant: "Ok",
                }
            ),
            Outcome::Err(error) => error,
        }
    }

    /// Maps the success branch through `operation`, passing `Err` through
    /// with its original diagnostic.
    ///
    /// The variant tag never changes under a map: `Ok` stays `Ok` and `Err`
    /// stays `Err`.
    pub fn map<R, F>(self, operation: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(operation(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the failure branch through `operation`, passing `Ok` through
    /// with its original value.
    pub fn map_err<F, O>(self, operation: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(operation(error)),
        }
    }

    /// Project the success branch into an [`Optional`], discarding any
    /// diagnostic.
    pub fn ok(self) -> Optional<T> {
        match self {
            Outcome::Ok(value) => Optional::Present(value),
            Outcome::Err(_) => Optional::Absent,
        }
    }

    /// Project the failure branch into an [`Optional`], discarding any
    /// success value.
    pub fn err(self) -> Optional<E> {
        match self {
            Outcome::Ok(_) => Optional::Absent,
            Outcome::Err(error) => Optional::Present(error),
        }
    }

    /// Borrowing projection, so inspection does not consume the container.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Ok(value) => write!(f, "Ok({})", value),
            Outcome::Err(error) => write!(f, "Err({})", error),
        }
    }
}
