// used to print out readable forms of the container
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::OptionalityError;

/// A value of type `T` which may or may not be present.
///
/// Presence is represented by the [`Optional::Present`] variant and absence
/// by [`Optional::Absent`]; there is no third state and no hidden sentinel,
/// so `T` itself may be any type, including `Option<U>` or another
/// `Optional<U>`.
///
/// Optionals allow basic error handling without any error payload: an
/// operation that may simply come up empty returns `Absent`. When the caller
/// needs to know *why* something failed, [`crate::outcome::Outcome`] carries
/// a typed diagnostic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Optional<T> {
    /// The value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Optional<T> {
    /// Create an optional from a "value or nothing" input, mapping `Some` to
    /// `Present` and `None` to `Absent`.
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }

    /// Determines if the value in this optional is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Determines if the value in this optional is absent.
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Return the contained value, ignoring any absence.
    ///
    /// Because this operation is only meaningful on `Present`, callers are
    /// expected to check [`is_present`](Optional::is_present) or
    /// [`is_absent`](Optional::is_absent) first.
    ///
    /// # Panics
    /// Panics with an invalid-state-access message if called on `Absent`.
    pub fn unwrap(self) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => panic!(
                "{}",
                OptionalityError::InvalidStateAccess {
                    operation: "unwrap",
                    variant: "Absent",
                }
            ),
        }
    }

    /// Maps this optional into an optional of `R` through `operation`.
    ///
    /// The `operation` is only invoked if the value is present; `Absent`
    /// passes through untouched.
    ///
    /// ```
    /// use optionality::optional::Optional;
    /// let opt = Optional::Present(100).map(|it| it * 2).map(|it| it + 4);
    /// assert_eq!(opt, Optional::Present(204));
    /// ```
    pub fn map<R, F>(self, operation: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Optional::Present(value) => Optional::Present(operation(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Borrowing projection, so inspection does not consume the container.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Get the optional as the host-native nullable type.
    pub fn to_option(self) -> Option<T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

/// One-directional conversion into the standard library optional.
impl<T> From<Optional<T>> for Option<T> {
    fn from(opt: Optional<T>) -> Option<T> {
        opt.to_option()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Optional::Present(value) => write!(f, "Present({})", value),
            Optional::Absent => write!(f, "Absent"),
        }
    }
}
