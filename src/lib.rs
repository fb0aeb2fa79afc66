//! Optionality – explicit container types for values that may be missing and
//! operations that may fail.
//!
//! The crate centers on two closed two-variant sum types:
//! * An [`optional::Optional`] holds either `Present(value)` or `Absent`,
//!   expressing presence without auxiliary failure information.
//! * An [`outcome::Outcome`] holds either `Ok(value)` or `Err(error)`,
//!   generalizing `Optional` by attaching a typed diagnostic to the failing
//!   branch.
//!
//! Both are ordinary tagged enums, so the payload types are completely
//! unrestricted (a `Present(None)` or a nested `Optional<Optional<T>>` is
//! perfectly representable). Instances are immutable after construction and
//! freely shareable across concurrent readers.
//!
//! ## Modules
//! * [`optional`] – The [`optional::Optional`] container and its host
//!   conversions.
//! * [`outcome`] – The [`outcome::Outcome`] container with projections onto
//!   both branches.
//! * [`catching`] – The single bridge from open-ended failure values into the
//!   `Outcome` convention.
//! * [`testing`] – Variant assertions for use inside test suites.
//!
//! ## Quick Start
//! ```
//! use optionality::optional::Optional;
//! use optionality::outcome::Outcome;
//!
//! let doubled = Optional::of(Some(21)).map(|n| n * 2);
//! assert_eq!(doubled, Optional::Present(42));
//!
//! let labelled: Outcome<u32, String> = Outcome::Err("offline".to_string())
//!     .map_err(|e| format!("probe failed: {e}"));
//! assert!(labelled.is_err());
//! ```
//!
//! ## Error Handling
//! The crate itself is exception-free: no operation returns an error except
//! [`catching::run_catching`], and no operation panics except `unwrap` and
//! `unwrap_err` when called on the wrong variant. Callers are expected to
//! check `is_present`/`is_ok` first, which makes those panics avoidable at
//! every correct call site.

pub mod catching;
pub mod optional;
pub mod outcome;
pub mod testing;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptionalityError {
    #[error("invalid state access: `{operation}` called on `{variant}`")]
    InvalidStateAccess {
        operation: &'static str,
        variant: &'static str,
    },
    #[error("operation failed outside the anticipated category: {source}")]
    UnexpectedFailureCategory {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, OptionalityError>;
