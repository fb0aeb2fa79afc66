//! The single bridge between open-ended failure values and the
//! [`Outcome`] convention.
//!
//! Everything else in the crate neither raises nor catches failures; code
//! that talks to fallible operations with broad error types funnels through
//! [`run_catching`], which converts the one failure category the caller
//! declared into `Outcome::Err` and surfaces everything else as a contract
//! violation.

use std::error::Error;

use tracing::warn;

use crate::outcome::Outcome;
use crate::{OptionalityError, Result};

/// Runs a fallible operation and converts an anticipated failure into
/// [`Outcome::Err`].
///
/// The `select` classifier inspects the raised failure: return `Ok(error)` to
/// claim it as the anticipated category `E`, or hand the failure back with
/// `Err` to mark it unanticipated. Classification is the caller's call, so no
/// runtime type identification is involved.
///
/// * `operation` completes with `v` → `Ok(Outcome::Ok(v))`.
/// * `operation` fails and `select` claims the failure → `Ok(Outcome::Err(e))`.
/// * `operation` fails and `select` declines → the failure is re-signalled as
///   [`OptionalityError::UnexpectedFailureCategory`], keeping the original
///   failure attached as its source so no diagnostics are lost.
///
/// ```
/// use optionality::catching::run_catching;
///
/// let outcome = run_catching(
///     || "17".parse::<i32>(),
///     |failure: std::num::ParseIntError| Ok(failure),
/// )
/// .unwrap();
/// assert_eq!(outcome.unwrap(), 17);
/// ```
pub fn run_catching<T, E, F, Op, Sel>(operation: Op, select: Sel) -> Result<Outcome<T, E>>
where
    Op: FnOnce() -> std::result::Result<T, F>,
    Sel: FnOnce(F) -> std::result::Result<E, F>,
    F: Into<Box<dyn Error + Send + Sync>>,
{
    match operation() {
        Ok(value) => Ok(Outcome::Ok(value)),
        Err(failure) => match select(failure) {
            Ok(anticipated) => Ok(Outcome::Err(anticipated)),
            Err(unanticipated) => {
                let source = unanticipated.into();
                warn!(failure = %source, "failure outside the anticipated category");
                Err(OptionalityError::UnexpectedFailureCategory { source })
            }
        },
    }
}
