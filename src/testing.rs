//! Variant assertions for test suites.
//!
//! Each helper checks that a container is in the expected variant and panics
//! with the inspected value's debug rendering otherwise. They are meant for
//! assertions inside tests, not for production control flow.

use std::fmt;

use crate::optional::Optional;
use crate::outcome::Outcome;

/// Asserts that `opt` is `Present`.
#[track_caller]
pub fn assert_present<T: fmt::Debug>(opt: &Optional<T>) {
    assert!(opt.is_present(), "Expected {opt:?} to be Present");
}

/// Asserts that `opt` is `Absent`.
#[track_caller]
pub fn assert_absent<T: fmt::Debug>(opt: &Optional<T>) {
    assert!(opt.is_absent(), "Expected {opt:?} to be Absent");
}

/// Asserts that `outcome` is `Ok`.
#[track_caller]
pub fn assert_ok<T: fmt::Debug, E: fmt::Debug>(outcome: &Outcome<T, E>) {
    assert!(outcome.is_ok(), "Expected {outcome:?} to be Ok");
}

/// Asserts that `outcome` is `Err`.
#[track_caller]
pub fn assert_err<T: fmt::Debug, E: fmt::Debug>(outcome: &Outcome<T, E>) {
    assert!(outcome.is_err(), "Expected {outcome:?} to be Err");
}
