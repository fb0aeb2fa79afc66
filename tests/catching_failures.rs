use std::error::Error;

use optionality::OptionalityError;
use optionality::catching::run_catching;
use optionality::outcome::Outcome;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// The broad failure type raised by the probed operation.
#[derive(Error, Debug)]
enum ProbeFailure {
    #[error("probe timed out: {0}")]
    Timeout(String),
    #[error("probe refused: {0}")]
    Refused(String),
}

/// The one category the caller declares it will handle.
#[derive(Debug, PartialEq)]
struct Timeout(String);

fn select_timeouts(failure: ProbeFailure) -> Result<Timeout, ProbeFailure> {
    match failure {
        ProbeFailure::Timeout(message) => Ok(Timeout(message)),
        other => Err(other),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn a_completing_operation_comes_back_ok() {
    let outcome = run_catching(|| Ok::<_, ProbeFailure>(42), select_timeouts).unwrap();
    assert_eq!(outcome.unwrap(), 42);
}

#[test]
fn an_anticipated_failure_is_converted() {
    let outcome = run_catching(
        || Err::<i32, _>(ProbeFailure::Timeout("bad".to_string())),
        select_timeouts,
    )
    .unwrap();
    assert_eq!(outcome, Outcome::Err(Timeout("bad".to_string())));
}

#[test]
fn an_unanticipated_failure_is_resignalled() {
    init_tracing();
    let caught = run_catching(
        || Err::<i32, _>(ProbeFailure::Refused("denied".to_string())),
        select_timeouts,
    );
    let error = caught.unwrap_err();
    assert!(matches!(
        error,
        OptionalityError::UnexpectedFailureCategory { .. }
    ));
    assert!(error.to_string().contains("outside the anticipated category"));
    // The original diagnostics stay attached as the cause.
    let source = error.source().expect("cause chain preserved");
    assert_eq!(source.to_string(), "probe refused: denied");
}

#[test]
fn plain_string_failures_can_be_caught_too() {
    let outcome: Outcome<i32, String> =
        run_catching(|| Err::<i32, _>("flat tire".to_string()), Ok).unwrap();
    assert_eq!(outcome, Outcome::Err("flat tire".to_string()));
}
