use spigot_api::errors::{ArgError, CoordinatorError, DigitError, PoolError};
use std::error::Error;

#[test]
fn test_digit_error_messages() {
    assert_eq!(
        DigitError::ZeroPosition.to_string(),
        "Digit position must be at least 1"
    );
    assert_eq!(
        DigitError::PositionOutOfRange { position: 7, max: 5 }.to_string(),
        "Digit position 7 exceeds the supported maximum of 5"
    );
}

#[test]
fn test_pool_error_messages() {
    assert_eq!(PoolError::QueueEmpty.to_string(), "Work queue is empty");
    assert_eq!(
        PoolError::DuplicateResult(4).to_string(),
        "Result for position 4 already recorded"
    );
    assert_eq!(
        PoolError::Incomplete { missing: 9 }.to_string(),
        "Result table is incomplete: position 9 has no digit"
    );
}

#[test]
fn test_coordinator_error_conversions() {
    let err: CoordinatorError = DigitError::ZeroPosition.into();
    assert_eq!(
        err.to_string(),
        "Digit extraction failed: Digit position must be at least 1"
    );
    assert!(err.source().is_some());

    let err: CoordinatorError = PoolError::QueueEmpty.into();
    assert!(matches!(err, CoordinatorError::Pool(PoolError::QueueEmpty)));

    let err: CoordinatorError = anyhow::anyhow!("boom").into();
    assert_eq!(err.to_string(), "Internal coordinator error: boom");
}

#[test]
fn test_coordinator_error_messages() {
    assert_eq!(
        CoordinatorError::InvalidDigitCount { requested: 0, max: 10 }.to_string(),
        "Invalid digit count 0: expected a value between 1 and 10"
    );
    assert_eq!(
        CoordinatorError::WorkerPanicked { worker: 3 }.to_string(),
        "Worker 3 panicked"
    );
    assert_eq!(CoordinatorError::Cancelled.to_string(), "Run was cancelled");
    assert!(CoordinatorError::Cancelled.source().is_none());
}

#[test]
fn test_arg_error_messages() {
    assert_eq!(
        ArgError::InvalidNumber("abc".to_string()).to_string(),
        "Invalid digit count 'abc': expected a positive integer"
    );
    assert_eq!(
        ArgError::TooManyArguments(3).to_string(),
        "Expected at most one argument, got 3"
    );
}
