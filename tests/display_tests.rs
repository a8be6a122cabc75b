//! Integration tests for Display and Debug implementations.
//!
//! The textual forms are a contract: success renders as
//! `Success(<value>)`, failure as `Fail(<fault name>: <message>)`,
//! present as `HasValue(<value>)` and absent as `IsEmpty`.

use railway::completion::Completion;
use railway::fault::Fault;
use railway::maybe::Maybe;
use railway::outcome::Outcome;

// =============================================================================
// Outcome Display
// =============================================================================

#[test]
fn test_success_display() {
    assert_eq!(format!("{}", Outcome::succeed(5)), "Success(5)");
    assert_eq!(format!("{}", Outcome::succeed("hello")), "Success(hello)");
}

#[test]
fn test_failure_display_includes_fault_name_and_message() {
    let failure: Outcome<i32> = Outcome::fail(Fault::new("boom"));
    assert_eq!(format!("{}", failure), "Fail(Fault: boom)");

    let named: Outcome<i32> = Outcome::fail(Fault::named("NotFound", "user 42 does not exist"));
    assert_eq!(format!("{}", named), "Fail(NotFound: user 42 does not exist)");
}

#[test]
fn test_outcome_debug() {
    assert_eq!(format!("{:?}", Outcome::succeed(5)), "Success(5)");
}

// =============================================================================
// Completion Display
// =============================================================================

#[test]
fn test_completion_success_display() {
    assert_eq!(format!("{}", Completion::succeed()), "Success");
}

#[test]
fn test_completion_failure_display() {
    assert_eq!(format!("{}", Completion::fail("boom")), "Fail(Fault: boom)");
}

// =============================================================================
// Maybe Display
// =============================================================================

#[test]
fn test_present_display() {
    assert_eq!(format!("{}", Maybe::present(42)), "HasValue(42)");
    assert_eq!(format!("{}", Maybe::present("hello")), "HasValue(hello)");
}

#[test]
fn test_empty_display() {
    assert_eq!(format!("{}", Maybe::<i32>::empty()), "IsEmpty");
}

// =============================================================================
// Fault Display
// =============================================================================

#[test]
fn test_fault_display() {
    assert_eq!(format!("{}", Fault::new("boom")), "Fault: boom");
    assert_eq!(
        format!("{}", Fault::named("Timeout", "no response within 5s")),
        "Timeout: no response within 5s"
    );
}
