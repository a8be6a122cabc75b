//! Unit tests for the type-erased `Conclusive` capability.

use railway::completion::Completion;
use railway::conclusive::Conclusive;
use railway::fault::Fault;
use railway::outcome::Outcome;
use rstest::rstest;
use std::cell::RefCell;

// =============================================================================
// Flags and Fault Access Through the Erased View
// =============================================================================

#[rstest]
fn flags_are_consistent_across_both_outcome_types() {
    let conclusives: Vec<Box<dyn Conclusive>> = vec![
        Box::new(Outcome::succeed(42)),
        Box::new(Outcome::<i32>::fail("boom")),
        Box::new(Completion::succeed()),
        Box::new(Completion::fail("boom")),
    ];
    let flags: Vec<bool> = conclusives.iter().map(|c| c.is_success()).collect();
    assert_eq!(flags, vec![true, false, true, false]);
    for conclusive in &conclusives {
        assert_ne!(conclusive.is_success(), conclusive.is_failure());
    }
}

#[rstest]
fn fault_is_visible_through_the_erased_view() {
    let fault = Fault::named("NotFound", "missing");
    let erased: &dyn Conclusive = &Outcome::<String>::fail(fault.clone());
    assert_eq!(erased.fault(), Some(&fault));
}

// =============================================================================
// Erased Value Access
// =============================================================================

#[rstest]
fn erased_value_downcasts_to_the_payload_type() {
    let erased: &dyn Conclusive = &Outcome::succeed("payload".to_string());
    let value = erased.erased_value().expect("success carries a value");
    assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("payload"));
    assert!(value.downcast_ref::<i32>().is_none());
}

#[rstest]
fn failure_and_completion_have_no_erased_value() {
    let failure: &dyn Conclusive = &Outcome::<i32>::fail("boom");
    assert!(failure.erased_value().is_none());

    let completion: &dyn Conclusive = &Completion::succeed();
    assert!(completion.erased_value().is_none());
}

// =============================================================================
// Erased Branching
// =============================================================================

#[rstest]
fn branch_erased_invokes_exactly_one_callback() {
    let calls = RefCell::new(Vec::new());
    let success: &dyn Conclusive = &Outcome::succeed(7);
    success.branch_erased(
        &mut |value| {
            let seen = value.and_then(|v| v.downcast_ref::<i32>()).copied();
            calls.borrow_mut().push(format!("success: {seen:?}"));
        },
        &mut |fault| calls.borrow_mut().push(format!("failure: {}", fault.message())),
    );

    let failure: &dyn Conclusive = &Completion::fail("boom");
    failure.branch_erased(
        &mut |_| calls.borrow_mut().push("success".to_string()),
        &mut |fault| calls.borrow_mut().push(format!("failure: {}", fault.message())),
    );

    assert_eq!(calls.into_inner(), vec!["success: Some(7)".to_string(), "failure: boom".to_string()]);
}

#[cfg(feature = "async")]
#[rstest]
fn branch_erased_async_awaits_the_chosen_branch() {
    futures::executor::block_on(async {
        let mut seen = None;
        let erased: Box<dyn Conclusive> = Box::new(Outcome::succeed(42));
        erased
            .branch_erased_async(
                Box::new(|value| {
                    seen = value.and_then(|v| v.downcast_ref::<i32>()).copied();
                    Box::pin(async {})
                }),
                Box::new(|_| Box::pin(async {})),
            )
            .await;
        assert_eq!(seen, Some(42));
    });
}
