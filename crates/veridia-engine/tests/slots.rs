use veridia_engine::error::EngineError;
use veridia_engine::slots::{Settle, SlotTracker};

#[test]
fn a_slot_admits_one_upload_at_a_time() {
    let mut tracker = SlotTracker::new();
    let ticket = tracker.begin("medications").unwrap();
    assert!(tracker.is_busy("medications"));

    match tracker.begin("medications") {
        Err(EngineError::SlotBusy { slot }) => assert_eq!(slot, "medications"),
        other => panic!("expected SlotBusy, got {other:?}"),
    }

    // Other slots stay independent.
    assert!(tracker.begin("lab_results").is_ok());

    assert_eq!(tracker.settle(&ticket), Settle::Live);
    assert!(!tracker.is_busy("medications"));
}

#[test]
fn settling_frees_the_slot_for_a_retry() {
    let mut tracker = SlotTracker::new();
    let ticket = tracker.begin("id_photo").unwrap();
    tracker.settle(&ticket);
    assert!(tracker.begin("id_photo").is_ok());
}

#[test]
fn results_arriving_after_a_reset_are_stale() {
    let mut tracker = SlotTracker::new();
    let ticket = tracker.begin("medications").unwrap();

    tracker.reset();
    assert!(!tracker.is_busy("medications"));
    assert_eq!(tracker.settle(&ticket), Settle::Stale);

    // A post-reset upload on the same slot settles live.
    let fresh = tracker.begin("medications").unwrap();
    assert_eq!(tracker.settle(&fresh), Settle::Live);
}
