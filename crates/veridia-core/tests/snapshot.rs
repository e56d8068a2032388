use veridia_core::models::{
    Category, Eligibility, MajorStep, PcpVisit, Sex, WizardSnapshot, WizardState,
};

fn populated_state() -> WizardState {
    let mut state = WizardState::new(Category::WeightLoss);
    state.major_step = MajorStep::Intake;
    state.intake_index = 3;
    state.goals = vec!["lose-weight".to_string(), "more-energy".to_string()];
    state.answers.set("height", "5'10\"");
    state.answers.set("weight", "185");
    state
        .answers
        .set("conditions", vec!["Hypertension".to_string()]);
    state.answers.set_file_ref("current_medications", "s3://bucket/uploads/rx.pdf");
    state.eligibility = Eligibility {
        sex: Some(Sex::Female),
        date_of_birth: Some(jiff::civil::date(1990, 4, 12)),
        state_code: "CA".to_string(),
        phone: "(555) 010-2233".to_string(),
        pcp_visit: Some(PcpVisit::Yes),
        consent: true,
        lab_results: vec!["s3://bucket/uploads/labs.pdf".to_string()],
    };
    state.shipping.address = "1 Main St".to_string();
    state.shipping.city = "Oakland".to_string();
    state.shipping.state = "CA".to_string();
    state.shipping.zip = "94601".to_string();
    state.shipping.phone = "(555) 010-2233".to_string();
    state
}

#[test]
fn snapshot_round_trip_reproduces_state() {
    let state = populated_state();
    let snapshot = state.to_snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: WizardSnapshot = serde_json::from_str(&json).unwrap();
    let rehydrated = WizardState::from_snapshot(Category::WeightLoss, restored);

    assert_eq!(rehydrated, state);
}

#[test]
fn snapshot_body_never_contains_payment_fields() {
    let snapshot = populated_state().to_snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(!json.contains("payment"));
    assert!(!json.contains("card"));
}

#[test]
fn snapshot_tolerates_missing_optional_sections() {
    // Older snapshots may predate some sub-forms.
    let json = r#"{"major_step":"eligibility"}"#;
    let snapshot: WizardSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot.major_step, MajorStep::Eligibility);
    assert!(snapshot.goals.is_empty());
    assert!(snapshot.intake_answers.is_empty());
    assert_eq!(snapshot.minor_intake_index, 0);
}

#[test]
fn major_step_ordering_is_total() {
    let steps = MajorStep::ALL;
    for pair in steps.windows(2) {
        assert!(pair[0] < pair[1]);
        assert_eq!(pair[0].next(), Some(pair[1]));
        assert_eq!(pair[1].prev(), Some(pair[0]));
    }
    assert_eq!(MajorStep::Success.next(), None);
    assert_eq!(MajorStep::GoalSelection.prev(), None);
}

#[test]
fn progress_persists_only_between_first_and_last_steps() {
    assert!(!MajorStep::GoalSelection.persists_progress());
    assert!(!MajorStep::Success.persists_progress());
    for step in MajorStep::ALL {
        if step != MajorStep::GoalSelection && step != MajorStep::Success {
            assert!(step.persists_progress(), "{step:?} should persist");
        }
    }
}
