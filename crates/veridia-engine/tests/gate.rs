use veridia_core::models::eligibility::{PcpVisit, Sex};
use veridia_core::models::{Category, Eligibility, MajorStep, WizardState};
use veridia_engine::gate::{can_advance, check_advance};
use veridia_engine::slots::SlotTracker;
use veridia_questions::{MEDICATIONS_QUESTION_ID, questions_for};

fn complete_eligibility() -> Eligibility {
    Eligibility {
        sex: Some(Sex::Male),
        date_of_birth: Some(jiff::civil::date(1985, 6, 1)),
        state_code: "CA".to_string(),
        phone: "(555) 010-2233".to_string(),
        pcp_visit: Some(PcpVisit::No),
        consent: true,
        lab_results: Vec::new(),
    }
}

fn state_at(step: MajorStep) -> WizardState {
    let mut state = WizardState::new(Category::WeightLoss);
    state.major_step = step;
    state
}

#[test]
fn goal_selection_requires_at_least_one_goal() {
    let questions = questions_for(Category::WeightLoss);
    let slots = SlotTracker::new();
    let mut state = state_at(MajorStep::GoalSelection);

    assert!(!can_advance(&state, &questions, &slots));
    state.goals.push("lose-weight".to_string());
    assert!(can_advance(&state, &questions, &slots));
}

#[test]
fn eligibility_blocks_iff_a_required_field_is_missing_or_labs_are_due() {
    let questions = questions_for(Category::WeightLoss);
    let slots = SlotTracker::new();
    let mut state = state_at(MajorStep::Eligibility);
    state.eligibility = complete_eligibility();
    assert!(can_advance(&state, &questions, &slots));

    // Each required field, emptied on its own, blocks the step.
    let break_one: Vec<(&str, fn(&mut Eligibility))> = vec![
        ("sex", |e| e.sex = None),
        ("date_of_birth", |e| e.date_of_birth = None),
        ("state_code", |e| e.state_code.clear()),
        ("phone", |e| e.phone = "  ".to_string()),
        ("pcp_visit", |e| e.pcp_visit = None),
        ("consent", |e| e.consent = false),
    ];
    for (field, break_it) in break_one {
        let mut state = state_at(MajorStep::Eligibility);
        state.eligibility = complete_eligibility();
        break_it(&mut state.eligibility);

        let issues = check_advance(&state, &questions, &slots);
        assert_eq!(issues.len(), 1, "expected exactly one issue for {field}");
        assert_eq!(issues[0].field, field);
    }
}

#[test]
fn pcp_visit_yes_mandates_lab_results_and_no_does_not() {
    let questions = questions_for(Category::WeightLoss);
    let slots = SlotTracker::new();
    let mut state = state_at(MajorStep::Eligibility);
    state.eligibility = complete_eligibility();

    state.eligibility.pcp_visit = Some(PcpVisit::Yes);
    let issues = check_advance(&state, &questions, &slots);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "lab_results");

    state
        .eligibility
        .lab_results
        .push("https://files.example/labs.pdf".to_string());
    assert!(can_advance(&state, &questions, &slots));

    state.eligibility.pcp_visit = Some(PcpVisit::No);
    state.eligibility.lab_results.clear();
    assert!(can_advance(&state, &questions, &slots));
}

#[test]
fn availability_step_blocks_unsupported_states() {
    let questions = questions_for(Category::WeightLoss);
    let slots = SlotTracker::new();
    let mut state = state_at(MajorStep::StateAvailability);
    state.eligibility = complete_eligibility();
    assert!(can_advance(&state, &questions, &slots));

    state.eligibility.state_code = "WY".to_string();
    assert!(!can_advance(&state, &questions, &slots));
}

#[test]
fn informational_questions_never_gate() {
    let questions = questions_for(Category::WeightLoss);
    let slots = SlotTracker::new();
    let mut state = state_at(MajorStep::Intake);
    // Index 0 is the doctor-review intro.
    state.intake_index = 0;
    assert!(can_advance(&state, &questions, &slots));
}

#[test]
fn choice_questions_require_an_answer() {
    let questions = questions_for(Category::WeightLoss);
    let slots = SlotTracker::new();
    let mut state = state_at(MajorStep::Intake);
    state.intake_index = questions
        .iter()
        .position(|q| q.id == "weight_loss_history")
        .unwrap();

    assert!(!can_advance(&state, &questions, &slots));
    state.answers.set("weight_loss_history", "Yes");
    assert!(can_advance(&state, &questions, &slots));
}

#[test]
fn optional_free_text_may_stay_empty() {
    let questions = questions_for(Category::WeightLoss);
    let slots = SlotTracker::new();
    let mut state = state_at(MajorStep::Intake);
    state.intake_index = questions
        .iter()
        .position(|q| q.id == "anything_else")
        .unwrap();

    assert!(can_advance(&state, &questions, &slots));
}

#[test]
fn a_question_hidden_by_its_dependency_never_gates() {
    let questions = questions_for(Category::WeightLoss);
    let slots = SlotTracker::new();
    let mut state = state_at(MajorStep::Intake);
    state.intake_index = questions
        .iter()
        .position(|q| q.id == "thyroid_details")
        .unwrap();

    // The dependency says "No", so the cursor sits on a hidden question:
    // its unanswered required text must not block the step.
    state.answers.set("thyroid_condition", "No");
    assert!(can_advance(&state, &questions, &slots));

    state.answers.set("thyroid_condition", "Yes");
    assert!(!can_advance(&state, &questions, &slots));
}

#[test]
fn glp1_selection_blocks_until_a_file_is_attached() {
    let questions = questions_for(Category::WeightLoss);
    let slots = SlotTracker::new();
    let mut state = state_at(MajorStep::Intake);
    state.intake_index = questions
        .iter()
        .position(|q| q.id == MEDICATIONS_QUESTION_ID)
        .unwrap();

    state.answers.set(
        MEDICATIONS_QUESTION_ID,
        vec!["Semaglutide (Ozempic, Wegovy)".to_string()],
    );
    let issues = check_advance(&state, &questions, &slots);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, MEDICATIONS_QUESTION_ID);

    // Attaching any file reference unblocks it.
    state
        .answers
        .set_file_ref(MEDICATIONS_QUESTION_ID, "https://files.example/rx.jpg");
    assert!(can_advance(&state, &questions, &slots));
}

#[test]
fn non_glp1_medications_need_no_file() {
    let questions = questions_for(Category::WeightLoss);
    let slots = SlotTracker::new();
    let mut state = state_at(MajorStep::Intake);
    state.intake_index = questions
        .iter()
        .position(|q| q.id == MEDICATIONS_QUESTION_ID)
        .unwrap();

    state
        .answers
        .set(MEDICATIONS_QUESTION_ID, vec!["Metformin".to_string()]);
    assert!(can_advance(&state, &questions, &slots));
}

#[test]
fn detail_text_is_required_only_for_affirmative_answers() {
    let questions = questions_for(Category::SexualHealth);
    let slots = SlotTracker::new();
    let mut state = state_at(MajorStep::Intake);
    state.category = Category::SexualHealth;
    state.intake_index = questions
        .iter()
        .position(|q| q.id == "nitrate_use")
        .unwrap();

    // nitrate_use is only visible when a heart condition is reported.
    state
        .answers
        .set("heart_conditions", vec!["Angina".to_string()]);

    state.answers.set("nitrate_use", "No");
    assert!(can_advance(&state, &questions, &slots));

    state.answers.set("nitrate_use", "Yes");
    let issues = check_advance(&state, &questions, &slots);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "Please add details");

    state
        .answers
        .set_details("nitrate_use", "Nitroglycerin as needed");
    assert!(can_advance(&state, &questions, &slots));
}

#[test]
fn a_busy_upload_slot_blocks_its_question() {
    let questions = questions_for(Category::WeightLoss);
    let mut slots = SlotTracker::new();
    let mut state = state_at(MajorStep::Intake);
    state.intake_index = questions
        .iter()
        .position(|q| q.id == MEDICATIONS_QUESTION_ID)
        .unwrap();
    state
        .answers
        .set(MEDICATIONS_QUESTION_ID, vec!["Metformin".to_string()]);

    let ticket = slots.begin(MEDICATIONS_QUESTION_ID).unwrap();
    assert!(!can_advance(&state, &questions, &slots));

    slots.settle(&ticket);
    assert!(can_advance(&state, &questions, &slots));
}

#[test]
fn identification_requires_type_number_and_file() {
    let questions = questions_for(Category::WeightLoss);
    let slots = SlotTracker::new();
    let mut state = state_at(MajorStep::Identification);

    let issues = check_advance(&state, &questions, &slots);
    let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
    assert_eq!(fields, ["id_type", "id_number", "id_file"]);

    state.identity.id_type = "Driver's license".to_string();
    state.identity.id_number = "D1234567".to_string();
    state.identity.id_file = Some("https://files.example/id.jpg".to_string());
    assert!(can_advance(&state, &questions, &slots));
}

#[test]
fn shipping_requires_every_field() {
    let questions = questions_for(Category::WeightLoss);
    let slots = SlotTracker::new();
    let mut state = state_at(MajorStep::Shipping);

    assert_eq!(check_advance(&state, &questions, &slots).len(), 5);

    state.shipping.address = "1 Main St".to_string();
    state.shipping.city = "Oakland".to_string();
    state.shipping.state = "CA".to_string();
    state.shipping.zip = "94601".to_string();
    state.shipping.phone = "(555) 010-2233".to_string();
    assert!(can_advance(&state, &questions, &slots));
}

#[test]
fn ungated_steps_always_advance() {
    let questions = questions_for(Category::WeightLoss);
    let slots = SlotTracker::new();
    for step in [
        MajorStep::Stat,
        MajorStep::SocialProof,
        MajorStep::Auth,
        MajorStep::Biometrics,
        MajorStep::DoctorIntro,
        MajorStep::Review,
    ] {
        assert!(can_advance(&state_at(step), &questions, &slots));
    }
}
