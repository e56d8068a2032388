//! Per-step validation gating.
//!
//! Pure predicates over the current wizard state: a failing check never
//! mutates anything, and every failure carries a per-field reason so the
//! UI can render targeted messages.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use veridia_core::models::{AnswerKind, MajorStep, QuestionDescriptor, WizardState};
use veridia_core::models::eligibility::PcpVisit;
use veridia_questions::availability::state_supported;
use veridia_questions::{MEDICATIONS_QUESTION_ID, is_glp1_option};

use crate::slots::SlotTracker;

/// One reason the current step cannot advance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &str, message: impl Into<String>) -> Self {
        FieldIssue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// All reasons the current step cannot advance; empty means advance is
/// legal.
pub fn check_advance(
    state: &WizardState,
    questions: &[QuestionDescriptor],
    slots: &SlotTracker,
) -> Vec<FieldIssue> {
    match state.major_step {
        MajorStep::GoalSelection => goal_issues(state),
        MajorStep::Eligibility => eligibility_issues(state),
        MajorStep::StateAvailability => availability_issues(state),
        MajorStep::Intake => intake_issues(state, questions, slots),
        MajorStep::Identification => identification_issues(state),
        MajorStep::Shipping => shipping_issues(state),
        _ => Vec::new(),
    }
}

pub fn can_advance(
    state: &WizardState,
    questions: &[QuestionDescriptor],
    slots: &SlotTracker,
) -> bool {
    check_advance(state, questions, slots).is_empty()
}

fn goal_issues(state: &WizardState) -> Vec<FieldIssue> {
    if state.goals.is_empty() {
        vec![FieldIssue::new("goals", "Select at least one goal")]
    } else {
        Vec::new()
    }
}

fn eligibility_issues(state: &WizardState) -> Vec<FieldIssue> {
    let e = &state.eligibility;
    let mut issues = Vec::new();

    if e.sex.is_none() {
        issues.push(FieldIssue::new("sex", "Sex is required"));
    }
    if e.date_of_birth.is_none() {
        issues.push(FieldIssue::new("date_of_birth", "Date of birth is required"));
    }
    if e.state_code.trim().is_empty() {
        issues.push(FieldIssue::new("state_code", "State is required"));
    }
    if e.phone.trim().is_empty() {
        issues.push(FieldIssue::new("phone", "Phone number is required"));
    }
    match e.pcp_visit {
        None => issues.push(FieldIssue::new(
            "pcp_visit",
            "Tell us whether you have seen a primary care provider in the last 12 months",
        )),
        // "Yes" mandates lab results; "No" is advisory only.
        Some(PcpVisit::Yes) if e.lab_results.is_empty() => issues.push(FieldIssue::new(
            "lab_results",
            "Upload at least one recent lab result",
        )),
        Some(_) => {}
    }
    if !e.consent {
        issues.push(FieldIssue::new("consent", "Consent is required to continue"));
    }

    issues
}

fn availability_issues(state: &WizardState) -> Vec<FieldIssue> {
    if state_supported(&state.eligibility.state_code) {
        Vec::new()
    } else {
        vec![FieldIssue::new(
            "state_code",
            "Veridia is not yet available in your state",
        )]
    }
}

fn intake_issues(
    state: &WizardState,
    questions: &[QuestionDescriptor],
    slots: &SlotTracker,
) -> Vec<FieldIssue> {
    // Out of range signals the question list is complete.
    let Some(question) = questions.get(state.intake_index) else {
        return Vec::new();
    };

    // An answer change elsewhere can hide the question under the cursor;
    // a hidden question never gates, the sequencer skips past it.
    if !question.is_visible(&state.answers) {
        return Vec::new();
    }

    let mut issues = Vec::new();

    if slots.is_busy(&question.id) {
        issues.push(FieldIssue::new(
            &question.id,
            "Wait for the upload to finish",
        ));
    }

    let answered = state.answers.has_answer(&question.id);
    match question.kind {
        AnswerKind::Informational => {}
        AnswerKind::FreeText => {
            if !answered && !question.optional {
                issues.push(FieldIssue::new(&question.id, "An answer is required"));
            }
        }
        AnswerKind::File => {
            if state.answers.file_ref(&question.id).is_none() {
                issues.push(FieldIssue::new(&question.id, "An upload is required"));
            }
        }
        AnswerKind::SingleChoice | AnswerKind::MultiChoice => {
            if !answered {
                issues.push(FieldIssue::new(&question.id, "An answer is required"));
            }
        }
    }

    if question.requires_upload
        && question.kind != AnswerKind::File
        && state.answers.file_ref(&question.id).is_none()
    {
        issues.push(FieldIssue::new(&question.id, "An upload is required"));
    }

    // Details accompany affirmative answers only; "No"/"None of the
    // above" needs no elaboration.
    if question.requires_detail_text
        && affirmative(&state.answers.as_list(&question.id))
        && state.answers.details(&question.id).is_none()
    {
        issues.push(FieldIssue::new(&question.id, "Please add details"));
    }

    // A GLP-1 selection on the medications question mandates a
    // prescription photo regardless of the generic rules.
    if question.id == MEDICATIONS_QUESTION_ID
        && state
            .answers
            .as_list(MEDICATIONS_QUESTION_ID)
            .iter()
            .any(|o| is_glp1_option(o))
        && state.answers.file_ref(MEDICATIONS_QUESTION_ID).is_none()
    {
        issues.push(FieldIssue::new(
            MEDICATIONS_QUESTION_ID,
            "Upload a photo of your current GLP-1 prescription",
        ));
    }

    issues
}

fn affirmative(values: &[String]) -> bool {
    values
        .iter()
        .any(|v| v != "No" && v != "None of the above")
}

fn identification_issues(state: &WizardState) -> Vec<FieldIssue> {
    let id = &state.identity;
    let mut issues = Vec::new();
    if id.id_type.trim().is_empty() {
        issues.push(FieldIssue::new("id_type", "ID type is required"));
    }
    if id.id_number.trim().is_empty() {
        issues.push(FieldIssue::new("id_number", "ID number is required"));
    }
    if id.id_file.is_none() {
        issues.push(FieldIssue::new("id_file", "Upload a photo of your ID"));
    }
    issues
}

fn shipping_issues(state: &WizardState) -> Vec<FieldIssue> {
    let s = &state.shipping;
    let mut issues = Vec::new();
    for (field, value) in [
        ("address", &s.address),
        ("city", &s.city),
        ("state", &s.state),
        ("zip", &s.zip),
        ("phone", &s.phone),
    ] {
        if value.trim().is_empty() {
            issues.push(FieldIssue::new(field, "This field is required"));
        }
    }
    issues
}
