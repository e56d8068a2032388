//! The top-level wizard state machine.
//!
//! Holds the current major step and, inside the intake step, the minor
//! question index. Transition methods validate through the gate, sequence
//! through the conditional sequencer, and return [`Effect`] values for the
//! caller to apply (snapshot writes, snapshot clears, the final
//! submission). The controller itself never performs IO.

use jiff::Timestamp;
use uuid::Uuid;
use veridia_core::error::CoreError;
use veridia_core::models::{
    AnswerValue, Category, Eligibility, Identity, MajorStep, PaymentMeta, QuestionDescriptor,
    Shipping, SubmissionRecord, UserIdentity, WizardSnapshot, WizardState,
};
use veridia_core::storage_keys;

use crate::error::EngineError;
use crate::gate::{self, FieldIssue};
use crate::mapper;
use crate::pricing::{Discount, discounted_amount};
use crate::sequencer;
use crate::slots::{
    COUPON_VALIDATION_SLOT, IDENTIFICATION_SLOT, LAB_RESULTS_SLOT, Settle, SlotTicket,
    SlotTracker,
};

/// Side effects requested by a transition, applied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write the progress snapshot to the category's slot.
    Persist(WizardSnapshot),
    /// Delete the category's progress snapshot.
    ClearSnapshot(Category),
    /// Hand the normalized record to the submission storage collaborator.
    Submit(Box<SubmissionRecord>),
}

/// One wizard session. Owns its state exclusively; every transition
/// produces a new state value internally and reports effects outward.
pub struct Wizard {
    state: WizardState,
    questions: Vec<QuestionDescriptor>,
    slots: SlotTracker,
    authenticated: bool,
    submitting: bool,
}

impl Wizard {
    pub fn new(category: Category, authenticated: bool) -> Self {
        Wizard {
            state: WizardState::new(category),
            questions: veridia_questions::questions_for(category),
            slots: SlotTracker::new(),
            authenticated,
            submitting: false,
        }
    }

    /// Open a session from a category slug, the form it arrives in on a
    /// wizard URL.
    pub fn from_slug(slug: &str, authenticated: bool) -> Result<Self, CoreError> {
        Ok(Wizard::new(Category::from_slug(slug)?, authenticated))
    }

    /// Rehydrate from a persisted snapshot. If an answer change elsewhere
    /// left the saved intake index pointing at an invisible question, the
    /// index is re-seated on the next visible one.
    pub fn resume(category: Category, snapshot: WizardSnapshot, authenticated: bool) -> Self {
        let mut wizard = Wizard {
            state: WizardState::from_snapshot(category, snapshot),
            questions: veridia_questions::questions_for(category),
            slots: SlotTracker::new(),
            authenticated,
            submitting: false,
        };
        if wizard.state.major_step == MajorStep::Intake {
            let idx = wizard.state.intake_index;
            let visible = wizard
                .questions
                .get(idx)
                .is_some_and(|q| q.is_visible(&wizard.state.answers));
            if idx < wizard.questions.len() && !visible {
                wizard.state.intake_index =
                    sequencer::next_visible(&wizard.questions, idx, &wizard.state.answers)
                        .unwrap_or(wizard.questions.len());
            }
        }
        wizard
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> MajorStep {
        self.state.major_step
    }

    /// The active intake question, when the intake step is showing one.
    pub fn current_question(&self) -> Option<&QuestionDescriptor> {
        if self.state.major_step != MajorStep::Intake {
            return None;
        }
        self.questions.get(self.state.intake_index)
    }

    pub fn issues(&self) -> Vec<FieldIssue> {
        gate::check_advance(&self.state, &self.questions, &self.slots)
    }

    pub fn is_uploading(&self, slot: &str) -> bool {
        self.slots.is_busy(slot)
    }

    pub fn is_validating_coupon(&self) -> bool {
        self.slots.is_busy(COUPON_VALIDATION_SLOT)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    // ---- answer & sub-form mutation ------------------------------------

    pub fn toggle_goal(&mut self, goal: &str) -> Vec<Effect> {
        if let Some(pos) = self.state.goals.iter().position(|g| g == goal) {
            self.state.goals.remove(pos);
        } else {
            self.state.goals.push(goal.to_string());
        }
        self.persist_effects()
    }

    pub fn set_answer(&mut self, question_id: &str, value: impl Into<AnswerValue>) -> Vec<Effect> {
        self.state.answers.set(question_id, value);
        self.persist_effects()
    }

    pub fn set_answer_details(&mut self, question_id: &str, details: &str) -> Vec<Effect> {
        self.state.answers.set_details(question_id, details);
        self.persist_effects()
    }

    pub fn set_eligibility(&mut self, eligibility: Eligibility) -> Vec<Effect> {
        self.state.eligibility = eligibility;
        self.persist_effects()
    }

    pub fn set_identity(&mut self, identity: Identity) -> Vec<Effect> {
        self.state.identity = identity;
        self.persist_effects()
    }

    pub fn set_shipping(&mut self, shipping: Shipping) -> Vec<Effect> {
        self.state.shipping = shipping;
        self.persist_effects()
    }

    // ---- navigation ----------------------------------------------------

    /// Advance to the next step or question. Blocked by the validation
    /// gate; a blocked advance mutates nothing.
    pub fn advance(&mut self) -> Result<Vec<Effect>, EngineError> {
        match self.state.major_step {
            MajorStep::Payment | MajorStep::Success => {
                return Err(EngineError::InvalidTransition {
                    action: "advance",
                    step: self.state.major_step,
                });
            }
            _ => {}
        }

        let issues = self.issues();
        if !issues.is_empty() {
            return Err(EngineError::AdvanceBlocked { issues });
        }

        if self.state.major_step == MajorStep::Intake {
            match sequencer::next_visible(
                &self.questions,
                self.state.intake_index,
                &self.state.answers,
            ) {
                Some(next) => self.state.intake_index = next,
                None => {
                    self.state.intake_index = self.questions.len();
                    self.state.major_step = MajorStep::Review;
                }
            }
            return Ok(self.persist_effects());
        }

        let next = self.next_major_step();
        if next == MajorStep::Intake {
            self.state.intake_index =
                sequencer::first_visible(&self.questions, &self.state.answers)
                    .unwrap_or(self.questions.len());
        }
        self.state.major_step = next;
        Ok(self.persist_effects())
    }

    /// Step backward. Never gated; a no-op on the first and terminal
    /// steps. In-flight network calls are not cancelled — their results
    /// settle against the slot tracker and are discarded if stale.
    pub fn back(&mut self) -> Vec<Effect> {
        match self.state.major_step {
            MajorStep::GoalSelection | MajorStep::Success => return Vec::new(),
            MajorStep::Intake => {
                if let Some(prev) = sequencer::prev_visible(
                    &self.questions,
                    self.state.intake_index,
                    &self.state.answers,
                ) {
                    self.state.intake_index = prev;
                } else {
                    self.state.major_step = MajorStep::DoctorIntro;
                }
            }
            MajorStep::Review => {
                // Re-enter intake on its last visible question, or skip
                // past it entirely when nothing is visible.
                match sequencer::prev_visible(
                    &self.questions,
                    self.questions.len(),
                    &self.state.answers,
                ) {
                    Some(last) => {
                        self.state.intake_index = last;
                        self.state.major_step = MajorStep::Intake;
                    }
                    None => self.state.major_step = MajorStep::DoctorIntro,
                }
            }
            _ => {
                let mut prev = self.state.major_step.prev();
                if prev == Some(MajorStep::Auth) && self.authenticated {
                    prev = MajorStep::Auth.prev();
                }
                if let Some(prev) = prev {
                    self.state.major_step = prev;
                }
            }
        }
        self.persist_effects()
    }

    /// User-initiated abandon: clear the persisted snapshot and fully
    /// reset the session, invalidating any in-flight uploads.
    pub fn abandon(&mut self) -> Vec<Effect> {
        let category = self.state.category;
        self.slots.reset();
        self.submitting = false;
        self.state = WizardState::new(category);
        vec![Effect::ClearSnapshot(category)]
    }

    // ---- uploads -------------------------------------------------------

    /// Reserve an upload slot before dispatching to the file store.
    pub fn begin_upload(&mut self, slot: &str) -> Result<SlotTicket, EngineError> {
        self.slots.begin(slot)
    }

    /// The bucket folder an upload for this slot should land in.
    pub fn upload_destination(&self, slot: &str) -> String {
        match slot {
            LAB_RESULTS_SLOT => storage_keys::lab_results_folder(self.state.category),
            IDENTIFICATION_SLOT => storage_keys::identification_folder(self.state.category),
            question_id => storage_keys::upload_folder(self.state.category, question_id),
        }
    }

    /// Relay a successful upload back into the answer set. Stale results
    /// (ticket issued before an abandon/reset) are discarded without
    /// mutation.
    pub fn attach_upload(&mut self, ticket: &SlotTicket, reference: &str) -> Vec<Effect> {
        if self.slots.settle(ticket) == Settle::Stale {
            return Vec::new();
        }
        match ticket.slot() {
            LAB_RESULTS_SLOT => self
                .state
                .eligibility
                .lab_results
                .push(reference.to_string()),
            IDENTIFICATION_SLOT => self.state.identity.id_file = Some(reference.to_string()),
            question_id => self.state.answers.set_file_ref(question_id, reference),
        }
        self.persist_effects()
    }

    /// Relay a failed upload: the slot returns to idle and nothing else
    /// changes. Upload failures never advance or reset wizard state.
    pub fn fail_upload(&mut self, ticket: &SlotTicket) {
        if self.slots.settle(ticket) == Settle::Live {
            tracing::warn!(slot = %ticket.slot(), "upload failed, slot returned to idle");
        }
    }

    // ---- coupon validation ---------------------------------------------

    /// Reserve the coupon-validation slot before dispatching the code to
    /// the coupon service. Rejected while a validation is already running.
    pub fn begin_coupon_validation(&mut self) -> Result<SlotTicket, EngineError> {
        self.slots.begin(COUPON_VALIDATION_SLOT)
    }

    /// Settle a coupon-service response. Returns [`Settle::Stale`] when the
    /// session was reset after dispatch; the caller discards the discount.
    pub fn finish_coupon_validation(&mut self, ticket: &SlotTicket) -> Settle {
        self.slots.settle(ticket)
    }

    // ---- submission ----------------------------------------------------

    /// Build the normalized record and request its insertion. Rejected
    /// while a submission is already in flight, so the final record can
    /// never be inserted twice concurrently.
    pub fn begin_submission(
        &mut self,
        user: &UserIdentity,
        base_price_cents: i64,
        coupon: Option<(String, Discount)>,
        payment_method_id: Option<String>,
        now: Timestamp,
    ) -> Result<Vec<Effect>, EngineError> {
        if self.state.major_step != MajorStep::Payment {
            return Err(EngineError::InvalidTransition {
                action: "submit",
                step: self.state.major_step,
            });
        }
        if self.submitting {
            return Err(EngineError::SubmissionInFlight);
        }

        let (coupon_code, discount) = match coupon {
            Some((code, discount)) => (Some(code), Some(discount)),
            None => (None, None),
        };
        let payment = PaymentMeta {
            amount_cents: discounted_amount(base_price_cents, discount.as_ref()),
            coupon: coupon_code,
            payment_method_id,
        };

        let record = mapper::build_record(
            Uuid::new_v4(),
            self.state.category,
            &self.state.goals,
            &self.state.answers,
            &self.state.eligibility,
            &self.state.identity,
            &self.state.shipping,
            &payment,
            user,
            now,
        );

        self.submitting = true;
        Ok(vec![Effect::Submit(Box::new(record))])
    }

    /// The storage collaborator accepted the record: move to the terminal
    /// step and drop the progress snapshot.
    pub fn confirm_submitted(&mut self) -> Vec<Effect> {
        self.submitting = false;
        self.state.major_step = MajorStep::Success;
        vec![Effect::ClearSnapshot(self.state.category)]
    }

    /// The insert failed: stay on the payment step with state intact so
    /// the user can retry without re-entering anything.
    pub fn submission_failed(&mut self) {
        self.submitting = false;
        tracing::warn!(
            category = self.state.category.slug(),
            "submission failed, state kept for retry"
        );
    }

    // ---- internals -----------------------------------------------------

    fn next_major_step(&self) -> MajorStep {
        let mut next = self.state.major_step.next();
        if next == Some(MajorStep::Auth) && self.authenticated {
            next = MajorStep::Auth.next();
        }
        // Payment/Success bounds are rejected before this is reached.
        next.unwrap_or(MajorStep::Success)
    }

    fn persist_effects(&self) -> Vec<Effect> {
        if self.state.major_step.persists_progress() {
            vec![Effect::Persist(self.state.to_snapshot())]
        } else {
            Vec::new()
        }
    }
}
