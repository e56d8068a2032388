use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::AnswerSet;
use super::category::Category;
use super::eligibility::Eligibility;
use super::identity::{Identity, Shipping};
use super::step::MajorStep;

/// The full in-memory state of one wizard session. Owned exclusively by the
/// active session; every transition produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WizardState {
    pub category: Category,
    pub major_step: MajorStep,
    /// Index into the category's intake question list. Meaningful only
    /// while `major_step` is Intake; an out-of-range value signals the
    /// question list is complete.
    pub intake_index: usize,
    pub goals: Vec<String>,
    pub answers: AnswerSet,
    pub eligibility: Eligibility,
    pub identity: Identity,
    pub shipping: Shipping,
}

impl WizardState {
    pub fn new(category: Category) -> Self {
        WizardState {
            category,
            major_step: MajorStep::GoalSelection,
            intake_index: 0,
            goals: Vec::new(),
            answers: AnswerSet::new(),
            eligibility: Eligibility::default(),
            identity: Identity::default(),
            shipping: Shipping::default(),
        }
    }

    pub fn to_snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            major_step: self.major_step,
            goals: self.goals.clone(),
            minor_intake_index: self.intake_index,
            intake_answers: self.answers.clone(),
            eligibility: self.eligibility.clone(),
            identity: self.identity.clone(),
            shipping: self.shipping.clone(),
        }
    }

    /// Rehydrate a session from a persisted snapshot. The category comes
    /// from the storage slot, not the snapshot body.
    pub fn from_snapshot(category: Category, snapshot: WizardSnapshot) -> Self {
        WizardState {
            category,
            major_step: snapshot.major_step,
            intake_index: snapshot.minor_intake_index,
            goals: snapshot.goals,
            answers: snapshot.intake_answers,
            eligibility: snapshot.eligibility,
            identity: snapshot.identity,
            shipping: snapshot.shipping,
        }
    }
}

/// The durable per-category progress snapshot. Payment data is deliberately
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WizardSnapshot {
    pub major_step: MajorStep,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub minor_intake_index: usize,
    #[serde(default)]
    pub intake_answers: AnswerSet,
    #[serde(default)]
    pub eligibility: Eligibility,
    #[serde(default)]
    pub identity: Identity,
    #[serde(default)]
    pub shipping: Shipping,
}
