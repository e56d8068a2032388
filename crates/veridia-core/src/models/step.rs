use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The fixed top-level wizard stages, in visit order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MajorStep {
    GoalSelection,
    Stat,
    SocialProof,
    Auth,
    Biometrics,
    Eligibility,
    StateAvailability,
    DoctorIntro,
    Intake,
    Review,
    Identification,
    Shipping,
    Payment,
    Success,
}

impl MajorStep {
    pub const ALL: [MajorStep; 14] = [
        MajorStep::GoalSelection,
        MajorStep::Stat,
        MajorStep::SocialProof,
        MajorStep::Auth,
        MajorStep::Biometrics,
        MajorStep::Eligibility,
        MajorStep::StateAvailability,
        MajorStep::DoctorIntro,
        MajorStep::Intake,
        MajorStep::Review,
        MajorStep::Identification,
        MajorStep::Shipping,
        MajorStep::Payment,
        MajorStep::Success,
    ];

    /// The step after this one, or `None` past Success.
    pub fn next(self) -> Option<MajorStep> {
        let pos = Self::ALL.iter().position(|s| *s == self)?;
        Self::ALL.get(pos + 1).copied()
    }

    /// The step before this one, or `None` before GoalSelection.
    pub fn prev(self) -> Option<MajorStep> {
        let pos = Self::ALL.iter().position(|s| *s == self)?;
        pos.checked_sub(1).and_then(|p| Self::ALL.get(p).copied())
    }

    pub fn is_first(self) -> bool {
        self == MajorStep::GoalSelection
    }

    pub fn is_terminal(self) -> bool {
        self == MajorStep::Success
    }

    /// Progress snapshots are written only while strictly between the entry
    /// step (before any goal is chosen) and the terminal step.
    pub fn persists_progress(self) -> bool {
        !self.is_first() && !self.is_terminal()
    }
}
