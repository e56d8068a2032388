use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sex assigned at birth, as collected on the eligibility step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

/// Answer to "have you seen a primary care provider in the last 12 months?".
/// "Yes" mandates at least one uploaded lab-result reference; "No" is
/// advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PcpVisit {
    Yes,
    No,
}

/// The eligibility sub-form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Eligibility {
    pub sex: Option<Sex>,
    pub date_of_birth: Option<jiff::civil::Date>,
    /// Two-letter state code, e.g. "CA".
    pub state_code: String,
    /// Any non-empty formatted value is accepted.
    pub phone: String,
    pub pcp_visit: Option<PcpVisit>,
    pub consent: bool,
    /// Uploaded lab-result references; may hold several files.
    #[serde(default)]
    pub lab_results: Vec<String>,
}
