use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::AnswerSet;
use super::category::Category;
use super::eligibility::Sex;
use super::identity::{PaymentMeta, Shipping};

/// The normalized clinical submission handed to the storage collaborator at
/// the end of the flow. The explicit fields are a view over the intake; the
/// `raw_answers` catch-all carries the entire answer set verbatim so
/// answers without a dedicated column are never dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionRecord {
    pub id: Uuid,

    // Patient
    pub user_id: String,
    pub user_email: String,
    pub user_name: String,
    pub category: Category,
    pub goals: Vec<String>,

    // Biometrics
    pub height_feet: u32,
    pub height_inches: u32,
    pub weight_lbs: f64,
    /// One-decimal BMI; exactly zero when height is unresolved.
    pub bmi: f64,

    // Eligibility
    pub sex: Option<Sex>,
    pub date_of_birth: Option<jiff::civil::Date>,
    pub state_code: String,
    pub phone: String,
    pub pcp_visit_recent: bool,
    pub lab_results: Vec<String>,

    // Clinical history, normalized to lists
    pub conditions: Vec<String>,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,

    // Identification
    pub id_type: String,
    pub id_number: String,
    pub id_file: Option<String>,

    pub shipping: Shipping,
    pub payment: PaymentMeta,

    /// The full raw intake answer set, verbatim.
    pub raw_answers: AnswerSet,

    pub submitted_at: jiff::Timestamp,
}
