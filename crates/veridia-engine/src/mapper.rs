//! Submission normalization.
//!
//! A deterministic, pure transformation from the accumulated free-form
//! answer set into the clinical submission record. The explicit fields are
//! a view: the entire raw answer set travels verbatim in the record's
//! catch-all so nothing is silently dropped.

use jiff::Timestamp;
use uuid::Uuid;
use veridia_core::models::eligibility::PcpVisit;
use veridia_core::models::{
    AnswerSet, Category, Eligibility, Identity, PaymentMeta, Shipping, SubmissionRecord,
    UserIdentity,
};

/// Answer key holding the height token collected on the biometrics step.
pub const HEIGHT_KEY: &str = "height";

/// Answer key holding the weight in pounds.
pub const WEIGHT_KEY: &str = "weight";

/// Parse a `feet'inches"` height token (`5'10"`). Falls back to reading
/// the raw string as total inches; on total failure both parts are zero.
pub fn parse_height(raw: &str) -> (u32, u32) {
    let cleaned = raw.trim().trim_end_matches('"');
    if let Some((feet_part, inch_part)) = cleaned.split_once('\'') {
        let feet = feet_part.trim().parse::<u32>();
        let inches = inch_part.trim().parse::<u32>();
        if let (Ok(feet), Ok(inches)) = (feet, inches) {
            return (feet, inches);
        }
    }
    if let Ok(total) = cleaned.trim().parse::<u32>() {
        return (total / 12, total % 12);
    }
    (0, 0)
}

/// BMI to one decimal: `weight / inches² × 703`. Exactly zero when height
/// is unresolved; never divides by zero.
pub fn body_mass_index(weight_lbs: f64, feet: u32, inches: u32) -> f64 {
    // Widen before combining: the parser accepts any u32, and a garbage
    // height like `400000000'0"` must not overflow the integer math.
    let total_inches = f64::from(feet) * 12.0 + f64::from(inches);
    if total_inches == 0.0 || weight_lbs <= 0.0 {
        return 0.0;
    }
    let bmi = weight_lbs / (total_inches * total_inches) * 703.0;
    (bmi * 10.0).round() / 10.0
}

/// Build the normalized submission record. Pure: the caller supplies the
/// record id and timestamp, so identical inputs always yield an identical
/// record.
#[allow(clippy::too_many_arguments)]
pub fn build_record(
    id: Uuid,
    category: Category,
    goals: &[String],
    intake_answers: &AnswerSet,
    eligibility: &Eligibility,
    identity: &Identity,
    shipping: &Shipping,
    payment: &PaymentMeta,
    user: &UserIdentity,
    submitted_at: Timestamp,
) -> SubmissionRecord {
    let height_raw = intake_answers.text(HEIGHT_KEY).unwrap_or_default();
    let (height_feet, height_inches) = parse_height(height_raw);
    let weight_lbs = intake_answers
        .text(WEIGHT_KEY)
        .and_then(|w| w.trim().parse::<f64>().ok())
        .unwrap_or(0.0);

    SubmissionRecord {
        id,
        user_id: user.user_id.clone(),
        user_email: user.email.clone(),
        user_name: user.name.clone(),
        category,
        goals: goals.to_vec(),
        height_feet,
        height_inches,
        weight_lbs,
        bmi: body_mass_index(weight_lbs, height_feet, height_inches),
        sex: eligibility.sex,
        date_of_birth: eligibility.date_of_birth,
        state_code: eligibility.state_code.clone(),
        phone: eligibility.phone.clone(),
        pcp_visit_recent: eligibility.pcp_visit == Some(PcpVisit::Yes),
        lab_results: eligibility.lab_results.clone(),
        conditions: intake_answers.as_list("conditions"),
        medications: intake_answers.as_list(veridia_questions::MEDICATIONS_QUESTION_ID),
        allergies: intake_answers.as_list("allergies"),
        id_type: identity.id_type.clone(),
        id_number: identity.id_number.clone(),
        id_file: identity.id_file.clone(),
        shipping: shipping.clone(),
        payment: payment.clone(),
        raw_answers: intake_answers.clone(),
        submitted_at,
    }
}
