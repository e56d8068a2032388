//! veridia-questions
//!
//! Static, versioned intake question banks per treatment category. Pure
//! data — no AWS dependency. Defines the ordered question sequences, their
//! visibility predicates, and the availability roster backing the
//! state-availability step.

pub mod availability;
pub mod banks;
pub mod error;

use veridia_core::models::{Category, QuestionDescriptor};

use crate::error::BankError;

/// The medications question carried by the weight-loss bank. Selecting a
/// GLP-1 agonist there makes a prescription upload mandatory.
pub const MEDICATIONS_QUESTION_ID: &str = "current_medications";

/// GLP-1 receptor agonist options, exactly as they appear in the
/// medications question option list.
pub const GLP1_OPTIONS: [&str; 3] = [
    "Semaglutide (Ozempic, Wegovy)",
    "Tirzepatide (Mounjaro, Zepbound)",
    "Liraglutide (Saxenda, Victoza)",
];

pub fn is_glp1_option(option: &str) -> bool {
    GLP1_OPTIONS.contains(&option)
}

/// Trait implemented by each category's question bank.
pub trait QuestionBank: Send + Sync {
    /// The category this bank serves.
    fn category(&self) -> Category;

    /// The ordered question sequence, including predicate-gated entries.
    fn questions(&self) -> &[QuestionDescriptor];

    /// Look up a question by stable id.
    fn find_question(&self, question_id: &str) -> Result<&QuestionDescriptor, BankError> {
        self.questions()
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| BankError::UnknownQuestion {
                category: self.category(),
                question_id: question_id.to_string(),
            })
    }
}

/// Return all registered banks.
pub fn all_banks() -> Vec<Box<dyn QuestionBank>> {
    vec![
        Box::new(banks::weight_loss::WeightLoss),
        Box::new(banks::hair_restoration::HairRestoration),
        Box::new(banks::sexual_health::SexualHealth),
        Box::new(banks::longevity::Longevity),
    ]
}

/// The bank for a category. Every category has exactly one bank.
pub fn bank_for(category: Category) -> Box<dyn QuestionBank> {
    match category {
        Category::WeightLoss => Box::new(banks::weight_loss::WeightLoss),
        Category::HairRestoration => Box::new(banks::hair_restoration::HairRestoration),
        Category::SexualHealth => Box::new(banks::sexual_health::SexualHealth),
        Category::Longevity => Box::new(banks::longevity::Longevity),
    }
}

/// Owned copy of a category's question sequence, for callers that hold the
/// list across a wizard session.
pub fn questions_for(category: Category) -> Vec<QuestionDescriptor> {
    bank_for(category).questions().to_vec()
}
