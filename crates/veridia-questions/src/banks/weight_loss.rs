use std::sync::LazyLock;

use veridia_core::models::{AnswerSet, Category, QuestionDescriptor};

use super::{free_text, informational, multi, optional, single, when};
use crate::{GLP1_OPTIONS, MEDICATIONS_QUESTION_ID, QuestionBank};

/// Weight-loss intake. Carries the medications question whose GLP-1
/// options mandate a prescription upload.
pub struct WeightLoss;

fn tried_before(answers: &AnswerSet) -> bool {
    answers.text("weight_loss_history") == Some("Yes")
}

fn has_thyroid_condition(answers: &AnswerSet) -> bool {
    answers.text("thyroid_condition") == Some("Yes")
}

fn takes_medications(answers: &AnswerSet) -> bool {
    answers
        .list(MEDICATIONS_QUESTION_ID)
        .is_some_and(|m| !m.iter().any(|o| o == "None of the above"))
}

impl QuestionBank for WeightLoss {
    fn category(&self) -> Category {
        Category::WeightLoss
    }

    fn questions(&self) -> &[QuestionDescriptor] {
        static QUESTIONS: LazyLock<Vec<QuestionDescriptor>> = LazyLock::new(|| {
            let mut medication_options: Vec<&str> = vec![
                "Metformin",
                "Phentermine",
                "Orlistat (Alli, Xenical)",
            ];
            medication_options.extend(GLP1_OPTIONS);
            medication_options.extend(["Other prescription medication", "None of the above"]);

            vec![
                informational(
                    "doctor_review_intro",
                    "Your medical history",
                    "A licensed physician reviews every answer in this section before \
                     any treatment is prescribed.",
                ),
                single(
                    "weight_loss_history",
                    "Past attempts",
                    "Have you tried to lose weight before?",
                    &["Yes", "No"],
                ),
                when(
                    multi(
                        "weight_loss_methods",
                        "What you tried",
                        "Which approaches have you tried?",
                        &[
                            "Diet changes",
                            "Exercise programs",
                            "Prescription medication",
                            "Bariatric surgery",
                            "Commercial programs (WW, Noom)",
                        ],
                    ),
                    tried_before,
                ),
                multi(
                    "conditions",
                    "Medical conditions",
                    "Have you been diagnosed with any of the following?",
                    &[
                        "Hypertension",
                        "Type 2 diabetes",
                        "High cholesterol",
                        "Sleep apnea",
                        "Pancreatitis",
                        "Gallbladder disease",
                        "None of the above",
                    ],
                ),
                single(
                    "thyroid_condition",
                    "Thyroid",
                    "Have you or a family member been diagnosed with medullary thyroid \
                     carcinoma or MEN 2?",
                    &["Yes", "No"],
                ),
                when(
                    free_text(
                        "thyroid_details",
                        "Thyroid details",
                        "Tell us more about the diagnosis.",
                    ),
                    has_thyroid_condition,
                ),
                multi(
                    MEDICATIONS_QUESTION_ID,
                    "Current medications",
                    "Which of these are you currently taking? A GLP-1 selection \
                     requires a photo of your current prescription.",
                    &medication_options,
                ),
                when(
                    single(
                        "medication_source",
                        "Prescription source",
                        "Where was your current medication prescribed?",
                        &[
                            "My primary care provider",
                            "A specialist",
                            "Another telehealth service",
                        ],
                    ),
                    takes_medications,
                ),
                optional(free_text(
                    "allergies",
                    "Allergies",
                    "List any medication allergies.",
                )),
                single(
                    "pregnancy",
                    "Pregnancy",
                    "Are you currently pregnant, breastfeeding, or planning to become \
                     pregnant?",
                    &["Yes", "No", "Not applicable"],
                ),
                single(
                    "alcohol_use",
                    "Alcohol",
                    "How often do you drink alcohol?",
                    &["Never", "Occasionally", "Weekly", "Daily"],
                ),
                optional(free_text(
                    "anything_else",
                    "Anything else",
                    "Anything else the physician should know?",
                )),
            ]
        });
        &QUESTIONS
    }
}
