use std::sync::LazyLock;

use veridia_core::models::{AnswerSet, Category, QuestionDescriptor};

use super::{free_text, informational, multi, optional, single, when, with_details};
use crate::QuestionBank;

pub struct SexualHealth;

fn takes_heart_medication(answers: &AnswerSet) -> bool {
    answers
        .list("heart_conditions")
        .is_some_and(|c| !c.iter().any(|o| o == "None of the above"))
}

impl QuestionBank for SexualHealth {
    fn category(&self) -> Category {
        Category::SexualHealth
    }

    fn questions(&self) -> &[QuestionDescriptor] {
        static QUESTIONS: LazyLock<Vec<QuestionDescriptor>> = LazyLock::new(|| {
            vec![
                informational(
                    "doctor_review_intro",
                    "Your medical history",
                    "These answers are reviewed by a licensed physician. PDE5 \
                     inhibitors interact with nitrates, so the heart questions are \
                     safety-critical.",
                ),
                single(
                    "symptom_duration",
                    "Duration",
                    "How long have you experienced symptoms?",
                    &["Less than 3 months", "3-12 months", "Over a year"],
                ),
                multi(
                    "heart_conditions",
                    "Heart health",
                    "Have you been diagnosed with any of the following?",
                    &[
                        "Angina",
                        "Heart attack",
                        "Arrhythmia",
                        "Heart failure",
                        "None of the above",
                    ],
                ),
                when(
                    with_details(single(
                        "nitrate_use",
                        "Nitrate medication",
                        "Do you take nitrates in any form (nitroglycerin, isosorbide)?",
                        &["Yes", "No"],
                    )),
                    takes_heart_medication,
                ),
                single(
                    "blood_pressure",
                    "Blood pressure",
                    "What was your most recent blood pressure reading?",
                    &[
                        "Normal (under 120/80)",
                        "Elevated (120-139/80-89)",
                        "High (140/90 or above)",
                        "I don't know",
                    ],
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
