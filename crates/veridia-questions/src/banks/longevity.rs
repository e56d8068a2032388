use std::sync::LazyLock;

use veridia_core::models::{AnswerSet, Category, QuestionDescriptor};

use super::{free_text, informational, multi, optional, single, when};
use crate::QuestionBank;

pub struct Longevity;

fn had_recent_labs(answers: &AnswerSet) -> bool {
    answers.text("recent_labs") == Some("Yes")
}

impl QuestionBank for Longevity {
    fn category(&self) -> Category {
        Category::Longevity
    }

    fn questions(&self) -> &[QuestionDescriptor] {
        static QUESTIONS: LazyLock<Vec<QuestionDescriptor>> = LazyLock::new(|| {
            vec![
                informational(
                    "doctor_review_intro",
                    "Your baseline",
                    "These answers establish a baseline for your longevity protocol.",
                ),
                single(
                    "sleep_hours",
                    "Sleep",
                    "How many hours do you sleep on a typical night?",
                    &["Under 5", "5-6", "7-8", "More than 8"],
                ),
                single(
                    "exercise_frequency",
                    "Exercise",
                    "How often do you exercise for 30 minutes or more?",
                    &["Rarely", "1-2 times a week", "3-4 times a week", "5+ times a week"],
                ),
                multi(
                    "conditions",
                    "Medical conditions",
                    "Have you been diagnosed with any of the following?",
                    &[
                        "Hypertension",
                        "Type 2 diabetes",
                        "High cholesterol",
                        "Osteoporosis",
                        "None of the above",
                    ],
                ),
                single(
                    "recent_labs",
                    "Recent bloodwork",
                    "Have you had bloodwork done in the last 12 months?",
                    &["Yes", "No"],
                ),
                when(
                    QuestionDescriptor {
                        requires_upload: true,
                        ..single(
                            "lab_panel",
                            "Lab panel",
                            "Which panel was it? Upload the results so your physician \
                             can review them.",
                            &["Standard metabolic panel", "Full hormone panel", "Other"],
                        )
                    },
                    had_recent_labs,
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
