use std::sync::LazyLock;

use veridia_core::models::{AnswerKind, AnswerSet, Category, QuestionDescriptor};

use super::{free_text, informational, multi, optional, single, when};
use crate::QuestionBank;

pub struct HairRestoration;

fn noticed_shedding(answers: &AnswerSet) -> bool {
    answers.text("hair_loss_pattern") == Some("Sudden shedding")
}

impl QuestionBank for HairRestoration {
    fn category(&self) -> Category {
        Category::HairRestoration
    }

    fn questions(&self) -> &[QuestionDescriptor] {
        static QUESTIONS: LazyLock<Vec<QuestionDescriptor>> = LazyLock::new(|| {
            vec![
                informational(
                    "doctor_review_intro",
                    "Your hair history",
                    "A licensed physician reviews these answers before prescribing.",
                ),
                single(
                    "hair_loss_pattern",
                    "Pattern",
                    "How would you describe your hair loss?",
                    &[
                        "Receding hairline",
                        "Thinning at the crown",
                        "Overall thinning",
                        "Sudden shedding",
                    ],
                ),
                when(
                    single(
                        "shedding_onset",
                        "Onset",
                        "When did the shedding start?",
                        &["Within the last month", "1-6 months ago", "Over 6 months ago"],
                    ),
                    noticed_shedding,
                ),
                single(
                    "family_history",
                    "Family history",
                    "Does hair loss run in your family?",
                    &["Yes", "No", "Not sure"],
                ),
                multi(
                    "scalp_symptoms",
                    "Scalp symptoms",
                    "Any of the following on your scalp?",
                    &["Itching", "Flaking", "Redness", "Pain", "None of the above"],
                ),
                QuestionDescriptor {
                    kind: AnswerKind::File,
                    requires_upload: true,
                    ..single(
                        "hairline_photo",
                        "Hairline photo",
                        "Upload a well-lit photo of your hairline from above.",
                        &[],
                    )
                },
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
