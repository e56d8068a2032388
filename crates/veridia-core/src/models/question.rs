use super::answer::AnswerSet;

/// A pure visibility predicate over the current answer snapshot. Plain
/// function pointers keep descriptors `Clone` static data and make
/// sequencing deterministic and replayable after rehydration.
pub type Predicate = fn(&AnswerSet) -> bool;

/// The shape of answer a question collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    SingleChoice,
    MultiChoice,
    FreeText,
    /// Display-only; never gates advancing.
    Informational,
    File,
}

/// One entry in a category's question bank.
#[derive(Debug, Clone)]
pub struct QuestionDescriptor {
    /// Stable identifier; also the key into the [`AnswerSet`].
    pub id: String,
    pub title: String,
    pub prompt: String,
    pub kind: AnswerKind,
    /// Options for choice kinds; empty otherwise.
    pub options: Vec<String>,
    /// When present, the question is shown only while this evaluates true.
    pub visible_if: Option<Predicate>,
    /// An uploaded file reference is required before advancing.
    pub requires_upload: bool,
    /// A `"<id>_details"` free-text elaboration accompanies the answer.
    pub requires_detail_text: bool,
    /// Free-text questions marked optional may be left empty.
    pub optional: bool,
}

impl QuestionDescriptor {
    pub fn is_visible(&self, answers: &AnswerSet) -> bool {
        self.visible_if.is_none_or(|p| p(answers))
    }
}
