//! Conditional question sequencing.
//!
//! Walks the question list one position at a time, skipping entries whose
//! visibility predicate evaluates false against the current answer
//! snapshot. Predicates are pure, so sequencing is deterministic and
//! replayable after rehydration.

use veridia_core::models::{AnswerSet, QuestionDescriptor};

/// The next visible question after `from`, or `None` when the end of the
/// list is reached. `from` itself is never returned, so this terminates
/// even if the question at `from` has become invisible.
pub fn next_visible(
    questions: &[QuestionDescriptor],
    from: usize,
    answers: &AnswerSet,
) -> Option<usize> {
    questions
        .iter()
        .enumerate()
        .skip(from.saturating_add(1))
        .find(|(_, q)| q.is_visible(answers))
        .map(|(i, _)| i)
}

/// The nearest visible question before `from`, or `None` when the start of
/// the list is reached.
pub fn prev_visible(
    questions: &[QuestionDescriptor],
    from: usize,
    answers: &AnswerSet,
) -> Option<usize> {
    let bound = from.min(questions.len());
    questions[..bound]
        .iter()
        .enumerate()
        .rev()
        .find(|(_, q)| q.is_visible(answers))
        .map(|(i, _)| i)
}

/// The first visible question in the list, used when entering the intake
/// step.
pub fn first_visible(questions: &[QuestionDescriptor], answers: &AnswerSet) -> Option<usize> {
    questions
        .iter()
        .position(|q| q.is_visible(answers))
}
