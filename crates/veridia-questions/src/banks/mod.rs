pub mod hair_restoration;
pub mod longevity;
pub mod sexual_health;
pub mod weight_loss;

use veridia_core::models::{AnswerKind, Predicate, QuestionDescriptor};

/// Shorthand constructors shared by the bank definitions. All banks are
/// plain ordered data; anything conditional goes through `visible_if`.
pub(crate) fn single(
    id: &str,
    title: &str,
    prompt: &str,
    options: &[&str],
) -> QuestionDescriptor {
    QuestionDescriptor {
        id: id.to_string(),
        title: title.to_string(),
        prompt: prompt.to_string(),
        kind: AnswerKind::SingleChoice,
        options: options.iter().map(|o| o.to_string()).collect(),
        visible_if: None,
        requires_upload: false,
        requires_detail_text: false,
        optional: false,
    }
}

pub(crate) fn multi(id: &str, title: &str, prompt: &str, options: &[&str]) -> QuestionDescriptor {
    QuestionDescriptor {
        kind: AnswerKind::MultiChoice,
        ..single(id, title, prompt, options)
    }
}

pub(crate) fn free_text(id: &str, title: &str, prompt: &str) -> QuestionDescriptor {
    QuestionDescriptor {
        kind: AnswerKind::FreeText,
        ..single(id, title, prompt, &[])
    }
}

pub(crate) fn informational(id: &str, title: &str, prompt: &str) -> QuestionDescriptor {
    QuestionDescriptor {
        kind: AnswerKind::Informational,
        ..single(id, title, prompt, &[])
    }
}

pub(crate) fn when(question: QuestionDescriptor, predicate: Predicate) -> QuestionDescriptor {
    QuestionDescriptor {
        visible_if: Some(predicate),
        ..question
    }
}

pub(crate) fn optional(question: QuestionDescriptor) -> QuestionDescriptor {
    QuestionDescriptor {
        optional: true,
        ..question
    }
}

pub(crate) fn with_details(question: QuestionDescriptor) -> QuestionDescriptor {
    QuestionDescriptor {
        requires_detail_text: true,
        ..question
    }
}
