use veridia_core::models::{AnswerKind, AnswerSet, QuestionDescriptor};
use veridia_engine::sequencer::{first_visible, next_visible, prev_visible};

fn question(id: &str) -> QuestionDescriptor {
    QuestionDescriptor {
        id: id.to_string(),
        title: id.to_string(),
        prompt: String::new(),
        kind: AnswerKind::SingleChoice,
        options: vec!["Yes".to_string(), "No".to_string()],
        visible_if: None,
        requires_upload: false,
        requires_detail_text: false,
        optional: false,
    }
}

fn gated(id: &str, predicate: fn(&AnswerSet) -> bool) -> QuestionDescriptor {
    QuestionDescriptor {
        visible_if: Some(predicate),
        ..question(id)
    }
}

fn smoker_follow_up(answers: &AnswerSet) -> bool {
    answers.text("smokes") == Some("Yes")
}

fn fixture() -> Vec<QuestionDescriptor> {
    vec![
        question("smokes"),
        gated("cigarettes_per_day", smoker_follow_up),
        question("alcohol"),
    ]
}

#[test]
fn skips_questions_whose_predicate_is_false() {
    let questions = fixture();
    let mut answers = AnswerSet::new();
    answers.set("smokes", "No");

    assert_eq!(next_visible(&questions, 0, &answers), Some(2));
}

#[test]
fn includes_questions_whose_predicate_is_true() {
    let questions = fixture();
    let mut answers = AnswerSet::new();
    answers.set("smokes", "Yes");

    assert_eq!(next_visible(&questions, 0, &answers), Some(1));
    assert_eq!(next_visible(&questions, 1, &answers), Some(2));
}

#[test]
fn reaches_end_and_start_at_the_bounds() {
    let questions = fixture();
    let answers = AnswerSet::new();

    assert_eq!(next_visible(&questions, 2, &answers), None);
    assert_eq!(prev_visible(&questions, 0, &answers), None);
}

#[test]
fn next_then_prev_returns_to_the_original_index() {
    // Skip navigation is reversible while no answer changes in between.
    let questions = fixture();
    for smokes in ["Yes", "No"] {
        let mut answers = AnswerSet::new();
        answers.set("smokes", smokes);

        let mut index = 0;
        while let Some(next) = next_visible(&questions, index, &answers) {
            assert_eq!(
                prev_visible(&questions, next, &answers),
                Some(index),
                "not reversible from {next} with smokes={smokes}"
            );
            index = next;
        }
    }
}

#[test]
fn terminates_when_the_current_question_became_invisible() {
    // An answer change elsewhere can strand the cursor on a now-hidden
    // question; sequencing from there must still terminate.
    let questions = fixture();
    let mut answers = AnswerSet::new();
    answers.set("smokes", "Yes");
    let on_follow_up = next_visible(&questions, 0, &answers).unwrap();

    answers.set("smokes", "No");
    assert_eq!(next_visible(&questions, on_follow_up, &answers), Some(2));
    assert_eq!(prev_visible(&questions, on_follow_up, &answers), Some(0));
}

#[test]
fn first_visible_skips_a_hidden_head() {
    let questions = vec![gated("head", |_| false), question("tail")];
    assert_eq!(first_visible(&questions, &AnswerSet::new()), Some(1));

    let all_hidden = vec![gated("a", |_| false), gated("b", |_| false)];
    assert_eq!(first_visible(&all_hidden, &AnswerSet::new()), None);
}
