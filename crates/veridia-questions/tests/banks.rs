use veridia_core::models::{AnswerKind, AnswerSet, Category};
use veridia_questions::{
    GLP1_OPTIONS, MEDICATIONS_QUESTION_ID, all_banks, bank_for, is_glp1_option,
};

#[test]
fn every_category_has_a_bank_with_unique_ids() {
    for bank in all_banks() {
        let questions = bank.questions();
        assert!(
            !questions.is_empty(),
            "{:?} bank is empty",
            bank.category()
        );
        for (i, q) in questions.iter().enumerate() {
            assert!(
                !questions[i + 1..].iter().any(|other| other.id == q.id),
                "duplicate question id '{}' in {:?}",
                q.id,
                bank.category()
            );
        }
    }
}

#[test]
fn bank_for_matches_category() {
    for category in Category::ALL {
        assert_eq!(bank_for(category).category(), category);
    }
}

#[test]
fn choice_questions_carry_options_and_informational_ones_do_not() {
    for bank in all_banks() {
        for q in bank.questions() {
            match q.kind {
                AnswerKind::SingleChoice | AnswerKind::MultiChoice => {
                    assert!(!q.options.is_empty(), "'{}' has no options", q.id);
                }
                AnswerKind::Informational => {
                    assert!(q.options.is_empty(), "'{}' should not have options", q.id);
                }
                _ => {}
            }
        }
    }
}

#[test]
fn weight_loss_bank_carries_the_glp1_medication_options() {
    let bank = bank_for(Category::WeightLoss);
    let medications = bank.find_question(MEDICATIONS_QUESTION_ID).unwrap();
    for option in GLP1_OPTIONS {
        assert!(
            medications.options.iter().any(|o| o == option),
            "missing GLP-1 option '{option}'"
        );
        assert!(is_glp1_option(option));
    }
    assert!(!is_glp1_option("Metformin"));
}

#[test]
fn predicates_gate_follow_up_questions() {
    let bank = bank_for(Category::WeightLoss);
    let follow_up = bank.find_question("thyroid_details").unwrap();

    let mut answers = AnswerSet::new();
    assert!(!follow_up.is_visible(&answers));

    answers.set("thyroid_condition", "Yes");
    assert!(follow_up.is_visible(&answers));

    answers.set("thyroid_condition", "No");
    assert!(!follow_up.is_visible(&answers));
}

#[test]
fn unknown_question_lookup_is_an_error() {
    let bank = bank_for(Category::Longevity);
    assert!(bank.find_question("does_not_exist").is_err());
}

#[test]
fn availability_roster_is_case_insensitive() {
    use veridia_questions::availability::{state_supported, supported_states};

    assert!(!supported_states().is_empty());
    assert!(state_supported("CA"));
    assert!(state_supported("ca"));
    assert!(state_supported(" ny "));
    assert!(!state_supported("ZZ"));
}
