use thiserror::Error;
use veridia_core::models::Category;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("unknown question '{question_id}' in the {category:?} bank")]
    UnknownQuestion {
        category: Category,
        question_id: String,
    },
}
