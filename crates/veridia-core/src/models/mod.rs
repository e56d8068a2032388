pub mod answer;
pub mod category;
pub mod eligibility;
pub mod identity;
pub mod question;
pub mod step;
pub mod submission;
pub mod wizard;

pub use answer::{AnswerSet, AnswerValue};
pub use category::Category;
pub use eligibility::{Eligibility, PcpVisit, Sex};
pub use identity::{Identity, PaymentMeta, Shipping, UserIdentity};
pub use question::{AnswerKind, Predicate, QuestionDescriptor};
pub use step::MajorStep;
pub use submission::SubmissionRecord;
pub use wizard::{WizardSnapshot, WizardState};
