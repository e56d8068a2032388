//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the Veridia bucket.

use uuid::Uuid;

use crate::models::Category;

/// The per-category progress snapshot slot. One slot per category; never
/// shared or merged across categories.
pub fn progress(category: Category) -> String {
    format!("progress/{}.json", category.slug())
}

/// Prefix shared by all submission records, for listing and lifecycle
/// rules.
pub const SUBMISSIONS_PREFIX: &str = "submissions/";

pub fn submission(id: Uuid) -> String {
    format!("{SUBMISSIONS_PREFIX}{id}.json")
}

/// Destination folder for files uploaded against one intake question.
pub fn upload_folder(category: Category, question_id: &str) -> String {
    format!("uploads/{}/{question_id}/", category.slug())
}

/// Destination folder for eligibility lab-result uploads.
pub fn lab_results_folder(category: Category) -> String {
    format!("uploads/{}/lab-results/", category.slug())
}

/// Destination folder for identification document uploads.
pub fn identification_folder(category: Category) -> String {
    format!("uploads/{}/identification/", category.slug())
}
