use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The treatment vertical selected at wizard start. Immutable for the
/// lifetime of one wizard run; selects the question bank and clinical copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Category {
    WeightLoss,
    HairRestoration,
    SexualHealth,
    Longevity,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::WeightLoss,
        Category::HairRestoration,
        Category::SexualHealth,
        Category::Longevity,
    ];

    /// Stable slug used in storage keys and URLs.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::WeightLoss => "weight-loss",
            Category::HairRestoration => "hair-restoration",
            Category::SexualHealth => "sexual-health",
            Category::Longevity => "longevity",
        }
    }

    /// Inverse of [`slug`](Category::slug), for category-scoped URLs.
    pub fn from_slug(slug: &str) -> Result<Category, CoreError> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == slug)
            .ok_or_else(|| CoreError::UnknownCategory(slug.to_string()))
    }
}
