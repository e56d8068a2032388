use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single answer value. The shape depends on the question kind: free text
/// and single choices are strings, multi-choices are string lists, consent
/// style toggles are booleans. Upload references are strings stored under
/// the derived `"<id>_file"` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

impl AnswerValue {
    /// True when the value carries no usable content.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Flag(_) => false,
            AnswerValue::Text(s) => s.trim().is_empty(),
            AnswerValue::List(items) => items.is_empty(),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Flag(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        AnswerValue::List(value)
    }
}

/// The accumulated answers for one wizard session, keyed by question id.
/// Two derived keys exist per question: `"<id>_file"` for an upload
/// reference and `"<id>_details"` for free-text elaboration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSet(pub BTreeMap<String, AnswerValue>);

/// Derived key for a question's uploaded file reference.
pub fn file_key(question_id: &str) -> String {
    format!("{question_id}_file")
}

/// Derived key for a question's free-text elaboration.
pub fn details_key(question_id: &str) -> String {
    format!("{question_id}_details")
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.0.get(question_id)
    }

    pub fn set(&mut self, question_id: &str, value: impl Into<AnswerValue>) {
        self.0.insert(question_id.to_string(), value.into());
    }

    pub fn remove(&mut self, question_id: &str) -> Option<AnswerValue> {
        self.0.remove(question_id)
    }

    /// True when the question has a non-empty answer of any shape.
    pub fn has_answer(&self, question_id: &str) -> bool {
        self.get(question_id).is_some_and(|v| !v.is_empty())
    }

    pub fn text(&self, question_id: &str) -> Option<&str> {
        match self.get(question_id)? {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn flag(&self, question_id: &str) -> Option<bool> {
        match self.get(question_id)? {
            AnswerValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn list(&self, question_id: &str) -> Option<&[String]> {
        match self.get(question_id)? {
            AnswerValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Normalize an answer to a list: scalars become singletons, missing or
    /// empty answers become the empty list. Categories expecting
    /// multiplicity (conditions, medications) read through this.
    pub fn as_list(&self, question_id: &str) -> Vec<String> {
        match self.get(question_id) {
            Some(AnswerValue::List(items)) => items.clone(),
            Some(AnswerValue::Text(s)) if !s.trim().is_empty() => vec![s.clone()],
            Some(AnswerValue::Flag(b)) => vec![b.to_string()],
            _ => Vec::new(),
        }
    }

    /// The uploaded file reference for a question, if any.
    pub fn file_ref(&self, question_id: &str) -> Option<&str> {
        self.text(&file_key(question_id))
    }

    /// Record an uploaded file reference under the question's derived key.
    pub fn set_file_ref(&mut self, question_id: &str, reference: &str) {
        self.set(&file_key(question_id), reference);
    }

    pub fn details(&self, question_id: &str) -> Option<&str> {
        self.text(&details_key(question_id))
    }

    pub fn set_details(&mut self, question_id: &str, details: &str) {
        self.set(&details_key(question_id), details);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.0.iter()
    }
}
