use serde::{Deserialize, Serialize};

use super::error::SubmissionError;

/// Label shown next to the first input. Submitting the label itself is
/// rejected by the business rules.
pub const LABEL_FISH_BIGGER: &str = "鱼越大";

/// Label shown next to the second input.
pub const LABEL_FISH_SMALLER: &str = "鱼越小";

/// Raw key-value form data, before any validation has run.
///
/// Both fields are optional here: a browser may omit either one entirely,
/// and the schema validator treats an absent field the same as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fish_bigger: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fish_smaller: Option<String>,
}

/// A submission whose fields passed the presence checks.
///
/// Values are carried verbatim: no trimming, no normalization. Created per
/// request and discarded once the response is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub fish_bigger: String,
    pub fish_smaller: String,
}

/// Scope an error message attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Cross-field errors, rendered above the submit button.
    Form,
    FishBigger,
    FishSmaller,
}

/// Field-scoped validation errors.
///
/// Message order within a field is preserved, and validation never
/// short-circuits, so a single pass can report several problems per field.
/// Serializes to an object keyed by field name with empty lists omitted;
/// cross-field errors live under the empty key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(rename = "", skip_serializing_if = "Vec::is_empty")]
    pub form: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fish_bigger: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fish_smaller: Vec<String>,
}

impl FieldErrors {
    /// Attach an error message to a field.
    pub fn push(&mut self, field: Field, error: SubmissionError) {
        self.push_message(field, error.to_string());
    }

    /// Attach a pre-rendered message to a field.
    pub fn push_message(&mut self, field: Field, message: impl Into<String>) {
        let messages = match field {
            Field::Form => &mut self.form,
            Field::FishBigger => &mut self.fish_bigger,
            Field::FishSmaller => &mut self.fish_smaller,
        };
        messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.form.is_empty() && self.fish_bigger.is_empty() && self.fish_smaller.is_empty()
    }
}
