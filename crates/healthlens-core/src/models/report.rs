use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Structured result of a symptom analysis, and the input of the PDF report.
///
/// Each list holds short statements rendered in the given order. A missing
/// key deserializes to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ReportInput {
    pub summary: Vec<String>,
    pub considerations: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ReportInput {
    /// Convert an untyped JSON body into a `ReportInput`.
    ///
    /// The body must be a JSON object. Every present section must be an
    /// array of strings; nested objects, numbers and `null` are rejected
    /// rather than stringified.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        if !value.is_object() {
            return Err(CoreError::InvalidReport(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }

        serde_json::from_value(value).map_err(|e| CoreError::InvalidReport(e.to_string()))
    }

    /// The entries of one section.
    pub fn entries(&self, section: Section) -> &[String] {
        match section {
            Section::Summary => &self.summary,
            Section::Considerations => &self.considerations,
            Section::Recommendations => &self.recommendations,
        }
    }

    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.entries(*s).is_empty())
    }
}

/// The three report sections, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Section {
    Summary,
    Considerations,
    Recommendations,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::Summary,
        Section::Considerations,
        Section::Recommendations,
    ];

    /// JSON key of the section.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Considerations => "considerations",
            Section::Recommendations => "recommendations",
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
