//! Project Codec
//!
//! Converts the three buffer texts to and from the persisted JSON record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::BufferStore;
use crate::error::{PlaygroundError, Result};

/// The persisted project shape: three verbatim texts, no version field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "html")]
    pub markup: String,
    #[serde(rename = "css")]
    pub stylesheet: String,
    #[serde(rename = "config")]
    pub framework_config: String,
}

/// On-disk form where every field may be missing or null
#[derive(Debug, Deserialize)]
struct StoredRecord {
    #[serde(default)]
    html: Option<String>,
    #[serde(default)]
    css: Option<String>,
    #[serde(default)]
    config: Option<String>,
}

impl ProjectRecord {
    pub fn new(
        markup: impl Into<String>,
        stylesheet: impl Into<String>,
        framework_config: impl Into<String>,
    ) -> Self {
        Self {
            markup: markup.into(),
            stylesheet: stylesheet.into(),
            framework_config: framework_config.into(),
        }
    }

    /// Snapshot the current buffers of a store
    pub fn from_store(store: &BufferStore) -> Self {
        Self::new(store.markup(), store.stylesheet(), store.framework_config())
    }

    pub fn into_parts(self) -> (String, String, String) {
        (self.markup, self.stylesheet, self.framework_config)
    }
}

/// Encode the three texts as a compact JSON record
pub fn encode(markup: &str, stylesheet: &str, framework_config: &str) -> Result<String> {
    encode_record(&ProjectRecord::new(markup, stylesheet, framework_config))
}

pub fn encode_record(record: &ProjectRecord) -> Result<String> {
    serde_json::to_string(record).map_err(|e| PlaygroundError::Encode {
        reason: e.to_string(),
    })
}

/// Decode persisted text into a record.
///
/// Missing or null fields become empty strings. Anything that is not a JSON
/// object, or holds a non-string value in one of the three fields, is a
/// `MalformedRecord`.
pub fn decode(text: &str) -> Result<ProjectRecord> {
    let value: Value = serde_json::from_str(text).map_err(|e| PlaygroundError::MalformedRecord {
        reason: e.to_string(),
    })?;

    if !value.is_object() {
        return Err(PlaygroundError::MalformedRecord {
            reason: format!("expected a JSON object, found {}", json_kind(&value)),
        });
    }

    let stored: StoredRecord =
        serde_json::from_value(value).map_err(|e| PlaygroundError::MalformedRecord {
            reason: e.to_string(),
        })?;

    Ok(ProjectRecord {
        markup: stored.html.unwrap_or_default(),
        stylesheet: stored.css.unwrap_or_default(),
        framework_config: stored.config.unwrap_or_default(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
