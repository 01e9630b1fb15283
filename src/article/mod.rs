// randwiki: Random Wikipedia Article Viewer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Article record and its wire mapping.
//!
//! ```text
//! wire payload                   Article
//! {"title": ..., ----------->    title
//!  "extract": ..., --rename-->   summary
//!  ...ignored}
//! ```
//!
//! Both wire fields are required; a payload missing either one is rejected
//! instead of defaulting to empty text. The payload must be a JSON object:
//! fields are matched by name, never by position.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A page summary: title plus plain-text extract.
///
/// Equality is structural. Both fields are always present and default to
/// empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Article {
    title: String,
    #[serde(rename = "extract")]
    summary: String,
}

/// Named wire fields.
#[derive(Deserialize)]
struct SummaryPayload {
    title: String,
    extract: String,
}

impl From<SummaryPayload> for Article {
    fn from(payload: SummaryPayload) -> Self {
        Self::new(payload.title, payload.extract)
    }
}

impl Article {
    #[must_use]
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
        }
    }

    /// Article with a title and an empty summary.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self::new(title, String::new())
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Decode a summary payload.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the bytes are not JSON, are not an
    /// object, or if `title` or `extract` is missing or not a string.
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        // Derived struct visitors also accept sequences; an object comes first
        let object: Map<String, Value> = serde_json::from_slice(bytes)?;
        let payload: SummaryPayload = serde_json::from_value(Value::Object(object))?;
        Ok(payload.into())
    }

    /// Encode back into the wire shape (`{"title": .., "extract": ..}`).
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.title,
            "extract": self.summary,
        })
    }
}

#[cfg(test)]
mod tests;
