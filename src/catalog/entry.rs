// src/catalog/entry.rs
//
// Tone-pair definitions as stored in the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Longest accepted label, in characters
pub const MAX_LABEL_LEN: usize = 255;

/// A known tone pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneCatalogEntry {
    pub id: u64,
    pub label: String,
    pub tone1_hz: f64,
    pub tone2_hz: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields supplied by a user when creating or replacing an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneEntryDraft {
    pub label: String,
    pub tone1_hz: f64,
    pub tone2_hz: f64,
}

impl ToneEntryDraft {
    pub fn new(label: impl Into<String>, tone1_hz: f64, tone2_hz: f64) -> Self {
        Self {
            label: label.into(),
            tone1_hz,
            tone2_hz,
        }
    }

    /// Check and normalize the draft, trimming the label
    pub fn validated(self) -> Result<Self> {
        let label = self.label.trim().to_string();
        let label_len = label.chars().count();
        if label_len == 0 {
            return Err(Error::InvalidEntry("label must not be empty".to_string()));
        }
        if label_len > MAX_LABEL_LEN {
            return Err(Error::InvalidEntry(format!(
                "label is {} characters, limit is {}",
                label_len, MAX_LABEL_LEN
            )));
        }
        for (name, hz) in [("tone1_hz", self.tone1_hz), ("tone2_hz", self.tone2_hz)] {
            if !(hz.is_finite() && hz > 0.0) {
                return Err(Error::InvalidEntry(format!(
                    "{} must be a positive frequency, got {}",
                    name, hz
                )));
            }
        }
        Ok(Self { label, ..self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_trimmed() {
        let draft = ToneEntryDraft::new("  Engine 12 ", 853.2, 960.0).validated().unwrap();
        assert_eq!(draft.label, "Engine 12");
    }

    #[test]
    fn test_rejects_empty_label() {
        assert!(ToneEntryDraft::new("   ", 853.2, 960.0).validated().is_err());
    }

    #[test]
    fn test_rejects_long_label() {
        let label = "x".repeat(MAX_LABEL_LEN + 1);
        assert!(ToneEntryDraft::new(label, 853.2, 960.0).validated().is_err());
        let label = "x".repeat(MAX_LABEL_LEN);
        assert!(ToneEntryDraft::new(label, 853.2, 960.0).validated().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_tones() {
        assert!(ToneEntryDraft::new("a", 0.0, 960.0).validated().is_err());
        assert!(ToneEntryDraft::new("a", 853.2, -1.0).validated().is_err());
        assert!(ToneEntryDraft::new("a", f64::NAN, 960.0).validated().is_err());
    }
}
