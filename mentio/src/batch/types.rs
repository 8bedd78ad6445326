//! Types for batch extraction requests and per-record outcomes.

use serde::{Deserialize, Serialize};

use crate::recognizer::EntityMention;
use crate::{MentioError, Result};

/// One unit of work as received from the caller, before validation.
///
/// Fields are optional so a malformed record degrades to a per-record error
/// instead of failing the whole batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    /// Caller-assigned record identifier, echoed back unchanged
    pub id: Option<String>,
    /// The text to process
    pub text: Option<String>,
}

impl RawRecord {
    /// Create a raw record.
    pub fn new(id: Option<String>, text: Option<String>) -> Self {
        Self { id, text }
    }

    /// Validate presence of both required fields and produce a [`Document`].
    pub fn normalize(self) -> Result<Document> {
        let id = self
            .id
            .ok_or_else(|| MentioError::InvalidRecord("missing recordId".to_string()))?;
        let text = self
            .text
            .ok_or_else(|| MentioError::InvalidRecord("missing data.text".to_string()))?;
        Ok(Document { id, text })
    }
}

/// Normalized form of a record, owned transiently for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Caller-assigned record identifier
    pub id: String,
    /// The text to process
    pub text: String,
}

/// Result of processing a single record in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RecordOutcome {
    /// The record was processed; mentions are in source-text order
    Success {
        /// Index in the original batch
        index: usize,
        /// Caller-assigned record identifier
        id: String,
        /// Recognized mentions in scan order
        mentions: Vec<EntityMention>,
    },

    /// The record failed on its own; siblings are unaffected
    Error {
        /// Index in the original batch
        index: usize,
        /// Caller-assigned record identifier, empty when the record had none
        id: String,
        /// What went wrong with this record
        message: String,
    },
}

impl RecordOutcome {
    /// Index of this outcome in the original batch.
    pub fn index(&self) -> usize {
        match self {
            RecordOutcome::Success { index, .. } | RecordOutcome::Error { index, .. } => *index,
        }
    }

    /// The record identifier this outcome belongs to.
    pub fn id(&self) -> &str {
        match self {
            RecordOutcome::Success { id, .. } | RecordOutcome::Error { id, .. } => id,
        }
    }

    /// Whether this outcome is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, RecordOutcome::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_requires_record_id() {
        let err = RawRecord::new(None, Some("text".to_string()))
            .normalize()
            .unwrap_err();
        assert!(matches!(err, MentioError::InvalidRecord(_)));
        assert!(err.to_string().contains("recordId"));
    }

    #[test]
    fn normalize_requires_text() {
        let err = RawRecord::new(Some("1".to_string()), None)
            .normalize()
            .unwrap_err();
        assert!(matches!(err, MentioError::InvalidRecord(_)));
        assert!(err.to_string().contains("data.text"));
    }

    #[test]
    fn normalize_accepts_empty_text() {
        let doc = RawRecord::new(Some("1".to_string()), Some(String::new()))
            .normalize()
            .unwrap();
        assert_eq!(doc.id, "1");
        assert!(doc.text.is_empty());
    }

    #[test]
    fn outcome_accessors_cover_both_variants() {
        let ok = RecordOutcome::Success {
            index: 3,
            id: "a".to_string(),
            mentions: Vec::new(),
        };
        let err = RecordOutcome::Error {
            index: 7,
            id: "b".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(ok.index(), 3);
        assert_eq!(err.index(), 7);
        assert_eq!(ok.id(), "a");
        assert_eq!(err.id(), "b");
        assert!(!ok.is_error());
        assert!(err.is_error());
    }
}
