//! Configuration for the pattern recognizer.

use serde::{Deserialize, Serialize};

/// Configuration for [`PatternRecognizer`](super::PatternRecognizer).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    /// Maximum text length in bytes a single document may have.
    ///
    /// Longer documents fail extraction for that record only; the batch
    /// continues.
    pub max_text_len: usize,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            max_text_len: 1_000_000,
        }
    }
}
