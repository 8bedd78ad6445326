//! The recognizer seam.

use async_trait::async_trait;

use super::EntityMention;
use crate::Result;
use crate::labels::EntityLabel;

/// Trait for recognizing named entities in text.
///
/// Implementations are shared across all in-flight requests behind an `Arc`
/// and must be safe for unsynchronized concurrent reads. For a fixed
/// implementation and input text the output must be reproducible; no state
/// may be carried between calls.
#[async_trait]
pub trait Recognizer: Send + Sync + std::fmt::Debug {
    /// Recognize entities in the given text.
    ///
    /// Mentions are returned in the order they appear in the text. An empty
    /// input is valid and yields no mentions.
    async fn recognize(&self, text: &str) -> Result<Vec<EntityMention>>;

    /// Get the name of this recognizer for identification purposes.
    fn name(&self) -> &str;

    /// Get the entity labels this recognizer can assign.
    fn supported_labels(&self) -> Vec<EntityLabel>;
}
