//! Mention types and grouping for recognized entities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::labels::EntityLabel;

/// One recognized span of text and its assigned label.
///
/// The label is carried as the raw tag string a recognizer produced; only
/// tags in [`EntityLabel`] participate in grouped output. Span offsets are
/// byte positions into the source text, used for ordering and overlap
/// resolution; they do not cross the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityMention {
    /// The text content of the mention
    pub text: String,
    /// The raw entity label assigned by the recognizer
    pub label: String,
    /// Starting byte position in the source text
    pub start: usize,
    /// Ending byte position in the source text
    pub end: usize,
}

impl EntityMention {
    /// Create a new mention.
    pub fn new(text: impl Into<String>, label: EntityLabel, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label: label.as_str().to_string(),
            start,
            end,
        }
    }
}

/// Partition mentions into per-label text lists, preserving source order.
///
/// Every label in the taxonomy is present in the result, empty when nothing
/// matched. Mentions whose label is outside the taxonomy are dropped from
/// the grouping and counted; the count is returned so callers can surface
/// the data-quality signal.
pub fn group_mentions(mentions: &[EntityMention]) -> (BTreeMap<EntityLabel, Vec<String>>, usize) {
    let mut grouped: BTreeMap<EntityLabel, Vec<String>> = EntityLabel::ALL
        .iter()
        .map(|label| (*label, Vec::new()))
        .collect();

    let mut unmapped = 0usize;
    for mention in mentions {
        match EntityLabel::parse(&mention.label) {
            Some(label) => grouped.entry(label).or_default().push(mention.text.clone()),
            None => {
                unmapped += 1;
                warn!(label = %mention.label, text = %mention.text, "dropping mention with unmapped entity label");
            }
        }
    }

    (grouped, unmapped)
}
