//! Data Transfer Objects for the API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use mentio::batch::{RawRecord, RecordOutcome};
use mentio::labels::EntityLabel;
use mentio::recognizer::{EntityMention, group_mentions};

/// Payload of one inbound record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordData {
    /// The text to extract entities from
    pub text: Option<String>,
}

/// One unit of work in the batch contract.
///
/// Fields deserialize leniently; a record missing either field degrades to a
/// per-record error instead of failing the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Record {
    /// Caller-assigned identifier, echoed back unchanged
    #[serde(rename = "recordId")]
    pub record_id: Option<String>,

    /// The record payload
    pub data: Option<RecordData>,
}

impl From<Record> for RawRecord {
    fn from(record: Record) -> Self {
        RawRecord::new(record.record_id, record.data.and_then(|d| d.text))
    }
}

/// Batch of records to process
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordsRequest {
    /// Ordered records; output preserves this order
    #[serde(default)]
    pub values: Vec<Record>,
}

/// One recognized entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntityMentionDto {
    /// The entity text as it appears in the source
    pub text: String,
    /// The entity label
    pub label: String,
}

impl From<EntityMention> for EntityMentionDto {
    fn from(mention: EntityMention) -> Self {
        Self {
            text: mention.text,
            label: mention.label,
        }
    }
}

/// Per-record error marker
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    /// What went wrong with this record
    pub message: String,
}

/// Flat entity payload for one record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntityList {
    /// Mentions in the order they appear in the source text
    pub entities: Vec<EntityMentionDto>,
}

/// Flat result for one record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordEntities {
    /// Caller-assigned identifier, echoed back unchanged
    #[serde(rename = "recordId")]
    pub record_id: String,

    /// Recognized entities
    pub data: EntityList,

    /// Errors scoped to this record; absent when the record processed cleanly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorMessage>>,
}

impl From<RecordOutcome> for RecordEntities {
    fn from(outcome: RecordOutcome) -> Self {
        match outcome {
            RecordOutcome::Success { id, mentions, .. } => Self {
                record_id: id,
                data: EntityList {
                    entities: mentions.into_iter().map(EntityMentionDto::from).collect(),
                },
                errors: None,
            },
            RecordOutcome::Error { id, message, .. } => Self {
                record_id: id,
                data: EntityList {
                    entities: Vec::new(),
                },
                errors: Some(vec![ErrorMessage { message }]),
            },
        }
    }
}

/// Batch response for the flat endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordsResponse {
    /// Results in the same order and count as the input values
    pub values: Vec<RecordEntities>,
}

/// Per-category entity texts for one record.
///
/// Every category is always present, empty when nothing matched. Field
/// names, spelling included, are the contract downstream skillsets bind to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EntityCategories {
    pub cardinals: Vec<String>,
    pub dates: Vec<String>,
    pub events: Vec<String>,
    pub facilities: Vec<String>,
    pub gpes: Vec<String>,
    pub languages: Vec<String>,
    pub laws: Vec<String>,
    pub locations: Vec<String>,
    pub money: Vec<String>,
    pub norps: Vec<String>,
    pub ordinals: Vec<String>,
    pub organizations: Vec<String>,
    pub percentages: Vec<String>,
    pub people: Vec<String>,
    pub products: Vec<String>,
    pub quanities: Vec<String>,
    pub times: Vec<String>,
    #[serde(rename = "worksOfArt")]
    pub works_of_art: Vec<String>,
}

impl EntityCategories {
    /// Group mentions into categories, preserving source order within each.
    ///
    /// Returns the categories and the number of mentions dropped because
    /// their label has no category mapping.
    pub fn from_mentions(mentions: &[EntityMention]) -> (Self, usize) {
        let (mut grouped, unmapped) = group_mentions(mentions);
        let mut take = |label: EntityLabel| grouped.remove(&label).unwrap_or_default();

        let categories = Self {
            cardinals: take(EntityLabel::Cardinal),
            dates: take(EntityLabel::Date),
            events: take(EntityLabel::Event),
            facilities: take(EntityLabel::Fac),
            gpes: take(EntityLabel::Gpe),
            languages: take(EntityLabel::Language),
            laws: take(EntityLabel::Law),
            locations: take(EntityLabel::Loc),
            money: take(EntityLabel::Money),
            norps: take(EntityLabel::Norp),
            ordinals: take(EntityLabel::Ordinal),
            organizations: take(EntityLabel::Org),
            percentages: take(EntityLabel::Percent),
            people: take(EntityLabel::Person),
            products: take(EntityLabel::Product),
            quanities: take(EntityLabel::Quantity),
            times: take(EntityLabel::Time),
            works_of_art: take(EntityLabel::WorkOfArt),
        };

        (categories, unmapped)
    }
}

/// Grouped result for one record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordEntitiesByType {
    /// Caller-assigned identifier, echoed back unchanged
    #[serde(rename = "recordId")]
    pub record_id: String,

    /// Entities grouped by category; all categories always present
    pub data: EntityCategories,

    /// Errors scoped to this record; absent when the record processed cleanly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorMessage>>,
}

impl From<RecordOutcome> for RecordEntitiesByType {
    fn from(outcome: RecordOutcome) -> Self {
        match outcome {
            RecordOutcome::Success { id, mentions, .. } => {
                let (data, unmapped) = EntityCategories::from_mentions(&mentions);
                if unmapped > 0 {
                    tracing::warn!(record_id = %id, unmapped, "mentions dropped from grouped output");
                }
                Self {
                    record_id: id,
                    data,
                    errors: None,
                }
            }
            RecordOutcome::Error { id, message, .. } => Self {
                record_id: id,
                data: EntityCategories::default(),
                errors: Some(vec![ErrorMessage { message }]),
            },
        }
    }
}

/// Batch response for the grouped endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordsEntitiesByTypeResponse {
    /// Results in the same order and count as the input values
    pub values: Vec<RecordEntitiesByType>,
}
