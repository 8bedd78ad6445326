//! The closed entity label taxonomy and its output category mapping.

use serde::{Deserialize, Serialize};

/// Entity labels a recognizer can assign, following the OntoNotes tag set.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    /// Numerals that do not fall under another type (e.g., "three", "1,200")
    Cardinal,
    /// Absolute or relative dates or periods (e.g., "January 15, 2024")
    Date,
    /// Named hurricanes, battles, wars, sports events (e.g., "the Olympics")
    Event,
    /// Buildings, airports, highways, bridges (e.g., "Golden Gate Bridge")
    Fac,
    /// Countries, cities, states (e.g., "France", "New York")
    Gpe,
    /// Any named language (e.g., "Mandarin")
    Language,
    /// Named documents made into laws (e.g., "the Civil Rights Act")
    Law,
    /// Non-GPE locations, mountain ranges, bodies of water (e.g., "the Alps")
    Loc,
    /// Monetary values, including unit (e.g., "$100")
    Money,
    /// Nationalities or religious or political groups (e.g., "Buddhist")
    Norp,
    /// Ordinal numbers (e.g., "first", "3rd")
    Ordinal,
    /// Companies, agencies, institutions (e.g., "Harvard University")
    Org,
    /// Percentages (e.g., "25%")
    Percent,
    /// People, including fictional (e.g., "John Smith")
    Person,
    /// Objects, vehicles, foods, not services (e.g., "iPhone")
    Product,
    /// Measurements, as of weight or distance (e.g., "30 kilometers")
    Quantity,
    /// Times smaller than a day (e.g., "3:30 PM")
    Time,
    /// Titles of books, songs, paintings (e.g., "Mona Lisa")
    WorkOfArt,
}

impl EntityLabel {
    /// Every label in the taxonomy, in stable order.
    pub const ALL: [EntityLabel; 18] = [
        EntityLabel::Cardinal,
        EntityLabel::Date,
        EntityLabel::Event,
        EntityLabel::Fac,
        EntityLabel::Gpe,
        EntityLabel::Language,
        EntityLabel::Law,
        EntityLabel::Loc,
        EntityLabel::Money,
        EntityLabel::Norp,
        EntityLabel::Ordinal,
        EntityLabel::Org,
        EntityLabel::Percent,
        EntityLabel::Person,
        EntityLabel::Product,
        EntityLabel::Quantity,
        EntityLabel::Time,
        EntityLabel::WorkOfArt,
    ];

    /// Get the tag-set string representation of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Cardinal => "CARDINAL",
            EntityLabel::Date => "DATE",
            EntityLabel::Event => "EVENT",
            EntityLabel::Fac => "FAC",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Language => "LANGUAGE",
            EntityLabel::Law => "LAW",
            EntityLabel::Loc => "LOC",
            EntityLabel::Money => "MONEY",
            EntityLabel::Norp => "NORP",
            EntityLabel::Ordinal => "ORDINAL",
            EntityLabel::Org => "ORG",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Person => "PERSON",
            EntityLabel::Product => "PRODUCT",
            EntityLabel::Quantity => "QUANTITY",
            EntityLabel::Time => "TIME",
            EntityLabel::WorkOfArt => "WORK_OF_ART",
        }
    }

    /// Parse a raw tag string as produced by a recognizer.
    ///
    /// Returns `None` for labels outside the taxonomy; callers decide whether
    /// that is a data-quality signal worth surfacing.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "CARDINAL" => Some(EntityLabel::Cardinal),
            "DATE" => Some(EntityLabel::Date),
            "EVENT" => Some(EntityLabel::Event),
            "FAC" => Some(EntityLabel::Fac),
            "GPE" => Some(EntityLabel::Gpe),
            "LANGUAGE" => Some(EntityLabel::Language),
            "LAW" => Some(EntityLabel::Law),
            "LOC" => Some(EntityLabel::Loc),
            "MONEY" => Some(EntityLabel::Money),
            "NORP" => Some(EntityLabel::Norp),
            "ORDINAL" => Some(EntityLabel::Ordinal),
            "ORG" => Some(EntityLabel::Org),
            "PERCENT" => Some(EntityLabel::Percent),
            "PERSON" => Some(EntityLabel::Person),
            "PRODUCT" => Some(EntityLabel::Product),
            "QUANTITY" => Some(EntityLabel::Quantity),
            "TIME" => Some(EntityLabel::Time),
            "WORK_OF_ART" => Some(EntityLabel::WorkOfArt),
            _ => None,
        }
    }

    /// Get the output field name this label maps to in grouped responses.
    ///
    /// These names are the wire contract consumed by downstream skillset
    /// definitions and must not change, spelling included.
    pub fn category_field(&self) -> &'static str {
        match self {
            EntityLabel::Cardinal => "cardinals",
            EntityLabel::Date => "dates",
            EntityLabel::Event => "events",
            EntityLabel::Fac => "facilities",
            EntityLabel::Gpe => "gpes",
            EntityLabel::Language => "languages",
            EntityLabel::Law => "laws",
            EntityLabel::Loc => "locations",
            EntityLabel::Money => "money",
            EntityLabel::Norp => "norps",
            EntityLabel::Ordinal => "ordinals",
            EntityLabel::Org => "organizations",
            EntityLabel::Percent => "percentages",
            EntityLabel::Person => "people",
            EntityLabel::Product => "products",
            EntityLabel::Quantity => "quanities",
            EntityLabel::Time => "times",
            EntityLabel::WorkOfArt => "worksOfArt",
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
