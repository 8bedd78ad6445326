//! Deterministic pattern-based entity recognizer.

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use super::lexicon;
use super::{EntityMention, Recognizer, RecognizerConfig};
use crate::labels::EntityLabel;
use crate::{MentioError, Result};

const MONEY_PATTERN: &str = r"\$\d{1,3}(?:,\d{3})*(?:\.\d{1,2})?(?:\s(?:million|billion|trillion))?|€\d{1,3}(?:,\d{3})*(?:\.\d{1,2})?|£\d{1,3}(?:,\d{3})*(?:\.\d{1,2})?|¥\d{1,3}(?:,\d{3})*(?:\.\d{1,2})?|\b\d{1,3}(?:,\d{3})*(?:\.\d{1,2})?\s?(?:USD|EUR|GBP|JPY|dollars?|euros?|yen|cents?)\b";

const PERCENT_PATTERN: &str = r"\b\d+(?:\.\d+)?(?:\s?%|\s?percent\b|\s?per cent\b)";

const TIME_PATTERN: &str = r"\b(?:[01]?\d|2[0-3]):[0-5]\d(?::[0-5]\d)?(?:\s?(?:AM|PM|am|pm))?\b(?:\s?(?:a\.m\.|p\.m\.))?|\b(?:[1-9]|1[0-2])\s?(?:AM|PM|am|pm)\b|\b(?:[1-9]|1[0-2])\s?o'clock\b|\b(?:noon|midnight)\b";

const DATE_PATTERN: &str = r"\b(?:0?[1-9]|1[0-2])[/\-.](?:0?[1-9]|[12]\d|3[01])[/\-.](?:19|20)\d{2}\b|\b(?:19|20)\d{2}[/\-.](?:0?[1-9]|1[0-2])[/\-.](?:0?[1-9]|[12]\d|3[01])\b|\b(?:January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sept|Sep|Oct|Nov|Dec)\.?\s+(?:0?[1-9]|[12]\d|3[01])(?:st|nd|rd|th)?(?:,\s*(?:19|20)\d{2})?\b|\b(?:0?[1-9]|[12]\d|3[01])(?:st|nd|rd|th)?\s+of\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)(?:\s+(?:19|20)\d{2})?\b|\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+(?:19|20)\d{2}\b|\b(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)\b|\b(?:today|tomorrow|yesterday)\b|\b(?:19|20)\d{2}\b";

const ORDINAL_PATTERN: &str = r"\b\d+(?:st|nd|rd|th)\b|\b(?i:first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth|eleventh|twelfth|twentieth|fiftieth|hundredth)\b";

const QUANTITY_PATTERN: &str = r"\b\d+(?:\.\d+)?\s?(?:kilograms?|kilometers?|kilometres?|milligrams?|grams?|tonnes?|tons?|ounces?|centimeters?|millimeters?|meters?|metres?|miles?|yards?|feet|foot|inches|inch|liters?|litres?|gallons?|acres?|hectares?|degrees?|kg|km|cm|mm|mg|ml|oz|lbs?|ft|mph|kph)\b";

const CARDINAL_PATTERN: &str = r"\b\d{1,3}(?:,\d{3})+(?:\.\d+)?\b|\b\d+(?:\.\d+)?\b|\b(?i:one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen|twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety|hundred|thousand|million|billion|trillion|dozens?|hundreds|thousands|millions|billions)\b";

const PERSON_TITLE_PATTERN: &str = r"\b(?:Mr|Mrs|Ms|Dr|Prof|Professor|President|Senator|Governor|Mayor|Judge|Justice|Sir|Dame|Lady|Lord|Captain|Colonel|General|Admiral|Pope|Queen|King|Prince|Princess|Chancellor|Ambassador)\.?\s+([A-Z][a-zA-Z'-]+(?:\s+[A-Z][a-zA-Z'-]+){0,2})\b";

const ORG_SUFFIX_PATTERN: &str = r"\b(?:[A-Z][A-Za-z&'-]*\s+){1,4}(?:Inc\.|Corp\.|Co\.|Ltd\.|(?:Inc|Corp|Ltd|LLC|PLC|Incorporated|Corporation|Company|Limited|Group|Holdings|Industries|Technologies|Systems|Airlines|Airways|Motors|University|College|Institute|Academy|Laboratories|Labs|Bank|Ministry|Department|Agency|Authority|Commission|Committee|Council|Association|Federation|Foundation|Society|Party)\b)";

const LOC_SUFFIX_PATTERN: &str = r"\b(?:[A-Z][a-z]+\s+){1,3}(?:River|Mountains|Mountain|Valley|Desert|Ocean|Sea|Bay|Gulf|Islands|Island|Peninsula|Plateau|Canyon|Falls|Forest|Coast|Delta)\b|\b(?:Mount|Lake|Cape)\s+[A-Z][a-z]+\b";

const FAC_SUFFIX_PATTERN: &str = r"\b(?:[A-Z][a-z]+\s+){1,3}(?:Airport|Bridge|Stadium|Arena|Tower|Station|Museum|Library|Hospital|Palace|Castle|Cathedral|Temple|Mosque|Dam|Tunnel|Harbor|Harbour|Plaza|Theater|Theatre|Hotel)\b";

const EVENT_SUFFIX_PATTERN: &str = r"\b(?:[A-Z][a-z]+\s+){1,3}(?:War|Revolution|Olympics|Festival|Summit|Conference|Championship|Marathon|Expo)\b|\b(?:Hurricane|Typhoon|Cyclone)\s+[A-Z][a-z]+\b";

const LAW_SUFFIX_PATTERN: &str = r"\b(?:[A-Z][a-z]+\s+){1,4}(?:Act|Treaty|Amendment|Accords|Accord|Protocol|Convention|Declaration|Statute)\b";

const WORK_QUOTED_PATTERN: &str = "\"([A-Z][^\".!?\\n]{1,60})\"|“([A-Z][^”.!?\\n]{1,60})”";

/// One compiled detector: a pattern that proposes candidate spans for a label.
#[derive(Debug)]
struct Detector {
    label: EntityLabel,
    regex: Regex,
    /// Take the first capture group instead of the whole match
    captures: bool,
}

/// A candidate span before overlap resolution.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    label: EntityLabel,
    start: usize,
    end: usize,
}

impl Candidate {
    fn len(&self) -> usize {
        self.end - self.start
    }

    fn overlaps(&self, other: &Candidate) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Whether this candidate wins an overlap against `other`.
    fn beats(&self, other: &Candidate) -> bool {
        let (own, theirs) = (label_priority(self.label), label_priority(other.label));
        own > theirs || (own == theirs && self.len() > other.len())
    }
}

/// Priority used to settle overlapping candidate spans. More specific
/// families outrank generic ones; CARDINAL is the fallback for bare numbers.
fn label_priority(label: EntityLabel) -> u8 {
    match label {
        EntityLabel::Money => 100,
        EntityLabel::Percent => 95,
        EntityLabel::Time => 90,
        EntityLabel::Date => 85,
        EntityLabel::Quantity => 80,
        EntityLabel::Ordinal => 75,
        EntityLabel::WorkOfArt => 74,
        EntityLabel::Event => 72,
        EntityLabel::Law => 70,
        EntityLabel::Fac => 68,
        EntityLabel::Org => 66,
        EntityLabel::Person => 64,
        EntityLabel::Loc => 62,
        EntityLabel::Gpe => 60,
        EntityLabel::Norp => 55,
        EntityLabel::Language => 50,
        EntityLabel::Product => 45,
        EntityLabel::Cardinal => 20,
    }
}

/// Deterministic pattern-based recognizer covering the full label taxonomy.
///
/// All patterns and lexicons are compiled up front; construction fails with
/// a configuration error rather than deferring the failure into request
/// handling. The instance is immutable afterwards and safe to share.
#[derive(Debug)]
pub struct PatternRecognizer {
    name: String,
    config: RecognizerConfig,
    detectors: Vec<Detector>,
}

impl PatternRecognizer {
    /// Create a recognizer with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(RecognizerConfig::default())
    }

    /// Create a recognizer with the given configuration.
    pub fn with_config(config: RecognizerConfig) -> Result<Self> {
        let given_name_pattern = format!(
            "{}(?:\\s+[A-Z][a-zA-Z'-]+){{1,2}}\\b",
            lexicon::alternation(lexicon::GIVEN_NAMES)
        );

        let detectors = vec![
            Self::whole(EntityLabel::Money, MONEY_PATTERN)?,
            Self::whole(EntityLabel::Percent, PERCENT_PATTERN)?,
            Self::whole(EntityLabel::Time, TIME_PATTERN)?,
            Self::whole(EntityLabel::Date, DATE_PATTERN)?,
            Self::whole(EntityLabel::Ordinal, ORDINAL_PATTERN)?,
            Self::whole(EntityLabel::Quantity, QUANTITY_PATTERN)?,
            Self::whole(EntityLabel::Cardinal, CARDINAL_PATTERN)?,
            Self::capture(EntityLabel::Person, PERSON_TITLE_PATTERN)?,
            Self::whole(EntityLabel::Person, &given_name_pattern)?,
            Self::whole(EntityLabel::Org, ORG_SUFFIX_PATTERN)?,
            Self::whole(EntityLabel::Org, &lexicon::alternation(lexicon::ORG))?,
            Self::whole(EntityLabel::Gpe, &lexicon::alternation(lexicon::GPE))?,
            Self::whole(EntityLabel::Loc, LOC_SUFFIX_PATTERN)?,
            Self::whole(EntityLabel::Loc, &lexicon::alternation(lexicon::LOC))?,
            Self::whole(EntityLabel::Fac, FAC_SUFFIX_PATTERN)?,
            Self::whole(EntityLabel::Fac, &lexicon::alternation(lexicon::FAC))?,
            Self::whole(EntityLabel::Norp, &lexicon::alternation(lexicon::NORP))?,
            Self::whole(EntityLabel::Language, &lexicon::alternation(lexicon::LANGUAGE))?,
            Self::whole(EntityLabel::Event, EVENT_SUFFIX_PATTERN)?,
            Self::whole(EntityLabel::Event, &lexicon::alternation(lexicon::EVENT))?,
            Self::whole(EntityLabel::Law, LAW_SUFFIX_PATTERN)?,
            Self::whole(EntityLabel::Law, &lexicon::alternation(lexicon::LAW))?,
            Self::whole(EntityLabel::Product, &lexicon::alternation(lexicon::PRODUCT))?,
            Self::capture(EntityLabel::WorkOfArt, WORK_QUOTED_PATTERN)?,
            Self::whole(EntityLabel::WorkOfArt, &lexicon::alternation(lexicon::WORK_OF_ART))?,
        ];

        debug!(detectors = detectors.len(), "pattern recognizer ready");

        Ok(Self {
            name: "pattern".to_string(),
            config,
            detectors,
        })
    }

    fn whole(label: EntityLabel, pattern: &str) -> Result<Detector> {
        Ok(Detector {
            label,
            regex: Self::compile(label, pattern)?,
            captures: false,
        })
    }

    fn capture(label: EntityLabel, pattern: &str) -> Result<Detector> {
        Ok(Detector {
            label,
            regex: Self::compile(label, pattern)?,
            captures: true,
        })
    }

    fn compile(label: EntityLabel, pattern: &str) -> Result<Regex> {
        Regex::new(pattern)
            .map_err(|e| MentioError::Configuration(format!("invalid {label} pattern: {e}")))
    }

    fn collect_candidates(&self, text: &str) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        for detector in &self.detectors {
            if detector.captures {
                for caps in detector.regex.captures_iter(text) {
                    // First populated group carries the span of interest
                    if let Some(m) = (1..caps.len()).find_map(|i| caps.get(i)) {
                        candidates.push(Candidate {
                            label: detector.label,
                            start: m.start(),
                            end: m.end(),
                        });
                    }
                }
            } else {
                for m in detector.regex.find_iter(text) {
                    candidates.push(Candidate {
                        label: detector.label,
                        start: m.start(),
                        end: m.end(),
                    });
                }
            }
        }
        candidates
    }

    /// Remove overlapping candidates, keeping the higher-priority (then
    /// longer) span. Equal candidates keep the first seen, which also
    /// deduplicates spans proposed by more than one detector.
    fn resolve_overlaps(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates.sort_by_key(|c| (c.start, std::cmp::Reverse(c.end), c.label));

        let mut result: Vec<Candidate> = Vec::new();
        for candidate in candidates {
            let mut should_add = true;
            let mut indices_to_remove = Vec::new();

            for (idx, existing) in result.iter().enumerate() {
                if candidate.overlaps(existing) {
                    if candidate.beats(existing) {
                        indices_to_remove.push(idx);
                    } else {
                        should_add = false;
                        break;
                    }
                }
            }

            for &idx in indices_to_remove.iter().rev() {
                result.remove(idx);
            }

            if should_add {
                result.push(candidate);
            }
        }

        result
    }
}

#[async_trait]
impl Recognizer for PatternRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<EntityMention>> {
        if text.len() > self.config.max_text_len {
            return Err(MentioError::Extraction(format!(
                "text length {} exceeds maximum {}",
                text.len(),
                self.config.max_text_len
            )));
        }

        if text.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self.collect_candidates(text);
        let mut resolved = Self::resolve_overlaps(candidates);
        resolved.sort_by_key(|c| c.start);

        Ok(resolved
            .into_iter()
            .map(|c| EntityMention::new(&text[c.start..c.end], c.label, c.start, c.end))
            .collect())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn supported_labels(&self) -> Vec<EntityLabel> {
        EntityLabel::ALL.to_vec()
    }
}
