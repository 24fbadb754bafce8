//! PII detection
//!
//! Two passes over the document text: an optional named-entity
//! recognizer supplied by the integrator, and the built-in regex
//! pattern table. Candidates from both are merged and deduplicated
//! into a non-overlapping entity list.

pub mod dedup;
pub mod patterns;
pub mod validators;

use std::collections::BTreeMap;
use std::sync::Arc;

use compliance_types::{DetectionMethod, PiiEntity, PiiSummary, RiskLevel};
use tracing::warn;

pub use dedup::deduplicate_entities;
pub use patterns::detect_with_patterns;

/// Confidence assigned to recognizer entities, which carry no score of
/// their own.
pub const NER_CONFIDENCE: f64 = 0.85;

/// Recognizer labels considered PII-relevant. Everything else is
/// dropped before normalization.
pub const PII_RELEVANT_LABELS: &[&str] = &[
    "PERSON", "ORG", "GPE", "DATE", "TIME", "MONEY", "PERCENT", "CARDINAL", "ORDINAL",
];

/// A span produced by an entity recognizer, carrying the recognizer's
/// native label.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntity {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
}

/// Named-entity recognition backend.
///
/// Implementations wrap whatever model the integrator runs in-process.
/// Errors are not fatal to an analysis: detection falls back to the
/// pattern pass alone.
pub trait EntityRecognizer: Send + Sync {
    fn extract_entities(&self, text: &str) -> anyhow::Result<Vec<RawEntity>>;
}

/// Map recognizer-native labels onto the labels used by the rest of
/// the engine. Unrecognized labels pass through unchanged.
pub fn normalize_label(label: &str) -> String {
    match label {
        "PERSON" => "PERSON_NAME".to_string(),
        "ORG" => "ORGANIZATION".to_string(),
        "GPE" => "LOCATION".to_string(),
        "DATE" => "DATE".to_string(),
        "TIME" => "TIME".to_string(),
        "MONEY" | "PERCENT" => "FINANCIAL".to_string(),
        "CARDINAL" | "ORDINAL" => "NUMBER".to_string(),
        other => other.to_string(),
    }
}

/// Combined NER plus pattern detector.
pub struct PiiDetector {
    recognizer: Option<Arc<dyn EntityRecognizer>>,
}

impl PiiDetector {
    /// Pattern-only detector.
    pub fn new() -> Self {
        Self { recognizer: None }
    }

    /// Detector backed by a named-entity recognizer in addition to the
    /// pattern table.
    pub fn with_recognizer(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            recognizer: Some(recognizer),
        }
    }

    /// Run both passes and resolve overlaps.
    ///
    /// Recognizer entities are merged ahead of pattern candidates, so
    /// on an exact tie of span and confidence the recognizer wins.
    pub fn detect(&self, text: &str) -> Vec<PiiEntity> {
        let mut entities = self.recognizer_entities(text);
        entities.extend(detect_with_patterns(text));
        deduplicate_entities(entities)
    }

    fn recognizer_entities(&self, text: &str) -> Vec<PiiEntity> {
        let Some(recognizer) = &self.recognizer else {
            return Vec::new();
        };

        let raw = match recognizer.extract_entities(text) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    error = %err,
                    "entity recognizer failed, falling back to pattern matching only"
                );
                return Vec::new();
            }
        };

        raw.into_iter()
            .filter(|e| PII_RELEVANT_LABELS.contains(&e.label.as_str()))
            .map(|e| PiiEntity {
                text: e.text,
                label: normalize_label(&e.label),
                start: e.start,
                end: e.end,
                confidence: NER_CONFIDENCE,
                detection_method: DetectionMethod::Ner,
            })
            .collect()
    }
}

impl Default for PiiDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate a deduplicated entity list into a summary with a coarse
/// risk level.
pub fn summarize_entities(entities: &[PiiEntity]) -> PiiSummary {
    let mut types_found: Vec<String> = Vec::new();
    let mut type_counts: BTreeMap<String, usize> = BTreeMap::new();

    for entity in entities {
        if !type_counts.contains_key(&entity.label) {
            types_found.push(entity.label.clone());
        }
        *type_counts.entry(entity.label.clone()).or_insert(0) += 1;
    }

    let total_entities = entities.len();
    let high_confidence_count = entities.iter().filter(|e| e.confidence >= 0.8).count();

    let risk_level = if total_entities >= 10 || high_confidence_count >= 5 {
        RiskLevel::High
    } else if total_entities >= 5 || high_confidence_count >= 2 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    PiiSummary {
        total_entities,
        types_found,
        type_counts,
        high_confidence_count,
        risk_level,
    }
}
