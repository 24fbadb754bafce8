use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::framework::Framework;

/// Severity of a compliance finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Normalize a free-form severity string into one of the three levels.
    ///
    /// Rule catalogs and AI payloads use varying vocabularies; this is the
    /// single place they are reconciled. Unrecognized input maps to `Medium`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" | "critical" => Severity::High,
            "medium" | "warning" => Severity::Medium,
            "low" | "info" => Severity::Low,
            _ => Severity::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How a PII entity was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionMethod {
    #[serde(rename = "NER")]
    Ner,
    Pattern,
}

impl DetectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::Ner => "NER",
            DetectionMethod::Pattern => "Pattern",
        }
    }
}

/// A single compliance finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub framework: Framework,
    /// Rule category within the framework (e.g. "data_protection")
    pub category: String,
    #[serde(rename = "type")]
    pub violation_type: String,
    pub description: String,
    pub severity: Severity,
    /// "Position {start}-{end}" for pattern hits, "Chunk {n}" for AI hits,
    /// "Document-wide" for missing-content findings
    pub location: String,
    /// Exact text that triggered the finding; empty for document-wide findings
    pub matched_text: String,
    pub recommendation: String,
    /// Present only on AI-sourced findings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// A detected piece of personally identifiable information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiiEntity {
    pub text: String,
    /// Normalized label, e.g. "EMAIL", "SSN", "PERSON_NAME"
    pub label: String,
    /// Byte offset of the entity in the analyzed text
    pub start: usize,
    pub end: usize,
    pub confidence: f64,
    pub detection_method: DetectionMethod,
}

impl PiiEntity {
    /// Overlap test on half-open spans [start, end)
    pub fn overlaps(&self, other: &PiiEntity) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// Coarse risk classification used by AI insights and the PII summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(alias = "high")]
    High,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "low")]
    Low,
    #[serde(other)]
    Unknown,
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Unknown
    }
}

/// Risk verdict from the AI reviewer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub explanation: String,
}

/// Insight payload from the AI reviewer.
///
/// Every field defaults so a partial or malformed payload still
/// deserializes; the reviewer is an untrusted data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiInsights {
    pub summary: String,
    pub risk_assessment: RiskAssessment,
    pub recommendations: Vec<String>,
    pub compliance_gaps: Vec<String>,
    pub strengths: Vec<String>,
}

impl AiInsights {
    /// Fixed fallback used when the reviewer fails or times out
    pub fn unavailable() -> Self {
        AiInsights {
            summary: "AI analysis unavailable".to_string(),
            risk_assessment: RiskAssessment {
                level: RiskLevel::Unknown,
                explanation: "Analysis failed".to_string(),
            },
            recommendations: vec!["Review document manually for compliance".to_string()],
            compliance_gaps: Vec::new(),
            strengths: Vec::new(),
        }
    }
}

/// Summary statistics over a deduplicated PII entity set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiiSummary {
    pub total_entities: usize,
    /// Labels in first-seen order
    pub types_found: Vec<String>,
    pub type_counts: BTreeMap<String, usize>,
    /// Entities with confidence >= 0.8
    pub high_confidence_count: usize,
    pub risk_level: RiskLevel,
}

/// Full result of one document analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Violations keyed by framework, in canonical framework order
    pub violations: BTreeMap<Framework, Vec<Violation>>,
    pub pii_entities: Vec<PiiEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<AiInsights>,
    /// Compliance score from 0 (worst) to 100 (clean)
    pub overall_score: u8,
    pub analysis_timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn total_violations(&self) -> usize {
        self.violations.values().map(Vec::len).sum()
    }

    pub fn violation_summary(&self) -> String {
        summarize_violations(&self.violations)
    }
}

/// Render per-framework violation counts, e.g.
/// "GDPR: 3 violations (1 high severity); HIPAA: 1 violations (0 high severity)"
pub fn summarize_violations(violations: &BTreeMap<Framework, Vec<Violation>>) -> String {
    let parts: Vec<String> = violations
        .iter()
        .filter(|(_, found)| !found.is_empty())
        .map(|(framework, found)| {
            let high = found
                .iter()
                .filter(|v| v.severity == Severity::High)
                .count();
            format!(
                "{}: {} violations ({} high severity)",
                framework,
                found.len(),
                high
            )
        })
        .collect();

    if parts.is_empty() {
        "No violations detected".to_string()
    } else {
        parts.join("; ")
    }
}
