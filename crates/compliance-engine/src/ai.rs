//! AI analyzer seam
//!
//! The engine never talks to a model directly. Integrators implement
//! [`AiAnalyzer`] over whatever backend they run and hand it to the
//! checker. Analyzer output is treated as untrusted: violation records
//! tolerate missing fields and unknown severity strings rather than
//! failing the analysis.

use async_trait::async_trait;
use compliance_types::{AiInsights, Framework, Severity, Violation};
use serde::Deserialize;

/// One violation reported by an analyzer for a single chunk.
///
/// Every field is optional on the wire. Missing fields take the
/// defaults below, so an empty object still produces a well-formed
/// record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AiViolation {
    pub category: String,
    #[serde(rename = "type")]
    pub violation_type: String,
    pub description: String,
    pub severity: String,
    pub matched_text: String,
    pub recommendation: String,
    pub confidence: f64,
}

impl Default for AiViolation {
    fn default() -> Self {
        Self {
            category: "AI Detection".to_string(),
            violation_type: "AI-Detected Violation".to_string(),
            description: String::new(),
            severity: "medium".to_string(),
            matched_text: String::new(),
            recommendation: String::new(),
            confidence: 0.8,
        }
    }
}

impl AiViolation {
    /// Convert into an engine violation, tagged with the framework
    /// under analysis and the 1-based chunk it came from.
    pub fn into_violation(self, framework: Framework, chunk_index: usize) -> Violation {
        Violation {
            framework,
            category: self.category,
            violation_type: self.violation_type,
            description: self.description,
            severity: Severity::parse_lenient(&self.severity),
            location: format!("Chunk {}", chunk_index + 1),
            matched_text: self.matched_text,
            recommendation: self.recommendation,
            confidence: Some(self.confidence),
        }
    }
}

/// Model-backed analysis capability.
///
/// Both calls are best-effort from the engine's point of view: errors
/// and timeouts degrade the analysis instead of aborting it.
#[async_trait]
pub trait AiAnalyzer: Send + Sync {
    /// Scan one chunk for violations of the given framework.
    async fn detect_violations(
        &self,
        chunk: &str,
        framework: Framework,
    ) -> anyhow::Result<Vec<AiViolation>>;

    /// Produce document-level insights from an excerpt and a one-line
    /// summary of the rule-based findings.
    async fn summarize_insights(
        &self,
        excerpt: &str,
        violation_summary: &str,
    ) -> anyhow::Result<AiInsights>;

    /// Liveness probe. Defaults to healthy for backends with nothing
    /// to check.
    async fn healthy(&self) -> bool {
        true
    }
}
