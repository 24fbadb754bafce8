//! Regulatory compliance analysis engine
//!
//! Rule-based violation detection across GDPR, SOC2, HIPAA and RBI,
//! pattern and NER-based PII detection, document chunking for AI
//! passes, and compliance scoring. [`ComplianceChecker`] is the entry
//! point; the AI and NER backends are supplied by the integrator
//! through the [`AiAnalyzer`] and [`EntityRecognizer`] traits.

pub mod ai;
pub mod checker;
pub mod chunker;
pub mod config;
pub mod error;
pub mod matcher;
pub mod pii;
pub mod rules;
pub mod scoring;

pub use ai::{AiAnalyzer, AiViolation};
pub use checker::ComplianceChecker;
pub use chunker::chunk_text;
pub use config::{AnalysisConfig, Sensitivity};
pub use error::EngineError;
pub use pii::{summarize_entities, EntityRecognizer, PiiDetector, RawEntity};
pub use scoring::calculate_compliance_score;

pub use compliance_types::{
    summarize_violations, AiInsights, AnalysisResult, DetectionMethod, Framework, PiiEntity,
    PiiSummary, RiskAssessment, RiskLevel, Severity, Violation,
};
