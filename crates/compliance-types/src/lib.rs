pub mod framework;
pub mod types;

pub use framework::Framework;
pub use types::{
    summarize_violations, AiInsights, AnalysisResult, DetectionMethod, PiiEntity, PiiSummary,
    RiskAssessment, RiskLevel, Severity, Violation,
};
