//! Document analysis orchestration
//!
//! `ComplianceChecker` ties the passes together: rule-based matching
//! per framework, PII detection, optional AI violation and insight
//! passes, and final scoring. Framework checks run concurrently; AI
//! chunk calls within a framework run in order. Every AI failure
//! degrades the result instead of failing the analysis.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use compliance_types::{summarize_violations, AiInsights, AnalysisResult, Framework, Violation};
use futures::future::join_all;
use tracing::{info, warn};

use crate::ai::AiAnalyzer;
use crate::chunker::chunk_text;
use crate::config::AnalysisConfig;
use crate::error::EngineError;
use crate::matcher;
use crate::pii::PiiDetector;
use crate::rules::RULE_REGISTRY;
use crate::scoring::calculate_compliance_score;

/// Document prefix handed to the insights pass.
const INSIGHT_EXCERPT_CHARS: usize = 2000;

/// Analyzes documents against the configured frameworks.
pub struct ComplianceChecker {
    config: AnalysisConfig,
    pii_detector: PiiDetector,
    ai: Option<Arc<dyn AiAnalyzer>>,
}

impl ComplianceChecker {
    /// Checker with pattern-based PII detection and no AI analyzer.
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            pii_detector: PiiDetector::new(),
            ai: None,
        }
    }

    /// Attach an AI analyzer. The AI passes still only run when the
    /// config enables them.
    pub fn with_ai(mut self, analyzer: Arc<dyn AiAnalyzer>) -> Self {
        self.ai = Some(analyzer);
        self
    }

    /// Replace the default PII detector, typically to add a
    /// recognizer backend.
    pub fn with_pii_detector(mut self, detector: PiiDetector) -> Self {
        self.pii_detector = detector;
        self
    }

    /// Whether the attached AI analyzer reports itself usable.
    /// False when no analyzer is attached or AI passes are disabled.
    pub async fn ai_healthy(&self) -> bool {
        match self.ai_analyzer() {
            Some(analyzer) => analyzer.healthy().await,
            None => false,
        }
    }

    /// Run the full analysis over one document.
    ///
    /// Returns an error only for input the engine cannot work with.
    /// AI and recognizer failures are downgraded to log warnings and
    /// reflected in the result instead.
    pub async fn analyze_document(&self, text: &str) -> Result<AnalysisResult, EngineError> {
        if text.trim().is_empty() {
            return Err(EngineError::EmptyDocument);
        }

        info!(
            chars = text.chars().count(),
            frameworks = self.config.frameworks.len(),
            "starting compliance analysis"
        );

        // Chunked once, shared by every framework's AI pass.
        let chunks = if self.ai_enabled() {
            chunk_text(text, self.config.chunk_max_len, self.config.chunk_overlap)
        } else {
            Vec::new()
        };

        let checks = self.config.frameworks.iter().map(|&framework| {
            let chunks = &chunks;
            async move { (framework, self.check_framework(text, framework, chunks).await) }
        });

        let mut violations: BTreeMap<Framework, Vec<Violation>> = BTreeMap::new();
        for (framework, found) in join_all(checks).await {
            violations.insert(framework, found);
        }

        let pii_entities = if self.config.include_pii {
            self.pii_detector.detect(text)
        } else {
            Vec::new()
        };

        let ai_insights = if self.ai_enabled() {
            Some(self.gather_insights(text, &violations).await)
        } else {
            None
        };

        let overall_score =
            calculate_compliance_score(&violations, &pii_entities, ai_insights.as_ref());

        info!(
            total_violations = violations.values().map(Vec::len).sum::<usize>(),
            pii_entities = pii_entities.len(),
            score = overall_score,
            "analysis complete"
        );

        Ok(AnalysisResult {
            violations,
            pii_entities,
            ai_insights,
            overall_score,
            analysis_timestamp: Utc::now(),
        })
    }

    /// Rule-based findings first, AI findings appended after.
    async fn check_framework(
        &self,
        text: &str,
        framework: Framework,
        chunks: &[String],
    ) -> Vec<Violation> {
        let rules = RULE_REGISTRY.rules_for(framework);
        let mut violations = matcher::check_framework(text, rules);

        if let Some(analyzer) = self.ai_analyzer() {
            violations.extend(self.ai_framework_pass(analyzer, framework, chunks).await);
        }

        violations
    }

    async fn ai_framework_pass(
        &self,
        analyzer: &dyn AiAnalyzer,
        framework: Framework,
        chunks: &[String],
    ) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (index, chunk) in chunks.iter().enumerate() {
            let call = analyzer.detect_violations(chunk, framework);
            match tokio::time::timeout(self.config.ai_timeout, call).await {
                Ok(Ok(found)) => {
                    violations.extend(
                        found
                            .into_iter()
                            .map(|v| v.into_violation(framework, index)),
                    );
                }
                Ok(Err(err)) => {
                    warn!(
                        %framework,
                        chunk = index + 1,
                        error = %err,
                        "AI violation pass failed, continuing with rule-based results"
                    );
                }
                Err(_) => {
                    warn!(
                        %framework,
                        chunk = index + 1,
                        timeout_secs = self.config.ai_timeout.as_secs(),
                        "AI violation pass timed out, continuing with rule-based results"
                    );
                }
            }
        }

        violations
    }

    async fn gather_insights(
        &self,
        text: &str,
        violations: &BTreeMap<Framework, Vec<Violation>>,
    ) -> AiInsights {
        let Some(analyzer) = self.ai_analyzer() else {
            return AiInsights::unavailable();
        };

        let excerpt: String = text.chars().take(INSIGHT_EXCERPT_CHARS).collect();
        let summary = summarize_violations(violations);

        let call = analyzer.summarize_insights(&excerpt, &summary);
        match tokio::time::timeout(self.config.ai_timeout, call).await {
            Ok(Ok(insights)) => insights,
            Ok(Err(err)) => {
                warn!(error = %err, "AI insights pass failed, using fallback");
                AiInsights::unavailable()
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.config.ai_timeout.as_secs(),
                    "AI insights pass timed out, using fallback"
                );
                AiInsights::unavailable()
            }
        }
    }

    fn ai_enabled(&self) -> bool {
        self.config.include_ai_analysis && self.ai.is_some()
    }

    fn ai_analyzer(&self) -> Option<&dyn AiAnalyzer> {
        if self.config.include_ai_analysis {
            self.ai.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AiViolation;
    use async_trait::async_trait;

    struct SingleFindingAnalyzer;

    #[async_trait]
    impl AiAnalyzer for SingleFindingAnalyzer {
        async fn detect_violations(
            &self,
            _chunk: &str,
            _framework: Framework,
        ) -> anyhow::Result<Vec<AiViolation>> {
            Ok(vec![AiViolation::default()])
        }

        async fn summarize_insights(
            &self,
            _excerpt: &str,
            _violation_summary: &str,
        ) -> anyhow::Result<AiInsights> {
            Ok(AiInsights {
                summary: "Reviewed".to_string(),
                ..AiInsights::unavailable()
            })
        }
    }

    #[tokio::test]
    async fn test_empty_document_rejected() {
        let checker = ComplianceChecker::new(AnalysisConfig::default().without_ai());
        let result = checker.analyze_document("   \n\t  ").await;
        assert!(matches!(result, Err(EngineError::EmptyDocument)));
    }

    #[tokio::test]
    async fn test_rule_only_analysis() {
        let config = AnalysisConfig::default()
            .with_frameworks(vec![Framework::Gdpr])
            .without_ai();
        let checker = ComplianceChecker::new(config);

        let result = checker
            .analyze_document("We collect personal data from users.")
            .await
            .unwrap();

        let gdpr = &result.violations[&Framework::Gdpr];
        assert!(gdpr
            .iter()
            .any(|v| v.violation_type == "Missing Consent Mechanism"));
        assert!(result.ai_insights.is_none());
        assert!(result.pii_entities.is_empty());
        assert!(result.overall_score < 100);
    }

    #[tokio::test]
    async fn test_ai_findings_follow_rule_findings() {
        let config = AnalysisConfig::default().with_frameworks(vec![Framework::Gdpr]);
        let checker =
            ComplianceChecker::new(config).with_ai(Arc::new(SingleFindingAnalyzer));

        let result = checker
            .analyze_document("We collect personal data from users.")
            .await
            .unwrap();

        let gdpr = &result.violations[&Framework::Gdpr];
        let last = gdpr.last().unwrap();
        assert_eq!(last.location, "Chunk 1");
        assert_eq!(last.violation_type, "AI-Detected Violation");
        assert!(gdpr[0].location.starts_with("Position"));
        assert_eq!(result.ai_insights.as_ref().unwrap().summary, "Reviewed");
    }

    #[tokio::test]
    async fn test_config_disables_attached_analyzer() {
        let config = AnalysisConfig::default()
            .with_frameworks(vec![Framework::Gdpr])
            .without_ai();
        let checker =
            ComplianceChecker::new(config).with_ai(Arc::new(SingleFindingAnalyzer));

        let result = checker
            .analyze_document("We collect personal data from users.")
            .await
            .unwrap();

        assert!(result.ai_insights.is_none());
        assert!(!checker.ai_healthy().await);
        let gdpr = &result.violations[&Framework::Gdpr];
        assert!(gdpr.iter().all(|v| !v.location.starts_with("Chunk")));
    }

    #[tokio::test]
    async fn test_ai_healthy_with_analyzer() {
        let checker = ComplianceChecker::new(AnalysisConfig::default())
            .with_ai(Arc::new(SingleFindingAnalyzer));
        assert!(checker.ai_healthy().await);
    }
}
