//! Compliance score calculation
//!
//! The score starts at 100 and loses points for every violation and
//! detected PII entity. An AI risk assessment, when present, caps the
//! score from above but never raises it. The result is clamped to
//! 0..=100.

use std::collections::BTreeMap;

use compliance_types::{AiInsights, Framework, PiiEntity, RiskLevel, Severity, Violation};

/// PII labels that carry the steepest deduction when detected with
/// high confidence.
pub const HIGH_RISK_PII_LABELS: &[&str] = &["SSN", "CREDIT_CARD", "PASSPORT", "DRIVER_LICENSE"];

/// Deductions: 15 per high, 8 per medium, 3 per low severity
/// violation. PII costs 10 for a high-risk label above 0.8 confidence,
/// 5 above 0.7 confidence, 2 otherwise. A High AI risk assessment caps
/// the score at 60, Medium at 80.
pub fn calculate_compliance_score(
    violations: &BTreeMap<Framework, Vec<Violation>>,
    pii_entities: &[PiiEntity],
    ai_insights: Option<&AiInsights>,
) -> u8 {
    let mut score: i32 = 100;

    for violation in violations.values().flatten() {
        score -= match violation.severity {
            Severity::High => 15,
            Severity::Medium => 8,
            Severity::Low => 3,
        };
    }

    for entity in pii_entities {
        let high_risk = HIGH_RISK_PII_LABELS.contains(&entity.label.to_uppercase().as_str());
        if high_risk && entity.confidence > 0.8 {
            score -= 10;
        } else if entity.confidence > 0.7 {
            score -= 5;
        } else {
            score -= 2;
        }
    }

    if let Some(insights) = ai_insights {
        match insights.risk_assessment.level {
            RiskLevel::High => score = score.min(60),
            RiskLevel::Medium => score = score.min(80),
            RiskLevel::Low | RiskLevel::Unknown => {}
        }
    }

    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use compliance_types::{DetectionMethod, RiskAssessment};

    fn violation(severity: Severity) -> Violation {
        Violation {
            framework: Framework::Gdpr,
            category: "data_protection".to_string(),
            violation_type: "Test".to_string(),
            description: String::new(),
            severity,
            location: String::new(),
            matched_text: String::new(),
            recommendation: String::new(),
            confidence: None,
        }
    }

    fn entity(label: &str, confidence: f64) -> PiiEntity {
        PiiEntity {
            text: "x".to_string(),
            label: label.to_string(),
            start: 0,
            end: 1,
            confidence,
            detection_method: DetectionMethod::Pattern,
        }
    }

    fn insights(level: RiskLevel) -> AiInsights {
        AiInsights {
            summary: String::new(),
            risk_assessment: RiskAssessment {
                level,
                explanation: String::new(),
            },
            recommendations: Vec::new(),
            compliance_gaps: Vec::new(),
            strengths: Vec::new(),
        }
    }

    #[test]
    fn test_clean_document_scores_100() {
        let score = calculate_compliance_score(&BTreeMap::new(), &[], None);
        assert_eq!(score, 100);
    }

    #[test]
    fn test_severity_deductions() {
        let mut violations = BTreeMap::new();
        violations.insert(
            Framework::Gdpr,
            vec![
                violation(Severity::High),
                violation(Severity::Medium),
                violation(Severity::Low),
            ],
        );
        let score = calculate_compliance_score(&violations, &[], None);
        assert_eq!(score, 100 - 15 - 8 - 3);
    }

    #[test]
    fn test_pii_deductions() {
        let entities = vec![
            entity("SSN", 0.95),
            entity("EMAIL", 0.95),
            entity("BANK_ACCOUNT", 0.50),
        ];
        let score = calculate_compliance_score(&BTreeMap::new(), &entities, None);
        assert_eq!(score, 100 - 10 - 5 - 2);
    }

    #[test]
    fn test_high_risk_label_is_case_insensitive() {
        let entities = vec![entity("ssn", 0.9)];
        let score = calculate_compliance_score(&BTreeMap::new(), &entities, None);
        assert_eq!(score, 90);
    }

    #[test]
    fn test_high_risk_deduction_needs_strictly_higher_confidence() {
        // Exactly 0.8 falls through to the mid tier.
        let entities = vec![entity("CREDIT_CARD", 0.8)];
        let score = calculate_compliance_score(&BTreeMap::new(), &entities, None);
        assert_eq!(score, 95);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let mut violations = BTreeMap::new();
        violations.insert(
            Framework::Gdpr,
            (0..10).map(|_| violation(Severity::High)).collect::<Vec<_>>(),
        );
        let score = calculate_compliance_score(&violations, &[], None);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_ai_risk_caps() {
        let score =
            calculate_compliance_score(&BTreeMap::new(), &[], Some(&insights(RiskLevel::High)));
        assert_eq!(score, 60);

        let score =
            calculate_compliance_score(&BTreeMap::new(), &[], Some(&insights(RiskLevel::Medium)));
        assert_eq!(score, 80);
    }

    #[test]
    fn test_cap_never_raises_a_low_score() {
        let mut violations = BTreeMap::new();
        violations.insert(
            Framework::Gdpr,
            (0..4).map(|_| violation(Severity::High)).collect::<Vec<_>>(),
        );
        // 100 - 60 = 40, below the Medium cap of 80.
        let score =
            calculate_compliance_score(&violations, &[], Some(&insights(RiskLevel::Medium)));
        assert_eq!(score, 40);
    }

    #[test]
    fn test_low_and_unknown_risk_do_not_cap() {
        let score =
            calculate_compliance_score(&BTreeMap::new(), &[], Some(&insights(RiskLevel::Low)));
        assert_eq!(score, 100);

        let score =
            calculate_compliance_score(&BTreeMap::new(), &[], Some(&insights(RiskLevel::Unknown)));
        assert_eq!(score, 100);
    }
}
