//! Analysis configuration
//!
//! Defaults cover the common case: every framework, PII detection on,
//! AI passes on when an analyzer is attached. `from_env` overrides
//! individual settings from `COMPLIANCE_*` variables for deployments
//! that configure through the environment.

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use compliance_types::Framework;

use crate::chunker::{DEFAULT_CHUNK_MAX_LEN, DEFAULT_CHUNK_OVERLAP};
use crate::error::EngineError;

/// Detection sensitivity requested by the caller.
///
/// Currently informational. The pattern rules do not branch on it, but
/// analyzer implementations may use it to tune their prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensitivity {
    High,
    Medium,
    Low,
}

impl Sensitivity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// Settings for one document analysis.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Frameworks to check, in the order results are reported.
    pub frameworks: Vec<Framework>,
    pub sensitivity: Sensitivity,
    pub include_pii: bool,
    pub include_ai_analysis: bool,
    /// Maximum chunk length in characters for AI passes.
    pub chunk_max_len: usize,
    /// Character overlap between consecutive chunks.
    pub chunk_overlap: usize,
    /// Budget for each individual analyzer call.
    pub ai_timeout: Duration,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frameworks: Framework::all(),
            sensitivity: Sensitivity::Medium,
            include_pii: true,
            include_ai_analysis: true,
            chunk_max_len: DEFAULT_CHUNK_MAX_LEN,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            ai_timeout: Duration::from_secs(30),
        }
    }
}

impl AnalysisConfig {
    /// Build a config from the environment, starting from defaults.
    ///
    /// Recognized variables:
    /// - `COMPLIANCE_FRAMEWORKS`: comma-separated framework codes
    /// - `COMPLIANCE_SENSITIVITY`: `high`, `medium` or `low`
    /// - `COMPLIANCE_INCLUDE_PII`, `COMPLIANCE_INCLUDE_AI`: booleans
    /// - `COMPLIANCE_AI_TIMEOUT_SECS`: per-call timeout in seconds
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("COMPLIANCE_FRAMEWORKS") {
            let mut frameworks = Vec::new();
            for code in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                let framework = Framework::parse_code(code)
                    .ok_or_else(|| EngineError::UnknownFramework(code.to_string()))?;
                if !frameworks.contains(&framework) {
                    frameworks.push(framework);
                }
            }
            if frameworks.is_empty() {
                return Err(anyhow!("COMPLIANCE_FRAMEWORKS is set but names no frameworks"));
            }
            config.frameworks = frameworks;
        }

        if let Ok(raw) = env::var("COMPLIANCE_SENSITIVITY") {
            config.sensitivity = Sensitivity::parse(&raw)
                .ok_or_else(|| anyhow!("invalid COMPLIANCE_SENSITIVITY: {raw}"))?;
        }

        if let Ok(raw) = env::var("COMPLIANCE_INCLUDE_PII") {
            config.include_pii = parse_bool(&raw)
                .ok_or_else(|| anyhow!("invalid COMPLIANCE_INCLUDE_PII: {raw}"))?;
        }

        if let Ok(raw) = env::var("COMPLIANCE_INCLUDE_AI") {
            config.include_ai_analysis = parse_bool(&raw)
                .ok_or_else(|| anyhow!("invalid COMPLIANCE_INCLUDE_AI: {raw}"))?;
        }

        if let Ok(raw) = env::var("COMPLIANCE_AI_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid COMPLIANCE_AI_TIMEOUT_SECS: {raw}"))?;
            config.ai_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_frameworks(mut self, frameworks: Vec<Framework>) -> Self {
        self.frameworks = frameworks;
        self
    }

    pub fn without_pii(mut self) -> Self {
        self.include_pii = false;
        self
    }

    pub fn without_ai(mut self) -> Self {
        self.include_ai_analysis = false;
        self
    }

    pub fn with_ai_timeout(mut self, timeout: Duration) -> Self {
        self.ai_timeout = timeout;
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_everything() {
        let config = AnalysisConfig::default();
        assert_eq!(config.frameworks, Framework::all());
        assert_eq!(config.sensitivity, Sensitivity::Medium);
        assert!(config.include_pii);
        assert!(config.include_ai_analysis);
        assert_eq!(config.chunk_max_len, DEFAULT_CHUNK_MAX_LEN);
        assert_eq!(config.chunk_overlap, DEFAULT_CHUNK_OVERLAP);
        assert_eq!(config.ai_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_style_overrides() {
        let config = AnalysisConfig::default()
            .with_frameworks(vec![Framework::Gdpr])
            .without_pii()
            .without_ai()
            .with_ai_timeout(Duration::from_secs(5));
        assert_eq!(config.frameworks, vec![Framework::Gdpr]);
        assert!(!config.include_pii);
        assert!(!config.include_ai_analysis);
        assert_eq!(config.ai_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_sensitivity_parsing() {
        assert_eq!(Sensitivity::parse("high"), Some(Sensitivity::High));
        assert_eq!(Sensitivity::parse(" MEDIUM "), Some(Sensitivity::Medium));
        assert_eq!(Sensitivity::parse("Low"), Some(Sensitivity::Low));
        assert_eq!(Sensitivity::parse("extreme"), None);
        assert_eq!(Sensitivity::parse(""), None);
    }

    #[test]
    fn test_bool_parsing() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("No "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
