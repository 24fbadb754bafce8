//! Rule matching against document text
//!
//! Applies a compiled rule category: regex patterns produce one violation
//! per surviving hit, keyword groups produce one document-wide violation
//! listing every group with no phrase present.

use compliance_types::{Framework, Severity, Violation};

use crate::rules::{CompiledCategory, CompiledPattern, FrameworkRuleSet};

const CONTEXT_CHARS: usize = 100;

/// A raw regex hit with its surrounding context
#[derive(Debug, Clone, PartialEq)]
pub struct PatternMatch {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub context: String,
}

/// Run every category of a framework's rule set against the text
pub fn check_framework(text: &str, rules: &FrameworkRuleSet) -> Vec<Violation> {
    let mut violations = Vec::new();
    for category in &rules.categories {
        violations.extend(check_category(text, rules.framework, category));
    }
    violations
}

/// Run one rule category against the text
pub fn check_category(
    text: &str,
    framework: Framework,
    category: &CompiledCategory,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for pattern in &category.patterns {
        for hit in find_pattern_matches(text, pattern) {
            violations.push(Violation {
                framework,
                category: category.def.name.to_string(),
                violation_type: pattern.def.violation_type.to_string(),
                description: pattern.def.description.to_string(),
                severity: Severity::parse_lenient(pattern.def.severity),
                location: format!("Position {}-{}", hit.start, hit.end),
                matched_text: hit.text,
                recommendation: pattern.def.recommendation.to_string(),
                confidence: None,
            });
        }
    }

    let missing: Vec<String> = category
        .def
        .required_keywords
        .iter()
        .filter(|group| !keyword_group_present(text, group))
        .map(|group| group.join("/"))
        .collect();

    if !missing.is_empty() {
        violations.push(Violation {
            framework,
            category: category.def.name.to_string(),
            violation_type: "Missing Required Content".to_string(),
            description: format!("Missing required keywords/phrases: {}", missing.join(", ")),
            severity: Severity::Medium,
            location: "Document-wide".to_string(),
            matched_text: String::new(),
            recommendation: "Add required compliance statements and disclosures".to_string(),
            confidence: None,
        });
    }

    violations
}

/// All hits for one pattern, minus those its guard suppresses
pub fn find_pattern_matches(text: &str, pattern: &CompiledPattern) -> Vec<PatternMatch> {
    let mut matches = Vec::new();

    for m in pattern.regex.find_iter(text) {
        if let Some(guard) = &pattern.guard {
            if guard.is_match(rest_of_line(text, m.end())) {
                continue;
            }
        }
        matches.push(PatternMatch {
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
            context: extract_context(text, m.start(), m.end()),
        });
    }

    matches
}

/// True if any phrase in the group appears in the text (case-insensitive)
pub fn keyword_group_present(text: &str, group: &[&str]) -> bool {
    let text_lower = text.to_lowercase();
    group
        .iter()
        .any(|phrase| text_lower.contains(&phrase.to_lowercase()))
}

/// Text from `from` to the end of its line
fn rest_of_line(text: &str, from: usize) -> &str {
    let rest = &text[from..];
    match rest.find('\n') {
        Some(newline) => &rest[..newline],
        None => rest,
    }
}

/// Surrounding context for a match, ellipsized when truncated
fn extract_context(text: &str, start: usize, end: usize) -> String {
    let mut ctx_start = start.saturating_sub(CONTEXT_CHARS);
    while !text.is_char_boundary(ctx_start) {
        ctx_start -= 1;
    }
    let mut ctx_end = (end + CONTEXT_CHARS).min(text.len());
    while !text.is_char_boundary(ctx_end) {
        ctx_end += 1;
    }

    let mut context = String::new();
    if ctx_start > 0 {
        context.push_str("...");
    }
    context.push_str(&text[ctx_start..ctx_end]);
    if ctx_end < text.len() {
        context.push_str("...");
    }
    context.trim().to_string()
}
