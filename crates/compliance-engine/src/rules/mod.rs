//! Framework rule catalogs
//!
//! Each framework ships a static catalog of rule categories. A category
//! carries required keyword groups (any one phrase satisfies a group) and
//! detection patterns. A pattern may set `unless_after`: a guard regex that
//! suppresses a hit when it matches between the hit and the end of its
//! line. That is how "X mentioned without Y nearby" rules are written.
//!
//! Catalogs compile once, at first use, into [`RULE_REGISTRY`]. A pattern
//! that fails to compile is logged and skipped; the rest of its category
//! still applies.

pub mod gdpr;
pub mod hipaa;
pub mod rbi;
pub mod soc2;

use compliance_types::Framework;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Static definition of one detection pattern
#[derive(Debug)]
pub struct PatternDef {
    pub violation_type: &'static str,
    /// Positive trigger, compiled case-insensitive
    pub regex: &'static str,
    /// Suppression guard checked against the rest of the matched line
    pub unless_after: Option<&'static str>,
    pub description: &'static str,
    /// Free-form severity, normalized when a violation is built
    pub severity: &'static str,
    pub recommendation: &'static str,
}

/// Static definition of one rule category
#[derive(Debug)]
pub struct CategoryDef {
    pub name: &'static str,
    /// Groups of interchangeable phrases; a group is satisfied when any
    /// one of its phrases appears in the document
    pub required_keywords: &'static [&'static [&'static str]],
    pub patterns: &'static [PatternDef],
}

/// A pattern definition with its compiled regexes
pub struct CompiledPattern {
    pub def: &'static PatternDef,
    pub regex: Regex,
    pub guard: Option<Regex>,
}

/// A category with its compiled patterns
pub struct CompiledCategory {
    pub def: &'static CategoryDef,
    pub patterns: Vec<CompiledPattern>,
}

/// All compiled rules for one framework
pub struct FrameworkRuleSet {
    pub framework: Framework,
    pub categories: Vec<CompiledCategory>,
}

impl FrameworkRuleSet {
    pub fn pattern_count(&self) -> usize {
        self.categories.iter().map(|c| c.patterns.len()).sum()
    }
}

/// Source catalog for a framework
pub fn catalog(framework: Framework) -> &'static [CategoryDef] {
    match framework {
        Framework::Gdpr => gdpr::CATEGORIES,
        Framework::Soc2 => soc2::CATEGORIES,
        Framework::Hipaa => hipaa::CATEGORIES,
        Framework::Rbi => rbi::CATEGORIES,
    }
}

/// Compiled rule sets for every supported framework
pub struct RuleRegistry {
    // Indexed by discriminant; construction follows Framework::all() order
    rule_sets: Vec<FrameworkRuleSet>,
}

impl RuleRegistry {
    fn compile() -> Self {
        let rule_sets = Framework::all()
            .into_iter()
            .map(compile_framework)
            .collect();
        Self { rule_sets }
    }

    pub fn rules_for(&self, framework: Framework) -> &FrameworkRuleSet {
        &self.rule_sets[framework as usize]
    }
}

lazy_static! {
    /// Process-wide compiled rule registry
    pub static ref RULE_REGISTRY: RuleRegistry = RuleRegistry::compile();
}

fn compile_framework(framework: Framework) -> FrameworkRuleSet {
    let categories = catalog(framework)
        .iter()
        .map(|def| CompiledCategory {
            def,
            patterns: def
                .patterns
                .iter()
                .filter_map(|pattern| compile_pattern(framework, pattern))
                .collect(),
        })
        .collect();

    FrameworkRuleSet {
        framework,
        categories,
    }
}

fn compile_pattern(framework: Framework, def: &'static PatternDef) -> Option<CompiledPattern> {
    let regex = match build_rule_regex(def.regex) {
        Ok(regex) => regex,
        Err(error) => {
            warn!(%framework, pattern = def.regex, %error, "skipping rule pattern that failed to compile");
            return None;
        }
    };

    // A broken guard would turn a conditional rule into an unconditional
    // one, so the whole pattern is skipped instead.
    let guard = match def.unless_after {
        Some(raw) => match build_rule_regex(raw) {
            Ok(guard) => Some(guard),
            Err(error) => {
                warn!(%framework, guard = raw, %error, "skipping rule pattern whose guard failed to compile");
                return None;
            }
        },
        None => None,
    };

    Some(CompiledPattern { def, regex, guard })
}

fn build_rule_regex(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
}
