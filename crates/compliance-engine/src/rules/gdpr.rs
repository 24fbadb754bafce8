//! GDPR rule catalog
//!
//! Covers data protection basics, data subject rights, and international
//! transfer safeguards.

use super::{CategoryDef, PatternDef};

pub const CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "data_protection",
        required_keywords: &[
            &["data protection", "personal data"],
            &["lawful basis", "legitimate interest", "consent"],
            &["data subject rights", "right to erasure", "right to rectification"],
        ],
        patterns: &[
            PatternDef {
                violation_type: "Missing Consent Mechanism",
                regex: r"collect.*personal.*data",
                unless_after: Some(r"consent"),
                description: "Personal data collection mentioned without consent mechanism",
                severity: "high",
                recommendation: "Add clear consent mechanism for personal data collection",
            },
            PatternDef {
                violation_type: "Vague Data Processing Purpose",
                regex: r"process.*data.*for.*business.*purposes?",
                unless_after: Some(r"specific"),
                description: "Data processing purpose is too vague",
                severity: "medium",
                recommendation: "Specify exact purposes for data processing",
            },
            PatternDef {
                violation_type: "Missing Data Retention Policy",
                regex: r"retain.*data",
                unless_after: Some(r"period|time|duration"),
                description: "Data retention mentioned without specific timeframe",
                severity: "medium",
                recommendation: "Specify data retention periods",
            },
        ],
    },
    CategoryDef {
        name: "privacy_rights",
        required_keywords: &[
            &["right to access", "data portability"],
            &["data protection officer", "DPO"],
            &["privacy by design", "privacy by default"],
        ],
        patterns: &[PatternDef {
            violation_type: "Missing Subject Rights",
            regex: r"personal.*data",
            unless_after: Some(r"right to access|right to erasure|right to rectification"),
            description: "Personal data mentioned without subject rights",
            severity: "high",
            recommendation: "Include comprehensive data subject rights information",
        }],
    },
    CategoryDef {
        name: "international_transfers",
        required_keywords: &[
            &["adequate protection", "standard contractual clauses"],
            &["third country", "international transfer"],
        ],
        patterns: &[PatternDef {
            violation_type: "Unprotected International Transfer",
            regex: r"(?:transfer|share|send).*data.*(?:outside|abroad|international)",
            unless_after: Some(r"adequate|protection|safeguards"),
            description: "International data transfer without adequate protection",
            severity: "high",
            recommendation: "Implement adequate safeguards for international transfers",
        }],
    },
];
