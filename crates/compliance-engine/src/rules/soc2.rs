//! SOC 2 rule catalog
//!
//! Covers the security, availability, and processing integrity trust
//! service criteria.

use super::{CategoryDef, PatternDef};

pub const CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "security",
        required_keywords: &[
            &["access controls", "authentication"],
            &["encryption", "data encryption"],
            &["vulnerability management", "security monitoring"],
        ],
        patterns: &[
            PatternDef {
                violation_type: "Weak Access Control",
                regex: r"access.*system",
                unless_after: Some(r"authentication|authorization|multi-factor"),
                description: "System access mentioned without proper controls",
                severity: "high",
                recommendation: "Implement strong authentication and authorization controls",
            },
            PatternDef {
                violation_type: "Unencrypted Data Storage",
                regex: r"store.*data",
                unless_after: Some(r"encrypt"),
                description: "Data storage mentioned without encryption",
                severity: "high",
                recommendation: "Implement encryption for data at rest",
            },
        ],
    },
    CategoryDef {
        name: "availability",
        required_keywords: &[
            &["backup", "disaster recovery"],
            &["business continuity", "redundancy"],
            &["uptime", "service level agreement"],
        ],
        patterns: &[PatternDef {
            violation_type: "Missing Backup Strategy",
            regex: r"critical.*data",
            unless_after: Some(r"backup|recovery"),
            description: "Critical data mentioned without backup strategy",
            severity: "medium",
            recommendation: "Implement comprehensive backup and recovery procedures",
        }],
    },
    CategoryDef {
        name: "processing_integrity",
        required_keywords: &[
            &["data validation", "input validation"],
            &["error handling", "exception handling"],
            &["audit trail", "logging"],
        ],
        patterns: &[PatternDef {
            violation_type: "Missing Input Validation",
            regex: r"user.*input",
            unless_after: Some(r"validat|sanitiz|check"),
            description: "User input processing without validation",
            severity: "high",
            recommendation: "Implement comprehensive input validation",
        }],
    },
];
