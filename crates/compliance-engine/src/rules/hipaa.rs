//! HIPAA rule catalog
//!
//! Covers protected health information handling, access controls, and
//! breach notification duties.

use super::{CategoryDef, PatternDef};

pub const CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "protected_health_information",
        required_keywords: &[
            &["protected health information", "PHI"],
            &["covered entity", "business associate"],
            &["minimum necessary", "administrative safeguards"],
        ],
        patterns: &[
            PatternDef {
                violation_type: "Unsecured PHI",
                regex: r"health.*information|medical.*record|PHI",
                unless_after: Some(r"encrypt|secure|protect"),
                description: "Health information mentioned without security measures",
                severity: "high",
                recommendation: "Implement encryption and access controls for PHI",
            },
            PatternDef {
                violation_type: "Missing Business Associate Agreement",
                regex: r"(?:share|disclose|provide).*health.*information.*vendor",
                unless_after: Some(r"agreement"),
                description: "PHI sharing with vendors without BAA",
                severity: "high",
                recommendation: "Ensure Business Associate Agreements are in place",
            },
        ],
    },
    CategoryDef {
        name: "access_controls",
        required_keywords: &[
            &["role-based access", "access controls"],
            &["audit logs", "access monitoring"],
            &["user authentication", "password policy"],
        ],
        patterns: &[PatternDef {
            violation_type: "Weak PHI Access Control",
            regex: r"access.*PHI",
            unless_after: Some(r"role|permission|authorization"),
            description: "PHI access without proper role-based controls",
            severity: "high",
            recommendation: "Implement role-based access controls for PHI",
        }],
    },
    CategoryDef {
        name: "breach_notification",
        required_keywords: &[
            &["breach notification", "incident response"],
            &["72 hours", "breach assessment"],
            &["HHS notification", "patient notification"],
        ],
        patterns: &[PatternDef {
            violation_type: "Missing Breach Procedures",
            regex: r"security.*incident",
            unless_after: Some(r"notification|report|procedure"),
            description: "Security incidents mentioned without notification procedures",
            severity: "medium",
            recommendation: "Establish clear breach notification procedures",
        }],
    },
];
