//! RBI rule catalog
//!
//! Reserve Bank of India guidelines: payment data localization,
//! cybersecurity framework requirements, and KYC/AML procedures.

use super::{CategoryDef, PatternDef};

pub const CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "data_localization",
        required_keywords: &[
            &["data localization", "India storage"],
            &["payment data", "financial data"],
            &["local storage", "domestic storage"],
        ],
        patterns: &[
            PatternDef {
                violation_type: "Non-compliant Data Storage",
                regex: r"(?:payment|financial).*data.*stor",
                unless_after: Some(r"India"),
                description: "Payment/financial data storage location not specified as India",
                severity: "high",
                recommendation: "Ensure payment and financial data is stored within India",
            },
            PatternDef {
                violation_type: "Cross-border Data Transfer",
                regex: r"(?:transfer|send).*payment.*data.*(?:overseas|abroad|foreign)",
                unless_after: None,
                description: "Cross-border transfer of payment data",
                severity: "high",
                recommendation: "Comply with RBI data localization requirements",
            },
        ],
    },
    CategoryDef {
        name: "cybersecurity",
        required_keywords: &[
            &["cybersecurity framework", "cyber resilience"],
            &["incident response", "cyber incident"],
            &["risk assessment", "vulnerability assessment"],
        ],
        patterns: &[PatternDef {
            violation_type: "Missing Cybersecurity Framework",
            regex: r"financial.*system",
            unless_after: Some(r"cybersecurity|security.*framework"),
            description: "Financial systems without cybersecurity framework",
            severity: "high",
            recommendation: "Implement comprehensive cybersecurity framework as per RBI guidelines",
        }],
    },
    CategoryDef {
        name: "kyc_aml",
        required_keywords: &[
            &["know your customer", "KYC"],
            &["anti-money laundering", "AML"],
            &["customer due diligence", "CDD"],
        ],
        patterns: &[PatternDef {
            violation_type: "Inadequate KYC Process",
            regex: r"customer.*onboard",
            unless_after: Some(r"KYC|identity.*verification|due.*diligence"),
            description: "Customer onboarding without proper KYC procedures",
            severity: "high",
            recommendation: "Implement comprehensive KYC and AML procedures",
        }],
    },
];
