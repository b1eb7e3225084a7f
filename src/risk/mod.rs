//! Risk triage for user messages
//!
//! Assigns a severity tier to the latest user utterance by keyword matching.
//! Everything in here is pure: no I/O, no logging, no shared mutable state.

mod classifier;
mod keywords;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use classifier::{classify, RiskClassifier};
pub use keywords::{KeywordSet, KeywordTaxonomy};

/// Severity tier of a user's latest message, ordered `Low < Medium < High < Emergency`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Emergency,
}

impl RiskLevel {
    /// All levels in ascending severity
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Emergency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Emergency => "emergency",
        }
    }

    /// Whether the caller must surface an immediate-contact affordance
    pub fn requires_escalation(&self) -> bool {
        matches!(self, RiskLevel::Emergency)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown risk level: {0}")]
pub struct ParseRiskLevelError(String);

impl FromStr for RiskLevel {
    type Err = ParseRiskLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            "emergency" => Ok(RiskLevel::Emergency),
            _ => Err(ParseRiskLevelError(s.to_string())),
        }
    }
}
