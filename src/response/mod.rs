//! Response selection
//!
//! Maps a [`RiskLevel`] to the suggestions and support resources shown to the
//! student. A pure table lookup: the same level always yields the same bundle.

mod tables;

use serde::{Deserialize, Serialize};

use crate::risk::RiskLevel;

use tables::*;

/// Ordered suggestion and resource lists for one risk level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBundle {
    pub suggestions: Vec<String>,
    pub resources: Vec<String>,
}

impl ResponseBundle {
    fn from_tables(suggestions: &[&str], resources: &[&str]) -> Self {
        Self {
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            resources: resources.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Select the response bundle for a level
pub fn respond(level: RiskLevel) -> ResponseBundle {
    ResponseBundle::from_tables(suggestions(level), resources(level))
}

/// Suggestions for a level, in display order
pub fn suggestions(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Low => LOW_SUGGESTIONS,
        RiskLevel::Medium => MEDIUM_SUGGESTIONS,
        RiskLevel::High => HIGH_SUGGESTIONS,
        RiskLevel::Emergency => EMERGENCY_SUGGESTIONS,
    }
}

/// Resources for a level, in display order
///
/// `Low` and `Medium` share the baseline list; higher levels extend it.
pub fn resources(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Low | RiskLevel::Medium => BASE_RESOURCES,
        RiskLevel::High => HIGH_RESOURCES,
        RiskLevel::Emergency => EMERGENCY_RESOURCES,
    }
}

/// Canned assistant reply used when no model-generated text is available
pub fn fallback_reply(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => LOW_REPLY,
        RiskLevel::Medium => MEDIUM_REPLY,
        RiskLevel::High => HIGH_REPLY,
        RiskLevel::Emergency => EMERGENCY_REPLY,
    }
}
