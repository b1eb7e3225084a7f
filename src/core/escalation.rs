//! Emergency escalation
//!
//! Builds the immediate-contact affordance a caller shows when a message is
//! classified as an emergency. This module only describes the contacts; the
//! dialer or alert lives in the UI.

use serde::{Deserialize, Serialize};

use crate::risk::RiskLevel;

/// A number the student can call straight away
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub label: String,
    pub number: String,
    /// `tel:` URI suitable for a dialer link
    pub uri: String,
}

impl EmergencyContact {
    pub fn new(label: impl Into<String>, number: impl Into<String>) -> Self {
        let number = number.into();
        Self {
            label: label.into(),
            uri: format!("tel:{}", number),
            number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Escalation {
    pub level: RiskLevel,
    pub contacts: Vec<EmergencyContact>,
}

impl Escalation {
    /// Escalation for `level`, or `None` when no immediate contact is needed
    pub fn for_level(level: RiskLevel) -> Option<Self> {
        if !level.requires_escalation() {
            return None;
        }

        Some(Self {
            level,
            contacts: vec![EmergencyContact::new("Nigeria emergency services", "112")],
        })
    }
}
