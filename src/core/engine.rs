//! Assessment engine
//!
//! The rule path of the chat assistant. The AssessmentEngine:
//! 1. Classifies the latest user message
//! 2. Selects suggestions and resources for that level
//! 3. Attaches an escalation when the level is an emergency
//! 4. Optionally wraps it all in a canned assistant reply

use serde::{Deserialize, Serialize};

use crate::conversation::{Conversation, Message};
use crate::response::{fallback_reply, respond};
use crate::risk::{KeywordTaxonomy, RiskClassifier, RiskLevel};

use super::escalation::Escalation;

/// Outcome of assessing a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub risk_level: RiskLevel,
    pub suggestions: Vec<String>,
    pub resources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation: Option<Escalation>,
}

impl Assessment {
    /// Assessment for a known level
    pub fn for_level(risk_level: RiskLevel) -> Self {
        let bundle = respond(risk_level);
        Self {
            risk_level,
            suggestions: bundle.suggestions,
            resources: bundle.resources,
            escalation: Escalation::for_level(risk_level),
        }
    }
}

impl Default for Assessment {
    /// Same as assessing an empty conversation
    fn default() -> Self {
        Self::for_level(RiskLevel::Low)
    }
}

/// Rule-based reply to a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// The assistant's response
    pub message: Message,

    #[serde(flatten)]
    pub assessment: Assessment,
}

/// Stateless engine shared across sessions
#[derive(Debug, Clone, Default)]
pub struct AssessmentEngine {
    classifier: RiskClassifier,
}

impl AssessmentEngine {
    pub fn new(taxonomy: KeywordTaxonomy) -> Self {
        Self {
            classifier: RiskClassifier::new(taxonomy),
        }
    }

    pub fn classifier(&self) -> &RiskClassifier {
        &self.classifier
    }

    /// Assess the latest user message in `messages`
    pub fn assess(&self, messages: &[Message]) -> Assessment {
        let level = self.classifier.classify(messages);

        tracing::debug!(
            risk_level = %level,
            message_count = messages.len(),
            "Assessed conversation"
        );
        if level.requires_escalation() {
            tracing::warn!("Emergency risk detected, escalation attached");
        }

        Assessment::for_level(level)
    }

    /// Produce the rule-path reply for a conversation.
    ///
    /// The conversation is only read; appending the reply is up to the caller.
    pub fn reply(&self, conversation: &Conversation) -> ChatReply {
        let assessment = self.assess(&conversation.messages);
        ChatReply {
            message: Message::assistant(fallback_reply(assessment.risk_level)),
            assessment,
        }
    }
}
