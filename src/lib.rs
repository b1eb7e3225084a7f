//! Mindwell - risk triage for a student wellness companion
//!
//! Classifies a student's latest chat message into a risk tier and selects
//! the supportive suggestions, resources and emergency escalation that go
//! with it.
//!
//! ```
//! use mindwell::conversation::Message;
//! use mindwell::risk::{classify, RiskLevel};
//! use mindwell::response::respond;
//!
//! let level = classify(&[Message::user("I'm feeling anxious about exams")]);
//! assert_eq!(level, RiskLevel::Medium);
//! assert!(!respond(level).resources.is_empty());
//! ```

pub mod config;
pub mod conversation;
pub mod core;
pub mod response;
pub mod risk;
pub mod routes;

pub use crate::core::{Assessment, AssessmentEngine, ChatReply, Escalation};
pub use conversation::{Conversation, Message, Role};
pub use response::{respond, ResponseBundle};
pub use risk::{classify, RiskLevel};
