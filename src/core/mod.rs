//! Core triage components
//!
//! Ties the classifier, the response tables and escalation together into the
//! assistant's rule path.

mod engine;
mod escalation;

pub use engine::{Assessment, AssessmentEngine, ChatReply};
pub use escalation::{EmergencyContact, Escalation};
