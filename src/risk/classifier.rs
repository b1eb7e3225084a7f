//! Priority-ordered keyword classifier

use std::sync::LazyLock;

use crate::conversation::{last_user_message, Message};

use super::keywords::KeywordTaxonomy;
use super::RiskLevel;

static BUILTIN: LazyLock<RiskClassifier> = LazyLock::new(RiskClassifier::default);

/// Classify a conversation with the builtin taxonomy.
///
/// Only the last `user` message is considered; with none, the effective text
/// is empty and the result is `Low`.
pub fn classify(messages: &[Message]) -> RiskLevel {
    BUILTIN.classify(messages)
}

/// Keyword classifier over a fixed taxonomy
///
/// Stateless after construction, so one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct RiskClassifier {
    taxonomy: KeywordTaxonomy,
}

impl RiskClassifier {
    pub fn new(taxonomy: KeywordTaxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn taxonomy(&self) -> &KeywordTaxonomy {
        &self.taxonomy
    }

    /// Classify the most recent user message in `messages`
    pub fn classify(&self, messages: &[Message]) -> RiskLevel {
        let text = last_user_message(messages)
            .map(|m| m.content.as_str())
            .unwrap_or("");
        self.classify_text(text)
    }

    /// Classify a single utterance.
    ///
    /// Sets are checked most severe first and the first hit wins, so severity
    /// dominates regardless of how many lower-tier keywords also match.
    pub fn classify_text(&self, text: &str) -> RiskLevel {
        let lowered = normalize(text);
        self.taxonomy
            .by_priority()
            .into_iter()
            .find(|set| set.matches(&lowered))
            .map(|set| set.level())
            .unwrap_or(RiskLevel::Low)
    }

    /// The keyword that decided the level, if any
    pub fn matched_keyword<'a>(&'a self, text: &str) -> Option<(RiskLevel, &'a str)> {
        let lowered = normalize(text);
        self.taxonomy
            .by_priority()
            .into_iter()
            .find_map(|set| set.first_match(&lowered).map(|k| (set.level(), k)))
    }
}

/// Lower-case and fold typographic apostrophes so "can’t" matches "can't"
fn normalize(text: &str) -> String {
    text.to_lowercase().replace(['\u{2018}', '\u{2019}'], "'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::KeywordSet;

    fn user(content: &str) -> Vec<Message> {
        vec![Message::user(content)]
    }

    #[test]
    fn test_example_scenarios() {
        assert_eq!(classify(&user("I'm feeling anxious about exams")), RiskLevel::Medium);
        assert_eq!(classify(&user("I want to kill myself")), RiskLevel::Emergency);
        assert_eq!(
            classify(&user("I feel a bit overwhelmed but also want to kill myself")),
            RiskLevel::Emergency
        );
        assert_eq!(classify(&user("Just saying hello")), RiskLevel::Low);
    }

    #[test]
    fn test_default_behavior() {
        assert_eq!(classify(&[]), RiskLevel::Low);
        assert_eq!(classify(&[Message::assistant("hi")]), RiskLevel::Low);
        assert_eq!(classify(&[Message::system("suicide prevention prompt")]), RiskLevel::Low);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify(&user("I want to DIE")), RiskLevel::Emergency);
        assert_eq!(classify(&user("i want to die")), RiskLevel::Emergency);
        assert_eq!(classify(&user("So STRESSED")), RiskLevel::Medium);
    }

    #[test]
    fn test_priority_short_circuits() {
        assert_eq!(
            classify(&user("sad and lonely and worried, feeling hopeless")),
            RiskLevel::High
        );
        assert_eq!(
            classify(&user("depressed, anxious, and I think about suicide")),
            RiskLevel::Emergency
        );
        assert_eq!(classify(&user("severe anxiety before every exam")), RiskLevel::High);
    }

    #[test]
    fn test_last_user_message_rule() {
        let mut messages = user("I want to end my life");
        assert_eq!(classify(&messages), RiskLevel::Emergency);

        // Trailing assistant reply does not change the result
        messages.push(Message::assistant("I'm here. You are not alone. Feeling sad is ok."));
        assert_eq!(classify(&messages), RiskLevel::Emergency);

        // A new user message is evaluated on its own
        messages.push(Message::user("thanks, I called my sister and feel calmer"));
        assert_eq!(classify(&messages), RiskLevel::Low);
    }

    #[test]
    fn test_deterministic() {
        let messages = vec![
            Message::user("I can't sleep"),
            Message::assistant("Tell me more"),
            Message::user("I've been crying a lot and feel worthless"),
        ];
        let first = classify(&messages);
        for _ in 0..10 {
            assert_eq!(classify(&messages), first);
        }
        assert_eq!(first, RiskLevel::High);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let messages = user("Feeling Overwhelmed");
        let before = messages.clone();
        classify(&messages);
        assert_eq!(messages, before);
    }

    #[test]
    fn test_typographic_apostrophe() {
        assert_eq!(classify(&user("I can\u{2019}t cope anymore")), RiskLevel::High);
    }

    #[test]
    fn test_custom_taxonomy() {
        let classifier = RiskClassifier::new(KeywordTaxonomy::new(
            KeywordSet::new(RiskLevel::Emergency, ["red"]),
            KeywordSet::new(RiskLevel::High, ["orange"]),
            KeywordSet::new(RiskLevel::Medium, ["yellow", "red"]),
        ));
        assert_eq!(classifier.classify_text("YELLOW"), RiskLevel::Medium);
        assert_eq!(classifier.classify_text("yellow then red"), RiskLevel::Emergency);
        assert_eq!(classifier.classify_text("I want to kill myself"), RiskLevel::Low);
    }

    #[test]
    fn test_blank_keyword_taxonomy_keeps_empty_input_low() {
        let classifier = RiskClassifier::new(KeywordTaxonomy::new(
            KeywordSet::new(RiskLevel::Emergency, ["suicide", " "]),
            KeywordSet::new(RiskLevel::High, ["hopeless"]),
            KeywordSet::new(RiskLevel::Medium, ["  "]),
        ));
        assert_eq!(classifier.classify(&[]), RiskLevel::Low);
        assert_eq!(classifier.classify(&[Message::assistant("hi")]), RiskLevel::Low);
        assert_eq!(classifier.classify(&user("Just saying hello")), RiskLevel::Low);
        assert_eq!(classifier.classify(&user("thinking about suicide")), RiskLevel::Emergency);
    }

    #[test]
    fn test_matched_keyword() {
        let classifier = RiskClassifier::default();
        assert_eq!(
            classifier.matched_keyword("Panic attack again"),
            Some((RiskLevel::High, "panic attack"))
        );
        assert_eq!(classifier.matched_keyword("hello"), None);
    }

    #[test]
    fn test_long_input_is_matched_in_full() {
        let text = format!("{} self-harm", "a".repeat(5000));
        assert_eq!(classify(&user(&text)), RiskLevel::Emergency);
    }
}
