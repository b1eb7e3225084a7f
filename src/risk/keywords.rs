//! Canonical keyword taxonomy
//!
//! Triggers are matched as case-insensitive substrings, not whole words, so
//! "stress" also fires on "stressed". Sets may overlap in content; the
//! classifier's priority order decides which tier wins.

use super::RiskLevel;

// ── Keyword sets ────────────────────────────────────────────

static EMERGENCY_KEYWORDS: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "end my life",
    "take my own life",
    "hurt myself",
    "harm myself",
    "self-harm",
    "self harm",
    "want to die",
    "better off dead",
    "no point living",
    "no reason to live",
];

static HIGH_KEYWORDS: &[&str] = &[
    "depressed",
    "depression",
    "hopeless",
    "worthless",
    "panic attack",
    "substance",
    "drugs",
    "alcohol",
    "cutting",
    "severe anxiety",
    "can't cope",
    "cannot cope",
    "can't go on",
];

// "anxiety" alone routes to medium; only "severe anxiety" is high.
static MEDIUM_KEYWORDS: &[&str] = &[
    "anxious",
    "anxiety",
    "stressed",
    "stress",
    "overwhelmed",
    "sad",
    "lonely",
    "insomnia",
    "sleep problems",
    "can't sleep",
    "crying",
    "worried",
    "nervous",
];

/// Lower-cased substring triggers for a single risk level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    level: RiskLevel,
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Build a set, normalizing every keyword to trimmed lower case.
    ///
    /// Blank keywords are dropped: an empty trigger would match every text.
    pub fn new<I, S>(level: RiskLevel, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            level,
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn level(&self) -> RiskLevel {
        self.level
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Expects `lowered` to be lower-cased already
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    /// First keyword contained in `lowered`, if any
    pub fn first_match(&self, lowered: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| lowered.contains(k.as_str()))
            .map(String::as_str)
    }
}

/// Trigger sets for every level above `Low`
///
/// `Low` has no triggers: it is what a message falls through to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTaxonomy {
    emergency: KeywordSet,
    high: KeywordSet,
    medium: KeywordSet,
}

impl KeywordTaxonomy {
    pub fn new(emergency: KeywordSet, high: KeywordSet, medium: KeywordSet) -> Self {
        Self {
            emergency: KeywordSet { level: RiskLevel::Emergency, ..emergency },
            high: KeywordSet { level: RiskLevel::High, ..high },
            medium: KeywordSet { level: RiskLevel::Medium, ..medium },
        }
    }

    /// The reviewed taxonomy shipped with the crate
    pub fn builtin() -> Self {
        Self {
            emergency: KeywordSet::new(RiskLevel::Emergency, EMERGENCY_KEYWORDS),
            high: KeywordSet::new(RiskLevel::High, HIGH_KEYWORDS),
            medium: KeywordSet::new(RiskLevel::Medium, MEDIUM_KEYWORDS),
        }
    }

    /// Sets in evaluation order, most severe first
    pub fn by_priority(&self) -> [&KeywordSet; 3] {
        [&self.emergency, &self.high, &self.medium]
    }

    pub fn set(&self, level: RiskLevel) -> Option<&KeywordSet> {
        match level {
            RiskLevel::Emergency => Some(&self.emergency),
            RiskLevel::High => Some(&self.high),
            RiskLevel::Medium => Some(&self.medium),
            RiskLevel::Low => None,
        }
    }
}

impl Default for KeywordTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keywords_are_normalized() {
        let taxonomy = KeywordTaxonomy::builtin();
        for set in taxonomy.by_priority() {
            assert!(!set.is_empty());
            for keyword in set.keywords() {
                assert_eq!(keyword, &keyword.trim().to_lowercase());
                assert!(!keyword.is_empty());
            }
        }
    }

    #[test]
    fn test_priority_order() {
        let taxonomy = KeywordTaxonomy::builtin();
        let levels: Vec<_> = taxonomy.by_priority().iter().map(|s| s.level()).collect();
        assert_eq!(
            levels,
            vec![RiskLevel::Emergency, RiskLevel::High, RiskLevel::Medium]
        );
        assert!(taxonomy.set(RiskLevel::Low).is_none());
    }

    #[test]
    fn test_new_normalizes_and_forces_levels() {
        let taxonomy = KeywordTaxonomy::new(
            KeywordSet::new(RiskLevel::Low, ["  Crisis "]),
            KeywordSet::new(RiskLevel::Low, ["Bad"]),
            KeywordSet::new(RiskLevel::Low, ["Meh"]),
        );
        let emergency = taxonomy.set(RiskLevel::Emergency).unwrap();
        assert_eq!(emergency.level(), RiskLevel::Emergency);
        assert_eq!(emergency.keywords(), &["crisis".to_string()]);
        assert_eq!(taxonomy.set(RiskLevel::Medium).unwrap().level(), RiskLevel::Medium);
    }

    #[test]
    fn test_blank_keywords_dropped() {
        let set = KeywordSet::new(RiskLevel::Medium, ["  ", "", "Sad"]);
        assert_eq!(set.keywords(), &["sad".to_string()]);
        assert!(!set.matches(""));

        let blank_only = KeywordSet::new(RiskLevel::Medium, ["  "]);
        assert!(blank_only.is_empty());
        assert!(!blank_only.matches("anything at all"));
    }

    #[test]
    fn test_substring_not_whole_word() {
        let set = KeywordSet::new(RiskLevel::Medium, ["stress"]);
        assert!(set.matches("i'm so stressed out"));
        assert_eq!(set.first_match("distressing week"), Some("stress"));
        assert!(!set.matches("all good"));
    }
}
