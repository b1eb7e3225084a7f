//! Keyword taxonomy loaded from TOML files
//!
//! Deployments can replace the builtin taxonomy after clinical review.
//!
//! # Example Taxonomy File
//!
//! ```toml
//! [emergency]
//! keywords = ["suicide", "kill myself"]
//!
//! [high]
//! keywords = ["hopeless", "panic attack"]
//!
//! [medium]
//! keywords = ["anxious", "stressed"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::risk::{KeywordSet, KeywordTaxonomy, RiskLevel};

/// Root of a taxonomy file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyFile {
    pub emergency: KeywordTable,
    pub high: KeywordTable,
    pub medium: KeywordTable,
}

/// Triggers for a single level
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordTable {
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl TaxonomyFile {
    /// Load a taxonomy from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a taxonomy from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let file: TaxonomyFile = toml::from_str(content)?;
        Ok(file)
    }

    /// Validate and normalize into a taxonomy the classifier can use
    pub fn into_taxonomy(self) -> Result<KeywordTaxonomy, ConfigError> {
        let emergency = validated(RiskLevel::Emergency, self.emergency)?;
        let high = validated(RiskLevel::High, self.high)?;
        let medium = validated(RiskLevel::Medium, self.medium)?;
        Ok(KeywordTaxonomy::new(emergency, high, medium))
    }
}

fn validated(level: RiskLevel, table: KeywordTable) -> Result<KeywordSet, ConfigError> {
    if table.keywords.is_empty() {
        return Err(ConfigError::Validation(format!(
            "{} keyword set is empty",
            level
        )));
    }
    if table.keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(ConfigError::Validation(format!(
            "{} keyword set contains a blank keyword",
            level
        )));
    }
    Ok(KeywordSet::new(level, table.keywords))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}
