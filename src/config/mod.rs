//! Application configuration

pub mod taxonomy;

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::conversation::MAX_CONTENT_CHARS;
use crate::risk::KeywordTaxonomy;

pub use taxonomy::{ConfigError, TaxonomyFile};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Longest message content accepted by the HTTP routes
    pub max_message_chars: usize,
    /// Optional TOML file overriding the builtin keyword taxonomy
    pub taxonomy_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            max_message_chars: env::var("MINDWELL_MAX_MESSAGE_CHARS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(MAX_CONTENT_CHARS),
            taxonomy_path: env::var("MINDWELL_TAXONOMY").ok().map(PathBuf::from),
        })
    }

    /// Load the configured taxonomy, falling back to the builtin one
    pub fn load_taxonomy(&self) -> Result<KeywordTaxonomy, ConfigError> {
        match &self.taxonomy_path {
            Some(path) => TaxonomyFile::from_file(path)?.into_taxonomy(),
            None => Ok(KeywordTaxonomy::builtin()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
            max_message_chars: MAX_CONTENT_CHARS,
            taxonomy_path: None,
        }
    }
}
