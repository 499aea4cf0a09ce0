// ⚙️ Match Configuration - Lexicons and thresholds as explicit values
// Passed into the normalizer, variation generator, classifier and engine at
// construction, so several jurisdictions can coexist in one process.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// DEFAULT LEXICONS
// ============================================================================

/// Trailing legal-entity markers that carry no distinguishing signal.
///
/// COMPANY and CO are not suffixes: they often carry the last letter of
/// an acronym ("ONTARIO NUMBERED COMPANY" -> "ONC").
pub const DEFAULT_CORPORATE_SUFFIXES: &[&str] = &[
    "CORP",
    "CORPORATION",
    "INC",
    "INCORPORATED",
    "LTD",
    "LIMITED",
    "LLC",
    "LLP",
    "LP",
    "PLC",
    "HOLDINGS",
    "GROUP",
    "LTEE",
    "GMBH",
];

/// Words skipped when building acronyms
pub const DEFAULT_CONNECTOR_WORDS: &[&str] = &[
    "AND", "OF", "THE", "FOR", "IN", "AT", "ON", "BY", "TO", "WITH", "A", "AN",
];

/// Words that exclude an owner from lookup entirely
pub const DEFAULT_EXCLUDED_WORDS: &[&str] = &["LTD", "LIMITED"];

// ============================================================================
// CONFIG ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("min_substring_ratio must be in (0.0, 1.0], got {0}")]
    InvalidSubstringRatio(f64),

    #[error("corporate suffix lexicon is empty")]
    EmptySuffixLexicon,

    #[error("min_acronym_len must be at least 2, got {0}")]
    AcronymTooShort(usize),
}

// ============================================================================
// MATCH CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Trailing words removed by the suffix-stripped variation (uppercase)
    pub corporate_suffixes: Vec<String>,

    /// Words ignored when computing acronyms (uppercase)
    pub connector_words: Vec<String>,

    /// Whole words that make an owner ineligible for lookup (uppercase)
    pub excluded_words: Vec<String>,

    /// Minimum shorter/longer length ratio for a substring match (default: 0.5)
    pub min_substring_ratio: f64,

    /// Truncated variations shorter than this are not generated (default: 2)
    pub min_variation_len: usize,

    /// Shortest compact form accepted as an acronym (default: 2)
    pub min_acronym_len: usize,

    /// Normalize "&" and "+" to the word AND (default: true)
    pub expand_ampersand: bool,
}

impl MatchConfig {
    /// Ontario registry defaults
    pub fn new() -> Self {
        MatchConfig {
            corporate_suffixes: to_owned_words(DEFAULT_CORPORATE_SUFFIXES),
            connector_words: to_owned_words(DEFAULT_CONNECTOR_WORDS),
            excluded_words: to_owned_words(DEFAULT_EXCLUDED_WORDS),
            min_substring_ratio: 0.5,
            min_variation_len: 2,
            min_acronym_len: 2,
            expand_ampersand: true,
        }
    }

    /// Load config from a JSON file; missing fields fall back to defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: MatchConfig =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;

        config
            .validate()
            .with_context(|| format!("Invalid config in {:?}", path.as_ref()))?;

        Ok(config.uppercased())
    }

    /// Builder-style override of the suffix lexicon (e.g. another jurisdiction)
    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.corporate_suffixes = suffixes
            .into_iter()
            .map(|s| s.into().to_uppercase())
            .collect();
        self
    }

    pub fn with_substring_ratio(mut self, ratio: f64) -> Self {
        self.min_substring_ratio = ratio;
        self
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(self.min_substring_ratio > 0.0 && self.min_substring_ratio <= 1.0) {
            return Err(ConfigError::InvalidSubstringRatio(self.min_substring_ratio));
        }
        if self.corporate_suffixes.is_empty() {
            return Err(ConfigError::EmptySuffixLexicon);
        }
        if self.min_acronym_len < 2 {
            return Err(ConfigError::AcronymTooShort(self.min_acronym_len));
        }
        Ok(())
    }

    pub fn is_suffix(&self, word: &str) -> bool {
        self.corporate_suffixes.iter().any(|s| s == word)
    }

    pub fn is_connector(&self, word: &str) -> bool {
        self.connector_words.iter().any(|c| c == word)
    }

    pub fn is_excluded_word(&self, word: &str) -> bool {
        self.excluded_words.iter().any(|e| e == word)
    }

    // Lexicons compare against normalized (uppercase) words
    fn uppercased(mut self) -> Self {
        for list in [
            &mut self.corporate_suffixes,
            &mut self.connector_words,
            &mut self.excluded_words,
        ] {
            for word in list.iter_mut() {
                *word = word.trim().to_uppercase();
            }
        }
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn to_owned_words(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ============================================================================
// TESTS
// ============================================================================
