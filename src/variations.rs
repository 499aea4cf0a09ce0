// 🔀 Variation Generator - Plausible alternate renderings of a name
//
// Registry search UIs abbreviate, truncate and drop legal suffixes, so one
// normalized name expands into a small set of strings:
//
//   "MTD PRODUCTS LIMITED"
//     full        → MTD PRODUCTS LIMITED
//     stripped    → MTD PRODUCTS
//     acronym     → MP
//     truncations → MTD PRODUCTS, MTD
//
// Members are only ever added, so the full name is always in its own set.

use crate::config::MatchConfig;
use crate::normalizer::NormalizedName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// VARIATION SET
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationSet {
    /// The normalized name itself
    pub full: NormalizedName,

    /// Trailing corporate suffixes removed ("ACME HOLDINGS INC" → "ACME")
    pub stripped: String,

    /// Initials of the significant stripped words (None for single-word names)
    pub acronym: Option<String>,

    /// Leading word prefixes, longest first
    pub truncations: Vec<String>,
}

impl VariationSet {
    /// Expand a normalized name. Depends only on the name and the config.
    pub fn generate(name: &NormalizedName, config: &MatchConfig) -> Self {
        let words = name.words();

        let stripped_words = strip_suffixes(&words, config);
        let stripped = stripped_words.join(" ");

        let significant: Vec<&str> = stripped_words
            .iter()
            .copied()
            .filter(|w| !config.is_connector(w))
            .collect();
        let acronym = if significant.len() >= 2 {
            Some(
                significant
                    .iter()
                    .filter_map(|w| w.chars().next())
                    .collect::<String>(),
            )
        } else {
            None
        };

        let truncations = (1..words.len())
            .rev()
            .map(|n| words[..n].join(" "))
            .filter(|prefix| prefix.chars().count() >= config.min_variation_len)
            .collect();

        VariationSet {
            full: name.clone(),
            stripped,
            acronym,
            truncations,
        }
    }

    /// Stripped form with the spaces squeezed out ("O N C" → "ONC")
    pub fn compact(&self) -> String {
        self.stripped.chars().filter(|c| *c != ' ').collect()
    }

    /// Every member, in sorted order
    pub fn members(&self) -> BTreeSet<String> {
        let mut members = BTreeSet::new();
        members.insert(self.full.as_str().to_string());
        members.insert(self.stripped.clone());
        if let Some(acronym) = &self.acronym {
            members.insert(acronym.clone());
        }
        members.extend(self.truncations.iter().cloned());
        members
    }

    /// Variations present in both sets, sorted
    pub fn shared_with(&self, other: &VariationSet) -> Vec<String> {
        self.members()
            .intersection(&other.members())
            .cloned()
            .collect()
    }

    pub fn is_empty_name(&self) -> bool {
        self.full.is_empty()
    }
}

/// Remove trailing suffix words, repeatedly, never removing the first word
fn strip_suffixes<'a>(words: &[&'a str], config: &MatchConfig) -> Vec<&'a str> {
    let mut kept = words.to_vec();
    while kept.len() > 1 && kept.last().is_some_and(|w| config.is_suffix(w)) {
        kept.pop();
    }
    kept
}

/// Generate with the default configuration
pub fn variations(name: &NormalizedName) -> VariationSet {
    VariationSet::generate(name, &MatchConfig::default())
}

// ============================================================================
// TESTS
// ============================================================================
