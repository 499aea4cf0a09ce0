// 🏷️ Suffix Classifier - Upstream pre-filter for owner names
//
// Runs once per raw owner name, before any registry search. Names carrying a
// legal-entity marker (LTD / LIMITED as whole words) are excluded from lookup.
// Not used inside the match engine and never affects confidence.

use crate::config::MatchConfig;
use crate::normalizer::{NormalizedName, Normalizer};
use serde::{Deserialize, Serialize};

// ============================================================================
// OWNER CLASS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExclusionReason {
    /// Nothing left after normalization
    Empty,

    /// Fewer than 3 characters
    TooShort,

    /// Contains LTD / LIMITED as a whole word
    CorporateSuffix,

    /// Contains a number that is not a plausible year (1900-2100)
    NumericToken,

    /// Looks like a street address ("123 MAIN", "MAPLE 45")
    AddressPattern,
}

impl ExclusionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExclusionReason::Empty => "EMPTY",
            ExclusionReason::TooShort => "TOO SHORT",
            ExclusionReason::CorporateSuffix => "LTD/LIMITED",
            ExclusionReason::NumericToken => "NUMERIC TOKEN",
            ExclusionReason::AddressPattern => "ADDRESS PATTERN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerClass {
    /// Eligible for registry lookup
    Lookup,

    /// Skipped before any search is attempted
    Excluded(ExclusionReason),
}

impl OwnerClass {
    pub fn is_lookup(&self) -> bool {
        matches!(self, OwnerClass::Lookup)
    }

    pub fn reason(&self) -> Option<ExclusionReason> {
        match self {
            OwnerClass::Lookup => None,
            OwnerClass::Excluded(reason) => Some(*reason),
        }
    }
}

// ============================================================================
// OWNER CLASSIFIER
// ============================================================================

#[derive(Debug, Clone)]
pub struct OwnerClassifier {
    normalizer: Normalizer,
    excluded_words: Vec<String>,
}

impl OwnerClassifier {
    pub fn new(config: &MatchConfig) -> Self {
        OwnerClassifier {
            normalizer: Normalizer::new(config),
            excluded_words: config.excluded_words.clone(),
        }
    }

    /// True iff the normalized name contains an excluded word as a whole word
    pub fn is_excluded(&self, raw: &str) -> bool {
        self.has_excluded_word(&self.normalizer.normalize(raw))
    }

    /// Full screening of one owner name
    pub fn classify(&self, raw: &str) -> OwnerClass {
        let name = self.normalizer.normalize(raw);

        if name.is_empty() {
            return OwnerClass::Excluded(ExclusionReason::Empty);
        }
        if name.as_str().chars().count() < 3 {
            return OwnerClass::Excluded(ExclusionReason::TooShort);
        }
        if self.has_excluded_word(&name) {
            return OwnerClass::Excluded(ExclusionReason::CorporateSuffix);
        }

        let words = name.words();

        let numeric: Vec<&str> = words.iter().copied().filter(|w| is_numeric(w)).collect();
        if !numeric.is_empty() && !numeric.iter().any(|w| is_year(w)) {
            return OwnerClass::Excluded(ExclusionReason::NumericToken);
        }

        if looks_like_address(&words) {
            return OwnerClass::Excluded(ExclusionReason::AddressPattern);
        }

        OwnerClass::Lookup
    }

    fn has_excluded_word(&self, name: &NormalizedName) -> bool {
        name.words()
            .iter()
            .any(|w| self.excluded_words.iter().any(|e| e == w))
    }
}

impl Default for OwnerClassifier {
    fn default() -> Self {
        Self::new(&MatchConfig::default())
    }
}

/// The LTD / LIMITED rule with default settings
pub fn is_excluded(raw: &str) -> bool {
    OwnerClassifier::default().is_excluded(raw)
}

fn is_numeric(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

// "John Smith 2020 Trust" keeps its year
fn is_year(word: &str) -> bool {
    word.len() == 4 && word.parse::<u16>().is_ok_and(|y| (1900..=2100).contains(&y))
}

// "123 MAIN ..." or "... MAPLE 45"
fn looks_like_address(words: &[&str]) -> bool {
    if words.len() < 2 {
        return false;
    }

    let short_number = |w: &str| is_numeric(w) && w.len() <= 4;
    let real_word = |w: &str| w.chars().count() > 2;

    let leading = short_number(words[0]) && real_word(words[1]);
    let trailing = short_number(words[words.len() - 1]) && real_word(words[words.len() - 2]);

    leading || trailing
}

// ============================================================================
// TESTS
// ============================================================================
