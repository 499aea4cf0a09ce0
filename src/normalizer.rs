// 🧹 Normalizer - Canonical comparison form for raw names
//
// "Mtd Products, Limited." / "MTD-PRODUCTS LIMITED" / "mtd products limited"
//   → "MTD PRODUCTS LIMITED"
//
// Output alphabet is uppercase alphanumerics separated by single spaces, which
// is what makes normalize(normalize(x)) == normalize(x) hold.

use crate::config::MatchConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// NORMALIZED NAME
// ============================================================================

/// A name in canonical comparison form.
///
/// Only constructed through [`Normalizer::normalize`], so every value upholds
/// the canonical-form invariant. An empty value means "no comparable name".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedName(String);

impl NormalizedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Word tokens (already split on single spaces)
    pub fn words(&self) -> Vec<&str> {
        self.0.split(' ').filter(|w| !w.is_empty()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// NORMALIZER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    /// Rewrite "&" and "+" as the word AND
    pub expand_ampersand: bool,
}

impl Normalizer {
    pub fn new(config: &MatchConfig) -> Self {
        Normalizer {
            expand_ampersand: config.expand_ampersand,
        }
    }

    /// Canonicalize a raw name. Never fails; blank input yields an empty name.
    pub fn normalize(&self, raw: &str) -> NormalizedName {
        let mut spaced = String::with_capacity(raw.len());

        for c in raw.chars().flat_map(char::to_uppercase) {
            match c {
                c if c.is_alphanumeric() => spaced.push(c),
                // Dropped outright: "O'BRIEN" -> "OBRIEN", "INC." -> "INC"
                '\'' | '\u{2019}' | '`' | '.' => {}
                '&' | '+' if self.expand_ampersand => spaced.push_str(" AND "),
                // Hyphens, commas, brackets, whitespace... all become boundaries
                _ => spaced.push(' '),
            }
        }

        NormalizedName(spaced.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer {
            expand_ampersand: true,
        }
    }
}

/// Normalize with the default settings
pub fn normalize(raw: &str) -> NormalizedName {
    Normalizer::default().normalize(raw)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_uppercase_and_whitespace() {
        assert_eq!(
            normalize("  mtd   products\tlimited \n").as_str(),
            "MTD PRODUCTS LIMITED"
        );
    }

    #[test]
    fn test_hyphen_becomes_space() {
        assert_eq!(normalize("A-B CORP"), normalize("A B CORP"));
        assert_eq!(normalize("A-B CORP").as_str(), "A B CORP");
    }

    #[test]
    fn test_punctuation_stripped() {
        assert_eq!(
            normalize("Mtd Products, Limited.").as_str(),
            "MTD PRODUCTS LIMITED"
        );
        assert_eq!(normalize("O'Brien Farms Inc.").as_str(), "OBRIEN FARMS INC");
        assert_eq!(normalize("J.P. Holdings").as_str(), "JP HOLDINGS");
    }

    #[test]
    fn test_parentheses_removed_content_kept() {
        assert_eq!(
            normalize("Acme (Ontario) Corp").as_str(),
            "ACME ONTARIO CORP"
        );
        assert_eq!(normalize("((Acme))").as_str(), "ACME");
    }

    #[test]
    fn test_suffix_words_are_kept() {
        // Suffix handling belongs to variation generation
        assert_eq!(normalize("acme holdings inc").as_str(), "ACME HOLDINGS INC");
    }

    #[test]
    fn test_ampersand_expansion() {
        assert_eq!(normalize("Smith & Sons").as_str(), "SMITH AND SONS");
        assert_eq!(normalize("A&B").as_str(), "A AND B");

        let literal = Normalizer {
            expand_ampersand: false,
        };
        assert_eq!(literal.normalize("Smith & Sons").as_str(), "SMITH SONS");
    }

    #[test]
    fn test_numbers_kept() {
        assert_eq!(
            normalize("1234567 Ontario Inc.").as_str(),
            "1234567 ONTARIO INC"
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \t\n").is_empty());
        assert!(normalize(".,-()").is_empty());
        assert!(normalize("").words().is_empty());
    }

    #[test]
    fn test_words() {
        let name = normalize("riverside  developments corp");
        assert_eq!(name.words(), vec!["RIVERSIDE", "DEVELOPMENTS", "CORP"]);
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(raw in "[ -~À-ÿ]{0,40}") {
            let once = normalize(&raw);
            let twice = normalize(once.as_str());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_normalized_alphabet(raw in "[ -~]{0,40}") {
            let name = normalize(&raw);
            prop_assert!(!name.as_str().starts_with(' '));
            prop_assert!(!name.as_str().ends_with(' '));
            prop_assert!(!name.as_str().contains("  "));
            prop_assert!(name
                .as_str()
                .chars()
                .all(|c| c == ' ' || c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }
}
