// 🎯 Match Engine - Decide whether a registry candidate IS the queried owner
//
// Tier ladder, evaluated first-match-wins for every candidate:
//   95  direct match        normalized full names equal
//   85  exact term match    suffix-stripped names equal
//   80  acronym match       one name's acronym is a run of the other's initials
//   70  partial match       one stripped name contains the other (length-ratio gated)
//
// Pure computation: no I/O, no shared state. Safe to call from many threads.

use crate::candidates::MatchCandidate;
use crate::config::MatchConfig;
use crate::normalizer::{NormalizedName, Normalizer};
use crate::variations::VariationSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// MATCH TIER
// ============================================================================

/// Ordered by confidence, so `Direct > ExactTerms > Acronym > Partial`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    /// One stripped name is a substring of the other
    Partial,

    /// One name is an acronym rendering of the other
    Acronym,

    /// Same significant words, different or absent legal suffix
    ExactTerms,

    /// Identical normalized names
    Direct,
}

impl MatchTier {
    pub fn confidence(&self) -> u8 {
        match self {
            MatchTier::Direct => 95,
            MatchTier::ExactTerms => 85,
            MatchTier::Acronym => 80,
            MatchTier::Partial => 70,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Direct => "direct match",
            MatchTier::ExactTerms => "exact term match",
            MatchTier::Acronym => "acronym match",
            MatchTier::Partial => "partial/substring match",
        }
    }
}

// ============================================================================
// TIER RULES (rules as data)
// ============================================================================

/// Returns the strings that made the tier fire, or None
pub type TierPredicate = fn(&VariationSet, &VariationSet, &MatchConfig) -> Option<Vec<String>>;

#[derive(Clone, Copy)]
pub struct TierRule {
    pub tier: MatchTier,
    pub predicate: TierPredicate,
}

impl TierRule {
    pub fn new(tier: MatchTier, predicate: TierPredicate) -> Self {
        TierRule { tier, predicate }
    }

    pub fn evaluate(
        &self,
        query: &VariationSet,
        candidate: &VariationSet,
        config: &MatchConfig,
    ) -> Option<Vec<String>> {
        (self.predicate)(query, candidate, config)
    }
}

impl std::fmt::Debug for TierRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TierRule").field("tier", &self.tier).finish()
    }
}

/// The standard ladder, highest tier first
pub fn default_tier_rules() -> Vec<TierRule> {
    vec![
        TierRule::new(MatchTier::Direct, direct_match),
        TierRule::new(MatchTier::ExactTerms, exact_term_match),
        TierRule::new(MatchTier::Acronym, acronym_match),
        TierRule::new(MatchTier::Partial, partial_match),
    ]
}

fn direct_match(q: &VariationSet, c: &VariationSet, _: &MatchConfig) -> Option<Vec<String>> {
    (q.full == c.full).then(|| vec![q.full.as_str().to_string()])
}

fn exact_term_match(q: &VariationSet, c: &VariationSet, _: &MatchConfig) -> Option<Vec<String>> {
    (!q.stripped.is_empty() && q.stripped == c.stripped).then(|| vec![q.stripped.clone()])
}

fn acronym_match(q: &VariationSet, c: &VariationSet, config: &MatchConfig) -> Option<Vec<String>> {
    acronym_of(q, c, config).or_else(|| acronym_of(c, q, config))
}

/// `short` is an acronym rendering of a contiguous run of `long`'s initials.
///
/// Either `short` squeezed together ("ONC", "O N C") or `short`'s own initials
/// ("NUMBERED COMPANY" → "NC"). Initials must be a proper run: two multi-word
/// names with identical initials are not acronyms of each other.
fn acronym_of(long: &VariationSet, short: &VariationSet, config: &MatchConfig) -> Option<Vec<String>> {
    let initials = long.acronym.as_ref()?;

    let compact = short.compact();
    if compact.chars().count() >= config.min_acronym_len && initials.contains(&compact) {
        return Some(vec![initials.clone(), compact]);
    }

    let run = short.acronym.as_ref()?;
    let run_len = run.chars().count();
    if run_len >= config.min_acronym_len
        && run_len < initials.chars().count()
        && initials.contains(run.as_str())
    {
        return Some(vec![initials.clone(), run.clone()]);
    }

    None
}

fn partial_match(q: &VariationSet, c: &VariationSet, config: &MatchConfig) -> Option<Vec<String>> {
    let (q_len, c_len) = (q.stripped.chars().count(), c.stripped.chars().count());
    let (shorter, longer, short_len, long_len) = if q_len <= c_len {
        (&q.stripped, &c.stripped, q_len, c_len)
    } else {
        (&c.stripped, &q.stripped, c_len, q_len)
    };

    // Plain character containment, word boundaries ignored ("ARTS" in "PARTS");
    // the length ratio is the only guard.
    if shorter.is_empty() || !longer.contains(shorter.as_str()) {
        return None;
    }

    let ratio = short_len as f64 / long_len as f64;
    (ratio >= config.min_substring_ratio).then(|| vec![shorter.clone()])
}

// ============================================================================
// DIAGNOSTIC TRACE
// ============================================================================

/// One name as the engine saw it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameSnapshot {
    pub raw: String,
    pub normalized: NormalizedName,
    pub variations: VariationSet,
}

/// Outcome of comparing the query against one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Position in the input candidate list
    pub index: usize,

    pub candidate: NameSnapshot,

    /// Tier that fired (None = no match)
    pub tier: Option<MatchTier>,

    /// Strings that made the tier fire
    pub evidence: Vec<String>,

    /// Variations present in both sets
    pub shared_variations: Vec<String>,
}

impl TraceEntry {
    pub fn confidence(&self) -> u8 {
        self.tier.map_or(0, |t| t.confidence())
    }
}

/// Observational record of how a decision was reached. Never feeds back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTrace {
    pub query: NameSnapshot,
    pub entries: Vec<TraceEntry>,
}

impl MatchTrace {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ============================================================================
// MATCH RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub is_match: bool,

    /// 0 for no match, otherwise one of 70 / 80 / 85 / 95
    pub confidence: u8,

    pub tier: Option<MatchTier>,

    /// Best candidate, passed through untouched
    pub candidate: Option<MatchCandidate>,

    /// Index of `candidate` in the input list
    pub candidate_index: Option<usize>,

    pub trace: MatchTrace,
}

impl MatchResult {
    fn unmatched(trace: MatchTrace) -> Self {
        MatchResult {
            is_match: false,
            confidence: 0,
            tier: None,
            candidate: None,
            candidate_index: None,
            trace,
        }
    }

    pub fn query(&self) -> &str {
        &self.trace.query.raw
    }

    pub fn matched_name(&self) -> Option<&str> {
        self.candidate.as_ref().map(|c| c.name.as_str())
    }
}

// ============================================================================
// MATCH ENGINE
// ============================================================================

#[derive(Debug, Clone)]
pub struct MatchEngine {
    config: MatchConfig,
    normalizer: Normalizer,
    rules: Vec<TierRule>,
}

impl MatchEngine {
    pub fn new(config: MatchConfig) -> Self {
        MatchEngine {
            normalizer: Normalizer::new(&config),
            config,
            rules: default_tier_rules(),
        }
    }

    /// Replace the tier ladder; rules are tried in the given order
    pub fn with_rules(mut self, rules: Vec<TierRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn rules(&self) -> &[TierRule] {
        &self.rules
    }

    pub fn snapshot(&self, raw: &str) -> NameSnapshot {
        let normalized = self.normalizer.normalize(raw);
        let variations = VariationSet::generate(&normalized, &self.config);
        NameSnapshot {
            raw: raw.to_string(),
            normalized,
            variations,
        }
    }

    /// First rule that fires for this pair
    pub fn compare(
        &self,
        query: &VariationSet,
        candidate: &VariationSet,
    ) -> Option<(MatchTier, Vec<String>)> {
        if query.is_empty_name() || candidate.is_empty_name() {
            return None;
        }

        self.rules.iter().find_map(|rule| {
            rule.evaluate(query, candidate, &self.config)
                .map(|evidence| (rule.tier, evidence))
        })
    }

    /// Compare a query name against every candidate and pick the best.
    ///
    /// Ties on confidence go to the shorter raw candidate name (in characters),
    /// then to the earlier candidate.
    pub fn find_match(&self, query: &str, candidates: &[MatchCandidate]) -> MatchResult {
        let query_snapshot = self.snapshot(query);

        if query_snapshot.normalized.is_empty() {
            debug!(query, "empty query name, skipping comparison");
            return MatchResult::unmatched(MatchTrace {
                query: query_snapshot,
                entries: Vec::new(),
            });
        }

        let mut entries = Vec::with_capacity(candidates.len());
        let mut best: Option<usize> = None;

        for (index, candidate) in candidates.iter().enumerate() {
            let snapshot = self.snapshot(&candidate.name);
            let outcome = self.compare(&query_snapshot.variations, &snapshot.variations);
            let shared_variations = query_snapshot.variations.shared_with(&snapshot.variations);

            let (tier, evidence) = match outcome {
                Some((tier, evidence)) => (Some(tier), evidence),
                None => (None, Vec::new()),
            };

            debug!(
                query = %query_snapshot.normalized,
                candidate = %snapshot.normalized,
                tier = tier.map_or("none", |t| t.as_str()),
                "compared candidate"
            );

            let entry = TraceEntry {
                index,
                candidate: snapshot,
                tier,
                evidence,
                shared_variations,
            };

            if entry.tier.is_some() && best.map_or(true, |b| beats(&entry, &entries[b])) {
                best = Some(entries.len());
            }
            entries.push(entry);
        }

        let trace = MatchTrace {
            query: query_snapshot,
            entries,
        };

        match best {
            Some(b) => {
                let entry = &trace.entries[b];
                MatchResult {
                    is_match: true,
                    confidence: entry.confidence(),
                    tier: entry.tier,
                    candidate: Some(candidates[entry.index].clone()),
                    candidate_index: Some(entry.index),
                    trace,
                }
            }
            None => MatchResult::unmatched(trace),
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

// Strictly better only, so the earlier candidate keeps a full tie
fn beats(challenger: &TraceEntry, incumbent: &TraceEntry) -> bool {
    match challenger.confidence().cmp(&incumbent.confidence()) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => {
            challenger.candidate.raw.chars().count() < incumbent.candidate.raw.chars().count()
        }
    }
}

/// Match with the default configuration
pub fn find_match(query: &str, candidates: &[MatchCandidate]) -> MatchResult {
    MatchEngine::default().find_match(query, candidates)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn candidates(names: &[&str]) -> Vec<MatchCandidate> {
        names.iter().map(|n| MatchCandidate::new(*n)).collect()
    }

    fn tier_between(a: &str, b: &str) -> Option<MatchTier> {
        let engine = MatchEngine::default();
        let a = engine.snapshot(a);
        let b = engine.snapshot(b);
        engine.compare(&a.variations, &b.variations).map(|(tier, _)| tier)
    }

    // ========================================================================
    // SCENARIOS
    // ========================================================================

    #[test]
    fn test_direct_match() {
        let result = find_match("MTD PRODUCTS LIMITED", &candidates(&["MTD PRODUCTS LIMITED"]));

        assert!(result.is_match);
        assert_eq!(result.confidence, 95);
        assert_eq!(result.tier, Some(MatchTier::Direct));
        assert_eq!(result.matched_name(), Some("MTD PRODUCTS LIMITED"));
        assert_eq!(result.candidate_index, Some(0));
    }

    #[test]
    fn test_exact_term_match() {
        let result = find_match("ACME HOLDINGS INC", &candidates(&["ACME HOLDINGS"]));

        assert!(result.is_match);
        assert_eq!(result.confidence, 85);
        assert_eq!(result.tier, Some(MatchTier::ExactTerms));
        assert_eq!(result.trace.entries[0].evidence, vec!["ACME"]);
    }

    #[test]
    fn test_acronym_match() {
        let result = find_match("ONTARIO NUMBERED COMPANY", &candidates(&["ONC"]));

        assert!(result.is_match);
        assert_eq!(result.confidence, 80);
        assert_eq!(result.tier, Some(MatchTier::Acronym));
        assert_eq!(result.trace.entries[0].evidence, vec!["ONC", "ONC"]);
        assert_eq!(result.trace.entries[0].shared_variations, vec!["ONC"]);
    }

    #[test]
    fn test_partial_match() {
        let result = find_match(
            "RIVERSIDE DEVELOPMENTS AND HOLDINGS CORP",
            &candidates(&["RIVERSIDE DEVELOPMENTS"]),
        );

        assert!(result.is_match);
        assert_eq!(result.confidence, 70);
        assert_eq!(result.tier, Some(MatchTier::Partial));
        assert_eq!(result.trace.entries[0].evidence, vec!["RIVERSIDE DEVELOPMENTS"]);
    }

    #[test]
    fn test_no_match() {
        let result = find_match("BLUE SKY VENTURES", &candidates(&["RED EARTH PARTNERS"]));

        assert!(!result.is_match);
        assert_eq!(result.confidence, 0);
        assert_eq!(result.candidate, None);
        assert_eq!(result.trace.len(), 1);
        assert_eq!(result.trace.entries[0].tier, None);
        assert!(result.trace.entries[0].evidence.is_empty());
    }

    #[test]
    fn test_empty_query() {
        let result = find_match("", &candidates(&["MTD PRODUCTS LIMITED", "ONC"]));

        assert!(!result.is_match);
        assert_eq!(result.confidence, 0);
        assert!(result.trace.is_empty());
    }

    #[test]
    fn test_empty_query_no_candidates() {
        let result = find_match("  ", &[]);
        assert!(!result.is_match);
        assert_eq!(result.confidence, 0);
        assert!(result.trace.is_empty());
    }

    #[test]
    fn test_no_candidates() {
        let result = find_match("ACME HOLDINGS INC", &[]);
        assert!(!result.is_match);
        assert!(result.trace.is_empty());
        assert_eq!(result.query(), "ACME HOLDINGS INC");
    }

    // ========================================================================
    // CANDIDATE HANDLING
    // ========================================================================

    #[test]
    fn test_empty_candidate_name_is_traced() {
        let result = find_match("ACME HOLDINGS", &candidates(&["", "...", "ACME HOLDINGS"]));

        assert_eq!(result.trace.len(), 3);
        assert_eq!(result.trace.entries[0].tier, None);
        assert_eq!(result.trace.entries[1].tier, None);
        assert_eq!(result.candidate_index, Some(2));
        assert_eq!(result.confidence, 95);
    }

    #[test]
    fn test_highest_tier_wins() {
        let result = find_match(
            "MTD PRODUCTS LIMITED",
            &candidates(&["MTD PRODUCTS OF CANADA", "MTD PRODUCTS INC", "MTD PRODUCTS LIMITED"]),
        );

        assert_eq!(result.candidate_index, Some(2));
        assert_eq!(result.confidence, 95);
        // "MP" is a run of "MPC"
        assert_eq!(result.trace.entries[0].tier, Some(MatchTier::Acronym));
        assert_eq!(result.trace.entries[1].tier, Some(MatchTier::ExactTerms));
    }

    #[test]
    fn test_tie_prefers_shorter_name() {
        // Both are 85: stripped forms equal "ACME"
        let result = find_match(
            "ACME",
            &candidates(&["ACME HOLDINGS CORPORATION", "ACME INC"]),
        );

        assert_eq!(result.confidence, 85);
        assert_eq!(result.candidate_index, Some(1));
    }

    #[test]
    fn test_tie_uses_raw_length() {
        // Normalized "ACME INC" is shorter than "ACME CORP", raw "ACME, INC." is not
        let result = find_match("ACME", &candidates(&["ACME, INC.", "ACME CORP"]));

        assert_eq!(result.confidence, 85);
        assert_eq!(result.candidate_index, Some(1));
        assert_eq!(result.matched_name(), Some("ACME CORP"));
    }

    #[test]
    fn test_tie_counts_characters_not_bytes() {
        // "ÉCOLE, CORP." is 12 chars / 13 bytes, "ÉCOLE – INC" is 11 chars / 14 bytes
        let result = find_match("ÉCOLE", &candidates(&["ÉCOLE, CORP.", "ÉCOLE – INC"]));
        assert_eq!(result.confidence, 85);
        assert_eq!(result.candidate_index, Some(1));
    }

    #[test]
    fn test_tie_prefers_first_seen() {
        let result = find_match("ACME", &candidates(&["ACME LLC", "ACME INC"]));

        assert_eq!(result.confidence, 85);
        assert_eq!(result.candidate_index, Some(0));
        assert_eq!(result.matched_name(), Some("ACME LLC"));
    }

    #[test]
    fn test_details_passed_through() {
        let candidate = MatchCandidate::new("MTD PRODUCTS LIMITED")
            .with_detail("STATUS", "Active")
            .with_detail("CORPORATION NUMBER", "1234567");

        let result = find_match("mtd products limited", &[candidate.clone()]);
        assert_eq!(result.candidate, Some(candidate));
    }

    #[test]
    fn test_trace_records_both_names() {
        let result = find_match("Acme Holdings, Inc.", &candidates(&["ACME HOLDINGS"]));

        assert_eq!(result.trace.query.raw, "Acme Holdings, Inc.");
        assert_eq!(result.trace.query.normalized.as_str(), "ACME HOLDINGS INC");
        assert!(result.trace.query.variations.members().contains("ACME"));

        let entry = &result.trace.entries[0];
        assert_eq!(entry.candidate.raw, "ACME HOLDINGS");
        assert_eq!(entry.candidate.normalized.as_str(), "ACME HOLDINGS");
        assert_eq!(entry.shared_variations, vec!["ACME", "ACME HOLDINGS"]);
    }

    // ========================================================================
    // TIER RULES
    // ========================================================================

    #[test]
    fn test_acronym_either_direction() {
        assert_eq!(tier_between("ONC", "ONTARIO NUMBERED COMPANY"), Some(MatchTier::Acronym));
        assert_eq!(tier_between("O.N.C.", "ONTARIO NUMBERED COMPANY"), Some(MatchTier::Acronym));
        // A contiguous run of initials is enough
        assert_eq!(tier_between("NC", "ONTARIO NUMBERED COMPANY"), Some(MatchTier::Acronym));
        assert_eq!(tier_between("OC", "ONTARIO NUMBERED COMPANY"), None);
    }

    #[test]
    fn test_multi_word_acronym_run() {
        let result = find_match("NUMBERED COMPANY", &candidates(&["ONTARIO NUMBERED COMPANY"]));
        assert_eq!(result.tier, Some(MatchTier::Acronym));
        assert_eq!(result.confidence, 80);
        assert_eq!(result.trace.entries[0].evidence, vec!["ONC", "NC"]);

        let result = find_match("ONTARIO NUMBERED COMPANY", &candidates(&["NUMBERED COMPANY"]));
        assert_eq!(result.tier, Some(MatchTier::Acronym));

        assert_eq!(
            tier_between("GREAT LAKES SHIPPING", "GREAT LAKES"),
            Some(MatchTier::Acronym)
        );
        assert_eq!(
            tier_between("GREAT LAKES", "GREAT LAKES SHIPPING"),
            Some(MatchTier::Acronym)
        );
    }

    #[test]
    fn test_equal_initials_are_not_an_acronym() {
        assert_eq!(tier_between("NORTHERN BUILDERS", "NATIONAL BANK"), None);
        // Same initials "RD": falls through to the substring tier
        assert_eq!(
            tier_between("RIVERSIDE DEVELOPMENTS AND HOLDINGS CORP", "RIVERSIDE DEVELOPMENTS"),
            Some(MatchTier::Partial)
        );
    }

    #[test]
    fn test_partial_ignores_word_boundaries() {
        assert_eq!(tier_between("ARTS", "PARTS"), Some(MatchTier::Partial));
        assert_eq!(tier_between("PARTS", "ARTS"), Some(MatchTier::Partial));
    }

    #[test]
    fn test_partial_ratio_counts_characters() {
        // 5 of 10 characters sits exactly on the 0.5 threshold
        assert_eq!(tier_between("ÉCOLE", "ÉCOLE NORD"), Some(MatchTier::Partial));
    }

    #[test]
    fn test_single_letter_is_not_an_acronym() {
        assert_eq!(tier_between("O", "ONTARIO NUMBERED COMPANY"), None);
    }

    #[test]
    fn test_partial_ratio_threshold() {
        // "ACME" vs "ACME WIDGETS OF NORTH AMERICA": far below 0.5
        assert_eq!(tier_between("ACME", "ACME WIDGETS OF NORTH AMERICA"), None);

        let strict = MatchEngine::new(MatchConfig::default().with_substring_ratio(0.9));
        let q = strict.snapshot("RIVERSIDE DEVELOPMENTS AND HOLDINGS CORP");
        let c = strict.snapshot("RIVERSIDE DEVELOPMENTS");
        assert_eq!(strict.compare(&q.variations, &c.variations), None);
    }

    #[test]
    fn test_custom_rule_order() {
        // Partial checked first: identical names now report 70
        let rules = vec![
            TierRule::new(MatchTier::Partial, partial_match),
            TierRule::new(MatchTier::Direct, direct_match),
        ];
        let engine = MatchEngine::default().with_rules(rules);

        let result = engine.find_match("ACME", &candidates(&["ACME"]));
        assert_eq!(result.tier, Some(MatchTier::Partial));
        assert_eq!(result.confidence, 70);
    }

    #[test]
    fn test_jurisdiction_suffixes() {
        let engine = MatchEngine::new(MatchConfig::default().with_suffixes(["SARL", "SA"]));
        let result = engine.find_match("DUPONT FRERES SARL", &candidates(&["DUPONT FRERES"]));
        assert_eq!(result.confidence, 85);

        // LTD is not a suffix in this configuration
        let result = engine.find_match("ACME LTD", &candidates(&["ACME"]));
        assert_eq!(result.tier, Some(MatchTier::Partial));
    }

    #[test]
    fn test_tier_confidence_ordering() {
        assert!(MatchTier::Direct > MatchTier::ExactTerms);
        assert!(MatchTier::ExactTerms > MatchTier::Acronym);
        assert!(MatchTier::Acronym > MatchTier::Partial);
        assert!(MatchTier::Direct.confidence() > MatchTier::ExactTerms.confidence());
    }

    // ========================================================================
    // PROPERTIES
    // ========================================================================

    fn name_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop::sample::select(vec![
                "ACME", "RIVERSIDE", "ONTARIO", "NUMBERED", "COMPANY", "ONC", "O", "N", "C",
                "AND", "OF", "INC", "LTD", "LIMITED", "HOLDINGS", "CORP", "BLUE", "SKY",
            ]),
            0..5,
        )
        .prop_map(|words| words.join(" "))
    }

    proptest! {
        #[test]
        fn prop_empty_query_never_matches(names in prop::collection::vec(name_strategy(), 0..5)) {
            let list: Vec<MatchCandidate> = names.iter().map(|n| MatchCandidate::new(n.as_str())).collect();
            let result = find_match("", &list);
            prop_assert!(!result.is_match);
            prop_assert_eq!(result.confidence, 0);
            prop_assert!(result.trace.is_empty());
        }

        #[test]
        fn prop_identical_names_are_direct(name in name_strategy()) {
            prop_assume!(!name.is_empty());
            prop_assert_eq!(tier_between(&name, &name), Some(MatchTier::Direct));
        }

        #[test]
        fn prop_tiers_are_symmetric(a in name_strategy(), b in name_strategy()) {
            prop_assert_eq!(tier_between(&a, &b), tier_between(&b, &a));
        }

        #[test]
        fn prop_results_are_deterministic(
            query in name_strategy(),
            names in prop::collection::vec(name_strategy(), 0..5),
        ) {
            let list: Vec<MatchCandidate> = names.iter().map(|n| MatchCandidate::new(n.as_str())).collect();
            let first = find_match(&query, &list);
            let second = find_match(&query, &list);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }

        #[test]
        fn prop_confidence_is_a_tier_score(
            query in name_strategy(),
            names in prop::collection::vec(name_strategy(), 0..5),
        ) {
            let list: Vec<MatchCandidate> = names.iter().map(|n| MatchCandidate::new(n.as_str())).collect();
            let result = find_match(&query, &list);
            prop_assert!([0u8, 70, 80, 85, 95].contains(&result.confidence));
            prop_assert_eq!(result.is_match, result.confidence > 0);
            prop_assert_eq!(result.is_match, result.candidate.is_some());
        }
    }
}
