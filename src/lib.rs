// Registry Match - Core Library
// Company-name matching against business-registry results, used by the CLI and tests

pub mod config;      // Lexicons + thresholds
pub mod normalizer;  // Canonical name form
pub mod variations;  // Stripped / acronym / truncated renderings
pub mod classifier;  // LTD / LIMITED pre-filter + owner screening
pub mod candidates;  // Registry candidates + CSV snapshots
pub mod engine;      // Tier ladder 95 / 85 / 80 / 70
pub mod lookup;      // Screen → search → match pipeline
pub mod owners;      // GeoJSON owner extraction
pub mod report;      // Text reports + outcome filters

// Re-export commonly used types
pub use config::{ConfigError, MatchConfig};
pub use normalizer::{normalize, NormalizedName, Normalizer};
pub use variations::{variations, VariationSet};
pub use classifier::{is_excluded, ExclusionReason, OwnerClass, OwnerClassifier};
pub use candidates::{load_candidates_csv, CandidateSnapshot, MatchCandidate};
pub use engine::{
    default_tier_rules, find_match, MatchEngine, MatchResult, MatchTier, MatchTrace,
    NameSnapshot, TierRule, TraceEntry,
};
pub use lookup::{LookupOutcome, LookupPipeline, LookupStatus, LookupSummary, RegistrySearch};
pub use owners::{extract_owners, DEFAULT_OWNER_FIELD};
pub use report::{filter_by_business_type, render_batch, render_result, unmatched};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
