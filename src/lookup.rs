// 🔎 Lookup Pipeline - Screen owners, search the registry, match results
//
//   owner name → OwnerClassifier → RegistrySearch → MatchEngine → LookupOutcome
//
// The registry search is an external collaborator behind a trait; a failed
// search is recorded on its outcome and never aborts the rest of the batch.

use crate::candidates::MatchCandidate;
use crate::classifier::{ExclusionReason, OwnerClass, OwnerClassifier};
use crate::config::MatchConfig;
use crate::engine::{MatchEngine, MatchResult};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// ============================================================================
// REGISTRY SEARCH (external boundary)
// ============================================================================

/// Anything that can turn an owner name into registry candidates
pub trait RegistrySearch {
    fn search(&self, query: &str) -> Result<Vec<MatchCandidate>>;
}

impl<F> RegistrySearch for F
where
    F: Fn(&str) -> Result<Vec<MatchCandidate>>,
{
    fn search(&self, query: &str) -> Result<Vec<MatchCandidate>> {
        self(query)
    }
}

// ============================================================================
// LOOKUP OUTCOME
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LookupStatus {
    Matched,
    Unmatched,
    Excluded(ExclusionReason),
    SearchFailed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupOutcome {
    pub owner: String,
    pub status: LookupStatus,

    /// Present whenever a search actually ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
}

impl LookupOutcome {
    pub fn is_match(&self) -> bool {
        self.status == LookupStatus::Matched
    }

    pub fn confidence(&self) -> u8 {
        self.result.as_ref().map_or(0, |r| r.confidence)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupSummary {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub excluded: usize,
    pub failed: usize,
}

impl LookupSummary {
    pub fn from_outcomes(outcomes: &[LookupOutcome]) -> Self {
        let mut summary = LookupSummary {
            total: outcomes.len(),
            ..Default::default()
        };
        for outcome in outcomes {
            match outcome.status {
                LookupStatus::Matched => summary.matched += 1,
                LookupStatus::Unmatched => summary.unmatched += 1,
                LookupStatus::Excluded(_) => summary.excluded += 1,
                LookupStatus::SearchFailed(_) => summary.failed += 1,
            }
        }
        summary
    }
}

// ============================================================================
// LOOKUP PIPELINE
// ============================================================================

#[derive(Debug, Clone)]
pub struct LookupPipeline {
    engine: MatchEngine,
    classifier: OwnerClassifier,
}

impl LookupPipeline {
    pub fn new(config: MatchConfig) -> Self {
        LookupPipeline {
            classifier: OwnerClassifier::new(&config),
            engine: MatchEngine::new(config),
        }
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Screen, search and match a single owner
    pub fn lookup<S: RegistrySearch + ?Sized>(&self, owner: &str, search: &S) -> LookupOutcome {
        if let OwnerClass::Excluded(reason) = self.classifier.classify(owner) {
            return LookupOutcome {
                owner: owner.to_string(),
                status: LookupStatus::Excluded(reason),
                result: None,
            };
        }

        let candidates = match search.search(owner) {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(owner, error = %e, "registry search failed");
                return LookupOutcome {
                    owner: owner.to_string(),
                    status: LookupStatus::SearchFailed(format!("{:#}", e)),
                    result: None,
                };
            }
        };

        let result = self.engine.find_match(owner, &candidates);
        let status = if result.is_match {
            LookupStatus::Matched
        } else {
            LookupStatus::Unmatched
        };

        LookupOutcome {
            owner: owner.to_string(),
            status,
            result: Some(result),
        }
    }

    /// Process owners one after another, in input order
    pub fn run<S: RegistrySearch + ?Sized>(&self, owners: &[String], search: &S) -> Vec<LookupOutcome> {
        info!(owners = owners.len(), "starting lookups");
        let outcomes: Vec<LookupOutcome> = owners.iter().map(|o| self.lookup(o, search)).collect();
        log_summary(&outcomes);
        outcomes
    }

    /// Split owners across `workers` threads. Output keeps input order.
    pub fn run_parallel<S>(&self, owners: &[String], search: &S, workers: usize) -> Vec<LookupOutcome>
    where
        S: RegistrySearch + Sync + ?Sized,
    {
        if workers <= 1 || owners.len() <= 1 {
            return self.run(owners, search);
        }

        info!(owners = owners.len(), workers, "starting parallel lookups");
        let chunk_size = owners.len().div_ceil(workers);

        let outcomes: Vec<LookupOutcome> = std::thread::scope(|scope| {
            let handles: Vec<_> = owners
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|o| self.lookup(o, search))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| match handle.join() {
                    Ok(chunk) => chunk,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        log_summary(&outcomes);
        outcomes
    }
}

impl Default for LookupPipeline {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

fn log_summary(outcomes: &[LookupOutcome]) {
    let summary = LookupSummary::from_outcomes(outcomes);
    info!(
        total = summary.total,
        matched = summary.matched,
        unmatched = summary.unmatched,
        excluded = summary.excluded,
        failed = summary.failed,
        "lookups complete"
    );
}

// ============================================================================
// TESTS
// ============================================================================
