// 📋 Match Candidates - Names returned by a registry search
//
// The engine only ever looks at `name`; everything else the search produced
// (status, address, corporation number...) rides along untouched in `details`.

use crate::lookup::RegistrySearch;
use crate::normalizer::{normalize, NormalizedName};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

/// Detail key used by reports for the registry's business type
pub const BUSINESS_TYPE_KEY: &str = "BUSINESS TYPE";

// ============================================================================
// MATCH CANDIDATE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Entity name exactly as the registry returned it
    pub name: String,

    /// Opaque structured detail (uppercase keys)
    #[serde(default)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

impl MatchCandidate {
    pub fn new(name: impl Into<String>) -> Self {
        MatchCandidate {
            name: name.into(),
            details: BTreeMap::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into().to_uppercase(), value.into());
        self
    }

    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(&key.to_uppercase()).map(String::as_str)
    }
}

impl From<&str> for MatchCandidate {
    fn from(name: &str) -> Self {
        MatchCandidate::new(name)
    }
}

// ============================================================================
// CANDIDATE SNAPSHOT (offline registry results)
// ============================================================================

/// Registry results captured to CSV.
///
/// Rows with a `query` column are grouped per owner name; rows without one are
/// returned for every search.
#[derive(Debug, Clone, Default)]
pub struct CandidateSnapshot {
    by_query: BTreeMap<NormalizedName, Vec<MatchCandidate>>,
    shared: Vec<MatchCandidate>,
}

impl CandidateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, query: Option<&str>, candidate: MatchCandidate) {
        match query.map(normalize).filter(|q| !q.is_empty()) {
            Some(q) => self.by_query.entry(q).or_default().push(candidate),
            None => self.shared.push(candidate),
        }
    }

    /// Candidates for one owner name, in file order
    pub fn candidates_for(&self, query: &str) -> Vec<MatchCandidate> {
        let mut found = self
            .by_query
            .get(&normalize(query))
            .cloned()
            .unwrap_or_default();
        found.extend(self.shared.iter().cloned());
        found
    }

    pub fn len(&self) -> usize {
        self.by_query.values().map(Vec::len).sum::<usize>() + self.shared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RegistrySearch for CandidateSnapshot {
    fn search(&self, query: &str) -> Result<Vec<MatchCandidate>> {
        Ok(self.candidates_for(query))
    }
}

/// Load a candidate snapshot from CSV.
///
/// Requires a `name` (or `company name`) column; an optional `query` (or
/// `search name`) column groups rows. All other columns become details.
pub fn load_candidates_csv<P: AsRef<Path>>(path: P) -> Result<CandidateSnapshot> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open candidates file: {}", path.display()))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header in {}", path.display()))?
        .iter()
        .map(|h| h.trim().to_uppercase().replace('_', " "))
        .collect();

    let name_col = match headers
        .iter()
        .position(|h| h == "NAME" || h == "COMPANY NAME")
    {
        Some(idx) => idx,
        None => bail!("No name column in {} (headers: {:?})", path.display(), headers),
    };
    let query_col = headers
        .iter()
        .position(|h| h == "QUERY" || h == "SEARCH NAME");

    let mut snapshot = CandidateSnapshot::new();

    for (line_num, result) in reader.records().enumerate() {
        let record = result.with_context(|| {
            format!("Failed to parse CSV line {} in {}", line_num + 2, path.display())
        })?;

        let mut candidate = MatchCandidate::new(record.get(name_col).unwrap_or(""));
        for (idx, value) in record.iter().enumerate() {
            if idx == name_col || Some(idx) == query_col || value.is_empty() {
                continue;
            }
            if let Some(key) = headers.get(idx) {
                candidate.details.insert(key.clone(), value.to_string());
            }
        }

        let query = query_col.and_then(|idx| record.get(idx));
        snapshot.add(query, candidate);
    }

    tracing::debug!(
        path = %path.display(),
        candidates = snapshot.len(),
        "loaded candidate snapshot"
    );

    Ok(snapshot)
}

// ============================================================================
// TESTS
// ============================================================================
