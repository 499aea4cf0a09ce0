// 📄 Lookup Reports - Human-readable text for match results
//
// Formatting only: everything here reads MatchResult / LookupOutcome values and
// never feeds back into a decision. Filters work on the structured outcomes
// instead of re-parsing rendered text.

use crate::candidates::{MatchCandidate, BUSINESS_TYPE_KEY};
use crate::engine::{MatchResult, TraceEntry};
use crate::lookup::{LookupOutcome, LookupStatus, LookupSummary};
use chrono::{DateTime, TimeZone};
use std::fmt;

const RULE: &str = "================================================================================";
const THIN_RULE: &str = "--------------------------------------------------------------------------------";

/// Details printed first, in this order; anything else follows alphabetically
const FIELD_ORDER: &[&str] = &[
    "CORPORATION NUMBER",
    "REGISTRY TYPE",
    "STATUS",
    "ADDRESS",
    "BUSINESS TYPE",
    "INCORPORATION DATE",
    "AMALGAMATION DATE",
];

// ============================================================================
// SINGLE RESULT
// ============================================================================

/// Text report for one query
pub struct ResultReport<'a>(pub &'a MatchResult);

impl fmt::Display for ResultReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(f, "{}", RULE)?;
        writeln!(f, "SEARCH RESULTS FOR: {}", result.query())?;
        writeln!(f, "{}", RULE)?;
        writeln!(f)?;

        match &result.candidate {
            Some(candidate) => write_company_details(f, candidate)?,
            None if result.trace.is_empty() => writeln!(f, "No company information found.")?,
            None => writeln!(f, "No matching company among {} result(s).", result.trace.len())?,
        }

        if !result.trace.is_empty() {
            write_debug_section(f, result)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "MATCH FOUND: {}", if result.is_match { "YES" } else { "NO" })?;
        if result.confidence > 0 {
            writeln!(f, "CONFIDENCE: {}%", result.confidence)?;
        }
        if let Some(name) = result.matched_name() {
            writeln!(f, "CLOSEST MATCH: {}", name)?;
        }
        writeln!(f, "{}", RULE)
    }
}

fn write_company_details(f: &mut fmt::Formatter<'_>, candidate: &MatchCandidate) -> fmt::Result {
    writeln!(f, "COMPANY DETAILS")?;
    writeln!(f, "{}", THIN_RULE)?;
    writeln!(f, "COMPANY NAME: {}", candidate.name)?;

    for field in FIELD_ORDER {
        if let Some(value) = candidate.detail(field) {
            writeln!(f, "{}: {}", field, value)?;
        }
    }
    for (key, value) in &candidate.details {
        if !FIELD_ORDER.contains(&key.as_str()) {
            writeln!(f, "{}: {}", key, value)?;
        }
    }
    Ok(())
}

fn write_debug_section(f: &mut fmt::Formatter<'_>, result: &MatchResult) -> fmt::Result {
    let query = &result.trace.query;

    writeln!(f)?;
    writeln!(f, "{}", RULE)?;
    writeln!(f, "MATCHING DEBUG INFORMATION")?;
    writeln!(f, "{}", THIN_RULE)?;
    writeln!(f, "Original search: '{}'", query.raw)?;
    writeln!(f, "Normalized search: '{}'", query.normalized)?;
    writeln!(f, "Search variations: {:?}", query.variations.members())?;

    for entry in &result.trace.entries {
        write_trace_entry(f, entry)?;
    }
    writeln!(f, "{}", THIN_RULE)
}

fn write_trace_entry(f: &mut fmt::Formatter<'_>, entry: &TraceEntry) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "Result #{}: '{}'", entry.index + 1, entry.candidate.raw)?;
    writeln!(f, "  Normalized: '{}'", entry.candidate.normalized)?;
    writeln!(f, "  Variations: {:?}", entry.candidate.variations.members())?;
    match entry.tier {
        Some(tier) => writeln!(
            f,
            "  ✅ {} ({}%) via {:?}",
            tier.as_str(),
            tier.confidence(),
            entry.evidence
        )?,
        None => writeln!(f, "  ❌ No match")?,
    }
    if !entry.shared_variations.is_empty() {
        writeln!(f, "  Shared variations: {:?}", entry.shared_variations)?;
    }
    Ok(())
}

pub fn render_result(result: &MatchResult) -> String {
    ResultReport(result).to_string()
}

// ============================================================================
// BATCH REPORT
// ============================================================================

/// Comprehensive report over every owner processed in one run
pub struct BatchReport<'a, Tz: TimeZone> {
    pub outcomes: &'a [LookupOutcome],
    pub generated: DateTime<Tz>,
}

impl<Tz: TimeZone> fmt::Display for BatchReport<'_, Tz>
where
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = LookupSummary::from_outcomes(self.outcomes);

        writeln!(f, "{}", RULE)?;
        writeln!(f, "BUSINESS LOOKUP DETAILS - COMPREHENSIVE REPORT")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Generated: {}", self.generated.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Total owners: {}", summary.total)?;
        writeln!(
            f,
            "Matched: {} | Unmatched: {} | Excluded: {} | Search failed: {}",
            summary.matched, summary.unmatched, summary.excluded, summary.failed
        )?;
        writeln!(f, "{}", RULE)?;

        for (i, outcome) in self.outcomes.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{}", RULE)?;
            writeln!(f, "BUSINESS LOOKUP #{}: {}", i + 1, outcome.owner)?;
            match (&outcome.status, &outcome.result) {
                (LookupStatus::Excluded(reason), _) => {
                    writeln!(f, "{}", RULE)?;
                    writeln!(f, "SKIPPED: {}", reason.as_str())?;
                }
                (LookupStatus::SearchFailed(message), _) => {
                    writeln!(f, "{}", RULE)?;
                    writeln!(f, "SEARCH FAILED: {}", message)?;
                }
                (_, Some(result)) => write!(f, "{}", ResultReport(result))?,
                (_, None) => writeln!(f, "{}", RULE)?,
            }
        }
        Ok(())
    }
}

pub fn render_batch<Tz: TimeZone>(outcomes: &[LookupOutcome], generated: DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    BatchReport {
        outcomes,
        generated,
    }
    .to_string()
}

/// Numbered one-block-per-owner summary used for filtered lists
pub fn render_summary(title: &str, outcomes: &[&LookupOutcome]) -> String {
    let mut lines = vec![
        RULE.to_string(),
        title.to_uppercase(),
        format!("Total: {}", outcomes.len()),
        RULE.to_string(),
    ];

    for (i, outcome) in outcomes.iter().enumerate() {
        let candidate = outcome.result.as_ref().and_then(|r| r.candidate.as_ref());
        let name = candidate.map_or(outcome.owner.as_str(), |c| c.name.as_str());
        let status = candidate.and_then(|c| c.detail("STATUS")).unwrap_or("Unknown");
        let address = candidate.and_then(|c| c.detail("ADDRESS")).unwrap_or("Unknown");

        lines.push(format!("{:3}. {}", i + 1, name));
        lines.push(format!(
            "     Owner: {} | Confidence: {}% | Status: {} | Address: {}",
            outcome.owner,
            outcome.confidence(),
            status,
            address
        ));
    }

    lines.push(RULE.to_string());
    lines.join("\n") + "\n"
}

// ============================================================================
// FILTERS
// ============================================================================

/// Searched owners that did not get a direct (95) match: candidates for review
pub fn unmatched(outcomes: &[LookupOutcome]) -> Vec<&LookupOutcome> {
    outcomes
        .iter()
        .filter(|o| !matches!(o.status, LookupStatus::Excluded(_)))
        .filter(|o| o.confidence() < 95)
        .collect()
}

/// Matched owners whose chosen candidate has the given business type
pub fn filter_by_business_type<'a>(
    outcomes: &'a [LookupOutcome],
    business_type: &str,
) -> Vec<&'a LookupOutcome> {
    let wanted = business_type.trim().to_lowercase();
    outcomes
        .iter()
        .filter(|o| {
            o.result
                .as_ref()
                .and_then(|r| r.candidate.as_ref())
                .and_then(|c| c.detail(BUSINESS_TYPE_KEY))
                .is_some_and(|t| t.trim().to_lowercase() == wanted)
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
