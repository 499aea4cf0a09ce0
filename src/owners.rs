// 🗺️ Owner Extraction - Owner names from GeoJSON parcel records
// Only the owner property is read; geometry is ignored.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Property holding the owner name in the parcel layer
pub const DEFAULT_OWNER_FIELD: &str = "OWNERNAME";

/// Read unique, trimmed, non-empty owner names (sorted) from a GeoJSON file
pub fn extract_owners<P: AsRef<Path>>(path: P, owner_field: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read GeoJSON file: {}", path.display()))?;

    let owners = owners_from_geojson(&content, owner_field)
        .with_context(|| format!("Failed to extract owners from {}", path.display()))?;

    tracing::info!(path = %path.display(), owners = owners.len(), "extracted owners");
    Ok(owners)
}

/// Same as [`extract_owners`] but over an in-memory document
pub fn owners_from_geojson(content: &str, owner_field: &str) -> Result<Vec<String>> {
    let data: Value = serde_json::from_str(content).context("Failed to parse GeoJSON")?;

    // FeatureCollection or a single Feature
    let features: Vec<&Value> = match data.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => data
            .get("features")
            .and_then(Value::as_array)
            .map(|f| f.iter().collect())
            .unwrap_or_default(),
        Some("Feature") => vec![&data],
        other => bail!("Expected a FeatureCollection or Feature, found {:?}", other),
    };

    let owners: BTreeSet<String> = features
        .iter()
        .filter_map(|feature| feature.get("properties"))
        .filter_map(|props| props.get(owner_field))
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|owner| !owner.is_empty())
        .map(str::to_string)
        .collect();

    Ok(owners.into_iter().collect())
}

// ============================================================================
// TESTS
// ============================================================================
