//! Schema normalization: mapping arbitrary catalog columns onto the
//! canonical schema.
//!
//! Source catalogs arrive with whatever column names their maintainers
//! chose (`Sweetness`, `sugar`, `Item_name`, ...). Normalization cleans the
//! names, resolves a fixed alias table, and synthesizes the identifier
//! columns, so the feature vector builder only ever sees canonical keys.

use crate::table::RawTable;
use ahash::AHashMap;
use citrusmatch_core::{FeatureAxis, SchemaError};
use serde_json::{Map, Value};
use tracing::debug;

/// Alias lists for the six canonical feature columns, in resolution order.
/// The canonical name leads each list, so an existing canonical column
/// always wins over an alias.
const FEATURE_ALIASES: [(&str, &[&str]); 6] = [
    ("brix", &["brix", "sweet", "sweetness", "sugar"]),
    ("acid", &["acid", "acidity", "sour", "sourness"]),
    ("bitterness", &["bitterness", "bitter"]),
    ("aroma", &["aroma", "smell", "fragrance", "flavor", "flavour"]),
    ("moisture", &["moisture", "juicy", "juiciness"]),
    ("texture", &["texture", "elastic", "firmness", "pulpiness"]),
];

/// Alias lists for the non-feature canonical columns.
const COLUMN_ALIASES: [(&str, &[&str]); 4] = [
    ("season", &["season", "seasons", "season_pref", "in_season"]),
    ("image_url", &["image_url", "image", "image_path", "img", "photo"]),
    ("name", &["name", "品種名", "citrus_name", "item_name", "title"]),
    ("id", &["id", "item_id", "no"]),
];

/// Map a raw table onto the canonical schema.
///
/// Column names are trimmed and lower-cased, then each canonical target is
/// resolved to the first of its aliases present in the table. Unresolved
/// `name` and `id` columns are synthesized from row position (`item_<i>`
/// 0-based, ids 1-based). Columns that resolve to no canonical target pass
/// through unchanged under their cleaned names.
///
/// Fails with [`SchemaError::MissingFeatures`] when any of the six feature
/// columns cannot be resolved; a catalog without a full feature schema is
/// unusable and must not be partially loaded.
pub fn normalize(table: &RawTable) -> Result<Vec<Map<String, Value>>, SchemaError> {
    let cleaned: Vec<String> = table
        .columns()
        .iter()
        .map(|c| c.trim().to_lowercase())
        .collect();

    let mut resolved: AHashMap<&'static str, usize> = AHashMap::new();
    let mut consumed = vec![false; cleaned.len()];
    for (canonical, aliases) in FEATURE_ALIASES.iter().chain(COLUMN_ALIASES.iter()) {
        if let Some(idx) = aliases
            .iter()
            .find_map(|alias| cleaned.iter().position(|c| c == alias))
        {
            resolved.insert(*canonical, idx);
            consumed[idx] = true;
        }
    }

    let missing: Vec<&'static str> = FeatureAxis::ALL
        .iter()
        .map(|axis| axis.canonical_name())
        .filter(|name| !resolved.contains_key(name))
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingFeatures {
            missing,
            present: cleaned,
        });
    }

    debug!(
        columns = cleaned.len(),
        resolved = resolved.len(),
        rows = table.len(),
        "normalized catalog schema"
    );

    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut out = Map::new();
            for (canonical, idx) in &resolved {
                out.insert((*canonical).to_string(), row[*idx].clone());
            }
            for (idx, column) in cleaned.iter().enumerate() {
                if !consumed[idx] && !out.contains_key(column) {
                    out.insert(column.clone(), row[idx].clone());
                }
            }
            if !out.contains_key("name") {
                out.insert("name".to_string(), Value::String(format!("item_{i}")));
            }
            if !out.contains_key("id") {
                out.insert("id".to_string(), Value::from(i as u64 + 1));
            }
            out
        })
        .collect();

    Ok(rows)
}
