//! Feature vector builder: refining normalized rows into scorable items.
//!
//! Feature cells are coerced to numbers and clipped into the 1-6 scale;
//! rows with any unparseable feature are dropped rather than imputed, since
//! a partially rated item cannot be compared fairly on a distance metric.

use crate::normalize::normalize;
use crate::table::RawTable;
use citrusmatch_core::{
    CatalogItem, Error, FeatureAxis, FeatureVector, Result, SeasonSet, FEATURE_COUNT,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::warn;

/// An immutable snapshot of a fully prepared catalog.
///
/// Cloning is cheap (the item list is shared), which is what lets the
/// cache hand the same snapshot to many concurrent readers.
#[derive(Debug, Clone)]
pub struct PreparedCatalog {
    items: Arc<Vec<CatalogItem>>,
}

impl PreparedCatalog {
    #[inline]
    #[must_use]
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look an item up by id, for collaborators resolving `top_ids`.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Normalize and build a raw table into a prepared catalog.
///
/// This is the whole load pipeline: schema resolution, numeric coercion,
/// clipping, incomplete-row dropping. Fails with [`Error::EmptyCatalog`]
/// when no row survives cleaning.
pub fn prepare(table: &RawTable) -> Result<PreparedCatalog> {
    let rows = normalize(table)?;
    let items = build(rows);
    if items.is_empty() {
        return Err(Error::EmptyCatalog);
    }
    Ok(PreparedCatalog::new(items))
}

/// Turn normalized rows into catalog items, dropping unusable rows.
#[must_use]
pub fn build(rows: Vec<Map<String, Value>>) -> Vec<CatalogItem> {
    let total = rows.len();
    let items: Vec<CatalogItem> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| build_row(index, row))
        .collect();

    let dropped = total - items.len();
    if dropped > 0 {
        warn!(dropped, total, "dropped rows with missing feature values");
    }
    items
}

fn build_row(index: usize, mut row: Map<String, Value>) -> Option<CatalogItem> {
    let mut values = [0.0f32; FEATURE_COUNT];
    for axis in FeatureAxis::ALL {
        let cell = row.remove(axis.canonical_name());
        values[axis.index()] = parse_feature(cell.as_ref())?;
    }
    let features = FeatureVector::new(values).clamped_to_scale();

    let id = row
        .remove("id")
        .and_then(|v| parse_id(&v))
        .unwrap_or(index as u64 + 1);
    let name = match row.remove("name") {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => format!("item_{index}"),
    };
    let seasons = match row.remove("season") {
        Some(Value::String(s)) => SeasonSet::parse(&s),
        _ => SeasonSet::new(),
    };

    let mut item = CatalogItem::new(id, name, features).with_seasons(seasons);
    if let Some(url) = take_string(&mut row, "image_url") {
        item = item.with_image_url(url);
    }
    if let Some(description) = take_string(&mut row, "description") {
        item = item.with_description(description);
    }
    item.extra = row;
    Some(item)
}

/// Coerce one feature cell to a number. Unparseable cells are missing,
/// never zero.
fn parse_feature(cell: Option<&Value>) -> Option<f32> {
    let parsed = match cell? {
        Value::Number(n) => n.as_f64().map(|f| f as f32),
        Value::String(s) => s.trim().parse::<f32>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

fn parse_id(cell: &Value) -> Option<u64> {
    match cell {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

fn take_string(row: &mut Map<String, Value>, key: &str) -> Option<String> {
    match row.remove(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citrusmatch_core::Season;
    use serde_json::json;

    fn feature_table(rows: Vec<Vec<Value>>) -> RawTable {
        RawTable::new(
            ["name", "brix", "acid", "bitterness", "aroma", "moisture", "texture", "season"]
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
            rows,
        )
        .unwrap()
    }

    #[test]
    fn out_of_scale_values_are_clipped() {
        let t = feature_table(vec![vec![
            json!("Mikan"),
            json!(0),
            json!(9),
            json!(3),
            json!(3),
            json!(3),
            json!(3),
            json!(""),
        ]]);
        let catalog = prepare(&t).unwrap();
        let features = catalog.items()[0].features.as_array();
        assert_eq!(features[0], 1.0);
        assert_eq!(features[1], 6.0);
    }

    #[test]
    fn numeric_strings_parse_as_features() {
        let t = feature_table(vec![vec![
            json!("Mikan"),
            json!(" 5 "),
            json!("2"),
            json!(1),
            json!(3),
            json!(5),
            json!(2),
            json!("winter"),
        ]]);
        let catalog = prepare(&t).unwrap();
        assert_eq!(catalog.items()[0].features.as_array(), &[5.0, 2.0, 1.0, 3.0, 5.0, 2.0]);
    }

    #[test]
    fn rows_with_missing_features_are_dropped() {
        let t = feature_table(vec![
            vec![
                json!("good"),
                json!(5),
                json!(2),
                json!(1),
                json!(3),
                json!(5),
                json!(2),
                json!(""),
            ],
            vec![
                json!("bad"),
                json!("not a number"),
                json!(2),
                json!(1),
                json!(3),
                json!(5),
                json!(2),
                json!(""),
            ],
            vec![
                json!("also bad"),
                Value::Null,
                json!(2),
                json!(1),
                json!(3),
                json!(5),
                json!(2),
                json!(""),
            ],
        ]);
        let catalog = prepare(&t).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].name, "good");
    }

    #[test]
    fn all_rows_unusable_is_an_empty_catalog() {
        let t = feature_table(vec![vec![
            json!("bad"),
            Value::Null,
            json!(2),
            json!(1),
            json!(3),
            json!(5),
            json!(2),
            json!(""),
        ]]);
        assert!(matches!(prepare(&t), Err(Error::EmptyCatalog)));
    }

    #[test]
    fn seasons_and_display_fields_are_carried() {
        let t = RawTable::new(
            [
                "name", "brix", "acid", "bitterness", "aroma", "moisture", "texture", "season",
                "image_url", "description", "origin",
            ]
            .iter()
            .map(|c| (*c).to_string())
            .collect(),
            vec![vec![
                json!("Mikan"),
                json!(5),
                json!(2),
                json!(1),
                json!(3),
                json!(5),
                json!(2),
                json!("Winter, spring"),
                json!("https://example.com/mikan.jpg"),
                json!("sweet and easy to peel"),
                json!("Ehime"),
            ]],
        )
        .unwrap();
        let catalog = prepare(&t).unwrap();
        let item = &catalog.items()[0];
        assert!(item.seasons.contains(Season::Winter));
        assert!(item.seasons.contains(Season::Spring));
        assert_eq!(item.image_url.as_deref(), Some("https://example.com/mikan.jpg"));
        assert_eq!(item.description.as_deref(), Some("sweet and easy to peel"));
        assert_eq!(item.extra["origin"], json!("Ehime"));
    }

    #[test]
    fn unparseable_id_falls_back_to_row_position() {
        let t = RawTable::new(
            ["id", "brix", "acid", "bitterness", "aroma", "moisture", "texture"]
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
            vec![vec![
                json!("not-an-id"),
                json!(1),
                json!(2),
                json!(3),
                json!(4),
                json!(5),
                json!(6),
            ]],
        )
        .unwrap();
        let catalog = prepare(&t).unwrap();
        assert_eq!(catalog.items()[0].id, 1);
    }
}
