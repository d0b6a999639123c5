//! Embedded sample catalog for demos and tests.

use crate::table::RawTable;
use serde_json::json;

/// A small built-in catalog of three classic citrus varieties.
///
/// The column names are deliberately the aliased forms seen in real source
/// files (`Item_name`, `bitter`, `smell`, `elastic`, `image_path`), so the
/// fixture exercises the normalizer the same way an external catalog does.
#[must_use]
pub fn sample_table() -> RawTable {
    let records = vec![
        json!({
            "Item_name": "Mikan",
            "brix": 5,
            "acid": 2,
            "bitter": 1,
            "smell": 3,
            "moisture": 5,
            "elastic": 2,
            "season": "winter",
            "description": "Sweet, seedless, and easy to peel",
            "image_path": "https://via.placeholder.com/200x150?text=Mikan"
        }),
        json!({
            "Item_name": "Ponkan",
            "brix": 4,
            "acid": 3,
            "bitter": 2,
            "smell": 4,
            "moisture": 4,
            "elastic": 3,
            "season": "winter, spring",
            "description": "Fragrant with a rich, honeyed flavor",
            "image_path": "https://via.placeholder.com/200x150?text=Ponkan"
        }),
        json!({
            "Item_name": "Hassaku",
            "brix": 3,
            "acid": 4,
            "bitter": 3,
            "smell": 2,
            "moisture": 3,
            "elastic": 4,
            "season": "spring",
            "description": "Refreshingly tart with a firm bite",
            "image_path": "https://via.placeholder.com/200x150?text=Hassaku"
        }),
    ];
    RawTable::from_records(&records)
}
