//! Ranking: the deterministic total order over scored rows and the top-K
//! view collaborators consume.

use crate::score::ScoredItem;
use citrusmatch_core::SeasonSet;
use ordered_float::OrderedFloat;
use serde::Serialize;
use serde_json::{Map, Value};

/// One row of the ranked output, carrying the display fields presentation
/// collaborators render.
#[derive(Debug, Clone, Serialize)]
pub struct RankedResult {
    pub id: u64,
    pub name: String,
    pub score: f32,
    pub distance: f32,
    #[serde(skip_serializing_if = "SeasonSet::is_empty")]
    pub seasons: SeasonSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RankedResult {
    fn from_scored(row: ScoredItem<'_>) -> Self {
        Self {
            id: row.item.id,
            name: row.item.name.clone(),
            score: row.score,
            distance: row.distance,
            seasons: row.item.seasons.clone(),
            image_url: row.item.image_url.clone(),
            description: row.item.description.clone(),
            extra: row.item.extra.clone(),
        }
    }
}

/// Sort scored rows into the total order: score descending, then name
/// ascending.
///
/// `OrderedFloat` gives floats a total order, so equal-scoring items tie
/// break on name and the sequence is reproducible across runs.
#[must_use]
pub fn rank(mut scored: Vec<ScoredItem<'_>>) -> Vec<RankedResult> {
    scored.sort_by(|a, b| {
        OrderedFloat(b.score)
            .cmp(&OrderedFloat(a.score))
            .then_with(|| a.item.name.cmp(&b.item.name))
    });
    scored.into_iter().map(RankedResult::from_scored).collect()
}

/// First `k` entries of a ranked sequence; all of them when fewer exist.
#[must_use]
pub fn top_k(ranked: &[RankedResult], k: usize) -> &[RankedResult] {
    &ranked[..ranked.len().min(k)]
}
