//! Similarity scoring between a user vector and catalog items.
//!
//! The canonical metric is a per-axis weighted Euclidean distance mapped
//! onto a bounded [0, 1] score. A cosine variant exists for compatibility
//! with an older scoring mode and must be selected explicitly.

use citrusmatch_core::{CatalogItem, FeatureVector, UserPreference, Weights, SCALE_SPAN};
use serde::{Deserialize, Serialize};

/// How item and preference vectors are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreStrategy {
    /// Weighted Euclidean distance, normalized by the worst-case distance
    /// for the given weights. The canonical metric.
    #[default]
    Euclidean,
    /// Unit-normalize both vectors and take the dot product. Weights are
    /// not consulted in this mode.
    Cosine,
}

/// A catalog item paired with its distance and match score.
#[derive(Debug, Clone)]
pub struct ScoredItem<'a> {
    pub item: &'a CatalogItem,
    pub distance: f32,
    pub score: f32,
}

/// Score every catalog row against the user vector.
///
/// Weights must already be validated: an all-zero weight vector makes the
/// maximum distance zero and the Euclidean score undefined, so the
/// recommender rejects it before calling in here.
#[must_use]
pub fn score_catalog<'a>(
    items: &'a [CatalogItem],
    user: &UserPreference,
    strategy: ScoreStrategy,
) -> Vec<ScoredItem<'a>> {
    match strategy {
        ScoreStrategy::Euclidean => {
            let max_distance = max_weighted_distance(user.weights());
            items
                .iter()
                .map(|item| {
                    let distance =
                        weighted_distance(&item.features, user.features(), user.weights());
                    ScoredItem {
                        item,
                        distance,
                        score: 1.0 - distance / max_distance,
                    }
                })
                .collect()
        }
        ScoreStrategy::Cosine => items
            .iter()
            .map(|item| {
                let score = cosine_similarity(&item.features, user.features());
                ScoredItem {
                    item,
                    distance: 1.0 - score,
                    score,
                }
            })
            .collect(),
    }
}

/// Largest weighted distance possible on the rating scale: every axis at
/// the worst-case gap of [`SCALE_SPAN`].
#[must_use]
pub fn max_weighted_distance(weights: &Weights) -> f32 {
    weights
        .as_array()
        .iter()
        .map(|w| (w * SCALE_SPAN).powi(2))
        .sum::<f32>()
        .sqrt()
}

fn weighted_distance(item: &FeatureVector, user: &FeatureVector, weights: &Weights) -> f32 {
    item.as_array()
        .iter()
        .zip(user.as_array())
        .zip(weights.as_array())
        .map(|((x, u), w)| (w * (x - u)).powi(2))
        .sum::<f32>()
        .sqrt()
}

fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> f32 {
    let dot: f32 = a
        .as_array()
        .iter()
        .zip(b.as_array())
        .map(|(x, y)| x * y)
        .sum();
    let norm_a = a.as_array().iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.as_array().iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
