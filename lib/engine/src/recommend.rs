//! The recommender facade: one entry point running the whole scoring
//! pipeline and returning an explicit result object.

use crate::boost::{apply_season_boost, DEFAULT_SEASON_BOOST};
use crate::rank::{rank, top_k, RankedResult};
use crate::score::{score_catalog, ScoreStrategy};
use citrusmatch_core::{CatalogItem, Error, Result, UserPreference};
use serde::Serialize;
use tracing::debug;

/// Default number of results exposed as `top_ids`.
pub const DEFAULT_TOP_K: usize = 3;

/// Configuration for one recommendation pipeline.
#[derive(Debug, Clone)]
pub struct Recommender {
    strategy: ScoreStrategy,
    season_boost: f32,
    top_k: usize,
}

impl Default for Recommender {
    fn default() -> Self {
        Self {
            strategy: ScoreStrategy::default(),
            season_boost: DEFAULT_SEASON_BOOST,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl Recommender {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_strategy(mut self, strategy: ScoreStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_season_boost(mut self, bonus: f32) -> Self {
        self.season_boost = bonus;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    /// Score, boost and rank a prepared catalog against one preference.
    ///
    /// Pure over its inputs: the same catalog and preference always
    /// produce the same ordered sequence. Fails with a
    /// `ConfigurationError` on invalid weights and `EmptyCatalog` when
    /// there is nothing to score.
    pub fn recommend(
        &self,
        items: &[CatalogItem],
        user: &UserPreference,
    ) -> Result<Recommendation> {
        user.weights().validate()?;
        if items.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut scored = score_catalog(items, user, self.strategy);
        apply_season_boost(&mut scored, user.season_pref(), self.season_boost);
        let results = rank(scored);

        debug!(
            candidates = items.len(),
            top_k = self.top_k,
            best_score = ?results.first().map(|r| r.score),
            "ranked catalog"
        );

        Ok(Recommendation {
            results,
            top_k: self.top_k,
        })
    }
}

/// The result of one recommendation request.
///
/// Returned by value and threaded through the caller explicitly; the
/// engine keeps no state between requests.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    results: Vec<RankedResult>,
    top_k: usize,
}

impl Recommendation {
    /// The full ranked sequence, best match first.
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[RankedResult] {
        &self.results
    }

    /// The top-K slice of the ranking.
    #[inline]
    #[must_use]
    pub fn top(&self) -> &[RankedResult] {
        top_k(&self.results, self.top_k)
    }

    /// Identifiers of the top-K items, in rank order.
    #[must_use]
    pub fn top_ids(&self) -> Vec<u64> {
        self.top().iter().map(|r| r.id).collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
