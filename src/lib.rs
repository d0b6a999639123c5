//! # citrusmatch
//!
//! A preference matching and ranking engine for small taste-profile
//! catalogs.
//!
//! citrusmatch takes six 1-6 taste ratings (plus optional per-axis weights
//! and a preferred season) and returns the catalog items whose feature
//! profile best matches them, with a deterministic tie-break and a small
//! additive season bonus.
//!
//! ## Quick Start
//!
//! ```rust
//! use citrusmatch::prelude::*;
//!
//! // Prepare a catalog (here the embedded sample; collaborators usually
//! // hand over a RawTable built from an external source).
//! let catalog = prepare(&sample_table()).unwrap();
//!
//! // Describe the user's preferences.
//! let user = UserPreference::new(TasteRatings {
//!     sweetness: 5,
//!     sourness: 2,
//!     bitterness: 1,
//!     aroma: 3,
//!     juiciness: 5,
//!     texture: 2,
//! })
//! .unwrap()
//! .with_season(Season::Winter);
//!
//! // Rank and take the top three.
//! let recommendation = Recommender::new().recommend(catalog.items(), &user).unwrap();
//! assert_eq!(recommendation.top_ids().len(), 3);
//! ```
//!
//! ## Crate Structure
//!
//! citrusmatch is composed of several crates:
//!
//! - [`citrusmatch-core`](https://docs.rs/citrusmatch-core) - data model
//!   (feature axes, catalog items, preferences, errors)
//! - [`citrusmatch-catalog`](https://docs.rs/citrusmatch-catalog) - schema
//!   normalization, feature coercion, prepared-catalog cache
//! - [`citrusmatch-engine`](https://docs.rs/citrusmatch-engine) - scoring,
//!   season boosting, ranking
//!
//! ## Pipeline
//!
//! ```text
//! raw table ──> normalize ──> build ──> PreparedCatalog
//!                                            │
//! TasteRatings + Weights + Season ──> score ─┴─> boost ──> rank ──> top-K
//! ```

// Re-export core types
pub use citrusmatch_core::{
    CatalogItem, ConfigurationError, Error, FeatureAxis, FeatureVector, Result, SchemaError,
    Season, SeasonSet, TasteRatings, UserPreference, Weights, FEATURE_COUNT, SCALE_MAX, SCALE_MIN,
    SCALE_SPAN,
};

// Re-export catalog preparation
pub use citrusmatch_catalog::{
    build, normalize, prepare, sample_table, CacheKey, CatalogCache, PreparedCatalog, RawTable,
};

// Re-export the engine
pub use citrusmatch_engine::{
    apply_season_boost, max_weighted_distance, rank, score_catalog, top_k, RankedResult,
    Recommendation, Recommender, ScoreStrategy, ScoredItem, DEFAULT_SEASON_BOOST, DEFAULT_TOP_K,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        prepare, sample_table, CacheKey, CatalogCache, CatalogItem, Error, FeatureAxis,
        FeatureVector, PreparedCatalog, RankedResult, RawTable, Recommendation, Recommender,
        Result, SchemaError, ScoreStrategy, Season, SeasonSet, TasteRatings, UserPreference,
        Weights,
    };
}
