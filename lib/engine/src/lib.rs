//! # citrusmatch-engine
//!
//! Similarity scoring, season boosting and ranking over a prepared
//! catalog.
//!
//! The pipeline is a sequence of pure functions; the [`Recommender`]
//! facade runs them in order and returns an explicit [`Recommendation`]
//! object, never holding state between requests:
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Scorer    │────>│   Booster   │────>│   Ranker    │
//! │ (distance)  │     │ (+0.03,clip)│     │ (desc, asc) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use citrusmatch_core::{CatalogItem, FeatureVector, TasteRatings, UserPreference};
//! use citrusmatch_engine::Recommender;
//!
//! let catalog = vec![CatalogItem::new(
//!     1,
//!     "Mikan",
//!     FeatureVector::new([5.0, 2.0, 1.0, 3.0, 5.0, 2.0]),
//! )];
//! let user = UserPreference::new(TasteRatings {
//!     sweetness: 5,
//!     sourness: 2,
//!     bitterness: 1,
//!     aroma: 3,
//!     juiciness: 5,
//!     texture: 2,
//! })
//! .unwrap();
//!
//! let recommendation = Recommender::new().recommend(&catalog, &user).unwrap();
//! assert_eq!(recommendation.top_ids(), vec![1]);
//! ```

pub mod boost;
pub mod rank;
pub mod recommend;
pub mod score;

// Re-export main types for convenience
pub use boost::{apply_season_boost, DEFAULT_SEASON_BOOST};
pub use rank::{rank, top_k, RankedResult};
pub use recommend::{Recommendation, Recommender, DEFAULT_TOP_K};
pub use score::{max_weighted_distance, score_catalog, ScoreStrategy, ScoredItem};
