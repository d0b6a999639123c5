//! # citrusmatch-core
//!
//! Canonical data model for the citrusmatch preference matching engine.
//!
//! This crate defines the vocabulary every other crate speaks:
//!
//! - [`FeatureAxis`] / [`FeatureVector`] - the six taste axes on a shared
//!   1-6 scale, in a fixed canonical order
//! - [`CatalogItem`] - one normalized, scorable catalog row
//! - [`UserPreference`] / [`TasteRatings`] / [`Weights`] - the per-request
//!   input
//! - [`Season`] / [`SeasonSet`] - season tags on items and requests
//! - the error taxonomy: [`SchemaError`] (broken catalog source),
//!   [`ConfigurationError`] (invalid request), and `EmptyCatalog`
//!
//! It contains no behavior beyond validation and parsing; normalization
//! lives in `citrusmatch-catalog` and scoring in `citrusmatch-engine`.

pub mod error;
pub mod feature;
pub mod item;
pub mod preference;
pub mod season;

pub use error::{ConfigurationError, Error, Result, SchemaError};
pub use feature::{
    FeatureAxis, FeatureVector, Weights, FEATURE_COUNT, SCALE_MAX, SCALE_MIN, SCALE_SPAN,
};
pub use item::CatalogItem;
pub use preference::{TasteRatings, UserPreference};
pub use season::{Season, SeasonSet};
