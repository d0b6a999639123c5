//! User preferences: the ephemeral per-request input to the engine.

use crate::error::ConfigurationError;
use crate::feature::{FeatureAxis, FeatureVector, Weights, FEATURE_COUNT, SCALE_MAX, SCALE_MIN};
use crate::season::Season;
use serde::{Deserialize, Serialize};

/// Taste ratings as collaborators submit them, with request-side names.
///
/// The field order mirrors the canonical axis order: sweetness is brix,
/// sourness is acid, juiciness is moisture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasteRatings {
    pub sweetness: u8,
    pub sourness: u8,
    pub bitterness: u8,
    pub aroma: u8,
    pub juiciness: u8,
    pub texture: u8,
}

impl TasteRatings {
    fn as_canonical(&self) -> [u8; FEATURE_COUNT] {
        [
            self.sweetness,
            self.sourness,
            self.bitterness,
            self.aroma,
            self.juiciness,
            self.texture,
        ]
    }
}

/// One user's preferences for a single recommendation request.
///
/// Constructed fresh per request and never persisted by the engine.
/// Ratings are validated at construction; weights are validated by the
/// recommender right before scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreference {
    features: FeatureVector,
    weights: Weights,
    season_pref: Option<Season>,
}

impl UserPreference {
    /// Build a preference from request ratings, rejecting values outside
    /// the 1-6 scale. Catalog data gets clipped; user input does not.
    pub fn new(ratings: TasteRatings) -> Result<Self, ConfigurationError> {
        let canonical = ratings.as_canonical();
        for (axis, value) in FeatureAxis::ALL.iter().zip(canonical.iter()) {
            let value = f32::from(*value);
            if !(SCALE_MIN..=SCALE_MAX).contains(&value) {
                return Err(ConfigurationError::RatingOutOfRange { axis: *axis, value });
            }
        }
        Ok(Self {
            features: FeatureVector::new(canonical.map(f32::from)),
            weights: Weights::uniform(),
            season_pref: None,
        })
    }

    #[inline]
    #[must_use]
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_season(mut self, season: Season) -> Self {
        self.season_pref = Some(season);
        self
    }

    #[inline]
    #[must_use]
    pub fn features(&self) -> &FeatureVector {
        &self.features
    }

    #[inline]
    #[must_use]
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    #[inline]
    #[must_use]
    pub fn season_pref(&self) -> Option<Season> {
        self.season_pref
    }
}
