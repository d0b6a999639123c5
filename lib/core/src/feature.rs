//! The six canonical taste axes and their fixed 1-6 rating scale.
//!
//! Every catalog item and every user preference is a point in the same
//! six-dimensional space, in the same axis order. Keeping the order in one
//! place is what makes item vectors and preference vectors comparable.

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest valid rating on the scale.
pub const SCALE_MIN: f32 = 1.0;
/// Highest valid rating on the scale.
pub const SCALE_MAX: f32 = 6.0;
/// Worst-case gap between two ratings on a single axis.
pub const SCALE_SPAN: f32 = SCALE_MAX - SCALE_MIN;
/// Number of canonical feature axes.
pub const FEATURE_COUNT: usize = 6;

/// One of the six canonical taste axes.
///
/// The discriminant order is the canonical vector order; it must never
/// change, or stored vectors stop lining up with request vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureAxis {
    Brix,
    Acid,
    Bitterness,
    Aroma,
    Moisture,
    Texture,
}

impl FeatureAxis {
    /// All axes in canonical vector order.
    pub const ALL: [FeatureAxis; FEATURE_COUNT] = [
        FeatureAxis::Brix,
        FeatureAxis::Acid,
        FeatureAxis::Bitterness,
        FeatureAxis::Aroma,
        FeatureAxis::Moisture,
        FeatureAxis::Texture,
    ];

    /// Canonical catalog column name for this axis.
    #[inline]
    #[must_use]
    pub fn canonical_name(self) -> &'static str {
        match self {
            FeatureAxis::Brix => "brix",
            FeatureAxis::Acid => "acid",
            FeatureAxis::Bitterness => "bitterness",
            FeatureAxis::Aroma => "aroma",
            FeatureAxis::Moisture => "moisture",
            FeatureAxis::Texture => "texture",
        }
    }

    /// Name the axis goes by on the request side of the boundary.
    #[inline]
    #[must_use]
    pub fn request_name(self) -> &'static str {
        match self {
            FeatureAxis::Brix => "sweetness",
            FeatureAxis::Acid => "sourness",
            FeatureAxis::Bitterness => "bitterness",
            FeatureAxis::Aroma => "aroma",
            FeatureAxis::Moisture => "juiciness",
            FeatureAxis::Texture => "texture",
        }
    }

    /// Position of this axis in the canonical vector.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FeatureAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// A six-dimensional feature vector in canonical axis order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f32; FEATURE_COUNT]);

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, axis: FeatureAxis) -> f32 {
        self.0[axis.index()]
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.0
    }

    /// Clip every component into the valid rating scale.
    #[must_use]
    pub fn clamped_to_scale(self) -> Self {
        Self(self.0.map(|v| v.clamp(SCALE_MIN, SCALE_MAX)))
    }

    /// Iterate components paired with their axis.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureAxis, f32)> + '_ {
        FeatureAxis::ALL.iter().map(move |&axis| (axis, self.0[axis.index()]))
    }
}

/// Per-axis weights applied by the similarity scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weights([f32; FEATURE_COUNT]);

impl Default for Weights {
    fn default() -> Self {
        Self::uniform()
    }
}

impl Weights {
    #[inline]
    #[must_use]
    pub fn new(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// All-ones weights: every axis counts equally.
    #[inline]
    #[must_use]
    pub fn uniform() -> Self {
        Self([1.0; FEATURE_COUNT])
    }

    #[inline]
    #[must_use]
    pub fn get(&self, axis: FeatureAxis) -> f32 {
        self.0[axis.index()]
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.0
    }

    /// Reject weight vectors the scorer cannot normalize by.
    ///
    /// Negative weights have no meaning on a distance metric, and an
    /// all-zero vector makes the maximum distance zero, so both are
    /// configuration errors rather than something to clamp silently.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (axis, w) in FeatureAxis::ALL.iter().zip(self.0.iter()) {
            if *w < 0.0 {
                return Err(ConfigurationError::NegativeWeight {
                    axis: *axis,
                    value: *w,
                });
            }
        }
        if self.0.iter().all(|w| *w == 0.0) {
            return Err(ConfigurationError::ZeroWeights);
        }
        Ok(())
    }
}
