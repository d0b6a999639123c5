//! Catalog items: the normalized rows the engine scores against.

use crate::feature::FeatureVector;
use crate::season::SeasonSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of the normalized catalog.
///
/// Every item that reaches the scorer has all six features present and
/// clipped into the rating scale; the feature vector builder guarantees
/// this before an item is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique within a catalog load; synthesized 1-based when the source
    /// table has no id column.
    pub id: u64,
    /// Human-readable label; synthesized as `item_<row-index>` when the
    /// source table has no name column.
    pub name: String,
    pub features: FeatureVector,
    #[serde(default, skip_serializing_if = "SeasonSet::is_empty")]
    pub seasons: SeasonSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Collaborator-only display columns, passed through unchanged.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl CatalogItem {
    #[inline]
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, features: FeatureVector) -> Self {
        Self {
            id,
            name: name.into(),
            features,
            seasons: SeasonSet::new(),
            image_url: None,
            description: None,
            extra: Map::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_seasons(mut self, seasons: SeasonSet) -> Self {
        self.seasons = seasons;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
