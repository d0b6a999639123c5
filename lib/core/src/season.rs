//! Season tags attached to catalog items and to requests.

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One of the four canonical seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = ConfigurationError;

    /// Case-insensitive, whitespace-tolerant parse of a season name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" => Ok(Season::Autumn),
            _ => Err(ConfigurationError::UnknownSeason(s.trim().to_string())),
        }
    }
}

/// Set of season tags on a catalog item. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonSet(BTreeSet<Season>);

impl SeasonSet {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw catalog cell into a season set.
    ///
    /// The cell is split on commas, each token trimmed and lower-cased.
    /// Tokens that are not one of the four canonical seasons are dropped;
    /// empty cells parse to the empty set.
    #[must_use]
    pub fn parse(cell: &str) -> Self {
        cell.split(',')
            .filter_map(|token| Season::from_str(token).ok())
            .collect()
    }

    pub fn insert(&mut self, season: Season) {
        self.0.insert(season);
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, season: Season) -> bool {
        self.0.contains(&season)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Season> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Season> for SeasonSet {
    fn from_iter<T: IntoIterator<Item = Season>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(" Winter ".parse::<Season>().unwrap(), Season::Winter);
        assert_eq!("AUTUMN".parse::<Season>().unwrap(), Season::Autumn);
    }

    #[test]
    fn unknown_season_is_rejected() {
        let err = "monsoon".parse::<Season>().unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownSeason(s) if s == "monsoon"));
    }

    #[test]
    fn set_parse_splits_on_commas() {
        let set = SeasonSet::parse("Winter, spring");
        assert_eq!(set.len(), 2);
        assert!(set.contains(Season::Winter));
        assert!(set.contains(Season::Spring));
    }

    #[test]
    fn set_parse_drops_unknown_tokens() {
        let set = SeasonSet::parse("winter, 冬, always");
        assert_eq!(set.len(), 1);
        assert!(set.contains(Season::Winter));
    }

    #[test]
    fn empty_cell_parses_to_empty_set() {
        assert!(SeasonSet::parse("").is_empty());
        assert!(SeasonSet::parse("  ,  ").is_empty());
    }
}
