use crate::feature::FeatureAxis;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the matching engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("catalog has no scorable rows after cleaning")]
    EmptyCatalog,
}

/// The catalog source is structurally unusable; the caller must fix the
/// source data or re-fetch. Never produces a partial catalog.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("missing required feature columns {missing:?}; columns present: {present:?}")]
    MissingFeatures {
        missing: Vec<&'static str>,
        present: Vec<String>,
    },

    #[error("row {row} has {got} cells but the table declares {expected} columns")]
    RowShape {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// The request parameters are invalid; the caller should re-prompt.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("rating for {axis} is {value}, outside the 1-6 scale")]
    RatingOutOfRange { axis: FeatureAxis, value: f32 },

    #[error("weight for {axis} is negative ({value})")]
    NegativeWeight { axis: FeatureAxis, value: f32 },

    #[error("all weights are zero; the maximum distance would be undefined")]
    ZeroWeights,

    #[error("unknown season: {0:?}")]
    UnknownSeason(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_names_missing_and_present_columns() {
        let err = SchemaError::MissingFeatures {
            missing: vec!["brix", "acid"],
            present: vec!["name".to_string(), "season".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("brix"));
        assert!(msg.contains("season"));
    }

    #[test]
    fn errors_convert_into_the_top_level_type() {
        let err: Error = ConfigurationError::ZeroWeights.into();
        assert!(matches!(err, Error::Configuration(ConfigurationError::ZeroWeights)));
    }
}
