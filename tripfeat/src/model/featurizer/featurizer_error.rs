use tripfeat_core::util::GeoDistanceError;

#[derive(thiserror::Error, Debug)]
pub enum FeaturizerError {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("required column '{0}' is missing from input")]
    MissingColumnError(String),
    #[error("failed to parse pickup timestamp '{value}' at row {row}: {source}")]
    TimestampParseError {
        row: usize,
        value: String,
        source: chrono::ParseError,
    },
    #[error("{featurizer} featurizer requires a trip duration target during fit")]
    MissingTargetError { featurizer: String },
    #[error("trip duration target has {found} rows but the trip batch has {expected}")]
    TargetLengthError { expected: usize, found: usize },
    #[error("elapsed time at row {row} is {value} seconds, expected a finite value greater than zero")]
    InvalidElapsedTimeError { row: usize, value: f64 },
    #[error("{featurizer} featurizer was used before being fit, call fit first")]
    NotFittedError { featurizer: String },
    #[error("feature column '{column}' has {found} rows, expected {expected}")]
    ColumnLengthError {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("feature column '{0}' appears more than once")]
    DuplicateColumnError(String),
}

impl From<GeoDistanceError> for FeaturizerError {
    fn from(value: GeoDistanceError) -> Self {
        FeaturizerError::MalformedInput(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_unaligned_sequences_are_malformed_input() {
        let error = FeaturizerError::from(GeoDistanceError::UnalignedSequencesError {
            origins: 1,
            destinations: 0,
        });
        match error {
            FeaturizerError::MalformedInput(msg) => {
                assert!(msg.contains("1 origins and 0 destinations"), "{msg}")
            }
            other => panic!("expected malformed input, found {other:?}"),
        }
    }
}
