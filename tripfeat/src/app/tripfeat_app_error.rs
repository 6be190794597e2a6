use crate::model::featurizer::FeaturizerError;

#[derive(thiserror::Error, Debug)]
pub enum TripFeatAppError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failed reading '{filepath}': {source}")]
    CsvReadError { filepath: String, source: csv::Error },
    #[error("failed writing '{filepath}': {source}")]
    CsvWriteError { filepath: String, source: csv::Error },
    #[error("failed writing '{filepath}': {source}")]
    IoError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("'{filepath}': {source}")]
    InputError {
        filepath: String,
        source: FeaturizerError,
    },
    #[error(transparent)]
    FeaturizerError(#[from] FeaturizerError),
    #[error("failed serializing learned speeds: {0}")]
    JsonError(#[from] serde_json::Error),
}
