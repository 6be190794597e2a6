pub mod distance;
mod featurizer;
mod featurizer_error;
pub mod speed;
pub mod temporal;

pub use distance::DistanceFeaturizer;
pub use featurizer::Featurizer;
pub use featurizer_error::FeaturizerError;
pub use speed::SpeedFeaturizer;
pub use temporal::TemporalFeaturizer;
