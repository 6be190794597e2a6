mod feature_batch;
mod feature_column;

pub use feature_batch::FeatureBatch;
pub use feature_column::FeatureColumn;
