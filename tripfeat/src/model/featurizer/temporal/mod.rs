mod temporal_featurizer;
mod timestamp_ops;

pub use temporal_featurizer::TemporalFeaturizer;
pub use timestamp_ops::parse_pickup_datetime;
