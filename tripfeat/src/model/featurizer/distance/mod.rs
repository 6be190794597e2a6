mod distance_featurizer;

pub use distance_featurizer::DistanceFeaturizer;
