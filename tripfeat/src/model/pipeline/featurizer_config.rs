use super::FeaturePipelineConfig;
use crate::model::featurizer::{
    DistanceFeaturizer, Featurizer, SpeedFeaturizer, TemporalFeaturizer,
};
use serde::{Deserialize, Serialize};

/// a single featurizer entry in a pipeline configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum FeaturizerConfig {
    /// pickup weekday and hour
    Temporal,
    /// pickup to dropoff haversine distance
    Distance,
    /// learned mean speed of the pickup region
    Speed,
}

impl FeaturizerConfig {
    /// builds an unfit featurizer, taking shared settings from the pipeline configuration.
    pub fn build(&self, pipeline: &FeaturePipelineConfig) -> Box<dyn Featurizer> {
        match self {
            FeaturizerConfig::Temporal => Box::new(TemporalFeaturizer::default()),
            FeaturizerConfig::Distance => Box::new(DistanceFeaturizer::new(pipeline.distance_unit)),
            FeaturizerConfig::Speed => Box::new(SpeedFeaturizer::new(
                pipeline.distance_unit,
                pipeline.elapsed_time_policy,
            )),
        }
    }
}
