mod elapsed_time_policy;
mod learned_speed_model;
mod mean_accumulator;
mod speed_featurizer;

pub use elapsed_time_policy::ElapsedTimePolicy;
pub use learned_speed_model::LearnedSpeedModel;
pub use mean_accumulator::MeanAccumulator;
pub use speed_featurizer::SpeedFeaturizer;
