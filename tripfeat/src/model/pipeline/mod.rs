mod feature_pipeline;
mod feature_pipeline_config;
mod featurizer_config;

pub use feature_pipeline::FeaturePipeline;
pub use feature_pipeline_config::FeaturePipelineConfig;
pub use featurizer_config::FeaturizerConfig;
