use super::{trip_csv_ops, TripFeatAppError};
use crate::model::{
    feature::FeatureBatch,
    featurizer::speed::{LearnedSpeedModel, SpeedFeaturizer},
    pipeline::{FeaturePipeline, FeaturePipelineConfig},
};

/// loads the layered pipeline configuration, applying a command line
/// target column override last.
pub fn load_config(
    config_file: Option<&str>,
    target_column: &Option<String>,
) -> Result<FeaturePipelineConfig, TripFeatAppError> {
    let mut config = FeaturePipelineConfig::load(config_file).map_err(|source| {
        TripFeatAppError::ConfigReadError {
            msg: format!(
                "failed loading feature pipeline configuration from '{}'",
                config_file.unwrap_or("defaults")
            ),
            source,
        }
    })?;
    if let Some(col) = target_column {
        config.target_column = col.clone();
    }
    Ok(config)
}

/// fits a pipeline on the training file and writes features for the input file.
pub fn fit_transform(
    config: &FeaturePipelineConfig,
    train_file: &str,
    input_file: &str,
    output_file: &str,
) -> Result<(), TripFeatAppError> {
    let features = fit_transform_batch(config, train_file, input_file)?;
    trip_csv_ops::write_features(output_file, &features)
}

/// fits a pipeline on the training file and returns features for the input file.
pub fn fit_transform_batch(
    config: &FeaturePipelineConfig,
    train_file: &str,
    input_file: &str,
) -> Result<FeatureBatch, TripFeatAppError> {
    let (train, target) = trip_csv_ops::read_trips(train_file, Some(&config.target_column))?;
    let mut pipeline = FeaturePipeline::from(config);
    pipeline.fit(&train, target.as_deref())?;

    let features = if input_file == train_file {
        pipeline.transform(&train)?
    } else {
        let (input, _) = trip_csv_ops::read_trips(input_file, None)?;
        pipeline.transform(&input)?
    };
    Ok(features)
}

/// fits only the speed featurizer on the training file and returns its learned model.
pub fn learn_speeds(
    config: &FeaturePipelineConfig,
    train_file: &str,
) -> Result<LearnedSpeedModel, TripFeatAppError> {
    let (train, target) = trip_csv_ops::read_trips(train_file, Some(&config.target_column))?;
    let featurizer = SpeedFeaturizer::new(config.distance_unit, config.elapsed_time_policy);
    let model = featurizer.learn(&train, target.as_deref())?;
    Ok(model)
}
