use super::{ElapsedTimePolicy, LearnedSpeedModel, MeanAccumulator};
use crate::model::{
    feature::FeatureColumn,
    featurizer::{Featurizer, FeaturizerError},
    fieldname,
    trip::TripBatch,
};
use itertools::izip;
use std::collections::HashMap;
use tripfeat_core::util::{geo_utils, DistanceUnit};

/// expected speed at pickup, approximated by the mean speed of historical
/// trips that started in the same pickup region.
///
/// speed is not observable for a trip that has not finished, so fitting
/// derives per-trip speeds from completed trips and their durations and
/// keeps only the per-region mean. transforming never looks at durations.
///
/// a fresh instance is unfit and refuses to transform. fitting again
/// replaces the learned model. a failed fit leaves the previous model in place.
#[derive(Clone, Debug, Default)]
pub struct SpeedFeaturizer {
    unit: DistanceUnit,
    policy: ElapsedTimePolicy,
    model: Option<LearnedSpeedModel>,
}

impl SpeedFeaturizer {
    pub fn new(unit: DistanceUnit, policy: ElapsedTimePolicy) -> SpeedFeaturizer {
        SpeedFeaturizer {
            unit,
            policy,
            model: None,
        }
    }

    /// the learned per-region speeds, if this featurizer has been fit
    pub fn model(&self) -> Option<&LearnedSpeedModel> {
        self.model.as_ref()
    }

    pub fn is_fit(&self) -> bool {
        self.model.is_some()
    }

    /// computes the per-region mean speeds for a training batch without
    /// changing the state of this featurizer.
    pub fn learn(
        &self,
        batch: &TripBatch,
        target: Option<&[f64]>,
    ) -> Result<LearnedSpeedModel, FeaturizerError> {
        let elapsed = target.ok_or_else(|| FeaturizerError::MissingTargetError {
            featurizer: self.name().to_string(),
        })?;
        if elapsed.len() != batch.len() {
            return Err(FeaturizerError::TargetLengthError {
                expected: batch.len(),
                found: elapsed.len(),
            });
        }
        let distances = geo_utils::haversine_distances(
            &batch.pickup_points(),
            &batch.dropoff_points(),
            &self.unit,
        )?;

        let mut accumulators: HashMap<&str, MeanAccumulator> = HashMap::new();
        let mut invalid_time = 0;
        let mut invalid_speed = 0;
        for (row, region, distance, seconds) in
            izip!(0.., batch.pickup_boroughs(), distances, elapsed)
        {
            if !self.policy.accepts(row, *seconds)? {
                invalid_time += 1;
                continue;
            }
            let speed = geo_utils::speed_per_hour(distance, *seconds, &self.unit);
            if !speed.is_finite() {
                invalid_speed += 1;
                continue;
            }
            accumulators.entry(region).or_default().add(speed);
        }

        if invalid_time > 0 {
            log::warn!(
                "excluded {invalid_time} of {} trips with non-positive or non-finite elapsed time",
                batch.len()
            );
        }
        if invalid_speed > 0 {
            log::warn!(
                "excluded {invalid_speed} of {} trips with non-finite speed",
                batch.len()
            );
        }

        let model = LearnedSpeedModel::from_accumulators(self.unit, accumulators);
        log::info!(
            "learned mean speed ({}) for {} pickup regions",
            self.unit.speed_unit_label(),
            model.len()
        );
        Ok(model)
    }
}

impl Featurizer for SpeedFeaturizer {
    fn name(&self) -> &'static str {
        "speed"
    }

    fn output_columns(&self) -> Vec<&'static str> {
        vec![fieldname::SPEED]
    }

    fn fit(&mut self, batch: &TripBatch, target: Option<&[f64]>) -> Result<(), FeaturizerError> {
        self.model = Some(self.learn(batch, target)?);
        Ok(())
    }

    fn transform(&self, batch: &TripBatch) -> Result<Vec<FeatureColumn>, FeaturizerError> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| FeaturizerError::NotFittedError {
                featurizer: self.name().to_string(),
            })?;
        let speeds: Vec<Option<f64>> = batch.pickup_boroughs().map(|r| model.get(r)).collect();
        let column = FeatureColumn::new(fieldname::SPEED, speeds);
        let unseen = column.missing_count();
        if unseen > 0 {
            log::debug!("{unseen} of {} trips have an unseen pickup region", batch.len());
        }
        Ok(vec![column])
    }
}
