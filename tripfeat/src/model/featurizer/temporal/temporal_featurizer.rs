use super::parse_pickup_datetime;
use crate::model::{
    feature::FeatureColumn,
    featurizer::{Featurizer, FeaturizerError},
    fieldname,
    trip::TripBatch,
};
use chrono::{Datelike, Timelike};

/// extracts the pickup weekday (Monday = 0 .. Sunday = 6) and hour of day
/// (0 .. 23) from each trip's pickup timestamp. stateless.
#[derive(Clone, Debug, Default)]
pub struct TemporalFeaturizer {}

impl Featurizer for TemporalFeaturizer {
    fn name(&self) -> &'static str {
        "temporal"
    }

    fn output_columns(&self) -> Vec<&'static str> {
        vec![fieldname::WEEKDAY, fieldname::HOUR]
    }

    fn fit(&mut self, _batch: &TripBatch, _target: Option<&[f64]>) -> Result<(), FeaturizerError> {
        Ok(())
    }

    fn transform(&self, batch: &TripBatch) -> Result<Vec<FeatureColumn>, FeaturizerError> {
        let mut weekdays = Vec::with_capacity(batch.len());
        let mut hours = Vec::with_capacity(batch.len());
        for (row, value) in batch.pickup_datetimes().enumerate() {
            let datetime = parse_pickup_datetime(value).map_err(|source| {
                FeaturizerError::TimestampParseError {
                    row,
                    value: value.to_string(),
                    source,
                }
            })?;
            weekdays.push(datetime.weekday().num_days_from_monday() as f64);
            hours.push(datetime.hour() as f64);
        }
        Ok(vec![
            FeatureColumn::complete(fieldname::WEEKDAY, weekdays),
            FeatureColumn::complete(fieldname::HOUR, hours),
        ])
    }
}
