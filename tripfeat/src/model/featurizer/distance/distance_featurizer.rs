use crate::model::{
    feature::FeatureColumn,
    featurizer::{Featurizer, FeaturizerError},
    fieldname,
    trip::TripBatch,
};
use tripfeat_core::util::{geo_utils, DistanceUnit};

/// haversine distance from pickup to dropoff for each trip. stateless.
#[derive(Clone, Debug, Default)]
pub struct DistanceFeaturizer {
    unit: DistanceUnit,
}

impl DistanceFeaturizer {
    pub fn new(unit: DistanceUnit) -> DistanceFeaturizer {
        DistanceFeaturizer { unit }
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }
}

impl Featurizer for DistanceFeaturizer {
    fn name(&self) -> &'static str {
        "distance"
    }

    fn output_columns(&self) -> Vec<&'static str> {
        vec![fieldname::DISTANCE]
    }

    fn fit(&mut self, _batch: &TripBatch, _target: Option<&[f64]>) -> Result<(), FeaturizerError> {
        Ok(())
    }

    fn transform(&self, batch: &TripBatch) -> Result<Vec<FeatureColumn>, FeaturizerError> {
        let distances = geo_utils::haversine_distances(
            &batch.pickup_points(),
            &batch.dropoff_points(),
            &self.unit,
        )?;
        log::debug!(
            "computed {} trip distances in {}",
            distances.len(),
            self.unit
        );
        Ok(vec![FeatureColumn::complete(fieldname::DISTANCE, distances)])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::trip::test_trips::{sample_batch, trip};

    fn distances(featurizer: &DistanceFeaturizer, batch: &TripBatch) -> Vec<f64> {
        let columns = featurizer.transform(batch).unwrap();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].name, "distance");
        columns[0].values.iter().map(|v| v.unwrap()).collect()
    }

    #[test]
    fn test_known_distances() {
        let batch = TripBatch::new(vec![
            trip("2024-03-04T17:30:00", (0.0, 0.0), (0.0, 1.0), "A"),
            trip("2024-03-04T17:30:00", (40.7128, -74.0060), (34.0522, -118.2437), "A"),
            trip("2024-03-04T17:30:00", (40.7128, -74.0060), (40.7128, -74.0060), "A"),
        ]);
        let result = distances(&DistanceFeaturizer::default(), &batch);
        assert!((result[0] - 111.19).abs() < 0.5);
        assert!((result[1] - 3936.0).abs() < 20.0);
        assert_eq!(result[2], 0.0);
    }

    #[test]
    fn test_miles() {
        let batch = sample_batch();
        let km = distances(&DistanceFeaturizer::new(DistanceUnit::Kilometers), &batch);
        let mi = distances(&DistanceFeaturizer::new(DistanceUnit::Miles), &batch);
        for (k, m) in km.iter().zip(mi.iter()) {
            assert!((m - k * 3956.0 / 6371.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_fit_is_a_no_op() {
        let batch = sample_batch();
        let mut featurizer = DistanceFeaturizer::default();
        let before = featurizer.transform(&batch).unwrap();
        featurizer.fit(&batch, None).unwrap();
        assert_eq!(featurizer.transform(&batch).unwrap(), before);
        assert_eq!(before[0].len(), batch.len());
    }

    #[test]
    fn test_non_finite_coordinates_propagate_as_nan() {
        let batch = TripBatch::new(vec![trip(
            "2024-03-04T17:30:00",
            (f64::NAN, 0.0),
            (0.0, 0.0),
            "A",
        )]);
        let result = distances(&DistanceFeaturizer::default(), &batch);
        assert!(result[0].is_nan());
    }
}
