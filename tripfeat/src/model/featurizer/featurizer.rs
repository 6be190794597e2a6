use super::FeaturizerError;
use crate::model::{feature::FeatureColumn, trip::TripBatch};

/// a pipeline stage that may learn from training trips (fit) and then
/// derives feature columns from any trip batch (transform).
///
/// every implementation must return columns with exactly one value per
/// trip, in the trip order of the batch.
///
/// `fit` takes `&mut self` and `transform` takes `&self`, so a fitted
/// featurizer can be shared read-only across threads while any refit
/// requires exclusive access.
pub trait Featurizer: Send + Sync {
    /// short name used in logs and error messages
    fn name(&self) -> &'static str;

    /// names of the columns produced by [`Featurizer::transform`], in order
    fn output_columns(&self) -> Vec<&'static str>;

    /// learns any state required by `transform`. stateless featurizers
    /// ignore both arguments.
    ///
    /// # Arguments
    ///
    /// * `batch`  - training trips
    /// * `target` - trip durations in seconds aligned with `batch`, if known
    fn fit(&mut self, batch: &TripBatch, target: Option<&[f64]>) -> Result<(), FeaturizerError>;

    /// derives feature columns for each trip in the batch.
    fn transform(&self, batch: &TripBatch) -> Result<Vec<FeatureColumn>, FeaturizerError>;

    fn fit_transform(
        &mut self,
        batch: &TripBatch,
        target: Option<&[f64]>,
    ) -> Result<Vec<FeatureColumn>, FeaturizerError> {
        self.fit(batch, target)?;
        self.transform(batch)
    }
}
