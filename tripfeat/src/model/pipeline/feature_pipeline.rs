use super::FeaturePipelineConfig;
use crate::model::{
    feature::FeatureBatch,
    featurizer::{Featurizer, FeaturizerError},
    trip::TripBatch,
};

/// an ordered set of featurizers whose outputs are concatenated column-wise.
/// the pipeline does not know which featurizers it holds, it only drives
/// them through [`Featurizer::fit`] and [`Featurizer::transform`].
pub struct FeaturePipeline {
    featurizers: Vec<Box<dyn Featurizer>>,
}

impl FeaturePipeline {
    pub fn new(featurizers: Vec<Box<dyn Featurizer>>) -> FeaturePipeline {
        FeaturePipeline { featurizers }
    }

    pub fn featurizers(&self) -> &[Box<dyn Featurizer>] {
        &self.featurizers
    }

    /// column names produced by [`FeaturePipeline::transform`], in order
    pub fn output_columns(&self) -> Vec<&'static str> {
        self.featurizers
            .iter()
            .flat_map(|f| f.output_columns())
            .collect()
    }

    /// fits every featurizer on the same training batch and target.
    pub fn fit(&mut self, batch: &TripBatch, target: Option<&[f64]>) -> Result<(), FeaturizerError> {
        for featurizer in self.featurizers.iter_mut() {
            log::debug!("fitting {} featurizer on {} trips", featurizer.name(), batch.len());
            featurizer.fit(batch, target)?;
        }
        Ok(())
    }

    /// transforms the batch with each featurizer and concatenates the
    /// resulting columns from left to right in featurizer order.
    pub fn transform(&self, batch: &TripBatch) -> Result<FeatureBatch, FeaturizerError> {
        let mut result = FeatureBatch::new(batch.len());
        for featurizer in self.featurizers.iter() {
            log::debug!("transforming {} trips with {} featurizer", batch.len(), featurizer.name());
            let columns = featurizer.transform(batch)?;
            result.hstack(columns)?;
        }
        Ok(result)
    }

    pub fn fit_transform(
        &mut self,
        batch: &TripBatch,
        target: Option<&[f64]>,
    ) -> Result<FeatureBatch, FeaturizerError> {
        self.fit(batch, target)?;
        self.transform(batch)
    }
}

impl From<&FeaturePipelineConfig> for FeaturePipeline {
    fn from(config: &FeaturePipelineConfig) -> Self {
        let featurizers = config.featurizers.iter().map(|f| f.build(config)).collect();
        FeaturePipeline::new(featurizers)
    }
}

impl Default for FeaturePipeline {
    fn default() -> Self {
        FeaturePipeline::from(&FeaturePipelineConfig::default())
    }
}
