use super::MeanAccumulator;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tripfeat_core::util::DistanceUnit;

/// mean observed speed per pickup region, learned from completed trips.
/// speeds are in `unit` per hour. built once by a fit and read-only after.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LearnedSpeedModel {
    pub unit: DistanceUnit,
    pub speeds: BTreeMap<String, f64>,
}

impl LearnedSpeedModel {
    /// finalizes per-region accumulators. regions with no accepted trips,
    /// or whose mean is not finite, are left out so they behave like unseen
    /// regions at lookup time.
    pub fn from_accumulators<K: Into<String>>(
        unit: DistanceUnit,
        accumulators: HashMap<K, MeanAccumulator>,
    ) -> LearnedSpeedModel {
        let speeds = accumulators
            .into_iter()
            .filter_map(|(region, acc)| {
                let region: String = region.into();
                match acc.mean() {
                    Some(mean) if mean.is_finite() => Some((region, mean)),
                    Some(mean) => {
                        log::warn!(
                            "dropping region '{region}' with non-finite mean speed {mean} over {} trips",
                            acc.count()
                        );
                        None
                    }
                    None => None,
                }
            })
            .collect();
        LearnedSpeedModel { unit, speeds }
    }

    /// expected speed for a region, or None if the region was never observed.
    pub fn get(&self, region: &str) -> Option<f64> {
        self.speeds.get(region).copied()
    }

    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.speeds.keys().map(String::as_str)
    }
}
