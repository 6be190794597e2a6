use geo::Point;
use serde::{Deserialize, Serialize};
use tripfeat_core::util::geo_utils;

/// a single raw trip as provided by an upstream source.
///
/// the trip duration is deliberately not a field here. it is only known for
/// completed trips and is passed separately as a fit-time target so that
/// inference-time batches never carry it.
///
/// CSV rows must contain at least these columns, in any order:
/// pickup_datetime,pickup_latitude,pickup_longitude,dropoff_latitude,dropoff_longitude,pickup_borough
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TripRecord {
    /// raw timestamp text, parsed on demand by the temporal featurizer
    pub pickup_datetime: String,
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    pub dropoff_latitude: f64,
    pub dropoff_longitude: f64,
    pub pickup_borough: String,
}

impl TripRecord {
    pub fn pickup_point(&self) -> Point<f64> {
        geo_utils::coordinate_pair(self.pickup_latitude, self.pickup_longitude)
    }

    pub fn dropoff_point(&self) -> Point<f64> {
        geo_utils::coordinate_pair(self.dropoff_latitude, self.dropoff_longitude)
    }
}
