use super::TripRecord;
use geo::Point;

/// an in-memory, ordered batch of trips. every featurizer emits exactly
/// one value per trip in this order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripBatch {
    records: Vec<TripRecord>,
}

impl TripBatch {
    pub fn new(records: Vec<TripRecord>) -> TripBatch {
        TripBatch { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn pickup_points(&self) -> Vec<Point<f64>> {
        self.records.iter().map(TripRecord::pickup_point).collect()
    }

    pub fn dropoff_points(&self) -> Vec<Point<f64>> {
        self.records.iter().map(TripRecord::dropoff_point).collect()
    }

    pub fn pickup_datetimes(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.pickup_datetime.as_str())
    }

    pub fn pickup_boroughs(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.pickup_borough.as_str())
    }
}

impl From<Vec<TripRecord>> for TripBatch {
    fn from(records: Vec<TripRecord>) -> Self {
        TripBatch::new(records)
    }
}

impl FromIterator<TripRecord> for TripBatch {
    fn from_iter<T: IntoIterator<Item = TripRecord>>(iter: T) -> Self {
        TripBatch::new(iter.into_iter().collect())
    }
}
