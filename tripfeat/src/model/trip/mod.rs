mod trip_batch;
mod trip_record;

pub use trip_batch::TripBatch;
pub use trip_record::TripRecord;

#[cfg(test)]
pub(crate) mod test_trips;
