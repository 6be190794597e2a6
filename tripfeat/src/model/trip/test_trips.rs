use super::{TripBatch, TripRecord};

/// builds a trip from (latitude, longitude) pickup and dropoff pairs
pub fn trip(pickup_datetime: &str, from: (f64, f64), to: (f64, f64), borough: &str) -> TripRecord {
    TripRecord {
        pickup_datetime: pickup_datetime.to_string(),
        pickup_latitude: from.0,
        pickup_longitude: from.1,
        dropoff_latitude: to.0,
        dropoff_longitude: to.1,
        pickup_borough: borough.to_string(),
    }
}

/// a small Manhattan/Queens batch with a mix of hours and weekdays
pub fn sample_batch() -> TripBatch {
    TripBatch::new(vec![
        trip(
            "2016-03-14 17:24:55",
            (40.767937, -73.982155),
            (40.765602, -73.964630),
            "Manhattan",
        ),
        trip(
            "2016-06-12 00:43:35",
            (40.738564, -73.980415),
            (40.731152, -73.999481),
            "Manhattan",
        ),
        trip(
            "2016-01-19 11:35:24",
            (40.763939, -73.979027),
            (40.710087, -74.005333),
            "Manhattan",
        ),
        trip(
            "2016-04-06 19:32:31",
            (40.771023, -73.873337),
            (40.746124, -73.987015),
            "Queens",
        ),
    ])
}

/// trip durations in seconds aligned with [`sample_batch`]
pub fn sample_durations() -> Vec<f64> {
    vec![455.0, 663.0, 2124.0, 1225.0]
}
