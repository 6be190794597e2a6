use super::{DistanceUnit, GeoDistanceError};
use geo::Point;
use uom::si::f64::Time;
use uom::si::time::second;

/// builds a coordinate pair from decimal degrees. the resulting point
/// follows the geo convention of x = longitude and y = latitude.
///
/// no range checks are applied. out-of-range or non-finite values
/// flow through to the distance kernel which reports them as NaN.
pub fn coordinate_pair(latitude: f64, longitude: f64) -> Point<f64> {
    Point::new(longitude, latitude)
}

/// great-circle distance between two coordinate pairs using the haversine
/// formula on a spherical earth.
///
/// # Arguments
///
/// * `from` - origin, in decimal degrees
/// * `to`   - destination, in decimal degrees
/// * `unit` - sets the earth radius and therefore the unit of the result
///
/// # Returns
///
/// * distance in `unit`. identical points yield 0, antipodal points yield
///   half the circumference, and non-finite inputs yield NaN.
pub fn haversine_distance(from: &Point<f64>, to: &Point<f64>, unit: &DistanceUnit) -> f64 {
    let lat_from = from.y().to_radians();
    let lat_to = to.y().to_radians();
    let dlat = lat_to - lat_from;
    let dlon = to.x().to_radians() - from.x().to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat_from.cos() * lat_to.cos() * (dlon / 2.0).sin().powi(2);
    // round-off may leave `a` just outside [0, 1]; NaN passes through clamp untouched
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
    c * unit.earth_radius()
}

/// row-wise haversine distance over two aligned sequences of coordinate pairs.
///
/// # Returns
///
/// * one distance per (from, to) pair in input order, or an error if the
///   sequences have different lengths
pub fn haversine_distances(
    from: &[Point<f64>],
    to: &[Point<f64>],
    unit: &DistanceUnit,
) -> Result<Vec<f64>, GeoDistanceError> {
    if from.len() != to.len() {
        return Err(GeoDistanceError::UnalignedSequencesError {
            origins: from.len(),
            destinations: to.len(),
        });
    }
    let distances = from
        .iter()
        .zip(to.iter())
        .map(|(f, t)| haversine_distance(f, t, unit))
        .collect();
    Ok(distances)
}

/// average speed over a trip, in `unit` per hour.
///
/// zero elapsed time yields an infinite speed and negative elapsed time a
/// negative speed. callers aggregating speeds are expected to screen these.
pub fn speed_per_hour(distance: f64, elapsed_seconds: f64, unit: &DistanceUnit) -> f64 {
    let velocity = unit.to_length(distance) / Time::new::<second>(elapsed_seconds);
    unit.per_hour(velocity)
}
