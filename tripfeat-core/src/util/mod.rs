mod distance_unit;
mod geo_distance_error;
pub mod geo_utils;

pub use distance_unit::DistanceUnit;
pub use geo_distance_error::GeoDistanceError;
