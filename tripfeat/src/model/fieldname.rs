/// timestamp of trip pickup, in naive local time
pub const PICKUP_DATETIME: &str = "pickup_datetime";
pub const PICKUP_LATITUDE: &str = "pickup_latitude";
pub const PICKUP_LONGITUDE: &str = "pickup_longitude";
pub const DROPOFF_LATITUDE: &str = "dropoff_latitude";
pub const DROPOFF_LONGITUDE: &str = "dropoff_longitude";

/// categorical region key used to group trips for speed statistics,
/// such as a borough name.
pub const PICKUP_BOROUGH: &str = "pickup_borough";

/// columns every trip batch source must provide.
pub const REQUIRED_INPUT_COLUMNS: [&str; 6] = [
    PICKUP_DATETIME,
    PICKUP_LATITUDE,
    PICKUP_LONGITUDE,
    DROPOFF_LATITUDE,
    DROPOFF_LONGITUDE,
    PICKUP_BOROUGH,
];

/// day of week of pickup, Monday = 0 through Sunday = 6
pub const WEEKDAY: &str = "weekday";
/// hour of day of pickup, 0 through 23
pub const HOUR: &str = "hour";
/// haversine distance from pickup to dropoff
pub const DISTANCE: &str = "distance";
/// expected speed at pickup, learned from historical trips in the same region
pub const SPEED: &str = "speed";
