use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uom::si::f64::{Length, Velocity};
use uom::si::{length, velocity};

/// unit of distance produced by the haversine kernel. the unit also
/// determines the speed unit of any speed derived from these distances,
/// which is always "distance units per hour".
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// radius of the earth expressed in this unit.
    pub fn earth_radius(&self) -> f64 {
        match self {
            DistanceUnit::Kilometers => 6371.0,
            DistanceUnit::Miles => 3956.0,
        }
    }

    /// wraps a raw distance value in this unit as a [`Length`].
    pub fn to_length(&self, value: f64) -> Length {
        match self {
            DistanceUnit::Kilometers => Length::new::<length::kilometer>(value),
            DistanceUnit::Miles => Length::new::<length::mile>(value),
        }
    }

    /// reads a [`Velocity`] as distance units per hour in this unit.
    pub fn per_hour(&self, velocity: Velocity) -> f64 {
        match self {
            DistanceUnit::Kilometers => velocity.get::<velocity::kilometer_per_hour>(),
            DistanceUnit::Miles => velocity.get::<velocity::mile_per_hour>(),
        }
    }

    pub fn speed_unit_label(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km/h",
            DistanceUnit::Miles => "mph",
        }
    }
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistanceUnit::Kilometers => write!(f, "kilometers"),
            DistanceUnit::Miles => write!(f, "miles"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::DistanceUnit;
    use uom::si::f64::Time;
    use uom::si::time::second;

    #[test]
    fn test_deserialize_snake_case() {
        let unit: DistanceUnit = serde_json::from_value(serde_json::json!("miles")).unwrap();
        assert_eq!(unit, DistanceUnit::Miles);
        assert_eq!(DistanceUnit::default(), DistanceUnit::Kilometers);
    }

    #[test]
    fn test_per_hour_round_trips_unit() {
        for unit in [DistanceUnit::Kilometers, DistanceUnit::Miles] {
            // 10 units over 30 minutes is 20 units per hour
            let velocity = unit.to_length(10.0) / Time::new::<second>(1800.0);
            let speed = unit.per_hour(velocity);
            assert!((speed - 20.0).abs() < 1e-9, "{unit}: {speed}");
        }
    }
}
