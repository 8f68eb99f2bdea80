use std::{borrow::Borrow, fmt::Display, sync::Arc};

use serde::{Deserialize, Serialize};

/// Number of decimal digits kept when quantizing a coordinate (~11 m).
pub const KEY_PRECISION: usize = 4;

/// Latitude value used by the open-data exports to mean "no coordinate".
pub const NO_COORDINATE_LATITUDE: f64 = 0.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds a coordinate from a GeoJSON position, which is longitude first.
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [longitude, latitude, ..] => Some(Self::new(*latitude, *longitude)),
            _ => None,
        }
    }

    /// Whether the coordinate carries a real location rather than the
    /// zero latitude placeholder.
    pub fn is_located(&self) -> bool {
        self.latitude != NO_COORDINATE_LATITUDE
    }

    /// Quantizes the coordinate into the key used for approximate matching.
    /// Latitude and longitude are rounded independently.
    pub fn to_key(&self) -> CoordinateKey {
        CoordinateKey(
            format!(
                "{:.prec$},{:.prec$}",
                self.latitude,
                self.longitude,
                prec = KEY_PRECISION
            )
            .into(),
        )
    }
}

/// Fixed precision encoding of a coordinate. Distinct stops closer than the
/// precision collide onto the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordinateKey(Arc<str>);

impl CoordinateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CoordinateKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for CoordinateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[test]
fn key_rounds_to_four_digits_test() {
    let coordinate = Coordinate::new(48.858_094_3, 2.351_435);
    assert_eq!(coordinate.to_key().as_str(), "48.8581,2.3514");
}

#[test]
fn key_pads_short_values_test() {
    let coordinate = Coordinate::new(48.85, -2.0);
    assert_eq!(coordinate.to_key().as_str(), "48.8500,-2.0000");
}

#[test]
fn nearby_points_share_key_test() {
    let coord_a = Coordinate::new(48.856_61, 2.352_21);
    let coord_b = Coordinate::new(48.856_64, 2.352_18);
    assert_eq!(coord_a.to_key(), coord_b.to_key())
}

#[test]
fn position_is_longitude_first_test() {
    let coordinate = Coordinate::from_position(&[2.35, 48.85, 35.0]).unwrap();
    assert_eq!(coordinate, Coordinate::new(48.85, 2.35));
    assert!(Coordinate::from_position(&[2.35]).is_none());
}

#[test]
fn zero_latitude_is_not_located_test() {
    assert!(!Coordinate::new(0.0, 2.35).is_located());
    assert!(Coordinate::new(48.85, 0.0).is_located());
}
