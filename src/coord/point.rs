use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::DEGREE_SIGN;

use super::{CoordinateError, MAX_LATITUDE, MAX_LONGITUDE};

/// The point on the surface of a sphere, represented as the pair (latitude, longitude)
/// in decimal degrees.
///
/// No ellipsoidal correction is applied anywhere in the crate,
/// the Earth is treated as a perfect sphere.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoordinate"))]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

/// The Kaaba, Mecca.
/// The target of every bearing in the compass session by default.
pub const KAABA: GeoCoordinate = GeoCoordinate {
    latitude: 21.4225,
    longitude: 39.8262,
};

impl GeoCoordinate {
    /// Construct a point from the given latitude and longitude degrees.
    ///
    /// # Errors
    /// - any of the values is not finite;
    /// - the latitude is not in the range `-90 <= lat <= 90`;
    /// - the longitude is not in the range `-180 <= lon <= 180`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NotFinite);
        }

        if latitude.abs() > MAX_LATITUDE {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }

        if longitude.abs() > MAX_LONGITUDE {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Degrees north (positive) or south (negative) of the equator
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// Degrees east (positive) or west (negative) of the prime meridian
    pub fn longitude(self) -> f64 {
        self.longitude
    }

    /// Is the point represents a pole?
    /// All the longitudes at pole are singular, so the longitude of the pole can be any meridian.
    pub fn is_pole(self) -> bool {
        self.latitude.abs() == MAX_LATITUDE
    }
}

impl TryFrom<(f64, f64)> for GeoCoordinate {
    type Error = CoordinateError;

    fn try_from(value: (f64, f64)) -> Result<Self, Self::Error> {
        let (lat, lon) = value;
        Self::new(lat, lon)
    }
}

impl TryFrom<[f64; 2]> for GeoCoordinate {
    type Error = CoordinateError;

    fn try_from(value: [f64; 2]) -> Result<Self, Self::Error> {
        let [lat, lon] = value;
        Self::new(lat, lon)
    }
}

impl From<GeoCoordinate> for (f64, f64) {
    fn from(point: GeoCoordinate) -> Self {
        (point.latitude, point.longitude)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinate> for GeoCoordinate {
    type Error = CoordinateError;

    fn try_from(value: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(value.latitude, value.longitude)
    }
}

fn hemisphere(value: f64, positive: char, negative: char) -> Option<char> {
    if value > 0.0 {
        Some(positive)
    } else if value < 0.0 {
        Some(negative)
    } else {
        None
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Lat: {}{}", self.latitude.abs(), DEGREE_SIGN)?;
            if let Some(pole) = hemisphere(self.latitude, 'N', 'S') {
                write!(f, "{pole}")?;
            }

            write!(f, ", Long: {}{}", self.longitude.abs(), DEGREE_SIGN)?;
            if let Some(direction) = hemisphere(self.longitude, 'E', 'W') {
                write!(f, "{direction}")?;
            }
            Ok(())
        } else {
            write!(
                f,
                "({}{},{}{})",
                self.latitude, DEGREE_SIGN, self.longitude, DEGREE_SIGN
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn kaaba() {
        assert_eq!(KAABA.latitude(), 21.4225);
        assert_eq!(KAABA.longitude(), 39.8262);
        assert_eq!(GeoCoordinate::new(21.4225, 39.8262).unwrap(), KAABA);
        assert!(!KAABA.is_pole());
    }

    #[rstest]
    #[case(90.0, 0.0)]
    #[case(-90.0, 0.0)]
    #[case(0.0, 180.0)]
    #[case(0.0, -180.0)]
    #[case(-6.2088, 106.8456)]
    fn boundaries_are_valid(#[case] lat: f64, #[case] lon: f64) {
        let point = GeoCoordinate::new(lat, lon).unwrap();
        assert_eq!(point.latitude(), lat);
        assert_eq!(point.longitude(), lon);
    }

    #[rstest]
    #[case(90.000_001, 0.0, CoordinateError::LatitudeOutOfRange(90.000_001))]
    #[case(-91.0, 0.0, CoordinateError::LatitudeOutOfRange(-91.0))]
    #[case(0.0, 180.5, CoordinateError::LongitudeOutOfRange(180.5))]
    #[case(0.0, -360.0, CoordinateError::LongitudeOutOfRange(-360.0))]
    #[case(f64::NAN, 0.0, CoordinateError::NotFinite)]
    #[case(0.0, f64::INFINITY, CoordinateError::NotFinite)]
    #[case(f64::NEG_INFINITY, f64::NAN, CoordinateError::NotFinite)]
    fn invalid(#[case] lat: f64, #[case] lon: f64, #[case] expected: CoordinateError) {
        assert_eq!(GeoCoordinate::new(lat, lon).unwrap_err(), expected);
    }

    #[test]
    fn poles() {
        assert!(GeoCoordinate::new(90.0, 12.0).unwrap().is_pole());
        assert!(GeoCoordinate::new(-90.0, -170.0).unwrap().is_pole());
        assert!(!GeoCoordinate::new(89.999, 0.0).unwrap().is_pole());
    }

    #[test]
    fn from_tuple_and_array() {
        let london: GeoCoordinate = (51.5074, -0.1278).try_into().unwrap();
        let london2: GeoCoordinate = [51.5074, -0.1278].try_into().unwrap();
        assert_eq!(london, london2);

        let pair: (f64, f64) = london.into();
        assert_eq!(pair, (51.5074, -0.1278));

        assert!(GeoCoordinate::try_from((100.0, 0.0)).is_err());
    }

    #[test]
    fn print() {
        let sydney = GeoCoordinate::new(-33.8688, 151.2093).unwrap();
        assert_eq!(format!("{sydney}"), "(-33.8688°,151.2093°)");
        assert_eq!(format!("{sydney:#}"), "Lat: 33.8688°S, Long: 151.2093°E");

        assert_eq!(format!("{KAABA:#}"), "Lat: 21.4225°N, Long: 39.8262°E");

        let origin = GeoCoordinate::new(0.0, 0.0).unwrap();
        assert_eq!(format!("{origin}"), "(0°,0°)");
        assert_eq!(format!("{origin:#}"), "Lat: 0°, Long: 0°");

        let new_york = GeoCoordinate::new(40.7128, -74.006).unwrap();
        assert_eq!(format!("{new_york:#}"), "Lat: 40.7128°N, Long: 74.006°W");
    }

    #[test]
    fn error_message() {
        let err = GeoCoordinate::new(-91.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "Latitude -91 not in range [-90..90]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_validates() {
        let json = serde_json::to_string(&KAABA).unwrap();
        assert_eq!(json, r#"{"latitude":21.4225,"longitude":39.8262}"#);

        let parsed: GeoCoordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, KAABA);

        let bad = serde_json::from_str::<GeoCoordinate>(r#"{"latitude":95.0,"longitude":0.0}"#);
        assert!(bad.is_err());
    }
}
