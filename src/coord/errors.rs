use std::num::ParseFloatError;

use thiserror::Error;

/// A pair of numbers which cannot be a point on the Earth's surface
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// NaN or infinite value provided
    #[error("Coordinate should be a finite number")]
    NotFinite,
    /// |lat| > 90
    #[error("Latitude {0} not in range [-90..90]")]
    LatitudeOutOfRange(f64),
    /// |lon| > 180
    #[error("Longitude {0} not in range [-180..180]")]
    LongitudeOutOfRange(f64),
}

/// Failure to read a coordinate from a string
#[derive(Debug, Error)]
pub enum ParseCoordinateError {
    /// Nothing to parse
    #[error("Coordinate parsing failed: empty string provided")]
    EmptyString,
    /// Neither signed decimal degrees nor hemisphere notation
    #[error("Coordinate parsing failed: not a `lat, lon` pair")]
    Notation,
    // practically impossible due to regex digits limitations
    /// The number cannot be parsed
    #[error("Coordinate parsing failed: {0}")]
    Float(#[from] ParseFloatError),
    /// Parsed fine, but out of range
    #[error("Coordinate parsing failed: {0}")]
    Range(#[from] CoordinateError),
}
