use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{reduce, rotation::DisplayAngle, DEGREE_SIGN};

/// Direction measured clockwise from the true north.
///
/// The value is always in the range `[0, 360)`:
/// every constructor reduces the given degrees onto the complete turn.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f64", into = "f64"))]
pub struct Bearing(f64);

impl Bearing {
    /// Due north
    pub const NORTH: Self = Self(0.0);

    /// Construct the bearing from any finite angle in degrees
    pub fn new(degrees: f64) -> Self {
        Self(reduce(degrees))
    }

    /// The degrees clockwise from north, in `[0, 360)`
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Rotation of the direction indicator when the device faces `heading`.
    ///
    /// The heading is taken as reported by the sensor,
    /// no magnetic declination applied.
    pub fn rotation_for(self, heading: f64) -> DisplayAngle {
        DisplayAngle::between(heading, self.0)
    }
}

impl From<f64> for Bearing {
    fn from(degrees: f64) -> Self {
        Self::new(degrees)
    }
}

impl From<Bearing> for f64 {
    fn from(bearing: Bearing) -> Self {
        bearing.0
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.*}{}", precision, self.0, DEGREE_SIGN)
        } else {
            write!(f, "{}{}", self.0, DEGREE_SIGN)
        }
    }
}
