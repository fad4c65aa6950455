use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{reduce, DEGREE_SIGN};

/// Rotation of the direction indicator relative to the device, in `[0, 360)`.
///
/// The rendering layer turns this value into a rotation transform.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(into = "f64"))]
pub struct DisplayAngle(f64);

impl DisplayAngle {
    pub(crate) fn between(heading: f64, bearing: f64) -> Self {
        Self(rotation_angle(heading, bearing))
    }

    /// The degrees of the rotation, in `[0, 360)`
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// The same rotation in radians, in `[0, 2π)`
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl From<DisplayAngle> for f64 {
    fn from(angle: DisplayAngle) -> Self {
        angle.0
    }
}

impl fmt::Display for DisplayAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.*}{}", precision, self.0, DEGREE_SIGN)
        } else {
            write!(f, "{}{}", self.0, DEGREE_SIGN)
        }
    }
}

/// The angle to rotate the direction indicator by,
/// when the device faces `heading` and the target lies at `bearing`.
///
/// Neither argument has to be normalized:
/// negative values and multiple turns are reduced away.
///
/// ```
/// use qibla_compass::rotation_angle;
///
/// assert_eq!(rotation_angle(0.0, 60.0), 300.0);
/// assert_eq!(rotation_angle(1000.0, 0.0), 280.0);
/// ```
pub fn rotation_angle(heading: f64, bearing: f64) -> f64 {
    reduce(heading - bearing)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 60.0, 300.0)]
    #[case(45.0, 45.0, 0.0)]
    #[case(1000.0, 0.0, 280.0)]
    #[case(0.0, 1000.0, 80.0)]
    #[case(-30.0, 0.0, 330.0)]
    #[case(90.0, 295.15, 154.85)]
    #[case(359.0, 1.0, 358.0)]
    fn rotate(#[case] heading: f64, #[case] bearing: f64, #[case] expected: f64) {
        let angle = rotation_angle(heading, bearing);
        assert!((angle - expected).abs() < 0.01, "{angle} != {expected}");
    }

    #[rstest]
    #[case(0.0, 60.0)]
    #[case(12.5, 118.98)]
    #[case(-200.0, 295.15)]
    #[case(3599.0, 58.48)]
    fn full_turn_of_the_device_changes_nothing(#[case] heading: f64, #[case] bearing: f64) {
        let angle = rotation_angle(heading, bearing);
        let turned = rotation_angle(heading + 360.0, bearing);
        let diff = (angle - turned).abs();
        assert!(diff.min(360.0 - diff) < 1e-9);
    }

    #[rstest]
    #[case(1e6, -1e6)]
    #[case(-12_345.678, 98_765.4)]
    #[case(359.9999, 0.0)]
    fn stays_in_range(#[case] heading: f64, #[case] bearing: f64) {
        assert!((0.0..360.0).contains(&rotation_angle(heading, bearing)));
    }

    #[test]
    fn deterministic() {
        let first = rotation_angle(123.456_789, 295.151_736);
        let second = rotation_angle(123.456_789, 295.151_736);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn typed_form_matches() {
        let angle = DisplayAngle::between(10.0, 20.0);
        assert_eq!(angle.degrees(), rotation_angle(10.0, 20.0));
        assert!((angle.radians() - 350.0_f64.to_radians()).abs() < 1e-12);
        assert_eq!(format!("{angle}"), "350°");
    }
}
