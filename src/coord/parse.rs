use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::{GeoCoordinate, ParseCoordinateError};

/// Construct regular expression to parse a `latitude, longitude` pair
/// in the signed decimal degrees or with the hemisphere letters
fn parse_pair_re() -> &'static str {
    r"(?x)                                  # enables verbose mode (to allow these comments)
    ^\s*                                        # match the whole line from the start
    (?P<lat>[-+]?\d{1,3}(?:\.\d+)?)                 # latitude VALUE - requires more validation!
    \s*°?\s*                                        # degree sign is optional
    (?P<pole>[NSns])?                               # hemisphere letter
    (?:\s*,\s*|\s+)                                 # comma or whitespace between the values
    (?P<lon>[-+]?\d{1,3}(?:\.\d+)?)                 # longitude VALUE - requires more validation!
    \s*°?\s*                                        # degree sign is optional
    (?P<dir>[EWew])?                                # direction from the prime meridian
    \s*$                                        # match the whole line till the end
    "
}

lazy_static! {
    static ref RE_PAIR: Regex = Regex::new(parse_pair_re()).expect("Coordinate regex is valid");
}

/// Apply the hemisphere letter to the parsed value.
/// The letter and the explicit sign cannot be mixed.
fn signed(
    capture: &Captures<'_>,
    value: &str,
    letter: &str,
    negative: char,
) -> Result<f64, ParseCoordinateError> {
    let Some(number) = capture.name(value) else {
        return Err(ParseCoordinateError::Notation);
    };
    let number = number.as_str();
    let parsed: f64 = number.parse()?;

    match capture.name(letter) {
        None => Ok(parsed),
        Some(_) if number.starts_with(['-', '+']) => Err(ParseCoordinateError::Notation),
        Some(hemisphere) => {
            let is_negative = hemisphere
                .as_str()
                .chars()
                .all(|ch| ch.eq_ignore_ascii_case(&negative));
            Ok(if is_negative { -parsed } else { parsed })
        }
    }
}

impl FromStr for GeoCoordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseCoordinateError::EmptyString);
        }

        let capture = RE_PAIR.captures(s).ok_or(ParseCoordinateError::Notation)?;
        let lat = signed(&capture, "lat", "pole", 'S')?;
        let lon = signed(&capture, "lon", "dir", 'W')?;

        Ok(Self::new(lat, lon)?)
    }
}
