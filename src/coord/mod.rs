//! Geographic coordinates on a spherical Earth

pub use self::{
    errors::{CoordinateError, ParseCoordinateError},
    point::{GeoCoordinate, KAABA},
};

mod errors;
mod parse;
mod point;

pub(crate) const MAX_LATITUDE: f64 = 90.0;
pub(crate) const MAX_LONGITUDE: f64 = 180.0;
