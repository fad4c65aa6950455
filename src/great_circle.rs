//! Navigation on the great circles of a spherical Earth.
//!
//! Math follows the [forward azimuth](http://www.movable-type.co.uk/scripts/latlong.html#bearing)
//! and the [haversine](http://www.movable-type.co.uk/scripts/latlong.html#distance) formulas.

use crate::{
    angle::{bearing::Bearing, reduce},
    coord::{GeoCoordinate, KAABA},
};

/// Mean radius of the Earth in kilometers
pub(crate) const EARTH_RADIUS_KM: f64 = 6371.0;

/// Initial great-circle bearing between two points given in raw degrees.
///
/// The result is in `[0, 360)`, clockwise from the true north.
///
/// The longitudes are never normalized: only the sine and cosine of their
/// difference are used, so any real-valued longitude works,
/// including the pairs crossing the antimeridian.
///
/// The formula has no division, so the poles are fine too.
/// For coincident points the bearing is undefined and any angle in range can be returned.
pub fn initial_bearing(
    observer_lat: f64,
    observer_lon: f64,
    target_lat: f64,
    target_lon: f64,
) -> f64 {
    let phi_o = observer_lat.to_radians();
    let phi_t = target_lat.to_radians();
    let delta_lambda = (target_lon - observer_lon).to_radians();

    let y = delta_lambda.sin() * phi_t.cos();
    let x = phi_o.cos() * phi_t.sin() - phi_o.sin() * phi_t.cos() * delta_lambda.cos();

    reduce(y.atan2(x).to_degrees())
}

/// The direction to take from the `observer` to reach the `target`
/// along the shortest path.
pub fn bearing_to(observer: &GeoCoordinate, target: &GeoCoordinate) -> Bearing {
    let degrees = initial_bearing(
        observer.latitude(),
        observer.longitude(),
        target.latitude(),
        target.longitude(),
    );
    Bearing::new(degrees)
}

/// The direction from the `observer` to the Kaaba
pub fn qibla_bearing(observer: &GeoCoordinate) -> Bearing {
    bearing_to(observer, &KAABA)
}

/// Great-circle distance between the points in kilometers
pub fn distance_km(from: &GeoCoordinate, to: &GeoCoordinate) -> f64 {
    let phi_1 = from.latitude().to_radians();
    let phi_2 = to.latitude().to_radians();
    let delta_phi = phi_2 - phi_1;
    let delta_lambda = (to.longitude() - from.longitude()).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // rounding can push `a` a tiny bit over 1 for the antipodes
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}
