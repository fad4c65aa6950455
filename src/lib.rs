//! Great-circle bearing toward the Kaaba and the compass display angle built on it.
//!
//! The bearing from the observer is computed once per session
//! ([`qibla_bearing`] or [`CompassSession::set_position`]),
//! then every heading sample from the device sensor is turned into
//! the rotation of the direction indicator with [`rotation_angle`].
//!
//! ```
//! use qibla_compass::{qibla_bearing, rotation_angle, GeoCoordinate};
//!
//! let london = GeoCoordinate::new(51.5074, -0.1278).unwrap();
//! let bearing = qibla_bearing(&london);
//! assert!((117.0..=121.0).contains(&bearing.degrees()));
//!
//! // the device faces due north
//! let display = rotation_angle(0.0, bearing.degrees());
//! assert!((display - (360.0 - bearing.degrees())).abs() < 1e-9);
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{
    bearing::Bearing,
    reduce,
    rotation::{rotation_angle, DisplayAngle},
    Degrees,
};
pub use coord::{CoordinateError, GeoCoordinate, ParseCoordinateError, KAABA};
pub use great_circle::{bearing_to, distance_km, initial_bearing, qibla_bearing};
pub use session::{CompassSession, LocationProvider, ProviderError};

mod angle;
mod coord;
mod great_circle;
mod session;
