//! The compass session: the bearing cached for the observer's position
//! and the stream of heading samples turned into display angles.
//!
//! The location provider and the heading sensor live outside of the crate.
//! Their failures are reported with [`ProviderError`],
//! the presentation layer decides whether to retry.

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{
    angle::{bearing::Bearing, rotation::DisplayAngle},
    coord::{GeoCoordinate, KAABA},
    great_circle::bearing_to,
};

/// Upstream failures of the location provider and the orientation sensor
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The user declined the location permission, can be asked again
    #[error("Location permission denied")]
    PermissionDenied,
    /// The user declined the location permission forever,
    /// only the system settings can change it
    #[error("Location permission permanently denied")]
    PermissionDeniedPermanently,
    /// Location services are switched off on the device
    #[error("Location services are disabled")]
    ServiceDisabled,
    /// No orientation sensor or it stopped reporting
    #[error("Heading sensor is unavailable")]
    SensorUnavailable,
}

/// The source of the observer's position
pub trait LocationProvider {
    /// Current position of the device.
    ///
    /// # Errors
    /// When the position cannot be obtained, e.g. the permission is not granted.
    fn current_position(&mut self) -> Result<GeoCoordinate, ProviderError>;
}

impl<F> LocationProvider for F
where
    F: FnMut() -> Result<GeoCoordinate, ProviderError>,
{
    fn current_position(&mut self) -> Result<GeoCoordinate, ProviderError> {
        self()
    }
}

/// The bearing toward the target computed once for the observer's position,
/// and the rotation of the direction indicator for every heading sample.
///
/// The heading is used as reported by the sensor: no declination correction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CompassSession {
    target: GeoCoordinate,
    bearing: Option<Bearing>,
}

impl Default for CompassSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CompassSession {
    /// The session pointing to the Kaaba
    pub fn new() -> Self {
        Self::towards(KAABA)
    }

    /// The session pointing to an arbitrary target
    pub fn towards(target: GeoCoordinate) -> Self {
        Self {
            target,
            bearing: None,
        }
    }

    /// The point the session points to
    pub fn target(&self) -> GeoCoordinate {
        self.target
    }

    /// The cached bearing, if the position is already known
    pub fn bearing(&self) -> Option<Bearing> {
        self.bearing
    }

    /// Ask the provider for the position and cache the bearing from there.
    ///
    /// # Errors
    /// The provider failure is passed through, the previously cached bearing (if any) is kept.
    pub fn locate<P>(&mut self, provider: &mut P) -> Result<Bearing, ProviderError>
    where
        P: LocationProvider + ?Sized,
    {
        match provider.current_position() {
            Ok(observer) => Ok(self.set_position(observer)),
            Err(err) => {
                warn!(%err, "Cannot get the observer position");
                Err(err)
            }
        }
    }

    /// Refresh the cached bearing from the known position
    pub fn set_position(&mut self, observer: GeoCoordinate) -> Bearing {
        let bearing = bearing_to(&observer, &self.target);
        debug!(%observer, target = %self.target, %bearing, "Bearing cached");
        self.bearing = Some(bearing);
        bearing
    }

    /// Rotation of the direction indicator for a single heading sample.
    ///
    /// Nothing to show (`None`) until the bearing is known.
    /// Non-finite samples are dropped.
    pub fn rotation(&self, heading: f64) -> Option<DisplayAngle> {
        let Some(bearing) = self.bearing else {
            trace!(heading, "No bearing yet, heading sample ignored");
            return None;
        };

        if !heading.is_finite() {
            trace!(heading, "Non-finite heading sample dropped");
            return None;
        }

        Some(bearing.rotation_for(heading))
    }

    /// Turn the stream of heading samples into the display angles.
    ///
    /// Dropped samples (see [`rotation`](Self::rotation)) are skipped,
    /// sensor failures are passed through for the presentation layer.
    pub fn rotations<I>(
        &self,
        samples: I,
    ) -> impl Iterator<Item = Result<DisplayAngle, ProviderError>>
    where
        I: IntoIterator<Item = Result<f64, ProviderError>>,
    {
        let session = *self;
        samples
            .into_iter()
            .filter_map(move |sample| match sample {
                Ok(heading) => session.rotation(heading).map(Ok),
                Err(err) => {
                    warn!(%err, "Heading sample is not available");
                    Some(Err(err))
                }
            })
    }
}
