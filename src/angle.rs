//! Angle reduction onto the complete turn

use num_traits::Float;

pub mod bearing;
mod consts;
pub mod rotation;

pub(crate) use consts::{DEGREE_SIGN, FULL_TURN_DEG};

/// Floating point type which can hold an angle in degrees
pub trait Degrees: Float {
    /// The angle made of full circle (perigon)
    const FULL_TURN: Self;
}

macro_rules! impl_degrees {
    ($t: ty) => {
        impl Degrees for $t {
            const FULL_TURN: Self = FULL_TURN_DEG as $t;
        }
    };
}

impl_degrees!(f32);
impl_degrees!(f64);

/// Map any angle in degrees onto the canonical range `[0, 360)`.
///
/// The remainder operator keeps the sign of the dividend,
/// so the first remainder can be negative. Shifting it by a full turn
/// and taking the remainder once more always gives a non-negative result.
///
/// The caller must not pass `NaN` or infinities: the result is not an angle then.
///
/// ```
/// use qibla_compass::reduce;
///
/// assert_eq!(reduce(-90.0), 270.0);
/// assert_eq!(reduce(1000.0_f32), 280.0);
/// ```
pub fn reduce<T: Degrees>(angle: T) -> T {
    let full = T::FULL_TURN;
    ((angle % full) + full) % full
}
