use serde::Serialize;

use units::todo::{Angledeg, Angleradian, Areacm2, Lengthcm, PerLengthcm};

use crate::base::Detector;
use crate::error::{strictly_positive, ConfigurationError, Result};
use crate::round::round6;

/// Ring radius and crystal pitch, in the forms consumed by the projectors and
/// the scatter model
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Ring {

    /// Radius corrected for the depth of interaction
    pub effective_radius: Lengthcm,

    /// Square of `effective_radius`, rounded to 6 decimals
    pub effective_radius_squared: Areacm2,

    /// Inverse of `effective_radius`, rounded to 6 decimals
    pub inverse_effective_radius: PerLengthcm,

    /// Angle subtended by one crystal at the ring centre
    pub crystal_pitch: Angleradian,
}

impl Ring {
    pub fn derive(detector: &Detector) -> Result<Self> {
        let effective_radius = detector.radius + detector.doi;
        if !strictly_positive(effective_radius) {
            return Err(ConfigurationError::NonPositiveRadius(effective_radius));
        }
        // Square and inverse are both rounded from the unrounded radius, never
        // from each other.
        let effective_radius_squared = round6(effective_radius * effective_radius);
        let inverse_effective_radius = round6(1.0 / effective_radius);
        let crystal_pitch = crystal_pitch(detector.crystals)?;
        Ok(Self { effective_radius, effective_radius_squared, inverse_effective_radius, crystal_pitch })
    }
}

/// Crystal pitch in degrees, rounded to 6 decimals, as tabulated by the
/// manufacturer, then converted to radians.
pub fn crystal_pitch(crystals: usize) -> Result<Angleradian> {
    if crystals == 0 { return Err(ConfigurationError::ZeroCrystalCount) }
    let degrees: Angledeg = round6(360.0 / crystals as f64);
    Ok(degrees * std::f64::consts::PI / 180.0)
}
