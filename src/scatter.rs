use serde::Serialize;

use units::todo::{Angleradian, Energyev};

use crate::base::{Detector, ScatterParameters};
use crate::error::{ConfigurationError, Result};

/// Discretisation of the scatter-angle cosine, for the single-scatter LUTs
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScatterAngles {

    /// Cosine of the largest scatter angle that is modelled
    pub cos_cutoff: f64,

    /// Number of LUT entries, spanning `[cos_cutoff, 1]`
    pub cos_samples: usize,

    /// Spacing of LUT entries in cosine
    pub cos_step: f64,

    pub inverse_cos_step: f64,

    pub max_scatter_angle: Angleradian,

    /// Energy of a 511 keV photon after scattering through `max_scatter_angle`
    pub lowest_scattered_energy: Energyev,
}

impl ScatterAngles {
    pub fn derive(p: &ScatterParameters) -> Result<Self> {
        let (cos_cutoff, cos_samples, e511) = (p.cos_cutoff, p.cos_samples, p.e511);
        if cos_samples < 2 {
            return Err(ConfigurationError::TooFewCosineSamples(cos_samples));
        }
        if !(-1.0..1.0).contains(&cos_cutoff) {
            return Err(ConfigurationError::CosineCutoffOutOfRange(cos_cutoff));
        }
        let cos_step = (1.0 - cos_cutoff) / (cos_samples - 1) as f64;
        Ok(Self {
            cos_cutoff,
            cos_samples,
            cos_step,
            inverse_cos_step: 1.0 / cos_step,
            max_scatter_angle: cos_cutoff.acos(),
            lowest_scattered_energy: compton_energy(e511, cos_cutoff),
        })
    }

    /// Cosine at LUT entry `i`
    pub fn cos_at(&self, i: usize) -> f64 { self.cos_cutoff + i as f64 * self.cos_step }
}

/// Axial sampling of the single-scatter model: scatter is computed only for
/// detector rings in `indices`, and interpolated in between.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterRings {
    pub indices: Vec<usize>,
    pub count: usize,
}

impl ScatterRings {
    pub fn derive(p: &ScatterParameters, detector: &Detector) -> Result<Self> {
        let invalid = |msg: String| Err(ConfigurationError::InvalidScatterRings(msg));
        let indices = p.rings.clone();
        if indices.is_empty() {
            return invalid("no scatter rings".into());
        }
        if let Some(w) = indices.windows(2).find(|w| w[0] >= w[1]) {
            return invalid(format!("ring indices must increase, but {} is followed by {}", w[0], w[1]));
        }
        if let Some(&last) = indices.last().filter(|&&r| r >= detector.rings) {
            return invalid(format!("ring {last} is beyond the last of {} detector rings", detector.rings));
        }
        Ok(Self { count: indices.len(), indices })
    }
}

/// Energy after Compton scattering of an annihilation photon with energy
/// `e511` (equal to the electron rest energy) through an angle with cosine
/// `cos_theta`.
pub fn compton_energy(e511: Energyev, cos_theta: f64) -> Energyev {
    e511 / (2.0 - cos_theta)
}
