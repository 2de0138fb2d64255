//! Base hardware constants from which everything else is derived.
//!
//! The defaults of every section are the constants of the Siemens Biograph mMR,
//! so a configuration file need only mention the values it wants to change.

use serde::{Deserialize, Serialize};

use units::{ps, Time};
use units::todo::{Areacm2, Energyev, Lengthcm, Ratiof64};

use crate::config::{deserialize_uom, serialize_ps};
use crate::error::{strictly_positive, ConfigurationError, Result};
use crate::isotope::Isotope;
use crate::types::Zyx;

/// Complete set of base constants. Immutable input of [`crate::derive`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BaseGeometry {
    /// Tracer used in the acquisition
    pub isotope: Isotope,

    pub detector: Detector,

    /// Full-resolution image grid, as produced by the manufacturer's software
    pub native_grid: ImageGrid,

    /// Reconstruction grid trimmed to suit the GPU
    pub recon_grid: ImageGrid,

    pub scatter: ScatterParameters,
    pub tof: TofParameters,
    pub sinogram: SinogramParameters,
}

impl BaseGeometry {
    /// Siemens Biograph mMR
    pub fn mmr() -> Self {
        Self {
            isotope: Isotope::F18,
            detector: Detector::default(),
            native_grid: ImageGrid::MMR_NATIVE,
            recon_grid: ImageGrid::MMR_RECON,
            scatter: ScatterParameters::default(),
            tof: TofParameters::default(),
            sinogram: SinogramParameters::default(),
        }
    }
}

impl Default for BaseGeometry {
    fn default() -> Self { Self::mmr() }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Detector {

    /// Radius of the detector ring, before depth-of-interaction correction
    pub radius: Lengthcm,

    /// Average photon penetration depth into the crystals
    pub doi: Lengthcm,

    /// Number of crystal rings (axially)
    pub rings: usize,

    pub axial_crystal_width: Lengthcm,

    /// Number of crystals around a ring (transaxially)
    pub crystals: usize,

    /// Number of crystals around a ring, excluding the dead crystals in the gaps
    pub crystals_reduced: usize,

    /// Every `gap_period`th crystal is a gap
    pub gap_period: usize,

    /// Position of the first gap within the period
    pub gap_offset: usize,

    /// Idealised crystal surface, used in scatter modelling
    pub crystal_surface: Areacm2,
}

impl Default for Detector {
    fn default() -> Self {
        Self {
            radius: 32.8,
            doi: 0.67,
            rings: 64,
            axial_crystal_width: 0.40625,
            crystals: 504,
            crystals_reduced: 448,
            gap_period: 9,
            gap_offset: 1,
            crystal_surface: 0.1695112,
        }
    }
}

/// Voxel counts and voxel sizes of an image, in `(z, y, x)` order
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageGrid {
    pub dims: Zyx<usize>,
    pub spacing: Zyx<Lengthcm>,
}

impl ImageGrid {
    pub const MMR_NATIVE: Self = Self {
        dims: Zyx::new(127, 344, 344),
        spacing: Zyx::new(0.203125, 0.208626, 0.208626),
    };

    pub const MMR_RECON: Self = Self {
        dims: Zyx::new(127, 320, 320),
        spacing: Zyx::new(0.203125, 0.208626, 0.208626),
    };

    /// Physical size of the grid along each axis
    pub fn extent(&self) -> Zyx<Lengthcm> {
        self.spacing.zip(self.dims).map(|(s, n)| s * n as f64)
    }

    /// Reject grids with no voxels along some axis, or with voxel sizes that
    /// are not strictly positive. `name` identifies the grid in the error.
    pub fn validate(&self, name: &'static str) -> Result<()> {
        for (axis, n) in self.dims.with_axes().to_array() {
            if n == 0 { return Err(ConfigurationError::ZeroDimension { grid: name, axis }) }
        }
        for (axis, value) in self.spacing.with_axes().to_array() {
            if !strictly_positive(value) {
                return Err(ConfigurationError::NonPositiveVoxelSpacing { grid: name, axis, value });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ScatterParameters {

    /// Target down-scale factor of the transmission (mu-map) scatter grid
    pub mu_scale: Ratiof64,

    /// Target down-scale factor of the emission scatter grid
    pub emission_scale: Ratiof64,

    /// Cosine of the maximum scatter angle that is modelled
    pub cos_cutoff: f64,

    /// Number of samples in the scatter-angle cosine LUT
    pub cos_samples: usize,

    /// Lower energy threshold of detection
    pub lld: Energyev,

    /// Energy of an annihilation photon
    pub e511: Energyev,

    pub energy_resolution: Ratiof64,

    /// Classical electron radius, squared
    pub electron_radius_squared: Areacm2,

    /// Emission voxels below this fraction of the maximum are ignored
    pub emission_threshold: Ratiof64,

    /// Indices of the detector rings at which scatter is modelled, increasing
    pub rings: Vec<usize>,
}

impl Default for ScatterParameters {
    fn default() -> Self {
        Self {
            mu_scale: 0.5,
            emission_scale: 0.33,
            cos_cutoff: 0.725,
            cos_samples: 256,
            lld: 430_000.0,
            e511: 511_008.0,
            energy_resolution: 0.0,
            electron_radius_squared: 7.940787449825884e-26,
            emission_threshold: 0.05,
            rings: vec![0, 10, 19, 28, 35, 44, 53, 63],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TofParameters {

    #[serde(deserialize_with = "deserialize_uom", serialize_with = "serialize_ps")]
    pub bin_width: Time,

    pub bins: usize,

    #[serde(deserialize_with = "deserialize_uom", serialize_with = "serialize_ps")]
    pub coincidence_window: Time,
}

impl Default for TofParameters {
    fn default() -> Self {
        Self {
            bin_width: ps(390.0),
            bins: 1,
            coincidence_window: ps(5859.38),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SinogramParameters {

    /// Radial bins in a 2D sinogram
    pub bins: usize,

    pub max_ring_difference: usize,

    /// Axial compression: 0 for SSRB, 1 for none, odd values above 1 otherwise
    pub span: usize,

    /// Squared radius of the transaxial field of view
    pub tfov2: Areacm2,

    /// First detector ring included in the sinograms
    pub ring_start: usize,

    /// One past the last detector ring included in the sinograms. Anything
    /// narrower than the whole detector requires span 1.
    pub ring_end: usize,
}

impl Default for SinogramParameters {
    fn default() -> Self {
        Self { bins: 344, max_ring_difference: 60, span: 11, tfov2: 890.0, ring_start: 0, ring_end: 64 }
    }
}
