//! Errors raised while deriving the scanner geometry.
//!
//! Every variant describes a base constant which would make some derived
//! quantity undefined (a division by zero, a negative image size, ...). They are
//! reported at derivation time, before any derived field is exposed, so that no
//! NaN or infinity can leak into downstream numerical kernels.

use thiserror::Error;

use crate::grid::GridKind;
use crate::types::Axis;

pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// An invalid base constant
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {

    #[error("{grid} image has zero voxels along {axis}")]
    ZeroDimension { grid: &'static str, axis: Axis },

    #[error("{grid} voxel spacing along {axis} must be strictly positive, got {value}")]
    NonPositiveVoxelSpacing { grid: &'static str, axis: Axis, value: f64 },

    #[error("{grid} scatter grid scale factor must be strictly positive, got {value}")]
    NonPositiveScaleFactor { grid: GridKind, value: f64 },

    #[error("{grid} scatter grid with scale factor {scale} has {size} voxels along {axis}")]
    DegenerateGrid { grid: GridKind, axis: Axis, scale: f64, size: isize },

    #[error("{grid} scatter grid with scale factor {scale} overflows the voxel count along {axis}")]
    OversizedGrid { grid: GridKind, axis: Axis, scale: f64 },

    #[error("scatter-angle LUT needs at least 2 cosine samples, got {0}")]
    TooFewCosineSamples(usize),

    #[error("cosine of maximum scatter angle must lie in [-1, 1), got {0}")]
    CosineCutoffOutOfRange(f64),

    #[error("number of transaxial crystals must be positive")]
    ZeroCrystalCount,

    #[error("effective ring radius must be strictly positive, got {0} cm")]
    NonPositiveRadius(f64),

    #[error("time-of-flight bin width must be strictly positive, got {0} ps")]
    NonPositiveTofBinWidth(f64),

    #[error("invalid sinogram layout: {0}")]
    InvalidSinogram(String),

    #[error("axial ring window {start}..{end} does not fit within {rings} rings")]
    InvalidRingWindow { start: usize, end: usize, rings: usize },

    #[error("invalid scatter ring sampling: {0}")]
    InvalidScatterRings(String),
}

/// `true` for finite numbers greater than zero. NaN is not positive.
pub(crate) fn strictly_positive(x: f64) -> bool { x.is_finite() && x > 0.0 }
