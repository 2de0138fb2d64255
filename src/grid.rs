//! Coarse image grids used for scatter estimation.
//!
//! Each scatter grid is a down-scaled copy of the native grid. The mu-map
//! (transmission) grid and the emission grid are derived independently, from
//! their own scale factors, and differ in the parity rule applied to the axial
//! dimension.

use serde::Serialize;

use units::todo::{Lengthcm, PerLengthcm, Ratiof64};

use crate::base::ImageGrid;
use crate::error::{strictly_positive, ConfigurationError, Result};
use crate::round::round6;
use crate::types::{Axis, Zyx};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GridKind {
    /// Attenuation (mu-map) grid
    Transmission,
    Emission,
}

impl GridKind {
    /// Correction applied to the even-rounded axial dimension. Both grids end
    /// up with an odd number of slices: the mu-map rounds down, the emission
    /// grid rounds up.
    pub fn axial_parity_offset(self) -> isize {
        match self {
            GridKind::Transmission => -1,
            GridKind::Emission     =>  1,
        }
    }
}

impl std::fmt::Display for GridKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GridKind::Transmission => "transmission",
            GridKind::Emission     => "emission",
        };
        f.write_str(name)
    }
}

/// `ceil(scale * n)`, rounded down to the nearest even number
pub fn even_ceil(scale: Ratiof64, n: usize) -> usize {
    (scale * n as f64).ceil() as usize / 2 * 2
}

/// A scatter grid, derived from the native grid and a target scale factor
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScaledGrid {
    pub kind: GridKind,

    /// Voxel counts. Transverse ones are even, the axial one is odd.
    pub dims: Zyx<usize>,

    /// Voxel sizes, rounded to 6 decimals, chosen so that the grid covers the
    /// same physical extent as the native grid.
    pub spacing: Zyx<Lengthcm>,

    /// `dims / native dims`, for resampling images directly onto this grid
    pub scale: Zyx<Ratiof64>,

    /// `1 / spacing.z`, rounded to 6 decimals
    pub inverse_axial_spacing: PerLengthcm,
}

impl ScaledGrid {

    /// Derive the scatter grid of the given `kind` from the `native` grid.
    ///
    /// Scale factors of 1 or more are accepted, and give grids at least as fine
    /// as the native one.
    pub fn derive(kind: GridKind, native: &ImageGrid, scale: Ratiof64) -> Result<Self> {
        native.validate("native")?;
        if !strictly_positive(scale) {
            return Err(ConfigurationError::NonPositiveScaleFactor { grid: kind, value: scale });
        }
        if scale >= 1.0 {
            tracing::warn!("{kind} scatter grid scale factor {scale} does not down-scale the native grid");
        }
        let degenerate = |axis, size| ConfigurationError::DegenerateGrid { grid: kind, axis, scale, size };
        let check = |(axis, size): (Axis, isize)| {
            if size > 0 { Ok(size as usize) } else { Err(degenerate(axis, size)) }
        };
        // `even_ceil` saturates at `usize::MAX`, which no `isize` can hold
        let oversized = |(axis, n): (Axis, usize)| {
            isize::try_from(even_ceil(scale, n))
                .map_err(|_| ConfigurationError::OversizedGrid { grid: kind, axis, scale })
        };

        let even = native.dims.with_axes().map(oversized).transpose()?;
        let dims = Zyx { z: even.z + kind.axial_parity_offset(), ..even }
            .with_axes()
            .map(check)
            .transpose()?;

        let spacing = native.spacing.zip(native.dims).zip(dims)
            .map(|((s, n), m)| round6((s * n as f64) / m as f64));

        let scale = dims.zip(native.dims)
            .map(|(m, n)| m as f64 / n as f64);

        let inverse_axial_spacing = round6(1.0 / spacing.z);

        tracing::debug!(
            "{kind} scatter grid: {:?} voxels of {:?} cm",
            dims.to_array(), spacing.to_array(),
        );
        Ok(Self { kind, dims, spacing, scale, inverse_axial_spacing })
    }

    /// Physical size of the grid along each axis
    pub fn extent(&self) -> Zyx<Lengthcm> {
        self.spacing.zip(self.dims).map(|(s, n)| s * n as f64)
    }
}
