//! The complete derived geometry, computed in one go from a `BaseGeometry`.

use serde::Serialize;

use units::todo::PerLengthcm;

use crate::affine::Affine;
use crate::base::BaseGeometry;
use crate::error::Result;
use crate::grid::{GridKind, ScaledGrid};
use crate::isotope::Decay;
use crate::ring::Ring;
use crate::round::round6;
use crate::scatter::{ScatterAngles, ScatterRings};
use crate::sinogram::SinogramLayout;
use crate::tof::TofBins;

/// Everything downstream code needs to know about the scanner geometry.
///
/// Fully determined by `base`. Consumers should read fields from here rather
/// than recompute them: several are rounded, and lookup tables built from
/// independently recomputed values would not match.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DerivedGeometry {
    pub base: BaseGeometry,
    pub ring: Ring,

    /// Attenuation (mu-map) grid for scatter estimation
    pub mu_grid: ScaledGrid,

    /// Emission grid for scatter estimation
    pub emission_grid: ScaledGrid,

    /// `1 / recon_grid.spacing.z`, rounded to 6 decimals
    pub recon_inverse_axial_spacing: PerLengthcm,

    /// Voxel index to mm, for the native grid
    pub affine: Affine,

    pub scatter: ScatterAngles,

    /// Detector rings at which scatter is modelled
    pub scatter_rings: ScatterRings,

    pub tof: TofBins,
    pub sinogram: SinogramLayout,
    pub decay: Decay,
}

impl DerivedGeometry {
    /// Validate `base` and derive everything from it. Fails on the first
    /// invalid constant, without exposing any partial result.
    pub fn derive(base: &BaseGeometry) -> Result<Self> {
        base.native_grid.validate("native")?;
        base.recon_grid.validate("reconstruction")?;

        let ring          = Ring::derive(&base.detector)?;
        let mu_grid       = ScaledGrid::derive(GridKind::Transmission, &base.native_grid, base.scatter.mu_scale)?;
        let emission_grid = ScaledGrid::derive(GridKind::Emission    , &base.native_grid, base.scatter.emission_scale)?;
        let scatter       = ScatterAngles::derive(&base.scatter)?;
        let scatter_rings = ScatterRings::derive(&base.scatter, &base.detector)?;
        let tof           = TofBins::derive(&base.tof)?;
        let sinogram      = SinogramLayout::derive(&base.detector, &base.sinogram)?;
        let affine        = Affine::derive(&base.native_grid);
        let recon_inverse_axial_spacing = round6(1.0 / base.recon_grid.spacing.z);

        tracing::debug!(
            "derived geometry: effective ring radius {} cm, {} sinograms (span {}), TOF bin {:.4} cm",
            ring.effective_radius, sinogram.sinos, sinogram.span, tof.bin_distance,
        );
        Ok(Self {
            base: base.clone(),
            ring,
            mu_grid,
            emission_grid,
            recon_inverse_axial_spacing,
            affine,
            scatter,
            scatter_rings,
            tof,
            sinogram,
            decay: base.isotope.into(),
        })
    }
}

/// Derive the complete scanner geometry from `base`
pub fn derive(base: &BaseGeometry) -> Result<DerivedGeometry> { DerivedGeometry::derive(base) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;
    use crate::types::{Axis, Zyx};
    use pretty_assertions::assert_eq;

    #[test]
    fn mmr_derives() {
        let g = derive(&BaseGeometry::mmr()).unwrap();
        assert_eq!(g.mu_grid.dims      , Zyx::new(63, 172, 172));
        assert_eq!(g.emission_grid.dims, Zyx::new(43, 114, 114));
        assert_eq!(g.recon_inverse_axial_spacing, 4.923077);
        assert_eq!(g.ring.effective_radius_squared, 1120.2409);
        assert_eq!(g.sinogram.sinos, 837);
        assert_eq!(g.scatter_rings.count, 8);
    }

    #[test]
    fn reject_zero_native_dimension() {
        let mut base = BaseGeometry::mmr();
        base.native_grid.dims.y = 0;
        assert_eq!(derive(&base), Err(ConfigurationError::ZeroDimension { grid: "native", axis: Axis::Y }));
    }

    #[test]
    fn reject_non_positive_recon_spacing() {
        let mut base = BaseGeometry::mmr();
        base.recon_grid.spacing.z = 0.0;
        assert_eq!(derive(&base), Err(ConfigurationError::NonPositiveVoxelSpacing {
            grid: "reconstruction", axis: Axis::Z, value: 0.0,
        }));
    }

    #[test]
    fn first_invalid_constant_is_reported() {
        let mut base = BaseGeometry::mmr();
        base.native_grid.spacing.x = -0.2;
        base.scatter.cos_samples = 1;
        assert!(matches!(derive(&base), Err(ConfigurationError::NonPositiveVoxelSpacing { axis: Axis::X, .. })));
    }
}
