//! Voxel-index to millimetre transform of the native image grid.
//!
//! The convention is that of the scanner manufacturer's patient frame: x is
//! mirrored (left-right), y and z are not; the transverse origin lies at the
//! centre of the grid, the axial origin near its centre plane. Hardware
//! attenuation maps are only aligned with reconstructed images if this is
//! reproduced exactly.

use nalgebra::{Matrix4, Vector4};
use serde::Serialize;

use crate::base::ImageGrid;

/// 4×4 homogeneous transform acting on column vectors `(i, j, k, 1)`, where
/// `i`, `j` and `k` are (zero-based) voxel indices along x, y and z.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(into = "[[f64; 4]; 4]")]
pub struct Affine(pub Matrix4<f64>);

impl Affine {

    /// Voxel spacings are in cm; the transform produces mm.
    pub fn derive(grid: &ImageGrid) -> Self {
        let [imz, imy, imx] = grid.dims.to_array().map(|n| n as f64);
        let [vxz, vxy, vxx] = grid.spacing.to_array();
        #[rustfmt::skip]
        let m = Matrix4::new(
            -10.0 * vxx,         0.0,         0.0,  5.0 * imx * vxx,
                    0.0,  10.0 * vxy,         0.0, -5.0 * imy * vxy,
                    0.0,         0.0,  10.0 * vxz, -5.0 * imz * vxz,
                    0.0,         0.0,         0.0,              1.0,
        );
        Self(m)
    }

    pub fn matrix(&self) -> &Matrix4<f64> { &self.0 }

    /// Position in mm of the voxel with indices `[i, j, k]` along `[x, y, z]`
    pub fn voxel_to_mm(&self, [i, j, k]: [f64; 3]) -> [f64; 3] {
        let p = self.0 * Vector4::new(i, j, k, 1.0);
        [p.x, p.y, p.z]
    }

    /// Inverse of `voxel_to_mm`. `None` if the transform is singular, which an
    /// `Affine` derived from a valid grid never is.
    pub fn mm_to_voxel(&self, [x, y, z]: [f64; 3]) -> Option<[f64; 3]> {
        let inverse = self.0.try_inverse()?;
        let v = inverse * Vector4::new(x, y, z, 1.0);
        Some([v.x, v.y, v.z])
    }

    /// Row-major copy of the matrix
    pub fn rows(&self) -> [[f64; 4]; 4] {
        let m = &self.0;
        std::array::from_fn(|r| std::array::from_fn(|c| m[(r, c)]))
    }
}

impl From<Affine> for [[f64; 4]; 4] {
    fn from(affine: Affine) -> Self { affine.rows() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use pretty_assertions::assert_eq;

    const MMR: ImageGrid = ImageGrid::MMR_NATIVE;

    #[test]
    fn mmr_affine() {
        let a = Affine::derive(&MMR);
        assert_eq!(a.rows(), [
            [-10.0 * 0.208626,               0.0,              0.0,  5.0 * 344.0 * 0.208626],
            [             0.0,  10.0 * 0.208626,              0.0, -5.0 * 344.0 * 0.208626],
            [             0.0,               0.0, 10.0 * 0.203125, -5.0 * 127.0 * 0.203125],
            [             0.0,               0.0,              0.0,                     1.0],
        ]);
    }

    #[test]
    fn linear_part_is_diagonal_with_mirrored_x() {
        let m = *Affine::derive(&MMR).matrix();
        assert!(m[(0, 0)] < 0.0);
        assert!(m[(1, 1)] > 0.0);
        assert!(m[(2, 2)] > 0.0);
        for r in 0..3 {
            for c in 0..3 {
                if r != c { assert_eq!(m[(r, c)], 0.0) }
            }
        }
        assert_eq!(m.row(3).iter().copied().collect::<Vec<_>>(), vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn corner_voxels_are_symmetric_about_transverse_origin() {
        let a = Affine::derive(&MMR);
        let [imz, imy, imx] = MMR.dims.to_array().map(|n| n as f64);
        let first = a.voxel_to_mm([0.0, 0.0, 0.0]);
        let last  = a.voxel_to_mm([imx - 1.0, imy - 1.0, imz - 1.0]);
        let voxel_mm = MMR.spacing.map(|s| 10.0 * s);
        assert!((first[0] + last[0]).abs() <= voxel_mm.x + 1e-9);
        assert!((first[1] + last[1]).abs() <= voxel_mm.y + 1e-9);
        // Mirrored x: first voxel on the positive side
        assert!(first[0] > 0.0 && last[0] < 0.0);
        assert!(first[1] < 0.0 && last[1] > 0.0);
    }

    #[test]
    fn mm_to_voxel_inverts_voxel_to_mm() {
        let a = Affine::derive(&MMR);
        for index in [[0.0, 0.0, 0.0], [171.5, 3.0, 126.0], [343.0, 343.0, 63.0]] {
            let back = a.mm_to_voxel(a.voxel_to_mm(index)).unwrap();
            assert_float_eq!(back, index, abs <= [1e-9, 1e-9, 1e-9]);
        }
    }

    #[test]
    fn serializes_as_rows() {
        let json = serde_json::to_value(Affine::derive(&MMR)).unwrap();
        assert_eq!(json[2][3], serde_json::json!(-5.0 * 127.0 * 0.203125));
        assert_eq!(json[3], serde_json::json!([0.0, 0.0, 0.0, 1.0]));
    }
}
