use serde::Serialize;

use units::{cm_, ps_, Length, C};
use units::todo::{Lengthcm, PerLengthcm};

use crate::base::TofParameters;
use crate::error::{strictly_positive, ConfigurationError, Result};

/// Time-of-flight binning, as time and as distance travelled by a photon
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TofBins {
    pub bins: usize,

    /// Picoseconds
    pub bin_width: f64,

    /// Distance light travels during one bin
    pub bin_distance: Lengthcm,

    pub inverse_bin_distance: PerLengthcm,

    /// Picoseconds
    pub coincidence_window: f64,
}

impl TofBins {
    pub fn derive(p: &TofParameters) -> Result<Self> {
        let bin_width = ps_(p.bin_width);
        if !strictly_positive(bin_width) {
            return Err(ConfigurationError::NonPositiveTofBinWidth(bin_width));
        }
        let distance: Length = p.bin_width * C;
        let bin_distance = cm_(distance);
        Ok(Self {
            bins: p.bins,
            bin_width,
            bin_distance,
            inverse_bin_distance: 1.0 / bin_distance,
            coincidence_window: ps_(p.coincidence_window),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use units::{ns, ps, s};

    /// Speed of light in the units in which the scanner's TOF constants are
    /// tabulated
    const C_CM_PER_S: f64 = 29_979_245_800.0;

    #[test]
    fn mmr_tof_bins() {
        let tof = TofBins::derive(&TofParameters::default()).unwrap();
        assert_eq!(tof.bins, 1);
        assert_float_eq!(tof.bin_width, 390.0, r2nd <= 1e-12);
        assert_float_eq!(tof.bin_distance, 11.691905862, r2nd <= 1e-12);
        assert_float_eq!(tof.inverse_bin_distance, 0.08552925517901334, r2nd <= 1e-12);
        assert_float_eq!(tof.coincidence_window, 5859.38, r2nd <= 1e-12);
    }

    // Same bin width, written in different units, must give the same distance
    // as the product of seconds and cm/s.
    #[test]
    fn bin_distance_is_unit_consistent() {
        for width in [ps(390.0), ns(0.39), s(390e-12)] {
            let p = TofParameters { bin_width: width, ..TofParameters::default() };
            let tof = TofBins::derive(&p).unwrap();
            assert_float_eq!(tof.bin_distance, 390e-12 * C_CM_PER_S, r2nd <= 1e-12);
            assert_float_eq!(tof.bin_distance * tof.inverse_bin_distance, 1.0, abs <= 1e-15);
        }
    }

    #[test]
    fn reject_non_positive_bin_width() {
        for width in [ps(0.0), ps(-10.0)] {
            let p = TofParameters { bin_width: width, ..TofParameters::default() };
            assert!(matches!(TofBins::derive(&p), Err(ConfigurationError::NonPositiveTofBinWidth(_))));
        }
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn one_nanosecond_is_about_thirty_centimetres(picoseconds in 1.0 .. (10_000.0 as f64)) {
            let p = TofParameters { bin_width: ps(picoseconds), ..TofParameters::default() };
            let tof = TofBins::derive(&p).unwrap();
            let expected = picoseconds * 1e-12 * C_CM_PER_S;
            prop_assert!((tof.bin_distance - expected).abs() <= 1e-12 * expected);
        }
    }
}
