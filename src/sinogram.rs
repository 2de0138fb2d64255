//! Layout of 3D sinograms: how ring pairs are grouped into segments by the
//! axial compression (span), and how many 2D sinograms that produces.

use serde::Serialize;

use crate::base::{Detector, SinogramParameters};
use crate::error::{ConfigurationError, Result};

/// Ring pairs whose ring difference lies in `min_rd ..= max_rd`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub min_rd: isize,
    pub max_rd: isize,

    /// Number of 2D sinograms in the segment
    pub sinos: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SinogramLayout {
    /// Projection angles in a 2D sinogram
    pub angles: usize,

    /// Radial bins in a 2D sinogram
    pub bins: usize,

    pub span: usize,

    /// Number of rings within the axial ring window
    pub rings: usize,

    /// Segment 0 first, then the remaining ones in pairs, negative first
    pub segments: Vec<Segment>,

    /// Total number of 2D sinograms with the configured span
    pub sinos: usize,

    /// Number of 2D sinograms without axial compression
    pub sinos_span1: usize,

    /// Number of ring pairs, ignoring the maximum ring difference
    pub sinos_unrestricted: usize,

    /// Number of ring pairs `(r0, r1)` with `r0 <= r1` within the maximum ring
    /// difference: the linear indices of half a Michelogram
    pub half_michelogram: usize,
}

impl SinogramLayout {
    pub fn derive(detector: &Detector, p: &SinogramParameters) -> Result<Self> {
        let (start, end) = (p.ring_start, p.ring_end);
        if start >= end || end > detector.rings {
            return Err(ConfigurationError::InvalidRingWindow { start, end, rings: detector.rings });
        }
        let invalid = |msg: String| Err(ConfigurationError::InvalidSinogram(msg));
        let rings = end - start;
        if rings < detector.rings && p.span != 1 {
            return invalid(format!("axial ring window {start}..{end} requires span 1, got span {}", p.span));
        }
        let mrd = p.max_ring_difference;
        if mrd >= rings {
            return invalid(format!("maximum ring difference {mrd} must be smaller than the number of rings {rings}"));
        }
        let segments = match p.span {
            0 => vec![ssrb_segment(rings, mrd)],
            1 => span1_segments(rings, mrd),
            s if s % 2 == 1 => compressed_segments(rings, mrd, s)?,
            s => return invalid(format!("span must be 0, 1 or odd, got {s}")),
        };
        let within_mrd = |d: usize| rings - d;
        Ok(Self {
            angles: detector.crystals / 2,
            bins: p.bins,
            span: p.span,
            rings,
            sinos: segments.iter().map(|s| s.sinos).sum(),
            segments,
            sinos_span1: within_mrd(0) + 2 * (1..=mrd).map(within_mrd).sum::<usize>(),
            sinos_unrestricted: rings * rings,
            half_michelogram: (0..=mrd).map(within_mrd).sum(),
        })
    }
}

/// All ring pairs rebinned onto the axial planes `r0 + r1`. Without oblique
/// pairs only every other plane is populated.
fn ssrb_segment(rings: usize, mrd: usize) -> Segment {
    let sinos = if mrd == 0 { rings } else { 2 * rings - 1 };
    Segment { min_rd: -(mrd as isize), max_rd: mrd as isize, sinos }
}

/// One segment per ring difference, ordered `0, -1, +1, -2, +2, ...`
fn span1_segments(rings: usize, mrd: usize) -> Vec<Segment> {
    let segment = |d: isize| Segment { min_rd: d, max_rd: d, sinos: rings - d.unsigned_abs() };
    std::iter::once(segment(0))
        .chain((1..=mrd as isize).flat_map(|d| [segment(-d), segment(d)]))
        .collect()
}

/// Segment 0 holds ring differences up to `(span - 1) / 2` in each direction;
/// each further segment holds `span` consecutive ring differences.
fn compressed_segments(rings: usize, mrd: usize, span: usize) -> Result<Vec<Segment>> {
    let half = (span - 1) / 2;
    if mrd < half || (mrd - half) % span != 0 {
        return Err(ConfigurationError::InvalidSinogram(format!(
            "span {span} does not tile ring differences up to {mrd}"
        )));
    }
    let n_pairs = (mrd - half) / span;
    let axial_planes = 2 * rings - 1;
    let mut segments = vec![Segment { min_rd: -(half as isize), max_rd: half as isize, sinos: axial_planes }];
    for k in 0..n_pairs {
        let lo = half + 1 + span * k;
        let hi = lo + span - 1;
        let sinos = axial_planes - 2 * lo;
        let (lo, hi) = (lo as isize, hi as isize);
        segments.push(Segment { min_rd: -hi, max_rd: -lo, sinos });
        segments.push(Segment { min_rd:  lo, max_rd:  hi, sinos });
    }
    Ok(segments)
}
