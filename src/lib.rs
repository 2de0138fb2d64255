//! Derived scanner geometry for PET reconstruction.
//!
//! A handful of base hardware constants ([`BaseGeometry`]) determine the
//! scatter-estimation grids, rounded ring radii, scatter-angle LUT step,
//! time-of-flight bin widths, sinogram layout and voxel-to-mm transform used
//! throughout the reconstruction pipeline. [`derive`] computes all of them at
//! once, into an immutable [`DerivedGeometry`].

pub mod types;
pub mod round;
pub mod error;
pub mod base;
pub mod config;
pub mod grid;
pub mod ring;
pub mod scatter;
pub mod tof;
pub mod affine;
pub mod sinogram;
pub mod isotope;
pub mod derived;

pub use base::BaseGeometry;
pub use derived::{derive, DerivedGeometry};
pub use error::ConfigurationError;
pub use types::{Axis, Zyx};
