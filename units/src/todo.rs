//! Quantities which are simply type aliases for `f64` rather than having an
//! implementation as a `uom` `Quantity`.
//!
//! The scanner constants are tabulated in centimetres and electronvolts, and
//! several derived values must be rounded to a fixed number of decimals *in
//! those units*. Converting them to and from `uom`'s SI base units would
//! perturb the last bits, so they stay plain `f64`s, with the alias giving a
//! clue in the source as to what they represent.

pub type Lengthcm    = f64;
pub type Areacm2     = f64;
pub type PerLengthcm = f64;
pub type Energyev    = f64; // TODO uom Energy, once eV round-trips exactly
pub type Angledeg    = f64;
pub type Angleradian = f64;
pub type Ratiof64    = f64;
