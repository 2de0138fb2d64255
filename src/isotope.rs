//! Positron-emitting radio-isotopes and their decay properties.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use units::{days, minutes, s, s_, Time};
use units::todo::Ratiof64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Isotope { Ge68, Ga68, F18, C11, O15 }

impl Isotope {
    pub const ALL: [Isotope; 5] = [Isotope::Ge68, Isotope::Ga68, Isotope::F18, Isotope::C11, Isotope::O15];

    /// Fraction of decays which emit a positron
    pub fn branching_fraction(self) -> Ratiof64 {
        use Isotope::*;
        match self {
            Ge68 => 0.891,
            Ga68 => 0.891,
            F18  => 0.967,
            C11  => 0.998,
            O15  => 0.999,
        }
    }

    pub fn half_life(self) -> Time {
        use Isotope::*;
        match self {
            Ge68 => days(270.9516),
            Ga68 => minutes(67.71),
            F18  => minutes(109.77120),
            C11  => minutes(20.38),
            O15  => s(122.2416),
        }
    }

    pub fn name(self) -> &'static str {
        use Isotope::*;
        match self {
            Ge68 => "Ge68",
            Ga68 => "Ga68",
            F18  => "F18",
            C11  => "C11",
            O15  => "O15",
        }
    }
}

impl std::fmt::Display for Isotope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.name()) }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown isotope `{0}`: expected one of Ge68, Ga68, F18, C11, O15")]
pub struct UnknownIsotope(pub String);

impl FromStr for Isotope {
    type Err = UnknownIsotope;

    /// Case-insensitive, with or without a hyphen: `F18`, `f-18`
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let wanted = text.replace('-', "");
        Self::ALL.into_iter()
            .find(|i| i.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownIsotope(text.into()))
    }
}

/// Decay properties of the configured isotope, in the plain units used by the
/// decay-correction code.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Decay {
    pub isotope: Isotope,
    pub branching_fraction: Ratiof64,

    /// Seconds
    pub half_life: f64,

    /// `ln 2 / half_life`, per second
    pub decay_constant: f64,
}

impl From<Isotope> for Decay {
    fn from(isotope: Isotope) -> Self {
        let half_life = s_(isotope.half_life());
        Self {
            isotope,
            branching_fraction: isotope.branching_fraction(),
            half_life,
            decay_constant: std::f64::consts::LN_2 / half_life,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use float_eq::assert_float_eq;

    #[rstest(/**/ isotope     , seconds,
             case(Isotope::Ge68, 270.9516 * 24.0 * 60.0 * 60.0),
             case(Isotope::Ga68,  67.71 * 60.0),
             case(Isotope::F18 , 109.7712 * 60.0),
             case(Isotope::C11 ,  20.38 * 60.0),
             case(Isotope::O15 , 122.2416),
    )]
    fn half_lives_in_seconds(isotope: Isotope, seconds: f64) {
        assert_float_eq!(Decay::from(isotope).half_life, seconds, r2nd <= 1e-12);
    }

    #[rstest(/**/ text  , expected,
             case("F18" , Isotope::F18),
             case("f18" , Isotope::F18),
             case("F-18", Isotope::F18),
             case("ga68", Isotope::Ga68),
             case("O15" , Isotope::O15),
    )]
    fn parse_isotope_names(text: &str, expected: Isotope) {
        assert_eq!(text.parse::<Isotope>(), Ok(expected));
    }

    #[test]
    fn reject_unknown_isotope() {
        assert_eq!("Tc99m".parse::<Isotope>(), Err(UnknownIsotope("Tc99m".into())));
    }

    #[test]
    fn decay_constant_halves_activity_in_one_half_life() {
        for isotope in Isotope::ALL {
            let decay = Decay::from(isotope);
            let remaining = (-decay.decay_constant * decay.half_life).exp();
            assert_float_eq!(remaining, 0.5, abs <= 1e-12);
        }
    }

    #[test]
    fn serde_names_match_display() {
        #[derive(Deserialize)]
        struct X { isotope: Isotope }
        for isotope in Isotope::ALL {
            let x: X = toml::from_str(&format!("isotope = \"{isotope}\"")).unwrap();
            assert_eq!(x.isotope, isotope);
        }
    }
}
