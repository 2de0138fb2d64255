pub use uom;
pub mod todo;

pub use uom::si::Quantity;
pub use uom::si::f64::{Angle, Frequency, Length, Ratio, Time, Velocity};

mod units {
  pub use uom::si::{length   ::{millimeter, centimeter, meter},
                    time     ::{second, minute, day, nanosecond, picosecond},
                    frequency::hertz,
                    velocity ::{meter_per_second, centimeter_per_second},
                    ratio    ::ratio,
                    angle    ::{radian, degree},
  };
}

// Making values from float literals is very long-winded in uom, so provide
// some pithily-named convenience constructors.

/// Generate a function called NAME which returns QUANTITY by interpreting its
/// argument as UNIT
///
/// wrap!(NAME QUANTITY UNIT);
macro_rules! wrap {
  ($name:ident $quantity:ident $unit:ident ) => {
    pub fn $name(x: f64) -> $quantity { $quantity::new::<units::$unit>(x) }
  };
}

wrap!(cm     Length              centimeter);
wrap!(mm     Length              millimeter);
wrap!(m      Length                   meter);
wrap!(s      Time                    second);
wrap!(minutes Time                   minute);
wrap!(days   Time                       day);
wrap!(ns     Time                nanosecond);
wrap!(ps     Time                picosecond);
wrap!(hz     Frequency                hertz);
wrap!(m_s    Velocity      meter_per_second);
wrap!(cm_s   Velocity centimeter_per_second);
wrap!(ratio  Ratio                    ratio);
wrap!(radian Angle                   radian);
wrap!(degree Angle                   degree);

// Reverse direction of the above.
pub fn cm_  (x: Length   ) -> f64 { x.get::<units::centimeter>() }
pub fn mm_  (x: Length   ) -> f64 { x.get::<units::millimeter>() }
pub fn s_   (x: Time     ) -> f64 { x.get::<units::second>    () }
pub fn ps_  (x: Time     ) -> f64 { x.get::<units::picosecond>() }
pub fn ns_  (x: Time     ) -> f64 { x.get::<units::nanosecond>() }
pub fn hz_  (x: Frequency) -> f64 { x.get::<units::hertz>     () }
pub fn m_s_ (x: Velocity ) -> f64 { x.get::<units::meter_per_second>() }
pub fn cm_s_(x: Velocity ) -> f64 { x.get::<units::centimeter_per_second>() }

pub fn ratio_ (x: Ratio) -> f64 { x.get::<units::ratio>() }
pub fn radian_(x: Angle) -> f64 { x.get::<units::radian>() }
pub fn degree_(x: Angle) -> f64 { x.get::<units::degree>() }

/// Build a `Quantity` from a value in the base SI unit of its dimension.
/// Unlike the `wrap!`-generated constructors, usable in `const` context.
#[macro_export]
macro_rules! in_base_unit {
  ($value:expr) => {
    $crate::Quantity {
      dimension: std::marker::PhantomData,
      units: std::marker::PhantomData,
      value: $value,
    }
  };
}

/// Speed of light in vacuum
pub const C: Velocity = in_base_unit!(299_792_458.0);

#[macro_export]
macro_rules! assert_uom_eq {
  ($unit:ident, $lhs:expr, $rhs:expr, $algo:ident <= $tol:expr) => {
    float_eq::assert_float_eq!($lhs.get::<$unit>(), $rhs.get::<$unit>(), $algo <= $tol)
  };
}

#[cfg(test)]
mod tests {
  use super::*;
  use rstest::rstest;
  use float_eq::assert_float_eq;

  #[test]
  fn sum_of_mixed_units() {
    let v = vec![mm(1.0), cm(1.0)];
    let total: Length = v.into_iter().sum();
    use units::millimeter;
    assert_uom_eq!(millimeter, total, mm(11.0), ulps <= 1);
  }

  #[test]
  fn speed_of_light_in_cm_per_s() {
    assert_float_eq!(cm_s_(C), 29_979_245_800.0, r2nd <= 1e-12);
  }

  #[test]
  fn time_times_velocity_is_length() {
    let d: Length = ps(390.0) * C;
    assert_float_eq!(cm_(d), 390e-12 * 29_979_245_800.0, r2nd <= 1e-12);
  }

  #[rstest(/**/ text  , picoseconds,
           case("2 ps"  ,      2.0),
           case("2 ns"  ,   2000.0),
           case("390 ps",    390.0),
  )]
  fn parse_time_with_units(text: &str, picoseconds: f64) {
    let t: Time = text.parse().unwrap();
    assert_float_eq!(ps_(t), picoseconds, r2nd <= 1e-12);
  }
}
