use serde::{Deserialize, Serialize};

/// A per-axis triple, in the `(z, y, x)` order in which the scanner's images
/// are laid out (slowest-varying axis first).
///
/// In TOML and JSON it appears as a plain array `[z, y, x]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(T, T, T)", into = "(T, T, T)")]
#[serde(bound(serialize = "T: Clone + Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Zyx<T> {
    pub z: T,
    pub y: T,
    pub x: T,
}

impl<T> Zyx<T> {
    pub const fn new(z: T, y: T, x: T) -> Self { Self { z, y, x } }

    pub fn map<U>(self, f: impl Fn(T) -> U) -> Zyx<U> {
        let Zyx { z, y, x } = self;
        Zyx { z: f(z), y: f(y), x: f(x) }
    }

    pub fn zip<U>(self, other: Zyx<U>) -> Zyx<(T, U)> {
        Zyx {
            z: (self.z, other.z),
            y: (self.y, other.y),
            x: (self.x, other.x),
        }
    }

    /// Pair each component with the axis it lies along
    pub fn with_axes(self) -> Zyx<(Axis, T)> {
        Zyx::new(Axis::Z, Axis::Y, Axis::X).zip(self)
    }

    /// Components in `[z, y, x]` order
    pub fn to_array(self) -> [T; 3] { [self.z, self.y, self.x] }
}

impl<T, E> Zyx<Result<T, E>> {
    /// `Ok` if all components are `Ok`; otherwise the first `Err`, in z, y, x order.
    pub fn transpose(self) -> Result<Zyx<T>, E> {
        Ok(Zyx { z: self.z?, y: self.y?, x: self.x? })
    }
}

impl<T> From<(T, T, T)> for Zyx<T> {
    fn from((z, y, x): (T, T, T)) -> Self { Self { z, y, x } }
}

impl<T> From<Zyx<T>> for (T, T, T) {
    fn from(Zyx { z, y, x }: Zyx<T>) -> Self { (z, y, x) }
}

/// Image axis, used to report which component of a `Zyx` was at fault
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis { Z, Y, X }

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self { Axis::Z => "z", Axis::Y => "y", Axis::X => "x" };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zyx_from_toml_array() {
        #[derive(Deserialize, Debug)]
        struct X { dims: Zyx<usize> }
        let x: X = toml::from_str("dims = [127, 344, 320]").unwrap();
        assert_eq!(x.dims, Zyx::new(127, 344, 320));
    }

    #[test]
    fn transpose_reports_first_error() {
        let all_ok: Zyx<Result<u8, Axis>> = Zyx::new(Ok(1), Ok(2), Ok(3));
        assert_eq!(all_ok.transpose(), Ok(Zyx::new(1, 2, 3)));

        let two_bad: Zyx<Result<u8, Axis>> = Zyx::new(Ok(1), Err(Axis::Y), Err(Axis::X));
        assert_eq!(two_bad.transpose(), Err(Axis::Y));
    }

    #[test]
    fn with_axes_labels_components() {
        let labelled = Zyx::new('a', 'b', 'c').with_axes();
        assert_eq!(labelled.to_array(), [(Axis::Z, 'a'), (Axis::Y, 'b'), (Axis::X, 'c')]);
    }
}
