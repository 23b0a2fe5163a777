use crate::FixedVector;

/// A struct with named `f64` fields that is, component for component, a
/// `FixedVector<N>`.
///
/// Field declaration order is component order. Usually derived:
///
/// ```rust
/// use fixed_vector::{FixedVector, NamedComponents};
///
/// #[derive(Debug, Clone, Copy, PartialEq, NamedComponents)]
/// struct Position {
///     x: f64,
///     y: f64,
///     z: f64,
/// }
///
/// let p = Position { x: 1.0, y: 2.0, z: 3.0 };
/// assert_eq!(p.to_fixed_vector(), FixedVector::new([1.0, 2.0, 3.0]));
/// assert_eq!(p + p * 2.0, Position { x: 3.0, y: 6.0, z: 9.0 });
/// ```
pub trait NamedComponents<const N: usize>:
    Copy
  + Clone
  + std::ops::Add<Self, Output = Self>
  + std::ops::Sub<Self, Output = Self>
  + std::ops::Mul<f64, Output = Self>
  + std::ops::AddAssign<Self>
  + std::ops::SubAssign<Self>
{
    const SIZE: usize = N;

    fn to_fixed_vector(&self) -> FixedVector<N>;
    fn from_fixed_vector(v: &FixedVector<N>) -> Self;

    fn dot(&self, other: &Self) -> f64 {
        self.to_fixed_vector().dot(&other.to_fixed_vector())
    }

    fn norm(&self) -> f64 {
        self.to_fixed_vector().norm()
    }

    fn to_svector(&self) -> nalgebra::SVector<f64, N> {
        self.to_fixed_vector().to_svector()
    }

    fn from_svector(v: &nalgebra::SVector<f64, N>) -> Self {
        Self::from_fixed_vector(&FixedVector::from_svector(v))
    }
}
