use std::fmt;

use log::{debug, warn};

use crate::error::VectorError;

/// A vector in `N`-dimensional real space.
///
/// Components are stored inline as `[f64; N]`, so the type is `Copy` and a
/// copy never aliases the original. Arithmetic follows IEEE-754 exactly:
/// no epsilon comparisons, no normalization of signed zero.
///
/// ```rust
/// use fixed_vector::FixedVector;
///
/// let mut v = FixedVector::<3>::zeros();
/// v[1] = 1.0;
/// v[2] = 2.0;
/// assert_eq!(v.to_string(), "[0 1 2]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedVector<const N: usize> {
    data: [f64; N],
}

impl<const N: usize> FixedVector<N> {
    pub const DIM: usize = N;

    #[inline]
    pub const fn new(data: [f64; N]) -> Self {
        Self { data }
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self { data: [0.0; N] }
    }

    /// The `axis`-th standard basis vector.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= N`.
    pub fn basis(axis: usize) -> Self {
        let mut v = Self::zeros();
        v[axis] = 1.0;
        v
    }

    /// Copies the first `N` values of `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` holds fewer than `N` values. Use
    /// [`try_from_slice`](Self::try_from_slice) when the length is not known.
    pub fn from_slice(values: &[f64]) -> Self {
        let mut data = [0.0; N];
        data.copy_from_slice(&values[..N]);
        Self { data }
    }

    pub fn try_from_slice(values: &[f64]) -> Result<Self, VectorError> {
        if values.len() < N {
            debug!(
                "rejecting slice of {} values for a {}-dimensional vector",
                values.len(),
                N
            );
            return Err(VectorError::insufficient_data(N, values.len()));
        }
        Ok(Self::from_slice(values))
    }

    #[inline]
    pub const fn dim(&self) -> usize {
        N
    }

    #[inline]
    pub const fn as_array(&self) -> &[f64; N] {
        &self.data
    }

    #[inline]
    pub const fn into_array(self) -> [f64; N] {
        self.data
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, f64> {
        self.data.iter_mut()
    }

    /// Multiplies every component by `s`.
    #[inline]
    pub fn scale(&self, s: f64) -> Self {
        Self {
            data: self.data.map(|c| c * s),
        }
    }

    /// Divides every component by `s`.
    #[inline]
    pub fn unscale(&self, s: f64) -> Self {
        Self {
            data: self.data.map(|c| c / s),
        }
    }

    pub fn add_in_place(&mut self, rhs: &Self) -> &mut Self {
        for (lhs, rhs) in self.data.iter_mut().zip(rhs.data.iter()) {
            *lhs += *rhs;
        }
        self
    }

    pub fn sub_in_place(&mut self, rhs: &Self) -> &mut Self {
        for (lhs, rhs) in self.data.iter_mut().zip(rhs.data.iter()) {
            *lhs -= *rhs;
        }
        self
    }

    pub fn scale_in_place(&mut self, s: f64) -> &mut Self {
        for c in self.data.iter_mut() {
            *c *= s;
        }
        self
    }

    pub fn unscale_in_place(&mut self, s: f64) -> &mut Self {
        for c in self.data.iter_mut() {
            *c /= s;
        }
        self
    }

    /// Dot product, accumulated from index 0 upwards starting at `0.0`.
    pub fn dot(&self, other: &Self) -> f64 {
        let mut sum = 0.0;
        for i in 0..N {
            sum += self.data[i] * other.data[i];
        }
        sum
    }

    /// Sum of squared components. Bit-identical to `self.dot(self)`.
    pub fn norm_squared(&self) -> f64 {
        let mut acc = 0.0;
        for c in &self.data {
            acc += c * c;
        }
        acc
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).norm()
    }

    /// Scales the vector to unit length.
    ///
    /// A zero vector has no direction; the division then yields NaN
    /// components. Use [`try_normalize`](Self::try_normalize) to get an
    /// error instead.
    pub fn normalize(&self) -> Self {
        let norm = self.norm();
        if norm == 0.0 {
            warn!("normalizing a zero {}-dimensional vector", N);
        }
        self.unscale(norm)
    }

    pub fn try_normalize(&self) -> Result<Self, VectorError> {
        let norm = self.norm();
        if norm == 0.0 {
            debug!("refusing to normalize a zero {}-dimensional vector", N);
            return Err(VectorError::ZeroNorm);
        }
        Ok(self.unscale(norm))
    }

    /// Cross product. Only defined for `N == 3`; any other dimension returns
    /// [`VectorError::UnsupportedDimension`].
    ///
    /// For `FixedVector<3>` the infallible `^` operator computes the same thing.
    pub fn cross(&self, other: &Self) -> Result<Self, VectorError> {
        if N != 3 {
            debug!("cross product requested in dimension {}", N);
            return Err(VectorError::unsupported_dimension("cross product", 3, N));
        }
        Ok(Self::from_slice(&cross_components(
            self.as_slice(),
            other.as_slice(),
        )))
    }
}

impl FixedVector<3> {
    #[inline]
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.data[2]
    }
}

pub(crate) fn cross_components(a: &[f64], b: &[f64]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

impl<const N: usize> Default for FixedVector<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> From<[f64; N]> for FixedVector<N> {
    fn from(data: [f64; N]) -> Self {
        Self { data }
    }
}

impl<const N: usize> From<FixedVector<N>> for [f64; N] {
    fn from(v: FixedVector<N>) -> Self {
        v.data
    }
}

impl<const N: usize> TryFrom<&[f64]> for FixedVector<N> {
    type Error = VectorError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::try_from_slice(values)
    }
}

impl<'a, const N: usize> IntoIterator for &'a FixedVector<N> {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<const N: usize> fmt::Display for FixedVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_follows_shortest_float_formatting() {
        let v = FixedVector::new([1.0, -0.0, 2.5]);
        assert_eq!(v.to_string(), "[1 -0 2.5]");
        assert_eq!(FixedVector::<0>::zeros().to_string(), "[]");
        assert_eq!(FixedVector::new([f64::INFINITY, f64::NAN]).to_string(), "[inf NaN]");
    }

    #[test]
    fn display_never_switches_to_exponent_notation() {
        let v = FixedVector::new([1e21, 1e-7, 0.1 + 0.2]);
        assert_eq!(
            v.to_string(),
            "[1000000000000000000000 0.0000001 0.30000000000000004]"
        );
    }

    #[test]
    fn from_slice_reads_only_the_first_n_values() {
        let data = [0.0, 1.0, 2.0, 3.0, 4.0];
        let v = FixedVector::<3>::from_slice(&data[1..]);
        assert_eq!(v.as_array(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic]
    fn from_slice_panics_on_short_input() {
        let _ = FixedVector::<4>::from_slice(&[1.0, 2.0]);
    }

    #[test]
    fn try_from_slice_reports_missing_values() {
        let err = FixedVector::<4>::try_from_slice(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err, VectorError::insufficient_data(4, 2));

        let v: FixedVector<2> = [5.0, 6.0, 7.0].as_slice().try_into().unwrap();
        assert_eq!(v, FixedVector::new([5.0, 6.0]));
    }

    #[test]
    fn chained_in_place_ops_mutate_the_receiver() {
        let mut v = FixedVector::new([1.0, 2.0]);
        let w = FixedVector::new([1.0, 1.0]);
        v.add_in_place(&w)
            .add_in_place(&w)
            .sub_in_place(&w)
            .scale_in_place(4.0)
            .unscale_in_place(2.0);
        assert_eq!(v, FixedVector::new([4.0, 6.0]));
    }

    #[test]
    fn norm_squared_matches_dot() {
        let v = FixedVector::new([1.5, -2.25, 3.125, 0.5]);
        assert_eq!(v.norm_squared(), v.dot(&v));
        assert_eq!(FixedVector::<5>::zeros().norm(), 0.0);
        assert_eq!(FixedVector::new([3.0, 4.0]).norm(), 5.0);
    }

    #[test]
    fn normalize_zero_vector() {
        assert!(FixedVector::<3>::zeros().normalize().iter().all(|c| c.is_nan()));
        assert_eq!(
            FixedVector::<3>::zeros().try_normalize(),
            Err(VectorError::ZeroNorm)
        );
        assert_eq!(
            FixedVector::new([0.0, 2.0]).try_normalize(),
            Ok(FixedVector::new([0.0, 1.0]))
        );
    }

    #[test]
    fn cross_rejects_non_3d() {
        let a = FixedVector::<2>::basis(0);
        assert_eq!(
            a.cross(&a),
            Err(VectorError::unsupported_dimension("cross product", 3, 2))
        );
    }

    #[test]
    fn basis_and_accessors() {
        let z = FixedVector::<3>::basis(2);
        assert_eq!((z.x(), z.y(), z.z()), (0.0, 0.0, 1.0));
        assert_eq!(z.dim(), 3);
        assert_eq!(FixedVector::<7>::DIM, 7);
    }

    #[test]
    fn distance_is_norm_of_difference() {
        let a = FixedVector::new([1.0, 1.0]);
        let b = FixedVector::new([4.0, 5.0]);
        assert_eq!(a.distance(&b), 5.0);
    }
}
