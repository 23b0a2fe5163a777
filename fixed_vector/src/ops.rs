use std::iter::Sum;
use std::ops::{
    Add, AddAssign, BitXor, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::vector::{FixedVector, cross_components};

// Operators are thin wrappers over the named operations in `vector.rs`.

impl<const N: usize> Index<usize> for FixedVector<N> {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.as_slice()[index]
    }
}

impl<const N: usize> IndexMut<usize> for FixedVector<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.as_mut_slice()[index]
    }
}

impl<const N: usize> Neg for FixedVector<N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.into_array().map(|c| -c))
    }
}

impl<const N: usize> Add for FixedVector<N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.add_in_place(&rhs);
        self
    }
}

impl<const N: usize> Sub for FixedVector<N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self.sub_in_place(&rhs);
        self
    }
}

impl<const N: usize> AddAssign for FixedVector<N> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(&rhs);
    }
}

impl<const N: usize> SubAssign for FixedVector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_in_place(&rhs);
    }
}

impl<const N: usize> Mul<f64> for FixedVector<N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl<const N: usize> Mul<FixedVector<N>> for f64 {
    type Output = FixedVector<N>;

    fn mul(self, rhs: FixedVector<N>) -> FixedVector<N> {
        rhs.scale(self)
    }
}

/// `v * w` between two vectors is the dot product.
impl<const N: usize> Mul for FixedVector<N> {
    type Output = f64;

    fn mul(self, rhs: Self) -> f64 {
        self.dot(&rhs)
    }
}

impl<const N: usize> MulAssign<f64> for FixedVector<N> {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_in_place(rhs);
    }
}

impl<const N: usize> Div<f64> for FixedVector<N> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self.unscale(rhs)
    }
}

impl<const N: usize> DivAssign<f64> for FixedVector<N> {
    fn div_assign(&mut self, rhs: f64) {
        self.unscale_in_place(rhs);
    }
}

/// `u ^ v` is the cross product. It only exists in three dimensions, so unlike
/// [`FixedVector::cross`] it cannot fail.
impl BitXor for FixedVector<3> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self::new(cross_components(self.as_slice(), rhs.as_slice()))
    }
}

impl<const N: usize> Sum for FixedVector<N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zeros(), |acc, v| acc + v)
    }
}
