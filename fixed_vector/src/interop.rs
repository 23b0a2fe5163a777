use nalgebra::SVector;

use crate::FixedVector;

impl<const N: usize> FixedVector<N> {
    pub fn to_svector(&self) -> SVector<f64, N> {
        SVector::from(self.into_array())
    }

    pub fn from_svector(v: &SVector<f64, N>) -> Self {
        Self::new(v.data.0[0])
    }
}

impl<const N: usize> From<SVector<f64, N>> for FixedVector<N> {
    fn from(v: SVector<f64, N>) -> Self {
        Self::from_svector(&v)
    }
}

impl<const N: usize> From<FixedVector<N>> for SVector<f64, N> {
    fn from(v: FixedVector<N>) -> Self {
        v.to_svector()
    }
}
