use thiserror::Error;

/// Errors raised by the checked operations on [`FixedVector`](crate::FixedVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    /// The operation only exists in a specific dimension (e.g. the cross product in 3D).
    #[error("{operation} is undefined for dimension {actual}, expected {expected}")]
    UnsupportedDimension {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A source slice held fewer values than the vector has components.
    #[error("insufficient data: required {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Normalization of a vector whose norm is zero.
    #[error("cannot normalize a vector with zero norm")]
    ZeroNorm,
}

impl VectorError {
    pub fn unsupported_dimension(operation: &'static str, expected: usize, actual: usize) -> Self {
        Self::UnsupportedDimension {
            operation,
            expected,
            actual,
        }
    }

    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = VectorError::unsupported_dimension("cross product", 3, 4);
        assert_eq!(
            err.to_string(),
            "cross product is undefined for dimension 4, expected 3"
        );

        let err = VectorError::insufficient_data(3, 1);
        assert_eq!(err.to_string(), "insufficient data: required 3 values, got 1");

        assert_eq!(
            VectorError::ZeroNorm.to_string(),
            "cannot normalize a vector with zero norm"
        );
    }
}
