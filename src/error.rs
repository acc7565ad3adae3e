//! Error types for Matriz operations.
//!
//! Every domain-validation failure in the crate surfaces as [`MatrizError`];
//! there is a single taxonomy for construction, element access, and
//! arithmetic failures on both container types.

use std::fmt;

/// Main error type for Matriz operations.
///
/// Covers invalid construction, out-of-range 1-based element access,
/// dimension mismatches between operands, and degenerate geometric inputs.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch { expected: 3, actual: 4 };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrizError {
    /// Construction was attempted with a zero dimension or ragged rows.
    InvalidDimensions {
        /// Which construction rule was violated
        what: &'static str,
    },

    /// A 1-based index was 0 or greater than the dimension it addresses.
    IndexOutOfBounds {
        /// Index as supplied by the caller
        index: usize,
        /// Upper bound of the valid range `1..=bound`
        bound: usize,
        /// Axis the index addresses ("element", "row", or "column")
        axis: &'static str,
    },

    /// Operand dimensions don't match for the operation.
    DimensionMismatch {
        /// Dimension of the receiver
        expected: usize,
        /// Dimension of the other operand
        actual: usize,
    },

    /// Cross product was attempted on operands that are not both 3-dimensional.
    NotThreeDimensional {
        /// Dimension of the left operand
        lhs: usize,
        /// Dimension of the right operand
        rhs: usize,
    },

    /// A geometric operation received a vector of Euclidean length zero.
    ZeroLength {
        /// Operation that rejected the input
        op: &'static str,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidDimensions { what } => {
                write!(f, "Invalid dimensions: {what}")
            }
            MatrizError::IndexOutOfBounds { index, bound, axis } => {
                write!(
                    f,
                    "Invalid {axis} index {index}: valid range is 1..={bound}"
                )
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Vector dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::NotThreeDimensional { lhs, rhs } => {
                write!(
                    f,
                    "Cross product is only defined for 3-dimensional vectors, got {lhs} and {rhs}"
                )
            }
            MatrizError::ZeroLength { op } => {
                write!(f, "Cannot compute {op} of a zero-length vector")
            }
        }
    }
}

impl std::error::Error for MatrizError {}

/// Result type alias for Matriz operations.
pub type Result<T> = std::result::Result<T, MatrizError>;
