//! Error type shared across the supertropical workspace.

use thiserror::Error;

use crate::element::Element;

/// Errors raised by element construction and matrix operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// Operand shapes do not conform for the requested operation.
    #[error("dimension mismatch in {operation}: {left:?} vs {right:?}")]
    DimensionMismatch {
        /// Name of the operation that rejected the shapes.
        operation: &'static str,
        /// Shape of the left (or only) operand.
        left: (usize, usize),
        /// Shape of the right operand, or the expected shape.
        right: (usize, usize),
    },

    /// A row or column index is out of range.
    #[error("index ({row}, {col}) out of range for shape {shape:?}")]
    InvalidIndex {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Shape of the indexed matrix.
        shape: (usize, usize),
    },

    /// The permanent is ghost or `-∞`, so no unique tangible solution exists.
    #[error("matrix is singular: permanent {permanent} is not an invertible tangible")]
    SingularMatrix {
        /// The offending permanent.
        permanent: Element,
    },

    /// A value that cannot be used as a semiring element.
    #[error("unsupported operand: {0}")]
    UnsupportedOperand(String),

    /// The matrix is too large for factorial-time permanent enumeration.
    #[error("matrix order {order} exceeds the permanent size limit {max_order}")]
    OrderTooLarge {
        /// Order of the square matrix.
        order: usize,
        /// Configured limit.
        max_order: usize,
    },
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
