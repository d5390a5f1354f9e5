//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the crate.
///
/// Validation and degeneracy variants are caller-fixable and raised at the
/// point of detection with the offending quantity and value. `Singular`
/// signals a linear-algebra failure that valid physical inputs never produce
/// (e.g. a zero modulus making the compliance non-invertible).
#[derive(Debug, Error)]
pub enum WeaveError {
    /// Raised when a yarn path has fewer than two nodes.
    #[error("node count must be at least 2, got {given}")]
    NodeCount {
        /// The node count the caller supplied.
        given: usize,
    },
    /// Raised when segment stiffness and length sequences disagree in length.
    #[error("binder segment count {segments} does not match length count {lengths}")]
    ShapeMismatch {
        /// Number of per-segment stiffness matrices.
        segments: usize,
        /// Number of segment lengths.
        lengths: usize,
    },
    /// Raised when a volume fraction falls outside [0, 1].
    #[error("volume fraction `{name}` must lie in [0, 1], got {value}")]
    Fraction {
        /// Which fraction failed validation.
        name: &'static str,
        /// The out-of-range value.
        value: Scalar,
    },
    /// Raised when segment lengths sum to zero and averaging is undefined.
    #[error("segment lengths sum to zero; a zero-length binder path cannot be averaged")]
    DegenerateLengths,
    /// Raised when a matrix that must be invertible is numerically singular.
    #[error("singular matrix while inverting {0}")]
    Singular(&'static str),
}
