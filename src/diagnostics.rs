//! Symmetry auditing for computed stiffness matrices.
//!
//! Every correctly rotated or averaged stiffness matrix is symmetric up to
//! floating-point error; the worst observed deviation is a cheap correctness
//! audit for the whole pipeline. Everything here is read-only and never
//! alters computed results.

use crate::math::{Scalar, C6};

/// Worst symmetry deviation of a matrix and where it occurs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asymmetry {
    /// max over entries of |M[r][c] − M[c][r]|.
    pub value: Scalar,
    /// Row of the worst-offending entry.
    pub row: usize,
    /// Column of the worst-offending entry.
    pub col: usize,
}

/// Returns the largest |M[r][c] − M[c][r]| over all entry pairs, with the
/// offending indices.
#[must_use]
pub fn max_asymmetry(m: &C6) -> Asymmetry {
    let mut worst = Asymmetry {
        value: 0.0,
        row: 0,
        col: 0,
    };
    for r in 0..6 {
        for c in r + 1..6 {
            let deviation = (m[(r, c)] - m[(c, r)]).abs();
            if deviation > worst.value {
                worst = Asymmetry {
                    value: deviation,
                    row: r,
                    col: c,
                };
            }
        }
    }
    worst
}

/// Scans a sequence of matrices and returns the index and asymmetry of the
/// worst offender, or `None` for an empty sequence.
#[must_use]
pub fn worst_asymmetry(matrices: &[C6]) -> Option<(usize, Asymmetry)> {
    matrices
        .iter()
        .map(max_asymmetry)
        .enumerate()
        .max_by(|(_, a), (_, b)| a.value.total_cmp(&b.value))
}

/// True when the worst asymmetry is below `rel_tol` relative to the matrix's
/// largest absolute entry (an exactly zero matrix counts as symmetric).
#[must_use]
pub fn is_symmetric(m: &C6, rel_tol: Scalar) -> bool {
    let scale = m.amax();
    if scale == 0.0 {
        return true;
    }
    max_asymmetry(m).value <= rel_tol * scale
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn symmetric_matrix_reports_zero_deviation() {
        let mut m = C6::identity();
        m[(0, 1)] = 3.0;
        m[(1, 0)] = 3.0;
        let a = max_asymmetry(&m);
        assert_relative_eq!(a.value, 0.0);
        assert!(is_symmetric(&m, 1.0e-9));
    }

    #[test]
    fn worst_entry_pair_is_located() {
        let mut m = C6::zeros();
        m[(0, 1)] = 1.0;
        m[(1, 0)] = 1.5;
        m[(2, 4)] = 2.0; // transpose entry left at zero
        let a = max_asymmetry(&m);
        assert_relative_eq!(a.value, 2.0);
        assert_eq!((a.row, a.col), (2, 4));
        assert!(!is_symmetric(&m, 1.0e-9));
    }

    #[test]
    fn worst_asymmetry_scans_by_segment_index() {
        let clean = C6::identity();
        let mut skewed = C6::identity();
        skewed[(3, 5)] = 0.25;
        let (index, a) = worst_asymmetry(&[clean, skewed, clean]).expect("non-empty");
        assert_eq!(index, 1);
        assert_relative_eq!(a.value, 0.25);
        assert!(worst_asymmetry(&[]).is_none());
    }
}
