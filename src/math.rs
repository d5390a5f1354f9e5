//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{Matrix3, Matrix6};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-by-three real matrices (spatial rotations).
pub type R3x3 = Matrix3<Scalar>;
/// Convenient alias for 6×6 real matrices in Voigt notation.
pub type C6 = Matrix6<Scalar>;

/// Voigt index pairs in the order [11, 22, 33, 23, 13, 12].
///
/// Voigt index `I` corresponds to the tensor component `(i, j)` with
/// zero-based axes; the shear entries pair the off-diagonal components.
pub const VOIGT_PAIRS: [(usize, usize); 6] = [(0, 0), (1, 1), (2, 2), (1, 2), (0, 2), (0, 1)];

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Least-squares slope of `z` against `x` over paired samples.
///
/// Equivalent to the degree-one polynomial fit's leading coefficient.
/// Returns 0.0 when the `x` samples are all identical (vertical data has no
/// finite slope; callers clip windows so this only occurs for degenerate
/// domains).
#[must_use]
pub fn least_squares_slope(x: &[Scalar], z: &[Scalar]) -> Scalar {
    debug_assert_eq!(x.len(), z.len());
    let n = x.len() as Scalar;
    if x.is_empty() {
        return 0.0;
    }
    let x_mean = x.iter().sum::<Scalar>() / n;
    let z_mean = z.iter().sum::<Scalar>() / n;
    let mut cov = 0.0;
    let mut var = 0.0;
    for (&xi, &zi) in x.iter().zip(z) {
        cov += (xi - x_mean) * (zi - z_mean);
        var += (xi - x_mean) * (xi - x_mean);
    }
    if var == 0.0 {
        0.0
    } else {
        cov / var
    }
}
