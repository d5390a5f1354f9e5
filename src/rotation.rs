//! Voigt tensor rotation of 6×6 stiffness matrices.
//!
//! A stiffness matrix in engineering-shear Voigt form cannot be rotated with
//! the spatial rotation directly: the shear rows mix tensor components with a
//! factor-of-two convention. The single rotation algorithm used throughout
//! this crate is: convert the strain side to tensor shear with the Reuter
//! scaling, rotate with the 6×6 operator built from the spatial rotation, and
//! convert back. Symmetry of the input is preserved up to floating-point
//! error, which [`crate::diagnostics`] can audit.

use crate::errors::WeaveError;
use crate::math::{Scalar, C6, R3x3, VOIGT_PAIRS};

/// Spatial rotation by `theta` (radians) about the in-plane transverse axis
/// (y). Binder yarn paths lie in the x–z plane, so their segment orientations
/// rotate about y.
#[must_use]
pub fn rotation_about_y(theta: Scalar) -> R3x3 {
    let (s, c) = theta.sin_cos();
    R3x3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
}

/// Spatial rotation by `theta` (radians) about the through-thickness axis
/// (z). The warp-to-weft reorientation is an in-plane rotation about z.
#[must_use]
pub fn rotation_about_z(theta: Scalar) -> R3x3 {
    let (s, c) = theta.sin_cos();
    R3x3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
}

/// Builds the 6×6 operator that rotates a symmetric second-order tensor in
/// tensor-shear Voigt form: `vec(S') = A vec(S)` where `S' = R S Rᵀ`.
///
/// Acts correctly only on tensor-shear Voigt vectors; engineering-shear
/// quantities must go through the Reuter conversion first.
#[must_use]
pub fn voigt_rotation(r: &R3x3) -> C6 {
    let mut a = C6::zeros();
    for (row, &(i, j)) in VOIGT_PAIRS.iter().enumerate() {
        for (col, &(p, q)) in VOIGT_PAIRS.iter().enumerate() {
            a[(row, col)] = r[(i, p)] * r[(j, q)]
                + if p != q { r[(i, q)] * r[(j, p)] } else { 0.0 };
        }
    }
    a
}

/// Reuter scaling diag(1, 1, 1, 2, 2, 2) taking engineering-shear strain
/// vectors to tensor-shear form.
fn reuter() -> C6 {
    C6::from_diagonal(&nalgebra::Vector6::new(1.0, 1.0, 1.0, 2.0, 2.0, 2.0))
}

/// Inverse Reuter scaling diag(1, 1, 1, ½, ½, ½).
fn reuter_inv() -> C6 {
    C6::from_diagonal(&nalgebra::Vector6::new(1.0, 1.0, 1.0, 0.5, 0.5, 0.5))
}

/// Rotates an engineering-shear stiffness matrix by the spatial rotation `r`.
///
/// Steps: Reuter conversion on the strain side, similarity transform with the
/// Voigt operator A, conversion back:
/// `C' = A (C · Reuter) A⁻¹ · Reuter⁻¹`.
///
/// A genuine rotation always yields an invertible A; a singular A therefore
/// signals an internal invariant violation and surfaces as
/// [`WeaveError::Singular`] rather than NaN.
pub fn rotate_stiffness(c_eng: &C6, r: &R3x3) -> Result<C6, WeaveError> {
    let a = voigt_rotation(r);
    let a_inv = a
        .try_inverse()
        .ok_or(WeaveError::Singular("rotation operator"))?;

    let c_tensor = c_eng * reuter();
    let c_tensor_rot = a * c_tensor * a_inv;
    Ok(c_tensor_rot * reuter_inv())
}

/// Rotates a stiffness matrix by `theta` about the in-plane transverse axis.
pub fn rotate_about_y(c_eng: &C6, theta: Scalar) -> Result<C6, WeaveError> {
    rotate_stiffness(c_eng, &rotation_about_y(theta))
}

/// Rotates a stiffness matrix by `theta` about the through-thickness axis.
pub fn rotate_about_z(c_eng: &C6, theta: Scalar) -> Result<C6, WeaveError> {
    rotate_stiffness(c_eng, &rotation_about_z(theta))
}

/// Rotates the warp stiffness into the weft frame: the single-angle
/// specialization at θ = π/2 about the through-thickness axis.
pub fn weft_stiffness(c_warp: &C6) -> Result<C6, WeaveError> {
    rotate_about_z(c_warp, std::f64::consts::FRAC_PI_2)
}

/// Rotates the base stiffness into every binder segment orientation.
///
/// Order-preserving: output index i corresponds to `angles[i]`. Segments are
/// independent of one another; the loop body carries no state between
/// iterations.
pub fn rotate_segments(c_base: &C6, angles: &[Scalar]) -> Result<Vec<C6>, WeaveError> {
    angles
        .iter()
        .map(|&theta| rotate_about_y(c_base, theta))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_4, PI, TAU};

    use approx::assert_relative_eq;

    use super::*;
    use crate::diagnostics::max_asymmetry;
    use crate::materials::{chamis_micromechanics, orthotropic_stiffness, ChamisInputs};

    fn warp_stiffness() -> C6 {
        let est = chamis_micromechanics(&ChamisInputs::reference());
        orthotropic_stiffness(&est.constants).expect("invertible compliance")
    }

    #[test]
    fn zero_rotation_is_the_identity() {
        let c = warp_stiffness();
        let rotated = rotate_about_y(&c, 0.0).expect("rotation");
        for r in 0..6 {
            for col in 0..6 {
                assert_relative_eq!(rotated[(r, col)], c[(r, col)], epsilon = 1.0e-9);
            }
        }
    }

    #[test]
    fn full_turn_is_periodic() {
        let c = warp_stiffness();
        let once = rotate_about_y(&c, FRAC_PI_4).expect("rotation");
        let again = rotate_about_y(&c, FRAC_PI_4 + TAU).expect("rotation");
        for r in 0..6 {
            for col in 0..6 {
                assert_relative_eq!(once[(r, col)], again[(r, col)], epsilon = 1.0e-8);
            }
        }
    }

    #[test]
    fn rotation_preserves_symmetry() {
        let c = warp_stiffness();
        for theta in [0.3, FRAC_PI_4, 1.2, PI / 2.0] {
            let about_y = rotate_about_y(&c, theta).expect("rotation");
            let about_z = rotate_about_z(&c, theta).expect("rotation");
            assert!(max_asymmetry(&about_y).value < 1.0e-9 * about_y.amax());
            assert!(max_asymmetry(&about_z).value < 1.0e-9 * about_z.amax());
        }
    }

    #[test]
    fn weft_rotation_swaps_longitudinal_and_transverse_stiffness() {
        let c = warp_stiffness();
        let weft = weft_stiffness(&c).expect("rotation");
        assert_relative_eq!(weft[(0, 0)], c[(1, 1)], epsilon = 1.0e-8 * c[(0, 0)]);
        assert_relative_eq!(weft[(1, 1)], c[(0, 0)], epsilon = 1.0e-8 * c[(0, 0)]);
        assert_relative_eq!(weft[(2, 2)], c[(2, 2)], epsilon = 1.0e-8 * c[(2, 2)]);
    }

    #[test]
    fn voigt_operator_of_identity_is_identity() {
        let a = voigt_rotation(&R3x3::identity());
        for r in 0..6 {
            for col in 0..6 {
                let expected = if r == col { 1.0 } else { 0.0 };
                assert_relative_eq!(a[(r, col)], expected);
            }
        }
    }

    #[test]
    fn rotate_segments_preserves_order_and_count() {
        let c = warp_stiffness();
        let angles = [0.0, 0.2, 0.4];
        let rotated = rotate_segments(&c, &angles).expect("rotation");
        assert_eq!(rotated.len(), 3);
        // First angle is zero, so the first segment matches the base matrix.
        assert_relative_eq!(rotated[0][(0, 0)], c[(0, 0)], epsilon = 1.0e-9 * c[(0, 0)]);
    }
}
