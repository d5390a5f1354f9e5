//! Material property providers.
//!
//! Three independent ways of producing a 6×6 stiffness matrix feed the
//! homogenization pipeline: the orthotropic ply builder (compliance inversion
//! from nine engineering constants), the isotropic resin builder (Lamé closed
//! form), and the Chamis micromechanics evaluator that estimates the
//! engineering constants from fiber and matrix data. All take their inputs
//! explicitly and return fresh values; nothing is cached at module scope.

use crate::constants;
use crate::errors::WeaveError;
use crate::math::{Scalar, C6};

/// Nine orthotropic engineering constants. Moduli in GPa.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineeringConstants {
    /// Longitudinal Young's modulus E1.
    pub e1: Scalar,
    /// In-plane transverse Young's modulus E2.
    pub e2: Scalar,
    /// Through-thickness Young's modulus E3.
    pub e3: Scalar,
    /// Major Poisson's ratio ν12.
    pub nu12: Scalar,
    /// Poisson's ratio ν13.
    pub nu13: Scalar,
    /// Transverse Poisson's ratio ν23.
    pub nu23: Scalar,
    /// In-plane shear modulus G12.
    pub g12: Scalar,
    /// Shear modulus G13.
    pub g13: Scalar,
    /// Transverse shear modulus G23.
    pub g23: Scalar,
}

impl EngineeringConstants {
    /// Builds the constants for a transversely isotropic ply, deriving
    /// E3 = E2, ν13 = ν23 and G13 = G23.
    #[must_use]
    pub const fn transversely_isotropic(
        e1: Scalar,
        e2: Scalar,
        nu12: Scalar,
        nu23: Scalar,
        g12: Scalar,
        g23: Scalar,
    ) -> Self {
        Self {
            e1,
            e2,
            e3: e2,
            nu12,
            nu13: nu23,
            nu23,
            g12,
            g13: g23,
            g23,
        }
    }
}

/// Builds the 6×6 orthotropic stiffness matrix by inverting the compliance
/// assembled from `constants`.
///
/// Voigt order is [11, 22, 33, 23, 13, 12] with engineering shear on the
/// strain side. Fails with [`WeaveError::Singular`] when the compliance is
/// not invertible, which indicates malformed constants (e.g. a zero modulus)
/// rather than a caller-recoverable condition.
pub fn orthotropic_stiffness(constants: &EngineeringConstants) -> Result<C6, WeaveError> {
    let c = constants;
    let mut s = C6::zeros();
    s[(0, 0)] = 1.0 / c.e1;
    s[(0, 1)] = -c.nu12 / c.e1;
    s[(0, 2)] = -c.nu13 / c.e1;
    s[(1, 0)] = -c.nu12 / c.e1;
    s[(1, 1)] = 1.0 / c.e2;
    s[(1, 2)] = -c.nu23 / c.e2;
    s[(2, 0)] = -c.nu13 / c.e1;
    s[(2, 1)] = -c.nu23 / c.e2;
    s[(2, 2)] = 1.0 / c.e3;
    s[(3, 3)] = 1.0 / c.g23;
    s[(4, 4)] = 1.0 / c.g13;
    s[(5, 5)] = 1.0 / c.g12;
    if !s.iter().all(|v| v.is_finite()) {
        return Err(WeaveError::Singular("compliance"));
    }
    s.try_inverse().ok_or(WeaveError::Singular("compliance"))
}

/// Builds the isotropic resin stiffness matrix from Young's modulus `e` (GPa)
/// and Poisson's ratio `nu` using the Lamé parameters.
#[must_use]
pub fn isotropic_stiffness(e: Scalar, nu: Scalar) -> C6 {
    let lambda = (nu * e) / ((1.0 + nu) * (1.0 - 2.0 * nu));
    let mu = e / (2.0 * (1.0 + nu));

    let mut c = C6::zeros();
    for r in 0..3 {
        for col in 0..3 {
            c[(r, col)] = if r == col { lambda + 2.0 * mu } else { lambda };
        }
    }
    c[(3, 3)] = mu;
    c[(4, 4)] = mu;
    c[(5, 5)] = mu;
    c
}

/// Fiber and matrix inputs to the Chamis mixing rules. Moduli in GPa,
/// thermal expansions in 1/K, fractions and Poisson's ratios dimensionless.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChamisInputs {
    /// Fiber volume fraction Kf in [0, 1].
    pub fiber_fraction: Scalar,
    /// Fiber longitudinal modulus Ef11.
    pub fiber_e11: Scalar,
    /// Fiber transverse modulus Ef22.
    pub fiber_e22: Scalar,
    /// Fiber in-plane shear modulus Gf12.
    pub fiber_g12: Scalar,
    /// Fiber major Poisson's ratio νf12.
    pub fiber_nu12: Scalar,
    /// Fiber transverse Poisson's ratio νf23.
    pub fiber_nu23: Scalar,
    /// Fiber longitudinal thermal expansion αf11.
    pub fiber_alpha11: Scalar,
    /// Matrix modulus Em.
    pub matrix_e: Scalar,
    /// Matrix shear modulus Gm.
    pub matrix_g: Scalar,
    /// Matrix Poisson's ratio νm.
    pub matrix_nu: Scalar,
    /// Matrix thermal expansion αm.
    pub matrix_alpha: Scalar,
    /// Lamina Poisson's ratio νl12 entering the ν23 correction.
    pub lamina_nu12: Scalar,
}

impl ChamisInputs {
    /// The pinned reference data set (see [`crate::constants`] for units and
    /// provenance caveats).
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            fiber_fraction: constants::REFERENCE_FIBER_FRACTION,
            fiber_e11: constants::FIBER_LONGITUDINAL_MODULUS,
            fiber_e22: constants::FIBER_TRANSVERSE_MODULUS,
            fiber_g12: constants::FIBER_SHEAR_MODULUS,
            fiber_nu12: constants::FIBER_POISSON_12,
            fiber_nu23: constants::FIBER_POISSON_23,
            fiber_alpha11: constants::FIBER_THERMAL_EXPANSION,
            matrix_e: constants::MATRIX_MODULUS,
            matrix_g: constants::MATRIX_SHEAR_MODULUS,
            matrix_nu: constants::MATRIX_POISSON,
            matrix_alpha: constants::MATRIX_THERMAL_EXPANSION,
            lamina_nu12: constants::REFERENCE_LAMINA_POISSON_12,
        }
    }
}

/// Output of the Chamis evaluator: the homogenized ply constants plus the
/// longitudinal and transverse thermal expansion coefficients.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChamisEstimate {
    /// Transversely isotropic engineering constants of the ply.
    pub constants: EngineeringConstants,
    /// Longitudinal thermal expansion α11 in 1/K.
    pub alpha_longitudinal: Scalar,
    /// Transverse thermal expansion α22 in 1/K.
    pub alpha_transverse: Scalar,
}

/// Evaluates the Chamis micromechanics mixing rules.
///
/// Pure closed-form evaluation; call it as often as the fiber fraction or
/// constituent data changes. The transverse Poisson's ratio ν23 is clamped to
/// [0, 1] before use.
#[must_use]
pub fn chamis_micromechanics(inputs: &ChamisInputs) -> ChamisEstimate {
    let kf = inputs.fiber_fraction;
    let km = 1.0 - kf;
    let sqrt_kf = kf.sqrt();

    // Longitudinal modulus: linear rule of mixtures.
    let e1 = kf * inputs.fiber_e11 + km * inputs.matrix_e;

    // Transverse modulus via the Chamis square-root interpolation.
    let el22 = inputs.matrix_e / (1.0 - sqrt_kf * (1.0 - inputs.matrix_e / inputs.fiber_e22));
    let e2 = (1.0 - sqrt_kf) * inputs.matrix_e + sqrt_kf * el22;

    let nu12 = kf * inputs.fiber_nu12 + km * inputs.matrix_nu;

    let nu23_raw =
        kf * inputs.fiber_nu23 + km * (2.0 * inputs.matrix_nu - inputs.lamina_nu12 * el22 / e1);
    let nu23 = nu23_raw.clamp(0.0, 1.0);

    let gl12 = inputs.matrix_g / (1.0 - sqrt_kf * (1.0 - inputs.matrix_g / inputs.fiber_g12));
    let g12 = (1.0 - sqrt_kf) * inputs.matrix_g + sqrt_kf * gl12;
    let g23 = gl12;

    let alpha_longitudinal =
        (kf * inputs.fiber_alpha11 * inputs.fiber_e11 + km * inputs.matrix_alpha * inputs.matrix_e)
            / e1;
    let alpha_transverse = (sqrt_kf
        + (1.0 - sqrt_kf) * (1.0 + kf * inputs.matrix_nu * inputs.fiber_e11 / e1))
        * inputs.matrix_alpha;

    ChamisEstimate {
        constants: EngineeringConstants::transversely_isotropic(e1, e2, nu12, nu23, g12, g23),
        alpha_longitudinal,
        alpha_transverse,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::diagnostics::max_asymmetry;

    #[test]
    fn reference_chamis_longitudinal_modulus_is_rule_of_mixtures() {
        let est = chamis_micromechanics(&ChamisInputs::reference());
        assert_relative_eq!(est.constants.e1, 422.5, epsilon = 1.0e-9);
        assert_relative_eq!(est.constants.nu12, 0.18, epsilon = 1.0e-12);
        assert_eq!(est.constants.e3, est.constants.e2);
        assert_eq!(est.constants.g13, est.constants.g23);
    }

    #[test]
    fn chamis_nu23_is_clamped_to_unit_interval() {
        let mut inputs = ChamisInputs::reference();
        inputs.lamina_nu12 = 50.0;
        let est = chamis_micromechanics(&inputs);
        assert!(est.constants.nu23 >= 0.0 && est.constants.nu23 <= 1.0);
    }

    #[test]
    fn orthotropic_stiffness_is_symmetric_and_positive_on_diagonal() {
        let est = chamis_micromechanics(&ChamisInputs::reference());
        let c = orthotropic_stiffness(&est.constants).expect("invertible compliance");
        assert!(max_asymmetry(&c).value < 1.0e-9 * c.amax());
        for i in 0..6 {
            assert!(c[(i, i)] > 0.0, "C[{i}][{i}] not positive");
        }
    }

    #[test]
    fn zero_modulus_is_rejected_as_singular() {
        let constants =
            EngineeringConstants::transversely_isotropic(0.0, 200.0, 0.18, 0.24, 140.0, 136.0);
        assert!(matches!(
            orthotropic_stiffness(&constants),
            Err(WeaveError::Singular("compliance"))
        ));
    }

    #[test]
    fn isotropic_stiffness_matches_lame_closed_forms() {
        let (e, nu) = (3.5, 0.35);
        let lambda = nu * e / ((1.0 + nu) * (1.0 - 2.0 * nu));
        let mu = e / (2.0 * (1.0 + nu));
        let c = isotropic_stiffness(e, nu);
        assert_relative_eq!(c[(0, 0)], lambda + 2.0 * mu, epsilon = 1.0e-12);
        assert_relative_eq!(c[(0, 1)], lambda, epsilon = 1.0e-12);
        assert_relative_eq!(c[(3, 3)], mu, epsilon = 1.0e-12);
        assert_relative_eq!(c[(5, 5)], mu, epsilon = 1.0e-12);
        assert_relative_eq!(c[(3, 4)], 0.0);
    }
}
