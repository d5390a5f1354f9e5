//! Reference material constants for the pinned carbon/epoxy system.
//!
//! ## Units
//!
//! All moduli are in gigapascals (GPa) and thermal expansion coefficients in
//! 1/K. The values below are the literal inputs of the reference data set this
//! crate was validated against; they are unusual (the matrix modulus exceeds
//! the fiber transverse modulus) and are kept verbatim rather than
//! "corrected" so that callers can reproduce the reference results. Supply
//! your own [`crate::materials::ChamisInputs`] for real material systems.

use crate::math::Scalar;

/// Fiber longitudinal Young's modulus Ef11 in GPa.
pub const FIBER_LONGITUDINAL_MODULUS: Scalar = 420.0;
/// Fiber transverse Young's modulus Ef22 in GPa.
pub const FIBER_TRANSVERSE_MODULUS: Scalar = 84.0;
/// Fiber in-plane shear modulus Gf12 in GPa.
pub const FIBER_SHEAR_MODULUS: Scalar = 126.0;
/// Fiber major Poisson's ratio νf12 (dimensionless).
pub const FIBER_POISSON_12: Scalar = 0.18;
/// Fiber transverse Poisson's ratio νf23 (dimensionless).
pub const FIBER_POISSON_23: Scalar = 0.15;
/// Fiber longitudinal thermal expansion αf11 in 1/K.
pub const FIBER_THERMAL_EXPANSION: Scalar = 0.1e-6;

/// Matrix Young's modulus Em in GPa.
pub const MATRIX_MODULUS: Scalar = 425.0;
/// Matrix shear modulus Gm in GPa.
pub const MATRIX_SHEAR_MODULUS: Scalar = 170.0;
/// Matrix Poisson's ratio νm (dimensionless).
pub const MATRIX_POISSON: Scalar = 0.18;
/// Matrix thermal expansion αm in 1/K.
pub const MATRIX_THERMAL_EXPANSION: Scalar = 4.25e-6;

/// Reference fiber volume fraction Kf (dimensionless, in [0, 1]).
pub const REFERENCE_FIBER_FRACTION: Scalar = 0.5;
/// Reference lamina Poisson's ratio νl12 used in the ν23 correction.
pub const REFERENCE_LAMINA_POISSON_12: Scalar = 0.1;
