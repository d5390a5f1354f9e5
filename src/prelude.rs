//! Convenience re-exports for building homogenization runs.

pub use crate::diagnostics::{is_symmetric, max_asymmetry, worst_asymmetry, Asymmetry};
pub use crate::errors::WeaveError;
pub use crate::homogenize::{homogenize, UnitCell, VolumeFractions};
pub use crate::materials::{
    chamis_micromechanics, isotropic_stiffness, orthotropic_stiffness, ChamisEstimate,
    ChamisInputs, EngineeringConstants,
};
pub use crate::math::{linspace, Scalar, C6, R3x3, VOIGT_PAIRS};
pub use crate::path::{discretize, BinderScheme, ParabolicPath, YarnPath, DEFAULT_SLOPE_WINDOW};
pub use crate::rotation::{
    rotate_about_y, rotate_about_z, rotate_segments, rotate_stiffness, rotation_about_y,
    rotation_about_z, voigt_rotation, weft_stiffness,
};
