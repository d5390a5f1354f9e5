#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Reference material constants used by presets and tests.
pub mod constants;
/// Shared mathematical primitives (scalars, matrices, Voigt bookkeeping).
pub mod math;
/// Material property providers (orthotropic ply, isotropic resin, Chamis).
pub mod materials;
/// Voigt tensor rotation of 6×6 stiffness matrices.
pub mod rotation;
/// Yarn centerline discretization into oriented segments.
pub mod path;
/// Rule-of-mixtures homogenization over yarn constituents.
pub mod homogenize;
/// Symmetry auditing for computed stiffness matrices.
pub mod diagnostics;
/// Error types shared across modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

pub use errors::WeaveError;
