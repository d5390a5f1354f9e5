//! Rule-of-mixtures homogenization over yarn constituents.
//!
//! Each binder segment gets a local constituent blend (warp + weft + resin +
//! that segment's rotated binder stiffness, each scaled by its volume
//! fraction); the effective stiffness is the length-weighted average of the
//! local blends. The average is a convex combination, so symmetry of the
//! inputs carries through to the output and every output entry stays inside
//! the convex hull of the per-segment entries.

use crate::errors::WeaveError;
use crate::math::{Scalar, C6};
use crate::path::{discretize, BinderScheme};
use crate::rotation::{rotate_segments, weft_stiffness};

/// Constituent volume fractions, each in [0, 1].
///
/// No sum-to-one constraint is enforced; the meaningful combination depends
/// on the composite architecture and is the caller's responsibility. The
/// default resin fraction of 1.0 reproduces the reference convention of
/// adding the resin stiffness unscaled — whether that double-counts matrix
/// already embedded in the ply stiffness is an open modelling question, so
/// the value is explicit here instead of buried in the engine.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeFractions {
    /// Warp yarn volume fraction.
    pub warp: Scalar,
    /// Weft yarn volume fraction.
    pub weft: Scalar,
    /// Binder yarn volume fraction.
    pub binder: Scalar,
    /// Resin fraction applied to the resin stiffness contribution.
    pub resin: Scalar,
}

impl Default for VolumeFractions {
    fn default() -> Self {
        Self {
            warp: 0.5,
            weft: 0.3,
            binder: 0.2,
            resin: 1.0,
        }
    }
}

impl VolumeFractions {
    /// Checks that every fraction lies in [0, 1], naming the first offender.
    pub fn validate(&self) -> Result<(), WeaveError> {
        let fields = [
            ("warp", self.warp),
            ("weft", self.weft),
            ("binder", self.binder),
            ("resin", self.resin),
        ];
        for (name, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(WeaveError::Fraction { name, value });
            }
        }
        Ok(())
    }
}

/// Combines constituent stiffness matrices into one effective stiffness.
///
/// For each binder segment i the local blend is
/// `Vf_warp·C_warp + Vf_weft·C_weft + Vf_resin·C_resin + Vf_binder·C_binder[i]`,
/// and the result is `Σ_i w_i · blend_i` with `w_i = lengths[i] / Σ lengths`.
/// Accumulation runs in ascending segment order.
///
/// Fails when the segment and length counts disagree, when any fraction is
/// outside [0, 1], or when the lengths sum to zero (the average would be
/// 0/0). The result is never partially computed.
pub fn homogenize(
    c_warp: &C6,
    c_weft: &C6,
    c_binder_segments: &[C6],
    lengths: &[Scalar],
    c_resin: &C6,
    fractions: &VolumeFractions,
) -> Result<C6, WeaveError> {
    if c_binder_segments.len() != lengths.len() {
        return Err(WeaveError::ShapeMismatch {
            segments: c_binder_segments.len(),
            lengths: lengths.len(),
        });
    }
    fractions.validate()?;

    let total_length: Scalar = lengths.iter().sum();
    if total_length <= 0.0 {
        return Err(WeaveError::DegenerateLengths);
    }

    let fixed = fractions.warp * c_warp + fractions.weft * c_weft + fractions.resin * c_resin;

    let mut c_total = C6::zeros();
    for (c_binder, &length) in c_binder_segments.iter().zip(lengths) {
        let blend = fixed + c_binder * fractions.binder;
        c_total += (length / total_length) * blend;
    }
    Ok(c_total)
}

/// One woven unit cell, ready to homogenize.
///
/// Holds the provider-supplied base (warp) and resin stiffness matrices plus
/// the binder architecture; [`Self::effective_stiffness`] runs the full
/// pipeline: discretize the binder path, rotate the base stiffness into the
/// weft and every binder segment orientation, then average.
#[derive(Debug, Clone)]
pub struct UnitCell {
    /// Base unidirectional (warp-direction) stiffness matrix.
    pub c_warp: C6,
    /// Isotropic resin stiffness matrix.
    pub c_resin: C6,
    /// Binder yarn path scheme.
    pub scheme: BinderScheme,
    /// Number of nodes along the binder path (≥ 2).
    pub num_nodes: usize,
    /// Constituent volume fractions.
    pub fractions: VolumeFractions,
}

impl UnitCell {
    /// Creates a unit cell from provider outputs and architecture parameters.
    #[must_use]
    pub const fn new(
        c_warp: C6,
        c_resin: C6,
        scheme: BinderScheme,
        num_nodes: usize,
        fractions: VolumeFractions,
    ) -> Self {
        Self {
            c_warp,
            c_resin,
            scheme,
            num_nodes,
            fractions,
        }
    }

    /// Computes the homogenized 6×6 stiffness of the unit cell.
    pub fn effective_stiffness(&self) -> Result<C6, WeaveError> {
        let path = discretize(&self.scheme, self.num_nodes)?;
        let c_weft = weft_stiffness(&self.c_warp)?;
        let c_binder = rotate_segments(&self.c_warp, &path.angles)?;
        homogenize(
            &self.c_warp,
            &c_weft,
            &c_binder,
            &path.lengths,
            &self.c_resin,
            &self.fractions,
        )
    }
}
