//! Yarn centerline discretization.
//!
//! A binder yarn is represented as `num_nodes − 1` oriented straight
//! segments, each carrying an orientation angle (radians, measured from the
//! x-axis in the x–z plane) and a weight. For the fixed-angle schemes the
//! weight is a pure averaging weight (1.0 per segment); for the parabolic
//! scheme it is the true Euclidean segment length and must be used as such in
//! homogenization.

use crate::errors::WeaveError;
use crate::math::{least_squares_slope, linspace, Scalar};

/// Default half-width of the slope-fit window for the parabolic scheme.
pub const DEFAULT_SLOPE_WINDOW: usize = 2;

/// Parabolic binder centerline z(x) = amplitude · ((x − start)/(end − start))²
/// sampled over [start, end].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParabolicPath {
    /// x-coordinate of the path start (vertex of the parabola).
    pub start: Scalar,
    /// x-coordinate of the path end.
    pub end: Scalar,
    /// Maximum through-thickness displacement, reached at `end`.
    pub amplitude: Scalar,
    /// Half-width (in samples) of the local least-squares slope window,
    /// clipped at the path boundaries.
    pub window: usize,
}

impl ParabolicPath {
    /// Creates a parabolic path with the default slope window.
    #[must_use]
    pub const fn new(start: Scalar, end: Scalar, amplitude: Scalar) -> Self {
        Self {
            start,
            end,
            amplitude,
            window: DEFAULT_SLOPE_WINDOW,
        }
    }
}

/// Binder yarn path schemes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinderScheme {
    /// True orthogonal binder: 90° from the x-axis, unit weights.
    Orthogonal,
    /// Constant inclination at `angle_deg` degrees from the x-axis, unit
    /// weights.
    InclinedFixed {
        /// Inclination in degrees, measured from the x-axis in the x–z plane.
        angle_deg: Scalar,
    },
    /// Curved parabolic centerline; angles from local slope fits, weights
    /// from true segment lengths.
    Parabolic(ParabolicPath),
}

impl BinderScheme {
    /// Resolves a scheme name, case- and whitespace-insensitively.
    ///
    /// Unknown names fall back to `InclinedFixed { angle_deg:
    /// fallback_angle_deg }`; the second element of the return value is false
    /// in that case so callers can report the substitution. The parabolic
    /// variant produced here uses the supplied geometry.
    #[must_use]
    pub fn from_name(
        name: &str,
        fallback_angle_deg: Scalar,
        parabola: ParabolicPath,
    ) -> (Self, bool) {
        match name.trim().to_ascii_lowercase().as_str() {
            "orthogonal" => (Self::Orthogonal, true),
            "inclined_fixed" => (
                Self::InclinedFixed {
                    angle_deg: fallback_angle_deg,
                },
                true,
            ),
            "parabolic" => (Self::Parabolic(parabola), true),
            _ => (
                Self::InclinedFixed {
                    angle_deg: fallback_angle_deg,
                },
                false,
            ),
        }
    }
}

/// A discretized yarn path: one orientation angle and one weight per segment.
///
/// Both sequences always have equal length `num_nodes − 1`. Ordering follows
/// physical position along the path but segments carry no dependency on one
/// another.
#[derive(Debug, Clone, PartialEq)]
pub struct YarnPath {
    /// Segment orientation angles in radians.
    pub angles: Vec<Scalar>,
    /// Segment lengths (or unit averaging weights for fixed-angle schemes).
    pub lengths: Vec<Scalar>,
}

impl YarnPath {
    /// Number of segments along the path.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.angles.len()
    }
}

/// Discretizes a binder centerline into `num_nodes − 1` oriented segments.
///
/// Fails with [`WeaveError::NodeCount`] when `num_nodes < 2`; otherwise the
/// returned path always holds at least one segment.
pub fn discretize(scheme: &BinderScheme, num_nodes: usize) -> Result<YarnPath, WeaveError> {
    if num_nodes < 2 {
        return Err(WeaveError::NodeCount { given: num_nodes });
    }
    let segments = num_nodes - 1;

    match *scheme {
        BinderScheme::Orthogonal => Ok(fixed_angle_path(90.0, segments)),
        BinderScheme::InclinedFixed { angle_deg } => Ok(fixed_angle_path(angle_deg, segments)),
        BinderScheme::Parabolic(parabola) => Ok(parabolic_path(&parabola, num_nodes)),
    }
}

fn fixed_angle_path(angle_deg: Scalar, segments: usize) -> YarnPath {
    let theta = angle_deg.to_radians();
    YarnPath {
        angles: vec![theta; segments],
        lengths: vec![1.0; segments],
    }
}

fn parabolic_path(parabola: &ParabolicPath, num_nodes: usize) -> YarnPath {
    let x = linspace(parabola.start, parabola.end, num_nodes);
    let span = parabola.end - parabola.start;
    let z: Vec<Scalar> = x
        .iter()
        .map(|&xi| {
            let t = (xi - parabola.start) / span;
            parabola.amplitude * t * t
        })
        .collect();

    let mut angles = Vec::with_capacity(num_nodes - 1);
    let mut lengths = Vec::with_capacity(num_nodes - 1);
    for i in 0..num_nodes - 1 {
        // Local slope over a symmetric sample window, clipped at the ends.
        let lo = i.saturating_sub(parabola.window);
        let hi = (i + parabola.window + 1).min(num_nodes);
        let slope = least_squares_slope(&x[lo..hi], &z[lo..hi]);
        angles.push(slope.atan());

        let dx = x[i + 1] - x[i];
        let dz = z[i + 1] - z[i];
        lengths.push(dx.hypot(dz));
    }

    YarnPath { angles, lengths }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn every_scheme_yields_one_fewer_segment_than_nodes() {
        let schemes = [
            BinderScheme::Orthogonal,
            BinderScheme::InclinedFixed { angle_deg: 63.0 },
            BinderScheme::Parabolic(ParabolicPath::new(0.0, 10.0, 2.0)),
        ];
        for scheme in schemes {
            for num_nodes in [2, 3, 20] {
                let path = discretize(&scheme, num_nodes).expect("valid node count");
                assert_eq!(path.segment_count(), num_nodes - 1);
                assert_eq!(path.angles.len(), path.lengths.len());
            }
        }
    }

    #[test]
    fn fewer_than_two_nodes_is_rejected() {
        for num_nodes in [0, 1] {
            let err = discretize(&BinderScheme::Orthogonal, num_nodes).unwrap_err();
            assert!(matches!(err, WeaveError::NodeCount { given } if given == num_nodes));
        }
    }

    #[test]
    fn orthogonal_scheme_is_ninety_degrees_with_unit_weights() {
        let path = discretize(&BinderScheme::Orthogonal, 20).expect("valid node count");
        for (&theta, &length) in path.angles.iter().zip(&path.lengths) {
            assert_relative_eq!(theta, FRAC_PI_2, epsilon = 1.0e-12);
            assert_relative_eq!(length, 1.0);
        }
    }

    #[test]
    fn unknown_scheme_name_falls_back_to_inclined_fixed() {
        let parabola = ParabolicPath::new(0.0, 10.0, 2.0);
        let (scheme, recognized) = BinderScheme::from_name("helical", 45.0, parabola);
        assert!(!recognized);
        assert_eq!(scheme, BinderScheme::InclinedFixed { angle_deg: 45.0 });

        let (scheme, recognized) = BinderScheme::from_name("  Parabolic ", 45.0, parabola);
        assert!(recognized);
        assert_eq!(scheme, BinderScheme::Parabolic(parabola));
    }

    #[test]
    fn parabolic_slope_magnitude_grows_away_from_the_vertex() {
        let path = discretize(
            &BinderScheme::Parabolic(ParabolicPath::new(0.0, 10.0, 2.0)),
            20,
        )
        .expect("valid node count");
        for pair in path.angles.windows(2) {
            assert!(
                pair[1].abs() >= pair[0].abs() - 1.0e-12,
                "angle magnitude decreased along the path: {pair:?}"
            );
        }
    }

    #[test]
    fn parabolic_lengths_are_true_segment_lengths() {
        let parabola = ParabolicPath::new(0.0, 10.0, 2.0);
        let path = discretize(&BinderScheme::Parabolic(parabola), 11).expect("valid node count");
        // dx = 1 per segment; the first segment is nearly flat, later ones
        // longer, and every length is at least dx.
        for &length in &path.lengths {
            assert!(length >= 1.0);
        }
        assert!(path.lengths[9] > path.lengths[0]);
        let dz_last = 2.0 * (1.0 - 0.81);
        assert_relative_eq!(path.lengths[9], (1.0f64 + dz_last * dz_last).sqrt(), epsilon = 1.0e-12);
    }
}
