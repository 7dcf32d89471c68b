//! Small 2D vector helpers shared across the simulation
//!
//! `normalize` is the single place where a near-zero vector turns into an
//! error: callers treat [`DegenerateVector`] as "no direction, skip the
//! operation" (tiny drag gestures, coincident bodies) instead of letting
//! a NaN direction leak into the physics.

use std::fmt;

use crate::simulation::states::NVec2;

/// Default epsilon below which a vector has no usable direction.
pub const NORMALIZE_EPS: f64 = 1e-6;

/// Epsilon used when interpreting mouse drag gestures.
pub const DRAG_EPS: f64 = 1e-2;

/// Minimum drag distance that still counts as a launch gesture.
const MIN_DRAG_DISTANCE: f64 = 5.0;

/// A vector too short to normalize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegenerateVector {
    pub norm: f64, // the offending magnitude
}

impl fmt::Display for DegenerateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot normalize near-zero vector (norm = {})", self.norm)
    }
}

impl std::error::Error for DegenerateVector {}

/// Normalize `v`, returning the unit direction and the original magnitude.
/// Fails with [`DegenerateVector`] when the magnitude is below `eps`.
pub fn normalize(v: NVec2, eps: f64) -> Result<(NVec2, f64), DegenerateVector> {
    let norm = v.norm();
    if norm < eps {
        return Err(DegenerateVector { norm });
    }
    Ok((v / norm, norm))
}

/// Rotate a 2D vector by `angle` radians (counter-clockwise).
pub fn rotate_2d(v: NVec2, angle: f64) -> NVec2 {
    let (sa, ca) = angle.sin_cos();
    NVec2::new(ca * v.x - sa * v.y, sa * v.x + ca * v.y)
}

/// Turn a drag-and-release gesture into a launch state.
///
/// Returns the press position and a launch velocity pointing from the
/// release point back toward the press point, scaled by drag distance and
/// `vel_scalar`. Degenerate or very short gestures yield `None` so the
/// caller can ignore them.
pub fn drag_launch(press: NVec2, release: NVec2, vel_scalar: f64) -> Option<(NVec2, NVec2)> {
    let (direction, distance) = match normalize(press - release, DRAG_EPS) {
        Ok(pair) => pair,
        Err(_) => return None,
    };

    if distance <= MIN_DRAG_DISTANCE {
        return None;
    }

    Some((press, direction * distance * vel_scalar))
}
