//! Gravity contributors for the orbit engine
//!
//! Defines the force trait and its two modes: direct pairwise Newtonian
//! gravity for the live pass, and a cheaper sun-only attractor used by
//! the prediction pass.

use crate::simulation::states::{CelestialBody, NVec2};
use crate::simulation::vecmath::{normalize, DegenerateVector, NORMALIZE_EPS};

/// Newtonian pairwise force on `a` from `b`:
/// `direction(b - a) * G * m_a * m_b / distance^2`.
///
/// The force on `b` is the negation. Coincident bodies have no usable
/// direction and surface as [`DegenerateVector`]; force accumulation
/// treats such a pair as contributing nothing rather than producing NaN.
pub fn gravitational_force(
    a: &CelestialBody,
    b: &CelestialBody,
    g: f64,
) -> Result<NVec2, DegenerateVector> {
    // Relative position
    let (direction, distance) = normalize(b.x - a.x, NORMALIZE_EPS)?;

    // Newton's law
    Ok(direction * (g * a.m * b.m / (distance * distance)))
}

/// Trait for gravity modes operating on the simulator's body list.
/// Implementations write the total force on body `i` into `out[i]`.
pub trait Gravity {
    fn accumulate(&self, bodies: &[CelestialBody], out: &mut [NVec2]);
}

/// Full O(n^2) pairwise gravity. Each unordered pair is visited exactly
/// once and contributes equal-and-opposite forces.
pub struct DirectGravity {
    pub g: f64, // gravitational constant
}

impl Gravity for DirectGravity {
    fn accumulate(&self, bodies: &[CelestialBody], out: &mut [NVec2]) {
        let n = bodies.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            for j in (i + 1)..n {
                match gravitational_force(&bodies[i], &bodies[j], self.g) {
                    Ok(f) => {
                        // f pulls i toward j; j feels the opposite pull
                        out[i] += f;
                        out[j] -= f;
                    }
                    // Coincident pair: no direction, no contribution
                    Err(_) => continue,
                }
            }
        }
    }
}

/// Sun-only attractor: every body feels the sun (`bodies[0]`), the sun
/// feels nothing. An approximation the prediction pass uses to stay
/// cheap while a drag gesture re-predicts every frame.
pub struct SunAttractor {
    pub g: f64, // gravitational constant
}

impl Gravity for SunAttractor {
    fn accumulate(&self, bodies: &[CelestialBody], out: &mut [NVec2]) {
        let Some((sun, rest)) = bodies.split_first() else {
            return;
        };

        for (body, f_out) in rest.iter().zip(out[1..].iter_mut()) {
            match gravitational_force(body, sun, self.g) {
                Ok(f) => *f_out += f,
                Err(_) => continue,
            }
        }
    }
}
