//! Core state types for the orbit simulation.
//!
//! Defines the body struct and its destruction queries:
//! - `CelestialBody` using `NVec2` (position, velocity, mass, radius)
//! - a bounded ring of past positions used for trail rendering
//! - a one-way `virtual` flag marking throwaway prediction copies
//!
//! The simulator owns the list of bodies; index 0 is always the sun.

use std::collections::VecDeque;

use nalgebra::Vector2;
use rand::Rng;

use crate::simulation::params::OrbitParams;
use crate::simulation::vecmath::{normalize, NORMALIZE_EPS};

pub type NVec2 = Vector2<f64>;

/// Opaque RGB display attribute attached to each body.
pub type Color = [u8; 3];

pub const SUN_COLOR: Color = [255, 246, 0];
pub const EARTH_COLOR: Color = [137, 207, 240];
/// Cyan, used for the candidate body in a prediction.
pub const CANDIDATE_COLOR: Color = [0, 255, 255];

const DEFAULT_EARTH_RADIUS: f64 = 5.0;

/// Random body color, biased away from dark channels.
pub fn random_color() -> Color {
    let mut rng = rand::thread_rng();
    [
        rng.gen_range(70..255),
        rng.gen_range(70..255),
        rng.gen_range(70..255),
    ]
}

#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, must stay > 0 (divided by in the velocity update)
    pub radius: f64, // radius, used by the sun-proximity check
    pub color: Color, // display attribute, opaque to the physics
    history: VecDeque<NVec2>, // trailing ring of past positions
    history_limit: usize, // ring capacity; oldest entries drop first
    virtual_body: bool, // prediction copy, never promoted back to live
}

impl CelestialBody {
    /// Precondition: `mass > 0`. Not validated here, matching the
    /// launch path where the caller controls the mass.
    pub fn new(
        position: NVec2,
        velocity: NVec2,
        mass: f64,
        radius: f64,
        color: Option<Color>,
        history_limit: usize,
    ) -> Self {
        Self {
            x: position,
            v: velocity,
            m: mass,
            radius,
            color: color.unwrap_or_else(random_color),
            history: VecDeque::with_capacity(history_limit),
            history_limit,
            virtual_body: false,
        }
    }

    pub fn make_sun(params: &OrbitParams) -> Self {
        Self::new(
            NVec2::zeros(),
            NVec2::zeros(),
            params.sun_mass,
            params.sun_radius,
            Some(SUN_COLOR),
            params.history_length,
        )
    }

    pub fn make_earth(params: &OrbitParams) -> Self {
        Self::new(
            NVec2::from(params.earth_position),
            NVec2::from(params.earth_velocity),
            1.0,
            DEFAULT_EARTH_RADIUS,
            Some(EARTH_COLOR),
            params.history_length,
        )
    }

    pub fn is_virtual(&self) -> bool {
        self.virtual_body
    }

    /// One-way transition into a prediction copy: the history is reset
    /// and re-capped to the prediction length.
    pub fn mark_virtual(&mut self, future_length: usize) {
        self.virtual_body = true;
        self.history = VecDeque::with_capacity(future_length);
        self.history_limit = future_length;
    }

    pub fn history(&self) -> &VecDeque<NVec2> {
        &self.history
    }

    /// Append the current position to the trail, evicting the oldest
    /// entry when the ring is full.
    pub fn push_history(&mut self) {
        if self.history_limit == 0 {
            return;
        }
        if self.history.len() == self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(self.x);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Cheap off-screen check: both coordinate magnitudes beyond twice
    /// the viewport, componentwise. Intentionally axis-aligned, no
    /// square root.
    pub fn is_too_far_away(&self, viewport: NVec2) -> bool {
        self.x.x.abs() > 2.0 * viewport.x && self.x.y.abs() > 2.0 * viewport.y
    }

    /// Whether this body sits inside the sun's destruction range.
    /// The sun itself is exempt (identity, not value equality). A body
    /// coincident with the sun has no usable direction; that degenerate
    /// distance counts as "too close" rather than being an error.
    pub fn is_too_close_to_sun(&self, sun: &CelestialBody, params: &OrbitParams) -> bool {
        if std::ptr::eq(self, sun) {
            return false;
        }

        match normalize(self.x - sun.x, NORMALIZE_EPS) {
            Ok((_, dist)) => dist < sun.radius + self.radius + params.sun_destruction_range,
            Err(_) => true,
        }
    }
}
