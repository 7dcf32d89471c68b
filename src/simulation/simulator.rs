//! The orbit simulator: owns the live body list, advances physics,
//! applies destruction rules, and runs an isolated speculative branch
//! for drag-preview.
//!
//! Driven synchronously by an external frame loop: one `step` per frame,
//! `predict` while a drag gesture is active, `add_body` /
//! `delete_latest_body` on commit and undo. Destroyed bodies are
//! reported through an injected event callback so the effects layer
//! stays decoupled from the physics.

use log::{debug, info};

use crate::simulation::forces::{DirectGravity, Gravity, SunAttractor};
use crate::simulation::params::{OrbitParams, DEFAULT_BODY_MASS, DEFAULT_BODY_RADIUS};
use crate::simulation::states::{CelestialBody, Color, NVec2, CANDIDATE_COLOR};

/// A live body removed by the sun-proximity rule or by explicit user
/// deletion, reported with its final state.
#[derive(Debug, Clone, Copy)]
pub struct DestructionEvent {
    pub position: NVec2,
    pub velocity: NVec2,
    pub color: Color,
}

/// Handler invoked synchronously for each destruction event. Must not
/// call back into the simulator.
pub type DestructionCallback = Box<dyn FnMut(DestructionEvent)>;

pub struct OrbitSimulator {
    params: OrbitParams,
    bodies: Vec<CelestialBody>, // live bodies; index 0 is the sun
    virtual_bodies: Vec<CelestialBody>, // current prediction, replaced wholesale
    destruction_callback: DestructionCallback,
}

impl OrbitSimulator {
    /// Start state: the sun plus one reference planet.
    pub fn new(params: OrbitParams, destruction_callback: DestructionCallback) -> Self {
        let bodies = vec![
            CelestialBody::make_sun(&params),
            CelestialBody::make_earth(&params),
        ];

        Self {
            params,
            bodies,
            virtual_bodies: Vec::new(),
            destruction_callback,
        }
    }

    pub fn sun(&self) -> &CelestialBody {
        &self.bodies[0]
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn virtual_bodies(&self) -> &[CelestialBody] {
        &self.virtual_bodies
    }

    /// Live body count, for display counters.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn params(&self) -> &OrbitParams {
        &self.params
    }

    /// Advance `bodies` by one explicit Euler step.
    ///
    /// Forces are accumulated into a per-body buffer first, then applied
    /// as `v += F / m * dt`. Each body records its pre-update position in
    /// its trail before the position moves, so trails only ever contain
    /// past positions.
    fn physics_step(gravity: &dyn Gravity, dt: f64, bodies: &mut [CelestialBody]) {
        let n = bodies.len();
        if n == 0 {
            return;
        }

        let mut forces = vec![NVec2::zeros(); n];
        gravity.accumulate(bodies, &mut forces);

        for (body, f) in bodies.iter_mut().zip(forces.iter()) {
            body.v += *f / body.m * dt;
        }

        for body in bodies.iter_mut() {
            body.push_history();
            body.x += body.v * dt;
        }
    }

    /// One frame tick: physics over the live bodies, then destruction.
    pub fn step(&mut self, dt: f64, viewport: NVec2) {
        let direct = DirectGravity { g: self.params.g };
        let sun_only = SunAttractor { g: self.params.g };
        let gravity: &dyn Gravity = if self.params.n_body_sim {
            &direct
        } else {
            &sun_only
        };

        Self::physics_step(gravity, dt, &mut self.bodies);
        self.destruction_check(viewport);
    }

    /// Remove bodies that left the viewport area (silently) or fell into
    /// the sun's destruction range (reported through the callback).
    ///
    /// Single pass over a drained list: every body is evaluated exactly
    /// once no matter how many are removed in the same frame.
    fn destruction_check(&mut self, viewport: NVec2) {
        let sun = self.bodies[0].clone();
        let drained = std::mem::take(&mut self.bodies);
        self.bodies = Vec::with_capacity(drained.len());

        for (idx, mut body) in drained.into_iter().enumerate() {
            if body.is_too_far_away(viewport) {
                debug!(
                    "deleting body too far away at position ({:.1}, {:.1})",
                    body.x.x, body.x.y
                );
                continue;
            }

            // `idx == 0` is the sun itself; the clone above would not
            // compare identical to it.
            if idx != 0 && body.is_too_close_to_sun(&sun, &self.params) {
                debug!("deleting body too close to sun");
                (self.destruction_callback)(DestructionEvent {
                    position: body.x,
                    velocity: body.v,
                    color: body.color,
                });
                body.clear_history();
                continue;
            }

            self.bodies.push(body);
        }
    }

    /// Predict the future if a new body with this state appeared.
    ///
    /// Builds an independent copy of every live body plus the candidate,
    /// marks them all virtual (which resets their trails to the
    /// prediction length), and runs `future_length` fixed steps over the
    /// copy only. Live state is never touched; each call replaces the
    /// previous prediction wholesale.
    pub fn predict(&mut self, position: NVec2, velocity: NVec2) {
        let mut futures = self.bodies.clone();
        futures.push(CelestialBody::new(
            position,
            velocity,
            DEFAULT_BODY_MASS,
            DEFAULT_BODY_RADIUS,
            Some(CANDIDATE_COLOR),
            self.params.history_length,
        ));

        for body in futures.iter_mut() {
            body.mark_virtual(self.params.future_length);
        }

        let direct = DirectGravity { g: self.params.g };
        let sun_only = SunAttractor { g: self.params.g };
        let gravity: &dyn Gravity = if self.params.n_body_pred {
            &direct
        } else {
            &sun_only
        };

        for _ in 0..self.params.future_length {
            Self::physics_step(gravity, self.params.prediction_dt, &mut futures);
        }

        self.virtual_bodies = futures;
    }

    /// Drop the current prediction (drag ended, committed or not).
    pub fn clear_futures(&mut self) {
        self.virtual_bodies.clear();
    }

    /// Clear every live trail. Called when the viewport changes, since
    /// on-screen trail coordinates depend on the camera frame.
    pub fn clear_histories(&mut self) {
        for body in self.bodies.iter_mut() {
            body.clear_history();
        }
    }

    /// Append a new live body. `mass > 0` is the caller's
    /// responsibility, as on the launch path.
    pub fn add_body(&mut self, position: NVec2, velocity: NVec2, mass: f64) {
        self.bodies.push(CelestialBody::new(
            position,
            velocity,
            mass,
            DEFAULT_BODY_RADIUS,
            None,
            self.params.history_length,
        ));
    }

    /// Append a fully specified body (scenario loading path).
    pub fn add_custom_body(&mut self, body: CelestialBody) {
        self.bodies.push(body);
    }

    /// Remove the most recently added live body, reporting it through
    /// the destruction callback. No-op when only the sun remains.
    pub fn delete_latest_body(&mut self) {
        if self.bodies.len() <= 1 {
            return;
        }

        if let Some(mut body) = self.bodies.pop() {
            info!("deleting last celestial body");
            (self.destruction_callback)(DestructionEvent {
                position: body.x,
                velocity: body.v,
                color: body.color,
            });
            body.clear_history();
        }
    }
}
