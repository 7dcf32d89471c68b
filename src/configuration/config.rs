//! Configuration types for loading orbit scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario and its mapping into runtime values. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and simulator settings
//! - [`BodyConfig`]       – extra initial bodies beyond the seeded sun + earth
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! viewport: [ 800.0, 600.0 ]  # destruction bounds, world units
//!
//! parameters:
//!   g: 1.5                    # gravitational constant (simulation units)
//!   vel_scalar: 2.5           # drag distance -> launch speed
//!   sun_mass: 1.0e7
//!   sun_radius: 10.0
//!   sun_destruction_range: 25.0
//!   earth_position: [ 200.0, 0.0 ]
//!   earth_velocity: [ 0.0, 280.0 ]
//!   history_length: 700       # live trail capacity
//!   future_length: 700        # prediction steps / virtual trail capacity
//!   prediction_dt: 0.0666667  # fixed prediction step (1/15 s)
//!   n_body_sim: true          # live pass: full pairwise gravity
//!   n_body_pred: false        # prediction pass: sun-only attractor
//!
//! bodies:
//!   - x: [ -300.0, 0.0 ]
//!     v: [ 0.0, -220.0 ]
//!     m: 10.0
//!     radius: 5.0
//! ```
//!
//! Every `parameters` field is optional; missing fields fall back to the
//! defaults above.

use serde::Deserialize;

use crate::simulation::params::OrbitParams;
use crate::simulation::states::{CelestialBody, NVec2};

/// Simulator settings for a scenario. Field-by-field optional so a
/// scenario file only states what it changes.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct ParametersConfig {
    pub g: Option<f64>,
    pub vel_scalar: Option<f64>,
    pub sun_mass: Option<f64>,
    pub sun_radius: Option<f64>,
    pub sun_destruction_range: Option<f64>,
    pub earth_position: Option<[f64; 2]>,
    pub earth_velocity: Option<[f64; 2]>,
    pub history_length: Option<usize>,
    pub future_length: Option<usize>,
    pub prediction_dt: Option<f64>,
    pub n_body_sim: Option<bool>,
    pub n_body_pred: Option<bool>,
}

/// Initial state for one extra body appended after the sun and earth.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position in world units
    pub v: [f64; 2], // initial velocity in world units per second
    pub m: f64,      // mass, expected > 0
    pub radius: f64, // radius, used by the sun-proximity rule
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default = "default_viewport")]
    pub viewport: [f64; 2], // viewport size driving the too-far-away rule
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

fn default_viewport() -> [f64; 2] {
    [800.0, 600.0]
}

/// A fully-initialized runtime scenario: parameters plus the extra
/// bodies to seed the simulator with.
pub struct Scenario {
    pub params: OrbitParams,
    pub viewport: NVec2,
    pub bodies: Vec<CelestialBody>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime): defaults overridden field by field
        let defaults = OrbitParams::default();
        let p_cfg = cfg.parameters;
        let params = OrbitParams {
            g: p_cfg.g.unwrap_or(defaults.g),
            vel_scalar: p_cfg.vel_scalar.unwrap_or(defaults.vel_scalar),
            sun_mass: p_cfg.sun_mass.unwrap_or(defaults.sun_mass),
            sun_radius: p_cfg.sun_radius.unwrap_or(defaults.sun_radius),
            sun_destruction_range: p_cfg
                .sun_destruction_range
                .unwrap_or(defaults.sun_destruction_range),
            earth_position: p_cfg.earth_position.unwrap_or(defaults.earth_position),
            earth_velocity: p_cfg.earth_velocity.unwrap_or(defaults.earth_velocity),
            history_length: p_cfg.history_length.unwrap_or(defaults.history_length),
            future_length: p_cfg.future_length.unwrap_or(defaults.future_length),
            prediction_dt: p_cfg.prediction_dt.unwrap_or(defaults.prediction_dt),
            n_body_sim: p_cfg.n_body_sim.unwrap_or(defaults.n_body_sim),
            n_body_pred: p_cfg.n_body_pred.unwrap_or(defaults.n_body_pred),
        };

        // Bodies: map `BodyConfig` -> runtime `CelestialBody` with a
        // random display color and the live trail capacity
        let bodies: Vec<CelestialBody> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                CelestialBody::new(
                    NVec2::from(bc.x),
                    NVec2::from(bc.v),
                    bc.m,
                    bc.radius,
                    None,
                    params.history_length,
                )
            })
            .collect();

        Self {
            params,
            viewport: NVec2::from(cfg.viewport),
            bodies,
        }
    }
}
