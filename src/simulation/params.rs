//! Numerical and physical parameters for the orbit simulation
//!
//! `OrbitParams` holds the runtime settings:
//! - gravitational constant and launch velocity scaling,
//! - sun and earth presets,
//! - history/prediction buffer lengths and the prediction step size,
//! - which gravity mode the live and prediction passes use
//!
//! Built once at startup (defaults or from a scenario file), passed to
//! the simulator, never mutated afterwards.

/// Default mass for a user-launched body.
pub const DEFAULT_BODY_MASS: f64 = 10.0;

/// Default radius for a user-launched body.
pub const DEFAULT_BODY_RADIUS: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct OrbitParams {
    pub g: f64, // gravitational constant, simulation units (not SI)
    pub vel_scalar: f64, // drag distance -> launch speed scaling
    pub sun_mass: f64, // mass of the central sun
    pub sun_radius: f64, // radius of the central sun
    pub sun_destruction_range: f64, // extra clearance added to the radii sum
    pub earth_position: [f64; 2], // reference planet initial position
    pub earth_velocity: [f64; 2], // reference planet initial velocity
    pub history_length: usize, // trail capacity for live bodies
    pub future_length: usize, // prediction steps / trail capacity for virtual bodies
    pub prediction_dt: f64, // fixed step size used by predict()
    pub n_body_sim: bool, // live pass: full pairwise gravity when true
    pub n_body_pred: bool, // prediction pass: full pairwise gravity when true
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            g: 1.5,
            vel_scalar: 2.5,
            sun_mass: 1e7,
            sun_radius: 10.0,
            sun_destruction_range: 25.0,
            earth_position: [200.0, 0.0],
            earth_velocity: [0.0, 280.0],
            history_length: 700,
            future_length: 700,
            prediction_dt: 1.0 / 15.0,
            n_body_sim: true,
            n_body_pred: false,
        }
    }
}
