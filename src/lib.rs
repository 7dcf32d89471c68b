pub mod simulation;
pub mod configuration;

pub use simulation::states::{
    random_color, CelestialBody, Color, NVec2, CANDIDATE_COLOR, EARTH_COLOR, SUN_COLOR,
};
pub use simulation::params::{OrbitParams, DEFAULT_BODY_MASS, DEFAULT_BODY_RADIUS};
pub use simulation::vecmath::{drag_launch, normalize, rotate_2d, DegenerateVector, NORMALIZE_EPS};
pub use simulation::forces::{gravitational_force, DirectGravity, Gravity, SunAttractor};
pub use simulation::simulator::{DestructionCallback, DestructionEvent, OrbitSimulator};

pub use configuration::config::{BodyConfig, ParametersConfig, Scenario, ScenarioConfig};
