pub mod states;
pub mod params;
pub mod vecmath;
pub mod forces;
pub mod simulator;
