// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const EARTH_RADIUS: f64 = 6_371_000.0; // meters
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³

// Unit Conversions
pub const KNOTS_TO_MPS: f64 = 0.514444444; // kt -> m/s

// Simulation Parameters
pub const MAX_SIMULATION_TIME: f64 = 3_600.0; // s (hard stop, non-convergence flag)
pub const MAX_SIMULATION_STEPS: usize = 400_000; // iterations (backstop for sub-0.01s steps)

// Numeric Floors
pub const VELOCITY_EPSILON: f64 = 1e-12; // m/s, velocity components below this snap to zero
pub const REST_SPEED_EPSILON: f64 = 1e-6; // m/s, slide speed below this counts as rest
pub const CHARACTERISTIC_VELOCITY_FLOOR: f64 = 1e-6; // m/s, guards the restitution exponent
