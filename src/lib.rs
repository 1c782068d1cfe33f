pub mod constants;
pub mod control;
pub mod errors;
pub mod geodesy;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::config::SimulationConfig;
pub use control::simulation::{DebrisReport, DebrisSimulation};

// Re-export commonly used items from geodesy
pub use geodesy::anchor::GeodeticAnchor;
pub use geodesy::bearing::bearing_deg;
pub use geodesy::mapper::{GeodeticMapper, GeodeticPoint};
pub use geodesy::route::{rebase_altitudes, rotate_route, route_heading_deg, Waypoint};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::integrator::{
    FlightProfile, Phase, Termination, TrajectoryIntegrator, TrajectoryPoint,
};
pub use trajectory_system::surface::{restitution_coefficient, Surface, SurfaceParams};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::summary::TrajectorySummary;

// Re-export commonly used utilities
pub use utils::vector3d::Vector3D;
