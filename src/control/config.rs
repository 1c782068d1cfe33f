use crate::constants::KNOTS_TO_MPS;
use crate::errors::SimulationError;
use crate::trajectory_system::surface::Surface;

#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub mass: f64,             // kg
    pub frontal_area: f64,     // m²
    pub drag_coefficient: f64, // dimensionless
    pub air_density: f64,      // kg/m³
    pub gravity: f64,          // m/s²
    pub time_step: f64,        // s
    pub airspeed_kt: f64,      // knots true airspeed
    pub surface: Surface,
    pub include_ground_drag: bool,
    pub bounce_threshold: f64, // m/s, rebound speed below which the body starts sliding
}

impl SimulationConfig {
    pub fn airspeed_mps(&self) -> f64 {
        self.airspeed_kt * KNOTS_TO_MPS
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let positive = [
            ("mass", self.mass),
            ("frontal area", self.frontal_area),
            ("drag coefficient", self.drag_coefficient),
            ("air density", self.air_density),
            ("gravity", self.gravity),
            ("time step", self.time_step),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(SimulationError::InvalidParameter(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if self.airspeed_kt < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "airspeed must not be negative, got {} kt",
                self.airspeed_kt
            )));
        }
        if self.bounce_threshold < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "bounce threshold must not be negative, got {} m/s",
                self.bounce_threshold
            )));
        }

        Ok(())
    }
}
