use std::fmt;

use crate::trajectory_system::integrator::Termination;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySummary {
    pub azimuth: f64,         // degrees
    pub air_distance: f64,    // meters, release to first impact in the ground plane
    pub ground_distance: f64, // meters, first impact to rest in the ground plane
    pub total_distance: f64,  // meters
    pub impacts: u32,
    pub termination: Termination,
}

impl TrajectorySummary {
    fn format_distance(distance: f64) -> String {
        if distance >= 1000.0 {
            format!("{:.2} km", distance / 1000.0)
        } else {
            format!("{:.2} m", distance)
        }
    }

    fn format_termination(termination: Termination) -> &'static str {
        match termination {
            Termination::Rest => "rest",
            Termination::TimeLimitExceeded => "time limit exceeded",
        }
    }
}

impl fmt::Display for TrajectorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Debris Trajectory Summary ---")?;
        writeln!(f, "Azimuth: {:.2}°", self.azimuth)?;
        writeln!(
            f,
            "Air distance: {}",
            Self::format_distance(self.air_distance)
        )?;
        writeln!(
            f,
            "Ground distance: {}",
            Self::format_distance(self.ground_distance)
        )?;
        writeln!(
            f,
            "Total distance: {}",
            Self::format_distance(self.total_distance)
        )?;
        writeln!(f, "Impacts: {}", self.impacts)?;
        write!(f, "Outcome: {}", Self::format_termination(self.termination))
    }
}
