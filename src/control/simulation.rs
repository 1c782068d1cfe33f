use crate::control::config::SimulationConfig;
use crate::errors::SimulationError;
use crate::geodesy::anchor::GeodeticAnchor;
use crate::geodesy::mapper::{GeodeticMapper, GeodeticPoint};
use crate::telemetry_system::summary::TrajectorySummary;
use crate::trajectory_system::integrator::TrajectoryIntegrator;

#[derive(Debug, Clone)]
pub struct DebrisReport {
    pub airborne: Vec<GeodeticPoint>,
    pub ground_run: Vec<GeodeticPoint>,
    pub summary: TrajectorySummary,
}

#[derive(Debug, Clone, Copy)]
pub struct DebrisSimulation {
    pub config: SimulationConfig,
    pub anchor: GeodeticAnchor,
    pub integrator: TrajectoryIntegrator,
    pub mapper: GeodeticMapper,
}

impl DebrisSimulation {
    pub fn new(config: SimulationConfig, anchor: GeodeticAnchor) -> Result<Self, SimulationError> {
        let integrator = TrajectoryIntegrator::new(config)?;
        if anchor.release_height() <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "release altitude must sit above the terrain, got {} m over {} m",
                anchor.release_altitude, anchor.terrain_elevation
            )));
        }

        Ok(DebrisSimulation {
            config,
            anchor,
            integrator,
            mapper: GeodeticMapper::new(anchor),
        })
    }

    pub fn run(&self) -> DebrisReport {
        let profile = self.integrator.run(self.anchor.release_height());
        let (airborne, ground_run) = self.mapper.map_profile(&profile);
        let summary = self.mapper.summarize(&profile);

        DebrisReport {
            airborne,
            ground_run,
            summary,
        }
    }
}
