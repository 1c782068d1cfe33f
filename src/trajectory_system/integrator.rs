use crate::constants::{
    MAX_SIMULATION_STEPS, MAX_SIMULATION_TIME, REST_SPEED_EPSILON, VELOCITY_EPSILON,
};
use crate::control::config::SimulationConfig;
use crate::errors::SimulationError;
use crate::trajectory_system::aerodynamics::Aerodynamics;
use crate::trajectory_system::surface::{restitution_coefficient, SurfaceParams};
use crate::utils::vector3d::Vector3D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Airborne,
    Sliding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Rest,
    TimeLimitExceeded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub time: f64,
    pub position: Vector3D,
    pub phase: Phase,
    pub impact: Option<u32>,
}

// One owned value per run; the loop threads it, nothing shares it.
#[derive(Debug, Clone, Copy)]
pub struct SimulationState {
    pub time: f64,
    pub position: Vector3D, // x along release heading, y lateral, z height above ground
    pub velocity: Vector3D, // z component positive downward
    pub phase: Phase,
    pub impacts: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightProfile {
    pub points: Vec<TrajectoryPoint>,
    pub termination: Termination,
    pub impacts: u32,
    pub air_distance: f64,
    pub ground_distance: f64,
}

impl FlightProfile {
    pub fn total_distance(&self) -> f64 {
        self.air_distance + self.ground_distance
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TrajectoryIntegrator {
    pub config: SimulationConfig,
    pub aerodynamics: Aerodynamics,
    pub surface_params: SurfaceParams,
}

impl TrajectoryIntegrator {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let aerodynamics = Aerodynamics::new(
            config.drag_coefficient,
            config.frontal_area,
            config.air_density,
            config.mass,
        );
        let surface_params = config.surface.params();
        Ok(TrajectoryIntegrator {
            config,
            aerodynamics,
            surface_params,
        })
    }

    pub fn run(&self, release_height: f64) -> FlightProfile {
        let dt = self.config.time_step;
        let gravity = self.config.gravity;

        let mut state = SimulationState {
            time: 0.0,
            position: Vector3D::new(0.0, 0.0, release_height.max(0.0)),
            velocity: Vector3D::new(self.config.airspeed_mps(), 0.0, 0.0),
            phase: Phase::Airborne,
            impacts: 0,
        };

        let mut points = vec![TrajectoryPoint {
            time: state.time,
            position: state.position,
            phase: state.phase,
            impact: None,
        }];
        let mut first_impact: Option<Vector3D> = None;
        let mut termination = Termination::TimeLimitExceeded;

        for _ in 0..MAX_SIMULATION_STEPS {
            match state.phase {
                Phase::Airborne => {
                    let drag = self.aerodynamics.drag_acceleration(state.velocity);
                    let accel = Vector3D::new(drag.x, drag.y, drag.z + gravity);

                    let velocity_new = Vector3D::new(
                        snap_to_zero(state.velocity.x + accel.x * dt),
                        snap_to_zero(state.velocity.y + accel.y * dt),
                        snap_to_zero(state.velocity.z + accel.z * dt),
                    );
                    let x_new = state.position.x + velocity_new.x * dt;
                    let y_new = state.position.y + velocity_new.y * dt;
                    // z is height above ground, so downward velocity decreases it
                    let z_new = (state.position.z - velocity_new.z * dt).max(0.0);

                    if state.position.z > 0.0 && z_new <= 0.0 {
                        // Impact event fires instead of a normal advance
                        let vn = velocity_new.z.abs();
                        let e = restitution_coefficient(vn, &self.surface_params);
                        let vz_post = -e * velocity_new.z;

                        let vt = velocity_new.horizontal_magnitude();
                        let impulse = self.surface_params.impact_friction * (1.0 + e) * vn;
                        let scale = if vt > 0.0 {
                            ((vt - impulse) / vt).max(0.0)
                        } else {
                            0.0
                        };

                        state.position = Vector3D::new(x_new, y_new, 0.0);
                        state.velocity = Vector3D::new(
                            snap_to_zero(velocity_new.x * scale),
                            snap_to_zero(velocity_new.y * scale),
                            snap_to_zero(vz_post),
                        );
                        state.impacts += 1;
                        if first_impact.is_none() {
                            first_impact = Some(state.position);
                        }
                        points.push(TrajectoryPoint {
                            time: state.time + dt,
                            position: state.position,
                            phase: Phase::Airborne,
                            impact: Some(state.impacts),
                        });

                        if state.velocity.z.abs() < self.config.bounce_threshold {
                            state.phase = Phase::Sliding;
                        }
                    } else {
                        state.position = Vector3D::new(x_new, y_new, z_new);
                        state.velocity = velocity_new;
                        points.push(TrajectoryPoint {
                            time: state.time + dt,
                            position: state.position,
                            phase: Phase::Airborne,
                            impact: None,
                        });
                    }
                }

                Phase::Sliding => {
                    // Residual z from the last bounce takes no part in the slide
                    let travel = Vector3D::new(state.velocity.x, state.velocity.y, 0.0);
                    let speed = travel.magnitude();
                    if speed <= REST_SPEED_EPSILON {
                        state.velocity = Vector3D::zero();
                        points.push(TrajectoryPoint {
                            time: state.time + dt,
                            position: state.position,
                            phase: Phase::Sliding,
                            impact: None,
                        });
                        termination = Termination::Rest;
                        break;
                    }

                    let friction = self.surface_params.slide_friction * gravity;
                    let mut accel = travel.normalize() * -friction;
                    if self.config.include_ground_drag {
                        accel = accel + self.aerodynamics.ground_drag_acceleration(state.velocity);
                    }

                    let mut vx = snap_to_zero(state.velocity.x + accel.x * dt);
                    let mut vy = snap_to_zero(state.velocity.y + accel.y * dt);
                    // Friction must never reverse the direction of travel
                    if vx * (vx + accel.x * dt) < 0.0 {
                        vx = 0.0;
                    }
                    if vy * (vy + accel.y * dt) < 0.0 {
                        vy = 0.0;
                    }

                    state.velocity = Vector3D::new(vx, vy, 0.0);
                    state.position =
                        Vector3D::new(state.position.x + vx * dt, state.position.y + vy * dt, 0.0);
                    points.push(TrajectoryPoint {
                        time: state.time + dt,
                        position: state.position,
                        phase: Phase::Sliding,
                        impact: None,
                    });
                }
            }

            state.time += dt;
            if state.time > MAX_SIMULATION_TIME {
                break;
            }
        }

        let (air_distance, ground_distance) = match first_impact {
            Some(impact) => (
                impact.horizontal_magnitude(),
                (state.position - impact).horizontal_magnitude(),
            ),
            None => (state.position.horizontal_magnitude(), 0.0),
        };

        FlightProfile {
            points,
            termination,
            impacts: state.impacts,
            air_distance,
            ground_distance,
        }
    }
}

fn snap_to_zero(value: f64) -> f64 {
    if value.abs() < VELOCITY_EPSILON {
        0.0
    } else {
        value
    }
}
