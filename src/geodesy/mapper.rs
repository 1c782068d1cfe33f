use std::f64::consts::FRAC_PI_2;

use crate::constants::EARTH_RADIUS;
use crate::geodesy::anchor::GeodeticAnchor;
use crate::telemetry_system::summary::TrajectorySummary;
use crate::trajectory_system::integrator::{FlightProfile, Phase, TrajectoryPoint};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPoint {
    pub longitude: f64, // degrees
    pub latitude: f64,  // degrees
    pub altitude: f64,  // meters above the reference datum
    pub phase: Phase,
}

#[derive(Debug, Clone, Copy)]
pub struct GeodeticMapper {
    pub anchor: GeodeticAnchor,
    azimuth_rad: f64,
    cos_anchor_latitude: f64,
}

impl GeodeticMapper {
    pub fn new(anchor: GeodeticAnchor) -> Self {
        GeodeticMapper {
            anchor,
            azimuth_rad: anchor.azimuth.to_radians(),
            cos_anchor_latitude: anchor.latitude.to_radians().cos(),
        }
    }

    // Rotate the local frame onto world east/north (x along the azimuth,
    // y along azimuth + 90°) and offset from the anchor on a spherical earth.
    pub fn project(&self, point: &TrajectoryPoint) -> GeodeticPoint {
        let east = point.position.x * self.azimuth_rad.sin()
            + point.position.y * (self.azimuth_rad + FRAC_PI_2).sin();
        let north = point.position.x * self.azimuth_rad.cos()
            + point.position.y * (self.azimuth_rad + FRAC_PI_2).cos();

        let delta_lat = (north / EARTH_RADIUS).to_degrees();
        let delta_lon = (east / (EARTH_RADIUS * self.cos_anchor_latitude)).to_degrees();

        GeodeticPoint {
            longitude: self.anchor.longitude + delta_lon,
            latitude: self.anchor.latitude + delta_lat,
            altitude: point.position.z + self.anchor.terrain_elevation,
            phase: point.phase,
        }
    }

    // The first profile point is the release itself and is emitted verbatim at
    // the anchor; every later point is projected. Points are bucketed by phase,
    // impact-tagged points staying with the airborne path.
    pub fn map_profile(&self, profile: &FlightProfile) -> (Vec<GeodeticPoint>, Vec<GeodeticPoint>) {
        let mut airborne = Vec::new();
        let mut ground_run = Vec::new();

        for (index, point) in profile.points.iter().enumerate() {
            let mapped = if index == 0 {
                GeodeticPoint {
                    longitude: self.anchor.longitude,
                    latitude: self.anchor.latitude,
                    altitude: self.anchor.release_altitude,
                    phase: point.phase,
                }
            } else {
                self.project(point)
            };

            match mapped.phase {
                Phase::Airborne => airborne.push(mapped),
                Phase::Sliding => ground_run.push(mapped),
            }
        }

        (airborne, ground_run)
    }

    pub fn summarize(&self, profile: &FlightProfile) -> TrajectorySummary {
        TrajectorySummary {
            azimuth: self.anchor.azimuth,
            air_distance: profile.air_distance,
            ground_distance: profile.ground_distance,
            total_distance: profile.total_distance(),
            impacts: profile.impacts,
            termination: profile.termination,
        }
    }
}
