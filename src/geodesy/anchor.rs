use crate::errors::SimulationError;
use crate::geodesy::bearing::bearing_deg;
use crate::geodesy::route::Waypoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticAnchor {
    pub latitude: f64,          // degrees
    pub longitude: f64,         // degrees
    pub azimuth: f64,           // degrees in [0, 360), clockwise from north
    pub terrain_elevation: f64, // meters above the reference datum
    pub release_altitude: f64,  // meters above the same datum
}

impl GeodeticAnchor {
    pub fn from_bearing(
        latitude: f64,
        longitude: f64,
        azimuth: f64,
        terrain_elevation: f64,
        release_altitude: f64,
    ) -> Self {
        GeodeticAnchor {
            latitude,
            longitude,
            azimuth: azimuth.rem_euclid(360.0),
            terrain_elevation,
            release_altitude,
        }
    }

    // Anchor at the final point of a recorded track, with the azimuth taken
    // from the bearing of the last leg.
    pub fn from_trailing_points(
        track: &[Waypoint],
        terrain_elevation: f64,
        release_altitude: f64,
    ) -> Result<Self, SimulationError> {
        if track.len() < 2 {
            return Err(SimulationError::InsufficientAnchor(format!(
                "anchor derivation needs at least 2 track points, got {}",
                track.len()
            )));
        }
        let previous = track[track.len() - 2];
        let last = track[track.len() - 1];
        if previous.latitude == last.latitude && previous.longitude == last.longitude {
            return Err(SimulationError::DegenerateBearing);
        }

        let azimuth = bearing_deg(
            previous.latitude,
            previous.longitude,
            last.latitude,
            last.longitude,
        );
        Ok(GeodeticAnchor::from_bearing(
            last.latitude,
            last.longitude,
            azimuth,
            terrain_elevation,
            release_altitude,
        ))
    }

    pub fn release_height(&self) -> f64 {
        self.release_altitude - self.terrain_elevation
    }
}
