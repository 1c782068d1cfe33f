use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub latitude: f64,  // degrees
    pub longitude: f64, // degrees
    pub altitude: f64,  // meters
}

impl Waypoint {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Waypoint {
            latitude,
            longitude,
            altitude,
        }
    }
}

// Planar heading of the first route leg, degrees in [0, 360). Longitude offsets
// are scaled by cos(latitude) so the angle is measured in locally metric units.
pub fn route_heading_deg(waypoints: &[Waypoint]) -> Result<f64, SimulationError> {
    if waypoints.len() < 2 {
        return Err(SimulationError::InsufficientAnchor(format!(
            "route heading needs at least 2 waypoints, got {}",
            waypoints.len()
        )));
    }
    let start = waypoints[0];
    let next = waypoints[1];
    if start.latitude == next.latitude && start.longitude == next.longitude {
        return Err(SimulationError::DegenerateBearing);
    }

    let delta_lat = next.latitude - start.latitude;
    let delta_lon = (next.longitude - start.longitude) * start.latitude.to_radians().cos();
    Ok(delta_lon.atan2(delta_lat).to_degrees().rem_euclid(360.0))
}

// Relocates a recorded route onto a new anchor and heading. Rotation happens in
// locally metric units: longitude offsets are scaled by the source latitude's
// cosine before rotating and unscaled by the target latitude's cosine after.
pub fn rotate_route(
    waypoints: &[Waypoint],
    target_latitude: f64,
    target_longitude: f64,
    target_heading: f64,
) -> Result<Vec<Waypoint>, SimulationError> {
    let current_heading = route_heading_deg(waypoints)?;
    let rotation = (target_heading - current_heading).to_radians();
    let cos_rotation = rotation.cos();
    let sin_rotation = rotation.sin();

    let start = waypoints[0];
    let source_scale = start.latitude.to_radians().cos();
    let target_scale = target_latitude.to_radians().cos();

    Ok(waypoints
        .iter()
        .map(|waypoint| {
            let rel_lat = waypoint.latitude - start.latitude;
            let rel_lon = (waypoint.longitude - start.longitude) * source_scale;

            let rotated_lat = rel_lat * cos_rotation - rel_lon * sin_rotation;
            let rotated_lon = rel_lat * sin_rotation + rel_lon * cos_rotation;

            Waypoint {
                latitude: target_latitude + rotated_lat,
                longitude: target_longitude + rotated_lon / target_scale,
                altitude: waypoint.altitude,
            }
        })
        .collect())
}

// Re-references altitudes against a ground elevation (absolute -> above-ground)
pub fn rebase_altitudes(waypoints: &[Waypoint], ground_reference: f64) -> Vec<Waypoint> {
    waypoints
        .iter()
        .map(|waypoint| Waypoint {
            altitude: waypoint.altitude - ground_reference,
            ..*waypoint
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_route() -> Vec<Waypoint> {
        vec![
            Waypoint::new(51.2760, -0.7770, 365.0),
            Waypoint::new(51.2805, -0.7660, 380.0),
            Waypoint::new(51.2850, -0.7585, 410.0),
        ]
    }

    #[test]
    fn test_heading_due_east_at_equator() {
        let route = [
            Waypoint::new(0.0, 10.0, 0.0),
            Waypoint::new(0.0, 11.0, 0.0),
        ];
        assert_relative_eq!(route_heading_deg(&route).unwrap(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_heading_due_north() {
        let route = [
            Waypoint::new(10.0, 5.0, 0.0),
            Waypoint::new(11.0, 5.0, 0.0),
        ];
        assert_relative_eq!(route_heading_deg(&route).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_heading_needs_two_waypoints() {
        let route = [Waypoint::new(51.0, 0.0, 100.0)];
        assert!(
            matches!(
                route_heading_deg(&route),
                Err(SimulationError::InsufficientAnchor(_))
            ),
            "A single waypoint cannot define a heading"
        );
    }

    #[test]
    fn test_heading_rejects_coincident_start() {
        let route = [
            Waypoint::new(51.0, 0.0, 100.0),
            Waypoint::new(51.0, 0.0, 250.0),
        ];
        assert!(matches!(
            route_heading_deg(&route),
            Err(SimulationError::DegenerateBearing)
        ));
    }

    #[test]
    fn test_rotation_identity() {
        let route = sample_route();
        let heading = route_heading_deg(&route).unwrap();

        let rotated = rotate_route(&route, route[0].latitude, route[0].longitude, heading).unwrap();

        for (original, relocated) in route.iter().zip(&rotated) {
            assert_relative_eq!(relocated.latitude, original.latitude, epsilon = 1e-9);
            assert_relative_eq!(relocated.longitude, original.longitude, epsilon = 1e-9);
            assert_relative_eq!(relocated.altitude, original.altitude, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rotation_turns_north_leg_east() {
        let route = [Waypoint::new(0.0, 0.0, 50.0), Waypoint::new(1.0, 0.0, 80.0)];

        let rotated = rotate_route(&route, 0.0, 0.0, 90.0).unwrap();

        assert_relative_eq!(rotated[0].latitude, 0.0, epsilon = 1e-9);
        assert_relative_eq!(rotated[0].longitude, 0.0, epsilon = 1e-9);
        assert_relative_eq!(rotated[1].latitude, 0.0, epsilon = 1e-9);
        assert_relative_eq!(rotated[1].longitude, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_translates_onto_target_anchor() {
        let route = sample_route();
        let heading = route_heading_deg(&route).unwrap();

        let rotated = rotate_route(&route, 40.0, -74.0, heading).unwrap();

        assert_relative_eq!(rotated[0].latitude, 40.0, epsilon = 1e-9);
        assert_relative_eq!(rotated[0].longitude, -74.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_preserves_altitudes() {
        let route = sample_route();

        let rotated = rotate_route(&route, 35.0, 139.0, 270.0).unwrap();

        for (original, relocated) in route.iter().zip(&rotated) {
            assert_relative_eq!(relocated.altitude, original.altitude, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rotation_preserves_leg_shape() {
        // The relocated first leg must point along the requested heading
        let route = sample_route();

        let rotated = rotate_route(&route, 52.5, 1.3, 210.0).unwrap();
        let new_heading = route_heading_deg(&rotated).unwrap();

        assert_relative_eq!(new_heading, 210.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rebase_altitudes() {
        let route = sample_route();

        let rebased = rebase_altitudes(&route, 65.0);

        for (original, adjusted) in route.iter().zip(&rebased) {
            assert_relative_eq!(adjusted.altitude, original.altitude - 65.0, epsilon = 1e-12);
            assert_relative_eq!(adjusted.latitude, original.latitude, epsilon = 1e-12);
            assert_relative_eq!(adjusted.longitude, original.longitude, epsilon = 1e-12);
        }
    }
}
