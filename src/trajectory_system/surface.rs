use crate::constants::CHARACTERISTIC_VELOCITY_FLOOR;
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Concrete,
    Asphalt,
    Grass,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceParams {
    pub impact_friction: f64,
    pub slide_friction: f64,
    pub baseline_restitution: f64,
    pub asymptotic_restitution: f64,
    pub characteristic_velocity: f64, // m/s
}

impl Surface {
    pub fn from_name(name: &str) -> Result<Self, SimulationError> {
        match name.to_lowercase().as_str() {
            "concrete" => Ok(Surface::Concrete),
            "asphalt" => Ok(Surface::Asphalt),
            "grass" => Ok(Surface::Grass),
            _ => Err(SimulationError::UnknownSurface(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Surface::Concrete => "concrete",
            Surface::Asphalt => "asphalt",
            Surface::Grass => "grass",
        }
    }

    pub fn params(&self) -> SurfaceParams {
        match self {
            Surface::Concrete => SurfaceParams {
                impact_friction: 0.55,
                slide_friction: 0.50,
                baseline_restitution: 0.20,
                asymptotic_restitution: 0.05,
                characteristic_velocity: 15.0,
            },
            Surface::Asphalt => SurfaceParams {
                impact_friction: 0.45,
                slide_friction: 0.40,
                baseline_restitution: 0.18,
                asymptotic_restitution: 0.05,
                characteristic_velocity: 12.0,
            },
            Surface::Grass => SurfaceParams {
                impact_friction: 0.35,
                slide_friction: 0.55,
                baseline_restitution: 0.12,
                asymptotic_restitution: 0.03,
                characteristic_velocity: 8.0,
            },
        }
    }
}

// Velocity-dependent COR: e(vn) = einf + (e0 - einf) * exp(-vn / vc)
pub fn restitution_coefficient(impact_speed: f64, params: &SurfaceParams) -> f64 {
    let vn = impact_speed.max(0.0);
    let vc = params
        .characteristic_velocity
        .max(CHARACTERISTIC_VELOCITY_FLOOR);
    let e = params.asymptotic_restitution
        + (params.baseline_restitution - params.asymptotic_restitution) * (-vn / vc).exp();
    e.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_surface_lookup_by_name() {
        assert_eq!(Surface::from_name("concrete").unwrap(), Surface::Concrete);
        assert_eq!(Surface::from_name("Asphalt").unwrap(), Surface::Asphalt);
        assert_eq!(Surface::from_name("GRASS").unwrap(), Surface::Grass);
    }

    #[test]
    fn test_name_round_trips_through_lookup() {
        for surface in [Surface::Concrete, Surface::Asphalt, Surface::Grass] {
            assert_eq!(
                Surface::from_name(surface.name()).unwrap(),
                surface,
                "name() must be accepted back by from_name()"
            );
        }
    }

    #[test]
    fn test_unknown_surface_is_an_error() {
        let result = Surface::from_name("ice");
        assert!(
            matches!(result, Err(SimulationError::UnknownSurface(_))),
            "Unrecognized surface names must not fall back to a default"
        );
    }

    #[test]
    fn test_preset_values() {
        let concrete = Surface::Concrete.params();
        assert_relative_eq!(concrete.impact_friction, 0.55, epsilon = EPSILON);
        assert_relative_eq!(concrete.slide_friction, 0.50, epsilon = EPSILON);
        assert_relative_eq!(concrete.baseline_restitution, 0.20, epsilon = EPSILON);
        assert_relative_eq!(concrete.asymptotic_restitution, 0.05, epsilon = EPSILON);
        assert_relative_eq!(concrete.characteristic_velocity, 15.0, epsilon = EPSILON);

        let grass = Surface::Grass.params();
        assert!(
            grass.baseline_restitution < concrete.baseline_restitution,
            "Grass should rebound less than concrete"
        );
        assert!(
            grass.slide_friction > concrete.slide_friction,
            "Grass should resist sliding more than concrete"
        );
    }

    #[test]
    fn test_restitution_at_zero_impact_speed() {
        let params = Surface::Concrete.params();
        assert_relative_eq!(
            restitution_coefficient(0.0, &params),
            params.baseline_restitution,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_restitution_decays_toward_asymptote() {
        let params = Surface::Asphalt.params();
        let e_fast = restitution_coefficient(1_000.0, &params);
        assert_relative_eq!(e_fast, params.asymptotic_restitution, epsilon = 1e-6);
    }

    #[test]
    fn test_restitution_bounded_and_monotone() {
        let params = Surface::Grass.params();
        let mut previous = f64::MAX;
        for i in 0..200 {
            let vn = i as f64 * 0.5;
            let e = restitution_coefficient(vn, &params);
            assert!(
                (0.0..=1.0).contains(&e),
                "Restitution must stay inside [0, 1], got {} at vn = {}",
                e,
                vn
            );
            assert!(
                e <= previous,
                "Restitution must not increase with impact speed: e({}) = {} > {}",
                vn,
                e,
                previous
            );
            previous = e;
        }
    }

    #[test]
    fn test_restitution_negative_speed_floored() {
        let params = Surface::Concrete.params();
        assert_relative_eq!(
            restitution_coefficient(-5.0, &params),
            restitution_coefficient(0.0, &params),
            epsilon = EPSILON
        );
    }
}
