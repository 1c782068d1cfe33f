use crate::utils::vector3d::Vector3D;

#[derive(Debug, Clone, Copy)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub frontal_area: f64,
    pub air_density: f64,
    pub mass: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, frontal_area: f64, air_density: f64, mass: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            frontal_area,
            air_density,
            mass,
        }
    }

    // K = 0.5 * rho * Cd * A / m, so that a = -K * |v| * v
    pub fn drag_factor(&self) -> f64 {
        0.5 * self.air_density * self.drag_coefficient * self.frontal_area / self.mass
    }

    pub fn drag_acceleration(&self, velocity: Vector3D) -> Vector3D {
        -(velocity * (self.drag_factor() * velocity.magnitude()))
    }

    // Quadratic drag on the horizontal components only, used during the ground slide
    pub fn ground_drag_acceleration(&self, velocity: Vector3D) -> Vector3D {
        let horizontal = Vector3D::new(velocity.x, velocity.y, 0.0);
        -(horizontal * (self.drag_factor() * horizontal.horizontal_magnitude()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_drag_factor() {
        let aero = Aerodynamics::new(1.0, 2.0, 1.225, 10.0);
        assert_relative_eq!(aero.drag_factor(), 0.1225, epsilon = EPSILON);
    }

    #[test]
    fn test_drag_factor_scales_inversely_with_mass() {
        let light = Aerodynamics::new(1.0, 2.0, 1.225, 10.0);
        let heavy = Aerodynamics::new(1.0, 2.0, 1.225, 100.0);
        assert_relative_eq!(
            heavy.drag_factor(),
            light.drag_factor() / 10.0,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_drag_opposes_motion() {
        let aero = Aerodynamics::new(1.0, 2.0, 1.225, 10.0);
        let velocity = Vector3D::new(30.0, -40.0, 0.0);

        let drag = aero.drag_acceleration(velocity);

        // |v| = 50, a = -K * 50 * v
        assert_relative_eq!(drag.x, -183.75, epsilon = EPSILON);
        assert_relative_eq!(drag.y, 245.0, epsilon = EPSILON);
        assert_relative_eq!(drag.z, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_zero_velocity_gives_zero_drag() {
        let aero = Aerodynamics::new(0.8, 1.5, 1.225, 50.0);
        let drag = aero.drag_acceleration(Vector3D::zero());

        assert_relative_eq!(drag.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(drag.y, 0.0, epsilon = EPSILON);
        assert_relative_eq!(drag.z, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_ground_drag_ignores_vertical_component() {
        let aero = Aerodynamics::new(1.0, 2.0, 1.225, 10.0);
        let velocity = Vector3D::new(3.0, 4.0, 12.0);

        let drag = aero.ground_drag_acceleration(velocity);

        // Horizontal speed is 5, so a = -K * 5 * (3, 4, 0)
        assert_relative_eq!(drag.x, -0.1225 * 5.0 * 3.0, epsilon = EPSILON);
        assert_relative_eq!(drag.y, -0.1225 * 5.0 * 4.0, epsilon = EPSILON);
        assert_relative_eq!(drag.z, 0.0, epsilon = EPSILON);
    }
}
