use nalgebra::Vector3;

use crate::atmosphere;
use crate::constants::LAMINAR_REYNOLDS_LIMIT;

// ---------------------------------------------------------------------------
// Derived flow quantities
// ---------------------------------------------------------------------------

/// Mach number: speed over the local speed of sound.
pub fn mach_number(velocity: &Vector3<f64>, altitude: f64) -> f64 {
    velocity.norm() / atmosphere::sound_speed(altitude)
}

/// Reynolds number at ambient conditions, with the characteristic length
/// taken as the square root of the reference cross-sectional area.
pub fn reynolds_number(velocity: &Vector3<f64>, altitude: f64, area: f64) -> f64 {
    let atmo = atmosphere::conditions(altitude);
    reynolds(atmo.density, velocity.norm(), area.sqrt(), atmo.viscosity)
}

/// Re = rho * v * L / mu with an explicit viscosity, for callers that
/// override the ambient temperature.
pub fn reynolds(density: f64, speed: f64, length: f64, viscosity: f64) -> f64 {
    density * speed * length / viscosity
}

/// Dynamic pressure q = 1/2 * rho * v^2, Pa.
pub fn dynamic_pressure(density: f64, speed: f64) -> f64 {
    0.5 * density * speed * speed
}

// ---------------------------------------------------------------------------
// Flow regime
// ---------------------------------------------------------------------------

/// Laminar/turbulent classification driving the drag regime switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

impl FlowRegime {
    /// Laminar below a Reynolds number of 1000, turbulent at or above it.
    pub fn of(reynolds: f64) -> Self {
        if reynolds < LAMINAR_REYNOLDS_LIMIT {
            Self::Laminar
        } else {
            Self::Turbulent
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mach_is_speed_over_sound_speed() {
        // Exact identity at representative layer altitudes
        for &h in &[0.0, 11_000.0, 20_000.0] {
            let v = Vector3::new(120.0, -40.0, 9.0);
            assert_eq!(mach_number(&v, h), v.norm() / atmosphere::sound_speed(h));
        }
    }

    #[test]
    fn mach_088_at_300mps_sea_level() {
        let v = Vector3::new(300.0, 0.0, 0.0);
        assert_relative_eq!(mach_number(&v, 0.0), 0.88, epsilon = 0.01);
    }

    #[test]
    fn reynolds_scales_with_speed_and_length() {
        let slow = reynolds_number(&Vector3::new(1.0, 0.0, 0.0), 0.0, 0.01);
        let fast = reynolds_number(&Vector3::new(10.0, 0.0, 0.0), 0.0, 0.01);
        assert_relative_eq!(fast / slow, 10.0, max_relative = 1e-9);

        let small = reynolds_number(&Vector3::new(10.0, 0.0, 0.0), 0.0, 0.0001);
        assert_relative_eq!(fast / small, 10.0, max_relative = 1e-9); // L = sqrt(A)
    }

    #[test]
    fn reynolds_drops_with_altitude() {
        let v = Vector3::new(50.0, 0.0, 0.0);
        assert!(reynolds_number(&v, 30_000.0, 0.01) < reynolds_number(&v, 0.0, 0.01));
    }

    #[test]
    fn flow_regime_threshold_is_exact() {
        assert_eq!(FlowRegime::of(999.9), FlowRegime::Laminar);
        assert_eq!(FlowRegime::of(1000.0), FlowRegime::Turbulent);
        assert_eq!(FlowRegime::of(5e6), FlowRegime::Turbulent);
    }
}
