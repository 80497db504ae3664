use nalgebra::Vector3;

use crate::airframe::Airframe;
use crate::atmosphere;
use crate::constants::{
    DRAG_COEFF_BASE, G0, MACH_DRAG_RISE, MACH_SUPERSONIC, MIN_DENSITY, MIN_SPEED,
    SUPERSONIC_DRAG_SLOPE, SUPERSONIC_LOG_FACTOR, TRANSONIC_DRAG_SLOPE,
};
use crate::kinematics::{self, FlowRegime};

// ---------------------------------------------------------------------------
// Mach regime
// ---------------------------------------------------------------------------

/// Compressibility regime for the drag-coefficient law.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachRegime {
    Subsonic,
    Transonic,
    Supersonic,
}

impl MachRegime {
    /// Subsonic below Mach 0.8, transonic to Mach 1.2, supersonic from there.
    pub fn of(mach: f64) -> Self {
        if mach < MACH_DRAG_RISE {
            Self::Subsonic
        } else if mach < MACH_SUPERSONIC {
            Self::Transonic
        } else {
            Self::Supersonic
        }
    }
}

// ---------------------------------------------------------------------------
// Drag coefficient
// ---------------------------------------------------------------------------

/// Mach-corrected drag coefficient for the reference base value.
pub fn dynamic_drag_coefficient(mach: f64) -> f64 {
    dynamic_drag_from(DRAG_COEFF_BASE, mach)
}

/// Mach-corrected drag coefficient built on an arbitrary base value.
///
/// Constant below the drag-rise Mach, linear ramp (slope 1.5) through the
/// transonic band, then logarithmic growth. Once supersonic, the steeper
/// slope 2.0 replaces the transonic one in both the ramp term and the
/// logarithmic tail, which puts a step in the curve at Mach 1.2.
pub fn dynamic_drag_from(base: f64, mach: f64) -> f64 {
    match MachRegime::of(mach) {
        MachRegime::Subsonic => base,
        MachRegime::Transonic => base + TRANSONIC_DRAG_SLOPE * (mach - MACH_DRAG_RISE),
        MachRegime::Supersonic => {
            base + SUPERSONIC_DRAG_SLOPE * (MACH_SUPERSONIC - MACH_DRAG_RISE)
                + SUPERSONIC_LOG_FACTOR * SUPERSONIC_DRAG_SLOPE * (mach / MACH_SUPERSONIC).ln()
        }
    }
}

/// Cross-sectional area projected onto the flow for an orientation angle.
///
/// A pure projection of the base area; never caches or writes state.
pub fn effective_area(base_area: f64, angle_deg: f64) -> f64 {
    base_area * angle_deg.to_radians().cos()
}

// ---------------------------------------------------------------------------
// Drag forces
// ---------------------------------------------------------------------------

/// Quadratic compressible drag force, N, opposing the velocity vector.
///
/// Returns the zero vector below the minimum-speed guard.
pub fn drag_force(
    velocity: &Vector3<f64>,
    altitude: f64,
    angle_deg: f64,
    airframe: &Airframe,
) -> Vector3<f64> {
    let speed = velocity.norm();
    if speed < MIN_SPEED {
        return Vector3::zeros();
    }

    let atmo = atmosphere::conditions(altitude);
    let mach = speed / atmo.sound_speed;
    let cd = airframe.drag_coefficient_at(mach);
    let area = effective_area(airframe.cross_section(), angle_deg);
    let magnitude = kinematics::dynamic_pressure(atmo.density, speed) * cd * area;

    -velocity.normalize() * magnitude
}

/// Steady-state fall speed where drag balances weight, m/s.
///
/// Reports positive infinity when the local density is effectively vacuum.
pub fn terminal_velocity(mass: f64, altitude: f64, airframe: &Airframe) -> f64 {
    let rho = atmosphere::air_density(altitude);
    if rho < MIN_DENSITY {
        return f64::INFINITY;
    }
    ((2.0 * mass * G0) / (airframe.drag_coefficient() * rho * airframe.cross_section())).sqrt()
}

/// Viscous low-Reynolds drag, N: 6*pi*mu*r*v opposite the velocity, with
/// the radius recovered from the reference cross-section.
pub fn stokes_drag(velocity: &Vector3<f64>, temperature: f64, area: f64) -> Vector3<f64> {
    let speed = velocity.norm();
    if speed < MIN_SPEED {
        return Vector3::zeros();
    }

    let radius = (area / std::f64::consts::PI).sqrt();
    let magnitude = 6.0 * std::f64::consts::PI * atmosphere::viscosity(temperature) * radius * speed;

    -velocity.normalize() * magnitude
}

/// Regime-switched total drag, N.
///
/// Stokes drag when the Reynolds number (at the supplied temperature) is
/// below 1000, the quadratic compressible model otherwise.
pub fn total_drag(
    velocity: &Vector3<f64>,
    altitude: f64,
    angle_deg: f64,
    temperature: f64,
    airframe: &Airframe,
) -> Vector3<f64> {
    let re = kinematics::reynolds(
        atmosphere::air_density(altitude),
        velocity.norm(),
        airframe.cross_section().sqrt(),
        atmosphere::viscosity(temperature),
    );
    match FlowRegime::of(re) {
        FlowRegime::Laminar => stokes_drag(velocity, temperature, airframe.cross_section()),
        FlowRegime::Turbulent => drag_force(velocity, altitude, angle_deg, airframe),
    }
}

/// Total drag against the air mass, N: the wind velocity is subtracted
/// before the regime switch, at the ambient temperature for the altitude.
pub fn wind_drag(
    velocity: &Vector3<f64>,
    altitude: f64,
    angle_deg: f64,
    wind: &Vector3<f64>,
    airframe: &Airframe,
) -> Vector3<f64> {
    let relative = velocity - wind;
    total_drag(
        &relative,
        altitude,
        angle_deg,
        atmosphere::temperature(altitude),
        airframe,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn airframe() -> Airframe {
        Airframe::new(DRAG_COEFF_BASE, 0.01).unwrap()
    }

    #[test]
    fn coefficient_constant_below_drag_rise() {
        assert_eq!(dynamic_drag_coefficient(0.0), 0.295);
        assert_eq!(dynamic_drag_coefficient(0.5), 0.295);
        assert_eq!(dynamic_drag_coefficient(0.799), 0.295);
    }

    #[test]
    fn coefficient_ramps_through_transonic() {
        // At Mach 0.88 the value sits strictly inside the transonic ramp
        let cd = dynamic_drag_coefficient(0.88);
        assert!(cd > 0.295 && cd < 0.295 + 1.5 * 0.4);
        assert_relative_eq!(cd, 0.295 + 1.5 * 0.08, epsilon = 1e-12);
        assert_relative_eq!(dynamic_drag_coefficient(1.0), 0.595, epsilon = 1e-12);
    }

    #[test]
    fn coefficient_grows_logarithmically_when_supersonic() {
        // Steeper slope 2.0 takes over past Mach 1.2
        let at_threshold = dynamic_drag_coefficient(1.2);
        assert_relative_eq!(at_threshold, 0.295 + 2.0 * 0.4, epsilon = 1e-12);

        let at_mach2 = dynamic_drag_coefficient(2.0);
        let expected = 1.095 + 0.4 * (2.0_f64 / 1.2).ln();
        assert_relative_eq!(at_mach2, expected, epsilon = 1e-12);
        assert!(at_mach2 > at_threshold);
    }

    #[test]
    fn effective_area_projects_with_angle() {
        assert_relative_eq!(effective_area(0.01, 0.0), 0.01, epsilon = 1e-15);
        assert_relative_eq!(effective_area(0.01, 60.0), 0.005, epsilon = 1e-12);
    }

    #[test]
    fn zero_velocity_gives_exact_zero_vector() {
        let v = Vector3::zeros();
        assert_eq!(drag_force(&v, 0.0, 0.0, &airframe()), Vector3::zeros());
        assert_eq!(stokes_drag(&v, 288.15, 0.01), Vector3::zeros());
        assert_eq!(
            total_drag(&v, 0.0, 0.0, 288.15, &airframe()),
            Vector3::zeros()
        );
    }

    #[test]
    fn drag_opposes_velocity() {
        let v = Vector3::new(120.0, -35.0, 60.0);
        let f = drag_force(&v, 1_000.0, 0.0, &airframe());
        assert!(f.dot(&v) < 0.0);
        // Anti-parallel: no component orthogonal to the velocity
        assert!(f.cross(&v).norm() < 1e-9 * f.norm() * v.norm());
    }

    #[test]
    fn drag_magnitude_at_sea_level() {
        // 1/2 * rho * v^2 * cd * A with the subsonic coefficient
        let v = Vector3::new(100.0, 0.0, 0.0);
        let f = drag_force(&v, 0.0, 0.0, &airframe());
        let expected = 0.5 * 1.225 * 100.0 * 100.0 * 0.295 * 0.01;
        assert_relative_eq!(f.norm(), expected, max_relative = 1e-3);
    }

    #[test]
    fn terminal_velocity_sea_level() {
        let af = Airframe::new(0.3, 0.01).unwrap();
        let vt = terminal_velocity(1.0, 0.0, &af);
        let expected = ((2.0_f64 * 9.80665) / (0.3 * 1.225 * 0.01)).sqrt();
        assert_relative_eq!(vt, expected, max_relative = 1e-3);
    }

    #[test]
    fn terminal_velocity_infinite_in_near_vacuum() {
        assert!(terminal_velocity(1.0, 90_000.0, &airframe()).is_infinite());
    }

    #[test]
    fn stokes_magnitude_is_linear_in_speed() {
        let f1 = stokes_drag(&Vector3::new(0.1, 0.0, 0.0), 288.15, 0.01);
        let f2 = stokes_drag(&Vector3::new(0.2, 0.0, 0.0), 288.15, 0.01);
        assert_relative_eq!(f2.norm() / f1.norm(), 2.0, max_relative = 1e-9);

        let radius = (0.01_f64 / std::f64::consts::PI).sqrt();
        let expected = 6.0 * std::f64::consts::PI * 1.7894e-5 * radius * 0.1;
        assert_relative_eq!(f1.norm(), expected, max_relative = 1e-3);
    }

    #[test]
    fn regime_switch_straddles_reynolds_1000() {
        let af = airframe();
        // Re = rho * v * sqrt(A) / mu ~ 6845 * v at sea level with A = 0.01
        let slow = Vector3::new(0.1, 0.0, 0.0); // Re ~ 685, laminar
        let fast = Vector3::new(0.2, 0.0, 0.0); // Re ~ 1370, turbulent

        assert_eq!(
            total_drag(&slow, 0.0, 0.0, 288.15, &af),
            stokes_drag(&slow, 288.15, af.cross_section())
        );
        assert_eq!(
            total_drag(&fast, 0.0, 0.0, 288.15, &af),
            drag_force(&fast, 0.0, 0.0, &af)
        );
    }

    #[test]
    fn wind_drag_vanishes_when_moving_with_the_air() {
        let v = Vector3::new(12.0, 0.0, 0.0);
        let f = wind_drag(&v, 0.0, 0.0, &v, &airframe());
        assert_eq!(f, Vector3::zeros());
    }

    #[test]
    fn headwind_increases_drag() {
        let v = Vector3::new(100.0, 0.0, 0.0);
        let calm = wind_drag(&v, 0.0, 0.0, &Vector3::zeros(), &airframe());
        let headwind = wind_drag(&v, 0.0, 0.0, &Vector3::new(-20.0, 0.0, 0.0), &airframe());
        assert!(headwind.norm() > calm.norm());
    }
}
