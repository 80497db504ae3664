use nalgebra::Vector3;

use crate::airframe::Airframe;
use crate::atmosphere;
use crate::constants::{
    EARTH_ANGULAR_VELOCITY, EARTH_MASS, EARTH_RADIUS, G0, GRAVITATIONAL_CONSTANT, MIN_SPEED,
};
use crate::drag::effective_area;

// ---------------------------------------------------------------------------
// Gravity
// ---------------------------------------------------------------------------

/// Inverse-square gravitational acceleration at an altitude, m/s^2, along
/// the downward axis. Altitude-dependent, unlike the constant g0 used by
/// the drag and buoyancy models.
pub fn gravity_accel(altitude: f64) -> Vector3<f64> {
    let r = EARTH_RADIUS + altitude.max(0.0);
    let g = GRAVITATIONAL_CONSTANT * EARTH_MASS / (r * r);
    Vector3::new(0.0, 0.0, -g)
}

/// Gravitational force on a mass at an altitude, N.
pub fn gravity_force(altitude: f64, mass: f64) -> Vector3<f64> {
    gravity_accel(altitude) * mass
}

// ---------------------------------------------------------------------------
// Buoyancy and Coriolis
// ---------------------------------------------------------------------------

/// Buoyant force on a displaced volume, N, acting upward: rho * g0 * V.
pub fn buoyancy_force(altitude: f64, volume: f64) -> Vector3<f64> {
    Vector3::new(0.0, 0.0, atmosphere::air_density(altitude) * G0 * volume)
}

/// Coriolis force -2m * (Omega x v), N, with Earth's rotation taken about
/// the local vertical axis.
pub fn coriolis_force(velocity: &Vector3<f64>, mass: f64) -> Vector3<f64> {
    let omega = Vector3::new(0.0, 0.0, EARTH_ANGULAR_VELOCITY);
    -2.0 * mass * omega.cross(velocity)
}

// ---------------------------------------------------------------------------
// Aerodynamic heating
// ---------------------------------------------------------------------------

/// Convective heating power-flux proxy, W: 1/2 * rho * v^3 * Cd * A_eff.
pub fn aerodynamic_heating(
    velocity: &Vector3<f64>,
    altitude: f64,
    angle_deg: f64,
    airframe: &Airframe,
) -> f64 {
    let speed = velocity.norm();
    if speed < MIN_SPEED {
        return 0.0;
    }

    let atmo = atmosphere::conditions(altitude);
    let mach = speed / atmo.sound_speed;
    let cd = airframe.drag_coefficient_at(mach);
    let area = effective_area(airframe.cross_section(), angle_deg);

    0.5 * atmo.density * speed.powi(3) * cd * area
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
