use nalgebra::Vector3;

use crate::airframe::Airframe;
use crate::atmosphere;
use crate::constants::{
    CL_MAX, LIFT_REYNOLDS_SCALE, LIFT_SLOPE, MACH_COMPRESSIBLE, MACH_SUPERSONIC, MIN_SPEED,
    STALL_ANGLE_DEG, STALL_DROP_RATE,
};
use crate::drag::effective_area;
use crate::kinematics;

// ---------------------------------------------------------------------------
// Regimes
// ---------------------------------------------------------------------------

/// Angle-of-attack regime: linear thin-airfoil slope or post-stall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackRegime {
    Linear,
    Stalled,
}

impl AttackRegime {
    /// Hard switch past the critical angle; no blending.
    pub fn of(angle_deg: f64) -> Self {
        if angle_deg > STALL_ANGLE_DEG {
            Self::Stalled
        } else {
            Self::Linear
        }
    }
}

/// Compressibility regime for the lift coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compressibility {
    Incompressible,
    Transonic,
    Supersonic,
}

impl Compressibility {
    /// Incompressible below Mach 0.7, transonic to 1.2, supersonic beyond.
    pub fn of(mach: f64) -> Self {
        if mach < MACH_COMPRESSIBLE {
            Self::Incompressible
        } else if mach < MACH_SUPERSONIC {
            Self::Transonic
        } else {
            Self::Supersonic
        }
    }
}

// ---------------------------------------------------------------------------
// Lift coefficient
// ---------------------------------------------------------------------------

/// Prandtl-Glauert factor 1/sqrt(1 - M^2), capped where the linear theory
/// diverges approaching Mach 1. The cap keeps the transonic band finite;
/// the final clamp bounds the coefficient either way.
fn prandtl_glauert(mach: f64) -> f64 {
    if mach >= 0.99 {
        return 10.0;
    }
    1.0 / (1.0 - mach * mach).sqrt()
}

/// Lift coefficient from angle of attack, Mach, and Reynolds number.
///
/// Thin-airfoil slope (2*pi per radian, zero-lift offset 0) up to the
/// critical angle, quadratic drop-off past stall, compressibility
/// correction by Mach regime, low-Reynolds attenuation, and a final clamp
/// to the maximum lift coefficient.
pub fn lift_coefficient(angle_deg: f64, velocity: &Vector3<f64>, altitude: f64, area: f64) -> f64 {
    let alpha = angle_deg.to_radians();

    let cl = match AttackRegime::of(angle_deg) {
        AttackRegime::Linear => LIFT_SLOPE * alpha,
        AttackRegime::Stalled => {
            CL_MAX - STALL_DROP_RATE * (angle_deg - STALL_ANGLE_DEG).powi(2)
        }
    };

    let mach = kinematics::mach_number(velocity, altitude);
    let cl = match Compressibility::of(mach) {
        Compressibility::Incompressible => cl,
        Compressibility::Transonic => cl * prandtl_glauert(mach),
        // Supersonic linear theory replaces the subsonic value outright
        Compressibility::Supersonic => 4.0 * alpha / (mach * mach - 1.0).sqrt(),
    };

    let re = kinematics::reynolds_number(velocity, altitude, area);
    let cl = cl * (1.0 - (-re / LIFT_REYNOLDS_SCALE).exp());

    cl.clamp(-CL_MAX, CL_MAX)
}

/// Lift force, N, perpendicular to the velocity in the horizontal sense:
/// directed along cross(v_hat, up).
///
/// Returns the zero vector below the minimum-speed guard.
pub fn lift_force(
    velocity: &Vector3<f64>,
    altitude: f64,
    angle_deg: f64,
    airframe: &Airframe,
) -> Vector3<f64> {
    let speed = velocity.norm();
    if speed < MIN_SPEED {
        return Vector3::zeros();
    }

    let cl = lift_coefficient(angle_deg, velocity, altitude, airframe.cross_section());
    let atmo = atmosphere::conditions(altitude);
    let area = effective_area(airframe.cross_section(), angle_deg);
    let magnitude = kinematics::dynamic_pressure(atmo.density, speed) * cl * area;

    velocity.normalize().cross(&Vector3::z()) * magnitude
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
