use nalgebra::Vector3;
use tracing::trace;

use crate::airframe::Airframe;
use crate::atmosphere;
use crate::drag;
use crate::forces;
use crate::kinematics::{self, FlowRegime};
use crate::lift;

// ---------------------------------------------------------------------------
// Per-evaluation state
// ---------------------------------------------------------------------------

/// Instantaneous flight condition supplied by the trajectory integrator,
/// one per evaluation. Plain values; nothing here is retained between calls.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightState {
    pub velocity: Vector3<f64>,         // m/s
    pub altitude: f64,                  // m
    pub angle_deg: f64,                 // orientation angle, deg
    pub mass: f64,                      // kg
    pub wind: Option<Vector3<f64>>,     // m/s, air-mass motion
    pub temperature: Option<f64>,       // K, overrides the ambient profile
}

impl FlightState {
    /// Still air, ambient temperature.
    pub fn new(velocity: Vector3<f64>, altitude: f64, angle_deg: f64, mass: f64) -> Self {
        Self {
            velocity,
            altitude,
            angle_deg,
            mass,
            wind: None,
            temperature: None,
        }
    }
}

/// Force components for one evaluation, in N (heating in W). A snapshot:
/// summing them into a net force is the integrator's job.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForceBreakdown {
    pub drag: Vector3<f64>,
    pub lift: Vector3<f64>,
    pub gravity: Vector3<f64>,
    pub coriolis: Vector3<f64>,
    pub heating: f64,
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Compute every force component for one flight state.
///
/// Drag goes through the wind-relative, regime-switched path; the
/// temperature override (when present) replaces the ambient value in the
/// viscous branch. Buoyancy is excluded here because it needs a displaced
/// volume the flight state does not carry; call
/// [`forces::buoyancy_force`] directly.
pub fn evaluate(airframe: &Airframe, flight: &FlightState) -> ForceBreakdown {
    let temperature = flight
        .temperature
        .unwrap_or_else(|| atmosphere::temperature(flight.altitude));
    let air_relative = flight.velocity - flight.wind.unwrap_or_else(Vector3::zeros);

    let drag = drag::total_drag(
        &air_relative,
        flight.altitude,
        flight.angle_deg,
        temperature,
        airframe,
    );
    let lift = lift::lift_force(&flight.velocity, flight.altitude, flight.angle_deg, airframe);
    let gravity = forces::gravity_force(flight.altitude, flight.mass);
    let coriolis = forces::coriolis_force(&flight.velocity, flight.mass);
    let heating =
        forces::aerodynamic_heating(&flight.velocity, flight.altitude, flight.angle_deg, airframe);

    let mach = kinematics::mach_number(&air_relative, flight.altitude);
    let re = kinematics::reynolds_number(&air_relative, flight.altitude, airframe.cross_section());
    trace!(
        "force evaluation: alt={:.0} m mach={:.3} re={:.0} regime={:?}",
        flight.altitude,
        mach,
        re,
        FlowRegime::of(re)
    );

    ForceBreakdown {
        drag,
        lift,
        gravity,
        coriolis,
        heating,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn airframe() -> Airframe {
        Airframe::new(0.295, 0.007_854).unwrap()
    }

    #[test]
    fn at_rest_only_gravity_remains() {
        let flight = FlightState::new(Vector3::zeros(), 0.0, 0.0, 5.0);
        let out = evaluate(&airframe(), &flight);
        assert_eq!(out.drag, Vector3::zeros());
        assert_eq!(out.lift, Vector3::zeros());
        assert_eq!(out.coriolis, Vector3::zeros());
        assert_eq!(out.heating, 0.0);
        assert!(out.gravity.z < 0.0);
    }

    #[test]
    fn sea_level_transonic_scenario() {
        // 300 m/s at sea level is Mach ~0.88, inside the transonic drag rise
        let flight = FlightState::new(Vector3::new(300.0, 0.0, 0.0), 0.0, 0.0, 5.0);
        let out = evaluate(&airframe(), &flight);

        let mach = kinematics::mach_number(&flight.velocity, 0.0);
        assert_relative_eq!(mach, 0.88, epsilon = 0.01);

        let cd = drag::dynamic_drag_coefficient(mach);
        assert!(cd > 0.295 && cd < 0.295 + 1.5 * 0.4);

        assert!(out.drag.x < 0.0);
        assert!(out.heating > 0.0);
    }

    #[test]
    fn wind_changes_drag_but_not_lift_or_heating() {
        let mut flight = FlightState::new(Vector3::new(80.0, 0.0, 0.0), 0.0, 4.0, 5.0);
        let calm = evaluate(&airframe(), &flight);
        flight.wind = Some(Vector3::new(-15.0, 0.0, 0.0));
        let windy = evaluate(&airframe(), &flight);

        assert!(windy.drag.norm() > calm.drag.norm());
        assert_eq!(windy.lift, calm.lift);
        assert_eq!(windy.heating, calm.heating);
    }

    #[test]
    fn temperature_override_feeds_the_viscous_branch() {
        // Slow, small airframe: Reynolds sits in the laminar regime, so the
        // Stokes branch picks up the override through viscosity
        let af = Airframe::new(0.295, 1e-6).unwrap();
        let mut flight = FlightState::new(Vector3::new(0.05, 0.0, 0.0), 0.0, 0.0, 0.001);
        let ambient = evaluate(&af, &flight);
        flight.temperature = Some(400.0);
        let hot = evaluate(&af, &flight);
        assert!(hot.drag.norm() > ambient.drag.norm()); // air is more viscous when hot
    }

    #[test]
    fn breakdown_components_stay_separate() {
        let flight = FlightState::new(Vector3::new(120.0, 0.0, 40.0), 2_000.0, 6.0, 8.0);
        let out = evaluate(&airframe(), &flight);
        // Gravity is purely vertical, Coriolis purely horizontal here
        assert_eq!(out.gravity.x, 0.0);
        assert_eq!(out.coriolis.z, 0.0);
        assert!(out.drag.dot(&flight.velocity) < 0.0);
    }
}
