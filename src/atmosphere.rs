use crate::constants::{G0, GAMMA, LAPSE_RATE, MU0, P0, R_AIR, SUTHERLAND_C, T0};

// ---------------------------------------------------------------------------
// Layered standard atmosphere (sea level through the lower thermosphere)
// ---------------------------------------------------------------------------

/// Atmospheric properties at a given geometric altitude.
///
/// A pure function of altitude; carries no identity and is cheap to copy.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atmosphere {
    pub temperature: f64, // K
    pub pressure: f64,    // Pa
    pub density: f64,     // kg/m^3
    pub sound_speed: f64, // m/s
    pub viscosity: f64,   // Pa·s
}

/// Full atmospheric state at an altitude.
///
/// Seven-layer temperature profile, each layer inclusive on its lower edge
/// and exclusive on its upper edge so exactly one branch fires per input.
/// Negative altitudes clamp to sea level. Altitudes far above the defined
/// layers stay mathematically defined but physically meaningless; the
/// linear thermosphere extrapolation eventually drives temperature below
/// zero, at which point density and sound speed report zero.
pub fn conditions(altitude: f64) -> Atmosphere {
    let h = altitude.max(0.0);

    let (temperature, pressure) = if h < 11_000.0 {
        // Troposphere: lapse -6.5 K/km
        gradient_layer(h, 0.0, T0, -LAPSE_RATE, P0)
    } else if h < 20_000.0 {
        // Tropopause: isothermal 216.65 K
        isothermal_layer(h, 11_000.0, 216.65, 22_632.1)
    } else if h < 32_000.0 {
        // Stratosphere, lower: lapse +1.0 K/km
        gradient_layer(h, 20_000.0, 216.65, 0.001, 5_474.89)
    } else if h < 47_000.0 {
        // Stratosphere, upper: lapse +2.8 K/km
        gradient_layer(h, 32_000.0, 228.65, 0.0028, 868.019)
    } else if h < 51_000.0 {
        // Mesosphere, lower: isothermal 270.65 K
        isothermal_layer(h, 47_000.0, 270.65, 110.906)
    } else if h < 71_000.0 {
        // Mesosphere, upper: lapse -2.8 K/km
        gradient_layer(h, 51_000.0, 270.65, -0.0028, 66.9389)
    } else {
        // Thermosphere: linear approximation continuing from 71 km
        gradient_layer(h, 71_000.0, 214.65, -0.002, 3.956_42)
    };

    let (density, sound_speed) = if temperature > 0.0 {
        (
            pressure / (R_AIR * temperature),
            (GAMMA * R_AIR * temperature).sqrt(),
        )
    } else {
        (0.0, 0.0)
    };

    Atmosphere {
        temperature,
        pressure,
        density,
        sound_speed,
        viscosity: viscosity(temperature),
    }
}

/// Ambient temperature at an altitude, K.
pub fn temperature(altitude: f64) -> f64 {
    conditions(altitude).temperature
}

/// Static pressure at an altitude, Pa.
pub fn pressure(altitude: f64) -> f64 {
    conditions(altitude).pressure
}

/// Air density at an altitude, kg/m^3.
///
/// Hydrostatic within each temperature layer; in the troposphere this is
/// the barometric formula rho0 * (1 - L*h/T0)^(g0*M/(R*L) - 1).
pub fn air_density(altitude: f64) -> f64 {
    conditions(altitude).density
}

/// Local speed of sound sqrt(gamma * R * T), m/s.
pub fn sound_speed(altitude: f64) -> f64 {
    conditions(altitude).sound_speed
}

/// Dynamic viscosity of air at a temperature via Sutherland's law, Pa·s.
///
/// Meaningless for temperatures at or below 0 K (the formula returns NaN
/// there); callers in that regime are already outside the model envelope.
pub fn viscosity(temperature: f64) -> f64 {
    MU0 * (temperature / T0).powf(1.5) * (T0 + SUTHERLAND_C) / (temperature + SUTHERLAND_C)
}

// ---------------------------------------------------------------------------
// Layer helpers
// ---------------------------------------------------------------------------

/// Gradient layer: T = T_base + lapse * (h - h_base), hydrostatic pressure.
fn gradient_layer(h: f64, h_base: f64, t_base: f64, lapse: f64, p_base: f64) -> (f64, f64) {
    let t = t_base + lapse * (h - h_base);
    let p = p_base * (t / t_base).powf(-G0 / (lapse * R_AIR));
    (t, p)
}

/// Isothermal layer: constant T, exponentially decaying pressure.
fn isothermal_layer(h: f64, h_base: f64, t: f64, p_base: f64) -> (f64, f64) {
    let p = p_base * ((-G0 / (R_AIR * t)) * (h - h_base)).exp();
    (t, p)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
