// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------
// Every empirical value used by the model lives here so it can be checked
// against its reference source in one place.

/// Standard gravitational acceleration, m/s^2.
pub const G0: f64 = 9.80665;

/// Mean Earth radius, m.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Earth mass, kg.
pub const EARTH_MASS: f64 = 5.972e24;

/// Newtonian gravitational constant, m^3/(kg·s^2).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Earth's rotation rate about its axis, rad/s.
pub const EARTH_ANGULAR_VELOCITY: f64 = 7.292_115_9e-5;

/// Specific gas constant for dry air, J/(kg·K).
pub const R_AIR: f64 = 287.05;

/// Universal gas constant, J/(mol·K).
pub const R_UNIVERSAL: f64 = 8.314_462_618;

/// Molar mass of dry air, kg/mol.
pub const MOLAR_MASS_AIR: f64 = 0.028_964_4;

/// Ratio of specific heats for air.
pub const GAMMA: f64 = 1.4;

/// Sea-level standard temperature, K.
pub const T0: f64 = 288.15;

/// Sea-level standard pressure, Pa.
pub const P0: f64 = 101_325.0;

/// Sea-level standard air density, kg/m^3.
pub const RHO0: f64 = 1.225;

/// Tropospheric temperature lapse rate, K/m.
pub const LAPSE_RATE: f64 = 0.0065;

/// Dynamic viscosity of air at `T0`, Pa·s (Sutherland reference value).
pub const MU0: f64 = 1.7894e-5;

/// Sutherland's constant for air, K.
pub const SUTHERLAND_C: f64 = 110.4;

// ---------------------------------------------------------------------------
// Model coefficients and numerical guards
// ---------------------------------------------------------------------------

/// Baseline subsonic drag coefficient for the reference projectile shape.
pub const DRAG_COEFF_BASE: f64 = 0.295;

/// Mach number where transonic drag rise begins.
pub const MACH_DRAG_RISE: f64 = 0.8;

/// Mach number where the flow is fully supersonic.
pub const MACH_SUPERSONIC: f64 = 1.2;

/// Drag-rise slope through the transonic band, per Mach.
pub const TRANSONIC_DRAG_SLOPE: f64 = 1.5;

/// Steeper drag slope once the supersonic threshold is crossed, per Mach.
pub const SUPERSONIC_DRAG_SLOPE: f64 = 2.0;

/// Fraction of the supersonic slope carried into the logarithmic tail.
pub const SUPERSONIC_LOG_FACTOR: f64 = 0.2;

/// Mach number where compressibility corrections to lift start.
pub const MACH_COMPRESSIBLE: f64 = 0.7;

/// Thin-airfoil lift-curve slope, per radian.
pub const LIFT_SLOPE: f64 = 2.0 * std::f64::consts::PI;

/// Critical angle of attack beyond which the stall model applies, deg.
pub const STALL_ANGLE_DEG: f64 = 15.0;

/// Maximum lift coefficient; also the clamp bound on the final value.
pub const CL_MAX: f64 = 1.8;

/// Quadratic post-stall lift drop-off, per deg^2.
pub const STALL_DROP_RATE: f64 = 0.1;

/// Reynolds number scale of the low-Re lift attenuation factor.
pub const LIFT_REYNOLDS_SCALE: f64 = 1.0e6;

/// Reynolds number below which the flow is treated as laminar and drag
/// follows the Stokes model.
pub const LAMINAR_REYNOLDS_LIMIT: f64 = 1000.0;

/// Speed below which drag and lift short-circuit to zero instead of
/// normalizing a near-zero velocity vector, m/s.
pub const MIN_SPEED: f64 = 1e-3;

/// Density below which terminal velocity is reported as infinite, kg/m^3.
pub const MIN_DENSITY: f64 = 1e-4;
