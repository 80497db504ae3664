use nalgebra::Vector3;

use aerodyn::{atmosphere, drag, forces, kinematics};
use aerodyn::{evaluate, Airframe, FlightState};

fn main() {
    // -----------------------------------------------------------------------
    // Reference projectile: 10 cm diameter, baseline drag coefficient
    // -----------------------------------------------------------------------
    let airframe = Airframe::new(0.295, 0.007_854).expect("valid reference airframe");
    let mass = 5.0; // kg

    println!();
    println!("====================================================================");
    println!("  ATMOSPHERIC FLIGHT DYNAMICS — reference projectile");
    println!("====================================================================");
    println!();
    println!(
        "  Cd (base):     {:>8.3}       Area:        {:>9.6} m^2",
        airframe.drag_coefficient(),
        airframe.cross_section()
    );
    println!("  Mass:          {:>8.1} kg", mass);
    println!();

    // -----------------------------------------------------------------------
    // Atmosphere profile
    // -----------------------------------------------------------------------
    println!("  Atmosphere");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>9}  {:>8}  {:>12}  {:>9}  {:>11}",
        "alt (m)", "T (K)", "rho (kg/m^3)", "a (m/s)", "mu (Pa·s)"
    );
    for &h in &[
        0.0, 5_000.0, 11_000.0, 20_000.0, 32_000.0, 47_000.0, 60_000.0, 71_000.0, 80_000.0,
    ] {
        let atmo = atmosphere::conditions(h);
        println!(
            "  {:>9.0}  {:>8.2}  {:>12.6}  {:>9.2}  {:>11.3e}",
            h, atmo.temperature, atmo.density, atmo.sound_speed, atmo.viscosity
        );
    }
    println!();

    // -----------------------------------------------------------------------
    // Force breakdown across the speed envelope
    // -----------------------------------------------------------------------
    for &h in &[0.0, 15_000.0] {
        println!("  Forces at {:.0} m altitude", h);
        println!("  ──────────────────────────────────────────────────────────────────");
        println!(
            "  {:>9}  {:>7}  {:>11}  {:>11}  {:>11}  {:>11}",
            "v (m/s)", "Mach", "drag (N)", "lift (N)", "Cd", "heat (W)"
        );

        for &speed in &[50.0, 150.0, 300.0, 500.0, 800.0] {
            let velocity = Vector3::new(speed, 0.0, 0.0);
            let flight = FlightState::new(velocity, h, 5.0, mass);
            let out = evaluate(&airframe, &flight);
            let mach = kinematics::mach_number(&velocity, h);

            println!(
                "  {:>9.0}  {:>7.2}  {:>11.2}  {:>11.2}  {:>11.3}  {:>11.3e}",
                speed,
                mach,
                out.drag.norm(),
                out.lift.norm(),
                drag::dynamic_drag_coefficient(mach),
                out.heating
            );
        }
        println!();
    }

    // -----------------------------------------------------------------------
    // Terminal velocity and long-range effects
    // -----------------------------------------------------------------------
    println!("  Terminal velocity");
    println!("  ──────────────────────────────────────────────────────────────────");
    for &h in &[0.0, 10_000.0, 30_000.0, 90_000.0] {
        let vt = drag::terminal_velocity(mass, h, &airframe);
        if vt.is_finite() {
            println!("  {:>9.0} m   {:>9.1} m/s", h, vt);
        } else {
            println!("  {:>9.0} m   (near-vacuum, unbounded)", h);
        }
    }
    println!();

    let v = Vector3::new(300.0, 0.0, 0.0);
    let coriolis = forces::coriolis_force(&v, mass);
    println!(
        "  Coriolis at 300 m/s eastward: ({:+.4}, {:+.4}, {:+.4}) N",
        coriolis.x, coriolis.y, coriolis.z
    );
    println!(
        "  Gravity at sea level:         {:.4} m/s^2",
        forces::gravity_accel(0.0).norm()
    );
    println!(
        "  Buoyancy on 1 m^3 at 0 m:     {:+.2} N up",
        forces::buoyancy_force(0.0, 1.0).z
    );
    println!("====================================================================");
    println!();
}
