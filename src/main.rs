use debris_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Debris release at the end of a recorded display line
    let track = vec![
        Waypoint::new(51.2724, -0.7851, 358.0),
        Waypoint::new(51.2748, -0.7813, 362.0),
        Waypoint::new(51.2760, -0.7770, 365.0),
    ];
    let anchor = GeodeticAnchor::from_trailing_points(&track, 65.0, 365.0)?;

    let config = SimulationConfig {
        mass: 120.0,
        frontal_area: 0.35,
        drag_coefficient: 1.1,
        air_density: AIR_DENSITY_SEA_LEVEL,
        gravity: GRAVITY,
        time_step: 0.01,
        airspeed_kt: 140.0,
        surface: Surface::Grass,
        include_ground_drag: true,
        bounce_threshold: 0.5,
    };

    println!(
        "Releasing {:.0} kg at {:.0} kt over {}",
        config.mass,
        config.airspeed_kt,
        config.surface.name()
    );
    println!();

    let simulation = DebrisSimulation::new(config, anchor)?;
    let report = simulation.run();

    println!("{}", report.summary);
    println!();
    println!(
        "Airborne path: {} points, ground run: {} points",
        report.airborne.len(),
        report.ground_run.len()
    );
    if let Some(rest) = report.ground_run.last().or_else(|| report.airborne.last()) {
        println!(
            "Final position: {:.6}°, {:.6}° at {:.1} m",
            rest.latitude, rest.longitude, rest.altitude
        );
    }

    // Relocate the recorded track onto a different runway heading
    let target_heading = 242.0;
    let relocated = rotate_route(&track, 51.2802, -0.7642, target_heading)?;
    let relocated = rebase_altitudes(&relocated, 65.0);

    println!();
    println!("Track relocated onto heading {:.1}°:", target_heading);
    for waypoint in &relocated {
        println!(
            "  {:.6}°, {:.6}° at {:.1} m above ground",
            waypoint.latitude, waypoint.longitude, waypoint.altitude
        );
    }

    Ok(())
}
