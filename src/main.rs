use block_collision::prelude::*;
use block_collision::script::parse_script;
use clap::Parser;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.validate()?;
    let mut rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    // Load scripted clicks before anything moves
    let events = match &args.script {
        Some(path) => parse_script(path)?,
        None => Vec::new(),
    };

    // Run simulation
    let mut sim = Simulation::from_args(&args, &mut rng);
    let elapsed = sim.run(args.ticks, &events, &mut rng);

    // Print results
    sim.print_summary(elapsed);

    Ok(())
}
