//! Life-Course Simulation Runner
//!
//! Runs one persona from start age to end age against the built-in
//! catalogs, printing applied events and illness notifications, and
//! writing the timeline as JSONL.

use clap::Parser;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use sim_core::{Background, EngineConfig, Simulation, TimelineLogger};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "life_sim")]
#[command(about = "A probabilistic life-course simulator")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Age at which the run starts
    #[arg(long, default_value_t = 0)]
    start_age: u32,

    /// Age at which the run stops
    #[arg(long, default_value_t = 80)]
    end_age: u32,

    /// Optional tuning file overriding the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Timeline output path
    #[arg(long, default_value = "output/timeline.jsonl")]
    timeline: PathBuf,

    /// Only print years in which something happened
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match EngineConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Could not load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };
    config.simulation.seed = Some(args.seed);
    config.simulation.start_age = args.start_age;
    config.simulation.end_age = args.end_age;

    println!("Life-Course Simulator");
    println!("=====================");
    println!("Seed: {}", args.seed);
    println!("Ages: {} to {}", args.start_age, args.end_age);

    let (events, illnesses) = sim_core::setup::default_catalogs();
    let summary = sim_core::setup::summarize(&events, &illnesses);
    println!(
        "Catalogs: {} generic, {} personal, {} coping events; {} illnesses",
        summary.generic, summary.personal, summary.coping, summary.illnesses
    );
    println!();

    let pacing = Duration::from_millis(config.events.event_pacing_ms);
    let mut sim = match Simulation::new(Background::default(), config, events, illnesses) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Could not start simulation: {}", e);
            std::process::exit(1);
        }
    };

    while !sim.is_finished() {
        let outcome = sim.run_step();

        if !args.quiet || !outcome.applied.is_empty() || !outcome.notifications.is_empty() {
            let metrics = &sim.state().metrics;
            println!(
                "[Age {:>3}] stress {:>5.1}  mood {:>6.1}  belonging {:>5.1}",
                outcome.age, metrics.stress, metrics.mood, metrics.social_belonging
            );
        }
        for event in &outcome.applied {
            println!("          - {} ({})", event.name, event.category);
            if !pacing.is_zero() {
                // Presentation pacing only; state is already mutated
                thread::sleep(pacing);
            }
        }
        for notification in &outcome.notifications {
            println!("          ! {}", notification.message);
        }
    }

    println!();
    println!(
        "Simulation complete: {} years, {} traumatic events, {} illnesses still active.",
        sim.timeline().len(),
        sim.state().trauma_ages.len(),
        sim.state().active_illness_count()
    );

    if let Some(parent) = args.timeline.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Warning: could not create output directory: {}", e);
        }
    }
    match TimelineLogger::new(&args.timeline) {
        Ok(mut logger) => {
            if let Err(e) = logger.log_all(sim.timeline()) {
                eprintln!("Warning: could not write timeline: {}", e);
            } else {
                println!(
                    "Wrote {} year records to {}",
                    logger.line_count(),
                    args.timeline.display()
                );
            }
        }
        Err(e) => eprintln!("Warning: could not open {}: {}", args.timeline.display(), e),
    }
}
