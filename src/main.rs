//! Ledge - Headless Runner
//!
//! Runs a scripted input sequence through the platformer simulation and
//! logs contact transitions. Set `RUST_LOG=debug` for per-step detail.
//!
//! Run `ledge --help` for options.

use std::path::PathBuf;

use clap::Parser;
use ledge_game::{InputScript, Level, Simulation, SimulationConfig, Snapshot};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Simulation config (JSON). Defaults are used when omitted.
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Level description (JSON). The built-in test course when omitted.
    #[clap(long, value_name = "FILE")]
    level: Option<PathBuf>,

    /// Input script (JSON). The demo script when omitted.
    #[clap(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Print every snapshot as a JSON line.
    #[clap(long)]
    dump: bool,
}

fn log_transition(previous: &Snapshot, current: &Snapshot) {
    let change = current.contacts.changes_since(&previous.contacts);
    if !change.any() {
        return;
    }

    if change.landed {
        log::info!("frame {}: landed at {:?}", current.frame, current.position);
    }
    if change.left_ground {
        log::info!("frame {}: airborne at {:?}", current.frame, current.position);
    }
    if change.hit_ceiling {
        log::info!("frame {}: hit ceiling", current.frame);
    }
    if change.hit_wall {
        log::info!("frame {}: hit wall", current.frame);
    }
    if change.slope_changed {
        log::info!(
            "frame {}: slope {:.1} -> {:.1} deg",
            current.frame,
            previous.contacts.slope_angle,
            current.contacts.slope_angle
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    let level = match &args.level {
        Some(path) => Level::load(path)?,
        None => Level::test_course(),
    };
    let script: InputScript = match &args.script {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => InputScript::demo(),
    };
    if script.is_empty() {
        return Err("input script has no frames".into());
    }

    let mut sim = Simulation::new(config, level)?;
    log::info!("running {} frames", script.len());

    let mut previous = sim.snapshot();
    for input in script.frames() {
        let snapshot = sim.step(&input);
        log_transition(&previous, &snapshot);
        if args.dump {
            println!("{}", serde_json::to_string(&snapshot)?);
        }
        previous = snapshot;
    }

    let last = sim.snapshot();
    log::info!(
        "finished at frame {}: position {:?}, grounded {}",
        last.frame,
        last.position,
        last.contacts.below
    );

    Ok(())
}
