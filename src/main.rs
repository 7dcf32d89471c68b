use orbitsim::{DestructionEvent, OrbitSimulator, Scenario, ScenarioConfig};

use clap::Parser;
use anyhow::Result;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Headless scenario runner: loads a YAML scenario, steps the simulator
/// at a fixed frame rate, and reports destruction events and the final
/// body count. The interactive front end drives the same API.
#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Number of frames to simulate
    #[arg(short = 'n', long, default_value_t = 3600)]
    steps: usize,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg);

    let mut simulator = OrbitSimulator::new(
        scenario.params,
        Box::new(|event: DestructionEvent| {
            info!(
                "destruction at ({:.1}, {:.1}), speed {:.1}",
                event.position.x,
                event.position.y,
                event.velocity.norm()
            );
        }),
    );

    for body in scenario.bodies {
        simulator.add_custom_body(body);
    }

    let dt = 1.0 / 60.0;
    for _ in 0..args.steps {
        simulator.step(dt, scenario.viewport);
    }

    println!(
        "simulated {} frames: {} bodies remain",
        args.steps,
        simulator.body_count()
    );

    Ok(())
}
