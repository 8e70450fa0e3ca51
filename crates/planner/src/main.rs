//! `hydro-plan`: print the measurements, materials and cut list of a rig.

mod args;
mod summary;

use anyhow::{bail, Result};
use bom_report::cut_list_text;
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use wasm_bridge::{dispatch, PlannerState, PlannerToUi, UiToPlanner};

use args::Cli;
use summary::{scene_summary, section};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let params = cli.parameters()?;
    let options = cli.display_options();
    info!(?params, ?options, "planning rig");

    let mut state = PlannerState::new();
    let response = dispatch(&mut state, UiToPlanner::Plan { params, options });
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match response {
        PlannerToUi::Planned {
            warnings,
            scene,
            materials_text,
            measurements,
            cut_list,
            ..
        } => {
            for w in &warnings {
                warn!("{w}");
            }
            println!("{}", section("Measurements", &measurements.to_text()));
            println!("{}", section("Materials", &materials_text));
            println!("{}", section("Cut List", &cut_list_text(&cut_list)));
            print!("{}", section("Scene", &scene_summary(&scene)));
            Ok(())
        }
        PlannerToUi::Error { message, .. } => bail!(message),
        _ => bail!("unexpected response to a plan request"),
    }
}
