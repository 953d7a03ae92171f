use horologe_clock::SystemClock;
use horologe_display::{SurfaceRegistry, TerminalSurface};
use horologe_runner::{ClockRefresher, RefresherConfig, RunnerConfig, banner};
use log::info;
use std::sync::Arc;

fn print_help() {
    eprintln!(
        r#"Horologe - continuously updating terminal clock

USAGE:
    horologe [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter

EXAMPLES:
    # Run with defaults (1 s refresh)
    horologe

    # Run with config file
    horologe --config config.json
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = if let Some(path) = config_path {
        info!("Loading configuration from: {}", path);
        RunnerConfig::from_file(&path)?
    } else {
        RunnerConfig::default()
    };

    banner::announce_ready();
    info!("Surface: {}", config.surface_id);
    info!("Tick interval: {} ms", config.tick_interval_ms);

    let mut registry = SurfaceRegistry::new();
    registry.register(Arc::new(TerminalSurface::stdout(&config.surface_id)));

    // A missing surface is a startup failure, never a silent no-op
    let surface = registry.get(&config.surface_id)?;

    let refresher = ClockRefresher::with_config(
        Arc::new(SystemClock::new()),
        surface,
        RefresherConfig {
            tick_interval: config.tick_interval(),
        },
    );

    refresher.run().await?;
    Ok(())
}
