use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use isochronic_core::{build_isochronic_map, load_network};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::AppError;

mod config;
mod error;
mod palette;

/// Warp a road network into an isochronic map and write it as GeoJSON
#[derive(Parser, Debug)]
#[command(name = "isochronic", version, about)]
struct Args {
    /// Path to the TOML configuration
    #[arg(short, long, default_value = "isochronic.toml")]
    config: PathBuf,
    /// Output path, overrides the configuration
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Worker threads for routing, overrides the configuration
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let mut config = AppConfig::from_file(&args.config)?;
    if let Some(output) = &args.output {
        config.output.clone_from(output);
    }
    if let Some(threads) = args.threads {
        config.solver.threads = threads;
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.solver.threads)
        .build_global()?;

    let map_config = config.map_config()?;
    let network = load_network(&config.input)?;
    let map = build_isochronic_map(network, &map_config)?;

    let geojson = map.to_geojson_string()?;
    std::fs::write(&config.output, geojson).map_err(|source| AppError::Write {
        path: config.output.clone(),
        source,
    })?;

    info!(
        "Wrote isochronic map with {} nodes and {} edges to {}",
        map.network.node_count(),
        map.network.edge_count(),
        config.output.display()
    );
    Ok(())
}
