mod cli;
mod config;
mod errors;

use clap::Parser;
use gridpath::{
    Coord,
    Grid,
    Solution,
    solve,
};
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::{
    Config,
    InputConfig,
    OutputConfig,
};

/// Nested-array record written to the output file.
#[derive(Debug, Serialize)]
struct OutputRecord {
    profit: Vec<Vec<f64>>,
    path: Vec<Vec<Vec<Coord>>>,
}

impl From<&Solution> for OutputRecord {
    fn from(solution: &Solution) -> Self {
        OutputRecord {
            profit: solution.profit.rows().map(|r| r.to_vec()).collect(),
            path: solution.path.rows().map(|r| r.to_vec()).collect(),
        }
    }
}

fn read_grid(path: &Path) -> Result<Grid, errors::CliError> {
    let file = match File::open(path) {
        Ok(x) => x,
        Err(e) => {
            return Err(errors::CliError::Io {
                source: e.to_string(),
                path: Some(path.to_string_lossy().to_string()),
            });
        }
    };
    let rows: Vec<Vec<f64>> = match serde_json::from_reader(file) {
        Ok(x) => x,
        Err(e) => {
            return Err(errors::CliError::ParseError { msg: e.to_string() });
        }
    };
    Ok(Grid::new(&rows)?)
}

fn main() -> std::result::Result<(), errors::CliError> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        ) // This uses RUST_LOG environment variable
        .init();

    // Parse command line arguments
    let args = Cli::parse();

    // Load and parse configuration
    let mut config = match args.config {
        Some(ref config_path) => {
            let conf = match std::fs::File::open(config_path) {
                Ok(x) => x,
                Err(e) => {
                    return Err(errors::CliError::Io {
                        source: e.to_string(),
                        path: Some(config_path.to_string_lossy().to_string()),
                    });
                }
            };
            let config: Result<Config, _> = serde_json::from_reader(conf);
            match config {
                Ok(x) => x,
                Err(e) => {
                    return Err(errors::CliError::ParseError { msg: e.to_string() });
                }
            }
        }
        None => Config::default(),
    };

    // Override config with command line arguments if provided
    if let Some(grid_file) = args.grid_file {
        config.input = Some(InputConfig::GridFile { path: grid_file });
    }
    if let Some(output) = args.output {
        config.output = Some(OutputConfig { path: output });
    }
    if config.input.is_none() {
        return Err(errors::CliError::Config {
            source: "No grid provided, please provide one in either the config file or with the --grid-file flag".to_string(),
        });
    }
    info!("Parsed configuration: {:#?}", config.clone());

    let grid = match config.input {
        Some(InputConfig::GridFile { path }) => read_grid(&path)?,
        None => {
            return Err(errors::CliError::Config {
                source: "No input specified".to_string(),
            });
        }
    };
    info!("Loaded {}x{} grid", grid.nrows(), grid.ncols());

    let solution = solve(&grid);
    info!("Terminal profit: {}", solution.terminal_profit());

    if args.heatmap {
        solution.display_heatmap(&grid);
    }

    if let Some(OutputConfig { path }) = config.output {
        let record = OutputRecord::from(&solution);
        let out_file = match File::create(&path) {
            Ok(x) => x,
            Err(e) => {
                return Err(errors::CliError::Io {
                    source: e.to_string(),
                    path: Some(path.to_string_lossy().to_string()),
                });
            }
        };
        match serde_json::to_writer_pretty(out_file, &record) {
            Ok(()) => info!("Wrote result tables to {:?}", path),
            Err(e) => {
                return Err(errors::CliError::Io {
                    source: e.to_string(),
                    path: Some(path.to_string_lossy().to_string()),
                });
            }
        }
    }

    Ok(())
}
