use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the grid JSON file (will over-write the config file)
    #[arg(short, long)]
    pub grid_file: Option<PathBuf>,

    /// Path for the result JSON file (will over-write the config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Whether to render the solved grid as a terminal heatmap
    #[arg(long)]
    pub heatmap: bool,
}
