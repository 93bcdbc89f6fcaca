//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use cubagem_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cubagem")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Vehicle cubage calculator: how many cargo units fit in each vehicle")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Cargo measurements
#[derive(Args, Debug, Clone)]
pub struct CargoArgs {
    /// Cargo length in meters
    #[arg(long, short = 'l')]
    pub length: f64,

    /// Cargo width in meters
    #[arg(long, short = 'w')]
    pub width: f64,

    /// Cargo height in meters
    #[arg(long = "height", short = 'H')]
    pub height: f64,

    /// Weight of one unit in kilograms
    #[arg(long = "weight", short = 'k')]
    pub unit_weight: f64,

    /// Restrict to a vehicle (repeatable). Matching ignores case and accents.
    #[arg(long = "vehicle")]
    pub vehicles: Vec<String>,

    /// TOML fleet file replacing the built-in catalog (overrides config)
    #[arg(long)]
    pub fleet: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate how many units fit in each vehicle
    Evaluate {
        #[command(flatten)]
        cargo: CargoArgs,

        /// Also write the viable vehicles to an Excel file
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,

        /// Show the quantity bar chart; `--chart false` hides it (overrides config)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        chart: Option<bool>,
    },

    /// List the fleet catalog
    Fleet {
        /// TOML fleet file replacing the built-in catalog (overrides config)
        #[arg(long)]
        fleet: Option<PathBuf>,
    },

    /// Export results to Excel
    Export {
        /// Path to a JSON result produced by `evaluate --format json`
        results: PathBuf,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the fleet file used instead of the built-in catalog
        #[arg(long)]
        set_fleet_file: Option<PathBuf>,

        /// Go back to the built-in catalog
        #[arg(long)]
        clear_fleet_file: bool,

        /// Enable/disable the bar chart
        #[arg(long)]
        set_chart: Option<bool>,

        /// Set the default export file name
        #[arg(long)]
        set_export_name: Option<String>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },

    /// Show usage notes
    Guide,
}
