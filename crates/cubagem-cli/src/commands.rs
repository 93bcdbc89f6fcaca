//! Command handlers

use crate::cli::{CargoArgs, Cli, Commands};
use crate::output::{output_fleet, output_result};
use cubagem_app::app::{run_evaluation, EvaluationRequest};
use cubagem_app::config::Config;
use cubagem_app::export::export_to_excel;
use cubagem_app::fleet::open_fleet;
use cubagem_app::report::guide_text;
use cubagem_domain::model::AggregateResult;
use cubagem_types::{OutputFormat, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Evaluate {
            cargo,
            export,
            chart,
        } => {
            let show_chart = chart.unwrap_or(config.show_chart);
            cmd_evaluate(&config, cargo, export.as_deref(), show_chart, output_format)
        }

        Commands::Fleet { fleet } => {
            let fleet_file = fleet.as_deref().or(config.fleet_file.as_deref());
            cmd_fleet(fleet_file, output_format)
        }

        Commands::Export { results, output } => cmd_export(&config, results, output.clone()),

        Commands::Config {
            show,
            set_output,
            set_fleet_file,
            clear_fleet_file,
            set_chart,
            set_export_name,
            reset,
        } => cmd_config(
            cli.config.as_deref(),
            config,
            *show,
            *set_output,
            set_fleet_file.clone(),
            *clear_fleet_file,
            *set_chart,
            set_export_name.clone(),
            *reset,
        ),

        Commands::Guide => {
            print!("{}", guide_text());
            Ok(())
        }
    }
}

fn cmd_evaluate(
    config: &Config,
    cargo: &CargoArgs,
    export: Option<&Path>,
    show_chart: bool,
    output_format: OutputFormat,
) -> Result<()> {
    let fleet_file = cargo.fleet.as_deref().or(config.fleet_file.as_deref());
    let catalog = open_fleet(fleet_file)?;

    let request = EvaluationRequest::new(cargo.length, cargo.width, cargo.height, cargo.unit_weight)
        .with_vehicles(cargo.vehicles.iter().cloned());
    let result = run_evaluation(&request, &catalog)?;

    output_result(output_format, &result, show_chart)?;

    if let Some(path) = export {
        export_to_excel(&result, path)?;
        if output_format == OutputFormat::Table {
            println!("\nExported to: {}", path.display());
        }
    }

    Ok(())
}

fn cmd_fleet(fleet_file: Option<&Path>, output_format: OutputFormat) -> Result<()> {
    let catalog = open_fleet(fleet_file)?;
    output_fleet(output_format, &catalog)
}

fn cmd_export(config: &Config, results_path: &Path, output: Option<PathBuf>) -> Result<()> {
    // Load results
    let content = std::fs::read_to_string(results_path)?;
    let result: AggregateResult = serde_json::from_str(&content)?;

    // Determine output path
    let output_path = output.unwrap_or_else(|| results_path.with_file_name(&config.export_file_name));

    export_to_excel(&result, &output_path)?;
    info!(source = %results_path.display(), "exported evaluation result");

    println!("Exported to: {}", output_path.display());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    config_path: Option<&Path>,
    mut config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_fleet_file: Option<PathBuf>,
    clear_fleet_file: bool,
    set_chart: Option<bool>,
    set_export_name: Option<String>,
    reset: bool,
) -> Result<()> {
    let save = |config: &Config| match config_path {
        Some(path) => config.save_to(path),
        None => config.save(),
    };

    if reset {
        let config = Config::default();
        save(&config)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_fleet_file {
        // fail early on a broken fleet file
        open_fleet(Some(&path))?;
        config.fleet_file = Some(path);
        modified = true;
    }

    if clear_fleet_file {
        config.fleet_file = None;
        modified = true;
    }

    if let Some(show_chart) = set_chart {
        config.show_chart = show_chart;
        modified = true;
    }

    if let Some(name) = set_export_name {
        config.export_file_name = name;
        modified = true;
    }

    if modified {
        save(&config)?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("\n{}", config);
    }

    Ok(())
}
