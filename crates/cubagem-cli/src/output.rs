//! Output formatting module

use cubagem_app::fleet::FleetCatalog;
use cubagem_app::report::{render_bar_chart, render_table};
use cubagem_domain::model::AggregateResult;
use cubagem_types::{OutputFormat, Result};

const CHART_WIDTH: usize = 40;

pub fn output_result(output_format: OutputFormat, result: &AggregateResult, show_chart: bool) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nCubage Result");
    println!("=============");
    print!("{}", render_table(result));

    if show_chart {
        let chart = render_bar_chart(result, CHART_WIDTH);
        if !chart.is_empty() {
            println!("\nMax quantity per vehicle");
            print!("{}", chart);
        }
    }

    Ok(())
}

pub fn output_fleet(output_format: OutputFormat, catalog: &FleetCatalog) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(catalog.profiles())?;
        println!("{}", content);
        return Ok(());
    }

    let name_width = catalog
        .profiles()
        .iter()
        .map(|v| v.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Vehicle".len());

    println!(
        "{:<nw$}  {:>8}  {:>8}  {:>8}  {:>10}  {:>15}",
        "Vehicle",
        "W (m)",
        "L (m)",
        "H (m)",
        "Vol (m³)",
        "Max weight (kg)",
        nw = name_width
    );
    println!("{}", "-".repeat(name_width + 2 + 8 + 2 + 8 + 2 + 8 + 2 + 10 + 2 + 15));
    for v in catalog.profiles() {
        println!(
            "{:<nw$}  {:>8.2}  {:>8.2}  {:>8.2}  {:>10.2}  {:>15.0}",
            v.name,
            v.width,
            v.length,
            v.height,
            v.volume(),
            v.max_weight,
            nw = name_width
        );
    }
    println!("\n{} vehicles", catalog.len());

    Ok(())
}
