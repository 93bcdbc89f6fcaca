//! Text rendering of evaluation results

use cubagem_domain::model::{AggregateResult, ReportRow};

pub const FLEET_SITE_URL: &str = "https://jwmlogistica.com.br/frota/";

/// Usage notes shown by `cubagem guide`
pub fn guide_text() -> String {
    let mut text = String::new();
    text.push_str("Instructions\n");
    text.push_str("============\n\n");
    text.push_str("Enter the cargo dimensions (meters) and the weight of one unit (kg).\n");
    text.push_str("Optionally restrict the search to specific vehicles with --vehicle,\n");
    text.push_str("or leave it out to consider the whole fleet.\n\n");
    text.push_str("Vehicle names are matched ignoring case and accents.\n");
    text.push_str("Usable volume is 90% of each vehicle's geometric volume.\n\n");
    text.push_str(&format!("Fleet reference: {}\n", FLEET_SITE_URL));
    text
}

/// Table view of a result: cargo volume, then the viable rows or the exclusion reasons
pub fn render_table(result: &AggregateResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Cargo volume: {:.2} m³\n\n", result.cargo_volume));

    if result.all_excluded {
        out.push_str("The cargo exceeds the dimensions of every vehicle evaluated!\n");
        for (vehicle, reasons) in result.excluded() {
            for reason in reasons {
                out.push_str(&format!("  • {}: {}\n", vehicle, reason));
            }
        }
        return out;
    }

    let rows = result.rows();
    if rows.is_empty() {
        out.push_str("No vehicle can carry the cargo.\n");
        return out;
    }

    out.push_str(&format!(
        "Total possible quantity: {} units\n\n",
        result.total_quantity
    ));
    out.push_str(&render_rows(&rows));
    out
}

fn render_rows(rows: &[ReportRow]) -> String {
    let [h_vehicle, h_volume, h_qty, h_weight] = ReportRow::HEADERS;
    let name_width = rows
        .iter()
        .map(|r| r.vehicle.chars().count())
        .chain(std::iter::once(h_vehicle.chars().count()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<nw$}  {:>18}  {:>12}  {:>18}\n",
        h_vehicle,
        h_volume,
        h_qty,
        h_weight,
        nw = name_width
    ));
    out.push_str(&"-".repeat(name_width + 2 + 18 + 2 + 12 + 2 + 18));
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{:<nw$}  {:>18.2}  {:>12}  {:>18.2}\n",
            row.vehicle,
            row.cubic_volume,
            row.max_quantity,
            row.total_weight,
            nw = name_width
        ));
    }
    out
}

/// Horizontal bars of max quantity per viable vehicle, longest bar `width` cells
pub fn render_bar_chart(result: &AggregateResult, width: usize) -> String {
    let rows = result.rows();
    let Some(max) = rows.iter().map(|r| r.max_quantity).max().filter(|&m| m > 0) else {
        return String::new();
    };
    let name_width = rows.iter().map(|r| r.vehicle.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for row in &rows {
        let len = ((row.max_quantity as f64 / max as f64) * width as f64).round() as usize;
        out.push_str(&format!(
            "{:<nw$} | {} {}\n",
            row.vehicle,
            "█".repeat(len.max(1)),
            row.max_quantity,
            nw = name_width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{run_evaluation, EvaluationRequest};
    use crate::fleet::FleetCatalog;

    fn run(request: EvaluationRequest) -> AggregateResult {
        run_evaluation(&request, FleetCatalog::builtin()).unwrap()
    }

    #[test]
    fn test_table_lists_viable_rows() {
        let result = run(EvaluationRequest::new(1.0, 1.0, 1.0, 100.0).with_vehicles(["Fiorino", "Vuc"]));
        let table = render_table(&result);
        assert!(table.contains("Cargo volume: 1.00 m³"));
        assert!(table.contains("Total possible quantity:"));
        assert!(table.contains("Fiorino"));
        assert!(table.contains("Vuc"));
        assert!(table.contains("Max quantity"));
    }

    #[test]
    fn test_table_lists_reasons_when_nothing_fits() {
        let result = run(EvaluationRequest::new(3.0, 3.0, 3.0, 100.0).with_vehicles(["Fiorino"]));
        let table = render_table(&result);
        assert!(table.contains("exceeds the dimensions of every vehicle"));
        assert!(table.contains("Fiorino: length exceeds (3.00 m > 1.40 m)"));
        assert!(table.contains("Fiorino: width exceeds (3.00 m > 1.00 m)"));
        assert!(table.contains("Fiorino: height exceeds (3.00 m > 1.00 m)"));
    }

    #[test]
    fn test_table_no_capacity_notice() {
        let result = run(EvaluationRequest::new(0.5, 0.5, 0.5, 600.0).with_vehicles(["Fiorino"]));
        assert!(render_table(&result).contains("No vehicle can carry the cargo."));
    }

    #[test]
    fn test_bar_chart_scales_to_largest() {
        let result = run(EvaluationRequest::new(0.5, 0.5, 0.5, 1.0).with_vehicles(["Fiorino", "Carreta Rodo Trem"]));
        let chart = render_bar_chart(&result, 20);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches('█').count(), 20);
        assert_eq!(lines[1].matches('█').count(), 1);
    }

    #[test]
    fn test_bar_chart_empty_when_nothing_viable() {
        let result = run(EvaluationRequest::new(3.0, 3.0, 3.0, 1.0));
        assert!(render_bar_chart(&result, 20).is_empty());
    }

    #[test]
    fn test_guide_mentions_fleet_site() {
        assert!(guide_text().contains(FLEET_SITE_URL));
    }
}
