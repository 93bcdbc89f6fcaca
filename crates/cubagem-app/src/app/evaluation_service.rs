//! Evaluation Service - cargo against fleet use case
//!
//! 1. Validate the cargo measurements
//! 2. Resolve the requested vehicle names against the catalog
//! 3. Run the capacity evaluation
//!
//! The returned `AggregateResult` is immutable and handed to rendering or export.

use std::collections::BTreeSet;

use cubagem_domain::model::{AggregateResult, CargoSpec};
use cubagem_domain::service::evaluate;
use cubagem_types::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::fleet::FleetCatalog;

/// One "calculate" action as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Cargo length in meters
    pub length: f64,
    /// Cargo width in meters
    pub width: f64,
    /// Cargo height in meters
    pub height: f64,
    /// Weight of one unit in kilograms
    pub unit_weight: f64,
    /// Vehicle names to restrict to; empty means the whole fleet
    #[serde(default)]
    pub vehicles: Vec<String>,
}

impl EvaluationRequest {
    pub fn new(length: f64, width: f64, height: f64, unit_weight: f64) -> Self {
        Self {
            length,
            width,
            height,
            unit_weight,
            vehicles: Vec::new(),
        }
    }

    pub fn with_vehicles<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vehicles = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn cargo(&self) -> Result<CargoSpec> {
        CargoSpec::new(self.length, self.width, self.height, self.unit_weight)
    }
}

/// Map typed vehicle names to catalog names, failing on the first unknown one
pub fn resolve_filter(catalog: &FleetCatalog, names: &[String]) -> Result<BTreeSet<String>> {
    names
        .iter()
        .filter(|name| !name.trim().is_empty())
        .map(|name| {
            catalog
                .resolve(name)
                .map(str::to_string)
                .ok_or_else(|| Error::invalid(format!("unknown vehicle: '{}'", name)))
        })
        .collect()
}

/// Evaluate a request against a catalog
pub fn run_evaluation(request: &EvaluationRequest, catalog: &FleetCatalog) -> Result<AggregateResult> {
    let cargo = request.cargo()?;
    let filter = resolve_filter(catalog, &request.vehicles)?;

    let result = evaluate(&cargo, catalog.profiles(), Some(&filter))?;
    info!(
        evaluated = result.evaluated,
        viable = result.viable_reports.len(),
        total_quantity = result.total_quantity,
        all_excluded = result.all_excluded,
        "evaluation complete"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static FleetCatalog {
        FleetCatalog::builtin()
    }

    #[test]
    fn test_fiorino_single_cube() {
        let request = EvaluationRequest::new(1.0, 1.0, 1.0, 100.0).with_vehicles(["Fiorino"]);
        let result = run_evaluation(&request, catalog()).unwrap();
        assert_eq!(result.evaluated, 1);
        let report = &result.viable_reports[0];
        assert!((result.cargo_volume - 1.0).abs() < 1e-9);
        assert!((report.vehicle_volume - 1.4).abs() < 1e-9);
        assert_eq!(report.max_quantity, Some(1));
        assert!((report.total_weight.unwrap() - 100.0).abs() < 1e-9);
        assert_eq!(result.total_quantity, 1);
    }

    #[test]
    fn test_oversized_cargo_excluded_everywhere() {
        let request = EvaluationRequest::new(3.0, 3.0, 3.0, 50.0);
        let result = run_evaluation(&request, catalog()).unwrap();
        assert!(result.all_excluded);
        assert!(result.viable_reports.is_empty());
        assert_eq!(result.evaluated, 15);
        assert_eq!(result.excluded().count(), 15);
    }

    #[test]
    fn test_rodo_trem_small_boxes() {
        let request = EvaluationRequest::new(0.10, 0.10, 0.10, 1.0).with_vehicles(["Carreta Rodo Trem"]);
        let result = run_evaluation(&request, catalog()).unwrap();
        let report = &result.viable_reports[0];
        assert!((report.vehicle_volume - 77.76).abs() < 1e-9);
        assert!((result.cargo_volume - 0.001).abs() < 1e-12);
        assert_eq!(report.max_quantity, Some(69984));
        assert_eq!(result.total_quantity, 69984);
    }

    #[test]
    fn test_zero_weight_is_invalid() {
        let request = EvaluationRequest::new(1.0, 1.0, 1.0, 0.0);
        let err = run_evaluation(&request, catalog()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_filter_names_are_resolved_leniently() {
        let request = EvaluationRequest::new(0.5, 0.5, 0.5, 10.0).with_vehicles(["veiculo toco", "VUC"]);
        let result = run_evaluation(&request, catalog()).unwrap();
        let names: Vec<_> = result.viable_reports.iter().map(|r| r.vehicle_name.as_str()).collect();
        assert_eq!(names, vec!["Veículo Toco", "Vuc"]);
    }

    #[test]
    fn test_unknown_vehicle_is_invalid() {
        let request = EvaluationRequest::new(0.5, 0.5, 0.5, 10.0).with_vehicles(["Fiorino", "Bicicleta"]);
        let err = run_evaluation(&request, catalog()).unwrap_err();
        assert!(err.to_string().contains("Bicicleta"));
    }

    #[test]
    fn test_blank_filter_entries_ignored() {
        let request = EvaluationRequest::new(0.5, 0.5, 0.5, 10.0).with_vehicles(["", "  "]);
        let result = run_evaluation(&request, catalog()).unwrap();
        assert_eq!(result.evaluated, 15);
    }

    #[test]
    fn test_identical_trailers_are_distinct_rows() {
        // same dimensions, different names: not duplicates
        let request = EvaluationRequest::new(1.0, 1.0, 1.0, 10.0)
            .with_vehicles(["Carreta Slider", "Carreta Movida a GNV"]);
        let result = run_evaluation(&request, catalog()).unwrap();
        assert_eq!(result.viable_reports.len(), 2);
        assert_eq!(result.viable_reports[0].vehicle_name, "Carreta Movida a GNV");
    }

    #[test]
    fn test_request_from_json() {
        let request: EvaluationRequest =
            serde_json::from_str(r#"{"length":1.0,"width":1.0,"height":1.0,"unit_weight":100.0}"#).unwrap();
        assert!(request.vehicles.is_empty());
        assert!(request.cargo().is_ok());
    }
}
