//! Evaluation result types

use serde::{Deserialize, Serialize};

/// Cargo axis compared against the vehicle, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length,
    Width,
    Height,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Length, Dimension::Width, Dimension::Height];

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Width => "width",
            Dimension::Height => "height",
        }
    }
}

/// One cargo dimension that does not fit inside the vehicle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExcessReason {
    pub dimension: Dimension,
    /// Cargo measurement in meters
    pub cargo: f64,
    /// Vehicle measurement in meters
    pub vehicle: f64,
}

impl std::fmt::Display for ExcessReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} exceeds ({:.2} m > {:.2} m)",
            self.dimension.label(),
            self.cargo,
            self.vehicle
        )
    }
}

/// Outcome of matching the cargo against a single vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub vehicle_name: String,
    pub fits: bool,
    /// Exceeded dimensions in length, width, height order; empty when `fits`
    pub excess_reasons: Vec<ExcessReason>,
    /// Geometric volume of the vehicle in m³
    pub vehicle_volume: f64,
    /// Units that can be loaded; only set when `fits`
    pub max_quantity: Option<u64>,
    /// `max_quantity * unit_weight` in kg; only set when `fits`
    pub total_weight: Option<f64>,
}

impl FitReport {
    /// Fits spatially and carries at least one unit
    pub fn is_viable(&self) -> bool {
        self.fits && self.max_quantity.is_some_and(|q| q > 0)
    }

    /// Tabular projection used for display and export
    pub fn row(&self) -> Option<ReportRow> {
        if !self.is_viable() {
            return None;
        }
        Some(ReportRow {
            vehicle: self.vehicle_name.clone(),
            cubic_volume: round2(self.vehicle_volume),
            max_quantity: self.max_quantity.unwrap_or(0),
            total_weight: round2(self.total_weight.unwrap_or(0.0)),
        })
    }
}

/// One line of the viable vehicles table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub vehicle: String,
    /// m³, two decimals
    pub cubic_volume: f64,
    pub max_quantity: u64,
    /// kg, two decimals
    pub total_weight: f64,
}

impl ReportRow {
    /// Column headers, in the order the fields are laid out
    pub const HEADERS: [&'static str; 4] = [
        "Vehicle",
        "Cubic volume (m³)",
        "Max quantity",
        "Total weight (kg)",
    ];
}

/// Aggregated result of one evaluation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Volume of one cargo unit in m³
    pub cargo_volume: f64,
    /// Number of vehicles evaluated after filtering
    pub evaluated: usize,
    /// Every per-vehicle report, in fleet order
    pub reports: Vec<FitReport>,
    /// Viable vehicles, de-duplicated and sorted by name
    pub viable_reports: Vec<FitReport>,
    pub total_quantity: u64,
    /// Every evaluated vehicle failed the spatial fit
    pub all_excluded: bool,
}

impl AggregateResult {
    pub fn rows(&self) -> Vec<ReportRow> {
        self.viable_reports.iter().filter_map(FitReport::row).collect()
    }

    /// Vehicles that failed the spatial fit, with their reasons
    pub fn excluded(&self) -> impl Iterator<Item = (&str, &[ExcessReason])> {
        self.reports
            .iter()
            .filter(|r| !r.fits)
            .map(|r| (r.vehicle_name.as_str(), r.excess_reasons.as_slice()))
    }

    /// At least one vehicle fits spatially but none can carry a single unit
    pub fn has_no_capacity(&self) -> bool {
        !self.all_excluded && self.viable_reports.is_empty()
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viable(name: &str, volume: f64, qty: u64, weight: f64) -> FitReport {
        FitReport {
            vehicle_name: name.to_string(),
            fits: true,
            excess_reasons: Vec::new(),
            vehicle_volume: volume,
            max_quantity: Some(qty),
            total_weight: Some(weight),
        }
    }

    #[test]
    fn test_reason_display() {
        let reason = ExcessReason {
            dimension: Dimension::Length,
            cargo: 3.0,
            vehicle: 1.4,
        };
        assert_eq!(reason.to_string(), "length exceeds (3.00 m > 1.40 m)");
    }

    #[test]
    fn test_row_rounds_to_two_decimals() {
        let report = viable("Carreta Rodo Trem", 77.75999999999999, 69984, 69984.0);
        let row = report.row().unwrap();
        assert_eq!(row.cubic_volume, 77.76);
        assert_eq!(row.max_quantity, 69984);
    }

    #[test]
    fn test_zero_quantity_has_no_row() {
        let report = viable("Fiorino", 1.4, 0, 0.0);
        assert!(!report.is_viable());
        assert!(report.row().is_none());
    }

    #[test]
    fn test_excluded_iterates_failures_only() {
        let failing = FitReport {
            vehicle_name: "Fiorino".to_string(),
            fits: false,
            excess_reasons: vec![ExcessReason {
                dimension: Dimension::Height,
                cargo: 1.2,
                vehicle: 1.0,
            }],
            vehicle_volume: 1.4,
            max_quantity: None,
            total_weight: None,
        };
        let result = AggregateResult {
            cargo_volume: 1.2,
            evaluated: 2,
            reports: vec![failing, viable("Vuc", 11.16, 8, 800.0)],
            viable_reports: vec![viable("Vuc", 11.16, 8, 800.0)],
            total_quantity: 8,
            all_excluded: false,
        };
        let excluded: Vec<_> = result.excluded().collect();
        assert_eq!(excluded.len(), 1);
        assert_eq!(excluded[0].0, "Fiorino");
        assert_eq!(excluded[0].1[0].dimension, Dimension::Height);
        assert!(!result.has_no_capacity());
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(viable("Vuc", 11.16, 8, 800.0)).unwrap();
        assert_eq!(json["vehicle_name"], "Vuc");
        assert_eq!(json["max_quantity"], 8);
    }
}
