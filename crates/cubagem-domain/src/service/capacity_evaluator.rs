//! Capacity evaluation service
//!
//! Matches one cargo unit against a fleet and computes, per vehicle, whether
//! it fits spatially and how many units the vehicle can take before running
//! out of usable volume or payload.

use std::collections::BTreeSet;

use cubagem_types::{Error, Result};
use tracing::debug;

use crate::model::{AggregateResult, CargoSpec, Dimension, ExcessReason, FitReport, VehicleProfile};

/// Share of the geometric volume usable after packing losses
pub const UTILIZATION_FACTOR: f64 = 0.90;

/// Rounding error, in ULPs of the quotient, under which it counts as the integer next to it
const INTEGER_TOLERANCE_ULPS: f64 = 8.0;

/// Quantities at or above this do not fit in a `u64`
const COUNT_LIMIT: f64 = u64::MAX as f64;

/// Dimensions of the cargo that exceed the vehicle, in length, width, height order.
///
/// Axes are fixed; the cargo is never rotated.
pub fn check_fit(cargo: &CargoSpec, vehicle: &VehicleProfile) -> Vec<ExcessReason> {
    Dimension::ALL
        .iter()
        .filter_map(|&dimension| {
            let (cargo_value, vehicle_value) = match dimension {
                Dimension::Length => (cargo.length, vehicle.length),
                Dimension::Width => (cargo.width, vehicle.width),
                Dimension::Height => (cargo.height, vehicle.height),
            };
            (cargo_value > vehicle_value).then_some(ExcessReason {
                dimension,
                cargo: cargo_value,
                vehicle: vehicle_value,
            })
        })
        .collect()
}

/// Units of `cargo` the vehicle can carry, bounded by usable volume and by payload.
///
/// `cargo` must already be validated.
///
/// # Errors
/// `InvalidInput` when the quantity is too large to count.
pub fn max_quantity(cargo: &CargoSpec, vehicle: &VehicleProfile) -> Result<u64> {
    let by_volume = floor_quotient(vehicle.volume() * UTILIZATION_FACTOR / cargo.volume());
    let by_weight = floor_quotient(vehicle.max_weight / cargo.unit_weight);
    let quantity = by_volume.min(by_weight);
    if quantity.is_nan() || quantity >= COUNT_LIMIT {
        return Err(Error::invalid(format!(
            "capacity of '{}' is too large to count; check the cargo measurements",
            vehicle.name
        )));
    }
    Ok(quantity as u64)
}

/// Evaluate a single vehicle
pub fn evaluate_vehicle(cargo: &CargoSpec, vehicle: &VehicleProfile) -> Result<FitReport> {
    let excess_reasons = check_fit(cargo, vehicle);
    let vehicle_volume = vehicle.volume();

    if !excess_reasons.is_empty() {
        debug!(vehicle = %vehicle.name, exceeded = excess_reasons.len(), "cargo does not fit");
        return Ok(FitReport {
            vehicle_name: vehicle.name.clone(),
            fits: false,
            excess_reasons,
            vehicle_volume,
            max_quantity: None,
            total_weight: None,
        });
    }

    let quantity = max_quantity(cargo, vehicle)?;
    debug!(vehicle = %vehicle.name, quantity, "cargo fits");
    Ok(FitReport {
        vehicle_name: vehicle.name.clone(),
        fits: true,
        excess_reasons,
        vehicle_volume,
        max_quantity: Some(quantity),
        total_weight: Some(quantity as f64 * cargo.unit_weight),
    })
}

/// Evaluate the cargo against the fleet, optionally restricted to the named vehicles.
///
/// An absent or empty filter selects the whole fleet. Names are matched exactly.
///
/// # Errors
/// `InvalidInput` when the cargo has a non-positive field, the fleet is empty,
/// the filter selects no vehicle, or a quantity is too large to count.
pub fn evaluate(
    cargo: &CargoSpec,
    fleet: &[VehicleProfile],
    name_filter: Option<&BTreeSet<String>>,
) -> Result<AggregateResult> {
    cargo.validate()?;
    if fleet.is_empty() {
        return Err(Error::invalid("fleet must contain at least one vehicle"));
    }

    let candidates: Vec<&VehicleProfile> = match name_filter {
        Some(names) if !names.is_empty() => {
            fleet.iter().filter(|v| names.contains(&v.name)).collect()
        }
        _ => fleet.iter().collect(),
    };
    if candidates.is_empty() {
        return Err(Error::invalid("vehicle filter does not match any vehicle in the fleet"));
    }

    let reports: Vec<FitReport> = candidates
        .iter()
        .map(|vehicle| evaluate_vehicle(cargo, vehicle))
        .collect::<Result<_>>()?;

    let excluded_count = reports.iter().filter(|r| !r.fits).count();
    let all_excluded = excluded_count == reports.len();

    let mut viable_reports: Vec<FitReport> = Vec::new();
    if !all_excluded {
        for report in reports.iter().filter(|r| r.is_viable()) {
            let row = report.row();
            if viable_reports.iter().any(|kept| kept.row() == row) {
                continue;
            }
            viable_reports.push(report.clone());
        }
        viable_reports.sort_by(|a, b| a.vehicle_name.cmp(&b.vehicle_name));
    }

    let total_quantity = viable_reports
        .iter()
        .filter_map(|r| r.max_quantity)
        .try_fold(0u64, |total, quantity| total.checked_add(quantity))
        .ok_or_else(|| Error::invalid("total quantity is too large to count"))?;

    debug!(
        evaluated = reports.len(),
        excluded = excluded_count,
        viable = viable_reports.len(),
        total_quantity,
        "evaluation finished"
    );

    Ok(AggregateResult {
        cargo_volume: cargo.volume(),
        evaluated: reports.len(),
        reports,
        viable_reports,
        total_quantity,
        all_excluded,
    })
}

/// Floor of a positive quotient, snapping values a few ULPs short of an integer up to it
fn floor_quotient(value: f64) -> f64 {
    if value.is_nan() || value <= 0.0 {
        return 0.0;
    }
    if value.is_infinite() {
        return value;
    }
    let nearest = value.round();
    if (value - nearest).abs() <= INTEGER_TOLERANCE_ULPS * f64::EPSILON * nearest.max(1.0) {
        nearest
    } else {
        value.floor()
    }
}
