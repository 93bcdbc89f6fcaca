//! Vehicle fleet available for matching
//!
//! Dimensions are interior usable measures in meters, payload in kilograms.

use std::sync::LazyLock;

use cubagem_domain::model::VehicleProfile;

use crate::fleet::FleetCatalog;

/// (name, width, length, height, max weight)
const FLEET_TABLE: [(&str, f64, f64, f64, f64); 15] = [
    ("Fiorino", 1.00, 1.40, 1.00, 500.0),
    ("Van Utilitário", 1.00, 1.60, 1.00, 500.0),
    ("(HR)", 1.80, 3.00, 1.90, 1200.0),
    ("Veículo 3/4", 2.10, 5.00, 2.30, 3000.0),
    ("Veículo Toco", 2.20, 6.00, 2.70, 6000.0),
    ("Vuc", 1.80, 3.10, 2.00, 2500.0),
    ("Caminhão Truck", 2.40, 7.50, 2.70, 12000.0),
    ("Combinado (Caminhão+Bi-truck)", 2.40, 10.00, 2.70, 18000.0),
    ("Carreta Movida a GNV", 2.40, 12.00, 2.70, 24000.0),
    ("Carreta Slider", 2.40, 12.00, 2.70, 24000.0),
    ("Carreta Wanderleia", 2.40, 12.00, 2.70, 27000.0),
    ("Carreta Rodo Trem", 2.40, 12.00, 2.70, 74000.0),
    ("Bitruck Slider", 2.40, 10.00, 2.70, 18000.0),
    ("Carreta Grade Baixa", 2.40, 12.40, 2.70, 24000.0),
    ("Wanderleia Carga Seca", 2.40, 14.40, 2.70, 27000.0),
];

pub fn builtin_profiles() -> Vec<VehicleProfile> {
    FLEET_TABLE
        .iter()
        .map(|&(name, width, length, height, max_weight)| {
            VehicleProfile::new(name, width, length, height, max_weight)
        })
        .collect()
}

static BUILTIN_FLEET: LazyLock<FleetCatalog> =
    LazyLock::new(|| FleetCatalog::from_trusted(builtin_profiles()));

pub fn builtin_fleet() -> &'static FleetCatalog {
    &BUILTIN_FLEET
}
