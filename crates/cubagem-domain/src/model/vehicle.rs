//! Vehicle-related type definitions

use cubagem_types::{Error, Result};
use serde::{Deserialize, Serialize};

/// Capacity profile of a fleet vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Display name, unique within a catalog
    pub name: String,
    /// Interior usable width in meters
    pub width: f64,
    /// Interior usable length in meters
    pub length: f64,
    /// Interior usable height in meters
    pub height: f64,
    /// Maximum payload in kilograms
    pub max_weight: f64,
}

impl VehicleProfile {
    pub fn new(name: impl Into<String>, width: f64, length: f64, height: f64, max_weight: f64) -> Self {
        Self {
            name: name.into(),
            width,
            length,
            height,
            max_weight,
        }
    }

    /// Geometric volume of the cargo space in m³
    pub fn volume(&self) -> f64 {
        self.width * self.length * self.height
    }

    /// Reject profiles with blank names or non-positive measurements
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid("vehicle name must not be empty"));
        }
        let fields = [
            ("width", self.width),
            ("length", self.length),
            ("height", self.height),
            ("max weight", self.max_weight),
        ];
        for (label, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid(format!(
                    "vehicle '{}': {} must be greater than zero (got {})",
                    self.name, label, value
                )));
            }
        }
        Ok(())
    }
}
