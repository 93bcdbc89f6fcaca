//! Cargo item definition

use cubagem_types::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single cargo unit to be loaded, dimensions in meters and weight in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CargoSpec {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit_weight: f64,
}

impl CargoSpec {
    /// Build a validated cargo item
    ///
    /// Every field must be finite and strictly greater than zero, and the
    /// unit volume must be representable as a normal float.
    pub fn new(length: f64, width: f64, height: f64, unit_weight: f64) -> Result<Self> {
        let cargo = Self {
            length,
            width,
            height,
            unit_weight,
        };
        cargo.validate()?;
        Ok(cargo)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
            ("unit weight", self.unit_weight),
        ];
        for (label, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid(format!(
                    "cargo {} must be greater than zero (got {})",
                    label, value
                )));
            }
        }

        let volume = self.volume();
        if !volume.is_normal() {
            return Err(Error::invalid(format!(
                "cargo volume is out of range (got {} m³)",
                volume
            )));
        }
        Ok(())
    }

    /// Volume of one unit in m³
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}
