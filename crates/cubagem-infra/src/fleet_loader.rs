//! Fleet catalog loader from TOML files
//!
//! ```toml
//! [[vehicles]]
//! name = "Fiorino"
//! width = 1.00
//! length = 1.40
//! height = 1.00
//! max_weight = 500
//! ```

use cubagem_domain::model::VehicleProfile;
use cubagem_types::{ConfigError, Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Container for parsing a fleet TOML file
#[derive(Debug, Deserialize)]
struct FleetFile {
    vehicles: Vec<VehicleProfile>,
}

/// Vehicle profiles read from a fleet file, in file order
#[derive(Debug)]
pub struct FleetLoader {
    vehicles: Vec<VehicleProfile>,
}

impl FleetLoader {
    /// Load vehicle profiles from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read fleet file {}: {}",
                path.display(),
                e
            )))
        })?;

        let loader = Self::load_from_str(&content)?;
        debug!(path = %path.display(), vehicles = loader.count(), "fleet file loaded");
        Ok(loader)
    }

    /// Load vehicle profiles from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: FleetFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse fleet TOML: {}",
                e
            )))
        })?;

        for vehicle in &file.vehicles {
            vehicle.validate()?;
        }

        Ok(Self {
            vehicles: file.vehicles,
        })
    }

    pub fn into_vehicles(self) -> Vec<VehicleProfile> {
        self.vehicles
    }

    pub fn count(&self) -> usize {
        self.vehicles.len()
    }
}
