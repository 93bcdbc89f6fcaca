//! Fleet catalog: validated, read-only set of vehicle profiles

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use cubagem_domain::model::VehicleProfile;
use cubagem_domain::service::normalize_name;
use cubagem_infra::FleetLoader;
use cubagem_types::{Error, Result};
use tracing::info;

use crate::constants::builtin_fleet;

/// Vehicle profiles in catalog order, indexed by name
#[derive(Debug, Clone)]
pub struct FleetCatalog {
    vehicles: Vec<VehicleProfile>,
    by_name: HashMap<String, usize>,
}

impl FleetCatalog {
    /// Build a catalog, rejecting empty fleets, invalid profiles and duplicate names
    pub fn new(vehicles: Vec<VehicleProfile>) -> Result<Self> {
        if vehicles.is_empty() {
            return Err(Error::invalid("fleet catalog must contain at least one vehicle"));
        }

        let mut by_name = HashMap::with_capacity(vehicles.len());
        for (idx, vehicle) in vehicles.iter().enumerate() {
            vehicle.validate()?;
            if by_name.insert(vehicle.name.clone(), idx).is_some() {
                return Err(Error::invalid(format!(
                    "duplicate vehicle name in fleet catalog: '{}'",
                    vehicle.name
                )));
            }
        }

        Ok(Self { vehicles, by_name })
    }

    /// Index a table already known to be valid
    pub(crate) fn from_trusted(vehicles: Vec<VehicleProfile>) -> Self {
        let by_name = vehicles
            .iter()
            .enumerate()
            .map(|(idx, v)| (v.name.clone(), idx))
            .collect();
        Self { vehicles, by_name }
    }

    /// The hard-coded fleet, built once per process
    pub fn builtin() -> &'static FleetCatalog {
        builtin_fleet()
    }

    pub fn profiles(&self) -> &[VehicleProfile] {
        &self.vehicles
    }

    pub fn get(&self, name: &str) -> Option<&VehicleProfile> {
        self.by_name.get(name).map(|&idx| &self.vehicles[idx])
    }

    /// Sorted, trimmed vehicle names for selection lists
    pub fn names(&self) -> Vec<String> {
        self.vehicles
            .iter()
            .map(|v| v.name.trim().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Find the catalog name a user typed.
    ///
    /// Exact match first, then a unique match ignoring case, accents and
    /// surrounding whitespace. Ambiguous or unknown names yield `None`.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        if let Some(vehicle) = self.get(name).or_else(|| self.get(name.trim())) {
            return Some(vehicle.name.as_str());
        }

        let wanted = normalize_name(name);
        let mut matches = self
            .vehicles
            .iter()
            .filter(|v| normalize_name(&v.name) == wanted);
        match (matches.next(), matches.next()) {
            (Some(vehicle), None) => Some(vehicle.name.as_str()),
            _ => None,
        }
    }

    /// Number of vehicles; never zero, `new` rejects empty fleets
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }
}

/// Open the fleet to evaluate against: a TOML fleet file when given, the built-in catalog otherwise
pub fn open_fleet(fleet_file: Option<&Path>) -> Result<Cow<'static, FleetCatalog>> {
    match fleet_file {
        Some(path) => {
            let loader = FleetLoader::load_from_file(path)?;
            info!(path = %path.display(), vehicles = loader.count(), "using fleet file");
            Ok(Cow::Owned(FleetCatalog::new(loader.into_vehicles())?))
        }
        None => Ok(Cow::Borrowed(FleetCatalog::builtin())),
    }
}
