//! Built-in reference data

pub mod fleet_specs;

pub use fleet_specs::builtin_fleet;
