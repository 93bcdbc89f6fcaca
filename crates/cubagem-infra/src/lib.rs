//! Infrastructure layer - loaders for external data files

pub mod fleet_loader;

pub use fleet_loader::FleetLoader;
