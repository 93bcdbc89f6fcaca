//! Domain model types

pub mod cargo;
pub mod report;
pub mod vehicle;

pub use cargo::CargoSpec;
pub use report::{AggregateResult, Dimension, ExcessReason, FitReport, ReportRow};
pub use vehicle::VehicleProfile;
