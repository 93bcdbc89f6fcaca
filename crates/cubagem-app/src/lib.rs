//! Application service layer - fleet catalog, config, evaluation, rendering, export

pub mod app;
pub mod config;
pub mod constants;
pub mod export;
pub mod fleet;
pub mod report;
