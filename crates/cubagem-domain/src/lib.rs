//! Domain layer: vehicle and cargo models, fit reports, capacity evaluation

pub mod model;
pub mod service;
