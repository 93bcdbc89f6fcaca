//! Domain services

pub mod capacity_evaluator;
pub mod normalize;

pub use capacity_evaluator::{
    check_fit, evaluate, evaluate_vehicle, max_quantity, UTILIZATION_FACTOR,
};
pub use normalize::normalize_name;
