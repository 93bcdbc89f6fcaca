//! Use cases

pub mod evaluation_service;

pub use evaluation_service::{run_evaluation, EvaluationRequest};
