//! Position evaluation

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, evaluate_with};
pub use weights::EvalWeights;
