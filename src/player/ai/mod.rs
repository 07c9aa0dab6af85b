pub mod config;
pub mod eval;
pub mod evaluator;
pub mod heuristic;
pub mod random;

pub use config::{AIConfig, TieBreak};
pub use eval::LineEvaluator;
pub use evaluator::Evaluator;
pub use heuristic::HeuristicAI;
pub use random::RandomAI;
