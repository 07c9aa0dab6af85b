pub mod ai;
pub mod controller;

pub use ai::{HeuristicAI, RandomAI};
pub use controller::PlayerController;
