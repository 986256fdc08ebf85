pub mod types;
pub mod network;
pub mod diffusion;
pub mod coverage;
pub mod utils;

pub use network::Network;
pub use diffusion::{DiffusionEngine, EngineConfig};
pub use coverage::selector::coverage_heuristic;
