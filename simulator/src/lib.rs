pub mod config;
pub mod network_gen;
pub mod seeds;
pub mod baselines;
pub mod experiment;
pub mod results;
pub mod sweep;
pub mod interface;

pub use config::{Config, ConfigError};
pub use experiment::{run_experiment, ExperimentOutcome};
pub use results::ExperimentResults;
