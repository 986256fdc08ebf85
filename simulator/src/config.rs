//! Configuration loader and validator for the contagion-blocking simulator.
//! Handles parsing, validation, and access to experiment configuration files.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Main configuration struct for one experiment campaign.
///
/// Covers the synthetic network, the contagion model parameters, and the
/// blocking-budget sweep settings.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Synthetic network generation parameters
    pub network_config: NetworkConfig,
    /// Contagion model and seeding parameters
    pub contagion_config: ContagionConfig,
    /// Blocking budgets and sample counts
    pub blocking_config: BlockingConfig,
}

/// Parameters of the generated preferential-attachment network
#[derive(Debug, Deserialize, Clone)]
pub struct NetworkConfig {
    /// Number of nodes to generate
    pub num_nodes: usize,
    /// Edges attached from each new node to existing nodes
    pub edges_per_node: usize,
    /// RNG seed; experiments are reproducible given the same seed
    pub rng_seed: u64,
}

/// Contagion model parameters shared by every run of a campaign
#[derive(Debug, Deserialize, Clone)]
pub struct ContagionConfig {
    /// Uniform activation threshold for both contagions
    pub threshold: u32,
    /// Adjustment applied to B's threshold once a node holds A, in [-1, 1]
    pub interaction_a: f64,
    /// Adjustment applied to A's threshold once a node holds B, in [-1, 1]
    pub interaction_b: f64,
    /// Total number of seed nodes, split across the three seed sets
    pub seed_size: usize,
    /// Minimum core degree of the subgraph seeds are drawn from
    pub core_degree: usize,
}

/// Budget sweep settings
#[derive(Debug, Deserialize, Clone)]
pub struct BlockingConfig {
    /// Blocking budgets as fractions of the node count
    pub budget_fractions: Vec<f64>,
    /// Seed-set samples averaged per budget
    pub samples: usize,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.network_config.num_nodes == 0 {
            return Err(ConfigError::ValidationError("Number of nodes must be positive".into()));
        }
        if self.network_config.edges_per_node == 0
            || self.network_config.edges_per_node >= self.network_config.num_nodes
        {
            return Err(ConfigError::ValidationError(
                "Edges per node must be positive and below the node count".into(),
            ));
        }
        if self.contagion_config.threshold == 0 {
            return Err(ConfigError::ValidationError("Threshold must be positive".into()));
        }
        for interaction in [self.contagion_config.interaction_a, self.contagion_config.interaction_b] {
            if !(-1.0..=1.0).contains(&interaction) {
                return Err(ConfigError::ValidationError(
                    "Interactions must be between -1 and 1".into(),
                ));
            }
        }
        if self.contagion_config.seed_size == 0
            || self.contagion_config.seed_size > self.network_config.num_nodes
        {
            return Err(ConfigError::ValidationError(
                "Seed size must be positive and at most the node count".into(),
            ));
        }
        if self.blocking_config.budget_fractions.is_empty() {
            return Err(ConfigError::ValidationError("At least one budget fraction is required".into()));
        }
        if self.blocking_config.budget_fractions.iter().any(|&f| !(0.0..=1.0).contains(&f)) {
            return Err(ConfigError::ValidationError(
                "Budget fractions must be between 0 and 1".into(),
            ));
        }
        if self.blocking_config.samples == 0 {
            return Err(ConfigError::ValidationError("Sample count must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_toml() -> &'static str {
        r#"
            [network_config]
            num_nodes = 500
            edges_per_node = 5
            rng_seed = 6893

            [contagion_config]
            threshold = 2
            interaction_a = 0.0
            interaction_b = 0.0
            seed_size = 10
            core_degree = 5

            [blocking_config]
            budget_fractions = [0.01, 0.02]
            samples = 3
        "#
    }

    #[test]
    fn test_valid_config_parses() {
        let config: Config = toml::from_str(valid_toml()).expect("parse");
        assert!(config.validate().is_ok());
        assert_eq!(config.network_config.num_nodes, 500);
        assert_eq!(config.blocking_config.budget_fractions.len(), 2);
    }

    #[test]
    fn test_out_of_range_interaction_is_rejected() {
        let mut config: Config = toml::from_str(valid_toml()).expect("parse");
        config.contagion_config.interaction_a = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_budget_fraction_above_one_is_rejected() {
        let mut config: Config = toml::from_str(valid_toml()).expect("parse");
        config.blocking_config.budget_fractions = vec![1.5];
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }
}
