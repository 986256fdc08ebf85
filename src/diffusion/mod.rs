use thiserror::Error;
use crate::types::{InteractionModel, NodeId};

pub mod engine;
pub use engine::{DiffusionEngine, FixedPointOutcome};

#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum DiffusionError {
    #[error("interaction {0} is outside the allowed range [-1, 1]")]
    InteractionOutOfRange(f64),
    #[error("node {0} appears in more than one seed set")]
    OverlappingSeeds(NodeId),
    #[error("node {0} is out of bounds for a network of {1} nodes")]
    NodeOutOfBounds(NodeId, usize),
    #[error("expected {expected} per-node {name} entries, got {got}")]
    ParameterLengthMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Immutable configuration for one engine run, validated at construction.
///
/// Thresholds are per-node vectors indexed by `NodeId`; blocked and seed
/// sets are node lists. Seed sets must be pairwise disjoint.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Infected neighbors required for contagion A, per node
    pub threshold_a: Vec<u32>,
    /// Infected neighbors required for contagion B, per node
    pub threshold_b: Vec<u32>,
    /// Nodes permanently prevented from activating for contagion A
    pub blocked_a: Vec<NodeId>,
    /// Nodes permanently prevented from activating for contagion B
    pub blocked_b: Vec<NodeId>,
    /// Adjustment applied to B's threshold once a node holds A, in [-1, 1]
    pub interaction_a: f64,
    /// Adjustment applied to A's threshold once a node holds B, in [-1, 1]
    pub interaction_b: f64,
    /// How the interaction scalars are applied
    pub model: InteractionModel,
    /// Nodes initially infected with A only
    pub seeds_a: Vec<NodeId>,
    /// Nodes initially infected with B only
    pub seeds_b: Vec<NodeId>,
    /// Nodes initially infected with both contagions
    pub seeds_both: Vec<NodeId>,
}

impl EngineConfig {
    /// A configuration with the same threshold for every node and both
    /// contagions, no blocking, no interaction, and no seeds
    pub fn uniform(node_count: usize, threshold: u32) -> Self {
        Self {
            threshold_a: vec![threshold; node_count],
            threshold_b: vec![threshold; node_count],
            blocked_a: Vec::new(),
            blocked_b: Vec::new(),
            interaction_a: 0.0,
            interaction_b: 0.0,
            model: InteractionModel::default(),
            seeds_a: Vec::new(),
            seeds_b: Vec::new(),
            seeds_both: Vec::new(),
        }
    }
}
