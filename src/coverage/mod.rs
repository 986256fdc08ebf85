use std::collections::{HashMap, HashSet};

use thiserror::Error;
use crate::types::NodeId;

pub mod greedy;
pub mod selector;
pub mod exact;

pub use greedy::{greedy_smc, GreedyCover};
pub use selector::{coverage_heuristic, try_all_sets, BlockingChoice, CoverageMethod, CoverageView};
pub use exact::{ExactFormulation, ExactSolution, ExactSolver};

#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum CoverageError {
    /// The exact backend found no feasible solution. Recovered by falling
    /// back to the greedy approximation; never silently ignored.
    #[error("exact solver failed: {0}")]
    Solver(#[from] anyhow::Error),
}

/// One budgeted set-multicover instance built from a pair of consecutive
/// activation frontiers.
///
/// `subsets[j]` is the set of target nodes candidate `candidates[j]` would
/// stop infecting; a target `v` is satisfied once `requirements[v]` of its
/// covering candidates are chosen.
#[derive(Debug, Clone)]
pub struct MulticoverInstance {
    /// Candidate blocking nodes, in input order
    pub candidates: Vec<NodeId>,
    /// Targets covered by each candidate, parallel to `candidates`
    pub subsets: Vec<HashSet<NodeId>>,
    /// Targets whose requirement has not yet been met
    pub unsatisfied: HashSet<NodeId>,
    /// Residual coverage requirement per target:
    /// affected(v) - threshold(v) + 1
    pub requirements: HashMap<NodeId, i64>,
}
