//! Greedy approximation to the budgeted set multicover problem.
//!
//! Chooses at most `budget` subsets, each pick taking the unchosen subset
//! with the largest intersection with the still-unsatisfied targets. This
//! is the classical greedy multicover algorithm with a ln|targets| + 1
//! approximation ratio.

use std::collections::{HashMap, HashSet};

use crate::types::NodeId;

/// Output of one greedy multicover run
#[derive(Debug, Clone)]
pub struct GreedyCover {
    /// The chosen subsets, in selection order
    pub coverage: Vec<HashSet<NodeId>>,
    /// Indices of the chosen subsets, in first-selection order
    pub chosen: Vec<usize>,
    /// Targets whose requirement was not met within the budget
    pub unsatisfied: HashSet<NodeId>,
}

/// Runs the greedy multicover on the given subsets.
///
/// Ties break to the lowest subset index. A pick that covers nothing still
/// consumes one unit of budget and takes index 0; this matches the
/// reference selector and only occurs once remaining candidates are
/// useless. A target leaves `unsatisfied` exactly when its requirement
/// reaches zero.
pub fn greedy_smc(
    budget: usize,
    subsets: &[HashSet<NodeId>],
    mut unsatisfied: HashSet<NodeId>,
    mut requirements: HashMap<NodeId, i64>,
) -> GreedyCover {
    let mut coverage = Vec::new();
    let mut chosen = Vec::new();
    let mut chosen_set: HashSet<usize> = HashSet::new();

    let mut i = 0;
    // An empty unsatisfied set at entry selects nothing; no pick is burned
    // on an instance with no targets left to cover.
    while i < budget && !subsets.is_empty() && !unsatisfied.is_empty() {
        let mut max_size = 0;
        let mut max_index = 0;
        for (j, subset) in subsets.iter().enumerate() {
            if chosen_set.contains(&j) {
                continue;
            }
            let size = subset.intersection(&unsatisfied).count();
            if size > max_size {
                max_size = size;
                max_index = j;
            }
        }
        if chosen_set.insert(max_index) {
            chosen.push(max_index);
        }
        let picked = &subsets[max_index];
        coverage.push(picked.clone());
        for element in picked {
            if let Some(requirement) = requirements.get_mut(element) {
                *requirement -= 1;
                if *requirement == 0 {
                    unsatisfied.remove(element);
                }
            }
        }
        i += 1;
    }

    GreedyCover {
        coverage,
        chosen,
        unsatisfied,
    }
}
