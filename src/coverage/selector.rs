//! The contagion-blocking heuristic: builds one multicover instance per
//! pair of consecutive activation frontiers and picks the best round to
//! block.

use std::collections::{HashMap, HashSet};

use crate::diffusion::{DiffusionEngine, FixedPointOutcome};
use crate::types::{Contagion, NodeId};
use crate::utils::logging;
use super::exact::{ExactFormulation, ExactSolver};
use super::greedy::greedy_smc;
use super::MulticoverInstance;

/// Read-only view of a completed run that the selector needs: adjacency,
/// per-node thresholds, and the affected counts recorded at activation.
pub trait CoverageView {
    fn neighbors(&self, u: NodeId) -> &[NodeId];
    fn threshold(&self, u: NodeId, contagion: Contagion) -> u32;
    fn affected(&self, u: NodeId, contagion: Contagion) -> u32;
}

impl<'a> CoverageView for DiffusionEngine<'a> {
    fn neighbors(&self, u: NodeId) -> &[NodeId] {
        self.network().neighbors(u)
    }

    fn threshold(&self, u: NodeId, contagion: Contagion) -> u32 {
        DiffusionEngine::threshold(self, u, contagion)
    }

    fn affected(&self, u: NodeId, contagion: Contagion) -> u32 {
        DiffusionEngine::affected(self, u, contagion)
    }
}

/// How each round's multicover instance is solved
pub enum CoverageMethod {
    /// The ln|targets| + 1 greedy approximation
    Greedy,
    /// An external exact backend; falls back to greedy if it fails
    Exact(Box<dyn ExactSolver>),
}

/// Blocking sets chosen for both contagions
#[derive(Debug, Clone, Default)]
pub struct BlockingChoice {
    pub blocked_a: Vec<NodeId>,
    pub blocked_b: Vec<NodeId>,
}

/// Builds the multicover instance for one frontier pair: each candidate
/// covers the targets among its neighbors, and each target requires
/// affected(v) - threshold(v) + 1 of its covering candidates.
pub fn build_instance<V: CoverageView>(
    candidates: &[NodeId],
    targets: &[NodeId],
    view: &V,
    contagion: Contagion,
) -> MulticoverInstance {
    let target_set: HashSet<NodeId> = targets.iter().copied().collect();
    let mut subsets = Vec::with_capacity(candidates.len());
    let mut unsatisfied = HashSet::new();
    for &u in candidates {
        let subset: HashSet<NodeId> = view
            .neighbors(u)
            .iter()
            .copied()
            .filter(|v| target_set.contains(v))
            .collect();
        unsatisfied.extend(subset.iter().copied());
        subsets.push(subset);
    }
    let mut requirements = HashMap::new();
    for &v in &unsatisfied {
        let requirement =
            view.affected(v, contagion) as i64 - view.threshold(v, contagion) as i64 + 1;
        requirements.insert(v, requirement);
    }
    MulticoverInstance {
        candidates: candidates.to_vec(),
        subsets,
        unsatisfied,
        requirements,
    }
}

/// Solves one instance with the configured method, returning the blocking
/// nodes and the number of targets left unsatisfied.
fn solve_round(instance: &MulticoverInstance, budget: usize, method: &CoverageMethod) -> (Vec<NodeId>, usize) {
    if let CoverageMethod::Exact(solver) = method {
        let formulation = ExactFormulation::new(instance, budget);
        match solver.solve(&formulation) {
            Ok(solution) => {
                let unsatisfied = formulation.targets.len() - solution.covered.min(formulation.targets.len());
                return (solution.blocked, unsatisfied);
            }
            Err(e) => {
                logging::log("COVERAGE", &format!("exact solver failed, falling back to greedy: {}", e));
            }
        }
    }
    let cover = greedy_smc(
        budget,
        &instance.subsets,
        instance.unsatisfied.clone(),
        instance.requirements.clone(),
    );
    let blocked = cover.chosen.iter().map(|&j| instance.candidates[j]).collect();
    (blocked, cover.unsatisfied.len())
}

/// Tries every pair of consecutive frontiers (round i candidates, round
/// i + 1 targets) and returns the first round's blocking set that leaves no
/// target unsatisfied.
///
/// Seed nodes are never candidates: they are infected from round 0, so
/// blocking them does nothing. A round whose whole candidate set fits the
/// budget is returned immediately. If no round is fully covered, the round
/// with the fewest unsatisfied targets is returned as a degrade path.
pub fn try_all_sets<V: CoverageView>(
    frontiers: &[Vec<NodeId>],
    seeds: &[NodeId],
    budget: usize,
    view: &V,
    contagion: Contagion,
    method: &CoverageMethod,
) -> Vec<NodeId> {
    let seed_set: HashSet<NodeId> = seeds.iter().copied().collect();
    let mut min_unsatisfied = usize::MAX;
    let mut best_solution = Vec::new();

    for i in 0..frontiers.len().saturating_sub(1) {
        let mut candidates: Vec<NodeId> = frontiers[i]
            .iter()
            .copied()
            .filter(|u| !seed_set.contains(u))
            .collect();
        candidates.sort();
        candidates.dedup();
        if candidates.is_empty() {
            continue;
        }
        if candidates.len() <= budget {
            // Vaccinating everyone infected at this step trivially stops
            // the round.
            return candidates;
        }
        let instance = build_instance(&candidates, &frontiers[i + 1], view, contagion);
        let (solution, unsatisfied) = solve_round(&instance, budget, method);
        if unsatisfied == 0 {
            return solution;
        }
        if unsatisfied < min_unsatisfied {
            min_unsatisfied = unsatisfied;
            best_solution = solution;
        }
    }
    best_solution
}

/// Runs `try_all_sets` for both contagions over one unblocked outcome.
///
/// This is the selection half of the two-pass contract: simulate, select a
/// blocking set per contagion under its budget, then re-simulate with the
/// blocking applied.
pub fn coverage_heuristic(
    outcome: &FixedPointOutcome,
    engine: &DiffusionEngine<'_>,
    budget_a: usize,
    budget_b: usize,
    method: &CoverageMethod,
) -> BlockingChoice {
    let blocked_a = try_all_sets(
        &outcome.frontiers_a,
        engine.initial_frontier(Contagion::A),
        budget_a,
        engine,
        Contagion::A,
        method,
    );
    let blocked_b = try_all_sets(
        &outcome.frontiers_b,
        engine.initial_frontier(Contagion::B),
        budget_b,
        engine,
        Contagion::B,
        method,
    );
    logging::log(
        "COVERAGE",
        &format!(
            "chose {} blocking nodes for A (budget {}) and {} for B (budget {})",
            blocked_a.len(),
            budget_a,
            blocked_b.len(),
            budget_b
        ),
    );
    BlockingChoice { blocked_a, blocked_b }
}
