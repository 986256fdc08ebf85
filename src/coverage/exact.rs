//! Exact 0/1 integer-program formulation of the budgeted set multicover.
//!
//! The formulation is a plain data structure: one binary variable per
//! candidate, one binary "is covered" variable per target, two big-M
//! linking constraints per target, one budget constraint, and an objective
//! maximizing the number of covered targets. An external `ExactSolver`
//! consumes it; this crate embeds no solver.

use crate::types::NodeId;
use super::{CoverageError, MulticoverInstance};

/// A decision variable in the multicover program
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variable {
    /// Binary: candidate at this index in `ExactFormulation::candidates` is blocked
    Block(usize),
    /// Binary: this target's coverage requirement is fully met
    Covered(NodeId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sense {
    Le,
    Ge,
}

/// A linear inequality over the program's variables
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    pub terms: Vec<(Variable, f64)>,
    pub sense: Sense,
    pub rhs: f64,
}

/// The full program. Objective: maximize the sum of all `Covered` variables
/// subject to `constraints`; all variables are binary.
#[derive(Debug, Clone)]
pub struct ExactFormulation {
    pub candidates: Vec<NodeId>,
    pub targets: Vec<NodeId>,
    pub constraints: Vec<LinearConstraint>,
    pub budget: usize,
}

impl ExactFormulation {
    /// Builds the program for one multicover instance.
    ///
    /// With M = |candidates| and `cover(r)` the candidates whose subset
    /// contains target r:
    ///   sum(block_t, t in cover(r)) - M * covered_r <= requirement(r) - 1
    ///   sum(block_t, t in cover(r)) - M * covered_r >= requirement(r) - M
    ///   sum(block_t) <= budget
    /// which together force covered_r = 1 exactly when enough covering
    /// candidates are chosen.
    pub fn new(instance: &MulticoverInstance, budget: usize) -> Self {
        let big_m = instance.candidates.len() as f64;
        let mut targets: Vec<NodeId> = instance.requirements.keys().copied().collect();
        targets.sort();

        let mut constraints = Vec::new();
        for &target in &targets {
            let requirement = instance.requirements[&target] as f64;
            let cover_terms: Vec<(Variable, f64)> = instance
                .subsets
                .iter()
                .enumerate()
                .filter(|(_, subset)| subset.contains(&target))
                .map(|(j, _)| (Variable::Block(j), 1.0))
                .collect();

            let mut linking_le = cover_terms.clone();
            linking_le.push((Variable::Covered(target), -big_m));
            constraints.push(LinearConstraint {
                terms: linking_le,
                sense: Sense::Le,
                rhs: requirement - 1.0,
            });

            let mut linking_ge = cover_terms;
            linking_ge.push((Variable::Covered(target), -big_m));
            constraints.push(LinearConstraint {
                terms: linking_ge,
                sense: Sense::Ge,
                rhs: requirement - big_m,
            });
        }
        constraints.push(LinearConstraint {
            terms: (0..instance.candidates.len()).map(|j| (Variable::Block(j), 1.0)).collect(),
            sense: Sense::Le,
            rhs: budget as f64,
        });

        Self {
            candidates: instance.candidates.clone(),
            targets,
            constraints,
            budget,
        }
    }
}

/// A (possibly non-optimal) solution returned by an external solver.
///
/// Backends are free to stop at a time or optimality-gap cutoff; a
/// non-optimal feasible cover is a valid result, not an error.
#[derive(Debug, Clone)]
pub struct ExactSolution {
    /// Chosen blocking nodes
    pub blocked: Vec<NodeId>,
    /// Objective value: number of targets fully covered
    pub covered: usize,
}

/// External integer-programming backend for the exact formulation
pub trait ExactSolver {
    fn solve(&self, formulation: &ExactFormulation) -> Result<ExactSolution, CoverageError>;
}
