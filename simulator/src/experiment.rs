//! The two-pass blocking experiment: simulate unblocked, split the budget
//! between the contagions, select blocking sets, and re-simulate with each
//! blocking strategy applied.

use std::collections::HashSet;

use contagion::coverage::selector::{coverage_heuristic, CoverageMethod};
use contagion::diffusion::{DiffusionEngine, DiffusionError, EngineConfig};
use contagion::network::Network;
use contagion::types::{NodeId, StatusCounts};
use contagion::utils::logging;
use rand::rngs::StdRng;

use crate::baselines::{choose_by_degree, choose_randomly};
use crate::config::ContagionConfig;
use crate::seeds::SeedSets;

/// Per-contagion budgets derived from one total budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSplit {
    pub budget_a: usize,
    pub budget_b: usize,
}

/// Splits a total budget proportionally to how far each contagion spread
/// in the unblocked run, rounding the larger share up.
pub fn split_budget(counts: &StatusCounts, budget: usize) -> BudgetSplit {
    let infected_a = counts.total_a();
    let infected_b = counts.total_b();
    let total = counts.total_infected();
    if total == 0 || infected_a == infected_b {
        let budget_a = budget / 2;
        return BudgetSplit { budget_a, budget_b: budget - budget_a };
    }
    if infected_a > infected_b {
        let budget_a = ((infected_a as f64 / total as f64) * budget as f64).ceil() as usize;
        let budget_a = budget_a.min(budget);
        BudgetSplit { budget_a, budget_b: budget - budget_a }
    } else {
        let budget_b = ((infected_b as f64 / total as f64) * budget as f64).ceil() as usize;
        let budget_b = budget_b.min(budget);
        BudgetSplit { budget_a: budget - budget_b, budget_b }
    }
}

/// Final per-status counts for the unblocked run and each blocking strategy
#[derive(Debug, Clone)]
pub struct ExperimentOutcome {
    pub budget: usize,
    pub split: BudgetSplit,
    pub unblocked: StatusCounts,
    pub cbh: StatusCounts,
    pub degree: StatusCounts,
    pub random: StatusCounts,
}

fn base_config(network: &Network, contagion: &ContagionConfig, seeds: &SeedSets) -> EngineConfig {
    let mut config = EngineConfig::uniform(network.node_count(), contagion.threshold);
    config.interaction_a = contagion.interaction_a;
    config.interaction_b = contagion.interaction_b;
    config.seeds_a = seeds.seeds_a.clone();
    config.seeds_b = seeds.seeds_b.clone();
    config.seeds_both = seeds.seeds_both.clone();
    config
}

fn run_with_blocking(
    network: &Network,
    base: &EngineConfig,
    blocked_a: Vec<NodeId>,
    blocked_b: Vec<NodeId>,
) -> Result<StatusCounts, DiffusionError> {
    let mut config = base.clone();
    config.blocked_a = blocked_a;
    config.blocked_b = blocked_b;
    let mut engine = DiffusionEngine::new(network, config)?;
    Ok(engine.run_to_fixed_point().final_record.counts)
}

/// Runs one sample at one total budget: an unblocked pass, the coverage
/// heuristic, and the degree and random baselines.
pub fn run_experiment(
    network: &Network,
    contagion: &ContagionConfig,
    seeds: &SeedSets,
    budget: usize,
    method: &CoverageMethod,
    rng: &mut StdRng,
) -> Result<ExperimentOutcome, DiffusionError> {
    let base = base_config(network, contagion, seeds);

    let mut engine = DiffusionEngine::new(network, base.clone())?;
    let outcome = engine.run_to_fixed_point();
    let unblocked = outcome.final_record.counts;
    let split = split_budget(&unblocked, budget);
    logging::log(
        "SIMULATOR",
        &format!(
            "unblocked spread: {} infected; budget {} split {}/{}",
            unblocked.total_infected(),
            budget,
            split.budget_a,
            split.budget_b
        ),
    );

    let choice = coverage_heuristic(&outcome, &engine, split.budget_a, split.budget_b, method);
    let cbh = run_with_blocking(network, &base, choice.blocked_a, choice.blocked_b)?;

    let seed_set: HashSet<NodeId> = seeds.all();
    let (degree_a, degree_b) = choose_by_degree(network, split.budget_a, split.budget_b, &seed_set);
    let degree = run_with_blocking(network, &base, degree_a, degree_b)?;

    let (random_a, random_b) = choose_randomly(network, split.budget_a, split.budget_b, &seed_set, rng);
    let random = run_with_blocking(network, &base, random_a, random_b)?;

    Ok(ExperimentOutcome {
        budget,
        split,
        unblocked,
        cbh,
        degree,
        random,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use crate::network_gen::preferential_attachment;
    use crate::seeds::choose_seeds;

    fn contagion_config() -> ContagionConfig {
        ContagionConfig {
            threshold: 2,
            interaction_a: 0.0,
            interaction_b: 0.0,
            seed_size: 15,
            core_degree: 4,
        }
    }

    #[test]
    fn test_split_budget_rounds_larger_side_up() {
        let counts = StatusCounts { susceptible: 80, infected_a: 15, infected_b: 5, infected_both: 0 };
        let split = split_budget(&counts, 10);
        assert_eq!(split, BudgetSplit { budget_a: 8, budget_b: 2 });

        let counts = StatusCounts { susceptible: 80, infected_a: 5, infected_b: 15, infected_both: 0 };
        let split = split_budget(&counts, 10);
        assert_eq!(split, BudgetSplit { budget_a: 2, budget_b: 8 });
    }

    #[test]
    fn test_split_budget_even_on_ties_and_no_spread() {
        let counts = StatusCounts { susceptible: 90, infected_a: 5, infected_b: 5, infected_both: 0 };
        assert_eq!(split_budget(&counts, 9), BudgetSplit { budget_a: 4, budget_b: 5 });
        let empty = StatusCounts { susceptible: 100, ..Default::default() };
        assert_eq!(split_budget(&empty, 4), BudgetSplit { budget_a: 2, budget_b: 2 });
    }

    #[test]
    fn test_experiment_blocking_never_increases_spread() {
        let mut rng = StdRng::seed_from_u64(6893);
        let network = preferential_attachment(300, 5, &mut rng);
        let contagion = contagion_config();
        let seeds = choose_seeds(&network, contagion.core_degree, contagion.seed_size, &mut rng);
        let outcome = run_experiment(&network, &contagion, &seeds, 15, &CoverageMethod::Greedy, &mut rng)
            .expect("valid experiment");
        assert!(outcome.cbh.total_infected() <= outcome.unblocked.total_infected());
        assert!(outcome.degree.total_infected() <= outcome.unblocked.total_infected());
    }
}
