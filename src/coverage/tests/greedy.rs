use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::coverage::greedy_smc;
use crate::types::NodeId;

fn subsets() -> Vec<HashSet<NodeId>> {
    [vec![1, 2], vec![1], vec![2, 3], vec![3, 1]]
        .into_iter()
        .map(|s| s.into_iter().map(NodeId).collect())
        .collect()
}

fn unsatisfied() -> HashSet<NodeId> {
    [1, 2, 3].into_iter().map(NodeId).collect()
}

fn requirements(reqs: &[(usize, i64)]) -> HashMap<NodeId, i64> {
    reqs.iter().map(|&(v, r)| (NodeId(v), r)).collect()
}

#[test]
fn test_covering_with_loose_budget_stops_early() {
    let cover = greedy_smc(5, &subsets(), unsatisfied(), requirements(&[(1, 1), (2, 2), (3, 1)]));
    // {1,2} then {2,3} meets every requirement; the remaining budget is unused.
    assert_eq!(cover.coverage, vec![subsets()[0].clone(), subsets()[2].clone()]);
    assert_eq!(cover.chosen, vec![0, 2]);
    assert!(cover.unsatisfied.is_empty());
}

#[test]
fn test_covering_with_higher_requirements() {
    let cover = greedy_smc(3, &subsets(), unsatisfied(), requirements(&[(1, 2), (2, 2), (3, 1)]));
    assert_eq!(
        cover.coverage,
        vec![subsets()[0].clone(), subsets()[2].clone(), subsets()[1].clone()]
    );
    assert_eq!(cover.chosen, vec![0, 2, 1]);
    assert!(cover.unsatisfied.is_empty());
}

#[test]
fn test_covering_exhausts_budget() {
    let cover = greedy_smc(3, &subsets(), unsatisfied(), requirements(&[(1, 2), (2, 2), (3, 2)]));
    assert_eq!(
        cover.coverage,
        vec![subsets()[0].clone(), subsets()[2].clone(), subsets()[3].clone()]
    );
    assert_eq!(cover.chosen, vec![0, 2, 3]);
    assert!(cover.unsatisfied.is_empty());
}

#[test]
fn test_budget_zero_chooses_nothing() {
    let cover = greedy_smc(0, &subsets(), unsatisfied(), requirements(&[(1, 1), (2, 1), (3, 1)]));
    assert!(cover.coverage.is_empty());
    assert!(cover.chosen.is_empty());
    assert_eq!(cover.unsatisfied, unsatisfied());
}

#[test]
fn test_useless_candidates_still_consume_budget() {
    // No subset intersects the unsatisfied set: every pick degenerates to
    // index 0 and burns one unit of budget (reference selector behavior).
    let useless: Vec<HashSet<NodeId>> = vec![
        [NodeId(8)].into_iter().collect(),
        [NodeId(9)].into_iter().collect(),
    ];
    let unsat: HashSet<NodeId> = [NodeId(5)].into_iter().collect();
    let cover = greedy_smc(3, &useless, unsat.clone(), requirements(&[(5, 1)]));
    assert_eq!(cover.coverage.len(), 3);
    assert_eq!(cover.chosen, vec![0]);
    assert_eq!(cover.unsatisfied, unsat);
}

#[test]
fn test_no_subsets_is_valid() {
    let unsat: HashSet<NodeId> = [NodeId(5)].into_iter().collect();
    let cover = greedy_smc(4, &[], unsat.clone(), requirements(&[(5, 1)]));
    assert!(cover.coverage.is_empty());
    assert_eq!(cover.unsatisfied, unsat);
}

#[test]
fn test_empty_unsatisfied_at_entry_picks_nothing() {
    let cover = greedy_smc(3, &subsets(), HashSet::new(), HashMap::new());
    assert!(cover.coverage.is_empty());
    assert!(cover.chosen.is_empty());
    assert!(cover.unsatisfied.is_empty());
}

/// Smallest number of subsets meeting every requirement, by exhaustive
/// enumeration over all selections; `None` when no selection is feasible.
fn brute_force_optimal(
    subsets: &[HashSet<NodeId>],
    requirements: &HashMap<NodeId, i64>,
) -> Option<usize> {
    let n = subsets.len();
    let mut best: Option<usize> = None;
    for mask in 0u32..(1 << n) {
        let feasible = requirements.iter().all(|(v, &requirement)| {
            let covered = (0..n)
                .filter(|&j| mask & (1 << j) != 0 && subsets[j].contains(v))
                .count() as i64;
            covered >= requirement
        });
        if feasible {
            let size = mask.count_ones() as usize;
            if best.map_or(true, |b| size < b) {
                best = Some(size);
            }
        }
    }
    best
}

#[test]
fn test_greedy_stays_within_logarithmic_factor_of_optimal() {
    let mut rng = StdRng::seed_from_u64(3251);
    for _ in 0..50 {
        let num_subsets = rng.gen_range(2..=6);
        let num_targets = rng.gen_range(1..=5);
        let subsets: Vec<HashSet<NodeId>> = (0..num_subsets)
            .map(|_| {
                (0..num_targets)
                    .filter(|_| rng.gen_bool(0.5))
                    .map(NodeId)
                    .collect()
            })
            .collect();

        // Requirements capped by availability, so every instance is
        // feasible; targets no subset covers are left out entirely.
        let mut reqs = HashMap::new();
        let mut unsat = HashSet::new();
        for v in (0..num_targets).map(NodeId) {
            let available = subsets.iter().filter(|s| s.contains(&v)).count() as i64;
            if available == 0 {
                continue;
            }
            reqs.insert(v, rng.gen_range(1..=available.min(2)));
            unsat.insert(v);
        }
        if unsat.is_empty() {
            continue;
        }

        let optimal = brute_force_optimal(&subsets, &reqs).expect("feasible by construction");
        let cover = greedy_smc(num_subsets, &subsets, unsat.clone(), reqs);
        assert!(cover.unsatisfied.is_empty(), "greedy failed a feasible instance");
        let bound = ((unsat.len() as f64).ln() + 1.0) * optimal as f64;
        assert!(
            cover.chosen.len() as f64 <= bound + 1e-9,
            "greedy chose {} sets, optimal {}, bound {:.2}",
            cover.chosen.len(),
            optimal,
            bound
        );
    }
}
