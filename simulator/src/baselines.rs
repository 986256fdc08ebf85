//! Baseline blocking strategies the coverage heuristic is compared
//! against: highest-degree nodes and uniformly random nodes, both
//! excluding seeds.

use std::collections::HashSet;

use contagion::network::Network;
use contagion::types::NodeId;
use rand::rngs::StdRng;
use rand::Rng;

/// Blocks the highest-degree non-seed nodes: the first `budget_a` for
/// contagion A and the first `budget_b` for contagion B.
pub fn choose_by_degree(
    network: &Network,
    budget_a: usize,
    budget_b: usize,
    seed_set: &HashSet<NodeId>,
) -> (Vec<NodeId>, Vec<NodeId>) {
    let mut by_degree: Vec<NodeId> = network.nodes().filter(|u| !seed_set.contains(u)).collect();
    by_degree.sort_by(|a, b| network.degree(*b).cmp(&network.degree(*a)).then(a.cmp(b)));
    let choices_a = by_degree.iter().copied().take(budget_a).collect();
    let choices_b = by_degree.iter().copied().take(budget_b).collect();
    (choices_a, choices_b)
}

/// Blocks uniformly random non-seed nodes, sampled without replacement
/// per contagion.
pub fn choose_randomly(
    network: &Network,
    budget_a: usize,
    budget_b: usize,
    seed_set: &HashSet<NodeId>,
    rng: &mut StdRng,
) -> (Vec<NodeId>, Vec<NodeId>) {
    let eligible: Vec<NodeId> = network.nodes().filter(|u| !seed_set.contains(u)).collect();
    let mut sample = |budget: usize| -> Vec<NodeId> {
        let mut chosen = HashSet::new();
        let mut choices = Vec::new();
        while choices.len() < budget.min(eligible.len()) {
            let candidate = eligible[rng.gen_range(0..eligible.len())];
            if chosen.insert(candidate) {
                choices.push(candidate);
            }
        }
        choices
    };
    let choices_a = sample(budget_a);
    let choices_b = sample(budget_b);
    (choices_a, choices_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_degree_baseline_skips_seeds() {
        // Star: node 0 has the highest degree but is a seed.
        let network = Network::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 2)]);
        let seed_set: HashSet<NodeId> = [NodeId(0)].into_iter().collect();
        let (choices_a, choices_b) = choose_by_degree(&network, 2, 1, &seed_set);
        assert_eq!(choices_a, vec![NodeId(1), NodeId(2)]);
        assert_eq!(choices_b, vec![NodeId(1)]);
    }

    #[test]
    fn test_random_baseline_respects_budget_and_seeds() {
        let network = Network::from_edges(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
        let seed_set: HashSet<NodeId> = [NodeId(0), NodeId(1)].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(1);
        let (choices_a, choices_b) = choose_randomly(&network, 3, 10, &seed_set, &mut rng);
        assert_eq!(choices_a.len(), 3);
        // Only four eligible nodes exist.
        assert_eq!(choices_b.len(), 4);
        for u in choices_a.iter().chain(choices_b.iter()) {
            assert!(!seed_set.contains(u));
        }
    }
}
