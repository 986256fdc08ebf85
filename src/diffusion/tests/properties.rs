use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::diffusion::{DiffusionEngine, EngineConfig};
use crate::network::Network;
use crate::types::{NodeId, NodeStatus};

fn random_setup(seed: u64, node_count: usize) -> (Network, EngineConfig) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut network = Network::new(node_count);
    for u in 0..node_count {
        for v in (u + 1)..node_count {
            if rng.gen_bool(0.08) {
                network.add_edge(NodeId(u), NodeId(v));
            }
        }
    }
    let mut config = EngineConfig::uniform(node_count, 0);
    config.threshold_a = (0..node_count).map(|_| rng.gen_range(1..4)).collect();
    config.threshold_b = (0..node_count).map(|_| rng.gen_range(1..4)).collect();
    config.interaction_a = rng.gen_range(-1.0..1.0);
    config.interaction_b = rng.gen_range(-1.0..1.0);
    config.seeds_a = (0..3).map(NodeId).collect();
    config.seeds_b = (3..6).map(NodeId).collect();
    config.seeds_both = (6..8).map(NodeId).collect();
    (network, config)
}

#[test]
fn test_statuses_are_monotone_and_runs_terminate() {
    for seed in 0..5 {
        let node_count = 60;
        let (network, config) = random_setup(seed, node_count);
        let mut engine = DiffusionEngine::new(&network, config).expect("valid configuration");

        let mut previous: Vec<NodeStatus> = network.nodes().map(|u| engine.status(u)).collect();
        let mut rounds = 0;
        loop {
            let record = engine.step();
            rounds += 1;
            for u in network.nodes() {
                let current = engine.status(u);
                assert!(
                    previous[u.0].le(current),
                    "node {} regressed from {} to {} (seed {})",
                    u,
                    previous[u.0],
                    current,
                    seed
                );
                previous[u.0] = current;
            }
            if record.fixed_point {
                break;
            }
            assert!(rounds <= node_count, "no fixed point within {} rounds", node_count);
        }
    }
}

#[test]
fn test_fixed_point_is_idempotent() {
    let (network, config) = random_setup(42, 60);
    let mut engine = DiffusionEngine::new(&network, config).expect("valid configuration");
    let outcome = engine.run_to_fixed_point();
    let settled = outcome.final_record.counts;

    // Once a round activates nothing, every later round activates nothing.
    for _ in 0..3 {
        let record = engine.step();
        assert!(record.fixed_point);
        assert_eq!(record.counts, settled);
        assert!(record.delta.is_zero());
    }
}

#[test]
fn test_frontiers_partition_the_infected_set() {
    let (network, config) = random_setup(7, 60);
    let mut engine = DiffusionEngine::new(&network, config).expect("valid configuration");
    let outcome = engine.run_to_fixed_point();

    let mut seen = std::collections::HashSet::new();
    for frontier in &outcome.frontiers_a {
        for &u in frontier {
            assert!(seen.insert(u), "node {} appears in two A frontiers", u);
        }
    }
    let infected_a = network.nodes().filter(|&u| engine.status(u).has(crate::types::Contagion::A)).count();
    assert_eq!(seen.len(), infected_a);
}
