//! Seed-set selection.
//!
//! Seeds are drawn as a connected component grown by random walk over a
//! dense core of the network, then split uniformly across the three
//! initial seed sets (A only, B only, both).

use std::collections::HashSet;

use contagion::network::Network;
use contagion::types::NodeId;
use rand::rngs::StdRng;
use rand::Rng;

/// The three pairwise-disjoint initial seed sets
#[derive(Debug, Clone, Default)]
pub struct SeedSets {
    pub seeds_a: Vec<NodeId>,
    pub seeds_b: Vec<NodeId>,
    pub seeds_both: Vec<NodeId>,
}

impl SeedSets {
    /// All seed nodes regardless of contagion
    pub fn all(&self) -> HashSet<NodeId> {
        self.seeds_a
            .iter()
            .chain(self.seeds_b.iter())
            .chain(self.seeds_both.iter())
            .copied()
            .collect()
    }
}

/// Grows a connected seed component of `seed_size` nodes by repeatedly
/// expanding a random member's neighborhood, restricted to the k-core with
/// the given degree (falling back to the whole network when the core is
/// too small), then rolls each member into one of the three seed sets.
pub fn choose_seeds(network: &Network, core_degree: usize, seed_size: usize, rng: &mut StdRng) -> SeedSets {
    let mut pool = network.k_core(core_degree);
    if pool.len() < seed_size {
        pool = network.nodes().collect();
    }
    let pool_set: HashSet<NodeId> = pool.iter().copied().collect();

    let mut component: Vec<NodeId> = vec![pool[rng.gen_range(0..pool.len())]];
    let mut members: HashSet<NodeId> = component.iter().copied().collect();
    let mut stalled = 0;
    while component.len() < seed_size.min(pool.len()) {
        let node_to_expand = component[rng.gen_range(0..component.len())];
        let choose_from: Vec<NodeId> = network
            .neighbors(node_to_expand)
            .iter()
            .copied()
            .filter(|v| pool_set.contains(v) && !members.contains(v))
            .collect();
        if choose_from.is_empty() {
            stalled += 1;
            // The walk can be trapped in a saturated neighborhood; restart
            // from a fresh pool node after too many dead ends.
            if stalled > 10 * seed_size {
                let fresh = pool[rng.gen_range(0..pool.len())];
                if members.insert(fresh) {
                    component.push(fresh);
                }
                stalled = 0;
            }
            continue;
        }
        let selection = choose_from[rng.gen_range(0..choose_from.len())];
        members.insert(selection);
        component.push(selection);
        stalled = 0;
    }

    let mut seeds = SeedSets::default();
    for &node in &component {
        match rng.gen_range(1..4) {
            1 => seeds.seeds_a.push(node),
            2 => seeds.seeds_b.push(node),
            _ => seeds.seeds_both.push(node),
        }
    }
    seeds
}
