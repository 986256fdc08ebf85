//! Synthetic network generation.
//!
//! The reference experiments run over scale-free networks; a
//! preferential-attachment generator stands in for loading edge lists,
//! which is outside the simulator's scope.

use contagion::network::Network;
use contagion::types::NodeId;
use rand::rngs::StdRng;
use rand::Rng;

/// Generates a preferential-attachment network: each new node attaches
/// `edges_per_node` edges to existing nodes, chosen proportionally to
/// their current degree.
pub fn preferential_attachment(num_nodes: usize, edges_per_node: usize, rng: &mut StdRng) -> Network {
    let mut network = Network::new(num_nodes);
    // Endpoint pool: each node appears once per incident edge, so uniform
    // draws from the pool are degree-proportional.
    let mut pool: Vec<NodeId> = Vec::new();

    let initial = edges_per_node.min(num_nodes);
    for u in 1..initial {
        network.add_edge(NodeId(u), NodeId(u - 1));
        pool.push(NodeId(u));
        pool.push(NodeId(u - 1));
    }

    for u in initial..num_nodes {
        let mut attached = 0;
        let mut attempts = 0;
        while attached < edges_per_node && attempts < edges_per_node * 20 {
            attempts += 1;
            let target = if pool.is_empty() {
                NodeId(rng.gen_range(0..u))
            } else {
                pool[rng.gen_range(0..pool.len())]
            };
            if target.0 == u || network.neighbors(NodeId(u)).contains(&target) {
                continue;
            }
            network.add_edge(NodeId(u), target);
            pool.push(NodeId(u));
            pool.push(target);
            attached += 1;
        }
    }
    network
}
