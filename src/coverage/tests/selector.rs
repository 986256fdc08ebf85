use crate::coverage::selector::{build_instance, try_all_sets, CoverageMethod, CoverageView};
use crate::types::{Contagion, NodeId};

/// A fixed view of a finished run: uniform thresholds and affected counts
/// over an explicit adjacency, matching the reference selector tests.
pub struct StubView {
    adjacency: Vec<Vec<NodeId>>,
    threshold: u32,
    affected: u32,
}

impl StubView {
    pub fn new(node_count: usize, edges: &[(usize, usize)], threshold: u32, affected: u32) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        for &(u, v) in edges {
            adjacency[u].push(NodeId(v));
            adjacency[v].push(NodeId(u));
        }
        Self { adjacency, threshold, affected }
    }
}

impl CoverageView for StubView {
    fn neighbors(&self, u: NodeId) -> &[NodeId] {
        &self.adjacency[u.0]
    }

    fn threshold(&self, _u: NodeId, _contagion: Contagion) -> u32 {
        self.threshold
    }

    fn affected(&self, _u: NodeId, _contagion: Contagion) -> u32 {
        self.affected
    }
}

/// The reference selector fixture: candidates 1-4 each adjacent to targets
/// 5-7, node 5 additionally adjacent to 10, 12, and 13.
fn reference_view() -> StubView {
    let mut edges = Vec::new();
    for u in 1..=4 {
        for v in 5..=7 {
            edges.push((u, v));
        }
    }
    edges.extend([(5, 12), (5, 10), (5, 13)]);
    // Every activated node saw three infected neighbors against threshold 2.
    StubView::new(14, &edges, 2, 3)
}

fn ids(nodes: &[usize]) -> Vec<NodeId> {
    nodes.iter().copied().map(NodeId).collect()
}

#[test]
fn test_instance_requirements() {
    let view = reference_view();
    let instance = build_instance(&ids(&[1, 2, 3, 4]), &ids(&[5, 6, 7]), &view, Contagion::A);
    assert_eq!(instance.subsets.len(), 4);
    for subset in &instance.subsets {
        assert_eq!(subset.len(), 3);
    }
    assert_eq!(instance.unsatisfied.len(), 3);
    // affected - threshold + 1 = 3 - 2 + 1
    assert!(instance.requirements.values().all(|&r| r == 2));
}

#[test]
fn test_try_all_blocks_whole_frontier_within_budget() {
    let view = reference_view();
    let frontiers = vec![ids(&[1, 2, 3, 4]), ids(&[5, 6, 7])];
    let solution = try_all_sets(&frontiers, &[], 4, &view, Contagion::A, &CoverageMethod::Greedy);
    assert_eq!(solution, ids(&[1, 2, 3, 4]));
}

#[test]
fn test_try_all_finds_greedy_cover() {
    let view = reference_view();
    let frontiers = vec![ids(&[1, 2, 3, 4, 10, 11, 12, 13]), ids(&[5, 6, 7])];
    // Two fully-covering candidates satisfy every requirement of 2.
    let solution = try_all_sets(&frontiers, &[], 2, &view, Contagion::A, &CoverageMethod::Greedy);
    assert_eq!(solution, ids(&[1, 2]));
}

#[test]
fn test_try_all_degrades_to_least_unsatisfied() {
    let view = reference_view();
    let frontiers = vec![ids(&[1, 2, 3, 4, 10, 11, 12, 13]), ids(&[5, 6, 7])];
    // Budget 1 cannot meet any requirement of 2; the best failing round's
    // choice is still returned.
    let solution = try_all_sets(&frontiers, &[], 1, &view, Contagion::A, &CoverageMethod::Greedy);
    assert_eq!(solution, ids(&[1]));
}

#[test]
fn test_try_all_skips_seed_round() {
    let view = reference_view();
    let frontiers = vec![ids(&[1, 2]), ids(&[3, 4]), ids(&[5, 6, 7])];
    // Round 0 holds only seeds, so the first usable round is round 1,
    // which fits the budget outright.
    let solution = try_all_sets(&frontiers, &ids(&[1, 2]), 2, &view, Contagion::A, &CoverageMethod::Greedy);
    assert_eq!(solution, ids(&[3, 4]));
}

#[test]
fn test_try_all_with_zero_budget_blocks_nothing() {
    let view = reference_view();
    let frontiers = vec![ids(&[1, 2, 3, 4]), ids(&[5, 6, 7])];
    let solution = try_all_sets(&frontiers, &[], 0, &view, Contagion::A, &CoverageMethod::Greedy);
    assert!(solution.is_empty());
}

#[test]
fn test_try_all_with_single_frontier_blocks_nothing() {
    let view = reference_view();
    let frontiers = vec![ids(&[1, 2, 3, 4])];
    let solution = try_all_sets(&frontiers, &[], 3, &view, Contagion::A, &CoverageMethod::Greedy);
    assert!(solution.is_empty());
}
