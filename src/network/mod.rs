//! Immutable undirected network topology.
//!
//! The adjacency structure is built once and only read afterwards; all
//! per-run mutable node state (status, thresholds, blocked flags) lives in
//! the engine's own arrays indexed by `NodeId`, so repeated experiment runs
//! never copy the topology.

use crate::types::NodeId;

/// An undirected graph over nodes `0..node_count`
#[derive(Debug, Clone)]
pub struct Network {
    adjacency: Vec<Vec<NodeId>>,
}

impl Network {
    /// Creates a network with `node_count` nodes and no edges
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Creates a network from an edge list; `node_count` must cover every endpoint
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut network = Self::new(node_count);
        for &(u, v) in edges {
            network.add_edge(NodeId(u), NodeId(v));
        }
        network
    }

    /// Adds an undirected edge. Self-loops and duplicate edges are ignored.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        if u == v || self.adjacency[u.0].contains(&v) {
            return;
        }
        self.adjacency[u.0].push(v);
        self.adjacency[v.0].push(u);
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn contains(&self, u: NodeId) -> bool {
        u.0 < self.adjacency.len()
    }

    /// Iterates over all node identifiers
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.adjacency.len()).map(NodeId)
    }

    pub fn neighbors(&self, u: NodeId) -> &[NodeId] {
        &self.adjacency[u.0]
    }

    pub fn degree(&self, u: NodeId) -> usize {
        self.adjacency[u.0].len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Nodes of the maximal subgraph in which every node has degree >= k,
    /// found by iteratively peeling lower-degree nodes
    pub fn k_core(&self, k: usize) -> Vec<NodeId> {
        let mut degree: Vec<usize> = (0..self.node_count()).map(|u| self.adjacency[u].len()).collect();
        let mut removed = vec![false; self.node_count()];
        let mut queue: Vec<usize> = (0..self.node_count()).filter(|&u| degree[u] < k).collect();
        while let Some(u) = queue.pop() {
            if removed[u] {
                continue;
            }
            removed[u] = true;
            for &v in &self.adjacency[u] {
                if !removed[v.0] {
                    degree[v.0] -= 1;
                    if degree[v.0] < k {
                        queue.push(v.0);
                    }
                }
            }
        }
        (0..self.node_count()).filter(|&u| !removed[u]).map(NodeId).collect()
    }
}
