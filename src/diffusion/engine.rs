use std::collections::HashSet;

use crate::network::Network;
use crate::types::{Contagion, InteractionModel, NodeId, NodeStatus, RoundRecord, StatusCounts};
use crate::utils::logging;
use super::{DiffusionError, EngineConfig};

/// Deterministic synchronous simulator of dual-contagion threshold spread.
///
/// The engine reads the caller-owned topology and owns a private per-node
/// status/attribute overlay, reset by constructing a new engine. Every
/// round is computed from the previous round's snapshot, so update order
/// within a round never matters.
pub struct DiffusionEngine<'a> {
    network: &'a Network,
    threshold_a: Vec<u32>,
    threshold_b: Vec<u32>,
    blocked_a: Vec<bool>,
    blocked_b: Vec<bool>,
    interaction_a: f64,
    interaction_b: f64,
    model: InteractionModel,
    status: Vec<NodeStatus>,
    /// Infected-A neighbor count at the moment of first A-activation, per node
    affected_a: Vec<u32>,
    /// Infected-B neighbor count at the moment of first B-activation, per node
    affected_b: Vec<u32>,
    /// Seed nodes carrying A at round 0 (seeds_a plus seeds_both), sorted
    initial_a: Vec<NodeId>,
    /// Seed nodes carrying B at round 0 (seeds_b plus seeds_both), sorted
    initial_b: Vec<NodeId>,
    round: usize,
}

/// Result of running the engine to a fixed point
#[derive(Debug, Clone)]
pub struct FixedPointOutcome {
    /// Per-round newly-infected-A sets; round 0 holds the A seeds
    pub frontiers_a: Vec<Vec<NodeId>>,
    /// Per-round newly-infected-B sets; round 0 holds the B seeds
    pub frontiers_b: Vec<Vec<NodeId>>,
    /// The record of the final (fixed-point) round
    pub final_record: RoundRecord,
}

impl<'a> DiffusionEngine<'a> {
    /// Validates the configuration and seeds the initial statuses.
    ///
    /// This is the only point at which the engine can fail; a constructed
    /// engine never errors mid-run.
    pub fn new(network: &'a Network, config: EngineConfig) -> Result<Self, DiffusionError> {
        let n = network.node_count();
        for interaction in [config.interaction_a, config.interaction_b] {
            if !(-1.0..=1.0).contains(&interaction) {
                return Err(DiffusionError::InteractionOutOfRange(interaction));
            }
        }
        for (name, thresholds) in [("threshold_a", &config.threshold_a), ("threshold_b", &config.threshold_b)] {
            if thresholds.len() != n {
                return Err(DiffusionError::ParameterLengthMismatch {
                    name,
                    expected: n,
                    got: thresholds.len(),
                });
            }
        }

        let mut blocked_a = vec![false; n];
        let mut blocked_b = vec![false; n];
        for (flags, nodes) in [(&mut blocked_a, &config.blocked_a), (&mut blocked_b, &config.blocked_b)] {
            for &u in nodes.iter() {
                if !network.contains(u) {
                    return Err(DiffusionError::NodeOutOfBounds(u, n));
                }
                flags[u.0] = true;
            }
        }

        let mut status = vec![NodeStatus::Susceptible; n];
        let mut seeded = HashSet::new();
        for (seeds, seed_status) in [
            (&config.seeds_a, NodeStatus::InfectedA),
            (&config.seeds_b, NodeStatus::InfectedB),
            (&config.seeds_both, NodeStatus::InfectedBoth),
        ] {
            for &u in seeds.iter() {
                if !network.contains(u) {
                    return Err(DiffusionError::NodeOutOfBounds(u, n));
                }
                if !seeded.insert(u) {
                    return Err(DiffusionError::OverlappingSeeds(u));
                }
                status[u.0] = seed_status;
            }
        }

        let mut initial_a: Vec<NodeId> = config.seeds_a.iter().chain(config.seeds_both.iter()).copied().collect();
        let mut initial_b: Vec<NodeId> = config.seeds_b.iter().chain(config.seeds_both.iter()).copied().collect();
        initial_a.sort();
        initial_b.sort();

        Ok(Self {
            network,
            threshold_a: config.threshold_a,
            threshold_b: config.threshold_b,
            blocked_a,
            blocked_b,
            interaction_a: config.interaction_a,
            interaction_b: config.interaction_b,
            model: config.model,
            status,
            affected_a: vec![0; n],
            affected_b: vec![0; n],
            initial_a,
            initial_b,
            round: 0,
        })
    }

    pub fn status(&self, u: NodeId) -> NodeStatus {
        self.status[u.0]
    }

    pub fn threshold(&self, u: NodeId, contagion: Contagion) -> u32 {
        match contagion {
            Contagion::A => self.threshold_a[u.0],
            Contagion::B => self.threshold_b[u.0],
        }
    }

    pub fn is_blocked(&self, u: NodeId, contagion: Contagion) -> bool {
        match contagion {
            Contagion::A => self.blocked_a[u.0],
            Contagion::B => self.blocked_b[u.0],
        }
    }

    /// The already-infected neighbor count recorded at the node's first
    /// activation for the given contagion; zero if never activated
    pub fn affected(&self, u: NodeId, contagion: Contagion) -> u32 {
        match contagion {
            Contagion::A => self.affected_a[u.0],
            Contagion::B => self.affected_b[u.0],
        }
    }

    /// Seed nodes carrying the given contagion at round 0
    pub fn initial_frontier(&self, contagion: Contagion) -> &[NodeId] {
        match contagion {
            Contagion::A => &self.initial_a,
            Contagion::B => &self.initial_b,
        }
    }

    pub fn network(&self) -> &Network {
        self.network
    }

    /// Node count per status in the current configuration
    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for &status in &self.status {
            match status {
                NodeStatus::Susceptible => counts.susceptible += 1,
                NodeStatus::InfectedA => counts.infected_a += 1,
                NodeStatus::InfectedB => counts.infected_b += 1,
                NodeStatus::InfectedBoth => counts.infected_both += 1,
            }
        }
        counts
    }

    fn neighbor_counts(&self, u: NodeId, snapshot: &[NodeStatus]) -> (u32, u32) {
        let mut cnt_a = 0;
        let mut cnt_b = 0;
        for &v in self.network.neighbors(u) {
            let status = snapshot[v.0];
            if status.has(Contagion::A) {
                cnt_a += 1;
            }
            if status.has(Contagion::B) {
                cnt_b += 1;
            }
        }
        (cnt_a, cnt_b)
    }

    /// Advances exactly one round and reports what changed.
    ///
    /// All updates are computed against the previous round's snapshot and
    /// swapped in together once the pass over the nodes completes.
    pub fn step(&mut self) -> RoundRecord {
        let previous_counts = self.counts();
        let snapshot = self.status.clone();
        let mut next = snapshot.clone();
        let mut newly_a = Vec::new();
        let mut newly_b = Vec::new();

        for u in self.network.nodes() {
            let current = snapshot[u.0];
            if current.is_terminal() {
                continue;
            }
            let (cnt_a, cnt_b) = self.neighbor_counts(u, &snapshot);
            // A node already holding one contagion clears an interaction-
            // adjusted threshold for the counterpart contagion.
            let (required_a, required_b) = match current {
                NodeStatus::Susceptible => (self.threshold_a[u.0], self.threshold_b[u.0]),
                NodeStatus::InfectedA => (
                    self.threshold_a[u.0],
                    self.model.adjusted_threshold(self.threshold_b[u.0], self.interaction_a),
                ),
                NodeStatus::InfectedB => (
                    self.model.adjusted_threshold(self.threshold_a[u.0], self.interaction_b),
                    self.threshold_b[u.0],
                ),
                NodeStatus::InfectedBoth => unreachable!("terminal status handled above"),
            };
            let satisfied_a = !current.has(Contagion::A) && !self.blocked_a[u.0] && cnt_a >= required_a;
            let satisfied_b = !current.has(Contagion::B) && !self.blocked_b[u.0] && cnt_b >= required_b;

            let mut updated = current;
            if satisfied_a {
                updated = updated.with(Contagion::A);
                self.affected_a[u.0] = cnt_a;
                newly_a.push(u);
            }
            if satisfied_b {
                updated = updated.with(Contagion::B);
                self.affected_b[u.0] = cnt_b;
                newly_b.push(u);
            }
            next[u.0] = updated;
        }

        self.status = next;
        self.round += 1;
        let counts = self.counts();
        let delta = counts.delta_from(&previous_counts);
        let fixed_point = newly_a.is_empty() && newly_b.is_empty();
        RoundRecord {
            round: self.round,
            newly_a,
            newly_b,
            counts,
            delta,
            fixed_point,
        }
    }

    /// Steps until a round produces no new activation for either contagion.
    ///
    /// Terminates within `node_count` activation rounds: statuses only ever
    /// gain contagions, and each non-terminal round activates at least one
    /// node. Returns the ordered per-round frontier sequences (round 0 is
    /// the seed configuration) and the final round's record.
    pub fn run_to_fixed_point(&mut self) -> FixedPointOutcome {
        let mut frontiers_a = vec![self.initial_a.clone()];
        let mut frontiers_b = vec![self.initial_b.clone()];
        loop {
            let record = self.step();
            if record.fixed_point {
                logging::log(
                    "DIFFUSION",
                    &format!(
                        "fixed point after round {}: {} infected of {} nodes",
                        record.round,
                        record.counts.total_infected(),
                        self.network.node_count()
                    ),
                );
                return FixedPointOutcome {
                    frontiers_a,
                    frontiers_b,
                    final_record: record,
                };
            }
            frontiers_a.push(record.newly_a.clone());
            frontiers_b.push(record.newly_b.clone());
        }
    }
}
