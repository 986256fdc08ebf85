use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable index identifying a node in a `Network`
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// One of the two contagions spreading over the network
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Contagion {
    A,
    B,
}

impl Contagion {
    /// The counterpart contagion
    pub fn other(self) -> Self {
        match self {
            Contagion::A => Contagion::B,
            Contagion::B => Contagion::A,
        }
    }
}

/// Infection status of a single node.
///
/// `InfectedBoth` is absorbing: once reached, no further transitions occur.
/// Viewed as the pair (has A, has B), a node's status is non-decreasing
/// over rounds.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum NodeStatus {
    /// Not infected with either contagion
    Susceptible,
    /// Infected with contagion A only
    InfectedA,
    /// Infected with contagion B only
    InfectedB,
    /// Infected with both contagions (terminal)
    InfectedBoth,
}

impl NodeStatus {
    /// Whether this status carries the given contagion
    pub fn has(self, contagion: Contagion) -> bool {
        match (self, contagion) {
            (NodeStatus::InfectedBoth, _) => true,
            (NodeStatus::InfectedA, Contagion::A) => true,
            (NodeStatus::InfectedB, Contagion::B) => true,
            _ => false,
        }
    }

    /// The monotone union of this status with a newly acquired contagion
    pub fn with(self, contagion: Contagion) -> Self {
        match (self.has(Contagion::A) || contagion == Contagion::A,
               self.has(Contagion::B) || contagion == Contagion::B) {
            (true, true) => NodeStatus::InfectedBoth,
            (true, false) => NodeStatus::InfectedA,
            (false, true) => NodeStatus::InfectedB,
            (false, false) => NodeStatus::Susceptible,
        }
    }

    /// Whether any further transition is possible from this status
    pub fn is_terminal(self) -> bool {
        self == NodeStatus::InfectedBoth
    }

    /// Partial-order comparison used by the monotonicity invariant:
    /// `other` must carry every contagion `self` carries
    pub fn le(self, other: NodeStatus) -> bool {
        (!self.has(Contagion::A) || other.has(Contagion::A))
            && (!self.has(Contagion::B) || other.has(Contagion::B))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeStatus::Susceptible => write!(f, "Susceptible"),
            NodeStatus::InfectedA => write!(f, "InfectedA"),
            NodeStatus::InfectedB => write!(f, "InfectedB"),
            NodeStatus::InfectedBoth => write!(f, "InfectedBoth"),
        }
    }
}

/// How co-infection adjusts the threshold of the contagion a node does not
/// yet hold. Selected once at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InteractionModel {
    /// Apply the caller's signed interaction scalar as given (default)
    Signed,
    /// Contagions ignore each other
    Independent,
    /// Holding one contagion raises the counterpart threshold by |i|*t
    Competing,
    /// Holding one contagion lowers the counterpart threshold by |i|*t
    Cooperating,
}

impl InteractionModel {
    /// The counterpart threshold a co-infected node must clear:
    /// floor(t + t*i), clamped at zero.
    pub fn adjusted_threshold(self, threshold: u32, interaction: f64) -> u32 {
        let scale = match self {
            InteractionModel::Signed => interaction,
            InteractionModel::Independent => 0.0,
            InteractionModel::Competing => interaction.abs(),
            InteractionModel::Cooperating => -interaction.abs(),
        };
        let t = threshold as f64;
        (t + t * scale).floor().max(0.0) as u32
    }
}

impl Default for InteractionModel {
    fn default() -> Self {
        InteractionModel::Signed
    }
}

/// Number of nodes in each status after a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    pub susceptible: usize,
    pub infected_a: usize,
    pub infected_b: usize,
    pub infected_both: usize,
}

impl StatusCounts {
    pub fn get(&self, status: NodeStatus) -> usize {
        match status {
            NodeStatus::Susceptible => self.susceptible,
            NodeStatus::InfectedA => self.infected_a,
            NodeStatus::InfectedB => self.infected_b,
            NodeStatus::InfectedBoth => self.infected_both,
        }
    }

    /// Nodes carrying contagion A (alone or with B)
    pub fn total_a(&self) -> usize {
        self.infected_a + self.infected_both
    }

    /// Nodes carrying contagion B (alone or with A)
    pub fn total_b(&self) -> usize {
        self.infected_b + self.infected_both
    }

    /// Nodes carrying at least one contagion
    pub fn total_infected(&self) -> usize {
        self.infected_a + self.infected_b + self.infected_both
    }

    /// Signed per-status change from `previous` to `self`
    pub fn delta_from(&self, previous: &StatusCounts) -> StatusDelta {
        StatusDelta {
            susceptible: self.susceptible as i64 - previous.susceptible as i64,
            infected_a: self.infected_a as i64 - previous.infected_a as i64,
            infected_b: self.infected_b as i64 - previous.infected_b as i64,
            infected_both: self.infected_both as i64 - previous.infected_both as i64,
        }
    }
}

/// Signed change in per-status counts between consecutive rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusDelta {
    pub susceptible: i64,
    pub infected_a: i64,
    pub infected_b: i64,
    pub infected_both: i64,
}

impl StatusDelta {
    pub fn is_zero(&self) -> bool {
        *self == StatusDelta::default()
    }
}

/// Outcome of one completed simulation round.
///
/// Created by the engine each round and handed to the caller; the engine
/// does not retain it.
#[derive(Debug, Clone, Serialize)]
pub struct RoundRecord {
    /// Round number, counting the seeded configuration as round 0
    pub round: usize,
    /// Nodes that acquired contagion A this round
    pub newly_a: Vec<NodeId>,
    /// Nodes that acquired contagion B this round
    pub newly_b: Vec<NodeId>,
    /// Node count per status after this round
    pub counts: StatusCounts,
    /// Change in per-status counts relative to the previous round
    pub delta: StatusDelta,
    /// Whether this round produced no new activations
    pub fixed_point: bool,
}
