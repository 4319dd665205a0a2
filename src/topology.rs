//! Serializable snapshot of a declared state machine graph.
//!
//! A topology records the initial state and every transition in declaration
//! order. It does NOT include actions or interceptors (not serializable), so
//! a machine rebuilt from a topology runs no side effects. That is enough for
//! auditing a graph or replaying an event log with
//! [`StateMachine::reduce_state`](crate::effects::StateMachine::reduce_state).

use serde::{Deserialize, Serialize};

/// Version identifier for the topology format
pub const TOPOLOGY_VERSION: u32 = 1;

/// One declared transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection<S, E> {
    pub from: S,
    pub to: S,
    pub event: E,
}

/// Action-free description of a state machine graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology<S, E> {
    /// Topology format version
    pub version: u32,

    /// Start state of the machine
    pub initial: S,

    /// Transitions in declaration order
    pub transitions: Vec<Connection<S, E>>,
}

impl<S, E> Topology<S, E> {
    pub fn new(initial: S, transitions: Vec<Connection<S, E>>) -> Self {
        Self {
            version: TOPOLOGY_VERSION,
            initial,
            transitions,
        }
    }
}
