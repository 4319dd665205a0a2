//! Build errors for state machine builders.

use crate::validation::GraphViolation;
use thiserror::Error;

/// Errors that can occur when declaring and building a state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidStateMachine {
    #[error("No initial state set for state machine. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("There can only be one initial state, already set to {existing} (requested {requested})")]
    ConflictingInitialState { existing: String, requested: String },

    #[error("No transitions defined. Add at least one transition with .connect()")]
    NoTransitions,

    #[error("Unsupported topology version {found}, supported: {supported}")]
    UnsupportedTopologyVersion { found: u32, supported: u32 },

    #[error(transparent)]
    Graph(#[from] GraphViolation),
}
