//! Core state machine types.
//!
//! This module contains the values the rest of the crate is built from:
//! - State and event marker traits
//! - The declared graph edges and their actions
//! - The outcome of processing an event
//!
//! Nothing in this module executes a transition.

mod edge;
mod outcome;
mod state;

pub use edge::{BoxError, Edge, EdgeAction};
pub use outcome::{ActionError, Outcome, Stage};
pub use state::{Event, State};

pub(crate) use edge::noop_action;
