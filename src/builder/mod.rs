//! Builder API for state machine construction.
//!
//! This module provides the fluent builder that declares a graph, the error
//! raised when a declaration is not a valid state machine, and the
//! `state_enum!` macro for declaring state and event types with minimal
//! boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::InvalidStateMachine;
pub use machine::StateMachineBuilder;
pub use transition::TransitionDefinition;
