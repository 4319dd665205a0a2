//! Structural validation of a declared state machine graph.
//!
//! A graph is well formed when:
//! - exactly one initial edge enters the initial state
//! - no (source, target, event) combination is declared twice
//! - no source state and event lead to two different targets
//! - every state can be reached from the initial state
//!
//! [`validate`] stops at the first violation and is what
//! [`StateMachineBuilder::build`](crate::builder::StateMachineBuilder::build)
//! runs. [`diagnose`] runs every check and accumulates the violations with
//! Stillwater's `Validation`, which is handy when reporting on a large graph.
//!
//! # Example
//!
//! ```rust
//! use transit::core::Edge;
//! use transit::validation::{diagnose, validate, GraphViolation};
//!
//! let edges: Vec<Edge<char, u8, ()>> = vec![
//!     Edge::initial('a'),
//!     Edge::transition('a', 'b', 1),
//!     Edge::transition('c', 'd', 2),
//! ];
//!
//! assert!(matches!(
//!     validate(&'a', &edges),
//!     Err(GraphViolation::Unreachable { .. })
//! ));
//! assert!(diagnose(&'a', &edges).is_failure());
//! ```

pub(crate) mod rules;
pub mod violations;

pub use violations::GraphViolation;

use crate::core::{Edge, Event, State};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Validate a graph, returning the first violation found.
///
/// Checks run in order: the initial entry, duplicates, ambiguous
/// transitions, reachability.
pub fn validate<S: State, E: Event, N>(
    initial: &S,
    edges: &[Edge<S, E, N>],
) -> Result<(), GraphViolation> {
    rules::require_single_entry(initial, edges)?;
    rules::reject_duplicates(edges)?;
    rules::reject_ambiguous(edges)?;
    rules::reject_unreachable(initial, edges)
}

/// Validate a graph, accumulating the violations of every check.
pub fn diagnose<S: State, E: Event, N>(
    initial: &S,
    edges: &[Edge<S, E, N>],
) -> Validation<(), NonEmptyVec<GraphViolation>> {
    let checks = vec![
        into_validation(rules::require_single_entry(initial, edges)),
        into_validation(rules::reject_duplicates(edges)),
        into_validation(rules::reject_ambiguous(edges)),
        into_validation(rules::reject_unreachable(initial, edges)),
    ];

    Validation::all_vec(checks).map(|_| ())
}

pub(crate) fn into_validation<Err>(result: Result<(), Err>) -> Validation<(), NonEmptyVec<Err>> {
    match result {
        Ok(()) => Validation::success(()),
        Err(error) => Validation::fail(error),
    }
}
