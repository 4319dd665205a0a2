//! Structural violations found in a declared graph.

use thiserror::Error;

/// Errors found when validating the shape of a state machine graph.
///
/// States and events are recorded in their `Debug` form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphViolation {
    #[error("Expected one initial edge entering {initial}, found entries into [{}]", .entries.join(", "))]
    InitialEntry {
        initial: String,
        entries: Vec<String>,
    },

    #[error("Transition from {from} to {to} via {event} occurs twice")]
    DuplicateTransition {
        from: String,
        to: String,
        event: String,
    },

    #[error("Transition from {from} via {event} is ambiguous, it leads to both {first} and {second}")]
    AmbiguousTransition {
        from: String,
        event: String,
        first: String,
        second: String,
    },

    #[error("Unable to reach states from initial state {initial}: {}", .states.join(", "))]
    Unreachable {
        initial: String,
        states: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_lists_every_state() {
        let violation = GraphViolation::Unreachable {
            initial: "S1".to_string(),
            states: vec!["S3".to_string(), "S4".to_string()],
        };

        assert_eq!(
            violation.to_string(),
            "Unable to reach states from initial state S1: S3, S4"
        );
    }

    #[test]
    fn duplicate_names_the_edge() {
        let violation = GraphViolation::DuplicateTransition {
            from: "'b'".to_string(),
            to: "'c'".to_string(),
            event: "E2".to_string(),
        };

        assert_eq!(
            violation.to_string(),
            "Transition from 'b' to 'c' via E2 occurs twice"
        );
    }
}
