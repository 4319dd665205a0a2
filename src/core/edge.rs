//! Declared edges of a state machine graph.

use super::state::{Event, State};
use std::fmt;
use std::sync::Arc;

/// Error type returned by caller-supplied actions and interceptors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for transition actions.
/// Actions are shared between clones of a builder and the built machine.
pub type EdgeAction<N> = Arc<dyn Fn(&N) -> Result<(), BoxError> + Send + Sync>;

/// Action used when an edge is declared without one.
pub(crate) fn noop_action<N: 'static>() -> EdgeAction<N> {
    Arc::new(|_: &N| Ok::<(), BoxError>(()))
}

/// One declared edge in the state machine graph.
///
/// The initial entry has no source state and no event; every other edge has
/// both. The two cases share [`source`](Edge::source), [`target`](Edge::target)
/// and [`event`](Edge::event) so reachability can treat them uniformly.
pub enum Edge<S, E, N> {
    /// Entry into the start state of the machine.
    Initial { target: S, action: EdgeAction<N> },

    /// Transition from one state to another, triggered by an event.
    Transition {
        from: S,
        to: S,
        event: E,
        action: EdgeAction<N>,
    },
}

impl<S, E, N: 'static> Edge<S, E, N> {
    /// Initial entry into `target` with no action.
    pub fn initial(target: S) -> Self {
        Self::Initial {
            target,
            action: noop_action(),
        }
    }

    /// Transition from `from` to `to` on `event` with no action.
    pub fn transition(from: S, to: S, event: E) -> Self {
        Self::Transition {
            from,
            to,
            event,
            action: noop_action(),
        }
    }

    /// Replace the action of this edge.
    pub fn with_action<F>(self, action: F) -> Self
    where
        F: Fn(&N) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        let action: EdgeAction<N> = Arc::new(action);
        match self {
            Self::Initial { target, .. } => Self::Initial { target, action },
            Self::Transition {
                from, to, event, ..
            } => Self::Transition {
                from,
                to,
                event,
                action,
            },
        }
    }
}

impl<S: State, E: Event, N> Edge<S, E, N> {
    /// Source state, `None` for the initial entry.
    pub fn source(&self) -> Option<&S> {
        match self {
            Self::Initial { .. } => None,
            Self::Transition { from, .. } => Some(from),
        }
    }

    /// Target state.
    pub fn target(&self) -> &S {
        match self {
            Self::Initial { target, .. } => target,
            Self::Transition { to, .. } => to,
        }
    }

    /// Triggering event, `None` for the initial entry.
    pub fn event(&self) -> Option<&E> {
        match self {
            Self::Initial { .. } => None,
            Self::Transition { event, .. } => Some(event),
        }
    }

    pub fn action(&self) -> &EdgeAction<N> {
        match self {
            Self::Initial { action, .. } | Self::Transition { action, .. } => action,
        }
    }

    pub fn is_initial(&self) -> bool {
        matches!(self, Self::Initial { .. })
    }
}

impl<S: Clone, E: Clone, N> Clone for Edge<S, E, N> {
    fn clone(&self) -> Self {
        match self {
            Self::Initial { target, action } => Self::Initial {
                target: target.clone(),
                action: Arc::clone(action),
            },
            Self::Transition {
                from,
                to,
                event,
                action,
            } => Self::Transition {
                from: from.clone(),
                to: to.clone(),
                event: event.clone(),
                action: Arc::clone(action),
            },
        }
    }
}

impl<S: fmt::Debug, E: fmt::Debug, N> fmt::Debug for Edge<S, E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial { target, .. } => write!(f, "-> {target:?}"),
            Self::Transition {
                from, to, event, ..
            } => write!(f, "{from:?} -> {event:?} -> {to:?}"),
        }
    }
}
