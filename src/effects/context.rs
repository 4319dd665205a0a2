//! Context provided to interceptors.

use crate::core::{ActionError, BoxError, Stage};
use std::fmt::Debug;

/// The edge being traversed, as seen by interceptors.
///
/// `from` and `event` are `None` while entering the initial state.
#[derive(Debug)]
pub struct TransitionContext<'a, S, E> {
    pub from: Option<&'a S>,
    pub to: &'a S,
    pub event: Option<&'a E>,
}

impl<S, E> Clone for TransitionContext<'_, S, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, E> Copy for TransitionContext<'_, S, E> {}

impl<'a, S, E> TransitionContext<'a, S, E> {
    pub(crate) fn initial(to: &'a S) -> Self {
        Self {
            from: None,
            to,
            event: None,
        }
    }

    pub(crate) fn transition(from: &'a S, to: &'a S, event: &'a E) -> Self {
        Self {
            from: Some(from),
            to,
            event: Some(event),
        }
    }

    /// True while entering the initial state.
    pub fn is_initial(&self) -> bool {
        self.from.is_none()
    }
}

impl<S: Debug, E: Debug> TransitionContext<'_, S, E> {
    pub(crate) fn error(&self, stage: Stage, cause: BoxError) -> ActionError {
        ActionError {
            stage,
            from: self.from.map(|from| format!("{from:?}")),
            to: format!("{:?}", self.to),
            event: self.event.map(|event| format!("{event:?}")),
            cause,
        }
    }
}
