//! Outcome of processing an event.

use super::edge::BoxError;
use std::fmt;
use thiserror::Error;

/// Part of the transition pipeline that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// A pre-interceptor, before the action ran
    Intercept,

    /// The action associated with the edge
    Action,

    /// A post-interceptor, after the action completed
    PostIntercept,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Intercept => "interceptor",
            Self::Action => "action",
            Self::PostIntercept => "post-interceptor",
        };
        f.write_str(name)
    }
}

/// Recoverable error raised by an action or interceptor.
///
/// The edge is recorded in `Debug` form so the error stays independent of
/// the machine's type parameters. `from` and `event` are `None` when the
/// error was raised while entering the initial state.
#[derive(Debug, Error)]
#[error("{stage} failed on transition {} -> {} -> {to}: {cause}", .from.as_deref().unwrap_or("<initial>"), .event.as_deref().unwrap_or("<entry>"))]
pub struct ActionError {
    pub stage: Stage,
    pub from: Option<String>,
    pub to: String,
    pub event: Option<String>,
    #[source]
    pub cause: BoxError,
}

/// Outcome of processing an event by a state machine.
#[derive(Debug)]
pub enum Outcome<S> {
    /// The event was permitted and every interceptor and the action ran to
    /// completion. Carries the new state.
    Executed(S),

    /// The event is not permitted in the current state. Nothing was executed.
    Rejected,

    /// An interceptor or the action returned an error. Some side effects may
    /// already have happened.
    Failed(ActionError),
}

impl<S> Outcome<S> {
    /// True only for [`Outcome::Executed`].
    pub fn transitioned(&self) -> bool {
        matches!(self, Self::Executed(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The new state, if the transition was executed.
    pub fn state(&self) -> Option<&S> {
        match self {
            Self::Executed(state) => Some(state),
            Self::Rejected | Self::Failed(_) => None,
        }
    }

    /// Convert into a `Result`.
    ///
    /// - `Ok(Some(state))` when executed
    /// - `Ok(None)` when rejected
    /// - `Err(error)` when failed
    pub fn into_result(self) -> Result<Option<S>, ActionError> {
        match self {
            Self::Executed(state) => Ok(Some(state)),
            Self::Rejected => Ok(None),
            Self::Failed(error) => Err(error),
        }
    }

    /// Run `f` with the new state if the transition was executed, returning
    /// the outcome unchanged.
    pub fn on_transition<F>(self, f: F) -> Self
    where
        F: FnOnce(&S),
    {
        if let Self::Executed(state) = &self {
            f(state);
        }
        self
    }
}

impl PartialEq for ActionError {
    /// Errors are equal when they come from the same stage of the same edge
    /// and their causes render the same message.
    fn eq(&self, other: &Self) -> bool {
        self.stage == other.stage
            && self.from == other.from
            && self.to == other.to
            && self.event == other.event
            && self.cause.to_string() == other.cause.to_string()
    }
}

impl<S: PartialEq> PartialEq for Outcome<S> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Executed(a), Self::Executed(b)) => a == b,
            (Self::Rejected, Self::Rejected) => true,
            (Self::Failed(a), Self::Failed(b)) => a == b,
            _ => false,
        }
    }
}

impl<S: fmt::Debug> fmt::Display for Outcome<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Executed(state) => write!(f, "Executed({state:?})"),
            Self::Rejected => f.write_str("Rejected"),
            Self::Failed(error) => write!(f, "Failed({error})"),
        }
    }
}
