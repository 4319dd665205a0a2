//! Builder for constructing state machines.

use crate::builder::error::InvalidStateMachine;
use crate::builder::transition::TransitionDefinition;
use crate::core::{noop_action, BoxError, Edge, EdgeAction, Event, State};
use crate::effects::{Interceptor, Pipeline, PostInterceptor, StateMachine, TransitionContext};
use crate::topology::{Topology, TOPOLOGY_VERSION};
use crate::validation::{self, into_validation, rules};
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Builder for constructing state machines with a fluent API.
///
/// Every method takes the builder by value and returns it, so declarations
/// chain. The builder is cheap to clone (actions and interceptors are shared),
/// which allows forking a common base graph.
///
/// # Example
///
/// ```rust
/// use transit::builder::StateMachineBuilder;
/// use transit::core::Outcome;
///
/// let machine = StateMachineBuilder::<char, u8, ()>::new()
///     .initial('a')?
///     .connect('a', 'b', 1)
///     .connect('b', 'a', 2)
///     .build()?;
///
/// assert_eq!(machine.on_event(&'a', &1, ()), Outcome::Executed('b'));
/// assert_eq!(machine.on_event(&'a', &2, ()), Outcome::Rejected);
/// # Ok::<(), transit::builder::InvalidStateMachine>(())
/// ```
pub struct StateMachineBuilder<S, E, N> {
    initial: Option<S>,
    edges: Vec<Edge<S, E, N>>,
    interceptors: Vec<Interceptor<S, E, N>>,
    post_interceptors: Vec<PostInterceptor<S, E, N>>,
}

impl<S: State, E: Event, N: 'static> StateMachineBuilder<S, E, N> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            edges: Vec::new(),
            interceptors: Vec::new(),
            post_interceptors: Vec::new(),
        }
    }

    /// Set the initial state (required).
    ///
    /// Fails immediately if a different initial state was already set.
    /// Setting the same state again is a no-op.
    pub fn initial(self, state: S) -> Result<Self, InvalidStateMachine> {
        self.enter(state, None)
    }

    /// Set the initial state with an action run by
    /// [`StateMachine::on_initial`].
    ///
    /// Fails immediately if any initial state was already set.
    pub fn initial_with<F>(self, state: S, action: F) -> Result<Self, InvalidStateMachine>
    where
        F: Fn(&N) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.enter(state, Some(Arc::new(action)))
    }

    fn enter(mut self, state: S, action: Option<EdgeAction<N>>) -> Result<Self, InvalidStateMachine> {
        match &self.initial {
            None => {}
            Some(existing) if *existing == state && action.is_none() => return Ok(self),
            Some(existing) => {
                return Err(InvalidStateMachine::ConflictingInitialState {
                    existing: format!("{existing:?}"),
                    requested: format!("{state:?}"),
                })
            }
        }

        self.edges.push(Edge::Initial {
            target: state.clone(),
            action: action.unwrap_or_else(noop_action),
        });
        self.initial = Some(state);
        Ok(self)
    }

    /// Connect `from` to `to`, triggered by `event`, with no action.
    ///
    /// Several events may connect the same two states, but one source state
    /// and event must never lead to two different targets:
    ///
    /// - `(S1, E1) -> S2`
    /// - `(S1, E1) -> S3`
    ///
    /// together are rejected by [`build`](Self::build).
    pub fn connect(mut self, from: S, to: S, event: E) -> Self {
        self.edges.push(Edge::transition(from, to, event));
        self
    }

    /// Connect `from` to `to`, triggered by `event`, running `action` with the
    /// intercepted signal when the transition is executed.
    pub fn connect_with<F>(mut self, from: S, to: S, event: E, action: F) -> Self
    where
        F: Fn(&N) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.edges
            .push(Edge::transition(from, to, event).with_action(action));
        self
    }

    /// Add a transition declared as its own type, one edge per event.
    pub fn define<T>(mut self, definition: T) -> Self
    where
        T: TransitionDefinition<S, E, N>,
    {
        let from = definition.source();
        let to = definition.target();
        let events = definition.events();

        let definition = Arc::new(definition);
        let action: EdgeAction<N> = Arc::new(move |signal: &N| definition.execute(signal));

        self.edges
            .extend(events.into_iter().map(|event| Edge::Transition {
                from: from.clone(),
                to: to.clone(),
                event,
                action: Arc::clone(&action),
            }));
        self
    }

    /// Add an interceptor run _before_ the action of every executed
    /// transition, including entry into the initial state.
    ///
    /// Interceptors run in registration order, each receiving the signal
    /// returned by the previous one. They do not run for rejected events.
    pub fn intercept<F>(mut self, interception: F) -> Self
    where
        F: Fn(&TransitionContext<'_, S, E>, N) -> Result<N, BoxError> + Send + Sync + 'static,
    {
        self.interceptors.push(Arc::new(interception));
        self
    }

    /// Add an interceptor run _after_ a successful action, with the
    /// intercepted signal.
    ///
    /// Not run if the event was rejected, or if an interceptor or the action
    /// returned an error.
    pub fn post_intercept<F>(mut self, interception: F) -> Self
    where
        F: Fn(&TransitionContext<'_, S, E>, &N) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.post_interceptors.push(Arc::new(interception));
        self
    }

    /// Run every check [`build`](Self::build) would run, accumulating ALL
    /// problems instead of stopping at the first.
    pub fn diagnose(&self) -> Validation<(), NonEmptyVec<InvalidStateMachine>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<InvalidStateMachine>>> = Vec::new();

        if self.initial.is_none() {
            checks.push(Validation::fail(InvalidStateMachine::MissingInitialState));
        }
        if !self.has_transitions() {
            checks.push(Validation::fail(InvalidStateMachine::NoTransitions));
        }

        checks.push(into_validation(
            rules::reject_duplicates(&self.edges).map_err(InvalidStateMachine::from),
        ));
        checks.push(into_validation(
            rules::reject_ambiguous(&self.edges).map_err(InvalidStateMachine::from),
        ));
        if let Some(initial) = &self.initial {
            checks.push(into_validation(
                rules::require_single_entry(initial, &self.edges).map_err(InvalidStateMachine::from),
            ));
            checks.push(into_validation(
                rules::reject_unreachable(initial, &self.edges).map_err(InvalidStateMachine::from),
            ));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the state machine.
    ///
    /// Returns an error if:
    /// - no initial state was set
    /// - no transitions were declared
    /// - the same source, target and event are declared twice
    /// - the same source and event lead to different targets
    /// - some state cannot be reached from the initial state
    pub fn build(self) -> Result<StateMachine<S, E, N>, InvalidStateMachine> {
        self.try_build()
            .inspect(|machine| {
                debug!(
                    initial = ?machine.initial_state(),
                    states = machine.states().len(),
                    "State machine built"
                );
            })
            .inspect_err(|error| debug!(%error, "State machine rejected"))
    }

    fn try_build(self) -> Result<StateMachine<S, E, N>, InvalidStateMachine> {
        let initial = self
            .initial
            .clone()
            .ok_or(InvalidStateMachine::MissingInitialState)?;

        if !self.has_transitions() {
            return Err(InvalidStateMachine::NoTransitions);
        }

        validation::validate(&initial, &self.edges)?;

        Ok(StateMachine::new(
            initial,
            self.edges,
            Pipeline::new(self.interceptors, self.post_interceptors),
        ))
    }

    /// Rebuild the declarations of a [`Topology`], with no actions.
    pub fn from_topology(topology: Topology<S, E>) -> Result<Self, InvalidStateMachine> {
        if topology.version != TOPOLOGY_VERSION {
            return Err(InvalidStateMachine::UnsupportedTopologyVersion {
                found: topology.version,
                supported: TOPOLOGY_VERSION,
            });
        }

        let builder = Self::new().initial(topology.initial)?;
        Ok(topology
            .transitions
            .into_iter()
            .fold(builder, |builder, connection| {
                builder.connect(connection.from, connection.to, connection.event)
            }))
    }

    fn has_transitions(&self) -> bool {
        self.edges.iter().any(|edge| !edge.is_initial())
    }
}

impl<S: State, E: Event, N: 'static> Default for StateMachineBuilder<S, E, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone, E: Clone, N> Clone for StateMachineBuilder<S, E, N> {
    fn clone(&self) -> Self {
        Self {
            initial: self.initial.clone(),
            edges: self.edges.clone(),
            interceptors: self.interceptors.clone(),
            post_interceptors: self.post_interceptors.clone(),
        }
    }
}
