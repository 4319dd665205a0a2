//! State machine that executes validated transitions.

use crate::core::{noop_action, Edge, EdgeAction, Event, Outcome, State};
use crate::effects::context::TransitionContext;
use crate::effects::transition::Pipeline;
use crate::topology::{Connection, Topology};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace, warn};

/// Outgoing edge of a state.
struct Route<S, E, N> {
    event: E,
    to: S,
    action: EdgeAction<N>,
}

/// A validated, immutable state machine.
///
/// The machine holds no current state of its own. Callers pass the current
/// state on every call, so one machine can drive any number of independent
/// entities and can be shared between threads behind an `Arc`.
///
/// Built with [`StateMachineBuilder`](crate::builder::StateMachineBuilder).
pub struct StateMachine<S, E, N> {
    initial: S,
    entry: EdgeAction<N>,
    states: HashSet<S>,
    terminal: HashSet<S>,
    routes: HashMap<S, Vec<Route<S, E, N>>>,
    declared: Vec<Connection<S, E>>,
    pipeline: Pipeline<S, E, N>,
}

impl<S: State, E: Event, N: 'static> StateMachine<S, E, N> {
    /// Index an already validated edge set.
    pub(crate) fn new(initial: S, edges: Vec<Edge<S, E, N>>, pipeline: Pipeline<S, E, N>) -> Self {
        let mut entry = None;
        let mut states = HashSet::from([initial.clone()]);
        let mut routes: HashMap<S, Vec<Route<S, E, N>>> = HashMap::new();
        let mut declared = Vec::new();

        for edge in edges {
            match edge {
                Edge::Initial { target, action } => {
                    states.insert(target);
                    entry = Some(action);
                }
                Edge::Transition {
                    from,
                    to,
                    event,
                    action,
                } => {
                    states.insert(from.clone());
                    states.insert(to.clone());
                    declared.push(Connection {
                        from: from.clone(),
                        to: to.clone(),
                        event: event.clone(),
                    });
                    routes
                        .entry(from)
                        .or_default()
                        .push(Route { event, to, action });
                }
            }
        }

        let terminal = states
            .iter()
            .filter(|state| !routes.contains_key(*state))
            .cloned()
            .collect();

        Self {
            initial,
            entry: entry.unwrap_or_else(noop_action),
            states,
            terminal,
            routes,
            declared,
            pipeline,
        }
    }

    /// Every state mentioned as a source or target of an edge.
    pub fn states(&self) -> &HashSet<S> {
        &self.states
    }

    /// The start state of the machine.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// States with no outgoing transitions.
    pub fn terminal_states(&self) -> &HashSet<S> {
        &self.terminal
    }

    /// Events accepted in `state`. Empty for terminal and unknown states.
    pub fn accepted_events(&self, state: &S) -> HashSet<E> {
        self.routes
            .get(state)
            .into_iter()
            .flatten()
            .map(|route| route.event.clone())
            .collect()
    }

    /// Check if some event moves `current` directly to `next`.
    pub fn allow_transition(&self, current: &S, next: &S) -> bool {
        self.routes
            .get(current)
            .is_some_and(|routes| routes.iter().any(|route| route.to == *next))
    }

    /// The state `event` leads to from `current`, if the event is accepted.
    pub fn next_state(&self, current: &S, event: &E) -> Option<&S> {
        self.route(current, event).map(|route| &route.to)
    }

    /// Check if `event` is accepted in `state`.
    pub fn accepts_event(&self, state: &S, event: &E) -> bool {
        self.route(state, event).is_some()
    }

    /// Enter the initial state.
    ///
    /// Runs the interceptors, the action registered with the initial state and
    /// the post-interceptors. Never [`Outcome::Rejected`].
    pub fn on_initial(&self, signal: N) -> Outcome<S> {
        let context = TransitionContext::initial(&self.initial);
        self.execute(&context, &self.entry, signal)
    }

    /// Process `event` in state `current`.
    ///
    /// Returns [`Outcome::Rejected`] without running anything when the event is
    /// not accepted. Otherwise the signal goes through the interceptors, the
    /// action and the post-interceptors, and the outcome carries the new state
    /// or the first error raised. Panics in actions or interceptors are not
    /// caught.
    pub fn on_event(&self, current: &S, event: &E, signal: N) -> Outcome<S> {
        let Some(route) = self.route(current, event) else {
            trace!(from = ?current, event = ?event, "Event rejected");
            return Outcome::Rejected;
        };

        let context = TransitionContext::transition(current, &route.to, event);
        self.execute(&context, &route.action, signal)
    }

    /// Fold `events` over the machine, starting at the initial state.
    ///
    /// Events not accepted in the current state are skipped. No actions or
    /// interceptors run.
    pub fn reduce_state<'a, I>(&self, events: I) -> S
    where
        I: IntoIterator<Item = &'a E>,
    {
        events.into_iter().fold(self.initial.clone(), |state, event| {
            self.next_state(&state, event).cloned().unwrap_or(state)
        })
    }

    /// Action-free snapshot of the graph, transitions in declaration order.
    pub fn topology(&self) -> Topology<S, E> {
        Topology::new(self.initial.clone(), self.declared.clone())
    }

    fn route(&self, current: &S, event: &E) -> Option<&Route<S, E, N>> {
        self.routes
            .get(current)?
            .iter()
            .find(|route| route.event == *event)
    }

    fn execute(
        &self,
        context: &TransitionContext<'_, S, E>,
        action: &EdgeAction<N>,
        signal: N,
    ) -> Outcome<S> {
        match self.pipeline.run(context, action, signal) {
            Ok(()) => {
                debug!(
                    from = ?context.from,
                    to = ?context.to,
                    event = ?context.event,
                    "Transition executed"
                );
                Outcome::Executed(context.to.clone())
            }
            Err(error) => {
                warn!(%error, stage = %error.stage, "Transition failed");
                Outcome::Failed(error)
            }
        }
    }
}
