//! The individual structural checks run over a declared graph.

use crate::core::{Edge, Event, State};
use crate::validation::violations::GraphViolation;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;

fn render<T: Debug>(value: Option<&T>, absent: &str) -> String {
    value.map_or_else(|| absent.to_string(), |v| format!("{v:?}"))
}

/// Require exactly one initial edge, entering `initial`.
pub(crate) fn require_single_entry<S: State, E: Event, N>(
    initial: &S,
    edges: &[Edge<S, E, N>],
) -> Result<(), GraphViolation> {
    let entries: Vec<&S> = edges
        .iter()
        .filter(|edge| edge.is_initial())
        .map(|edge| edge.target())
        .collect();

    if let [target] = entries.as_slice() {
        if *target == initial {
            return Ok(());
        }
    }

    Err(GraphViolation::InitialEntry {
        initial: format!("{initial:?}"),
        entries: entries.iter().map(|state| format!("{state:?}")).collect(),
    })
}

/// Reject any (source, target, event) combination declared more than once.
pub(crate) fn reject_duplicates<S: State, E: Event, N>(
    edges: &[Edge<S, E, N>],
) -> Result<(), GraphViolation> {
    let mut seen = HashSet::with_capacity(edges.len());

    for edge in edges {
        if !seen.insert((edge.source(), edge.target(), edge.event())) {
            return Err(GraphViolation::DuplicateTransition {
                from: render(edge.source(), "<initial>"),
                to: format!("{:?}", edge.target()),
                event: render(edge.event(), "<entry>"),
            });
        }
    }

    Ok(())
}

/// Reject two edges with the same source and event but different targets.
///
/// Edges are compared pairwise within the outgoing set of each source state,
/// visiting sources in declaration order.
pub(crate) fn reject_ambiguous<S: State, E: Event, N>(
    edges: &[Edge<S, E, N>],
) -> Result<(), GraphViolation> {
    let mut order: Vec<&S> = Vec::new();
    let mut outgoing: HashMap<&S, Vec<(&E, &S)>> = HashMap::new();

    for edge in edges {
        if let Edge::Transition {
            from, to, event, ..
        } = edge
        {
            outgoing
                .entry(from)
                .or_insert_with(|| {
                    order.push(from);
                    Vec::new()
                })
                .push((event, to));
        }
    }

    for from in order {
        let Some(routes) = outgoing.get(from) else {
            continue;
        };

        for (i, (event, to)) in routes.iter().enumerate() {
            let conflict = routes[i + 1..]
                .iter()
                .find(|(other_event, other_to)| other_event == event && other_to != to);

            if let Some((_, other_to)) = conflict {
                return Err(GraphViolation::AmbiguousTransition {
                    from: format!("{from:?}"),
                    event: format!("{event:?}"),
                    first: format!("{to:?}"),
                    second: format!("{other_to:?}"),
                });
            }
        }
    }

    Ok(())
}

/// Reject any state that cannot be reached from the initial state by
/// following declared edges in their direction.
pub(crate) fn reject_unreachable<S: State, E: Event, N>(
    initial: &S,
    edges: &[Edge<S, E, N>],
) -> Result<(), GraphViolation> {
    let mut all_states: Vec<&S> = vec![initial];
    let mut known: HashSet<&S> = HashSet::from([initial]);
    let mut adjacency: HashMap<&S, Vec<&S>> = HashMap::new();

    for edge in edges {
        for state in edge.source().into_iter().chain([edge.target()]) {
            if known.insert(state) {
                all_states.push(state);
            }
        }
        if let Some(from) = edge.source() {
            adjacency.entry(from).or_default().push(edge.target());
        }
    }

    let mut visited: HashSet<&S> = HashSet::from([initial]);
    let mut frontier: VecDeque<&S> = VecDeque::from([initial]);

    while let Some(state) = frontier.pop_front() {
        for &next in adjacency.get(state).into_iter().flatten() {
            if visited.insert(next) {
                frontier.push_back(next);
            }
        }
    }

    if visited.len() == all_states.len() {
        return Ok(());
    }

    Err(GraphViolation::Unreachable {
        initial: format!("{initial:?}"),
        states: all_states
            .into_iter()
            .filter(|state| !visited.contains(state))
            .map(|state| format!("{state:?}"))
            .collect(),
    })
}
