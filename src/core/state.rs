//! Marker traits for the values a state machine is built from.
//!
//! States and events are plain caller-defined values. The engine only needs
//! to compare, hash, clone and print them, so both traits are implemented for
//! every type that already supports those operations.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// Implemented automatically for any type that is `Clone + Eq + Hash + Debug`
/// and thread-safe, which covers unit enums, `char`, integers and `String`.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the built machine and returned in outcomes
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states are rendered into validation errors and log events
/// - `Send` + `Sync`: a built machine is shared across threads
///
/// # Example
///
/// ```rust
/// use transit::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// fn assert_state<S: State>(_: &S) {}
///
/// assert_state(&TaskState::Pending);
/// assert_state(&'a');
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> State for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

/// Trait for events that trigger transitions between states.
///
/// Carries the same bounds as [`State`]; the two are kept apart so signatures
/// read `StateMachine<S: State, E: Event, N>`.
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> Event for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}
