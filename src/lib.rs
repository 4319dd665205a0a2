//! Transit: a validated finite state machine engine
//!
//! Transit follows a "pure core, imperative shell" split. A graph of states
//! and events is declared with a builder, checked for structural soundness
//! once, and then frozen. Driving the machine is a pure lookup; the only side
//! effects are the actions and interceptors the caller attached to the graph.
//!
//! # Core Concepts
//!
//! - **State / Event**: any `Clone + Eq + Hash + Debug` value, usually a unit
//!   enum declared with [`state_enum!`]
//! - **Edge**: a declared transition and its action, or the initial entry
//! - **Signal**: caller data handed to interceptors and actions
//! - **Outcome**: whether an event was executed, rejected or failed
//!
//! The machine never stores a current state. Callers keep it and pass it to
//! [`StateMachine::on_event`], so one machine can be shared across threads
//! and drive any number of entities.
//!
//! # Example
//!
//! ```rust
//! use transit::{state_enum, Outcome, StateMachineBuilder};
//!
//! state_enum! {
//!     pub enum Payment {
//!         Created,
//!         Pending,
//!         Authorized,
//!         Settled,
//!         Refused,
//!     }
//! }
//!
//! state_enum! {
//!     pub enum PaymentEvent {
//!         PaymentSubmitted,
//!         BankAuthorization,
//!         BankRefusal,
//!         FundsMoved,
//!     }
//! }
//!
//! let machine = StateMachineBuilder::<Payment, PaymentEvent, u64>::new()
//!     .initial(Payment::Created)?
//!     .connect(Payment::Created, Payment::Pending, PaymentEvent::PaymentSubmitted)
//!     .connect(Payment::Pending, Payment::Authorized, PaymentEvent::BankAuthorization)
//!     .connect(Payment::Pending, Payment::Refused, PaymentEvent::BankRefusal)
//!     .connect(Payment::Authorized, Payment::Settled, PaymentEvent::FundsMoved)
//!     .build()?;
//!
//! assert_eq!(
//!     machine.on_event(&Payment::Created, &PaymentEvent::PaymentSubmitted, 100),
//!     Outcome::Executed(Payment::Pending)
//! );
//! assert!(machine
//!     .on_event(&Payment::Pending, &PaymentEvent::FundsMoved, 100)
//!     .is_rejected());
//! assert!(machine.terminal_states().contains(&Payment::Refused));
//! # Ok::<(), transit::InvalidStateMachine>(())
//! ```

// Lets `state_enum!` name this crate's serde by path, here and downstream.
extern crate self as transit;

pub mod builder;
pub mod core;
pub mod effects;
pub mod topology;
pub mod validation;

// Re-export commonly used types
pub use builder::{InvalidStateMachine, StateMachineBuilder, TransitionDefinition};
pub use crate::core::{ActionError, BoxError, Edge, Event, Outcome, Stage, State};
pub use effects::{StateMachine, TransitionContext};
pub use topology::{Connection, Topology};
pub use validation::GraphViolation;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
