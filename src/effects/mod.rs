//! Transition engine: the imperative shell around the validated graph.
//!
//! This module runs the side effects of a transition:
//!
//! - **Interceptors**: run before every action, in registration order, each
//!   able to replace the signal
//! - **Actions**: the caller's unit of work for the matched edge
//! - **Post-interceptors**: run after a successful action, for observation
//!
//! The [`StateMachine`] itself is immutable and stateless. It answers
//! structural queries and interprets events against a current state the
//! caller supplies.

mod context;
mod machine;
mod transition;

pub use context::TransitionContext;
pub use machine::StateMachine;
pub use transition::{Interceptor, PostInterceptor};

pub(crate) use transition::Pipeline;
