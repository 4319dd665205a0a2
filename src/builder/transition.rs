//! Transitions declared as standalone types.

use crate::core::BoxError;

/// A transition and its action, declared as a type of its own.
///
/// Useful when an action carries enough logic or dependencies to deserve its
/// own module. Registered with
/// [`StateMachineBuilder::define`](crate::builder::StateMachineBuilder::define),
/// which connects `source -> target` once for every event in `events`, all
/// sharing this definition's action.
///
/// # Example
///
/// ```rust
/// use transit::builder::{StateMachineBuilder, TransitionDefinition};
/// use transit::core::BoxError;
///
/// struct Authorize;
///
/// impl TransitionDefinition<&'static str, &'static str, u32> for Authorize {
///     fn source(&self) -> &'static str { "Pending" }
///     fn target(&self) -> &'static str { "Authorized" }
///     fn events(&self) -> Vec<&'static str> { vec!["BankAuthorization", "ManualApproval"] }
///
///     fn execute(&self, amount: &u32) -> Result<(), BoxError> {
///         if *amount == 0 {
///             return Err("nothing to authorize".into());
///         }
///         Ok(())
///     }
/// }
///
/// let machine = StateMachineBuilder::new()
///     .initial("Pending")?
///     .define(Authorize)
///     .build()?;
///
/// assert!(machine.accepts_event(&"Pending", &"ManualApproval"));
/// # Ok::<(), transit::builder::InvalidStateMachine>(())
/// ```
pub trait TransitionDefinition<S, E, N>: Send + Sync + 'static {
    /// State the transition leaves.
    fn source(&self) -> S;

    /// State the transition enters.
    fn target(&self) -> S;

    /// Events that trigger the transition.
    fn events(&self) -> Vec<E>;

    /// Action run when the transition is executed.
    ///
    /// Default implementation does nothing.
    fn execute(&self, _signal: &N) -> Result<(), BoxError> {
        Ok(())
    }
}
