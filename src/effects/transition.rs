//! Interceptors and the pipeline that runs them around an action.

use crate::core::{ActionError, BoxError, EdgeAction, Stage};
use crate::effects::context::TransitionContext;
use std::fmt::Debug;
use std::sync::Arc;

/// Type alias for pre-interceptors.
/// Each receives the signal returned by the previous one and may replace it.
pub type Interceptor<S, E, N> =
    Arc<dyn Fn(&TransitionContext<'_, S, E>, N) -> Result<N, BoxError> + Send + Sync>;

/// Type alias for post-interceptors, run after the action succeeded.
pub type PostInterceptor<S, E, N> =
    Arc<dyn Fn(&TransitionContext<'_, S, E>, &N) -> Result<(), BoxError> + Send + Sync>;

/// Interceptors applied to every transition of a machine.
pub(crate) struct Pipeline<S, E, N> {
    interceptors: Vec<Interceptor<S, E, N>>,
    post_interceptors: Vec<PostInterceptor<S, E, N>>,
}

impl<S: Debug, E: Debug, N> Pipeline<S, E, N> {
    pub(crate) fn new(
        interceptors: Vec<Interceptor<S, E, N>>,
        post_interceptors: Vec<PostInterceptor<S, E, N>>,
    ) -> Self {
        Self {
            interceptors,
            post_interceptors,
        }
    }

    /// Run interceptors in registration order, then the action with the
    /// intercepted signal, then post-interceptors with that same signal.
    /// Stops at the first error.
    pub(crate) fn run(
        &self,
        context: &TransitionContext<'_, S, E>,
        action: &EdgeAction<N>,
        signal: N,
    ) -> Result<(), ActionError> {
        let signal = self
            .interceptors
            .iter()
            .try_fold(signal, |signal, intercept| intercept(context, signal))
            .map_err(|cause| context.error(Stage::Intercept, cause))?;

        action(&signal).map_err(|cause| context.error(Stage::Action, cause))?;

        for post_intercept in &self.post_interceptors {
            post_intercept(context, &signal)
                .map_err(|cause| context.error(Stage::PostIntercept, cause))?;
        }

        Ok(())
    }
}
