//! Ordered guard composition
//!
//! Guards run in attachment order. The first redirect short-circuits: later
//! guards and the action never run.

use crate::context::RequestContext;
use crate::error::{JourneyError, JourneyResult};
use crate::guard::{GuardOutcome, JourneyGuard, Redirect};
use std::future::Future;
use std::sync::Arc;

/// Result of running an action behind a pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch<T> {
    /// All guards passed and the action ran
    Completed(T),
    /// A guard failed; the action was not invoked
    Redirected(Redirect),
}

impl<T> Dispatch<T> {
    /// Action output, if the action ran
    #[inline]
    #[must_use]
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Redirected(_) => None,
        }
    }

    /// Redirect target, if a guard failed
    #[inline]
    #[must_use]
    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            Self::Completed(_) => None,
            Self::Redirected(r) => Some(r),
        }
    }
}

/// Guards attached to one action
#[derive(Debug, Clone, Default)]
pub struct GuardPipeline {
    guards: Vec<Arc<dyn JourneyGuard>>,
}

impl GuardPipeline {
    /// Empty pipeline; always continues
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a guard after those already attached
    #[must_use]
    pub fn guard(self, guard: impl JourneyGuard + 'static) -> Self {
        self.with_guard(Arc::new(guard))
    }

    /// Attach a shared guard
    #[must_use]
    pub fn with_guard(mut self, guard: Arc<dyn JourneyGuard>) -> Self {
        self.guards.push(guard);
        self
    }

    /// Number of attached guards
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    /// Whether no guards are attached
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    /// Guard names in attachment order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.guards.iter().map(|g| g.name()).collect()
    }

    /// Run guards in order, stopping at the first redirect
    ///
    /// # Errors
    /// - `JourneyError::SessionStore` from the first guard whose session load fails
    pub async fn check(&self, ctx: &RequestContext) -> JourneyResult<GuardOutcome> {
        for guard in &self.guards {
            match guard.check(ctx).await {
                Ok(GuardOutcome::Continue) => {}
                Ok(redirect @ GuardOutcome::Redirect(_)) => return Ok(redirect),
                Err(e) => {
                    tracing::error!(guard = guard.name(), path = ctx.path(), "Guard failed: {}", e);
                    return Err(e);
                }
            }
        }
        Ok(GuardOutcome::Continue)
    }

    /// Run guards, then `next` if every guard passed
    ///
    /// # Returns
    /// - `Dispatch::Completed` with the action's output
    /// - `Dispatch::Redirected` if a guard failed; `next` is dropped uncalled
    ///
    /// # Errors
    /// Guard infrastructure failures converted into `E`, or the action's own error.
    pub async fn run<T, E, F, Fut>(&self, ctx: &RequestContext, next: F) -> Result<Dispatch<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<JourneyError>,
    {
        match self.check(ctx).await? {
            GuardOutcome::Continue => next().await.map(Dispatch::Completed),
            GuardOutcome::Redirect(redirect) => Ok(Dispatch::Redirected(redirect)),
        }
    }
}
