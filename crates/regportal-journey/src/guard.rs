//! Journey guard trait and outcome types

use crate::context::RequestContext;
use crate::error::JourneyResult;
use std::fmt::Debug;

/// Short-circuit target produced by a failing guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Path the user is sent to
    pub location: String,
    /// Name of the guard that failed
    pub guard: &'static str,
}

impl Redirect {
    /// Create redirect
    #[inline]
    #[must_use]
    pub fn new(location: impl Into<String>, guard: &'static str) -> Self {
        Self {
            location: location.into(),
            guard,
        }
    }
}

/// Decision of a single guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Precondition met; proceed
    Continue,
    /// Precondition not met; send the user elsewhere
    Redirect(Redirect),
}

impl GuardOutcome {
    /// Whether the request may proceed
    #[inline]
    #[must_use]
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue)
    }

    /// Redirect target, if any
    #[inline]
    #[must_use]
    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            Self::Continue => None,
            Self::Redirect(r) => Some(r),
        }
    }
}

/// Precondition checked before a journey step executes
///
/// Implementations never write session state and never treat missing
/// journey data as an error.
#[async_trait::async_trait]
pub trait JourneyGuard: Send + Sync + Debug {
    /// Guard name for logs and redirects
    fn name(&self) -> &'static str;

    /// Where to send the user when the precondition fails
    fn fallback_path(&self) -> &str;

    /// Evaluate the precondition
    ///
    /// # Errors
    /// - `JourneyError::SessionStore` if session state could not be loaded
    async fn permits(&self, ctx: &RequestContext) -> JourneyResult<bool>;

    /// Evaluate and map to an outcome
    async fn check(&self, ctx: &RequestContext) -> JourneyResult<GuardOutcome> {
        if self.permits(ctx).await? {
            return Ok(GuardOutcome::Continue);
        }

        tracing::debug!(
            guard = self.name(),
            path = ctx.path(),
            fallback = self.fallback_path(),
            "Journey precondition not met, redirecting"
        );
        Ok(GuardOutcome::Redirect(Redirect::new(
            self.fallback_path(),
            self.name(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regportal_core::SessionId;

    #[derive(Debug)]
    struct Fixed(bool);

    #[async_trait::async_trait]
    impl JourneyGuard for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn fallback_path(&self) -> &str {
            "/start"
        }

        async fn permits(&self, _ctx: &RequestContext) -> JourneyResult<bool> {
            Ok(self.0)
        }
    }

    #[tokio::test]
    async fn check_maps_permits_to_outcome() {
        let ctx = RequestContext::new(SessionId::new("s"), "/step");

        assert_eq!(Fixed(true).check(&ctx).await.unwrap(), GuardOutcome::Continue);

        let outcome = Fixed(false).check(&ctx).await.unwrap();
        assert!(!outcome.is_continue());
        assert_eq!(outcome.redirect(), Some(&Redirect::new("/start", "fixed")));
    }
}
