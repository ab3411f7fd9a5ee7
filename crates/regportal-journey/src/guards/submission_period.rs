use crate::context::RequestContext;
use crate::error::JourneyResult;
use crate::guard::JourneyGuard;
use crate::session::SessionManager;
use std::sync::Arc;

/// Requires a non-empty submission period in session
#[derive(Debug, Clone)]
pub struct SubmissionPeriodGuard {
    sessions: Arc<dyn SessionManager>,
    fallback_path: String,
}

impl SubmissionPeriodGuard {
    /// Create guard redirecting to `fallback_path`
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionManager>, fallback_path: impl Into<String>) -> Self {
        Self {
            sessions,
            fallback_path: fallback_path.into(),
        }
    }
}

#[async_trait::async_trait]
impl JourneyGuard for SubmissionPeriodGuard {
    fn name(&self) -> &'static str {
        "submission_period"
    }

    fn fallback_path(&self) -> &str {
        &self.fallback_path
    }

    async fn permits(&self, ctx: &RequestContext) -> JourneyResult<bool> {
        let session = self.sessions.get_session(ctx.session_id()).await?;
        Ok(session.registration.has_submission_period())
    }
}
