use crate::context::RequestContext;
use crate::error::JourneyResult;
use crate::guard::JourneyGuard;
use crate::session::SessionManager;
use regportal_core::config::DEFAULT_COMPLIANCE_SCHEME_LANDING_PATH;
use regportal_core::{JourneyConfig, OrganisationRole};
use std::sync::Arc;

/// Requires a selected compliance scheme when the user acts for one
///
/// Users whose primary organisation has any other role, or no recognised
/// role, pass unconditionally.
#[derive(Debug, Clone)]
pub struct ComplianceSchemeGuard {
    sessions: Arc<dyn SessionManager>,
    landing_path: String,
}

impl ComplianceSchemeGuard {
    /// Guard redirecting to the default landing page
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionManager>) -> Self {
        Self {
            sessions,
            landing_path: DEFAULT_COMPLIANCE_SCHEME_LANDING_PATH.to_string(),
        }
    }

    /// Guard using the configured landing page
    #[must_use]
    pub fn from_config(sessions: Arc<dyn SessionManager>, config: &JourneyConfig) -> Self {
        Self::new(sessions).with_landing_path(config.compliance_scheme_landing_path.clone())
    }

    /// Override the landing page
    #[inline]
    #[must_use]
    pub fn with_landing_path(mut self, path: impl Into<String>) -> Self {
        self.landing_path = path.into();
        self
    }
}

#[async_trait::async_trait]
impl JourneyGuard for ComplianceSchemeGuard {
    fn name(&self) -> &'static str {
        "compliance_scheme"
    }

    fn fallback_path(&self) -> &str {
        &self.landing_path
    }

    async fn permits(&self, ctx: &RequestContext) -> JourneyResult<bool> {
        let session = self.sessions.get_session(ctx.session_id()).await?;

        Ok(match session.organisation_role() {
            Some(OrganisationRole::ComplianceScheme) => session
                .registration
                .selected_compliance_scheme_id
                .is_some(),
            _ => true,
        })
    }
}
