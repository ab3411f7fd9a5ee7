use crate::context::RequestContext;
use crate::error::JourneyResult;
use crate::guard::JourneyGuard;
use uuid::Uuid;

/// Query parameter carrying the submission identifier
pub const SUBMISSION_ID_PARAM: &str = "submissionId";

/// Requires a UUID `submissionId` query parameter
///
/// Looks only at the request; session state is never consulted.
#[derive(Debug, Clone)]
pub struct SubmissionIdGuard {
    fallback_path: String,
}

impl SubmissionIdGuard {
    /// Create guard redirecting to `fallback_path`
    #[inline]
    #[must_use]
    pub fn new(fallback_path: impl Into<String>) -> Self {
        Self {
            fallback_path: fallback_path.into(),
        }
    }

    /// Submission id carried by the request, if well-formed
    #[must_use]
    pub fn submission_id(ctx: &RequestContext) -> Option<Uuid> {
        ctx.query_param(SUBMISSION_ID_PARAM)
            .and_then(|raw| Uuid::parse_str(raw).ok())
    }
}

#[async_trait::async_trait]
impl JourneyGuard for SubmissionIdGuard {
    fn name(&self) -> &'static str {
        "submission_id"
    }

    fn fallback_path(&self) -> &str {
        &self.fallback_path
    }

    async fn permits(&self, ctx: &RequestContext) -> JourneyResult<bool> {
        Ok(Self::submission_id(ctx).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regportal_core::SessionId;

    fn ctx(uri: &str) -> RequestContext {
        RequestContext::from_uri(SessionId::new("s"), uri)
    }

    #[test]
    fn extracts_well_formed_ids() {
        let id = Uuid::new_v4();
        assert_eq!(
            SubmissionIdGuard::submission_id(&ctx(&format!("/x?submissionId={id}"))),
            Some(id)
        );
        assert_eq!(
            SubmissionIdGuard::submission_id(&ctx(&format!("/x?submissionId={}", id.simple()))),
            Some(id)
        );
    }

    #[test]
    fn rejects_malformed_ids() {
        for uri in [
            "/x",
            "/x?submissionId=",
            "/x?submissionId=123",
            "/x?submissionId=not-a-guid",
            "/x?submissionId=1b4e28ba-2fa1-11d2-883f-0016d3cca42",
        ] {
            assert_eq!(SubmissionIdGuard::submission_id(&ctx(uri)), None, "{uri}");
        }
    }
}
