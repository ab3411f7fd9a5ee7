//! Per-request context threaded through every guard

use regportal_core::SessionId;
use url::form_urlencoded;

/// What a guard may inspect about the inbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    session_id: SessionId,
    path: String,
    query: Vec<(String, String)>,
}

impl RequestContext {
    /// Context for a request path with no query string
    #[inline]
    #[must_use]
    pub fn new(session_id: SessionId, path: impl Into<String>) -> Self {
        Self {
            session_id,
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Context from a path-and-query string such as `/review?submissionId=...`
    #[must_use]
    pub fn from_uri(session_id: SessionId, uri: &str) -> Self {
        let (path, query) = uri.split_once('?').unwrap_or((uri, ""));
        let query = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Self {
            session_id,
            path: path.to_string(),
            query,
        }
    }

    /// Add a query parameter
    #[inline]
    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Caller's session identifier
    #[inline]
    #[must_use]
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Request path without query
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value for a query parameter; names match case-insensitively
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_and_query() {
        let ctx = RequestContext::from_uri(
            SessionId::new("s"),
            "/review?submissionId=1b4e28ba-2fa1-11d2-883f-0016d3cca427&x=a%20b",
        );

        assert_eq!(ctx.path(), "/review");
        assert_eq!(
            ctx.query_param("submissionId"),
            Some("1b4e28ba-2fa1-11d2-883f-0016d3cca427")
        );
        assert_eq!(ctx.query_param("x"), Some("a b"));
    }

    #[test]
    fn query_names_are_case_insensitive() {
        let ctx = RequestContext::new(SessionId::new("s"), "/").with_query("SUBMISSIONID", "v");
        assert_eq!(ctx.query_param("submissionId"), Some("v"));
    }

    #[test]
    fn first_value_wins() {
        let ctx = RequestContext::from_uri(SessionId::new("s"), "/?a=1&a=2");
        assert_eq!(ctx.query_param("a"), Some("1"));
    }

    #[test]
    fn missing_query() {
        let ctx = RequestContext::from_uri(SessionId::new("s"), "/landing");
        assert_eq!(ctx.path(), "/landing");
        assert_eq!(ctx.query_param("submissionId"), None);
    }
}
