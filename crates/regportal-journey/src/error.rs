//! Error types for journey guards
//!
//! A missing precondition is not an error: guards report it as
//! [`GuardOutcome::Redirect`](crate::GuardOutcome). Errors here are
//! infrastructure failures that belong to the caller's generic error page.

use regportal_core::SessionId;

/// Journey infrastructure errors
#[derive(Debug, thiserror::Error)]
pub enum JourneyError {
    /// Session store could not be read or written
    #[error("session store failure for session {session_id}: {message}")]
    SessionStore {
        /// Session being read or written
        session_id: SessionId,
        /// Store-specific failure description
        message: String,
    },
}

impl JourneyError {
    /// Create session store error
    pub fn session_store(session_id: &SessionId, message: impl Into<String>) -> Self {
        Self::SessionStore {
            session_id: session_id.clone(),
            message: message.into(),
        }
    }

    /// Whether the failure came from the session store
    #[inline]
    #[must_use]
    pub fn is_session_store(&self) -> bool {
        matches!(self, Self::SessionStore { .. })
    }
}

/// Result type alias for journey operations
pub type JourneyResult<T> = Result<T, JourneyError>;
