//! Session store access
//!
//! Guards only call [`SessionManager::get_session`]. Writes belong to the
//! action that owns each journey step.

use crate::error::JourneyResult;
use moka::future::Cache;
use regportal_core::{JourneyConfig, RegistrationSession, SessionId};
use std::fmt::Debug;

/// Per-user session store
#[async_trait::async_trait]
pub trait SessionManager: Send + Sync + Debug {
    /// Load a session; an unknown id yields an empty default session
    ///
    /// # Errors
    /// - `JourneyError::SessionStore` if the store is unreachable
    async fn get_session(&self, id: &SessionId) -> JourneyResult<RegistrationSession>;

    /// Persist a session, replacing any previous value
    ///
    /// # Errors
    /// - `JourneyError::SessionStore` if the store is unreachable
    async fn save_session(
        &self,
        id: &SessionId,
        session: RegistrationSession,
    ) -> JourneyResult<()>;

    /// Drop a session, e.g. on sign-out
    ///
    /// # Errors
    /// - `JourneyError::SessionStore` if the store is unreachable
    async fn remove_session(&self, id: &SessionId) -> JourneyResult<()>;
}

/// Read-modify-write helper for actions
///
/// Last write wins across concurrent requests for the same session.
///
/// # Errors
/// Propagates store failures from either the read or the write.
pub async fn update_session<F>(
    manager: &dyn SessionManager,
    id: &SessionId,
    update: F,
) -> JourneyResult<RegistrationSession>
where
    F: FnOnce(&mut RegistrationSession) + Send,
{
    let mut session = manager.get_session(id).await?;
    update(&mut session);
    manager.save_session(id, session.clone()).await?;
    Ok(session)
}

/// In-process session store with idle expiry
#[derive(Debug, Clone)]
pub struct InMemorySessionManager {
    inner: Cache<SessionId, RegistrationSession>,
}

impl InMemorySessionManager {
    /// Create store from journey settings
    #[must_use]
    pub fn new(config: &JourneyConfig) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(config.session_capacity)
                .time_to_idle(config.session_idle_timeout())
                .build(),
        }
    }

    /// Approximate number of live sessions
    #[inline]
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Whether a session has been stored for `id`
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &SessionId) -> bool {
        self.inner.contains_key(id)
    }
}

impl Default for InMemorySessionManager {
    fn default() -> Self {
        Self::new(&JourneyConfig::default())
    }
}

#[async_trait::async_trait]
impl SessionManager for InMemorySessionManager {
    async fn get_session(&self, id: &SessionId) -> JourneyResult<RegistrationSession> {
        Ok(self.inner.get(id).await.unwrap_or_default())
    }

    async fn save_session(
        &self,
        id: &SessionId,
        session: RegistrationSession,
    ) -> JourneyResult<()> {
        self.inner.insert(id.clone(), session).await;
        Ok(())
    }

    async fn remove_session(&self, id: &SessionId) -> JourneyResult<()> {
        self.inner.invalidate(id).await;
        Ok(())
    }
}
