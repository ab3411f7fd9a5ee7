//! Testing utilities for the registration portal workspace
//!
//! Shared session fixtures and session-store doubles.

#![allow(missing_docs)]

use regportal_core::{
    Organisation, OrganisationRole, RegistrationJourneyState, RegistrationSession, SessionId,
    UserData,
};
use regportal_journey::{
    InMemorySessionManager, JourneyError, JourneyResult, RequestContext, SessionManager,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

pub fn session_for_role(role: &str) -> RegistrationSession {
    RegistrationSession::new().with_user_data(UserData::new(vec![Organisation::new(role)]))
}

pub fn compliance_scheme_session(selected_scheme: Option<Uuid>) -> RegistrationSession {
    let mut session = session_for_role(OrganisationRole::ComplianceScheme.as_str());
    session.registration.selected_compliance_scheme_id = selected_scheme;
    session
}

pub fn producer_session() -> RegistrationSession {
    session_for_role(OrganisationRole::Producer.as_str())
}

pub fn session_with_period(period: Option<&str>) -> RegistrationSession {
    producer_session().with_registration(RegistrationJourneyState {
        submission_period: period.map(str::to_string),
        ..RegistrationJourneyState::default()
    })
}

pub fn request(session_id: &SessionId, uri: &str) -> RequestContext {
    RequestContext::from_uri(session_id.clone(), uri)
}

/// Store pre-populated with one session; returns the store and its id
pub async fn seeded_store(session: RegistrationSession) -> (Arc<InMemorySessionManager>, SessionId) {
    let store = Arc::new(InMemorySessionManager::default());
    let id = SessionId::generate();
    store
        .save_session(&id, session)
        .await
        .expect("in-memory store never fails");
    (store, id)
}

/// Store whose every call fails, standing in for an unreachable backend
#[derive(Debug, Default)]
pub struct FailingSessionManager;

#[async_trait::async_trait]
impl SessionManager for FailingSessionManager {
    async fn get_session(&self, id: &SessionId) -> JourneyResult<RegistrationSession> {
        Err(JourneyError::session_store(id, "store unavailable"))
    }

    async fn save_session(
        &self,
        id: &SessionId,
        _session: RegistrationSession,
    ) -> JourneyResult<()> {
        Err(JourneyError::session_store(id, "store unavailable"))
    }

    async fn remove_session(&self, id: &SessionId) -> JourneyResult<()> {
        Err(JourneyError::session_store(id, "store unavailable"))
    }
}

/// Wraps a store and counts reads and writes
#[derive(Debug, Default)]
pub struct RecordingSessionManager {
    inner: InMemorySessionManager,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl RecordingSessionManager {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn seed(&self, id: &SessionId, session: RegistrationSession) {
        self.inner
            .save_session(id, session)
            .await
            .expect("in-memory store never fails");
    }
}

#[async_trait::async_trait]
impl SessionManager for RecordingSessionManager {
    async fn get_session(&self, id: &SessionId) -> JourneyResult<RegistrationSession> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_session(id).await
    }

    async fn save_session(
        &self,
        id: &SessionId,
        session: RegistrationSession,
    ) -> JourneyResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.save_session(id, session).await
    }

    async fn remove_session(&self, id: &SessionId) -> JourneyResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove_session(id).await
    }
}
