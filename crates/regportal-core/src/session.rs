//! Server-side session model
//!
//! A [`RegistrationSession`] is created on the first authenticated request and
//! updated incrementally by the action that owns each journey step. Guards
//! only ever read it.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Client-held session identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an existing identifier
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the raw identifier
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role an organisation plays in the compliance regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganisationRole {
    /// Directly obligated producer
    Producer,
    /// Scheme reporting on behalf of member producers
    #[serde(rename = "Compliance Scheme")]
    ComplianceScheme,
    /// Packaging exporter
    Exporter,
    /// Packaging reprocessor
    Reprocessor,
}

impl OrganisationRole {
    /// Canonical display form, as carried in user claims
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Producer => "Producer",
            Self::ComplianceScheme => "Compliance Scheme",
            Self::Exporter => "Exporter",
            Self::Reprocessor => "Reprocessor",
        }
    }
}

impl fmt::Display for OrganisationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrganisationRole {
    type Err = CoreError;

    /// Accepts both "Compliance Scheme" and "ComplianceScheme", ignoring case
    fn from_str(s: &str) -> CoreResult<Self> {
        let normalised: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalised.as_str() {
            "producer" => Ok(Self::Producer),
            "compliancescheme" => Ok(Self::ComplianceScheme),
            "exporter" => Ok(Self::Exporter),
            "reprocessor" => Ok(Self::Reprocessor),
            _ => Err(CoreError::UnknownRole(s.to_string())),
        }
    }
}

/// Organisation linked to the signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organisation {
    /// Organisation identifier
    pub id: Option<Uuid>,
    /// Display name
    pub name: Option<String>,
    /// Role string as received from the identity provider
    pub organisation_role: String,
}

impl Organisation {
    /// Create organisation with the given role string
    #[inline]
    #[must_use]
    pub fn new(organisation_role: impl Into<String>) -> Self {
        Self {
            id: None,
            name: None,
            organisation_role: organisation_role.into(),
        }
    }

    /// Create organisation for a known role
    #[inline]
    #[must_use]
    pub fn with_role(role: OrganisationRole) -> Self {
        Self::new(role.as_str())
    }

    /// Set identifier
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Set display name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parsed role; `None` for roles this portal does not recognise
    #[must_use]
    pub fn role(&self) -> Option<OrganisationRole> {
        self.organisation_role.parse().ok()
    }
}

/// Authenticated user details held in session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    /// User identifier
    pub id: Option<Uuid>,
    /// Organisations the user acts for, primary first
    pub organisations: Vec<Organisation>,
}

impl UserData {
    /// Create user data with organisations
    #[inline]
    #[must_use]
    pub fn new(organisations: Vec<Organisation>) -> Self {
        Self {
            id: None,
            organisations,
        }
    }

    /// Primary organisation
    #[inline]
    #[must_use]
    pub fn primary_organisation(&self) -> Option<&Organisation> {
        self.organisations.first()
    }
}

/// Registration journey progress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationJourneyState {
    /// Scheme chosen by a compliance scheme user
    pub selected_compliance_scheme_id: Option<Uuid>,
    /// Submission period being worked on
    pub submission_period: Option<String>,
    /// Current submission
    pub submission_id: Option<Uuid>,
}

impl RegistrationJourneyState {
    /// Whether a non-empty submission period has been recorded
    #[inline]
    #[must_use]
    pub fn has_submission_period(&self) -> bool {
        self.submission_period
            .as_deref()
            .is_some_and(|period| !period.is_empty())
    }
}

/// Session snapshot for one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationSession {
    /// Signed-in user; `None` before sign-in completes
    pub user_data: Option<UserData>,
    /// Journey progress
    pub registration: RegistrationJourneyState,
}

impl RegistrationSession {
    /// Empty session
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With user data
    #[inline]
    #[must_use]
    pub fn with_user_data(mut self, user_data: UserData) -> Self {
        self.user_data = Some(user_data);
        self
    }

    /// With journey state
    #[inline]
    #[must_use]
    pub fn with_registration(mut self, registration: RegistrationJourneyState) -> Self {
        self.registration = registration;
        self
    }

    /// Role of the user's primary organisation
    #[must_use]
    pub fn organisation_role(&self) -> Option<OrganisationRole> {
        self.user_data
            .as_ref()
            .and_then(UserData::primary_organisation)
            .and_then(Organisation::role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_parsing_accepts_spaced_and_compact_forms() {
        assert_eq!(
            "Compliance Scheme".parse::<OrganisationRole>().unwrap(),
            OrganisationRole::ComplianceScheme
        );
        assert_eq!(
            "ComplianceScheme".parse::<OrganisationRole>().unwrap(),
            OrganisationRole::ComplianceScheme
        );
        assert_eq!(
            "producer".parse::<OrganisationRole>().unwrap(),
            OrganisationRole::Producer
        );
        assert!("Regulator".parse::<OrganisationRole>().is_err());
    }

    #[test]
    fn role_roundtrips_through_display() {
        for role in [
            OrganisationRole::Producer,
            OrganisationRole::ComplianceScheme,
            OrganisationRole::Exporter,
            OrganisationRole::Reprocessor,
        ] {
            assert_eq!(role.to_string().parse::<OrganisationRole>().unwrap(), role);
        }
    }

    #[test]
    fn organisation_role_uses_first_organisation() {
        let session = RegistrationSession::new().with_user_data(UserData::new(vec![
            Organisation::with_role(OrganisationRole::Producer),
            Organisation::with_role(OrganisationRole::ComplianceScheme),
        ]));

        assert_eq!(session.organisation_role(), Some(OrganisationRole::Producer));
    }

    #[test]
    fn organisation_role_absent_without_user() {
        assert_eq!(RegistrationSession::new().organisation_role(), None);
        let empty = RegistrationSession::new().with_user_data(UserData::default());
        assert_eq!(empty.organisation_role(), None);
    }

    #[test]
    fn empty_submission_period_is_not_set() {
        let mut state = RegistrationJourneyState::default();
        assert!(!state.has_submission_period());

        state.submission_period = Some(String::new());
        assert!(!state.has_submission_period());

        state.submission_period = Some("January to June 2025".to_string());
        assert!(state.has_submission_period());
    }

    #[test]
    fn session_serializes_role_in_claim_form() {
        let json = serde_json::to_string(&OrganisationRole::ComplianceScheme).unwrap();
        assert_eq!(json, "\"Compliance Scheme\"");

        let session = RegistrationSession::new()
            .with_user_data(UserData::new(vec![Organisation::new("Producer")]));
        let restored: RegistrationSession =
            serde_json::from_str(&serde_json::to_string(&session).unwrap()).unwrap();
        assert_eq!(restored, session);
    }
}
