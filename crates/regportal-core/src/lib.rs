//! Registration Portal Core
//!
//! Shared domain types consumed by the phone validator and the journey
//! guards.
//!
//! # Overview
//!
//! - **RegistrationSession**: server-side session snapshot keyed by [`SessionId`]
//! - **RegistrationJourneyState**: per-step registration progress
//! - **SubmissionStatus**: submission states and their localization keys
//! - **PortalConfig**: TOML-loadable configuration for the validator and guards
//!
//! # Example
//!
//! ```rust
//! use regportal_core::{Organisation, OrganisationRole, RegistrationSession, UserData};
//!
//! let session = RegistrationSession::default()
//!     .with_user_data(UserData::new(vec![Organisation::new("Compliance Scheme")]));
//!
//! assert_eq!(session.organisation_role(), Some(OrganisationRole::ComplianceScheme));
//! assert!(session.registration.selected_compliance_scheme_id.is_none());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod session;
pub mod status;

// Re-exports
pub use config::{JourneyConfig, PhoneValidatorConfig, PortalConfig};
pub use error::{ConfigError, CoreError, CoreResult};
pub use session::{
    Organisation, OrganisationRole, RegistrationJourneyState, RegistrationSession, SessionId,
    UserData,
};
pub use status::{label_key_collisions, SubmissionStatus};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with portal sessions
    pub use crate::{
        JourneyConfig, Organisation, OrganisationRole, PhoneValidatorConfig, PortalConfig,
        RegistrationJourneyState, RegistrationSession, SessionId, SubmissionStatus, UserData,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
