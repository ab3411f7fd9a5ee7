//! Registration Portal Journey Guards
//!
//! Enforces ordered preconditions across the multi-step registration journey
//! by inspecting server-side session state before a step executes.
//!
//! # Core Operations
//!
//! - **Load**: read the caller's [`RegistrationSession`](regportal_core::RegistrationSession)
//!   through a [`SessionManager`]
//! - **Check**: each [`JourneyGuard`] decides continue or redirect
//! - **Dispatch**: [`GuardPipeline`] runs guards in attachment order and only
//!   then invokes the action
//!
//! # Architecture
//!
//! ```text
//! Request → RequestContext → [guard 1] → [guard 2] → ... → action
//!                               │            │
//!                               └─ Redirect ─┴──────→ fallback path
//!                                    ↑
//!                              SessionManager (read-only)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use regportal_journey::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), JourneyError> {
//! let sessions: Arc<dyn SessionManager> = Arc::new(InMemorySessionManager::default());
//!
//! let pipeline = GuardPipeline::new()
//!     .guard(ComplianceSchemeGuard::new(sessions.clone()))
//!     .guard(SubmissionPeriodGuard::new(sessions.clone(), "/submission-period"));
//!
//! let ctx = RequestContext::from_uri(SessionId::generate(), "/file-upload");
//! match pipeline.run(&ctx, || async { Ok::<_, JourneyError>("uploaded") }).await? {
//!     Dispatch::Completed(body) => println!("{body}"),
//!     Dispatch::Redirected(redirect) => println!("-> {}", redirect.location),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod context;
pub mod error;
pub mod guard;
pub mod guards;
pub mod pipeline;
pub mod session;

// Re-exports for convenience
pub use context::RequestContext;
pub use error::{JourneyError, JourneyResult};
pub use guard::{GuardOutcome, JourneyGuard, Redirect};
pub use guards::{
    ComplianceSchemeGuard, SubmissionIdGuard, SubmissionPeriodGuard, SUBMISSION_ID_PARAM,
};
pub use pipeline::{Dispatch, GuardPipeline};
pub use session::{update_session, InMemorySessionManager, SessionManager};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for attaching journey guards
    pub use crate::{
        ComplianceSchemeGuard, Dispatch, GuardOutcome, GuardPipeline, InMemorySessionManager,
        JourneyError, JourneyGuard, Redirect, RequestContext, SessionManager, SubmissionIdGuard,
        SubmissionPeriodGuard,
    };
    pub use regportal_core::{RegistrationSession, SessionId};
}
