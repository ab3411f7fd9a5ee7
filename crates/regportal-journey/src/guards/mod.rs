//! Concrete journey guards
//!
//! - [`ComplianceSchemeGuard`]: compliance scheme users must have chosen a scheme
//! - [`SubmissionPeriodGuard`]: a submission period must be recorded
//! - [`SubmissionIdGuard`]: the request must carry a well-formed `submissionId`

mod compliance_scheme;
mod submission_id;
mod submission_period;

pub use compliance_scheme::ComplianceSchemeGuard;
pub use submission_id::{SubmissionIdGuard, SUBMISSION_ID_PARAM};
pub use submission_period::SubmissionPeriodGuard;
