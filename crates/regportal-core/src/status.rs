//! Submission statuses and their localization keys
//!
//! Two statuses intentionally share the `submitted_to_regulator` key; the
//! mapping is many-to-one, so callers must not invert it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// State of a registration submission as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// Nothing uploaded yet
    NotStarted,
    /// File uploaded, not yet submitted
    FileUploaded,
    /// Submitted, with a newer upload waiting
    SubmittedAndHasRecentFileUpload,
    /// Submitted to the regulator
    SubmittedToRegulator,
    /// Accepted by the regulator
    Accepted,
    /// Rejected by the regulator
    Rejected,
    /// Cancelled by the regulator
    Cancelled,
    /// Registration granted
    Granted,
    /// Registration refused
    Refused,
    /// Regulator raised a query
    Queried,
    /// Awaiting regulator decision
    Pending,
}

impl SubmissionStatus {
    /// Every status, in declaration order
    pub const ALL: [Self; 11] = [
        Self::NotStarted,
        Self::FileUploaded,
        Self::SubmittedAndHasRecentFileUpload,
        Self::SubmittedToRegulator,
        Self::Accepted,
        Self::Rejected,
        Self::Cancelled,
        Self::Granted,
        Self::Refused,
        Self::Queried,
        Self::Pending,
    ];

    /// Localization key for the status label
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::FileUploaded => "file_uploaded",
            Self::SubmittedAndHasRecentFileUpload | Self::SubmittedToRegulator => {
                "submitted_to_regulator"
            }
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
            Self::Granted => "granted",
            Self::Refused => "refused",
            Self::Queried => "queried",
            Self::Pending => "pending",
        }
    }
}

/// Label keys shared by more than one status, with the statuses sharing them
#[must_use]
pub fn label_key_collisions() -> BTreeMap<&'static str, Vec<SubmissionStatus>> {
    let mut by_key: BTreeMap<&'static str, Vec<SubmissionStatus>> = BTreeMap::new();
    for status in SubmissionStatus::ALL {
        by_key.entry(status.label_key()).or_default().push(status);
    }
    by_key.retain(|_, statuses| statuses.len() > 1);
    by_key
}
