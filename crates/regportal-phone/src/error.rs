//! Error types for phone validation
//!
//! [`PhoneError`] is internal detail: the public validator collapses every
//! variant to `false`. [`FieldError`] is what form handling surfaces.

/// Localization key shown beside an invalid phone field
pub const INVALID_PHONE_NUMBER_KEY: &str = "enter_valid_phone_number";

/// Reasons a number failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneError {
    /// Text could not be parsed as a phone number
    #[error("unparseable phone number: {0}")]
    Parse(String),

    /// Configured default region is not known to the parser
    #[error("unknown region: '{0}'")]
    UnknownRegion(String),

    /// Charset check exceeded its deadline
    #[error("charset match exceeded {timeout_ms}ms")]
    MatchTimeout {
        /// Configured bound in milliseconds
        timeout_ms: u64,
    },

    /// Parser panicked on the input
    #[error("phone number parser panicked")]
    ParserPanicked,
}

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Number is malformed or not valid for its country
    #[error("invalid phone number ({message_key})")]
    InvalidPhoneNumber {
        /// Localization key for the inline message
        message_key: &'static str,
    },
}

impl FieldError {
    /// Invalid phone number with the standard message key
    #[inline]
    #[must_use]
    pub fn invalid_phone_number() -> Self {
        Self::InvalidPhoneNumber {
            message_key: INVALID_PHONE_NUMBER_KEY,
        }
    }

    /// Localization key for the message shown to the user
    #[inline]
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::InvalidPhoneNumber { message_key } => message_key,
        }
    }
}
