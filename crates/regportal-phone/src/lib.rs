//! Registration Portal Phone Validation
//!
//! Accepts human-entered UK and international telephone numbers and rejects
//! anything malformed, within a fixed time bound.
//!
//! # Overview
//!
//! A number is valid when two independent checks agree:
//! - **CharsetMatcher**: the raw text contains only digits, spaces,
//!   parentheses and `+`, checked under a deadline
//! - **PhoneNumberParser**: the text parses (national numbers default to the
//!   configured region) and is a valid number for its country
//!
//! The parser alone is lenient about stray characters, and the charset alone
//! says nothing about numbering plans.
//!
//! # Example
//!
//! ```rust,ignore
//! use regportal_phone::PhoneNumberValidator;
//!
//! let validator = PhoneNumberValidator::new();
//! assert!(validator.is_valid("020 1212 1212"));
//! assert!(!validator.is_valid("078 1212 121A"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod charset;
pub mod error;
pub mod parser;
pub mod validator;

// Re-exports
pub use charset::CharsetMatcher;
pub use error::{FieldError, PhoneError};
pub use parser::{LibPhoneNumberParser, ParsedNumber, PhoneNumberParser};
pub use validator::{validate_phone_field, PhoneNumberValidator};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for phone validation
    pub use crate::{
        validate_phone_field, FieldError, PhoneError, PhoneNumberParser, PhoneNumberValidator,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
