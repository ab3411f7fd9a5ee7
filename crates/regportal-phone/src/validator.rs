//! Telephone number validator
//!
//! Combines the numbering-plan check with the charset check. Every failure,
//! including a charset timeout, collapses to `false`.

use crate::charset::CharsetMatcher;
use crate::error::{FieldError, PhoneError};
use crate::parser::{LibPhoneNumberParser, PhoneNumberParser};
use regportal_core::PhoneValidatorConfig;

/// Validator for user-entered telephone numbers
#[derive(Debug, Clone)]
pub struct PhoneNumberValidator<P = LibPhoneNumberParser> {
    parser: P,
    charset: CharsetMatcher,
    default_region: String,
}

impl PhoneNumberValidator {
    /// Validator with default configuration (GB, 250ms)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&PhoneValidatorConfig::default())
    }

    /// Validator using the `phonenumber` crate and the given settings
    #[inline]
    #[must_use]
    pub fn from_config(config: &PhoneValidatorConfig) -> Self {
        Self::with_parser(LibPhoneNumberParser::new(), config)
    }
}

impl Default for PhoneNumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PhoneNumberParser> PhoneNumberValidator<P> {
    /// Validator with a custom parsing capability
    #[must_use]
    pub fn with_parser(parser: P, config: &PhoneValidatorConfig) -> Self {
        Self {
            parser,
            charset: CharsetMatcher::new(config.match_timeout()),
            default_region: config.default_region.clone(),
        }
    }

    /// Region assumed for numbers without a country code
    #[inline]
    #[must_use]
    pub fn default_region(&self) -> &str {
        &self.default_region
    }

    /// Whether `text` is a valid telephone number
    ///
    /// Never panics; parse failures and charset timeouts are `false`.
    #[must_use]
    pub fn is_valid(&self, text: &str) -> bool {
        match self.check(text) {
            Ok(valid) => valid,
            Err(PhoneError::MatchTimeout { timeout_ms }) => {
                tracing::warn!(
                    input_len = text.len(),
                    timeout_ms,
                    "Phone charset check timed out"
                );
                false
            }
            Err(e) => {
                tracing::debug!(input_len = text.len(), "Phone number rejected: {}", e);
                false
            }
        }
    }

    /// Run both checks, reporting why a number was rejected
    ///
    /// # Returns
    /// - `Ok(true)` if the charset and the numbering plan both accept `text`
    /// - `Ok(false)` if either rejects it
    ///
    /// # Errors
    /// - `PhoneError::MatchTimeout` if the charset check overran
    /// - `PhoneError::Parse` / `PhoneError::UnknownRegion` from the parser
    pub fn check(&self, text: &str) -> Result<bool, PhoneError> {
        // Cheap bounded check first so adversarial text never reaches the parser
        if !self.charset.is_match(text)? {
            return Ok(false);
        }

        let parsed = self.parser.parse(text, &self.default_region)?;
        Ok(self.parser.is_valid_number(&parsed))
    }
}

/// Validate an optional form field holding a phone number
///
/// A missing value is checked as the empty string, so it is rejected.
///
/// # Errors
/// - `FieldError::InvalidPhoneNumber` when the value is not a valid number
pub fn validate_phone_field<P: PhoneNumberParser>(
    value: Option<&str>,
    validator: &PhoneNumberValidator<P>,
) -> Result<(), FieldError> {
    if validator.is_valid(value.unwrap_or_default()) {
        Ok(())
    } else {
        Err(FieldError::invalid_phone_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Accepts anything containing a digit, like a lenient library would
    #[derive(Debug)]
    struct LenientParser;

    impl PhoneNumberParser for LenientParser {
        type Number = String;

        fn parse(&self, text: &str, _default_region: &str) -> Result<String, PhoneError> {
            if text.chars().any(|c| c.is_ascii_digit()) {
                Ok(text.chars().filter(char::is_ascii_digit).collect())
            } else {
                Err(PhoneError::Parse("no digits".to_string()))
            }
        }

        fn is_valid_number(&self, number: &String) -> bool {
            (10..=11).contains(&number.len())
        }
    }

    fn lenient() -> PhoneNumberValidator<LenientParser> {
        PhoneNumberValidator::with_parser(LenientParser, &PhoneValidatorConfig::default())
    }

    #[test]
    fn charset_rejects_what_a_lenient_parser_accepts() {
        let validator = lenient();
        assert!(validator.is_valid("078 1212 1212"));
        assert!(!validator.is_valid("078 1212 121A"));
        assert!(!validator.is_valid("!@£$%800 890 567"));
    }

    #[test]
    fn validity_rejects_what_the_charset_accepts() {
        let validator = lenient();
        assert!(!validator.is_valid("020 1212 121 1212"));
        assert!(!validator.is_valid("(020) 1212"));
    }

    #[test]
    fn parse_failure_is_invalid() {
        assert!(!lenient().is_valid(""));
        assert!(matches!(lenient().check(""), Err(PhoneError::Parse(_))));
    }

    #[test]
    fn timeout_is_invalid() {
        let config = PhoneValidatorConfig::default().with_match_timeout(Duration::ZERO);
        let validator = PhoneNumberValidator::with_parser(LenientParser, &config);

        assert!(!validator.is_valid("078 1212 1212"));
        assert!(matches!(
            validator.check("078 1212 1212"),
            Err(PhoneError::MatchTimeout { .. })
        ));
    }

    #[test]
    fn field_adapter_treats_missing_as_empty() {
        let validator = lenient();
        assert_eq!(
            validate_phone_field(None, &validator),
            Err(FieldError::invalid_phone_number())
        );
        assert_eq!(validate_phone_field(Some("078 1212 1212"), &validator), Ok(()));
    }

    #[test]
    fn configured_region_is_used() {
        let config = PhoneValidatorConfig::default().with_default_region("DE");
        let validator = PhoneNumberValidator::from_config(&config);
        assert_eq!(validator.default_region(), "DE");
    }
}
