//! Phone-number parsing capability
//!
//! [`PhoneNumberParser`] is the narrow seam between the validator and a
//! numbering-plan library, so the charset/validity combination can be tested
//! with a stub parser.

use crate::error::PhoneError;
use phonenumber::country;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

/// Parse and validate phone numbers against numbering-plan metadata
pub trait PhoneNumberParser: Send + Sync + Debug {
    /// Parsed number representation
    type Number;

    /// Parse `text`, interpreting national-format numbers in `default_region`
    ///
    /// # Errors
    /// - `PhoneError::Parse` if the text is not a phone number
    /// - `PhoneError::UnknownRegion` if `default_region` is not recognised
    fn parse(&self, text: &str, default_region: &str) -> Result<Self::Number, PhoneError>;

    /// Whether the number is valid for its country
    fn is_valid_number(&self, number: &Self::Number) -> bool;
}

/// Number parsed by [`LibPhoneNumberParser`]
#[derive(Debug, Clone)]
pub struct ParsedNumber(phonenumber::PhoneNumber);

impl ParsedNumber {
    /// Country calling code
    #[inline]
    #[must_use]
    pub fn country_code(&self) -> u16 {
        self.0.code().value()
    }

    /// National significant number
    #[inline]
    #[must_use]
    pub fn national_number(&self) -> u64 {
        self.0.national().value()
    }
}

/// [`PhoneNumberParser`] backed by the `phonenumber` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhoneNumberParser;

impl LibPhoneNumberParser {
    /// Create parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PhoneNumberParser for LibPhoneNumberParser {
    type Number = ParsedNumber;

    fn parse(&self, text: &str, default_region: &str) -> Result<ParsedNumber, PhoneError> {
        let region: country::Id = default_region
            .parse()
            .map_err(|_| PhoneError::UnknownRegion(default_region.to_string()))?;

        // Library panics on malformed input must not escape as request failures
        let parsed = panic::catch_unwind(AssertUnwindSafe(|| {
            phonenumber::parse(Some(region), text)
        }))
        .map_err(|_| PhoneError::ParserPanicked)?;

        parsed
            .map(ParsedNumber)
            .map_err(|e| PhoneError::Parse(e.to_string()))
    }

    fn is_valid_number(&self, number: &ParsedNumber) -> bool {
        panic::catch_unwind(AssertUnwindSafe(|| phonenumber::is_valid(&number.0))).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn national_numbers_default_to_region() {
        let parser = LibPhoneNumberParser::new();
        let number = parser.parse("07812121212", "GB").unwrap();
        assert_eq!(number.country_code(), 44);
        assert_eq!(number.national_number(), 7_812_121_212);
    }

    #[test]
    fn explicit_country_code_overrides_region() {
        let parser = LibPhoneNumberParser::new();
        let number = parser.parse("+34919931307", "GB").unwrap();
        assert_eq!(number.country_code(), 34);
    }

    #[test]
    fn unknown_region_is_reported() {
        let parser = LibPhoneNumberParser::new();
        let err = parser.parse("07812121212", "ZZZ").unwrap_err();
        assert_eq!(err, PhoneError::UnknownRegion("ZZZ".to_string()));
    }

    #[test]
    fn empty_text_fails_to_parse() {
        let parser = LibPhoneNumberParser::new();
        assert!(parser.parse("", "GB").is_err());
    }
}
