//! Bounded-time charset check
//!
//! The permitted character class is matched chunk by chunk against a
//! deadline, so the bound holds regardless of the regex engine's own
//! behaviour on long input.

use crate::error::PhoneError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::{Duration, Instant};

/// Digits, spaces, parentheses and plus signs only
static PERMITTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+ 0-9()]*$").expect("permitted charset pattern is valid"));

/// Bytes matched between deadline checks
const CHUNK_BYTES: usize = 1024;

/// Whole-string charset matcher with a hard deadline
#[derive(Debug, Clone)]
pub struct CharsetMatcher {
    timeout: Duration,
}

impl CharsetMatcher {
    /// Create matcher with the given bound
    #[inline]
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Configured bound
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check that every character of `text` is permitted
    ///
    /// # Errors
    /// - `PhoneError::MatchTimeout` if the deadline passes before the whole
    ///   string has been examined
    pub fn is_match(&self, text: &str) -> Result<bool, PhoneError> {
        let deadline = Instant::now().checked_add(self.timeout);
        let mut rest = text;

        loop {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                return Err(PhoneError::MatchTimeout {
                    timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                });
            }
            if rest.is_empty() {
                return Ok(true);
            }

            let (chunk, tail) = rest.split_at(chunk_end(rest, CHUNK_BYTES));
            if !PERMITTED.is_match(chunk) {
                return Ok(false);
            }
            rest = tail;
        }
    }
}

impl Default for CharsetMatcher {
    /// 250ms bound
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

/// Largest char boundary in `s` at or below `max` bytes (at least one char)
fn chunk_end(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    let mut end = max;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    if end == 0 {
        s.chars().next().map_or(s.len(), char::len_utf8)
    } else {
        end
    }
}
