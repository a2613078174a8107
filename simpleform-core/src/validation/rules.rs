// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field Rules
//!
//! One validator per form field. The rules are format checks only: a date
//! of birth like `31-02-2020` passes because no calendar check is made.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::mobile::format_mobile_number;

// `[0-9]` rather than `\d`: the regex crate's `\d` also matches non-ASCII digits.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s']+$").expect("Invalid name pattern"));
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid email pattern"));
static MOBILE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{6}$").expect("Invalid mobile pattern"));
static DOB_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])-(0[1-9]|1[0-2])-[0-9]{4}$")
        .expect("Invalid date of birth pattern")
});

/// Inline validation errors, one message per field and failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Name should contain only alphabet characters, spaces, and apostrophes.")]
    InvalidName,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Mobile number is required.")]
    MobileRequired,
    #[error("Please enter a valid mobile number.")]
    InvalidMobile,
    #[error("Date of birth is required.")]
    DobRequired,
    #[error("Please enter a valid date of birth in the format DD-MM-YYYY.")]
    InvalidDob,
    #[error("Zipcode is required.")]
    ZipcodeRequired,
}

/// Result of running a validator over one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    /// Normalized value to store (formatted for mobile, verbatim otherwise).
    pub value: String,
    /// Inline error, `None` when the value satisfies the rule.
    pub error: Option<FieldError>,
}

impl FieldOutcome {
    fn checked(value: &str, required: FieldError, invalid: FieldError, pattern: &Regex) -> Self {
        let error = if value.is_empty() {
            Some(required)
        } else if !pattern.is_match(value) {
            Some(invalid)
        } else {
            None
        };
        FieldOutcome {
            value: value.to_string(),
            error,
        }
    }

    /// Returns true when no error was raised.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Letters, spaces and apostrophes only.
pub fn validate_name(raw: &str) -> FieldOutcome {
    FieldOutcome::checked(
        raw,
        FieldError::NameRequired,
        FieldError::InvalidName,
        &NAME_PATTERN,
    )
}

/// Something, an `@`, something, a dot, something.
pub fn validate_email(raw: &str) -> FieldOutcome {
    FieldOutcome::checked(
        raw,
        FieldError::EmailRequired,
        FieldError::InvalidEmail,
        &EMAIL_PATTERN,
    )
}

/// Formats the input, then requires `DDDD-DDDDDD`.
pub fn validate_mobile(raw: &str) -> FieldOutcome {
    check_mobile(&format_mobile_number(raw))
}

/// Mobile rule without formatting, for input that must be taken as typed.
pub(crate) fn check_mobile(value: &str) -> FieldOutcome {
    FieldOutcome::checked(
        value,
        FieldError::MobileRequired,
        FieldError::InvalidMobile,
        &MOBILE_PATTERN,
    )
}

/// `DD-MM-YYYY` with day 01-31 and month 01-12.
pub fn validate_dob(raw: &str) -> FieldOutcome {
    FieldOutcome::checked(
        raw,
        FieldError::DobRequired,
        FieldError::InvalidDob,
        &DOB_PATTERN,
    )
}

/// Presence only; the city/state lookup never raises an error.
pub fn validate_zipcode(raw: &str) -> FieldOutcome {
    FieldOutcome {
        value: raw.to_string(),
        error: raw.is_empty().then_some(FieldError::ZipcodeRequired),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_apostrophes_and_spaces() {
        assert!(validate_name("Mary O'Neil").is_valid());
    }

    #[test]
    fn test_name_rejects_digits() {
        assert_eq!(validate_name("R2D2").error, Some(FieldError::InvalidName));
    }

    #[test]
    fn test_mobile_formats_before_checking() {
        let outcome = validate_mobile("1234");
        assert_eq!(outcome.value, "1234-");
        assert_eq!(outcome.error, Some(FieldError::InvalidMobile));
    }

    #[test]
    fn test_check_mobile_skips_formatting() {
        assert_eq!(check_mobile("1234").value, "1234");
    }

    #[test]
    fn test_dob_rejects_non_ascii_digits() {
        assert!(!validate_dob("01-01-١٩٩٠").is_valid());
    }
}
