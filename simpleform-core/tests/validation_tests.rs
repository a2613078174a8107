// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for validation
//!
//! Field rules, their inline messages and the mobile formatter.

mod common;

use common::strategies::*;
use proptest::prelude::*;
use simpleform_core::*;

// === Name ===

#[test]
fn test_name_required() {
    let outcome = validate_name("");
    assert_eq!(outcome.error, Some(FieldError::NameRequired));
    assert_eq!(outcome.error.unwrap().to_string(), "Name is required.");
}

#[test]
fn test_name_invalid_message() {
    let outcome = validate_name("Ada!");
    assert_eq!(
        outcome.error.unwrap().to_string(),
        "Name should contain only alphabet characters, spaces, and apostrophes."
    );
}

#[test]
fn test_name_value_echoed_when_invalid() {
    assert_eq!(validate_name("Ada 2").value, "Ada 2");
}

proptest! {
    #[test]
    fn prop_valid_names_pass(name in valid_name_strategy()) {
        prop_assert!(validate_name(&name).is_valid());
    }

    #[test]
    fn prop_names_with_digits_or_symbols_fail(name in invalid_name_strategy()) {
        prop_assert_eq!(validate_name(&name).error, Some(FieldError::InvalidName));
    }

    #[test]
    fn prop_emails_pass(email in email_strategy()) {
        prop_assert!(validate_email(&email).is_valid());
    }

    #[test]
    fn prop_format_only_dates_pass(dob in dob_strategy()) {
        prop_assert!(validate_dob(&dob).is_valid());
    }

    #[test]
    fn prop_dashed_mobiles_pass(mobile in mobile_strategy()) {
        let outcome = validate_mobile(&mobile);
        prop_assert!(outcome.is_valid());
        prop_assert_eq!(outcome.value, mobile);
    }
}

// === Email ===

#[test]
fn test_email_required() {
    assert_eq!(validate_email("").error, Some(FieldError::EmailRequired));
}

#[test]
fn test_email_invalid() {
    for email in ["ada", "ada@example", "@.", "ada@.com"] {
        assert_eq!(
            validate_email(email).error,
            Some(FieldError::InvalidEmail),
            "'{}' should be rejected",
            email
        );
    }
    assert_eq!(
        FieldError::InvalidEmail.to_string(),
        "Please enter a valid email address."
    );
}

#[test]
fn test_email_pattern_is_unanchored() {
    // Only some `x@y.z` run has to appear somewhere in the input.
    assert!(validate_email("ada lovelace@example.com").is_valid());
}

// === Mobile ===

#[test]
fn test_mobile_four_digits_get_separator() {
    let outcome = validate_mobile("1234");
    assert_eq!(outcome.value, "1234-");
    assert_eq!(outcome.error, Some(FieldError::InvalidMobile));
}

#[test]
fn test_mobile_long_input_not_reformatted() {
    let outcome = validate_mobile("12345678901");
    assert_eq!(outcome.value, "12345678901");
    assert!(!outcome.is_valid());
}

#[test]
fn test_mobile_dashed_is_valid() {
    assert!(validate_mobile("1234-567890").is_valid());
}

#[test]
fn test_mobile_without_dash_is_invalid() {
    assert_eq!(
        validate_mobile("1234567890").error,
        Some(FieldError::InvalidMobile)
    );
}

#[test]
fn test_mobile_required() {
    let outcome = validate_mobile("");
    assert_eq!(outcome.error, Some(FieldError::MobileRequired));
    assert_eq!(
        outcome.error.unwrap().to_string(),
        "Mobile number is required."
    );
}

#[test]
fn test_formatter_is_stateless() {
    assert_eq!(format_mobile_number("9876"), "9876-");
    assert_eq!(format_mobile_number("9876"), "9876-");
    assert_eq!(format_mobile_number("98-7"), "98-7");
}

// === Date of birth ===

#[test]
fn test_dob_has_no_calendar_check() {
    // 31 February passes: only the shape of the date is checked.
    assert!(validate_dob("31-02-2020").is_valid());
}

#[test]
fn test_dob_rejects_out_of_range_parts() {
    for dob in ["32-01-2020", "00-01-2020", "15-13-2020", "15-00-2020", "1-1-2020", "2020-01-01"] {
        assert_eq!(
            validate_dob(dob).error,
            Some(FieldError::InvalidDob),
            "'{}' should be rejected",
            dob
        );
    }
}

#[test]
fn test_dob_messages() {
    assert_eq!(validate_dob("").error, Some(FieldError::DobRequired));
    assert_eq!(
        FieldError::InvalidDob.to_string(),
        "Please enter a valid date of birth in the format DD-MM-YYYY."
    );
}

// === Zip code ===

#[test]
fn test_zipcode_only_requires_presence() {
    assert!(validate_zipcode("abc").is_valid());
    assert_eq!(validate_zipcode("").error, Some(FieldError::ZipcodeRequired));
    assert_eq!(FieldError::ZipcodeRequired.to_string(), "Zipcode is required.");
}
