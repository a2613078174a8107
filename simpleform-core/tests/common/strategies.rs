// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies

use proptest::prelude::*;

/// Non-empty names made of letters, spaces and apostrophes.
pub fn valid_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z' ]{0,20}[A-Za-z']"
}

/// Names with at least one digit or disallowed symbol somewhere.
pub fn invalid_name_strategy() -> impl Strategy<Value = String> {
    ("[A-Za-z ]{0,10}", "[0-9!@#$%^&*()_+=.,;:?/-]", "[A-Za-z ]{0,10}")
        .prop_map(|(head, bad, tail)| format!("{head}{bad}{tail}"))
}

/// Well-formed email addresses.
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{1,10}", "[a-z]{1,8}", "[a-z]{2,4}")
        .prop_map(|(user, domain, tld)| format!("{}@{}.{}", user, domain, tld))
}

/// Dates in `DD-MM-YYYY` with day 01-31 and month 01-12, any combination.
pub fn dob_strategy() -> impl Strategy<Value = String> {
    (1u32..=31, 1u32..=12, 0u32..=9999)
        .prop_map(|(day, month, year)| format!("{:02}-{:02}-{:04}", day, month, year))
}

/// Valid `DDDD-DDDDDD` mobile numbers.
pub fn mobile_strategy() -> impl Strategy<Value = String> {
    ("[0-9]{4}", "[0-9]{6}").prop_map(|(prefix, rest)| format!("{prefix}-{rest}"))
}
