// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field Validation
//!
//! Pure per-field rules. Each validator maps the text the user typed to a
//! normalized value and an optional inline error. Nothing here touches form
//! state; the state machine decides what to store.

mod mobile;
mod rules;

pub use mobile::{format_mobile_number, MOBILE_SEPARATOR};
pub(crate) use rules::check_mobile;
pub use rules::{
    validate_dob, validate_email, validate_mobile, validate_name, validate_zipcode, FieldError,
    FieldOutcome,
};
