// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-field bookkeeping.

use crate::validation::{FieldError, FieldOutcome};

/// The validated text fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Mobile,
    DateOfBirth,
    Zipcode,
}

impl FieldKind {
    /// Returns all validated fields in screen order.
    pub fn all() -> [FieldKind; 5] {
        [
            FieldKind::Name,
            FieldKind::Email,
            FieldKind::Mobile,
            FieldKind::DateOfBirth,
            FieldKind::Zipcode,
        ]
    }

    /// Returns the label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::Email => "Email",
            FieldKind::Mobile => "Mobile Number",
            FieldKind::DateOfBirth => "Date of Birth",
            FieldKind::Zipcode => "ZipCode",
        }
    }
}

/// Raw text, normalized value and inline error of one field.
///
/// The value is stored even when invalid so the user keeps seeing what
/// they typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    raw: String,
    value: String,
    error: Option<FieldError>,
}

impl FieldState {
    /// Creates an empty, error-free field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns what the user last typed (the formatted text for mobile).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the normalized value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the inline error, if any.
    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// Returns the inline error text, empty when valid.
    pub fn error_message(&self) -> String {
        self.error.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// Returns true when the field satisfies its rule.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Returns true when the value is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub(crate) fn apply(&mut self, raw: &str, outcome: FieldOutcome) {
        self.raw = raw.to_string();
        self.value = outcome.value;
        self.error = outcome.error;
    }
}
