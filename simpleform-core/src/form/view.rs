// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Render snapshot for the display surface.

use crate::catalog::ColorChoice;

use super::field::FieldState;
use super::record::Gender;

/// Label color used when the selected color has no value.
pub const DEFAULT_LABEL_COLOR: &str = "#000";

/// Displayed text and inline error of one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub value: String,
    /// Empty when the field is valid.
    pub error: String,
}

impl From<&FieldState> for FieldView {
    fn from(field: &FieldState) -> Self {
        FieldView {
            value: field.value().to_string(),
            error: field.error_message(),
        }
    }
}

/// Everything the entry screen needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub name: FieldView,
    pub email: FieldView,
    pub mobile: FieldView,
    pub date_of_birth: FieldView,
    pub zip_code: FieldView,
    pub city: String,
    pub state: String,
    pub gender: Gender,
    pub color: ColorChoice,
    pub submit_enabled: bool,
    pub show_data_enabled: bool,
    pub reset_enabled: bool,
    /// The whole screen is replaced by a busy indicator while true.
    pub is_loading: bool,
    pub log: String,
    pub click_count: u32,
}

impl FormView {
    /// Color applied to every label: the selected color's value.
    pub fn label_color(&self) -> &str {
        match self.color.value() {
            "" => DEFAULT_LABEL_COLOR,
            value => value,
        }
    }
}
