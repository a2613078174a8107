// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Color picker table.

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// A named color offered by the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorChoice {
    /// Key shown in the picker (e.g., "Red").
    name: String,
    /// Color value, usually a hex string (e.g., "#eb1010").
    value: String,
}

impl ColorChoice {
    /// Creates a color choice.
    pub fn new(name: &str, value: &str) -> Self {
        ColorChoice {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// Returns the picker key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the color value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Ordered, non-empty list of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    choices: Vec<ColorChoice>,
}

impl ColorTable {
    /// Creates a table. The first entry becomes the default selection.
    pub fn new(choices: Vec<ColorChoice>) -> Result<Self, CatalogError> {
        if choices.is_empty() {
            return Err(CatalogError::EmptyColorTable);
        }
        Ok(ColorTable { choices })
    }

    /// Returns the default (first) color.
    pub fn default_choice(&self) -> &ColorChoice {
        &self.choices[0]
    }

    /// Finds a color by its picker key.
    pub fn find(&self, name: &str) -> Option<&ColorChoice> {
        self.choices.iter().find(|c| c.name == name)
    }

    /// Returns all colors in picker order.
    pub fn choices(&self) -> &[ColorChoice] {
        &self.choices
    }

    /// Returns the number of colors.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Returns true if the table has no colors. Never true once constructed.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}
