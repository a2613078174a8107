// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! The submitted record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gender radio selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Returns the label shown next to the radio button.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated set of form values, as persisted and confirmed.
///
/// Only built by [`FormState`](super::FormState) once every field is valid
/// and non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub name: String,
    pub email: String,
    /// `DDDD-DDDDDD`.
    pub mobile: String,
    /// `DD-MM-YYYY`.
    #[serde(rename = "dob")]
    pub date_of_birth: String,
    pub gender: Gender,
    #[serde(rename = "zipcode")]
    pub zip_code: String,
    pub city: String,
    pub state: String,
    /// Picker key of the selected color.
    #[serde(rename = "color")]
    pub color_choice: String,
}

impl FormRecord {
    /// Serializes the record to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a record from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let record = FormRecord {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            mobile: "0300-123456".into(),
            date_of_birth: "10-12-1990".into(),
            gender: Gender::Female,
            zip_code: "12345".into(),
            city: "Springfield".into(),
            state: "NT".into(),
            color_choice: "Red".into(),
        };

        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(value["dob"], "10-12-1990");
        assert_eq!(value["zipcode"], "12345");
        assert_eq!(value["gender"], "Female");
        assert_eq!(value["color"], "Red");
    }
}
