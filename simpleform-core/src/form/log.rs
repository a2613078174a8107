// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submission Log
//!
//! Append-only text shown in the read-only description box. Each
//! "Show Data" press adds one block; nothing is ever trimmed.

/// Counter value of the first block.
pub const FIRST_CLICK: u32 = 1;

/// Values captured in one log block.
#[derive(Debug, Clone, Copy)]
pub struct LogEntry<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub mobile: &'a str,
    pub date_of_birth: &'a str,
    pub gender: &'a str,
    pub zip_code: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub color: &'a str,
}

/// Accumulated log text and the next click number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionLog {
    text: String,
    click_count: u32,
}

impl Default for SubmissionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionLog {
    /// Creates an empty log starting at [`FIRST_CLICK`].
    pub fn new() -> Self {
        SubmissionLog {
            text: String::new(),
            click_count: FIRST_CLICK,
        }
    }

    /// Appends a block for `entry` and advances the counter.
    ///
    /// Returns the block that was appended.
    pub fn append(&mut self, entry: &LogEntry<'_>) -> String {
        let block = format!(
            "Click Count: {}\n\
             Name: {}\n\
             Email: {}\n\
             Mobile: {}\n\
             DOB: {}\n\
             Gender: {}\n\
             Zipcode: {}\n\
             City: {}\n\
             State: {}\n\
             Color Picker: {}\n\n",
            self.click_count,
            entry.name,
            entry.email,
            entry.mobile,
            entry.date_of_birth,
            entry.gender,
            entry.zip_code,
            entry.city,
            entry.state,
            entry.color,
        );

        self.text.push_str(&block);
        self.click_count += 1;
        block
    }

    /// Returns the full log text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the number the next block will carry.
    pub fn click_count(&self) -> u32 {
        self.click_count
    }

    /// Returns true if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
