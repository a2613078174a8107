// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Zip code lookup table.

use serde::{Deserialize, Serialize};

/// Input length at which the lookup runs.
pub const ZIP_LOOKUP_LEN: usize = 3;

/// A zip code with its city and state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipCodeEntry {
    #[serde(rename = "zipcode")]
    zip_code: String,
    city: String,
    state: String,
}

impl ZipCodeEntry {
    /// Creates an entry.
    pub fn new(zip_code: &str, city: &str, state: &str) -> Self {
        ZipCodeEntry {
            zip_code: zip_code.to_string(),
            city: city.to_string(),
            state: state.to_string(),
        }
    }

    /// Returns the full zip code.
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    /// Returns the city.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the state.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// An entry with a blank zip, city or state cannot resolve a lookup.
    fn is_complete(&self) -> bool {
        !self.zip_code.is_empty() && !self.city.is_empty() && !self.state.is_empty()
    }
}

/// Ordered zip code table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZipCodeTable {
    entries: Vec<ZipCodeEntry>,
}

impl ZipCodeTable {
    /// Creates a table; lookups scan entries in this order.
    pub fn new(entries: Vec<ZipCodeEntry>) -> Self {
        ZipCodeTable { entries }
    }

    /// Returns the first entry whose zip code contains `partial`.
    ///
    /// This is a substring match, not a prefix match: `"234"` finds `"12345"`.
    /// An incomplete first match counts as a miss; later entries are not tried.
    pub fn lookup(&self, partial: &str) -> Option<&ZipCodeEntry> {
        self.entries
            .iter()
            .find(|entry| entry.zip_code.contains(partial))
            .filter(|entry| entry.is_complete())
    }

    /// Returns all entries.
    pub fn entries(&self) -> &[ZipCodeEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
