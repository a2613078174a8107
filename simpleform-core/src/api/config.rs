// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Screen configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::storage::FORM_DATA_KEY;

/// Delay between pressing Submit and the confirmation.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Configuration for a [`FormScreen`](super::FormScreen).
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// SQLite database file. `None` keeps the record in memory only.
    pub storage_path: Option<PathBuf>,

    /// Key the submitted record is stored under.
    pub storage_key: String,

    /// Busy period before the submission is confirmed.
    pub submit_delay: Duration,

    /// Color and zip tables.
    pub catalog: Catalog,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            storage_key: FORM_DATA_KEY.to_string(),
            submit_delay: DEFAULT_SUBMIT_DELAY,
            catalog: Catalog::bundled(),
        }
    }
}

impl FormConfig {
    /// Persist to a SQLite file at `path`.
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Store the record under a different key.
    pub fn with_storage_key(mut self, key: &str) -> Self {
        self.storage_key = key.to_string();
        self
    }

    /// Override the confirmation delay.
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    /// Use a custom catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }
}
