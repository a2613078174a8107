// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! SimpleForm Mobile Bindings
//!
//! UniFFI bindings for Android and iOS platforms.
//! Exposes the entry screen engine on top of simpleform-core.
//!
//! Note: The confirmation delay is owned by the native side. `begin_submit`
//! returns the delay, the platform shows its busy indicator, then calls
//! `complete_submit` (or `cancel_submit` if the user backs out).

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use simpleform_core::{Catalog, FieldState, FieldView, FormConfig, FormScreen, PendingSubmission};

// === Modules ===

mod error;
mod types;

// Re-export public types
pub use error::MobileError;
pub use types::{
    MobileColor, MobileFieldView, MobileFormPhase, MobileFormRecord, MobileFormView,
    MobileGender, MobileSubmission, MobileSubmitOutcome,
};

uniffi::setup_scaffolding!();

// === Standalone Functions ===

/// Installs a log subscriber with the given filter (e.g. "info",
/// "simpleform_core=debug").
///
/// Returns false if the filter is malformed or a subscriber is already set.
#[uniffi::export]
pub fn init_logging(filter: String) -> bool {
    let Ok(filter) = tracing_subscriber::EnvFilter::try_new(filter) else {
        return false;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

/// Returns the colors of the bundled catalog, in picker order.
#[uniffi::export]
pub fn bundled_colors() -> Vec<MobileColor> {
    Catalog::bundled()
        .colors()
        .choices()
        .iter()
        .map(MobileColor::from)
        .collect()
}

fn field_view(field: &FieldState) -> MobileFieldView {
    FieldView::from(field).into()
}

// === Main Interface ===

struct ScreenSession {
    screen: FormScreen,
    pending: Option<PendingSubmission>,
}

/// Main SimpleForm mobile interface.
#[derive(uniffi::Object)]
pub struct MobileFormScreen {
    session: Mutex<ScreenSession>,
}

impl MobileFormScreen {
    fn from_config(config: FormConfig) -> Result<Arc<Self>, MobileError> {
        let screen = FormScreen::new(config)?;
        Ok(Arc::new(MobileFormScreen {
            session: Mutex::new(ScreenSession {
                screen,
                pending: None,
            }),
        }))
    }
}

#[uniffi::export]
impl MobileFormScreen {
    /// Create a screen that persists submissions under `data_dir`.
    #[uniffi::constructor]
    pub fn new(data_dir: String) -> Result<Arc<Self>, MobileError> {
        let data_path = PathBuf::from(&data_dir);

        std::fs::create_dir_all(&data_path)
            .map_err(|e| MobileError::StorageError(e.to_string()))?;

        let config = FormConfig::default().with_storage_path(data_path.join("simpleform.db"));
        info!(data_dir = %data_dir, "opening form screen");
        Self::from_config(config)
    }

    /// Create a screen with in-memory storage.
    #[uniffi::constructor]
    pub fn in_memory() -> Result<Arc<Self>, MobileError> {
        Self::from_config(FormConfig::default())
    }

    /// Create a screen with a platform-provided catalog.
    ///
    /// Without a `data_dir` submissions are kept in memory only.
    #[uniffi::constructor]
    pub fn with_catalog_json(
        data_dir: Option<String>,
        catalog_json: String,
    ) -> Result<Arc<Self>, MobileError> {
        let catalog = Catalog::from_json(&catalog_json)?;
        let mut config = FormConfig::default().with_catalog(catalog);
        if let Some(dir) = data_dir {
            let data_path = PathBuf::from(dir);
            std::fs::create_dir_all(&data_path)
                .map_err(|e| MobileError::StorageError(e.to_string()))?;
            config = config.with_storage_path(data_path.join("simpleform.db"));
        }
        Self::from_config(config)
    }

    // === Field edits ===

    pub fn set_name(&self, text: String) -> Result<MobileFieldView, MobileError> {
        let mut session = self.session.lock();
        Ok(field_view(session.screen.set_name(&text)?))
    }

    pub fn set_email(&self, text: String) -> Result<MobileFieldView, MobileError> {
        let mut session = self.session.lock();
        Ok(field_view(session.screen.set_email(&text)?))
    }

    /// Returns the formatted value; the platform must write it back into
    /// the text input.
    pub fn set_mobile(&self, text: String) -> Result<MobileFieldView, MobileError> {
        let mut session = self.session.lock();
        Ok(field_view(session.screen.set_mobile(&text)?))
    }

    pub fn set_date_of_birth(&self, text: String) -> Result<MobileFieldView, MobileError> {
        let mut session = self.session.lock();
        Ok(field_view(session.screen.set_date_of_birth(&text)?))
    }

    /// Also updates city and state; read them back through `view`.
    pub fn set_zip_code(&self, text: String) -> Result<MobileFieldView, MobileError> {
        let mut session = self.session.lock();
        Ok(field_view(session.screen.set_zip_code(&text)?))
    }

    pub fn select_gender(&self, gender: MobileGender) -> Result<(), MobileError> {
        Ok(self.session.lock().screen.select_gender(gender.into())?)
    }

    pub fn select_color(&self, name: String) -> Result<(), MobileError> {
        Ok(self.session.lock().screen.select_color(&name)?)
    }

    // === Buttons ===

    /// Press Submit. The record is stored immediately; the platform waits
    /// `delay_ms` and then calls `complete_submit`.
    pub fn begin_submit(&self) -> Result<MobileSubmission, MobileError> {
        let mut session = self.session.lock();
        let pending = session.screen.begin_submit()?;
        let submission = MobileSubmission::from(&pending);
        session.pending = Some(pending);
        Ok(submission)
    }

    /// Finish the pending submission and lock the form.
    pub fn complete_submit(&self) -> Result<MobileSubmitOutcome, MobileError> {
        let mut session = self.session.lock();
        let pending = session
            .pending
            .take()
            .ok_or(MobileError::NoPendingSubmission)?;
        Ok(session.screen.complete_submit(pending)?.into())
    }

    /// Abandon the pending submission and return to editing.
    pub fn cancel_submit(&self) -> Result<(), MobileError> {
        let mut session = self.session.lock();
        session.screen.cancel_submit()?;
        session.pending = None;
        Ok(())
    }

    /// Press Show Data. Returns the appended log block.
    pub fn show_data(&self) -> Result<String, MobileError> {
        Ok(self.session.lock().screen.show_data()?)
    }

    /// Press Reset.
    pub fn reset(&self) -> Result<(), MobileError> {
        Ok(self.session.lock().screen.reset()?)
    }

    // === Queries ===

    pub fn view(&self) -> MobileFormView {
        self.session.lock().screen.view().into()
    }

    pub fn phase(&self) -> MobileFormPhase {
        self.session.lock().screen.state().phase().into()
    }

    /// Last record written to storage, if any.
    pub fn last_submitted(&self) -> Result<Option<MobileFormRecord>, MobileError> {
        let session = self.session.lock();
        Ok(session.screen.last_submitted()?.map(MobileFormRecord::from))
    }

    /// Colors offered by this screen's picker.
    pub fn colors(&self) -> Vec<MobileColor> {
        let session = self.session.lock();
        session
            .screen
            .catalog()
            .colors()
            .choices()
            .iter()
            .map(MobileColor::from)
            .collect()
    }
}
