// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Form Screen Orchestrator
//!
//! Main entry point for a native screen. Owns the form state, the catalog,
//! the persistence port and the event dispatcher.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::form::{FieldState, FormRecord, FormState, FormView, Gender, TransitionError};
use crate::storage::{KeyValueStore, Storage};

use super::config::FormConfig;
use super::error::{FormError, FormResult};
use super::events::{EventDispatcher, EventHandler, FormEvent};
use super::submission::{CancelToken, PendingSubmission, SubmitOutcome};

/// The entry screen's engine.
///
/// Every call runs to completion before the next; the only suspension
/// point is the confirmation delay inside [`FormScreen::submit`].
///
/// # Example
///
/// ```ignore
/// use simpleform_core::{FormConfig, FormScreen};
///
/// let mut screen = FormScreen::new(FormConfig::default().with_storage_path("form.db"))?;
/// screen.set_name("Ada Lovelace")?;
/// screen.set_email("ada@example.com")?;
/// screen.set_mobile("0300")?;           // becomes "0300-"
/// screen.set_mobile("0300-123456")?;
/// screen.set_date_of_birth("10-12-1990")?;
/// screen.set_zip_code("100")?;          // resolves city and state
///
/// let outcome = screen.submit().await?;
/// println!("Form Data: {}", outcome.encoded);
/// ```
pub struct FormScreen {
    config: FormConfig,
    state: FormState,
    store: Box<dyn KeyValueStore>,
    events: EventDispatcher,
    /// Id of the submission currently waiting out its delay.
    pending_id: Option<u64>,
    next_submission_id: u64,
}

impl FormScreen {
    /// Creates a screen backed by SQLite, on disk if a path is configured.
    pub fn new(config: FormConfig) -> FormResult<Self> {
        let storage = match &config.storage_path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| FormError::Configuration(e.to_string()))?;
                }
                Storage::open(path)?
            }
            None => Storage::in_memory()?,
        };
        Ok(Self::with_store(config, storage))
    }

    /// Creates a screen with default configuration and in-memory storage.
    pub fn in_memory() -> FormResult<Self> {
        Self::new(FormConfig::default())
    }

    /// Creates a screen writing through a custom store.
    pub fn with_store<S: KeyValueStore + 'static>(config: FormConfig, store: S) -> Self {
        let state = FormState::new(config.catalog.colors().default_choice().clone());
        FormScreen {
            config,
            state,
            store: Box::new(store),
            events: EventDispatcher::new(),
            pending_id: None,
            next_submission_id: 0,
        }
    }

    /// Registers an event handler.
    pub fn add_event_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.events.add_handler(handler);
    }

    // === Field edits ===

    /// Handles a change of the name input.
    pub fn set_name(&mut self, text: &str) -> FormResult<&FieldState> {
        debug!("name edited");
        Ok(self.state.set_name(text)?)
    }

    /// Handles a change of the email input.
    pub fn set_email(&mut self, text: &str) -> FormResult<&FieldState> {
        debug!("email edited");
        Ok(self.state.set_email(text)?)
    }

    /// Handles a change of the mobile input.
    pub fn set_mobile(&mut self, text: &str) -> FormResult<&FieldState> {
        debug!("mobile edited");
        Ok(self.state.set_mobile(text)?)
    }

    /// Handles a change of the date of birth input.
    pub fn set_date_of_birth(&mut self, text: &str) -> FormResult<&FieldState> {
        debug!("date of birth edited");
        Ok(self.state.set_date_of_birth(text)?)
    }

    /// Handles a change of the zip code input.
    pub fn set_zip_code(&mut self, text: &str) -> FormResult<&FieldState> {
        debug!("zip code edited");
        Ok(self
            .state
            .set_zip_code(text, self.config.catalog.zipcodes())?)
    }

    /// Selects a gender.
    pub fn select_gender(&mut self, gender: Gender) -> FormResult<()> {
        Ok(self.state.select_gender(gender)?)
    }

    /// Selects a color by its picker key.
    pub fn select_color(&mut self, name: &str) -> FormResult<()> {
        let choice = self
            .config
            .catalog
            .colors()
            .find(name)
            .cloned()
            .ok_or_else(|| FormError::UnknownColor(name.to_string()))?;
        Ok(self.state.select_color(choice)?)
    }

    // === Submit ===

    /// Presses Submit and waits out the confirmation delay.
    pub async fn submit(&mut self) -> FormResult<SubmitOutcome> {
        self.submit_with_cancel(CancelToken::new()).await
    }

    /// Like [`submit`](Self::submit), abandoning the delay if `token` fires.
    ///
    /// A cancelled submission leaves the already-stored record in place and
    /// returns the screen to editing. Dropping the future during the delay
    /// cancels the same way.
    pub async fn submit_with_cancel(&mut self, token: CancelToken) -> FormResult<SubmitOutcome> {
        let pending = self.start_submission(token)?;
        let mut guard = SubmitGuard {
            screen: self,
            armed: true,
        };
        let confirmed = pending.wait().await;
        guard.armed = false;

        if confirmed {
            guard.screen.complete_submit(pending)
        } else {
            guard.screen.cancel_submit()?;
            Err(FormError::Cancelled)
        }
    }

    /// Presses Submit without waiting.
    ///
    /// The record is validated, serialized and stored, and the screen goes
    /// busy. The caller owns the delay and must follow up with
    /// [`complete_submit`](Self::complete_submit) or
    /// [`cancel_submit`](Self::cancel_submit).
    pub fn begin_submit(&mut self) -> FormResult<PendingSubmission> {
        self.start_submission(CancelToken::new())
    }

    /// Confirms a pending submission and locks the form.
    ///
    /// Only the handle returned by the latest [`begin_submit`](Self::begin_submit)
    /// is accepted; a handle from a cancelled attempt is rejected.
    pub fn complete_submit(&mut self, pending: PendingSubmission) -> FormResult<SubmitOutcome> {
        if self.pending_id != Some(pending.id()) {
            return Err(TransitionError::NoPendingSubmission.into());
        }
        self.state.complete_submit()?;
        self.pending_id = None;
        info!("submission confirmed");
        self.events.dispatch(FormEvent::SubmissionConfirmed {
            encoded: pending.encoded().to_string(),
        });
        Ok(pending.into_outcome())
    }

    /// Abandons a pending submission.
    pub fn cancel_submit(&mut self) -> FormResult<()> {
        self.state.abort_submit()?;
        self.pending_id = None;
        info!("submission cancelled");
        self.events.dispatch(FormEvent::SubmissionCancelled);
        Ok(())
    }

    fn start_submission(&mut self, token: CancelToken) -> FormResult<PendingSubmission> {
        let record = self.state.begin_submit()?;
        let json = match record.to_json() {
            Ok(json) => json,
            Err(e) => {
                self.state.abort_submit()?;
                return Err(FormError::Serialization(e.to_string()));
            }
        };

        if let Err(e) = self.store.put(&self.config.storage_key, &json) {
            warn!(error = %e, key = %self.config.storage_key, "failed to store form data");
        }

        let encoded = STANDARD.encode(json.as_bytes());
        info!(delay_ms = self.config.submit_delay.as_millis() as u64, "submission started");
        self.events.dispatch(FormEvent::SubmissionStarted);

        let id = self.next_submission_id;
        self.next_submission_id += 1;
        self.pending_id = Some(id);

        Ok(PendingSubmission::new(
            id,
            record,
            json,
            encoded,
            self.config.submit_delay,
            token,
        ))
    }

    // === Show Data / Reset ===

    /// Appends a snapshot to the submission log and returns the new block.
    pub fn show_data(&mut self) -> FormResult<String> {
        let block = self.state.show_data()?;
        let log = self.state.log();
        self.events.dispatch(FormEvent::LogUpdated {
            text: log.text().to_string(),
            click_count: log.click_count(),
        });
        Ok(block)
    }

    /// Restores the initial state.
    pub fn reset(&mut self) -> FormResult<()> {
        self.state.reset()?;
        info!("form reset");
        self.events.dispatch(FormEvent::FormReset);
        Ok(())
    }

    // === Queries ===

    /// Reads back the last stored record.
    pub fn last_submitted(&self) -> FormResult<Option<FormRecord>> {
        match self.store.get(&self.config.storage_key)? {
            Some(json) => FormRecord::from_json(&json)
                .map(Some)
                .map_err(|e| FormError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    /// Returns a render snapshot.
    pub fn view(&self) -> FormView {
        self.state.view()
    }

    /// Returns the underlying state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.config.catalog
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }
}

/// Rolls a submission back to editing if its future is dropped mid-delay.
struct SubmitGuard<'a> {
    screen: &'a mut FormScreen,
    armed: bool,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            if let Err(e) = self.screen.cancel_submit() {
                warn!(error = %e, "failed to roll back abandoned submission");
            }
        }
    }
}
