// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Form State Machine
//!
//! ```text
//! Editing --begin_submit--> Submitting --complete_submit--> SubmittedLocked
//!    ^                          |                                |
//!    +-------abort_submit-------+                                |
//!    +----------------------------reset--------------------------+
//! ```
//!
//! Every edit runs the field's validator on the new input and recomputes
//! the overall validity flag. While a submission is pending the whole form
//! is busy and rejects input.

use thiserror::Error;
use tracing::debug;

use crate::catalog::{ColorChoice, ZipCodeTable, ZIP_LOOKUP_LEN};
use crate::validation::{
    self, validate_dob, validate_email, validate_mobile, validate_name, validate_zipcode,
};

use super::field::{FieldKind, FieldState};
use super::log::{LogEntry, SubmissionLog};
use super::record::{FormRecord, Gender};
use super::view::{FieldView, FormView};

/// Lifecycle phase of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting input; submit allowed once the form is valid.
    Editing,
    /// Submit pressed, waiting for the confirmation delay.
    Submitting,
    /// Submitted; Show Data and Reset are available, Submit is not.
    SubmittedLocked,
}

/// Transitions rejected by the state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("A submission is in progress")]
    Busy,
    #[error("Form is not ready to submit")]
    NotSubmittable,
    #[error("Only available after a submission")]
    NotSubmitted,
    #[error("No submission is pending")]
    NoPendingSubmission,
}

/// All state behind the entry screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    name: FieldState,
    email: FieldState,
    mobile: FieldState,
    date_of_birth: FieldState,
    zip_code: FieldState,
    city: String,
    state: String,
    gender: Gender,
    color: ColorChoice,
    default_color: ColorChoice,
    is_valid: bool,
    phase: FormPhase,
    log: SubmissionLog,
}

impl FormState {
    /// Creates a fresh form with `default_color` selected.
    pub fn new(default_color: ColorChoice) -> Self {
        FormState {
            name: FieldState::new(),
            email: FieldState::new(),
            mobile: FieldState::new(),
            date_of_birth: FieldState::new(),
            zip_code: FieldState::new(),
            city: String::new(),
            state: String::new(),
            gender: Gender::default(),
            color: default_color.clone(),
            default_color,
            is_valid: true,
            phase: FormPhase::Editing,
            log: SubmissionLog::new(),
        }
    }

    // === Edits ===

    /// Validates and stores a new name.
    pub fn set_name(&mut self, raw: &str) -> Result<&FieldState, TransitionError> {
        self.ensure_idle()?;
        self.name.apply(raw, validate_name(raw));
        self.recompute_validity();
        Ok(&self.name)
    }

    /// Validates and stores a new email.
    pub fn set_email(&mut self, raw: &str) -> Result<&FieldState, TransitionError> {
        self.ensure_idle()?;
        self.email.apply(raw, validate_email(raw));
        self.recompute_validity();
        Ok(&self.email)
    }

    /// Formats, validates and stores a new mobile number.
    ///
    /// The formatted value replaces the typed text. Deleting characters
    /// skips formatting so the inserted separator can be removed.
    pub fn set_mobile(&mut self, raw: &str) -> Result<&FieldState, TransitionError> {
        self.ensure_idle()?;
        let current = self.mobile.value();
        let is_deletion = raw.len() < current.len() && current.starts_with(raw);
        let outcome = if is_deletion {
            validation::check_mobile(raw)
        } else {
            validate_mobile(raw)
        };
        let formatted = outcome.value.clone();
        self.mobile.apply(&formatted, outcome);
        self.recompute_validity();
        Ok(&self.mobile)
    }

    /// Validates and stores a new date of birth.
    pub fn set_date_of_birth(&mut self, raw: &str) -> Result<&FieldState, TransitionError> {
        self.ensure_idle()?;
        self.date_of_birth.apply(raw, validate_dob(raw));
        self.recompute_validity();
        Ok(&self.date_of_birth)
    }

    /// Validates a new zip code and resolves city and state.
    ///
    /// The lookup only runs when exactly three characters have been typed.
    /// A match replaces the zip with the full code from the table; a miss
    /// clears city and state. At any other length city and state are left
    /// as they were.
    pub fn set_zip_code(
        &mut self,
        raw: &str,
        table: &ZipCodeTable,
    ) -> Result<&FieldState, TransitionError> {
        self.ensure_idle()?;
        let mut outcome = validate_zipcode(raw);

        if raw.chars().count() == ZIP_LOOKUP_LEN {
            match table.lookup(raw) {
                Some(entry) => {
                    debug!(partial = raw, zip = entry.zip_code(), "zip code matched");
                    outcome.value = entry.zip_code().to_string();
                    self.city = entry.city().to_string();
                    self.state = entry.state().to_string();
                }
                None => {
                    debug!(partial = raw, "no zip code match");
                    self.city.clear();
                    self.state.clear();
                }
            }
        }

        self.zip_code.apply(raw, outcome);
        self.recompute_validity();
        Ok(&self.zip_code)
    }

    /// Selects a gender.
    pub fn select_gender(&mut self, gender: Gender) -> Result<(), TransitionError> {
        self.ensure_idle()?;
        self.gender = gender;
        Ok(())
    }

    /// Selects a color.
    pub fn select_color(&mut self, color: ColorChoice) -> Result<(), TransitionError> {
        self.ensure_idle()?;
        self.color = color;
        Ok(())
    }

    // === Buttons ===

    /// Moves to `Submitting` and returns the record to persist.
    pub fn begin_submit(&mut self) -> Result<FormRecord, TransitionError> {
        match self.phase {
            FormPhase::Submitting => return Err(TransitionError::Busy),
            FormPhase::SubmittedLocked => return Err(TransitionError::NotSubmittable),
            FormPhase::Editing => {}
        }
        let record = self.to_record().ok_or(TransitionError::NotSubmittable)?;
        self.phase = FormPhase::Submitting;
        Ok(record)
    }

    /// Finishes a pending submission and locks the form.
    pub fn complete_submit(&mut self) -> Result<(), TransitionError> {
        if self.phase != FormPhase::Submitting {
            return Err(TransitionError::NoPendingSubmission);
        }
        self.phase = FormPhase::SubmittedLocked;
        self.is_valid = false;
        Ok(())
    }

    /// Drops a pending submission and returns to editing.
    pub fn abort_submit(&mut self) -> Result<(), TransitionError> {
        if self.phase != FormPhase::Submitting {
            return Err(TransitionError::NoPendingSubmission);
        }
        self.phase = FormPhase::Editing;
        self.recompute_validity();
        Ok(())
    }

    /// Appends a snapshot of the current values to the log.
    ///
    /// Returns the appended block.
    pub fn show_data(&mut self) -> Result<String, TransitionError> {
        self.ensure_submitted()?;
        let entry = LogEntry {
            name: self.name.value(),
            email: self.email.value(),
            mobile: self.mobile.value(),
            date_of_birth: self.date_of_birth.value(),
            gender: self.gender.label(),
            zip_code: self.zip_code.value(),
            city: &self.city,
            state: &self.state,
            color: self.color.value(),
        };
        Ok(self.log.append(&entry))
    }

    /// Restores the initial state.
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        self.ensure_submitted()?;
        *self = FormState::new(self.default_color.clone());
        Ok(())
    }

    // === Queries ===

    /// Returns the state of one field.
    pub fn field(&self, kind: FieldKind) -> &FieldState {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::Mobile => &self.mobile,
            FieldKind::DateOfBirth => &self.date_of_birth,
            FieldKind::Zipcode => &self.zip_code,
        }
    }

    /// Returns the resolved city.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the resolved state.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the selected gender.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Returns the selected color.
    pub fn color(&self) -> &ColorChoice {
        &self.color
    }

    /// Returns the overall validity flag.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Returns true while a submission is pending.
    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Returns true once submitted, until reset.
    pub fn submit_disabled(&self) -> bool {
        self.phase == FormPhase::SubmittedLocked
    }

    /// Returns true if any validated field is blank.
    pub fn has_blank_field(&self) -> bool {
        FieldKind::all().iter().any(|&kind| self.field(kind).is_blank())
    }

    /// Returns true when Submit may be pressed.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing && self.is_valid && !self.has_blank_field()
    }

    /// Returns the submission log.
    pub fn log(&self) -> &SubmissionLog {
        &self.log
    }

    /// Builds the record for the current values, if they are submittable.
    pub fn to_record(&self) -> Option<FormRecord> {
        if !self.is_valid || self.has_blank_field() {
            return None;
        }
        Some(FormRecord {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            mobile: self.mobile.value().to_string(),
            date_of_birth: self.date_of_birth.value().to_string(),
            gender: self.gender,
            zip_code: self.zip_code.value().to_string(),
            city: self.city.clone(),
            state: self.state.clone(),
            color_choice: self.color.name().to_string(),
        })
    }

    /// Returns a snapshot of everything the screen renders.
    pub fn view(&self) -> FormView {
        let field = |kind| FieldView::from(self.field(kind));
        let locked = self.submit_disabled();
        FormView {
            name: field(FieldKind::Name),
            email: field(FieldKind::Email),
            mobile: field(FieldKind::Mobile),
            date_of_birth: field(FieldKind::DateOfBirth),
            zip_code: field(FieldKind::Zipcode),
            city: self.city.clone(),
            state: self.state.clone(),
            gender: self.gender,
            color: self.color.clone(),
            submit_enabled: self.can_submit(),
            show_data_enabled: locked,
            reset_enabled: locked,
            is_loading: self.is_loading(),
            log: self.log.text().to_string(),
            click_count: self.log.click_count(),
        }
    }

    // === Internals ===

    fn ensure_idle(&self) -> Result<(), TransitionError> {
        if self.is_loading() {
            return Err(TransitionError::Busy);
        }
        Ok(())
    }

    fn ensure_submitted(&self) -> Result<(), TransitionError> {
        match self.phase {
            FormPhase::Submitting => Err(TransitionError::Busy),
            FormPhase::Editing => Err(TransitionError::NotSubmitted),
            FormPhase::SubmittedLocked => Ok(()),
        }
    }

    /// Validity is the AND of all field validities, held false once submitted.
    fn recompute_validity(&mut self) {
        self.is_valid = !self.submit_disabled()
            && FieldKind::all()
                .iter()
                .all(|&kind| self.field(kind).is_valid());
    }
}
