// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mobile-friendly data types.
//!
//! These types are wrappers around simpleform-core types that are compatible
//! with UniFFI for cross-language bindings.

use simpleform_core::{
    ColorChoice, FieldView, FormPhase, FormRecord, FormView, Gender, PendingSubmission,
    SubmitOutcome,
};

/// Mobile-friendly gender enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileGender {
    Male,
    Female,
}

impl From<Gender> for MobileGender {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => MobileGender::Male,
            Gender::Female => MobileGender::Female,
        }
    }
}

impl From<MobileGender> for Gender {
    fn from(gender: MobileGender) -> Self {
        match gender {
            MobileGender::Male => Gender::Male,
            MobileGender::Female => Gender::Female,
        }
    }
}

/// Mobile-friendly form phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileFormPhase {
    Editing,
    Submitting,
    SubmittedLocked,
}

impl From<FormPhase> for MobileFormPhase {
    fn from(phase: FormPhase) -> Self {
        match phase {
            FormPhase::Editing => MobileFormPhase::Editing,
            FormPhase::Submitting => MobileFormPhase::Submitting,
            FormPhase::SubmittedLocked => MobileFormPhase::SubmittedLocked,
        }
    }
}

/// A picker color.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileColor {
    pub name: String,
    pub value: String,
}

impl From<&ColorChoice> for MobileColor {
    fn from(choice: &ColorChoice) -> Self {
        MobileColor {
            name: choice.name().to_string(),
            value: choice.value().to_string(),
        }
    }
}

/// Displayed text and inline error of one input.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileFieldView {
    pub value: String,
    /// Empty when the field is valid.
    pub error: String,
}

impl From<FieldView> for MobileFieldView {
    fn from(view: FieldView) -> Self {
        MobileFieldView {
            value: view.value,
            error: view.error,
        }
    }
}

/// Everything the native screen needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileFormView {
    pub name: MobileFieldView,
    pub email: MobileFieldView,
    pub mobile: MobileFieldView,
    pub date_of_birth: MobileFieldView,
    pub zip_code: MobileFieldView,
    pub city: String,
    pub state: String,
    pub gender: MobileGender,
    pub color: MobileColor,
    pub label_color: String,
    pub submit_enabled: bool,
    pub show_data_enabled: bool,
    pub reset_enabled: bool,
    pub is_loading: bool,
    pub log: String,
    pub click_count: u32,
}

impl From<FormView> for MobileFormView {
    fn from(view: FormView) -> Self {
        let label_color = view.label_color().to_string();
        MobileFormView {
            name: view.name.into(),
            email: view.email.into(),
            mobile: view.mobile.into(),
            date_of_birth: view.date_of_birth.into(),
            zip_code: view.zip_code.into(),
            city: view.city,
            state: view.state,
            gender: view.gender.into(),
            color: MobileColor::from(&view.color),
            label_color,
            submit_enabled: view.submit_enabled,
            show_data_enabled: view.show_data_enabled,
            reset_enabled: view.reset_enabled,
            is_loading: view.is_loading,
            log: view.log,
            click_count: view.click_count,
        }
    }
}

/// A submitted record.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileFormRecord {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub date_of_birth: String,
    pub gender: MobileGender,
    pub zip_code: String,
    pub city: String,
    pub state: String,
    pub color: String,
}

impl From<FormRecord> for MobileFormRecord {
    fn from(record: FormRecord) -> Self {
        MobileFormRecord {
            name: record.name,
            email: record.email,
            mobile: record.mobile,
            date_of_birth: record.date_of_birth,
            gender: record.gender.into(),
            zip_code: record.zip_code,
            city: record.city,
            state: record.state,
            color: record.color_choice,
        }
    }
}

/// A submission waiting for the native timer.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileSubmission {
    /// Base64-encoded JSON of the record.
    pub encoded: String,
    /// How long the native side should show the busy indicator.
    pub delay_ms: u64,
}

impl From<&PendingSubmission> for MobileSubmission {
    fn from(pending: &PendingSubmission) -> Self {
        MobileSubmission {
            encoded: pending.encoded().to_string(),
            delay_ms: pending.delay().as_millis() as u64,
        }
    }
}

/// A confirmed submission.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileSubmitOutcome {
    pub record: MobileFormRecord,
    pub encoded: String,
    /// Confirmation text, `Form Data: <encoded>`.
    pub message: String,
}

impl From<SubmitOutcome> for MobileSubmitOutcome {
    fn from(outcome: SubmitOutcome) -> Self {
        let message = format!("Form Data: {}", outcome.encoded);
        MobileSubmitOutcome {
            record: outcome.record.into(),
            encoded: outcome.encoded,
            message,
        }
    }
}
