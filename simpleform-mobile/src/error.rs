// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mobile-friendly error types.

use simpleform_core::{CatalogError, FormError, StorageError, TransitionError};

/// Mobile-friendly error type.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MobileError {
    #[error("A submission is in progress")]
    Busy,

    #[error("Form is not ready to submit")]
    NotSubmittable,

    #[error("Only available after a submission")]
    NotSubmitted,

    #[error("No submission is pending")]
    NoPendingSubmission,

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Submission cancelled")]
    Cancelled,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<TransitionError> for MobileError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::Busy => MobileError::Busy,
            TransitionError::NotSubmittable => MobileError::NotSubmittable,
            TransitionError::NotSubmitted => MobileError::NotSubmitted,
            TransitionError::NoPendingSubmission => MobileError::NoPendingSubmission,
        }
    }
}

impl From<StorageError> for MobileError {
    fn from(err: StorageError) -> Self {
        MobileError::StorageError(err.to_string())
    }
}

impl From<CatalogError> for MobileError {
    fn from(err: CatalogError) -> Self {
        MobileError::CatalogError(err.to_string())
    }
}

impl From<FormError> for MobileError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Transition(e) => e.into(),
            FormError::UnknownColor(name) => MobileError::UnknownColor(name),
            FormError::Cancelled => MobileError::Cancelled,
            FormError::Storage(e) => e.into(),
            FormError::Catalog(e) => e.into(),
            FormError::Serialization(msg) => MobileError::SerializationError(msg),
            FormError::Configuration(msg) => MobileError::ConfigurationError(msg),
        }
    }
}
