// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! API Error Types
//!
//! Unified error type for the screen API layer.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::form::TransitionError;
use crate::storage::StorageError;

/// Unified error type for form screen operations.
#[derive(Error, Debug)]
pub enum FormError {
    /// The state machine rejected the action.
    #[error("transition rejected: {0}")]
    Transition(#[from] TransitionError),

    /// The color is not in the color table.
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// The pending submission was cancelled before it completed.
    #[error("submission cancelled")]
    Cancelled,

    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl FormError {
    /// Returns true if the screen rejected the action because it is busy.
    pub fn is_busy(&self) -> bool {
        matches!(self, FormError::Transition(TransitionError::Busy))
    }
}

/// Result type for form screen operations.
pub type FormResult<T> = Result<T, FormError>;
