// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! SimpleForm API Layer
//!
//! High-level API a native entry screen drives.
//!
//! # Module Structure
//!
//! - `error` - Error types for the API layer
//! - `config` - Configuration types
//! - `events` - Event system for callbacks
//! - `submission` - Pending submissions and cancellation
//! - `screen` - Main screen orchestrator

mod config;
mod error;
mod events;
mod screen;
mod submission;

// Error types
pub use error::{FormError, FormResult};

// Configuration
pub use config::{FormConfig, DEFAULT_SUBMIT_DELAY};

// Events
pub use events::{CallbackHandler, EventDispatcher, EventHandler, FormEvent};

// Submission
pub use submission::{CancelToken, PendingSubmission, SubmitOutcome};

// Screen
pub use screen::FormScreen;
