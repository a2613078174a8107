// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Event System
//!
//! Callbacks through which the display surface learns about submit
//! confirmations, log updates and resets.

use std::sync::Arc;

/// Events emitted by the form screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Submit accepted; the screen is busy until confirmed or cancelled.
    SubmissionStarted,

    /// The submission completed.
    SubmissionConfirmed {
        /// Base64-encoded JSON of the submitted record.
        encoded: String,
    },

    /// The pending submission was cancelled.
    SubmissionCancelled,

    /// A snapshot was appended to the submission log.
    LogUpdated {
        /// Full log text.
        text: String,
        /// Number the next snapshot will carry.
        click_count: u32,
    },

    /// The form was restored to its initial state.
    FormReset,
}

/// Receives form events.
pub trait EventHandler: Send + Sync {
    fn on_event(&self, event: &FormEvent);
}

/// Adapts a closure into an [`EventHandler`].
pub struct CallbackHandler<F>(F);

impl<F> CallbackHandler<F>
where
    F: Fn(&FormEvent) + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        CallbackHandler(callback)
    }
}

impl<F> EventHandler for CallbackHandler<F>
where
    F: Fn(&FormEvent) + Send + Sync,
{
    fn on_event(&self, event: &FormEvent) {
        (self.0)(event);
    }
}

/// Fans events out to registered handlers, in registration order.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn dispatch(&self, event: FormEvent) {
        for handler in &self.handlers {
            handler.on_event(&event);
        }
    }
}
