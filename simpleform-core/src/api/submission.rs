// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pending Submissions
//!
//! The confirmation delay is an explicit scheduled task: a sleep raced
//! against a [`CancelToken`]. Under tokio's paused test clock the delay
//! elapses instantly.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::form::FormRecord;

/// Cloneable cancellation flag for a pending submission.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    /// Creates an untriggered token.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        CancelToken { tx: Arc::new(tx) }
    }

    /// Triggers the token. Later calls are no-ops.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Returns true once triggered.
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once the token is triggered.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives as long as `self`, so this only returns once set.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

/// A submission that has been persisted and is waiting out its delay.
#[derive(Debug)]
pub struct PendingSubmission {
    id: u64,
    record: FormRecord,
    json: String,
    encoded: String,
    delay: Duration,
    token: CancelToken,
}

impl PendingSubmission {
    pub(crate) fn new(
        id: u64,
        record: FormRecord,
        json: String,
        encoded: String,
        delay: Duration,
        token: CancelToken,
    ) -> Self {
        PendingSubmission {
            id,
            record,
            json,
            encoded,
            delay,
            token,
        }
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    /// Returns the submitted record.
    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Returns the JSON that was persisted.
    pub fn json(&self) -> &str {
        &self.json
    }

    /// Returns the Base64-encoded JSON shown on confirmation.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Returns the confirmation delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns a handle that cancels this submission.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Waits out the delay. Returns false if cancelled first.
    pub async fn wait(&self) -> bool {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => false,
            _ = tokio::time::sleep(self.delay) => true,
        }
    }

    pub(crate) fn into_outcome(self) -> SubmitOutcome {
        SubmitOutcome {
            record: self.record,
            encoded: self.encoded,
        }
    }
}

/// Result of a confirmed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub record: FormRecord,
    /// Base64-encoded JSON of `record`.
    pub encoded: String,
}
