// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Form State Module
//!
//! Owns everything the entry screen shows: per-field values and errors,
//! the resolved city and state, gender and color selections, the overall
//! validity flag, the submit lifecycle and the submission log.

mod field;
mod log;
mod record;
mod state;
mod view;

pub use field::{FieldKind, FieldState};
pub use log::{LogEntry, SubmissionLog, FIRST_CLICK};
pub use record::{FormRecord, Gender};
pub use state::{FormPhase, FormState, TransitionError};
pub use view::{FieldView, FormView, DEFAULT_LABEL_COLOR};
