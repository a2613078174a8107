// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! SimpleForm Core Library
//!
//! Validation and state engine behind the SimpleForm entry screen.
//! Field rules, zip/color catalogs, the submit/show/reset state machine,
//! the submission log and local persistence of the last submitted record.

pub mod api;
pub mod catalog;
pub mod form;
pub mod storage;
pub mod validation;

pub use api::{
    CallbackHandler, CancelToken, EventDispatcher, EventHandler, FormConfig, FormError,
    FormEvent, FormResult, FormScreen, PendingSubmission, SubmitOutcome, DEFAULT_SUBMIT_DELAY,
};
pub use catalog::{Catalog, CatalogError, ColorChoice, ColorTable, ZipCodeEntry, ZipCodeTable};
pub use form::{
    FieldKind, FieldState, FieldView, FormPhase, FormRecord, FormState, FormView, Gender,
    SubmissionLog, TransitionError,
};
pub use storage::{KeyValueStore, MemoryStore, Storage, StorageError, FORM_DATA_KEY};
pub use validation::{
    format_mobile_number, validate_dob, validate_email, validate_mobile, validate_name,
    validate_zipcode, FieldError, FieldOutcome,
};
