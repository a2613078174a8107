// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! FFI Boundary Tests
//!
//! Tests the FFI boundary between Rust and mobile platforms.
//! Focuses on type conversions, error mapping and the exported
//! screen object as a platform would drive it.

use simpleform_core::{FormError, Gender, StorageError, TransitionError};
use simpleform_mobile::{
    bundled_colors, init_logging, MobileError, MobileFormScreen, MobileGender,
};

const CATALOG_JSON: &str = r##"{
    "colors": { "Black": "#000000", "Red": "#eb1010" },
    "zipcode_data": [
        { "zipcode": "12345", "city": "Springfield", "state": "NT" }
    ]
}"##;

// ============================================================================
// Standalone Functions
// ============================================================================

/// Test: Bundled colors keep picker order with the default first
#[test]
fn test_bundled_colors_default_first() {
    let colors = bundled_colors();
    assert!(!colors.is_empty());
    assert_eq!(colors[0].name, "Black");
    assert_eq!(colors[0].value, "#000000");
}

/// Test: A malformed filter is refused instead of panicking
#[test]
fn test_init_logging_rejects_bad_filter() {
    assert!(!init_logging("simpleform_core=notalevel".to_string()));
}

// ============================================================================
// Type Conversions
// ============================================================================

/// Test: Gender converts in both directions
#[test]
fn test_gender_conversion() {
    assert_eq!(Gender::from(MobileGender::Female), Gender::Female);
    assert_eq!(MobileGender::from(Gender::Male), MobileGender::Male);
}

/// Test: Transition errors keep their identity across the boundary
#[test]
fn test_transition_error_mapping() {
    let err: MobileError = FormError::Transition(TransitionError::Busy).into();
    assert!(matches!(err, MobileError::Busy));

    let err: MobileError = FormError::Transition(TransitionError::NotSubmitted).into();
    assert!(matches!(err, MobileError::NotSubmitted));
}

/// Test: Storage errors are flattened to strings
#[test]
fn test_storage_error_mapping() {
    let err: MobileError = FormError::Storage(StorageError::Unavailable("gone".into())).into();
    match err {
        MobileError::StorageError(msg) => assert!(msg.contains("gone")),
        other => panic!("unexpected error: {:?}", other),
    }
}

// ============================================================================
// Screen Object
// ============================================================================

/// Test: A fresh screen shows the documented initial state
#[test]
fn test_initial_view() {
    let screen = MobileFormScreen::in_memory().unwrap();
    let view = screen.view();

    assert_eq!(view.name.value, "");
    assert_eq!(view.name.error, "");
    assert_eq!(view.gender, MobileGender::Male);
    assert_eq!(view.color.name, "Black");
    assert_eq!(view.label_color, "#000000");
    assert!(!view.submit_enabled);
    assert!(!view.show_data_enabled);
    assert!(!view.reset_enabled);
    assert_eq!(view.click_count, 1);
}

/// Test: The mobile separator is inserted at the boundary
#[test]
fn test_mobile_formatting_through_ffi() {
    let screen = MobileFormScreen::in_memory().unwrap();

    let field = screen.set_mobile("0300".to_string()).unwrap();

    assert_eq!(field.value, "0300-");
    assert_eq!(field.error, "Please enter a valid mobile number.");
}

/// Test: A platform catalog drives the zip lookup
#[test]
fn test_custom_catalog_zip_lookup() {
    let screen = MobileFormScreen::with_catalog_json(None, CATALOG_JSON.to_string()).unwrap();

    screen.set_zip_code("123".to_string()).unwrap();

    let view = screen.view();
    assert_eq!(view.city, "Springfield");
    assert_eq!(view.state, "NT");
    assert_eq!(screen.colors().len(), 2);
}

/// Test: A malformed catalog is reported as a catalog error
#[test]
fn test_invalid_catalog_json() {
    let result = MobileFormScreen::with_catalog_json(None, "not json".to_string());
    assert!(matches!(result, Err(MobileError::CatalogError(_))));
}

/// Test: Unknown colors are rejected with their name
#[test]
fn test_select_unknown_color() {
    let screen = MobileFormScreen::in_memory().unwrap();

    match screen.select_color("Ultraviolet".to_string()) {
        Err(MobileError::UnknownColor(name)) => assert_eq!(name, "Ultraviolet"),
        other => panic!("unexpected result: {:?}", other.err()),
    }
}

/// Test: Submit on an incomplete form is refused
#[test]
fn test_begin_submit_requires_valid_form() {
    let screen = MobileFormScreen::in_memory().unwrap();
    assert!(matches!(
        screen.begin_submit(),
        Err(MobileError::NotSubmittable)
    ));
}

/// Test: Show Data is only available after a submission
#[test]
fn test_show_data_before_submit() {
    let screen = MobileFormScreen::in_memory().unwrap();
    assert!(matches!(screen.show_data(), Err(MobileError::NotSubmitted)));
}

/// Test: Show Data appends to the log after a confirmed submission
#[test]
fn test_show_data_after_submit() {
    let screen = MobileFormScreen::with_catalog_json(None, CATALOG_JSON.to_string()).unwrap();
    screen.set_name("Ada Lovelace".to_string()).unwrap();
    screen.set_email("ada@example.com".to_string()).unwrap();
    screen.set_mobile("0300".to_string()).unwrap();
    screen.set_mobile("0300-123456".to_string()).unwrap();
    screen.set_date_of_birth("10-12-1990".to_string()).unwrap();
    screen.set_zip_code("123".to_string()).unwrap();
    screen.select_gender(MobileGender::Female).unwrap();
    screen.select_color("Red".to_string()).unwrap();

    screen.begin_submit().unwrap();
    let outcome = screen.complete_submit().unwrap();
    assert_eq!(outcome.record.color, "Red");
    assert_eq!(outcome.record.gender, MobileGender::Female);

    let block = screen.show_data().unwrap();
    assert!(block.starts_with("Click Count: 1\n"));
    assert!(block.contains("Gender: Female\n"));
    assert_eq!(screen.view().click_count, 2);

    let last = screen.last_submitted().unwrap().unwrap();
    assert_eq!(last.city, "Springfield");
}
