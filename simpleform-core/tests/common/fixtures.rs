// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Fixtures

use std::time::Duration;

use simpleform_core::*;

/// Catalog with a known zip table and two colors.
pub const SPRINGFIELD_CATALOG: &str = r##"{
    "colors": { "Black": "#000000", "Red": "#eb1010" },
    "zipcode_data": [
        { "zipcode": "12345", "city": "Springfield", "state": "NT" },
        { "zipcode": "67890", "city": "Shelbyville", "state": "NT" }
    ]
}"##;

pub fn springfield_catalog() -> Catalog {
    Catalog::from_json(SPRINGFIELD_CATALOG).unwrap()
}

pub fn springfield_config() -> FormConfig {
    FormConfig::default()
        .with_catalog(springfield_catalog())
        .with_submit_delay(Duration::from_secs(2))
}

/// Screen over a shared in-memory store; the returned handle sees its writes.
pub fn create_test_screen() -> (FormScreen, MemoryStore) {
    let store = MemoryStore::new();
    let screen = FormScreen::with_store(springfield_config(), store.clone());
    (screen, store)
}

pub fn create_test_form() -> FormState {
    FormState::new(springfield_catalog().colors().default_choice().clone())
}

/// Fills every field with a valid value.
pub fn fill_valid_form(form: &mut FormState) {
    let zipcodes = springfield_catalog().zipcodes().clone();
    form.set_name("Ada O'Brien").unwrap();
    form.set_email("ada@example.com").unwrap();
    form.set_mobile("0300").unwrap();
    form.set_mobile("0300-123456").unwrap();
    form.set_date_of_birth("10-12-1990").unwrap();
    form.set_zip_code("123", &zipcodes).unwrap();
}

/// Fills every field of a screen with a valid value.
pub fn fill_valid_screen(screen: &mut FormScreen) {
    screen.set_name("Ada O'Brien").unwrap();
    screen.set_email("ada@example.com").unwrap();
    screen.set_mobile("0300").unwrap();
    screen.set_mobile("0300-123456").unwrap();
    screen.set_date_of_birth("10-12-1990").unwrap();
    screen.set_zip_code("123").unwrap();
}

/// Store whose writes always fail.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn put(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk full".into()))
    }

    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }
}
