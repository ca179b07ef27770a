use std::cell::Cell;

use super::*;
use crate::util::storage::{MemoryStore, StorageError};

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read { key: key.to_owned() })
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write { key: key.to_owned() })
    }
}

#[test]
fn parse_flag_only_accepts_literal_true() {
    assert!(parse_flag(Some("true")));
    assert!(!parse_flag(Some("false")));
    assert!(!parse_flag(Some("TRUE")));
    assert!(!parse_flag(Some(" true")));
    assert!(!parse_flag(Some("1")));
    assert!(!parse_flag(Some("")));
    assert!(!parse_flag(None));
}

#[test]
fn flag_value_is_lowercase_bool() {
    assert_eq!(flag_value(true), "true");
    assert_eq!(flag_value(false), "false");
}

#[test]
fn read_preference_defaults_to_light_when_unset() {
    assert!(!read_preference(&MemoryStore::new()));
}

#[test]
fn read_preference_reads_stored_true() {
    assert!(read_preference(&MemoryStore::with_item(STORAGE_KEY, "true")));
}

#[test]
fn read_preference_treats_malformed_value_as_light() {
    assert!(!read_preference(&MemoryStore::with_item(STORAGE_KEY, "{\"dark\":true}")));
}

#[test]
fn read_preference_falls_back_to_light_on_storage_error() {
    assert!(!read_preference(&BrokenStore));
}

#[test]
fn write_preference_stores_string_form() {
    let store = MemoryStore::new();
    write_preference(&store, true);
    assert_eq!(store.get(STORAGE_KEY), Ok(Some("true".to_owned())));
    write_preference(&store, false);
    assert_eq!(store.get(STORAGE_KEY), Ok(Some("false".to_owned())));
}

#[test]
fn write_preference_swallows_storage_error() {
    write_preference(&BrokenStore, true);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn document_theme_is_callable_outside_the_browser() {
    DocumentTheme.apply(true);
    DocumentTheme.apply(false);
}

#[test]
fn theme_marker_trait_objects_receive_flag() {
    struct Last(Cell<Option<bool>>);
    impl ThemeMarker for Last {
        fn apply(&self, dark: bool) {
            self.0.set(Some(dark));
        }
    }

    let marker = Last(Cell::new(None));
    let dyn_marker: &dyn ThemeMarker = &marker;
    dyn_marker.apply(true);
    assert_eq!(marker.0.get(), Some(true));
}

#[test]
fn boot_script_checks_literal_true_under_storage_key() {
    let script = boot_script();
    assert!(script.contains("localStorage.getItem(\"darkMode\")===\"true\""));
    assert!(script.contains("classList.add(\"dark\")"));
}

#[test]
fn boot_script_swallows_storage_errors() {
    let script = boot_script();
    assert!(script.starts_with("try{"));
    assert!(script.ends_with("catch(e){}"));
}
