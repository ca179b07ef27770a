use std::cell::Cell;

use super::*;
use crate::util::dark_mode::STORAGE_KEY;
use crate::util::storage::{MemoryStore, StorageError};

/// Mirrors a `classList` holding at most the `dark` class.
#[derive(Default)]
struct FakeRoot {
    dark_class: Cell<bool>,
    applied: Cell<usize>,
}

impl ThemeMarker for FakeRoot {
    fn apply(&self, dark: bool) {
        self.dark_class.set(dark);
        self.applied.set(self.applied.get() + 1);
    }
}

struct FullStore;

impl PreferenceStore for FullStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(Some("true".to_owned()))
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write { key: key.to_owned() })
    }
}

fn stored(store: &MemoryStore) -> Option<String> {
    store.get(STORAGE_KEY).unwrap()
}

#[test]
fn default_is_light() {
    assert!(!ThemePreference::default().is_dark());
}

#[test]
fn load_without_stored_value_is_light() {
    let root = FakeRoot::default();
    let pref = ThemePreference::load(&MemoryStore::new(), &root);
    assert!(!pref.is_dark());
    assert!(!root.dark_class.get());
    assert_eq!(root.applied.get(), 1);
}

#[test]
fn load_stored_true_is_dark_and_marks_root() {
    let root = FakeRoot::default();
    let pref = ThemePreference::load(&MemoryStore::with_item(STORAGE_KEY, "true"), &root);
    assert!(pref.is_dark());
    assert!(root.dark_class.get());
}

#[test]
fn load_other_values_are_light() {
    for raw in ["false", "True", "yes", "", "null"] {
        let root = FakeRoot::default();
        let pref = ThemePreference::load(&MemoryStore::with_item(STORAGE_KEY, raw), &root);
        assert!(!pref.is_dark(), "expected light for {raw:?}");
        assert!(!root.dark_class.get());
    }
}

#[test]
fn toggle_negates_flag_and_keeps_store_and_marker_in_sync() {
    let store = MemoryStore::new();
    let root = FakeRoot::default();
    let mut pref = ThemePreference::load(&store, &root);

    for _ in 0..5 {
        let before = pref.is_dark();
        let after = pref.toggle(&store, &root);
        assert_eq!(after, !before);
        assert_eq!(pref.is_dark(), after);
        assert_eq!(root.dark_class.get(), after);
        assert_eq!(stored(&store).as_deref(), Some(if after { "true" } else { "false" }));
    }
}

#[test]
fn scenario_unset_toggle_twice() {
    let store = MemoryStore::new();
    let root = FakeRoot::default();

    let mut pref = ThemePreference::load(&store, &root);
    assert!(!pref.is_dark());
    assert!(!root.dark_class.get());
    assert_eq!(stored(&store), None);

    assert!(pref.toggle(&store, &root));
    assert_eq!(stored(&store).as_deref(), Some("true"));
    assert!(root.dark_class.get());

    assert!(!pref.toggle(&store, &root));
    assert_eq!(stored(&store).as_deref(), Some("false"));
    assert!(!root.dark_class.get());
}

#[test]
fn toggle_survives_write_failure_in_memory() {
    let root = FakeRoot::default();
    let mut pref = ThemePreference::load(&FullStore, &root);
    assert!(pref.is_dark());

    assert!(!pref.toggle(&FullStore, &root));
    assert!(!pref.is_dark());
    assert!(!root.dark_class.get());
}

#[test]
fn reload_after_toggle_restores_preference() {
    let store = MemoryStore::new();
    let root = FakeRoot::default();
    let mut pref = ThemePreference::load(&store, &root);
    pref.toggle(&store, &root);

    let reloaded = ThemePreference::load(&store, &FakeRoot::default());
    assert!(reloaded.is_dark());
}
