use super::*;
use crate::util::preference_store::{MemoryStore, StoreError};
use std::collections::BTreeSet;

// =============================================================
// Test doubles
// =============================================================

/// Class list of a fake `<html>` element.
#[derive(Debug, Default)]
struct FakeRoot {
    classes: BTreeSet<&'static str>,
    marks: usize,
}

impl ThemeRoot for FakeRoot {
    fn mark(&mut self, theme: Theme) {
        self.classes.remove(theme.toggled().root_class());
        self.classes.insert(theme.root_class());
        self.marks += 1;
    }
}

impl FakeRoot {
    fn only(&self, theme: Theme) -> bool {
        self.classes.len() == 1 && self.classes.contains(theme.root_class())
    }
}

/// Store whose every access fails, as with policy-disabled storage.
#[derive(Debug, Default)]
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Access("SecurityError".to_owned()))
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

fn mount_with(stored: Option<&str>, prefers_dark: Option<bool>) -> ThemeController<MemoryStore, FakeRoot> {
    let store = stored.map_or_else(MemoryStore::new, |v| MemoryStore::with_value(STORAGE_KEY, v));
    ThemeController::mount(ThemeLabels::default(), store, FakeRoot::default(), prefers_dark)
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_parse_accepts_only_literals() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("true"), None);
}

#[test]
fn theme_as_str_round_trips_through_parse() {
    for theme in Theme::ALL {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        assert_eq!(theme.to_string(), theme.as_str());
    }
}

#[test]
fn theme_root_classes_are_distinct() {
    assert_eq!(Theme::Light.root_class(), "theme-light");
    assert_eq!(Theme::Dark.root_class(), "theme-dark");
}

// =============================================================
// Initial theme
// =============================================================

#[test]
fn initial_theme_prefers_valid_stored_value() {
    for theme in Theme::ALL {
        for platform in [None, Some(true), Some(false)] {
            assert_eq!(initial_theme(Some(theme.as_str()), platform), theme);
        }
    }
}

#[test]
fn initial_theme_ignores_invalid_stored_value() {
    assert_eq!(initial_theme(Some("purple"), Some(true)), Theme::Dark);
    assert_eq!(initial_theme(Some("purple"), Some(false)), Theme::Light);
    assert_eq!(initial_theme(Some("purple"), None), Theme::Light);
}

#[test]
fn initial_theme_defaults_to_light_without_signals() {
    assert_eq!(initial_theme(None, None), Theme::Light);
    assert_eq!(initial_theme(None, Some(true)), Theme::Dark);
}

// =============================================================
// Labels
// =============================================================

#[test]
fn labels_resolve_defaults() {
    let labels = ThemeLabels::resolve(None, None);
    assert_eq!(labels, ThemeLabels::default());
    assert_eq!(labels.to_light, DEFAULT_TO_LIGHT_LABEL);
    assert_eq!(labels.to_dark, DEFAULT_TO_DARK_LABEL);
}

#[test]
fn labels_resolve_overrides_each_field_independently() {
    let labels = ThemeLabels::resolve(Some("Mode clair".to_owned()), None);
    assert_eq!(labels.to_light, "Mode clair");
    assert_eq!(labels.to_dark, DEFAULT_TO_DARK_LABEL);
}

#[test]
fn labels_prompt_names_the_next_action() {
    let labels = ThemeLabels::default();
    assert_eq!(labels.prompt_for(Theme::Dark), DEFAULT_TO_LIGHT_LABEL);
    assert_eq!(labels.prompt_for(Theme::Light), DEFAULT_TO_DARK_LABEL);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn activate_toggles() {
    assert_eq!(next_theme(Theme::Light, ThemeEvent::Activate), Theme::Dark);
    assert_eq!(next_theme(Theme::Dark, ThemeEvent::Activate), Theme::Light);
}

#[test]
fn platform_change_follows_signal_from_any_state() {
    for current in Theme::ALL {
        assert_eq!(
            next_theme(current, ThemeEvent::PlatformChange { prefers_dark: true }),
            Theme::Dark
        );
        assert_eq!(
            next_theme(current, ThemeEvent::PlatformChange { prefers_dark: false }),
            Theme::Light
        );
    }
}

// =============================================================
// Controller
// =============================================================

#[test]
fn mount_with_stored_value_uses_it() {
    for theme in Theme::ALL {
        let c = mount_with(Some(theme.as_str()), Some(!theme.is_dark()));
        assert_eq!(c.theme(), theme);
        assert!(c.root().only(theme));
    }
}

#[test]
fn mount_does_not_write_storage() {
    let c = mount_with(None, Some(true));
    assert_eq!(c.theme(), Theme::Dark);
    assert_eq!(c.store().writes(), 0);
    assert_eq!(c.store().get(STORAGE_KEY), None);
}

#[test]
fn stored_dark_renders_checked_and_activate_switches_to_light() {
    let mut c = mount_with(Some("dark"), None);
    assert!(c.checked());
    assert_eq!(c.prompt(), DEFAULT_TO_LIGHT_LABEL);

    c.dispatch(ThemeEvent::Activate);

    assert_eq!(c.store().get(STORAGE_KEY), Some("light"));
    assert!(!c.checked());
    assert_eq!(c.prompt(), DEFAULT_TO_DARK_LABEL);
    assert!(c.root().only(Theme::Light));
}

#[test]
fn toggling_twice_restores_original_state() {
    for start in Theme::ALL {
        let mut c = mount_with(Some(start.as_str()), None);
        let checked = c.checked();
        let prompt = c.prompt().to_owned();

        c.dispatch(ThemeEvent::Activate);
        c.dispatch(ThemeEvent::Activate);

        assert_eq!(c.theme(), start);
        assert_eq!(c.checked(), checked);
        assert_eq!(c.prompt(), prompt);
        assert_eq!(c.store().get(STORAGE_KEY), Some(start.as_str()));
        assert!(c.root().only(start));
    }
}

#[test]
fn every_toggle_persists_active_theme_and_one_marker() {
    let mut c = mount_with(None, None);
    for _ in 0..5 {
        let theme = c.dispatch(ThemeEvent::Activate);
        assert_eq!(c.store().get(STORAGE_KEY), Some(theme.as_str()));
        assert!(c.root().only(theme));
    }
}

#[test]
fn platform_change_without_stored_preference_persists_dark() {
    let mut c = mount_with(None, Some(false));
    assert_eq!(c.theme(), Theme::Light);

    c.dispatch(ThemeEvent::PlatformChange { prefers_dark: true });

    assert_eq!(c.theme(), Theme::Dark);
    assert_eq!(c.store().get(STORAGE_KEY), Some("dark"));
    assert!(c.root().only(Theme::Dark));
}

#[test]
fn set_theme_is_idempotent() {
    let mut once = mount_with(None, None);
    once.set_theme(Theme::Dark);

    let mut twice = mount_with(None, None);
    twice.set_theme(Theme::Dark);
    twice.set_theme(Theme::Dark);

    assert_eq!(once.theme(), twice.theme());
    assert_eq!(once.checked(), twice.checked());
    assert_eq!(once.prompt(), twice.prompt());
    assert_eq!(once.store().get(STORAGE_KEY), twice.store().get(STORAGE_KEY));
    assert_eq!(once.root().classes, twice.root().classes);
}

#[test]
fn broken_storage_degrades_to_memory() {
    let mut c = ThemeController::mount(ThemeLabels::default(), BrokenStore, FakeRoot::default(), Some(true));
    assert_eq!(c.theme(), Theme::Dark);

    c.dispatch(ThemeEvent::Activate);
    assert_eq!(c.theme(), Theme::Light);
    assert!(c.root().only(Theme::Light));

    c.dispatch(ThemeEvent::Activate);
    assert_eq!(c.theme(), Theme::Dark);
    assert!(c.root().only(Theme::Dark));
}

#[test]
fn each_dispatch_marks_root_once() {
    let mut c = mount_with(None, None);
    assert_eq!(c.root().marks, 1);
    c.dispatch(ThemeEvent::Activate);
    c.dispatch(ThemeEvent::PlatformChange { prefers_dark: false });
    assert_eq!(c.root().marks, 3);
    assert_eq!(c.store().writes(), 2);
}

#[test]
fn custom_labels_flow_through_prompt() {
    let labels = ThemeLabels::resolve(Some("Clair".to_owned()), Some("Sombre".to_owned()));
    let mut c = ThemeController::mount(labels, MemoryStore::new(), FakeRoot::default(), None);
    assert_eq!(c.prompt(), "Sombre");
    c.dispatch(ThemeEvent::Activate);
    assert_eq!(c.prompt(), "Clair");
    assert_eq!(c.labels().to_light, "Clair");
}
