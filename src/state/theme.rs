//! Theme preference model and the toggle state machine.
//!
//! DESIGN
//! ======
//! The switch has two states (`Light`, `Dark`) and a closed set of inputs
//! (`ThemeEvent`). Every input goes through [`next_theme`], so pointer,
//! keyboard and platform-driven changes cannot diverge. Side effects go
//! through the `PreferenceStore` and `ThemeRoot` seams.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::util::document_root::ThemeRoot;
use crate::util::preference_store::PreferenceStore;

/// `localStorage` key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Default prompt shown while dark is active.
pub const DEFAULT_TO_LIGHT_LABEL: &str = "Switch to light mode";

/// Default prompt shown while light is active.
pub const DEFAULT_TO_DARK_LABEL: &str = "Switch to dark mode";

// =============================================================================
// THEME
// =============================================================================

/// User-facing display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Literal persisted in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted literal. Anything but `"light"`/`"dark"` is absent.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Marker class placed on the document root while this theme is active.
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the initial theme: stored value, then platform preference, then light.
pub fn initial_theme(stored: Option<&str>, prefers_dark: Option<bool>) -> Theme {
    stored
        .and_then(Theme::parse)
        .or_else(|| prefers_dark.map(Theme::from_prefers_dark))
        .unwrap_or_default()
}

// =============================================================================
// LABELS
// =============================================================================

/// Prompts for the text next to the switch, resolved once at construction.
///
/// `to_light` is shown while dark is active and `to_dark` while light is
/// active, so the text always names the action a click would perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeLabels {
    pub to_light: String,
    pub to_dark: String,
}

impl Default for ThemeLabels {
    fn default() -> Self {
        Self {
            to_light: DEFAULT_TO_LIGHT_LABEL.to_owned(),
            to_dark: DEFAULT_TO_DARK_LABEL.to_owned(),
        }
    }
}

impl ThemeLabels {
    /// Resolve the host's optional `light`/`dark` attributes against defaults.
    pub fn resolve(light: Option<String>, dark: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            to_light: light.unwrap_or(defaults.to_light),
            to_dark: dark.unwrap_or(defaults.to_dark),
        }
    }

    /// Prompt for the action available while `active` is shown.
    pub fn prompt_for(&self, active: Theme) -> &str {
        match active {
            Theme::Dark => &self.to_light,
            Theme::Light => &self.to_dark,
        }
    }
}

// =============================================================================
// EVENTS
// =============================================================================

/// Inputs that can change the active theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeEvent {
    /// Pointer click or Space/Enter on the focused control.
    Activate,
    /// The `prefers-color-scheme` media query changed.
    PlatformChange { prefers_dark: bool },
}

/// The single transition function shared by every input path.
pub fn next_theme(current: Theme, event: ThemeEvent) -> Theme {
    match event {
        ThemeEvent::Activate => current.toggled(),
        ThemeEvent::PlatformChange { prefers_dark } => Theme::from_prefers_dark(prefers_dark),
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Instance-scoped owner of the current theme and its side effects.
#[derive(Debug)]
pub struct ThemeController<S, R> {
    theme: Theme,
    labels: ThemeLabels,
    store: S,
    root: R,
}

impl<S: PreferenceStore, R: ThemeRoot> ThemeController<S, R> {
    /// Read the stored preference once, pick the initial theme and mark the
    /// document root. Nothing is written to storage until the first change.
    pub fn mount(labels: ThemeLabels, store: S, mut root: R, prefers_dark: Option<bool>) -> Self {
        let stored = match store.load(STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("theme: reading stored preference failed: {e}");
                None
            }
        };
        let theme = initial_theme(stored.as_deref(), prefers_dark);
        log::debug!("theme: initial theme {theme} (stored {stored:?}, prefers_dark {prefers_dark:?})");
        root.mark(theme);
        Self {
            theme,
            labels,
            store,
            root,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn labels(&self) -> &ThemeLabels {
        &self.labels
    }

    /// Whether the checkbox should render checked.
    pub fn checked(&self) -> bool {
        self.theme.is_dark()
    }

    /// Text naming the action the next activation performs.
    pub fn prompt(&self) -> &str {
        self.labels.prompt_for(self.theme)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    /// Route an input through [`next_theme`] and apply the result.
    pub fn dispatch(&mut self, event: ThemeEvent) -> Theme {
        let next = next_theme(self.theme, event);
        self.set_theme(next);
        next
    }

    /// Make `theme` active: persist it and mark the document root.
    ///
    /// A storage failure leaves the in-memory theme in effect for the session.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.store.save(STORAGE_KEY, theme.as_str()) {
            log::warn!("theme: persisting {theme} failed, keeping it in memory: {e}");
        }
        self.root.mark(theme);
    }
}
