//! Light/dark theme preference with persistence and DOM side effect.
//!
//! # Design
//! - One storage key, `readloom.theme`, is the persisted-state contract;
//!   renaming it would silently reset every user's preference.
//! - With no persisted value the system `prefers-color-scheme` signal decides,
//!   and an absent signal falls back to dark.
//! - Every mutation goes through a single `apply` step so snapshot,
//!   persistence, and the `data-theme` attribute never diverge.

use crate::core::storage::KeyValueStore;

/// Local storage key holding the serialized theme preference.
pub const THEME_KEY: &str = "readloom.theme";

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in storage and the CSS dataset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored identifier; unknown values yield `None`.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this mode is dark.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Dark
    }
}

/// Initial theme resolution: persisted value wins; otherwise follow the
/// system signal; otherwise dark.
#[must_use]
pub fn resolve_initial(
    persisted: Option<ThemeMode>,
    system_prefers_dark: Option<bool>,
) -> ThemeMode {
    persisted.unwrap_or(match system_prefers_dark {
        Some(true) | None => ThemeMode::Dark,
        Some(false) => ThemeMode::Light,
    })
}

/// Source of truth for the theme preference over a persistence backend.
#[derive(Clone, Debug)]
pub struct ThemeStore<S> {
    storage: S,
    current: ThemeMode,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Construct and apply the initial theme. `system_prefers_dark` is the
    /// host's `prefers-color-scheme` signal, `None` when unavailable.
    pub fn new(storage: S, system_prefers_dark: Option<bool>) -> Self {
        let persisted = storage
            .get::<String>(THEME_KEY)
            .as_deref()
            .and_then(ThemeMode::from_value);
        let initial = resolve_initial(persisted, system_prefers_dark);
        let mut store = Self {
            storage,
            current: initial,
        };
        store.apply(initial);
        store
    }

    /// Synchronous snapshot of the active theme.
    #[must_use]
    pub const fn current_theme(&self) -> ThemeMode {
        self.current
    }

    /// Whether the active theme is dark.
    #[must_use]
    pub const fn is_dark_mode(&self) -> bool {
        self.current.is_dark()
    }

    /// Switch to `mode`, persisting it and updating the document dataset.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.apply(mode);
    }

    /// Flip between light and dark.
    pub fn toggle_theme(&mut self) {
        self.apply(self.current.toggled());
    }

    // Single mutation path: snapshot, persistence, and DOM stay in lockstep.
    fn apply(&mut self, mode: ThemeMode) {
        self.current = mode;
        self.storage.set(THEME_KEY, &mode.as_str());
        apply_document_theme(mode);
    }
}

/// Reflect the theme onto `<body data-theme="...">` so CSS can react.
#[cfg(target_arch = "wasm32")]
fn apply_document_theme(mode: ThemeMode) {
    if let Some(body) = gloo::utils::window().document().and_then(|doc| doc.body()) {
        let _ = body.set_attribute("data-theme", mode.as_str());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_document_theme(_mode: ThemeMode) {}

#[cfg(test)]
mod tests {
    use super::{ThemeMode, ThemeStore, resolve_initial};
    use crate::core::storage::MemoryStore;

    #[test]
    fn persisted_value_survives_reload_without_system_signal() {
        let storage = MemoryStore::new();
        let mut store = ThemeStore::new(storage.clone(), Some(true));
        store.set_theme(ThemeMode::Light);

        // Fresh instance over the same backend simulates a page reload; the
        // (dark) system preference must not override the persisted choice.
        let reloaded = ThemeStore::new(storage, Some(true));
        assert_eq!(reloaded.current_theme(), ThemeMode::Light);
        assert!(!reloaded.is_dark_mode());
    }

    #[test]
    fn falls_back_to_system_preference() {
        let dark = ThemeStore::new(MemoryStore::new(), Some(true));
        assert_eq!(dark.current_theme(), ThemeMode::Dark);

        let light = ThemeStore::new(MemoryStore::new(), Some(false));
        assert_eq!(light.current_theme(), ThemeMode::Light);
    }

    #[test]
    fn defaults_to_dark_without_any_signal() {
        let store = ThemeStore::new(MemoryStore::new(), None);
        assert_eq!(store.current_theme(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_persists_the_new_value() {
        let storage = MemoryStore::new();
        let mut store = ThemeStore::new(storage.clone(), None);
        store.toggle_theme();
        assert_eq!(store.current_theme(), ThemeMode::Light);

        let reloaded = ThemeStore::new(storage, None);
        assert_eq!(reloaded.current_theme(), ThemeMode::Light);
    }

    #[test]
    fn resolve_initial_prefers_persisted() {
        assert_eq!(
            resolve_initial(Some(ThemeMode::Light), Some(true)),
            ThemeMode::Light
        );
        assert_eq!(resolve_initial(None, Some(false)), ThemeMode::Light);
        assert_eq!(resolve_initial(None, None), ThemeMode::Dark);
    }

    #[test]
    fn mode_round_trips_through_storage_spelling() {
        assert_eq!(ThemeMode::from_value("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_value("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_value("solarized"), None);
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
