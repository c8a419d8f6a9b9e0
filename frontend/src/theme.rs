use std::cell::Cell;
use std::fmt;
use tracing::{debug, error};

use crate::storage::PreferenceStore;

pub const THEME_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values read as light.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label of the toggle button, naming the action it performs next.
pub fn toggle_label(current: Theme) -> &'static str {
    match current {
        Theme::Dark => "Switch to Light",
        Theme::Light => "Switch to Dark",
    }
}

/// Where the presentation class lives.
pub trait ThemeTarget {
    fn apply(&self, theme: Theme);
}

/// Toggles the `dark` class on `<body>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyClass;

impl ThemeTarget for BodyClass {
    fn apply(&self, theme: Theme) {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            error!("document body not found, theme class not applied");
            return;
        };
        let classes = body.class_list();
        let result = match theme {
            Theme::Dark => classes.add_1(DARK_CLASS),
            Theme::Light => classes.remove_1(DARK_CLASS),
        };
        if let Err(err) = result {
            error!("failed to apply {theme} theme: {err:?}");
        }
    }
}

/// The theme preference. The stored value is read once; after that the
/// in-memory theme is authoritative, so toggling keeps working when storage
/// drops writes.
pub struct ThemeStore<S, T> {
    store: S,
    target: T,
    current: Cell<Theme>,
}

impl<S: PreferenceStore, T: ThemeTarget> ThemeStore<S, T> {
    pub fn new(store: S, target: T) -> Self {
        let current = store
            .get(THEME_KEY)
            .map(|value| Theme::parse(&value))
            .unwrap_or_default();
        Self {
            store,
            target,
            current: Cell::new(current),
        }
    }

    pub fn preference(&self) -> Theme {
        self.current.get()
    }

    pub fn set_preference(&self, theme: Theme) {
        debug!("theme set to {theme}");
        self.current.set(theme);
        self.store.set(THEME_KEY, theme.as_str());
        self.target.apply(theme);
    }

    /// Applies the stored preference without writing it back.
    pub fn init(&self) -> Theme {
        let theme = self.preference();
        self.target.apply(theme);
        theme
    }

    pub fn toggle(&self) -> Theme {
        let next = self.preference().flipped();
        self.set_preference(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingTarget {
        applied: Rc<RefCell<Vec<Theme>>>,
    }

    impl ThemeTarget for RecordingTarget {
        fn apply(&self, theme: Theme) {
            self.applied.borrow_mut().push(theme);
        }
    }

    impl RecordingTarget {
        fn last(&self) -> Option<Theme> {
            self.applied.borrow().last().copied()
        }
    }

    #[test]
    fn defaults_to_light() {
        let themes = ThemeStore::new(MemoryStore::default(), RecordingTarget::default());
        assert_eq!(themes.preference(), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let store = MemoryStore::default();
        let target = RecordingTarget::default();
        let themes = ThemeStore::new(store.clone(), target.clone());

        assert_eq!(themes.toggle(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(target.last(), Some(Theme::Dark));

        assert_eq!(themes.toggle(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(target.last(), Some(Theme::Light));
    }

    #[test]
    fn preference_survives_reload() {
        let store = MemoryStore::default();
        ThemeStore::new(store.clone(), RecordingTarget::default()).toggle();

        let target = RecordingTarget::default();
        let reloaded = ThemeStore::new(store, target.clone());
        assert_eq!(reloaded.init(), Theme::Dark);
        assert_eq!(target.last(), Some(Theme::Dark));
    }

    /// Storage that drops every write, like a disabled `localStorage`.
    struct ForgetfulStore;

    impl PreferenceStore for ForgetfulStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) {}
    }

    #[test]
    fn toggle_alternates_without_storage() {
        let target = RecordingTarget::default();
        let themes = ThemeStore::new(ForgetfulStore, target.clone());

        let toggles: Vec<_> = (0..3).map(|_| themes.toggle()).collect();

        assert_eq!(toggles, vec![Theme::Dark, Theme::Light, Theme::Dark]);
        assert_eq!(
            *target.applied.borrow(),
            vec![Theme::Dark, Theme::Light, Theme::Dark]
        );
    }

    #[test]
    fn garbage_reads_as_light() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "sepia");
        let themes = ThemeStore::new(store, RecordingTarget::default());
        assert_eq!(themes.preference(), Theme::Light);
    }

    #[test]
    fn label_names_next_action() {
        assert_eq!(toggle_label(Theme::Dark), "Switch to Light");
        assert_eq!(toggle_label(Theme::Light), "Switch to Dark");
    }
}
