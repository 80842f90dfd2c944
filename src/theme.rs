use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon classes for the toggle: the icon shows the theme you would switch to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

/// Key-value store the theme preference is persisted in.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// In-memory store, used where no browser storage is available.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Theme preference bound to one store key.
pub struct ThemePreference<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored theme, or dark when nothing valid has been stored yet.
    pub fn load(&self) -> Theme {
        self.store
            .read(&self.key)
            .and_then(|value| Theme::from_str(&value))
            .unwrap_or_default()
    }

    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.store.write(&self.key, next.as_str());
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_load_defaults_to_dark() {
        let preference = ThemePreference::new(MemoryStore::default(), "theme");
        assert_eq!(preference.load(), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn toggle_survives_reload() {
        let preference = ThemePreference::new(MemoryStore::default(), "theme");
        let current = preference.load();
        let next = preference.toggle(current);
        assert_eq!(next, Theme::Light);

        let reloaded = ThemePreference::new(preference.store, "theme");
        assert_eq!(reloaded.load(), Theme::Light);

        let again = reloaded.toggle(reloaded.load());
        assert_eq!(again, Theme::Dark);
        assert_eq!(reloaded.load(), Theme::Dark);
    }

    #[test]
    fn garbage_value_falls_back_to_dark() {
        let store = MemoryStore::default();
        store.write("theme", "sepia");
        let preference = ThemePreference::new(store, "theme");
        assert_eq!(preference.load(), Theme::Dark);
    }

    #[test]
    fn icon_points_at_the_other_theme() {
        assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
        assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
    }
}
