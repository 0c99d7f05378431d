// SPDX-License-Identifier: MPL-2.0
//! User preferences mirrored to the persistent key-value store.
//!
//! Each preference is a [`Preference`] cell: the value is read once from
//! [`Storage`] when the cell is created and written back synchronously on
//! every change. The wrappers add the domain operations:
//!
//! - [`ThemePreference`] - light/dark/system with an effective theme
//! - [`LanguagePreference`] - English/Chinese toggle
//! - [`SidebarPreference`] - collapsed flag
//!
//! The stores are owned by the application root and handed to whoever needs
//! them; there is no global state.

mod language;
mod sidebar;
mod theme;

pub use language::{Language, LanguagePreference, LANGUAGE_STORAGE_KEY};
pub use sidebar::{SidebarPreference, SIDEBAR_COLLAPSED_STORAGE_KEY};
pub use theme::{
    detect_system_dark, EffectiveTheme, ThemeMode, ThemePreference, THEME_STORAGE_KEY,
};

use crate::storage::Storage;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A single persisted value with write-through semantics.
#[derive(Debug, Clone)]
pub struct Preference<T> {
    key: &'static str,
    value: T,
    storage: Storage,
}

impl<T> Preference<T>
where
    T: Copy + PartialEq + Serialize + DeserializeOwned,
{
    /// Reads `key` from `storage`, falling back to (and storing) `default`.
    pub fn load(storage: &Storage, key: &'static str, default: T) -> Self {
        let value = storage.get_or_init(key, default);
        Self {
            key,
            value,
            storage: storage.clone(),
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value
    }

    /// Replaces the value and writes it through to storage.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.storage.set(self.key, &value);
    }

    /// Storage key this preference lives under.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }
}
