// SPDX-License-Identifier: MPL-2.0
//! UI language preference.

use super::Preference;
use crate::storage::Storage;
use serde::{Deserialize, Serialize};
use unic_langid::{langid, LanguageIdentifier};

pub const LANGUAGE_STORAGE_KEY: &str = "user_language_preference_v1";

/// Languages with a bundled translation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// The other language of the pair.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    #[must_use]
    pub fn locale(self) -> LanguageIdentifier {
        match self {
            Language::En => langid!("en"),
            Language::Zh => langid!("zh"),
        }
    }

    /// Short code shown on the toggle button.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Zh => "中",
        }
    }

    /// Parses a BCP-47 tag, matching on the primary language subtag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let id = tag.parse::<LanguageIdentifier>().ok()?;
        match id.language.as_str() {
            "en" => Some(Language::En),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LanguagePreference {
    language: Preference<Language>,
}

impl LanguagePreference {
    pub fn load(storage: &Storage) -> Self {
        Self::load_or(storage, Language::default())
    }

    /// Like [`load`](Self::load), with `first_run` used when nothing is stored yet.
    pub fn load_or(storage: &Storage, first_run: Language) -> Self {
        Self {
            language: Preference::load(storage, LANGUAGE_STORAGE_KEY, first_run),
        }
    }

    #[must_use]
    pub fn current(&self) -> Language {
        self.language.get()
    }

    pub fn set(&mut self, language: Language) {
        self.language.set(language);
    }

    /// Switches en ↔ zh and returns the new language.
    pub fn toggle(&mut self) -> Language {
        let next = self.current().toggled();
        self.language.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english() {
        let pref = LanguagePreference::load(&Storage::in_memory());
        assert_eq!(pref.current(), Language::En);
    }

    #[test]
    fn toggle_alternates_and_persists() {
        let storage = Storage::in_memory();
        let mut pref = LanguagePreference::load(&storage);

        assert_eq!(pref.toggle(), Language::Zh);
        assert_eq!(storage.get::<String>(LANGUAGE_STORAGE_KEY).as_deref(), Some("zh"));
        assert_eq!(LanguagePreference::load(&storage).current(), Language::Zh);

        assert_eq!(pref.toggle(), Language::En);
        assert_eq!(LanguagePreference::load(&storage).current(), Language::En);
    }

    #[test]
    fn from_tag_matches_primary_subtag() {
        assert_eq!(Language::from_tag("en-US"), Some(Language::En));
        assert_eq!(Language::from_tag("zh-Hans-CN"), Some(Language::Zh));
        assert_eq!(Language::from_tag("fr"), None);
        assert_eq!(Language::from_tag("###"), None);
    }

    #[test]
    fn locale_matches_language() {
        assert_eq!(Language::En.locale().to_string(), "en");
        assert_eq!(Language::Zh.locale().to_string(), "zh");
    }

    #[test]
    fn first_run_default_only_applies_without_stored_value() {
        let storage = Storage::in_memory();
        assert_eq!(
            LanguagePreference::load_or(&storage, Language::Zh).current(),
            Language::Zh
        );

        LanguagePreference::load(&storage).set(Language::En);
        assert_eq!(
            LanguagePreference::load_or(&storage, Language::Zh).current(),
            Language::En
        );
    }

    #[test]
    fn unknown_stored_value_falls_back_to_default() {
        let storage = Storage::in_memory();
        storage.set(LANGUAGE_STORAGE_KEY, &"klingon");
        assert_eq!(LanguagePreference::load(&storage).current(), Language::En);
    }
}
