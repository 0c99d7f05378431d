// SPDX-License-Identifier: MPL-2.0
use crate::preferences::Language;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const CATALOGS: [(Language, &str); 2] = [(Language::En, "en.ftl"), (Language::Zh, "zh.ftl")];

pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    current: Language,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current", &self.current)
            .field("loaded", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl I18n {
    pub fn new(language: Language) -> Self {
        let mut bundles = HashMap::new();

        for (lang, filename) in CATALOGS {
            match load_bundle(lang, filename) {
                Some(bundle) => {
                    bundles.insert(lang, bundle);
                }
                None => tracing::warn!(file = filename, "translation catalog unavailable"),
            }
        }

        Self {
            bundles,
            current: language,
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.current
    }

    pub fn set_locale(&mut self, language: Language) {
        self.current = language;
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let mut chain = vec![self.current];
        if self.current != Language::En {
            chain.push(Language::En);
        }

        for language in chain {
            if let Some(value) = self.format_in(language, key, args) {
                return value;
            }
        }
        key.to_string()
    }

    fn format_in(&self, language: Language, key: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
        let bundle = self.bundles.get(&language)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            tracing::debug!(key, ?language, ?errors, "failed to format message");
            None
        }
    }
}

fn load_bundle(language: Language, filename: &str) -> Option<FluentBundle<FluentResource>> {
    let content = Asset::get(filename)?;
    let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(file = filename, ?errors, "translation catalog has syntax errors");
            resource
        }
    };

    let mut bundle = FluentBundle::new(vec![language.locale()]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(file = filename, ?errors, "duplicate messages in translation catalog");
    }
    Some(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_catalog_translates() {
        let i18n = I18n::new(Language::En);
        assert_eq!(i18n.tr("screen-volumes"), "Volumes");
    }

    #[test]
    fn chinese_catalog_translates() {
        let i18n = I18n::new(Language::Zh);
        assert_ne!(i18n.tr("screen-volumes"), "Volumes");
        assert_ne!(i18n.tr("screen-volumes"), "screen-volumes");
    }

    #[test]
    fn missing_key_returns_key() {
        let i18n = I18n::new(Language::Zh);
        assert_eq!(i18n.tr("no-such-message"), "no-such-message");
    }

    #[test]
    fn missing_chinese_message_falls_back_to_english() {
        let i18n = I18n::new(Language::Zh);
        let english = I18n::new(Language::En);
        // Present only in the English catalog.
        assert_eq!(i18n.tr("app-name"), english.tr("app-name"));
    }

    #[test]
    fn arguments_are_interpolated() {
        let i18n = I18n::new(Language::En);
        let text = i18n.tr_with_args("volumes-count", &[("count", "3")]);
        assert!(text.contains('3'), "unexpected text: {text}");
    }

    #[test]
    fn set_locale_switches_language() {
        let mut i18n = I18n::new(Language::En);
        let english = i18n.tr("screen-activity");
        i18n.set_locale(Language::Zh);
        assert_eq!(i18n.language(), Language::Zh);
        assert_ne!(i18n.tr("screen-activity"), english);
    }

    #[test]
    fn all_catalogs_load() {
        let i18n = I18n::new(Language::En);
        assert_eq!(i18n.bundles.len(), CATALOGS.len());
    }
}
