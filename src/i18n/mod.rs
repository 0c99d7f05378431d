// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` catalogs embedded at build time, one per
//! [`Language`]. Lookups fall back from the current language to English and
//! finally to the message key itself, so a missing translation never hides
//! text.
//!
//! The first-run language is chosen from the `--lang` flag, then the
//! `[general] language` entry of `settings.toml`, then English. After that
//! the persisted language preference wins.

pub mod fluent;

pub use fluent::I18n;

use crate::config::Config;
use crate::preferences::Language;

/// Picks the language used when no preference is stored yet.
#[must_use]
pub fn resolve_language(cli_lang: Option<&str>, config: &Config) -> Language {
    // 1. CLI flag
    if let Some(language) = cli_lang.and_then(Language::from_tag) {
        return language;
    }

    // 2. Config file
    if let Some(language) = config
        .general
        .language
        .as_deref()
        .and_then(Language::from_tag)
    {
        return language;
    }

    Language::default()
}
