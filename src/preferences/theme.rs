// SPDX-License-Identifier: MPL-2.0
//! Theme mode preference and its effective value.

use super::Preference;
use crate::storage::Storage;
use serde::{Deserialize, Serialize};

pub const THEME_STORAGE_KEY: &str = "theme_preference_v3";

/// Theme mode chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Next mode in the canonical cycle light → dark → system → light.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    /// Resolves the mode against the OS preference.
    #[must_use]
    pub fn resolve(self, system_is_dark: bool) -> EffectiveTheme {
        match self {
            ThemeMode::Light => EffectiveTheme::Light,
            ThemeMode::Dark => EffectiveTheme::Dark,
            ThemeMode::System => EffectiveTheme::from_dark(system_is_dark),
        }
    }

    /// i18n key for the toggle button tooltip.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }
}

/// Concrete theme after resolving [`ThemeMode::System`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl EffectiveTheme {
    #[must_use]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            EffectiveTheme::Dark
        } else {
            EffectiveTheme::Light
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == EffectiveTheme::Dark
    }
}

/// Reads the OS color scheme. Detection errors count as light.
#[must_use]
pub fn detect_system_dark() -> bool {
    matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
}

/// Persisted theme mode plus the last known OS preference.
#[derive(Debug, Clone)]
pub struct ThemePreference {
    mode: Preference<ThemeMode>,
    system_is_dark: bool,
}

impl ThemePreference {
    pub fn load(storage: &Storage, system_is_dark: bool) -> Self {
        Self {
            mode: Preference::load(storage, THEME_STORAGE_KEY, ThemeMode::default()),
            system_is_dark,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    #[must_use]
    pub fn effective(&self) -> EffectiveTheme {
        self.mode().resolve(self.system_is_dark)
    }

    #[must_use]
    pub fn system_is_dark(&self) -> bool {
        self.system_is_dark
    }

    /// Records a new OS preference. Returns whether the effective theme changed.
    pub fn set_system_dark(&mut self, is_dark: bool) -> bool {
        let before = self.effective();
        self.system_is_dark = is_dark;
        before != self.effective()
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode.set(mode);
    }

    /// Advances to the next mode that visibly changes the theme.
    ///
    /// The cycle is light → dark → system → light; a mode whose effective
    /// value equals the current one is skipped. With a fixed OS preference
    /// only two modes are reachable: system and dark when the OS is light,
    /// light and dark when it is dark.
    pub fn cycle(&mut self) -> ThemeMode {
        let current = self.effective();
        let mut next = self.mode().next();
        if next.resolve(self.system_is_dark) == current {
            next = next.next();
        }
        self.mode.set(next);
        tracing::debug!(mode = ?next, effective = ?self.effective(), "theme cycled");
        next
    }

    /// The iced theme matching the effective value.
    #[must_use]
    pub fn iced_theme(&self) -> iced::Theme {
        match self.effective() {
            EffectiveTheme::Light => iced::Theme::Light,
            EffectiveTheme::Dark => iced::Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preference(mode: ThemeMode, system_is_dark: bool) -> ThemePreference {
        let storage = Storage::in_memory();
        storage.set(THEME_STORAGE_KEY, &mode);
        ThemePreference::load(&storage, system_is_dark)
    }

    #[test]
    fn default_mode_is_system() {
        let pref = ThemePreference::load(&Storage::in_memory(), true);
        assert_eq!(pref.mode(), ThemeMode::System);
        assert_eq!(pref.effective(), EffectiveTheme::Dark);
    }

    #[test]
    fn explicit_modes_ignore_system_preference() {
        assert_eq!(preference(ThemeMode::Light, true).effective(), EffectiveTheme::Light);
        assert_eq!(preference(ThemeMode::Dark, false).effective(), EffectiveTheme::Dark);
    }

    #[test]
    fn system_mode_tracks_os_changes() {
        let mut pref = preference(ThemeMode::System, false);
        assert_eq!(pref.effective(), EffectiveTheme::Light);

        assert!(pref.set_system_dark(true));
        assert_eq!(pref.effective(), EffectiveTheme::Dark);
        assert!(!pref.set_system_dark(true));
    }

    #[test]
    fn os_change_does_not_affect_explicit_mode() {
        let mut pref = preference(ThemeMode::Light, false);
        assert!(!pref.set_system_dark(true));
        assert_eq!(pref.effective(), EffectiveTheme::Light);
    }

    #[test]
    fn cycle_follows_canonical_order_when_no_state_is_congruent() {
        // System light: light → dark is a visible change.
        let mut pref = preference(ThemeMode::Light, false);
        assert_eq!(pref.cycle(), ThemeMode::Dark);
        // dark → system(light) is visible too.
        assert_eq!(pref.cycle(), ThemeMode::System);
    }

    #[test]
    fn cycle_skips_system_when_it_matches_current() {
        // System dark: dark → system would look identical, go to light.
        let mut pref = preference(ThemeMode::Dark, true);
        assert_eq!(pref.cycle(), ThemeMode::Light);
    }

    #[test]
    fn cycle_skips_light_when_system_is_already_light() {
        let mut pref = preference(ThemeMode::System, false);
        assert_eq!(pref.cycle(), ThemeMode::Dark);
    }

    #[test]
    fn cycle_alternates_system_and_dark_when_os_is_light() {
        let mut pref = preference(ThemeMode::System, false);
        let modes: Vec<_> = (0..4).map(|_| pref.cycle()).collect();
        assert_eq!(
            modes,
            [ThemeMode::Dark, ThemeMode::System, ThemeMode::Dark, ThemeMode::System]
        );
    }

    #[test]
    fn cycle_alternates_light_and_dark_when_os_is_dark() {
        let mut pref = preference(ThemeMode::Light, true);
        let modes: Vec<_> = (0..4).map(|_| pref.cycle()).collect();
        assert_eq!(
            modes,
            [ThemeMode::Dark, ThemeMode::Light, ThemeMode::Dark, ThemeMode::Light]
        );
    }

    #[test]
    fn cycle_reaches_system_again_after_os_change() {
        let mut pref = preference(ThemeMode::Dark, true);
        assert_eq!(pref.cycle(), ThemeMode::Light);
        assert_eq!(pref.cycle(), ThemeMode::Dark);

        pref.set_system_dark(false);
        assert_eq!(pref.cycle(), ThemeMode::System);
        assert_eq!(pref.effective(), EffectiveTheme::Light);
    }

    #[test]
    fn every_cycle_flips_effective_theme() {
        for system_is_dark in [false, true] {
            let mut pref = preference(ThemeMode::System, system_is_dark);
            for _ in 0..6 {
                let before = pref.effective();
                pref.cycle();
                assert_ne!(before, pref.effective());
            }
        }
    }

    #[test]
    fn cycled_mode_survives_reload() {
        let storage = Storage::in_memory();
        let mut pref = ThemePreference::load(&storage, false);
        let mode = pref.cycle();

        let reloaded = ThemePreference::load(&storage, false);
        assert_eq!(reloaded.mode(), mode);
    }

    #[test]
    fn iced_theme_matches_effective_value() {
        assert_eq!(preference(ThemeMode::Dark, false).iced_theme(), iced::Theme::Dark);
        assert_eq!(preference(ThemeMode::System, false).iced_theme(), iced::Theme::Light);
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThemeMode::System).unwrap(),
            "\"system\""
        );
    }
}
