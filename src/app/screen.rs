// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Insights,
    Volumes,
    Collections,
    Activity,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Insights,
        Screen::Volumes,
        Screen::Collections,
        Screen::Activity,
    ];

    /// i18n key of the screen title, also used as the window title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Insights => "screen-insights",
            Screen::Volumes => "screen-volumes",
            Screen::Collections => "screen-collections",
            Screen::Activity => "screen-activity",
        }
    }

    /// Sidebar glyph.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Screen::Insights => "◈",
            Screen::Volumes => "▤",
            Screen::Collections => "❏",
            Screen::Activity => "≋",
        }
    }
}
