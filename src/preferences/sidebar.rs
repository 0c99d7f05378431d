// SPDX-License-Identifier: MPL-2.0
//! Sidebar collapsed/expanded preference.

use super::Preference;
use crate::storage::Storage;

pub const SIDEBAR_COLLAPSED_STORAGE_KEY: &str = "sidebar_collapsed_preference";

#[derive(Debug, Clone)]
pub struct SidebarPreference {
    collapsed: Preference<bool>,
}

impl SidebarPreference {
    pub fn load(storage: &Storage) -> Self {
        Self {
            collapsed: Preference::load(storage, SIDEBAR_COLLAPSED_STORAGE_KEY, false),
        }
    }

    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed.get()
    }

    /// Flips the flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        let collapsed = !self.is_collapsed();
        self.collapsed.set(collapsed);
        collapsed
    }
}
