// SPDX-License-Identifier: MPL-2.0
//! Resolution of the directories the dashboard writes to.
//!
//! Two directories are used:
//! - the **config** directory holds `settings.toml` (backend URL, delays);
//! - the **data** directory holds `storage.json`, the key-value store behind
//!   the theme, language and sidebar preferences.
//!
//! Each is resolved in this order:
//! 1. explicit override passed by the caller (tests);
//! 2. CLI flag (`--config-dir` / `--data-dir`), registered once at startup;
//! 3. environment variable (`IPELFS_DASH_CONFIG_DIR` / `IPELFS_DASH_DATA_DIR`);
//! 4. platform directory from `dirs`, with the application name appended.

use std::path::PathBuf;
use std::sync::OnceLock;

pub const APP_NAME: &str = "ipelfs-dash";

pub const ENV_DATA_DIR: &str = "IPELFS_DASH_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "IPELFS_DASH_CONFIG_DIR";

static CLI_OVERRIDES: OnceLock<CliOverrides> = OnceLock::new();

#[derive(Debug, Default)]
struct CliOverrides {
    data_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
}

/// Which application directory to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    Data,
    Config,
}

impl DirKind {
    fn env_var(self) -> &'static str {
        match self {
            DirKind::Data => ENV_DATA_DIR,
            DirKind::Config => ENV_CONFIG_DIR,
        }
    }

    fn cli_override(self) -> Option<PathBuf> {
        let overrides = CLI_OVERRIDES.get()?;
        match self {
            DirKind::Data => overrides.data_dir.clone(),
            DirKind::Config => overrides.config_dir.clone(),
        }
    }

    fn platform_dir(self) -> Option<PathBuf> {
        match self {
            DirKind::Data => dirs::data_dir(),
            DirKind::Config => dirs::config_dir(),
        }
    }
}

/// Registers the `--data-dir` / `--config-dir` CLI flags.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let overrides = CliOverrides {
        data_dir: data_dir.map(PathBuf::from),
        config_dir: config_dir.map(PathBuf::from),
    };
    if CLI_OVERRIDES.set(overrides).is_err() {
        tracing::warn!("CLI directory overrides already initialized, ignoring");
    }
}

/// Resolves a directory, giving `override_path` the highest priority.
pub fn resolve(kind: DirKind, override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = kind.cli_override() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(kind.env_var()) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    kind.platform_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Directory holding `storage.json`.
pub fn app_data_dir() -> Option<PathBuf> {
    resolve(DirKind::Data, None)
}

/// Directory holding `settings.toml`.
pub fn app_config_dir() -> Option<PathBuf> {
    resolve(DirKind::Config, None)
}
