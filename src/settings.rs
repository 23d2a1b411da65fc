//! Dashboard settings.
//!
//! Settings are read from `<config_dir>/album-dashboard/settings.json`.
//! A missing file means defaults; a malformed one is logged and ignored.
//! Command line flags are layered on top by [`Settings::apply_overrides`].

use crate::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_DATA_PATH, DEFAULT_DATE_FORMAT, DEFAULT_PORT,
    DEFAULT_SALES_SUFFIX, DEFAULT_TITLE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Application directory name under the platform config dir
const APP_DIR: &str = "album-dashboard";

/// Settings file name
const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dataset file to load at startup
    pub data_path: PathBuf,
    pub bind_address: String,
    pub port: u16,
    /// Open the dashboard in the default browser after startup
    pub open_browser: bool,
    /// Page title
    pub title: String,
    /// chrono pattern for displayed dates
    pub date_format: String,
    /// Unit appended to grouped sales figures
    pub sales_suffix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
            title: DEFAULT_TITLE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            sales_suffix: DEFAULT_SALES_SUFFIX.to_string(),
        }
    }
}

/// Command line values that take precedence over the settings file
#[derive(Clone, Debug, Default)]
pub struct SettingsOverrides {
    pub data_path: Option<PathBuf>,
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub no_open: bool,
}

impl Settings {
    /// Load settings from the default location
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                debug!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring malformed settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Layer command line values on top of the loaded settings
    pub fn apply_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(data_path) = overrides.data_path {
            self.data_path = data_path;
        }
        if let Some(bind_address) = overrides.bind_address {
            self.bind_address = bind_address;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if overrides.no_open {
            self.open_browser = false;
        }
        self
    }

    /// `host:port` the server binds to
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Platform settings path, if a config directory exists
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}
