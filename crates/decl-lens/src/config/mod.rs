//! Layered tool configuration.
//!
//! Settings are split into one file per category. [`ToolSettings`]
//! aggregates them and applies patches parsed from `decl-lens.toml`.
//! Command-line flags are applied on top by the binary.

pub(crate) mod frontend;
pub(crate) mod logging;
pub(crate) mod report;

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

pub use frontend::{DEFAULT_CLANG, DEFAULT_MAIN_FILE_NAME, FrontendSettings, SourceLanguage};
use frontend::FrontendSettingsPatch;
pub use logging::{LogLevel, LoggingSettings};
use logging::LoggingSettingsPatch;
pub use report::ReportSettings;
use report::ReportSettingsPatch;
use serde::Deserialize;
use tracing::{debug, warn};

pub const CONFIG_FILENAME: &str = "decl-lens.toml";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolSettings {
    pub frontend: FrontendSettings,
    pub report: ReportSettings,
    pub logging: LoggingSettings,
}

impl ToolSettings {
    /// Parse a TOML document on top of the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let patch: ToolSettingsPatch = toml::from_str(content)?;
        let mut settings = Self::default();
        settings.apply_patch(patch);
        settings.normalize();
        Ok(settings)
    }

    /// Load settings from `explicit` if given, otherwise from the nearest
    /// `decl-lens.toml` above `start`. Falls back to defaults when no file
    /// exists or it cannot be read.
    pub fn load(
        explicit: Option<&Path>,
        start: &Path,
    ) -> Self {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match find_config_toml(start) {
                Some(path) => path,
                None => return Self::default(),
            },
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {}: {e}", path.display());
                return Self::default();
            },
        };

        match Self::from_toml_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {}", path.display());
                settings
            },
            Err(e) => {
                warn!("Ignoring malformed {}: {e}", path.display());
                Self::default()
            },
        }
    }

    fn apply_patch(
        &mut self,
        patch: ToolSettingsPatch,
    ) {
        if let Some(p) = patch.frontend {
            self.frontend.apply_patch(p);
        }
        if let Some(p) = patch.report {
            self.report.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
    }

    pub fn normalize(&mut self) {
        self.frontend.normalize();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct ToolSettingsPatch {
    frontend: Option<FrontendSettingsPatch>,
    report: Option<ReportSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, toml::Value>,
}

/// Walks parent directories from `start` looking for `decl-lens.toml`.
pub fn find_config_toml(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_file() {
        start.parent()?
    } else {
        start
    };
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
#[path = "../../tests/src/config/mod_tests.rs"]
mod tests;
