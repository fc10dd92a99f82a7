use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_CLANG: &str = "clang";

/// Name LibTooling gives an in-memory compilation unit.
pub const DEFAULT_MAIN_FILE_NAME: &str = "input.cc";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceLanguage {
    C,
    #[default]
    Cxx,
}

impl SourceLanguage {
    pub fn from_setting_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "c" => Some(Self::C),
            "c++" | "cxx" | "cpp" => Some(Self::Cxx),
            _ => None,
        }
    }

    /// Value passed to clang's `-x`.
    pub fn as_clang_arg(self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cxx => "c++",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrontendSettings {
    pub clang_path: String,
    pub language: SourceLanguage,
    pub std: Option<String>,
    pub extra_flags: Vec<String>,
    pub main_file_name: String,
}

impl Default for FrontendSettings {
    fn default() -> Self {
        Self {
            clang_path: DEFAULT_CLANG.to_string(),
            language: SourceLanguage::default(),
            std: None,
            extra_flags: Vec::new(),
            main_file_name: DEFAULT_MAIN_FILE_NAME.to_string(),
        }
    }
}

impl FrontendSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: FrontendSettingsPatch,
    ) {
        if let Some(v) = patch.clang_path {
            self.clang_path = v;
        }
        if let Some(v) = patch.language {
            match SourceLanguage::from_setting_value(&v) {
                Some(language) => self.language = language,
                None => warn!("Ignoring unknown frontend.language {v:?}"),
            }
        }
        if let Some(v) = patch.std {
            self.std = Some(v);
        }
        if let Some(v) = patch.extra_flags {
            self.extra_flags = v;
        }
        if let Some(v) = patch.main_file_name {
            self.main_file_name = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        self.clang_path = self.clang_path.trim().to_string();
        if self.clang_path.is_empty() {
            self.clang_path = DEFAULT_CLANG.to_string();
        }
        self.std = self.std.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);
        self.extra_flags = self.extra_flags.iter().map(|f| f.trim().to_string()).filter(|f| !f.is_empty()).collect();
        if self.main_file_name.trim().is_empty() {
            self.main_file_name = DEFAULT_MAIN_FILE_NAME.to_string();
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub(crate) struct FrontendSettingsPatch {
    pub(crate) clang_path: Option<String>,
    pub(crate) language: Option<String>,
    pub(crate) std: Option<String>,
    pub(crate) extra_flags: Option<Vec<String>>,
    pub(crate) main_file_name: Option<String>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, toml::Value>,
}
