use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportSettings {
    /// Follow Function and Record lines with `Found declaration at L:C`.
    pub show_locations: bool,
}

impl ReportSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: ReportSettingsPatch,
    ) {
        if let Some(v) = patch.show_locations {
            self.show_locations = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub(crate) struct ReportSettingsPatch {
    pub(crate) show_locations: Option<bool>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, toml::Value>,
}
