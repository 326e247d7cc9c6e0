//! Start-up options for element registration

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::kit::components::button;

/// Options consumed by [`crate::init_with`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InitOptions {
    /// Tag name the button element registers under
    pub tag_name: String,
    /// Base path stylesheets are resolved against
    pub stylesheet_base: String,
    /// Log a warning when a button renders without an `id`
    pub warn_on_missing_id: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            tag_name: button::TAG_NAME.to_string(),
            stylesheet_base: "styles".to_string(),
            warn_on_missing_id: true,
        }
    }
}

impl InitOptions {
    /// Parse options from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse init options")
    }

    /// Resolve a logical stylesheet name to the href linked into a shadow root
    pub fn stylesheet_href(&self, name: &str) -> String {
        let base = self.stylesheet_base.trim_end_matches('/');
        if base.is_empty() {
            format!("{name}.css")
        } else {
            format!("{base}/{name}.css")
        }
    }
}
