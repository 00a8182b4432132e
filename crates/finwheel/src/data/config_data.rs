//! User configuration stored in `config.yaml`
//!
//! ```yaml
//! currency: "₽"
//! default_period: current_month
//! palette: ["#4FC5DF", "#88DCDC", "#77E1A1"]
//! icons:
//!   Pets: "🐾"
//! unknown_icon: "?"
//! ```

use std::collections::BTreeMap;

use finwheel_core::{IconSet, Palette, Period};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "₽";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_unknown_icon() -> Option<String> {
    IconSet::default().unknown
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Symbol appended to whole-unit amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Period shown at startup
    #[serde(default)]
    pub default_period: Period,

    /// Category colors by rank
    #[serde(default)]
    pub palette: Palette,

    /// Extra or replacement category glyphs
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub icons: BTreeMap<String, String>,

    /// Glyph for categories without one; `null` hides it
    #[serde(default = "default_unknown_icon")]
    pub unknown_icon: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            default_period: Period::default(),
            palette: Palette::default(),
            icons: BTreeMap::new(),
            unknown_icon: default_unknown_icon(),
        }
    }
}

impl AppConfig {
    /// Built-in icons with this config's overrides applied
    pub fn icon_set(&self) -> IconSet {
        let mut icons = IconSet::default().merged(self.icons.clone());
        icons.unknown = self.unknown_icon.clone();
        icons
    }
}
