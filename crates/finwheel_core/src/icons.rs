//! Category name → icon glyph lookup

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Built-in categories and their glyphs. The second name of each entry is
/// the Russian label used by older ledgers.
const BUILTIN_ICONS: [(&str, &str, &str); 7] = [
    ("Housing", "Жилье", "🏠"),
    ("Groceries", "Продукты", "🛒"),
    ("Entertainment", "Развлечения", "🎮"),
    ("Transport", "Транспорт", "🚌"),
    ("Other", "Другое", "⋯"),
    ("Travel", "Путешествия", "✈"),
    ("Miscellaneous", "Остальное", "▦"),
];

const DEFAULT_UNKNOWN_ICON: &str = "❔";

/// Icon glyphs for category rows.
///
/// Names not in `known` use `unknown`; when that is unset the row simply has
/// no icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSet {
    #[serde(default)]
    pub known: BTreeMap<String, String>,
    #[serde(default)]
    pub unknown: Option<String>,
}

impl Default for IconSet {
    fn default() -> Self {
        let mut known = BTreeMap::new();
        for (name, alias, glyph) in BUILTIN_ICONS {
            known.insert(name.to_string(), glyph.to_string());
            known.insert(alias.to_string(), glyph.to_string());
        }
        Self {
            known,
            unknown: Some(DEFAULT_UNKNOWN_ICON.to_string()),
        }
    }
}

impl IconSet {
    /// An icon set with no glyphs at all
    pub fn empty() -> Self {
        Self {
            known: BTreeMap::new(),
            unknown: None,
        }
    }

    pub fn icon_for(&self, category: &str) -> Option<&str> {
        self.known
            .get(category)
            .or(self.unknown.as_ref())
            .map(String::as_str)
            .filter(|glyph| !glyph.is_empty())
    }

    /// Overlay user-provided glyphs on top of this set.
    pub fn merged(mut self, overrides: BTreeMap<String, String>) -> Self {
        self.known.extend(overrides);
        self
    }
}
