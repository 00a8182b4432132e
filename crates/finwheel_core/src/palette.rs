//! Category colors
//!
//! Colors are handed out by rank, so the chart slice and the list swatch of
//! the same category always agree.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

/// Default category colors, in rank order
pub const DEFAULT_COLORS: [&str; 8] = [
    "#4FC5DF", "#88DCDC", "#77E1A1", "#FFD166", "#FFB473", "#FD788B", "#8382F7", "#B3CDDA",
];

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(raw: &str) -> Result<Self, ColorError> {
        let hex = raw.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorError::Malformed(raw.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorError::Malformed(raw.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Linear interpolation towards `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(&self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Source-over compositing of `over` with the given alpha (0..=255) onto self.
    pub fn blend(&self, over: Rgb, alpha: u8) -> Rgb {
        self.lerp(over, alpha as f64 / 255.0)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Rgb::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

/// Ordered, non-empty set of category colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS
                .iter()
                .map(|hex| Rgb::from_hex(hex).unwrap_or(Rgb::WHITE))
                .collect(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Result<Self, ColorError> {
        if colors.is_empty() {
            return Err(ColorError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn from_hex_list<S: AsRef<str>>(hex: &[S]) -> Result<Self, ColorError> {
        let colors = hex
            .iter()
            .map(|h| Rgb::from_hex(h.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Color for a category rank, cycling once ranks exceed the palette.
    pub fn color_for_rank(&self, rank: usize) -> Rgb {
        self.colors[rank % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let colors = Vec::<Rgb>::deserialize(deserializer)?;
        Palette::new(colors).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#4FC5DF").unwrap(), Rgb::new(0x4F, 0xC5, 0xDF));
        assert_eq!(Rgb::from_hex("b3cdda").unwrap(), Rgb::new(0xB3, 0xCD, 0xDA));
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#GG0000").is_err());
    }

    #[test]
    fn test_hex_roundtrip_is_uppercase() {
        assert_eq!(Rgb::from_hex("#fd788b").unwrap().to_hex(), "#FD788B");
    }

    #[test]
    fn test_default_palette_has_eight_colors() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 8);
        assert_eq!(palette.color_for_rank(0).to_hex(), "#4FC5DF");
        assert_eq!(palette.color_for_rank(7).to_hex(), "#B3CDDA");
    }

    #[test]
    fn test_rank_cycles_through_palette() {
        let palette = Palette::default();
        assert_eq!(palette.color_for_rank(8), palette.color_for_rank(0));
        assert_eq!(palette.color_for_rank(13), palette.color_for_rank(5));
    }

    #[test]
    fn test_custom_palette_substitution() {
        let palette = Palette::from_hex_list(&["#000000", "#FFFFFF"]).unwrap();
        assert_eq!(palette.color_for_rank(3), Rgb::WHITE);
        assert_eq!(
            Palette::from_hex_list::<&str>(&[]),
            Err(ColorError::EmptyPalette)
        );
    }

    #[test]
    fn test_blend_and_lerp() {
        let base = Rgb::gray(0);
        assert_eq!(base.blend(Rgb::WHITE, 255), Rgb::WHITE);
        assert_eq!(base.blend(Rgb::WHITE, 0), base);
        assert_eq!(Rgb::gray(10).lerp(Rgb::gray(20), 0.5), Rgb::gray(15));
    }

    #[test]
    fn test_palette_from_yaml() {
        let palette: Palette = serde_saphyr::from_str("- '#4FC5DF'\n- '#88DCDC'\n").unwrap();
        assert_eq!(palette.len(), 2);
        assert!(serde_saphyr::from_str::<Palette>("[]").is_err());
    }
}
