use std::collections::BTreeMap;
use std::fmt;

use crate::error::{RenderError, Result};

use super::Color;

/// A color as written in a scene: either literal or a palette name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorRef {
    Rgb(Color),
    Named(String),
}

impl ColorRef {
    #[inline]
    pub fn named(name: impl Into<String>) -> Self {
        ColorRef::Named(name.into())
    }
}

impl From<Color> for ColorRef {
    #[inline]
    fn from(c: Color) -> Self {
        ColorRef::Rgb(c)
    }
}

impl From<&str> for ColorRef {
    #[inline]
    fn from(name: &str) -> Self {
        ColorRef::Named(name.to_string())
    }
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorRef::Rgb(c) => write!(f, "#{:02x}{:02x}{:02x}", c.r, c.g, c.b),
            ColorRef::Named(n) => f.write_str(n),
        }
    }
}

/// Flat, immutable mapping from symbolic names to colors.
///
/// Built once (usually from [`Palette::default`] plus overrides) and passed by
/// reference into every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<String, Color>,
}

impl Palette {
    /// An empty palette; only literal colors resolve against it.
    pub fn empty() -> Self {
        Self { colors: BTreeMap::new() }
    }

    /// Returns a palette with `name` bound to `color`, replacing any prior binding.
    pub fn with(mut self, name: impl Into<String>, color: Color) -> Self {
        self.colors.insert(name.into(), color);
        self
    }

    /// Returns `self` with every binding of `overrides` applied on top.
    pub fn merged(mut self, overrides: &Palette) -> Self {
        self.colors
            .extend(overrides.colors.iter().map(|(k, v)| (k.clone(), *v)));
        self
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    pub fn resolve(&self, color: &ColorRef) -> Result<Color> {
        match color {
            ColorRef::Rgb(c) => Ok(*c),
            ColorRef::Named(name) => self
                .get(name)
                .ok_or_else(|| RenderError::UnknownColor(name.clone())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    /// Dark chat-UI palette plus the brand colors used by the icon designs.
    fn default() -> Self {
        const ENTRIES: &[(&str, Color)] = &[
            ("bg_primary", Color::rgb(0x0a, 0x0a, 0x0a)),
            ("bg_secondary", Color::rgb(0x1c, 0x1c, 0x1e)),
            ("card_dark", Color::rgb(0x2c, 0x2c, 0x2e)),
            ("card_light", Color::rgb(0x3a, 0x3a, 0x3c)),
            ("accent_blue", Color::rgb(0x00, 0x7a, 0xff)),
            ("accent_purple", Color::rgb(0xaf, 0x52, 0xde)),
            ("accent_green", Color::rgb(0x30, 0xd1, 0x58)),
            ("text_primary", Color::rgb(0xff, 0xff, 0xff)),
            ("text_secondary", Color::rgb(0x8e, 0x8e, 0x93)),
            ("text_tertiary", Color::rgb(0x48, 0x48, 0x4a)),
            ("user_bubble", Color::rgb(0x00, 0x7a, 0xff)),
            ("ai_bubble", Color::rgb(0x2c, 0x2c, 0x2e)),
            ("success", Color::rgb(0x30, 0xd1, 0x58)),
            ("warning", Color::rgb(0xff, 0x9f, 0x0a)),
            ("error", Color::rgb(0xff, 0x45, 0x3a)),
            ("brand_primary", Color::rgb(106, 90, 255)),
            ("brand_secondary", Color::rgb(255, 107, 107)),
            ("brand_accent", Color::rgb(72, 219, 251)),
            ("brand_dark", Color::rgb(30, 30, 35)),
            ("brand_light", Color::rgb(248, 249, 250)),
            ("icon_sky_top", Color::rgb(65, 105, 225)),
            ("icon_sky_bottom", Color::rgb(100, 200, 255)),
            ("icon_ink", Color::rgb(100, 150, 255)),
        ];
        Self {
            colors: ENTRIES.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_has_chat_colors() {
        let p = Palette::default();
        assert_eq!(p.get("accent_blue"), Some(Color::rgb(0, 122, 255)));
        assert_eq!(p.get("text_primary"), Some(Color::WHITE));
    }

    #[test]
    fn literal_resolves_without_lookup() {
        let c = Color::rgb(1, 2, 3);
        assert_eq!(Palette::empty().resolve(&ColorRef::Rgb(c)).unwrap(), c);
    }

    #[test]
    fn missing_name_is_unknown_color() {
        let err = Palette::empty().resolve(&ColorRef::named("nope")).unwrap_err();
        assert!(matches!(err, RenderError::UnknownColor(ref n) if n == "nope"));
    }

    #[test]
    fn overrides_replace_and_extend() {
        let overrides = Palette::empty()
            .with("accent_blue", Color::rgb(1, 1, 1))
            .with("brand_new", Color::rgb(2, 2, 2));
        let p = Palette::default().merged(&overrides);
        assert_eq!(p.get("accent_blue"), Some(Color::rgb(1, 1, 1)));
        assert_eq!(p.get("brand_new"), Some(Color::rgb(2, 2, 2)));
        assert_eq!(p.len(), Palette::default().len() + 1);
    }

    #[test]
    fn display_round_trips_hex() {
        assert_eq!(ColorRef::Rgb(Color::rgb(0, 122, 255)).to_string(), "#007aff");
        assert_eq!(ColorRef::named("ai_bubble").to_string(), "ai_bubble");
    }
}
