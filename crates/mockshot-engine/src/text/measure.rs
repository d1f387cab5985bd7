/// Rasterized glyph positioned relative to the top-left of its line.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedGlyph {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major 8-bit coverage, `width * height` bytes.
    pub coverage: Vec<u8>,
}

/// Text measurement and (optionally) glyph rasterization.
///
/// Implementations are shared by reference across parallel renders, hence
/// `Send + Sync`. Measurement is per line: no shaping, bidi or script
/// segmentation is attempted.
pub trait FontProvider: Send + Sync {
    /// Advance width of `text` at `size` pixels.
    fn measure(&self, text: &str, size: f32, bold: bool) -> f32;

    /// Whether real glyph outlines are available. When `false`, layout still
    /// works (using approximate metrics) but nothing is drawn for text.
    fn shaping_available(&self) -> bool;

    /// Distance from line top to baseline.
    fn ascent(&self, size: f32) -> f32 {
        size * 0.8
    }

    /// Lays out and rasterizes a single line. Providers without outlines
    /// return nothing.
    fn layout_glyphs(&self, text: &str, size: f32, bold: bool) -> Vec<PlacedGlyph> {
        let _ = (text, size, bold);
        Vec::new()
    }
}

/// Approximate metrics: every character advances `size * advance_ratio`.
///
/// Used when no font file can be loaded so that wrapping and block heights
/// stay deterministic.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedWidthMeasurer {
    pub advance_ratio: f32,
}

impl FixedWidthMeasurer {
    pub const DEFAULT_RATIO: f32 = 0.6;

    #[inline]
    pub const fn new(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }
}

impl Default for FixedWidthMeasurer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATIO)
    }
}

impl FontProvider for FixedWidthMeasurer {
    fn measure(&self, text: &str, size: f32, _bold: bool) -> f32 {
        text.chars().count() as f32 * size * self.advance_ratio
    }

    fn shaping_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_width_counts_chars_not_bytes() {
        let m = FixedWidthMeasurer::new(0.5);
        assert_eq!(m.measure("abcd", 10.0, false), 20.0);
        assert_eq!(m.measure("héllo", 10.0, true), 25.0);
        assert_eq!(m.measure("", 10.0, false), 0.0);
    }

    #[test]
    fn fixed_width_draws_nothing() {
        let m = FixedWidthMeasurer::default();
        assert!(!m.shaping_available());
        assert!(m.layout_glyphs("hi", 16.0, false).is_empty());
    }
}
