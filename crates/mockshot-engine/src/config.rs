//! Render-wide tunables.

use crate::icon::IconConfig;

/// Layout and text defaults shared by every render in a batch.
///
/// Immutable once handed to a [`RenderCtx`](crate::render::RenderCtx).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Line height as a multiple of font size when a style does not set one.
    ///
    /// 16 px text on 22 px lines is the reference chat layout.
    pub line_height_factor: f32,
    /// Vertical gap between consecutive flowing blocks, in pixels.
    pub block_margin: u32,
    /// Advance per character, as a fraction of font size, used by the
    /// fixed-width fallback measurer.
    pub fallback_advance: f32,
    /// Multi-resolution icon settings.
    pub icon: IconConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_height_factor: 1.375,
            block_margin: 15,
            fallback_advance: 0.6,
            icon: IconConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Line height in whole pixels for `size`, never below 1.
    #[inline]
    pub fn line_height(&self, size: f32) -> u32 {
        (size * self.line_height_factor).round().max(1.0) as u32
    }
}
