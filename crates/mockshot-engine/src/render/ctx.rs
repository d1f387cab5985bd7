use crate::config::RenderConfig;
use crate::error::Result;
use crate::paint::{Color, ColorRef, Palette};
use crate::text::FontProvider;

/// Read-only inputs shared by every render in a batch.
///
/// Nothing here is mutated while rendering, so one context can be borrowed
/// by any number of parallel jobs.
#[derive(Copy, Clone)]
pub struct RenderCtx<'a> {
    pub palette: &'a Palette,
    pub fonts: &'a dyn FontProvider,
    pub config: &'a RenderConfig,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(palette: &'a Palette, fonts: &'a dyn FontProvider, config: &'a RenderConfig) -> Self {
        Self { palette, fonts, config }
    }

    #[inline]
    pub fn color(&self, color: &ColorRef) -> Result<Color> {
        self.palette.resolve(color)
    }
}
