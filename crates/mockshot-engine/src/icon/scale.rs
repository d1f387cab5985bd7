use super::IconConfig;

/// A length in reference-icon pixels.
///
/// `min` floors the scaled value; strokes and radii carry a floor so they
/// never vanish at small sizes, offsets carry none.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Len {
    pub base: f32,
    pub min: Option<i32>,
}

impl Len {
    /// Position offset, may scale to zero or go negative.
    #[inline]
    pub const fn offset(base: f32) -> Self {
        Self { base, min: None }
    }

    /// Size, stroke or radius; floored at the configured minimum feature.
    #[inline]
    pub const fn feature(base: f32) -> Self {
        Self { base, min: Some(1) }
    }

    #[inline]
    pub const fn at_least(base: f32, min: i32) -> Self {
        Self { base, min: Some(min) }
    }
}

/// Maps reference lengths to one target size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IconScale {
    pub scale: f32,
    min_feature_px: i32,
}

impl IconScale {
    pub fn for_width(width: u32, config: &IconConfig) -> Self {
        Self::new(width, config.reference_size, config.min_feature_px)
    }

    /// Scale for `width` against a design drawn at `reference` pixels wide.
    pub fn new(width: u32, reference: u32, min_feature_px: i32) -> Self {
        Self { scale: width as f32 / reference.max(1) as f32, min_feature_px }
    }

    /// `round(base * scale)`, then floored for feature lengths.
    #[inline]
    pub fn px(&self, len: Len) -> i32 {
        let v = (len.base * self.scale).round() as i32;
        match len.min {
            Some(min) => v.max(min).max(self.min_feature_px),
            None => v,
        }
    }
}
