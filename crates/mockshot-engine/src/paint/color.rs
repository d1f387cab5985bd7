/// 8-bit sRGB color without alpha.
///
/// Translucency is modeled separately by [`Fill`], which pairs a color with a
/// coverage value; canvases themselves are opaque.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Interpolates toward `other` by `ratio`.
    ///
    /// Each channel is `self + (other - self) * ratio`, truncated toward zero
    /// and clamped to `[0, 255]`. Truncation (not rounding) is deliberate: a
    /// ramp of extent `n` never reaches `other` exactly on its last step.
    #[inline]
    pub fn lerp(self, other: Color, ratio: f64) -> Color {
        Color::rgb(
            lerp_channel(self.r, other.r, ratio),
            lerp_channel(self.g, other.g, ratio),
            lerp_channel(self.b, other.b, ratio),
        )
    }

    /// Source-over blend of `src` onto `self` with 8-bit coverage.
    #[inline]
    pub fn blend(self, src: Color, alpha: u8) -> Color {
        match alpha {
            0 => self,
            255 => src,
            a => Color::rgb(
                blend_channel(src.r, self.r, a),
                blend_channel(src.g, self.g, a),
                blend_channel(src.b, self.b, a),
            ),
        }
    }
}

#[inline]
fn lerp_channel(start: u8, end: u8, ratio: f64) -> u8 {
    let v = start as f64 + (end as f64 - start as f64) * ratio;
    v.trunc().clamp(0.0, 255.0) as u8
}

#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    let v = src as u32 * a + dst as u32 * (255 - a);
    ((v + 127) / 255) as u8
}

/// A color plus 8-bit coverage.
///
/// `alpha = 255` overwrites pixels outright; anything lower blends once per
/// pixel of the composed shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Fill {
    pub color: Color,
    pub alpha: u8,
}

impl Fill {
    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self { color, alpha: 255 }
    }

    #[inline]
    pub const fn translucent(color: Color, alpha: u8) -> Self {
        Self { color, alpha }
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.alpha == 255
    }

    /// Scales the fill's coverage by a further 8-bit factor (glyph antialiasing).
    #[inline]
    pub fn with_coverage(self, coverage: u8) -> Self {
        let a = (self.alpha as u32 * coverage as u32 + 127) / 255;
        Self { color: self.color, alpha: a as u8 }
    }
}

impl From<Color> for Fill {
    #[inline]
    fn from(color: Color) -> Fill {
        Fill::solid(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_hex("#007AFF"), Some(Color::rgb(0, 122, 255)));
        assert_eq!(Color::from_hex("30d158"), Some(Color::rgb(48, 209, 88)));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#zz0000"), None);
    }

    #[test]
    fn lerp_truncates_toward_zero() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(100, 200, 50);
        assert_eq!(a.lerp(b, 0.99), Color::rgb(99, 198, 49));
        assert_eq!(a.lerp(b, 0.0), a);
    }

    #[test]
    fn lerp_descending_channels_stay_in_range() {
        let a = Color::rgb(15, 25, 45);
        let b = Color::rgb(5, 10, 25);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid, Color::rgb(10, 17, 35));
    }

    #[test]
    fn blend_extremes() {
        let dst = Color::rgb(10, 20, 30);
        let src = Color::rgb(200, 100, 0);
        assert_eq!(dst.blend(src, 0), dst);
        assert_eq!(dst.blend(src, 255), src);
        let half = dst.blend(src, 128);
        assert!(half.r > dst.r && half.r < src.r);
    }

    #[test]
    fn coverage_scales_alpha() {
        let f = Fill::translucent(Color::WHITE, 200);
        assert_eq!(f.with_coverage(255).alpha, 200);
        assert_eq!(f.with_coverage(0).alpha, 0);
        assert!(Fill::from(Color::BLACK).is_opaque());
    }
}
