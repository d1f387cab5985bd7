use std::path::{Path, PathBuf};

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use thiserror::Error;

use super::{FixedWidthMeasurer, FontProvider, PlacedGlyph};

/// A font file that could not be read or parsed.
///
/// Never surfaces from a render: callers fall back to
/// [`FixedWidthMeasurer`] and log it.
#[derive(Debug, Error)]
pub enum FontUnavailable {
    #[error("cannot read font {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse font: {0}")]
    Parse(String),
}

/// fontdue-backed provider with a regular face and an optional bold face.
///
/// Bold text falls back to the regular face when no bold face is loaded.
pub struct FontSystem {
    /// `[regular]` or `[regular, bold]`; layout indexes into this slice.
    faces: Vec<fontdue::Font>,
}

impl FontSystem {
    /// Parses TrueType/OpenType bytes.
    pub fn from_bytes(regular: &[u8], bold: Option<&[u8]>) -> Result<Self, FontUnavailable> {
        let mut faces = vec![parse(regular)?];
        if let Some(bytes) = bold {
            faces.push(parse(bytes)?);
        }
        Ok(Self { faces })
    }

    pub fn load(regular: &Path, bold: Option<&Path>) -> Result<Self, FontUnavailable> {
        let regular = read(regular)?;
        let bold = bold.map(read).transpose()?;
        Self::from_bytes(&regular, bold.as_deref())
    }

    /// Loads the given faces, or falls back to fixed-width metrics.
    ///
    /// With no regular path the fallback is chosen silently; a path that
    /// fails to load is logged at `warn`.
    pub fn load_or_fallback(
        regular: Option<&Path>,
        bold: Option<&Path>,
        fallback_advance: f32,
    ) -> Box<dyn FontProvider> {
        let fallback = Box::new(FixedWidthMeasurer::new(fallback_advance));
        let Some(regular) = regular else {
            log::debug!("no font configured; using fixed-width metrics");
            return fallback;
        };
        match Self::load(regular, bold) {
            Ok(fonts) => {
                log::debug!("loaded font {}", regular.display());
                Box::new(fonts)
            }
            Err(e) => {
                log::warn!("{e}; text will use fixed-width metrics and no glyphs");
                fallback
            }
        }
    }

    #[inline]
    fn face_index(&self, bold: bool) -> usize {
        if bold && self.faces.len() > 1 { 1 } else { 0 }
    }

    fn layout(&self, text: &str, size: f32, bold: bool) -> Layout<()> {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&self.faces, &TextStyle::new(text, size, self.face_index(bold)));
        layout
    }
}

fn read(path: &Path) -> Result<Vec<u8>, FontUnavailable> {
    std::fs::read(path).map_err(|source| FontUnavailable::Read { path: path.to_path_buf(), source })
}

fn parse(bytes: &[u8]) -> Result<fontdue::Font, FontUnavailable> {
    fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
        .map_err(|e| FontUnavailable::Parse(e.to_string()))
}

impl FontProvider for FontSystem {
    fn measure(&self, text: &str, size: f32, bold: bool) -> f32 {
        let face = &self.faces[self.face_index(bold)];
        let layout = self.layout(text, size, bold);

        // Pen position after each glyph, not the bitmap's right edge, so
        // trailing punctuation does not shrink the measured width.
        layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = face.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max)
    }

    fn shaping_available(&self) -> bool {
        true
    }

    fn ascent(&self, size: f32) -> f32 {
        self.faces[0]
            .horizontal_line_metrics(size)
            .map_or(size * 0.8, |m| m.ascent)
    }

    fn layout_glyphs(&self, text: &str, size: f32, bold: bool) -> Vec<PlacedGlyph> {
        let face = &self.faces[self.face_index(bold)];
        self.layout(text, size, bold)
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| {
                let (metrics, coverage) = face.rasterize_config(g.key);
                PlacedGlyph {
                    x: g.x.round() as i32,
                    y: g.y.round() as i32,
                    width: metrics.width,
                    height: metrics.height,
                    coverage,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_unavailable() {
        let err = FontSystem::from_bytes(b"not a font", None);
        assert!(matches!(err, Err(FontUnavailable::Parse(_))));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = FontSystem::load(Path::new("/nonexistent/mockshot/font.ttf"), None);
        assert!(matches!(err, Err(FontUnavailable::Read { .. })));
    }

    #[test]
    fn fallback_is_fixed_width() {
        let fonts = FontSystem::load_or_fallback(Some(Path::new("/nonexistent.ttf")), None, 0.5);
        assert!(!fonts.shaping_available());
        assert_eq!(fonts.measure("abcd", 10.0, false), 20.0);

        let fonts = FontSystem::load_or_fallback(None, None, 0.6);
        assert!(!fonts.shaping_available());
    }
}
