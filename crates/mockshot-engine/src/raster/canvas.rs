use std::fmt;
use std::fs;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::coords::{PixelRect, Point};
use crate::error::{RenderError, Result};
use crate::paint::{Color, Fill};

use super::Coverage;

/// Opaque RGB pixel grid, row-major.
///
/// A canvas is created by one render call, mutated in place by that call's
/// ops and encoded once at the end. All writes are clipped: coordinates
/// outside `[0, width) × [0, height)` are ignored.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Black canvas. Zero width or height is `InvalidDimension`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Color::BLACK)
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::dimension(format!(
                "canvas must be at least 1x1, got {width}x{height}"
            )));
        }
        let len = width as usize * height as usize;
        Ok(Self { width, height, pixels: vec![color; len] })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The full pixel extent as an inclusive box.
    #[inline]
    pub fn bounds(&self) -> PixelRect {
        PixelRect::from_origin_size(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, fill: Fill) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = self.pixels[i].blend(fill.color, fill.alpha);
        }
    }

    /// Overwrites row `y` from `x1` to `x2` inclusive.
    pub fn fill_span(&mut self, y: i32, x1: i32, x2: i32, color: Color) {
        if y < 0 || y as u32 >= self.height {
            return;
        }
        let x1 = x1.max(0);
        let x2 = x2.min(self.width as i32 - 1);
        if x2 < x1 {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + x1 as usize..=row + x2 as usize].fill(color);
    }

    /// Fills the whole canvas.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Fills `rect`. An inverted rect covers no pixels.
    pub fn fill_rect(&mut self, rect: PixelRect, fill: Fill) {
        let Some(r) = rect.intersect(self.bounds()) else { return };
        if fill.is_opaque() {
            for y in r.y1..=r.y2 {
                self.fill_span(y, r.x1, r.x2, fill.color);
            }
        } else {
            for y in r.y1..=r.y2 {
                for x in r.x1..=r.x2 {
                    self.blend_pixel(x, y, fill);
                }
            }
        }
    }

    /// Fills the ellipse inscribed in `bbox`.
    pub fn fill_ellipse(&mut self, bbox: PixelRect, fill: Fill) {
        let mut cov = Coverage::new(bbox, self.bounds());
        cov.add_ellipse(bbox);
        self.composite(&cov, fill);
    }

    /// Strokes a straight line `width` pixels thick.
    pub fn stroke_line(&mut self, from: Point, to: Point, width: u32, fill: Fill) {
        let pad = width.max(1) as i32;
        let bounds = PixelRect::new(from.x, from.y, to.x, to.y).normalized().inflate(pad);
        let mut cov = Coverage::new(bounds, self.bounds());
        cov.add_segment(from, to, width);
        self.composite(&cov, fill);
    }

    /// Strokes part of the ellipse inscribed in `bbox`.
    ///
    /// See [`Coverage::add_arc`] for the angle convention.
    pub fn stroke_arc(&mut self, bbox: PixelRect, start_deg: f64, end_deg: f64, width: u32, fill: Fill) {
        let mut cov = Coverage::new(bbox, self.bounds());
        cov.add_arc(bbox, start_deg, end_deg, width);
        self.composite(&cov, fill);
    }

    /// Paints every covered pixel once with `fill`.
    pub fn composite(&mut self, coverage: &Coverage, fill: Fill) {
        if fill.alpha == 0 {
            return;
        }
        for (x, y) in coverage.iter() {
            self.blend_pixel(x, y, fill);
        }
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = self.pixels[y as usize * self.width as usize + x as usize];
            Rgb(c.to_array())
        })
    }

    /// Encodes the canvas as an RGB8 PNG at `path`, creating parent
    /// directories as needed.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| RenderError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        self.to_rgb_image()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| RenderError::Encode { path: path.to_path_buf(), source })
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
