use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::batch::RenderJob;
use crate::error::Result;
use crate::raster::Canvas;
use crate::render::RenderCtx;

use super::IconDesign;

/// Scaling policy shared by every icon size.
#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    /// Width at which design lengths are used unscaled.
    pub reference_size: u32,
    /// Labels are drawn only above this scale; at exactly this scale they
    /// are dropped.
    pub text_min_scale: f32,
    /// Smallest stroke or radius, in pixels.
    pub min_feature_px: i32,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self { reference_size: 1024, text_min_scale: 0.05, min_feature_px: 1 }
    }
}

/// Rejected `--sizes` entry.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid icon size {0:?}: expected N or WxH with non-zero sides")]
pub struct ParseSizeError(pub String);

/// Ordered `(width, height)` targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSizeSet(Vec<(u32, u32)>);

impl IconSizeSet {
    #[inline]
    pub fn new(sizes: Vec<(u32, u32)>) -> Self {
        Self(sizes)
    }

    /// App Store and device sizes, largest first.
    pub fn app_store() -> Self {
        Self(
            [1024, 180, 120, 87, 80, 60, 58, 40, 29, 20]
                .into_iter()
                .map(|s| (s, s))
                .collect(),
        )
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for IconSizeSet {
    fn default() -> Self {
        Self::app_store()
    }
}

impl FromStr for IconSizeSet {
    type Err = ParseSizeError;

    /// Comma-separated `N` (square) or `WxH` entries, e.g. `1024,180,60x40`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parse_side = |v: &str, entry: &str| match v.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ParseSizeError(entry.trim().to_string())),
        };
        s.split(',')
            .filter(|entry| !entry.trim().is_empty())
            .map(|entry| match entry.split_once(['x', 'X']) {
                Some((w, h)) => Ok((parse_side(w, entry)?, parse_side(h, entry)?)),
                None => parse_side(entry, entry).map(|n| (n, n)),
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for IconSizeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (w, h)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{w}x{h}")?;
        }
        Ok(())
    }
}

/// File name for one icon size.
#[inline]
pub fn icon_file_name(width: u32, height: u32) -> String {
    format!("AppIcon-{width}x{height}.png")
}

/// One design rendered at a set of sizes, each on its own canvas.
#[derive(Debug, Clone)]
pub struct IconGenerator {
    design: Arc<IconDesign>,
    sizes: IconSizeSet,
}

impl IconGenerator {
    pub fn new(design: IconDesign, sizes: IconSizeSet) -> Self {
        Self { design: Arc::new(design), sizes }
    }

    #[inline]
    pub fn design(&self) -> &IconDesign {
        &self.design
    }

    #[inline]
    pub fn sizes(&self) -> &IconSizeSet {
        &self.sizes
    }

    /// Renders every size in order; one failing size does not stop the rest.
    pub fn render_all(&self, ctx: &RenderCtx<'_>) -> Vec<((u32, u32), Result<Canvas>)> {
        self.sizes
            .iter()
            .map(|(w, h)| ((w, h), self.design.render(w, h, ctx)))
            .collect()
    }

    /// Batch jobs writing `AppIcon-{w}x{h}.png` files into `out_dir`.
    pub fn jobs(&self, out_dir: &Path) -> Vec<RenderJob> {
        self.sizes
            .iter()
            .map(|(w, h)| {
                RenderJob::icon(Arc::clone(&self.design), w, h, out_dir.join(icon_file_name(w, h)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::paint::Palette;
    use crate::text::FixedWidthMeasurer;

    // ── size sets ─────────────────────────────────────────────────────────

    #[test]
    fn app_store_set_is_ordered() {
        let sizes: Vec<u32> = IconSizeSet::app_store().iter().map(|(w, _)| w).collect();
        assert_eq!(sizes, [1024, 180, 120, 87, 80, 60, 58, 40, 29, 20]);
    }

    #[test]
    fn parse_mixed_entries() {
        let set: IconSizeSet = "1024, 180x180,60X40".parse().unwrap();
        assert_eq!(set, IconSizeSet::new(vec![(1024, 1024), (180, 180), (60, 40)]));
        assert_eq!(set.to_string(), "1024x1024,180x180,60x40");
    }

    #[test]
    fn parse_rejects_zero_and_garbage() {
        assert_eq!("0".parse::<IconSizeSet>(), Err(ParseSizeError("0".into())));
        assert!("12xq".parse::<IconSizeSet>().is_err());
        assert!("big".parse::<IconSizeSet>().is_err());
    }

    // ── generator ─────────────────────────────────────────────────────────

    #[test]
    fn file_names() {
        assert_eq!(icon_file_name(87, 87), "AppIcon-87x87.png");
    }

    #[test]
    fn every_size_gets_a_fresh_canvas() {
        let palette = Palette::default();
        let config = RenderConfig::default();
        let fonts = FixedWidthMeasurer::default();
        let ctx = RenderCtx::new(&palette, &fonts, &config);
        let generator = IconGenerator::new(IconDesign::brain_bridge(), IconSizeSet::app_store());
        let out = generator.render_all(&ctx);
        assert_eq!(out.len(), 10);
        for ((w, h), canvas) in out {
            let canvas = canvas.unwrap();
            assert_eq!((canvas.width(), canvas.height()), (w, h));
        }
    }

    #[test]
    fn jobs_target_the_output_directory() {
        let generator = IconGenerator::new(IconDesign::chat_bubbles(), "180,20".parse().unwrap());
        let jobs = generator.jobs(Path::new("out/icons"));
        let paths: Vec<_> = jobs.iter().map(|j| j.output.clone()).collect();
        assert_eq!(
            paths,
            [Path::new("out/icons/AppIcon-180x180.png"), Path::new("out/icons/AppIcon-20x20.png")]
        );
    }
}
