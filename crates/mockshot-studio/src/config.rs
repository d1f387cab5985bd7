//! `studio.toml` handling.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use mockshot_engine::icon::{IconConfig, IconSizeSet};
use mockshot_engine::paint::{Color, Palette};
use mockshot_engine::RenderConfig;
use serde::Deserialize;

/// Top-level studio configuration. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudioConfig {
    /// Palette overrides and additions: `name = "#rrggbb"`.
    #[serde(default)]
    pub palette: BTreeMap<String, String>,
    #[serde(default)]
    pub fonts: FontPaths,
    #[serde(default)]
    pub render: RenderSection,
    #[serde(default)]
    pub icons: IconSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontPaths {
    pub regular: Option<PathBuf>,
    pub bold: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSection {
    #[serde(default = "default_line_height_factor")]
    pub line_height_factor: f32,
    #[serde(default = "default_block_margin")]
    pub block_margin: u32,
    #[serde(default = "default_fallback_advance")]
    pub fallback_advance: f32,
}

fn default_line_height_factor() -> f32 {
    RenderConfig::default().line_height_factor
}

fn default_block_margin() -> u32 {
    RenderConfig::default().block_margin
}

fn default_fallback_advance() -> f32 {
    RenderConfig::default().fallback_advance
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            line_height_factor: default_line_height_factor(),
            block_margin: default_block_margin(),
            fallback_advance: default_fallback_advance(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconSection {
    /// Same syntax as `--sizes`; unset means the App Store set.
    #[serde(default)]
    pub sizes: Option<String>,
    #[serde(default = "default_reference_size")]
    pub reference_size: u32,
    #[serde(default = "default_text_min_scale")]
    pub text_min_scale: f32,
    #[serde(default = "default_min_feature_px")]
    pub min_feature_px: i32,
}

fn default_reference_size() -> u32 {
    IconConfig::default().reference_size
}

fn default_text_min_scale() -> f32 {
    IconConfig::default().text_min_scale
}

fn default_min_feature_px() -> i32 {
    IconConfig::default().min_feature_px
}

impl Default for IconSection {
    fn default() -> Self {
        Self {
            sizes: None,
            reference_size: default_reference_size(),
            text_min_scale: default_text_min_scale(),
            min_feature_px: default_min_feature_px(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    /// Render threads; 0 picks one per core.
    #[serde(default)]
    pub jobs: usize,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

impl Default for OutputSection {
    fn default() -> Self {
        Self { dir: default_output_dir(), jobs: 0 }
    }
}

impl StudioConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: StudioConfig = toml::from_str(content)?;
        if config.icons.reference_size == 0 {
            return Err(anyhow!("icons.reference_size must be positive"));
        }
        Ok(config)
    }

    /// Built-in palette with the `[palette]` table applied on top.
    pub fn palette(&self) -> Result<Palette> {
        let overrides = self.palette.iter().try_fold(Palette::empty(), |p, (name, hex)| {
            Color::from_hex(hex)
                .map(|c| p.with(name.as_str(), c))
                .ok_or_else(|| anyhow!("palette.{name}: expected \"#rrggbb\", got {hex:?}"))
        })?;
        Ok(Palette::default().merged(&overrides))
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            line_height_factor: self.render.line_height_factor,
            block_margin: self.render.block_margin,
            fallback_advance: self.render.fallback_advance,
            icon: IconConfig {
                reference_size: self.icons.reference_size,
                text_min_scale: self.icons.text_min_scale,
                min_feature_px: self.icons.min_feature_px,
            },
        }
    }

    pub fn icon_sizes(&self) -> Result<IconSizeSet> {
        match &self.icons.sizes {
            Some(spec) => spec.parse().context("icons.sizes"),
            None => Ok(IconSizeSet::app_store()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = StudioConfig::parse("").unwrap();
        assert_eq!(config.render_config(), RenderConfig::default());
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert_eq!(config.output.jobs, 0);
        assert_eq!(config.icon_sizes().unwrap(), IconSizeSet::app_store());
        assert_eq!(config.palette().unwrap(), Palette::default());
    }

    #[test]
    fn sections_override_defaults() {
        let config = StudioConfig::parse(
            r##"
            [palette]
            accent_blue = "#010203"
            brand_new = "ff0000"

            [fonts]
            regular = "fonts/Inter-Regular.ttf"

            [render]
            block_margin = 24

            [icons]
            sizes = "512,64x32"
            text_min_scale = 0.1

            [output]
            dir = "shots"
            jobs = 2
            "##,
        )
        .unwrap();
        let palette = config.palette().unwrap();
        assert_eq!(palette.get("accent_blue"), Some(Color::rgb(1, 2, 3)));
        assert_eq!(palette.get("brand_new"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(palette.get("ai_bubble"), Palette::default().get("ai_bubble"));
        assert_eq!(config.fonts.regular, Some(PathBuf::from("fonts/Inter-Regular.ttf")));
        let render = config.render_config();
        assert_eq!(render.block_margin, 24);
        assert_eq!(render.line_height_factor, 1.375);
        assert_eq!(render.icon.text_min_scale, 0.1);
        assert_eq!(config.icon_sizes().unwrap(), IconSizeSet::new(vec![(512, 512), (64, 32)]));
        assert_eq!(config.output.dir, PathBuf::from("shots"));
        assert_eq!(config.output.jobs, 2);
    }

    #[test]
    fn bad_values_are_reported() {
        let config = StudioConfig::parse("[palette]\nx = \"blue\"").unwrap();
        assert!(config.palette().unwrap_err().to_string().contains("palette.x"));
        assert!(StudioConfig::parse("[icons]\nreference_size = 0").is_err());
        assert!(StudioConfig::parse("[render]\nwat = 1").is_err());
        let config = StudioConfig::parse("[icons]\nsizes = \"0\"").unwrap();
        assert!(config.icon_sizes().is_err());
    }
}
