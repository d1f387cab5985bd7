//! Scenes and brand assets compiled into the binary, used by `demo`.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use mockshot_engine::batch::RenderJob;
use mockshot_engine::icon::IconDesign;
use mockshot_engine::scene::SceneTemplate;

use crate::loader::parse_scene;

const SCENES: &[(&str, &str)] = &[
    ("01_main_chat.msml", include_str!("../scenes/01_main_chat.msml")),
    ("02_programming_help.msml", include_str!("../scenes/02_programming_help.msml")),
    ("03_creative_writing.msml", include_str!("../scenes/03_creative_writing.msml")),
    ("04_multilingual.msml", include_str!("../scenes/04_multilingual.msml")),
    ("05_settings.msml", include_str!("../scenes/05_settings.msml")),
    ("feature_showcase.msml", include_str!("../scenes/feature_showcase.msml")),
    ("github_banner.msml", include_str!("../scenes/github_banner.msml")),
];

pub fn builtin_scenes() -> anyhow::Result<Vec<SceneTemplate>> {
    SCENES
        .iter()
        .map(|(file, src)| parse_scene(src).with_context(|| format!("built-in scene {file}")))
        .collect()
}

/// Fixed-size brand images: (design, width, height, file name).
const BRAND_ASSETS: &[(fn() -> IconDesign, u32, u32, &str)] = &[
    (IconDesign::mindbridge_logo, 800, 300, "MindBridge_Logo.png"),
    (IconDesign::github_avatar, 400, 400, "GitHub_Avatar.png"),
];

/// One job per brand image, written into `out`.
pub fn brand_jobs(out: &Path) -> Vec<RenderJob> {
    BRAND_ASSETS
        .iter()
        .map(|&(design, w, h, file)| RenderJob::icon(Arc::new(design()), w, h, out.join(file)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockshot_engine::paint::Palette;
    use mockshot_engine::render::RenderCtx;
    use mockshot_engine::batch::JobKind;
    use mockshot_engine::scene::SceneOp;
    use mockshot_engine::text::FixedWidthMeasurer;
    use mockshot_engine::RenderConfig;

    #[test]
    fn all_builtins_load_and_compile() {
        let scenes = builtin_scenes().unwrap();
        assert_eq!(scenes.len(), SCENES.len());

        let palette = Palette::default();
        let config = RenderConfig::default();
        let fonts = FixedWidthMeasurer::default();
        let ctx = RenderCtx::new(&palette, &fonts, &config);
        for scene in &scenes {
            let list = scene.compile(&ctx).unwrap();
            assert!(list.len() > 1, "{} compiled to an empty list", scene.name);
        }
    }

    #[test]
    fn screenshots_use_app_store_size() {
        for scene in builtin_scenes().unwrap().iter().filter(|s| s.name.starts_with('0')) {
            assert_eq!((scene.width, scene.height), (1290, 2796), "{}", scene.name);
            let blocks = scene.ops.iter().filter(|op| matches!(op, SceneOp::Block(_))).count();
            assert_eq!(blocks, 4, "{}", scene.name);
        }
    }

    #[test]
    fn banner_renders() {
        let scenes = builtin_scenes().unwrap();
        let banner = scenes.iter().find(|s| s.name == "github_banner").unwrap();
        let palette = Palette::default();
        let config = RenderConfig::default();
        let fonts = FixedWidthMeasurer::default();
        let canvas = banner.render(&RenderCtx::new(&palette, &fonts, &config)).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (1280, 640));
        assert_eq!(canvas.pixel(0, 0), palette.get("brand_primary"));
    }

    // ── brand assets ──

    #[test]
    fn brand_jobs_name_their_files() {
        let jobs = brand_jobs(Path::new("out"));
        let files: Vec<_> = jobs.iter().map(|j| j.output.clone()).collect();
        assert_eq!(files, [Path::new("out").join("MindBridge_Logo.png"), Path::new("out").join("GitHub_Avatar.png")]);
        let sizes: Vec<_> = jobs
            .iter()
            .map(|j| match &j.kind {
                JobKind::Icon { width, height, .. } => (*width, *height),
                JobKind::Scene(_) => (0, 0),
            })
            .collect();
        assert_eq!(sizes, [(800, 300), (400, 400)]);
    }

    #[test]
    fn brand_jobs_render_at_their_sizes() {
        let palette = Palette::default();
        let config = RenderConfig::default();
        let fonts = FixedWidthMeasurer::default();
        let ctx = RenderCtx::new(&palette, &fonts, &config);
        for job in brand_jobs(Path::new("out")) {
            let canvas = job.render(&ctx).unwrap();
            let JobKind::Icon { width, height, .. } = job.kind else { panic!("expected icon job") };
            assert_eq!((canvas.width(), canvas.height()), (width, height));
        }
    }
}
