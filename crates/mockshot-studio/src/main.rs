mod builtin;
mod cli;
mod config;
mod loader;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use mockshot_engine::batch::{BatchReport, BatchRunner, RenderJob};
use mockshot_engine::icon::{IconGenerator, IconSizeSet};
use mockshot_engine::logging::{init_logging, LoggingConfig};
use mockshot_engine::render::RenderCtx;
use mockshot_engine::scene::SceneTemplate;
use mockshot_engine::text::FontSystem;

use cli::{Cli, Command, DesignArg};
use config::StudioConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(LoggingConfig::from_verbosity(cli.verbose));

    match run(cli) {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(report) => {
            for failure in &report.failed {
                eprintln!("failed: {failure}");
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<BatchReport> {
    let config = match &cli.config {
        Some(path) => StudioConfig::load(path)?,
        None => StudioConfig::default(),
    };
    let palette = config.palette()?;
    let render_config = config.render_config();

    let regular = cli.font.as_deref().or(config.fonts.regular.as_deref());
    let bold = cli.bold_font.as_deref().or(config.fonts.bold.as_deref());
    let fonts = FontSystem::load_or_fallback(regular, bold, render_config.fallback_advance);
    if !fonts.shaping_available() {
        log::info!("no usable font; text is laid out but not drawn");
    }
    let ctx = RenderCtx::new(&palette, fonts.as_ref(), &render_config);

    let out_root = |out: &Option<PathBuf>| out.clone().unwrap_or_else(|| config.output.dir.clone());
    let jobs = match &cli.command {
        Command::Scenes { dir, out } => {
            scene_jobs(loader::load_scene_dir(dir)?, &out_root(out))
        }
        Command::Icons { design, sizes, out } => {
            let sizes = match sizes {
                Some(sizes) => sizes.clone(),
                None => config.icon_sizes()?,
            };
            icon_jobs(*design, sizes, &out_root(out))
        }
        Command::Brand { out } => builtin::brand_jobs(&out_root(out)),
        Command::Demo { out } => {
            let root = out_root(out);
            let sizes = config.icon_sizes()?;
            let mut jobs = scene_jobs(builtin::builtin_scenes()?, &root.join("screens"));
            for design in [DesignArg::Chat, DesignArg::Brand] {
                jobs.extend(icon_jobs(design, sizes.clone(), &root.join("icons")));
            }
            jobs.extend(builtin::brand_jobs(&root.join("brand")));
            jobs
        }
    };

    let threads = cli.jobs.unwrap_or(config.output.jobs);
    let runner = BatchRunner::new(threads);
    log::info!("rendering {} images on {} thread(s)", jobs.len(), runner.threads());
    Ok(runner.run(&jobs, &ctx))
}

fn scene_jobs(scenes: Vec<SceneTemplate>, out: &Path) -> Vec<RenderJob> {
    scenes
        .into_iter()
        .map(|scene| {
            let output = out.join(format!("{}.png", scene.name));
            RenderJob::scene(Arc::new(scene), output)
        })
        .collect()
}

fn icon_jobs(design: DesignArg, sizes: IconSizeSet, out: &Path) -> Vec<RenderJob> {
    IconGenerator::new(design.design(), sizes).jobs(&out.join(design.dir_name()))
}
