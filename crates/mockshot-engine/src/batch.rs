//! Batch rendering.
//!
//! Jobs are independent: each owns its canvas and shares only the read-only
//! [`RenderCtx`]. A failing job is recorded in the [`BatchReport`] and the
//! rest continue.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{RenderError, Result};
use crate::icon::IconDesign;
use crate::raster::Canvas;
use crate::render::RenderCtx;
use crate::scene::SceneTemplate;

/// What a job renders.
#[derive(Debug, Clone)]
pub enum JobKind {
    Scene(Arc<SceneTemplate>),
    Icon {
        design: Arc<IconDesign>,
        width: u32,
        height: u32,
    },
}

/// One output file.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub name: String,
    pub output: PathBuf,
    pub kind: JobKind,
}

impl RenderJob {
    pub fn scene(template: Arc<SceneTemplate>, output: impl Into<PathBuf>) -> Self {
        Self { name: template.name.clone(), output: output.into(), kind: JobKind::Scene(template) }
    }

    pub fn icon(design: Arc<IconDesign>, width: u32, height: u32, output: impl Into<PathBuf>) -> Self {
        Self {
            name: format!("{}@{width}x{height}", design.name),
            output: output.into(),
            kind: JobKind::Icon { design, width, height },
        }
    }

    pub fn render(&self, ctx: &RenderCtx<'_>) -> Result<Canvas> {
        match &self.kind {
            JobKind::Scene(template) => template.render(ctx),
            JobKind::Icon { design, width, height } => design.render(*width, *height, ctx),
        }
    }

    /// Renders and writes the PNG.
    pub fn run(&self, ctx: &RenderCtx<'_>) -> Result<()> {
        let started = Instant::now();
        log::debug!("render {} -> {}", self.name, self.output.display());
        let canvas = self.render(ctx)?;
        canvas.save_png(&self.output)?;
        log::debug!("wrote {} in {:.1?}", self.output.display(), started.elapsed());
        Ok(())
    }
}

/// A job that did not produce its file.
#[derive(Debug)]
pub struct JobFailure {
    pub name: String,
    pub output: PathBuf,
    pub error: RenderError,
}

impl fmt::Display for JobFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.output.display(), self.error)
    }
}

/// Outcome of a batch, in job order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: Vec<PathBuf>,
    pub failed: Vec<JobFailure>,
}

impl BatchReport {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Runs jobs sequentially or on a rayon pool.
pub struct BatchRunner {
    /// `None` = sequential.
    pool: Option<ThreadPool>,
}

impl BatchRunner {
    /// `threads == 1` runs on the calling thread; `0` lets rayon pick.
    pub fn new(threads: usize) -> Self {
        if threads == 1 {
            return Self::sequential();
        }
        match ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => Self { pool: Some(pool) },
            Err(e) => {
                log::warn!("cannot start {threads} render threads ({e}); rendering sequentially");
                Self::sequential()
            }
        }
    }

    #[inline]
    pub fn sequential() -> Self {
        Self { pool: None }
    }

    pub fn threads(&self) -> usize {
        self.pool.as_ref().map_or(1, ThreadPool::current_num_threads)
    }

    pub fn run(&self, jobs: &[RenderJob], ctx: &RenderCtx<'_>) -> BatchReport {
        self.run_with(jobs, |job| job.run(ctx))
    }

    /// Runs `exec` for every job and collects the outcomes.
    pub fn run_with<F>(&self, jobs: &[RenderJob], exec: F) -> BatchReport
    where
        F: Fn(&RenderJob) -> Result<()> + Sync,
    {
        let started = Instant::now();
        let outcomes: Vec<Result<()>> = match &self.pool {
            Some(pool) => pool.install(|| jobs.par_iter().map(&exec).collect()),
            None => jobs.iter().map(&exec).collect(),
        };

        let mut report = BatchReport::default();
        for (job, outcome) in jobs.iter().zip(outcomes) {
            match outcome {
                Ok(()) => report.succeeded.push(job.output.clone()),
                Err(error) => {
                    let failure = JobFailure { name: job.name.clone(), output: job.output.clone(), error };
                    log::error!("{failure}");
                    report.failed.push(failure);
                }
            }
        }
        log::info!(
            "rendered {}/{} images in {:.1?} ({} failed)",
            report.succeeded.len(),
            report.total(),
            started.elapsed(),
            report.failed.len(),
        );
        report
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::paint::Palette;
    use crate::scene::{Block, SceneOp};
    use crate::text::FixedWidthMeasurer;

    fn temp_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mockshot-batch-{tag}-{}", std::process::id()))
    }

    fn jobs(dir: &std::path::Path) -> Vec<RenderJob> {
        let good = Arc::new(
            SceneTemplate::new("good", 60, 40).op(SceneOp::Block(Block::new("hi", "ai_bubble"))),
        );
        let bad = Arc::new(
            SceneTemplate::new("bad", 60, 40).op(SceneOp::Block(Block::new("hi", "missing"))),
        );
        let empty = Arc::new(SceneTemplate::new("empty", 0, 40));
        vec![
            RenderJob::scene(good.clone(), dir.join("good.png")),
            RenderJob::scene(bad, dir.join("bad.png")),
            RenderJob::icon(Arc::new(IconDesign::brain_bridge()), 29, 29, dir.join("icon.png")),
            RenderJob::scene(empty, dir.join("empty.png")),
            RenderJob::scene(good, dir.join("good-again.png")),
        ]
    }

    fn check_isolation(runner: BatchRunner, tag: &str) {
        let dir = temp_dir(tag);
        let palette = Palette::default();
        let config = RenderConfig::default();
        let fonts = FixedWidthMeasurer::default();
        let ctx = RenderCtx::new(&palette, &fonts, &config);

        let report = runner.run(&jobs(&dir), &ctx);
        assert_eq!(report.total(), 5);
        assert_eq!(report.succeeded.len(), 3);
        assert!(!report.is_success());
        let failed: Vec<&str> = report.failed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(failed, ["bad", "empty"]);
        assert!(matches!(report.failed[0].error, RenderError::UnknownColor(_)));
        assert!(matches!(report.failed[1].error, RenderError::InvalidDimension(_)));
        assert!(dir.join("good.png").exists());
        assert!(dir.join("icon.png").exists());
        assert!(dir.join("good-again.png").exists());
        assert!(!dir.join("bad.png").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn failures_do_not_stop_siblings_sequential() {
        check_isolation(BatchRunner::sequential(), "seq");
    }

    #[test]
    fn failures_do_not_stop_siblings_parallel() {
        check_isolation(BatchRunner::new(3), "par");
    }

    #[test]
    fn report_keeps_job_order() {
        let dir = temp_dir("order");
        let jobs = jobs(&dir);
        let report = BatchRunner::new(4).run_with(&jobs, |job| {
            if job.name == "good" { Ok(()) } else { Err(RenderError::dimension("nope")) }
        });
        assert_eq!(report.succeeded, [dir.join("good.png"), dir.join("good-again.png")]);
        assert_eq!(report.failed.len(), 3);
    }

    #[test]
    fn icon_job_names() {
        let job = RenderJob::icon(Arc::new(IconDesign::chat_bubbles()), 87, 87, "x.png");
        assert_eq!(job.name, "chat_bubbles@87x87");
    }
}
