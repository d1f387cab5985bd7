//! Mockshot engine crate.
//!
//! A CPU raster engine that composes static mock screens (chat UIs, banners)
//! and app icons from a handful of primitives: gradients, rounded rectangles,
//! circle markers and greedy-wrapped text.
//!
//! Layering, leaf first:
//! - [`raster`]: the [`Canvas`](raster::Canvas) pixel grid and coverage masks
//! - [`paint`]: colors, fills, gradients and the named [`Palette`](paint::Palette)
//! - [`shapes`]: rounded rectangles and circle markers composed onto a canvas
//! - [`text`]: font capability, fixed-width fallback and greedy word-wrap
//! - [`scene`]: draw lists and declarative [`SceneTemplate`](scene::SceneTemplate)s
//! - [`icon`]: multi-resolution icon designs
//! - [`render`]: executes draw lists onto a canvas
//! - [`batch`]: renders independent jobs and reports per-image failures

pub mod batch;
pub mod config;
pub mod coords;
pub mod error;
pub mod icon;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod render;
pub mod scene;
pub mod shapes;
pub mod text;

pub use config::RenderConfig;
pub use error::{RenderError, Result};
