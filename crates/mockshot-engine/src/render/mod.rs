//! CPU rendering.
//!
//! Executes scene draw lists onto a [`Canvas`](crate::raster::Canvas).
//! Geometry is already in integer pixels (top-left origin, +Y down) and
//! colors are already resolved when commands reach this layer.

mod ctx;
mod executor;
mod text;

pub use ctx::RenderCtx;
pub use executor::render_list;
