//! CPU pixel storage.
//!
//! [`Canvas`] owns the pixels; [`Coverage`] is a scratch mask shapes are
//! composed into before a single blend pass.

mod canvas;
mod coverage;

pub use canvas::Canvas;
pub use coverage::Coverage;
