//! Scene description and draw streams.
//!
//! Responsibilities:
//! - store draw commands with deterministic ordering (layer + insertion order)
//! - keep per-command push helpers isolated under `scene::shapes`
//! - compile declarative [`SceneTemplate`]s into draw lists

mod cmd;
mod key;
mod list;
mod template;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
pub use template::{
    Align, Background, Bar, Block, BlockWidth, Caption, Glyph, Label, MAX_COORD, Marker,
    Placement, SceneOp, SceneTemplate, StrokeRef, TextStyle,
};
