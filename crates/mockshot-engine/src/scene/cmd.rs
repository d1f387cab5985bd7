use crate::scene::shapes::{ArcCmd, EllipseCmd, FillCmd, LineCmd, TextCmd};
use crate::shapes::{Circle, RoundedRect};

/// Draw command stream executed by [`render_list`](crate::render::render_list).
///
/// Extending the scene:
/// - add a payload module under `scene::shapes::*` with its push helpers
/// - add a variant here
/// - handle it in `render::executor`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill(FillCmd),
    RoundedRect(RoundedRect),
    Circle(Circle),
    Ellipse(EllipseCmd),
    Arc(ArcCmd),
    Line(LineCmd),
    Text(TextCmd),
}
