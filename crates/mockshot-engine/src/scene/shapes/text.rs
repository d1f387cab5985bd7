use crate::coords::Point;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// One already-wrapped line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Top-left of the line box.
    pub origin: Point,
    /// Font size in pixels.
    pub size: f32,
    pub bold: bool,
    pub color: Color,
}

impl DrawList {
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        origin: Point,
        size: f32,
        bold: bool,
        color: Color,
    ) {
        self.push(z, DrawCmd::Text(TextCmd { text: text.into(), origin, size, bold, color }));
    }
}
