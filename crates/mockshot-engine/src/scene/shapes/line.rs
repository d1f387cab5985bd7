use crate::coords::Point;
use crate::paint::Fill;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Straight stroke payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Point,
    pub to: Point,
    pub width: u32,
    pub fill: Fill,
}

impl DrawList {
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Point, to: Point, width: u32, fill: Fill) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, width, fill }));
    }
}
