use crate::coords::PixelRect;
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Region fill payload (backgrounds, gradient buttons).
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    /// `None` = the whole canvas.
    pub region: Option<PixelRect>,
    pub paint: Paint,
}

impl DrawList {
    #[inline]
    pub fn push_fill(&mut self, z: ZIndex, region: Option<PixelRect>, paint: Paint) {
        self.push(z, DrawCmd::Fill(FillCmd { region, paint }));
    }

    #[inline]
    pub fn push_solid_fill(&mut self, z: ZIndex, region: Option<PixelRect>, color: Color) {
        self.push_fill(z, region, Paint::solid(color));
    }
}
