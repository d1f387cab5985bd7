use crate::coords::PixelRect;
use crate::paint::Fill;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::shapes::{RoundedRect, Stroke};

impl DrawList {
    #[inline]
    pub fn push_rounded_rect(&mut self, z: ZIndex, rect: RoundedRect) {
        self.push(z, DrawCmd::RoundedRect(rect));
    }

    /// Records a rounded rectangle from its parts.
    #[inline]
    pub fn push_rounded_box(
        &mut self,
        z: ZIndex,
        bounds: PixelRect,
        radius: i32,
        fill: Option<Fill>,
        outline: Option<Stroke>,
    ) {
        self.push_rounded_rect(z, RoundedRect { bounds, radius, fill, outline });
    }
}
