use crate::coords::Point;
use crate::paint::Fill;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::shapes::{Circle, Stroke};

impl DrawList {
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Point,
        radius: i32,
        fill: Option<Fill>,
        outline: Option<Stroke>,
    ) {
        self.push(z, DrawCmd::Circle(Circle { center, radius, fill, outline }));
    }

    /// Records a filled circle marker.
    #[inline]
    pub fn push_marker(&mut self, z: ZIndex, center: Point, radius: i32, fill: Fill) {
        self.push_circle(z, center, radius, Some(fill), None);
    }
}
