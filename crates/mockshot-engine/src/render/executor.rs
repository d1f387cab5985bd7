use crate::error::Result;
use crate::raster::Canvas;
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontProvider;

use super::text::draw_line;

/// Executes `list` back-to-front onto `canvas`.
///
/// Stops at the first command that fails validation; pixels painted by
/// earlier commands stay on the canvas.
pub fn render_list(list: &DrawList, canvas: &mut Canvas, fonts: &dyn FontProvider) -> Result<()> {
    for item in list.paint_order() {
        match &item.cmd {
            DrawCmd::Fill(cmd) => cmd.paint.apply(canvas, cmd.region)?,
            DrawCmd::RoundedRect(rect) => rect.paint(canvas)?,
            DrawCmd::Circle(circle) => circle.paint(canvas)?,
            DrawCmd::Ellipse(cmd) => canvas.fill_ellipse(cmd.bounds, cmd.fill),
            DrawCmd::Arc(cmd) => canvas.stroke_arc(cmd.bounds, cmd.start_deg, cmd.end_deg, cmd.width, cmd.fill),
            DrawCmd::Line(cmd) => canvas.stroke_line(cmd.from, cmd.to, cmd.width, cmd.fill),
            DrawCmd::Text(cmd) => draw_line(canvas, fonts, cmd),
        }
    }
    Ok(())
}
