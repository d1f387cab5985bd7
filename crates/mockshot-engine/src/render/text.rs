use crate::paint::Fill;
use crate::raster::Canvas;
use crate::scene::shapes::TextCmd;
use crate::text::FontProvider;

/// Blends the glyphs of one line onto the canvas.
///
/// Does nothing when the provider has no outlines; layout has already
/// reserved the space.
pub(crate) fn draw_line(canvas: &mut Canvas, fonts: &dyn FontProvider, cmd: &TextCmd) {
    if !fonts.shaping_available() || cmd.text.is_empty() {
        return;
    }
    let fill = Fill::solid(cmd.color);
    for glyph in fonts.layout_glyphs(&cmd.text, cmd.size, cmd.bold) {
        let gx = cmd.origin.x + glyph.x;
        let gy = cmd.origin.y + glyph.y;
        for (i, &coverage) in glyph.coverage.iter().enumerate() {
            if coverage == 0 {
                continue;
            }
            let x = gx + (i % glyph.width) as i32;
            let y = gy + (i / glyph.width) as i32;
            canvas.blend_pixel(x, y, fill.with_coverage(coverage));
        }
    }
}
