use crate::coords::{PixelRect, Point};
use crate::error::{RenderError, Result};
use crate::paint::Fill;
use crate::raster::Canvas;
use crate::render::{render_list, RenderCtx};
use crate::scene::{DrawList, ZIndex};
use crate::shapes::{RoundedRect, Stroke};
use crate::text::TextBlock;

use super::{
    Align, Bar, Block, Caption, Label, MAX_COORD, Marker, Placement, SceneOp, SceneTemplate, StrokeRef,
    TextStyle,
};

impl SceneTemplate {
    /// Lays the template out into a draw list.
    ///
    /// Wrapping is measured with `ctx.fonts`, colors are resolved against
    /// `ctx.palette`. Content past the canvas edges is kept; the canvas crops
    /// it when painting. Every op lands on one layer in declaration order, so
    /// a later op covers the text of an earlier one.
    pub fn compile(&self, ctx: &RenderCtx<'_>) -> Result<DrawList> {
        if self.width == 0 || self.height == 0 || self.width > MAX_COORD as u32 || self.height > MAX_COORD as u32 {
            return Err(RenderError::dimension(format!(
                "scene {:?} has size {}x{}",
                self.name, self.width, self.height
            )));
        }

        let mut list = DrawList::new();
        list.push_fill(ZIndex::BACKGROUND, None, self.background.resolve(ctx.palette)?);

        let mut layout = Layout {
            ctx,
            list: &mut list,
            width: self.width as i32,
            height: self.height as i32,
            cursor: pos(self.cursor_start, "cursor")?,
            margin: len(self.block_margin.unwrap_or(ctx.config.block_margin), "block margin")?,
        };
        for op in &self.ops {
            layout.op(op)?;
        }
        log::trace!("scene {:?}: {} draw commands", self.name, list.len());
        Ok(list)
    }

    /// Renders onto a fresh canvas.
    pub fn render(&self, ctx: &RenderCtx<'_>) -> Result<Canvas> {
        let list = self.compile(ctx)?;
        let mut canvas = Canvas::new(self.width, self.height)?;
        render_list(&list, &mut canvas, ctx.fonts)?;
        Ok(canvas)
    }
}

/// Checks that `v` is within `±MAX_COORD`.
fn coord(v: i64, what: &str) -> Result<i32> {
    if v.abs() > i64::from(MAX_COORD) {
        return Err(RenderError::geometry(format!("{what} {v} is outside ±{MAX_COORD}")));
    }
    Ok(v as i32)
}

#[inline]
fn pos(v: i32, what: &str) -> Result<i32> {
    coord(v.into(), what)
}

#[inline]
fn len(v: u32, what: &str) -> Result<i32> {
    coord(v.into(), what)
}

struct Layout<'l, 'c> {
    ctx: &'l RenderCtx<'c>,
    list: &'l mut DrawList,
    width: i32,
    height: i32,
    cursor: i32,
    margin: i32,
}

impl Layout<'_, '_> {
    fn op(&mut self, op: &SceneOp) -> Result<()> {
        match op {
            SceneOp::Bar(bar) => self.bar(bar),
            SceneOp::Block(block) => self.block(block),
            SceneOp::Label(label) => self.label(label),
            SceneOp::Marker(marker) => self.marker(marker),
            SceneOp::Spacer(dy) => self.move_cursor(i64::from(self.cursor) + i64::from(*dy)),
            SceneOp::Cursor(y) => {
                self.cursor = self.from_top(pos(*y, "cursor")?);
                Ok(())
            }
        }
    }

    fn move_cursor(&mut self, y: i64) -> Result<()> {
        self.cursor = coord(y, "cursor")?;
        Ok(())
    }

    #[inline]
    fn from_top(&self, y: i32) -> i32 {
        if y < 0 { self.height + y } else { y }
    }

    fn top(&self, placement: Placement) -> Result<i32> {
        match placement {
            Placement::Flow => Ok(self.cursor),
            Placement::At(y) => Ok(self.from_top(pos(y, "y")?)),
        }
    }

    fn line_height(&self, style: &TextStyle) -> Result<i32> {
        let px = style.line_height.unwrap_or_else(|| self.ctx.config.line_height(style.size));
        len(px, "line height")
    }

    fn measure(&self, text: &str, style: &TextStyle) -> i32 {
        let w = self.ctx.fonts.measure(text, style.size, style.bold).round();
        w.clamp(0.0, MAX_COORD as f32) as i32
    }

    fn stroke(&self, outline: &Option<StrokeRef>) -> Result<Option<Stroke>> {
        outline
            .as_ref()
            .map(|s| {
                len(s.width, "outline width")?;
                Ok(Stroke::new(self.ctx.color(&s.color)?, s.width))
            })
            .transpose()
    }

    fn text(&mut self, text: &str, style: &TextStyle, origin: Point) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let color = self.ctx.color(&style.color)?;
        self.list.push_text(ZIndex::CONTENT, text, origin, style.size, style.bold, color);
        Ok(())
    }

    /// Left x of a line of width `w` aligned inside `[x1, x2]`.
    fn align_in(align: Align, x1: i32, x2: i32, w: i32) -> i32 {
        match align {
            Align::Leading => x1,
            Align::Center => x1 + (x2 - x1 - w) / 2,
            Align::Trailing => x2 - w,
        }
    }

    fn bar(&mut self, bar: &Bar) -> Result<()> {
        let top = self.from_top(pos(bar.y, "bar y")?);
        let height = len(bar.height, "bar height")?;
        let inset = len(bar.inset, "bar inset")?;
        let pad = len(bar.padding, "bar padding")?;
        let fill = bar.fill.as_ref().map(|c| self.ctx.color(c)).transpose()?;
        let outline = self.stroke(&bar.outline)?;

        // Zero height, or insets that meet, leave nothing to paint.
        let bounds = PixelRect::new(inset, top, self.width - 1 - inset, top + height - 1);
        if bounds.is_empty() {
            log::trace!("bar at y={top} is empty; skipped");
            return Ok(());
        }

        if bar.radius == 0 && outline.is_none() {
            if let Some(fill) = fill {
                self.list.push_solid_fill(ZIndex::CONTENT, Some(bounds), fill);
            }
        } else {
            let rect = RoundedRect { bounds, radius: bar.radius, fill: fill.map(Fill::solid), outline };
            self.list.push_rounded_rect(ZIndex::CONTENT, rect);
        }

        let lines: Vec<&Caption> = bar.title.iter().chain(bar.subtitle.iter()).collect();
        let mut total = 0;
        for caption in &lines {
            total += self.line_height(&caption.style)?;
        }
        let mut y = top + (height - total) / 2;
        for caption in lines {
            let w = self.measure(&caption.text, &caption.style);
            let x = Self::align_in(bar.align, bounds.x1 + pad, bounds.x2 - pad, w);
            self.text(&caption.text, &caption.style, Point::new(x, y))?;
            y += self.line_height(&caption.style)?;
        }
        Ok(())
    }

    fn block(&mut self, block: &Block) -> Result<()> {
        let mut bw = block.width.resolve(self.width as u32);
        if let Some(max) = block.max_width {
            bw = bw.min(max);
        }
        let bw = len(bw, "block width")?;
        let margin = len(block.margin, "block margin")?;
        let px = len(block.padding_x, "block padding")?;
        let py = len(block.padding_y, "block padding")?;
        let glyph_r = match &block.glyph {
            Some(g) => Some(len(g.radius, "glyph radius")?),
            None => None,
        };

        let x1 = match block.align {
            Align::Leading => margin,
            Align::Center => (self.width - bw) / 2,
            Align::Trailing => self.width - margin - bw,
        };

        let glyph_w = glyph_r.map_or(0, |r| 2 * r + px);
        let text_x = x1 + px + glyph_w;
        let text_max = (bw - 2 * px - glyph_w).max(1);

        let lh = self.line_height(&block.style)?;
        let lines = if block.text.is_empty() {
            Vec::new()
        } else {
            TextBlock::new(block.text.as_str(), block.style.size, text_max as f32, lh as u32)
                .bold(block.style.bold)
                .lines(self.ctx.fonts)
        };
        let caption_h = match &block.caption {
            Some(c) => self.line_height(&c.style)?,
            None => 0,
        };
        let content_h = coord(i64::from(caption_h) + lines.len() as i64 * i64::from(lh), "block height")?;
        let height = content_h.max(glyph_r.map_or(0, |r| 2 * r)) + 2 * py;

        let top = self.top(block.placement)?;
        let rect = RoundedRect {
            bounds: PixelRect::new(x1, top, x1 + bw, top + height),
            radius: block.radius,
            fill: Some(Fill::solid(self.ctx.color(&block.fill)?)),
            outline: self.stroke(&block.outline)?,
        };
        self.list.push_rounded_rect(ZIndex::CONTENT, rect);

        if let (Some(glyph), Some(r)) = (&block.glyph, glyph_r) {
            let center = Point::new(x1 + px + r, top + py + r);
            let fill = Fill::solid(self.ctx.color(&glyph.fill)?);
            self.list.push_marker(ZIndex::CONTENT, center, r, fill);
            if let Some(label) = &glyph.label {
                self.centered_text(label, center)?;
            }
        }

        let mut y = top + py;
        if let Some(caption) = &block.caption {
            self.text(&caption.text, &caption.style, Point::new(text_x, y))?;
            y += caption_h;
        }
        for line in &lines {
            self.text(line, &block.style, Point::new(text_x, y))?;
            y += lh;
        }

        if block.placement == Placement::Flow {
            self.move_cursor(i64::from(top) + i64::from(height) + i64::from(self.margin))?;
        }
        Ok(())
    }

    fn centered_text(&mut self, caption: &Caption, center: Point) -> Result<()> {
        let w = self.measure(&caption.text, &caption.style);
        let lh = self.line_height(&caption.style)?;
        self.text(&caption.text, &caption.style, Point::new(center.x - w / 2, center.y - lh / 2))
    }

    fn label(&mut self, label: &Label) -> Result<()> {
        let w = self.measure(&label.text, &label.style);
        let lh = self.line_height(&label.style)?;
        let anchor_x = match label.x {
            Some(x) => pos(x, "label x")?,
            None => match label.anchor {
                Align::Leading => 0,
                Align::Center => self.width / 2,
                Align::Trailing => self.width,
            },
        };
        let x = match label.anchor {
            Align::Leading => anchor_x,
            Align::Center => anchor_x - w / 2,
            Align::Trailing => anchor_x - w,
        };
        let top = self.top(label.placement)?;
        self.text(&label.text, &label.style, Point::new(x, top))?;
        if label.placement == Placement::Flow {
            self.move_cursor(i64::from(top) + i64::from(lh))?;
        }
        Ok(())
    }

    fn marker(&mut self, marker: &Marker) -> Result<()> {
        let center = Point::new(
            pos(marker.center.x, "marker x")?,
            self.from_top(pos(marker.center.y, "marker y")?),
        );
        let radius = pos(marker.radius, "marker radius")?;
        let fill = Fill::solid(self.ctx.color(&marker.fill)?);
        let outline = self.stroke(&marker.outline)?;
        self.list.push_circle(ZIndex::CONTENT, center, radius, Some(fill), outline);
        if let Some(label) = &marker.label {
            self.centered_text(label, center)?;
        }
        Ok(())
    }
}
