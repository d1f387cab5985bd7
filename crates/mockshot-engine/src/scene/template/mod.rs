//! Declarative screen descriptions.
//!
//! A [`SceneTemplate`] is a canvas size, a background and an ordered list of
//! [`SceneOp`]s evaluated top to bottom. Flowing ops stack downward from a
//! vertical cursor; absolutely placed ops ignore and keep it. Later ops paint
//! over earlier ones.

mod layout;

use crate::coords::Point;
use crate::error::Result;
use crate::paint::{Color, ColorRef, GradientAxis, GradientSpec, Paint, Palette};

/// Largest magnitude, in pixels, of any size, offset or cursor position in a
/// template. Compiling a template that exceeds it fails with
/// [`RenderError::InvalidGeometry`](crate::error::RenderError::InvalidGeometry).
pub const MAX_COORD: i32 = 1 << 20;

/// Palette-relative stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRef {
    pub color: ColorRef,
    pub width: u32,
}

impl StrokeRef {
    #[inline]
    pub fn new(color: impl Into<ColorRef>, width: u32) -> Self {
        Self { color: color.into(), width }
    }
}

/// Canvas-wide background.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Solid(ColorRef),
    Gradient {
        start: ColorRef,
        end: ColorRef,
        axis: GradientAxis,
    },
}

impl Background {
    #[inline]
    pub fn vertical(start: impl Into<ColorRef>, end: impl Into<ColorRef>) -> Self {
        Background::Gradient { start: start.into(), end: end.into(), axis: GradientAxis::VERTICAL }
    }

    pub fn resolve(&self, palette: &Palette) -> Result<Paint> {
        Ok(match self {
            Background::Solid(c) => Paint::solid(palette.resolve(c)?),
            Background::Gradient { start, end, axis } => {
                Paint::Gradient(GradientSpec::new(palette.resolve(start)?, palette.resolve(end)?, *axis))
            }
        })
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid(ColorRef::Rgb(Color::BLACK))
    }
}

/// Vertical placement of an op.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Placement {
    /// At the cursor; the cursor then moves past the op.
    #[default]
    Flow,
    /// Fixed top edge. Negative values count up from the canvas bottom.
    At(i32),
}

/// Horizontal alignment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Leading,
    Center,
    Trailing,
}

/// Block width, capped by the block's `max_width`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BlockWidth {
    Pixels(u32),
    /// Fraction of the canvas width.
    Fraction(f32),
}

impl BlockWidth {
    #[inline]
    pub fn resolve(self, canvas_width: u32) -> u32 {
        match self {
            BlockWidth::Pixels(px) => px,
            BlockWidth::Fraction(f) => (canvas_width as f32 * f.max(0.0)) as u32,
        }
    }
}

/// Font size, weight, color and optional fixed line height.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    pub color: ColorRef,
    /// `None` derives the line height from the size.
    pub line_height: Option<u32>,
}

impl TextStyle {
    #[inline]
    pub fn new(size: f32, color: impl Into<ColorRef>) -> Self {
        Self { size, bold: false, color: color.into(), line_height: None }
    }

    #[inline]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[inline]
    pub fn with_line_height(mut self, px: u32) -> Self {
        self.line_height = Some(px);
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(16.0, ColorRef::named("text_primary"))
    }
}

/// A single styled line.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    pub style: TextStyle,
}

impl Caption {
    #[inline]
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self { text: text.into(), style }
    }
}

/// Circle icon drawn at the leading edge of a block.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub radius: u32,
    pub fill: ColorRef,
    pub label: Option<Caption>,
}

/// Header, footer, status or input bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Top edge; negative counts up from the bottom.
    pub y: i32,
    pub height: u32,
    /// Horizontal inset from both canvas edges.
    pub inset: u32,
    pub radius: i32,
    pub fill: Option<ColorRef>,
    pub outline: Option<StrokeRef>,
    pub title: Option<Caption>,
    pub subtitle: Option<Caption>,
    pub align: Align,
    pub padding: u32,
}

impl Bar {
    pub fn new(y: i32, height: u32, fill: impl Into<ColorRef>) -> Self {
        Self {
            y,
            height,
            inset: 0,
            radius: 0,
            fill: Some(fill.into()),
            outline: None,
            title: None,
            subtitle: None,
            align: Align::Leading,
            padding: 20,
        }
    }

    #[inline]
    pub fn with_title(mut self, title: Caption) -> Self {
        self.title = Some(title);
        self
    }
}

/// Message bubble, card or panel with wrapped text.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub text: String,
    pub style: TextStyle,
    /// Single line above the body, usually bold.
    pub caption: Option<Caption>,
    pub glyph: Option<Glyph>,
    pub fill: ColorRef,
    pub outline: Option<StrokeRef>,
    pub radius: i32,
    pub align: Align,
    pub width: BlockWidth,
    pub max_width: Option<u32>,
    /// Gap between the block and the canvas edge it aligns to.
    pub margin: u32,
    pub padding_x: u32,
    pub padding_y: u32,
    pub placement: Placement,
}

impl Block {
    /// Chat-bubble defaults: 75% of the canvas up to 400 px, 18 px corners.
    pub fn new(text: impl Into<String>, fill: impl Into<ColorRef>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
            caption: None,
            glyph: None,
            fill: fill.into(),
            outline: None,
            radius: 18,
            align: Align::Leading,
            width: BlockWidth::Fraction(0.75),
            max_width: Some(400),
            margin: 20,
            padding_x: 15,
            padding_y: 10,
            placement: Placement::Flow,
        }
    }

    #[inline]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    #[inline]
    pub fn width(mut self, width: BlockWidth) -> Self {
        self.width = width;
        self
    }

    #[inline]
    pub fn max_width(mut self, max_width: Option<u32>) -> Self {
        self.max_width = max_width;
        self
    }

    #[inline]
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn caption(mut self, caption: Caption) -> Self {
        self.caption = Some(caption);
        self
    }

    #[inline]
    pub fn glyph(mut self, glyph: Glyph) -> Self {
        self.glyph = Some(glyph);
        self
    }

    #[inline]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}

/// One line of free-standing text.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub style: TextStyle,
    /// Which side of the text sits on `x`.
    pub anchor: Align,
    /// Anchor x. `None` uses the canvas edge (or center) matching `anchor`.
    pub x: Option<i32>,
    pub placement: Placement,
}

impl Label {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self { text: text.into(), style, anchor: Align::Leading, x: None, placement: Placement::Flow }
    }

    #[inline]
    pub fn centered(mut self) -> Self {
        self.anchor = Align::Center;
        self
    }

    #[inline]
    pub fn at(mut self, x: i32, placement: Placement) -> Self {
        self.x = Some(x);
        self.placement = placement;
        self
    }
}

/// Circle marker at a fixed position (avatars, status dots).
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub center: Point,
    pub radius: i32,
    pub fill: ColorRef,
    pub outline: Option<StrokeRef>,
    /// Centered inside the circle.
    pub label: Option<Caption>,
}

impl Marker {
    #[inline]
    pub fn new(center: Point, radius: i32, fill: impl Into<ColorRef>) -> Self {
        Self { center, radius, fill: fill.into(), outline: None, label: None }
    }
}

/// One step of a scene script.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneOp {
    Bar(Bar),
    Block(Block),
    Label(Label),
    Marker(Marker),
    /// Moves the cursor down.
    Spacer(u32),
    /// Sets the cursor; negative counts up from the bottom.
    Cursor(i32),
}

/// A named screen: canvas size, background and ordered ops.
///
/// Built per output file, rendered once and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneTemplate {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub background: Background,
    /// Initial cursor y for flowing ops.
    pub cursor_start: i32,
    /// Gap after each flowing block; `None` uses the render config.
    pub block_margin: Option<u32>,
    pub ops: Vec<SceneOp>,
}

impl SceneTemplate {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            background: Background::default(),
            cursor_start: 0,
            block_margin: None,
            ops: Vec::new(),
        }
    }

    #[inline]
    pub fn background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    #[inline]
    pub fn cursor_start(mut self, y: i32) -> Self {
        self.cursor_start = y;
        self
    }

    #[inline]
    pub fn block_margin(mut self, margin: u32) -> Self {
        self.block_margin = Some(margin);
        self
    }

    #[inline]
    pub fn op(mut self, op: SceneOp) -> Self {
        self.ops.push(op);
        self
    }

    #[inline]
    pub fn push(&mut self, op: SceneOp) {
        self.ops.push(op);
    }
}
