use crate::coords::{PixelRect, Point};
use crate::error::{RenderError, Result};
use crate::paint::{Color, ColorRef, Fill, GradientAxis};
use crate::raster::Canvas;
use crate::render::{render_list, RenderCtx};
use crate::scene::{Background, DrawList, ZIndex};
use crate::shapes::Stroke;

use super::{IconScale, Len};

/// Offset from the canvas center, in reference pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Offset {
    pub dx: Len,
    pub dy: Len,
}

impl Offset {
    pub const CENTER: Offset = Offset::new(0.0, 0.0);

    #[inline]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx: Len::offset(dx), dy: Len::offset(dy) }
    }

    #[inline]
    fn resolve(self, origin: Point, s: &IconScale) -> Point {
        Point::new(origin.x + s.px(self.dx), origin.y + s.px(self.dy))
    }
}

/// One drawable part of an icon, described at the reference size.
#[derive(Debug, Clone, PartialEq)]
pub enum IconElement {
    /// Rounded rectangle centered on `center`.
    Bubble {
        center: Offset,
        width: Len,
        height: Len,
        radius: Len,
        fill: ColorRef,
        alpha: u8,
    },
    /// Circle with optional ring.
    Node {
        center: Offset,
        radius: Len,
        fill: ColorRef,
        outline: Option<(ColorRef, Len)>,
    },
    /// Filled ellipse centered on `center`.
    Ellipse {
        center: Offset,
        width: Len,
        height: Len,
        fill: ColorRef,
    },
    /// Stroke along part of an ellipse. Angles run clockwise from +X.
    Arc {
        center: Offset,
        width: Len,
        height: Len,
        start_deg: f64,
        end_deg: f64,
        stroke: Len,
        color: ColorRef,
    },
    Segment {
        from: Offset,
        to: Offset,
        width: Len,
        color: ColorRef,
    },
    /// Text centered on `center`; dropped at very small sizes.
    Label {
        text: String,
        center: Offset,
        size: Len,
        bold: bool,
        color: ColorRef,
    },
}

/// Box of `w × h` pixels centered on `c`, laid out like the bubbles.
fn centered_box(c: Point, w: i32, h: i32) -> PixelRect {
    let x1 = c.x - w / 2;
    let y1 = c.y - h / 2;
    PixelRect::new(x1, y1, x1 + w, y1 + h)
}

/// A logical icon rendered natively at each target size.
#[derive(Debug, Clone, PartialEq)]
pub struct IconDesign {
    pub name: String,
    /// Width at which lengths are used unscaled. `None` uses
    /// [`IconConfig::reference_size`](super::IconConfig::reference_size).
    pub reference_width: Option<u32>,
    pub background: Background,
    pub elements: Vec<IconElement>,
}

impl IconDesign {
    /// Looks up a built-in design by short name.
    pub fn builtin(name: &str) -> Option<IconDesign> {
        match name {
            "chat" | "chat_bubbles" => Some(Self::chat_bubbles()),
            "brand" | "brain_bridge" => Some(Self::brain_bridge()),
            "logo" | "mindbridge_logo" => Some(Self::mindbridge_logo()),
            "avatar" | "github_avatar" => Some(Self::github_avatar()),
            _ => None,
        }
    }

    /// Sky gradient, two translucent speech bubbles and an outlined "AI"
    /// badge with a circuit cross.
    pub fn chat_bubbles() -> IconDesign {
        let ink = || ColorRef::named("icon_ink");
        let white = || ColorRef::Rgb(Color::WHITE);
        let arm = 80.0 / 3.0;
        IconDesign {
            name: "chat_bubbles".into(),
            reference_width: None,
            background: Background::vertical(ColorRef::named("icon_sky_top"), ColorRef::named("icon_sky_bottom")),
            elements: vec![
                IconElement::Bubble {
                    center: Offset::new(0.0, -50.0),
                    width: Len::feature(300.0),
                    height: Len::feature(200.0),
                    radius: Len::feature(30.0),
                    fill: white(),
                    alpha: 200,
                },
                IconElement::Bubble {
                    center: Offset::new(120.0, 90.0),
                    width: Len::feature(200.0),
                    height: Len::feature(120.0),
                    radius: Len::feature(20.0),
                    fill: white(),
                    alpha: 150,
                },
                IconElement::Node {
                    center: Offset::new(0.0, 100.0),
                    radius: Len::feature(40.0),
                    fill: white(),
                    outline: Some((ink(), Len::feature(4.0))),
                },
                IconElement::Segment {
                    from: Offset::new(-arm, 100.0),
                    to: Offset::new(arm, 100.0),
                    width: Len::feature(2.0),
                    color: ink(),
                },
                IconElement::Segment {
                    from: Offset::new(0.0, 100.0 - arm),
                    to: Offset::new(0.0, 100.0 + arm),
                    width: Len::feature(2.0),
                    color: ink(),
                },
                IconElement::Label {
                    text: "AI".into(),
                    center: Offset::new(0.0, 100.0),
                    size: Len::at_least(40.0, 12),
                    bold: false,
                    color: ink(),
                },
            ],
        }
    }

    /// Radial brand gradient with two nodes bridged by a line.
    pub fn brain_bridge() -> IconDesign {
        IconDesign {
            name: "brain_bridge".into(),
            reference_width: None,
            background: Background::Gradient {
                start: ColorRef::named("brand_primary"),
                end: ColorRef::named("brand_accent"),
                axis: GradientAxis::RADIAL,
            },
            elements: bridge_mark(200.0),
        }
    }

    /// 800x300 wordmark: a brain, a particle bridge and a phone over the
    /// brand ramp, with the name and tagline below the brain.
    pub fn mindbridge_logo() -> IconDesign {
        let light = || ColorRef::named("brand_light");
        let accent = || ColorRef::named("brand_accent");
        let brain_x = -120.0;

        let mut elements = vec![IconElement::Ellipse {
            center: Offset::new(brain_x, 0.0),
            width: Len::feature(64.0),
            height: Len::feature(48.0),
            fill: light(),
        }];
        for dy in [-15.0, 0.0, 15.0] {
            elements.push(IconElement::Arc {
                center: Offset::new(brain_x, dy),
                width: Len::feature(44.0),
                height: Len::feature(20.0),
                start_deg: 0.0,
                end_deg: 180.0,
                stroke: Len::feature(3.0),
                color: light(),
            });
        }

        elements.push(IconElement::Segment {
            from: Offset::new(-40.0, 0.0),
            to: Offset::new(40.0, 0.0),
            width: Len::feature(4.0),
            color: accent(),
        });
        // Five particles at sixths of the bridge, alternating 3 and 5 px.
        for (i, dx) in [-27.0, -14.0, 0.0, 13.0, 26.0].into_iter().enumerate() {
            elements.push(IconElement::Node {
                center: Offset::new(dx, 0.0),
                radius: Len::feature(if i % 2 == 0 { 3.0 } else { 5.0 }),
                fill: accent(),
                outline: None,
            });
        }

        let device_x = 80.0;
        elements.push(IconElement::Bubble {
            center: Offset::new(device_x, 0.0),
            width: Len::feature(24.0),
            height: Len::feature(42.0),
            radius: Len::feature(8.0),
            fill: light(),
            alpha: 255,
        });
        elements.push(IconElement::Bubble {
            center: Offset::new(device_x, -2.0),
            width: Len::feature(16.0),
            height: Len::feature(22.0),
            radius: Len::feature(4.0),
            fill: ColorRef::Rgb(Color::rgb(100, 100, 100)),
            alpha: 255,
        });

        elements.push(IconElement::Label {
            text: "MindBridge".into(),
            center: Offset::new(brain_x, 60.0),
            size: Len::feature(48.0),
            bold: true,
            color: light(),
        });
        elements.push(IconElement::Label {
            text: "Private AI Assistant".into(),
            center: Offset::new(brain_x, 110.0),
            size: Len::feature(20.0),
            bold: false,
            color: light(),
        });

        IconDesign {
            name: "mindbridge_logo".into(),
            reference_width: Some(800),
            background: Background::vertical(ColorRef::named("brand_primary"), ColorRef::named("brand_accent")),
            elements,
        }
    }

    /// 400 px profile picture: the bridge mark at 150 px on a brand disk.
    pub fn github_avatar() -> IconDesign {
        let mut elements = vec![IconElement::Ellipse {
            center: Offset::CENTER,
            width: Len::feature(380.0),
            height: Len::feature(380.0),
            fill: ColorRef::named("brand_primary"),
        }];
        elements.extend(bridge_mark(150.0));
        IconDesign {
            name: "github_avatar".into(),
            reference_width: Some(400),
            background: Background::Solid(ColorRef::named("brand_primary")),
            elements,
        }
    }

    /// Lays the design out for a `width × height` canvas.
    pub fn compile(&self, width: u32, height: u32, ctx: &RenderCtx<'_>) -> Result<DrawList> {
        if width == 0 || height == 0 {
            return Err(RenderError::dimension(format!("icon size {width}x{height}")));
        }
        let config = &ctx.config.icon;
        let reference = self.reference_width.unwrap_or(config.reference_size);
        let s = IconScale::new(width, reference, config.min_feature_px);
        let origin = Point::new(width as i32 / 2, height as i32 / 2);
        let draw_text = s.scale > config.text_min_scale && ctx.fonts.shaping_available();

        let mut list = DrawList::new();
        list.push_fill(ZIndex::BACKGROUND, None, self.background.resolve(ctx.palette)?);

        for element in &self.elements {
            match element {
                IconElement::Bubble { center, width, height, radius, fill, alpha } => {
                    let bounds = centered_box(center.resolve(origin, &s), s.px(*width), s.px(*height));
                    let fill = Fill::translucent(ctx.color(fill)?, *alpha);
                    list.push_rounded_box(ZIndex::CONTENT, bounds, s.px(*radius), Some(fill), None);
                }
                IconElement::Node { center, radius, fill, outline } => {
                    let outline = match outline {
                        Some((color, w)) => Some(Stroke::new(ctx.color(color)?, s.px(*w) as u32)),
                        None => None,
                    };
                    let fill = Fill::solid(ctx.color(fill)?);
                    list.push_circle(ZIndex::CONTENT, center.resolve(origin, &s), s.px(*radius), Some(fill), outline);
                }
                IconElement::Ellipse { center, width, height, fill } => {
                    let bounds = centered_box(center.resolve(origin, &s), s.px(*width), s.px(*height));
                    list.push_ellipse(ZIndex::CONTENT, bounds, Fill::solid(ctx.color(fill)?));
                }
                IconElement::Arc { center, width, height, start_deg, end_deg, stroke, color } => {
                    let bounds = centered_box(center.resolve(origin, &s), s.px(*width), s.px(*height));
                    let fill = Fill::solid(ctx.color(color)?);
                    list.push_arc(ZIndex::CONTENT, bounds, *start_deg, *end_deg, s.px(*stroke) as u32, fill);
                }
                IconElement::Segment { from, to, width, color } => {
                    let fill = Fill::solid(ctx.color(color)?);
                    list.push_line(
                        ZIndex::CONTENT,
                        from.resolve(origin, &s),
                        to.resolve(origin, &s),
                        s.px(*width) as u32,
                        fill,
                    );
                }
                IconElement::Label { text, center, size, bold, color } => {
                    if !draw_text {
                        continue;
                    }
                    let size = s.px(*size) as f32;
                    let c = center.resolve(origin, &s);
                    let w = ctx.fonts.measure(text, size, *bold).round() as i32;
                    let h = ctx.fonts.ascent(size).round() as i32;
                    let at = Point::new(c.x - w / 2, c.y - h / 2);
                    list.push_text(ZIndex::CONTENT, text.as_str(), at, size, *bold, ctx.color(color)?);
                }
            }
        }
        Ok(list)
    }

    pub fn render(&self, width: u32, height: u32, ctx: &RenderCtx<'_>) -> Result<Canvas> {
        let list = self.compile(width, height, ctx)?;
        let mut canvas = Canvas::new(width, height)?;
        render_list(&list, &mut canvas, ctx.fonts)?;
        Ok(canvas)
    }
}

/// The brand mark drawn in a `size` px square: two nodes, the line between
/// their rims and a center node.
///
/// Node radii are 15% and 12% of `size`, placed 20% either side of the
/// center. The line and center node keep fixed widths with small-size floors.
fn bridge_mark(size: f32) -> Vec<IconElement> {
    let light = || ColorRef::named("brand_light");
    let node = |dx: f32, r: Len| IconElement::Node {
        center: Offset::new(dx, 0.0),
        radius: r,
        fill: light(),
        outline: None,
    };
    let left_r = (size * 0.15).floor();
    let right_r = (size * 0.12).floor();
    let reach = (size * 0.2).floor();
    vec![
        node(-reach, Len::feature(left_r)),
        node(reach, Len::feature(right_r)),
        IconElement::Segment {
            from: Offset::new(-reach + left_r, 0.0),
            to: Offset::new(reach - right_r, 0.0),
            width: Len::at_least(4.0, 2),
            color: light(),
        },
        node(0.0, Len::at_least(8.0, 3)),
    ]
}
