//! Builds [`SceneTemplate`]s from `.msml` documents.
//!
//! ```text
//! Scene "01_main_chat" {
//!     width: 1290  height: 2796  cursor: 455
//!     Background { start: #0f192d  end: #050a19 }
//!     Bar { y: 335  height: 80  inset: 97  radius: 20  fill: #1e1e23
//!         Title "Qwen3 Chat" { size: 24  bold: true }
//!     }
//!     Block "Hello!" { fill: user_bubble  align: trailing  margin: 117 }
//! }
//! ```
//!
//! Unknown node kinds and unknown props are errors, so typos surface at load
//! time instead of silently rendering defaults.

use std::fs;
use std::path::Path;

use anyhow::Context;
use mockshot_engine::coords::Point;
use mockshot_engine::paint::{Color, ColorRef, GradientAxis};
use mockshot_engine::scene::{
    Align, Background, Bar, Block, BlockWidth, Caption, Glyph, Label, MAX_COORD, Marker, Placement,
    SceneOp, SceneTemplate, StrokeRef, TextStyle,
};
use mockshot_markup::{Node, ParseError, Span, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("{span}: unknown node `{kind}` inside `{parent}`")]
    UnknownNode { parent: String, kind: String, span: Span },

    #[error("{span}: `{node}` has no property `{key}`")]
    UnknownProp { node: String, key: String, span: Span },

    #[error("{span}: `{node}` requires `{key}`")]
    MissingProp { node: String, key: &'static str, span: Span },

    #[error("{span}: `{node}.{key}` expects {expected}, got {found}")]
    InvalidProp { node: String, key: String, expected: &'static str, found: String, span: Span },
}

type Result<T> = std::result::Result<T, BuildError>;

/// Parses and builds one scene.
pub fn parse_scene(src: &str) -> Result<SceneTemplate> {
    let doc = mockshot_markup::parse_str(src)?;
    build_scene(&doc.root)
}

pub fn load_scene_file(path: &Path) -> anyhow::Result<SceneTemplate> {
    let src = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_scene(&src).with_context(|| format!("Failed to load scene {}", path.display()))
}

/// Every `*.msml` file in `dir`, sorted by file name.
pub fn load_scene_dir(dir: &Path) -> anyhow::Result<Vec<SceneTemplate>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "msml") {
            paths.push(path);
        }
    }
    paths.sort();
    log::debug!("found {} scene files in {}", paths.len(), dir.display());
    paths.iter().map(|p| load_scene_file(p)).collect()
}

// ── Prop access ───────────────────────────────────────────────────────────

const STYLE_KEYS: &[&str] = &["size", "bold", "color", "line_height"];
const OUTLINE_KEYS: &[&str] = &["outline", "outline_width"];

struct Props<'a> {
    node: &'a Node,
}

impl<'a> Props<'a> {
    fn new(node: &'a Node, allowed: &[&[&str]]) -> Result<Self> {
        if let Some(prop) = node.props.iter().find(|p| !allowed.iter().any(|keys| keys.contains(&p.key.as_str()))) {
            return Err(BuildError::UnknownProp {
                node: node.kind.clone(),
                key: prop.key.clone(),
                span: prop.span,
            });
        }
        Ok(Self { node })
    }

    fn invalid(&self, key: &str, expected: &'static str, value: &Value) -> BuildError {
        let span = self.node.prop_entry(key).map_or(self.node.span, |p| p.span);
        BuildError::InvalidProp {
            node: self.node.kind.clone(),
            key: key.to_string(),
            expected,
            found: format!("{} {value}", value.kind()),
            span,
        }
    }

    fn required<T>(&self, key: &'static str, value: Option<T>) -> Result<T> {
        value.ok_or_else(|| BuildError::MissingProp {
            node: self.node.kind.clone(),
            key,
            span: self.node.span,
        })
    }

    fn number(&self, key: &str) -> Result<Option<f32>> {
        match self.node.prop(key) {
            None => Ok(None),
            Some(Value::Number(n)) if n.is_finite() => Ok(Some(*n)),
            Some(v) => Err(self.invalid(key, "a number", v)),
        }
    }

    /// Whole number within `±MAX_COORD`.
    fn int(&self, key: &str) -> Result<Option<i32>> {
        match self.node.prop(key) {
            None => Ok(None),
            Some(Value::Number(n)) if n.fract() == 0.0 && n.abs() <= MAX_COORD as f32 => {
                Ok(Some(*n as i32))
            }
            Some(v) => Err(self.invalid(key, "a whole number between -1048576 and 1048576", v)),
        }
    }

    fn uint(&self, key: &str) -> Result<Option<u32>> {
        self.uint_from(key, 0, "a whole number between 0 and 1048576")
    }

    fn positive(&self, key: &str) -> Result<Option<u32>> {
        self.uint_from(key, 1, "a whole number between 1 and 1048576")
    }

    fn uint_from(&self, key: &str, min: u32, expected: &'static str) -> Result<Option<u32>> {
        match self.node.prop(key) {
            None => Ok(None),
            Some(Value::Number(n)) if n.fract() == 0.0 && *n >= min as f32 && *n <= MAX_COORD as f32 => {
                Ok(Some(*n as u32))
            }
            Some(v) => Err(self.invalid(key, expected, v)),
        }
    }

    fn flag(&self, key: &str) -> Result<Option<bool>> {
        match self.node.prop(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(v) => Err(self.invalid(key, "true or false", v)),
        }
    }

    /// `#rrggbb` literal or palette name. Colors carry no alpha.
    fn color(&self, key: &str) -> Result<Option<ColorRef>> {
        match self.node.prop(key) {
            None => Ok(None),
            Some(Value::Color([r, g, b, 255])) => Ok(Some(ColorRef::Rgb(Color::rgb(*r, *g, *b)))),
            Some(Value::Ident(name)) => Ok(Some(ColorRef::named(name.as_str()))),
            Some(v) => Err(self.invalid(key, "an opaque #rrggbb color or a palette name", v)),
        }
    }

    fn align(&self, key: &str) -> Result<Option<Align>> {
        match self.node.prop(key) {
            None => Ok(None),
            Some(v) => match v.as_ident() {
                Some("leading" | "left") => Ok(Some(Align::Leading)),
                Some("center") => Ok(Some(Align::Center)),
                Some("trailing" | "right") => Ok(Some(Align::Trailing)),
                _ => Err(self.invalid(key, "leading, center or trailing", v)),
            },
        }
    }

    fn placement(&self) -> Result<Placement> {
        Ok(self.int("y")?.map_or(Placement::Flow, Placement::At))
    }

    fn outline(&self) -> Result<Option<StrokeRef>> {
        let Some(color) = self.color("outline")? else {
            return Ok(None);
        };
        Ok(Some(StrokeRef::new(color, self.uint("outline_width")?.unwrap_or(1))))
    }

    /// Reads `size`, `bold`, `color` and `line_height` over `base`.
    fn style(&self, base: TextStyle) -> Result<TextStyle> {
        Ok(TextStyle {
            size: self.number("size")?.unwrap_or(base.size),
            bold: self.flag("bold")?.unwrap_or(base.bold),
            color: self.color("color")?.unwrap_or(base.color),
            line_height: self.uint("line_height")?.or(base.line_height),
        })
    }
}

fn unknown_child(parent: &Node, child: &Node) -> BuildError {
    BuildError::UnknownNode { parent: parent.kind.clone(), kind: child.kind.clone(), span: child.span }
}

fn text_of(node: &Node) -> String {
    node.content.clone().unwrap_or_default()
}

fn caption(node: &Node, base: TextStyle) -> Result<Caption> {
    let props = Props::new(node, &[STYLE_KEYS])?;
    if let Some(child) = node.children.first() {
        return Err(unknown_child(node, child));
    }
    Ok(Caption::new(text_of(node), props.style(base)?))
}

/// The single optional `Label` child used by glyphs and markers.
fn inner_label(node: &Node) -> Result<Option<Caption>> {
    let mut label = None;
    for child in &node.children {
        match child.kind.as_str() {
            "Label" => label = Some(caption(child, TextStyle::default())?),
            _ => return Err(unknown_child(node, child)),
        }
    }
    Ok(label)
}

// ── Nodes ─────────────────────────────────────────────────────────────────

pub fn build_scene(root: &Node) -> Result<SceneTemplate> {
    if root.kind != "Scene" {
        return Err(BuildError::UnknownNode {
            parent: "document".into(),
            kind: root.kind.clone(),
            span: root.span,
        });
    }
    let props = Props::new(root, &[&["width", "height", "cursor", "block_margin"]])?;
    let width = props.required("width", props.uint("width")?)?;
    let height = props.required("height", props.uint("height")?)?;

    let mut scene = SceneTemplate::new(root.content.clone().unwrap_or_else(|| "scene".into()), width, height);
    scene.cursor_start = props.int("cursor")?.unwrap_or(0);
    scene.block_margin = props.uint("block_margin")?;

    for child in &root.children {
        match child.kind.as_str() {
            "Background" => scene.background = background(child)?,
            "Bar" => scene.push(SceneOp::Bar(bar(child)?)),
            "Block" => scene.push(SceneOp::Block(block(child)?)),
            "Label" => scene.push(SceneOp::Label(label(child)?)),
            "Marker" => scene.push(SceneOp::Marker(marker(child)?)),
            "Spacer" => {
                let props = Props::new(child, &[&["height"]])?;
                scene.push(SceneOp::Spacer(props.required("height", props.uint("height")?)?));
            }
            "Cursor" => {
                let props = Props::new(child, &[&["y"]])?;
                scene.push(SceneOp::Cursor(props.required("y", props.int("y")?)?));
            }
            _ => return Err(unknown_child(root, child)),
        }
    }
    log::trace!("built scene {:?} with {} ops", scene.name, scene.ops.len());
    Ok(scene)
}

fn background(node: &Node) -> Result<Background> {
    let props = Props::new(node, &[&["color", "start", "end", "axis"]])?;
    if let Some(color) = props.color("color")? {
        return Ok(Background::Solid(color));
    }
    let start = props.required("start", props.color("start")?)?;
    let end = props.required("end", props.color("end")?)?;
    let axis = match node.prop("axis") {
        None => GradientAxis::VERTICAL,
        Some(v) => match v.as_ident() {
            Some("vertical") => GradientAxis::VERTICAL,
            Some("horizontal") => GradientAxis::HORIZONTAL,
            Some("radial") => GradientAxis::RADIAL,
            _ => return Err(props.invalid("axis", "vertical, horizontal or radial", v)),
        },
    };
    Ok(Background::Gradient { start, end, axis })
}

fn bar(node: &Node) -> Result<Bar> {
    let props = Props::new(
        node,
        &[&["y", "height", "inset", "radius", "fill", "align", "padding"], OUTLINE_KEYS],
    )?;
    let mut bar = Bar::new(
        props.required("y", props.int("y")?)?,
        props.required("height", props.positive("height")?)?,
        ColorRef::Rgb(Color::BLACK),
    );
    bar.fill = props.color("fill")?;
    bar.outline = props.outline()?;
    bar.inset = props.uint("inset")?.unwrap_or(0);
    bar.radius = props.int("radius")?.unwrap_or(0);
    bar.align = props.align("align")?.unwrap_or_default();
    bar.padding = props.uint("padding")?.unwrap_or(bar.padding);

    for child in &node.children {
        match child.kind.as_str() {
            "Title" => bar.title = Some(caption(child, TextStyle::new(24.0, "text_primary").bold())?),
            "Subtitle" => bar.subtitle = Some(caption(child, TextStyle::new(16.0, "text_secondary"))?),
            _ => return Err(unknown_child(node, child)),
        }
    }
    Ok(bar)
}

fn block(node: &Node) -> Result<Block> {
    let props = Props::new(
        node,
        &[
            &[
                "fill", "radius", "align", "width", "width_fraction", "max_width", "margin",
                "padding_x", "padding_y", "y",
            ],
            OUTLINE_KEYS,
            STYLE_KEYS,
        ],
    )?;
    let fill = props.color("fill")?.unwrap_or_else(|| ColorRef::named("ai_bubble"));
    let mut block = Block::new(text_of(node), fill)
        .style(props.style(TextStyle::default())?)
        .placement(props.placement()?);
    block.outline = props.outline()?;
    block.align = props.align("align")?.unwrap_or_default();
    block.radius = props.int("radius")?.unwrap_or(block.radius);
    block.margin = props.uint("margin")?.unwrap_or(block.margin);
    block.padding_x = props.uint("padding_x")?.unwrap_or(block.padding_x);
    block.padding_y = props.uint("padding_y")?.unwrap_or(block.padding_y);
    if let Some(px) = props.uint("width")? {
        block.width = BlockWidth::Pixels(px);
    } else if let Some(f) = props.number("width_fraction")? {
        block.width = BlockWidth::Fraction(f);
    }
    match node.prop("max_width") {
        None => {}
        Some(Value::Ident(s)) if s == "none" => block.max_width = None,
        Some(Value::Number(_)) => block.max_width = props.uint("max_width")?,
        Some(v) => return Err(props.invalid("max_width", "a pixel width or none", v)),
    }

    for child in &node.children {
        match child.kind.as_str() {
            "Caption" => {
                let base = TextStyle { bold: true, ..block.style.clone() };
                block.caption = Some(caption(child, base)?);
            }
            "Glyph" => block.glyph = Some(glyph(child)?),
            _ => return Err(unknown_child(node, child)),
        }
    }
    Ok(block)
}

fn glyph(node: &Node) -> Result<Glyph> {
    let props = Props::new(node, &[&["radius", "fill"]])?;
    Ok(Glyph {
        radius: props.required("radius", props.uint("radius")?)?,
        fill: props.required("fill", props.color("fill")?)?,
        label: inner_label(node)?,
    })
}

fn label(node: &Node) -> Result<Label> {
    let props = Props::new(node, &[&["anchor", "x", "y"], STYLE_KEYS])?;
    if let Some(child) = node.children.first() {
        return Err(unknown_child(node, child));
    }
    Ok(Label {
        text: text_of(node),
        style: props.style(TextStyle::default())?,
        anchor: props.align("anchor")?.unwrap_or_default(),
        x: props.int("x")?,
        placement: props.placement()?,
    })
}

fn marker(node: &Node) -> Result<Marker> {
    let props = Props::new(node, &[&["x", "y", "radius", "fill"], OUTLINE_KEYS])?;
    let center = Point::new(
        props.required("x", props.int("x")?)?,
        props.required("y", props.int("y")?)?,
    );
    let mut marker = Marker::new(
        center,
        props.required("radius", props.int("radius")?)?,
        props.required("fill", props.color("fill")?)?,
    );
    marker.outline = props.outline()?;
    marker.label = inner_label(node)?;
    Ok(marker)
}
