pub(crate) mod circle;
pub(crate) mod ellipse;
pub(crate) mod fill;
pub(crate) mod line;
pub(crate) mod rounded_rect;
pub(crate) mod text;

pub use ellipse::{ArcCmd, EllipseCmd};
pub use fill::FillCmd;
pub use line::LineCmd;
pub use text::TextCmd;
