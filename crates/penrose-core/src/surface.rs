//! Drawing surface capability consumed by the cube renderer.
//!
//! The method set follows the path API of an HTML canvas 2D context so the
//! web front-end can forward calls one to one.

use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub fn as_str(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// A 2D target that can be cleared and can stroke/fill closed paths.
///
/// Every operation may fail with the implementation's own error type; the
/// renderer hands such errors back to its caller untouched.
pub trait Surface {
    type Error;

    /// Drawable area in surface units.
    fn size(&self) -> DVec2;

    fn clear_rect(&mut self, origin: DVec2, size: DVec2) -> Result<(), Self::Error>;

    fn set_line_join(&mut self, join: LineJoin) -> Result<(), Self::Error>;
    fn set_line_width(&mut self, width: f64) -> Result<(), Self::Error>;
    fn set_stroke_color(&mut self, color: &str) -> Result<(), Self::Error>;
    fn set_fill_color(&mut self, color: &str) -> Result<(), Self::Error>;

    fn begin_path(&mut self) -> Result<(), Self::Error>;
    fn move_to(&mut self, p: DVec2) -> Result<(), Self::Error>;
    fn line_to(&mut self, p: DVec2) -> Result<(), Self::Error>;
    fn close_path(&mut self) -> Result<(), Self::Error>;
    fn stroke(&mut self) -> Result<(), Self::Error>;
    fn fill(&mut self) -> Result<(), Self::Error>;
}
