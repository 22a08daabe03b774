//! `Surface` that records paths as SVG elements.
//!
//! Stroke and fill are emitted as separate `<path>` elements in call order,
//! which reproduces canvas painting: a later fill covers the inner half of an
//! earlier outline.

use glam::DVec2;
use penrose_core::{LineJoin, Surface};
use std::fmt::{self, Write};

pub struct SvgSurface {
    size: DVec2,
    background: Option<String>,
    elements: String,
    path: String,
    line_join: LineJoin,
    line_width: f64,
    stroke_color: String,
    fill_color: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: DVec2::new(width, height),
            background: None,
            elements: String::new(),
            path: String::new(),
            line_join: LineJoin::Miter,
            line_width: 1.0,
            stroke_color: "black".to_string(),
            fill_color: "black".to_string(),
        }
    }

    /// Paint cleared regions with `color` instead of leaving them transparent.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Number of elements painted since the last full clear.
    pub fn element_count(&self) -> usize {
        self.elements.matches("<path").count() + self.elements.matches("<rect").count()
    }

    /// Complete standalone document for what is currently painted.
    pub fn document(&self) -> String {
        let (w, h) = (self.size.x, self.size.y);
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
        );
        if let Some(bg) = &self.background {
            out.push_str(&format!(
                "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{}\"/>\n",
                escape(bg)
            ));
        }
        out.push_str(&self.elements);
        out.push_str("</svg>\n");
        out
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

impl Surface for SvgSurface {
    type Error = fmt::Error;

    fn size(&self) -> DVec2 {
        self.size
    }

    fn clear_rect(&mut self, origin: DVec2, size: DVec2) -> fmt::Result {
        let covers_all = origin.cmple(DVec2::ZERO).all() && (origin + size).cmpge(self.size).all();
        if covers_all {
            self.elements.clear();
            return Ok(());
        }
        let fill = self.background.as_deref().map(escape);
        writeln!(
            self.elements,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            origin.x,
            origin.y,
            size.x,
            size.y,
            fill.as_deref().unwrap_or("white")
        )
    }

    fn set_line_join(&mut self, join: LineJoin) -> fmt::Result {
        self.line_join = join;
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> fmt::Result {
        self.line_width = width;
        Ok(())
    }

    fn set_stroke_color(&mut self, color: &str) -> fmt::Result {
        self.stroke_color = escape(color);
        Ok(())
    }

    fn set_fill_color(&mut self, color: &str) -> fmt::Result {
        self.fill_color = escape(color);
        Ok(())
    }

    fn begin_path(&mut self) -> fmt::Result {
        self.path.clear();
        Ok(())
    }

    fn move_to(&mut self, p: DVec2) -> fmt::Result {
        write!(self.path, "M{:.3} {:.3} ", p.x, p.y)
    }

    fn line_to(&mut self, p: DVec2) -> fmt::Result {
        write!(self.path, "L{:.3} {:.3} ", p.x, p.y)
    }

    fn close_path(&mut self) -> fmt::Result {
        self.path.push('Z');
        Ok(())
    }

    fn stroke(&mut self) -> fmt::Result {
        writeln!(
            self.elements,
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"{}\"/>",
            self.path.trim_end(),
            self.stroke_color,
            self.line_width,
            self.line_join.as_str()
        )
    }

    fn fill(&mut self) -> fmt::Result {
        writeln!(
            self.elements,
            "<path d=\"{}\" fill=\"{}\"/>",
            self.path.trim_end(),
            self.fill_color
        )
    }
}
