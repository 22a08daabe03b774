//! `Surface` backed by an HTML canvas 2D context.

use glam::DVec2;
use penrose_core::{LineJoin, Surface};
use std::convert::Infallible;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }
}

// Context calls cannot fail once the context exists.
impl Surface for CanvasSurface {
    type Error = Infallible;

    fn size(&self) -> DVec2 {
        DVec2::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear_rect(&mut self, origin: DVec2, size: DVec2) -> Result<(), Infallible> {
        self.ctx.clear_rect(origin.x, origin.y, size.x, size.y);
        Ok(())
    }

    fn set_line_join(&mut self, join: LineJoin) -> Result<(), Infallible> {
        self.ctx.set_line_join(join.as_str());
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> Result<(), Infallible> {
        self.ctx.set_line_width(width);
        Ok(())
    }

    fn set_stroke_color(&mut self, color: &str) -> Result<(), Infallible> {
        self.ctx.set_stroke_style_str(color);
        Ok(())
    }

    fn set_fill_color(&mut self, color: &str) -> Result<(), Infallible> {
        self.ctx.set_fill_style_str(color);
        Ok(())
    }

    fn begin_path(&mut self) -> Result<(), Infallible> {
        self.ctx.begin_path();
        Ok(())
    }

    fn move_to(&mut self, p: DVec2) -> Result<(), Infallible> {
        self.ctx.move_to(p.x, p.y);
        Ok(())
    }

    fn line_to(&mut self, p: DVec2) -> Result<(), Infallible> {
        self.ctx.line_to(p.x, p.y);
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), Infallible> {
        self.ctx.close_path();
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), Infallible> {
        self.ctx.stroke();
        Ok(())
    }

    fn fill(&mut self) -> Result<(), Infallible> {
        self.ctx.fill();
        Ok(())
    }
}
