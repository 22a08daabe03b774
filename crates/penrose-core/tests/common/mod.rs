// Recording surface shared by the host-side integration tests.

#![allow(dead_code)]
use glam::DVec2;
use penrose_core::{LineJoin, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(DVec2, DVec2),
    LineJoin(LineJoin),
    LineWidth(f64),
    Stroke(String),
    FillStyle(String),
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    ClosePath,
    StrokePath,
    FillPath,
}

#[derive(Default)]
pub struct Recorder {
    pub size: DVec2,
    pub ops: Vec<Op>,
    /// Fail the n-th `fill` call (0-based) when set.
    pub fail_on_fill: Option<usize>,
    fills: usize,
}

impl Recorder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: DVec2::new(width, height),
            ..Default::default()
        }
    }

    pub fn failing_on_fill(mut self, n: usize) -> Self {
        self.fail_on_fill = Some(n);
        self
    }

    pub fn polygon_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::BeginPath).count()
    }

    /// Fill color of every polygon, in paint order.
    pub fn fill_sequence(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FillStyle(c) => Some(c.clone()),
                _ => None,
            })
            .collect()
    }

    /// First vertex (the cube center) of every polygon, in paint order.
    pub fn polygon_origins(&self) -> Vec<DVec2> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::MoveTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

#[derive(Debug, PartialEq)]
pub struct SurfaceLost;

impl Surface for Recorder {
    type Error = SurfaceLost;

    fn size(&self) -> DVec2 {
        self.size
    }

    fn clear_rect(&mut self, origin: DVec2, size: DVec2) -> Result<(), SurfaceLost> {
        self.ops.push(Op::Clear(origin, size));
        Ok(())
    }

    fn set_line_join(&mut self, join: LineJoin) -> Result<(), SurfaceLost> {
        self.ops.push(Op::LineJoin(join));
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> Result<(), SurfaceLost> {
        self.ops.push(Op::LineWidth(width));
        Ok(())
    }

    fn set_stroke_color(&mut self, color: &str) -> Result<(), SurfaceLost> {
        self.ops.push(Op::Stroke(color.to_string()));
        Ok(())
    }

    fn set_fill_color(&mut self, color: &str) -> Result<(), SurfaceLost> {
        self.ops.push(Op::FillStyle(color.to_string()));
        Ok(())
    }

    fn begin_path(&mut self) -> Result<(), SurfaceLost> {
        self.ops.push(Op::BeginPath);
        Ok(())
    }

    fn move_to(&mut self, p: DVec2) -> Result<(), SurfaceLost> {
        self.ops.push(Op::MoveTo(p));
        Ok(())
    }

    fn line_to(&mut self, p: DVec2) -> Result<(), SurfaceLost> {
        self.ops.push(Op::LineTo(p));
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), SurfaceLost> {
        self.ops.push(Op::ClosePath);
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), SurfaceLost> {
        self.ops.push(Op::StrokePath);
        Ok(())
    }

    fn fill(&mut self) -> Result<(), SurfaceLost> {
        if self.fail_on_fill == Some(self.fills) {
            return Err(SurfaceLost);
        }
        self.fills += 1;
        self.ops.push(Op::FillPath);
        Ok(())
    }
}
