//! Isometric cube faces and the chain draw pass.
//!
//! No depth buffer is involved: faces are painted back to front and the call
//! order is what makes the chain read as one solid tube.

use crate::config::Config;
use crate::surface::{LineJoin, Surface};
use glam::DVec2;

/// One visible rhombus of an isometric cube. All three share the cube center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// Upper-right rhombus, first color.
    Right,
    /// Top rhombus, second color.
    Top,
    /// Bottom-left rhombus, third color.
    Left,
}

impl Face {
    pub const ALL: [Face; 3] = [Face::Right, Face::Top, Face::Left];

    /// Index into the configured cube colors.
    pub fn color_index(self) -> usize {
        match self {
            Face::Right => 0,
            Face::Top => 1,
            Face::Left => 2,
        }
    }
}

/// Cube dimensions derived once from the cube edge length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeShape {
    pub edge: f64,
    /// `edge * sqrt(3) / 2`
    pub half_height: f64,
    /// `edge / 2`
    pub half_base: f64,
}

impl CubeShape {
    pub fn new(edge: f64) -> Self {
        Self {
            edge,
            half_height: edge * 3.0_f64.sqrt() / 2.0,
            half_base: edge / 2.0,
        }
    }

    /// Corners of `face` for a cube centered at `center`, in path order.
    pub fn face(&self, face: Face, center: DVec2) -> [DVec2; 4] {
        let (e, h, b) = (self.edge, self.half_height, self.half_base);
        let o = center;
        match face {
            Face::Right => [
                o,
                o + DVec2::new(b, -h),
                o + DVec2::new(e, 0.0),
                o + DVec2::new(b, h),
            ],
            Face::Top => [
                o,
                o + DVec2::new(-e, 0.0),
                o + DVec2::new(-b, -h),
                o + DVec2::new(b, -h),
            ],
            Face::Left => [
                o,
                o + DVec2::new(b, h),
                o + DVec2::new(-b, h),
                o + DVec2::new(-e, 0.0),
            ],
        }
    }
}

/// Paints cubes onto any [`Surface`].
#[derive(Clone, Debug, PartialEq)]
pub struct CubePainter {
    shape: CubeShape,
    line_width: f64,
    line_color: String,
    colors: [String; 3],
}

impl CubePainter {
    pub fn new(config: &Config) -> Self {
        Self {
            shape: CubeShape::new(config.cube_edge()),
            line_width: config.line_width(),
            line_color: config.line_color().to_string(),
            colors: config.cube_colors().clone(),
        }
    }

    pub fn shape(&self) -> &CubeShape {
        &self.shape
    }

    /// Stroke state shared by every face. Applied at the start of each pass
    /// because some surfaces (a resized canvas) drop it.
    pub fn prepare<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.set_line_join(LineJoin::Round)?;
        surface.set_line_width(self.line_width)?;
        surface.set_stroke_color(&self.line_color)
    }

    /// One closed rhombus: stroked first, then filled so the fill covers the
    /// inner half of the outline shared with the previous face.
    pub fn draw_face<S: Surface>(
        &self,
        surface: &mut S,
        face: Face,
        center: DVec2,
    ) -> Result<(), S::Error> {
        let [p0, p1, p2, p3] = self.shape.face(face, center);
        surface.begin_path()?;
        surface.move_to(p0)?;
        surface.line_to(p1)?;
        surface.line_to(p2)?;
        surface.line_to(p3)?;
        surface.close_path()?;
        surface.set_fill_color(&self.colors[face.color_index()])?;
        surface.stroke()?;
        surface.fill()
    }

    /// Opening half of the seam cube: the right face only.
    pub fn draw_start_partial<S: Surface>(
        &self,
        surface: &mut S,
        center: DVec2,
    ) -> Result<(), S::Error> {
        self.draw_face(surface, Face::Right, center)
    }

    /// Closing half of the seam cube: top then bottom-left face.
    pub fn draw_end_partial<S: Surface>(
        &self,
        surface: &mut S,
        center: DVec2,
    ) -> Result<(), S::Error> {
        self.draw_face(surface, Face::Top, center)?;
        self.draw_face(surface, Face::Left, center)
    }

    pub fn draw_cube<S: Surface>(&self, surface: &mut S, center: DVec2) -> Result<(), S::Error> {
        self.draw_start_partial(surface, center)?;
        self.draw_end_partial(surface, center)
    }

    /// Clear the surface and paint the whole chain.
    ///
    /// The first anchor gets only its right face, every interior anchor a
    /// full cube, and the last anchor its two remaining faces, painted after
    /// everything else so it closes over the start of the chain.
    ///
    /// The two partial cubes sit at different slots, so neither end shows a
    /// whole cube. Drawing a full cube at the last anchor and the closing
    /// faces again at the first anchor would complete the seam cube instead,
    /// at the cost of one extra full cube per frame.
    pub fn draw_chain<S: Surface>(
        &self,
        surface: &mut S,
        anchors: &[DVec2],
    ) -> Result<(), S::Error> {
        let size = surface.size();
        surface.clear_rect(DVec2::ZERO, size)?;
        self.prepare(surface)?;

        match anchors {
            [] => Ok(()),
            [only] => self.draw_cube(surface, *only),
            [first, interior @ .., last] => {
                self.draw_start_partial(surface, *first)?;
                for &center in interior {
                    self.draw_cube(surface, center)?;
                }
                self.draw_end_partial(surface, *last)
            }
        }
    }
}
