//! Triangle vertices, cube anchors and per-frame increments.
//!
//! Anchors are stored in draw order. The bottom edge is split in two so the
//! chain starts and ends in the same region of the figure:
//!
//! ```text
//! [ bottom-right | right edge | left edge | bottom-left ]
//!   mid..n         0..n         0..n        0..mid
//! ```
//!
//! with `n = cubes_per_triangle_edge` and `mid = (n - 1) / 2`.

use crate::config::Config;
use glam::DVec2;
use std::ops::Range;

/// The three corners of the equilateral triangle, in canvas coordinates
/// (y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertices {
    /// bottom-left
    pub a: DVec2,
    /// bottom-right
    pub b: DVec2,
    /// apex
    pub c: DVec2,
}

impl Vertices {
    pub fn new(edge: f64, padding: DVec2) -> Self {
        let height = triangle_height(edge);
        Self {
            a: DVec2::new(padding.x, edge + padding.y),
            b: DVec2::new(edge + padding.x, edge + padding.y),
            c: DVec2::new(edge / 2.0 + padding.x, edge - height + padding.y),
        }
    }
}

#[inline]
pub fn triangle_height(edge: f64) -> f64 {
    edge * 3.0_f64.sqrt() / 2.0
}

/// Structural grouping of anchors sharing one displacement rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    BottomRight,
    Right,
    Left,
    BottomLeft,
}

impl Segment {
    pub const ALL: [Segment; 4] = [
        Segment::BottomRight,
        Segment::Right,
        Segment::Left,
        Segment::BottomLeft,
    ];
}

/// Per-frame displacement for each edge of travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeIncrements {
    /// Horizontal, `(frame_length_increment, 0)`.
    pub bottom: DVec2,
    /// From the bottom-right corner towards the apex.
    pub right: DVec2,
    /// From the apex towards the bottom-left corner.
    pub left: DVec2,
}

impl EdgeIncrements {
    pub fn for_segment(&self, segment: Segment) -> DVec2 {
        match segment {
            Segment::BottomRight | Segment::BottomLeft => self.bottom,
            Segment::Right => self.right,
            Segment::Left => self.left,
        }
    }
}

/// Everything precomputed from a [`Config`]; rebuilt only when the
/// configuration changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    vertices: Vertices,
    anchors: Vec<DVec2>,
    increments: EdgeIncrements,
    frame_length_increment: f64,
    cubes_per_edge: usize,
    mid: usize,
    spacing: f64,
}

impl Geometry {
    pub fn build(config: &Config) -> Self {
        let n = config.cubes_per_triangle_edge();
        let edge = config.triangle_edge();
        let vertices = Vertices::new(edge, config.padding());
        let Vertices { a: va, b: vb, c: vc } = vertices;

        // sub-frame steps along one full edge
        let minc = (n as f64) * f64::from(config.loop_frames());
        let frame_length_increment = edge / minc;
        let increments = EdgeIncrements {
            bottom: DVec2::new(frame_length_increment, 0.0),
            right: (vc - vb) / minc,
            left: (va - vc) / minc,
        };

        let mid = (n - 1) / 2;
        let spacing = edge / n as f64;
        let right_step = (vc - vb) / n as f64;
        let left_step = (va - vc) / n as f64;

        let mut anchors = Vec::with_capacity(3 * n);
        anchors.extend((mid..n).map(|i| DVec2::new(va.x + spacing * i as f64, va.y)));
        anchors.extend((0..n).map(|i| vb + right_step * i as f64));
        anchors.extend((0..n).map(|i| vc + left_step * i as f64));
        anchors.extend((0..mid).map(|i| DVec2::new(va.x + spacing * i as f64, va.y)));

        log::debug!(
            "[geometry] cubes={} mid={} spacing={:.3} finc={:.5} apex=({:.2},{:.2})",
            anchors.len(),
            mid,
            spacing,
            frame_length_increment,
            vc.x,
            vc.y
        );

        Self {
            vertices,
            anchors,
            increments,
            frame_length_increment,
            cubes_per_edge: n,
            mid,
            spacing,
        }
    }

    pub fn vertices(&self) -> &Vertices {
        &self.vertices
    }

    /// Base anchor of every cube, in draw order.
    pub fn anchors(&self) -> &[DVec2] {
        &self.anchors
    }

    pub fn increments(&self) -> &EdgeIncrements {
        &self.increments
    }

    /// Distance a bottom-edge anchor travels per frame.
    pub fn frame_length_increment(&self) -> f64 {
        self.frame_length_increment
    }

    /// Index of the first bottom-edge cube drawn.
    pub fn mid(&self) -> usize {
        self.mid
    }

    /// Distance between neighbouring cubes on any edge.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Vector between neighbouring cubes on the edges a segment belongs to,
    /// pointing in the direction of travel.
    pub fn spacing_vector(&self, segment: Segment) -> DVec2 {
        let n = self.cubes_per_edge as f64;
        let Vertices { a, b, c } = self.vertices;
        match segment {
            Segment::BottomRight | Segment::BottomLeft => DVec2::new(self.spacing, 0.0),
            Segment::Right => (c - b) / n,
            Segment::Left => (a - c) / n,
        }
    }

    /// Index range of a segment inside [`Geometry::anchors`].
    pub fn segment_range(&self, segment: Segment) -> Range<usize> {
        let n = self.cubes_per_edge;
        let bottom_right = n - self.mid;
        match segment {
            Segment::BottomRight => 0..bottom_right,
            Segment::Right => bottom_right..bottom_right + n,
            Segment::Left => bottom_right + n..bottom_right + 2 * n,
            Segment::BottomLeft => bottom_right + 2 * n..self.anchors.len(),
        }
    }

    /// Segments paired with their anchor ranges, in draw order.
    pub fn segments(&self) -> impl Iterator<Item = (Segment, Range<usize>)> + '_ {
        Segment::ALL
            .into_iter()
            .map(move |segment| (segment, self.segment_range(segment)))
    }
}
