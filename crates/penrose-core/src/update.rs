//! Per-frame anchor displacement.
//!
//! Pure functions of `(geometry, frame)`; nothing is carried between calls.

use crate::geometry::Geometry;
use glam::DVec2;

/// Write the displaced anchors for `frame` into `out`.
///
/// `out` must be exactly as long as the anchor sequence; callers keep one
/// buffer per geometry and reuse it every frame.
pub fn displace_into(geometry: &Geometry, frame: u32, out: &mut [DVec2]) {
    let base = geometry.anchors();
    debug_assert_eq!(base.len(), out.len(), "displacement buffer size mismatch");
    let frame = f64::from(frame);
    for (segment, range) in geometry.segments() {
        let offset = geometry.increments().for_segment(segment) * frame;
        for (dst, src) in out[range.clone()].iter_mut().zip(&base[range]) {
            *dst = *src + offset;
        }
    }
}

/// Displaced anchors for `frame` as a fresh vector.
pub fn displace(geometry: &Geometry, frame: u32) -> Vec<DVec2> {
    let mut out = vec![DVec2::ZERO; geometry.anchors().len()];
    displace_into(geometry, frame, &mut out);
    out
}
