// Host-side tests for the chain draw pass against a recording surface.

mod common;

use common::{Op, Recorder};
use glam::DVec2;
use penrose_core::*;

fn default_painter() -> (Config, CubePainter) {
    let cfg = Config::default();
    let painter = CubePainter::new(&cfg);
    (cfg, painter)
}

#[test]
fn chain_polygon_count_matches_partial_full_partial_layout() {
    let (_, painter) = default_painter();
    for n in [3usize, 4, 18, 60] {
        let anchors: Vec<DVec2> = (0..n).map(|i| DVec2::new(i as f64 * 10.0, 0.0)).collect();
        let mut rec = Recorder::new(400.0, 400.0);
        painter.draw_chain(&mut rec, &anchors).unwrap();
        assert_eq!(rec.polygon_count(), 1 + (n - 2) * 3 + 2, "n={n}");
    }
}

#[test]
fn chain_paints_faces_in_fixed_order() {
    let (cfg, painter) = default_painter();
    let [c0, c1, c2] = cfg.cube_colors().clone();
    let anchors = [
        DVec2::new(10.0, 10.0),
        DVec2::new(20.0, 20.0),
        DVec2::new(30.0, 30.0),
        DVec2::new(40.0, 40.0),
    ];
    let mut rec = Recorder::new(100.0, 100.0);
    painter.draw_chain(&mut rec, &anchors).unwrap();

    let expected_fills = vec![
        c0.clone(),
        c0.clone(),
        c1.clone(),
        c2.clone(),
        c0,
        c1.clone(),
        c2.clone(),
        c1,
        c2,
    ];
    assert_eq!(rec.fill_sequence(), expected_fills);

    let expected_origins = vec![
        anchors[0], anchors[1], anchors[1], anchors[1], anchors[2], anchors[2], anchors[2],
        anchors[3], anchors[3],
    ];
    assert_eq!(rec.polygon_origins(), expected_origins);
}

#[test]
fn chain_starts_with_clear_and_stroke_setup() {
    let (cfg, painter) = default_painter();
    let mut rec = Recorder::new(640.0, 480.0);
    painter
        .draw_chain(&mut rec, &[DVec2::ZERO, DVec2::ONE, DVec2::splat(2.0)])
        .unwrap();
    assert_eq!(
        &rec.ops[..4],
        &[
            Op::Clear(DVec2::ZERO, DVec2::new(640.0, 480.0)),
            Op::LineJoin(LineJoin::Round),
            Op::LineWidth(cfg.line_width()),
            Op::Stroke(cfg.line_color().to_string()),
        ]
    );
}

#[test]
fn each_face_is_a_closed_four_point_path_stroked_then_filled() {
    let (_, painter) = default_painter();
    let mut rec = Recorder::new(100.0, 100.0);
    painter
        .draw_face(&mut rec, Face::Top, DVec2::new(50.0, 50.0))
        .unwrap();
    let kinds: Vec<&str> = rec
        .ops
        .iter()
        .map(|op| match op {
            Op::BeginPath => "begin",
            Op::MoveTo(_) => "move",
            Op::LineTo(_) => "line",
            Op::ClosePath => "close",
            Op::FillStyle(_) => "fill-style",
            Op::StrokePath => "stroke",
            Op::FillPath => "fill",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        ["begin", "move", "line", "line", "line", "close", "fill-style", "stroke", "fill"]
    );
}

#[test]
fn short_chains_still_draw() {
    let (_, painter) = default_painter();

    let mut rec = Recorder::new(10.0, 10.0);
    painter.draw_chain(&mut rec, &[]).unwrap();
    assert_eq!(rec.polygon_count(), 0);
    assert!(matches!(rec.ops[0], Op::Clear(..)));

    let mut rec = Recorder::new(10.0, 10.0);
    painter.draw_chain(&mut rec, &[DVec2::ONE]).unwrap();
    assert_eq!(rec.polygon_count(), 3);

    let mut rec = Recorder::new(10.0, 10.0);
    painter.draw_chain(&mut rec, &[DVec2::ONE, DVec2::ZERO]).unwrap();
    assert_eq!(rec.polygon_count(), 3);
}

#[test]
fn surface_error_aborts_the_pass() {
    let (_, painter) = default_painter();
    let anchors = vec![DVec2::ZERO; 18];
    let mut rec = Recorder::new(10.0, 10.0).failing_on_fill(2);
    let err = painter.draw_chain(&mut rec, &anchors).unwrap_err();
    assert_eq!(err, common::SurfaceLost);
    assert_eq!(rec.polygon_count(), 3);
}
