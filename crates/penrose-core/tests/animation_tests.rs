// Host-side tests for the animation driver: frame counter, seamless loop and
// the scheduled frame loop.

mod common;

use common::{Recorder, SurfaceLost};
use penrose_core::*;
use std::cell::RefCell;
use std::rc::Rc;

fn scenario_config() -> Config {
    Config::from_options(ConfigOptions {
        triangle_edge: Some(300.0),
        cube_edge: Some(30.0),
        cubes_per_triangle_edge: Some(6),
        loop_frames: Some(100),
        padding: Some(vec![0.0, 0.0]),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn first_render_draws_base_anchors() {
    let mut anim = Animation::new(Recorder::new(400.0, 400.0), scenario_config());
    assert_eq!(anim.state(), AnimationState::Idle);
    anim.render().unwrap();
    assert_eq!(anim.displaced(), anim.geometry().anchors());
    assert_eq!(anim.frame(), 1);
}

#[test]
fn frame_counter_wraps_after_one_loop() {
    let cfg = Config::from_options(ConfigOptions {
        loop_frames: Some(7),
        ..Default::default()
    })
    .unwrap();
    let mut anim = Animation::new(Recorder::new(10.0, 10.0), cfg);
    for expected in 1..7 {
        anim.render().unwrap();
        assert_eq!(anim.frame(), expected);
    }
    anim.render().unwrap();
    assert_eq!(anim.frame(), 0);
    for _ in 0..20 {
        anim.render().unwrap();
        assert!(anim.frame() < 7);
    }
}

#[test]
fn loop_frames_of_one_stays_on_frame_zero() {
    let cfg = Config::from_options(ConfigOptions {
        loop_frames: Some(1),
        ..Default::default()
    })
    .unwrap();
    let mut anim = Animation::new(Recorder::new(10.0, 10.0), cfg);
    for _ in 0..3 {
        anim.render().unwrap();
        assert_eq!(anim.frame(), 0);
    }
}

#[test]
fn half_loop_scenario_moves_bottom_edge_by_25() {
    let mut anim = Animation::new(Recorder::new(400.0, 400.0), scenario_config());
    for _ in 0..=50 {
        anim.render().unwrap();
    }
    // last render used frame 50
    let g = anim.geometry();
    for segment in [Segment::BottomRight, Segment::BottomLeft] {
        for i in g.segment_range(segment) {
            let dx = anim.displaced()[i].x - g.anchors()[i].x;
            assert!((dx - 25.0).abs() < 1e-9, "anchor {i}: dx={dx}");
        }
    }
}

#[test]
fn a_full_loop_lands_each_cube_on_its_neighbours_slot() {
    let cfg = scenario_config();
    let g = Geometry::build(&cfg);
    let end = displace(&g, cfg.loop_frames());
    for (segment, range) in g.segments() {
        let step = g.spacing_vector(segment);
        for i in range {
            let expected = g.anchors()[i] + step;
            assert!((end[i] - expected).length() < 1e-9, "{segment:?} anchor {i}");
        }
    }
    // inside the right edge the shifted anchor coincides with the next one
    let right = g.segment_range(Segment::Right);
    for i in right.start..right.end - 1 {
        assert!((end[i] - g.anchors()[i + 1]).length() < 1e-9);
    }
}

#[test]
fn each_frame_issues_the_same_number_of_polygons() {
    let cfg = scenario_config();
    let n = cfg.cube_count();
    let mut anim = Animation::new(Recorder::new(400.0, 400.0), cfg);
    for _ in 0..3 {
        anim.surface_mut().reset();
        anim.render().unwrap();
        assert_eq!(anim.surface().polygon_count(), 1 + (n - 2) * 3 + 2);
    }
}

#[test]
fn failed_draw_does_not_advance_the_frame() {
    let mut anim = Animation::new(
        Recorder::new(10.0, 10.0).failing_on_fill(0),
        scenario_config(),
    );
    assert_eq!(anim.render(), Err(SurfaceLost));
    assert_eq!(anim.frame(), 0);
}

#[test]
fn reconfigure_rebuilds_geometry_and_keeps_frame_in_range() {
    let mut anim = Animation::new(Recorder::new(10.0, 10.0), scenario_config());
    for _ in 0..42 {
        anim.render().unwrap();
    }
    let smaller = Config::from_options(ConfigOptions {
        cubes_per_triangle_edge: Some(4),
        loop_frames: Some(10),
        ..Default::default()
    })
    .unwrap();
    anim.reconfigure(smaller);
    assert_eq!(anim.frame(), 2);
    assert_eq!(anim.geometry().anchors().len(), 12);
    assert_eq!(anim.displaced().len(), 12);
    anim.render().unwrap();
    assert_eq!(anim.frame(), 3);
}

#[test]
fn with_options_rejects_invalid_configuration() {
    let err = Animation::with_options(
        Recorder::new(10.0, 10.0),
        ConfigOptions {
            cube_colors: Some(vec!["#fff".into()]),
            ..Default::default()
        },
    )
    .err()
    .unwrap();
    assert!(matches!(err, ConfigError::TooFewElements { field: "cubeColors", .. }));
}

#[test]
fn start_runs_one_frame_per_refresh() {
    let anim = Rc::new(RefCell::new(Animation::new(
        Recorder::new(10.0, 10.0),
        scenario_config(),
    )));
    let scheduler = Rc::new(ManualScheduler::new());
    start(anim.clone(), scheduler.clone(), |_| panic!("no error expected"));

    assert_eq!(anim.borrow().state(), AnimationState::Running);
    assert_eq!(anim.borrow().frame(), 0, "nothing drawn before the first refresh");
    assert_eq!(scheduler.pending(), 1);

    for expected in 1..=5 {
        assert_eq!(scheduler.run_pending(), 1);
        assert_eq!(anim.borrow().frame(), expected);
        assert_eq!(scheduler.pending(), 1);
    }
    for _ in 0..95 {
        scheduler.run_pending();
    }
    assert_eq!(anim.borrow().frame(), 0);
}

#[test]
fn second_start_is_ignored() {
    let anim = Rc::new(RefCell::new(Animation::new(
        Recorder::new(10.0, 10.0),
        scenario_config(),
    )));
    let scheduler = Rc::new(ManualScheduler::new());
    start(anim.clone(), scheduler.clone(), |_| {});
    start(anim.clone(), scheduler.clone(), |_| {});
    assert_eq!(scheduler.pending(), 1);
}

#[test]
fn loop_reports_surface_error_and_stops() {
    let anim = Rc::new(RefCell::new(Animation::new(
        Recorder::new(10.0, 10.0).failing_on_fill(100),
        scenario_config(),
    )));
    let scheduler = Rc::new(ManualScheduler::new());
    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = errors.clone();
    start(anim.clone(), scheduler.clone(), move |e| sink.borrow_mut().push(e));

    // 18 cubes -> 51 fills per frame; the 101st fill falls in frame 2
    let mut refreshes = 0;
    while scheduler.pending() > 0 {
        scheduler.run_pending();
        refreshes += 1;
        assert!(refreshes < 10, "loop should have stopped");
    }
    assert_eq!(refreshes, 2);
    assert_eq!(*errors.borrow(), vec![SurfaceLost]);
    assert_eq!(anim.borrow().frame(), 1);
    assert_eq!(anim.borrow().state(), AnimationState::Running);
}
