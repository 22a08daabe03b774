// Default figure parameters used when a host leaves an option unset.

// Triangle and cube sizing (canvas pixels)
pub const DEFAULT_TRIANGLE_EDGE: f64 = 300.0;
pub const DEFAULT_CUBE_EDGE: f64 = 30.0;
pub const DEFAULT_CUBES_PER_TRIANGLE_EDGE: u32 = 6;

// Half-pixel offsets keep 1px-aligned strokes crisp on a canvas
pub const DEFAULT_PADDING: [f64; 2] = [50.5, 0.5];

// Frames needed for the chain to advance by one cube slot
pub const DEFAULT_LOOP_FRAMES: u32 = 100;

// Outline
pub const DEFAULT_LINE_WIDTH: f64 = 3.0;
pub const DEFAULT_LINE_COLOR: &str = "#0041a3";

// Face fills: right, top, bottom-left
pub const DEFAULT_CUBE_COLORS: [&str; 3] = ["#4f9bf7", "#c0d8fc", "#87b7ff"];

pub const PADDING_COMPONENTS: usize = 2;
pub const CUBE_FACE_COUNT: usize = 3;

// Upper bounds on counts; the anchor buffer holds 3 points per edge cube and
// must stay allocatable on 32-bit targets.
pub const MAX_CUBES_PER_TRIANGLE_EDGE: u32 = 10_000;
pub const MAX_LOOP_FRAMES: u32 = 1_000_000;
