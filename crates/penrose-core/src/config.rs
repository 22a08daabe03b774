//! Figure configuration.
//!
//! Hosts hand over a [`ConfigOptions`] where every field is optional; the
//! validated [`Config`] is immutable once built and is the only input the
//! geometry builder and the cube renderer accept.

use crate::constants::*;
use crate::error::ConfigError;
use glam::DVec2;

/// Host-facing constructor options. `None` selects the default.
///
/// Collection fields are plain vectors so that a short list can be reported
/// instead of silently padded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigOptions {
    pub triangle_edge: Option<f64>,
    pub cube_edge: Option<f64>,
    pub cubes_per_triangle_edge: Option<i64>,
    pub padding: Option<Vec<f64>>,
    pub loop_frames: Option<i64>,
    pub line_width: Option<f64>,
    pub line_color: Option<String>,
    pub cube_colors: Option<Vec<String>>,
}

/// Validated figure parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    triangle_edge: f64,
    cube_edge: f64,
    cubes_per_triangle_edge: usize,
    padding: DVec2,
    loop_frames: u32,
    line_width: f64,
    line_color: String,
    cube_colors: [String; CUBE_FACE_COUNT],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            triangle_edge: DEFAULT_TRIANGLE_EDGE,
            cube_edge: DEFAULT_CUBE_EDGE,
            cubes_per_triangle_edge: DEFAULT_CUBES_PER_TRIANGLE_EDGE as usize,
            padding: DVec2::from_array(DEFAULT_PADDING),
            loop_frames: DEFAULT_LOOP_FRAMES,
            line_width: DEFAULT_LINE_WIDTH,
            line_color: DEFAULT_LINE_COLOR.to_string(),
            cube_colors: DEFAULT_CUBE_COLORS.map(str::to_string),
        }
    }
}

impl Config {
    /// Fill unset options with defaults and reject anything that would make
    /// the geometry degenerate.
    pub fn from_options(opts: ConfigOptions) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let triangle_edge = positive_length(
            "triangleEdge",
            opts.triangle_edge.unwrap_or(defaults.triangle_edge),
        )?;
        let cube_edge = positive_length("cubeEdge", opts.cube_edge.unwrap_or(defaults.cube_edge))?;
        let line_width =
            positive_length("lineWidth", opts.line_width.unwrap_or(defaults.line_width))?;

        let cubes_per_triangle_edge = positive_count(
            "cubesPerTriangleEdge",
            opts.cubes_per_triangle_edge
                .unwrap_or(defaults.cubes_per_triangle_edge as i64),
            MAX_CUBES_PER_TRIANGLE_EDGE,
        )? as usize;
        let loop_frames = positive_count(
            "loopFrames",
            opts.loop_frames.unwrap_or(defaults.loop_frames as i64),
            MAX_LOOP_FRAMES,
        )?;

        let padding = match opts.padding {
            Some(p) => {
                require_len("padding", p.len(), PADDING_COMPONENTS)?;
                DVec2::new(finite("padding", p[0])?, finite("padding", p[1])?)
            }
            None => defaults.padding,
        };

        let line_color = match opts.line_color {
            Some(c) if c.trim().is_empty() => {
                return Err(ConfigError::EmptyColor {
                    field: "lineColor",
                    index: 0,
                })
            }
            Some(c) => c,
            None => defaults.line_color,
        };

        let cube_colors = match opts.cube_colors {
            Some(colors) => {
                require_len("cubeColors", colors.len(), CUBE_FACE_COUNT)?;
                if let Some(index) = colors
                    .iter()
                    .take(CUBE_FACE_COUNT)
                    .position(|c| c.trim().is_empty())
                {
                    return Err(ConfigError::EmptyColor {
                        field: "cubeColors",
                        index,
                    });
                }
                let mut it = colors.into_iter();
                // length checked above
                [(); CUBE_FACE_COUNT].map(|_| it.next().unwrap_or_default())
            }
            None => defaults.cube_colors,
        };

        Ok(Self {
            triangle_edge,
            cube_edge,
            cubes_per_triangle_edge,
            padding,
            loop_frames,
            line_width,
            line_color,
            cube_colors,
        })
    }

    pub fn triangle_edge(&self) -> f64 {
        self.triangle_edge
    }

    pub fn cube_edge(&self) -> f64 {
        self.cube_edge
    }

    pub fn cubes_per_triangle_edge(&self) -> usize {
        self.cubes_per_triangle_edge
    }

    pub fn padding(&self) -> DVec2 {
        self.padding
    }

    pub fn loop_frames(&self) -> u32 {
        self.loop_frames
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn line_color(&self) -> &str {
        &self.line_color
    }

    /// Face fills in draw order: right face, top face, bottom-left face.
    pub fn cube_colors(&self) -> &[String; CUBE_FACE_COUNT] {
        &self.cube_colors
    }

    /// Number of cubes in the whole chain.
    pub fn cube_count(&self) -> usize {
        self.cubes_per_triangle_edge * 3
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn positive_length(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    let value = finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositiveLength { field, value })
    }
}

fn positive_count(field: &'static str, value: i64, max: u32) -> Result<u32, ConfigError> {
    if value < 1 {
        return Err(ConfigError::NonPositiveCount { field, value });
    }
    match u32::try_from(value) {
        Ok(v) if v <= max => Ok(v),
        _ => Err(ConfigError::CountTooLarge {
            field,
            value,
            max: i64::from(max),
        }),
    }
}

fn require_len(field: &'static str, found: usize, expected: usize) -> Result<(), ConfigError> {
    if found < expected {
        Err(ConfigError::TooFewElements {
            field,
            expected,
            found,
        })
    } else {
        Ok(())
    }
}
