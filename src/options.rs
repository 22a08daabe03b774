// Host option parsing.
//
// Options arrive either as `data-*` attribute strings on the canvas or as
// values read from a JS options object. Only parsing happens here; range
// checks are left to `Config::from_options`.

use anyhow::{anyhow, Context};
use penrose_core::ConfigOptions;

/// One configurable field and the names hosts use for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionKey {
    /// camelCase property on a JS options object
    pub property: &'static str,
    /// attribute on the canvas element
    pub attribute: &'static str,
}

pub const TRIANGLE_EDGE: OptionKey = OptionKey {
    property: "triangleEdge",
    attribute: "data-triangle-edge",
};
pub const CUBE_EDGE: OptionKey = OptionKey {
    property: "cubeEdge",
    attribute: "data-cube-edge",
};
pub const CUBES_PER_TRIANGLE_EDGE: OptionKey = OptionKey {
    property: "cubesPerTriangleEdge",
    attribute: "data-cubes-per-edge",
};
pub const PADDING: OptionKey = OptionKey {
    property: "padding",
    attribute: "data-padding",
};
pub const LOOP_FRAMES: OptionKey = OptionKey {
    property: "loopFrames",
    attribute: "data-loop-frames",
};
pub const LINE_WIDTH: OptionKey = OptionKey {
    property: "lineWidth",
    attribute: "data-line-width",
};
pub const LINE_COLOR: OptionKey = OptionKey {
    property: "lineColor",
    attribute: "data-line-color",
};
pub const CUBE_COLORS: OptionKey = OptionKey {
    property: "cubeColors",
    attribute: "data-cube-colors",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyStyle {
    Property,
    Attribute,
}

impl OptionKey {
    #[inline]
    pub fn name(&self, style: KeyStyle) -> &'static str {
        match style {
            KeyStyle::Property => self.property,
            KeyStyle::Attribute => self.attribute,
        }
    }
}

/// A raw option as the host supplied it. Attributes always arrive as
/// `Text`; JS objects keep numbers and arrays intact so list items are never
/// re-split.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    Text(String),
    Number(f64),
    List(Vec<OptionValue>),
}

pub fn parse_number(key: &str, raw: &str) -> anyhow::Result<f64> {
    raw.trim()
        .parse::<f64>()
        .with_context(|| format!("{key}: expected a number, got {raw:?}"))
}

/// Whole numbers only; `"6"` and `"6.0"` are both accepted since JS numbers
/// stringify either way.
pub fn parse_count(key: &str, raw: &str) -> anyhow::Result<i64> {
    let raw_trim = raw.trim();
    if let Ok(v) = raw_trim.parse::<i64>() {
        return Ok(v);
    }
    whole_number(key, parse_number(key, raw_trim)?)
}

fn whole_number(key: &str, v: f64) -> anyhow::Result<i64> {
    if v.fract() != 0.0 || !v.is_finite() || v.abs() > i64::MAX as f64 {
        return Err(anyhow!("{key}: expected a whole number, got {v}"));
    }
    Ok(v as i64)
}

/// Comma separated list, items trimmed. Empty items are kept so that
/// validation can point at them. Attribute values only.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

pub fn parse_padding(key: &str, raw: &str) -> anyhow::Result<Vec<f64>> {
    parse_list(raw)
        .iter()
        .map(|item| parse_number(key, item))
        .collect()
}

fn number_value(key: &str, v: OptionValue) -> anyhow::Result<f64> {
    match v {
        OptionValue::Text(s) => parse_number(key, &s),
        OptionValue::Number(n) => Ok(n),
        OptionValue::List(_) => Err(anyhow!("{key}: expected a number, got a list")),
    }
}

fn count_value(key: &str, v: OptionValue) -> anyhow::Result<i64> {
    match v {
        OptionValue::Text(s) => parse_count(key, &s),
        OptionValue::Number(n) => whole_number(key, n),
        OptionValue::List(_) => Err(anyhow!("{key}: expected a whole number, got a list")),
    }
}

fn text_value(key: &str, v: OptionValue) -> anyhow::Result<String> {
    match v {
        OptionValue::Text(s) => Ok(s.trim().to_string()),
        OptionValue::Number(_) | OptionValue::List(_) => {
            Err(anyhow!("{key}: expected a string"))
        }
    }
}

fn padding_value(key: &str, v: OptionValue) -> anyhow::Result<Vec<f64>> {
    match v {
        OptionValue::Text(s) => parse_padding(key, &s),
        OptionValue::List(items) => items.into_iter().map(|i| number_value(key, i)).collect(),
        OptionValue::Number(_) => Err(anyhow!("{key}: expected a list of numbers")),
    }
}

fn colors_value(key: &str, v: OptionValue) -> anyhow::Result<Vec<String>> {
    match v {
        OptionValue::Text(s) => Ok(parse_list(&s)),
        OptionValue::List(items) => items.into_iter().map(|i| text_value(key, i)).collect(),
        OptionValue::Number(_) => Err(anyhow!("{key}: expected a list of colors")),
    }
}

fn read_field<F, T>(
    lookup: &F,
    name: &'static str,
    parse: fn(&str, OptionValue) -> anyhow::Result<T>,
) -> anyhow::Result<Option<T>>
where
    F: Fn(&str) -> anyhow::Result<Option<OptionValue>>,
{
    lookup(name)?.map(|v| parse(name, v)).transpose()
}

/// Build options from a name lookup. Unset names keep their defaults.
pub fn options_from_lookup<F>(lookup: F, style: KeyStyle) -> anyhow::Result<ConfigOptions>
where
    F: Fn(&str) -> anyhow::Result<Option<OptionValue>>,
{
    let name = |key: OptionKey| key.name(style);

    Ok(ConfigOptions {
        triangle_edge: read_field(&lookup, name(TRIANGLE_EDGE), number_value)?,
        cube_edge: read_field(&lookup, name(CUBE_EDGE), number_value)?,
        cubes_per_triangle_edge: read_field(&lookup, name(CUBES_PER_TRIANGLE_EDGE), count_value)?,
        padding: read_field(&lookup, name(PADDING), padding_value)?,
        loop_frames: read_field(&lookup, name(LOOP_FRAMES), count_value)?,
        line_width: read_field(&lookup, name(LINE_WIDTH), number_value)?,
        line_color: read_field(&lookup, name(LINE_COLOR), text_value)?,
        cube_colors: read_field(&lookup, name(CUBE_COLORS), colors_value)?,
    })
}
