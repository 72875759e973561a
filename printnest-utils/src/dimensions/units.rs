//! Physical length units found in design files

use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;

static LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\+?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*([a-zA-Z%]*)\s*$")
        .expect("valid length pattern")
});

/// Millimeters per PostScript point (1/72 inch)
pub const PT_TO_MM: f32 = 0.352778;
/// Millimeters per CSS pixel, at 96 DPI
pub const PX_TO_MM: f32 = 0.264583;
pub const IN_TO_MM: f32 = 25.4;
pub const CM_TO_MM: f32 = 10.0;

/// Parses an SVG length such as `85mm`, `3.5in` or `300` into millimeters.
/// A length without unit is taken to be in millimeters.
pub fn parse_length(value: &str) -> Result<f32> {
    let caps = LENGTH
        .captures(value)
        .with_context(|| format!("not a length: {value:?}"))?;
    let magnitude: f32 = caps[1].parse()?;
    let factor = match caps[2].to_ascii_lowercase().as_str() {
        "" | "mm" => 1.0,
        "cm" => CM_TO_MM,
        "in" | "inch" => IN_TO_MM,
        "px" => PX_TO_MM,
        "pt" => PT_TO_MM,
        unit => bail!("unsupported unit {unit:?} in length {value:?}"),
    };
    Ok(magnitude * factor)
}
