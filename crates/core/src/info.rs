//! A color together with every representation a view needs.

use crate::color::{ColorValue, Hsl, Rgb};
use crate::contrast::{is_dark, readable_text_color};
use crate::error::Result;
use crate::format::{self, Cmyk};
use crate::names::{closest_name, exact_name};
use serde::Serialize;

/// Precomputed strings, structured triples and naming for one color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorInfo {
    pub color: ColorValue,
    pub hex: String,
    pub rgb_string: String,
    pub hsl_string: String,
    pub cmyk_string: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub cmyk: Cmyk,
    pub alpha: f64,
    /// Nearest CSS color name; always present.
    pub name: &'static str,
    /// True only when `name` matches the channels exactly.
    pub exact_name: bool,
    pub is_dark: bool,
    /// Black or white, whichever reads on top of this color.
    pub text_color: ColorValue,
}

impl ColorInfo {
    pub fn from_color(c: &ColorValue) -> Self {
        Self {
            color: *c,
            hex: format::to_hex(c),
            rgb_string: format::to_rgb_string(c),
            hsl_string: format::to_hsl_string(c),
            cmyk_string: format::to_cmyk_string(c),
            rgb: format::to_rgb(c),
            hsl: format::to_hsl(c),
            cmyk: format::to_cmyk(c),
            alpha: c.alpha(),
            name: closest_name(c),
            exact_name: exact_name(c).is_some(),
            is_dark: is_dark(c),
            text_color: readable_text_color(c),
        }
    }
}

/// Parses `input` and describes it.
pub fn describe(input: &str) -> Result<ColorInfo> {
    let c = format::parse(input)?;
    Ok(ColorInfo::from_color(&c))
}
