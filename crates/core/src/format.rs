//! Conversion between [`ColorValue`] and its textual representations.
//!
//! Output: `#rrggbb`, `rgb()`/`rgba()`, `hsl()`/`hsla()`, `cmyk()`.
//! Input: hex (3, 4, 6 or 8 digits, `#` optional), `rgb()`/`rgba()`,
//! `hsl()`/`hsla()` (comma or space separated, optional `/ alpha`) and CSS
//! named colors. Parse failures come back as
//! [`ColorError::InvalidColorFormat`] so an interactive caller can keep its
//! last valid color.

use crate::color::{ColorValue, Hsl, Rgb};
use crate::error::{ColorError, Result};
use crate::names;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CMYK components, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// The textual formats a color can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
    Cmyk,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 4] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Hsl,
        ColorFormat::Cmyk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Cmyk => "cmyk",
        }
    }

    /// Returns all format names in display order.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.name()).collect()
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == lower)
            .ok_or_else(|| ColorError::UnknownFormat(s.to_string()))
    }
}

/// Renders `c` in the requested format.
pub fn format(c: &ColorValue, fmt: ColorFormat) -> String {
    match fmt {
        ColorFormat::Hex => to_hex(c),
        ColorFormat::Rgb => to_rgb_string(c),
        ColorFormat::Hsl => to_hsl_string(c),
        ColorFormat::Cmyk => to_cmyk_string(c),
    }
}

/// `#rrggbb`, lowercase. Alpha is never included.
pub fn to_hex(c: &ColorValue) -> String {
    format!("#{:02x}{:02x}{:02x}", c.red(), c.green(), c.blue())
}

/// `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise.
pub fn to_rgb_string(c: &ColorValue) -> String {
    if c.is_opaque() {
        format!("rgb({}, {}, {})", c.red(), c.green(), c.blue())
    } else {
        format!(
            "rgba({}, {}, {}, {})",
            c.red(),
            c.green(),
            c.blue(),
            format_alpha(c.alpha())
        )
    }
}

/// `hsl(h, s%, l%)` with integer degrees and percents; `hsla(...)` when translucent.
pub fn to_hsl_string(c: &ColorValue) -> String {
    let (h, s, l) = rounded_hsl(c);
    if c.is_opaque() {
        format!("hsl({h}, {s}%, {l}%)")
    } else {
        format!("hsla({h}, {s}%, {l}%, {})", format_alpha(c.alpha()))
    }
}

/// Hue in whole degrees and saturation/lightness in whole percents.
pub fn rounded_hsl(c: &ColorValue) -> (i64, i64, i64) {
    let hsl = c.hsl();
    (
        (hsl.h.round() as i64).rem_euclid(360),
        (hsl.s * 100.0).round() as i64,
        (hsl.l * 100.0).round() as i64,
    )
}

/// Standard RGB -> CMYK. Pure black maps to `c = m = y = 0, k = 1`.
pub fn to_cmyk(c: &ColorValue) -> Cmyk {
    let r = c.red() as f64 / 255.0;
    let g = c.green() as f64 / 255.0;
    let b = c.blue() as f64 / 255.0;
    let k = 1.0 - r.max(g).max(b);

    if k >= 1.0 {
        return Cmyk {
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k: 1.0,
        };
    }

    Cmyk {
        c: (1.0 - r - k) / (1.0 - k),
        m: (1.0 - g - k) / (1.0 - k),
        y: (1.0 - b - k) / (1.0 - k),
        k,
    }
}

/// `cmyk(C%, M%, Y%, K%)` with each component rounded to a whole percent.
pub fn to_cmyk_string(c: &ColorValue) -> String {
    let cmyk = to_cmyk(c);
    let pct = |v: f64| (v * 100.0).round() as i64;
    format!(
        "cmyk({}%, {}%, {}%, {}%)",
        pct(cmyk.c),
        pct(cmyk.m),
        pct(cmyk.y),
        pct(cmyk.k)
    )
}

/// Structured channels, for callers that want numbers rather than strings.
pub fn to_rgb(c: &ColorValue) -> Rgb {
    c.rgb()
}

/// Structured HSL, for callers that want numbers rather than strings.
pub fn to_hsl(c: &ColorValue) -> Hsl {
    c.hsl()
}

/// Alpha with at most two decimals and no trailing zeros.
///
/// Only called for translucent colors, so the value is capped at 0.99 and
/// never prints as `1`.
fn format_alpha(a: f64) -> String {
    let a = a.min(MAX_TRANSLUCENT_ALPHA);
    let s = format!("{a:.2}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

const MAX_TRANSLUCENT_ALPHA: f64 = 0.99;

/// Parses any supported color notation.
pub fn parse(input: &str) -> Result<ColorValue> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();

    let parsed = if lower.is_empty() {
        None
    } else if let Some(hex) = lower.strip_prefix('#') {
        parse_hex(hex)
    } else if let Some(args) = function_args(&lower, &["rgba", "rgb"]) {
        parse_rgb_args(args)
    } else if let Some(args) = function_args(&lower, &["hsla", "hsl"]) {
        parse_hsl_args(args)
    } else if let Some(c) = names::lookup(&lower) {
        Some(c)
    } else {
        parse_hex(&lower)
    };

    parsed.ok_or_else(|| {
        tracing::debug!(input, "rejected color input");
        ColorError::InvalidColorFormat(input.to_string())
    })
}

/// Parses bare hex digits: `rgb`, `rgba`, `rrggbb` or `rrggbbaa`.
fn parse_hex(hex: &str) -> Option<ColorValue> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok();
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 | 4 => {
            let r = digit(0)? * 17;
            let g = digit(1)? * 17;
            let b = digit(2)? * 17;
            let a = if hex.len() == 4 { digit(3)? * 17 } else { 255 };
            Some(ColorValue::from_rgba(r, g, b, a as f64 / 255.0))
        }
        6 | 8 => {
            let r = pair(0)?;
            let g = pair(2)?;
            let b = pair(4)?;
            let a = if hex.len() == 8 { pair(6)? } else { 255 };
            Some(ColorValue::from_rgba(r, g, b, a as f64 / 255.0))
        }
        _ => None,
    }
}

/// Strips `name(` ... `)` for the first matching function name.
fn function_args<'a>(s: &'a str, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        s.strip_prefix(name)
            .and_then(|rest| rest.trim_start().strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
    })
}

/// Splits function arguments into three components and an optional alpha.
///
/// Accepts `a, b, c`, `a, b, c, alpha`, `a b c` and `a b c / alpha`.
fn split_components(args: &str) -> Option<([&str; 3], Option<&str>)> {
    let (main, slash_alpha) = match args.split_once('/') {
        Some((main, alpha)) => (main, Some(alpha.trim())),
        None => (args, None),
    };

    let parts: Vec<&str> = main
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    match (parts.as_slice(), slash_alpha) {
        (&[a, b, c], alpha) => Some(([a, b, c], alpha)),
        (&[a, b, c, alpha], None) => Some(([a, b, c], Some(alpha))),
        _ => None,
    }
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A channel as `0-255` or `0%-100%`, clamped.
fn parse_channel(token: &str) -> Option<u8> {
    let value = match token.strip_suffix('%') {
        Some(pct) => parse_number(pct)? * 255.0 / 100.0,
        None => parse_number(token)?,
    };
    Some(value.round().clamp(0.0, 255.0) as u8)
}

/// Alpha as `0-1` or `0%-100%`, clamped.
fn parse_alpha(token: &str) -> Option<f64> {
    let value = match token.strip_suffix('%') {
        Some(pct) => parse_number(pct)? / 100.0,
        None => parse_number(token)?,
    };
    Some(value.clamp(0.0, 1.0))
}

/// Saturation and lightness must carry a `%`.
fn parse_percent(token: &str) -> Option<f64> {
    let digits = token.strip_suffix('%')?;
    Some((parse_number(digits)? / 100.0).clamp(0.0, 1.0))
}

fn parse_hue(token: &str) -> Option<f64> {
    parse_number(token.strip_suffix("deg").unwrap_or(token))
}

fn parse_rgb_args(args: &str) -> Option<ColorValue> {
    let ([r, g, b], alpha) = split_components(args)?;
    let a = match alpha {
        Some(token) => parse_alpha(token)?,
        None => 1.0,
    };
    Some(ColorValue::from_rgba(
        parse_channel(r)?,
        parse_channel(g)?,
        parse_channel(b)?,
        a,
    ))
}

fn parse_hsl_args(args: &str) -> Option<ColorValue> {
    let ([h, s, l], alpha) = split_components(args)?;
    let a = match alpha {
        Some(token) => parse_alpha(token)?,
        None => 1.0,
    };
    Some(ColorValue::from_hsla(
        parse_hue(h)?,
        parse_percent(s)?,
        parse_percent(l)?,
        a,
    ))
}
