//! WCAG 2.x contrast analysis and black-or-white overlay decisions.
//!
//! Two separate notions of "light" live here and are not interchangeable:
//!
//! - [`relative_luminance`] is the WCAG formula and drives [`contrast_ratio`]
//!   and the AA/AAA classification.
//! - [`brightness`] is YIQ perceived brightness and drives [`is_dark`],
//!   which in turn drives every overlay-text choice ([`readable_text_color`],
//!   [`contrast_accent`]).
//!
//! Alpha is ignored throughout; colors are compared as if opaque.

use crate::color::ColorValue;
use serde::Serialize;

/// Linearization cut-off for 8-bit sRGB, as published in WCAG 2.x.
const LINEAR_THRESHOLD: f64 = 0.03928;

/// Brightness below this counts as dark.
const DARK_THRESHOLD: f64 = 0.5;

/// Lightness shift used by [`contrast_accent`].
const ACCENT_SHIFT: f64 = 0.4;

/// Quick-pick colors offered when checking a background against typical text.
pub const COMMON_CONTRAST_COLORS: [ColorValue; 6] = [
    ColorValue::from_rgb(0xff, 0xff, 0xff),
    ColorValue::from_rgb(0x00, 0x00, 0x00),
    ColorValue::from_rgb(0xf8, 0xf9, 0xfa),
    ColorValue::from_rgb(0x21, 0x25, 0x29),
    ColorValue::from_rgb(0x6c, 0x75, 0x7d),
    ColorValue::from_rgb(0x34, 0x3a, 0x40),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WcagLevel {
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    /// Body text.
    Normal,
    /// 18pt and up, or 14pt bold and up.
    Large,
}

/// One row of the WCAG success-criterion table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Criterion {
    pub level: WcagLevel,
    pub size: TextSize,
    /// Inclusive lower bound on the contrast ratio.
    pub min_ratio: f64,
}

/// Thresholds for 1.4.3 (AA) and 1.4.6 (AAA).
///
/// AA-normal and AAA-large share 4.5, so a pair passes both or neither.
pub const CRITERIA: [Criterion; 4] = [
    Criterion {
        level: WcagLevel::Aa,
        size: TextSize::Large,
        min_ratio: 3.0,
    },
    Criterion {
        level: WcagLevel::Aa,
        size: TextSize::Normal,
        min_ratio: 4.5,
    },
    Criterion {
        level: WcagLevel::Aaa,
        size: TextSize::Large,
        min_ratio: 4.5,
    },
    Criterion {
        level: WcagLevel::Aaa,
        size: TextSize::Normal,
        min_ratio: 7.0,
    },
];

/// Minimum ratio for a level and text size, looked up in [`CRITERIA`].
pub fn threshold(level: WcagLevel, size: TextSize) -> f64 {
    CRITERIA
        .iter()
        .find(|c| c.level == level && c.size == size)
        .map(|c| c.min_ratio)
        .unwrap_or(f64::INFINITY)
}

/// Whether `ratio` meets the criterion for `level` and `size`.
pub fn passes(ratio: f64, level: WcagLevel, size: TextSize) -> bool {
    ratio >= threshold(level, size)
}

fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= LINEAR_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in [0, 1].
pub fn relative_luminance(c: &ColorValue) -> f64 {
    0.2126 * linearize(c.red()) + 0.7152 * linearize(c.green()) + 0.0722 * linearize(c.blue())
}

/// WCAG contrast ratio in [1, 21]. Symmetric in its arguments.
pub fn contrast_ratio(a: &ColorValue, b: &ColorValue) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// The ratio floored to two decimals, for display.
///
/// Flooring keeps a displayed "4.50" from hiding a ratio of 4.497 that fails AA.
pub fn display_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).floor() / 100.0
}

/// The ratio between two colors plus the four WCAG pass/fail flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastReport {
    pub ratio: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl ContrastReport {
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            aa_normal: passes(ratio, WcagLevel::Aa, TextSize::Normal),
            aa_large: passes(ratio, WcagLevel::Aa, TextSize::Large),
            aaa_normal: passes(ratio, WcagLevel::Aaa, TextSize::Normal),
            aaa_large: passes(ratio, WcagLevel::Aaa, TextSize::Large),
        }
    }

    pub fn display_ratio(&self) -> f64 {
        display_ratio(self.ratio)
    }

    /// `"4.46:1"`.
    pub fn ratio_label(&self) -> String {
        format!("{:.2}:1", self.display_ratio())
    }

    /// Highest level passed for normal-size text, if any.
    pub fn normal_text_level(&self) -> Option<WcagLevel> {
        if self.aaa_normal {
            Some(WcagLevel::Aaa)
        } else if self.aa_normal {
            Some(WcagLevel::Aa)
        } else {
            None
        }
    }
}

/// Contrast between `background` and `foreground`.
pub fn analyze(background: &ColorValue, foreground: &ColorValue) -> ContrastReport {
    ContrastReport::from_ratio(contrast_ratio(background, foreground))
}

/// YIQ perceived brightness in [0, 1].
pub fn brightness(c: &ColorValue) -> f64 {
    let (r, g, b) = (c.red() as f64, c.green() as f64, c.blue() as f64);
    (299.0 * r + 587.0 * g + 114.0 * b) / 1000.0 / 255.0
}

pub fn is_dark(c: &ColorValue) -> bool {
    brightness(c) < DARK_THRESHOLD
}

pub fn is_light(c: &ColorValue) -> bool {
    !is_dark(c)
}

/// White text on dark colors, black text on light ones.
pub fn readable_text_color(background: &ColorValue) -> ColorValue {
    if is_dark(background) {
        ColorValue::WHITE
    } else {
        ColorValue::BLACK
    }
}

/// A tinted text color in the background's own hue: lightened on dark
/// backgrounds, darkened on light ones.
pub fn contrast_accent(background: &ColorValue) -> ColorValue {
    if is_dark(background) {
        background.lighten(ACCENT_SHIFT)
    } else {
        background.darken(ACCENT_SHIFT)
    }
}
