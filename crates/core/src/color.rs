//! The canonical color value and the RGB <-> HSL math behind it.
//!
//! A [`ColorValue`] stores 8-bit sRGB channels plus a floating alpha. HSL is
//! derived on demand, so every representation comes from the same channels.
//! Values are immutable: hue rotation and lightness changes return a new
//! `ColorValue` and leave the receiver untouched.

use crate::error::ColorError;
use crate::format;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL triple: hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// One fully specified color.
///
/// Two values with the same channels are interchangeable; there is no
/// identity beyond the value itself.
///
/// Serializes as a CSS color string (`"#rrggbb"` when opaque, `"rgba(...)"`
/// otherwise) and deserializes through [`format::parse`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorValue {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
}

impl ColorValue {
    /// Opaque black.
    pub const BLACK: ColorValue = ColorValue::from_rgb(0, 0, 0);

    /// Opaque white.
    pub const WHITE: ColorValue = ColorValue::from_rgb(255, 255, 255);

    /// Builds an opaque color from 8-bit channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Builds a color from 8-bit channels and an alpha in [0, 1].
    ///
    /// Alpha is clamped; NaN is treated as fully opaque.
    pub fn from_rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: clamp_alpha(a),
        }
    }

    /// Builds an opaque color from HSL (hue in degrees, s/l in [0, 1]).
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        Self::from_hsla(h, s, l, 1.0)
    }

    /// Builds a color from HSL plus alpha. Channels round to the nearest integer.
    pub fn from_hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        let rgb = hsl_to_rgb(Hsl { h, s, l });
        Self::from_rgba(rgb.r, rgb.g, rgb.b, a)
    }

    pub fn red(&self) -> u8 {
        self.r
    }

    pub fn green(&self) -> u8 {
        self.g
    }

    pub fn blue(&self) -> u8 {
        self.b
    }

    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// True when alpha is 1.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// The 8-bit channels.
    pub fn rgb(&self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// The HSL representation derived from the channels.
    pub fn hsl(&self) -> Hsl {
        rgb_to_hsl(self.rgb())
    }

    pub fn hue(&self) -> f64 {
        self.hsl().h
    }

    pub fn saturation(&self) -> f64 {
        self.hsl().s
    }

    pub fn lightness(&self) -> f64 {
        self.hsl().l
    }

    /// Returns a copy with the given alpha.
    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        Self::from_rgba(self.r, self.g, self.b, a)
    }

    /// Rotates the hue by `degrees` (any sign, wraps modulo 360).
    ///
    /// The current hue is rounded to a whole degree before the offset is
    /// added. Saturation, lightness and alpha are kept unrounded.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        let hsl = self.hsl();
        Self::from_hsla(hsl.h.round() + degrees, hsl.s, hsl.l, self.a)
    }

    /// Raises HSL lightness by `amount` (a fraction of the full 0-1 range).
    ///
    /// The result is clamped, so `lighten(1.0)` is always white.
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        let hsl = self.hsl();
        let l = (hsl.l + amount).clamp(0.0, 1.0);
        Self::from_hsla(hsl.h, hsl.s, l, self.a)
    }

    /// Lowers HSL lightness by `amount`. `darken(1.0)` is always black.
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.lighten(-amount)
    }
}

impl Default for ColorValue {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Rgb> for ColorValue {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Hsl> for ColorValue {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl.h, hsl.s, hsl.l)
    }
}

impl FromStr for ColorValue {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format::parse(s)
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_opaque() {
            serializer.serialize_str(&format::to_hex(self))
        } else {
            serializer.serialize_str(&format::to_rgb_string(self))
        }
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        format::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn clamp_alpha(a: f64) -> f64 {
    if a.is_nan() {
        1.0
    } else {
        a.clamp(0.0, 1.0)
    }
}

/// Normalizes a hue angle to [0, 360).
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Converts 8-bit sRGB to HSL using the hexcone model.
///
/// Achromatic colors (r == g == b) report hue 0 and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl {
        h: normalize_hue(sector * 60.0),
        s,
        l,
    }
}

/// Converts HSL to 8-bit sRGB.
///
/// Hue wraps modulo 360; saturation and lightness are clamped to [0, 1].
/// Each channel is rounded to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = normalize_hue(hsl.h);
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);
    let a = s * l.min(1.0 - l);

    let channel = |n: f64| -> u8 {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let v = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgb {
        r: channel(0.0),
        g: channel(8.0),
        b: channel(4.0),
    }
}
