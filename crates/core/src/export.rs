//! Copy-paste snippets that carry one color into a stylesheet or config file.
//!
//! Every snippet exposes the same data: the hex value, the RGB and HSL
//! triples, and `lighten(0.2)`/`darken(0.2)` variants under the `primary`
//! name.

use crate::color::ColorValue;
use crate::error::{ColorError, Result};
use crate::format::{rounded_hsl, to_cmyk, to_hex};
use crate::names::closest_name;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

/// Lightness shift for the `light` and `dark` variants.
pub const VARIANT_SHIFT: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Css,
    Scss,
    Tailwind,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Css,
        ExportFormat::Tailwind,
        ExportFormat::Scss,
        ExportFormat::Json,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::Json => "json",
        }
    }

    /// Suggested download name for the snippet.
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Css => "color-variables.css",
            ExportFormat::Scss => "color-variables.scss",
            ExportFormat::Tailwind => "tailwind.config.js",
            ExportFormat::Json => "color-data.json",
        }
    }

    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.name()).collect()
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == key)
            .ok_or_else(|| ColorError::UnknownExportFormat(s.to_string()))
    }
}

/// Renders the snippet for `format`.
pub fn render(c: &ColorValue, format: ExportFormat) -> String {
    match format {
        ExportFormat::Css => css_variables(c),
        ExportFormat::Scss => scss_variables(c),
        ExportFormat::Tailwind => tailwind_config(c),
        ExportFormat::Json => json_document(c),
    }
}

fn light_dark(c: &ColorValue) -> (String, String) {
    (
        to_hex(&c.lighten(VARIANT_SHIFT)),
        to_hex(&c.darken(VARIANT_SHIFT)),
    )
}

/// `(prefix, value)` pairs shared by the CSS and SCSS renderers.
fn variable_rows(c: &ColorValue) -> [(&'static str, String); 5] {
    let (h, s, l) = rounded_hsl(c);
    let (light, dark) = light_dark(c);
    [
        ("", to_hex(c)),
        ("-rgb", format!("{}, {}, {}", c.red(), c.green(), c.blue())),
        ("-hsl", format!("{h}, {s}%, {l}%")),
        ("-light", light),
        ("-dark", dark),
    ]
}

pub fn css_variables(c: &ColorValue) -> String {
    let mut out = String::from("/* CSS Variables */\n:root {\n");
    for (suffix, value) in variable_rows(c) {
        out.push_str(&format!("  --color-primary{suffix}: {value};\n"));
    }
    out.push_str("}\n");
    out
}

pub fn scss_variables(c: &ColorValue) -> String {
    let mut out = String::from("// SCSS Variables\n");
    for (suffix, value) in variable_rows(c) {
        out.push_str(&format!("$color-primary{suffix}: {value};\n"));
    }
    out
}

pub fn tailwind_config(c: &ColorValue) -> String {
    let (light, dark) = light_dark(c);
    format!(
        "// tailwind.config.js
module.exports = {{
  theme: {{
    extend: {{
      colors: {{
        primary: {{
          DEFAULT: '{}',
          light: '{light}',
          dark: '{dark}',
        }},
      }},
    }},
  }},
}}
",
        to_hex(c)
    )
}

/// A pretty-printed JSON document with every representation of the color.
///
/// HSL and CMYK components are whole numbers on a 0-100 scale (hue in degrees).
pub fn json_value(c: &ColorValue) -> serde_json::Value {
    let (h, s, l) = rounded_hsl(c);
    let cmyk = to_cmyk(c);
    let pct = |v: f64| (v * 100.0).round() as i64;
    let (light, dark) = light_dark(c);
    json!({
        "color": {
            "hex": to_hex(c),
            "rgb": { "r": c.red(), "g": c.green(), "b": c.blue(), "a": c.alpha() },
            "hsl": { "h": h, "s": s, "l": l, "a": c.alpha() },
            "cmyk": {
                "c": pct(cmyk.c),
                "m": pct(cmyk.m),
                "y": pct(cmyk.y),
                "k": pct(cmyk.k),
                "a": c.alpha()
            },
            "name": closest_name(c),
            "variants": { "light": light, "dark": dark }
        }
    })
}

pub fn json_document(c: &ColorValue) -> String {
    let value = json_value(c);
    // serializing a Value built from json! cannot fail
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

/// A link that reopens the app on `c`: `{origin}?color=rrggbb`.
pub fn share_link(origin: &str, c: &ColorValue) -> String {
    format!("{origin}?color={}", to_hex(c).trim_start_matches('#'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indigo() -> ColorValue {
        ColorValue::from_rgb(0x63, 0x66, 0xf1)
    }

    #[test]
    fn format_names_round_trip() {
        for f in ExportFormat::ALL {
            assert_eq!(f.name().parse::<ExportFormat>().unwrap(), f);
        }
        assert_eq!(" CSS ".parse::<ExportFormat>().unwrap(), ExportFormat::Css);
    }

    #[test]
    fn unknown_export_format_is_rejected() {
        assert_eq!(
            "less".parse::<ExportFormat>(),
            Err(ColorError::UnknownExportFormat("less".into()))
        );
    }

    #[test]
    fn css_snippet() {
        let expected = "/* CSS Variables */
:root {
  --color-primary: #6366f1;
  --color-primary-rgb: 99, 102, 241;
  --color-primary-hsl: 239, 84%, 67%;
  --color-primary-light: #c1c2f9;
  --color-primary-dark: #1418da;
}
";
        assert_eq!(css_variables(&indigo()), expected);
    }

    #[test]
    fn scss_snippet() {
        let out = render(&indigo(), ExportFormat::Scss);
        assert!(out.starts_with("// SCSS Variables\n$color-primary: #6366f1;\n"));
        assert!(out.contains("$color-primary-rgb: 99, 102, 241;\n"));
        assert!(out.contains("$color-primary-hsl: 239, 84%, 67%;\n"));
        assert!(out.ends_with("$color-primary-dark: #1418da;\n"));
    }

    #[test]
    fn tailwind_snippet() {
        let out = render(&indigo(), ExportFormat::Tailwind);
        assert!(out.starts_with("// tailwind.config.js\nmodule.exports = {\n"));
        assert!(out.contains("          DEFAULT: '#6366f1',\n"));
        assert!(out.contains("          light: '#c1c2f9',\n"));
        assert!(out.contains("          dark: '#1418da',\n"));
        assert_eq!(out.matches('{').count(), out.matches('}').count());
    }

    #[test]
    fn json_snippet_parses_back() {
        let out = render(&indigo(), ExportFormat::Json);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        let color = &v["color"];
        assert_eq!(color["hex"], "#6366f1");
        assert_eq!(color["rgb"]["g"], 102);
        assert_eq!(color["hsl"]["h"], 239);
        assert_eq!(color["hsl"]["s"], 84);
        assert_eq!(color["cmyk"]["c"], 59);
        assert_eq!(color["cmyk"]["k"], 5);
        assert_eq!(color["name"], "mediumslateblue");
        assert_eq!(color["variants"]["light"], "#c1c2f9");
        assert_eq!(color["variants"]["dark"], "#1418da");
    }

    #[test]
    fn variants_of_white_and_black() {
        let v = json_value(&ColorValue::WHITE);
        assert_eq!(v["color"]["variants"]["light"], "#ffffff");
        assert_eq!(v["color"]["variants"]["dark"], "#cccccc");
        assert_eq!(v["color"]["cmyk"]["k"], 0);

        let v = json_value(&ColorValue::BLACK);
        assert_eq!(v["color"]["variants"]["dark"], "#000000");
        assert_eq!(v["color"]["cmyk"]["k"], 100);
    }

    #[test]
    fn share_link_drops_the_hash() {
        assert_eq!(
            share_link("https://colors.example", &indigo()),
            "https://colors.example?color=6366f1"
        );
    }

    #[test]
    fn file_names_match_extensions() {
        assert!(ExportFormat::Css.file_name().ends_with(".css"));
        assert!(ExportFormat::Scss.file_name().ends_with(".scss"));
        assert!(ExportFormat::Tailwind.file_name().ends_with(".js"));
        assert!(ExportFormat::Json.file_name().ends_with(".json"));
    }
}
