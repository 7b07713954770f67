//! Reproducible description of a generated palette.
//!
//! A [`PaletteRecipe`] captures everything needed to regenerate a palette:
//! base color, scheme, angle and count. Stored as JSON, e.g.
//!
//! ```json
//! { "base": "#6366f1", "scheme": "analogous", "angle": 40, "count": 5 }
//! ```

use crate::color::ColorValue;
use crate::error::Result;
use crate::palette::{self, Palette, Scheme, SchemeParams, DEFAULT_ANGLE, DEFAULT_COUNT};
use serde::{Deserialize, Serialize};

fn default_angle() -> i64 {
    DEFAULT_ANGLE as i64
}

fn default_count() -> i64 {
    DEFAULT_COUNT as i64
}

/// Base color, scheme and parameters. Two equal recipes produce equal palettes.
///
/// `angle` and `count` are stored unchecked so a recipe file with bad values
/// still loads; [`PaletteRecipe::validate`] reports them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaletteRecipe {
    pub base: ColorValue,
    pub scheme: Scheme,
    #[serde(default = "default_angle")]
    pub angle: i64,
    #[serde(default = "default_count")]
    pub count: i64,
}

impl PaletteRecipe {
    /// A recipe with the default angle (30) and count (5).
    pub fn new(base: ColorValue, scheme: Scheme) -> Self {
        Self {
            base,
            scheme,
            angle: default_angle(),
            count: default_count(),
        }
    }

    pub fn with_params(base: ColorValue, scheme: Scheme, params: SchemeParams) -> Self {
        Self {
            base,
            scheme,
            angle: params.angle() as i64,
            count: params.count() as i64,
        }
    }

    /// Checks angle and count against their ranges.
    pub fn validate(&self) -> Result<SchemeParams> {
        SchemeParams::new(self.angle, self.count)
    }

    pub fn generate(&self) -> Result<Palette> {
        let params = self.validate()?;
        Ok(palette::generate(&self.base, self.scheme, params))
    }
}
