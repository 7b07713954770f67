//! Color-harmony palettes derived from a single base color.
//!
//! Every scheme is a fixed list of [`Derivation`]s applied to the base: hue
//! rotations for the wheel-based schemes, HSL lightness steps for
//! monochromatic and shades. Generation is a pure function of
//! `(base, scheme, params)`; each [`Swatch`] records the derivation that
//! produced it so a caller can explain the result without recomputing it.

use crate::color::ColorValue;
use crate::error::{ColorError, Result};
use crate::format;
use crate::params::param_i64;
use crate::prng::Xorshift64;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const MIN_ANGLE: u32 = 10;
pub const MAX_ANGLE: u32 = 90;
pub const DEFAULT_ANGLE: u32 = 30;

pub const MIN_COUNT: usize = 3;
pub const MAX_COUNT: usize = 9;
pub const DEFAULT_COUNT: usize = 5;

/// Range of angles offered by [`suggest_angle`].
pub const SUGGESTED_ANGLE_MIN: u32 = 10;
pub const SUGGESTED_ANGLE_MAX: u32 = 70;

/// A named rule for deriving a palette from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    SplitComplementary,
    Monochromatic,
    Shades,
}

impl Scheme {
    pub const ALL: [Scheme; 7] = [
        Scheme::Complementary,
        Scheme::Analogous,
        Scheme::Triadic,
        Scheme::Tetradic,
        Scheme::SplitComplementary,
        Scheme::Monochromatic,
        Scheme::Shades,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scheme::Complementary => "complementary",
            Scheme::Analogous => "analogous",
            Scheme::Triadic => "triadic",
            Scheme::Tetradic => "tetradic",
            Scheme::SplitComplementary => "split-complementary",
            Scheme::Monochromatic => "monochromatic",
            Scheme::Shades => "shades",
        }
    }

    /// Whether the angle parameter affects this scheme.
    pub fn uses_angle(self) -> bool {
        matches!(self, Scheme::Analogous | Scheme::SplitComplementary)
    }

    /// Whether the count parameter affects this scheme.
    pub fn uses_count(self) -> bool {
        matches!(self, Scheme::Monochromatic | Scheme::Shades)
    }

    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name() == key)
            .ok_or_else(|| ColorError::UnknownScheme(s.to_string()))
    }
}

/// Validated scheme parameters: angle in 10..=90 degrees, count in 3..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemeParams {
    angle: u32,
    count: usize,
}

impl Default for SchemeParams {
    fn default() -> Self {
        Self {
            angle: DEFAULT_ANGLE,
            count: DEFAULT_COUNT,
        }
    }
}

impl SchemeParams {
    /// Builds parameters, rejecting anything out of range.
    pub fn new(angle: i64, count: i64) -> Result<Self> {
        check_range("angle", angle, MIN_ANGLE as i64, MAX_ANGLE as i64)?;
        check_range("count", count, MIN_COUNT as i64, MAX_COUNT as i64)?;
        Ok(Self {
            angle: angle as u32,
            count: count as usize,
        })
    }

    /// Builds parameters, clamping each value to its nearest bound.
    pub fn clamped(angle: i64, count: i64) -> Self {
        let a = angle.clamp(MIN_ANGLE as i64, MAX_ANGLE as i64);
        let c = count.clamp(MIN_COUNT as i64, MAX_COUNT as i64);
        if a != angle || c != count {
            tracing::debug!(angle, count, clamped_angle = a, clamped_count = c, "clamped scheme params");
        }
        Self {
            angle: a as u32,
            count: c as usize,
        }
    }

    /// Reads `angle` and `count` from a JSON object, clamping out-of-range values.
    pub fn from_json(params: &Value) -> Self {
        Self::clamped(
            param_i64(params, "angle", DEFAULT_ANGLE as i64),
            param_i64(params, "count", DEFAULT_COUNT as i64),
        )
    }

    /// Replaces the angle, rejecting out-of-range values.
    pub fn with_angle(self, angle: i64) -> Result<Self> {
        Self::new(angle, self.count as i64)
    }

    /// Replaces the count, rejecting out-of-range values.
    pub fn with_count(self, count: i64) -> Result<Self> {
        Self::new(self.angle as i64, count)
    }

    pub fn angle(&self) -> u32 {
        self.angle
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

fn check_range(name: &str, value: i64, min: i64, max: i64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ColorError::InvalidParameter {
            name: name.to_string(),
            value,
            min,
            max,
        })
    }
}

/// How one palette entry was derived from the base color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Derivation {
    /// The base color itself.
    Base,
    /// Hue rotated by `degrees`.
    Rotate { degrees: f64 },
    /// HSL lightness raised by `amount`.
    Lighten { amount: f64 },
    /// HSL lightness lowered by `amount`.
    Darken { amount: f64 },
}

impl Derivation {
    pub fn apply(self, base: &ColorValue) -> ColorValue {
        match self {
            Derivation::Base => *base,
            Derivation::Rotate { degrees } => base.rotate(degrees),
            Derivation::Lighten { amount } => base.lighten(amount),
            Derivation::Darken { amount } => base.darken(amount),
        }
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Derivation::Base => f.write_str("base"),
            Derivation::Rotate { degrees } => write!(f, "rotate {degrees:+}°"),
            Derivation::Lighten { amount } => write!(f, "lighten {:.0}%", amount * 100.0),
            Derivation::Darken { amount } => write!(f, "darken {:.0}%", amount * 100.0),
        }
    }
}

/// One palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    pub color: ColorValue,
    pub derivation: Derivation,
}

/// An ordered palette produced by [`generate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    scheme: Scheme,
    params: SchemeParams,
    swatches: Vec<Swatch>,
}

impl Palette {
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn params(&self) -> SchemeParams {
        self.params
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// Always false for generated palettes.
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    pub fn colors(&self) -> Vec<ColorValue> {
        self.swatches.iter().map(|s| s.color).collect()
    }

    /// `#rrggbb` strings in palette order.
    pub fn hexes(&self) -> Vec<String> {
        self.swatches.iter().map(|s| format::to_hex(&s.color)).collect()
    }
}

/// The derivation list for a scheme, in output order.
pub fn derivations(scheme: Scheme, params: SchemeParams) -> Vec<Derivation> {
    let rotate = |degrees: f64| Derivation::Rotate { degrees };
    let angle = params.angle as f64;
    let n = params.count;
    let step = |i: usize| i as f64 / (n - 1) as f64;

    match scheme {
        Scheme::Complementary => vec![Derivation::Base, rotate(180.0)],
        Scheme::Analogous => vec![rotate(-angle), Derivation::Base, rotate(angle)],
        Scheme::Triadic => vec![Derivation::Base, rotate(120.0), rotate(240.0)],
        Scheme::Tetradic => vec![
            Derivation::Base,
            rotate(90.0),
            rotate(180.0),
            rotate(270.0),
        ],
        Scheme::SplitComplementary => vec![
            Derivation::Base,
            rotate(180.0 - angle),
            rotate(180.0 + angle),
        ],
        // earlier entries are lighter; the last one lands back on the base
        Scheme::Monochromatic => (0..n)
            .map(|i| match i {
                0 => Derivation::Base,
                _ => Derivation::Lighten {
                    amount: step(n - 1 - i),
                },
            })
            .collect(),
        Scheme::Shades => (0..n)
            .map(|i| match i {
                0 => Derivation::Base,
                _ => Derivation::Darken { amount: step(i) },
            })
            .collect(),
    }
}

/// Derives the palette for `scheme` from `base`.
pub fn generate(base: &ColorValue, scheme: Scheme, params: SchemeParams) -> Palette {
    let swatches = derivations(scheme, params)
        .into_iter()
        .map(|derivation| Swatch {
            color: derivation.apply(base),
            derivation,
        })
        .collect();
    Palette {
        scheme,
        params,
        swatches,
    }
}

/// `[base, base + 180°]`.
pub fn complementary(base: &ColorValue) -> Palette {
    generate(base, Scheme::Complementary, SchemeParams::default())
}

/// `[base - angle, base, base + angle]`; angle must be in 10..=90.
pub fn analogous(base: &ColorValue, angle: i64) -> Result<Palette> {
    let params = SchemeParams::default().with_angle(angle)?;
    Ok(generate(base, Scheme::Analogous, params))
}

/// `[base, +120°, +240°]`.
pub fn triadic(base: &ColorValue) -> Palette {
    generate(base, Scheme::Triadic, SchemeParams::default())
}

/// `[base, +90°, +180°, +270°]`.
pub fn tetradic(base: &ColorValue) -> Palette {
    generate(base, Scheme::Tetradic, SchemeParams::default())
}

/// `[base, +(180° - angle), +(180° + angle)]`; angle must be in 10..=90.
pub fn split_complementary(base: &ColorValue, angle: i64) -> Result<Palette> {
    let params = SchemeParams::default().with_angle(angle)?;
    Ok(generate(base, Scheme::SplitComplementary, params))
}

/// `count` entries (3..=9): the base, then lightened steps approaching it.
pub fn monochromatic(base: &ColorValue, count: i64) -> Result<Palette> {
    let params = SchemeParams::default().with_count(count)?;
    Ok(generate(base, Scheme::Monochromatic, params))
}

/// `count` entries (3..=9): the base, then progressively darker steps down to black.
pub fn shades(base: &ColorValue, count: i64) -> Result<Palette> {
    let params = SchemeParams::default().with_count(count)?;
    Ok(generate(base, Scheme::Shades, params))
}

/// Suggests an angle in `[10, 70]`. A UI convenience, not part of any scheme.
pub fn suggest_angle(rng: &mut Xorshift64) -> u32 {
    rng.next_in_range(SUGGESTED_ANGLE_MIN, SUGGESTED_ANGLE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indigo() -> ColorValue {
        ColorValue::from_rgb(0x63, 0x66, 0xf1)
    }

    // -- Scheme selectors --

    #[test]
    fn scheme_names_round_trip() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.name().parse::<Scheme>().unwrap(), scheme);
        }
        assert_eq!(
            "Split_Complementary".parse::<Scheme>().unwrap(),
            Scheme::SplitComplementary
        );
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        assert!(matches!(
            "pentadic".parse::<Scheme>(),
            Err(ColorError::UnknownScheme(_))
        ));
    }

    #[test]
    fn scheme_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Scheme::SplitComplementary).unwrap();
        assert_eq!(json, "\"split-complementary\"");
    }

    #[test]
    fn parameter_relevance_flags() {
        let angle: Vec<_> = Scheme::ALL.into_iter().filter(|s| s.uses_angle()).collect();
        let count: Vec<_> = Scheme::ALL.into_iter().filter(|s| s.uses_count()).collect();
        assert_eq!(angle, vec![Scheme::Analogous, Scheme::SplitComplementary]);
        assert_eq!(count, vec![Scheme::Monochromatic, Scheme::Shades]);
    }

    // -- Parameters --

    #[test]
    fn default_params() {
        let p = SchemeParams::default();
        assert_eq!(p.angle(), 30);
        assert_eq!(p.count(), 5);
    }

    #[test]
    fn new_accepts_bounds_and_rejects_outside() {
        assert!(SchemeParams::new(10, 3).is_ok());
        assert!(SchemeParams::new(90, 9).is_ok());

        let err = SchemeParams::new(9, 5).unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidParameter {
                name: "angle".into(),
                value: 9,
                min: 10,
                max: 90
            }
        );
        assert!(SchemeParams::new(91, 5).is_err());
        assert!(SchemeParams::new(30, 2).is_err());
        assert!(SchemeParams::new(30, 10).is_err());
    }

    #[test]
    fn clamped_moves_to_nearest_bound() {
        assert_eq!(SchemeParams::clamped(0, 1), SchemeParams::new(10, 3).unwrap());
        assert_eq!(SchemeParams::clamped(500, 50), SchemeParams::new(90, 9).unwrap());
        assert_eq!(SchemeParams::clamped(45, 7), SchemeParams::new(45, 7).unwrap());
    }

    #[test]
    fn from_json_reads_and_clamps() {
        let p = SchemeParams::from_json(&serde_json::json!({"angle": 40, "count": 7}));
        assert_eq!((p.angle(), p.count()), (40, 7));

        let p = SchemeParams::from_json(&serde_json::json!({"angle": 5, "count": 12}));
        assert_eq!((p.angle(), p.count()), (10, 9));

        let p = SchemeParams::from_json(&serde_json::json!({}));
        assert_eq!(p, SchemeParams::default());
    }

    // -- Wheel schemes --

    #[test]
    fn complementary_of_indigo() {
        let palette = complementary(&indigo());
        assert_eq!(palette.hexes(), vec!["#6366f1", "#f1ef63"]);
        assert_eq!(palette.swatches()[1].derivation, Derivation::Rotate { degrees: 180.0 });
    }

    #[test]
    fn analogous_puts_base_in_the_middle() {
        let palette = analogous(&indigo(), 30).unwrap();
        assert_eq!(palette.hexes(), vec!["#63acf1", "#6366f1", "#a863f1"]);

        let wide = analogous(&indigo(), 45).unwrap();
        assert_eq!(wide.hexes(), vec!["#63d0f1", "#6366f1", "#cb63f1"]);
    }

    #[test]
    fn analogous_rejects_out_of_range_angle() {
        assert!(matches!(
            analogous(&indigo(), 5),
            Err(ColorError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn triadic_and_tetradic_of_indigo() {
        assert_eq!(
            triadic(&indigo()).hexes(),
            vec!["#6366f1", "#f16365", "#65f163"]
        );
        assert_eq!(
            tetradic(&indigo()).hexes(),
            vec!["#6366f1", "#f163ac", "#f1ef63", "#63f1a8"]
        );
    }

    #[test]
    fn triadic_of_red_hits_the_primaries() {
        let red = ColorValue::from_rgb(255, 0, 0);
        assert_eq!(triadic(&red).hexes(), vec!["#ff0000", "#00ff00", "#0000ff"]);
    }

    #[test]
    fn split_complementary_flanks_the_complement() {
        let palette = split_complementary(&indigo(), 30).unwrap();
        assert_eq!(palette.hexes(), vec!["#6366f1", "#f1a863", "#acf163"]);
        let degrees: Vec<_> = palette
            .swatches()
            .iter()
            .map(|s| s.derivation)
            .collect();
        assert_eq!(
            degrees,
            vec![
                Derivation::Base,
                Derivation::Rotate { degrees: 150.0 },
                Derivation::Rotate { degrees: 210.0 }
            ]
        );
    }

    // -- Lightness schemes --

    #[test]
    fn monochromatic_lightens_earlier_entries_more() {
        let palette = monochromatic(&indigo(), 5).unwrap();
        assert_eq!(
            palette.hexes(),
            vec!["#6366f1", "#ffffff", "#ffffff", "#d8d9fc", "#6366f1"]
        );
        let amounts: Vec<_> = palette.swatches()[1..]
            .iter()
            .map(|s| s.derivation)
            .collect();
        assert_eq!(
            amounts,
            vec![
                Derivation::Lighten { amount: 0.75 },
                Derivation::Lighten { amount: 0.5 },
                Derivation::Lighten { amount: 0.25 },
                Derivation::Lighten { amount: 0.0 },
            ]
        );
    }

    #[test]
    fn monochromatic_of_red() {
        let red = ColorValue::from_rgb(255, 0, 0);
        let palette = monochromatic(&red, 5).unwrap();
        assert_eq!(
            palette.hexes(),
            vec!["#ff0000", "#ffffff", "#ffffff", "#ff8080", "#ff0000"]
        );
    }

    #[test]
    fn shades_of_indigo_with_three_entries_ends_in_black() {
        let palette = shades(&indigo(), 3).unwrap();
        assert_eq!(palette.hexes(), vec!["#6366f1", "#07084e", "#000000"]);
        assert_eq!(
            palette.swatches()[2].derivation,
            Derivation::Darken { amount: 1.0 }
        );
    }

    #[test]
    fn shades_of_indigo_with_five_entries() {
        let palette = shades(&indigo(), 5).unwrap();
        assert_eq!(
            palette.hexes(),
            vec!["#6366f1", "#1215c3", "#07084e", "#000000", "#000000"]
        );
    }

    #[test]
    fn count_outside_three_to_nine_is_rejected() {
        for count in [-1, 0, 1, 2, 10, 100] {
            assert!(monochromatic(&indigo(), count).is_err(), "mono {count}");
            assert!(shades(&indigo(), count).is_err(), "shades {count}");
        }
    }

    // -- generate() --

    #[test]
    fn generate_ignores_irrelevant_params() {
        let a = generate(&indigo(), Scheme::Triadic, SchemeParams::new(10, 3).unwrap());
        let b = generate(&indigo(), Scheme::Triadic, SchemeParams::new(90, 9).unwrap());
        assert_eq!(a.hexes(), b.hexes());
    }

    #[test]
    fn generate_does_not_touch_base() {
        let base = indigo();
        for scheme in Scheme::ALL {
            let palette = generate(&base, scheme, SchemeParams::default());
            assert_eq!(base, indigo());
            assert!(!palette.is_empty());
            assert_eq!(palette.scheme(), scheme);
        }
    }

    #[test]
    fn palette_serializes_swatch_derivations() {
        let palette = complementary(&indigo());
        let v = serde_json::to_value(&palette).unwrap();
        assert_eq!(v["scheme"], "complementary");
        assert_eq!(v["params"]["angle"], 30);
        assert_eq!(v["swatches"][0]["color"], "#6366f1");
        assert_eq!(v["swatches"][0]["derivation"]["op"], "base");
        assert_eq!(v["swatches"][1]["derivation"]["op"], "rotate");
        assert_eq!(v["swatches"][1]["derivation"]["degrees"], 180.0);
    }

    #[test]
    fn derivation_display() {
        assert_eq!(Derivation::Base.to_string(), "base");
        assert_eq!(Derivation::Rotate { degrees: -30.0 }.to_string(), "rotate -30°");
        assert_eq!(Derivation::Rotate { degrees: 150.0 }.to_string(), "rotate +150°");
        assert_eq!(Derivation::Lighten { amount: 0.75 }.to_string(), "lighten 75%");
        assert_eq!(Derivation::Darken { amount: 0.5 }.to_string(), "darken 50%");
    }

    // -- Angle suggestion --

    #[test]
    fn suggest_angle_is_deterministic_per_seed() {
        let mut rng = Xorshift64::new(42);
        assert_eq!(suggest_angle(&mut rng), 56);
        assert_eq!(suggest_angle(&mut rng), 67);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn lightness_schemes_have_requested_length(
                r: u8, g: u8, b: u8,
                count in 3_i64..=9,
            ) {
                let base = ColorValue::from_rgb(r, g, b);
                prop_assert_eq!(monochromatic(&base, count).unwrap().len(), count as usize);
                prop_assert_eq!(shades(&base, count).unwrap().len(), count as usize);
            }

            #[test]
            fn every_palette_starts_from_the_base(
                r: u8, g: u8, b: u8,
                angle in 10_i64..=90,
                count in 3_i64..=9,
            ) {
                let base = ColorValue::from_rgb(r, g, b);
                let params = SchemeParams::new(angle, count).unwrap();
                for scheme in Scheme::ALL {
                    let palette = generate(&base, scheme, params);
                    let base_entries = palette
                        .swatches()
                        .iter()
                        .filter(|s| s.derivation == Derivation::Base)
                        .count();
                    prop_assert_eq!(base_entries, 1);
                    prop_assert!(palette.colors().contains(&base));
                }
            }

            #[test]
            fn shades_last_entry_is_black(r: u8, g: u8, b: u8, count in 3_i64..=9) {
                let base = ColorValue::from_rgb(r, g, b);
                let palette = shades(&base, count).unwrap();
                prop_assert_eq!(palette.colors().last().copied(), Some(ColorValue::BLACK));
            }

            #[test]
            fn suggested_angle_is_a_valid_scheme_angle(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                let angle = suggest_angle(&mut rng);
                prop_assert!((SUGGESTED_ANGLE_MIN..=SUGGESTED_ANGLE_MAX).contains(&angle));
                prop_assert!(SchemeParams::default().with_angle(angle as i64).is_ok());
            }
        }
    }
}
