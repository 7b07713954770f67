//! CSS named colors and nearest-name lookup.
//!
//! The table holds the 148 CSS Color 4 keywords (synonyms such as
//! `aqua`/`cyan` included), sorted alphabetically. `transparent` is not a
//! color here.

use crate::color::{ColorValue, Rgb};

/// Name -> sRGB channels, sorted by name.
pub static NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("aliceblue", [240, 248, 255]),
    ("antiquewhite", [250, 235, 215]),
    ("aqua", [0, 255, 255]),
    ("aquamarine", [127, 255, 212]),
    ("azure", [240, 255, 255]),
    ("beige", [245, 245, 220]),
    ("bisque", [255, 228, 196]),
    ("black", [0, 0, 0]),
    ("blanchedalmond", [255, 235, 205]),
    ("blue", [0, 0, 255]),
    ("blueviolet", [138, 43, 226]),
    ("brown", [165, 42, 42]),
    ("burlywood", [222, 184, 135]),
    ("cadetblue", [95, 158, 160]),
    ("chartreuse", [127, 255, 0]),
    ("chocolate", [210, 105, 30]),
    ("coral", [255, 127, 80]),
    ("cornflowerblue", [100, 149, 237]),
    ("cornsilk", [255, 248, 220]),
    ("crimson", [220, 20, 60]),
    ("cyan", [0, 255, 255]),
    ("darkblue", [0, 0, 139]),
    ("darkcyan", [0, 139, 139]),
    ("darkgoldenrod", [184, 134, 11]),
    ("darkgray", [169, 169, 169]),
    ("darkgreen", [0, 100, 0]),
    ("darkgrey", [169, 169, 169]),
    ("darkkhaki", [189, 183, 107]),
    ("darkmagenta", [139, 0, 139]),
    ("darkolivegreen", [85, 107, 47]),
    ("darkorange", [255, 140, 0]),
    ("darkorchid", [153, 50, 204]),
    ("darkred", [139, 0, 0]),
    ("darksalmon", [233, 150, 122]),
    ("darkseagreen", [143, 188, 143]),
    ("darkslateblue", [72, 61, 139]),
    ("darkslategray", [47, 79, 79]),
    ("darkslategrey", [47, 79, 79]),
    ("darkturquoise", [0, 206, 209]),
    ("darkviolet", [148, 0, 211]),
    ("deeppink", [255, 20, 147]),
    ("deepskyblue", [0, 191, 255]),
    ("dimgray", [105, 105, 105]),
    ("dimgrey", [105, 105, 105]),
    ("dodgerblue", [30, 144, 255]),
    ("firebrick", [178, 34, 34]),
    ("floralwhite", [255, 250, 240]),
    ("forestgreen", [34, 139, 34]),
    ("fuchsia", [255, 0, 255]),
    ("gainsboro", [220, 220, 220]),
    ("ghostwhite", [248, 248, 255]),
    ("gold", [255, 215, 0]),
    ("goldenrod", [218, 165, 32]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("greenyellow", [173, 255, 47]),
    ("grey", [128, 128, 128]),
    ("honeydew", [240, 255, 240]),
    ("hotpink", [255, 105, 180]),
    ("indianred", [205, 92, 92]),
    ("indigo", [75, 0, 130]),
    ("ivory", [255, 255, 240]),
    ("khaki", [240, 230, 140]),
    ("lavender", [230, 230, 250]),
    ("lavenderblush", [255, 240, 245]),
    ("lawngreen", [124, 252, 0]),
    ("lemonchiffon", [255, 250, 205]),
    ("lightblue", [173, 216, 230]),
    ("lightcoral", [240, 128, 128]),
    ("lightcyan", [224, 255, 255]),
    ("lightgoldenrodyellow", [250, 250, 210]),
    ("lightgray", [211, 211, 211]),
    ("lightgreen", [144, 238, 144]),
    ("lightgrey", [211, 211, 211]),
    ("lightpink", [255, 182, 193]),
    ("lightsalmon", [255, 160, 122]),
    ("lightseagreen", [32, 178, 170]),
    ("lightskyblue", [135, 206, 250]),
    ("lightslategray", [119, 136, 153]),
    ("lightslategrey", [119, 136, 153]),
    ("lightsteelblue", [176, 196, 222]),
    ("lightyellow", [255, 255, 224]),
    ("lime", [0, 255, 0]),
    ("limegreen", [50, 205, 50]),
    ("linen", [250, 240, 230]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("mediumaquamarine", [102, 205, 170]),
    ("mediumblue", [0, 0, 205]),
    ("mediumorchid", [186, 85, 211]),
    ("mediumpurple", [147, 112, 219]),
    ("mediumseagreen", [60, 179, 113]),
    ("mediumslateblue", [123, 104, 238]),
    ("mediumspringgreen", [0, 250, 154]),
    ("mediumturquoise", [72, 209, 204]),
    ("mediumvioletred", [199, 21, 133]),
    ("midnightblue", [25, 25, 112]),
    ("mintcream", [245, 255, 250]),
    ("mistyrose", [255, 228, 225]),
    ("moccasin", [255, 228, 181]),
    ("navajowhite", [255, 222, 173]),
    ("navy", [0, 0, 128]),
    ("oldlace", [253, 245, 230]),
    ("olive", [128, 128, 0]),
    ("olivedrab", [107, 142, 35]),
    ("orange", [255, 165, 0]),
    ("orangered", [255, 69, 0]),
    ("orchid", [218, 112, 214]),
    ("palegoldenrod", [238, 232, 170]),
    ("palegreen", [152, 251, 152]),
    ("paleturquoise", [175, 238, 238]),
    ("palevioletred", [219, 112, 147]),
    ("papayawhip", [255, 239, 213]),
    ("peachpuff", [255, 218, 185]),
    ("peru", [205, 133, 63]),
    ("pink", [255, 192, 203]),
    ("plum", [221, 160, 221]),
    ("powderblue", [176, 224, 230]),
    ("purple", [128, 0, 128]),
    ("rebeccapurple", [102, 51, 153]),
    ("red", [255, 0, 0]),
    ("rosybrown", [188, 143, 143]),
    ("royalblue", [65, 105, 225]),
    ("saddlebrown", [139, 69, 19]),
    ("salmon", [250, 128, 114]),
    ("sandybrown", [244, 164, 96]),
    ("seagreen", [46, 139, 87]),
    ("seashell", [255, 245, 238]),
    ("sienna", [160, 82, 45]),
    ("silver", [192, 192, 192]),
    ("skyblue", [135, 206, 235]),
    ("slateblue", [106, 90, 205]),
    ("slategray", [112, 128, 144]),
    ("slategrey", [112, 128, 144]),
    ("snow", [255, 250, 250]),
    ("springgreen", [0, 255, 127]),
    ("steelblue", [70, 130, 180]),
    ("tan", [210, 180, 140]),
    ("teal", [0, 128, 128]),
    ("thistle", [216, 191, 216]),
    ("tomato", [255, 99, 71]),
    ("turquoise", [64, 224, 208]),
    ("violet", [238, 130, 238]),
    ("wheat", [245, 222, 179]),
    ("white", [255, 255, 255]),
    ("whitesmoke", [245, 245, 245]),
    ("yellow", [255, 255, 0]),
    ("yellowgreen", [154, 205, 50]),
];

/// Looks up a named color, ignoring ASCII case and surrounding whitespace.
pub fn lookup(name: &str) -> Option<ColorValue> {
    let key = name.trim().to_ascii_lowercase();
    NAMED_COLORS
        .binary_search_by(|(n, _)| n.cmp(&key.as_str()))
        .ok()
        .map(|i| {
            let [r, g, b] = NAMED_COLORS[i].1;
            ColorValue::from_rgb(r, g, b)
        })
}

/// Returns the name whose channels equal `c` exactly, if any.
///
/// Alpha is ignored. Synonyms resolve to the alphabetically first name.
pub fn exact_name(c: &ColorValue) -> Option<&'static str> {
    let rgb = c.rgb();
    NAMED_COLORS
        .iter()
        .find(|(_, ch)| *ch == [rgb.r, rgb.g, rgb.b])
        .map(|(n, _)| *n)
}

/// Returns the named color closest to `c` by Euclidean RGB distance.
///
/// There is no distance cutoff: some name is always returned, however far.
/// Ties go to the alphabetically first name.
pub fn closest_name(c: &ColorValue) -> &'static str {
    let rgb = c.rgb();
    let mut best = ("black", u32::MAX);
    for &(name, ch) in NAMED_COLORS {
        let d = distance_sq(rgb, ch);
        if d < best.1 {
            best = (name, d);
        }
    }
    best.0
}

fn distance_sq(a: Rgb, b: [u8; 3]) -> u32 {
    let d = |x: u8, y: u8| {
        let v = x as i32 - y as i32;
        (v * v) as u32
    };
    d(a.r, b[0]) + d(a.g, b[1]) + d(a.b, b[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_all_css_names_sorted_and_unique() {
        assert_eq!(NAMED_COLORS.len(), 148);
        assert!(
            NAMED_COLORS.windows(2).all(|w| w[0].0 < w[1].0),
            "table must be strictly sorted for binary search"
        );
    }

    #[test]
    fn lookup_finds_names_case_insensitively() {
        assert_eq!(lookup("red"), Some(ColorValue::from_rgb(255, 0, 0)));
        assert_eq!(lookup("  RebeccaPurple "), Some(ColorValue::from_rgb(102, 51, 153)));
        assert_eq!(lookup("lightgoldenrodyellow"), Some(ColorValue::from_rgb(250, 250, 210)));
        assert_eq!(lookup("transparent"), None);
        assert_eq!(lookup("notacolor"), None);
    }

    #[test]
    fn every_name_resolves_to_its_channels() {
        for &(name, [r, g, b]) in NAMED_COLORS {
            assert_eq!(lookup(name), Some(ColorValue::from_rgb(r, g, b)), "{name}");
        }
    }

    #[test]
    fn exact_name_prefers_first_synonym() {
        assert_eq!(exact_name(&ColorValue::from_rgb(0, 255, 255)), Some("aqua"));
        assert_eq!(exact_name(&ColorValue::from_rgb(128, 128, 128)), Some("gray"));
        assert_eq!(exact_name(&ColorValue::from_rgb(255, 0, 255)), Some("fuchsia"));
        assert_eq!(exact_name(&ColorValue::from_rgb(0x63, 0x66, 0xf1)), None);
    }

    #[test]
    fn closest_name_returns_exact_match_when_present() {
        assert_eq!(closest_name(&ColorValue::from_rgb(255, 0, 0)), "red");
        assert_eq!(closest_name(&ColorValue::from_rgb(0, 0, 0)), "black");
    }

    #[test]
    fn closest_name_finds_nearest_when_no_exact_match() {
        assert_eq!(closest_name(&ColorValue::from_rgb(0x63, 0x66, 0xf1)), "mediumslateblue");
        assert_eq!(closest_name(&ColorValue::from_rgb(0x12, 0x34, 0x56)), "midnightblue");
        assert_eq!(closest_name(&ColorValue::from_rgb(0xfe, 0xfe, 0xfe)), "white");
    }

    #[test]
    fn closest_name_ignores_alpha() {
        let c = ColorValue::from_rgba(255, 0, 0, 0.1);
        assert_eq!(closest_name(&c), "red");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn closest_name_is_never_farther_than_any_entry(r: u8, g: u8, b: u8) {
                let c = ColorValue::from_rgb(r, g, b);
                let name = closest_name(&c);
                let chosen = lookup(name).unwrap().rgb();
                let best = distance_sq(c.rgb(), [chosen.r, chosen.g, chosen.b]);
                for &(_, ch) in NAMED_COLORS {
                    prop_assert!(best <= distance_sq(c.rgb(), ch));
                }
            }
        }
    }
}
