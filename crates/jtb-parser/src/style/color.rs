use std::sync::LazyLock;

use regex::Regex;

/// CSS named colors plus the color-valued keywords authors put in shorthands.
pub const NAMED_COLORS: &[&str] = &[
    "transparent", "inherit", "initial", "currentcolor",
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen",
    "seashell", "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
    "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet",
    "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

static FUNCTIONAL_OR_HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(#[0-9a-f]{3,8}\b|rgba?\s*\([^)]+\)|hsla?\s*\([^)]+\))")
        .expect("color pattern should compile")
});

static ANY_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    let names = NAMED_COLORS.join("|");
    Regex::new(&format!(
        r"(?i)(#[0-9a-f]{{3,8}}\b|rgba?\s*\([^)]+\)|hsla?\s*\([^)]+\)|\b(?:{names})\b)"
    ))
    .expect("named color pattern should compile")
});

/// First hex or functional color (`rgb()`, `hsla()`, ...) in `value`.
pub fn find_functional_color(value: &str) -> Option<&str> {
    FUNCTIONAL_OR_HEX.find(value).map(|m| m.as_str())
}

/// First color of any form, named colors included.
pub fn find_color(value: &str) -> Option<&str> {
    ANY_COLOR.find(value).map(|m| m.as_str())
}

pub fn is_named_color(word: &str) -> bool {
    NAMED_COLORS.iter().any(|n| n.eq_ignore_ascii_case(word))
}

/// Permissive color check used when casting field values.
pub fn is_valid_color(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    if is_named_color(value) {
        return true;
    }
    let lower = value.to_ascii_lowercase();
    let looks_functional = ["rgb", "hsl", "hwb", "lab", "lch", "oklab", "oklch"]
        .iter()
        .any(|f| lower.starts_with(f) && lower.ends_with(')'));
    if value.starts_with('#') || looks_functional {
        return csscolorparser::parse(value).is_ok() || looks_functional;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_color() {
        assert_eq!(find_color("url(a.png) #fff no-repeat"), Some("#fff"));
        assert_eq!(find_color("center / cover Red"), Some("Red"));
        assert_eq!(find_color("rgba(0, 0, 0, .4) fixed"), Some("rgba(0, 0, 0, .4)"));
        assert_eq!(find_color("no-repeat center"), None);
    }

    #[test]
    fn functional_color_ignores_names() {
        assert_eq!(find_functional_color("2px 2px red"), None);
        assert_eq!(find_functional_color("2px 2px #333"), Some("#333"));
    }

    #[test]
    fn validates_colors() {
        assert!(is_valid_color("#1e90ff"));
        assert!(is_valid_color("rgba(0,0,0,.5)"));
        assert!(is_valid_color("teal"));
        assert!(!is_valid_color("#zzz"));
        assert!(!is_valid_color("12px"));
    }
}
