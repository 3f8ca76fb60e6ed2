//! Shorthand → longhand expansion.
//!
//! Every expansion emits only longhand names that this module passes through
//! unchanged, which keeps [`expand_all_shorthands`] idempotent.

use std::sync::LazyLock;

use regex::Regex;

use super::color::{find_color, find_functional_color};
use super::{StyleMap, split_tokens};

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];
const CORNERS: [&str; 4] = ["top-left", "top-right", "bottom-right", "bottom-left"];
const BORDER_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];
const DEFAULT_SHADOW_COLOR: &str = "rgba(0,0,0,0.3)";

type Pairs = Vec<(String, String)>;

macro_rules! re {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($pattern).expect(concat!(stringify!($name), " pattern")));
    };
}

re!(LENGTH_TOKEN, r"(?i)^\d+(?:\.\d+)?(?:px|em|rem|%|pt)?$");
re!(GRADIENT_START, r"(?i)((?:repeating-)?(?:linear|radial|conic)-gradient)\s*\(");
re!(URL, r#"(?i)url\s*\(\s*['"]?([^'")\s]+)['"]?\s*\)"#);
re!(BG_SIZE, r"(?i)\b(cover|contain|auto)\b");
re!(BG_POSITION, r"(?i)\b(center|top|bottom|left|right)\b");
re!(BG_REPEAT, r"(?i)\b(no-repeat|repeat-x|repeat-y|repeat)\b");
re!(BG_ATTACHMENT, r"(?i)\b(fixed|scroll|local)\b");
re!(
    FONT_FAMILY,
    r"(?i)[\d.]+(?:px|em|rem|%|pt|vw|vh)\s*(?:/\s*[\d.]+(?:px|em|rem|%)?)?(.+)$"
);
re!(
    FONT_SIZE,
    r"(?i)([\d.]+(?:px|em|rem|%|pt|vw|vh))(?:\s*/\s*([\d.]+(?:px|em|rem|%)?))?"
);
re!(
    FONT_WEIGHT,
    r"(?i)\b(100|200|300|400|500|600|700|800|900|normal|bold|bolder|lighter)\b"
);
re!(FONT_STYLE, r"(?i)\b(italic|oblique)\b");
re!(INSET, r"(?i)\binset\b");
re!(NUMBER, r"(-?[\d.]+)(?:px)?");
re!(SCALE, r"(?i)scale\s*\(\s*([0-9.]+)(?:\s*,\s*([0-9.]+))?\s*\)");
re!(SCALE_X, r"(?i)scalex\s*\(\s*([0-9.]+)\s*\)");
re!(SCALE_Y, r"(?i)scaley\s*\(\s*([0-9.]+)\s*\)");
re!(ROTATE, r"(?i)rotate\s*\(\s*(-?[0-9.]+)(?:deg)?\s*\)");
re!(
    SKEW,
    r"(?i)skew\s*\(\s*(-?[0-9.]+)(?:deg)?(?:\s*,\s*(-?[0-9.]+)(?:deg)?)?\s*\)"
);
re!(SKEW_X, r"(?i)skewx\s*\(\s*(-?[0-9.]+)(?:deg)?\s*\)");
re!(SKEW_Y, r"(?i)skewy\s*\(\s*(-?[0-9.]+)(?:deg)?\s*\)");
re!(
    TRANSLATE,
    r"(?i)translate\s*\(\s*(-?[0-9.]+)(?:px)?(?:\s*,\s*(-?[0-9.]+)(?:px)?)?\s*\)"
);
re!(TRANSLATE_X, r"(?i)translatex\s*\(\s*(-?[0-9.]+)(?:px)?\s*\)");
re!(TRANSLATE_Y, r"(?i)translatey\s*\(\s*(-?[0-9.]+)(?:px)?\s*\)");

/// Filter functions in output order with the pattern for their argument.
static FILTERS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("hue-rotate", r"(?i)hue-rotate\s*\(\s*(-?[0-9.]+)(?:deg)?\s*\)"),
        ("saturate", r"(?i)saturate\s*\(\s*([0-9.]+)%?\s*\)"),
        ("brightness", r"(?i)brightness\s*\(\s*([0-9.]+)%?\s*\)"),
        ("contrast", r"(?i)contrast\s*\(\s*([0-9.]+)%?\s*\)"),
        ("invert", r"(?i)invert\s*\(\s*([0-9.]+)%?\s*\)"),
        ("sepia", r"(?i)sepia\s*\(\s*([0-9.]+)%?\s*\)"),
        ("blur", r"(?i)blur\s*\(\s*([0-9.]+)(?:px)?\s*\)"),
        ("grayscale", r"(?i)grayscale\s*\(\s*([0-9.]+)%?\s*\)"),
        ("opacity", r"(?i)opacity\s*\(\s*([0-9.]+)%?\s*\)"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).expect("filter pattern")))
    .collect()
});

/// Expands one declaration into longhand pairs. Unknown properties pass
/// through untouched.
pub fn expand_shorthand(property: &str, value: &str) -> Pairs {
    let property = property.to_ascii_lowercase();
    let value = value.trim();
    match property.as_str() {
        "margin" | "padding" => expand_box(&property, "", value),
        "border" => expand_border(value),
        "border-width" => expand_box("border", "-width", value),
        "border-style" => expand_box("border", "-style", value),
        "border-color" => expand_box("border", "-color", value),
        "border-radius" => expand_border_radius(value),
        "background" => expand_background(value),
        "font" => expand_font(value),
        "box-shadow" => expand_shadow("box-shadow", value, true),
        "text-shadow" => expand_shadow("text-shadow", value, false),
        "transform" => expand_transform(value),
        "filter" => expand_filter(value),
        _ => vec![(property, value.to_string())],
    }
}

/// Expands every declaration of `styles`, later pairs overriding earlier ones.
pub fn expand_all_shorthands(styles: &StyleMap) -> StyleMap {
    let pairs = styles
        .iter()
        .flat_map(|(property, value)| expand_shorthand(property, value))
        .collect();
    styles.with_props(pairs)
}

/// Applies the CSS 1–4 value rule: `[top, right, bottom, left]`.
pub fn box_values(value: &str) -> Option<[String; 4]> {
    let parts = split_tokens(value);
    let [top, right, bottom, left] = match parts.as_slice() {
        [all] => [*all; 4],
        [v, h] => [*v, *h, *v, *h],
        [t, h, b] => [*t, *h, *b, *h],
        [t, r, b, l, ..] => [*t, *r, *b, *l],
        [] => return None,
    };
    Some([top, right, bottom, left].map(str::to_string))
}

fn expand_box(prefix: &str, suffix: &str, value: &str) -> Pairs {
    let Some(values) = box_values(value) else {
        return Vec::new();
    };
    SIDES
        .iter()
        .zip(values)
        .map(|(side, v)| (format!("{prefix}-{side}{suffix}"), v))
        .collect()
}

fn expand_border(value: &str) -> Pairs {
    let mut width = None;
    let mut style = None;
    let mut color_parts = Vec::new();
    for token in split_tokens(value) {
        let lower = token.to_ascii_lowercase();
        if width.is_none() && LENGTH_TOKEN.is_match(token) {
            width = Some(token.to_string());
        } else if style.is_none() && BORDER_STYLES.contains(&lower.as_str()) {
            style = Some(lower);
        } else {
            color_parts.push(token);
        }
    }
    let color = (!color_parts.is_empty()).then(|| color_parts.join(" "));

    let mut out = Vec::new();
    for (part, v) in [("width", width), ("style", style), ("color", color)] {
        if let Some(v) = v {
            for side in SIDES {
                out.push((format!("border-{side}-{part}"), v.clone()));
            }
        }
    }
    out
}

fn expand_border_radius(value: &str) -> Pairs {
    if value.contains('/') {
        return vec![("border-radius".to_string(), value.to_string())];
    }
    let Some(values) = box_values(value) else {
        return Vec::new();
    };
    CORNERS
        .iter()
        .zip(values)
        .map(|(corner, v)| (format!("border-{corner}-radius"), v))
        .collect()
}

/// Returns the `(...)` group starting at `source[0]`, parentheses balanced.
pub(crate) fn balanced_parens(source: &str) -> Option<&str> {
    if !source.starts_with('(') {
        return None;
    }
    let mut depth = 0usize;
    for (idx, ch) in source.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&source[..=idx]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Full gradient expression (`linear-gradient(...)`) found in `value`.
pub(crate) fn find_gradient(value: &str) -> Option<(usize, String)> {
    let caps = GRADIENT_START.captures(value)?;
    let whole = caps.get(0)?;
    let name = caps.get(1)?.as_str();
    let open = whole.end() - 1;
    let args = balanced_parens(&value[open..])?;
    Some((whole.start(), format!("{}{}", name.to_ascii_lowercase(), args)))
}

fn expand_background(value: &str) -> Pairs {
    let mut out = Vec::new();
    let mut rest = value.to_string();
    let mut is_gradient = false;

    if let Some((start, gradient)) = find_gradient(value) {
        let raw_len = value[start..]
            .find('(')
            .and_then(|open| balanced_parens(&value[start + open..]).map(|g| open + g.len()))
            .unwrap_or(0);
        rest.replace_range(start..start + raw_len, " ");
        out.push(("background-image".to_string(), gradient));
        is_gradient = true;
    }
    let url = URL
        .captures(&rest)
        .and_then(|c| Some((c.get(0)?.range(), c.get(1)?.as_str().to_string())));
    if let Some((range, url)) = url {
        out.retain(|(k, _)| k != "background-image");
        out.push(("background-image".to_string(), format!("url({url})")));
        is_gradient = false;
        rest.replace_range(range, " ");
    }
    if !is_gradient {
        if let Some(color) = find_color(&rest) {
            out.push(("background-color".to_string(), color.to_string()));
        }
    }
    if let Some(m) = BG_SIZE.find(&rest) {
        out.push(("background-size".to_string(), m.as_str().to_ascii_lowercase()));
    }
    let positions: Vec<String> = BG_POSITION
        .find_iter(&rest)
        .take(2)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect();
    if !positions.is_empty() {
        out.push(("background-position".to_string(), positions.join(" ")));
    }
    if let Some(m) = BG_REPEAT.find(&rest) {
        out.push(("background-repeat".to_string(), m.as_str().to_ascii_lowercase()));
    }
    if let Some(m) = BG_ATTACHMENT.find(&rest) {
        out.push(("background-attachment".to_string(), m.as_str().to_ascii_lowercase()));
    }
    out
}

fn expand_font(value: &str) -> Pairs {
    let mut out = Vec::new();
    if let Some(family) = FONT_FAMILY
        .captures(value)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|f| !f.is_empty())
    {
        out.push(("font-family".to_string(), family.to_string()));
    }
    if let Some(caps) = FONT_SIZE.captures(value) {
        if let Some(size) = caps.get(1) {
            out.push(("font-size".to_string(), size.as_str().to_string()));
        }
        if let Some(lh) = caps.get(2).filter(|m| !m.as_str().is_empty()) {
            out.push(("line-height".to_string(), lh.as_str().to_string()));
        }
    }
    // Scan only the part before the size so a family name cannot supply a weight.
    let head = FONT_SIZE
        .find(value)
        .map(|m| &value[..m.start()])
        .unwrap_or(value);
    if let Some(m) = FONT_WEIGHT.find(head) {
        out.push(("font-weight".to_string(), m.as_str().to_ascii_lowercase()));
    }
    if let Some(m) = FONT_STYLE.find(head) {
        out.push(("font-style".to_string(), m.as_str().to_ascii_lowercase()));
    }
    out
}

fn expand_shadow(prefix: &str, value: &str, with_spread: bool) -> Pairs {
    if value.eq_ignore_ascii_case("none") {
        return vec![(format!("{prefix}-style"), "none".to_string())];
    }
    let mut out = vec![(format!("{prefix}-style"), "custom".to_string())];
    // Only the first shadow of a comma-separated list is kept.
    let mut rest = first_top_level_item(value).to_string();

    if with_spread && INSET.is_match(&rest) {
        rest = INSET.replace_all(&rest, "").into_owned();
        out.push((format!("{prefix}-inset"), "true".to_string()));
    }
    let color = match find_functional_color(&rest).map(str::to_string) {
        Some(color) => {
            rest = rest.replacen(&color, " ", 1);
            color
        }
        None => {
            let named = split_tokens(&rest)
                .into_iter()
                .find(|t| super::color::is_named_color(t))
                .map(str::to_string);
            match named {
                Some(name) => {
                    rest = rest.replacen(&name, " ", 1);
                    name
                }
                None => DEFAULT_SHADOW_COLOR.to_string(),
            }
        }
    };
    out.push((format!("{prefix}-color"), color));

    let numbers: Vec<f64> = NUMBER
        .captures_iter(&rest)
        .filter_map(|c| c.get(1)?.as_str().parse::<f64>().ok())
        .collect();
    if !numbers.is_empty() {
        let names: &[&str] = if with_spread {
            &["horizontal", "vertical", "blur", "spread"]
        } else {
            &["horizontal", "vertical", "blur"]
        };
        for (idx, name) in names.iter().enumerate() {
            let n = numbers.get(idx).copied().unwrap_or(0.0);
            out.push((format!("{prefix}-{name}"), format_number(n)));
        }
    }
    out
}

fn first_top_level_item(value: &str) -> &str {
    let mut depth = 0usize;
    for (idx, ch) in value.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return value[..idx].trim(),
            _ => {}
        }
    }
    value.trim()
}

fn expand_transform(value: &str) -> Pairs {
    if value.eq_ignore_ascii_case("none") {
        return vec![("transform".to_string(), "none".to_string())];
    }
    let mut out: Pairs = Vec::new();
    let mut put = |key: &str, n: f64| {
        out.retain(|(k, _)| k != key);
        out.push((key.to_string(), format_number(n)));
    };
    let num = |caps: &regex::Captures<'_>, idx: usize| -> Option<f64> {
        caps.get(idx).and_then(|m| m.as_str().parse::<f64>().ok())
    };

    if let Some(c) = SCALE.captures(value) {
        if let Some(a) = num(&c, 1) {
            put("transform-scale", a * 100.0);
            if let Some(b) = num(&c, 2) {
                put("transform-scale-x", a * 100.0);
                put("transform-scale-y", b * 100.0);
            }
        }
    }
    if let Some(x) = SCALE_X.captures(value).and_then(|c| num(&c, 1)) {
        put("transform-scale-x", x * 100.0);
    }
    if let Some(y) = SCALE_Y.captures(value).and_then(|c| num(&c, 1)) {
        put("transform-scale-y", y * 100.0);
    }
    if let Some(r) = ROTATE.captures(value).and_then(|c| num(&c, 1)) {
        put("transform-rotate", r);
    }
    if let Some(c) = SKEW.captures(value) {
        if let Some(x) = num(&c, 1) {
            put("transform-skew-x", x);
        }
        if let Some(y) = num(&c, 2) {
            put("transform-skew-y", y);
        }
    }
    if let Some(x) = SKEW_X.captures(value).and_then(|c| num(&c, 1)) {
        put("transform-skew-x", x);
    }
    if let Some(y) = SKEW_Y.captures(value).and_then(|c| num(&c, 1)) {
        put("transform-skew-y", y);
    }
    if let Some(c) = TRANSLATE.captures(value) {
        if let Some(x) = num(&c, 1) {
            put("transform-translate-x", x);
        }
        if let Some(y) = num(&c, 2) {
            put("transform-translate-y", y);
        }
    }
    if let Some(x) = TRANSLATE_X.captures(value).and_then(|c| num(&c, 1)) {
        put("transform-translate-x", x);
    }
    if let Some(y) = TRANSLATE_Y.captures(value).and_then(|c| num(&c, 1)) {
        put("transform-translate-y", y);
    }
    out
}

fn expand_filter(value: &str) -> Pairs {
    if value.eq_ignore_ascii_case("none") {
        return vec![("filter".to_string(), "none".to_string())];
    }
    let mut out: Pairs = FILTERS
        .iter()
        .filter_map(|(name, pattern)| {
            let arg = pattern.captures(value)?.get(1)?.as_str().to_string();
            Some((format!("filter-{name}"), arg))
        })
        .collect();
    let lower = value.to_ascii_lowercase();
    if let Some(idx) = lower.find("drop-shadow") {
        if let Some(open) = value[idx..].find('(') {
            if let Some(args) = balanced_parens(&value[idx + open..]) {
                let inner = args[1..args.len() - 1].trim().to_string();
                out.push(("filter-drop-shadow".to_string(), inner));
            }
        }
    }
    out
}

/// Formats a float without a trailing `.0` for whole numbers.
pub(crate) fn format_number(n: f64) -> String {
    let n = (n * 10_000.0).round() / 10_000.0;
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::parse_style_string;

    fn lookup<'a>(pairs: &'a Pairs, key: &str) -> Option<&'a str> {
        pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn box_rule_covers_all_arities() {
        let four = expand_shorthand("margin", "10px 20px 30px 40px");
        assert_eq!(lookup(&four, "margin-top"), Some("10px"));
        assert_eq!(lookup(&four, "margin-right"), Some("20px"));
        assert_eq!(lookup(&four, "margin-bottom"), Some("30px"));
        assert_eq!(lookup(&four, "margin-left"), Some("40px"));

        let two = expand_shorthand("padding", "5px 10px");
        assert_eq!(lookup(&two, "padding-top"), Some("5px"));
        assert_eq!(lookup(&two, "padding-bottom"), Some("5px"));
        assert_eq!(lookup(&two, "padding-left"), Some("10px"));
        assert_eq!(lookup(&two, "padding-right"), Some("10px"));

        let one = expand_shorthand("padding", "5px");
        for side in SIDES {
            assert_eq!(lookup(&one, &format!("padding-{side}")), Some("5px"));
        }

        let three = expand_shorthand("margin", "1px 2px 3px");
        assert_eq!(lookup(&three, "margin-left"), Some("2px"));
        assert_eq!(lookup(&three, "margin-bottom"), Some("3px"));
    }

    #[test]
    fn border_splits_width_style_color() {
        let pairs = expand_shorthand("border", "2px dashed #333");
        assert_eq!(lookup(&pairs, "border-top-width"), Some("2px"));
        assert_eq!(lookup(&pairs, "border-left-style"), Some("dashed"));
        assert_eq!(lookup(&pairs, "border-bottom-color"), Some("#333"));
    }

    #[test]
    fn border_radius_slash_passes_through() {
        let pairs = expand_shorthand("border-radius", "10px / 20px");
        assert_eq!(pairs, vec![("border-radius".into(), "10px / 20px".into())]);
        let corners = expand_shorthand("border-radius", "4px 8px");
        assert_eq!(lookup(&corners, "border-top-left-radius"), Some("4px"));
        assert_eq!(lookup(&corners, "border-top-right-radius"), Some("8px"));
        assert_eq!(lookup(&corners, "border-bottom-right-radius"), Some("4px"));
    }

    #[test]
    fn background_keeps_nested_gradient_colors() {
        let pairs = expand_shorthand(
            "background",
            "linear-gradient(to right, rgba(0,0,0,.5), #fff) no-repeat center / cover fixed",
        );
        assert_eq!(
            lookup(&pairs, "background-image"),
            Some("linear-gradient(to right, rgba(0,0,0,.5), #fff)")
        );
        assert_eq!(lookup(&pairs, "background-color"), None);
        assert_eq!(lookup(&pairs, "background-repeat"), Some("no-repeat"));
        assert_eq!(lookup(&pairs, "background-position"), Some("center"));
        assert_eq!(lookup(&pairs, "background-size"), Some("cover"));
        assert_eq!(lookup(&pairs, "background-attachment"), Some("fixed"));
    }

    #[test]
    fn background_url_and_color() {
        let pairs = expand_shorthand("background", "#222 url('img/red.png') top left repeat-x");
        assert_eq!(lookup(&pairs, "background-image"), Some("url(img/red.png)"));
        assert_eq!(lookup(&pairs, "background-color"), Some("#222"));
        assert_eq!(lookup(&pairs, "background-position"), Some("top left"));
        assert_eq!(lookup(&pairs, "background-repeat"), Some("repeat-x"));
    }

    #[test]
    fn font_shorthand() {
        let pairs = expand_shorthand("font", "italic bold 16px/1.5 Georgia, serif");
        assert_eq!(lookup(&pairs, "font-style"), Some("italic"));
        assert_eq!(lookup(&pairs, "font-weight"), Some("bold"));
        assert_eq!(lookup(&pairs, "font-size"), Some("16px"));
        assert_eq!(lookup(&pairs, "line-height"), Some("1.5"));
        assert_eq!(lookup(&pairs, "font-family"), Some("Georgia, serif"));
    }

    #[test]
    fn shadows() {
        let pairs = expand_shorthand("box-shadow", "inset 0 4px 12px -2px rgba(0, 0, 0, 0.2)");
        assert_eq!(lookup(&pairs, "box-shadow-style"), Some("custom"));
        assert_eq!(lookup(&pairs, "box-shadow-inset"), Some("true"));
        assert_eq!(lookup(&pairs, "box-shadow-color"), Some("rgba(0, 0, 0, 0.2)"));
        assert_eq!(lookup(&pairs, "box-shadow-horizontal"), Some("0"));
        assert_eq!(lookup(&pairs, "box-shadow-vertical"), Some("4"));
        assert_eq!(lookup(&pairs, "box-shadow-blur"), Some("12"));
        assert_eq!(lookup(&pairs, "box-shadow-spread"), Some("-2"));

        let none = expand_shorthand("box-shadow", "none");
        assert_eq!(none, vec![("box-shadow-style".into(), "none".into())]);

        let text = expand_shorthand("text-shadow", "1px 1px 2px black");
        assert_eq!(lookup(&text, "text-shadow-color"), Some("black"));
        assert_eq!(lookup(&text, "text-shadow-blur"), Some("2"));
        assert_eq!(lookup(&text, "text-shadow-spread"), None);
    }

    #[test]
    fn transform_functions_all_contribute() {
        let pairs = expand_shorthand(
            "transform",
            "translate(10px, -5px) rotate(45deg) scale(1.5) skewY(3deg)",
        );
        assert_eq!(lookup(&pairs, "transform-translate-x"), Some("10"));
        assert_eq!(lookup(&pairs, "transform-translate-y"), Some("-5"));
        assert_eq!(lookup(&pairs, "transform-rotate"), Some("45"));
        assert_eq!(lookup(&pairs, "transform-scale"), Some("150"));
        assert_eq!(lookup(&pairs, "transform-skew-y"), Some("3"));
        assert_eq!(lookup(&pairs, "transform-skew-x"), None);
    }

    #[test]
    fn filter_functions() {
        let pairs = expand_shorthand(
            "filter",
            "blur(2px) brightness(120%) drop-shadow(0 0 4px rgba(0,0,0,.3))",
        );
        assert_eq!(lookup(&pairs, "filter-blur"), Some("2"));
        assert_eq!(lookup(&pairs, "filter-brightness"), Some("120"));
        assert_eq!(
            lookup(&pairs, "filter-drop-shadow"),
            Some("0 0 4px rgba(0,0,0,.3)")
        );
    }

    #[test]
    fn expanding_twice_is_a_no_op() {
        let styles = parse_style_string(
            "margin: 0 auto; border: 1px solid red; border-radius: 4px; \
             background: #fff url(a.png) no-repeat; font: 700 14px/20px Arial; \
             box-shadow: 0 1px 2px #000; transform: rotate(10deg) scale(2); \
             filter: grayscale(50%); text-shadow: none; color: red",
        );
        let once = expand_all_shorthands(&styles);
        let twice = expand_all_shorthands(&once);
        assert_eq!(once, twice);
    }
}
