//! CSS → module attribute conversion.
//!
//! Each category converter owns a disjoint slice of the attribute namespace,
//! so merging their outputs in order never loses a key.

pub mod gradient;

use serde_json::{Value, json};

use crate::model::{Attrs, SUFFIX_HOVER, SUFFIX_PHONE, SUFFIX_TABLET, number};
use crate::style::{
    DEFAULT_BASE_FONT_SIZE, StyleMap, expand_all_shorthands, parse_style_string, to_pixels,
};

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];
const CORNERS: [&str; 4] = ["top-left", "top-right", "bottom-right", "bottom-left"];

/// Maps expanded inline styles onto the module attribute vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct AttributeConverter {
    base_font_size: i64,
}

impl Default for AttributeConverter {
    fn default() -> Self {
        Self {
            base_font_size: DEFAULT_BASE_FONT_SIZE,
        }
    }
}

impl AttributeConverter {
    pub fn new(base_font_size: i64) -> Self {
        Self { base_font_size }
    }

    /// Converts `styles`; a non-empty `suffix` is appended to every key.
    pub fn convert(&self, styles: &StyleMap, suffix: &str) -> Attrs {
        let styles = expand_all_shorthands(styles);
        let mut attrs = Attrs::new();
        let categories: [fn(&Self, &StyleMap) -> Attrs; 11] = [
            Self::background,
            Self::spacing,
            Self::border,
            Self::box_shadow,
            Self::typography,
            Self::transform,
            Self::filters,
            Self::sizing,
            Self::position,
            Self::animation,
            Self::misc,
        ];
        for category in categories {
            attrs.extend(category(self, &styles));
        }
        if suffix.is_empty() {
            attrs
        } else {
            with_suffix(attrs, suffix)
        }
    }

    /// `__tablet` and `__phone` variants from raw style text.
    pub fn convert_responsive(&self, tablet: Option<&str>, phone: Option<&str>) -> Attrs {
        let mut attrs = Attrs::new();
        for (text, suffix) in [(tablet, SUFFIX_TABLET), (phone, SUFFIX_PHONE)] {
            if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
                attrs.extend(self.convert(&parse_style_string(text), suffix));
            }
        }
        attrs
    }

    /// `__hover` variants from raw style text.
    pub fn convert_hover(&self, hover: Option<&str>) -> Attrs {
        match hover.filter(|t| !t.trim().is_empty()) {
            Some(text) => self.convert(&parse_style_string(text), SUFFIX_HOVER),
            None => Attrs::new(),
        }
    }

    fn px(&self, value: &str) -> Value {
        Value::from(to_pixels(value, self.base_font_size))
    }

    fn background(&self, styles: &StyleMap) -> Attrs {
        let mut attrs = Attrs::new();
        if let Some(color) = styles.get("background-color") {
            if color != "transparent" && color != "inherit" {
                attrs.insert("background_type".into(), json!("color"));
                attrs.insert("background_color".into(), json!(color));
            }
        }
        if let Some(image) = styles.get("background-image") {
            if let Some(g) = gradient::parse_gradient(image) {
                attrs.insert("background_type".into(), json!("gradient"));
                attrs.insert("background_gradient_type".into(), json!(g.kind));
                if let Some(direction) = g.direction {
                    attrs.insert("background_gradient_direction".into(), json!(direction));
                }
                if !g.stops.is_empty() {
                    attrs.insert("background_gradient_stops".into(), Value::Array(g.stops));
                }
            } else if let Some(url) = url_target(image) {
                attrs.insert("background_type".into(), json!("image"));
                attrs.insert("background_image".into(), json!(url));
            }
        }
        for (css, key) in [
            ("background-size", "background_size"),
            ("background-position", "background_position"),
            ("background-repeat", "background_repeat"),
        ] {
            if let Some(v) = styles.get(css) {
                attrs.insert(key.into(), json!(v));
            }
        }
        if styles.get("background-attachment") == Some("fixed") {
            attrs.insert("parallax".into(), json!(true));
        }
        if let Some(overlay) = styles.custom("bg-overlay") {
            attrs.insert("background_image_overlay".into(), json!(overlay));
        }
        attrs
    }

    fn spacing(&self, styles: &StyleMap) -> Attrs {
        let mut attrs = Attrs::new();
        for prop in ["margin", "padding"] {
            for side in SIDES {
                if let Some(v) = styles.get(&format!("{prop}-{side}")) {
                    attrs.insert(format!("{prop}_{side}"), self.px(v));
                }
            }
        }
        for (css, key) in [("gap", "gap"), ("row-gap", "row_gap"), ("column-gap", "column_gap")] {
            if let Some(v) = styles.get(css) {
                attrs.insert(key.into(), self.px(v));
            }
        }
        attrs
    }

    fn border(&self, styles: &StyleMap) -> Attrs {
        let mut attrs = Attrs::new();

        let shared_width = styles.get("border-width");
        let mut width = serde_json::Map::new();
        let mut has_width = false;
        for side in SIDES {
            let v = styles
                .get(&format!("border-{side}-width"))
                .or(shared_width)
                .map(|v| {
                    has_width = true;
                    self.px(v)
                })
                .unwrap_or_else(|| json!(0));
            width.insert(side.into(), v);
        }
        if has_width {
            attrs.insert("border_width".into(), Value::Object(width));
        }

        for part in ["style", "color"] {
            let value = styles
                .get(&format!("border-{part}"))
                .or_else(|| styles.get(&format!("border-top-{part}")));
            if let Some(v) = value {
                attrs.insert(format!("border_{part}"), json!(v));
            }
        }

        let mut radius = serde_json::Map::new();
        for corner in CORNERS {
            if let Some(v) = styles.get(&format!("border-{corner}-radius")) {
                radius.insert(corner.replace('-', "_"), self.px(v));
            }
        }
        if !radius.is_empty() {
            attrs.insert("border_radius".into(), Value::Object(radius));
        } else if let Some(v) = styles.get("border-radius") {
            // Elliptical radii stay as authored.
            attrs.insert("border_radius".into(), json!(v));
        }
        attrs
    }

    fn box_shadow(&self, styles: &StyleMap) -> Attrs {
        shadow_attrs(
            styles,
            "box-shadow",
            &["horizontal", "vertical", "blur", "spread", "color", "inset"],
        )
    }

    fn typography(&self, styles: &StyleMap) -> Attrs {
        let mut attrs = Attrs::new();
        if let Some(family) = styles.get("font-family") {
            let cleaned: String = family.chars().filter(|c| *c != '"' && *c != '\'').collect();
            let first = cleaned.split(',').next().unwrap_or_default().trim();
            attrs.insert("font_family".into(), json!(first));
        }
        if let Some(size) = styles.get("font-size") {
            attrs.insert("font_size".into(), self.px(size));
        }
        if let Some(weight) = styles.get("font-weight") {
            attrs.insert("font_weight".into(), json!(normalize_font_weight(weight)));
        }
        for (css, key) in [
            ("font-style", "font_style"),
            ("text-transform", "text_transform"),
            ("text-decoration", "text_decoration"),
        ] {
            if let Some(v) = styles.get(css) {
                attrs.insert(key.into(), json!(v));
            }
        }
        if let Some(lh) = styles.get("line-height") {
            attrs.insert("line_height".into(), line_height(lh));
        }
        if let Some(v) = styles.get("letter-spacing") {
            attrs.insert("letter_spacing".into(), self.px(v));
        }
        if let Some(v) = styles.get("color") {
            attrs.insert("text_color".into(), json!(v));
        }
        if let Some(v) = styles.get("text-align") {
            attrs.insert("text_align".into(), json!(v));
        }
        if let Some(v) = styles.get("word-spacing") {
            attrs.insert("word_spacing".into(), self.px(v));
        }
        attrs.extend(shadow_attrs(
            styles,
            "text-shadow",
            &["horizontal", "vertical", "blur", "color"],
        ));
        attrs
    }

    fn transform(&self, styles: &StyleMap) -> Attrs {
        let mut attrs = Attrs::new();
        for part in [
            "scale",
            "scale-x",
            "scale-y",
            "rotate",
            "skew-x",
            "skew-y",
            "translate-x",
            "translate-y",
        ] {
            if let Some(v) = styles.get(&format!("transform-{part}")) {
                attrs.insert(
                    format!("transform_{}", part.replace('-', "_")),
                    numeric_or_string(v),
                );
            }
        }
        if let Some(origin) = styles.get("transform-origin") {
            attrs.insert("transform_origin".into(), json!(origin));
        }
        attrs
    }

    fn filters(&self, styles: &StyleMap) -> Attrs {
        let mut attrs = Attrs::new();
        for name in [
            "hue-rotate",
            "saturate",
            "brightness",
            "contrast",
            "invert",
            "sepia",
            "blur",
            "grayscale",
            "opacity",
        ] {
            if let Some(v) = styles.get(&format!("filter-{name}")) {
                attrs.insert(
                    format!("filter_{}", name.replace('-', "_")),
                    number(leading_float(v)),
                );
            }
        }
        attrs
    }

    fn sizing(&self, styles: &StyleMap) -> Attrs {
        let mut attrs = Attrs::new();
        for (css, key) in [
            ("width", "width"),
            ("max-width", "max_width"),
            ("min-width", "min_width"),
            ("height", "height"),
            ("max-height", "max_height"),
            ("min-height", "min_height"),
        ] {
            if let Some(v) = styles.get(css) {
                let value = if v.contains('%') || matches!(v, "auto" | "inherit" | "initial") {
                    json!(v)
                } else {
                    self.px(v)
                };
                attrs.insert(key.into(), value);
            }
        }
        for (css, key) in [
            ("overflow", "overflow"),
            ("overflow-x", "overflow_x"),
            ("overflow-y", "overflow_y"),
        ] {
            if let Some(v) = styles.get(css) {
                attrs.insert(key.into(), json!(v));
            }
        }
        attrs
    }

    fn position(&self, styles: &StyleMap) -> Attrs {
        let mut attrs = Attrs::new();
        if let Some(p) = styles.get("position") {
            if matches!(p, "relative" | "absolute" | "fixed" | "sticky") {
                attrs.insert("position".into(), json!(p));
            }
        }
        for side in SIDES {
            if let Some(v) = styles.get(side).filter(|v| *v != "auto") {
                attrs.insert(format!("position_{side}"), self.px(v));
            }
        }
        if let Some(z) = styles.get("z-index") {
            attrs.insert("z_index".into(), json!(leading_int(z)));
        }
        attrs
    }

    fn animation(&self, styles: &StyleMap) -> Attrs {
        let mut attrs = Attrs::new();
        if let Some(v) = styles.custom("animation") {
            attrs.insert("animation_style".into(), json!(v));
        }
        if let Some(v) = styles.custom("animation-direction") {
            attrs.insert("animation_direction".into(), json!(v));
        }
        if let Some(v) = styles.custom("animation-duration") {
            attrs.insert("animation_duration".into(), json!(leading_int(v)));
        }
        if let Some(v) = styles.custom("animation-delay") {
            attrs.insert("animation_delay".into(), json!(leading_int(v)));
        }
        if let Some(v) = styles.custom("animation-intensity") {
            attrs.insert("animation_intensity".into(), number(leading_float(v)));
        }
        if let Some(v) = styles.get("transition") {
            attrs.insert("css_transition".into(), json!(v));
        }
        attrs
    }

    fn misc(&self, styles: &StyleMap) -> Attrs {
        let mut attrs = Attrs::new();
        if let Some(v) = styles.get("opacity") {
            attrs.insert("opacity".into(), number(normalize_opacity(leading_float(v))));
        }
        for (css, key) in [
            ("visibility", "visibility"),
            ("display", "display"),
            ("cursor", "cursor"),
            ("object-fit", "object_fit"),
            ("object-position", "object_position"),
            ("vertical-align", "vertical_align"),
        ] {
            if let Some(v) = styles.get(css) {
                attrs.insert(key.into(), json!(v));
            }
        }
        attrs
    }
}

/// Opacity on the 0–100 attribute scale: values at or below 1 are CSS
/// fractions, anything larger is already a percentage.
pub fn normalize_opacity(value: f64) -> f64 {
    if value <= 1.0 { value * 100.0 } else { value }
}

pub fn normalize_font_weight(value: &str) -> i64 {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => 400,
        "bold" | "bolder" => 700,
        "lighter" => 300,
        other => leading_int(other),
    }
}

/// Unitless and `em` line heights become floats; `px` keeps its unit.
fn line_height(value: &str) -> Value {
    let trimmed = value.trim();
    if let Ok(n) = trimmed.parse::<f64>() {
        return number(n);
    }
    let lower = trimmed.to_ascii_lowercase();
    if let Some(n) = lower.strip_suffix("em").and_then(|n| n.parse::<f64>().ok()) {
        return number(n);
    }
    if let Some(n) = lower.strip_suffix("px").filter(|n| n.parse::<f64>().is_ok()) {
        return json!(format!("{n}px"));
    }
    json!(trimmed)
}

fn shadow_attrs(styles: &StyleMap, prefix: &str, parts: &[&str]) -> Attrs {
    let mut attrs = Attrs::new();
    let key_prefix = prefix.replace('-', "_");
    let Some(style) = styles.get(&format!("{prefix}-style")) else {
        return attrs;
    };
    if style == "none" {
        attrs.insert(format!("{key_prefix}_style"), json!("none"));
        return attrs;
    }
    attrs.insert(format!("{key_prefix}_style"), json!("custom"));
    for part in parts {
        let Some(v) = styles.get(&format!("{prefix}-{part}")) else {
            continue;
        };
        let value = match *part {
            "color" => json!(v),
            "inset" => json!(v == "true"),
            _ => numeric_or_string(v),
        };
        attrs.insert(format!("{key_prefix}_{part}"), value);
    }
    attrs
}

fn with_suffix(attrs: Attrs, suffix: &str) -> Attrs {
    attrs
        .into_iter()
        .map(|(k, v)| (format!("{k}{suffix}"), v))
        .collect()
}

fn url_target(image: &str) -> Option<String> {
    let lower = image.to_ascii_lowercase();
    let start = lower.find("url(")? + 4;
    let end = image[start..].find(')')? + start;
    let inner = image[start..end]
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();
    (!inner.is_empty()).then(|| inner.to_string())
}

fn numeric_or_string(value: &str) -> Value {
    match value.trim().parse::<f64>() {
        Ok(n) => number(n),
        Err(_) => json!(value),
    }
}

/// Leading numeric prefix as a float (`"120%"` → 120.0); 0 when absent.
pub(crate) fn leading_float(value: &str) -> f64 {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value[..end].parse::<f64>().unwrap_or(0.0)
}

pub(crate) fn leading_int(value: &str) -> i64 {
    leading_float(value).trunc() as i64
}
