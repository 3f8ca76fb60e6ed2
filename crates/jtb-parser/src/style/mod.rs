//! Inline style extraction.
//!
//! Reads an element's `style` attribute into a [`StyleMap`], keeping the
//! declaration order, splitting only at top-level semicolons and pulling
//! `--jtb-*` custom properties into their own map. Shorthand expansion lives
//! in [`shorthand`]; unit handling in [`to_pixels`].

pub mod color;
pub mod shorthand;

use std::collections::BTreeMap;

use scraper::ElementRef;

pub use shorthand::{expand_all_shorthands, expand_shorthand};

pub const DEFAULT_BASE_FONT_SIZE: i64 = 16;

const CUSTOM_PREFIX: &str = "--jtb-";

/// Ordered property → value map for one element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    props: Vec<(String, String)>,
    custom: BTreeMap<String, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Inserts or replaces a property. A replaced property keeps its position.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        if let Some(slot) = self.props.iter_mut().find(|(name, _)| *name == property) {
            slot.1 = value;
        } else {
            self.props.push((property, value));
        }
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        let idx = self.props.iter().position(|(name, _)| name == property)?;
        Some(self.props.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty() && self.custom.is_empty()
    }

    /// Custom property value by its name without the `--jtb-` prefix.
    pub fn custom(&self, name: &str) -> Option<&str> {
        self.custom.get(name).map(String::as_str)
    }

    pub fn customs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.custom.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn set_custom(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.custom.insert(name.into(), value.into());
    }

    pub(crate) fn with_props(&self, props: Vec<(String, String)>) -> Self {
        let mut out = Self {
            props: Vec::with_capacity(props.len()),
            custom: self.custom.clone(),
        };
        for (k, v) in props {
            out.set(k, v);
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

/// Reads the element's inline style. Missing attribute yields an empty map.
pub fn extract(element: ElementRef<'_>) -> StyleMap {
    element
        .value()
        .attr("style")
        .map(parse_style_string)
        .unwrap_or_default()
}

/// Parses a declaration list such as `color: red; margin: 0 auto`.
///
/// Malformed declarations (no colon, empty name or value) are skipped.
pub fn parse_style_string(source: &str) -> StyleMap {
    let mut map = StyleMap::new();
    let normalized = crate::dom::normalize_whitespace(source);
    if normalized.is_empty() {
        return map;
    }
    for decl in split_declarations(&normalized) {
        let Some((name, value)) = decl.split_once(':') else {
            continue;
        };
        let name = name.trim().to_ascii_lowercase();
        let value = strip_important(value.trim());
        if name.is_empty() || value.is_empty() {
            continue;
        }
        if let Some(custom) = name.strip_prefix(CUSTOM_PREFIX) {
            map.set_custom(custom, value);
        } else {
            map.set(name, value);
        }
    }
    map
}

fn strip_important(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    match lower.find("!important") {
        Some(idx) => {
            let mut out = String::with_capacity(value.len());
            out.push_str(&value[..idx]);
            out.push_str(&value[idx + "!important".len()..]);
            out.trim().to_string()
        }
        None => value.to_string(),
    }
}

/// Splits on `;` outside of parentheses and quotes.
pub(crate) fn split_declarations(source: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0usize;
    for (idx, ch) in source.char_indices() {
        match ch {
            '"' | '\'' => match quote {
                Some(q) if q == ch => quote = None,
                None => quote = Some(ch),
                _ => {}
            },
            '(' if quote.is_none() => depth += 1,
            ')' if quote.is_none() => depth = depth.saturating_sub(1),
            ';' if depth == 0 && quote.is_none() => {
                parts.push(&source[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    if !source[start..].trim().is_empty() {
        parts.push(&source[start..]);
    }
    parts
}

/// Splits on whitespace outside of parentheses, so `rgba(0, 0, 0, .5)` stays
/// one token.
pub(crate) fn split_tokens(value: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;
    for (idx, ch) in value.char_indices() {
        match ch {
            '(' => {
                depth += 1;
                start.get_or_insert(idx);
            }
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    tokens.push(&value[s..idx]);
                }
            }
            _ => {
                start.get_or_insert(idx);
            }
        }
    }
    if let Some(s) = start {
        tokens.push(&value[s..]);
    }
    tokens
}

/// Numeric part and lowercase unit of a single CSS length. Unparsable input
/// yields `(0.0, "")`.
pub fn parse_value_with_unit(value: &str) -> (f64, String) {
    const UNITS: &[&str] = &[
        "px", "em", "rem", "%", "vw", "vh", "vmin", "vmax", "pt", "pc", "in", "cm", "mm",
    ];
    let value = value.trim();
    let split = value
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*i == 0 && *c == '-')))
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let unit = unit.to_ascii_lowercase();
    if !unit.is_empty() && !UNITS.contains(&unit.as_str()) {
        return (0.0, String::new());
    }
    match number.parse::<f64>() {
        Ok(n) => (n, unit),
        Err(_) => (0.0, String::new()),
    }
}

/// Approximate pixel value, truncated toward zero.
///
/// `%` and unknown units return the bare number; the caller owns the context.
pub fn to_pixels(value: &str, base_font_size: i64) -> i64 {
    let (number, unit) = parse_value_with_unit(value);
    let px = match unit.as_str() {
        "em" | "rem" => number * base_font_size as f64,
        "pt" => number * 1.333,
        _ => number,
    };
    px.trunc() as i64
}
