use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Value, json};

static LINEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)linear-gradient\s*\(\s*(?:to\s+(\w+(?:\s+\w+)?)|(-?\d+(?:\.\d+)?)deg)?\s*,?\s*(.+)\)",
    )
    .expect("linear gradient pattern")
});
static RADIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)radial-gradient\s*\((.+)\)").expect("radial gradient pattern")
});
static STOP_WITH_POSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s+(\d+(?:\.\d+)?)%$").expect("gradient stop pattern")
});
static SHAPE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(circle|ellipse|closest|farthest|at\s)").expect("gradient shape pattern")
});

pub const DEFAULT_DIRECTION: i64 = 180;

#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub kind: &'static str,
    pub direction: Option<i64>,
    pub stops: Vec<Value>,
}

/// Degrees for a `to <side>` keyword pair; unknown pairs fall back to 180.
pub fn direction_degrees(keyword: &str) -> i64 {
    let normalized = keyword
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(" ");
    match normalized.as_str() {
        "top" => 0,
        "right" => 90,
        "bottom" => 180,
        "left" => 270,
        "top right" | "right top" => 45,
        "bottom right" | "right bottom" => 135,
        "bottom left" | "left bottom" => 225,
        "top left" | "left top" => 315,
        _ => DEFAULT_DIRECTION,
    }
}

pub fn parse_gradient(image: &str) -> Option<Gradient> {
    if let Some(caps) = LINEAR.captures(image) {
        let direction = if let Some(deg) = caps.get(2) {
            deg.as_str().parse::<f64>().map(|d| d as i64).unwrap_or(DEFAULT_DIRECTION)
        } else if let Some(keyword) = caps.get(1) {
            direction_degrees(keyword.as_str())
        } else {
            DEFAULT_DIRECTION
        };
        let stops = caps.get(3).map(|m| parse_stops(m.as_str())).unwrap_or_default();
        return Some(Gradient {
            kind: "linear",
            direction: Some(direction),
            stops,
        });
    }
    let caps = RADIAL.captures(image)?;
    Some(Gradient {
        kind: "radial",
        direction: None,
        stops: parse_stops(caps.get(1)?.as_str()),
    })
}

/// `[{color, position}]` with explicit percentages or 0/100 inferred.
pub fn parse_stops(source: &str) -> Vec<Value> {
    let mut stops: Vec<(String, i64)> = Vec::new();
    for part in split_commas(source) {
        let part = part.trim();
        if part.is_empty() || SHAPE_KEYWORD.is_match(part) {
            continue;
        }
        match STOP_WITH_POSITION.captures(part) {
            Some(caps) => {
                let color = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
                let position = caps
                    .get(2)
                    .and_then(|m| m.as_str().parse::<f64>().ok())
                    .unwrap_or(0.0) as i64;
                stops.push((color.to_string(), position));
            }
            None => {
                let position = if stops.is_empty() { 0 } else { 100 };
                stops.push((part.to_string(), position));
            }
        }
    }
    if let [(_, 0), (_, second)] = stops.as_mut_slice() {
        if *second == 0 {
            *second = 100;
        }
    }
    stops
        .into_iter()
        .map(|(color, position)| json!({"color": color, "position": position}))
        .collect()
}

fn split_commas(source: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0usize;
    for (idx, ch) in source.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&source[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&source[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_keywords_and_degrees() {
        let to_right = parse_gradient("linear-gradient(to right, red, blue)").unwrap();
        assert_eq!(to_right.direction, Some(90));
        let deg = parse_gradient("linear-gradient(45deg, red, blue)").unwrap();
        assert_eq!(deg.direction, Some(45));
        let none = parse_gradient("linear-gradient(red, blue)").unwrap();
        assert_eq!(none.direction, Some(180));
        let diagonal = parse_gradient("linear-gradient(to bottom left, red, blue)").unwrap();
        assert_eq!(diagonal.direction, Some(225));
    }

    #[test]
    fn stops_keep_nested_commas() {
        let g = parse_gradient("linear-gradient(to top, rgba(0,0,0,.5) 10%, #fff)").unwrap();
        assert_eq!(
            g.stops,
            vec![
                json!({"color": "rgba(0,0,0,.5)", "position": 10}),
                json!({"color": "#fff", "position": 100}),
            ]
        );
    }

    #[test]
    fn radial_skips_shape_keywords() {
        let g = parse_gradient("radial-gradient(circle at center, red, blue)").unwrap();
        assert_eq!(g.kind, "radial");
        assert_eq!(
            g.stops,
            vec![
                json!({"color": "red", "position": 0}),
                json!({"color": "blue", "position": 100}),
            ]
        );
    }
}
