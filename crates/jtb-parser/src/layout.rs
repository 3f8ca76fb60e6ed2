//! Structural classification: section / row / column detection and column
//! width inference.
//!
//! Every detector resolves in the same precedence: explicit `data-jtb-*`
//! override, then inline style, then class-name heuristics.

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use crate::dom::{self, MODULE_MARKER};
use crate::style::{StyleMap, parse_value_with_unit};

const SECTION_TAGS: &[&str] = &["section", "header", "footer", "main", "article", "aside", "nav"];
const SECTION_TOKENS: &[&str] = &[
    "section", "container", "wrapper", "hero", "banner", "block", "area", "zone", "region",
    "panel", "segment", "part",
];
const FULLWIDTH_CLASSES: &[&str] = &["full-width", "fullwidth", "full-bleed", "w-full", "w-screen"];
const CONTAINER_WIDTHS: &[(&str, i64)] = &[
    ("container-sm", 540),
    ("container-md", 720),
    ("container-lg", 960),
    ("container-xl", 1140),
    ("container-xxl", 1320),
    ("container", 1200),
];
const TAILWIND_WIDTHS: &[(&str, f64)] = &[
    ("w-1/2", 50.0),
    ("w-1/3", 33.33),
    ("w-2/3", 66.66),
    ("w-1/4", 25.0),
    ("w-3/4", 75.0),
    ("w-1/5", 20.0),
    ("w-2/5", 40.0),
    ("w-3/5", 60.0),
    ("w-4/5", 80.0),
    ("w-1/6", 16.66),
    ("w-5/6", 83.33),
    ("w-full", 100.0),
];
/// Percentage → fraction token, matched by nearest value.
const FRACTIONS: &[(f64, &str)] = &[
    (100.0, "1"),
    (50.0, "1_2"),
    (33.33, "1_3"),
    (33.34, "1_3"),
    (33.0, "1_3"),
    (66.66, "2_3"),
    (66.67, "2_3"),
    (67.0, "2_3"),
    (25.0, "1_4"),
    (75.0, "3_4"),
    (20.0, "1_5"),
    (40.0, "2_5"),
    (60.0, "3_5"),
    (80.0, "4_5"),
    (16.66, "1_6"),
    (16.67, "1_6"),
    (17.0, "1_6"),
    (83.33, "5_6"),
    (83.34, "5_6"),
    (83.0, "5_6"),
];
/// Most columns a row can hold.
pub const MAX_COLUMNS: usize = 12;

static ROW_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:row|flex|grid|columns|d-flex|flexbox|layout|items|group|list)\b")
        .expect("row class pattern")
});
static COLUMN_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:col|column|cell|grid-item|flex-item|item|card|box|tile)")
        .expect("column class pattern")
});
static GRID_COLUMN_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bcol(?:-\d+|-sm|-md|-lg|-xl)?(?:-\d+)?\b").expect("grid column pattern")
});
static FRACTION_WIDTH_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bw-(?:\d+/\d+|full|auto)\b").expect("width class pattern"));
static COLUMN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)flex(?:-basis)?\s*:\s*\d|width\s*:\s*\d+(?:\.\d+)?%")
        .expect("column style pattern")
});
static COL_SPAN_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bcol-(?:(?:sm|md|lg|xl|xxl)-)?(\d+)\b").expect("col span pattern")
});
static GRID_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^span\s*(\d+)").expect("grid span pattern"));
static MAX_WIDTH_PX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)px$").expect("max width pattern"));

fn lower_class(element: ElementRef<'_>) -> String {
    dom::class_attr(element).to_ascii_lowercase()
}

fn inline_style(element: ElementRef<'_>) -> StyleMap {
    crate::style::extract(element)
}

fn marker_is(element: ElementRef<'_>, kind: &str) -> bool {
    dom::attr(element, MODULE_MARKER).is_some_and(|m| m.trim().eq_ignore_ascii_case(kind))
}

pub fn is_section_like(element: ElementRef<'_>) -> bool {
    let tag = dom::tag(element);
    if SECTION_TAGS.contains(&tag.as_str()) || marker_is(element, "section") {
        return true;
    }
    if tag != "div" {
        return false;
    }
    let class = lower_class(element);
    let id = dom::attr(element, "id").unwrap_or_default().to_ascii_lowercase();
    SECTION_TOKENS
        .iter()
        .any(|token| class.contains(token) || id.contains(token))
}

pub fn is_row_like(element: ElementRef<'_>) -> bool {
    if marker_is(element, "row") {
        return true;
    }
    let style = inline_style(element);
    let display = style.get("display").map(str::to_ascii_lowercase);
    match display.as_deref() {
        Some("flex" | "inline-flex") => {
            let column = style
                .get("flex-direction")
                .is_some_and(|d| d.to_ascii_lowercase().starts_with("column"));
            if !column {
                return true;
            }
        }
        Some("grid" | "inline-grid") if style.contains("grid-template-columns") => return true,
        _ => {}
    }
    ROW_CLASS.is_match(&lower_class(element))
}

pub fn is_column_like(element: ElementRef<'_>) -> bool {
    if marker_is(element, "column") {
        return true;
    }
    let class = lower_class(element);
    if COLUMN_CLASS.is_match(&class)
        || GRID_COLUMN_CLASS.is_match(&class)
        || FRACTION_WIDTH_CLASS.is_match(&class)
    {
        return true;
    }
    dom::attr(element, "style").is_some_and(|s| COLUMN_STYLE.is_match(s))
}

/// Canonical column structure for a row, e.g. `1_3,2_3`.
pub fn detect_column_structure(row: ElementRef<'_>) -> String {
    if let Some(explicit) = dom::explicit_attr(row, "columns") {
        return explicit.trim().to_string();
    }
    let children = dom::element_children(row);
    if children.len() <= 1 {
        return "1".to_string();
    }
    let widths: Option<Vec<f64>> = children.iter().map(|c| detect_child_width(*c)).collect();
    match widths {
        Some(widths) => widths
            .into_iter()
            .map(percentage_to_fraction)
            .collect::<Vec<_>>()
            .join(","),
        None => equal_columns(children.len()),
    }
}

/// Width of one row child as a percentage, when detectable.
pub fn detect_child_width(element: ElementRef<'_>) -> Option<f64> {
    if let Some(explicit) = dom::explicit_attr(element, "width") {
        return Some(fraction_to_percentage(explicit.trim()));
    }
    let style = inline_style(element);
    if let Some(pct) = style.get("width").and_then(percent_value) {
        return Some(pct);
    }
    if let Some(pct) = style.get("flex-basis").and_then(percent_value) {
        return Some(pct);
    }
    if let Some(flex) = style.get("flex") {
        let parts: Vec<&str> = flex.split_whitespace().collect();
        let basis = match parts.as_slice() {
            [single] => percent_value(single),
            [_, _, basis, ..] => percent_value(basis),
            _ => None,
        };
        if basis.is_some() {
            return basis;
        }
    }
    let class = lower_class(element);
    if let Some(span) = COL_SPAN_CLASS
        .captures(&class)
        .and_then(|c| c.get(1)?.as_str().parse::<f64>().ok())
    {
        return Some(span / 12.0 * 100.0);
    }
    if let Some((_, pct)) = TAILWIND_WIDTHS
        .iter()
        .find(|(name, _)| class.split_whitespace().any(|c| c == *name))
    {
        return Some(*pct);
    }
    style
        .get("grid-column")
        .and_then(|g| GRID_SPAN.captures(g.trim()))
        .and_then(|c| c.get(1)?.as_str().parse::<f64>().ok())
        .map(|span| span / 12.0 * 100.0)
}

fn percent_value(value: &str) -> Option<f64> {
    let (number, unit) = parse_value_with_unit(value);
    (unit == "%").then_some(number)
}

pub fn fraction_to_percentage(fraction: &str) -> f64 {
    match fraction {
        "1" => 100.0,
        "1_2" => 50.0,
        "1_3" => 33.33,
        "2_3" => 66.66,
        "1_4" => 25.0,
        "3_4" => 75.0,
        "1_5" => 20.0,
        "2_5" => 40.0,
        "3_5" => 60.0,
        "4_5" => 80.0,
        "1_6" => 16.66,
        "5_6" => 83.33,
        _ => 50.0,
    }
}

/// Nearest canonical fraction; ties keep the earlier table entry.
pub fn percentage_to_fraction(percentage: f64) -> &'static str {
    let mut closest = "1_2";
    let mut min_diff = f64::MAX;
    for (pct, fraction) in FRACTIONS {
        let diff = (percentage - pct).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = fraction;
        }
    }
    closest
}

/// `count` equal columns. Rows wider than twelve columns are folded to twelve.
pub fn equal_columns(count: usize) -> String {
    let count = count.min(MAX_COLUMNS);
    if count <= 1 {
        return "1".to_string();
    }
    vec![format!("1_{count}"); count].join(",")
}

/// Non-blank direct text or any element child.
pub fn has_significant_content(element: ElementRef<'_>) -> bool {
    !dom::element_children(element).is_empty() || dom::has_direct_text(element)
}

pub fn is_fullwidth_element(element: ElementRef<'_>) -> bool {
    let class = lower_class(element);
    if FULLWIDTH_CLASSES.iter().any(|c| class.contains(c)) {
        return true;
    }
    if inline_style(element)
        .get("width")
        .is_some_and(|w| w.trim().eq_ignore_ascii_case("100vw"))
    {
        return true;
    }
    dom::explicit_attr(element, "fullwidth").is_some_and(|v| v.trim() == "true")
}

/// Max content width in pixels for a section.
pub fn detect_inner_width(element: ElementRef<'_>) -> Option<i64> {
    if let Some(explicit) = dom::explicit_attr(element, "inner_width") {
        return Some(crate::attributes::leading_int(explicit));
    }
    for child in dom::element_children(element) {
        let class = lower_class(child);
        if ["container", "inner", "content"].iter().any(|t| class.contains(t)) {
            if let Some(px) = max_width_px(&inline_style(child)) {
                return Some(px);
            }
        }
    }
    if let Some(px) = max_width_px(&inline_style(element)) {
        return Some(px);
    }
    let class = lower_class(element);
    CONTAINER_WIDTHS
        .iter()
        .find(|(name, _)| class.contains(name))
        .map(|(_, width)| *width)
}

fn max_width_px(style: &StyleMap) -> Option<i64> {
    let value = style.get("max-width")?;
    MAX_WIDTH_PX
        .captures(value.trim())
        .and_then(|c| c.get(1)?.as_str().parse().ok())
}

pub fn detect_vertical_align(element: ElementRef<'_>) -> Option<String> {
    if let Some(explicit) = dom::explicit_attr(element, "vertical_align") {
        return Some(explicit.trim().to_string());
    }
    let align = inline_style(element).get("align-items")?.to_ascii_lowercase();
    let mapped = match align.trim() {
        "flex-start" | "start" => "top",
        "flex-end" | "end" => "bottom",
        "center" => "center",
        "stretch" => "stretch",
        "baseline" => "baseline",
        _ => return None,
    };
    Some(mapped.to_string())
}

/// Gap between columns; a two-value `gap` contributes its second value.
pub fn detect_column_gap(element: ElementRef<'_>) -> Option<i64> {
    if let Some(explicit) = dom::explicit_attr(element, "column_gap") {
        return Some(crate::attributes::leading_int(explicit));
    }
    let style = inline_style(element);
    if let Some(v) = style.get("column-gap").or(style.get("grid-column-gap")) {
        return gap_px(v);
    }
    let gap = style.get("gap")?;
    let parts: Vec<&str> = gap.split_whitespace().collect();
    gap_px(parts.get(1).or(parts.first())?)
}

pub fn detect_row_gap(element: ElementRef<'_>) -> Option<i64> {
    if let Some(explicit) = dom::explicit_attr(element, "row_gap") {
        return Some(crate::attributes::leading_int(explicit));
    }
    let style = inline_style(element);
    if let Some(v) = style.get("row-gap").or(style.get("grid-row-gap")) {
        return gap_px(v);
    }
    gap_px(style.get("gap")?.split_whitespace().next()?)
}

fn gap_px(value: &str) -> Option<i64> {
    let (number, unit) = parse_value_with_unit(value);
    matches!(unit.as_str(), "" | "px").then_some(number.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn with_first<R>(html: &str, f: impl FnOnce(ElementRef<'_>) -> R) -> R {
        let doc = Html::parse_fragment(html);
        let first = doc
            .root_element()
            .children()
            .filter_map(ElementRef::wrap)
            .next()
            .unwrap();
        f(first)
    }

    #[test]
    fn sections() {
        assert!(with_first("<header></header>", is_section_like));
        assert!(with_first(r#"<div class="hero-area"></div>"#, is_section_like));
        assert!(with_first(r#"<div id="main-wrapper"></div>"#, is_section_like));
        assert!(with_first(r#"<div data-jtb-module="section"></div>"#, is_section_like));
        assert!(!with_first(r#"<p class="section"></p>"#, is_section_like));
        assert!(!with_first(r#"<div class="card"></div>"#, is_section_like));
    }

    #[test]
    fn rows() {
        assert!(with_first(r#"<div style="display:flex"></div>"#, is_row_like));
        assert!(!with_first(
            r#"<div style="display:flex; flex-direction: column"></div>"#,
            is_row_like
        ));
        assert!(with_first(
            r#"<div style="display:grid;grid-template-columns:1fr 1fr"></div>"#,
            is_row_like
        ));
        assert!(!with_first(r#"<div style="display:grid"></div>"#, is_row_like));
        assert!(with_first(r#"<div class="d-flex gap-2"></div>"#, is_row_like));
        assert!(!with_first(r#"<div class="rowdy"></div>"#, is_row_like));
    }

    #[test]
    fn columns() {
        assert!(with_first(r#"<div class="col-md-6"></div>"#, is_column_like));
        assert!(with_first(r#"<div class="w-1/3"></div>"#, is_column_like));
        assert!(with_first(r#"<div style="width: 25%"></div>"#, is_column_like));
        assert!(with_first(r#"<div style="flex: 1"></div>"#, is_column_like));
        assert!(!with_first(r#"<div class="hero"></div>"#, is_column_like));
    }

    #[test]
    fn structure_from_widths() {
        let html = r#"<div><div style="width:33.33%">a</div><div style="width:33.33%">b</div><div style="width:33.33%">c</div></div>"#;
        assert_eq!(with_first(html, detect_column_structure), "1_3,1_3,1_3");

        let html = r#"<div><div class="col-4"></div><div class="col-8"></div></div>"#;
        assert_eq!(with_first(html, detect_column_structure), "1_3,2_3");

        let html = r#"<div><div style="flex: 1 1 25%"></div><div class="w-3/4"></div></div>"#;
        assert_eq!(with_first(html, detect_column_structure), "1_4,3_4");
    }

    #[test]
    fn structure_falls_back_to_equal_columns() {
        let html = "<div><div>a</div><div>b</div><div>c</div><div>d</div></div>";
        assert_eq!(with_first(html, detect_column_structure), "1_4,1_4,1_4,1_4");

        let html = r#"<div><div style="width:50%">a</div><div>b</div></div>"#;
        assert_eq!(with_first(html, detect_column_structure), "1_2,1_2");

        let html = r#"<div data-jtb-attr-columns="2_3,1_3"><div></div></div>"#;
        assert_eq!(with_first(html, detect_column_structure), "2_3,1_3");

        assert_eq!(with_first("<div></div>", detect_column_structure), "1");
        let wide = equal_columns(14);
        assert_eq!(wide.split(',').count(), 12);
        assert!(wide.split(',').all(|token| token == "1_12"));
    }

    #[test]
    fn section_details() {
        let html = r#"<section class="full-width" style="align-items:center; gap: 20px 30px"><div class="inner" style="max-width: 960px"></div></section>"#;
        with_first(html, |s| {
            assert!(is_fullwidth_element(s));
            assert_eq!(detect_inner_width(s), Some(960));
            assert_eq!(detect_vertical_align(s).as_deref(), Some("center"));
            assert_eq!(detect_row_gap(s), Some(20));
            assert_eq!(detect_column_gap(s), Some(30));
        });
        let html = r#"<div class="container-lg"></div>"#;
        assert_eq!(with_first(html, detect_inner_width), Some(960));
    }
}
