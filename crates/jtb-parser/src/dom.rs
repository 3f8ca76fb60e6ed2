//! Small helpers over the `scraper` tree shared by every pass.

use std::ops::Deref;

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};

pub const MODULE_MARKER: &str = "data-jtb-module";
pub const ATTR_PREFIX: &str = "data-jtb-attr-";

/// Value of `data-jtb-module`, trimmed; empty markers count as absent.
pub fn module_marker(element: ElementRef<'_>) -> Option<&str> {
    non_empty_attr(element, MODULE_MARKER).map(str::trim)
}

/// Value of the author override `data-jtb-attr-<name>` when non-empty.
pub fn explicit_attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element
        .value()
        .attrs()
        .find(|(key, _)| {
            key.strip_prefix(ATTR_PREFIX)
                .is_some_and(|rest| rest.eq_ignore_ascii_case(name))
        })
        .map(|(_, value)| value)
        .filter(|v| !v.trim().is_empty())
}

/// Lowercase local tag name.
pub fn tag(element: ElementRef<'_>) -> String {
    element.value().name().to_ascii_lowercase()
}

pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// Attribute value, treating an empty string as absent.
pub fn non_empty_attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    attr(element, name).filter(|v| !v.trim().is_empty())
}

pub fn class_attr(element: ElementRef<'_>) -> &str {
    attr(element, "class").unwrap_or_default()
}

pub fn classes(element: ElementRef<'_>) -> Vec<String> {
    class_attr(element)
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect()
}

pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    class_attr(element)
        .split_whitespace()
        .any(|c| c.eq_ignore_ascii_case(class))
}

/// Direct element children in document order.
pub fn element_children(element: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    element.children().filter_map(ElementRef::wrap).collect()
}

/// All element descendants in document order, excluding `element` itself.
pub fn descendants(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    element.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// First descendant (not self) with one of the given tags.
pub fn find_descendant<'a>(element: ElementRef<'a>, tags: &[&str]) -> Option<ElementRef<'a>> {
    descendants(element).find(|e| tags.iter().any(|t| e.value().name().eq_ignore_ascii_case(t)))
}

pub fn count_descendants(element: ElementRef<'_>, tags: &[&str]) -> usize {
    descendants(element)
        .filter(|e| tags.iter().any(|t| e.value().name().eq_ignore_ascii_case(t)))
        .count()
}

/// Concatenated descendant text, trimmed.
pub fn text_content(element: ElementRef<'_>) -> String {
    collect_text(&element).trim().to_string()
}

pub fn inner_markup(element: ElementRef<'_>) -> String {
    element.inner_html().trim().to_string()
}

pub fn outer_markup(element: ElementRef<'_>) -> String {
    element.html()
}

pub fn collect_text(node: &NodeRef<Node>) -> String {
    match node.value() {
        Node::Text(text) => text.deref().to_string(),
        _ => {
            let mut content = String::new();
            for child in node.children() {
                content.push_str(&collect_text(&child));
            }
            content
        }
    }
}

/// True when the node has a non-whitespace text child of its own.
pub fn has_direct_text(element: ElementRef<'_>) -> bool {
    element.children().any(|child| match child.value() {
        Node::Text(text) => !text.trim().is_empty(),
        _ => false,
    })
}

pub fn normalize_whitespace(input: &str) -> String {
    let mut result = String::new();
    let mut prev_was_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                if !result.is_empty() {
                    result.push(' ');
                }
                prev_was_space = true;
            }
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }
    result.trim().to_string()
}

pub fn find_body(document: &Html) -> Option<ElementRef<'_>> {
    let selector = Selector::parse("body").ok()?;
    document.select(&selector).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(doc: &'a Html, sel: &str) -> ElementRef<'a> {
        let selector = Selector::parse(sel).unwrap();
        doc.select(&selector).next().unwrap()
    }

    #[test]
    fn helpers_read_classes_and_text() {
        let doc = Html::parse_fragment(
            r#"<div class="Card  featured"><h3> Title </h3><p>Body <b>bold</b></p></div>"#,
        );
        let card = first(&doc, "div");
        assert_eq!(classes(card), vec!["card", "featured"]);
        assert!(has_class(card, "FEATURED"));
        assert_eq!(element_children(card).len(), 2);
        assert_eq!(text_content(card), "Title Body bold");
        assert_eq!(
            find_descendant(card, &["b"]).map(|b| text_content(b)),
            Some("bold".into())
        );
        assert!(!has_direct_text(card));
    }

    #[test]
    fn normalize_collapses_runs() {
        assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
    }
}
