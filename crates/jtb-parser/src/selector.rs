//! The small selector language used by catalog field rules.
//!
//! A selector is a comma list of alternatives tried in order. Each
//! alternative is a whitespace-separated descendant path of compounds
//! (`tag`, `.class`, `tag.class`, `tag[attr="v"]`), an optional
//! `:first-child`/`:first-of-type`/`:last-child`/`:last-of-type` position and
//! an optional trailing `@attr`. Matching only looks below the context
//! element.

use scraper::ElementRef;

use crate::dom;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelector {
    alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, Copy)]
pub enum Hit<'a> {
    Element(ElementRef<'a>),
    Attribute(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Alternative {
    path: Vec<Compound>,
    position: Position,
    attribute: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Any,
    First,
    Last,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

impl FieldSelector {
    /// Parses `source`; malformed alternatives are dropped.
    pub fn parse(source: &str) -> Self {
        let alternatives = source
            .split(',')
            .filter_map(parse_alternative)
            .collect();
        Self { alternatives }
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// First alternative that produces a value. An element hit for an
    /// `@attr` alternative that lacks the attribute falls through to the
    /// next alternative.
    pub fn find<'a>(&self, context: ElementRef<'a>) -> Option<Hit<'a>> {
        self.alternatives.iter().find_map(|alt| {
            let element = alt.select(context).into_iter().next()?;
            alt.hit(element)
        })
    }

    /// Every hit of every alternative, in alternative order.
    pub fn find_all<'a>(&self, context: ElementRef<'a>) -> Vec<Hit<'a>> {
        self.alternatives
            .iter()
            .flat_map(|alt| {
                alt.select(context)
                    .into_iter()
                    .filter_map(move |el| alt.hit(el))
            })
            .collect()
    }
}

impl Alternative {
    fn select<'a>(&self, context: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        let Some((target, ancestors)) = self.path.split_last() else {
            return Vec::new();
        };
        let mut matches: Vec<ElementRef<'a>> = dom::descendants(context)
            .filter(|el| target.matches(*el) && ancestors_match(*el, ancestors, context))
            .collect();
        match self.position {
            Position::Any => matches,
            Position::First => {
                matches.truncate(1);
                matches
            }
            Position::Last => matches.pop().into_iter().collect(),
        }
    }

    fn hit<'a>(&self, element: ElementRef<'a>) -> Option<Hit<'a>> {
        match &self.attribute {
            Some(name) => dom::attr(element, name).map(Hit::Attribute),
            None => Some(Hit::Element(element)),
        }
    }
}

impl Compound {
    fn matches(&self, element: ElementRef<'_>) -> bool {
        if let Some(tag) = &self.tag {
            if !element.value().name().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        self.classes.iter().all(|c| dom::has_class(element, c))
            && self.attrs.iter().all(|(name, expected)| {
                match (dom::attr(element, name), expected) {
                    (Some(actual), Some(expected)) => actual == expected,
                    (Some(_), None) => true,
                    (None, _) => false,
                }
            })
    }

    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.classes.is_empty() && self.attrs.is_empty()
    }
}

/// Ancestor compounds must match, innermost first, between `element` and
/// `context` (inclusive).
fn ancestors_match(element: ElementRef<'_>, ancestors: &[Compound], context: ElementRef<'_>) -> bool {
    let mut node = element.parent();
    for needed in ancestors.iter().rev() {
        loop {
            let Some(candidate) = node.and_then(ElementRef::wrap) else {
                return false;
            };
            let at_context = candidate.id() == context.id();
            node = if at_context { None } else { candidate.parent() };
            if needed.matches(candidate) {
                break;
            }
            if at_context {
                return false;
            }
        }
    }
    true
}

fn parse_alternative(source: &str) -> Option<Alternative> {
    let source = source.trim();
    let bracket_end = source.rfind(']').map_or(0, |i| i + 1);
    let (selector, attribute) = match source[bracket_end..].rfind('@') {
        Some(at) => {
            let at = bracket_end + at;
            let name = source[at + 1..].trim().to_ascii_lowercase();
            (&source[..at], (!name.is_empty()).then_some(name))
        }
        None => (source, None),
    };
    let (selector, position) = match selector[bracket_end.min(selector.len())..].rfind(':') {
        Some(colon) => {
            let colon = bracket_end.min(selector.len()) + colon;
            let position = match selector[colon + 1..].trim() {
                "first-child" | "first-of-type" => Position::First,
                "last-child" | "last-of-type" => Position::Last,
                _ => return None,
            };
            (&selector[..colon], position)
        }
        None => (selector, Position::Any),
    };
    let path = selector
        .split_whitespace()
        .map(parse_compound)
        .collect::<Option<Vec<_>>>()?;
    if path.is_empty() {
        return None;
    }
    Some(Alternative {
        path,
        position,
        attribute,
    })
}

fn parse_compound(source: &str) -> Option<Compound> {
    let is_delim = |c: char| c == '.' || c == '[';
    let tag_end = source.find(is_delim).unwrap_or(source.len());
    let tag = &source[..tag_end];
    if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '*') {
        return None;
    }
    let mut compound = Compound {
        tag: (!tag.is_empty() && tag != "*").then(|| tag.to_ascii_lowercase()),
        ..Compound::default()
    };
    let mut rest = &source[tag_end..];
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('.') {
            let end = after.find(is_delim).unwrap_or(after.len());
            if end == 0 {
                return None;
            }
            compound.classes.push(after[..end].to_ascii_lowercase());
            rest = &after[end..];
        } else if let Some(after) = rest.strip_prefix('[') {
            let end = after.find(']')?;
            compound.attrs.push(parse_attr_test(&after[..end])?);
            rest = &after[end + 1..];
        } else {
            return None;
        }
    }
    (!compound.is_empty() || tag == "*").then_some(compound)
}

fn parse_attr_test(source: &str) -> Option<(String, Option<String>)> {
    match source.split_once('=') {
        Some((name, value)) => {
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            (!name.is_empty()).then(|| (name, Some(value.to_string())))
        }
        None => {
            let name = source.trim().to_ascii_lowercase();
            (!name.is_empty()).then_some((name, None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn with_root<R>(html: &str, f: impl FnOnce(ElementRef<'_>) -> R) -> R {
        let doc = Html::parse_fragment(html);
        let root = dom::element_children(doc.root_element())
            .into_iter()
            .next()
            .expect("fragment has an element");
        f(root)
    }

    fn text(hit: Option<Hit<'_>>) -> Option<String> {
        match hit? {
            Hit::Element(el) => Some(dom::text_content(el)),
            Hit::Attribute(v) => Some(v.to_string()),
        }
    }

    #[test]
    fn alternatives_are_tried_in_order() {
        with_root(
            r#"<div><p>body</p><h3>Title</h3></div>"#,
            |root| {
                assert_eq!(text(FieldSelector::parse("h1,h2,h3").find(root)), Some("Title".into()));
                assert_eq!(text(FieldSelector::parse(".missing,p").find(root)), Some("body".into()));
            },
        );
    }

    #[test]
    fn attribute_suffix_falls_through_when_absent() {
        with_root(
            r#"<div><a class="btn">Go</a><a class="button" href="/x">Other</a></div>"#,
            |root| {
                let sel = FieldSelector::parse(".btn@href,a.button@href");
                assert_eq!(text(sel.find(root)), Some("/x".into()));
            },
        );
    }

    #[test]
    fn attribute_equality_and_positions() {
        with_root(
            r#"<form><input type="text" placeholder="Name"><input type="search" placeholder="Find"><a class="btn" href="/1">One</a><a class="btn" href="/2">Two</a></form>"#,
            |root| {
                let sel = FieldSelector::parse(r#"input[type="search"]@placeholder"#);
                assert_eq!(text(sel.find(root)), Some("Find".into()));
                assert_eq!(
                    text(FieldSelector::parse(".btn:first-of-type@href").find(root)),
                    Some("/1".into())
                );
                assert_eq!(
                    text(FieldSelector::parse(".btn:last-child").find(root)),
                    Some("Two".into())
                );
            },
        );
    }

    #[test]
    fn descendant_paths_and_find_all() {
        with_root(
            r#"<header><div class="logo"><img src="logo.png"></div><img src="hero.jpg"><img src="b.jpg"></header>"#,
            |root| {
                assert_eq!(
                    text(FieldSelector::parse(".logo img@src").find(root)),
                    Some("logo.png".into())
                );
                let all: Vec<_> = FieldSelector::parse("img@src")
                    .find_all(root)
                    .into_iter()
                    .map(|h| text(Some(h)).unwrap_or_default())
                    .collect();
                assert_eq!(all, vec!["logo.png", "hero.jpg", "b.jpg"]);
            },
        );
    }

    #[test]
    fn context_itself_is_not_a_match() {
        with_root(r#"<div class="card"><span>x</span></div>"#, |root| {
            assert!(FieldSelector::parse(".card").find(root).is_none());
            assert!(FieldSelector::parse("div").find(root).is_none());
        });
    }

    #[test]
    fn malformed_alternatives_are_dropped() {
        assert!(FieldSelector::parse(".,:hover,[").is_empty());
        assert!(!FieldSelector::parse("h2,:hover").is_empty());
    }
}
