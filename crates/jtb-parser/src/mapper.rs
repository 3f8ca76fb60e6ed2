//! Maps one element onto a catalog module type and extracts its fields.

use scraper::ElementRef;
use serde_json::Value;
use tracing::info;

use crate::attributes::{leading_float, leading_int};
use crate::catalog::{self, Cast, Detector, FieldRule, FieldSource, ModuleType};
use crate::diagnostics::diagnostics_enabled;
use crate::dom::{self, ATTR_PREFIX};
use crate::model::{Attrs, number};
use crate::selector::{FieldSelector, Hit};
use crate::style::{self, color};

const HEADING_LEVELS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];
const BUTTON_CLASSES: &[&str] = &["btn", "button", "cta", "cta-button", "action-btn"];
const VIDEO_HOSTS: &[&str] = &[
    "youtube.com",
    "youtu.be",
    "vimeo.com",
    "dailymotion.com",
    "wistia.com",
    "vidyard.com",
];
const MAP_HOSTS: &[&str] = &["google.com/maps", "maps.google.com"];
const USERNAME_FIELDS: &[&str] = &["username", "user", "email", "login"];
const SEARCH_FIELDS: &[&str] = &["q", "s", "search"];

/// A resolved module type together with its extracted attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedModule {
    pub kind: ModuleType,
    pub attrs: Attrs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRole {
    Search,
    Login,
    Signup,
    Contact,
}

impl FormRole {
    pub fn as_str(self) -> &'static str {
        match self {
            FormRole::Search => "search",
            FormRole::Login => "login",
            FormRole::Signup => "signup",
            FormRole::Contact => "contact",
        }
    }

    pub fn module_type(self) -> ModuleType {
        match self {
            FormRole::Search => ModuleType::Search,
            FormRole::Login => ModuleType::Login,
            FormRole::Signup => ModuleType::Signup,
            FormRole::Contact => ModuleType::ContactForm,
        }
    }
}

/// Explicit marker first, then heuristic detection.
pub fn map_element(element: ElementRef<'_>) -> Option<MappedModule> {
    let kind = explicit_type(element).or_else(|| detect_module_type(element))?;
    Some(MappedModule {
        kind,
        attrs: extract_attributes(element, kind),
    })
}

/// Known type named by `data-jtb-module`.
pub fn explicit_type(element: ElementRef<'_>) -> Option<ModuleType> {
    dom::module_marker(element).and_then(|m| ModuleType::from_slug(&m.to_ascii_lowercase()))
}

pub fn detect_module_type(element: ElementRef<'_>) -> Option<ModuleType> {
    let tag = dom::tag(element);
    let detected = by_tag(&tag)
        .or_else(|| by_embed(element, &tag))
        .or_else(|| by_class(element))
        .or_else(|| (tag == "form").then(|| detect_form_role(element).module_type()))
        .or_else(|| {
            (matches!(tag.as_str(), "a" | "button") && looks_like_button(element))
                .then_some(ModuleType::Button)
        })
        .or_else(|| leaf_fallback(element, &tag));
    if diagnostics_enabled("mapper") {
        let kind = detected.map(ModuleType::as_str).unwrap_or("none");
        info!(tag = %tag, kind = %kind, "diagnostics: mapper detection");
    }
    detected
}

fn by_tag(tag: &str) -> Option<ModuleType> {
    match tag {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(ModuleType::Heading),
        "hr" => Some(ModuleType::Divider),
        "pre" => Some(ModuleType::Code),
        "audio" => Some(ModuleType::Audio),
        "video" => Some(ModuleType::Video),
        _ => None,
    }
}

fn by_embed(element: ElementRef<'_>, tag: &str) -> Option<ModuleType> {
    if tag != "iframe" {
        return None;
    }
    let src = dom::attr(element, "src").unwrap_or_default();
    if is_video_embed(src) {
        Some(ModuleType::Video)
    } else if is_map_embed(src) {
        Some(ModuleType::Map)
    } else {
        None
    }
}

/// First catalog entry, in declaration order, sharing a class with the
/// element.
fn by_class(element: ElementRef<'_>) -> Option<ModuleType> {
    let classes = dom::classes(element);
    if classes.is_empty() {
        return None;
    }
    catalog::DEFINITIONS
        .iter()
        .find(|def| def.matches_class(&classes))
        .map(|def| def.kind)
}

fn leaf_fallback(element: ElementRef<'_>, tag: &str) -> Option<ModuleType> {
    match tag {
        "img" => Some(ModuleType::Image),
        "figure" if dom::find_descendant(element, &["img"]).is_some() => Some(ModuleType::Image),
        "p" | "blockquote" | "ul" | "ol" => Some(ModuleType::Text),
        _ => None,
    }
}

pub fn is_video_embed(url: &str) -> bool {
    let url = url.to_ascii_lowercase();
    VIDEO_HOSTS.iter().any(|host| url.contains(host))
}

pub fn is_map_embed(url: &str) -> bool {
    let url = url.to_ascii_lowercase();
    MAP_HOSTS.iter().any(|host| url.contains(host))
}

/// Search, then login, then signup; any other form is a contact form.
pub fn detect_form_role(element: ElementRef<'_>) -> FormRole {
    if is_search_form(element) {
        FormRole::Search
    } else if is_login_form(element) {
        FormRole::Login
    } else if is_signup_form(element) {
        FormRole::Signup
    } else {
        FormRole::Contact
    }
}

fn inputs(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    dom::descendants(element).filter(|e| e.value().name().eq_ignore_ascii_case("input"))
}

fn input_type(input: ElementRef<'_>) -> String {
    dom::attr(input, "type").unwrap_or("text").trim().to_ascii_lowercase()
}

fn input_name(input: ElementRef<'_>) -> String {
    dom::attr(input, "name").unwrap_or_default().trim().to_ascii_lowercase()
}

fn is_search_form(element: ElementRef<'_>) -> bool {
    let by_input = inputs(element).any(|input| {
        input_type(input) == "search" || SEARCH_FIELDS.contains(&input_name(input).as_str())
    });
    by_input
        || dom::has_class(element, "search-form")
        || dom::has_class(element, "search")
        || dom::attr(element, "role").is_some_and(|r| r.eq_ignore_ascii_case("search"))
}

fn is_login_form(element: ElementRef<'_>) -> bool {
    if ["login-form", "signin-form", "login"]
        .iter()
        .any(|c| dom::has_class(element, c))
    {
        return true;
    }
    let has_password = inputs(element).any(|i| input_type(i) == "password");
    let has_username = inputs(element).any(|i| USERNAME_FIELDS.contains(&input_name(i).as_str()));
    has_password && has_username && !is_signup_form(element)
}

fn is_signup_form(element: ElementRef<'_>) -> bool {
    inputs(element).filter(|i| input_type(*i) == "password").count() >= 2
        || ["signup-form", "register-form", "registration"]
            .iter()
            .any(|c| dom::has_class(element, c))
}

/// Button classes, a `<button>` tag, or inline-block chip styling.
pub fn looks_like_button(element: ElementRef<'_>) -> bool {
    if BUTTON_CLASSES.iter().any(|c| dom::has_class(element, c)) {
        return true;
    }
    if element.value().name().eq_ignore_ascii_case("button") {
        return true;
    }
    let styles = style::extract(element);
    let inline = styles
        .get("display")
        .is_some_and(|d| d.to_ascii_lowercase().contains("inline"));
    inline
        && styles
            .iter()
            .any(|(name, _)| name.starts_with("padding") || name.starts_with("border-radius"))
}

/// Explicit override, own tag, first heading descendant, inline font size,
/// then `h2`.
pub fn detect_heading_level(element: ElementRef<'_>) -> &'static str {
    if let Some(level) = dom::explicit_attr(element, "level")
        .and_then(|l| HEADING_LEVELS.iter().find(|h| h.eq_ignore_ascii_case(l.trim())).copied())
    {
        return level;
    }
    let tag = dom::tag(element);
    if let Some(level) = HEADING_LEVELS.iter().find(|h| **h == tag).copied() {
        return level;
    }
    if let Some(level) = dom::descendants(element).find_map(|el| {
        let tag = dom::tag(el);
        HEADING_LEVELS.iter().find(|h| **h == tag).copied()
    }) {
        return level;
    }
    match style::extract(element).get("font-size") {
        Some(size) => match style::to_pixels(size, style::DEFAULT_BASE_FONT_SIZE) {
            px if px >= 48 => "h1",
            px if px >= 36 => "h2",
            px if px >= 28 => "h3",
            px if px >= 22 => "h4",
            px if px >= 18 => "h5",
            _ => "h6",
        },
        None => "h2",
    }
}

/// Control type of a form field: `textarea`, `select`, or an input `type`.
pub fn detect_input_type(element: ElementRef<'_>) -> Option<String> {
    let control = match dom::tag(element).as_str() {
        "input" | "textarea" | "select" => element,
        _ => dom::find_descendant(element, &["input", "textarea", "select"])?,
    };
    Some(match dom::tag(control).as_str() {
        "input" => input_type(control),
        other => other.to_string(),
    })
}

/// Catalog fields, then `data-jtb-attr-*` overrides, which always win.
pub fn extract_attributes(element: ElementRef<'_>, kind: ModuleType) -> Attrs {
    let mut attrs = Attrs::new();
    if let Some(def) = catalog::definition(kind) {
        for rule in def.fields {
            if let Some(value) = extract_field(element, rule) {
                attrs.insert(rule.name.to_string(), value);
            }
        }
    }
    attrs.extend(explicit_overrides(element));
    attrs
}

/// Every `data-jtb-attr-*` attribute, keyed with `-` turned into `_`.
pub fn explicit_overrides(element: ElementRef<'_>) -> Attrs {
    element
        .value()
        .attrs()
        .filter_map(|(name, value)| {
            let key = name.strip_prefix(ATTR_PREFIX)?;
            (!key.is_empty()).then(|| (key.replace('-', "_"), parse_attribute_value(value)))
        })
        .collect()
}

/// JSON first, then a number, then the raw string.
pub fn parse_attribute_value(raw: &str) -> Value {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return value;
    }
    let trimmed = raw.trim();
    if !trimmed.contains('.') {
        if let Ok(n) = trimmed.parse::<i64>() {
            return Value::from(n);
        }
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => number(n),
        _ => Value::from(raw),
    }
}

pub fn extract_field(element: ElementRef<'_>, rule: &FieldRule) -> Option<Value> {
    rule.sources
        .iter()
        .find_map(|source| read_source(element, source, rule.cast))
        .or_else(|| rule.default.map(|d| d.to_value()))
}

fn read_source(element: ElementRef<'_>, source: &FieldSource, cast: Cast) -> Option<Value> {
    match *source {
        FieldSource::Attribute(name) => {
            let raw = dom::attr(element, name)?;
            cast_attribute(name, raw, cast)
        }
        FieldSource::Selector(query) => read_selector(element, query, cast, false),
        FieldSource::MarkupSelector(query) => read_selector(element, query, cast, true),
        FieldSource::TextContent => cast_value(&dom::text_content(element), cast),
        FieldSource::InnerMarkup => Some(Value::from(dom::inner_markup(element))),
        FieldSource::ClassPresence(class) => dom::has_class(element, class).then_some(Value::Bool(true)),
        FieldSource::ClassPrefix(prefix) => dom::classes(element).into_iter().find_map(|c| {
            let rest = c.strip_prefix(prefix)?;
            (!rest.is_empty()).then(|| Value::from(rest))
        }),
        FieldSource::Specialized(Detector::HeadingLevel) => {
            Some(Value::from(detect_heading_level(element)))
        }
        FieldSource::Specialized(Detector::InputType) => {
            detect_input_type(element).map(Value::from)
        }
        FieldSource::Specialized(Detector::FormRole) => {
            Some(Value::from(detect_form_role(element).as_str()))
        }
    }
}

/// HTML boolean attributes (`required`, `required="required"`) count as set.
fn cast_attribute(name: &str, raw: &str, cast: Cast) -> Option<Value> {
    let bare_flag = !name.starts_with(ATTR_PREFIX)
        && (raw.trim().is_empty() || raw.trim().eq_ignore_ascii_case(name));
    if cast == Cast::Bool && bare_flag {
        return Some(Value::Bool(true));
    }
    cast_value(raw, cast)
}

fn read_selector(element: ElementRef<'_>, query: &str, cast: Cast, markup: bool) -> Option<Value> {
    let selector = FieldSelector::parse(query);
    let hit_text = |hit: Hit<'_>| match hit {
        Hit::Attribute(value) => value.to_string(),
        Hit::Element(found) if markup => dom::inner_markup(found),
        Hit::Element(found) => dom::text_content(found),
    };
    if cast == Cast::Array {
        let items: Vec<Value> = selector
            .find_all(element)
            .into_iter()
            .map(|hit| Value::from(hit_text(hit)))
            .collect();
        return (!items.is_empty()).then_some(Value::Array(items));
    }
    match selector.find(element)? {
        Hit::Attribute(value) if cast == Cast::Bool => cast_attribute("", value, cast),
        hit => cast_value(&hit_text(hit), cast),
    }
}

/// Casts a raw string to the field type. Invalid colors are dropped; every
/// other cast degrades to its zero value.
pub fn cast_value(raw: &str, cast: Cast) -> Option<Value> {
    let trimmed = raw.trim();
    Some(match cast {
        Cast::Text => Value::from(raw),
        Cast::Bool => Value::Bool(matches!(
            trimmed.to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )),
        Cast::Int => Value::from(leading_int(trimmed)),
        Cast::Float => number(leading_float(trimmed)),
        Cast::Array => match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::Array(items)) => Value::Array(items),
            _ => Value::Array(vec![Value::from(raw)]),
        },
        Cast::Color => {
            if !color::is_valid_color(trimmed) {
                return None;
            }
            Value::from(trimmed)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;
    use serde_json::json;

    fn with_first<R>(html: &str, f: impl FnOnce(ElementRef<'_>) -> R) -> R {
        let doc = Html::parse_fragment(html);
        let first = dom::element_children(doc.root_element())
            .into_iter()
            .next()
            .expect("fragment has an element");
        f(first)
    }

    fn mapped(html: &str) -> Option<MappedModule> {
        with_first(html, map_element)
    }

    #[test]
    fn detection_order() {
        let kind = |html: &str| mapped(html).map(|m| m.kind);
        assert_eq!(kind("<h3 class='card'>Hi</h3>"), Some(ModuleType::Heading));
        assert_eq!(kind("<hr>"), Some(ModuleType::Divider));
        assert_eq!(
            kind(r#"<iframe src="https://www.youtube.com/embed/x"></iframe>"#),
            Some(ModuleType::Video)
        );
        assert_eq!(
            kind(r#"<iframe src="https://maps.google.com/?q=x"></iframe>"#),
            Some(ModuleType::Map)
        );
        assert_eq!(kind(r#"<div class="pricing-card">x</div>"#), Some(ModuleType::PricingTable));
        assert_eq!(kind(r#"<a href="/x" class="btn">Go</a>"#), Some(ModuleType::Button));
        assert_eq!(kind(r#"<a href="/x">plain</a>"#), None);
        assert_eq!(kind(r#"<figure><img src="a.png"></figure>"#), Some(ModuleType::Image));
        assert_eq!(kind("<blockquote>q</blockquote>"), Some(ModuleType::Text));
        assert_eq!(kind("<span>loose</span>"), None);
    }

    #[test]
    fn explicit_marker_wins_over_detection() {
        let m = mapped(r#"<h2 data-jtb-module="post_title" data-jtb-attr-title="Hello">x</h2>"#)
            .unwrap();
        assert_eq!(m.kind, ModuleType::PostTitle);
        assert_eq!(m.attrs.get("title"), Some(&json!("Hello")));

        let unknown = mapped(r#"<h2 data-jtb-module="nope">x</h2>"#).unwrap();
        assert_eq!(unknown.kind, ModuleType::Heading);
    }

    #[test]
    fn class_scan_follows_catalog_order() {
        // `card` (blurb) is declared before `cta`.
        let m = mapped(r#"<div class="cta card"><h3>T</h3></div>"#).unwrap();
        assert_eq!(m.kind, ModuleType::Blurb);
    }

    #[test]
    fn form_roles() {
        let role = |html: &str| with_first(html, detect_form_role);
        assert_eq!(role(r#"<form><input type="search" name="q"></form>"#), FormRole::Search);
        assert_eq!(
            role(r#"<form><input name="username"><input type="password" name="pw"></form>"#),
            FormRole::Login
        );
        assert_eq!(
            role(r#"<form><input name="email"><input type="password"><input type="password"></form>"#),
            FormRole::Signup
        );
        assert_eq!(
            role(r#"<form><input name="email"><textarea></textarea></form>"#),
            FormRole::Contact
        );
        let m = mapped(r#"<form><input name="email"><button type="submit">Send</button></form>"#)
            .unwrap();
        assert_eq!(m.kind, ModuleType::ContactForm);
        assert_eq!(m.attrs.get("submit_button_text"), Some(&json!("Send")));
        assert_eq!(m.attrs.get("form_role"), Some(&json!("contact")));
    }

    #[test]
    fn heading_levels() {
        let level = |html: &str| with_first(html, detect_heading_level);
        assert_eq!(level(r#"<h4 data-jtb-attr-level="h1">x</h4>"#), "h1");
        assert_eq!(level("<h4>x</h4>"), "h4");
        assert_eq!(level("<div><p>a</p><h5>b</h5><h2>c</h2></div>"), "h5");
        assert_eq!(level(r#"<div style="font-size: 40px">x</div>"#), "h2");
        assert_eq!(level(r#"<div style="font-size: 3rem">x</div>"#), "h1");
        assert_eq!(level(r#"<div style="font-size: 12px">x</div>"#), "h6");
        assert_eq!(level("<div>x</div>"), "h2");
    }

    #[test]
    fn field_extraction_and_overrides() {
        let m = mapped(
            r#"<div class="pricing-table featured" data-jtb-attr-currency="€" data-jtb-attr-columns="3">
                <h3>Pro</h3><span class="price">49</span><ul><li>A</li></ul>
                <a class="btn" href="/buy">Buy</a>
            </div>"#,
        )
        .unwrap();
        assert_eq!(m.kind, ModuleType::PricingTable);
        assert_eq!(m.attrs.get("title"), Some(&json!("Pro")));
        assert_eq!(m.attrs.get("price"), Some(&json!("49")));
        assert_eq!(m.attrs.get("content"), Some(&json!("<li>A</li>")));
        assert_eq!(m.attrs.get("button_text"), Some(&json!("Buy")));
        assert_eq!(m.attrs.get("link_url"), Some(&json!("/buy")));
        assert_eq!(m.attrs.get("featured"), Some(&json!(true)));
        assert_eq!(m.attrs.get("currency"), Some(&json!("€")));
        assert_eq!(m.attrs.get("columns"), Some(&json!(3)));
        assert!(m.attrs.get("subtitle").is_none());
    }

    #[test]
    fn defaults_and_specialized_sources() {
        let divider = mapped("<hr>").unwrap();
        assert_eq!(divider.attrs.get("show_divider"), Some(&json!(true)));

        let field = with_first(
            r#"<div class="form-group"><label>Message</label><textarea name="msg" required></textarea></div>"#,
            |el| extract_attributes(el, ModuleType::ContactFormField),
        );
        assert_eq!(field.get("field_type"), Some(&json!("textarea")));
        assert_eq!(field.get("field_id"), Some(&json!("msg")));
        assert_eq!(field.get("field_title"), Some(&json!("Message")));
        assert_eq!(field.get("required_mark"), Some(&json!(true)));

        let icon = mapped(r#"<i class="icon icon-star"></i>"#).unwrap();
        assert_eq!(icon.attrs.get("font_icon"), Some(&json!("star")));

        let gallery = mapped(r#"<div class="gallery"><img src="a.jpg"><img src="b.jpg"></div>"#)
            .unwrap();
        assert_eq!(gallery.attrs.get("gallery_ids"), Some(&json!(["a.jpg", "b.jpg"])));
    }

    #[test]
    fn casting_rules() {
        assert_eq!(cast_value("Yes", Cast::Bool), Some(json!(true)));
        assert_eq!(cast_value("nope", Cast::Bool), Some(json!(false)));
        assert_eq!(cast_value("12px", Cast::Int), Some(json!(12)));
        assert_eq!(cast_value("abc", Cast::Int), Some(json!(0)));
        assert_eq!(cast_value("1.25", Cast::Float), Some(json!(1.25)));
        assert_eq!(cast_value("[1,2]", Cast::Array), Some(json!([1, 2])));
        assert_eq!(cast_value("solo", Cast::Array), Some(json!(["solo"])));
        assert_eq!(cast_value("#ff0000", Cast::Color), Some(json!("#ff0000")));
        assert_eq!(cast_value("rgba(0,0,0,.5)", Cast::Color), Some(json!("rgba(0,0,0,.5)")));
        assert_eq!(cast_value("not a colour", Cast::Color), None);
    }

    #[test]
    fn attribute_values_parse_json_then_numbers() {
        assert_eq!(parse_attribute_value("true"), json!(true));
        assert_eq!(parse_attribute_value("42"), json!(42));
        assert_eq!(parse_attribute_value("1.5"), json!(1.5));
        assert_eq!(parse_attribute_value(r#"{"a":1}"#), json!({"a": 1}));
        assert_eq!(parse_attribute_value("+7"), json!(7));
        assert_eq!(parse_attribute_value("hello"), json!("hello"));
    }
}
