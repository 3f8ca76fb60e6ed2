//! Data extraction for recognized components.

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;
use serde_json::{Value, json};
use url::Url;

use super::{ComponentChild, ComponentData, has_descendant_class, repeated_children};
use crate::catalog::ModuleType;
use crate::dom;
use crate::model::{Attrs, number};

pub(crate) const ACCORDION_HEADERS: &[&str] =
    &["accordion-header", "faq-question", "collapse-header", "panel-heading"];
pub(crate) const ACCORDION_CONTENTS: &[&str] =
    &["accordion-content", "faq-answer", "collapse-content", "panel-body"];
pub(crate) const TAB_NAV_CLASSES: &[&str] = &["tab-nav", "tabs-nav", "nav-tabs", "tab-list"];
pub(crate) const TAB_PANEL_CLASSES: &[&str] = &["tab-content", "tab-panels", "tab-pane"];
pub(crate) const AUTHOR_CLASSES: &[&str] = &["author", "name", "cite", "attribution", "reviewer"];
pub(crate) const POSITION_CLASSES: &[&str] = &["position", "role", "job", "title", "designation"];

const SLIDE_CLASSES: &[&str] = &["slide", "swiper-slide", "carousel-item", "owl-item", "slick-slide"];
pub(crate) const OPEN_CLASSES: &[&str] = &["open", "active", "expanded", "show"];
const HEADER_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "button"];
const CONTENT_TAGS: &[&str] = &["div", "section", "p"];
const BUTTON_CLASSES: &[&str] = &["btn", "button", "cta", "action"];

const SOCIAL_NETWORKS: &[(&str, &[&str])] = &[
    ("facebook", &["facebook.com", "fb.com"]),
    ("twitter", &["twitter.com", "x.com"]),
    ("instagram", &["instagram.com"]),
    ("linkedin", &["linkedin.com"]),
    ("youtube", &["youtube.com"]),
    ("pinterest", &["pinterest.com"]),
    ("tiktok", &["tiktok.com"]),
    ("github", &["github.com"]),
    ("dribbble", &["dribbble.com"]),
    ("behance", &["behance.net"]),
];

static BACKGROUND_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"url\(\s*['"]?([^'")]+)['"]?\s*\)"#).expect("background url pattern")
});
static PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^\d]*)(\d+(?:[.,]\d+)?)(.*)$").expect("price pattern")
});
static PER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\s*(\w+)").expect("price period pattern"));
static GRID_REPEAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"grid-template-columns\s*:\s*repeat\(\s*(\d+)").expect("grid repeat pattern")
});

/// Extracted attributes and children for a recognized `kind`.
pub fn extract_component(element: ElementRef<'_>, kind: ModuleType) -> ComponentData {
    match kind {
        ModuleType::Slider => slider(element),
        ModuleType::Accordion => accordion(element),
        ModuleType::Tabs => tabs(element),
        ModuleType::Gallery => attrs_only(gallery(element)),
        ModuleType::Testimonial => attrs_only(testimonial(element)),
        ModuleType::TeamMember => attrs_only(team_member(element)),
        ModuleType::PricingTable => attrs_only(pricing_table(element)),
        ModuleType::SocialFollow => social_follow(element),
        ModuleType::ContactForm => contact_form(element),
        ModuleType::Countdown => attrs_only(countdown(element)),
        ModuleType::NumberCounter => attrs_only(number_counter(element)),
        ModuleType::Map => attrs_only(map(element)),
        ModuleType::Video => attrs_only(video(element)),
        _ => attrs_only(generic(element)),
    }
}

fn attrs_only(attrs: Attrs) -> ComponentData {
    ComponentData {
        attrs,
        children: Vec::new(),
    }
}

fn child(kind: ModuleType, attrs: Attrs) -> ComponentChild {
    ComponentChild { kind, attrs }
}

fn put_text(attrs: &mut Attrs, key: &str, value: impl Into<String>) {
    let value = value.into();
    if !value.is_empty() {
        attrs.insert(key.to_string(), Value::String(value));
    }
}

fn first_with_class<'a>(element: ElementRef<'a>, classes: &[&str]) -> Option<ElementRef<'a>> {
    dom::descendants(element).find(|e| classes.iter().any(|c| dom::has_class(*e, c)))
}

fn has_any_class(element: ElementRef<'_>, classes: &[&str]) -> bool {
    classes.iter().any(|c| dom::has_class(element, c))
}

fn data_attr<'a>(element: ElementRef<'a>, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|n| dom::non_empty_attr(element, n))
}

fn flag(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off")
}

fn first_image_src(element: ElementRef<'_>) -> Option<&str> {
    dom::find_descendant(element, &["img"]).and_then(|img| dom::non_empty_attr(img, "src"))
}

fn background_url(element: ElementRef<'_>) -> Option<String> {
    let style = dom::attr(element, "style")?;
    BACKGROUND_URL
        .captures(style)
        .map(|caps| caps[1].trim().to_string())
}

struct ButtonLink {
    text: String,
    url: String,
}

/// Non-submit buttons first, then anchors styled as buttons.
fn find_buttons(element: ElementRef<'_>) -> Vec<ButtonLink> {
    let buttons = dom::descendants(element)
        .filter(|e| dom::tag(*e) == "button")
        .filter(|b| !dom::attr(*b, "type").is_some_and(|t| t.eq_ignore_ascii_case("submit")))
        .map(|b| ButtonLink {
            text: dom::text_content(b),
            url: dom::attr(b, "data-url").unwrap_or_default().to_string(),
        });
    let anchors = dom::descendants(element)
        .filter(|e| dom::tag(*e) == "a" && has_any_class(*e, BUTTON_CLASSES))
        .map(|a| ButtonLink {
            text: dom::text_content(a),
            url: dom::attr(a, "href").unwrap_or_default().to_string(),
        });
    buttons.chain(anchors).collect()
}

fn put_first_button(attrs: &mut Attrs, element: ElementRef<'_>) {
    if let Some(button) = find_buttons(element).into_iter().next() {
        put_text(attrs, "button_text", button.text);
        put_text(attrs, "link_url", button.url);
    }
}

fn slider(element: ElementRef<'_>) -> ComponentData {
    let mut attrs = Attrs::new();
    attrs.insert("show_arrows".into(), Value::Bool(true));
    attrs.insert("show_dots".into(), Value::Bool(true));
    attrs.insert("auto".into(), Value::Bool(false));
    attrs.insert("loop".into(), Value::Bool(true));

    if let Some(v) = dom::attr(element, "data-autoplay") {
        attrs.insert("auto".into(), Value::Bool(flag(v)));
    }
    if let Some(v) = dom::attr(element, "data-arrows") {
        attrs.insert("show_arrows".into(), Value::Bool(flag(v)));
    }
    if let Some(v) = data_attr(element, &["data-dots", "data-pagination"]) {
        attrs.insert("show_dots".into(), Value::Bool(flag(v)));
    }
    if let Some(v) = data_attr(element, &["data-loop", "data-infinite"]) {
        attrs.insert("loop".into(), Value::Bool(flag(v)));
    }
    if let Some(speed) = data_attr(element, &["data-autoplay-speed", "data-speed"])
        .and_then(|v| v.trim().parse::<f64>().ok())
    {
        attrs.insert("auto_speed".into(), number(speed));
    }

    let children = repeated_children(element, SLIDE_CLASSES)
        .into_iter()
        .filter(|slide| has_any_class(*slide, SLIDE_CLASSES) || dom::tag(*slide) == "div")
        .map(|slide| {
            let mut item = Attrs::new();
            if let Some(heading) = dom::find_descendant(slide, &["h1", "h2", "h3", "h4"]) {
                put_text(&mut item, "heading", dom::text_content(heading));
            }
            if let Some(src) = first_image_src(slide) {
                put_text(&mut item, "image", src);
            }
            if let Some(url) = background_url(slide) {
                put_text(&mut item, "background_image", url);
            }
            if let Some(p) = dom::find_descendant(slide, &["p"]) {
                put_text(&mut item, "content", dom::inner_markup(p));
            }
            put_first_button(&mut item, slide);
            child(ModuleType::SliderItem, item)
        })
        .collect();

    ComponentData { attrs, children }
}

/// Header and content blocks among the direct children of `item`.
pub(crate) fn header_content_pair<'a>(
    item: ElementRef<'a>,
    header_classes: &[&str],
    content_classes: &[&str],
) -> Option<(ElementRef<'a>, ElementRef<'a>)> {
    let parts = dom::element_children(item);
    let header = parts.iter().copied().find(|p| {
        has_any_class(*p, header_classes) || HEADER_TAGS.contains(&dom::tag(*p).as_str())
    })?;
    let rest = || parts.iter().copied().filter(|p| p.id() != header.id());
    let content = rest()
        .find(|p| has_any_class(*p, content_classes))
        .or_else(|| rest().find(|p| CONTENT_TAGS.contains(&dom::tag(*p).as_str())))?;
    Some((header, content))
}

fn accordion(element: ElementRef<'_>) -> ComponentData {
    let mut attrs = Attrs::new();
    attrs.insert("toggle_icon".into(), json!("arrow"));
    attrs.insert("toggle_icon_position".into(), json!("right"));

    let children = dom::element_children(element)
        .into_iter()
        .filter_map(|item| {
            let (header, content) =
                header_content_pair(item, ACCORDION_HEADERS, ACCORDION_CONTENTS)?;
            let title = dom::text_content(header);
            if title.is_empty() {
                return None;
            }
            let mut attrs = Attrs::new();
            attrs.insert("title".into(), Value::String(title));
            put_text(&mut attrs, "content", dom::inner_markup(content));
            attrs.insert("open".into(), Value::Bool(has_any_class(item, OPEN_CLASSES)));
            Some(child(ModuleType::AccordionItem, attrs))
        })
        .collect();

    ComponentData { attrs, children }
}

fn tabs(element: ElementRef<'_>) -> ComponentData {
    let nav = first_with_class(element, TAB_NAV_CLASSES).or_else(|| {
        dom::element_children(element)
            .into_iter()
            .find(|c| dom::tag(*c) == "ul")
    });
    let titles: Vec<String> = nav
        .map(|nav| {
            let controls: Vec<String> = dom::descendants(nav)
                .filter(|e| matches!(dom::tag(*e).as_str(), "a" | "button"))
                .map(dom::text_content)
                .collect();
            if controls.is_empty() {
                dom::descendants(nav)
                    .filter(|e| dom::tag(*e) == "li")
                    .map(dom::text_content)
                    .collect()
            } else {
                controls
            }
        })
        .unwrap_or_default();

    // Wrappers like `.tab-content` that hold `.tab-pane`s are not panels.
    let panels: Vec<ElementRef<'_>> = dom::descendants(element)
        .filter(|e| has_any_class(*e, TAB_PANEL_CLASSES))
        .filter(|e| !has_descendant_class(*e, TAB_PANEL_CLASSES))
        .collect();

    let active = panels
        .iter()
        .position(|p| has_any_class(*p, &["active", "show", "visible"]))
        .unwrap_or(0);
    let mut attrs = Attrs::new();
    attrs.insert("active_tab_idx".into(), Value::from(active));

    let count = titles.len().max(panels.len());
    let children = (0..count)
        .map(|i| {
            let title = titles
                .get(i)
                .filter(|t| !t.is_empty())
                .cloned()
                .unwrap_or_else(|| format!("Tab {}", i + 1));
            let content = panels.get(i).map(|p| dom::inner_markup(*p)).unwrap_or_default();
            let mut item = Attrs::new();
            item.insert("title".into(), Value::String(title));
            item.insert("content".into(), Value::String(content));
            child(ModuleType::TabsItem, item)
        })
        .collect();

    ComponentData { attrs, children }
}

fn gallery(element: ElementRef<'_>) -> Attrs {
    let mut attrs = Attrs::new();
    let columns = dom::attr(element, "style")
        .and_then(|s| GRID_REPEAT.captures(s).map(|c| c[1].to_string()))
        .or_else(|| dom::non_empty_attr(element, "data-columns").map(str::to_string))
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(3);
    attrs.insert("columns".into(), Value::from(columns));

    let mut any_caption = false;
    let images: Vec<Value> = dom::descendants(element)
        .filter(|e| dom::tag(*e) == "img")
        .filter_map(|img| {
            let src = dom::non_empty_attr(img, "src")?;
            let mut entry = Attrs::new();
            entry.insert("src".into(), json!(src));
            entry.insert("alt".into(), json!(dom::attr(img, "alt").unwrap_or_default()));
            if let Some(title) = dom::non_empty_attr(img, "title") {
                entry.insert("title".into(), json!(title));
            }
            let caption = img
                .parent()
                .and_then(ElementRef::wrap)
                .filter(|p| dom::tag(*p) == "figure")
                .and_then(|figure| dom::find_descendant(figure, &["figcaption"]))
                .map(dom::text_content)
                .filter(|c| !c.is_empty());
            if let Some(caption) = caption {
                any_caption = true;
                entry.insert("caption".into(), Value::String(caption));
            }
            Some(Value::Object(entry))
        })
        .collect();
    attrs.insert("gallery_ids".into(), Value::Array(images));
    attrs.insert("show_title_and_caption".into(), Value::Bool(any_caption));
    attrs
}

fn testimonial(element: ElementRef<'_>) -> Attrs {
    let mut attrs = Attrs::new();
    let body = dom::find_descendant(element, &["blockquote"]).or_else(|| {
        first_with_class(element, &["content", "quote", "text", "review-text", "testimonial-content"])
    });
    if let Some(body) = body {
        put_text(&mut attrs, "content", dom::inner_markup(body));
    }
    let author = first_with_class(element, AUTHOR_CLASSES)
        .or_else(|| dom::find_descendant(element, &["cite"]));
    if let Some(author) = author {
        put_text(&mut attrs, "author", dom::text_content(author));
    }
    if let Some(src) = first_image_src(element) {
        put_text(&mut attrs, "portrait_url", src);
    }
    if let Some(job) = first_with_class(element, &["position", "job", "job-title", "role", "title"]) {
        put_text(&mut attrs, "job_title", dom::text_content(job));
    }
    if let Some(company) = first_with_class(element, &["company", "organization"]) {
        put_text(&mut attrs, "company", dom::text_content(company));
    }
    attrs
}

fn team_member(element: ElementRef<'_>) -> Attrs {
    let mut attrs = Attrs::new();
    let name = dom::find_descendant(element, &["h2", "h3", "h4", "h5"])
        .or_else(|| first_with_class(element, &["name", "member-name", "title"]));
    if let Some(name) = name {
        put_text(&mut attrs, "name", dom::text_content(name));
    }
    if let Some(position) = first_with_class(element, &["position", "role", "job", "designation"]) {
        put_text(&mut attrs, "position", dom::text_content(position));
    }
    if let Some(src) = first_image_src(element) {
        put_text(&mut attrs, "image_url", src);
    }
    if let Some(bio) = first_with_class(element, &["bio", "content", "description", "excerpt"]) {
        put_text(&mut attrs, "content", dom::inner_markup(bio));
    }
    for (network, url) in social_links(element) {
        put_text(&mut attrs, &format!("{network}_url"), url);
    }
    attrs
}

fn pricing_table(element: ElementRef<'_>) -> Attrs {
    let mut attrs = Attrs::new();
    attrs.insert("currency".into(), json!("$"));
    attrs.insert("per".into(), json!("month"));
    let mut featured = has_any_class(element, &["featured", "popular", "recommended", "highlighted"]);

    if let Some(title) = dom::find_descendant(element, &["h2", "h3", "h4"]) {
        put_text(&mut attrs, "title", dom::text_content(title));
    }
    if let Some(price) = first_with_class(element, &["price", "amount", "cost"]) {
        let text = dom::normalize_whitespace(&dom::text_content(price));
        if let Some(caps) = PRICE.captures(&text) {
            put_text(&mut attrs, "currency", caps[1].trim());
            put_text(&mut attrs, "price", &caps[2]);
            if let Some(per) = PER.captures(&caps[3]) {
                put_text(&mut attrs, "per", &per[1]);
            }
        }
    }
    if let Some(list) = dom::find_descendant(element, &["ul"]) {
        put_text(&mut attrs, "content", dom::outer_markup(list));
    }
    put_first_button(&mut attrs, element);
    if let Some(badge) = first_with_class(element, &["badge", "ribbon", "label", "tag"]) {
        put_text(&mut attrs, "featured_text", dom::text_content(badge));
        featured = true;
    }
    attrs.insert("featured".into(), Value::Bool(featured));
    attrs
}

/// First link per network, in order of first appearance.
fn social_links(element: ElementRef<'_>) -> Vec<(&'static str, String)> {
    let mut links: Vec<(&'static str, String)> = Vec::new();
    for a in dom::descendants(element).filter(|e| dom::tag(*e) == "a") {
        let href = dom::attr(a, "href").unwrap_or_default();
        let lower = href.to_ascii_lowercase();
        let network = SOCIAL_NETWORKS
            .iter()
            .find(|(_, hosts)| hosts.iter().any(|h| lower.contains(h)))
            .map(|(name, _)| *name);
        if let Some(network) = network {
            if !links.iter().any(|(n, _)| *n == network) {
                links.push((network, href.to_string()));
            }
        }
    }
    links
}

fn social_follow(element: ElementRef<'_>) -> ComponentData {
    let children = social_links(element)
        .into_iter()
        .map(|(network, url)| {
            let mut item = Attrs::new();
            item.insert("social_network".into(), json!(network));
            item.insert("url".into(), Value::String(url));
            child(ModuleType::SocialFollowItem, item)
        })
        .collect();
    ComponentData {
        attrs: Attrs::new(),
        children,
    }
}

fn map_input_type(input_type: &str) -> &'static str {
    match input_type {
        "email" => "email",
        "checkbox" => "checkbox",
        "radio" => "radio",
        _ => "input",
    }
}

fn field_title(form: ElementRef<'_>, id: Option<&str>) -> Option<String> {
    let id = id?;
    dom::descendants(form)
        .filter(|e| dom::tag(*e) == "label")
        .find(|label| dom::attr(*label, "for") == Some(id))
        .map(dom::text_content)
}

fn contact_form(element: ElementRef<'_>) -> ComponentData {
    let mut attrs = Attrs::new();
    let mut submit_text: Option<String> = None;
    let mut children = Vec::new();

    for control in dom::descendants(element) {
        let tag = dom::tag(control);
        let kind = match tag.as_str() {
            "input" => dom::attr(control, "type")
                .unwrap_or("text")
                .trim()
                .to_ascii_lowercase(),
            "textarea" => "textarea".to_string(),
            "select" => "select".to_string(),
            _ => continue,
        };
        if kind == "submit" {
            if let Some(value) = dom::non_empty_attr(control, "value") {
                submit_text.get_or_insert_with(|| value.trim().to_string());
            }
            continue;
        }
        if matches!(kind.as_str(), "button" | "hidden") {
            continue;
        }
        let mut field = Attrs::new();
        let field_type = match kind.as_str() {
            "textarea" | "select" => kind.as_str(),
            other => map_input_type(other),
        };
        field.insert("field_type".into(), json!(field_type));
        let name = dom::non_empty_attr(control, "name").or_else(|| dom::non_empty_attr(control, "id"));
        if let Some(name) = name {
            put_text(&mut field, "field_id", name);
        }
        if let Some(placeholder) = dom::non_empty_attr(control, "placeholder") {
            put_text(&mut field, "placeholder", placeholder);
        }
        if let Some(title) = field_title(element, dom::attr(control, "id")) {
            put_text(&mut field, "field_title", title);
        }
        field.insert(
            "required_mark".into(),
            Value::Bool(dom::attr(control, "required").is_some()),
        );
        children.push(child(ModuleType::ContactFormField, field));
    }

    let button_text = dom::descendants(element)
        .filter(|e| dom::tag(*e) == "button")
        .find(|b| {
            let kind = dom::attr(*b, "type").unwrap_or_default().trim();
            kind.is_empty() || kind.eq_ignore_ascii_case("submit")
        })
        .map(dom::text_content)
        .filter(|t| !t.is_empty());
    let text = button_text
        .or(submit_text)
        .unwrap_or_else(|| "Submit".to_string());
    attrs.insert("submit_button_text".into(), Value::String(text));

    ComponentData { attrs, children }
}

fn countdown(element: ElementRef<'_>) -> Attrs {
    let mut attrs = Attrs::new();
    if let Some(end) = data_attr(element, &["data-countdown", "data-date", "data-end", "data-timer"]) {
        put_text(&mut attrs, "end_date", end.trim());
    }
    for unit in ["show_days", "show_hours", "show_minutes", "show_seconds"] {
        attrs.insert(unit.into(), Value::Bool(true));
    }
    attrs
}

fn number_counter(element: ElementRef<'_>) -> Attrs {
    let mut attrs = Attrs::new();
    let raw = data_attr(element, &["data-counter", "data-count", "data-target", "data-number"])
        .map(str::to_string)
        .or_else(|| {
            first_with_class(element, &["number", "count", "value", "digit"]).map(dom::text_content)
        });
    if let Some(raw) = raw {
        if raw.contains('%') {
            attrs.insert("percent_sign".into(), Value::Bool(true));
        }
        let digits: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        match digits.parse::<f64>() {
            Ok(n) => {
                attrs.insert("number".into(), number(n));
            }
            Err(_) => put_text(&mut attrs, "number", digits),
        }
    }
    if let Some(label) = first_with_class(element, &["label", "title", "text"]) {
        put_text(&mut attrs, "title", dom::text_content(label));
    }
    attrs
}

fn map(element: ElementRef<'_>) -> Attrs {
    let mut address = dom::non_empty_attr(element, "data-address").map(str::to_string);
    let mut zoom = dom::non_empty_attr(element, "data-zoom").and_then(|z| z.trim().parse::<i64>().ok());
    let mut height = None;

    if let Some(iframe) = dom::find_descendant(element, &["iframe"]) {
        if let Some(url) = dom::attr(iframe, "src").and_then(|src| Url::parse(src).ok()) {
            for (key, value) in url.query_pairs() {
                match key.as_ref() {
                    "q" if address.is_none() => address = Some(value.into_owned()),
                    "zoom" if zoom.is_none() => zoom = value.trim().parse().ok(),
                    _ => {}
                }
            }
        }
        height = dom::attr(iframe, "height").and_then(|h| h.trim().trim_end_matches("px").parse::<i64>().ok());
    }

    let mut attrs = Attrs::new();
    if let Some(address) = address {
        put_text(&mut attrs, "address", address);
    }
    attrs.insert("zoom".into(), Value::from(zoom.unwrap_or(14)));
    attrs.insert("map_height".into(), Value::from(height.unwrap_or(400)));
    attrs
}

fn video(element: ElementRef<'_>) -> Attrs {
    let mut attrs = Attrs::new();
    let from_video = dom::find_descendant(element, &["video"]).and_then(|video| {
        dom::non_empty_attr(video, "src").or_else(|| {
            dom::find_descendant(video, &["source"]).and_then(|s| dom::non_empty_attr(s, "src"))
        })
    });
    let from_iframe = dom::find_descendant(element, &["iframe"]).and_then(|f| dom::non_empty_attr(f, "src"));
    if let Some(src) = from_iframe.or(from_video) {
        put_text(&mut attrs, "src", src);
    }
    attrs
}

fn generic(element: ElementRef<'_>) -> Attrs {
    let mut attrs = Attrs::new();
    if let Some(heading) = dom::find_descendant(element, &["h1", "h2", "h3", "h4", "h5", "h6"]) {
        put_text(&mut attrs, "title", dom::text_content(heading));
    }
    if let Some(p) = dom::find_descendant(element, &["p"]) {
        put_text(&mut attrs, "content", dom::inner_markup(p));
    }
    if let Some(src) = first_image_src(element) {
        put_text(&mut attrs, "image", src);
    }
    put_first_button(&mut attrs, element);
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn extract(html: &str, kind: ModuleType) -> ComponentData {
        let doc = Html::parse_fragment(html);
        let first = dom::element_children(doc.root_element())
            .into_iter()
            .next()
            .expect("fragment has an element");
        extract_component(first, kind)
    }

    #[test]
    fn slider_reads_options_and_slides() {
        let data = extract(
            r#"<div class="slider" data-autoplay="true" data-dots="false">
                <div class="slide" style="background-image: url('bg.jpg')"><h2>One</h2><p>First <b>slide</b></p><a class="btn" href="/go">Go</a></div>
                <div class="slide"><h3>Two</h3><img src="two.jpg"></div>
            </div>"#,
            ModuleType::Slider,
        );
        assert_eq!(data.attrs["auto"], json!(true));
        assert_eq!(data.attrs["show_dots"], json!(false));
        assert_eq!(data.attrs["show_arrows"], json!(true));
        assert_eq!(data.children.len(), 2);
        let first = &data.children[0].attrs;
        assert_eq!(first["heading"], json!("One"));
        assert_eq!(first["background_image"], json!("bg.jpg"));
        assert_eq!(first["content"], json!("First <b>slide</b>"));
        assert_eq!(first["button_text"], json!("Go"));
        assert_eq!(first["link_url"], json!("/go"));
        assert_eq!(data.children[1].attrs["image"], json!("two.jpg"));
    }

    #[test]
    fn accordion_items_need_a_title() {
        let data = extract(
            r#"<div class="accordion">
                <div class="item active"><h3>Q1</h3><div class="accordion-content"><p>A1</p></div></div>
                <div class="item"><button>Q2</button><p>A2</p></div>
                <div class="item"><h3> </h3><p>orphan</p></div>
            </div>"#,
            ModuleType::Accordion,
        );
        assert_eq!(data.children.len(), 2);
        assert_eq!(data.children[0].kind, ModuleType::AccordionItem);
        assert_eq!(data.children[0].attrs["title"], json!("Q1"));
        assert_eq!(data.children[0].attrs["content"], json!("<p>A1</p>"));
        assert_eq!(data.children[0].attrs["open"], json!(true));
        assert_eq!(data.children[1].attrs["content"], json!("A2"));
        assert_eq!(data.children[1].attrs["open"], json!(false));
    }

    #[test]
    fn tabs_pad_titles_and_skip_panel_wrappers() {
        let data = extract(
            r#"<div class="tabs">
                <ul class="tab-nav"><li><a>First</a></li></ul>
                <div class="tab-content">
                    <div class="tab-pane">one</div>
                    <div class="tab-pane active">two</div>
                </div>
            </div>"#,
            ModuleType::Tabs,
        );
        assert_eq!(data.attrs["active_tab_idx"], json!(1));
        let titles: Vec<_> = data.children.iter().map(|c| c.attrs["title"].clone()).collect();
        assert_eq!(titles, vec![json!("First"), json!("Tab 2")]);
        assert_eq!(data.children[1].attrs["content"], json!("two"));
    }

    #[test]
    fn gallery_counts_figure_images_once() {
        let data = extract(
            r#"<div class="gallery" style="grid-template-columns: repeat(4, 1fr)">
                <img src="a.jpg" alt="A">
                <figure><img src="b.jpg"><figcaption>Bee</figcaption></figure>
            </div>"#,
            ModuleType::Gallery,
        );
        assert_eq!(data.attrs["columns"], json!(4));
        assert_eq!(data.attrs["show_title_and_caption"], json!(true));
        let images = data.attrs["gallery_ids"].as_array().expect("array");
        assert_eq!(images.len(), 2);
        assert_eq!(images[1]["caption"], json!("Bee"));
    }

    #[test]
    fn pricing_table_parses_price() {
        let data = extract(
            r#"<div class="pricing-card">
                <span class="badge">Best value</span>
                <h3>Pro</h3>
                <div class="price">€29 / year</div>
                <ul><li>All features</li></ul>
                <a class="btn" href="/buy">Buy</a>
            </div>"#,
            ModuleType::PricingTable,
        );
        let attrs = &data.attrs;
        assert_eq!(attrs["title"], json!("Pro"));
        assert_eq!(attrs["currency"], json!("€"));
        assert_eq!(attrs["price"], json!("29"));
        assert_eq!(attrs["per"], json!("year"));
        assert_eq!(attrs["featured"], json!(true));
        assert_eq!(attrs["featured_text"], json!("Best value"));
        assert_eq!(attrs["link_url"], json!("/buy"));
        assert!(attrs["content"].as_str().is_some_and(|c| c.starts_with("<ul>")));
    }

    #[test]
    fn social_links_are_unique_per_network() {
        let data = extract(
            r#"<div class="social">
                <a href="https://x.com/acme">X</a>
                <a href="https://www.facebook.com/acme">FB</a>
                <a href="https://twitter.com/other">T</a>
            </div>"#,
            ModuleType::SocialFollow,
        );
        let networks: Vec<_> = data.children.iter().map(|c| c.attrs["social_network"].clone()).collect();
        assert_eq!(networks, vec![json!("twitter"), json!("facebook")]);
        assert_eq!(data.children[0].attrs["url"], json!("https://x.com/acme"));
    }

    #[test]
    fn contact_form_fields_and_submit_text() {
        let data = extract(
            r#"<form class="contact-form">
                <label for="em">Email</label>
                <input id="em" name="email" type="email" required>
                <input type="hidden" name="token">
                <textarea name="message" placeholder="Say hi"></textarea>
                <input type="submit" value="Send it">
            </form>"#,
            ModuleType::ContactForm,
        );
        assert_eq!(data.attrs["submit_button_text"], json!("Send it"));
        assert_eq!(data.children.len(), 2);
        let email = &data.children[0].attrs;
        assert_eq!(email["field_type"], json!("email"));
        assert_eq!(email["field_id"], json!("email"));
        assert_eq!(email["field_title"], json!("Email"));
        assert_eq!(email["required_mark"], json!(true));
        assert_eq!(data.children[1].attrs["field_type"], json!("textarea"));
        assert_eq!(data.children[1].attrs["placeholder"], json!("Say hi"));
    }

    #[test]
    fn counter_and_map_values() {
        let counter = extract(
            r#"<div class="counter"><span class="number">95%</span><span class="label">Happy</span></div>"#,
            ModuleType::NumberCounter,
        );
        assert_eq!(counter.attrs["number"], json!(95));
        assert_eq!(counter.attrs["percent_sign"], json!(true));
        assert_eq!(counter.attrs["title"], json!("Happy"));

        let map = extract(
            r#"<div class="map"><iframe height="300" src="https://maps.google.com/maps?q=Main%20St%201&zoom=9"></iframe></div>"#,
            ModuleType::Map,
        );
        assert_eq!(map.attrs["address"], json!("Main St 1"));
        assert_eq!(map.attrs["zoom"], json!(9));
        assert_eq!(map.attrs["map_height"], json!(300));
    }

    #[test]
    fn generic_extraction_for_cards() {
        let data = extract(
            r#"<div class="cta"><h2>Join</h2><p>Now</p><button data-url="/join">Sign up</button></div>"#,
            ModuleType::Cta,
        );
        assert_eq!(data.attrs["title"], json!("Join"));
        assert_eq!(data.attrs["content"], json!("Now"));
        assert_eq!(data.attrs["button_text"], json!("Sign up"));
        assert_eq!(data.attrs["link_url"], json!("/join"));
    }
}
