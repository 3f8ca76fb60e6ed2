//! Weighted structural recognition of composite widgets.
//!
//! Each pattern yields a raw score from tag, class, attribute, children and
//! structure signals. The weighted score is `raw * weight`; the best pattern
//! wins and equal scores keep the earlier pattern. Confidence is the weighted
//! score capped at 100.

mod extract;

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;
use tracing::info;

use crate::catalog::ModuleType;
use crate::diagnostics::diagnostics_enabled;
use crate::dom;
use crate::model::Attrs;

pub use extract::extract_component;
pub(crate) use extract::{
    ACCORDION_CONTENTS, ACCORDION_HEADERS, OPEN_CLASSES, TAB_PANEL_CLASSES, header_content_pair,
};

const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];
const CARD_CLASSES: &[&str] = &["post", "article", "card", "item", "project", "entry"];
const ICON_CLASSES: &[&str] = &["icon", "fa", "feather", "material-icons"];

static PRICE_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\s*\d+|\d+\s*\$").expect("price text pattern"));
static LARGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{2,}\b").expect("large number pattern"));

/// How a pattern inspects the element's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildrenRule {
    /// Direct children carrying one of the classes, or block-level wrappers.
    Repeated(&'static [&'static str]),
    /// Children pairing a header with a content block.
    HeaderContentPairs {
        header: &'static [&'static str],
        content: &'static [&'static str],
    },
    /// At least `min` images anywhere below.
    Images { min: usize },
    /// At least two card-like children.
    Cards,
}

/// Presence checks that add to the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    IconOrImage,
    Title(&'static [&'static str]),
    Description,
    Button,
    Quote(&'static [&'static str]),
    Author(&'static [&'static str]),
    Price(&'static [&'static str]),
    Features(&'static [&'static str]),
    Position(&'static [&'static str]),
    SocialLinks(&'static [&'static str]),
    VideoElement(&'static [&'static str]),
    Iframe(&'static [&'static str]),
    TextInputs,
    Submit,
    TimeUnits(&'static [&'static str]),
    Number,
    Label,
    LargeHeading,
    Background,
    NavAndPanels {
        nav: &'static [&'static str],
        panels: &'static [&'static str],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub kind: ModuleType,
    pub weight: u32,
    /// Required tag; any other tag vetoes the pattern.
    pub tag: Option<&'static str>,
    pub classes: &'static [&'static str],
    /// `name` for presence, `name=value` for equality.
    pub attributes: &'static [&'static str],
    pub children: Option<ChildrenRule>,
    /// Minimum children for the children rule; unmet vetoes the pattern.
    pub required_children: Option<usize>,
    pub checks: &'static [Check],
}

impl Pattern {
    const EMPTY: Pattern = Pattern {
        kind: ModuleType::Text,
        weight: 50,
        tag: None,
        classes: &[],
        attributes: &[],
        children: None,
        required_children: None,
        checks: &[],
    };
}

/// Declaration order is the tie-break order.
pub static PATTERNS: &[Pattern] = &[
    Pattern {
        kind: ModuleType::Slider,
        weight: 100,
        classes: &["slider", "carousel", "slideshow", "swiper", "slick", "owl-carousel", "splide"],
        attributes: &["data-slick", "data-swiper", "data-owl", "data-slide", "data-carousel"],
        children: Some(ChildrenRule::Repeated(&[
            "slide",
            "swiper-slide",
            "carousel-item",
            "owl-item",
            "slick-slide",
        ])),
        required_children: Some(2),
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::Accordion,
        weight: 90,
        classes: &["accordion", "faq", "collapsible", "expandable", "collapse-container"],
        attributes: &["data-accordion", "data-collapse", "role=tablist"],
        children: Some(ChildrenRule::HeaderContentPairs {
            header: extract::ACCORDION_HEADERS,
            content: extract::ACCORDION_CONTENTS,
        }),
        required_children: Some(1),
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::Tabs,
        weight: 90,
        classes: &["tabs", "tab-container", "tabbed", "nav-tabs", "tab-group"],
        attributes: &["data-tabs", "role=tablist"],
        checks: &[Check::NavAndPanels {
            nav: extract::TAB_NAV_CLASSES,
            panels: extract::TAB_PANEL_CLASSES,
        }],
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::Gallery,
        weight: 85,
        classes: &[
            "gallery",
            "image-gallery",
            "photo-gallery",
            "grid-gallery",
            "lightbox-gallery",
            "masonry",
        ],
        attributes: &["data-gallery", "data-lightbox", "data-fancybox"],
        children: Some(ChildrenRule::Images { min: 2 }),
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::Testimonial,
        weight: 80,
        classes: &[
            "testimonial",
            "review",
            "quote",
            "customer-review",
            "client-review",
            "feedback",
        ],
        checks: &[
            Check::Quote(&["blockquote", "quote", "content", "text", "review-text"]),
            Check::Author(extract::AUTHOR_CLASSES),
        ],
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::TeamMember,
        weight: 80,
        classes: &["team-member", "member", "staff", "person", "profile", "team-card", "employee"],
        checks: &[
            Check::IconOrImage,
            Check::Title(&["member-name"]),
            Check::Position(extract::POSITION_CLASSES),
        ],
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::PricingTable,
        weight: 85,
        classes: &["pricing", "pricing-table", "pricing-card", "price-box", "plan", "pricing-plan"],
        checks: &[
            Check::Button,
            Check::Price(&["price", "amount", "cost", "value"]),
            Check::Features(&["features", "benefits", "ul", "list"]),
        ],
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::Blurb,
        weight: 70,
        classes: &["blurb", "feature", "feature-box", "info-box", "card", "service", "benefit"],
        checks: &[Check::IconOrImage, Check::Title(&[]), Check::Description],
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::Cta,
        weight: 75,
        classes: &["cta", "call-to-action", "cta-section", "cta-box", "action-box", "promo"],
        checks: &[Check::Title(&[]), Check::Button],
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::FullwidthHeader,
        weight: 95,
        classes: &[
            "hero",
            "hero-section",
            "banner",
            "jumbotron",
            "masthead",
            "fullwidth-header",
            "page-header",
        ],
        checks: &[Check::LargeHeading, Check::Background],
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::SocialFollow,
        weight: 85,
        classes: &["social", "social-icons", "social-links", "social-follow", "social-media"],
        checks: &[Check::SocialLinks(&[
            "facebook",
            "twitter",
            "instagram",
            "linkedin",
            "youtube",
            "pinterest",
            "tiktok",
        ])],
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::Countdown,
        weight: 90,
        classes: &["countdown", "timer", "count-down", "countdown-timer", "clock"],
        attributes: &["data-countdown", "data-timer", "data-end", "data-date"],
        checks: &[Check::TimeUnits(&[
            "days", "hours", "minutes", "seconds", "day", "hour", "minute", "second",
        ])],
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::NumberCounter,
        weight: 80,
        classes: &["counter", "stat", "statistic", "number-counter", "count-up", "fact"],
        attributes: &["data-counter", "data-count", "data-target"],
        checks: &[Check::Number, Check::Label],
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::Map,
        weight: 95,
        classes: &["map", "google-map", "location-map", "embed-map"],
        checks: &[Check::Iframe(&["google.com/maps", "maps.google.com", "openstreetmap"])],
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::Video,
        weight: 95,
        classes: &["video", "video-player", "video-embed", "embed-responsive", "video-container"],
        checks: &[Check::VideoElement(&[
            "youtube.com",
            "youtu.be",
            "vimeo.com",
            "wistia.com",
            "dailymotion",
        ])],
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::Blog,
        weight: 75,
        classes: &["blog", "posts", "post-grid", "articles", "news", "blog-posts", "post-list"],
        children: Some(ChildrenRule::Cards),
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::Portfolio,
        weight: 75,
        classes: &["portfolio", "projects", "work", "works", "portfolio-grid", "case-studies"],
        children: Some(ChildrenRule::Cards),
        ..Pattern::EMPTY
    },
    Pattern {
        kind: ModuleType::ContactForm,
        weight: 90,
        tag: Some("form"),
        classes: &["contact-form", "form", "form-container", "cf7", "wpforms", "gform"],
        checks: &[Check::TextInputs, Check::Submit],
        ..Pattern::EMPTY
    },
];

/// Extracted payload of a recognized component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentData {
    pub attrs: Attrs,
    pub children: Vec<ComponentChild>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComponentChild {
    pub kind: ModuleType,
    pub attrs: Attrs,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionMatch {
    pub kind: ModuleType,
    /// `min(100, raw * weight)`.
    pub confidence: u32,
    pub data: ComponentData,
}

pub fn pattern(kind: ModuleType) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.kind == kind)
}

/// Best pattern for `element` with its extracted data, when any pattern
/// scores above zero.
pub fn recognize(element: ElementRef<'_>) -> Option<RecognitionMatch> {
    let mut best: Option<(&Pattern, u32)> = None;
    for pattern in PATTERNS {
        let raw = raw_score(element, pattern);
        if raw == 0 {
            continue;
        }
        let weighted = raw * pattern.weight;
        if diagnostics_enabled("recognize") {
            info!(kind = %pattern.kind, raw, weighted, "diagnostics: recognizer candidate");
        }
        if best.is_none_or(|(_, top)| weighted > top) {
            best = Some((pattern, weighted));
        }
    }
    let (pattern, weighted) = best?;
    Some(RecognitionMatch {
        kind: pattern.kind,
        confidence: weighted.min(100),
        data: extract_component(element, pattern.kind),
    })
}

/// Unweighted score of one pattern; zero when vetoed or unmatched.
pub fn raw_score(element: ElementRef<'_>, pattern: &Pattern) -> u32 {
    let mut score = 0;
    if let Some(tag) = pattern.tag {
        if !element.value().name().eq_ignore_ascii_case(tag) {
            return 0;
        }
        score += 20;
    }

    let classes = dom::classes(element);
    let matched = pattern
        .classes
        .iter()
        .filter(|c| classes.iter().any(|own| own == *c))
        .count() as u32;
    if matched > 0 {
        score += 30 + matched * 5;
    }

    for attr in pattern.attributes {
        match attr.split_once('=') {
            Some((name, value)) => {
                if dom::attr(element, name) == Some(value) {
                    score += 15;
                }
            }
            None => {
                if dom::attr(element, attr).is_some() {
                    score += 10;
                }
            }
        }
    }

    if let Some(rule) = pattern.children {
        let min = pattern.required_children.unwrap_or(2);
        let children_score = children_score(element, rule, min);
        if children_score > 0 {
            score += children_score;
        } else if pattern.required_children.is_some() {
            return 0;
        }
    }

    score
        + pattern
            .checks
            .iter()
            .map(|check| check_score(element, *check))
            .sum::<u32>()
}

fn children_score(element: ElementRef<'_>, rule: ChildrenRule, min: usize) -> u32 {
    match rule {
        ChildrenRule::Repeated(classes) => {
            let count = repeated_children(element, classes).len();
            if count >= min { 20 + count as u32 * 3 } else { 0 }
        }
        ChildrenRule::HeaderContentPairs { header, content } => {
            let pairs = dom::element_children(element)
                .into_iter()
                .filter(|item| extract::header_content_pair(*item, header, content).is_some())
                .count() as u32;
            if pairs >= 1 { 25 + pairs * 5 } else { 0 }
        }
        ChildrenRule::Images { min } => {
            let count = dom::count_descendants(element, &["img"]);
            if count >= min { 20 + count as u32 * 2 } else { 0 }
        }
        ChildrenRule::Cards => {
            let cards = dom::element_children(element)
                .into_iter()
                .filter(|child| is_card(*child))
                .count() as u32;
            if cards >= 2 { 15 + cards * 3 } else { 0 }
        }
    }
}

/// Direct children with a slide class, or block wrappers.
pub(crate) fn repeated_children<'a>(
    element: ElementRef<'a>,
    classes: &[&str],
) -> Vec<ElementRef<'a>> {
    dom::element_children(element)
        .into_iter()
        .filter(|child| {
            classes.iter().any(|c| dom::has_class(*child, c))
                || matches!(dom::tag(*child).as_str(), "div" | "section" | "article" | "li")
        })
        .collect()
}

fn is_card(child: ElementRef<'_>) -> bool {
    let tag = dom::tag(child);
    if tag == "article" || CARD_CLASSES.iter().any(|c| dom::has_class(child, c)) {
        return true;
    }
    matches!(tag.as_str(), "div" | "li")
        && (dom::find_descendant(child, &["img"]).is_some()
            || dom::find_descendant(child, HEADINGS).is_some())
}

fn check_score(element: ElementRef<'_>, check: Check) -> u32 {
    let passed = |ok: bool, points: u32| if ok { points } else { 0 };
    let has = |tags: &[&str]| dom::find_descendant(element, tags).is_some();
    match check {
        Check::IconOrImage => passed(has(&["img"]) || has_icon(element), 10),
        Check::Title(indicators) => {
            let heading = passed(has(HEADINGS), 10);
            let mut classes: Vec<&str> = indicators.to_vec();
            classes.extend(["title", "name", "heading"]);
            heading + passed(has_descendant_class(element, &classes), 5)
        }
        Check::Description => passed(
            has(&["p"])
                || has_descendant_class(element, &["description", "content", "text", "excerpt"]),
            8,
        ),
        Check::Button => passed(
            has(&["button"]) || has_descendant_class(element, &["btn", "button", "cta"]),
            10,
        ),
        Check::Quote(indicators) => passed(
            has(&["blockquote"]) || has_descendant_class(element, indicators),
            10,
        ),
        Check::Author(indicators) => passed(has_descendant_class(element, indicators), 10),
        Check::Price(indicators) => passed(
            has_descendant_class(element, indicators)
                || PRICE_TEXT.is_match(&dom::text_content(element)),
            15,
        ),
        Check::Features(indicators) => passed(
            has(&["ul", "ol"]) || has_descendant_class(element, indicators),
            10,
        ),
        Check::Position(indicators) => passed(has_descendant_class(element, indicators), 8),
        Check::SocialLinks(networks) => {
            let by_href = dom::descendants(element)
                .filter(|e| dom::tag(*e) == "a")
                .any(|a| {
                    let href = dom::attr(a, "href").unwrap_or_default().to_ascii_lowercase();
                    networks.iter().any(|n| href.contains(n))
                });
            passed(by_href || has_descendant_class(element, networks), 15)
        }
        Check::VideoElement(hosts) => {
            passed(has(&["video"]) || iframe_src_matches(element, hosts), 20)
        }
        Check::Iframe(hosts) => {
            if has(&["iframe"]) {
                10 + passed(iframe_src_matches(element, hosts), 15)
            } else {
                0
            }
        }
        Check::TextInputs => {
            let text_inputs = dom::descendants(element)
                .filter(|e| dom::tag(*e) == "input")
                .any(|input| {
                    let kind = dom::attr(input, "type").unwrap_or_default().trim().to_ascii_lowercase();
                    matches!(kind.as_str(), "" | "text" | "email" | "tel" | "number" | "url")
                });
            passed(text_inputs || has(&["textarea"]), 10)
        }
        Check::Submit => {
            let button = dom::descendants(element)
                .filter(|e| dom::tag(*e) == "button")
                .any(|b| {
                    let kind = dom::attr(b, "type").unwrap_or_default().trim();
                    kind.is_empty() || kind.eq_ignore_ascii_case("submit")
                });
            let input = dom::descendants(element)
                .filter(|e| dom::tag(*e) == "input")
                .any(|i| dom::attr(i, "type").is_some_and(|t| t.eq_ignore_ascii_case("submit")));
            passed(button, 10) + passed(input, 10)
        }
        Check::TimeUnits(units) => {
            let text = dom::text_content(element).to_ascii_lowercase();
            passed(
                has_descendant_class(element, units) || units.iter().any(|u| text.contains(u)),
                15,
            )
        }
        Check::Number => passed(
            has_descendant_class(element, &["number", "count", "value", "digit"])
                || LARGE_NUMBER.is_match(&dom::text_content(element)),
            10,
        ),
        Check::Label => passed(has_descendant_class(element, &["label", "title", "text"]), 5),
        Check::LargeHeading => passed(has(&["h1", "h2"]), 15),
        Check::Background => passed(
            dom::attr(element, "style").is_some_and(|s| s.to_ascii_lowercase().contains("background"))
                || dom::attr(element, "data-background").is_some()
                || dom::attr(element, "data-bg").is_some(),
            10,
        ),
        Check::NavAndPanels { nav, panels } => {
            let has_nav = has_descendant_class(element, nav) || has(&["ul"]);
            let has_panels = has_descendant_class(element, panels);
            match (has_nav, has_panels) {
                (true, true) => 20,
                (true, false) => 5,
                _ => 0,
            }
        }
    }
}

pub(crate) fn has_descendant_class(element: ElementRef<'_>, classes: &[&str]) -> bool {
    dom::descendants(element).any(|e| classes.iter().any(|c| dom::has_class(e, c)))
}

fn has_icon(element: ElementRef<'_>) -> bool {
    dom::find_descendant(element, &["i", "svg"]).is_some()
        || has_descendant_class(element, ICON_CLASSES)
}

fn iframe_src_matches(element: ElementRef<'_>, hosts: &[&str]) -> bool {
    dom::descendants(element)
        .filter(|e| dom::tag(*e) == "iframe")
        .any(|iframe| {
            let src = dom::attr(iframe, "src").unwrap_or_default().to_ascii_lowercase();
            hosts.iter().any(|h| src.contains(h))
        })
}
