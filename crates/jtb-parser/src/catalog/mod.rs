//! Static catalog of module types and their field-extraction rules.
//!
//! The table in [`definitions`] is declaration-ordered; class scans and
//! category listings walk it front to back.

mod definitions;

use serde::{Deserialize, Serialize};

pub use definitions::DEFINITIONS;

macro_rules! module_types {
    ($($variant:ident => $slug:literal,)+) => {
        /// Every module type the document model knows about.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum ModuleType {
            $(#[serde(rename = $slug)] $variant,)+
        }

        impl ModuleType {
            pub const ALL: &'static [ModuleType] = &[$(ModuleType::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(ModuleType::$variant => $slug,)+
                }
            }

            pub fn from_slug(slug: &str) -> Option<Self> {
                match slug {
                    $($slug => Some(ModuleType::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

module_types! {
    Section => "section",
    Row => "row",
    Column => "column",
    Heading => "heading",
    Text => "text",
    Image => "image",
    Button => "button",
    Blurb => "blurb",
    Divider => "divider",
    Code => "code",
    Cta => "cta",
    NumberCounter => "number_counter",
    CircleCounter => "circle_counter",
    BarCounter => "bar_counter",
    BarCounterItem => "bar_counter_item",
    Icon => "icon",
    Testimonial => "testimonial",
    TeamMember => "team_member",
    PricingTable => "pricing_table",
    PricingTableItem => "pricing_table_item",
    SocialFollow => "social_follow",
    SocialFollowItem => "social_follow_item",
    Comments => "comments",
    Countdown => "countdown",
    Sidebar => "sidebar",
    PostNavigation => "post_navigation",
    Shop => "shop",
    Accordion => "accordion",
    AccordionItem => "accordion_item",
    Tabs => "tabs",
    TabsItem => "tabs_item",
    Toggle => "toggle",
    Audio => "audio",
    Video => "video",
    Gallery => "gallery",
    Slider => "slider",
    SliderItem => "slider_item",
    VideoSlider => "video_slider",
    VideoSliderItem => "video_slider_item",
    Map => "map",
    MapPin => "map_pin",
    ContactForm => "contact_form",
    ContactFormField => "contact_form_field",
    Login => "login",
    Signup => "signup",
    Search => "search",
    Blog => "blog",
    Portfolio => "portfolio",
    FilterablePortfolio => "filterable_portfolio",
    PostSlider => "post_slider",
    FullwidthHeader => "fullwidth_header",
    FullwidthImage => "fullwidth_image",
    FullwidthMenu => "fullwidth_menu",
    FullwidthSlider => "fullwidth_slider",
    FullwidthSliderItem => "fullwidth_slider_item",
    FullwidthPortfolio => "fullwidth_portfolio",
    FullwidthCode => "fullwidth_code",
    FullwidthMap => "fullwidth_map",
    FullwidthPostSlider => "fullwidth_post_slider",
    FullwidthPostTitle => "fullwidth_post_title",
    PostTitle => "post_title",
    PostContent => "post_content",
    SiteLogo => "site_logo",
    FeaturedImage => "featured_image",
    PostExcerpt => "post_excerpt",
    PostMeta => "post_meta",
    AuthorBox => "author_box",
    RelatedPosts => "related_posts",
    ArchiveTitle => "archive_title",
    Breadcrumbs => "breadcrumbs",
    ArchivePosts => "archive_posts",
    Menu => "menu",
    SearchForm => "search_form",
    SocialIcons => "social_icons",
}

impl std::fmt::Display for ModuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Structure,
    Content,
    Interactive,
    Media,
    Forms,
    Blog,
    Fullwidth,
    Theme,
}

/// Where a field value is read from. Sources of one field are tried in
/// order and the first hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// Attribute on the element itself.
    Attribute(&'static str),
    /// Selector lookup; a hit without `@attr` yields the found text.
    Selector(&'static str),
    /// Selector lookup; a hit without `@attr` yields the found inner markup.
    MarkupSelector(&'static str),
    TextContent,
    InnerMarkup,
    /// `true` when the element carries the class.
    ClassPresence(&'static str),
    /// Remainder of the first class starting with the prefix.
    ClassPrefix(&'static str),
    Specialized(Detector),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detector {
    HeadingLevel,
    InputType,
    FormRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cast {
    Text,
    Bool,
    Int,
    Float,
    Array,
    Color,
}

/// Value used when every source of a field misses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Text(&'static str),
}

impl Literal {
    pub fn to_value(self) -> serde_json::Value {
        match self {
            Literal::Bool(b) => serde_json::Value::Bool(b),
            Literal::Int(n) => serde_json::Value::from(n),
            Literal::Text(s) => serde_json::Value::from(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub name: &'static str,
    pub cast: Cast,
    pub sources: &'static [FieldSource],
    pub default: Option<Literal>,
}

impl FieldRule {
    pub const fn new(name: &'static str, cast: Cast, sources: &'static [FieldSource]) -> Self {
        Self {
            name,
            cast,
            sources,
            default: None,
        }
    }

    pub const fn or(mut self, default: Literal) -> Self {
        self.default = Some(default);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleDefinition {
    pub kind: ModuleType,
    pub category: Category,
    pub classes: &'static [&'static str],
    pub child: Option<ModuleType>,
    pub is_child: bool,
    pub fields: &'static [FieldRule],
}

impl ModuleDefinition {
    pub const fn new(
        kind: ModuleType,
        category: Category,
        classes: &'static [&'static str],
        fields: &'static [FieldRule],
    ) -> Self {
        Self {
            kind,
            category,
            classes,
            child: None,
            is_child: false,
            fields,
        }
    }

    pub const fn with_child(mut self, child: ModuleType) -> Self {
        self.child = Some(child);
        self
    }

    pub const fn as_child(mut self) -> Self {
        self.is_child = true;
        self
    }

    pub fn matches_class(&self, classes: &[String]) -> bool {
        self.classes.iter().any(|c| classes.iter().any(|own| own == c))
    }
}

pub fn available_modules() -> impl Iterator<Item = ModuleType> {
    DEFINITIONS.iter().map(|d| d.kind)
}

pub fn definition(kind: ModuleType) -> Option<&'static ModuleDefinition> {
    DEFINITIONS.iter().find(|d| d.kind == kind)
}

pub fn has_children(kind: ModuleType) -> bool {
    child_type(kind).is_some()
}

pub fn child_type(kind: ModuleType) -> Option<ModuleType> {
    definition(kind).and_then(|d| d.child)
}

pub fn is_child_module(kind: ModuleType) -> bool {
    definition(kind).is_some_and(|d| d.is_child)
}

pub fn modules_by_category(category: Category) -> Vec<ModuleType> {
    DEFINITIONS
        .iter()
        .filter(|d| d.category == category)
        .map(|d| d.kind)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_exactly_one_definition() {
        assert_eq!(DEFINITIONS.len(), ModuleType::ALL.len());
        for (def, kind) in DEFINITIONS.iter().zip(ModuleType::ALL) {
            assert_eq!(def.kind, *kind, "table order drifted at {kind}");
        }
    }

    #[test]
    fn slugs_round_trip_through_serde() {
        for kind in ModuleType::ALL {
            assert_eq!(ModuleType::from_slug(kind.as_str()), Some(*kind));
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::from(kind.as_str()));
        }
        assert_eq!(ModuleType::from_slug("carousel"), None);
    }

    #[test]
    fn child_links_point_at_child_modules() {
        for def in DEFINITIONS {
            if let Some(child) = def.child {
                assert!(is_child_module(child), "{} -> {child}", def.kind);
            }
        }
        assert_eq!(child_type(ModuleType::Accordion), Some(ModuleType::AccordionItem));
        assert!(has_children(ModuleType::Slider));
        assert!(!has_children(ModuleType::Heading));
    }

    #[test]
    fn categories_partition_the_catalog() {
        assert_eq!(
            modules_by_category(Category::Structure),
            vec![ModuleType::Section, ModuleType::Row, ModuleType::Column]
        );
        let total: usize = [
            Category::Structure,
            Category::Content,
            Category::Interactive,
            Category::Media,
            Category::Forms,
            Category::Blog,
            Category::Fullwidth,
            Category::Theme,
        ]
        .into_iter()
        .map(|c| modules_by_category(c).len())
        .sum();
        assert_eq!(total, available_modules().count());
    }
}
