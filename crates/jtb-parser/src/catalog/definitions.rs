use super::Cast::{Array, Bool, Color, Float, Int, Text};
use super::Category::{Blog, Content, Forms, Fullwidth, Interactive, Media, Structure, Theme};
use super::Detector::{FormRole, HeadingLevel, InputType};
use super::FieldSource::{
    Attribute, ClassPrefix, ClassPresence, InnerMarkup, MarkupSelector, Selector, Specialized,
    TextContent,
};
use super::{FieldRule as F, Literal, ModuleDefinition as D, ModuleType as M};

pub static DEFINITIONS: &[D] = &[
    // structure
    D::new(
        M::Section,
        Structure,
        &["section", "jtb-section"],
        &[
            F::new("fullwidth", Bool, &[Attribute("data-jtb-attr-fullwidth")]),
            F::new("inner_shadow", Bool, &[Attribute("data-jtb-attr-inner-shadow")]),
            F::new("parallax", Bool, &[Attribute("data-jtb-attr-parallax")]),
        ],
    ),
    D::new(
        M::Row,
        Structure,
        &["row", "jtb-row"],
        &[
            F::new("column_structure", Text, &[Attribute("data-jtb-attr-columns")]),
            F::new("gutter_width", Int, &[Attribute("data-jtb-attr-gutter")]),
            F::new("equalheight", Bool, &[Attribute("data-jtb-attr-equalheight")]),
        ],
    ),
    D::new(M::Column, Structure, &["column", "col", "jtb-column"], &[]),
    // content
    D::new(
        M::Heading,
        Content,
        &["heading", "title"],
        &[
            F::new("text", Text, &[TextContent]),
            F::new("level", Text, &[Specialized(HeadingLevel)]),
            F::new(
                "link_url",
                Text,
                &[Attribute("data-jtb-attr-link-url"), Selector("a@href")],
            ),
            F::new(
                "link_target",
                Bool,
                &[Attribute("data-jtb-attr-link-target"), Selector("a@target")],
            ),
        ],
    ),
    D::new(
        M::Text,
        Content,
        &["text", "content", "description"],
        &[F::new("content", Text, &[InnerMarkup])],
    ),
    D::new(
        M::Image,
        Content,
        &["image", "img", "photo"],
        &[
            F::new("src", Text, &[Attribute("src"), Selector("img@src")]),
            F::new("alt", Text, &[Attribute("alt"), Selector("img@alt")]),
            F::new("title_text", Text, &[Attribute("title")]),
            F::new("link_url", Text, &[Attribute("data-jtb-attr-url"), Selector("a@href")]),
            F::new("link_target", Bool, &[Selector("a@target")]),
            F::new("show_in_lightbox", Bool, &[Attribute("data-jtb-attr-lightbox")]),
        ],
    ),
    D::new(
        M::Button,
        Content,
        &["btn", "button", "cta-button"],
        &[
            F::new("text", Text, &[TextContent]),
            F::new("link_url", Text, &[Attribute("href")]),
            F::new("link_target", Bool, &[Attribute("target")]),
            F::new("button_alignment", Text, &[Attribute("data-jtb-attr-alignment")]),
            F::new("custom_icon", Text, &[Attribute("data-jtb-attr-icon")]),
            F::new("icon_position", Text, &[Attribute("data-jtb-attr-icon-position")]),
        ],
    ),
    D::new(
        M::Blurb,
        Content,
        &["blurb", "card", "feature", "feature-box", "info-box"],
        &[
            F::new("title", Text, &[Selector("h1,h2,h3,h4,h5,h6")]),
            F::new("content", Text, &[MarkupSelector(".content,p,.description")]),
            F::new("image", Text, &[Selector("img@src")]),
            F::new("alt", Text, &[Selector("img@alt")]),
            F::new("use_icon", Bool, &[Attribute("data-jtb-attr-use-icon")]),
            F::new("font_icon", Text, &[Attribute("data-jtb-attr-icon")]),
            F::new("icon_color", Color, &[Attribute("data-jtb-attr-icon-color")]),
            F::new("use_circle", Bool, &[Attribute("data-jtb-attr-use-circle")]),
            F::new("image_placement", Text, &[Attribute("data-jtb-attr-placement")]),
            F::new("link_url", Text, &[Selector("a@href")]),
            F::new("header_level", Text, &[Attribute("data-jtb-attr-header-level")]),
            F::new("text_orientation", Text, &[Attribute("data-jtb-attr-text-align")]),
        ],
    ),
    D::new(
        M::Divider,
        Content,
        &["divider", "separator", "hr"],
        &[
            F::new("show_divider", Bool, &[]).or(Literal::Bool(true)),
            F::new("divider_style", Text, &[Attribute("data-jtb-attr-style")]),
            F::new("divider_weight", Int, &[Attribute("data-jtb-attr-weight")]),
            F::new("divider_color", Color, &[Attribute("data-jtb-attr-color")]),
        ],
    ),
    D::new(
        M::Code,
        Content,
        &["code", "code-block", "syntax"],
        &[F::new("raw_content", Text, &[TextContent])],
    ),
    D::new(
        M::Cta,
        Content,
        &["cta", "call-to-action", "cta-section", "cta-box"],
        &[
            F::new("title", Text, &[Selector("h1,h2,h3,h4")]),
            F::new("content", Text, &[MarkupSelector("p,.content")]),
            F::new("button_text", Text, &[Selector(".btn,button,a.button")]),
            F::new(
                "link_url",
                Text,
                &[Selector(".btn@href,button@data-url,a.button@href")],
            ),
        ],
    ),
    D::new(
        M::NumberCounter,
        Content,
        &["counter", "number-counter", "stat", "statistic"],
        &[
            F::new("title", Text, &[Selector("h1,h2,h3,h4,h5,h6,.title")]),
            F::new(
                "number",
                Text,
                &[Attribute("data-jtb-attr-number"), Selector(".number,.count")],
            ),
            F::new("percent_sign", Bool, &[Attribute("data-jtb-attr-percent")]),
        ],
    ),
    D::new(
        M::CircleCounter,
        Content,
        &["circle-counter", "progress-circle", "radial-progress"],
        &[
            F::new("title", Text, &[Selector("h1,h2,h3,h4,h5,h6,.title")]),
            F::new("number", Int, &[Attribute("data-jtb-attr-number")]),
            F::new("bar_bg_color", Color, &[Attribute("data-jtb-attr-bar-bg")]),
            F::new("bar_color", Color, &[Attribute("data-jtb-attr-bar-color")]),
        ],
    ),
    D::new(
        M::BarCounter,
        Content,
        &["bar-counter", "progress-bar", "progress"],
        &[F::new("layout", Text, &[Attribute("data-jtb-attr-layout")])],
    )
    .with_child(M::BarCounterItem),
    D::new(
        M::BarCounterItem,
        Content,
        &["bar-item", "progress-item"],
        &[
            F::new("title", Text, &[Selector(".title,.label")]),
            F::new("percent", Int, &[Attribute("data-jtb-attr-percent")]),
            F::new("bar_color", Color, &[Attribute("data-jtb-attr-color")]),
        ],
    )
    .as_child(),
    D::new(
        M::Icon,
        Content,
        &["icon", "jtb-icon"],
        &[
            F::new(
                "font_icon",
                Text,
                &[Attribute("data-jtb-attr-icon"), ClassPrefix("icon-")],
            ),
            F::new("icon_color", Color, &[Attribute("data-jtb-attr-color")]),
            F::new("use_circle", Bool, &[Attribute("data-jtb-attr-circle")]),
            F::new("circle_color", Color, &[Attribute("data-jtb-attr-circle-color")]),
        ],
    ),
    D::new(
        M::Testimonial,
        Content,
        &["testimonial", "review", "quote", "customer-review"],
        &[
            F::new("author", Text, &[Selector(".author,.name,cite")]),
            F::new("job_title", Text, &[Selector(".job,.position,.role")]),
            F::new("company", Text, &[Selector(".company,.organization")]),
            F::new("link_url", Text, &[Selector("a@href")]),
            F::new("portrait_url", Text, &[Selector("img@src,.avatar@src")]),
            F::new("content", Text, &[MarkupSelector(".content,.quote,p")]),
            F::new("quote_icon", Text, &[Attribute("data-jtb-attr-quote-icon")]),
        ],
    ),
    D::new(
        M::TeamMember,
        Content,
        &["team-member", "member", "staff", "person", "profile"],
        &[
            F::new("name", Text, &[Selector("h1,h2,h3,h4,h5,h6,.name")]),
            F::new("position", Text, &[Selector(".position,.role,.job-title")]),
            F::new("image_url", Text, &[Selector("img@src")]),
            F::new("content", Text, &[MarkupSelector(".bio,.content,p")]),
            F::new("facebook_url", Text, &[Attribute("data-jtb-attr-facebook")]),
            F::new("twitter_url", Text, &[Attribute("data-jtb-attr-twitter")]),
            F::new("linkedin_url", Text, &[Attribute("data-jtb-attr-linkedin")]),
            F::new("email", Text, &[Attribute("data-jtb-attr-email")]),
        ],
    ),
    D::new(
        M::PricingTable,
        Content,
        &["pricing", "pricing-table", "pricing-card", "price-box", "plan"],
        &[
            F::new("title", Text, &[Selector("h1,h2,h3,h4,.plan-name,.title")]),
            F::new("subtitle", Text, &[Selector(".subtitle,.tagline")]),
            F::new("currency", Text, &[Attribute("data-jtb-attr-currency")]),
            F::new("price", Text, &[Selector(".price,.amount")]),
            F::new("per", Text, &[Selector(".period,.per")]),
            F::new("content", Text, &[MarkupSelector("ul,.features")]),
            F::new("button_text", Text, &[Selector(".btn,button,a.button")]),
            F::new("link_url", Text, &[Selector(".btn@href,a.button@href")]),
            F::new(
                "featured",
                Bool,
                &[Attribute("data-jtb-attr-featured"), ClassPresence("featured")],
            ),
            F::new("featured_text", Text, &[Selector(".badge,.ribbon")]),
        ],
    )
    .with_child(M::PricingTableItem),
    D::new(
        M::PricingTableItem,
        Content,
        &["pricing-feature", "feature-item"],
        &[
            F::new("feature", Text, &[TextContent]),
            F::new("excluded", Bool, &[ClassPresence("excluded")]),
        ],
    )
    .as_child(),
    D::new(
        M::SocialFollow,
        Content,
        &["social", "social-icons", "social-links", "social-follow"],
        &[F::new("follow_button", Bool, &[Attribute("data-jtb-attr-follow-button")])],
    )
    .with_child(M::SocialFollowItem),
    D::new(
        M::SocialFollowItem,
        Content,
        &["social-item", "social-link"],
        &[
            F::new(
                "social_network",
                Text,
                &[Attribute("data-jtb-attr-network"), ClassPrefix("social-")],
            ),
            F::new("url", Text, &[Attribute("href"), Selector("a@href")]),
        ],
    )
    .as_child(),
    D::new(
        M::Comments,
        Content,
        &["comments", "comments-section", "comment-list"],
        &[
            F::new("show_avatar", Bool, &[Attribute("data-jtb-attr-show-avatar")]),
            F::new("show_reply", Bool, &[Attribute("data-jtb-attr-show-reply")]),
        ],
    ),
    D::new(
        M::Countdown,
        Content,
        &["countdown", "timer", "count-down"],
        &[
            F::new("end_date", Text, &[Attribute("data-jtb-attr-end-date")]),
            F::new("show_days", Bool, &[Attribute("data-jtb-attr-show-days")]),
            F::new("show_hours", Bool, &[Attribute("data-jtb-attr-show-hours")]),
            F::new("show_minutes", Bool, &[Attribute("data-jtb-attr-show-minutes")]),
            F::new("show_seconds", Bool, &[Attribute("data-jtb-attr-show-seconds")]),
        ],
    ),
    D::new(
        M::Sidebar,
        Content,
        &["sidebar", "widget-area"],
        &[F::new("area", Text, &[Attribute("data-jtb-attr-area")])],
    ),
    D::new(
        M::PostNavigation,
        Content,
        &["post-navigation", "nav-links", "post-nav"],
        &[
            F::new("show_featured_image", Bool, &[Attribute("data-jtb-attr-show-image")]),
            F::new("show_title", Bool, &[Attribute("data-jtb-attr-show-title")]),
        ],
    ),
    D::new(
        M::Shop,
        Content,
        &["shop", "products", "woocommerce", "product-grid"],
        &[
            F::new("posts_number", Int, &[Attribute("data-jtb-attr-posts-number")]),
            F::new("columns", Int, &[Attribute("data-jtb-attr-columns")]),
        ],
    ),
    // interactive
    D::new(
        M::Accordion,
        Interactive,
        &["accordion", "faq", "collapsible"],
        &[
            F::new("toggle_icon", Text, &[Attribute("data-jtb-attr-toggle-icon")]),
            F::new("toggle_icon_position", Text, &[Attribute("data-jtb-attr-icon-position")]),
            F::new("toggle_header_level", Text, &[Attribute("data-jtb-attr-header-level")]),
        ],
    )
    .with_child(M::AccordionItem),
    D::new(
        M::AccordionItem,
        Interactive,
        &["accordion-item", "faq-item", "collapse-item"],
        &[
            F::new(
                "title",
                Text,
                &[Selector(".accordion-header,.faq-question,h1,h2,h3,h4,h5,h6")],
            ),
            F::new(
                "content",
                Text,
                &[MarkupSelector(".accordion-content,.faq-answer,.content")],
            ),
            F::new(
                "open",
                Bool,
                &[Attribute("data-jtb-attr-open"), ClassPresence("open")],
            ),
        ],
    )
    .as_child(),
    D::new(
        M::Tabs,
        Interactive,
        &["tabs", "tab-container", "tabbed"],
        &[F::new("active_tab_idx", Int, &[Attribute("data-jtb-attr-active-tab")])],
    )
    .with_child(M::TabsItem),
    D::new(
        M::TabsItem,
        Interactive,
        &["tab-item", "tab-pane", "tab-content"],
        &[
            F::new(
                "title",
                Text,
                &[Attribute("data-jtb-attr-title"), Selector(".tab-title,h1,h2,h3,h4,h5,h6")],
            ),
            F::new("content", Text, &[MarkupSelector(".tab-content,.content")]),
        ],
    )
    .as_child(),
    D::new(
        M::Toggle,
        Interactive,
        &["toggle", "expandable"],
        &[
            F::new("title", Text, &[Selector(".toggle-header,h1,h2,h3,h4,h5,h6")]),
            F::new("content", Text, &[MarkupSelector(".toggle-content,.content")]),
            F::new(
                "open",
                Bool,
                &[Attribute("data-jtb-attr-open"), ClassPresence("open")],
            ),
        ],
    ),
    // media
    D::new(
        M::Audio,
        Media,
        &["audio", "audio-player", "podcast"],
        &[F::new("audio_url", Text, &[Attribute("src"), Selector("source@src")])],
    ),
    D::new(
        M::Video,
        Media,
        &["video", "video-player", "embed-responsive"],
        &[
            F::new(
                "src",
                Text,
                &[Attribute("src"), Selector("iframe@src,video@src,source@src")],
            ),
            F::new("src_webm", Text, &[Attribute("data-jtb-attr-webm")]),
        ],
    ),
    D::new(
        M::Gallery,
        Media,
        &["gallery", "image-gallery", "photo-gallery", "grid-gallery"],
        &[
            F::new("gallery_ids", Array, &[Selector("img@src")]),
            F::new("columns", Int, &[Attribute("data-jtb-attr-columns")]),
            F::new("orientation", Text, &[Attribute("data-jtb-attr-orientation")]),
            F::new("show_title_and_caption", Bool, &[Attribute("data-jtb-attr-show-caption")]),
        ],
    ),
    D::new(
        M::Slider,
        Media,
        &["slider", "carousel", "slideshow", "swiper"],
        &[
            F::new("show_arrows", Bool, &[Attribute("data-jtb-attr-arrows")]),
            F::new("show_dots", Bool, &[Attribute("data-jtb-attr-dots")]),
            F::new("auto", Bool, &[Attribute("data-jtb-attr-auto")]),
            F::new("auto_speed", Int, &[Attribute("data-jtb-attr-speed")]),
            F::new("loop", Bool, &[Attribute("data-jtb-attr-loop")]),
            F::new("slider_height", Int, &[Attribute("data-jtb-attr-height")]),
        ],
    )
    .with_child(M::SliderItem),
    D::new(
        M::SliderItem,
        Media,
        &["slide", "slider-item", "carousel-item", "swiper-slide"],
        &[
            F::new("heading", Text, &[Selector("h1,h2,h3,h4")]),
            F::new("content", Text, &[MarkupSelector(".content,p")]),
            F::new("image", Text, &[Attribute("data-jtb-attr-image"), Selector("img@src")]),
            F::new("button_text", Text, &[Selector(".btn,button,a.button")]),
            F::new("link_url", Text, &[Selector(".btn@href,a.button@href")]),
        ],
    )
    .as_child(),
    D::new(
        M::VideoSlider,
        Media,
        &["video-slider", "video-carousel"],
        &[
            F::new("show_arrows", Bool, &[Attribute("data-jtb-attr-arrows")]),
            F::new("show_dots", Bool, &[Attribute("data-jtb-attr-dots")]),
        ],
    )
    .with_child(M::VideoSliderItem),
    D::new(
        M::VideoSliderItem,
        Media,
        &["video-slide"],
        &[F::new("video_url", Text, &[Selector("iframe@src,video@src")])],
    )
    .as_child(),
    D::new(
        M::Map,
        Media,
        &["map", "google-map", "location-map"],
        &[
            F::new("address", Text, &[Attribute("data-jtb-attr-address")]),
            F::new("zoom", Int, &[Attribute("data-jtb-attr-zoom")]),
            F::new("map_height", Int, &[Attribute("data-jtb-attr-height")]),
            F::new("grayscale", Bool, &[Attribute("data-jtb-attr-grayscale")]),
        ],
    )
    .with_child(M::MapPin),
    D::new(
        M::MapPin,
        Media,
        &["map-pin", "marker"],
        &[
            F::new("title", Text, &[Attribute("data-jtb-attr-title")]),
            F::new("pin_address", Text, &[Attribute("data-jtb-attr-address")]),
            F::new("pin_lat", Float, &[Attribute("data-jtb-attr-lat")]),
            F::new("pin_lng", Float, &[Attribute("data-jtb-attr-lng")]),
        ],
    )
    .as_child(),
    // forms
    D::new(
        M::ContactForm,
        Forms,
        &["contact-form", "form", "form-container"],
        &[
            F::new("email", Text, &[Attribute("data-jtb-attr-email")]),
            F::new("success_message", Text, &[Attribute("data-jtb-attr-success-message")]),
            F::new(
                "submit_button_text",
                Text,
                &[Selector(r#"button[type="submit"],input[type="submit"]@value"#)],
            ),
            F::new("use_captcha", Bool, &[Attribute("data-jtb-attr-captcha")]),
            F::new("form_role", Text, &[Specialized(FormRole)]),
        ],
    )
    .with_child(M::ContactFormField),
    D::new(
        M::ContactFormField,
        Forms,
        &["form-group", "form-field", "field"],
        &[
            F::new("field_type", Text, &[Specialized(InputType)]),
            F::new(
                "field_id",
                Text,
                &[Attribute("name"), Selector("input@name,textarea@name,select@name")],
            ),
            F::new("field_title", Text, &[Selector("label")]),
            F::new(
                "required_mark",
                Bool,
                &[Attribute("required"), Selector("input@required,textarea@required,select@required")],
            ),
            F::new(
                "placeholder",
                Text,
                &[Attribute("placeholder"), Selector("input@placeholder,textarea@placeholder")],
            ),
        ],
    )
    .as_child(),
    D::new(
        M::Login,
        Forms,
        &["login-form", "signin-form", "login"],
        &[
            F::new("redirect_url", Text, &[Attribute("data-jtb-attr-redirect")]),
            F::new("show_remember", Bool, &[Attribute("data-jtb-attr-show-remember")]),
        ],
    ),
    D::new(
        M::Signup,
        Forms,
        &["signup-form", "register-form", "registration"],
        &[F::new("redirect_url", Text, &[Attribute("data-jtb-attr-redirect")])],
    ),
    D::new(
        M::Search,
        Forms,
        &["search-form", "search", "site-search"],
        &[
            F::new(
                "placeholder_text",
                Text,
                &[Selector(
                    r#"input[type="search"]@placeholder,input[type="text"]@placeholder"#,
                )],
            ),
            F::new("button_text", Text, &[Selector("button")]),
        ],
    ),
    // blog
    D::new(
        M::Blog,
        Blog,
        &["blog", "posts", "post-grid", "blog-posts", "articles"],
        &[
            F::new("posts_number", Int, &[Attribute("data-jtb-attr-posts")]),
            F::new("include_categories", Text, &[Attribute("data-jtb-attr-categories")]),
            F::new("show_thumbnail", Bool, &[Attribute("data-jtb-attr-show-thumb")]),
            F::new("show_content", Bool, &[Attribute("data-jtb-attr-show-content")]),
            F::new("show_date", Bool, &[Attribute("data-jtb-attr-show-date")]),
            F::new("show_author", Bool, &[Attribute("data-jtb-attr-show-author")]),
            F::new("show_categories", Bool, &[Attribute("data-jtb-attr-show-categories")]),
            F::new("show_pagination", Bool, &[Attribute("data-jtb-attr-show-pagination")]),
            F::new("fullwidth", Bool, &[Attribute("data-jtb-attr-fullwidth")]),
        ],
    ),
    D::new(
        M::Portfolio,
        Blog,
        &["portfolio", "projects", "work", "portfolio-grid"],
        &[
            F::new("posts_number", Int, &[Attribute("data-jtb-attr-posts")]),
            F::new("include_categories", Text, &[Attribute("data-jtb-attr-categories")]),
            F::new("show_title", Bool, &[Attribute("data-jtb-attr-show-title")]),
            F::new("show_categories", Bool, &[Attribute("data-jtb-attr-show-categories")]),
            F::new("layout", Text, &[Attribute("data-jtb-attr-layout")]),
            F::new("columns", Int, &[Attribute("data-jtb-attr-columns")]),
        ],
    ),
    D::new(
        M::FilterablePortfolio,
        Blog,
        &["filterable-portfolio", "filterable-gallery", "isotope"],
        &[
            F::new("posts_number", Int, &[Attribute("data-jtb-attr-posts")]),
            F::new("show_categories", Bool, &[Attribute("data-jtb-attr-show-categories")]),
            F::new("layout", Text, &[Attribute("data-jtb-attr-layout")]),
        ],
    ),
    D::new(
        M::PostSlider,
        Blog,
        &["post-slider", "posts-carousel"],
        &[
            F::new("posts_number", Int, &[Attribute("data-jtb-attr-posts")]),
            F::new("include_categories", Text, &[Attribute("data-jtb-attr-categories")]),
            F::new("show_arrows", Bool, &[Attribute("data-jtb-attr-arrows")]),
            F::new("show_pagination", Bool, &[Attribute("data-jtb-attr-pagination")]),
        ],
    ),
    // fullwidth
    D::new(
        M::FullwidthHeader,
        Fullwidth,
        &["fullwidth-header", "hero", "banner", "hero-section"],
        &[
            F::new("title", Text, &[Selector("h1,h2,.hero-title")]),
            F::new("subhead", Text, &[Selector(".subtitle,.subhead,p")]),
            F::new("content", Text, &[MarkupSelector(".content")]),
            F::new("header_fullscreen", Bool, &[Attribute("data-jtb-attr-fullscreen")]),
            F::new("background_image", Text, &[Attribute("data-jtb-attr-bg-image")]),
            F::new("background_video_mp4", Text, &[Attribute("data-jtb-attr-bg-video")]),
            F::new("parallax", Bool, &[Attribute("data-jtb-attr-parallax")]),
            F::new("text_orientation", Text, &[Attribute("data-jtb-attr-text-align")]),
            F::new(
                "button_one_text",
                Text,
                &[Selector(".btn:first-of-type,a.button:first-of-type")],
            ),
            F::new("button_one_url", Text, &[Selector(".btn:first-of-type@href")]),
            F::new("button_two_text", Text, &[Selector(".btn:last-of-type")]),
            F::new("button_two_url", Text, &[Selector(".btn:last-of-type@href")]),
            F::new("logo_image_url", Text, &[Selector(".logo img@src")]),
        ],
    ),
    D::new(
        M::FullwidthImage,
        Fullwidth,
        &["fullwidth-image", "full-image"],
        &[
            F::new("src", Text, &[Selector("img@src")]),
            F::new("alt", Text, &[Selector("img@alt")]),
            F::new("link_url", Text, &[Selector("a@href")]),
        ],
    ),
    D::new(
        M::FullwidthMenu,
        Fullwidth,
        &["fullwidth-menu", "main-nav"],
        &[
            F::new("menu", Text, &[Attribute("data-jtb-attr-menu")]),
            F::new("logo_url", Text, &[Selector(".logo img@src")]),
            F::new("menu_style", Text, &[Attribute("data-jtb-attr-menu-style")]),
        ],
    ),
    D::new(
        M::FullwidthSlider,
        Fullwidth,
        &["fullwidth-slider", "hero-slider"],
        &[
            F::new("show_arrows", Bool, &[Attribute("data-jtb-attr-arrows")]),
            F::new("show_pagination", Bool, &[Attribute("data-jtb-attr-pagination")]),
            F::new("auto", Bool, &[Attribute("data-jtb-attr-auto")]),
            F::new("auto_speed", Int, &[Attribute("data-jtb-attr-speed")]),
        ],
    )
    .with_child(M::FullwidthSliderItem),
    D::new(
        M::FullwidthSliderItem,
        Fullwidth,
        &["fullwidth-slide", "hero-slide"],
        &[
            F::new("heading", Text, &[Selector("h1,h2,h3")]),
            F::new("subhead", Text, &[Selector(".subtitle,p")]),
            F::new("background_image", Text, &[Attribute("data-jtb-attr-bg-image")]),
            F::new("button_text", Text, &[Selector(".btn,a.button")]),
            F::new("link_url", Text, &[Selector(".btn@href")]),
        ],
    )
    .as_child(),
    D::new(
        M::FullwidthPortfolio,
        Fullwidth,
        &["fullwidth-portfolio"],
        &[
            F::new("posts_number", Int, &[Attribute("data-jtb-attr-posts")]),
            F::new("include_categories", Text, &[Attribute("data-jtb-attr-categories")]),
        ],
    ),
    D::new(
        M::FullwidthCode,
        Fullwidth,
        &["fullwidth-code", "embed-code"],
        &[F::new("raw_content", Text, &[InnerMarkup])],
    ),
    D::new(
        M::FullwidthMap,
        Fullwidth,
        &["fullwidth-map"],
        &[
            F::new("address", Text, &[Attribute("data-jtb-attr-address")]),
            F::new("zoom", Int, &[Attribute("data-jtb-attr-zoom")]),
            F::new("map_height", Int, &[Attribute("data-jtb-attr-height")]),
        ],
    ),
    D::new(
        M::FullwidthPostSlider,
        Fullwidth,
        &["fullwidth-post-slider"],
        &[
            F::new("posts_number", Int, &[Attribute("data-jtb-attr-posts")]),
            F::new("include_categories", Text, &[Attribute("data-jtb-attr-categories")]),
        ],
    ),
    D::new(
        M::FullwidthPostTitle,
        Fullwidth,
        &["fullwidth-post-title", "page-header"],
        &[
            F::new("text_orientation", Text, &[Attribute("data-jtb-attr-text-align")]),
            F::new("show_meta", Bool, &[Attribute("data-jtb-attr-show-meta")]),
        ],
    ),
    // theme
    D::new(
        M::PostTitle,
        Theme,
        &["post-title", "entry-title"],
        &[
            F::new("title", Text, &[Attribute("data-jtb-attr-title")]),
            F::new("link", Bool, &[Attribute("data-jtb-attr-link")]),
        ],
    ),
    D::new(
        M::PostContent,
        Theme,
        &["post-content", "entry-content"],
        &[],
    ),
    D::new(
        M::SiteLogo,
        Theme,
        &["site-logo", "logo", "brand"],
        &[
            F::new("logo_url", Text, &[Selector("img@src")]),
            F::new("logo_alt", Text, &[Selector("img@alt")]),
            F::new("max_height", Int, &[Attribute("data-jtb-attr-max-height")]),
        ],
    ),
    D::new(
        M::FeaturedImage,
        Theme,
        &["featured-image", "post-thumbnail", "entry-thumbnail"],
        &[
            F::new("show_in_lightbox", Bool, &[Attribute("data-jtb-attr-lightbox")]),
            F::new("force_fullwidth", Bool, &[Attribute("data-jtb-attr-fullwidth")]),
        ],
    ),
    D::new(
        M::PostExcerpt,
        Theme,
        &["post-excerpt", "entry-excerpt", "excerpt"],
        &[F::new("excerpt_length", Int, &[Attribute("data-jtb-attr-length")])],
    ),
    D::new(
        M::PostMeta,
        Theme,
        &["post-meta", "entry-meta", "meta"],
        &[
            F::new("show_author", Bool, &[Attribute("data-jtb-attr-show-author")]),
            F::new("show_date", Bool, &[Attribute("data-jtb-attr-show-date")]),
            F::new("show_categories", Bool, &[Attribute("data-jtb-attr-show-categories")]),
            F::new("show_comments", Bool, &[Attribute("data-jtb-attr-show-comments")]),
        ],
    ),
    D::new(
        M::AuthorBox,
        Theme,
        &["author-box", "author-bio", "about-author"],
        &[
            F::new("show_bio", Bool, &[Attribute("data-jtb-attr-show-bio")]),
            F::new("show_social", Bool, &[Attribute("data-jtb-attr-show-social")]),
        ],
    ),
    D::new(
        M::RelatedPosts,
        Theme,
        &["related-posts", "related-articles"],
        &[
            F::new("posts_number", Int, &[Attribute("data-jtb-attr-posts")]),
            F::new("columns", Int, &[Attribute("data-jtb-attr-columns")]),
        ],
    ),
    D::new(
        M::ArchiveTitle,
        Theme,
        &["archive-title", "page-title"],
        &[],
    ),
    D::new(
        M::Breadcrumbs,
        Theme,
        &["breadcrumbs", "breadcrumb", "bread-crumbs"],
        &[
            F::new("home_text", Text, &[Attribute("data-jtb-attr-home-text")]),
            F::new("separator", Text, &[Attribute("data-jtb-attr-separator")]),
        ],
    ),
    D::new(
        M::ArchivePosts,
        Theme,
        &["archive-posts", "post-list"],
        &[
            F::new("layout", Text, &[Attribute("data-jtb-attr-layout")]),
            F::new("columns", Int, &[Attribute("data-jtb-attr-columns")]),
            F::new("show_thumbnail", Bool, &[Attribute("data-jtb-attr-show-thumb")]),
            F::new("show_excerpt", Bool, &[Attribute("data-jtb-attr-show-excerpt")]),
        ],
    ),
    D::new(
        M::Menu,
        Theme,
        &["menu", "nav-menu", "navigation", "main-menu"],
        &[
            F::new("menu", Text, &[Attribute("data-jtb-attr-menu")]),
            F::new("menu_style", Text, &[Attribute("data-jtb-attr-style")]),
            F::new("submenu_direction", Text, &[Attribute("data-jtb-attr-submenu")]),
            F::new("mobile_menu", Bool, &[Attribute("data-jtb-attr-mobile")]),
        ],
    ),
    D::new(
        M::SearchForm,
        Theme,
        &["search-form", "search"],
        &[
            F::new("placeholder_text", Text, &[Selector("input@placeholder")]),
            F::new("button_text", Text, &[Selector("button")]),
        ],
    ),
    D::new(
        M::SocialIcons,
        Theme,
        &["social-icons", "social-links"],
        &[
            F::new("follow_button", Bool, &[Attribute("data-jtb-attr-follow")]),
            F::new("icon_color", Color, &[Attribute("data-jtb-attr-color")]),
            F::new("icon_shape", Text, &[Attribute("data-jtb-attr-shape")]),
        ],
    ),
];
