//! Orchestrates one HTML → module tree conversion.
//!
//! Annotated markup (any `data-jtb-module=`) is walked by its markers;
//! everything else is classified into section → row → column → module by
//! the layout detector, with component recognition and catalog mapping
//! deciding the leaf modules.

mod ids;

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::attributes::AttributeConverter;
use crate::catalog::{self, ModuleType};
use crate::diagnostics::diagnostics_enabled;
use crate::dom;
use crate::layout;
use crate::mapper;
use crate::model::{Attrs, Mode, Module, ParseResult, ParsedDocument, Stats};
use crate::recognizer::{self, RecognitionMatch};
use crate::style::{self, DEFAULT_BASE_FONT_SIZE};

use ids::IdGenerator;

const SKIPPED_TAGS: &[&str] = &["style", "script", "link", "meta", "noscript", "template"];
const TABLET_STYLE: &str = "data-jtb-tablet-style";
const PHONE_STYLE: &str = "data-jtb-phone-style";
const HOVER_STYLE: &str = "data-jtb-hover-style";
const TRANSIENT_KEYS: &[&str] = &["_tablet_styles", "_phone_styles", "_hover_styles"];
pub const DEFAULT_RECOGNITION_THRESHOLD: u32 = 50;

static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"data-jtb-module\s*=").expect("annotation pattern"));
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<html").expect("html tag pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Pixel size of `1em`/`1rem` when converting font-relative lengths.
    pub base_font_size: i64,
    /// Recognizer confidence a component must exceed to be accepted.
    pub recognition_threshold: u32,
    /// Forces a walk mode instead of sniffing the source.
    pub mode: Option<Mode>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            base_font_size: DEFAULT_BASE_FONT_SIZE,
            recognition_threshold: DEFAULT_RECOGNITION_THRESHOLD,
            mode: None,
        }
    }
}

/// Fatal parse failures; everything else degrades by omission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("No root element found")]
    EmptyInput,
    #[error("No root element found")]
    NoRoot,
}

pub struct HtmlParser {
    options: ParseOptions,
    converter: AttributeConverter,
    ids: IdGenerator,
    css: String,
    mode: Mode,
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlParser {
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            converter: AttributeConverter::new(options.base_font_size),
            options,
            ids: IdGenerator::new(),
            css: String::new(),
            mode: Mode::Generic,
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses `html` into a module tree. Never panics on malformed input.
    pub fn parse(&mut self, html: &str) -> ParseResult {
        match self.try_parse(html) {
            Ok(document) => ParseResult::Success(document),
            Err(err) => {
                warn!(error = %err, "html parse failed");
                ParseResult::Failure {
                    error: err.to_string(),
                }
            }
        }
    }

    pub fn try_parse(&mut self, html: &str) -> Result<ParsedDocument, ParseError> {
        self.ids = IdGenerator::new();
        self.css.clear();
        self.mode = self.options.mode.unwrap_or_else(|| detect_mode(html));
        if diagnostics_enabled("mode") {
            info!(mode = %self.mode.as_str(), forced = self.options.mode.is_some(), "diagnostics: parse mode");
        }

        let document = build_document(html)?;
        let body = dom::find_body(&document).ok_or(ParseError::NoRoot)?;
        let content = match self.mode {
            Mode::Annotated => self.annotated_children(body),
            Mode::Generic => self.generic_document(body),
        };
        debug!(
            mode = %self.mode.as_str(),
            top_level = content.len(),
            modules = self.ids.count(),
            "parsed html document"
        );
        Ok(ParsedDocument {
            success: true,
            content,
            css: self.css.clone(),
            mode: self.mode,
            stats: Stats {
                modules_count: self.ids.count(),
            },
        })
    }

    pub fn generated_css(&self) -> &str {
        &self.css
    }

    pub fn module_count(&self) -> usize {
        self.ids.count()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn annotated_children(&mut self, container: ElementRef<'_>) -> Vec<Module> {
        content_children(container)
            .into_iter()
            .filter_map(|child| self.annotated_element(child))
            .collect()
    }

    fn annotated_element(&mut self, element: ElementRef<'_>) -> Option<Module> {
        match mapper::explicit_type(element).or_else(|| mapper::detect_module_type(element)) {
            Some(kind) => Some(self.typed_module(element, kind)),
            None => self.transparent_wrapper(element),
        }
    }

    /// An unresolved wrapper: one resolved child is promoted, several are
    /// wrapped in a section carrying the wrapper's styles.
    fn transparent_wrapper(&mut self, element: ElementRef<'_>) -> Option<Module> {
        let mut children = self.annotated_children(element);
        match children.len() {
            0 => None,
            1 => children.pop(),
            _ => {
                let attrs = self.style_attrs(element);
                Some(Module {
                    id: self.ids.next(ModuleType::Section),
                    kind: ModuleType::Section,
                    attrs,
                    children,
                })
            }
        }
    }

    /// Module of a known type: catalog fields, inline styles, variants and
    /// overrides, then children by child linkage or structural role.
    fn typed_module(&mut self, element: ElementRef<'_>, kind: ModuleType) -> Module {
        let id = self.ids.next(kind);
        let mut attrs = mapper::extract_attributes(element, kind);
        attrs.extend(self.style_attrs(element));
        let children = if let Some(child_kind) = catalog::child_type(kind) {
            self.linked_children(element, child_kind)
        } else {
            match kind {
                ModuleType::Section => self.detect_rows(content_children(element)),
                ModuleType::Row => {
                    let columns = self.detect_columns(element);
                    attrs.extend(row_layout(element));
                    reconcile_structure(&mut attrs, element, columns.len());
                    columns
                }
                ModuleType::Column => self.column_content(element),
                _ => Vec::new(),
            }
        };
        Module {
            id,
            kind,
            attrs: self.finish_attrs(element, attrs),
            children,
        }
    }

    /// Element children whose marker names `child_kind` or is absent.
    fn linked_children(&mut self, parent: ElementRef<'_>, child_kind: ModuleType) -> Vec<Module> {
        content_children(parent)
            .into_iter()
            .filter(|child| match dom::module_marker(*child) {
                Some(marker) => marker.eq_ignore_ascii_case(child_kind.as_str()),
                None => true,
            })
            .map(|child| {
                let id = self.ids.next(child_kind);
                let mut attrs = mapper::extract_attributes(child, child_kind);
                fill_structural_item(child, child_kind, &mut attrs);
                attrs.extend(self.style_attrs(child));
                Module {
                    id,
                    kind: child_kind,
                    attrs: self.finish_attrs(child, attrs),
                    children: Vec::new(),
                }
            })
            .collect()
    }

    fn generic_document(&mut self, body: ElementRef<'_>) -> Vec<Module> {
        content_children(body)
            .into_iter()
            .map(|child| {
                if layout::is_section_like(child) {
                    self.generic_section(child)
                } else {
                    let id = self.ids.next(ModuleType::Section);
                    let rows = self.detect_rows(vec![child]);
                    structure(id, ModuleType::Section, Attrs::new(), rows)
                }
            })
            .collect()
    }

    fn generic_section(&mut self, element: ElementRef<'_>) -> Module {
        let id = self.ids.next(ModuleType::Section);
        let mut attrs = self.style_attrs(element);
        attrs.insert(
            "fullwidth".into(),
            Value::Bool(layout::is_fullwidth_element(element)),
        );
        if let Some(width) = layout::detect_inner_width(element) {
            attrs.insert("inner_width".into(), Value::from(width));
        }
        if let Some(gap) = layout::detect_row_gap(element) {
            attrs.insert("row_gap".into(), Value::from(gap));
        }
        let rows = self.detect_rows(content_children(element));
        let attrs = self.finish_attrs(element, attrs);
        structure(id, ModuleType::Section, attrs, rows)
    }

    /// Row-like nodes become rows; runs of other nodes are gathered into a
    /// synthetic row with a single column.
    fn detect_rows(&mut self, candidates: Vec<ElementRef<'_>>) -> Vec<Module> {
        let mut rows = Vec::new();
        let mut pending = Vec::new();
        for child in candidates {
            if layout::is_row_like(child) {
                if diagnostics_enabled("layout") {
                    info!(tag = %dom::tag(child), "diagnostics: row detected");
                }
                if !pending.is_empty() {
                    rows.push(self.synthetic_row(std::mem::take(&mut pending)));
                }
                rows.push(self.generic_row(child));
            } else {
                pending.push(child);
            }
        }
        if !pending.is_empty() {
            rows.push(self.synthetic_row(pending));
        }
        if rows.is_empty() {
            rows.push(self.synthetic_row(Vec::new()));
        }
        rows
    }

    fn generic_row(&mut self, element: ElementRef<'_>) -> Module {
        if let Some(kind) = mapper::explicit_type(element) {
            return self.typed_module(element, kind);
        }
        let id = self.ids.next(ModuleType::Row);
        let mut attrs = self.style_attrs(element);
        attrs.extend(row_layout(element));
        let columns = self.detect_columns(element);
        reconcile_structure(&mut attrs, element, columns.len());
        let attrs = self.finish_attrs(element, attrs);
        structure(id, ModuleType::Row, attrs, columns)
    }

    fn synthetic_row(&mut self, elements: Vec<ElementRef<'_>>) -> Module {
        let id = self.ids.next(ModuleType::Row);
        let column = self.synthetic_column(elements);
        let mut attrs = Attrs::new();
        attrs.insert("column_structure".into(), Value::from("1"));
        structure(id, ModuleType::Row, attrs, vec![column])
    }

    /// Column-like children become columns; loose runs share a synthetic
    /// column. A row always ends up with at least one column and never more
    /// than twelve: the content of any further columns joins the last one.
    fn detect_columns(&mut self, row: ElementRef<'_>) -> Vec<Module> {
        let mut sources = Vec::new();
        let mut pending = Vec::new();
        for child in content_children(row) {
            if layout::is_column_like(child) {
                if diagnostics_enabled("layout") {
                    info!(tag = %dom::tag(child), "diagnostics: column detected");
                }
                if !pending.is_empty() {
                    sources.push(ColumnSource::Loose(std::mem::take(&mut pending)));
                }
                sources.push(ColumnSource::Element(child));
            } else {
                pending.push(child);
            }
        }
        if !pending.is_empty() {
            sources.push(ColumnSource::Loose(pending));
        }

        let overflow = if sources.len() > layout::MAX_COLUMNS {
            sources.split_off(layout::MAX_COLUMNS - 1)
        } else {
            Vec::new()
        };
        let mut columns: Vec<Module> = sources
            .into_iter()
            .map(|source| match source {
                ColumnSource::Element(element) => self.generic_column(element),
                ColumnSource::Loose(elements) => self.synthetic_column(elements),
            })
            .collect();
        if !overflow.is_empty() {
            debug!(folded = overflow.len(), "row wider than twelve columns");
            columns.push(self.folded_column(overflow));
        }
        if columns.is_empty() {
            columns.push(self.synthetic_column(Vec::new()));
        }
        columns
    }

    fn folded_column(&mut self, sources: Vec<ColumnSource<'_>>) -> Module {
        let id = self.ids.next(ModuleType::Column);
        let mut children = Vec::new();
        for source in sources {
            match source {
                ColumnSource::Element(element) => children.extend(self.column_content(element)),
                ColumnSource::Loose(elements) => children.extend(
                    elements
                        .into_iter()
                        .filter_map(|element| self.content_module(element)),
                ),
            }
        }
        structure(id, ModuleType::Column, Attrs::new(), children)
    }

    fn generic_column(&mut self, element: ElementRef<'_>) -> Module {
        if let Some(kind) = mapper::explicit_type(element) {
            return self.typed_module(element, kind);
        }
        let id = self.ids.next(ModuleType::Column);
        let attrs = self.style_attrs(element);
        let children = self.column_content(element);
        let attrs = self.finish_attrs(element, attrs);
        structure(id, ModuleType::Column, attrs, children)
    }

    fn synthetic_column(&mut self, elements: Vec<ElementRef<'_>>) -> Module {
        let id = self.ids.next(ModuleType::Column);
        let children = elements
            .into_iter()
            .filter_map(|element| self.content_module(element))
            .collect();
        structure(id, ModuleType::Column, Attrs::new(), children)
    }

    fn column_content(&mut self, column: ElementRef<'_>) -> Vec<Module> {
        let children = content_children(column);
        if children.is_empty() {
            return if layout::has_significant_content(column) {
                vec![self.text_module(dom::inner_markup(column), Attrs::new())]
            } else {
                Vec::new()
            };
        }
        children
            .into_iter()
            .filter_map(|child| self.content_module(child))
            .collect()
    }

    /// Explicit marker, then component recognition, then catalog mapping,
    /// then a text module when the element renders any text.
    fn content_module(&mut self, element: ElementRef<'_>) -> Option<Module> {
        if let Some(kind) = mapper::explicit_type(element) {
            return Some(self.typed_module(element, kind));
        }
        if dom::module_marker(element).is_none() {
            if let Some(found) = recognizer::recognize(element)
                .filter(|m| m.confidence > self.options.recognition_threshold)
            {
                return Some(self.recognized_module(element, found));
            }
        }
        if let Some(kind) = mapper::detect_module_type(element) {
            return Some(self.typed_module(element, kind));
        }
        if dom::text_content(element).is_empty() {
            return None;
        }
        let attrs = self.style_attrs(element);
        let mut module = self.text_module(dom::inner_markup(element), attrs);
        module.attrs = self.finish_attrs(element, module.attrs);
        Some(module)
    }

    fn recognized_module(&mut self, element: ElementRef<'_>, found: RecognitionMatch) -> Module {
        if diagnostics_enabled("recognize") {
            info!(kind = %found.kind, confidence = found.confidence, "diagnostics: component accepted");
        }
        let id = self.ids.next(found.kind);
        let mut attrs = found.data.attrs;
        attrs.extend(self.style_attrs(element));
        let children = found
            .data
            .children
            .into_iter()
            .map(|child| Module {
                id: self.ids.next(child.kind),
                kind: child.kind,
                attrs: child.attrs,
                children: Vec::new(),
            })
            .collect();
        Module {
            id,
            kind: found.kind,
            attrs: self.finish_attrs(element, attrs),
            children,
        }
    }

    fn text_module(&mut self, content: String, styles: Attrs) -> Module {
        let mut attrs = Attrs::new();
        attrs.insert("content".into(), Value::String(content));
        attrs.extend(styles);
        Module {
            id: self.ids.next(ModuleType::Text),
            kind: ModuleType::Text,
            attrs,
            children: Vec::new(),
        }
    }

    fn style_attrs(&self, element: ElementRef<'_>) -> Attrs {
        let styles = style::extract(element);
        if styles.is_empty() && styles.customs().next().is_none() {
            return Attrs::new();
        }
        self.converter.convert(&styles, "")
    }

    /// Responsive and hover variants, then author overrides, which win.
    fn finish_attrs(&self, element: ElementRef<'_>, mut attrs: Attrs) -> Attrs {
        attrs.extend(self.converter.convert_responsive(
            dom::attr(element, TABLET_STYLE),
            dom::attr(element, PHONE_STYLE),
        ));
        attrs.extend(self.converter.convert_hover(dom::attr(element, HOVER_STYLE)));
        attrs.extend(mapper::explicit_overrides(element));
        for key in TRANSIENT_KEYS {
            attrs.remove(*key);
        }
        attrs
    }
}

/// Convenience wrapper: a fresh parser, one parse.
pub fn parse_html(html: &str, options: &ParseOptions) -> ParseResult {
    HtmlParser::with_options(options.clone()).parse(html)
}

pub fn detect_mode(html: &str) -> Mode {
    if ANNOTATION.is_match(html) {
        Mode::Annotated
    } else {
        Mode::Generic
    }
}

fn build_document(html: &str) -> Result<Html, ParseError> {
    if html.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let document = if HTML_TAG.is_match(html) {
        Html::parse_document(html)
    } else {
        Html::parse_document(&format!(
            "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"></head><body>{html}</body></html>"
        ))
    };
    Ok(document)
}

fn content_children(element: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    dom::element_children(element)
        .into_iter()
        .filter(|child| !SKIPPED_TAGS.contains(&dom::tag(*child).as_str()))
        .collect()
}

fn structure(id: String, kind: ModuleType, attrs: Attrs, children: Vec<Module>) -> Module {
    Module {
        id,
        kind,
        attrs,
        children,
    }
}

fn row_layout(row: ElementRef<'_>) -> Attrs {
    let mut attrs = Attrs::new();
    if let Some(gap) = layout::detect_column_gap(row) {
        attrs.insert("column_gap".into(), Value::from(gap));
    }
    if let Some(align) = layout::detect_vertical_align(row) {
        attrs.insert("vertical_align".into(), Value::String(align));
    }
    attrs
}

enum ColumnSource<'a> {
    Element(ElementRef<'a>),
    Loose(Vec<ElementRef<'a>>),
}

/// Keeps `column_structure` at one token per produced column.
fn reconcile_structure(attrs: &mut Attrs, row: ElementRef<'_>, columns: usize) {
    let tokens = |s: &str| s.split(',').filter(|t| !t.trim().is_empty()).count();
    let current = attrs
        .get("column_structure")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| layout::detect_column_structure(row));
    let structure = if tokens(&current) == columns {
        current
    } else {
        layout::equal_columns(columns)
    };
    attrs.insert("column_structure".into(), Value::String(structure));
}

/// Title/content for item modules whose markup carries no item classes.
fn fill_structural_item(item: ElementRef<'_>, kind: ModuleType, attrs: &mut Attrs) {
    let title_key = match kind {
        ModuleType::AccordionItem | ModuleType::TabsItem => "title",
        ModuleType::SliderItem => "heading",
        _ => return,
    };
    let (headers, contents) = match kind {
        ModuleType::TabsItem => (&["tab-title"][..], recognizer::TAB_PANEL_CLASSES),
        _ => (recognizer::ACCORDION_HEADERS, recognizer::ACCORDION_CONTENTS),
    };
    if let Some((header, content)) = recognizer::header_content_pair(item, headers, contents) {
        if !attrs.contains_key(title_key) {
            let title = dom::text_content(header);
            if !title.is_empty() {
                attrs.insert(title_key.into(), Value::String(title));
            }
        }
        if !attrs.contains_key("content") {
            attrs.insert("content".into(), Value::String(dom::inner_markup(content)));
        }
    } else if !attrs.contains_key("content") && kind == ModuleType::TabsItem {
        attrs.insert("content".into(), Value::String(dom::inner_markup(item)));
    }
    if kind == ModuleType::AccordionItem && !attrs.contains_key("open") {
        let open = recognizer::OPEN_CLASSES.iter().any(|c| dom::has_class(item, c));
        attrs.insert("open".into(), Value::Bool(open));
    }
}
