//! HTML to page-builder module tree conversion.
//!
//! [`parse_html`] turns a markup string into a [`ParseResult`]: a tree of
//! typed modules (section → row → column → module) with normalized
//! attribute maps, responsive and hover variants, and recognized composite
//! widgets.

pub mod attributes;
pub mod catalog;
pub mod diagnostics;
pub mod dom;
pub mod layout;
pub mod mapper;
pub mod model;
pub mod parser;
pub mod recognizer;
pub mod schema;
pub mod selector;
pub mod style;

pub use attributes::AttributeConverter;
pub use catalog::{Category, ModuleDefinition, ModuleType};
pub use diagnostics::init_diagnostics;
pub use model::{Attrs, Mode, Module, ParseResult, ParsedDocument, Stats};
pub use parser::{HtmlParser, ParseError, ParseOptions, parse_html};
pub use recognizer::{RecognitionMatch, recognize};
pub use style::StyleMap;
