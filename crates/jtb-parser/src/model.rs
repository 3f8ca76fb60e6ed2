use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::ModuleType;

/// Attribute map of one module. Keys may carry `__tablet`, `__phone` or
/// `__hover` suffixes.
pub type Attrs = Map<String, Value>;

pub const SUFFIX_TABLET: &str = "__tablet";
pub const SUFFIX_PHONE: &str = "__phone";
pub const SUFFIX_HOVER: &str = "__hover";

/// One node of the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ModuleType,
    #[serde(default)]
    pub attrs: Attrs,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Module>,
}

impl Module {
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }

    /// Total number of modules in this subtree, self included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Module::count).sum::<usize>()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "jtb_annotated")]
    Annotated,
    #[serde(rename = "generic")]
    Generic,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Annotated => "jtb_annotated",
            Mode::Generic => "generic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "jtb_annotated" | "annotated" => Some(Mode::Annotated),
            "generic" => Some(Mode::Generic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub modules_count: usize,
}

/// Successful parse output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub success: bool,
    pub content: Vec<Module>,
    pub css: String,
    pub mode: Mode,
    pub stats: Stats,
}

/// The only externally visible result of a parse run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParseResult {
    Success(ParsedDocument),
    Failure { error: String },
}

impl ParseResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success(_))
    }

    pub fn document(&self) -> Option<&ParsedDocument> {
        match self {
            ParseResult::Success(doc) => Some(doc),
            ParseResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ParseResult::Success(_) => None,
            ParseResult::Failure { error } => Some(error),
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Integral floats become JSON integers; others keep up to four decimals.
pub fn number(n: f64) -> Value {
    let rounded = (n * 10_000.0).round() / 10_000.0;
    if rounded.fract() == 0.0 && rounded.abs() < 9.0e15 {
        Value::from(rounded as i64)
    } else {
        Value::from(rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn module_serializes_without_empty_children() {
        let module = Module {
            id: "text_x_1".into(),
            kind: ModuleType::Text,
            attrs: json!({"content": "Hi"}).as_object().cloned().unwrap(),
            children: Vec::new(),
        };
        let value = serde_json::to_value(&module).unwrap();
        assert_eq!(
            value,
            json!({"id": "text_x_1", "type": "text", "attrs": {"content": "Hi"}})
        );
    }

    #[test]
    fn result_shapes() {
        let failure = ParseResult::Failure {
            error: "No root element found".into(),
        };
        assert_eq!(failure.to_value(), json!({"error": "No root element found"}));

        let success = ParseResult::Success(ParsedDocument {
            success: true,
            content: Vec::new(),
            css: String::new(),
            mode: Mode::Generic,
            stats: Stats { modules_count: 0 },
        });
        assert_eq!(
            success.to_value(),
            json!({"success": true, "content": [], "css": "", "mode": "generic", "stats": {"modules_count": 0}})
        );
    }

    #[test]
    fn numbers_prefer_integers() {
        assert_eq!(number(50.0), json!(50));
        assert_eq!(number(30.000000000000004), json!(30));
        assert_eq!(number(1.5), json!(1.5));
    }
}
