//! JTB transpiler configuration
//!
//! Settings are read from `jtb.toml` and may be overridden by `JTB_*`
//! environment variables.

use std::path::{Path, PathBuf};

use jtb_parser::{Mode, ParseOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "jtb.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown parse mode `{0}` (expected `jtb_annotated` or `generic`)")]
    UnknownMode(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JtbConfig {
    /// Conversion settings
    pub parser: ParserConfig,
    /// Output formatting
    pub output: OutputConfig,
}

/// Conversion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Pixel size of one `em`/`rem`
    pub base_font_size: i64,
    /// Confidence a recognized component must exceed (0-100)
    pub recognition_threshold: u32,
    /// Force `jtb_annotated` or `generic` instead of sniffing the input
    pub mode: Option<String>,
    /// Comma-separated diagnostic categories (`mode`, `layout`, `mapper`, `recognize`, `all`)
    pub diagnostics: Option<String>,
}

/// Output formatting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print the JSON result
    pub pretty: bool,
    /// Validate the result against the bundled JSON schema before printing
    pub validate: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        let defaults = ParseOptions::default();
        Self {
            base_font_size: defaults.base_font_size,
            recognition_threshold: defaults.recognition_threshold,
            mode: None,
            diagnostics: None,
        }
    }
}

impl ParserConfig {
    /// Converts the settings into parser options.
    pub fn parse_options(&self) -> Result<ParseOptions, ConfigError> {
        let mode = match self.mode.as_deref() {
            None => None,
            Some(name) => {
                Some(Mode::from_name(name).ok_or_else(|| ConfigError::UnknownMode(name.to_string()))?)
            }
        };
        Ok(ParseOptions {
            base_font_size: self.base_font_size.max(1),
            recognition_threshold: self.recognition_threshold.min(100),
            mode,
        })
    }
}

fn env_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl JtbConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `jtb.toml` from the current directory, or defaults if it is
    /// missing or unreadable
    pub fn load_or_default() -> Self {
        Self::load_from_file(DEFAULT_CONFIG_FILE).unwrap_or_default()
    }

    /// Environment variables take precedence over file values.
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    fn merge_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("JTB_BASE_FONT_SIZE") {
            if let Ok(size) = val.trim().parse::<i64>() {
                self.parser.base_font_size = size;
            }
        }
        if let Some(val) = lookup("JTB_RECOGNITION_THRESHOLD") {
            if let Ok(threshold) = val.trim().parse::<u32>() {
                self.parser.recognition_threshold = threshold;
            }
        }
        if let Some(mode) = lookup("JTB_MODE") {
            self.parser.mode = Some(mode);
        }
        if let Some(diagnostics) = lookup("JTB_DIAGNOSTICS") {
            self.parser.diagnostics = Some(diagnostics);
        }
        if let Some(val) = lookup("JTB_PRETTY") {
            self.output.pretty = env_flag(&val);
        }
        if let Some(val) = lookup("JTB_VALIDATE") {
            self.output.validate = env_flag(&val);
        }
    }

    /// Load from `jtb.toml` (or defaults), then apply environment overrides.
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
