//! Renderer configuration.
//!
//! [`RenderOptions`] holds the class names and grid defaults that apply when a
//! form does not override them. Every field has a default, so partial YAML or
//! JSON documents are accepted:
//!
//! ```rust
//! use layoutform::RenderOptions;
//!
//! let options = RenderOptions::from_yaml("error_css_class: is-invalid").unwrap();
//! assert_eq!(options.error_css_class, "is-invalid");
//! assert_eq!(options.required_css_class, "required");
//! assert_eq!(options.column_limit, 1000);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Default number of columns after which a row wraps.
///
/// Large enough that rows without an explicit limit never wrap in practice.
pub const DEFAULT_COLUMN_LIMIT: usize = 1000;

/// Default class added to labels of required fields.
pub const DEFAULT_REQUIRED_CSS_CLASS: &str = "required";

/// Renderer-wide defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Class added to labels of required fields.
    pub required_css_class: String,
    /// Class added to every error message block.
    pub error_css_class: String,
    /// Columns per row when a row directive does not set its own limit.
    pub column_limit: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            required_css_class: DEFAULT_REQUIRED_CSS_CLASS.to_string(),
            error_css_class: String::new(),
            column_limit: DEFAULT_COLUMN_LIMIT,
        }
    }
}

impl RenderOptions {
    /// Parses options from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, RenderError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses options from a JSON document.
    pub fn from_json(source: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn required_css_class(mut self, class: impl Into<String>) -> Self {
        self.required_css_class = class.into();
        self
    }

    pub fn error_css_class(mut self, class: impl Into<String>) -> Self {
        self.error_css_class = class.into();
        self
    }

    pub fn column_limit(mut self, limit: usize) -> Self {
        self.column_limit = limit;
        self
    }
}
