//! Layout directives: headers, group panels and grid rows.
//!
//! A [`Layout`] is an ordered list of [`LayoutDirective`]s. Directive order is
//! rendering order. Layouts can be built in code or loaded from YAML/JSON records
//! keyed by `type`, with `cols`, `col_width` and `col_limit` for rows:
//!
//! ```rust
//! use layoutform::{Layout, LayoutDirective};
//!
//! let layout = Layout::from_yaml(r#"
//! - type: header
//!   name: Contact
//! - type: row
//!   cols: [first_name, last_name]
//!   col_width: 6
//! "#).unwrap();
//!
//! assert_eq!(layout.len(), 2);
//! assert!(matches!(layout.directives()[1], LayoutDirective::Row { column_width: 6, .. }));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// One layout instruction.
///
/// Group start and end directives are expected to balance. That is the
/// caller's responsibility; unbalanced groups produce unbalanced markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutDirective {
    /// A section heading with an optional description.
    Header {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    /// Opens a `well` panel.
    GroupStart {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    /// Closes the innermost panel.
    GroupEnd,
    /// A grid row. Columns name fields; names that do not resolve are skipped.
    Row {
        #[serde(rename = "cols", alias = "columns")]
        columns: Vec<String>,
        #[serde(rename = "col_width", alias = "column_width")]
        column_width: u32,
        /// Wrap into a new row after this many columns.
        #[serde(
            rename = "col_limit",
            alias = "column_limit",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        column_limit: Option<usize>,
    },
}

impl LayoutDirective {
    pub fn header(name: impl Into<String>) -> Self {
        LayoutDirective::Header {
            name: Some(name.into()),
            description: None,
        }
    }

    pub fn group(name: impl Into<String>) -> Self {
        LayoutDirective::GroupStart {
            name: Some(name.into()),
            description: None,
        }
    }

    pub fn row<I, S>(columns: I, column_width: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LayoutDirective::Row {
            columns: columns.into_iter().map(Into::into).collect(),
            column_width,
            column_limit: None,
        }
    }

    /// Sets the description of a header or group start. Other directives are
    /// returned unchanged.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            LayoutDirective::Header { description, .. }
            | LayoutDirective::GroupStart { description, .. } => *description = Some(text.into()),
            _ => {}
        }
        self
    }

    /// Sets the column limit of a row. Other directives are returned unchanged.
    pub fn with_column_limit(mut self, limit: usize) -> Self {
        if let LayoutDirective::Row { column_limit, .. } = &mut self {
            *column_limit = Some(limit);
        }
        self
    }
}

/// An ordered list of layout directives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    directives: Vec<LayoutDirective>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a directive.
    pub fn push(mut self, directive: LayoutDirective) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn header(self, name: impl Into<String>) -> Self {
        self.push(LayoutDirective::header(name))
    }

    pub fn group_start(self, name: impl Into<String>) -> Self {
        self.push(LayoutDirective::group(name))
    }

    pub fn group_end(self) -> Self {
        self.push(LayoutDirective::GroupEnd)
    }

    pub fn row<I, S>(self, columns: I, column_width: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(LayoutDirective::row(columns, column_width))
    }

    pub fn directives(&self) -> &[LayoutDirective] {
        &self.directives
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Parses a layout from a YAML sequence of directive records.
    pub fn from_yaml(source: &str) -> Result<Self, RenderError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a layout from a JSON array of directive records.
    pub fn from_json(source: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(source)?)
    }
}

impl From<Vec<LayoutDirective>> for Layout {
    fn from(directives: Vec<LayoutDirective>) -> Self {
        Self { directives }
    }
}

impl FromIterator<LayoutDirective> for Layout {
    fn from_iter<I: IntoIterator<Item = LayoutDirective>>(iter: I) -> Self {
        Self {
            directives: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_all_variants() {
        let layout = Layout::from_json(
            r#"[
                {"type": "header", "name": "Account", "description": "Login details"},
                {"type": "group_start"},
                {"type": "row", "cols": ["a", "b", "c"], "col_width": 4, "col_limit": 2},
                {"type": "group_end"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            layout.directives(),
            &[
                LayoutDirective::header("Account").with_description("Login details"),
                LayoutDirective::GroupStart {
                    name: None,
                    description: None
                },
                LayoutDirective::row(["a", "b", "c"], 4).with_column_limit(2),
                LayoutDirective::GroupEnd,
            ]
        );
    }

    #[test]
    fn test_long_key_aliases_accepted() {
        let layout =
            Layout::from_json(r#"[{"type": "row", "columns": ["a"], "column_width": 12}]"#).unwrap();
        assert_eq!(layout.directives(), &[LayoutDirective::row(["a"], 12)]);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result = Layout::from_json(r#"[{"type": "sidebar"}]"#);
        assert!(matches!(result, Err(RenderError::SerializationError(_))));
    }

    #[test]
    fn test_builder_matches_collected() {
        let built = Layout::new().header("H").row(["x"], 6).group_start("G").group_end();
        let collected: Layout = vec![
            LayoutDirective::header("H"),
            LayoutDirective::row(["x"], 6),
            LayoutDirective::group("G"),
            LayoutDirective::GroupEnd,
        ]
        .into_iter()
        .collect();
        assert_eq!(built, collected);
        assert_eq!(built.len(), 4);
    }

    #[test]
    fn test_with_description_ignores_rows() {
        let row = LayoutDirective::row(["x"], 6).with_description("ignored");
        assert_eq!(row, LayoutDirective::row(["x"], 6));
    }
}
