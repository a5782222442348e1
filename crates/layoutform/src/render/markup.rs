//! Small markup helpers shared by the widget, field and form renderers.

use minijinja::HtmlEscape;

/// Escapes text for use inside an attribute value or element body.
pub(crate) fn escape(text: &str) -> String {
    HtmlEscape(text).to_string()
}

/// Joins the non-empty class tokens with single spaces.
pub(crate) fn join_classes(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|class| class.trim())
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders ` class='…'`, or nothing when every token is empty.
pub(crate) fn class_attr(classes: &[&str]) -> String {
    let joined = join_classes(classes);
    if joined.is_empty() {
        String::new()
    } else {
        format!(" class='{}'", joined)
    }
}

/// Opens a `div` with the given classes.
pub(crate) fn open_div(classes: &[&str]) -> String {
    format!("<div{}>", class_attr(classes))
}

pub(crate) const CLOSE_DIV: &str = "</div>";

/// Dismissible danger banner opener used for form-level messages.
pub(crate) const ALERT_OPEN: &str =
    "<div class='alert alert-danger'><a class='close' data-dismiss='alert'>&times;</a>";

/// Markup fragments collected line by line and joined with newlines.
#[derive(Debug, Default)]
pub(crate) struct Lines(Vec<String>);

impl Lines {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    pub(crate) fn finish(self) -> String {
        self.0.join("\n")
    }
}
