//! Widgets: the concrete input controls a field renders as.
//!
//! A [`Widget`] knows its [`WidgetKind`], an attribute map and, for choice
//! widgets, an ordered list of [`Choice`]s. It renders its own HTML tag; the
//! field renderer decides what goes around it.
//!
//! Attribute values and submitted values are escaped. Choice labels are
//! trusted markup and are inserted as given.

use std::collections::BTreeMap;

use crate::render::markup::{escape, join_classes};

/// Widget attributes, kept ordered so rendering is deterministic.
pub type Attrs = BTreeMap<String, String>;

/// Element used by widgets that are not one of the specially laid out kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// `<input type='…'>` with the given type (`text`, `email`, `number`, …).
    Input(String),
    /// `<select>` over the widget's choices.
    Select,
    /// `<textarea>`.
    Textarea,
}

/// The kind of a widget, which drives the field renderer's branching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    /// A single checkbox.
    Checkbox,
    /// A list of checkboxes over the widget's choices.
    MultiCheckbox,
    /// A radio group over the widget's choices.
    Radio,
    /// A file picker.
    File,
    /// Anything else.
    Other(Control),
}

/// One option of a choice widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// An input control together with its attributes and choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    kind: WidgetKind,
    attrs: Attrs,
    choices: Vec<Choice>,
}

impl Widget {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            attrs: Attrs::new(),
            choices: Vec::new(),
        }
    }

    /// A text input.
    pub fn text() -> Self {
        Self::input("text")
    }

    /// An `<input>` of the given type.
    pub fn input(input_type: impl Into<String>) -> Self {
        Self::new(WidgetKind::Other(Control::Input(input_type.into())))
    }

    /// Sets an attribute, replacing any previous value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Appends a choice.
    pub fn choice(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.choices.push(Choice::new(value, label));
        self
    }

    /// Replaces the choices.
    pub fn choices<I, V, L>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        self.choices = choices
            .into_iter()
            .map(|(value, label)| Choice::new(value, label))
            .collect();
        self
    }

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn get_choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Returns a copy of the attributes with `class` containing `token`.
    ///
    /// The token is appended to any existing classes and is never duplicated,
    /// so normalizing an already normalized map yields the same map.
    pub fn attrs_with_class(&self, token: &str) -> Attrs {
        let mut attrs = self.attrs.clone();
        let existing = attrs.get("class").map(String::as_str).unwrap_or("");
        if !existing.split_whitespace().any(|class| class == token) {
            let merged = join_classes(&[existing, token]);
            attrs.insert("class".to_string(), merged);
        }
        attrs
    }

    /// Renders the whole widget with the given attributes.
    ///
    /// `values` holds the current value(s): the bound data when present,
    /// otherwise the initial values.
    pub fn render(&self, name: &str, id: Option<&str>, values: &[String], attrs: &Attrs) -> String {
        let extra = render_attrs(attrs);
        match &self.kind {
            WidgetKind::Checkbox => format!(
                "<input type='checkbox' name='{}'{}{}{}>",
                escape(name),
                id_attr(id),
                extra,
                checked_attr(is_checked(values))
            ),
            WidgetKind::File => format!(
                "<input type='file' name='{}'{}{}>",
                escape(name),
                id_attr(id),
                extra
            ),
            WidgetKind::Radio | WidgetKind::MultiCheckbox => {
                let mut lines = vec![format!("<ul{}>", id_attr(id))];
                for (index, choice) in self.choices.iter().enumerate() {
                    let choice_id = id.map(|id| format!("{}_{}", id, index));
                    let for_attr = choice_id
                        .as_deref()
                        .map(|id| format!(" for='{}'", escape(id)))
                        .unwrap_or_default();
                    lines.push(format!(
                        "<li><label{}>{} {}</label></li>",
                        for_attr,
                        self.render_choice(index, name, id, values, attrs),
                        choice.label
                    ));
                }
                lines.push("</ul>".to_string());
                lines.join("\n")
            }
            WidgetKind::Other(Control::Input(input_type)) => format!(
                "<input type='{}' name='{}'{}{}{}>",
                escape(input_type),
                escape(name),
                value_attr(values),
                id_attr(id),
                extra
            ),
            WidgetKind::Other(Control::Select) => {
                let mut lines = vec![format!("<select name='{}'{}{}>", escape(name), id_attr(id), extra)];
                for choice in &self.choices {
                    lines.push(format!(
                        "<option value='{}'{}>{}</option>",
                        escape(&choice.value),
                        if values.contains(&choice.value) { " selected" } else { "" },
                        choice.label
                    ));
                }
                lines.push("</select>".to_string());
                lines.join("\n")
            }
            WidgetKind::Other(Control::Textarea) => format!(
                "<textarea name='{}'{}{}>{}</textarea>",
                escape(name),
                id_attr(id),
                extra,
                escape(values.first().map(String::as_str).unwrap_or(""))
            ),
        }
    }

    /// Renders the input tag for a single choice of a radio or checkbox list.
    ///
    /// Returns an empty string when `index` is out of range.
    pub fn render_choice(
        &self,
        index: usize,
        name: &str,
        id: Option<&str>,
        values: &[String],
        attrs: &Attrs,
    ) -> String {
        let Some(choice) = self.choices.get(index) else {
            return String::new();
        };
        let input_type = match self.kind {
            WidgetKind::MultiCheckbox => "checkbox",
            _ => "radio",
        };
        let choice_id = id.map(|id| format!("{}_{}", id, index));
        format!(
            "<input type='{}' name='{}' value='{}'{}{}{}>",
            input_type,
            escape(name),
            escape(&choice.value),
            id_attr(choice_id.as_deref()),
            render_attrs(attrs),
            checked_attr(values.contains(&choice.value))
        )
    }

    /// Renders a hidden input carrying the current value.
    pub fn render_hidden(name: &str, id: Option<&str>, values: &[String]) -> String {
        format!(
            "<input type='hidden' name='{}'{}{}>",
            escape(name),
            value_attr(values),
            id_attr(id)
        )
    }
}

fn render_attrs(attrs: &Attrs) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(" {}='{}'", escape(name), escape(value)))
        .collect()
}

fn id_attr(id: Option<&str>) -> String {
    id.map(|id| format!(" id='{}'", escape(id)))
        .unwrap_or_default()
}

fn value_attr(values: &[String]) -> String {
    match values.first() {
        Some(value) if !value.is_empty() => format!(" value='{}'", escape(value)),
        _ => String::new(),
    }
}

fn checked_attr(checked: bool) -> &'static str {
    if checked {
        " checked"
    } else {
        ""
    }
}

fn is_checked(values: &[String]) -> bool {
    values
        .first()
        .map(|value| !matches!(value.as_str(), "" | "0" | "false" | "False" | "off"))
        .unwrap_or(false)
}
