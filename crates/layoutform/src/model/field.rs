//! Form fields.

use super::widget::{Control, Widget, WidgetKind};

/// A named input descriptor owned by a [`Form`](super::Form).
///
/// Fields are built with the constructors for each widget kind and configured
/// through the builder methods:
///
/// ```rust
/// use layoutform::Field;
///
/// let field = Field::email("contact_email")
///     .required(true)
///     .help_text("We never share it.")
///     .error("Enter a valid email address.");
///
/// assert_eq!(field.label(), "Contact email");
/// assert_eq!(field.auto_id(), Some("id_contact_email"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    html_name: String,
    label: String,
    widget: Widget,
    required: bool,
    errors: Vec<String>,
    help_text: Option<String>,
    auto_id: Option<String>,
    hidden: bool,
    initial: Vec<String>,
    data: Option<Vec<String>>,
    explicit_id: bool,
    required_css_class: Option<String>,
    error_css_class: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, widget: Widget) -> Self {
        let name = name.into();
        Self {
            label: pretty_name(&name),
            auto_id: Some(format!("id_{}", name)),
            html_name: name.clone(),
            name,
            widget,
            required: false,
            errors: Vec::new(),
            help_text: None,
            hidden: false,
            initial: Vec::new(),
            data: None,
            explicit_id: false,
            required_css_class: None,
            error_css_class: None,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, Widget::text())
    }

    pub fn email(name: impl Into<String>) -> Self {
        Self::new(name, Widget::input("email"))
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, Widget::input("number"))
    }

    pub fn textarea(name: impl Into<String>) -> Self {
        Self::new(name, Widget::new(WidgetKind::Other(Control::Textarea)))
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, Widget::new(WidgetKind::Checkbox))
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, Widget::new(WidgetKind::File))
    }

    pub fn select<I, V, L>(name: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        Self::new(name, Widget::new(WidgetKind::Other(Control::Select)).choices(choices))
    }

    pub fn radio<I, V, L>(name: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        Self::new(name, Widget::new(WidgetKind::Radio).choices(choices))
    }

    pub fn multi_checkbox<I, V, L>(name: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        Self::new(name, Widget::new(WidgetKind::MultiCheckbox).choices(choices))
    }

    /// A hidden field. Hidden fields render as a bare hidden input and are
    /// never placed in layout rows.
    pub fn hidden(name: impl Into<String>) -> Self {
        let mut field = Self::new(name, Widget::input("hidden"));
        field.hidden = true;
        field
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self
    }

    pub fn errors<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors = messages.into_iter().map(Into::into).collect();
        self
    }

    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Removes the generated id. The field is then rendered without a label.
    pub fn anonymous(mut self) -> Self {
        self.auto_id = None;
        self
    }

    /// Sets a fixed id. Form and formset prefixes leave it untouched.
    pub fn with_auto_id(mut self, id: impl Into<String>) -> Self {
        self.auto_id = Some(id.into());
        self.explicit_id = true;
        self
    }

    pub fn with_widget(mut self, widget: Widget) -> Self {
        self.widget = widget;
        self
    }

    pub fn initial(mut self, value: impl Into<String>) -> Self {
        self.initial = vec![value.into()];
        self
    }

    pub fn initial_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial = values.into_iter().map(Into::into).collect();
        self
    }

    /// Binds submitted data to the field.
    pub fn data(mut self, value: impl Into<String>) -> Self {
        self.data = Some(vec![value.into()]);
        self
    }

    pub fn data_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name used in the rendered markup, including any form prefix.
    pub fn html_name(&self) -> &str {
        &self.html_name
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn get_errors(&self) -> &[String] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn get_help_text(&self) -> Option<&str> {
        self.help_text.as_deref().filter(|text| !text.is_empty())
    }

    pub fn auto_id(&self) -> Option<&str> {
        self.auto_id.as_deref()
    }

    /// Required-label class inherited from the owning form.
    pub fn get_required_css_class(&self) -> Option<&str> {
        self.required_css_class.as_deref()
    }

    /// Error-message class inherited from the owning form.
    pub fn get_error_css_class(&self) -> Option<&str> {
        self.error_css_class.as_deref()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn get_initial(&self) -> &[String] {
        &self.initial
    }

    pub fn has_initial(&self) -> bool {
        self.initial.iter().any(|value| !value.is_empty())
    }

    /// The values shown in the widget: bound data when present, else initial.
    pub fn value(&self) -> &[String] {
        self.data.as_deref().unwrap_or(&self.initial)
    }

    /// True when bound data differs from the initial values.
    ///
    /// Empty strings compare equal to missing values.
    pub fn has_changed(&self) -> bool {
        match &self.data {
            Some(data) => normalized(data) != normalized(&self.initial),
            None => false,
        }
    }

    /// Renders the widget with its own attributes.
    pub fn render_widget(&self) -> String {
        self.render_widget_with(self.widget.attrs())
    }

    /// Renders the widget with a substituted attribute map.
    pub fn render_widget_with(&self, attrs: &super::Attrs) -> String {
        if self.hidden {
            Widget::render_hidden(&self.html_name, self.auto_id(), self.value())
        } else {
            self.widget
                .render(&self.html_name, self.auto_id(), self.value(), attrs)
        }
    }

    /// Renders the input tag of the choice at `index` (radio and checkbox lists).
    pub fn render_choice(&self, index: usize) -> String {
        self.widget.render_choice(
            index,
            &self.html_name,
            self.auto_id(),
            self.value(),
            self.widget.attrs(),
        )
    }

    /// Applies a form prefix to the HTML name and to a generated id.
    pub(crate) fn apply_prefix(&mut self, prefix: Option<&str>) {
        let Some(prefix) = prefix else {
            return;
        };
        self.html_name = format!("{}-{}", prefix, self.name);
        if self.auto_id.is_some() && !self.explicit_id {
            self.auto_id = Some(format!("id_{}", self.html_name));
        }
    }

    pub(crate) fn set_required_css_class(&mut self, class: Option<&str>) {
        self.required_css_class = class.map(str::to_string);
    }

    pub(crate) fn set_error_css_class(&mut self, class: Option<&str>) {
        self.error_css_class = class.map(str::to_string);
    }
}

fn normalized(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .collect()
}

/// Turns `first_name` into `First name`.
pub fn pretty_name(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
