//! Forms: ordered fields plus form-level state.

use std::collections::BTreeSet;

use super::directive::Layout;
use super::field::Field;

/// An ordered set of fields with form-level errors and optional layout.
///
/// ```rust
/// use layoutform::{Field, Form, Layout};
///
/// let form = Form::new()
///     .field(Field::text("first_name"))
///     .field(Field::text("last_name"))
///     .field(Field::hidden("token"))
///     .layout(Layout::new().row(["first_name", "last_name"], 6));
///
/// assert_eq!(form.visible_fields().count(), 2);
/// assert_eq!(form.hidden_fields().count(), 1);
/// assert!(form.get("last_name").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<Field>,
    non_field_errors: Vec<String>,
    layout: Option<Layout>,
    printed_fields: Option<BTreeSet<String>>,
    required_css_class: Option<String>,
    error_css_class: Option<String>,
    prefix: Option<String>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field. A field with the same name replaces the earlier one in place.
    pub fn field(mut self, mut field: Field) -> Self {
        field.apply_prefix(self.prefix.as_deref());
        field.set_required_css_class(self.required_css_class.as_deref());
        field.set_error_css_class(self.error_css_class.as_deref());
        match self.fields.iter_mut().find(|f| f.name() == field.name()) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn non_field_error(mut self, message: impl Into<String>) -> Self {
        self.non_field_errors.push(message.into());
        self
    }

    pub fn layout(mut self, layout: impl Into<Layout>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    /// Restricts the fields emitted by print-mode layout rows.
    pub fn printed_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.printed_fields = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Overrides the renderer's required-label class for this form.
    pub fn required_css_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        for field in &mut self.fields {
            field.set_required_css_class(Some(&class));
        }
        self.required_css_class = Some(class);
        self
    }

    /// Overrides the renderer's error-message class for this form.
    pub fn error_css_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        for field in &mut self.fields {
            field.set_error_css_class(Some(&class));
        }
        self.error_css_class = Some(class);
        self
    }

    /// Prefixes every field's HTML name and id with `prefix-`.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        for field in &mut self.fields {
            field.apply_prefix(Some(&prefix));
        }
        self.prefix = Some(prefix);
        self
    }

    /// Sets the initial value of an existing field. Unknown names are ignored.
    pub fn initial(mut self, name: &str, value: impl Into<String>) -> Self {
        if let Some(index) = self.fields.iter().position(|f| f.name() == name) {
            let field = self.fields.remove(index);
            self.fields.insert(index, field.initial(value));
        }
        self
    }

    /// Binds a submitted value to an existing field. Unknown names are ignored.
    pub fn data(mut self, name: &str, value: impl Into<String>) -> Self {
        if let Some(index) = self.fields.iter().position(|f| f.name() == name) {
            let field = self.fields.remove(index);
            self.fields.insert(index, field.data(value));
        }
        self
    }

    /// Looks a field up by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn visible_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.is_hidden())
    }

    pub fn hidden_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.is_hidden())
    }

    pub fn get_non_field_errors(&self) -> &[String] {
        &self.non_field_errors
    }

    /// Number of error entries: one per field with errors, plus one when
    /// form-level errors exist.
    pub fn error_count(&self) -> usize {
        let field_errors = self.fields.iter().filter(|field| field.has_errors()).count();
        field_errors + usize::from(!self.non_field_errors.is_empty())
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// The custom layout, when one is declared.
    pub fn get_layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// The printed-fields set, when one is declared.
    pub fn get_printed_fields(&self) -> Option<&BTreeSet<String>> {
        self.printed_fields.as_ref()
    }

    pub fn get_required_css_class(&self) -> Option<&str> {
        self.required_css_class.as_deref()
    }

    pub fn get_error_css_class(&self) -> Option<&str> {
        self.error_css_class.as_deref()
    }

    pub fn get_prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// True when any field carries non-empty initial data.
    pub fn has_initial(&self) -> bool {
        self.fields.iter().any(Field::has_initial)
    }

    /// True when any field's bound data differs from its initial data.
    pub fn has_changed(&self) -> bool {
        self.fields.iter().any(Field::has_changed)
    }

    /// Names of the fields whose data changed, in declaration order.
    pub fn changed_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.has_changed())
            .map(Field::name)
            .collect()
    }
}
