//! Formsets: repeated sub-forms with management metadata.

use super::form::Form;
use super::widget::Widget;

/// Prefix used when a formset is created without one.
pub const DEFAULT_FORMSET_PREFIX: &str = "form";

/// Upper bound on forms reported to the client when none is configured.
pub const DEFAULT_MAX_NUM_FORMS: usize = 1000;

/// An ordered collection of structurally identical forms.
///
/// Each added form is prefixed with `<prefix>-<index>` so field names stay
/// unique across the collection.
///
/// ```rust
/// use layoutform::{Field, Form, Formset};
///
/// let formset = Formset::new("items")
///     .form(Form::new().field(Field::text("sku")).initial("sku", "A-1"))
///     .form(Form::new().field(Field::text("sku")))
///     .initial_forms(1);
///
/// assert_eq!(formset.len(), 2);
/// assert_eq!(formset.forms()[1].get("sku").unwrap().html_name(), "items-1-sku");
/// assert_eq!(formset.management_form().total_forms, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formset {
    prefix: String,
    forms: Vec<Form>,
    initial_forms: usize,
    min_num: usize,
    max_num: usize,
    non_form_errors: Vec<String>,
}

impl Default for Formset {
    fn default() -> Self {
        Self::new(DEFAULT_FORMSET_PREFIX)
    }
}

impl Formset {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            forms: Vec::new(),
            initial_forms: 0,
            min_num: 0,
            max_num: DEFAULT_MAX_NUM_FORMS,
            non_form_errors: Vec::new(),
        }
    }

    /// Appends a form, prefixing it with this formset's prefix and its index.
    pub fn form(mut self, form: Form) -> Self {
        let prefix = format!("{}-{}", self.prefix, self.forms.len());
        self.forms.push(form.prefix(prefix));
        self
    }

    /// Number of forms bound to existing records.
    pub fn initial_forms(mut self, count: usize) -> Self {
        self.initial_forms = count;
        self
    }

    pub fn min_num(mut self, count: usize) -> Self {
        self.min_num = count;
        self
    }

    pub fn max_num(mut self, count: usize) -> Self {
        self.max_num = count;
        self
    }

    pub fn non_form_error(mut self, message: impl Into<String>) -> Self {
        self.non_form_errors.push(message.into());
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn forms(&self) -> &[Form] {
        &self.forms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Form> {
        self.forms.iter()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn get_non_form_errors(&self) -> &[String] {
        &self.non_form_errors
    }

    /// The bookkeeping record submitted alongside the forms.
    pub fn management_form(&self) -> ManagementForm {
        ManagementForm {
            prefix: self.prefix.clone(),
            total_forms: self.forms.len(),
            initial_forms: self.initial_forms.min(self.forms.len()),
            min_num_forms: self.min_num,
            max_num_forms: self.max_num,
        }
    }
}

impl<'a> IntoIterator for &'a Formset {
    type Item = &'a Form;
    type IntoIter = std::slice::Iter<'a, Form>;

    fn into_iter(self) -> Self::IntoIter {
        self.forms.iter()
    }
}

/// Form counts the server needs to rebuild a submitted formset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagementForm {
    pub prefix: String,
    pub total_forms: usize,
    pub initial_forms: usize,
    pub min_num_forms: usize,
    pub max_num_forms: usize,
}

impl ManagementForm {
    /// Renders the counts as hidden inputs, one per line.
    pub fn render(&self) -> String {
        [
            ("TOTAL_FORMS", self.total_forms),
            ("INITIAL_FORMS", self.initial_forms),
            ("MIN_NUM_FORMS", self.min_num_forms),
            ("MAX_NUM_FORMS", self.max_num_forms),
        ]
        .iter()
        .map(|(key, count)| {
            let name = format!("{}-{}", self.prefix, key);
            let id = format!("id_{}", name);
            Widget::render_hidden(&name, Some(id.as_str()), &[count.to_string()])
        })
        .collect::<Vec<_>>()
        .join("\n")
    }
}
