//! Formset composer: sub-forms wrapped by a named template.
//!
//! Every sub-form is rendered through the layout interpreter first. The
//! results are then handed to one of two MiniJinja templates, chosen by mode:
//!
//! | Mode | Template |
//! |------|----------|
//! | Standard | [`FORMSET_TEMPLATE`] (`layoutform/formset.html`) |
//! | Print | [`PRINT_FORMSET_TEMPLATE`] (`layoutform/print_formset.html`) |
//!
//! Built-in versions of both ship with the crate. Replace them with
//! [`FormsetTemplates::add_template`] or [`FormsetTemplates::add_template_dir`].
//!
//! ## Template context
//!
//! ```text
//! mode                      "standard" | "print"
//! formset.prefix            formset prefix
//! formset.management_form   hidden management inputs (safe markup)
//! formset.non_form_errors   list of messages (safe markup)
//! formset.forms             list of entries:
//!     .html                 rendered form (safe markup)
//!     .index                position in the formset
//!     .has_initial          form has initial data
//!     .has_changed          form data differs from initial
//! ```
//!
//! The `extras_hidden(n=1)` and `all_extras_hidden` filters select entries
//! the same way [`crate::extras_hidden`] selects forms:
//!
//! ```jinja
//! {% for form in formset.forms|extras_hidden(2) %}{{ form.html }}{% endfor %}
//! ```

use std::path::Path;

use minijinja::{context, path_loader, Environment, Value};

use crate::error::RenderError;
use crate::extras::{all_extras_hidden_filter, extras_hidden_filter};
use crate::mode::RenderMode;
use crate::model::Formset;

/// Name of the standard formset template.
pub const FORMSET_TEMPLATE: &str = "layoutform/formset.html";

/// Name of the print formset template.
pub const PRINT_FORMSET_TEMPLATE: &str = "layoutform/print_formset.html";

const BUILTIN_FORMSET: &str = "\
{{ formset.management_form }}
{%- if formset.non_form_errors %}
<div class='alert alert-danger'><a class='close' data-dismiss='alert'>&times;</a>
{%- for error in formset.non_form_errors %}
{{ error }}
{%- endfor %}
</div>
{%- endif %}
{%- for form in formset.forms %}
<div class='formset-form'>
{{ form.html }}
</div>
{%- endfor %}";

const BUILTIN_PRINT_FORMSET: &str = "\
<div class='formset'>
{%- for form in formset.forms|all_extras_hidden %}
<div class='formset-form' style='page-break-inside:avoid;'>
{{ form.html }}
</div>
{%- endfor %}
</div>";

/// Returns the template name used for a mode.
pub fn template_name(mode: RenderMode) -> &'static str {
    match mode {
        RenderMode::Standard => FORMSET_TEMPLATE,
        RenderMode::Print => PRINT_FORMSET_TEMPLATE,
    }
}

/// The two formset wrapper templates and the environment they render in.
pub struct FormsetTemplates {
    env: Environment<'static>,
}

impl FormsetTemplates {
    /// Creates the environment with the built-in templates and filters.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_filter("extras_hidden", extras_hidden_filter);
        env.add_filter("all_extras_hidden", all_extras_hidden_filter);
        // Static sources; a parse failure here is a bug in the built-ins.
        if let Err(err) = env.add_template(FORMSET_TEMPLATE, BUILTIN_FORMSET) {
            tracing::error!(error = %err, "built-in formset template failed to parse");
        }
        if let Err(err) = env.add_template(PRINT_FORMSET_TEMPLATE, BUILTIN_PRINT_FORMSET) {
            tracing::error!(error = %err, "built-in print formset template failed to parse");
        }
        Self { env }
    }

    /// Adds or replaces a named template.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Loads template overrides from a directory.
    ///
    /// `<dir>/layoutform/formset.html` and `<dir>/layoutform/print_formset.html`
    /// replace the built-ins when present. Any other template in the directory
    /// becomes available to `{% include %}` and `{% extends %}`.
    pub fn add_template_dir(&mut self, dir: impl AsRef<Path>) -> Result<(), RenderError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(RenderError::OperationError(format!(
                "template directory not found: {}",
                dir.display()
            )));
        }

        for name in [FORMSET_TEMPLATE, PRINT_FORMSET_TEMPLATE] {
            let path = dir.join(name);
            if path.is_file() {
                let source = std::fs::read_to_string(&path)?;
                tracing::debug!(template = name, path = %path.display(), "overriding formset template");
                self.add_template(name, &source)?;
            }
        }
        self.env.set_loader(path_loader(dir));
        Ok(())
    }

    /// Checks whether a template is registered or loadable.
    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Renders the formset template for `mode` around already rendered forms.
    ///
    /// `forms` holds one rendered fragment per form of `formset`, in order.
    pub fn render(
        &self,
        formset: &Formset,
        forms: &[String],
        mode: RenderMode,
    ) -> Result<String, RenderError> {
        let entries: Vec<Value> = formset
            .iter()
            .zip(forms)
            .enumerate()
            .map(|(index, (form, html))| {
                context! {
                    html => Value::from_safe_string(html.clone()),
                    index => index,
                    has_initial => form.has_initial(),
                    has_changed => form.has_changed(),
                }
            })
            .collect();
        let non_form_errors: Vec<Value> = formset
            .get_non_form_errors()
            .iter()
            .map(|error| Value::from_safe_string(error.clone()))
            .collect();

        let ctx = context! {
            mode => mode.as_str(),
            formset => context! {
                prefix => formset.prefix(),
                management_form => Value::from_safe_string(formset.management_form().render()),
                non_form_errors => non_form_errors,
                forms => entries,
            },
        };

        let template = self.env.get_template(template_name(mode))?;
        Ok(template.render(ctx)?)
    }
}

impl Default for FormsetTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormsetTemplates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormsetTemplates").finish_non_exhaustive()
    }
}
