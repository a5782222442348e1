//! Rendering entry points.
//!
//! A [`Renderable`] is the tagged union of everything that can be laid out: a
//! single field, a whole form, or a formset. [`LayoutRenderer`] dispatches on
//! it once and hands off to the matching component:
//!
//! - fields go to the field renderer
//! - forms go to the layout interpreter, which uses the field renderer
//! - formsets render each form through the layout interpreter and wrap the
//!   result with a [`FormsetTemplates`] template
//!
//! Only formset templates can fail. [`LayoutRenderer::try_render`] reports
//! that failure; [`LayoutRenderer::render`] logs it and falls back to the
//! management form followed by the rendered forms.

mod field;
mod form;
mod formset;
pub(crate) mod markup;

pub use field::FORM_CONTROL_CLASS;
pub use formset::{template_name, FormsetTemplates, FORMSET_TEMPLATE, PRINT_FORMSET_TEMPLATE};

use crate::error::RenderError;
use crate::mode::RenderMode;
use crate::model::{Field, Form, Formset};
use crate::options::RenderOptions;

use field::render_field;
use form::render_form;

/// Anything the renderer can lay out.
#[derive(Debug, Clone, Copy)]
pub enum Renderable<'a> {
    Field(&'a Field),
    Form(&'a Form),
    Formset(&'a Formset),
}

impl<'a> From<&'a Field> for Renderable<'a> {
    fn from(field: &'a Field) -> Self {
        Renderable::Field(field)
    }
}

impl<'a> From<&'a Form> for Renderable<'a> {
    fn from(form: &'a Form) -> Self {
        Renderable::Form(form)
    }
}

impl<'a> From<&'a Formset> for Renderable<'a> {
    fn from(formset: &'a Formset) -> Self {
        Renderable::Formset(formset)
    }
}

/// Renderer with configured options and formset templates.
///
/// ```rust
/// use layoutform::{Field, Form, Layout, LayoutRenderer, RenderMode, RenderOptions};
///
/// let renderer = LayoutRenderer::with_options(RenderOptions::default().required_css_class("req"));
/// let form = Form::new()
///     .field(Field::text("name").required(true))
///     .layout(Layout::new().row(["name"], 12));
///
/// let html = renderer.render(&form, RenderMode::Standard);
/// assert!(html.contains("<div class='col-sm-12'>"));
/// assert!(html.contains("class='control-label req'"));
/// ```
#[derive(Debug, Default)]
pub struct LayoutRenderer {
    options: RenderOptions,
    templates: FormsetTemplates,
}

impl LayoutRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            templates: FormsetTemplates::new(),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn templates(&self) -> &FormsetTemplates {
        &self.templates
    }

    /// Mutable access for registering template overrides.
    pub fn templates_mut(&mut self) -> &mut FormsetTemplates {
        &mut self.templates
    }

    /// Renders a field, form or formset, reporting formset template failures.
    pub fn try_render<'a>(
        &self,
        target: impl Into<Renderable<'a>>,
        mode: RenderMode,
    ) -> Result<String, RenderError> {
        match target.into() {
            Renderable::Field(field) => Ok(self.render_field(field, mode)),
            Renderable::Form(form) => Ok(render_form(form, mode, &self.options)),
            Renderable::Formset(formset) => {
                let forms = self.render_forms(formset, mode);
                self.templates.render(formset, &forms, mode)
            }
        }
    }

    /// Renders a field, form or formset. Never fails.
    pub fn render<'a>(&self, target: impl Into<Renderable<'a>>, mode: RenderMode) -> String {
        match target.into() {
            Renderable::Formset(formset) => {
                let forms = self.render_forms(formset, mode);
                match self.templates.render(formset, &forms, mode) {
                    Ok(html) => html,
                    Err(err) => {
                        tracing::warn!(
                            error = %err,
                            template = template_name(mode),
                            "formset template failed, rendering forms without wrapper"
                        );
                        let mut lines = vec![formset.management_form().render()];
                        lines.extend(forms);
                        lines.join("\n")
                    }
                }
            }
            Renderable::Field(field) => self.render_field(field, mode),
            Renderable::Form(form) => render_form(form, mode, &self.options),
        }
    }

    /// Standard-mode shorthand for [`render`](Self::render).
    pub fn layout<'a>(&self, target: impl Into<Renderable<'a>>) -> String {
        self.render(target, RenderMode::Standard)
    }

    /// Print-mode shorthand for [`render`](Self::render).
    pub fn print_layout<'a>(&self, target: impl Into<Renderable<'a>>) -> String {
        self.render(target, RenderMode::Print)
    }

    fn render_field(&self, field: &Field, mode: RenderMode) -> String {
        render_field(field, mode, &self.options)
    }

    fn render_forms(&self, formset: &Formset, mode: RenderMode) -> Vec<String> {
        formset
            .iter()
            .map(|form| render_form(form, mode, &self.options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Layout;

    #[test]
    fn test_dispatch_by_kind() {
        let renderer = LayoutRenderer::new();
        let field = Field::text("a");
        let form = Form::new().field(Field::text("a"));
        let formset = Formset::new("f").form(Form::new().field(Field::text("a")));

        assert!(renderer.layout(&field).starts_with("<div class='form-group'>"));
        assert_eq!(renderer.layout(&form), renderer.layout(&field));
        assert!(renderer.layout(&formset).contains("name='f-TOTAL_FORMS'"));
    }

    #[test]
    fn test_broken_override_falls_back() {
        let mut renderer = LayoutRenderer::new();
        renderer
            .templates_mut()
            .add_template(FORMSET_TEMPLATE, "{% include 'layoutform/missing.html' %}")
            .unwrap();
        let formset = Formset::new("f").form(Form::new().field(Field::text("a")));

        assert!(renderer.try_render(&formset, RenderMode::Standard).is_err());
        let html = renderer.layout(&formset);
        assert!(html.starts_with("<input type='hidden' name='f-TOTAL_FORMS'"));
        assert!(html.contains("id='id_f-0-a'"));
    }

    #[test]
    fn test_print_layout_formset_uses_print_forms() {
        let renderer = LayoutRenderer::new();
        let formset = Formset::new("f").form(
            Form::new()
                .field(Field::text("a").initial("x"))
                .layout(Layout::new().row(["a"], 6)),
        );
        let html = renderer.print_layout(&formset);
        assert!(html.contains("page-break-inside:avoid;"));
        assert!(html.contains("<div class='col-sm-6'>"));
    }
}
