//! Layout interpreter: a whole form to markup.
//!
//! Output order is fixed: error summary, form-level errors, hidden fields, then
//! either the custom layout or every visible field in declaration order.
//!
//! # Layout directives
//!
//! | Directive | Markup |
//! |-----------|--------|
//! | `Header` | `<h3>name</h3>` and `<p>description</p>`, each when present |
//! | `GroupStart` | `<div class='well'>` plus optional `<h4>` / `<p>` |
//! | `GroupEnd` | `</div>` |
//! | `Row` | `<div class='row'>` with one `<div class='col-sm-W'>` per visible field |
//!
//! Rows wrap after every `column_limit`-th column. The counter advances for
//! every listed column, including names that do not resolve to a field. In
//! print mode, columns outside the form's printed-fields set are skipped before
//! anything else, including the wrap check.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::mode::RenderMode;
use crate::model::{Form, LayoutDirective};
use crate::options::RenderOptions;

use super::field::render_field;
use super::markup::{Lines, ALERT_OPEN, CLOSE_DIV};

const ROW_OPEN: &str = "<div class='row'>";

/// Renders a form with its custom layout, or the default flat layout.
pub(crate) fn render_form(form: &Form, mode: RenderMode, options: &RenderOptions) -> String {
    let mut lines = Lines::new();

    let error_count = form.error_count();
    if error_count > 0 {
        let plural = if error_count > 1 { "s" } else { "" };
        lines.push(format!(
            "{} Please correct the error{} below.</div>",
            ALERT_OPEN, plural
        ));
    }

    let non_field_errors = form.get_non_field_errors();
    if !non_field_errors.is_empty() {
        lines.push(ALERT_OPEN);
        for error in non_field_errors {
            lines.push(error.as_str());
        }
        lines.push(CLOSE_DIV);
    }

    for field in form.hidden_fields() {
        lines.push(field.render_widget());
    }

    match form.get_layout().filter(|layout| !layout.is_empty()) {
        Some(layout) => {
            trace!(directives = layout.len(), "rendering custom layout");
            let printed = if mode.is_print() {
                form.get_printed_fields()
            } else {
                None
            };
            let interpreter = Interpreter {
                form,
                mode,
                options,
                printed,
                default_limit: options.column_limit,
            };
            for directive in layout.directives() {
                interpreter.directive(directive, &mut lines);
            }
        }
        None => {
            trace!("rendering default layout");
            for field in form.visible_fields() {
                lines.push(render_field(field, mode, options));
            }
        }
    }

    lines.finish()
}

struct Interpreter<'a> {
    form: &'a Form,
    mode: RenderMode,
    options: &'a RenderOptions,
    printed: Option<&'a BTreeSet<String>>,
    default_limit: usize,
}

impl Interpreter<'_> {
    fn directive(&self, directive: &LayoutDirective, lines: &mut Lines) {
        match directive {
            LayoutDirective::Header { name, description } => {
                if let Some(name) = non_empty(name) {
                    lines.push(format!("<h3>{}</h3>", name));
                }
                if let Some(description) = non_empty(description) {
                    lines.push(format!("<p>{}</p>", description));
                }
            }
            LayoutDirective::GroupStart { name, description } => {
                lines.push("<div class='well'>");
                if let Some(name) = non_empty(name) {
                    lines.push(format!("<h4>{}</h4>", name));
                }
                if let Some(description) = non_empty(description) {
                    lines.push(format!("<p>{}</p>", description));
                }
            }
            LayoutDirective::GroupEnd => lines.push(CLOSE_DIV),
            LayoutDirective::Row {
                columns,
                column_width,
                column_limit,
            } => self.row(columns, *column_width, *column_limit, lines),
        }
    }

    fn row(&self, columns: &[String], width: u32, limit: Option<usize>, lines: &mut Lines) {
        let limit = effective_limit(limit.unwrap_or(self.default_limit));

        lines.push(ROW_OPEN);
        for (index, name) in columns.iter().enumerate() {
            if let Some(printed) = self.printed {
                if !printed.contains(name) {
                    trace!(column = %name, "column not in printed fields");
                    continue;
                }
            }

            match self.form.get(name) {
                Some(field) if !field.is_hidden() => {
                    lines.push(format!("<div class='col-sm-{}'>", width));
                    lines.push(render_field(field, self.mode, self.options));
                    lines.push(CLOSE_DIV);
                }
                Some(_) => {}
                None => debug!(column = %name, "layout column names no field, skipping"),
            }

            if (index + 1) % limit == 0 {
                lines.push(CLOSE_DIV);
                lines.push(ROW_OPEN);
            }
        }
        lines.push(CLOSE_DIV);
    }
}

/// A limit of zero means the row never wraps.
fn effective_limit(limit: usize) -> usize {
    if limit == 0 {
        usize::MAX
    } else {
        limit
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, Layout};

    fn render(form: &Form, mode: RenderMode) -> String {
        render_form(form, mode, &RenderOptions::default())
    }

    fn contact_form() -> Form {
        Form::new()
            .field(Field::text("name"))
            .field(Field::email("email"))
            .field(Field::text("phone"))
    }

    #[test]
    fn test_default_layout_renders_visible_fields_in_order() {
        let form = contact_form().field(Field::hidden("token"));
        let html = render(&form, RenderMode::Standard);

        let name = html.find("id='id_name'").unwrap();
        let email = html.find("id='id_email'").unwrap();
        let phone = html.find("id='id_phone'").unwrap();
        assert!(name < email && email < phone);
        assert_eq!(html.matches("<div class='form-group").count(), 3);
        assert!(html.starts_with("<input type='hidden' name='token' id='id_token'>\n"));
    }

    #[test]
    fn test_row_wraps_after_column_limit() {
        let form = contact_form().layout(
            Layout::new().push(LayoutDirective::row(["name", "email", "phone"], 4).with_column_limit(2)),
        );
        let html = render(&form, RenderMode::Standard);

        assert_eq!(html.matches(ROW_OPEN).count(), 2);
        assert_eq!(html.matches("<div class='col-sm-4'>").count(), 3);
        let second_row = html.rfind(ROW_OPEN).unwrap();
        assert!(html.find("id='id_email'").unwrap() < second_row);
        assert!(html.find("id='id_phone'").unwrap() > second_row);
    }

    #[test]
    fn test_row_exact_limit_leaves_empty_trailing_row() {
        let form = contact_form()
            .layout(Layout::new().push(LayoutDirective::row(["name", "email"], 6).with_column_limit(2)));
        let html = render(&form, RenderMode::Standard);
        assert!(html.ends_with("</div>\n<div class='row'>\n</div>"));
    }

    #[test]
    fn test_zero_limit_never_wraps() {
        let form = contact_form()
            .layout(Layout::new().push(LayoutDirective::row(["name", "email", "phone"], 4).with_column_limit(0)));
        let html = render(&form, RenderMode::Standard);
        assert_eq!(html.matches(ROW_OPEN).count(), 1);
    }

    #[test]
    fn test_missing_and_hidden_columns_are_skipped() {
        let form = contact_form()
            .field(Field::hidden("token"))
            .layout(Layout::new().row(["name", "nope", "token"], 6));
        let html = render(&form, RenderMode::Standard);
        assert_eq!(html.matches("<div class='col-sm-6'>").count(), 1);
        // Hidden fields still appear once, ahead of the layout.
        assert_eq!(html.matches("name='token'").count(), 1);
    }

    #[test]
    fn test_missing_columns_still_count_toward_limit() {
        let form = contact_form().layout(
            Layout::new().push(LayoutDirective::row(["nope", "name", "email"], 4).with_column_limit(2)),
        );
        let html = render(&form, RenderMode::Standard);
        let second_row = html.rfind(ROW_OPEN).unwrap();
        assert!(html.find("id='id_name'").unwrap() < second_row);
        assert!(html.find("id='id_email'").unwrap() > second_row);
    }

    #[test]
    fn test_headers_and_groups() {
        let form = contact_form().layout(
            Layout::new()
                .push(LayoutDirective::header("Contact").with_description("How to reach you"))
                .push(LayoutDirective::group("Details").with_description("Optional"))
                .row(["phone"], 12)
                .group_end(),
        );
        let html = render(&form, RenderMode::Standard);
        assert!(html.starts_with(
            "<h3>Contact</h3>\n<p>How to reach you</p>\n<div class='well'>\n<h4>Details</h4>\n<p>Optional</p>\n<div class='row'>\n<div class='col-sm-12'>\n"
        ));
        assert!(html.ends_with("</div>\n</div>\n</div>\n</div>"));
        assert!(!html.contains("id='id_name'"));
    }

    #[test]
    fn test_unnamed_header_and_group() {
        let form = contact_form().layout(
            Layout::new()
                .push(LayoutDirective::Header { name: None, description: Some("d".into()) })
                .push(LayoutDirective::group("").with_description(""))
                .group_end(),
        );
        assert_eq!(
            render(&form, RenderMode::Standard),
            "<p>d</p>\n<div class='well'>\n</div>"
        );
    }

    #[test]
    fn test_empty_layout_falls_back_to_default() {
        let form = contact_form().layout(Layout::new());
        assert_eq!(
            render(&form, RenderMode::Standard),
            render(&contact_form(), RenderMode::Standard)
        );
    }

    #[test]
    fn test_error_summary_pluralization() {
        let single = Form::new().field(Field::text("a").error("Required"));
        let html = render(&single, RenderMode::Standard);
        assert!(html.starts_with(
            "<div class='alert alert-danger'><a class='close' data-dismiss='alert'>&times;</a> Please correct the error below.</div>\n"
        ));

        let double = single.non_field_error("Mismatch");
        let html = render(&double, RenderMode::Standard);
        assert!(html.contains("Please correct the errors below."));
    }

    #[test]
    fn test_non_field_errors_banner() {
        let form = Form::new().non_field_error("First").non_field_error("Second");
        assert_eq!(
            render(&form, RenderMode::Standard),
            "<div class='alert alert-danger'><a class='close' data-dismiss='alert'>&times;</a> Please correct the error below.</div>\n\
             <div class='alert alert-danger'><a class='close' data-dismiss='alert'>&times;</a>\n\
             First\n\
             Second\n\
             </div>"
        );
    }

    #[test]
    fn test_print_mode_filters_row_columns() {
        let form = contact_form()
            .printed_fields(["name"])
            .layout(Layout::new().row(["name", "email"], 6));

        let printed = render(&form, RenderMode::Print);
        assert_eq!(printed.matches("<div class='col-sm-6'>").count(), 1);
        assert!(printed.contains("id='id_name'"));
        assert!(!printed.contains("id='id_email'"));

        let standard = render(&form, RenderMode::Standard);
        assert_eq!(standard.matches("<div class='col-sm-6'>").count(), 2);
    }

    #[test]
    fn test_print_filtered_columns_skip_wrap_check() {
        let form = contact_form()
            .printed_fields(["name", "email"])
            .layout(Layout::new().push(LayoutDirective::row(["name", "phone"], 6).with_column_limit(2)));
        let html = render(&form, RenderMode::Print);
        assert_eq!(html.matches(ROW_OPEN).count(), 1);
    }

    #[test]
    fn test_print_without_printed_fields_emits_all() {
        let form = contact_form().layout(Layout::new().row(["name", "email"], 6));
        let html = render(&form, RenderMode::Print);
        assert_eq!(html.matches("page-break-inside:avoid;").count(), 2);
    }

    #[test]
    fn test_default_column_limit_from_options() {
        let form = contact_form().layout(Layout::new().row(["name", "email", "phone"], 4));
        let options = RenderOptions::default().column_limit(1);
        let html = render_form(&form, RenderMode::Standard, &options);
        assert_eq!(html.matches(ROW_OPEN).count(), 4);
    }
}
