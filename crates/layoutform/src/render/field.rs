//! Field renderer: one field to a Bootstrap `form-group` fragment.
//!
//! The branch is picked from the widget kind, in this order: single checkbox,
//! radio group, everything else. Error messages and help text always follow
//! the control.

use crate::mode::RenderMode;
use crate::model::{Field, WidgetKind};
use crate::options::RenderOptions;

use super::markup::{class_attr, escape, open_div, Lines, CLOSE_DIV};

/// Class injected into plain controls (inputs, selects, textareas).
pub const FORM_CONTROL_CLASS: &str = "form-control";

/// Style hint keeping a field on one printed page.
const PRINT_STYLE: &str = " style='page-break-inside:avoid;'";

/// Class names resolved for one field.
#[derive(Debug, Clone, Copy)]
struct FieldContext<'a> {
    required_css_class: &'a str,
    error_css_class: &'a str,
}

impl<'a> FieldContext<'a> {
    /// Classes inherited from the owning form win over renderer options.
    fn new(options: &'a RenderOptions, field: &'a Field) -> Self {
        Self {
            required_css_class: field
                .get_required_css_class()
                .unwrap_or(&options.required_css_class),
            error_css_class: field
                .get_error_css_class()
                .unwrap_or(&options.error_css_class),
        }
    }
}

/// Renders a single field.
///
/// Hidden fields render as their bare hidden input, exactly as forms emit them.
pub(crate) fn render_field(field: &Field, mode: RenderMode, options: &RenderOptions) -> String {
    if field.is_hidden() {
        return field.render_widget();
    }

    let ctx = FieldContext::new(options, field);

    let mut lines = Lines::new();
    let error_class = if field.has_errors() { "has-error" } else { "" };
    let style = if mode.is_print() { PRINT_STYLE } else { "" };
    lines.push(format!("<div{}{}>", class_attr(&["form-group", error_class]), style));

    let required_class = if field.is_required() {
        ctx.required_css_class
    } else {
        ""
    };

    match field.widget().kind() {
        WidgetKind::Checkbox => {
            lines.push(open_div(&[]));
            lines.push(open_div(&["checkbox"]));
            if field.auto_id().is_some() {
                lines.push(format!(
                    "<label{}>{} <span>{}</span></label>",
                    class_attr(&[required_class]),
                    field.render_widget(),
                    field.label()
                ));
            }
            push_messages(&mut lines, field, &ctx);
            lines.push(CLOSE_DIV);
            lines.push(CLOSE_DIV);
        }
        WidgetKind::Radio => {
            if field.auto_id().is_some() {
                lines.push(format!(
                    "<label{}>{}</label>",
                    class_attr(&["control-label", required_class]),
                    field.label()
                ));
            }
            lines.push(open_div(&[]));
            for (index, choice) in field.widget().get_choices().iter().enumerate() {
                lines.push(format!(
                    "<div class='radio'><label>{} {}</label></div>",
                    field.render_choice(index),
                    choice.label
                ));
            }
            push_messages(&mut lines, field, &ctx);
            lines.push(CLOSE_DIV);
        }
        kind => {
            if let Some(id) = field.auto_id() {
                lines.push(format!(
                    "<label{} for='{}'>{}</label>",
                    class_attr(&["control-label", required_class]),
                    escape(id),
                    field.label()
                ));
            }
            let (wrapper_class, control) = match kind {
                WidgetKind::MultiCheckbox => ("multiple-checkbox", field.render_widget()),
                WidgetKind::File => ("", field.render_widget()),
                _ => {
                    let attrs = field.widget().attrs_with_class(FORM_CONTROL_CLASS);
                    ("", field.render_widget_with(&attrs))
                }
            };
            lines.push(open_div(&[wrapper_class]));
            lines.push(control);
            push_messages(&mut lines, field, &ctx);
            lines.push(CLOSE_DIV);
        }
    }

    lines.push(CLOSE_DIV);
    lines.finish()
}

fn push_messages(lines: &mut Lines, field: &Field, ctx: &FieldContext<'_>) {
    for error in field.get_errors() {
        lines.push(format!(
            "<span{}>{}</span>",
            class_attr(&["help-block", ctx.error_css_class]),
            error
        ));
    }
    if let Some(help) = field.get_help_text() {
        lines.push(format!("<p class='help-block'>{}</p>", help));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Form, Widget};

    fn render(field: &Field, mode: RenderMode) -> String {
        render_field(field, mode, &RenderOptions::default())
    }

    #[test]
    fn test_text_field_with_error() {
        let field = Field::text("name").required(true).error("Required");
        assert_eq!(
            render(&field, RenderMode::Standard),
            "<div class='form-group has-error'>\n\
             <label class='control-label required' for='id_name'>Name</label>\n\
             <div>\n\
             <input type='text' name='name' id='id_name' class='form-control'>\n\
             <span class='help-block'>Required</span>\n\
             </div>\n\
             </div>"
        );
    }

    #[test]
    fn test_print_mode_adds_page_break_hint() {
        let field = Field::text("name");
        let html = render(&field, RenderMode::Print);
        assert!(html.starts_with("<div class='form-group' style='page-break-inside:avoid;'>\n"));
        assert_eq!(
            html.replace(PRINT_STYLE, ""),
            render(&field, RenderMode::Standard)
        );
    }

    #[test]
    fn test_checkbox_branch() {
        let field = Field::checkbox("subscribe")
            .with_label("Subscribe")
            .help_text("Monthly at most.");
        assert_eq!(
            render(&field, RenderMode::Standard),
            "<div class='form-group'>\n\
             <div>\n\
             <div class='checkbox'>\n\
             <label><input type='checkbox' name='subscribe' id='id_subscribe'> <span>Subscribe</span></label>\n\
             <p class='help-block'>Monthly at most.</p>\n\
             </div>\n\
             </div>\n\
             </div>"
        );
    }

    #[test]
    fn test_anonymous_checkbox_has_no_label() {
        let field = Field::checkbox("x").anonymous().error("Bad");
        let html = render(&field, RenderMode::Standard);
        assert!(!html.contains("<label"));
        assert!(html.contains("<span class='help-block'>Bad</span>"));
    }

    #[test]
    fn test_radio_branch() {
        let field = Field::radio("size", [("s", "Small"), ("l", "Large")])
            .required(true)
            .data("s");
        assert_eq!(
            render(&field, RenderMode::Standard),
            "<div class='form-group'>\n\
             <label class='control-label required'>Size</label>\n\
             <div>\n\
             <div class='radio'><label><input type='radio' name='size' value='s' id='id_size_0' checked> Small</label></div>\n\
             <div class='radio'><label><input type='radio' name='size' value='l' id='id_size_1'> Large</label></div>\n\
             </div>\n\
             </div>"
        );
    }

    #[test]
    fn test_multi_checkbox_wrapper_and_no_form_control() {
        let field = Field::multi_checkbox("tags", [("a", "A")]);
        let html = render(&field, RenderMode::Standard);
        assert!(html.contains("<div class='multiple-checkbox'>"));
        assert!(!html.contains(FORM_CONTROL_CLASS));
    }

    #[test]
    fn test_file_input_keeps_classes() {
        let field = Field::file("upload").with_widget(Widget::new(WidgetKind::File).attr("class", "picker"));
        let html = render(&field, RenderMode::Standard);
        assert!(html.contains("<input type='file' name='upload' id='id_upload' class='picker'>"));
        assert!(!html.contains(FORM_CONTROL_CLASS));
    }

    #[test]
    fn test_anonymous_field_omits_label() {
        let field = Field::text("q").anonymous();
        let html = render(&field, RenderMode::Standard);
        assert!(!html.contains("<label"));
        assert!(html.contains("<input type='text' name='q' class='form-control'>"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let field = Field::text("q").with_widget(Widget::text().attr("class", "form-control wide"));
        let first = render(&field, RenderMode::Standard);
        let second = render(&field, RenderMode::Standard);
        assert_eq!(first, second);
        assert_eq!(first.matches(FORM_CONTROL_CLASS).count(), 1);
    }

    #[test]
    fn test_errors_follow_control() {
        let field = Field::textarea("bio").error("Too long").error("Bad words");
        let html = render(&field, RenderMode::Standard);
        let control = html.find("<textarea").unwrap();
        let first_error = html.find("Too long").unwrap();
        let second_error = html.find("Bad words").unwrap();
        assert!(control < first_error);
        assert!(first_error < second_error);
    }

    #[test]
    fn test_form_overrides_classes() {
        let form = Form::new()
            .required_css_class("req")
            .field(Field::text("a").required(true).error("No"))
            .error_css_class("text-danger");
        let html = render(form.get("a").unwrap(), RenderMode::Standard);
        assert!(html.contains("<label class='control-label req' for='id_a'>A</label>"));
        assert!(html.contains("<span class='help-block text-danger'>No</span>"));
    }

    #[test]
    fn test_form_overrides_beat_renderer_options() {
        let options = RenderOptions::default().required_css_class("must");
        let loose = Field::text("a").required(true);
        let owned = Form::new().required_css_class("req").field(loose.clone());

        let html = render_field(&loose, RenderMode::Standard, &options);
        assert!(html.contains("class='control-label must'"));
        let html = render_field(owned.get("a").unwrap(), RenderMode::Standard, &options);
        assert!(html.contains("class='control-label req'"));
    }

    #[test]
    fn test_hidden_field_renders_bare_input() {
        let field = Field::hidden("token").initial("t");
        assert_eq!(
            render(&field, RenderMode::Standard),
            "<input type='hidden' name='token' value='t' id='id_token'>"
        );
    }
}
