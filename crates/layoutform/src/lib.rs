//! # layoutform - Bootstrap Form Markup from Declarative Layouts
//!
//! `layoutform` turns a structured description of a form (fields, groups,
//! row/column layout, error state) into Bootstrap 3 markup: `form-group`
//! blocks, `row` / `col-sm-N` grids, `well` panels and inline `help-block`
//! messages. Fields and forms are rendered by direct string assembly rather
//! than through a template engine, so large forms stay cheap to render.
//!
//! ## Core Concepts
//!
//! - [`Field`] / [`Widget`]: a single input with label, errors and help text
//! - [`Form`]: ordered fields, form-level errors and an optional [`Layout`]
//! - [`LayoutDirective`]: header, group start/end, or a row of columns
//! - [`Formset`]: repeated sub-forms plus their management inputs
//! - [`RenderMode`]: interactive markup or the condensed print variant
//! - [`LayoutRenderer`]: configured renderer; [`layout`] and [`print_layout`]
//!   use a shared default one
//!
//! ## Quick Start
//!
//! ```rust
//! use layoutform::{layout, Field, Form, Layout};
//!
//! let form = Form::new()
//!     .field(Field::text("first_name").required(true))
//!     .field(Field::text("last_name"))
//!     .field(Field::email("email").error("Enter a valid email address."))
//!     .layout(
//!         Layout::new()
//!             .header("Contact")
//!             .row(["first_name", "last_name"], 6)
//!             .row(["email"], 12),
//!     );
//!
//! let html = layout(&form);
//! assert!(html.contains("<h3>Contact</h3>"));
//! assert_eq!(html.matches("<div class='col-sm-6'>").count(), 2);
//! assert!(html.contains("<span class='help-block'>Enter a valid email address.</span>"));
//! ```
//!
//! ## Print Mode
//!
//! [`print_layout`] produces the same structure with page-break hints, and
//! honors a form's printed-fields set in layout rows:
//!
//! ```rust
//! use layoutform::{print_layout, Field, Form, Layout};
//!
//! let form = Form::new()
//!     .field(Field::text("name"))
//!     .field(Field::email("email"))
//!     .printed_fields(["name"])
//!     .layout(Layout::new().row(["name", "email"], 6));
//!
//! let html = print_layout(&form);
//! assert!(html.contains("style='page-break-inside:avoid;'"));
//! assert!(!html.contains("id_email"));
//! ```
//!
//! ## Layouts From Data
//!
//! Layouts deserialize from YAML or JSON records:
//!
//! ```rust
//! use layoutform::Layout;
//!
//! let layout = Layout::from_yaml(r#"
//! - type: group_start
//!   name: Shipping
//! - type: row
//!   cols: [street, city, zip]
//!   col_width: 4
//!   col_limit: 2
//! - type: group_end
//! "#).unwrap();
//! assert_eq!(layout.len(), 3);
//! ```
//!
//! ## Trusted Text
//!
//! Labels, help text, error messages, choice labels and layout headings are
//! inserted verbatim, so callers escape any user-controlled text beforehand.
//! Field values and widget attributes are escaped by the widget renderer.

pub mod error;
pub mod extras;
pub mod mode;
pub mod model;
pub mod options;
pub mod render;

use once_cell::sync::Lazy;

pub use error::RenderError;
pub use extras::{all_extras_hidden, extras_hidden, select_extras, FormState, DEFAULT_MIN_EMPTY};
pub use mode::RenderMode;
pub use model::{
    pretty_name, Attrs, Choice, Control, Field, Form, Formset, Layout, LayoutDirective,
    ManagementForm, Widget, WidgetKind,
};
pub use options::{RenderOptions, DEFAULT_COLUMN_LIMIT};
pub use render::{
    FormsetTemplates, LayoutRenderer, Renderable, FORMSET_TEMPLATE, FORM_CONTROL_CLASS,
    PRINT_FORMSET_TEMPLATE,
};

static DEFAULT_RENDERER: Lazy<LayoutRenderer> = Lazy::new(LayoutRenderer::new);

/// Renders a field, form or formset in standard mode with default options.
pub fn layout<'a>(target: impl Into<Renderable<'a>>) -> String {
    DEFAULT_RENDERER.layout(target)
}

/// Renders a field, form or formset in print mode with default options.
pub fn print_layout<'a>(target: impl Into<Renderable<'a>>) -> String {
    DEFAULT_RENDERER.print_layout(target)
}
