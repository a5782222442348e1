//! The form object model consumed by the renderers.
//!
//! Callers build these values per render; the renderers only read them.
//!
//! - [`Field`] and [`Widget`]: a single input with its label, errors and help
//! - [`Form`]: ordered fields, form-level errors, optional [`Layout`]
//! - [`Formset`]: repeated sub-forms with a [`ManagementForm`]

mod directive;
mod field;
mod form;
mod formset;
mod widget;

pub use directive::{Layout, LayoutDirective};
pub use field::{pretty_name, Field};
pub use form::Form;
pub use formset::{Formset, ManagementForm, DEFAULT_FORMSET_PREFIX, DEFAULT_MAX_NUM_FORMS};
pub use widget::{Attrs, Choice, Control, Widget, WidgetKind};
