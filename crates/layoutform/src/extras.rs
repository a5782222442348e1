//! Extras filter: which sub-forms of a formset to show.
//!
//! Formsets usually carry a handful of blank "extra" forms. Showing all of
//! them clutters the page, so the selection keeps every form that has initial
//! data or changes, and at most `min_empty` of the blank ones. The scan always
//! covers the whole formset; a form with data after the blank budget is spent
//! is still selected.
//!
//! ```rust
//! use layoutform::{extras_hidden, all_extras_hidden, Field, Form, Formset};
//!
//! let line = || Form::new().field(Field::text("sku"));
//! let formset = Formset::new("items")
//!     .form(line().initial("sku", "A-1"))
//!     .form(line())
//!     .form(line())
//!     .form(line().initial("sku", "B-2"));
//!
//! assert_eq!(extras_hidden(&formset, 1).len(), 3);
//! assert_eq!(all_extras_hidden(&formset).len(), 2);
//! ```

use minijinja::{Error, Value};

use crate::model::{Form, Formset};

/// Default blank-form budget for [`extras_hidden`].
pub const DEFAULT_MIN_EMPTY: usize = 1;

/// The state the extras filter needs from a form.
pub trait FormState {
    /// True when the form was created with non-empty initial data.
    fn has_initial(&self) -> bool;

    /// True when submitted data differs from the initial data.
    fn has_changed(&self) -> bool;
}

impl FormState for Form {
    fn has_initial(&self) -> bool {
        Form::has_initial(self)
    }

    fn has_changed(&self) -> bool {
        Form::has_changed(self)
    }
}

impl<T: FormState + ?Sized> FormState for &T {
    fn has_initial(&self) -> bool {
        (**self).has_initial()
    }

    fn has_changed(&self) -> bool {
        (**self).has_changed()
    }
}

/// Form entries inside formset templates expose `has_initial` and `has_changed`.
impl FormState for Value {
    fn has_initial(&self) -> bool {
        self.get_attr("has_initial").map(|v| v.is_true()).unwrap_or(false)
    }

    fn has_changed(&self) -> bool {
        self.get_attr("has_changed").map(|v| v.is_true()).unwrap_or(false)
    }
}

/// Keeps forms with data plus up to `min_empty` blank forms, in order.
pub fn select_extras<I>(forms: I, min_empty: usize) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: FormState,
{
    let mut remaining = min_empty;
    forms
        .into_iter()
        .filter(|form| {
            if form.has_initial() || form.has_changed() {
                true
            } else if remaining > 0 {
                remaining -= 1;
                true
            } else {
                false
            }
        })
        .collect()
}

/// Forms with data plus up to `min_empty` blank forms.
pub fn extras_hidden(formset: &Formset, min_empty: usize) -> Vec<&Form> {
    select_extras(formset, min_empty)
}

/// Only the forms with data; no blank forms.
///
/// Same as `extras_hidden(formset, 0)`. Use [`extras_hidden`] directly for a
/// non-zero blank budget. The `all_extras_hidden` template filter accepts an
/// optional budget argument as well.
pub fn all_extras_hidden(formset: &Formset) -> Vec<&Form> {
    extras_hidden(formset, 0)
}

/// Template filter: `{% for form in formset.forms|extras_hidden(2) %}`.
pub(crate) fn extras_hidden_filter(forms: Vec<Value>, min_empty: Option<usize>) -> Result<Value, Error> {
    Ok(Value::from(select_extras(forms, min_empty.unwrap_or(DEFAULT_MIN_EMPTY))))
}

/// Template filter: `{% for form in formset.forms|all_extras_hidden %}`.
pub(crate) fn all_extras_hidden_filter(forms: Vec<Value>, min_empty: Option<usize>) -> Result<Value, Error> {
    Ok(Value::from(select_extras(forms, min_empty.unwrap_or(0))))
}
