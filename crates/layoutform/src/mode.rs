//! Rendering mode control.
//!
//! The [`RenderMode`] enum selects between the interactive markup and the
//! condensed print variant. Both modes share the same structure; print mode
//! only changes the wrappers.

use serde::{Deserialize, Serialize};

/// Controls which markup variant is produced.
///
/// # Variants
///
/// - `Standard` - Interactive form markup (default)
/// - `Print` - Read-only variant for paged output: fields avoid page breaks
///   and forms honor their printed-fields set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Interactive form markup
    #[default]
    Standard,
    /// Condensed markup for printed or PDF output
    Print,
}

impl RenderMode {
    /// Returns true for the print variant.
    pub fn is_print(self) -> bool {
        matches!(self, RenderMode::Print)
    }

    /// Name used for the mode inside formset templates.
    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Standard => "standard",
            RenderMode::Print => "print",
        }
    }
}
