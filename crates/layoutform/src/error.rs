//! Error types for configuration loading and formset templates.
//!
//! Field and form rendering never fail. [`RenderError`] only comes out of the
//! operations that touch external input: parsing options or layouts, registering
//! formset templates, and rendering those templates.

use thiserror::Error;

/// Error type for the fallible parts of the rendering API.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template syntax error or failure while evaluating a template.
    #[error("template error: {0}")]
    TemplateError(String),

    /// Template not found in the formset template environment.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Options or layout data could not be (de)serialized.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// I/O error (e.g., reading a template override from disk).
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Other operational error.
    #[error("{0}")]
    OperationError(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            ErrorKind::SyntaxError
            | ErrorKind::BadEscape
            | ErrorKind::UndefinedError
            | ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownMethod => RenderError::TemplateError(err.to_string()),
            ErrorKind::BadSerialization => RenderError::SerializationError(err.to_string()),
            _ => RenderError::OperationError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderError::TemplateNotFound("layoutform/formset.html".to_string());
        assert!(err.to_string().contains("template not found"));
        assert!(err.to_string().contains("formset.html"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let render_err: RenderError = io_err.into();
        assert!(matches!(render_err, RenderError::IoError(_)));
    }

    #[test]
    fn test_from_minijinja_syntax_error() {
        let mj_err = minijinja::Error::new(minijinja::ErrorKind::SyntaxError, "unexpected end");
        let render_err: RenderError = mj_err.into();
        assert!(matches!(render_err, RenderError::TemplateError(_)));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<Vec<u32>>("{ not: a list").unwrap_err();
        let render_err: RenderError = yaml_err.into();
        assert!(matches!(render_err, RenderError::SerializationError(_)));
    }
}
