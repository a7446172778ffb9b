//! Renderer error types

use thiserror::Error;

/// Template loading and rendering errors
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A bundled template failed to parse
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    /// Template rendering error
    #[error("Template error: {0}")]
    TemplateError(String),
}
