// ABOUTME: Error types for template engine operations
// ABOUTME: Defines specific error types for template reading, parsing, and rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("error when reading from {description} - {source}")]
    Read {
        description: String,
        source: std::io::Error,
    },

    #[error("error when parsing template read from {description} - {source}")]
    Parse {
        description: String,
        source: handlebars::TemplateError,
    },

    #[error("no template files to parse")]
    NoFiles,

    #[error("error when executing template - {0}")]
    Execute(#[from] handlebars::RenderError),

    #[error("error when building template context - {0}")]
    Context(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
