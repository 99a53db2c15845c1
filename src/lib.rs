// ABOUTME: Main library module for the texpand template expansion tool
// ABOUTME: Exports the CLI and template modules and provides the public API

pub mod cli;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args};
pub use template::{TemplateEngine, TemplateError, TemplateSource};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
