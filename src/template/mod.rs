// ABOUTME: Template engine module for the texpand tool
// ABOUTME: Provides template parsing, rendering, and input source selection

pub mod engine;
pub mod error;
pub mod source;

pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
pub use source::TemplateSource;
