// ABOUTME: Template engine implementation using Handlebars
// ABOUTME: Parses templates from a reader or files and renders them over the dotmap

use std::collections::HashMap;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use tracing::debug;

use super::error::{Result, TemplateError};

/// A parsed, ready-to-render set of templates plus the name of its root.
#[derive(Debug)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    root: String,
}

impl TemplateEngine {
    /// Read all of `reader` and parse it as a single template.
    ///
    /// `description` tags the template for error messages, e.g. "stdin".
    pub fn parse<R: Read>(mut reader: R, description: &str) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| TemplateError::Read {
                description: description.to_string(),
                source,
            })?;
        Self::parse_str(&text, description)
    }

    /// Parse template text already held in memory.
    pub fn parse_str(text: &str, description: &str) -> Result<Self> {
        let mut handlebars = new_registry();
        handlebars
            .register_template_string(description, text)
            .map_err(|source| TemplateError::Parse {
                description: description.to_string(),
                source,
            })?;

        Ok(Self {
            handlebars,
            root: description.to_string(),
        })
    }

    /// Read and parse one or more template files.
    ///
    /// Each file is registered under its file stem so other templates can
    /// reference it as `{{> stem}}`. The first file in argument order is the
    /// root; a later file with the same stem as an earlier one replaces it.
    pub fn parse_files(paths: &[PathBuf]) -> Result<Self> {
        let mut handlebars = new_registry();
        let mut root = None;

        for path in paths {
            let name = template_name(path);
            let text = fs::read_to_string(path).map_err(|source| TemplateError::Read {
                description: path.display().to_string(),
                source,
            })?;
            handlebars
                .register_template_string(&name, text)
                .map_err(|source| TemplateError::Parse {
                    description: path.display().to_string(),
                    source,
                })?;
            debug!("registered template {} from {}", name, path.display());

            if root.is_none() {
                root = Some(name);
            }
        }

        let root = root.ok_or(TemplateError::NoFiles)?;
        Ok(Self { handlebars, root })
    }

    /// Render the root template over the dotmap, streaming into `writer`.
    ///
    /// Strict mode is on, so a reference the flat string map cannot resolve
    /// fails here rather than expanding to nothing. Output written before a
    /// failure is not unwound.
    pub fn execute<W: Write>(&self, dot_map: &HashMap<String, String>, writer: W) -> Result<()> {
        let context = serde_json::to_value(dot_map)?;
        self.handlebars
            .render_to_write(&self.root, &context, writer)?;
        Ok(())
    }

    /// Name of the template rendered by `execute`.
    pub fn root(&self) -> &str {
        &self.root
    }
}

fn new_registry() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    // The output is arbitrary text, not HTML
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
}

/// Template name for a file path: the stem, so `dir/header.tmpl` can be
/// referenced as `{{> header}}`.
fn template_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
