// ABOUTME: Template input source selection for the texpand tool
// ABOUTME: Chooses between stdin and named files based on positional arguments

use std::path::PathBuf;

/// Where the template text comes from for one invocation.
///
/// Exactly one source is used per run; files and stdin are never combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Stdin,
    Files(Vec<PathBuf>),
}

impl TemplateSource {
    /// Select the source from the positional arguments left after flag
    /// parsing: any paths at all mean files, otherwise stdin.
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        if paths.is_empty() {
            Self::Stdin
        } else {
            Self::Files(paths)
        }
    }

    /// Human-readable name used in log lines.
    pub fn description(&self) -> String {
        match self {
            Self::Stdin => "stdin".to_string(),
            Self::Files(paths) => format!("{} template file(s)", paths.len()),
        }
    }
}
