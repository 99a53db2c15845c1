// ABOUTME: Main application orchestration for the texpand CLI
// ABOUTME: Holds the frozen dotmap and template source and drives parse then render

use std::collections::HashMap;
use std::io;

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::template::{TemplateEngine, TemplateSource};

use super::Args;

pub struct App {
    dot_map: HashMap<String, String>,
    source: TemplateSource,
    verbose: bool,
}

impl App {
    /// Create the application from parsed arguments.
    ///
    /// The dotmap is built here, before any template work starts, and is
    /// read-only from then on.
    pub fn new(args: Args) -> Self {
        let dot_map = args.dot_map();
        let source = TemplateSource::from_paths(args.files);

        Self {
            dot_map,
            source,
            verbose: args.verbose,
        }
    }

    /// Initialize logging; diagnostics go to stderr so stdout stays clean
    /// for the rendered output.
    fn init_logging(&self) {
        let default_level = if self.verbose { "debug" } else { "warn" };
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

        tracing_subscriber::fmt()
            .compact()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .with_target(false)
            .with_ansi(false)
            .try_init()
            .ok();
    }

    /// Parse the template from its source and render it to stdout.
    pub fn run(&self) -> Result<()> {
        self.init_logging();
        debug!(
            "expanding template from {} with {} key(s)",
            self.source.description(),
            self.dot_map.len()
        );

        let engine = match &self.source {
            TemplateSource::Stdin => TemplateEngine::parse(io::stdin().lock(), "stdin")?,
            TemplateSource::Files(paths) => TemplateEngine::parse_files(paths)?,
        };

        let stdout = io::stdout();
        engine.execute(&self.dot_map, stdout.lock())?;

        Ok(())
    }
}
