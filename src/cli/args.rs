// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the -s key=value flag grammar and the help/exit-code policy

use std::collections::HashMap;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;

const AFTER_HELP: &str = "\
Example:
  $ echo 'foo is {{foo}}, bar is {{bar}}' | texpand -s foo=oof -s bar=rab
  foo is oof, bar is rab

The template is read from stdin, or from files passed as command line
arguments. Its syntax is that of the Handlebars templating language,
documented at https://handlebarsjs.com/guide/, rendered in strict mode with
the dot pointing to the map of string key/values defined using the -s flag.
When several files are given, each one is registered as a template named
after its file stem; the first file is the one rendered, and later files may
redefine templates referenced by earlier ones.";

#[derive(Parser, Debug)]
#[command(name = "texpand")]
#[command(about = "Read a text template and print it after expanding its content")]
#[command(version)]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    #[arg(
        short = 's',
        value_name = "KEY=VALUE",
        value_parser = parse_key_value,
        help = "Define a string value associated to a template expansion key"
    )]
    pub set: Vec<(String, String)>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        value_name = "FILE",
        help = "Template files; the template is read from stdin when none are given"
    )]
    pub files: Vec<PathBuf>,
}

/// Split a `-s` argument on its first `=` sign.
///
/// Everything after the first `=` belongs to the value, so values may
/// themselves contain `=` signs.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!(
            "invalid key/value definition {s:?} - it must contain an '=' sign"
        )),
    }
}

impl Args {
    /// Parse the process arguments, applying the CLI's exit-code policy.
    ///
    /// Help and version requests are printed to stderr and exit 0. Any other
    /// parse failure exits 2 with a generic message; the underlying clap
    /// diagnostic is deliberately not shown.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    eprint!("{err}");
                    process::exit(0);
                }
                _ => {
                    eprintln!("run with -h for help");
                    process::exit(2);
                }
            },
        }
    }

    /// Build the substitution map from the accumulated `-s` pairs.
    ///
    /// Pairs are inserted in order of appearance, so the last definition of a
    /// repeated key wins. The returned map is never mutated afterwards.
    pub fn dot_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        for (key, value) in &self.set {
            map.insert(key.clone(), value.clone());
        }
        map
    }
}
