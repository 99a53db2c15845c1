// ABOUTME: Binary entry point for the texpand CLI
// ABOUTME: Parses arguments, runs the application, and maps errors to exit codes

use std::process;

use texpand::cli::{App, Args};

fn main() {
    let args = Args::parse_or_exit();
    let app = App::new(args);

    if let Err(err) = app.run() {
        eprintln!("{err}");
        process::exit(1);
    }
}
