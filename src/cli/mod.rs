// ABOUTME: CLI module for the texpand template expansion tool
// ABOUTME: Exports command line argument handling and main application logic

pub mod app;
pub mod args;

pub use app::App;
pub use args::Args;
