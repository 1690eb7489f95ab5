//! Command-line interface for the `skillgap` application.
//!
//! The default subcommand launches the interactive dashboard; the rest
//! print the same data for scripted use, as text or JSON.

mod cli;
mod commands;
mod config;

fn main() -> anyhow::Result<()> {
    commands::run()
}
