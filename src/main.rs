//! msm-scaffold command-line entry point.
//!
//! Parses arguments, runs the selected command, and turns any error into a
//! colored message with a suggestion. Exits with status 1 on failure.

use clap::Parser;
use msm_scaffold::cli;
use msm_scaffold::core::user_friendly_error;

fn main() {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    if let Err(e) = cli.execute() {
        let error_ctx = user_friendly_error(e);
        error_ctx.display();
        std::process::exit(1);
    }
}
