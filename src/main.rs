// rollguard - main.rs
// Bootstrap runner: parse the CLI, run the guard, and map any fatal
// outcome to a nonzero exit. Process termination lives here, never in
// the guard core.

use clap::Parser;
use std::process::exit;

use rollguard::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();
    exit(cli::run(cli));
}
