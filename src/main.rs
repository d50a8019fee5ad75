//! Dexview CLI entrypoint

use clap::Parser;

use dexview::cli::Cli;
use dexview::output;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        output::error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}
