//! loghome CLI - Command-line interface
//!
//! This binary provides a command-line interface to the loghome library.

use clap::{Parser, Subcommand};

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "loghome")]
#[command(version = loghome::VERSION)]
#[command(about = "Bootstrap process-wide logging from a JSON configuration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a logging configuration and show the resolved log path
    Check(commands::check::CheckArgs),
    /// Bootstrap logging and emit sample records on the root and a child logger
    Demo(commands::demo::DemoArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check(args) => commands::check::run(args),
        Command::Demo(args) => commands::demo::run(args),
    };

    if let Err(err) = result {
        err.exit();
    }
}
