use anyhow::Result;

use sheet_standings::cli::Command;
use sheet_standings::{handle_fetch, handle_serve, handle_summary, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Fetch { source } => handle_fetch(source),
        Command::Summary { source, buckets } => handle_summary(source, *buckets),
    }
}
