use recstore::api::perform;
use recstore::error::Result;
use std::io::{self, Write};
use tracing::Level;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_normalized();
    init_logging(cli.verbose);

    let args = cli.arguments();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    perform(&args, &mut out)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
