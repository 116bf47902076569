//! CLI entry point for the twinspan spanning tree comparison.
//!
//! Parses arguments with clap, runs the requested command, renders the outcome
//! to stdout, and maps failures to a non-zero exit code. Logging is installed
//! first so every later step can emit structured diagnostics.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tracing::{error, field};
use twinspan_cli::{
    cli::{Cli, CliError, render_outcome, run_cli},
    logging::{self, LoggingError},
};

/// Parse CLI arguments, execute the command, render the outcome, and flush the
/// output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let outcome = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_outcome(&outcome, &mut writer).context("failed to render output")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let message = format!("{err:#}");
        let cli_error = err.downcast_ref::<CliError>();
        let code_field = cli_error.map(|failure| field::display(failure.code()));
        let detail_field = cli_error
            .and_then(CliError::detail_code)
            .map(field::display);

        error!(
            error = %message,
            code = code_field,
            detail_code = detail_field,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
