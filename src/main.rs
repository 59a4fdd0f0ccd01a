mod cli;
mod output;

use std::process::ExitCode as StdExitCode;

use tracing_subscriber::EnvFilter;
use xdpms::error::{Error, ExitCode};
use xdpms::{Dpms, DpmsBackend};

/// Environment variable holding the log filter, e.g. `XDPMS_LOG=debug`
const LOG_ENV: &str = "XDPMS_LOG";

fn main() -> StdExitCode {
    // Parse CLI arguments - clap handles usage errors and exits with code 2 (default clap behavior)
    let invocation = cli::parse();

    init_logging(invocation.verbose);

    match run(invocation) {
        Ok(()) => ExitCode::Success.into(),
        Err(e) => {
            // All errors go to stderr
            eprintln!("Error: {}", e);
            e.exit_code().into()
        }
    }
}

/// Install the stderr log subscriber; `-v` wins over `XDPMS_LOG`
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("xdpms=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Execute a command on an open handle
fn execute_command<B: DpmsBackend>(dpms: &mut Dpms<B>, command: cli::Command) -> Result<(), Error> {
    match command {
        cli::Command::Status { json } => {
            let status = output::Status::collect(dpms)?;
            print!("{}", output::format_status(&status, json));
        }
        cli::Command::Force(level) => dpms.force_level(level)?,
        cli::Command::Enable => dpms.enable()?,
        cli::Command::Disable => dpms.disable()?,
        cli::Command::Timeouts { set, json } => {
            let timeouts = match set {
                Some((standby, suspend, off)) => dpms.set_timeouts(standby, suspend, off)?,
                None => dpms.get_timeouts()?,
            };
            print!("{}", output::format_timeouts(&timeouts, json));
        }
    }
    Ok(())
}

/// Main application logic - opens the display and dispatches the command
fn run(invocation: cli::Invocation) -> Result<(), Error> {
    let mut dpms = Dpms::open(invocation.display.as_deref())?;
    execute_command(&mut dpms, invocation.command)
}
