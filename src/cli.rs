use clap::{Args, Parser, Subcommand};
use xdpms::PowerLevel;

/// CLI command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Status { json: bool },
    Force(PowerLevel),
    Enable,
    Disable,
    Timeouts {
        set: Option<(u16, u16, u16)>,
        json: bool,
    },
}

/// Parsed invocation: global options plus the command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub display: Option<String>,
    pub verbose: bool,
    pub command: Command,
}

/// X11 DPMS control tool
#[derive(Parser, Debug)]
#[command(name = "xdpms")]
#[command(about = "Query and control X11 monitor power management (DPMS)", long_about = None)]
struct Cli {
    /// X display to connect to, e.g. ":0" (defaults to $DISPLAY)
    #[arg(long, short = 'd', global = true)]
    display: Option<String>,

    /// Log every DPMS request to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show extension, version, power level and timeouts
    Status {
        /// Output status as JSON
        #[arg(long)]
        json: bool,
    },
    /// Force the monitor on
    On,
    /// Force the monitor into standby
    Standby,
    /// Force the monitor into suspend
    Suspend,
    /// Force the monitor off
    Off,
    /// Enable DPMS
    Enable,
    /// Disable DPMS
    Disable,
    /// Show or set the standby, suspend and off timeouts (seconds)
    Timeouts(TimeoutsArgs),
}

#[derive(Args, Debug)]
struct TimeoutsArgs {
    /// New timeouts as STANDBY SUSPEND OFF; omit to print the current ones
    #[arg(num_args = 3, value_names = ["STANDBY", "SUSPEND", "OFF"])]
    values: Option<Vec<u16>>,

    /// Output timeouts as JSON
    #[arg(long)]
    json: bool,
}

/// Parse command-line arguments and return the Invocation
pub fn parse() -> Invocation {
    let cli = Cli::parse();
    invocation_from_cli(cli)
}

/// Convert the clap tree into the public Invocation
fn invocation_from_cli(cli: Cli) -> Invocation {
    Invocation {
        display: cli.display,
        verbose: cli.verbose,
        command: command_from_commands(cli.command),
    }
}

/// Convert internal Commands enum to public Command enum
fn command_from_commands(cmd: Commands) -> Command {
    match cmd {
        Commands::Status { json } => Command::Status { json },
        Commands::On => Command::Force(PowerLevel::On),
        Commands::Standby => Command::Force(PowerLevel::Standby),
        Commands::Suspend => Command::Force(PowerLevel::Suspend),
        Commands::Off => Command::Force(PowerLevel::Off),
        Commands::Enable => Command::Enable,
        Commands::Disable => Command::Disable,
        Commands::Timeouts(TimeoutsArgs { values, json }) => Command::Timeouts {
            // clap enforces exactly three values when any are given
            set: values.map(|v| (v[0], v[1], v[2])),
            json,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> Invocation {
        invocation_from_cli(Cli::try_parse_from(args).unwrap())
    }

    #[test]
    fn parse_command_status() {
        let inv = parse_from(&["xdpms", "status"]);
        assert_eq!(inv.command, Command::Status { json: false });
        assert_eq!(inv.display, None);
        assert!(!inv.verbose);
    }

    #[test]
    fn parse_command_status_json() {
        let inv = parse_from(&["xdpms", "status", "--json"]);
        assert_eq!(inv.command, Command::Status { json: true });
    }

    #[test]
    fn parse_force_levels() {
        let cases = [
            ("on", PowerLevel::On),
            ("standby", PowerLevel::Standby),
            ("suspend", PowerLevel::Suspend),
            ("off", PowerLevel::Off),
        ];
        for (arg, level) in cases {
            let inv = parse_from(&["xdpms", arg]);
            assert_eq!(inv.command, Command::Force(level), "for '{}'", arg);
        }
    }

    #[test]
    fn parse_enable_disable() {
        assert_eq!(parse_from(&["xdpms", "enable"]).command, Command::Enable);
        assert_eq!(parse_from(&["xdpms", "disable"]).command, Command::Disable);
    }

    #[test]
    fn parse_timeouts_query() {
        let inv = parse_from(&["xdpms", "timeouts"]);
        assert_eq!(
            inv.command,
            Command::Timeouts {
                set: None,
                json: false
            }
        );
    }

    #[test]
    fn parse_timeouts_set() {
        let inv = parse_from(&["xdpms", "timeouts", "60", "120", "300", "--json"]);
        assert_eq!(
            inv.command,
            Command::Timeouts {
                set: Some((60, 120, 300)),
                json: true
            }
        );
    }

    #[test]
    fn parse_timeouts_wrong_arity_fails() {
        assert!(Cli::try_parse_from(["xdpms", "timeouts", "60", "120"]).is_err());
    }

    #[test]
    fn parse_timeouts_out_of_range_fails() {
        assert!(Cli::try_parse_from(["xdpms", "timeouts", "60", "120", "70000"]).is_err());
    }

    #[test]
    fn parse_global_display_and_verbose() {
        let inv = parse_from(&["xdpms", "off", "--display", ":1", "-v"]);
        assert_eq!(inv.display.as_deref(), Some(":1"));
        assert!(inv.verbose);
        assert_eq!(inv.command, Command::Force(PowerLevel::Off));
    }

    #[test]
    fn parse_invalid_command() {
        let result = Cli::try_parse_from(["xdpms", "foo"]);
        assert!(
            result.is_err(),
            "Expected parsing to fail for invalid command"
        );
    }

    #[test]
    fn usage_error_exit_code() {
        // clap reports usage errors with exit code 2
        let result = Cli::try_parse_from(["xdpms", "invalid"]);
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 2, "Usage errors should exit with code 2");
    }
}
