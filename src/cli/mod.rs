use crate::check::{check_blueprint, check_lines};
use crate::error::Result;
use clap::{Arg, ArgAction, Command};
use log::info;
use std::path::PathBuf;

/// Command line arguments for the blueprint checker
#[derive(Debug)]
pub struct Args {
    /// Path to blueprint.json or to the directory holding it
    pub path: PathBuf,

    /// Whether to rewrite the blueprint in canonical form
    pub write: bool,

    /// Standalone dependency lines to check instead of a file
    pub dependency_lines: Vec<String>,

    /// Standalone KEY=VALUE lines to check instead of a file
    pub env_lines: Vec<String>,
}

/// Builds the clap command
pub fn command() -> Command {
    let mut cmd = Command::new("blueprint-codec")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check and normalize the DEPEND and ENVVAR lines of a blueprint")
        .long_about(
            "Reads a blueprint.json build description, decodes every dependency line \
            and every KEY=VALUE environment variable, and reports each line that does \
            not match the format. Optionally rewrites the file in canonical form.",
        );

    cmd = cmd.arg(
        Arg::new("PATH")
            .help("Path to blueprint.json or to the directory containing it")
            .value_parser(clap::value_parser!(PathBuf))
            .default_value("."),
    );

    cmd = cmd.arg(
        Arg::new("write")
            .long("write")
            .short('w')
            .help("Rewrite the blueprint with canonical DEPEND and ENVVAR lines")
            .long_help(
                "Rewrites every valid dependency and environment line in canonical form \
                and saves the blueprint. Invalid lines are kept verbatim so that no data \
                is lost, and the exit status still reports them.",
            )
            .action(ArgAction::SetTrue),
    );

    cmd = cmd.arg(
        Arg::new("dependency")
            .long("dependency")
            .short('d')
            .help("Check a single dependency line and print its canonical form")
            .action(ArgAction::Append)
            .allow_hyphen_values(true)
            .value_parser(clap::value_parser!(String)),
    );

    cmd = cmd.arg(
        Arg::new("env")
            .long("env")
            .short('e')
            .help("Check a single KEY=VALUE line and print its canonical form")
            .action(ArgAction::Append)
            .value_parser(clap::value_parser!(String)),
    );

    let after_help = "LINE FORMATS:
  - [CATEGORY] NAME [VERSION]
  | [CATEGORY] NAME [VERSION] {EXTRA1} {EXTRA2}
  KEY=VALUE

  CATEGORY is one of PYTHON, LOCAL, PyPI, Apt, DockerHub

EXAMPLES:
# Check the blueprint in the current directory
blueprint-codec .

# Normalize a blueprint in place
blueprint-codec path/to/blueprint.json --write

# Check individual lines
blueprint-codec --dependency '- [PyPI] numpy [1.26.4]' --env 'PATH=/usr/bin'";

    cmd.after_help(after_help)
}

/// Parses the process arguments
pub fn parse_args() -> Args {
    args_from_matches(&command().get_matches())
}

fn args_from_matches(matches: &clap::ArgMatches) -> Args {
    let strings = |id: &str| -> Vec<String> {
        matches
            .get_many::<String>(id)
            .unwrap_or_default()
            .cloned()
            .collect()
    };

    Args {
        path: matches
            .get_one::<PathBuf>("PATH")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(".")),
        write: matches.get_flag("write"),
        dependency_lines: strings("dependency"),
        env_lines: strings("env"),
    }
}

/// Configures and runs the CLI
pub fn run() -> Result<()> {
    execute(&parse_args())
}

/// Execute a check with the provided arguments
pub fn execute(args: &Args) -> Result<()> {
    if !args.dependency_lines.is_empty() || !args.env_lines.is_empty() {
        for line in check_lines(&args.dependency_lines, &args.env_lines)? {
            println!("{}", line);
        }
        return Ok(());
    }

    check_blueprint(&args.path, args.write)?;
    info!("Check completed successfully!");
    Ok(())
}
