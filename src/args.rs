use crate::commands::COMMANDS;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Command-line arguments for the bundling tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Path to a TOML configuration file
    pub config: Option<PathBuf>,

    /// Directory relative list-file entries are resolved against
    pub base: Option<PathBuf>,

    /// Name of the command to run
    pub command: String,

    /// Positional arguments handed to the command
    pub args: Vec<String>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Self::from_matches(&command().get_matches())
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            verbose: matches.get_flag("verbose"),
            config: matches.get_one::<String>("config").map(PathBuf::from),
            base: matches.get_one::<String>("base").map(PathBuf::from),
            command: matches
                .get_one::<String>("command")
                .cloned()
                .unwrap_or_default(),
            args: matches
                .get_many::<String>("args")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
        }
    }
}

fn command() -> Command {
    let commands = COMMANDS
        .iter()
        .map(|c| format!("  {:<16} {}\n      {}", c.name, c.about, c.usage))
        .collect::<Vec<_>>()
        .join("\n");

    Command::new("luabundle")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bundle Lua modules and static files, and generate bytecode link shims")
        .after_help(format!("Commands:\n{}", commands))
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable verbose output")
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .env("LUABUNDLE_CONFIG")
                .help("Path to configuration file (default: ./luabundle.toml if present)")
        )
        .arg(
            Arg::new("base")
                .short('b')
                .long("base")
                .value_name("DIR")
                .help("Directory relative list-file entries are resolved against (default: parent of the working directory)")
        )
        .arg(
            Arg::new("command")
                .value_name("COMMAND")
                .required(true)
                .help("Command to run")
        )
        .arg(
            Arg::new("args")
                .value_name("ARGS")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .help("Arguments for the command")
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::from_matches(&command().try_get_matches_from(argv).unwrap())
    }

    #[test]
    fn test_command_and_args() {
        let args = parse(&["luabundle", "make_bundle", "..", "1.0", "out.zip", "list"]);
        assert!(!args.verbose);
        assert_eq!(args.command, "make_bundle");
        assert_eq!(args.args, vec!["..", "1.0", "out.zip", "list"]);
    }

    #[test]
    fn test_flags_before_command() {
        let args = parse(&["luabundle", "-v", "--base", "/src", "hash", "a", "b"]);
        assert!(args.verbose);
        assert_eq!(args.base, Some(PathBuf::from("/src")));
        assert_eq!(args.command, "hash");
        assert_eq!(args.args, vec!["a", "b"]);
    }

    #[test]
    fn test_command_required() {
        assert!(command().try_get_matches_from(["luabundle"]).is_err());
    }
}
