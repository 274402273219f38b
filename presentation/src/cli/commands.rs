//! CLI command definitions

use clap::{Parser, ValueEnum};
use oms_domain::LogLevel;
use std::path::PathBuf;

/// How the final result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `Code:` / `Message:` lines through the console log
    #[default]
    Text,
    /// The result serialized as JSON on stdout
    Json,
}

/// CLI arguments for oni-mod-setup
#[derive(Parser, Debug)]
#[command(name = "oms")]
#[command(author, version, about = "Oxygen Not Included mod workspace setup")]
#[command(long_about = r#"
oms locates the external tools a mod workspace needs (git, MSBuild) and runs
one setup command with them.

Arguments after the command name are `key` or `key=value` pairs and are bound
to the command's parameters by name.

Configuration files are loaded from (in priority order):
1. OMS_* environment variables
2. --config <path>     Explicit config file
3. ./oms.toml          Project-level config
4. ~/.config/oms/config.toml   Global config

Example:
  oms
  oms clone source=https://github.com/user/mod.git target=./mods/mod
  oms build project=./mods/mod/Mod.csproj configuration=Debug
"#)]
pub struct Cli {
    /// Command to run (configured default when omitted)
    pub command: Option<String>,

    /// Command arguments: `key` or `key=value`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,

    /// Verbosity of internal diagnostics (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Console log level (debug, verbose, info, warning, error, none)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Output format for the result
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,

    /// List available commands and their parameters, then exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Command to run, falling back to `default`
    pub fn command_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.command.as_deref().unwrap_or(default)
    }

    /// `tracing` filter directive for the `-v` count
    pub fn tracing_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["oms"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(cli.args.is_empty());
        assert_eq!(cli.command_or("install"), "install");
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.tracing_filter(), "warn");
    }

    #[test]
    fn test_command_with_arguments() {
        let cli = Cli::try_parse_from([
            "oms",
            "clone",
            "source=https://example/repo.git",
            "target=/tmp/out",
        ])
        .unwrap();
        assert_eq!(cli.command_or("install"), "clone");
        assert_eq!(
            cli.args,
            vec!["source=https://example/repo.git", "target=/tmp/out"]
        );
    }

    #[test]
    fn test_flags_before_command() {
        let cli = Cli::try_parse_from([
            "oms",
            "-vv",
            "--log-level",
            "warning",
            "-o",
            "json",
            "build",
            "project=Mod.csproj",
        ])
        .unwrap();
        assert_eq!(cli.tracing_filter(), "debug");
        assert_eq!(cli.log_level, Some(LogLevel::Warning));
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.command.as_deref(), Some("build"));
    }

    #[test]
    fn test_hyphenated_values_after_command_are_arguments() {
        let cli = Cli::try_parse_from(["oms", "clone", "source=-weird", "--list"]).unwrap();
        assert!(!cli.list);
        assert_eq!(cli.args, vec!["source=-weird", "--list"]);
    }

    #[test]
    fn test_invalid_log_level() {
        assert!(Cli::try_parse_from(["oms", "--log-level", "loud"]).is_err());
    }
}
