//! CLI entrypoint for oni-mod-setup
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use oms_application::{CommandDispatcher, RunCommandInput, RunCommandUseCase, builtin_commands};
use oms_domain::{LogFatal, LogLevel, LogSink, Logger, StepResult};
use oms_infrastructure::{
    ConfigLoader, ConsoleSink, FileConfig, SystemProcessRunner, locators_from_config,
};
use oms_presentation::{Cli, ConsoleFormatter, OutputFormat};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Internal diagnostics go to stderr; user-facing output goes through the Logger
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.tracing_filter()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    info!("Starting oni-mod-setup");

    let config = load_config(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!();
        print!("{}", config.to_toml().context("Failed to render configuration")?);
        return Ok(ExitCode::SUCCESS);
    }

    // === Dependency Injection ===
    let dispatcher = Arc::new(CommandDispatcher::from_descriptors(builtin_commands())?);

    if cli.list {
        print!(
            "{}",
            ConsoleFormatter::format_commands(dispatcher.descriptors(), &config.default_command)
        );
        return Ok(ExitCode::SUCCESS);
    }

    let sink: Arc<dyn LogSink> = match cli.output {
        OutputFormat::Text => Arc::new(ConsoleSink::stdout(io::stdout().is_terminal())),
        // Keep stdout clean for the JSON document
        OutputFormat::Json => {
            Arc::new(ConsoleSink::new(io::stderr(), io::stderr().is_terminal()))
        }
    };
    let log = Logger::new(sink, cli.log_level.unwrap_or(config.log.level));

    let runner = Arc::new(SystemProcessRunner::new().with_timeout(config.tools.timeout()));
    let locators = locators_from_config(&config.tools)?;
    let use_case = RunCommandUseCase::new(dispatcher, runner, locators);

    let input = RunCommandInput::new(cli.command_or(&config.default_command), cli.args.clone());
    debug!(command = %input.command, args = ?input.tokens, "Dispatching");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let result = runtime.block_on(use_case.execute(input, &log));

    report(cli.output, &log, &result)?;
    Ok(ExitCode::from(exit_status(result.code)))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Print the final result; the text report ignores the configured log level
fn report(output: OutputFormat, log: &Logger, result: &StepResult) -> Result<(), LogFatal> {
    match output {
        OutputFormat::Text => {
            let log = log.with_threshold(LogLevel::Info);
            for line in ConsoleFormatter::result_lines(result) {
                log.info("system", line)?;
            }
        }
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(result)),
    }
    Ok(())
}

/// Result codes in `0..=255` pass through; anything else is a plain failure
fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
