//! Run Command use case.
//!
//! The whole life of one `oms` invocation:
//!
//! 1. Parse the argument tokens into an [`ArgumentStore`]
//! 2. Locate every configured tool into a [`Toolbox`]
//! 3. Resolve the requested command through the [`CommandDispatcher`]
//! 4. Execute it and hand back its [`StepResult`]
//!
//! Any [`SetupError`] along the way is logged with its cause chain and
//! turned into an internal-error result, so the caller always gets a
//! [`StepResult`] back.

use std::sync::Arc;

use oms_domain::{ArgumentStore, Logger, StepResult};
use tracing::{debug, info};

use crate::dispatch::CommandDispatcher;
use crate::error::SetupError;
use crate::ports::process_runner::ProcessRunner;
use crate::ports::tool_locator::ToolLocator;
use crate::system::System;
use crate::tools::Toolbox;

const CATEGORY: &str = "system";

/// Input for the [`RunCommandUseCase`].
#[derive(Debug, Clone)]
pub struct RunCommandInput {
    /// Name of the command to run
    pub command: String,
    /// Raw `key` / `key=value` tokens following the command name
    pub tokens: Vec<String>,
}

impl RunCommandInput {
    pub fn new(command: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            command: command.into(),
            tokens,
        }
    }
}

/// Use case for running a single command.
pub struct RunCommandUseCase {
    dispatcher: Arc<CommandDispatcher>,
    runner: Arc<dyn ProcessRunner>,
    locators: Vec<Box<dyn ToolLocator>>,
}

impl RunCommandUseCase {
    pub fn new(
        dispatcher: Arc<CommandDispatcher>,
        runner: Arc<dyn ProcessRunner>,
        locators: Vec<Box<dyn ToolLocator>>,
    ) -> Self {
        Self {
            dispatcher,
            runner,
            locators,
        }
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    /// Run the command, converting setup failures into an internal error
    pub async fn execute(&self, input: RunCommandInput, log: &Logger) -> StepResult {
        match self.try_execute(input, log).await {
            Ok(result) => result,
            Err(err) => {
                debug!(code = %err.code(), "Setup failed");
                if let Err(fatal) = Self::report(&err, log) {
                    return StepResult::internal_error(fatal.to_string());
                }
                StepResult::internal_error(err.to_string())
            }
        }
    }

    /// Run the command, surfacing setup failures as [`SetupError`]
    pub async fn try_execute(
        &self,
        input: RunCommandInput,
        log: &Logger,
    ) -> Result<StepResult, SetupError> {
        log.info(CATEGORY, "Loading system...")?;
        let arguments = ArgumentStore::parse(&input.tokens)?;
        log.info(CATEGORY, "System ready!")?;

        log.info(CATEGORY, "Loading tools...")?;
        let toolbox =
            Toolbox::load_all(Arc::clone(&self.runner), &log.nested(), &self.locators).await?;
        log.info(CATEGORY, "Tools ready!")?;

        let system = System::new(arguments, toolbox);
        let command = self.dispatcher.resolve(&input.command, system.arguments())?;

        info!(command = command.name(), "Executing command");
        let result = command.execute(&system, log).await?;
        info!(command = command.name(), code = result.code, "Command finished");

        Ok(result)
    }

    fn report(err: &SetupError, log: &Logger) -> Result<(), oms_domain::LogFatal> {
        log.error(CATEGORY, "Failed to execute command:")?;
        let nested = log.nested();
        let mut chain = err.chain().into_iter();
        if let Some(head) = chain.next() {
            nested.error(
                CATEGORY,
                format!("Error code {}: {}", err.code().as_i32(), head),
            )?;
        }
        for cause in chain {
            nested.error(CATEGORY, cause)?;
        }
        Ok(())
    }
}
