//! `install` — the default command

use async_trait::async_trait;
use oms_domain::{LogFatal, Logger, StepResult};

use crate::dispatch::{Command, CommandDescriptor};
use crate::system::System;

pub const NAME: &str = "install";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new(NAME, "Prepare the mod workspace")
        .with_entry(|_| Ok(Box::new(InstallCommand) as Box<dyn Command>))
}

pub struct InstallCommand;

#[async_trait]
impl Command for InstallCommand {
    fn name(&self) -> &str {
        NAME
    }

    async fn execute(&self, _system: &System, log: &Logger) -> Result<StepResult, LogFatal> {
        log.info(NAME, "Install complete")?;
        Ok(StepResult::success())
    }
}
