//! Command contract and descriptors

use async_trait::async_trait;
use oms_domain::{LogFatal, Logger, ParamSpec, StepResult};
use std::sync::Arc;

use crate::system::System;

/// An executable step bound to its parameters
///
/// `execute` reports operational failures (a tool exiting non-zero, a bad
/// path) as a non-zero [`StepResult`]. The only `Err` is [`LogFatal`], the
/// abort signal raised by a fatal log call.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &str;

    async fn execute(&self, system: &System, log: &Logger) -> Result<StepResult, LogFatal>;
}

/// Builds a command from its bound parameter values, in declaration order
pub type CommandEntry = Arc<dyn Fn(Vec<String>) -> Result<Box<dyn Command>, String> + Send + Sync>;

/// Name, parameters and entry point of a command
///
/// A descriptor without an entry point is still a known command; resolving
/// it fails with `CommandNoEntry`.
#[derive(Clone)]
pub struct CommandDescriptor {
    name: String,
    description: String,
    params: Vec<ParamSpec>,
    entry: Option<CommandEntry>,
}

impl CommandDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
            entry: None,
        }
    }

    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_entry<F>(mut self, entry: F) -> Self
    where
        F: Fn(Vec<String>) -> Result<Box<dyn Command>, String> + Send + Sync + 'static,
    {
        self.entry = Some(Arc::new(entry));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn entry(&self) -> Option<&CommandEntry> {
        self.entry.as_ref()
    }

    pub fn has_entry(&self) -> bool {
        self.entry.is_some()
    }
}

impl std::fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("has_entry", &self.has_entry())
            .finish()
    }
}

/// Unpack bound values into a fixed-size array
///
/// Entry points use this to turn the ordered values into named bindings;
/// a count mismatch becomes a construction failure.
pub fn bind_values<const N: usize>(values: Vec<String>) -> Result<[String; N], String> {
    let count = values.len();
    values
        .try_into()
        .map_err(|_| format!("expected {} parameter(s), got {}", N, count))
}
