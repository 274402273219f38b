//! Command dispatcher
//!
//! The [`CommandDispatcher`] is an explicit registry of
//! [`CommandDescriptor`]s built at startup. Resolving a name binds the
//! descriptor's parameters from the [`ArgumentStore`] and calls its entry
//! point.
//!
//! # Resolution
//!
//! 1. Look up the descriptor (`CommandNotFound` / `CommandNoEntry`)
//! 2. Bind each parameter in declaration order, falling back to its default
//!    (`CommandMissingParam`)
//! 3. Call the entry point with the bound values (`CommandConstructFailed`)

use std::collections::BTreeMap;

use oms_domain::{ArgumentStore, ParamKind};
use tracing::debug;

use super::command::{Command, CommandDescriptor};
use crate::error::SetupError;

/// Registry mapping command names to descriptors
#[derive(Debug, Default)]
pub struct CommandDispatcher {
    descriptors: BTreeMap<String, CommandDescriptor>,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor
    ///
    /// Rejects duplicate names and parameters declared with a kind other
    /// than string.
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Result<(), SetupError> {
        if self.descriptors.contains_key(descriptor.name()) {
            return Err(SetupError::DuplicateCommand {
                name: descriptor.name().to_string(),
            });
        }

        if let Some(param) = descriptor
            .params()
            .iter()
            .find(|p| p.kind != ParamKind::String)
        {
            return Err(SetupError::CommandBadParam {
                command: descriptor.name().to_string(),
                param: param.name.clone(),
                kind: param.kind,
            });
        }

        debug!(command = descriptor.name(), "Registered command");
        self.descriptors.insert(descriptor.name().to_string(), descriptor);
        Ok(())
    }

    /// Build a dispatcher from a list of descriptors
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = CommandDescriptor>,
    ) -> Result<Self, SetupError> {
        let mut dispatcher = Self::new();
        for descriptor in descriptors {
            dispatcher.register(descriptor)?;
        }
        Ok(dispatcher)
    }

    /// Resolve `name` into a constructed command
    pub fn resolve(
        &self,
        name: &str,
        arguments: &ArgumentStore,
    ) -> Result<Box<dyn Command>, SetupError> {
        let descriptor = self
            .descriptors
            .get(name)
            .ok_or_else(|| SetupError::CommandNotFound {
                name: name.to_string(),
            })?;

        let entry = descriptor.entry().ok_or_else(|| SetupError::CommandNoEntry {
            name: name.to_string(),
        })?;

        let values = Self::bind(descriptor, arguments)?;
        debug!(command = name, ?values, "Bound command parameters");

        entry(values).map_err(|reason| SetupError::CommandConstructFailed {
            command: name.to_string(),
            reason,
        })
    }

    fn bind(
        descriptor: &CommandDescriptor,
        arguments: &ArgumentStore,
    ) -> Result<Vec<String>, SetupError> {
        descriptor
            .params()
            .iter()
            .map(|param| {
                arguments
                    .get(&param.name, param.default.as_deref())
                    .map(str::to_string)
                    .ok_or_else(|| SetupError::CommandMissingParam {
                        command: descriptor.name().to_string(),
                        param: param.name.clone(),
                    })
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.descriptors.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    /// All descriptors, sorted by name
    pub fn descriptors(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.descriptors.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::command::bind_values;
    use crate::system::System;
    use async_trait::async_trait;
    use oms_domain::{LogFatal, Logger, ParamSpec, StepResult};

    struct Echo {
        source: String,
        target: String,
    }

    #[async_trait]
    impl Command for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        async fn execute(&self, _system: &System, _log: &Logger) -> Result<StepResult, LogFatal> {
            Ok(StepResult::success().with_message(format!("{} -> {}", self.source, self.target)))
        }
    }

    fn echo_descriptor() -> CommandDescriptor {
        CommandDescriptor::new("echo", "Echo parameters")
            .with_param(ParamSpec::required("source", "Source"))
            .with_param(ParamSpec::optional("target", "Target", "/tmp/default"))
            .with_entry(|values| {
                let [source, target] = bind_values(values)?;
                if source.is_empty() {
                    return Err("source must not be empty".to_string());
                }
                Ok(Box::new(Echo { source, target }) as Box<dyn Command>)
            })
    }

    fn dispatcher() -> CommandDispatcher {
        CommandDispatcher::from_descriptors([echo_descriptor()]).unwrap()
    }

    fn args(tokens: &[&str]) -> ArgumentStore {
        ArgumentStore::parse(tokens).unwrap()
    }

    #[test]
    fn test_resolve_unknown_command() {
        let err = dispatcher()
            .resolve("nonexistent", &args(&["source=a"]))
            .err()
            .unwrap();
        assert!(matches!(err, SetupError::CommandNotFound { ref name } if name == "nonexistent"));
    }

    #[test]
    fn test_resolve_binds_parameters() {
        let command = dispatcher()
            .resolve("echo", &args(&["source=https://example/repo.git", "target=/tmp/out"]))
            .unwrap();
        assert_eq!(command.name(), "echo");
    }

    #[test]
    fn test_resolve_missing_required_param() {
        let err = dispatcher()
            .resolve("echo", &args(&["target=/tmp/out"]))
            .err()
            .unwrap();
        match err {
            SetupError::CommandMissingParam { command, param } => {
                assert_eq!(command, "echo");
                assert_eq!(param, "source");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_uses_default() {
        assert!(dispatcher().resolve("echo", &args(&["source=a"])).is_ok());
    }

    #[test]
    fn test_unrelated_arguments_are_ignored() {
        assert!(
            dispatcher()
                .resolve("echo", &args(&["source=a", "unused=1", "flag"]))
                .is_ok()
        );
    }

    #[test]
    fn test_construct_failure() {
        let err = dispatcher()
            .resolve("echo", &args(&["source"]))
            .err()
            .unwrap();
        match err {
            SetupError::CommandConstructFailed { command, reason } => {
                assert_eq!(command, "echo");
                assert_eq!(reason, "source must not be empty");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_descriptor_without_entry() {
        let mut dispatcher = dispatcher();
        dispatcher
            .register(CommandDescriptor::new("build", "Build a project"))
            .unwrap();

        let err = dispatcher.resolve("build", &args(&[])).err().unwrap();
        assert!(matches!(err, SetupError::CommandNoEntry { ref name } if name == "build"));
    }

    #[test]
    fn test_register_duplicate_name() {
        let mut dispatcher = dispatcher();
        let err = dispatcher.register(echo_descriptor()).unwrap_err();
        assert!(matches!(err, SetupError::DuplicateCommand { ref name } if name == "echo"));
    }

    #[test]
    fn test_register_rejects_non_string_param() {
        let descriptor = CommandDescriptor::new("count", "Count things").with_param(
            ParamSpec::required("jobs", "Parallel jobs").with_kind(ParamKind::Integer),
        );

        let err = CommandDispatcher::new().register(descriptor).unwrap_err();
        match err {
            SetupError::CommandBadParam {
                command,
                param,
                kind,
            } => {
                assert_eq!(command, "count");
                assert_eq!(param, "jobs");
                assert_eq!(kind, ParamKind::Integer);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_descriptors_sorted() {
        let mut dispatcher = dispatcher();
        dispatcher
            .register(CommandDescriptor::new("alpha", "First"))
            .unwrap();
        let names: Vec<&str> = dispatcher.descriptors().map(|d| d.name()).collect();
        assert_eq!(names, vec!["alpha", "echo"]);
        assert!(dispatcher.contains("alpha"));
        assert!(dispatcher.get("missing").is_none());
    }
}
