//! Tool locators
//!
//! One [`ToolLocator`] per [`ToolKind`]. [`locators_from_config`] turns the
//! `[tools]` configuration into the ordered list the toolbox bootstraps.

mod git;
mod msbuild;

#[cfg(test)]
mod scripted;

pub use git::{GitLocator, parse_version};
pub use msbuild::{MsBuildLocator, parse_registry_output};

use oms_application::ToolLocator;
use oms_domain::ToolKind;

use crate::config::{ConfigValidationError, FileToolsConfig};

/// Build a locator for `kind`, honouring a configured path override
pub fn locator_for(kind: ToolKind, config: &FileToolsConfig) -> Box<dyn ToolLocator> {
    let path = config.path_for(kind);
    match kind {
        ToolKind::Git => Box::new(GitLocator::new(path)),
        ToolKind::MsBuild => Box::new(MsBuildLocator::new(path)),
    }
}

/// Locators for every tool in `tools.load`, in order
pub fn locators_from_config(
    config: &FileToolsConfig,
) -> Result<Vec<Box<dyn ToolLocator>>, ConfigValidationError> {
    Ok(config
        .tool_kinds()?
        .into_iter()
        .map(|kind| locator_for(kind, config))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locators_follow_load_order() {
        let config = FileToolsConfig {
            load: Some(vec!["msbuild".to_string(), "git".to_string()]),
            ..Default::default()
        };

        let kinds: Vec<ToolKind> = locators_from_config(&config)
            .unwrap()
            .iter()
            .map(|l| l.kind())
            .collect();
        assert_eq!(kinds, vec![ToolKind::MsBuild, ToolKind::Git]);
    }

    #[test]
    fn test_default_locators() {
        let locators = locators_from_config(&FileToolsConfig::default()).unwrap();
        assert_eq!(locators[0].kind(), ToolKind::Git);
        assert_eq!(locators.len(), if cfg!(windows) { 2 } else { 1 });
    }

    #[test]
    fn test_unknown_tool_rejected() {
        let config = FileToolsConfig {
            load: Some(vec!["nuget".to_string()]),
            ..Default::default()
        };
        assert!(matches!(
            locators_from_config(&config),
            Err(ConfigValidationError::UnknownTool(ref name)) if name == "nuget"
        ));
    }
}
