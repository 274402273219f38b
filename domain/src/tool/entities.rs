//! Tool domain entities

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Kind of external tool the orchestrator knows how to locate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// Version-control client
    Git,
    /// Build invoker
    MsBuild,
}

impl ToolKind {
    /// Display name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Git => "git",
            ToolKind::MsBuild => "MSBuild",
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "git" => Ok(ToolKind::Git),
            "msbuild" => Ok(ToolKind::MsBuild),
            other => Err(format!("Unknown tool: {}", other)),
        }
    }
}

/// Lifecycle state of a tool handle
///
/// ```text
/// Unresolved ──▶ Resolving ──┬──▶ Ready
///                            └──▶ Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolState {
    Unresolved,
    Resolving,
    Ready,
    Failed,
}

/// Handle to an external tool
///
/// Only a `Ready` handle carries a path, and only `Ready` handles end up in
/// the toolbox after bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolHandle {
    kind: ToolKind,
    path: Option<PathBuf>,
    state: ToolState,
}

impl ToolHandle {
    pub fn unresolved(kind: ToolKind) -> Self {
        Self {
            kind,
            path: None,
            state: ToolState::Unresolved,
        }
    }

    pub fn resolving(self) -> Self {
        Self {
            state: ToolState::Resolving,
            ..self
        }
    }

    pub fn ready(self, path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            state: ToolState::Ready,
            ..self
        }
    }

    pub fn failed(self) -> Self {
        Self {
            path: None,
            state: ToolState::Failed,
            ..self
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn state(&self) -> ToolState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == ToolState::Ready
    }
}
