//! Run context handed to every command

use oms_domain::ArgumentStore;

use crate::tools::Toolbox;

/// Everything a command may read while it executes
///
/// Built once after bootstrap and passed by reference; nothing in it changes
/// for the rest of the run.
#[derive(Debug)]
pub struct System {
    arguments: ArgumentStore,
    toolbox: Toolbox,
}

impl System {
    pub fn new(arguments: ArgumentStore, toolbox: Toolbox) -> Self {
        Self { arguments, toolbox }
    }

    pub fn arguments(&self) -> &ArgumentStore {
        &self.arguments
    }

    pub fn toolbox(&self) -> &Toolbox {
        &self.toolbox
    }
}
