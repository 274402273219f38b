//! Command dispatch
//!
//! Commands are registered explicitly as [`CommandDescriptor`]s; there is no
//! runtime discovery. Adding a command means adding a descriptor to the list
//! passed to [`CommandDispatcher::from_descriptors`].

pub mod command;
pub mod dispatcher;

pub use command::{Command, CommandDescriptor, CommandEntry, bind_values};
pub use dispatcher::CommandDispatcher;
