//! Built-in commands
//!
//! | Command | Parameters | Tool |
//! |---------|------------|------|
//! | `install` | - | - |
//! | `clone` | `source`, `target` | git |
//! | `build` | `project`, `configuration=Release`, `target=Build` | MSBuild |

pub mod build;
pub mod clone;
pub mod install;

use oms_domain::ConsoleOutput;

use crate::dispatch::CommandDescriptor;

/// Name used when no command is given on the command line
pub const DEFAULT_COMMAND: &str = install::NAME;

/// Descriptors for every built-in command
pub fn builtin_commands() -> Vec<CommandDescriptor> {
    vec![install::descriptor(), clone::descriptor(), build::descriptor()]
}

/// `<prefix>: <first non-empty stream>`, or the exit code if both are empty
fn failure_message(prefix: &str, output: &ConsoleOutput) -> String {
    let detail = [output.stderr.trim(), output.stdout.trim()]
        .into_iter()
        .find(|s| !s.is_empty());

    match detail {
        Some(detail) => format!("{}: {}", prefix, detail),
        None => format!("{} (exit code {})", prefix, output.exit_code),
    }
}
