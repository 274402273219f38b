//! Console output formatter for command results

use colored::Colorize;
use oms_application::CommandDescriptor;
use oms_domain::StepResult;

/// Formats results and command listings for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// `Code:` line, plus a `Message:` line when there is a message
    pub fn result_lines(result: &StepResult) -> Vec<String> {
        let mut lines = vec![format!("Code: {}", result.code)];
        if let Some(message) = result.message.as_deref().filter(|m| !m.is_empty()) {
            lines.push(format!("Message: {}", message));
        }
        lines
    }

    /// Format as JSON
    pub fn format_json(result: &StepResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the registered commands and their parameters
    pub fn format_commands<'a>(
        descriptors: impl IntoIterator<Item = &'a CommandDescriptor>,
        default_command: &str,
    ) -> String {
        let mut output = format!("{}\n", "Commands:".cyan().bold());

        for descriptor in descriptors {
            let mut heading = format!("  {}", descriptor.name().bold());
            if descriptor.name() == default_command {
                heading.push_str(&format!(" {}", "(default)".dimmed()));
            }
            if !descriptor.has_entry() {
                heading.push_str(&format!(" {}", "(unavailable on this platform)".yellow()));
            }
            output.push_str(&format!("{}\n      {}\n", heading, descriptor.description()));

            for param in descriptor.params() {
                let spec = match &param.default {
                    Some(default) => format!("{}={}", param.name, default),
                    None => format!("{} {}", param.name, "(required)".dimmed()),
                };
                output.push_str(&format!("      {:<28} {}\n", spec, param.description));
            }
        }

        output
    }
}
