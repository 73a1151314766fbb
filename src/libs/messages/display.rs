//! Display implementation for todo2org messages.
//!
//! Converts each [`Message`] variant into the text shown on the terminal.
//! Prefixes such as ✅ or ❌ are added by the `msg_*` macros, not here.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === CONVERSION MESSAGES ===
            Message::ConvertingFile { input, target } => format!("Converting {} to {}", input, target),
            Message::FileConverted { input, output, tasks } => {
                format!("{} -> {} ({} tasks)", input, output, tasks)
            }
            Message::FilePrinted(input) => format!("Printed conversion of {}", input),
            Message::FileConvertFailed { input, error } => format!("Failed to convert {}: {}", input, error),
            Message::ConversionFinished { converted, failed } => {
                format!("Conversion finished: {} converted, {} failed", converted, failed)
            }
            Message::ConversionFailed(failed) => format!("{} file(s) could not be converted", failed),
            Message::SummaryHeader => "Conversion summary".to_string(),

            // === FILE ERRORS ===
            Message::FileReadFailed(path) => format!("Failed to read file {}", path),
            Message::FileWriteFailed(path) => format!("Failed to write file {}", path),
            Message::OutputExists(path) => format!("Output file {} already exists (use --force to overwrite)", path),
            Message::SameInputAndOutput(path) => {
                format!("Input file {} already has the target extension", path)
            }
            Message::ConversionTaskFailed(error) => format!("Conversion task failed: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigLoadFailed(error) => format!("Failed to load configuration, using defaults: {}", error),
        };

        write!(f, "{}", text)
    }
}
