use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// A log line made of a fixed template and per-copy details.
///
/// Used as a prototype: keep one instance as the template and `clone()` it for each
/// message. All fields are owned values, so a clone shares nothing with its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    template: String,
    details: Option<String>,
}

impl LogMessage {
    /// Creates a template instance with no details.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            details: None,
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn set_details(&mut self, details: impl Into<String>) {
        self.details = Some(details.into());
    }

    pub fn show(&self, out: &mut dyn Write) -> io::Result<()> {
        match &self.details {
            Some(details) => writeln!(out, "[LOG] {} - {}", self.template, details),
            None => writeln!(out, "[LOG] {}", self.template),
        }
    }
}
