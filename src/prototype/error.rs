//! Error types for the prototype registry.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PrototypeError {
    /// No template was registered under this name.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
}
