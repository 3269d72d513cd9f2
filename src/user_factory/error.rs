//! Error types for the user factory.

use thiserror::Error;

/// Errors that can occur while creating users.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The discriminator does not name a known user kind.
    #[error("Tipo de usuario inválido: {0}")]
    InvalidArgument(String),
}
