//! Errors surfaced by the showcase run.

use crate::prototype::PrototypeError;
use crate::user_factory::UserError;
use thiserror::Error;

/// Everything that can stop [`PatternShowcase::run`](super::PatternShowcase::run).
#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Prototype(#[from] PrototypeError),

    /// Writing demo output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
