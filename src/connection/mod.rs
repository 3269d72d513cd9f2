//! Shared connection handed out by a [`ConnectionRegistry`].
//!
//! The registry is an ordinary value. The composition root
//! ([`PatternShowcase`](crate::lifecycle::PatternShowcase)) owns exactly one and lends it
//! out by reference, so there is no hidden global.

pub mod registry;

pub use registry::*;

use std::io::{self, Write};
use tracing::debug;

/// A connection-like resource. It carries no state beyond its existence.
#[derive(Debug)]
pub struct Connection {
    _private: (),
}

impl Connection {
    pub(crate) fn open() -> Self {
        Self { _private: () }
    }

    /// Writes the informational connect line. Has no other effect.
    pub fn connect(&self, out: &mut dyn Write) -> io::Result<()> {
        debug!("connect called");
        writeln!(out, "[BD] Conectado a la base de datos.")
    }
}
