//! Composition root and process setup.
//!
//! - [`PatternShowcase`] owns the shared pieces (the connection registry, the GUI
//!   factory, the log templates) and runs the five demos in order.
//! - [`ShowcaseConfig`] holds the inputs the demos use.
//! - [`setup_tracing`] installs the logging subscriber.

pub mod config;
pub mod error;
pub mod showcase;
pub mod telemetry;

pub use config::*;
pub use error::*;
pub use showcase::*;
pub use telemetry::*;
