//! Runs the five creational pattern demos in order and prints them to stdout.
//!
//! An invalid user kind makes [`PatternShowcase::run`] fail. The error is returned
//! from `main` and the process exits with a non-zero status.

use creational_patterns::lifecycle::{setup_tracing, PatternShowcase, ShowcaseConfig, ShowcaseError};
use std::io::Write;
use tracing::{error, info};

fn main() -> Result<(), ShowcaseError> {
    setup_tracing();

    let showcase = PatternShowcase::new(ShowcaseConfig::default());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = showcase.run(&mut out) {
        error!(error = %e, "Showcase failed");
        return Err(e);
    }
    out.flush()?;

    info!("Application completed successfully");
    Ok(())
}
