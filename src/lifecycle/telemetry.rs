//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** without the module prefix (`with_target(false)`)
//! - **Written to stderr**, so the demo text on stdout is never interleaved with log lines
//!
//! ## What Gets Traced
//!
//! - **Demos**: each of the five demos runs inside its own span (`singleton_demo`,
//!   `factory_demo`, `abstract_factory_demo`, `builder_demo`, `prototype_demo`)
//! - **Connection lifecycle**: creation at `info`, reuse at `debug`
//! - **Factories and builders**: selected kind, family and item count at `debug`
//! - **Rejections**: unknown user discriminators and template names at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Demo output only
//! cargo run
//!
//! # Demo output on stdout, creation events on stderr
//! RUST_LOG=info cargo run
//!
//! # Everything, including reuse and factory selection
//! RUST_LOG=debug cargo run
//!
//! # Filter to one module
//! RUST_LOG=creational_patterns::connection=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` stderr shows the demo spans inline:
//!
//! ```text
//! INFO singleton_demo: Connection created
//! DEBUG singleton_demo: Connection reused
//! DEBUG factory_demo: Creating user kind=cliente
//! DEBUG abstract_factory_demo: Rendering window family="Windows"
//! DEBUG builder_demo: Order built items=2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
