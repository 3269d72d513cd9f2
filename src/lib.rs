//! # Creational Patterns
//!
//! > **Five object-creation patterns, each as a small self-contained component.**
//!
//! The crate shows Singleton, Factory Method, Abstract Factory, Builder and Prototype
//! written the way Rust wants them: owned values instead of globals, enums instead of
//! string switches, traits instead of class hierarchies, and `Clone` and move semantics
//! doing the work that runtime checks do elsewhere.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Singleton ([`connection`])
//! - **Role**: hands out one shared [`Connection`](connection::Connection), created on first use.
//! - **Key items**: [`ConnectionRegistry`](connection::ConnectionRegistry),
//!   [`Provenance`](connection::Provenance).
//! - The registry is a plain value owned by the composition root, not a `static`.
//!
//! ### 2. Factory Method ([`user_factory`])
//! - **Role**: turns a case-insensitive discriminator into a role-bearing [`User`](user_factory::User).
//! - **Key items**: [`UserFactory`](user_factory::UserFactory), [`UserKind`](user_factory::UserKind),
//!   [`UserError`](user_factory::UserError).
//!
//! ### 3. Abstract Factory ([`gui_factory`])
//! - **Role**: produces a button and a menu from the same themed family.
//! - **Key items**: [`GuiFactory`](gui_factory::GuiFactory), [`WindowsFactory`](gui_factory::WindowsFactory).
//!
//! ### 4. Builder ([`order_builder`])
//! - **Role**: assembles an [`Order`](order_builder::Order) through chained calls.
//! - `build()` consumes the builder, so reuse after build does not compile.
//!
//! ### 5. Prototype ([`prototype`])
//! - **Role**: clones a template [`LogMessage`](prototype::LogMessage) into independent copies.
//! - **Key items**: [`PrototypeRegistry`](prototype::PrototypeRegistry) for named templates.
//!
//! ### The Orchestrator ([`lifecycle`])
//! - [`PatternShowcase`](lifecycle::PatternShowcase) owns the shared pieces and runs the
//!   five demos in order. [`setup_tracing`](lifecycle::setup_tracing) installs logging.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### Error Handling
//! Each module that can fail defines its own `thiserror` enum (`UserError`, `PrototypeError`).
//! [`ShowcaseError`](lifecycle::ShowcaseError) gathers them with `#[from]`, so `?` works
//! across the whole run.
//!
//! ### Output vs. Logs
//! Demo text goes to whatever `std::io::Write` the caller passes in. The binary uses
//! stdout. Structured `tracing` events go to stderr.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run
//! cargo test
//! ```

pub mod connection;
pub mod gui_factory;
pub mod lifecycle;
pub mod order_builder;
pub mod prototype;
pub mod user_factory;
