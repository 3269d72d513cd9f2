//! Prototype: duplicate a template and mutate the copies independently.
//!
//! [`LogMessage`] derives `Clone`, and cloning cannot fail. The only failure left is
//! asking a [`PrototypeRegistry`] for a name it does not hold, which returns
//! [`PrototypeError::UnknownTemplate`].

pub mod error;
pub mod log_message;
pub mod registry;

pub use error::*;
pub use log_message::*;
pub use registry::*;
