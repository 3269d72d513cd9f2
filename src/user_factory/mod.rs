//! Factory Method: builds a [`User`] from a string discriminator.

pub mod error;
pub mod user;

pub use error::*;
pub use user::*;

use tracing::{debug, warn};

/// Maps a discriminator to one of the [`UserKind`] roles.
pub struct UserFactory;

impl UserFactory {
    /// Creates a user from a case-insensitive key: `"cliente"`, `"admin"` or `"operador"`.
    ///
    /// # Errors
    /// Any other key returns [`UserError::InvalidArgument`].
    pub fn create_user(kind: &str) -> Result<Box<dyn User>, UserError> {
        let kind = kind.parse::<UserKind>().inspect_err(|e| {
            warn!(error = %e, "Rejected user discriminator");
        })?;
        Ok(Self::create(kind))
    }

    /// Infallible constructor for an already-parsed kind.
    pub fn create(kind: UserKind) -> Box<dyn User> {
        debug!(%kind, "Creating user");
        match kind {
            UserKind::Client => Box::new(Client),
            UserKind::Admin => Box::new(Admin),
            UserKind::Operator => Box::new(Operator),
        }
    }
}
