use super::Connection;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

/// Whether [`ConnectionRegistry::acquire`] created the connection or handed out the existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Created,
    Reused,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Created => f.write_str("[Singleton] Conexión creada."),
            Provenance::Reused => f.write_str("[Singleton] Conexión reutilizada."),
        }
    }
}

/// Result of [`ConnectionRegistry::acquire`].
#[derive(Debug, Clone)]
pub struct Acquired {
    pub connection: Arc<Connection>,
    pub provenance: Provenance,
}

/// Lazily creates a single [`Connection`] and returns it on every request.
///
/// # Initialization
/// The slot is a [`OnceLock`], so the first call creates the connection exactly once even
/// when the registry is shared between threads. Every later call returns a clone of the
/// same `Arc`.
///
/// # Example
/// ```
/// use creational_patterns::connection::{ConnectionRegistry, Provenance};
/// use std::sync::Arc;
///
/// let registry = ConnectionRegistry::new();
/// let first = registry.acquire();
/// let second = registry.acquire();
///
/// assert_eq!(first.provenance, Provenance::Created);
/// assert_eq!(second.provenance, Provenance::Reused);
/// assert!(Arc::ptr_eq(&first.connection, &second.connection));
/// ```
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    slot: OnceLock<Arc<Connection>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared connection, creating it on the first call.
    pub fn get_instance(&self) -> Arc<Connection> {
        self.acquire().connection
    }

    /// Like [`get_instance`](Self::get_instance), but also reports whether this call created it.
    pub fn acquire(&self) -> Acquired {
        let mut created = false;
        let connection = self.slot.get_or_init(|| {
            created = true;
            Arc::new(Connection::open())
        });

        let provenance = if created {
            info!("Connection created");
            Provenance::Created
        } else {
            debug!("Connection reused");
            Provenance::Reused
        };

        Acquired {
            connection: Arc::clone(connection),
            provenance,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }
}
