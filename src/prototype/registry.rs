use super::PrototypeError;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Named templates that are cloned on request.
///
/// Generic over any `T: Clone`; the showcase stores [`LogMessage`](super::LogMessage)s.
#[derive(Debug, Clone)]
pub struct PrototypeRegistry<T: Clone> {
    templates: HashMap<String, T>,
}

impl<T: Clone> Default for PrototypeRegistry<T> {
    fn default() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }
}

impl<T: Clone> PrototypeRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `template` under `name`, returning the one it replaced, if any.
    pub fn register(&mut self, name: impl Into<String>, template: T) -> Option<T> {
        let name = name.into();
        debug!(%name, "Template registered");
        self.templates.insert(name, template)
    }

    /// Returns a fresh copy of the template registered under `name`.
    ///
    /// # Errors
    /// [`PrototypeError::UnknownTemplate`] if nothing is registered under `name`.
    pub fn spawn(&self, name: &str) -> Result<T, PrototypeError> {
        match self.templates.get(name) {
            Some(template) => Ok(template.clone()),
            None => {
                warn!(%name, "Unknown template");
                Err(PrototypeError::UnknownTemplate(name.to_string()))
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_replaces_and_returns_previous() {
        let mut registry = PrototypeRegistry::new();
        assert!(registry.register("greeting", "hola".to_string()).is_none());
        let previous = registry.register("greeting", "buenas".to_string());

        assert_eq!(previous.as_deref(), Some("hola"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.spawn("greeting").unwrap(), "buenas");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut registry = PrototypeRegistry::new();
        registry.register("ERROR", 1u8);

        assert!(registry.contains("ERROR"));
        assert_eq!(
            registry.spawn("error"),
            Err(PrototypeError::UnknownTemplate("error".to_string()))
        );
    }
}
