//! AppRegistry - name -> handler table supplied by the caller.
//!
//! Built during initialization (mutable), then only read while launching.
//! Nothing is global: the registry is passed to `run` explicitly.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::domain::AppName;
use crate::handler::AppHandler;

#[derive(Default, Clone)]
pub struct AppRegistry {
    handlers: HashMap<AppName, Arc<dyn AppHandler>>,
}

/// RegistryError is returned when a registration is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("application '{0}' is already registered")]
    AlreadyRegistered(AppName),

    #[error("application name must not be empty")]
    EmptyName,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under `name`.
    pub fn register<H: AppHandler + 'static>(
        &mut self,
        name: impl Into<AppName>,
        handler: H,
    ) -> Result<(), RegistryError> {
        self.register_arc(name, Arc::new(handler))
    }

    /// Register an already shared handler (the same handler may serve several names).
    pub fn register_arc(
        &mut self,
        name: impl Into<AppName>,
        handler: Arc<dyn AppHandler>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if name.as_str().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.handlers.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        self.handlers.insert(name, handler);
        Ok(())
    }

    /// Builder-style `register`.
    pub fn with<H: AppHandler + 'static>(
        mut self,
        name: impl Into<AppName>,
        handler: H,
    ) -> Result<Self, RegistryError> {
        self.register(name, handler)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn AppHandler>> {
        self.handlers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(AppName::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for AppRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppRegistry")
            .field("names", &self.names())
            .finish()
    }
}
