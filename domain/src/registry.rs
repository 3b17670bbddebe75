//! A name-keyed registry of shared services.
//!
//! Services are registered once while the application starts and the registry is
//! then frozen; lookups afterwards only read. The registry is a plain value that
//! callers pass around (usually inside an `Arc`), never a process global.

use crate::error::{Error, InternalErrorKind};
use log::*;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type ServiceEntry = Box<dyn Any + Send + Sync>;

pub struct ServiceRegistry {
    services: HashMap<String, ServiceEntry>,
}

#[derive(Default)]
pub struct ServiceRegistryBuilder {
    services: HashMap<String, ServiceEntry>,
}

impl ServiceRegistryBuilder {
    /// Registers `service` under `name`. Registering the same name twice keeps
    /// the later service.
    pub fn register<S>(mut self, name: impl Into<String>, service: Arc<S>) -> Self
    where
        S: ?Sized + Send + Sync + 'static,
    {
        let name = name.into();
        if self.services.insert(name.clone(), Box::new(service)).is_some() {
            debug!("Replacing service registered as \"{name}\"");
        }
        self
    }

    pub fn build(self) -> ServiceRegistry {
        debug!("Service registry built with {} services", self.services.len());
        ServiceRegistry {
            services: self.services,
        }
    }
}

impl ServiceRegistry {
    pub fn builder() -> ServiceRegistryBuilder {
        ServiceRegistryBuilder::default()
    }

    /// Returns the service registered under `name`.
    ///
    /// Fails with a resolution error when nothing is registered under `name` or
    /// when the registered service is not an `Arc<S>`.
    pub fn resolve<S>(&self, name: &str) -> Result<Arc<S>, Error>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        let entry = self.services.get(name).ok_or_else(|| {
            warn!("No service registered as \"{name}\"");
            Error::internal(InternalErrorKind::Resolution(name.to_owned()))
        })?;

        (**entry)
            .downcast_ref::<Arc<S>>()
            .map(Arc::clone)
            .ok_or_else(|| {
                warn!("Service registered as \"{name}\" has an unexpected type");
                Error::internal(InternalErrorKind::Resolution(name.to_owned()))
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.services.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ServiceRegistry")
            .field("services", &names)
            .finish()
    }
}
