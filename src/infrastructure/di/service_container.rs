//! Service container for dependency injection
//!
//! Command factories receive the container explicitly and pull their own
//! dependencies from it.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::infrastructure::traits::{Console, StdConsole};

/// Container holding the shared services available to command factories.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Terminal abstraction
    pub console: Arc<dyn Console>,

    services: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl ServiceContainer {
    /// Create a new service container writing to the real terminal.
    pub fn new(settings: Settings) -> Self {
        Self::with_console(settings, Arc::new(StdConsole))
    }

    /// Create a service container with a custom console (for testing).
    pub fn with_console(settings: Settings, console: Arc<dyn Console>) -> Self {
        Self {
            settings: Arc::new(settings),
            console,
            services: HashMap::new(),
        }
    }

    /// Register a shared service, replacing any earlier one of the same type.
    pub fn insert<T: Any + Send + Sync>(&mut self, service: Arc<T>) {
        self.services.insert(TypeId::of::<T>(), service);
    }

    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.services
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|service| service.downcast::<T>().ok())
    }

    /// Like [`get`](Self::get), failing when the service was never registered.
    pub fn require<T: Any + Send + Sync>(&self) -> ApplicationResult<Arc<T>> {
        self.get::<T>().ok_or(ApplicationError::MissingService {
            type_name: type_name::<T>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::traits::MemoryConsole;

    #[derive(Debug, PartialEq)]
    struct Greeting(String);

    #[test]
    fn given_inserted_service_when_getting_then_same_instance() {
        let mut container = ServiceContainer::with_console(
            Settings::default(),
            Arc::new(MemoryConsole::default()),
        );
        let greeting = Arc::new(Greeting("hello".into()));
        container.insert(greeting.clone());

        let found = container.require::<Greeting>().unwrap();

        assert!(Arc::ptr_eq(&found, &greeting));
    }

    #[test]
    fn given_missing_service_when_requiring_then_error_names_type() {
        let container = ServiceContainer::new(Settings::default());

        let err = container.require::<Greeting>().unwrap_err();

        assert!(matches!(err, ApplicationError::MissingService { .. }));
        assert!(err.to_string().contains("Greeting"));
        assert!(container.get::<Greeting>().is_none());
    }
}
