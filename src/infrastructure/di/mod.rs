//! Dependency injection: explicit, type-keyed service container

mod service_container;

pub use service_container::ServiceContainer;
