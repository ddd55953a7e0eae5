//! Infrastructure layer: I/O implementations and DI container
//!
//! This layer implements I/O boundary traits and holds the shared services.

pub mod di;
pub mod traits;

pub use di::ServiceContainer;
pub use traits::{Console, MemoryConsole, StdConsole};
