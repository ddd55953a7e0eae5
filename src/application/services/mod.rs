//! Application services
//!
//! The resolution pipeline: registry lookup, argument binding and the
//! resolver that ties them together.

mod binder;
mod registry;
mod resolver;

pub use binder::ArgumentBinder;
pub use registry::{CommandRegistry, RegisteredCommand};
pub use resolver::{CommandResolver, ResolvedCommand};
