//! Capability container wiring.
//!
//! This module holds the resolution core: the closed identifier set, the
//! sealed registry hosts populate at startup, and the locator layer that
//! turns raw lookups into the fail-fast contract the rest of the host
//! depends on. Consumers use the façades in [`locator`]; the registry itself
//! is only touched by wiring code.

pub mod error;
pub mod id;
pub mod locator;
pub mod registry;

pub use error::ServiceError;
pub use id::ServiceId;
pub use locator::{ExtensionServices, PlatformServices, ServiceLocator};
pub use registry::{ServiceEntry, ServiceRegistry, ServiceRegistryBuilder};
