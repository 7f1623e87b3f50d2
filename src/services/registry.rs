//! Sealed store of registered capability handles.
//!
//! Hosts accumulate registrations in a [`ServiceRegistryBuilder`] while the
//! process starts up, then call [`ServiceRegistryBuilder::seal`] exactly once.
//! Lookups exist only on the sealed [`ServiceRegistry`], so consumers can
//! never observe the mutable building phase and the sealed store needs no
//! locking. The registry answers raw lookups only; whether absence is fatal
//! is decided by the locator layer.

use crate::services::id::ServiceId;
use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Type-erased handle as stored in the registry.
///
/// Registration wraps the caller's handle (by convention an `Arc` to the
/// service) so one stored value can be cloned out to any number of resolvers.
pub type ServiceEntry = Arc<dyn Any + Send + Sync>;

#[derive(Default)]
/// Accumulates registrations during host startup.
pub struct ServiceRegistryBuilder {
    entries: BTreeMap<ServiceId, Vec<ServiceEntry>>,
}

impl ServiceRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handle under `id`.
    ///
    /// Repeat registrations accumulate in call order: the first one wins for
    /// single-handle lookups and all of them are visible to enumeration.
    pub fn register<S>(&mut self, id: ServiceId, handle: S) -> &mut Self
    where
        S: Clone + Send + Sync + 'static,
    {
        self.entries.entry(id).or_default().push(Arc::new(handle));
        self
    }

    /// Freeze the accumulated registrations into a read-only registry.
    pub fn seal(self) -> ServiceRegistry {
        ServiceRegistry {
            entries: self.entries,
        }
    }
}

/// Read-only capability store for one test session.
///
/// Absence is a normal outcome at this layer and is reported structurally;
/// the registry never re-creates or replaces a handle once sealed, so a
/// resolved capability is the same instance for the lifetime of the session.
pub struct ServiceRegistry {
    entries: BTreeMap<ServiceId, Vec<ServiceEntry>>,
}

impl ServiceRegistry {
    /// First-registered handle for `id`, if any.
    pub fn lookup(&self, id: ServiceId) -> Option<&ServiceEntry> {
        self.entries.get(&id).and_then(|handles| handles.first())
    }

    /// Every handle registered under `id`, in registration order.
    pub fn lookup_all(&self, id: ServiceId) -> &[ServiceEntry] {
        self.entries
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Identifiers with at least one registration, in stable order.
    pub fn ids(&self) -> impl Iterator<Item = ServiceId> + '_ {
        self.entries.keys().copied()
    }

    /// Number of identifiers with at least one registration.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
