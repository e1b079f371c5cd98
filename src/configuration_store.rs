//! A thread-safe one-shot cache for the resolved [`Configuration`]. The
//! configuration is resolved on first use and kept for the remainder of the
//! process lifetime; there is no invalidation.

use std::sync::{Arc, OnceLock};

use crate::{diagnostics::DiagnosticLogger, Configuration, RawSettings};

/// `ConfigurationStore` memoizes the resolved [`Configuration`].
///
/// The raw settings observed on the first `resolve` call are the ones
/// reflected forever after; later calls return the identical cached `Arc`
/// without re-reading raw settings. Under concurrent first calls the first
/// writer wins.
#[derive(Default)]
pub struct ConfigurationStore {
    configuration: OnceLock<Arc<Configuration>>,
}

impl ConfigurationStore {
    /// Create a new empty configuration store.
    pub fn new() -> Self {
        ConfigurationStore::default()
    }

    /// Resolve the configuration, or return the cached one if resolution has
    /// already happened.
    pub fn resolve(
        &self,
        raw: Option<&RawSettings>,
        diag: &DiagnosticLogger,
    ) -> Arc<Configuration> {
        self.configuration
            .get_or_init(|| Arc::new(Configuration::resolve(raw, diag)))
            .clone()
    }

    /// Currently cached configuration. Returns `None` if nothing has resolved
    /// it yet.
    pub fn get(&self) -> Option<Arc<Configuration>> {
        self.configuration.get().cloned()
    }
}
