//! Memoized lookups.
//!
//! Readers share a read lock on the warm path. A miss takes the write lock,
//! checks again and only then runs the chain, so concurrent cold callers
//! resolve once. Empty values are never stored.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use userhome_platform::ProbeChain;

use crate::error::Result;
use crate::resolver::resolve;

#[derive(Debug)]
pub struct FactCache {
    value: RwLock<Option<String>>,
    enabled: AtomicBool,
}

impl Default for FactCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCache {
    pub fn new() -> Self {
        Self {
            value: RwLock::new(None),
            enabled: AtomicBool::new(true),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Takes effect on the next lookup.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// The stored value, without resolving.
    pub fn get(&self) -> Option<String> {
        self.read().clone()
    }

    pub fn reset(&self) {
        *self.write() = None;
    }

    pub fn get_or_resolve(&self, chain: &ProbeChain) -> Result<String> {
        let enabled = self.is_enabled();

        if enabled {
            if let Some(value) = self.read().as_ref() {
                tracing::trace!(fact = %chain.fact(), "cache hit");
                return Ok(value.clone());
            }
        }

        let mut slot = self.write();
        if enabled {
            if let Some(value) = slot.as_ref() {
                return Ok(value.clone());
            }
        }

        let value = resolve(chain)?;
        if !value.is_empty() {
            *slot = Some(value.clone());
        }
        Ok(value)
    }

    // The guarded value is replaced whole, so a poisoned lock still holds a
    // consistent value.
    fn read(&self) -> RwLockReadGuard<'_, Option<String>> {
        self.value.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<String>> {
        self.value.write().unwrap_or_else(PoisonError::into_inner)
    }
}
