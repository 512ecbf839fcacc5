use std::sync::RwLock;

use crate::error::ConfigError;
use crate::thresholds::Thresholds;

/// Shared, process-wide holder for the current threshold pair.
///
/// Every screening call reads the pair through [`get`](ThresholdStore::get),
/// which returns both values from one lock acquisition, so concurrent admin
/// updates can never expose a half-applied pair. Invalid updates are rejected
/// before the lock is taken, so the previous configuration stays in effect.
///
/// The store is meant to be wrapped in an `Arc` and injected into whichever
/// components classify scores; it deliberately has no global accessor.
#[derive(Debug)]
pub struct ThresholdStore {
    inner: RwLock<Thresholds>,
}

impl ThresholdStore {
    /// Create a store from a validated pair.
    pub fn new(thresholds: Thresholds) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        Ok(Self {
            inner: RwLock::new(thresholds),
        })
    }

    /// Snapshot the current pair. Always consistent: both values come from
    /// the same locked read.
    pub fn get(&self) -> Thresholds {
        *self
            .inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the pair. Validation happens before the write lock, so a
    /// rejected update never disturbs readers.
    pub fn update(&self, thresholds: Thresholds) -> Result<(), ConfigError> {
        thresholds.validate()?;
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = thresholds;
        Ok(())
    }
}

impl Default for ThresholdStore {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Thresholds::default()),
        }
    }
}
