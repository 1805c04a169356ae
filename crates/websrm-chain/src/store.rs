//! Chain-position persistence seam.
//!
//! The last `actu` per device lives with an external persistence layer;
//! this trait models that collaborator. Implementations own the
//! serialization discipline: computations for the same device key must be
//! strictly sequenced or the chain forks.

use std::collections::HashMap;

/// Store for the last chain signature per device key.
pub trait PreviousSignatureStore {
    /// Last persisted `actu` for a device, if any.
    fn get(&self, device_key: &str) -> Option<String>;

    /// Record a newly computed `actu` for a device.
    fn put(&mut self, device_key: &str, actu: String);
}

/// In-memory store for testing and single-process use.
#[derive(Debug, Default)]
pub struct MemorySignatureStore {
    last: HashMap<String, String>,
}

impl MemorySignatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of devices with a recorded chain position.
    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}

impl PreviousSignatureStore for MemorySignatureStore {
    fn get(&self, device_key: &str) -> Option<String> {
        self.last.get(device_key).cloned()
    }

    fn put(&mut self, device_key: &str, actu: String) {
        self.last.insert(device_key.to_string(), actu);
    }
}
