//! Persistence seam for signed records.

use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

use crate::record::WebSrmRecord;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink unavailable: {0}")]
    Unavailable(String),

    #[error("sink rejected record: {0}")]
    Rejected(String),
}

/// Destination for assembled records: a database, an outbox table, a
/// queue. Persistence is deliberately decoupled from signing; a failed
/// `persist` never forks the chain.
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn persist(&self, record: &WebSrmRecord) -> Result<(), SinkError>;
}

/// In-memory sink for tests and local development.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<WebSrmRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<WebSrmRecord> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn persist(&self, record: &WebSrmRecord) -> Result<(), SinkError> {
        match self.records.lock() {
            Ok(mut guard) => {
                guard.push(record.clone());
                Ok(())
            }
            Err(_) => Err(SinkError::Unavailable("poisoned lock".to_string())),
        }
    }
}
