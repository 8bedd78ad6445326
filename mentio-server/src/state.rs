//! Application state management

use std::sync::Arc;

use mentio::batch::{BatchExecutor, BatchExecutorConfig};
use mentio::recognizer::Recognizer;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Debug)]
pub struct AppState {
    /// The shared recognizer, loaded once at startup and read-only thereafter
    pub recognizer: Arc<dyn Recognizer>,

    /// Batch executor wrapping the recognizer
    pub executor: BatchExecutor,

    /// Server configuration
    pub config: ServerConfig,
}

impl AppState {
    /// Create new application state around a recognizer.
    ///
    /// The recognizer is passed in explicitly so tests can substitute a
    /// deterministic fake.
    pub fn new(recognizer: Arc<dyn Recognizer>, config: ServerConfig) -> Self {
        let executor = BatchExecutor::new(
            Arc::clone(&recognizer),
            BatchExecutorConfig {
                max_batch_size: config.max_batch_size,
                max_concurrency: config.max_concurrency,
            },
        );

        Self {
            recognizer,
            executor,
            config,
        }
    }
}
