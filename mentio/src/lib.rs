//! # Mentio
//!
//! Named entity recognition primitives for batch text processing: a closed
//! label taxonomy, a pluggable [`Recognizer`](recognizer::Recognizer) seam,
//! a deterministic pattern-based recognizer, and a batch executor that fans
//! documents out across bounded concurrent tasks while preserving input
//! order in the results.
//!
//! ## Quick Start
//!
//! ```rust
//! use mentio::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let recognizer: Arc<dyn Recognizer> = Arc::new(PatternRecognizer::new()?);
//!
//!     let mentions = recognizer
//!         .recognize("Paris is the capital of France.")
//!         .await?;
//!     assert!(mentions.iter().any(|m| m.text == "Paris"));
//!
//!     // Batch processing with per-record error isolation
//!     let executor = BatchExecutor::new(recognizer, BatchExecutorConfig::default());
//!     let outcomes = executor
//!         .execute(vec![RawRecord::new(Some("1".into()), Some("Paris".into()))])
//!         .await?;
//!     assert_eq!(outcomes.len(), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! This crate provides the core library functionality; the HTTP surface
//! lives in the separate server crate.

pub mod batch;
pub mod labels;
pub mod recognizer;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::batch::{BatchExecutor, BatchExecutorConfig, Document, RawRecord, RecordOutcome};
    pub use crate::labels::EntityLabel;
    pub use crate::recognizer::{
        EntityMention, PatternRecognizer, Recognizer, RecognizerConfig, group_mentions,
    };
    pub use crate::{MentioError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Mentio operations
#[derive(Debug, thiserror::Error)]
pub enum MentioError {
    /// A record is missing a required field; scoped to that record only
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// The recognizer could not process one document's text; scoped to that record only
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// The recognizer failed to build; fatal at startup
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A batch exceeds the configured maximum size
    #[error("batch size {submitted} exceeds maximum {max_size}")]
    BatchTooLarge {
        /// Number of records submitted
        submitted: usize,
        /// Maximum allowed
        max_size: usize,
    },
}

/// Result type for Mentio operations
pub type Result<T> = std::result::Result<T, MentioError>;
